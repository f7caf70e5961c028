// File: crates/chart-core/src/axis.rs
// Summary: Axis model with label and value range; builds the pixel scale for a plot edge.

use crate::grid::linspace;
use crate::scale::LinearScale;

#[derive(Clone, Debug, PartialEq)]
pub struct Axis {
    pub label: String,
    pub min: f64,
    pub max: f64,
}

impl Axis {
    pub fn new(label: impl Into<String>, min: f64, max: f64) -> Self {
        Self { label: label.into(), min, max }
    }

    /// Axis spanning the finite values of `values`, padded by `margin` (fraction of span).
    /// Falls back to `0..1` when nothing is finite.
    pub fn fit(label: impl Into<String>, values: impl IntoIterator<Item = f64>, margin: f64) -> Self {
        let mut min = f64::INFINITY;
        let mut max = f64::NEG_INFINITY;
        for v in values.into_iter().filter(|v| v.is_finite()) {
            min = min.min(v);
            max = max.max(v);
        }
        if !min.is_finite() || !max.is_finite() {
            return Self::new(label, 0.0, 1.0);
        }
        if (max - min).abs() < 1e-9 { max = min + 1.0; }
        let m = (max - min) * margin;
        Self::new(label, min - m, max + m)
    }

    /// Scale mapping `min..max` onto the pixel range `r0..r1`.
    pub fn scale(&self, r0: f64, r1: f64) -> LinearScale {
        LinearScale::new(self.min, self.max, r0, r1)
    }

    /// Evenly spaced values across the axis, both ends included.
    pub fn ticks(&self, count: usize) -> Vec<f64> {
        linspace(self.min, self.max, count)
    }
}
