// File: crates/chart-core/src/types.rs
// Summary: Shared types and constants (document size, paddings, data points).

/// Default document width in pixels.
pub const WIDTH: u32 = 1024;
/// Default document height in pixels.
pub const HEIGHT: u32 = 640;

/// Space reserved around the plot area for axes and labels, in pixels.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Insets {
    pub left: u32,
    pub right: u32,
    pub top: u32,
    pub bottom: u32,
}

impl Insets {
    pub const fn new(left: u32, right: u32, top: u32, bottom: u32) -> Self {
        Self { left, right, top, bottom }
    }

    pub const fn uniform(v: u32) -> Self {
        Self::new(v, v, v, v)
    }
}

impl Default for Insets {
    fn default() -> Self {
        Self::new(72, 24, 24, 56)
    }
}

/// A pixel-space sample, usually produced by applying scales to a datum.
///
/// `value` carries the original data value so hosts can label dots; it plays no
/// part in path synthesis.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
    pub value: Option<f64>,
}

impl Point {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y, value: None }
    }

    pub const fn with_value(mut self, value: f64) -> Self {
        self.value = Some(value);
        self
    }

    /// A point takes part in a curve only when both coordinates are finite.
    /// Zero is an ordinary coordinate.
    #[inline]
    pub fn is_defined(&self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}

impl From<(f64, f64)> for Point {
    fn from((x, y): (f64, f64)) -> Self {
        Self::new(x, y)
    }
}
