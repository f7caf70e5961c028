// File: crates/chart-core/src/scale.rs
// Summary: Data-to-pixel scales: linear values and evenly spaced point positions.

/// Maps a continuous value domain onto a pixel range.
///
/// The range may be inverted (e.g. `bottom..top` for a Y axis).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LinearScale {
    pub d0: f64,
    pub d1: f64,
    pub r0: f64,
    pub r1: f64,
}

impl LinearScale {
    pub fn new(d0: f64, d1: f64, r0: f64, r1: f64) -> Self {
        let mut s = Self { d0, d1, r0, r1 };
        if (s.d1 - s.d0).abs() < 1e-12 { s.d1 = s.d0 + 1.0; }
        s
    }
    #[inline]
    pub fn to_px(&self, v: f64) -> f64 {
        self.r0 + (v - self.d0) / (self.d1 - self.d0) * (self.r1 - self.r0)
    }
    #[inline]
    pub fn from_px(&self, px: f64) -> f64 {
        let span = self.r1 - self.r0;
        if span == 0.0 {
            return self.d0;
        }
        self.d0 + (px - self.r0) / span * (self.d1 - self.d0)
    }
}

/// Places `len` ordinal slots evenly across `[r0, r1]`, first and last on the
/// range ends. A single slot sits at the middle of the range.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PointScale {
    pub len: usize,
    pub r0: f64,
    pub r1: f64,
}

impl PointScale {
    pub fn new(len: usize, r0: f64, r1: f64) -> Self {
        Self { len, r0, r1 }
    }

    /// Distance between neighbouring slots.
    pub fn step(&self) -> f64 {
        (self.r1 - self.r0) / (self.len.saturating_sub(1).max(1)) as f64
    }

    fn origin(&self) -> f64 {
        if self.len == 1 { self.r0 + (self.r1 - self.r0) * 0.5 } else { self.r0 }
    }

    /// Pixel position of slot `index`.
    #[inline]
    pub fn value(&self, index: usize) -> f64 {
        self.origin() + self.step() * index as f64
    }

    pub fn values(&self) -> Vec<f64> {
        (0..self.len).map(|i| self.value(i)).collect()
    }
}
