// File: crates/chart-core/src/geometry.rs
// Summary: Lightweight geometry helpers for pixel math (rects, polar coordinates, clamping).

use crate::shape::{rectangle_path, CornerRadius};

/// Degrees to radians.
pub const RADIAN: f64 = std::f64::consts::PI / 180.0;

/// Axis-aligned rectangle in pixel space, anchored at its top-left corner.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Rect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    pub const fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self { x, y, width, height }
    }
    pub fn from_ltrb(left: f64, top: f64, right: f64, bottom: f64) -> Self {
        Self { x: left, y: top, width: right - left, height: bottom - top }
    }
    pub fn right(&self) -> f64 { self.x + self.width }
    pub fn bottom(&self) -> f64 { self.y + self.height }

    /// Path description of this rectangle; see [`rectangle_path`].
    pub fn path(&self, radius: impl Into<CornerRadius>) -> Option<String> {
        rectangle_path(self.x, self.y, self.width, self.height, radius)
    }
}

/// Point at `angle` degrees on a circle of `radius` around `(cx, cy)`.
///
/// Screen Y grows downward, so the angle is negated: increasing angles sweep
/// counter-clockwise on screen starting from 3 o'clock.
#[inline]
pub fn polar_to_cartesian(cx: f64, cy: f64, radius: f64, angle: f64) -> (f64, f64) {
    let a = -angle * RADIAN;
    (cx + radius * a.cos(), cy + radius * a.sin())
}

/// Clamp that never panics, unlike `f64::clamp` with `lo > hi`.
#[inline]
pub fn clamp<T: PartialOrd>(v: T, lo: T, hi: T) -> T {
    if v < lo { lo } else if v > hi { hi } else { v }
}

#[inline]
pub(crate) fn all_finite(values: &[f64]) -> bool {
    values.iter().all(|v| v.is_finite())
}
