// File: crates/chart-core/src/shape/sector.rs
// Summary: Annular (ring) and pie sector paths from radii and start/end angles.

use crate::geometry::{all_finite, polar_to_cartesian};
use crate::path::PathBuilder;

/// Angular sector around `(cx, cy)`; angles in degrees, see [`polar_to_cartesian`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SectorSpec {
    pub cx: f64,
    pub cy: f64,
    pub inner_radius: f64,
    pub outer_radius: f64,
    pub start_angle: f64,
    pub end_angle: f64,
}

impl SectorSpec {
    pub const fn new(cx: f64, cy: f64, inner_radius: f64, outer_radius: f64, start_angle: f64, end_angle: f64) -> Self {
        Self { cx, cy, inner_radius, outer_radius, start_angle, end_angle }
    }

    /// A sector with inverted radii or zero sweep has no area.
    pub fn is_empty(&self) -> bool {
        self.outer_radius < self.inner_radius || self.start_angle == self.end_angle
    }

    pub fn path(&self) -> Option<String> {
        sector_path(self.cx, self.cy, self.inner_radius, self.outer_radius, self.start_angle, self.end_angle)
    }

    /// Point on the bisector of the sweep at `radius`, e.g. for a label anchor.
    pub fn mid_point(&self, radius: f64) -> (f64, f64) {
        let mid = (self.start_angle + self.end_angle) / 2.0;
        polar_to_cartesian(self.cx, self.cy, radius, mid)
    }
}

/// Path description of a sector.
///
/// Returns `None` for non-finite input, `outer_radius < inner_radius` or
/// `start_angle == end_angle`. With `inner_radius > 0` the result is a ring
/// slice; otherwise a pie slice closed through the center.
pub fn sector_path(
    cx: f64,
    cy: f64,
    inner_radius: f64,
    outer_radius: f64,
    start_angle: f64,
    end_angle: f64,
) -> Option<String> {
    if !all_finite(&[cx, cy, inner_radius, outer_radius, start_angle, end_angle]) {
        return None;
    }
    if outer_radius < inner_radius || start_angle == end_angle {
        return None;
    }

    let angle = end_angle - start_angle;
    // Arc endpoints must stay distinct on full turns.
    let end_angle = if angle.abs() >= 360.0 { start_angle + 0.9999 * angle } else { end_angle };
    let large_arc = angle.abs() > 180.0;
    let sweep = start_angle > end_angle;

    let (sx, sy) = polar_to_cartesian(cx, cy, outer_radius, start_angle);
    let (ex, ey) = polar_to_cartesian(cx, cy, outer_radius, end_angle);

    let mut path = PathBuilder::new();
    path.move_to(sx, sy)
        .arc_to(outer_radius, outer_radius, large_arc, sweep, ex, ey);

    if inner_radius > 0.0 {
        let (ix, iy) = polar_to_cartesian(cx, cy, inner_radius, end_angle);
        let (jx, jy) = polar_to_cartesian(cx, cy, inner_radius, start_angle);
        path.line_to(ix, iy)
            .arc_to(inner_radius, inner_radius, large_arc, !sweep, jx, jy);
    } else {
        path.line_to(cx, cy);
    }
    path.close();
    path.finish()
}
