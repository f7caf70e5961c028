// File: crates/chart-core/src/shape/rectangle.rs
// Summary: Rectangle path with independently capped per-corner radii.

use crate::geometry::all_finite;
use crate::path::PathBuilder;

/// Corner rounding for [`rectangle_path`].
///
/// `PerCorner` is ordered top-left, top-right, bottom-right, bottom-left.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum CornerRadius {
    Uniform(f64),
    PerCorner([f64; 4]),
}

impl CornerRadius {
    /// Effective radii once capped to `max_radius`, or `None` when the
    /// rectangle should be drawn with square corners.
    fn clamped(&self, max_radius: f64) -> Option<[f64; 4]> {
        if max_radius <= 0.0 {
            return None;
        }
        // NaN radii collapse to 0 through `max`.
        let cap = |r: f64| r.max(0.0).min(max_radius);
        match *self {
            CornerRadius::Uniform(r) if r > 0.0 => Some([cap(r); 4]),
            CornerRadius::Uniform(_) => None,
            CornerRadius::PerCorner(radii) => Some(radii.map(cap)),
        }
    }
}

impl Default for CornerRadius {
    fn default() -> Self { CornerRadius::Uniform(0.0) }
}

impl From<f64> for CornerRadius {
    fn from(r: f64) -> Self { CornerRadius::Uniform(r) }
}

impl From<[f64; 4]> for CornerRadius {
    fn from(radii: [f64; 4]) -> Self { CornerRadius::PerCorner(radii) }
}

/// Path description of a rectangle whose corners are rounded by `radius`.
///
/// Returns `None` when any of `x`, `y`, `width`, `height` is not finite.
/// Each radius is capped to `min(width, height) / 2`; corners with a zero
/// radius are drawn square. Without any usable radius (including zero-sized
/// rectangles) the plain `M x,y h w v h h -w Z` outline is produced.
pub fn rectangle_path(
    x: f64,
    y: f64,
    width: f64,
    height: f64,
    radius: impl Into<CornerRadius>,
) -> Option<String> {
    if !all_finite(&[x, y, width, height]) {
        return None;
    }
    let max_radius = width.min(height) / 2.0;
    let mut path = PathBuilder::new();

    let Some([tl, tr, br, bl]) = radius.into().clamped(max_radius) else {
        path.move_to(x, y)
            .horizontal_by(width)
            .vertical_by(height)
            .horizontal_by(-width)
            .close();
        return path.finish();
    };

    // Clockwise from just below the top-left corner.
    path.move_to(x, y + tl);
    if tl > 0.0 {
        path.arc_to(tl, tl, false, true, x + tl, y);
    }
    path.line_to(x + width - tr, y);
    if tr > 0.0 {
        path.arc_to(tr, tr, false, true, x + width, y + tr);
    }
    path.line_to(x + width, y + height - br);
    if br > 0.0 {
        path.arc_to(br, br, false, true, x + width - br, y + height);
    }
    path.line_to(x + bl, y + height);
    if bl > 0.0 {
        path.arc_to(bl, bl, false, true, x, y + height - bl);
    }
    path.close();
    path.finish()
}
