// File: crates/chart-core/src/lib.rs
// Summary: Core library entry point; exports path synthesis, curves, brush and SVG assembly.

pub mod axis;
pub mod brush;
pub mod curve;
pub mod error;
pub mod geometry;
pub mod grid;
pub mod path;
pub mod scale;
pub mod shape;
pub mod svg;
pub mod theme;
pub mod types;

pub use axis::Axis;
pub use brush::{index_for_position, Brush, BrushConfig, BrushRange, BrushState, BrushTrack, Handle, PointerTarget};
pub use curve::{area_path, curve_path, AreaBaseline, CurveType};
pub use error::ChartError;
pub use geometry::Rect;
pub use path::PathBuilder;
pub use scale::{LinearScale, PointScale};
pub use shape::{rectangle_path, sector_path, CornerRadius, SectorSpec};
pub use svg::{PathStyle, RenderOptions, SvgDocument, SvgElement};
pub use theme::Theme;
pub use types::Point;
