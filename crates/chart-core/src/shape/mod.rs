// File: crates/chart-core/src/shape/mod.rs
// Summary: Parametric shape paths (rounded rectangles, pie/ring sectors).

pub mod rectangle;
pub mod sector;

pub use rectangle::{rectangle_path, CornerRadius};
pub use sector::{sector_path, SectorSpec};
