// File: crates/chart-render-skia/src/lib.rs
// Summary: Raster backend for chart-core documents. Color parsing is always available;
//          the Skia renderer is compiled with the `raster` feature.

pub mod color;
#[cfg(feature = "raster")]
mod raster;
#[cfg(feature = "raster")]
mod text;

pub use color::{parse_hex_color, Rgba};
#[cfg(feature = "raster")]
pub use raster::SkiaRenderer;
