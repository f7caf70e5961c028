// File: crates/chart-core/src/grid.rs
// Summary: Simple grid/tick layout helpers.

use crate::geometry::Rect;
use crate::path::PathBuilder;

pub fn linspace(start: f64, end: f64, steps: usize) -> Vec<f64> {
    if steps < 2 { return vec![start, end]; }
    let step = (end - start) / (steps as f64 - 1.0);
    (0..steps).map(|i| start + step * i as f64).collect()
}

/// One path holding `columns` vertical and `rows` horizontal gridlines across `plot`.
pub fn grid_path(plot: &Rect, columns: usize, rows: usize) -> Option<String> {
    let mut path = PathBuilder::new();
    for x in linspace(plot.x, plot.right(), columns) {
        path.move_to(x, plot.y).line_to(x, plot.bottom());
    }
    for y in linspace(plot.y, plot.bottom(), rows) {
        path.move_to(plot.x, y).line_to(plot.right(), y);
    }
    path.finish()
}
