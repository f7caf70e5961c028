// File: crates/chart-render-skia/src/raster.rs
// Summary: Rasterizes an `SvgDocument` to PNG bytes on a Skia CPU raster surface.
// Notes:
// - Path data is handed to Skia's SVG path parser, so anything chart-core emits
//   draws exactly as a browser would draw the same document.

use std::path::Path;

use anyhow::{anyhow, Context, Result};
use chart_core::{PathStyle, SvgDocument, SvgElement};
use skia_safe as skia;
use tracing::{debug, warn};

use crate::color::{parse_hex_color, Rgba};
use crate::text::TextShaper;

/// Vertical shift applied to labels, matching the `dy` written into SVG text.
const LABEL_DY: f32 = 5.0;

pub struct SkiaRenderer {
    text: TextShaper,
    pub font_size: f32,
}

impl Default for SkiaRenderer {
    fn default() -> Self { Self::new() }
}

impl SkiaRenderer {
    pub fn new() -> Self {
        Self { text: TextShaper::new(), font_size: 12.0 }
    }

    /// Render `doc` to encoded PNG bytes.
    pub fn render_png(&self, doc: &SvgDocument) -> Result<Vec<u8>> {
        let mut surface = skia::surfaces::raster_n32_premul((doc.width as i32, doc.height as i32))
            .ok_or_else(|| anyhow!("failed to create {}x{} raster surface", doc.width, doc.height))?;
        let canvas = surface.canvas();

        let background = doc.background.as_deref().and_then(parse_hex_color).unwrap_or(Rgba::new(0, 0, 0, 0));
        canvas.clear(to_skia(background));

        for el in doc.elements() {
            match el {
                SvgElement::Path { d, style } => draw_path(canvas, d, style),
                SvgElement::Line { x1, y1, x2, y2, stroke } => {
                    if let Some(paint) = stroke_paint(stroke, 1.0) {
                        canvas.draw_line((*x1 as f32, *y1 as f32), (*x2 as f32, *y2 as f32), &paint);
                    }
                }
                SvgElement::Text { x, y, anchor, fill, content } => {
                    if let Some(c) = parse_hex_color(fill) {
                        let baseline = *y as f32 + LABEL_DY;
                        self.text.draw(canvas, content, *x as f32, baseline, *anchor, self.font_size, to_skia(c));
                    }
                }
            }
        }

        let image = surface.image_snapshot();
        #[allow(deprecated)]
        let data = image
            .encode_to_data(skia::EncodedImageFormat::PNG)
            .ok_or_else(|| anyhow!("encode PNG failed"))?;
        debug!(width = doc.width, height = doc.height, bytes = data.as_bytes().len(), "rasterized document");
        Ok(data.as_bytes().to_vec())
    }

    /// Render `doc` and write the PNG to `path`, creating parent directories as needed.
    pub fn render_to_file(&self, doc: &SvgDocument, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        let bytes = self.render_png(doc)?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).with_context(|| format!("creating {}", parent.display()))?;
        }
        std::fs::write(path, bytes).with_context(|| format!("writing {}", path.display()))?;
        Ok(())
    }
}

// ---- helpers ----------------------------------------------------------------

fn to_skia(c: Rgba) -> skia::Color {
    skia::Color::from_argb(c.a, c.r, c.g, c.b)
}

fn draw_path(canvas: &skia::Canvas, d: &str, style: &PathStyle) {
    let Some(path) = skia::Path::from_svg(d) else {
        warn!(d, "unparseable path data skipped");
        return;
    };
    if let Some(c) = parse_hex_color(&style.fill).filter(|c| !c.is_transparent()) {
        let mut fill = skia::Paint::default();
        fill.set_anti_alias(true);
        fill.set_style(skia::paint::Style::Fill);
        fill.set_color(to_skia(c));
        canvas.draw_path(&path, &fill);
    }
    if let Some(mut stroke) = stroke_paint(&style.stroke, style.stroke_width) {
        if let Some(effect) = style.stroke_dasharray.as_deref().and_then(dash_effect) {
            stroke.set_path_effect(effect);
        }
        canvas.draw_path(&path, &stroke);
    }
}

fn stroke_paint(color: &str, width: f64) -> Option<skia::Paint> {
    let c = parse_hex_color(color).filter(|c| !c.is_transparent())?;
    let mut paint = skia::Paint::default();
    paint.set_anti_alias(true);
    paint.set_style(skia::paint::Style::Stroke);
    paint.set_stroke_width(width as f32);
    paint.set_color(to_skia(c));
    Some(paint)
}

/// `stroke-dasharray` as a Skia dash effect; odd-length lists repeat like SVG does.
fn dash_effect(pattern: &str) -> Option<skia::PathEffect> {
    let mut intervals: Vec<f32> = pattern
        .split(|c: char| c == ',' || c.is_whitespace())
        .filter(|s| !s.is_empty())
        .map(|s| s.parse::<f32>().ok())
        .collect::<Option<_>>()?;
    if intervals.is_empty() {
        return None;
    }
    if intervals.len() % 2 == 1 {
        intervals.extend_from_within(..);
    }
    skia::PathEffect::dash(&intervals, 0.0)
}
