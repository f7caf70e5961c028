// File: crates/chart-render-skia/src/text.rs
// Summary: Label shaping with Skia textlayout; anchors text the way SVG `text-anchor` does.

use chart_core::brush::LabelAnchor;
use skia::textlayout::{FontCollection, Paragraph, ParagraphBuilder, ParagraphStyle, TextStyle};
use skia_safe as skia;

pub struct TextShaper {
    fonts: FontCollection,
}

impl TextShaper {
    pub fn new() -> Self {
        let mut fc = FontCollection::new();
        // Use system manager fallback
        fc.set_default_font_manager(skia::FontMgr::default(), None);
        Self { fonts: fc }
    }

    fn layout(&self, text: &str, size: f32, color: skia::Color) -> Paragraph {
        let mut ts = TextStyle::new();
        ts.set_font_size(size.max(1.0));
        ts.set_color(color);
        ts.set_font_families(&["Segoe UI", "Arial", "Helvetica", "Roboto", "DejaVu Sans", "sans-serif"]);

        let pstyle = ParagraphStyle::new();
        let mut builder = ParagraphBuilder::new(&pstyle, &self.fonts);
        builder.push_style(&ts);
        builder.add_text(text);
        let mut paragraph = builder.build();
        paragraph.layout(10_000.0);
        paragraph
    }

    /// Draw `text` with its baseline at `y`, starting or ending at `x` per `anchor`.
    pub fn draw(&self, canvas: &skia::Canvas, text: &str, x: f32, y: f32, anchor: LabelAnchor, size: f32, color: skia::Color) {
        let p = self.layout(text, size, color);
        let left = match anchor {
            LabelAnchor::Start => x,
            LabelAnchor::End => x - p.longest_line(),
        };
        // Paragraph draws from top-left; adjust baseline by glyph height approximation
        p.paint(canvas, (left, y - size * 0.8));
    }
}
