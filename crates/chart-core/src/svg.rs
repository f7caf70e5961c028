// File: crates/chart-core/src/svg.rs
// Summary: SVG document assembly for generated path data, plus file output.
// Notes:
// - Path producers return `Option<String>`; `None` means "draw nothing" and is
//   silently skipped here, never treated as a failure.

use std::fmt;
use std::path::Path;

use anyhow::{Context, Result};
use tracing::debug;

use crate::brush::{Brush, LabelAnchor};
use crate::geometry::Rect;
use crate::path::Num;
use crate::theme::Theme;
use crate::types::{Insets, HEIGHT, WIDTH};

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RenderOptions {
    pub width: u32,
    pub height: u32,
    pub insets: Insets,
    pub theme: Theme,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            width: WIDTH,
            height: HEIGHT,
            insets: Insets::default(),
            theme: Theme::dark(),
        }
    }
}

impl RenderOptions {
    /// Area inside the insets.
    pub fn plot_rect(&self) -> Rect {
        Rect::from_ltrb(
            self.insets.left as f64,
            self.insets.top as f64,
            self.width.saturating_sub(self.insets.right) as f64,
            self.height.saturating_sub(self.insets.bottom) as f64,
        )
    }
}

/// Presentation attributes of a `<path>`.
#[derive(Clone, Debug, PartialEq)]
pub struct PathStyle {
    pub fill: String,
    pub stroke: String,
    pub stroke_width: f64,
    pub stroke_dasharray: Option<String>,
}

impl PathStyle {
    pub fn fill(color: &str) -> Self {
        Self { fill: color.to_string(), stroke: "none".to_string(), stroke_width: 1.0, stroke_dasharray: None }
    }

    pub fn stroke(color: &str, width: f64) -> Self {
        Self { fill: "none".to_string(), stroke: color.to_string(), stroke_width: width, stroke_dasharray: None }
    }

    pub fn with_stroke(mut self, color: &str, width: f64) -> Self {
        self.stroke = color.to_string();
        self.stroke_width = width;
        self
    }

    pub fn dashed(mut self, pattern: &str) -> Self {
        self.stroke_dasharray = Some(pattern.to_string());
        self
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum SvgElement {
    Path { d: String, style: PathStyle },
    Line { x1: f64, y1: f64, x2: f64, y2: f64, stroke: String },
    Text { x: f64, y: f64, anchor: LabelAnchor, fill: String, content: String },
}

#[derive(Clone, Debug, PartialEq)]
pub struct SvgDocument {
    pub width: u32,
    pub height: u32,
    pub background: Option<String>,
    elements: Vec<SvgElement>,
}

impl SvgDocument {
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height, background: None, elements: Vec::new() }
    }

    /// Empty document sized and filled per `opts`.
    pub fn from_options(opts: &RenderOptions) -> Self {
        let mut doc = Self::new(opts.width, opts.height);
        doc.background = Some(opts.theme.background.to_string());
        doc
    }

    pub fn elements(&self) -> &[SvgElement] { &self.elements }

    /// Add a path if there is one. Returns whether anything was added.
    pub fn push_path(&mut self, d: Option<String>, style: PathStyle) -> bool {
        match d {
            Some(d) => {
                self.elements.push(SvgElement::Path { d, style });
                true
            }
            None => false,
        }
    }

    pub fn push_line(&mut self, (x1, y1): (f64, f64), (x2, y2): (f64, f64), stroke: &str) {
        self.elements.push(SvgElement::Line { x1, y1, x2, y2, stroke: stroke.to_string() });
    }

    pub fn push_text(&mut self, x: f64, y: f64, anchor: LabelAnchor, fill: &str, content: impl Into<String>) {
        self.elements.push(SvgElement::Text { x, y, anchor, fill: fill.to_string(), content: content.into() });
    }

    /// Draw `brush` in its current state: track, selected band, handles and,
    /// when visible, the boundary labels.
    pub fn push_brush<T: fmt::Display>(&mut self, brush: &Brush<T>, theme: &Theme) {
        let layout = brush.layout();
        self.push_path(layout.background.path(0.0), PathStyle::fill(theme.brush_fill).with_stroke(theme.brush_stroke, 1.0));
        self.push_path(layout.slide.path(0.0), PathStyle::fill(theme.brush_slide));
        for handle in [layout.start_handle, layout.end_handle] {
            self.push_path(handle.rect.path(0.0), PathStyle::fill(theme.brush_stroke));
            for g in handle.grips {
                self.push_line((g.x1, g.y), (g.x2, g.y), theme.brush_grip);
            }
        }
        if brush.labels_visible() {
            let (first, last) = brush.labels();
            let (sl, el) = (layout.start_label, layout.end_label);
            self.push_text(sl.x, sl.y, sl.anchor, theme.brush_stroke, first.to_string());
            self.push_text(el.x, el.y, el.anchor, theme.brush_stroke, last.to_string());
        }
    }

    pub fn render(&self) -> String {
        self.to_string()
    }

    /// Write the document to `path`, creating parent directories as needed.
    pub fn write_to(&self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("creating {}", parent.display()))?;
        }
        std::fs::write(path, self.render())
            .with_context(|| format!("writing {}", path.display()))?;
        debug!(path = %path.display(), elements = self.elements.len(), "wrote svg");
        Ok(())
    }
}

impl fmt::Display for SvgDocument {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            r#"<svg xmlns="http://www.w3.org/2000/svg" width="{w}" height="{h}" viewBox="0 0 {w} {h}">"#,
            w = self.width,
            h = self.height
        )?;
        if let Some(bg) = &self.background {
            writeln!(f, r#"  <rect width="100%" height="100%" fill="{}"/>"#, escape(bg))?;
        }
        for el in &self.elements {
            match el {
                SvgElement::Path { d, style } => {
                    write!(
                        f,
                        r#"  <path d="{}" fill="{}" stroke="{}" stroke-width="{}""#,
                        d,
                        escape(&style.fill),
                        escape(&style.stroke),
                        Num(style.stroke_width)
                    )?;
                    if let Some(dash) = &style.stroke_dasharray {
                        write!(f, r#" stroke-dasharray="{}""#, escape(dash))?;
                    }
                    writeln!(f, "/>")?;
                }
                SvgElement::Line { x1, y1, x2, y2, stroke } => {
                    writeln!(
                        f,
                        r#"  <line x1="{}" y1="{}" x2="{}" y2="{}" stroke="{}"/>"#,
                        Num(*x1),
                        Num(*y1),
                        Num(*x2),
                        Num(*y2),
                        escape(stroke)
                    )?;
                }
                SvgElement::Text { x, y, anchor, fill, content } => {
                    let anchor = match anchor {
                        LabelAnchor::Start => "start",
                        LabelAnchor::End => "end",
                    };
                    writeln!(
                        f,
                        r#"  <text x="{}" y="{}" dy="5" text-anchor="{}" fill="{}">{}</text>"#,
                        Num(*x),
                        Num(*y),
                        anchor,
                        escape(fill),
                        escape(content)
                    )?;
                }
            }
        }
        f.write_str("</svg>\n")
    }
}

fn escape(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            _ => out.push(c),
        }
    }
    out
}
