// File: crates/demo/src/main.rs
// Summary: Demo loads a label/value CSV (or synthesizes one) and writes line, area, bar and donut
//          charts plus a scripted brush drag to target/out.
// Usage:   constellation-demo [data.csv] [--theme dark|light] [--curve linear|monotone|step|stepBefore|stepAfter]
//          Log level via RUST_LOG (default: info).

use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use chart_core::grid::grid_path;
use chart_core::theme::{self, Theme};
use chart_core::{
    area_path, curve_path, AreaBaseline, Axis, Brush, BrushConfig, CurveType, Handle, PathStyle, Point, PointScale,
    PointerTarget, RenderOptions, SectorSpec, SvgDocument,
};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

/// One labelled sample.
#[derive(Clone, Debug)]
struct Sample {
    label: String,
    value: f64,
}

struct Args {
    input: Option<String>,
    theme: Theme,
    curve: CurveType,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let args = parse_args(std::env::args().skip(1))?;
    let samples = match &args.input {
        Some(raw) => {
            let (path, used_alt) = resolve_path(raw)?;
            info!(path = %path.display(), "using input file");
            if used_alt {
                info!("extension swapped between .csv/.cvs");
            }
            load_csv(&path).with_context(|| format!("failed to load CSV '{}'", path.display()))?
        }
        None => synthetic(24),
    };
    if samples.is_empty() {
        anyhow::bail!("no samples loaded; check headers/delimiter.");
    }
    info!(count = samples.len(), theme = args.theme.name, curve = %args.curve, "loaded samples");

    let opts = RenderOptions { theme: args.theme, ..RenderOptions::default() };
    let out_dir = PathBuf::from("target/out");

    write_chart(&line_chart(&opts, &samples, args.curve), &out_dir.join("line.svg"))?;
    write_chart(&area_chart(&opts, &samples, args.curve), &out_dir.join("area.svg"))?;
    write_chart(&bar_chart(&opts, &samples), &out_dir.join("bars.svg"))?;
    write_chart(&donut_chart(&opts, &samples), &out_dir.join("donut.svg"))?;
    write_chart(&brush_demo(&opts, &samples, args.curve)?, &out_dir.join("brush.svg"))?;

    Ok(())
}

fn parse_args(mut it: impl Iterator<Item = String>) -> Result<Args> {
    let mut args = Args { input: None, theme: Theme::default(), curve: CurveType::Monotone };
    while let Some(arg) = it.next() {
        match arg.as_str() {
            "--theme" => {
                let name = it.next().context("--theme needs a value")?;
                args.theme = theme::find(&name);
                if !args.theme.name.eq_ignore_ascii_case(&name) {
                    warn!(%name, "unknown theme, using dark");
                }
            }
            "--curve" => {
                let name = it.next().context("--curve needs a value")?;
                args.curve = name.parse()?;
            }
            _ => args.input = Some(arg),
        }
    }
    Ok(args)
}

/// Write `doc` as SVG and, with the `raster` feature, a PNG next to it.
fn write_chart(doc: &SvgDocument, out: &Path) -> Result<()> {
    doc.write_to(out)?;
    info!(path = %out.display(), "wrote chart");
    #[cfg(feature = "raster")]
    {
        let png = out.with_extension("png");
        chart_render_skia::SkiaRenderer::new().render_to_file(doc, &png)?;
        info!(path = %png.display(), "wrote preview");
    }
    Ok(())
}

/// Pixel points for `samples` laid out across `plot`, left to right.
fn project(opts: &RenderOptions, samples: &[Sample]) -> Vec<Point> {
    let plot = opts.plot_rect();
    let x = PointScale::new(samples.len(), plot.x, plot.right());
    let y = value_axis(samples).scale(plot.bottom(), plot.y);
    samples
        .iter()
        .enumerate()
        .map(|(i, s)| Point::new(x.value(i), y.to_px(s.value)).with_value(s.value))
        .collect()
}

fn value_axis(samples: &[Sample]) -> Axis {
    let fitted = Axis::fit("Value", samples.iter().map(|s| s.value), 0.05);
    // Bars and areas grow from zero.
    Axis::new(fitted.label, fitted.min.min(0.0), fitted.max)
}

fn base_document(opts: &RenderOptions) -> SvgDocument {
    let mut doc = SvgDocument::from_options(opts);
    doc.push_path(grid_path(&opts.plot_rect(), 9, 6), PathStyle::stroke(opts.theme.grid, 1.0));
    doc
}

fn line_chart(opts: &RenderOptions, samples: &[Sample], curve: CurveType) -> SvgDocument {
    let points = project(opts, samples);
    let mut doc = base_document(opts);
    doc.push_path(curve_path(curve, &points), PathStyle::stroke(opts.theme.line_stroke, 2.0));
    doc
}

fn area_chart(opts: &RenderOptions, samples: &[Sample], curve: CurveType) -> SvgDocument {
    let points = project(opts, samples);
    let zero = value_axis(samples).scale(opts.plot_rect().bottom(), opts.plot_rect().y).to_px(0.0);
    let mut doc = base_document(opts);
    doc.push_path(
        area_path(curve, &points, AreaBaseline::Horizontal(zero)),
        PathStyle::fill(opts.theme.area_fill),
    );
    doc.push_path(curve_path(curve, &points), PathStyle::stroke(opts.theme.line_stroke, 1.5));
    doc
}

fn bar_chart(opts: &RenderOptions, samples: &[Sample]) -> SvgDocument {
    let plot = opts.plot_rect();
    let slot = plot.width / samples.len() as f64;
    let y = value_axis(samples).scale(plot.bottom(), plot.y);
    let zero = y.to_px(0.0);

    let mut doc = base_document(opts);
    for (i, s) in samples.iter().enumerate() {
        let top = y.to_px(s.value);
        let x = plot.x + slot * i as f64 + slot * 0.15;
        // Round the corners facing away from the baseline.
        let radius = if top <= zero { [4.0, 4.0, 0.0, 0.0] } else { [0.0, 0.0, 4.0, 4.0] };
        let rect = chart_core::Rect::new(x, top.min(zero), slot * 0.7, (zero - top).abs());
        doc.push_path(rect.path(radius), PathStyle::fill(opts.theme.bar_fill));
    }
    doc
}

fn donut_chart(opts: &RenderOptions, samples: &[Sample]) -> SvgDocument {
    let plot = opts.plot_rect();
    let (cx, cy) = (plot.x + plot.width / 2.0, plot.y + plot.height / 2.0);
    let outer = plot.width.min(plot.height) / 2.0 - 8.0;
    let total: f64 = samples.iter().map(|s| s.value.max(0.0)).sum();

    let mut doc = SvgDocument::from_options(opts);
    if total <= 0.0 {
        warn!("no positive values, donut left empty");
        return doc;
    }
    let mut angle = 90.0;
    for (i, s) in samples.iter().enumerate() {
        let sweep = s.value.max(0.0) / total * 360.0;
        let slice = SectorSpec::new(cx, cy, outer * 0.55, outer, angle, angle - sweep);
        doc.push_path(slice.path(), PathStyle::fill(opts.theme.color(i)).with_stroke(opts.theme.background, 1.0));
        if sweep >= 18.0 {
            let (lx, ly) = slice.mid_point(outer * 0.775);
            doc.push_text(lx, ly, chart_core::brush::LabelAnchor::Start, opts.theme.axis_label, s.label.clone());
        }
        angle -= sweep;
    }
    doc
}

/// Line chart with a brush underneath, driven by a scripted pointer sequence.
fn brush_demo(opts: &RenderOptions, samples: &[Sample], curve: CurveType) -> Result<SvgDocument> {
    let plot = opts.plot_rect();
    let labels: Vec<String> = samples.iter().map(|s| s.label.clone()).collect();
    let config = BrushConfig::new(plot.x, plot.bottom() + 12.0, plot.width, 30.0)
        .with_range(samples.len() / 4, samples.len() * 3 / 4);
    let mut brush = Brush::new(config, labels)?
        .on_change(|range| tracing::debug!(%range, "range changed"));

    // Drag the band right, pull the end handle in, then wander off and let the timeout release it.
    let start = brush.start_x() + 2.0;
    brush.pointer_down(PointerTarget::Slide, start);
    for step in 1..=8 {
        brush.pointer_move(start + step as f64 * 15.0);
    }
    brush.pointer_up();
    info!(range = %brush.range(), "after slide");

    let end = brush.end_x() + 1.0;
    brush.pointer_down(PointerTarget::Handle(Handle::End), end);
    brush.pointer_move(end - plot.width / 6.0);
    let now = Instant::now();
    brush.pointer_leave(now);
    if brush.poll_timeout(now + Duration::from_millis(1200)) {
        info!("drag released by leave timeout");
    }
    brush.hover_enter();
    let (first, last) = brush.labels();
    info!(range = %brush.range(), %first, %last, "final selection");

    let range = brush.range();
    let selected = &samples[range.start_index..=range.end_index];
    let chart_opts = RenderOptions { height: opts.height.saturating_sub(60), ..*opts };
    let mut doc = line_chart(&chart_opts, selected, curve);
    doc.height = opts.height;
    doc.push_brush(&brush, &opts.theme);
    Ok(doc)
}

/// Deterministic wavy series with positive values.
fn synthetic(n: usize) -> Vec<Sample> {
    (0..n)
        .map(|i| {
            let t = i as f64;
            Sample { label: format!("#{}", i + 1), value: 50.0 + (t * 0.45).sin() * 30.0 + (t * 1.7).cos() * 8.0 }
        })
        .collect()
}

/// Resolve path, trying .csv/.cvs swap if needed.
/// Returns (actual_path, used_alt)
fn resolve_path(raw: &str) -> Result<(PathBuf, bool)> {
    let p = Path::new(raw);
    if p.exists() {
        return Ok((p.to_path_buf(), false));
    }
    if let Some(alt) = swap_ext(p) {
        if alt.exists() {
            return Ok((alt, true));
        }
    }
    anyhow::bail!("file not found: {}", p.display());
}

fn swap_ext(p: &Path) -> Option<PathBuf> {
    let mut alt = p.to_path_buf();
    let ext = p.extension()?.to_string_lossy().to_lowercase();
    match ext.as_str() {
        "cvs" => {
            alt.set_extension("csv");
            Some(alt)
        }
        "csv" => {
            alt.set_extension("cvs");
            Some(alt)
        }
        _ => None,
    }
}

/// Load a label/value CSV. Header names are matched case-insensitively; rows whose
/// value does not parse are skipped.
fn load_csv(path: &Path) -> Result<Vec<Sample>> {
    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(true)
        .from_path(path)
        .with_context(|| format!("opening {}", path.display()))?;

    let headers = rdr.headers()?.iter().map(|h| h.trim().to_lowercase()).collect::<Vec<_>>();
    tracing::debug!(?headers, "csv headers");

    let idx = |names: &[&str]| -> Option<usize> { headers.iter().position(|h| names.contains(&h.as_str())) };
    let i_label = idx(&["label", "name", "category", "date", "time"]);
    let i_value = idx(&["value", "y", "close", "amount", "count"]).or(if headers.len() >= 2 { Some(1) } else { None });
    let Some(i_value) = i_value else {
        anyhow::bail!("no value column in {:?}", headers);
    };

    let mut out = Vec::new();
    for (row, rec) in rdr.records().enumerate() {
        let rec = rec?;
        let Some(value) = rec.get(i_value).and_then(|s| s.trim().parse::<f64>().ok()) else {
            warn!(row, "skipping row without a numeric value");
            continue;
        };
        let label = i_label
            .and_then(|i| rec.get(i))
            .map(|s| s.trim().to_string())
            .unwrap_or_else(|| (row + 1).to_string());
        out.push(Sample { label, value });
    }
    Ok(out)
}
