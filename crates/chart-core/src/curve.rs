// File: crates/chart-core/src/curve.rs
// Summary: Line and area paths through ordered points (linear, monotone, step variants).
// Notes:
// - Command output matches the d3-shape line/area generators: every run of defined
//   points starts with `M`, a lone point in a line is closed with `Z`, and areas
//   trace their baseline backwards with the same curve before closing.

use std::fmt;
use std::str::FromStr;

use crate::error::ChartError;
use crate::path::PathBuilder;
use crate::types::Point;

/// Interpolation used between consecutive points.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum CurveType {
    #[default]
    Linear,
    /// Monotone cubic in x; never overshoots between samples.
    Monotone,
    /// Elbow halfway between samples.
    Step,
    /// Vertical first, then horizontal.
    StepBefore,
    /// Horizontal first, then vertical.
    StepAfter,
}

impl CurveType {
    pub const ALL: [CurveType; 5] = [
        CurveType::Linear,
        CurveType::Monotone,
        CurveType::Step,
        CurveType::StepBefore,
        CurveType::StepAfter,
    ];

    pub const fn name(self) -> &'static str {
        match self {
            CurveType::Linear => "linear",
            CurveType::Monotone => "monotone",
            CurveType::Step => "step",
            CurveType::StepBefore => "stepBefore",
            CurveType::StepAfter => "stepAfter",
        }
    }

    /// Lenient lookup: unrecognised names fall back to [`CurveType::Linear`].
    pub fn from_name(name: &str) -> Self {
        name.parse().unwrap_or_default()
    }

    fn generator(self) -> Box<dyn CurveGenerator> {
        match self {
            CurveType::Linear => Box::new(Linear::default()),
            CurveType::Monotone => Box::new(Monotone::default()),
            CurveType::Step => Box::new(Step::new(0.5)),
            CurveType::StepBefore => Box::new(Step::new(0.0)),
            CurveType::StepAfter => Box::new(Step::new(1.0)),
        }
    }
}

impl FromStr for CurveType {
    type Err = ChartError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        CurveType::ALL
            .into_iter()
            .find(|c| c.name() == s)
            .ok_or_else(|| ChartError::UnknownCurve(s.to_string()))
    }
}

impl fmt::Display for CurveType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Lower edge of an area.
#[derive(Clone, Copy, Debug)]
pub enum AreaBaseline<'a> {
    /// Horizontal line at this y; each point drops straight down (or up) to it.
    Horizontal(f64),
    /// Vertical line at this x, for areas laid out along the y axis.
    Vertical(f64),
    /// Explicit lower points, matched to the series by index.
    Points(&'a [Point]),
}

impl AreaBaseline<'_> {
    fn base_for(&self, index: usize, top: &Point) -> Option<Point> {
        match *self {
            AreaBaseline::Horizontal(y) => Some(Point::new(top.x, y)),
            AreaBaseline::Vertical(x) => Some(Point::new(x, top.y)),
            AreaBaseline::Points(points) => points.get(index).copied(),
        }
    }
}

/// Path description of a line through `points`.
///
/// Points with a non-finite coordinate are skipped and split the line into
/// separate runs. Returns `None` when no point is defined.
pub fn curve_path(curve: CurveType, points: &[Point]) -> Option<String> {
    let mut gen = curve.generator();
    let mut path = PathBuilder::new();
    let mut in_run = false;

    for p in points {
        let defined = p.is_defined();
        if defined != in_run {
            in_run = defined;
            if defined {
                gen.line_start();
            } else {
                gen.line_end(&mut path);
            }
        }
        if defined {
            gen.point(&mut path, p.x, p.y);
        }
    }
    if in_run {
        gen.line_end(&mut path);
    }
    path.finish()
}

/// Path description of the closed area between the curve through `points` and `baseline`.
///
/// A datum is drawn only when both its top point and its baseline point are
/// finite; anything else splits the area into separate closed pieces.
pub fn area_path(curve: CurveType, points: &[Point], baseline: AreaBaseline<'_>) -> Option<String> {
    let mut gen = curve.generator();
    let mut path = PathBuilder::new();
    let mut lower: Vec<Point> = Vec::new();
    let mut in_run = false;

    for i in 0..=points.len() {
        let datum = points.get(i).and_then(|top| {
            let base = baseline.base_for(i, top)?;
            (top.is_defined() && base.is_defined()).then_some((*top, base))
        });
        let defined = datum.is_some();

        if defined != in_run {
            in_run = defined;
            if defined {
                lower.clear();
                gen.area_start();
                gen.line_start();
            } else {
                gen.line_end(&mut path);
                gen.line_start();
                for b in lower.iter().rev() {
                    gen.point(&mut path, b.x, b.y);
                }
                gen.line_end(&mut path);
                gen.area_end();
            }
        }
        if let Some((top, base)) = datum {
            lower.push(base);
            gen.point(&mut path, top.x, top.y);
        }
    }
    path.finish()
}

// ---- generators -------------------------------------------------------------

/// Which pass of a line/area a generator is drawing.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
enum Pass {
    /// Standalone line.
    #[default]
    Line,
    /// Upper edge of an area, drawn left to right.
    AreaTop,
    /// Lower edge of an area, drawn right to left and joined to the upper edge.
    AreaBase,
}

impl Pass {
    /// The baseline continues the upper edge instead of starting a new subpath.
    fn continues(self) -> bool {
        self == Pass::AreaBase
    }

    fn closes(self, lone_point: bool) -> bool {
        match self {
            Pass::Line => lone_point,
            Pass::AreaTop => false,
            Pass::AreaBase => true,
        }
    }

    fn flip(self) -> Self {
        match self {
            Pass::Line => Pass::Line,
            Pass::AreaTop => Pass::AreaBase,
            Pass::AreaBase => Pass::AreaTop,
        }
    }

    fn start(self, path: &mut PathBuilder, x: f64, y: f64) {
        if self.continues() {
            path.line_to(x, y);
        } else {
            path.move_to(x, y);
        }
    }
}

trait CurveGenerator {
    fn pass_mut(&mut self) -> &mut Pass;

    fn area_start(&mut self) {
        *self.pass_mut() = Pass::AreaTop;
    }

    fn area_end(&mut self) {
        *self.pass_mut() = Pass::Line;
    }

    fn line_start(&mut self);
    fn line_end(&mut self, path: &mut PathBuilder);
    fn point(&mut self, path: &mut PathBuilder, x: f64, y: f64);
}

#[derive(Default)]
struct Linear {
    pass: Pass,
    points: u8,
}

impl CurveGenerator for Linear {
    fn pass_mut(&mut self) -> &mut Pass { &mut self.pass }

    fn line_start(&mut self) {
        self.points = 0;
    }

    fn line_end(&mut self, path: &mut PathBuilder) {
        if self.pass.closes(self.points == 1) {
            path.close();
        }
        self.pass = self.pass.flip();
    }

    fn point(&mut self, path: &mut PathBuilder, x: f64, y: f64) {
        if self.points == 0 {
            self.points = 1;
            self.pass.start(path, x, y);
        } else {
            self.points = 2;
            path.line_to(x, y);
        }
    }
}

/// Step family; `t` is where along each horizontal run the vertical jump sits.
struct Step {
    t: f64,
    pass: Pass,
    points: u8,
    x: f64,
    y: f64,
}

impl Step {
    fn new(t: f64) -> Self {
        Self { t, pass: Pass::Line, points: 0, x: f64::NAN, y: f64::NAN }
    }
}

impl CurveGenerator for Step {
    fn pass_mut(&mut self) -> &mut Pass { &mut self.pass }

    fn line_start(&mut self) {
        self.x = f64::NAN;
        self.y = f64::NAN;
        self.points = 0;
    }

    fn line_end(&mut self, path: &mut PathBuilder) {
        if 0.0 < self.t && self.t < 1.0 && self.points == 2 {
            path.line_to(self.x, self.y);
        }
        if self.pass.closes(self.points == 1) {
            path.close();
        }
        // The way back mirrors the elbow so both edges step at the same x.
        if self.pass != Pass::Line {
            self.t = 1.0 - self.t;
            self.pass = self.pass.flip();
        }
    }

    fn point(&mut self, path: &mut PathBuilder, x: f64, y: f64) {
        if self.points == 0 {
            self.points = 1;
            self.pass.start(path, x, y);
        } else {
            self.points = 2;
            if self.t <= 0.0 {
                path.line_to(self.x, y).line_to(x, y);
            } else {
                let x1 = self.x * (1.0 - self.t) + x * self.t;
                path.line_to(x1, self.y).line_to(x1, y);
            }
        }
        self.x = x;
        self.y = y;
    }
}

/// Monotone cubic interpolation in x with Steffen-limited tangents.
struct Monotone {
    pass: Pass,
    points: u8,
    x0: f64,
    y0: f64,
    x1: f64,
    y1: f64,
    t0: f64,
}

impl Default for Monotone {
    fn default() -> Self {
        Self { pass: Pass::Line, points: 0, x0: f64::NAN, y0: f64::NAN, x1: f64::NAN, y1: f64::NAN, t0: f64::NAN }
    }
}

impl Monotone {
    /// Tangent at (x1, y1) given the next point, limited so the spline cannot overshoot.
    fn slope3(&self, x2: f64, y2: f64) -> f64 {
        let h0 = self.x1 - self.x0;
        let h1 = x2 - self.x1;
        // Zero-width intervals divide by a zero signed like the neighbour.
        let d0 = if h0 != 0.0 { h0 } else if h1 < 0.0 { -0.0 } else { 0.0 };
        let d1 = if h1 != 0.0 { h1 } else if h0 < 0.0 { -0.0 } else { 0.0 };
        let s0 = (self.y1 - self.y0) / d0;
        let s1 = (y2 - self.y1) / d1;
        let p = (s0 * h1 + s1 * h0) / (h0 + h1);
        let m = min_nan(min_nan(s0.abs(), s1.abs()), 0.5 * p.abs());
        let t = (sign(s0) + sign(s1)) * m;
        if t.is_nan() || t == 0.0 { 0.0 } else { t }
    }

    /// One-sided tangent at the last point of a run.
    fn slope2(&self, t: f64) -> f64 {
        let h = self.x1 - self.x0;
        if h != 0.0 && !h.is_nan() { (3.0 * (self.y1 - self.y0) / h - t) / 2.0 } else { t }
    }

    fn hermite(&self, path: &mut PathBuilder, t0: f64, t1: f64) {
        let dx = (self.x1 - self.x0) / 3.0;
        path.bezier_curve_to(
            self.x0 + dx,
            self.y0 + dx * t0,
            self.x1 - dx,
            self.y1 - dx * t1,
            self.x1,
            self.y1,
        );
    }
}

impl CurveGenerator for Monotone {
    fn pass_mut(&mut self) -> &mut Pass { &mut self.pass }

    fn line_start(&mut self) {
        self.x0 = f64::NAN;
        self.x1 = f64::NAN;
        self.y0 = f64::NAN;
        self.y1 = f64::NAN;
        self.t0 = f64::NAN;
        self.points = 0;
    }

    fn line_end(&mut self, path: &mut PathBuilder) {
        match self.points {
            2 => {
                path.line_to(self.x1, self.y1);
            }
            3 => {
                let t1 = self.slope2(self.t0);
                self.hermite(path, self.t0, t1);
            }
            _ => {}
        }
        if self.pass.closes(self.points == 1) {
            path.close();
        }
        self.pass = self.pass.flip();
    }

    fn point(&mut self, path: &mut PathBuilder, x: f64, y: f64) {
        if x == self.x1 && y == self.y1 {
            return;
        }
        let mut t1 = f64::NAN;
        match self.points {
            0 => {
                self.points = 1;
                self.pass.start(path, x, y);
            }
            1 => self.points = 2,
            2 => {
                self.points = 3;
                t1 = self.slope3(x, y);
                let t0 = self.slope2(t1);
                self.hermite(path, t0, t1);
            }
            _ => {
                t1 = self.slope3(x, y);
                self.hermite(path, self.t0, t1);
            }
        }
        self.x0 = self.x1;
        self.x1 = x;
        self.y0 = self.y1;
        self.y1 = y;
        self.t0 = t1;
    }
}

#[inline]
fn sign(v: f64) -> f64 {
    if v < 0.0 { -1.0 } else { 1.0 }
}

/// `min` that propagates NaN instead of ignoring it.
#[inline]
fn min_nan(a: f64, b: f64) -> f64 {
    if a.is_nan() || b.is_nan() { f64::NAN } else { a.min(b) }
}
