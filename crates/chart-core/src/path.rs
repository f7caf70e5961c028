// File: crates/chart-core/src/path.rs
// Summary: SVG path description builder shared by shapes and curves.

use std::fmt::{self, Write as _};

/// Formats a coordinate the way SVG path data expects: shortest round-trip
/// decimal, with negative zero written as `0`.
#[derive(Clone, Copy, Debug)]
pub struct Num(pub f64);

impl fmt::Display for Num {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0 == 0.0 {
            f.write_str("0")
        } else {
            write!(f, "{}", self.0)
        }
    }
}

/// Incrementally builds path data (`M`, `L`, `h`, `v`, `A`, `C`, `Z`).
///
/// Commands are written without separating whitespace, e.g. `M0,0L10,5Z`.
#[derive(Clone, Debug, Default)]
pub struct PathBuilder {
    buf: String,
}

impl PathBuilder {
    pub fn new() -> Self { Self::default() }

    pub fn is_empty(&self) -> bool { self.buf.is_empty() }

    pub fn as_str(&self) -> &str { &self.buf }

    pub fn move_to(&mut self, x: f64, y: f64) -> &mut Self {
        self.command('M', &[x, y])
    }

    pub fn line_to(&mut self, x: f64, y: f64) -> &mut Self {
        self.command('L', &[x, y])
    }

    /// Relative horizontal line.
    pub fn horizontal_by(&mut self, dx: f64) -> &mut Self {
        self.command('h', &[dx])
    }

    /// Relative vertical line.
    pub fn vertical_by(&mut self, dy: f64) -> &mut Self {
        self.command('v', &[dy])
    }

    /// Elliptical arc with no x-axis rotation.
    pub fn arc_to(&mut self, rx: f64, ry: f64, large_arc: bool, sweep: bool, x: f64, y: f64) -> &mut Self {
        let _ = write!(
            self.buf,
            "A{},{},0,{},{},{},{}",
            Num(rx),
            Num(ry),
            u8::from(large_arc),
            u8::from(sweep),
            Num(x),
            Num(y)
        );
        self
    }

    pub fn bezier_curve_to(&mut self, x1: f64, y1: f64, x2: f64, y2: f64, x: f64, y: f64) -> &mut Self {
        self.command('C', &[x1, y1, x2, y2, x, y])
    }

    pub fn close(&mut self) -> &mut Self {
        self.buf.push('Z');
        self
    }

    /// Finished path data, or `None` when nothing was drawn.
    pub fn finish(self) -> Option<String> {
        if self.buf.is_empty() { None } else { Some(self.buf) }
    }

    fn command(&mut self, cmd: char, args: &[f64]) -> &mut Self {
        self.buf.push(cmd);
        for (i, v) in args.iter().enumerate() {
            if i > 0 {
                self.buf.push(',');
            }
            let _ = write!(self.buf, "{}", Num(*v));
        }
        self
    }
}

impl fmt::Display for PathBuilder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.buf)
    }
}
