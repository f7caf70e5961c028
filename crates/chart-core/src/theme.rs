// File: crates/chart-core/src/theme.rs
// Summary: Light/Dark theming; colors are SVG paint strings (`#rrggbb` / `#rrggbbaa`).

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Theme {
    pub name: &'static str,
    pub background: &'static str,
    pub grid: &'static str,
    pub axis_line: &'static str,
    pub axis_label: &'static str,
    pub line_stroke: &'static str,
    pub area_fill: &'static str,
    pub bar_fill: &'static str,
    pub brush_fill: &'static str,
    pub brush_stroke: &'static str,
    pub brush_slide: &'static str,
    pub brush_grip: &'static str,
    /// Cycled through for sectors and multi-series charts.
    pub palette: [&'static str; 6],
}

impl Theme {
    pub fn dark() -> Self {
        Self {
            name: "dark",
            background: "#121214",
            grid: "#28282d",
            axis_line: "#b4b4be",
            axis_label: "#ebebf5",
            line_stroke: "#40a0ff",
            area_fill: "#40a0ff60",
            bar_fill: "#609cff",
            brush_fill: "#1c1c22",
            brush_stroke: "#8884d8",
            brush_slide: "#8884d840",
            brush_grip: "#ffffff",
            palette: ["#40a0ff", "#28c878", "#dc5050", "#ffe646", "#b07cff", "#ff9f40"],
        }
    }

    pub fn light() -> Self {
        Self {
            name: "light",
            background: "#fafafc",
            grid: "#e6e6eb",
            axis_line: "#3c3c46",
            axis_label: "#14141e",
            line_stroke: "#2078c8",
            area_fill: "#2078c850",
            bar_fill: "#2878c8",
            brush_fill: "#ffffff",
            brush_stroke: "#8884d8",
            brush_slide: "#e5e5f7",
            brush_grip: "#ffffff",
            palette: ["#2078c8", "#14a05a", "#c83c3c", "#d4a017", "#7e57c2", "#ef6c00"],
        }
    }

    /// Palette color for series/slice `index`, wrapping around.
    pub fn color(&self, index: usize) -> &'static str {
        self.palette[index % self.palette.len()]
    }
}

impl Default for Theme {
    fn default() -> Self { Theme::dark() }
}

/// Return a list of built-in theme presets.
pub fn presets() -> Vec<Theme> {
    vec![Theme::dark(), Theme::light()]
}

/// Find a theme by its `name`, falling back to dark.
pub fn find(name: &str) -> Theme {
    for t in presets() { if t.name.eq_ignore_ascii_case(name) { return t; } }
    Theme::dark()
}
