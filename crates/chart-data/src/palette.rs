// File: crates/chart-data/src/palette.rs
// Summary: Fixed dataset palette and CSS colour strings.

use std::fmt;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self { Self { r, g, b } }

    /// `rgba(r, g, b, a)` form used for dataset fills.
    pub fn css_alpha(&self, alpha: f32) -> String {
        format!("rgba({}, {}, {}, {})", self.r, self.g, self.b, alpha)
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "rgb({}, {}, {})", self.r, self.g, self.b)
    }
}

pub const CHART_COLORS: [Rgb; 7] = [
    Rgb::new(255, 99, 132),  // red
    Rgb::new(255, 159, 64),  // orange
    Rgb::new(255, 205, 86),  // yellow
    Rgb::new(75, 192, 192),  // green
    Rgb::new(54, 162, 235),  // blue
    Rgb::new(153, 102, 255), // purple
    Rgb::new(201, 203, 207), // gray
];

/// Alpha of the dataset background relative to its border colour.
pub const BACKGROUND_ALPHA: f32 = 0.5;

/// Colour for the `index`-th dataset; wraps around after the palette is exhausted.
pub fn color_at(index: usize) -> Rgb {
    CHART_COLORS[index % CHART_COLORS.len()]
}

/// Parse `rgb(r, g, b)` or `rgba(r, g, b, a)`. Returns the colour and alpha in 0..=1.
pub fn parse_css(s: &str) -> Option<(Rgb, f32)> {
    let s = s.trim();
    let (body, with_alpha) = if let Some(rest) = s.strip_prefix("rgba(") {
        (rest, true)
    } else if let Some(rest) = s.strip_prefix("rgb(") {
        (rest, false)
    } else {
        return None;
    };
    let parts: Vec<&str> = body.strip_suffix(')')?.split(',').map(str::trim).collect();
    let expected = if with_alpha { 4 } else { 3 };
    if parts.len() != expected {
        return None;
    }
    let channel = |p: &str| p.parse::<u8>().ok();
    let rgb = Rgb::new(channel(parts[0])?, channel(parts[1])?, channel(parts[2])?);
    let alpha = if with_alpha { parts[3].parse::<f32>().ok()?.clamp(0.0, 1.0) } else { 1.0 };
    Some((rgb, alpha))
}
