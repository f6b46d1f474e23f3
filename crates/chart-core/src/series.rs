// File: crates/chart-core/src/series.rs
// Summary: Drawable line series, converted from a derived dataset.
// Notes:
// - Each point is placed at a category index. Points whose value cannot be drawn on the
//   value axis (text, or non-positive on a log axis) are kept as `None` so the series
//   either spans the gap or breaks there, following the dataset's `span_gaps`.

use chart_data::palette::parse_css;
use chart_data::{Dataset, Point};
use skia_safe as skia;
use tracing::debug;

use crate::axis::ScaleKind;

#[derive(Clone, Debug)]
pub struct LineSeries {
    pub label: String,
    pub stroke: skia::Color,
    pub fill: skia::Color,
    pub stroke_width: f32,
    /// (category index, value); `None` marks a point that cannot be drawn.
    pub points: Vec<Option<(f64, f64)>>,
    pub span_gaps: bool,
}

impl LineSeries {
    pub fn new(label: impl Into<String>, stroke: skia::Color) -> Self {
        Self {
            label: label.into(),
            stroke,
            fill: stroke.with_a(128),
            stroke_width: 2.0,
            points: Vec::new(),
            span_gaps: true,
        }
    }

    pub fn with_points(mut self, points: Vec<(f64, f64)>) -> Self {
        self.points = points.into_iter().map(Some).collect();
        self
    }

    /// Convert a dataset. `position` maps the i-th point to its category index.
    pub fn from_dataset<F>(dataset: &Dataset, kind: ScaleKind, position: F) -> Self
    where
        F: Fn(usize, &Point) -> Option<f64>,
    {
        let stroke = css_color(&dataset.border_color, skia::Color::from_argb(255, 64, 160, 255));
        let fill = css_color(&dataset.background_color, stroke.with_a(128));
        let points: Vec<Option<(f64, f64)>> = dataset
            .data
            .iter()
            .enumerate()
            .map(|(i, p)| {
                let x = position(i, p)?;
                let y = p.y.as_number()?;
                let drawable = y.is_finite() && (kind == ScaleKind::Linear || y > 0.0);
                drawable.then_some((x, y))
            })
            .collect();

        let skipped = points.iter().filter(|p| p.is_none()).count();
        if skipped > 0 {
            debug!(series = %dataset.label, skipped, "points not drawable on the value axis");
        }

        Self {
            label: dataset.label.clone(),
            stroke,
            fill,
            stroke_width: (dataset.border_width.max(1) as f32) * 2.0,
            points,
            span_gaps: dataset.span_gaps,
        }
    }

    pub fn drawable(&self) -> impl Iterator<Item = (f64, f64)> + '_ {
        self.points.iter().flatten().copied()
    }

    /// Consecutive drawable runs; a single run when gaps are spanned.
    pub fn segments(&self) -> Vec<Vec<(f64, f64)>> {
        if self.span_gaps {
            let run: Vec<_> = self.drawable().collect();
            return if run.is_empty() { Vec::new() } else { vec![run] };
        }
        let mut out = Vec::new();
        let mut run = Vec::new();
        for p in &self.points {
            match p {
                Some(xy) => run.push(*xy),
                None if !run.is_empty() => out.push(std::mem::take(&mut run)),
                None => {}
            }
        }
        if !run.is_empty() {
            out.push(run);
        }
        out
    }
}

fn css_color(css: &str, fallback: skia::Color) -> skia::Color {
    match parse_css(css) {
        Some((rgb, alpha)) => {
            skia::Color::from_argb((alpha * 255.0).round() as u8, rgb.r, rgb.g, rgb.b)
        }
        None => fallback,
    }
}
