// File: crates/chart-data/src/builder.rs
// Summary: ChartDataBuilder; turns results plus axis selections into chart-ready labels and datasets.
// Notes:
// - Flat policy: one dataset, labels parallel to points, rows with an undefined axis value dropped.
// - Grouped policy (grouping on and a numeric mode): one dataset per site in first-seen order,
//   labels are the sorted distinct x values. Rows without numeric x and y are dropped.

use std::collections::HashMap;
use std::fmt::Write as _;

use serde::Serialize;
use tracing::{debug, warn};

use crate::analysis::{Analysis, analyze_data};
use crate::field::{DottedPath, FieldAccessor, Scalar};
use crate::mode::Mode;
use crate::palette::{self, BACKGROUND_ALPHA, CHART_COLORS};
use crate::result::BenchmarkResult;

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Point {
    pub x: Scalar,
    pub y: Scalar,
}

impl Point {
    pub fn new(x: impl Into<Scalar>, y: impl Into<Scalar>) -> Self {
        Self { x: x.into(), y: y.into() }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Dataset {
    pub label: String,
    pub background_color: String,
    pub border_color: String,
    pub border_width: u32,
    pub data: Vec<Point>,
    pub span_gaps: bool,
}

impl Dataset {
    /// Dataset styled with the palette entry for `color_index`.
    pub fn styled(label: impl Into<String>, color_index: usize, data: Vec<Point>) -> Self {
        let color = palette::color_at(color_index);
        Self {
            label: label.into(),
            background_color: color.css_alpha(BACKGROUND_ALPHA),
            border_color: color.to_string(),
            border_width: 1,
            data,
            span_gaps: true,
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct ChartData {
    pub labels: Vec<Scalar>,
    pub datasets: Vec<Dataset>,
    /// Points carry their own x (grouped) instead of pairing positionally with `labels`.
    #[serde(skip)]
    pub grouped: bool,
}

impl ChartData {
    pub fn point_count(&self) -> usize {
        self.datasets.iter().map(|d| d.data.len()).sum()
    }

    pub fn is_empty(&self) -> bool { self.point_count() == 0 }
}

pub struct ChartDataBuilder<'a, A: FieldAccessor + ?Sized = DottedPath> {
    accessor: &'a A,
    x_path: &'a str,
    y_path: &'a str,
    mode: Mode,
    grouped: bool,
}

impl<'a> ChartDataBuilder<'a, DottedPath> {
    pub fn new(x_path: &'a str, y_path: &'a str) -> Self {
        Self { accessor: &DottedPath, x_path, y_path, mode: Mode::Simple, grouped: false }
    }
}

impl<'a, A: FieldAccessor + ?Sized> ChartDataBuilder<'a, A> {
    pub fn with_accessor<B: FieldAccessor + ?Sized>(self, accessor: &'a B) -> ChartDataBuilder<'a, B> {
        ChartDataBuilder {
            accessor,
            x_path: self.x_path,
            y_path: self.y_path,
            mode: self.mode,
            grouped: self.grouped,
        }
    }

    pub fn mode(mut self, mode: Mode) -> Self {
        self.mode = mode;
        self
    }

    pub fn grouped(mut self, grouped: bool) -> Self {
        self.grouped = grouped;
        self
    }

    /// Grouping only applies in the numeric modes.
    pub fn uses_grouping(&self) -> bool {
        self.grouped && self.mode.is_numeric()
    }

    pub fn analyze(&self, results: &[BenchmarkResult]) -> Analysis {
        analyze_data(results, self.x_path, self.accessor)
    }

    pub fn build(&self, results: &[BenchmarkResult]) -> ChartData {
        let analysis = self.analyze(results);
        self.build_with(results, &analysis)
    }

    /// Build using a previously computed analysis of the same results.
    pub fn build_with(&self, results: &[BenchmarkResult], analysis: &Analysis) -> ChartData {
        let data = if self.uses_grouping() {
            self.build_grouped(results)
        } else {
            self.build_flat(results, analysis)
        };
        debug!(
            x = self.x_path,
            y = self.y_path,
            mode = %self.mode,
            grouped = data.grouped,
            labels = data.labels.len(),
            datasets = data.datasets.len(),
            "derived chart data"
        );
        data
    }

    fn build_grouped(&self, results: &[BenchmarkResult]) -> ChartData {
        struct SiteGroup {
            name: String,
            points: Vec<Point>,
        }

        let mut groups: Vec<SiteGroup> = Vec::new();
        let mut by_site: HashMap<&str, usize> = HashMap::new();
        let mut xs: Vec<f64> = Vec::with_capacity(results.len());
        let mut dropped = 0usize;

        for result in results {
            let x = self.number_at(result, self.x_path);
            let y = self.number_at(result, self.y_path);
            let (Some(x), Some(y)) = (x, y) else {
                dropped += 1;
                continue;
            };
            // -0.0 and 0.0 share one label
            let x = x + 0.0;
            let slot = *by_site.entry(result.site.id.as_str()).or_insert_with(|| {
                groups.push(SiteGroup { name: result.site.name.clone(), points: Vec::new() });
                groups.len() - 1
            });
            groups[slot].points.push(Point::new(x, y));
            xs.push(x);
        }

        if dropped > 0 {
            debug!(dropped, "grouped: skipped rows without numeric x and y");
        }
        if groups.len() > CHART_COLORS.len() {
            warn!(
                sites = groups.len(),
                palette = CHART_COLORS.len(),
                "more sites than palette colours, colours repeat"
            );
        }

        xs.sort_by(f64::total_cmp);
        xs.dedup();

        ChartData {
            labels: xs.into_iter().map(Scalar::Number).collect(),
            datasets: groups
                .into_iter()
                .enumerate()
                .map(|(i, g)| Dataset::styled(g.name, i, g.points))
                .collect(),
            grouped: true,
        }
    }

    fn build_flat(&self, results: &[BenchmarkResult], analysis: &Analysis) -> ChartData {
        let mut labels = Vec::with_capacity(results.len());
        let mut points = Vec::with_capacity(results.len());

        for result in results {
            let x = self.accessor.fetch_subkey(&result.json, self.x_path);
            let y = self.accessor.fetch_subkey(&result.json, self.y_path);
            let (Some(x), Some(y)) = (x, y) else { continue };

            let mut label = x.to_string();
            if !analysis.same_site {
                let _ = write!(label, " ({})", result.site.name);
            }
            labels.push(Scalar::Text(label));
            points.push(Point { x, y });
        }

        let dropped = results.len() - points.len();
        if dropped > 0 {
            debug!(dropped, "flat: skipped rows with an undefined axis value");
        }

        ChartData {
            labels,
            datasets: vec![Dataset::styled(self.accessor.subkey_name(self.y_path), 0, points)],
            grouped: false,
        }
    }

    fn number_at(&self, result: &BenchmarkResult, path: &str) -> Option<f64> {
        self.accessor.fetch_subkey(&result.json, path).and_then(|v| v.as_number())
    }
}
