// File: crates/chart-data/src/controls.rs
// Summary: Widget state (mode, grouping, axis paths) and the affordances derived from it.

use crate::analysis::{Analysis, analyze_data};
use crate::builder::ChartDataBuilder;
use crate::error::{Error, Result};
use crate::field::FieldAccessor;
use crate::mode::Mode;
use crate::options::{ChartOptions, LineChartSpec};
use crate::result::BenchmarkResult;

/// Owned by the caller and re-derived into a chart on every change.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct LineChartControls {
    pub mode: Mode,
    pub grouped: bool,
    pub x_path: String,
    pub y_path: String,
}

impl LineChartControls {
    pub fn new() -> Self { Self::default() }

    pub fn with_axes(x_path: impl Into<String>, y_path: impl Into<String>) -> Self {
        Self { x_path: x_path.into(), y_path: y_path.into(), ..Self::default() }
    }

    /// Linear and logarithmic modes are offered only for numeric x values.
    pub fn mode_enabled(mode: Mode, analysis: &Analysis) -> bool {
        !mode.is_numeric() || analysis.columns_are_numbers
    }

    pub fn grouping_enabled(&self) -> bool { self.mode.is_numeric() }

    /// A chart is shown only once both axes are chosen.
    pub fn is_ready(&self) -> bool {
        !self.x_path.is_empty() && !self.y_path.is_empty()
    }

    pub fn set_mode(&mut self, mode: Mode, analysis: &Analysis) -> Result<()> {
        if !Self::mode_enabled(mode, analysis) {
            return Err(Error::ModeUnavailable(mode));
        }
        self.mode = mode;
        Ok(())
    }

    /// The switch keeps its value while disabled; it only takes effect in numeric modes.
    pub fn set_grouped(&mut self, grouped: bool) { self.grouped = grouped; }

    pub fn set_x_path(&mut self, path: impl Into<String>) { self.x_path = path.into(); }

    pub fn set_y_path(&mut self, path: impl Into<String>) { self.y_path = path.into(); }

    pub fn analyze<A: FieldAccessor + ?Sized>(&self, results: &[BenchmarkResult], accessor: &A) -> Analysis {
        analyze_data(results, &self.x_path, accessor)
    }

    pub fn render<A: FieldAccessor + ?Sized>(
        &self,
        results: &[BenchmarkResult],
        accessor: &A,
    ) -> Option<LineChartSpec> {
        if !self.is_ready() {
            return None;
        }
        let builder = ChartDataBuilder::new(&self.x_path, &self.y_path)
            .with_accessor(accessor)
            .mode(self.mode)
            .grouped(self.grouped);
        let analysis = builder.analyze(results);
        let data = builder.build_with(results, &analysis);
        let options = ChartOptions::new(&self.x_path, &self.y_path, self.mode);
        Some(LineChartSpec::new(data, options, analysis))
    }
}
