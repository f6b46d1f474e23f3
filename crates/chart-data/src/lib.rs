// File: crates/chart-data/src/lib.rs
// Summary: Library entry point; derives line-chart data from benchmark results.

pub mod result;
pub mod field;
pub mod palette;
pub mod mode;
pub mod analysis;
pub mod builder;
pub mod options;
pub mod controls;
pub mod export;
pub mod error;

pub use result::{Benchmark, BenchmarkResult, Site, load_results};
pub use field::{FieldAccessor, DottedPath, Scalar, collect_field_paths};
pub use palette::Rgb;
pub use mode::Mode;
pub use analysis::{Analysis, analyze_data};
pub use builder::{ChartData, ChartDataBuilder, Dataset, Point};
pub use options::{ChartOptions, LineChartSpec, ScaleType};
pub use controls::LineChartControls;
pub use export::{write_csv, to_csv_string};
pub use error::{Error, Result};
