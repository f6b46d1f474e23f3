// File: crates/demo/src/main.rs
// Summary: Loads benchmark results from JSON and writes a line chart as PNG, Chart.js JSON and/or CSV.

use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use chart_core::types::{HEIGHT, WIDTH};
use chart_core::{theme, Chart, RenderOptions};
use chart_data::{
    collect_field_paths, load_results, write_csv, BenchmarkResult, DottedPath, LineChartControls, Mode,
};
use clap::{ArgAction, Parser};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

/// Plot benchmark results as a line chart.
#[derive(Debug, Parser)]
#[command(name = "result-plot", version)]
struct Opts {
    /// JSON file with results: an array, or an object with an `items` array
    #[arg(short, long)]
    input: PathBuf,

    /// Field path for the x axis, e.g. `parameters.threads`
    #[arg(short = 'x', long = "x")]
    x_path: Option<String>,

    /// Field path for the y axis, e.g. `result.bandwidth`
    #[arg(short = 'y', long = "y")]
    y_path: Option<String>,

    /// simple, linear or logarithmic
    #[arg(short, long, default_value = "simple")]
    mode: Mode,

    /// One line per site (linear and logarithmic mode only)
    #[arg(short, long)]
    group_by_site: bool,

    /// Write the chart as PNG
    #[arg(long)]
    png: Option<PathBuf>,

    /// Write the Chart.js configuration as JSON
    #[arg(long)]
    chartjs: Option<PathBuf>,

    /// Write the plotted points as CSV
    #[arg(long)]
    csv: Option<PathBuf>,

    /// Print the available field paths and exit
    #[arg(long)]
    list_fields: bool,

    /// dark, light, solarized-dark, solarized-light or high-contrast-dark
    #[arg(long, default_value = "dark")]
    theme: String,

    #[arg(long, default_value_t = WIDTH)]
    width: i32,

    #[arg(long, default_value_t = HEIGHT)]
    height: i32,

    /// Chart title (defaults to the benchmark image, if the results carry one)
    #[arg(long)]
    title: Option<String>,

    /// More logging (-v info, -vv debug); RUST_LOG overrides
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,

    /// Only log errors
    #[arg(short, long, conflicts_with = "verbose")]
    quiet: bool,
}

fn main() -> Result<()> {
    let opts = Opts::parse();
    init_logging(opts.verbose, opts.quiet);

    let results = read_results(&opts.input)?;
    info!(count = results.len(), input = %opts.input.display(), "loaded results");

    if opts.list_fields {
        for path in collect_field_paths(&results) {
            println!("{path}");
        }
        return Ok(());
    }

    let (Some(x_path), Some(y_path)) = (&opts.x_path, &opts.y_path) else {
        bail!("both --x and --y are required (see --list-fields for available paths)");
    };

    let mut controls = LineChartControls::with_axes(x_path.as_str(), y_path.as_str());
    let analysis = controls.analyze(&results, &DottedPath);
    controls
        .set_mode(opts.mode, &analysis)
        .with_context(|| format!("x axis '{x_path}' has non-numeric values"))?;
    if opts.group_by_site && !controls.grouping_enabled() {
        warn!("--group-by-site only applies in linear and logarithmic mode");
    }
    controls.set_grouped(opts.group_by_site);

    let mut spec = controls.render(&results, &DottedPath).context("no axes selected")?;
    if let Some(title) = opts.title.clone().or_else(|| benchmark_title(&results)) {
        spec.options = spec.options.with_title(title);
    }
    info!(
        same_site = spec.analysis.same_site,
        numeric_x = spec.analysis.columns_are_numbers,
        labels = spec.data.labels.len(),
        datasets = spec.data.datasets.len(),
        points = spec.data.point_count(),
        "derived chart"
    );
    if spec.data.is_empty() {
        warn!("no result has both '{x_path}' and '{y_path}'; the chart is empty");
    }

    let png = match (&opts.png, &opts.chartjs, &opts.csv) {
        (None, None, None) => Some(default_png_path(&opts.input)),
        _ => opts.png.clone(),
    };

    if let Some(path) = &png {
        let render = RenderOptions {
            width: opts.width,
            height: opts.height,
            theme: theme::find(&opts.theme).with_context(|| format!("unknown theme '{}'", opts.theme))?,
            ..RenderOptions::default()
        };
        Chart::from_spec(&spec).render_to_png(&render, path)?;
        println!("Wrote {}", path.display());
    }
    if let Some(path) = &opts.chartjs {
        std::fs::write(path, spec.to_json_pretty()?).with_context(|| format!("writing {}", path.display()))?;
        println!("Wrote {}", path.display());
    }
    if let Some(path) = &opts.csv {
        let file = File::create(path).with_context(|| format!("creating {}", path.display()))?;
        write_csv(&spec.data, file)?;
        println!("Wrote {}", path.display());
    }
    Ok(())
}

fn init_logging(verbose: u8, quiet: bool) {
    let level = match (quiet, verbose) {
        (true, _) => "error",
        (false, 0) => "warn",
        (false, 1) => "info",
        (false, _) => "debug",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    tracing_subscriber::fmt().with_env_filter(filter).with_writer(std::io::stderr).init();
}

fn read_results(path: &Path) -> Result<Vec<BenchmarkResult>> {
    let file = File::open(path).with_context(|| format!("opening {}", path.display()))?;
    load_results(BufReader::new(file)).with_context(|| format!("failed to load results '{}'", path.display()))
}

/// Title from the benchmark of the first result, when it carries one.
fn benchmark_title(results: &[BenchmarkResult]) -> Option<String> {
    results.iter().find_map(|r| r.benchmark.as_ref()).map(|b| b.display_name())
}

/// Produce output file name like target/out/chart_<stem>.png
fn default_png_path(input: &Path) -> PathBuf {
    let stem = input.file_stem().and_then(|s| s.to_str()).unwrap_or("results");
    PathBuf::from("target/out").join(format!("chart_{stem}.png"))
}
