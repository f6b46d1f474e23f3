use anyhow::Result;
use chart_core::{Chart, RenderOptions};
use chart_data::{BenchmarkResult, ChartDataBuilder, ChartOptions, Mode, Site};
use criterion::{criterion_group, criterion_main, Criterion, black_box};
use serde_json::json;

fn build_chart(n: usize, sites: usize) -> Chart {
    let results: Vec<_> = (0..n)
        .map(|i| {
            let s = i % sites;
            let y = (i as f64 * 0.01).sin() * 10.0 + 20.0;
            BenchmarkResult::new(Site::new(format!("s{s}"), format!("Site {s}")), json!({ "x": i / sites, "y": y }))
        })
        .collect();
    let data = ChartDataBuilder::new("x", "y").mode(Mode::Linear).grouped(true).build(&results);
    Chart::from_chart_data(&data, &ChartOptions::new("x", "y", Mode::Linear))
}

fn bench_render(c: &mut Criterion) {
    let mut group = c.benchmark_group("render_png_bytes");
    for &n in &[1_000usize, 10_000usize] {
        group.bench_function(format!("grouped_{n}"), |b| {
            let ch = build_chart(n, 4);
            let mut opts = RenderOptions::default();
            opts.width = 800;
            opts.height = 500;
            opts.draw_labels = false;
            b.iter(|| -> Result<()> {
                let bytes = ch.render_to_png_bytes(&opts)?;
                black_box(bytes);
                Ok(())
            });
        });
    }
    group.finish();
}

criterion_group!(benches, bench_render);
criterion_main!(benches);
