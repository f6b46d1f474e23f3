// File: crates/chart-core/src/chart.rs
// Summary: Chart struct built from derived chart data, and the headless rendering pipeline
// (Skia CPU raster surface, RGBA readback, PNG encoding).

use anyhow::{anyhow, bail, Context, Result};
use chart_data::{ChartData, ChartOptions, LineChartSpec, Scalar};
use skia_safe as skia;
use tracing::debug;

use crate::axis::{Axis, CategoryAxis, ScaleKind};
use crate::grid::format_tick;
use crate::scale::{CategoryScale, ValueScale};
use crate::series::LineSeries;
use crate::theme::Theme;
use crate::types::{Insets, RectI32, HEIGHT, WIDTH};
use crate::view::ViewState;

const LABEL_SIZE: f32 = 12.0;
const TITLE_SIZE: f32 = 16.0;

pub struct RenderOptions {
    pub width: i32,
    pub height: i32,
    pub insets: Insets,
    pub theme: Theme,
    /// Text (title, tick labels, axis titles, legend). Off for pixel-stable output.
    pub draw_labels: bool,
    pub draw_legend: bool,
    pub point_radius: f32,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            width: WIDTH,
            height: HEIGHT,
            insets: Insets::default(),
            theme: Theme::default(),
            draw_labels: true,
            draw_legend: true,
            point_radius: 3.0,
        }
    }
}

pub struct Chart {
    pub title: Option<String>,
    pub series: Vec<LineSeries>,
    pub x_axis: CategoryAxis,
    pub y_axis: Axis,
}

impl Default for Chart {
    fn default() -> Self { Self::new() }
}

impl Chart {
    pub fn new() -> Self {
        Self {
            title: None,
            series: Vec::new(),
            x_axis: CategoryAxis::default(),
            y_axis: Axis::new("", 0.0, 1.0),
        }
    }

    pub fn add_series(&mut self, series: LineSeries) {
        self.series.push(series);
    }

    /// Lay out derived data on a category x axis. Flat data pairs the i-th point with the
    /// i-th label; grouped data places each point at the label equal to its x value.
    pub fn from_chart_data(data: &ChartData, options: &ChartOptions) -> Self {
        let kind = ScaleKind::from(options.y_scale());
        let categories = data.labels.iter().map(|l| l.to_string()).collect();
        let label_values: Vec<f64> = data.labels.iter().filter_map(Scalar::as_number).collect();

        let series = data
            .datasets
            .iter()
            .map(|ds| {
                LineSeries::from_dataset(ds, kind, |i, p| {
                    if data.grouped {
                        let x = p.x.as_number()?;
                        label_values.binary_search_by(|v| v.total_cmp(&x)).ok().map(|k| k as f64)
                    } else {
                        (i < data.labels.len()).then_some(i as f64)
                    }
                })
            })
            .collect();

        let title = &options.plugins.title;
        let mut y_axis = Axis::new(options.scales.y.title.text.clone(), 0.0, 1.0);
        y_axis.kind = kind;
        y_axis.begin_at_zero = options.begin_at_zero();

        let mut chart = Self {
            title: title.display.then(|| title.text.clone()),
            series,
            x_axis: CategoryAxis::new(options.scales.x.title.text.clone(), categories),
            y_axis,
        };
        chart.autoscale_axes();
        chart
    }

    pub fn from_spec(spec: &LineChartSpec) -> Self {
        Self::from_chart_data(&spec.data, &spec.options)
    }

    /// Fit the value axis to the drawable points.
    pub fn autoscale_axes(&mut self) {
        ViewState::from_chart(self).apply_to_chart(self);
    }

    /// Render into a tightly packed RGBA8 (unpremultiplied) buffer.
    /// Returns (pixels, width, height, row stride in bytes).
    pub fn render_to_rgba8(&self, opts: &RenderOptions) -> Result<(Vec<u8>, i32, i32, usize)> {
        let (w, h) = (opts.width.max(1), opts.height.max(1));
        let mut surface = skia::surfaces::raster_n32_premul((w, h))
            .ok_or_else(|| anyhow!("failed to create raster surface"))?;
        self.draw(surface.canvas(), opts, w, h);

        let info = skia::ImageInfo::new((w, h), skia::ColorType::RGBA8888, skia::AlphaType::Unpremul, None);
        let stride = w as usize * 4;
        let mut pixels = vec![0u8; stride * h as usize];
        if !surface.read_pixels(&info, &mut pixels, stride, (0, 0)) {
            bail!("reading back surface pixels failed");
        }
        Ok((pixels, w, h, stride))
    }

    pub fn render_to_png_bytes(&self, opts: &RenderOptions) -> Result<Vec<u8>> {
        let (pixels, w, h, _) = self.render_to_rgba8(opts)?;
        let img = image::RgbaImage::from_raw(w as u32, h as u32, pixels)
            .ok_or_else(|| anyhow!("pixel buffer does not match {w}x{h}"))?;
        let mut out = std::io::Cursor::new(Vec::new());
        img.write_to(&mut out, image::ImageFormat::Png).context("encode PNG failed")?;
        Ok(out.into_inner())
    }

    /// Render the chart to a PNG at `output_png_path`.
    pub fn render_to_png(
        &self,
        opts: &RenderOptions,
        output_png_path: impl AsRef<std::path::Path>,
    ) -> Result<()> {
        let path = output_png_path.as_ref();
        let bytes = self.render_to_png_bytes(opts)?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(path, &bytes).with_context(|| format!("writing {}", path.display()))?;
        debug!(path = %path.display(), bytes = bytes.len(), "wrote png");
        Ok(())
    }

    fn draw(&self, canvas: &skia::Canvas, opts: &RenderOptions, w: i32, h: i32) {
        let theme = &opts.theme;
        canvas.clear(theme.background);

        let plot = opts.insets.plot_rect(w, h);
        let xs = CategoryScale::new(plot.left as f32, plot.right as f32, self.x_axis.len());
        let ys = self.y_axis.value_scale(plot.top as f32, plot.bottom as f32);

        draw_grid(canvas, theme, &plot, &xs, &ys, &self.y_axis);
        draw_axes(canvas, theme, &plot);

        for s in &self.series {
            draw_line_series(canvas, &xs, &ys, s, opts.point_radius);
        }

        if opts.draw_labels {
            draw_tick_labels(canvas, theme, &plot, &xs, &ys, &self.x_axis, &self.y_axis);
            draw_axis_titles(canvas, theme, &plot, &self.x_axis, &self.y_axis);
            if let Some(title) = &self.title {
                let x = (w as f32 - approx_text_width(title, TITLE_SIZE)) * 0.5;
                draw_text(canvas, title, (x, plot.top as f32 - 16.0), TITLE_SIZE, theme.title);
            }
            if opts.draw_legend {
                draw_legend(canvas, theme, &plot, h, &self.series);
            }
        }
    }
}

// ---- helpers ----------------------------------------------------------------

fn approx_text_width(text: &str, size: f32) -> f32 {
    text.chars().count() as f32 * size * 0.55
}

fn draw_text(canvas: &skia::Canvas, text: &str, at: (f32, f32), size: f32, color: skia::Color) {
    let mut paint = skia::Paint::default();
    paint.set_anti_alias(true);
    paint.set_color(color);
    let mut font = skia::Font::default();
    font.set_size(size);
    canvas.draw_str(text, at, &font, &paint);
}

fn draw_grid(
    canvas: &skia::Canvas,
    theme: &Theme,
    plot: &RectI32,
    xs: &CategoryScale,
    ys: &ValueScale,
    y_axis: &Axis,
) {
    let mut paint = skia::Paint::default();
    paint.set_color(theme.grid);
    paint.set_anti_alias(true);
    paint.set_stroke_width(1.0);

    let (l, t, r, b) = (plot.left as f32, plot.top as f32, plot.right as f32, plot.bottom as f32);
    // verticals at categories
    let stride = xs.label_stride(48.0);
    for i in (0..xs.count).step_by(stride) {
        let x = xs.to_px(i as f64);
        canvas.draw_line((x, t), (x, b), &paint);
    }
    // horizontals at value ticks
    for v in y_axis.ticks() {
        let y = ys.to_px(v);
        if y >= t - 0.5 && y <= b + 0.5 {
            canvas.draw_line((l, y), (r, y), &paint);
        }
    }
}

fn draw_axes(canvas: &skia::Canvas, theme: &Theme, plot: &RectI32) {
    let mut axis_paint = skia::Paint::default();
    axis_paint.set_color(theme.axis_line);
    axis_paint.set_anti_alias(true);
    axis_paint.set_stroke_width(1.5);

    let (l, t, r, b) = (plot.left as f32, plot.top as f32, plot.right as f32, plot.bottom as f32);
    canvas.draw_line((l, b), (r, b), &axis_paint);
    canvas.draw_line((l, t), (l, b), &axis_paint);
}

fn draw_tick_labels(
    canvas: &skia::Canvas,
    theme: &Theme,
    plot: &RectI32,
    xs: &CategoryScale,
    ys: &ValueScale,
    x_axis: &CategoryAxis,
    y_axis: &Axis,
) {
    let (t, b) = (plot.top as f32, plot.bottom as f32);
    for v in y_axis.ticks() {
        let y = ys.to_px(v);
        if y < t - 0.5 || y > b + 0.5 {
            continue;
        }
        let text = format_tick(v);
        let x = plot.left as f32 - 8.0 - approx_text_width(&text, LABEL_SIZE);
        draw_text(canvas, &text, (x, y + LABEL_SIZE * 0.35), LABEL_SIZE, theme.tick);
    }

    let widest = x_axis
        .categories
        .iter()
        .map(|c| approx_text_width(c, LABEL_SIZE))
        .fold(0.0f32, f32::max);
    let stride = xs.label_stride(widest + 8.0);
    for (i, text) in x_axis.categories.iter().enumerate().step_by(stride) {
        let x = xs.to_px(i as f64) - approx_text_width(text, LABEL_SIZE) * 0.5;
        draw_text(canvas, text, (x, b + 18.0), LABEL_SIZE, theme.tick);
    }
}

fn draw_axis_titles(canvas: &skia::Canvas, theme: &Theme, plot: &RectI32, x: &CategoryAxis, y: &Axis) {
    let cx = plot.left as f32 + plot.width() as f32 * 0.5 - approx_text_width(&x.label, 14.0) * 0.5;
    draw_text(canvas, &x.label, (cx, plot.bottom as f32 + 40.0), 14.0, theme.axis_label);
    draw_text(canvas, &y.label, (plot.left as f32 - 56.0, plot.top as f32 - 6.0), 14.0, theme.axis_label);
}

fn draw_line_series(canvas: &skia::Canvas, xs: &CategoryScale, ys: &ValueScale, series: &LineSeries, radius: f32) {
    let mut stroke = skia::Paint::default();
    stroke.set_anti_alias(true);
    stroke.set_style(skia::paint::Style::Stroke);
    stroke.set_stroke_width(series.stroke_width);
    stroke.set_color(series.stroke);

    let mut dot = skia::Paint::default();
    dot.set_anti_alias(true);
    dot.set_style(skia::paint::Style::Fill);
    dot.set_color(series.fill);

    for run in series.segments() {
        let px: Vec<(f32, f32)> = run.iter().map(|&(x, y)| (xs.to_px(x), ys.to_px(y))).collect();
        for pair in px.windows(2) {
            canvas.draw_line(pair[0], pair[1], &stroke);
        }
        if radius > 0.0 {
            for &p in &px {
                canvas.draw_circle(p, radius, &dot);
            }
        }
    }
}

fn draw_legend(canvas: &skia::Canvas, theme: &Theme, plot: &RectI32, height: i32, series: &[LineSeries]) {
    if series.is_empty() {
        return;
    }
    let widths: Vec<f32> = series.iter().map(|s| 18.0 + approx_text_width(&s.label, LABEL_SIZE) + 16.0).collect();
    let total: f32 = widths.iter().sum();
    let mut x = (plot.left as f32 + plot.width() as f32 * 0.5 - total * 0.5).max(4.0);
    let y = height as f32 - 20.0;

    let mut swatch = skia::Paint::default();
    swatch.set_anti_alias(true);
    for (s, w) in series.iter().zip(widths) {
        swatch.set_style(skia::paint::Style::Fill);
        swatch.set_color(s.fill);
        let rect = skia::Rect::from_xywh(x, y - 10.0, 12.0, 12.0);
        canvas.draw_rect(rect, &swatch);
        swatch.set_style(skia::paint::Style::Stroke);
        swatch.set_stroke_width(1.0);
        swatch.set_color(s.stroke);
        canvas.draw_rect(rect, &swatch);
        draw_text(canvas, &s.label, (x + 18.0, y), LABEL_SIZE, theme.axis_label);
        x += w;
    }
}
