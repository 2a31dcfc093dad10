// File: crates/growth-core/src/chart.rs
// Summary: Growth chart model and the stateless Skia renderer (grid, axes, baseline, total line, cursor overlay).

use skia_safe as skia;

use crate::cursor::{draw_readout, Readout};
use crate::error::{GrowthError, Result};
use crate::format::format_money_whole;
use crate::grid::linspace;
use crate::projection::ProjectionSeries;
use crate::scale::{value_range, SampleScale, ValueScale};
use crate::text::TextShaper;
use crate::theme::Theme;
use crate::types::Viewport;

/// Horizontal gridlines, counting both edges of the plot.
pub const GRID_LINES: usize = 5;
pub const AXIS_LABEL_SIZE: f32 = 13.0;

pub struct RenderOptions {
    pub viewport: Viewport,
    pub theme: Theme,
    /// Disable to keep output independent of installed fonts.
    pub draw_labels: bool,
    /// Smoothed cursor x in CSS pixels; `None` draws no cursor.
    pub cursor_x: Option<f32>,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self { viewport: Viewport::default(), theme: Theme::light(), draw_labels: true, cursor_x: None }
    }
}

/// What gets drawn: the sampled series and the term they cover.
#[derive(Clone, Copy, Debug)]
pub struct Chart<'a> {
    pub series: &'a ProjectionSeries,
    pub term_years: u32,
}

impl<'a> Chart<'a> {
    pub fn new(series: &'a ProjectionSeries, term_years: u32) -> Self {
        Self { series, term_years }
    }
}

pub struct ChartRenderer {
    text: TextShaper,
}

impl ChartRenderer {
    pub fn new() -> Self { Self { text: TextShaper::new() } }

    pub fn text(&self) -> &TextShaper { &self.text }

    /// Full redraw of the static chart. Empty series draw the grid only.
    pub fn draw(&self, canvas: &skia::Canvas, chart: &Chart, opts: &RenderOptions) {
        let vp = &opts.viewport;
        canvas.clear(opts.theme.background);
        canvas.save();
        canvas.scale((vp.dpr, vp.dpr));

        draw_grid(canvas, vp, &opts.theme);
        if let (Some(xs), Some((vmin, vmax))) =
            (SampleScale::new(vp, chart.series.len()), value_range(&chart.series.total_value))
        {
            let ys = ValueScale::new(vp, vmin, vmax);
            if opts.draw_labels {
                self.draw_axes(canvas, vp, &ys, chart.term_years, &opts.theme);
            }
            draw_baseline(canvas, &xs, &ys, &chart.series.contribution_baseline, &opts.theme);
            draw_total(canvas, &xs, &ys, &chart.series.total_value, &opts.theme);
        }
        canvas.restore();
    }

    /// Cursor line and readout on top of an already drawn chart.
    pub fn draw_cursor(&self, canvas: &skia::Canvas, chart: &Chart, opts: &RenderOptions) {
        let Some(x) = opts.cursor_x else { return };
        let Some(readout) = Readout::at(chart.series, &opts.viewport, x) else { return };
        canvas.save();
        canvas.scale((opts.viewport.dpr, opts.viewport.dpr));
        draw_readout(canvas, &readout, &opts.viewport, &opts.theme, &self.text);
        canvas.restore();
    }

    pub fn draw_frame(&self, canvas: &skia::Canvas, chart: &Chart, opts: &RenderOptions) {
        self.draw(canvas, chart, opts);
        self.draw_cursor(canvas, chart, opts);
    }

    /// Render a frame into a new CPU raster surface sized to the viewport's bitmap.
    pub fn render_to_surface(&self, chart: &Chart, opts: &RenderOptions) -> Result<skia::Surface> {
        let (width, height) = opts.viewport.pixel_size();
        let mut surface = skia::surfaces::raster_n32_premul((width, height))
            .ok_or(GrowthError::Surface { width, height })?;
        self.draw_frame(surface.canvas(), chart, opts);
        Ok(surface)
    }

    pub fn render_to_png_bytes(&self, chart: &Chart, opts: &RenderOptions) -> Result<Vec<u8>> {
        let mut surface = self.render_to_surface(chart, opts)?;
        let image = surface.image_snapshot();
        #[allow(deprecated)]
        let data = image.encode_to_data(skia::EncodedImageFormat::PNG).ok_or(GrowthError::Encode)?;
        Ok(data.as_bytes().to_vec())
    }

    pub fn render_to_png(&self, chart: &Chart, opts: &RenderOptions, output_png_path: impl AsRef<std::path::Path>) -> Result<()> {
        let bytes = self.render_to_png_bytes(chart, opts)?;
        if let Some(parent) = output_png_path.as_ref().parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(output_png_path, bytes)?;
        Ok(())
    }

    /// Unpremultiplied RGBA8 pixels. Returns `(pixels, width, height, row_bytes)`.
    pub fn render_to_rgba8(&self, chart: &Chart, opts: &RenderOptions) -> Result<(Vec<u8>, i32, i32, usize)> {
        let mut surface = self.render_to_surface(chart, opts)?;
        let (width, height) = opts.viewport.pixel_size();
        let info = skia::ImageInfo::new((width, height), skia::ColorType::RGBA8888, skia::AlphaType::Unpremul, None);
        let row_bytes = width as usize * 4;
        let mut pixels = vec![0u8; row_bytes * height as usize];
        if !surface.read_pixels(&info, &mut pixels, row_bytes, (0, 0)) {
            return Err(GrowthError::ReadPixels);
        }
        Ok((pixels, width, height, row_bytes))
    }

    fn draw_axes(&self, canvas: &skia::Canvas, vp: &Viewport, ys: &ValueScale, term_years: u32, theme: &Theme) {
        let labels = AxisLabels::new(ys.vmin, ys.vmax, term_years);
        for (v, label) in &labels.values {
            self.text.draw_left(canvas, label, 2.0, ys.to_px(*v) + 4.0, AXIS_LABEL_SIZE, theme.axis_label);
        }
        let y = vp.height - 8.0;
        self.text.draw_left(canvas, &labels.start, vp.plot_left() + 6.0, y, AXIS_LABEL_SIZE, theme.axis_label);
        self.text.draw_left(canvas, &labels.end, vp.plot_right() - 56.0, y, AXIS_LABEL_SIZE, theme.axis_label);
    }
}

/// Axis text for one frame: a value label per gridline, bottom to top, and the term ends.
#[derive(Clone, Debug, PartialEq)]
pub struct AxisLabels {
    pub values: Vec<(f64, String)>,
    pub start: String,
    pub end: String,
}

impl AxisLabels {
    pub fn new(vmin: f64, vmax: f64, term_years: u32) -> Self {
        let bands = (GRID_LINES - 1) as f64;
        let values = (0..GRID_LINES)
            .map(|i| {
                let v = vmin + i as f64 * (vmax - vmin) / bands;
                (v, format_money_whole(v))
            })
            .collect();
        Self { values, start: "Year 0".to_string(), end: format!("Year {term_years}") }
    }
}

impl Default for ChartRenderer {
    fn default() -> Self { Self::new() }
}

// ---- helpers ----------------------------------------------------------------

fn draw_grid(canvas: &skia::Canvas, vp: &Viewport, theme: &Theme) {
    let mut paint = skia::Paint::default();
    paint.set_color(theme.grid);
    paint.set_anti_alias(true);
    paint.set_style(skia::paint::Style::Stroke);
    paint.set_stroke_width(1.0);

    for y in linspace(vp.plot_top() as f64, vp.plot_bottom() as f64, GRID_LINES) {
        canvas.draw_line((vp.plot_left(), y as f32), (vp.plot_right(), y as f32), &paint);
    }
}

fn series_path(xs: &SampleScale, ys: &ValueScale, data: &[f64]) -> skia::Path {
    let mut path = skia::Path::new();
    for (i, &v) in data.iter().enumerate() {
        let p = (xs.to_px(i as f64), ys.to_px(v));
        if i == 0 { path.move_to(p); } else { path.line_to(p); }
    }
    path
}

fn draw_baseline(canvas: &skia::Canvas, xs: &SampleScale, ys: &ValueScale, data: &[f64], theme: &Theme) {
    let mut stroke = skia::Paint::default();
    stroke.set_anti_alias(true);
    stroke.set_style(skia::paint::Style::Stroke);
    stroke.set_stroke_width(1.0);
    stroke.set_color(theme.baseline_stroke);
    stroke.set_path_effect(skia::PathEffect::dash(&[4.0, 4.0], 0.0));
    canvas.draw_path(&series_path(xs, ys, data), &stroke);
}

fn draw_total(canvas: &skia::Canvas, xs: &SampleScale, ys: &ValueScale, data: &[f64], theme: &Theme) {
    let mut stroke = skia::Paint::default();
    stroke.set_anti_alias(true);
    stroke.set_style(skia::paint::Style::Stroke);
    stroke.set_stroke_width(2.0);
    stroke.set_stroke_join(skia::paint::Join::Round);
    stroke.set_stroke_cap(skia::paint::Cap::Round);
    stroke.set_color(theme.total_stroke);
    canvas.draw_path(&series_path(xs, ys, data), &stroke);
}
