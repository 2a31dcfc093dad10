// File: crates/growth-core/src/cursor.rs
// Summary: Hover cursor: eased pointer tracking, series interpolation and the floating readout box.

use skia_safe as skia;

use crate::format::format_money_smart;
use crate::projection::{ProjectionSeries, MONTHS_PER_YEAR};
use crate::scale::{value_range, SampleScale, ValueScale};
use crate::text::TextShaper;
use crate::theme::Theme;
use crate::types::Viewport;

/// Fraction of the remaining distance covered per frame.
pub const SMOOTHING: f32 = 0.35;

pub const READOUT_HEIGHT: f32 = 52.0;
pub const READOUT_TITLE_SIZE: f32 = 15.0;
pub const READOUT_DETAIL_SIZE: f32 = 12.0;

/// Pointer state over the chart. All `None` while the pointer is outside.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct CursorTracker {
    raw_x: Option<f32>,
    target_x: Option<f32>,
    current_x: Option<f32>,
}

impl CursorTracker {
    pub fn new() -> Self { Self::default() }

    pub fn pointer_moved(&mut self, x: f32) {
        self.raw_x = Some(x);
        self.target_x = Some(x);
        if self.current_x.is_none() {
            self.current_x = Some(x);
        }
    }

    pub fn pointer_left(&mut self) {
        *self = Self::default();
    }

    pub fn is_tracking(&self) -> bool {
        self.raw_x.is_some() && self.target_x.is_some()
    }

    /// One animation-frame easing step. Returns whether the cursor is tracking.
    pub fn step(&mut self) -> bool {
        match (self.target_x, self.current_x) {
            (Some(target), Some(current)) if self.raw_x.is_some() => {
                self.current_x = Some(current + (target - current) * SMOOTHING);
                true
            }
            _ => false,
        }
    }

    pub fn raw_x(&self) -> Option<f32> { self.raw_x }
    pub fn target_x(&self) -> Option<f32> { self.target_x }
    /// Smoothed position used for the readout.
    pub fn current_x(&self) -> Option<f32> { self.current_x }

    pub fn readout(&self, series: &ProjectionSeries, viewport: &Viewport) -> Option<Readout> {
        if !self.is_tracking() { return None; }
        Readout::at(series, viewport, self.current_x?)
    }
}

/// Interpolated values under the cursor.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Readout {
    /// Fractional sample index.
    pub index: f64,
    pub total: f64,
    pub baseline: f64,
    pub growth: f64,
    /// Years elapsed, rounded to one decimal.
    pub year: f64,
    /// Cursor line x and the total-value y, in CSS pixels.
    pub px: f32,
    pub py: f32,
}

impl Readout {
    /// `None` for an empty series or when `x` lies outside the plot.
    pub fn at(series: &ProjectionSeries, viewport: &Viewport, x: f32) -> Option<Self> {
        let xs = SampleScale::new(viewport, series.len())?;
        let rel = xs.relative(x);
        // Allow f32 round-off at the plot edges.
        if !(-1e-6..=1.0 + 1e-6).contains(&rel) { return None; }
        let rel = rel.clamp(0.0, 1.0);

        let mut index = (rel * (series.len() - 1) as f64).clamp(0.0, (series.len() - 1) as f64);
        // f32 pixel round-off must not blend a sample with its neighbour.
        if (index - index.round()).abs() < 1e-4 {
            index = index.round();
        }
        let (total, baseline) = series.interpolate(index)?;
        let (vmin, vmax) = value_range(&series.total_value)?;
        let ys = ValueScale::new(viewport, vmin, vmax);

        Some(Self {
            index,
            total,
            baseline,
            growth: total - baseline,
            year: (index / MONTHS_PER_YEAR as f64 * 10.0).round() / 10.0,
            px: viewport.plot_left() + rel as f32 * viewport.plot_width(),
            py: ys.to_px(total),
        })
    }

    pub fn title(&self) -> String { format_money_smart(self.total) }

    pub fn detail(&self) -> String {
        format!("{} principal · {} growth", format_money_smart(self.baseline), format_money_smart(self.growth))
    }

    pub fn year_label(&self) -> String { format!("Year {:.1}", self.year) }
}

/// Top-left corner and size of the readout box.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ReadoutBox {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl ReadoutBox {
    /// Place a box of `width` next to the cursor line at `(px, py)`.
    /// It sits right of the line unless that would overflow the viewport, and never rises above the top padding.
    pub fn place(px: f32, py: f32, width: f32, viewport: &Viewport) -> Self {
        let x = if px > viewport.width - width - 12.0 { px - width - 10.0 } else { px + 10.0 };
        let y = (py - 28.0).max(viewport.plot_top() + 6.0);
        Self { x, y, width, height: READOUT_HEIGHT }
    }
}

/// Draw the cursor line and readout box. Expects the canvas already scaled to CSS pixels.
pub fn draw_readout(canvas: &skia::Canvas, readout: &Readout, viewport: &Viewport, theme: &Theme, text: &TextShaper) {
    let mut line = skia::Paint::default();
    line.set_anti_alias(true);
    line.set_style(skia::paint::Style::Stroke);
    line.set_stroke_width(1.0);
    line.set_color(theme.cursor_line);
    canvas.draw_line((readout.px, viewport.plot_top()), (readout.px, viewport.plot_bottom()), &line);

    let title = readout.title();
    let detail = readout.detail();
    let width = text
        .measure_width(&title, READOUT_TITLE_SIZE)
        .max(text.measure_width(&detail, READOUT_TITLE_SIZE))
        + 20.0;
    let b = ReadoutBox::place(readout.px, readout.py, width, viewport);

    let mut fill = skia::Paint::default();
    fill.set_anti_alias(true);
    fill.set_style(skia::paint::Style::Fill);
    fill.set_color(theme.readout_fill);
    canvas.draw_rect(skia::Rect::from_xywh(b.x, b.y, b.width, b.height), &fill);

    text.draw_left(canvas, &title, b.x + 10.0, b.y + 18.0, READOUT_TITLE_SIZE, theme.readout_text);
    text.draw_left(canvas, &detail, b.x + 10.0, b.y + 34.0, READOUT_DETAIL_SIZE, theme.readout_subtext);
    text.draw_left(canvas, &readout.year_label(), b.x + 10.0, b.y + 48.0, READOUT_DETAIL_SIZE, theme.readout_subtext);
}
