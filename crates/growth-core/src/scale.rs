// File: crates/growth-core/src/scale.rs
// Summary: Sample-index (X) and value (Y) transforms between data space and CSS pixels.

use crate::types::Viewport;

/// Fractional sample index (month offset).
pub type Logical = f64;
/// Dollar value.
pub type Value = f64;

/// Horizontal scale: `count` samples spread evenly across the plot width.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SampleScale {
    pub left_px: f32,
    pub plot_width: f32,
    pub count: usize,
}

impl SampleScale {
    /// `None` when fewer than two samples; there is no spacing to divide by.
    pub fn new(viewport: &Viewport, count: usize) -> Option<Self> {
        if count < 2 { return None; }
        Some(Self { left_px: viewport.plot_left(), plot_width: viewport.plot_width(), count })
    }

    #[inline]
    fn last_index(&self) -> f64 { (self.count - 1) as f64 }

    #[inline]
    pub fn to_px(&self, i: Logical) -> f32 {
        self.left_px + (i / self.last_index()) as f32 * self.plot_width
    }

    /// Position across the plot: 0 at the left edge, 1 at the right edge.
    #[inline]
    pub fn relative(&self, px: f32) -> f64 {
        ((px - self.left_px) / self.plot_width) as f64
    }

    #[inline]
    pub fn from_px(&self, px: f32) -> Logical {
        self.relative(px) * self.last_index()
    }
}

/// Vertical scale mapping `[vmin, vmax]` to `[bottom, top]` pixels (larger values plot higher).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ValueScale {
    pub top_px: f32,
    pub bottom_px: f32,
    pub vmin: Value,
    pub vmax: Value,
}

impl ValueScale {
    pub fn new(viewport: &Viewport, vmin: Value, vmax: Value) -> Self {
        Self { top_px: viewport.plot_top(), bottom_px: viewport.plot_bottom(), vmin, vmax }
    }

    /// Value span, with 1 standing in for an empty range.
    #[inline]
    fn span(&self) -> f64 {
        let span = self.vmax - self.vmin;
        if span == 0.0 { 1.0 } else { span }
    }

    #[inline]
    pub fn to_px(&self, y: Value) -> f32 {
        self.bottom_px - ((y - self.vmin) / self.span()) as f32 * (self.bottom_px - self.top_px)
    }

    #[inline]
    pub fn from_px(&self, py: f32) -> Value {
        self.vmin + ((self.bottom_px - py) / (self.bottom_px - self.top_px).max(1.0)) as f64 * self.span()
    }
}

/// Y range for a total-value series: 5% below the first sample up to the series maximum.
/// The baseline series is deliberately ignored so it never adds headroom.
/// The lower bound never exceeds the true minimum, so a dip below the opening value stays on screen.
pub fn value_range(total_value: &[f64]) -> Option<(Value, Value)> {
    let first = *total_value.first()?;
    let (lo, hi) = total_value
        .iter()
        .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), &v| (lo.min(v), hi.max(v)));
    Some(((first * 0.95).min(lo), hi))
}
