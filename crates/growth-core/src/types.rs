// File: crates/growth-core/src/types.rs
// Summary: Shared viewport types and constants (sizes, padding).

/// Default surface width in CSS pixels.
pub const WIDTH: f32 = 960.0;
/// Default surface height in CSS pixels.
pub const HEIGHT: f32 = 540.0;
/// Margin kept free on every side of the plot for axis labels.
pub const PADDING: f32 = 56.0;

/// Screen margins, in CSS pixels.
/// Contract: all fields are non-negative.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Insets {
    pub left: f32,
    pub right: f32,
    pub top: f32,
    pub bottom: f32,
}

impl Insets {
    pub const fn new(left: f32, right: f32, top: f32, bottom: f32) -> Self {
        Self { left, right, top, bottom }
    }
    pub const fn uniform(pad: f32) -> Self { Self::new(pad, pad, pad, pad) }
    /// Total horizontal inset (left + right).
    pub fn hsum(&self) -> f32 { self.left + self.right }
    /// Total vertical inset (top + bottom).
    pub fn vsum(&self) -> f32 { self.top + self.bottom }
}

impl Default for Insets {
    fn default() -> Self { Self::uniform(PADDING) }
}

/// Drawing surface size. Layout happens in CSS pixels; the backing bitmap is
/// `width * dpr` by `height * dpr`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Viewport {
    pub width: f32,
    pub height: f32,
    pub dpr: f32,
    pub insets: Insets,
}

impl Viewport {
    pub fn new(width: f32, height: f32, dpr: f32) -> Self {
        Self { width: width.max(1.0), height: height.max(1.0), dpr: if dpr > 0.0 { dpr } else { 1.0 }, insets: Insets::default() }
    }

    /// Build from a physical pixel size, as reported by a window system.
    pub fn from_physical(width_px: u32, height_px: u32, dpr: f64) -> Self {
        let dpr = if dpr > 0.0 { dpr } else { 1.0 };
        Self::new((width_px as f64 / dpr) as f32, (height_px as f64 / dpr) as f32, dpr as f32)
    }

    pub fn plot_width(&self) -> f32 { self.width - self.insets.hsum() }
    pub fn plot_height(&self) -> f32 { self.height - self.insets.vsum() }
    pub fn plot_left(&self) -> f32 { self.insets.left }
    pub fn plot_right(&self) -> f32 { self.width - self.insets.right }
    pub fn plot_top(&self) -> f32 { self.insets.top }
    pub fn plot_bottom(&self) -> f32 { self.height - self.insets.bottom }

    /// Backing bitmap size in device pixels.
    pub fn pixel_size(&self) -> (i32, i32) {
        (
            ((self.width * self.dpr).round() as i32).max(1),
            ((self.height * self.dpr).round() as i32).max(1),
        )
    }
}

impl Default for Viewport {
    fn default() -> Self { Self::new(WIDTH, HEIGHT, 1.0) }
}
