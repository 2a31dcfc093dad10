// File: crates/growth-core/src/theme.rs
// Summary: Light/Dark theme mode and the chart palette for each.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use skia_safe as skia;

use crate::error::GrowthError;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeMode {
    #[default]
    Light,
    Dark,
}

impl ThemeMode {
    pub fn toggled(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }

    /// Startup resolution: saved preference first, then the system setting, then light.
    pub fn resolve(saved: Option<ThemeMode>, system: Option<ThemeMode>) -> Self {
        saved.or(system).unwrap_or_default()
    }

    pub fn palette(self) -> Theme {
        match self {
            Self::Light => Theme::light(),
            Self::Dark => Theme::dark(),
        }
    }
}

impl fmt::Display for ThemeMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result { f.write_str(self.as_str()) }
}

impl FromStr for ThemeMode {
    type Err = GrowthError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "light" => Ok(Self::Light),
            "dark" => Ok(Self::Dark),
            other => Err(GrowthError::UnknownTheme(other.to_string())),
        }
    }
}

#[derive(Clone, Copy, Debug)]
pub struct Theme {
    pub mode: ThemeMode,
    pub background: skia::Color,
    pub grid: skia::Color,
    pub axis_label: skia::Color,
    pub total_stroke: skia::Color,
    pub baseline_stroke: skia::Color,
    pub cursor_line: skia::Color,
    pub readout_fill: skia::Color,
    pub readout_text: skia::Color,
    pub readout_subtext: skia::Color,
}

impl Theme {
    pub fn dark() -> Self {
        Self {
            mode: ThemeMode::Dark,
            background: skia::Color::from_argb(255, 0x0b, 0x11, 0x19),
            grid: skia::Color::from_argb(255, 0x1f, 0x29, 0x33),
            axis_label: skia::Color::from_argb(255, 0x9c, 0xa3, 0xaf),
            total_stroke: skia::Color::from_argb(255, 0x00, 0xae, 0x49),
            baseline_stroke: skia::Color::from_argb(255, 0x6b, 0x72, 0x80),
            cursor_line: skia::Color::from_argb(255, 0x9c, 0xa3, 0xaf),
            readout_fill: skia::Color::from_argb(191, 15, 23, 42), // 75% slate
            readout_text: skia::Color::from_argb(255, 0xf5, 0xf7, 0xfa),
            readout_subtext: skia::Color::from_argb(255, 0x9c, 0xa3, 0xaf),
        }
    }

    pub fn light() -> Self {
        Self {
            mode: ThemeMode::Light,
            background: skia::Color::from_argb(255, 0xff, 0xff, 0xff),
            grid: skia::Color::from_argb(255, 0xe5, 0xe7, 0xeb),
            axis_label: skia::Color::from_argb(255, 0x6b, 0x72, 0x80),
            total_stroke: skia::Color::from_argb(255, 0x00, 0xae, 0x49),
            baseline_stroke: skia::Color::from_argb(255, 0x9c, 0xa3, 0xaf),
            cursor_line: skia::Color::from_argb(255, 0x37, 0x41, 0x51),
            readout_fill: skia::Color::from_argb(230, 255, 255, 255), // 90% white
            readout_text: skia::Color::from_argb(255, 0x11, 0x18, 0x27),
            readout_subtext: skia::Color::from_argb(255, 0x6b, 0x72, 0x80),
        }
    }
}
