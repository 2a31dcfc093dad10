// File: crates/growth-core/src/config.rs
// Summary: JSON launch config and the persisted theme preference.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::finance::{CompoundingFrequency, ContributionFrequency};
use crate::projection::RawInput;
use crate::theme::ThemeMode;
use crate::types::{HEIGHT, WIDTH};

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Form values shown at startup.
    pub inputs: RawInput,
    pub window_width: f32,
    pub window_height: f32,
    /// File holding the theme preference (`dark` or `light`).
    pub theme_file: PathBuf,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            inputs: RawInput::from_values(
                10_000.0,
                7.0,
                10,
                100.0,
                ContributionFrequency::Monthly,
                CompoundingFrequency::Monthly,
            ),
            window_width: WIDTH,
            window_height: HEIGHT,
            theme_file: PathBuf::from("growth-theme"),
        }
    }
}

impl AppConfig {
    /// Load from `path`; a missing file yields the defaults.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        if !path.exists() {
            tracing::debug!(path = %path.display(), "no config file, using defaults");
            return Ok(Self::default());
        }
        let text = std::fs::read_to_string(path)?;
        Ok(serde_json::from_str(&text)?)
    }

    pub fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        std::fs::write(path, serde_json::to_string_pretty(self)?)?;
        Ok(())
    }
}

/// Single-string theme preference on disk.
#[derive(Clone, Debug)]
pub struct ThemeStore {
    path: PathBuf,
}

impl ThemeStore {
    pub fn new(path: impl Into<PathBuf>) -> Self { Self { path: path.into() } }

    pub fn path(&self) -> &Path { &self.path }

    /// Saved preference, if any. An unreadable or unknown value counts as unset.
    pub fn load(&self) -> Option<ThemeMode> {
        let text = std::fs::read_to_string(&self.path).ok()?;
        match text.parse() {
            Ok(mode) => Some(mode),
            Err(e) => {
                tracing::warn!(path = %self.path.display(), error = %e, "ignoring saved theme");
                None
            }
        }
    }

    pub fn save(&self, mode: ThemeMode) -> Result<()> {
        std::fs::write(&self.path, mode.as_str())?;
        tracing::info!(theme = %mode, path = %self.path.display(), "theme saved");
        Ok(())
    }
}
