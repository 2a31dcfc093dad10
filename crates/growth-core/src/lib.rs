// File: crates/growth-core/src/lib.rs
// Summary: Core library entry point; projection math, chart rendering and the app reducer.

pub mod app;
pub mod chart;
pub mod config;
pub mod cursor;
pub mod debounce;
pub mod error;
pub mod export;
pub mod finance;
pub mod format;
pub mod grid;
pub mod projection;
pub mod scale;
pub mod telemetry;
pub mod text;
pub mod theme;
pub mod types;

pub use app::{AppEvent, AppState, Field, Update, Wakeup};
pub use chart::{AxisLabels, Chart, ChartRenderer, RenderOptions};
pub use config::{AppConfig, ThemeStore};
pub use cursor::{CursorTracker, Readout, ReadoutBox};
pub use debounce::Debouncer;
pub use error::{GrowthError, ValidationError};
pub use export::ExportReport;
pub use finance::{future_value, normalize_contribution, CompoundingFrequency, ContributionFrequency};
pub use format::{format_money_exact, format_money_smart, format_money_whole};
pub use projection::{project, Headline, Projection, ProjectionInput, ProjectionSeries, RawInput};
pub use theme::{Theme, ThemeMode};
pub use types::{Insets, Viewport};
