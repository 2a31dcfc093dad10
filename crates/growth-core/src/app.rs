// File: crates/growth-core/src/app.rs
// Summary: Application state and its single update function (edits, pointer, theme, resize, frame ticks).
// Notes:
// - Data-change redraws and per-frame cursor redraws both go through `render_options`
//   and the same stateless renderer; nothing here caches a frame.

use std::time::Instant;

use crate::chart::{Chart, RenderOptions};
use crate::cursor::CursorTracker;
use crate::debounce::Debouncer;
use crate::error::ValidationError;
use crate::finance::{CompoundingFrequency, ContributionFrequency};
use crate::projection::{project, Projection, ProjectionSeries, RawInput};
use crate::theme::ThemeMode;
use crate::types::Viewport;

static EMPTY_SERIES: ProjectionSeries = ProjectionSeries { total_value: Vec::new(), contribution_baseline: Vec::new() };

/// Editable text fields of the form.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Field {
    Principal,
    RatePercent,
    Years,
    Contribution,
}

#[derive(Clone, Debug, PartialEq)]
pub enum AppEvent {
    Edit(Field, String),
    SetContributionFrequency(ContributionFrequency),
    SetCompounding(CompoundingFrequency),
    PointerMoved { x: f32 },
    PointerLeft,
    ToggleTheme,
    Resized(Viewport),
    /// Display refresh callback.
    Frame,
}

/// What the shell should do after an update.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Update {
    pub redraw: bool,
    pub recomputed: bool,
    pub theme_changed: bool,
}

impl Update {
    fn redraw() -> Self { Self { redraw: true, ..Self::default() } }
}

/// When the shell must deliver the next `AppEvent::Frame`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Wakeup {
    /// Every display frame (cursor easing in progress).
    NextFrame,
    /// At the pending recompute deadline.
    At(Instant),
    /// Only when another event arrives.
    Idle,
}

pub struct AppState {
    raw: RawInput,
    outcome: Result<Projection, ValidationError>,
    cursor: CursorTracker,
    theme: ThemeMode,
    viewport: Viewport,
    debounce: Debouncer,
    recomputes: u64,
}

impl AppState {
    /// Builds the state and computes the first projection right away.
    pub fn new(raw: RawInput, theme: ThemeMode, viewport: Viewport) -> Self {
        let outcome = project(&raw);
        Self {
            raw,
            outcome,
            cursor: CursorTracker::new(),
            theme,
            viewport,
            debounce: Debouncer::default(),
            recomputes: 1,
        }
    }

    pub fn with_debouncer(mut self, debounce: Debouncer) -> Self {
        self.debounce = debounce;
        self
    }

    pub fn update(&mut self, event: AppEvent, now: Instant) -> Update {
        match event {
            AppEvent::Edit(field, value) => {
                let slot = match field {
                    Field::Principal => &mut self.raw.principal,
                    Field::RatePercent => &mut self.raw.rate_percent,
                    Field::Years => &mut self.raw.years,
                    Field::Contribution => &mut self.raw.contribution,
                };
                *slot = value;
                self.debounce.schedule(now);
                Update::default()
            }
            AppEvent::SetContributionFrequency(f) => {
                self.raw.contribution_frequency = f;
                self.debounce.schedule(now);
                Update::default()
            }
            AppEvent::SetCompounding(c) => {
                self.raw.compounding = c;
                self.debounce.schedule(now);
                Update::default()
            }
            AppEvent::PointerMoved { x } => {
                // Drawn by the next frame tick.
                self.cursor.pointer_moved(x);
                Update::default()
            }
            AppEvent::PointerLeft => {
                self.cursor.pointer_left();
                Update::redraw()
            }
            AppEvent::ToggleTheme => {
                self.theme = self.theme.toggled();
                Update { redraw: true, theme_changed: true, ..Update::default() }
            }
            AppEvent::Resized(viewport) => {
                self.viewport = viewport;
                Update::redraw()
            }
            AppEvent::Frame => {
                let mut out = Update::default();
                if self.debounce.poll(now).is_some() {
                    self.recompute();
                    out.recomputed = true;
                    out.redraw = true;
                }
                if self.cursor.step() {
                    out.redraw = true;
                }
                out
            }
        }
    }

    /// Recompute immediately, bypassing the debounce.
    pub fn recompute(&mut self) {
        self.debounce.cancel();
        self.outcome = project(&self.raw);
        self.recomputes += 1;
    }

    pub fn next_wakeup(&self) -> Wakeup {
        if self.cursor.is_tracking() {
            Wakeup::NextFrame
        } else if let Some(due) = self.debounce.deadline() {
            Wakeup::At(due)
        } else {
            Wakeup::Idle
        }
    }

    pub fn raw(&self) -> &RawInput { &self.raw }
    pub fn theme(&self) -> ThemeMode { self.theme }
    pub fn viewport(&self) -> &Viewport { &self.viewport }
    pub fn cursor(&self) -> &CursorTracker { &self.cursor }
    pub fn outcome(&self) -> Result<&Projection, ValidationError> { self.outcome.as_ref().map_err(|e| *e) }
    pub fn projection(&self) -> Option<&Projection> { self.outcome.as_ref().ok() }
    /// Number of projections computed so far, including the initial one.
    pub fn recompute_count(&self) -> u64 { self.recomputes }

    /// Current series; empty while the input is invalid.
    pub fn series(&self) -> &ProjectionSeries {
        self.projection().map(|p| &p.series).unwrap_or(&EMPTY_SERIES)
    }

    /// Headline text or the validation message.
    pub fn status_text(&self) -> String {
        match &self.outcome {
            Ok(p) => {
                let h = p.headline();
                format!("{}: {} ({})", h.prefix, h.amount, h.breakdown())
            }
            Err(e) => e.to_string(),
        }
    }

    pub fn chart(&self) -> Chart<'_> {
        let term_years = self.projection().map(|p| p.input.term_years).unwrap_or(0);
        Chart::new(self.series(), term_years)
    }

    /// Options for the next draw, built from the current theme, viewport and cursor.
    pub fn render_options(&self, draw_labels: bool) -> RenderOptions {
        RenderOptions {
            viewport: self.viewport,
            theme: self.theme.palette(),
            draw_labels,
            cursor_x: if self.cursor.is_tracking() { self.cursor.current_x() } else { None },
        }
    }

    /// Options for an exported or saved chart: labels on, no hover cursor.
    pub fn export_render_options(&self) -> RenderOptions {
        RenderOptions { cursor_x: None, ..self.render_options(true) }
    }
}
