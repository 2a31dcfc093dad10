// File: crates/growth-window/src/controls.rs
// Summary: Keyboard bindings that stand in for the input form.

use growth_core::{AppEvent, Field, RawInput};
use winit::event::VirtualKeyCode;

pub const RATE_STEP: f64 = 0.5;
pub const YEARS_STEP: f64 = 1.0;
pub const PRINCIPAL_STEP: f64 = 1_000.0;
pub const CONTRIBUTION_STEP: f64 = 50.0;

#[derive(Clone, Debug, PartialEq)]
pub enum Action {
    App(AppEvent),
    Export,
    SavePng,
    Quit,
}

/// Map a key press to an action, reading the current form values for +/- edits.
pub fn action_for_key(key: VirtualKeyCode, raw: &RawInput) -> Option<Action> {
    use VirtualKeyCode as K;
    let edit = |field: Field, current: &str, delta: f64| Action::App(AppEvent::Edit(field, bump(current, delta)));
    let action = match key {
        K::Up => edit(Field::RatePercent, &raw.rate_percent, RATE_STEP),
        K::Down => edit(Field::RatePercent, &raw.rate_percent, -RATE_STEP),
        K::Right => edit(Field::Years, &raw.years, YEARS_STEP),
        K::Left => edit(Field::Years, &raw.years, -YEARS_STEP),
        K::PageUp => edit(Field::Principal, &raw.principal, PRINCIPAL_STEP),
        K::PageDown => edit(Field::Principal, &raw.principal, -PRINCIPAL_STEP),
        K::Equals | K::Plus | K::NumpadAdd => edit(Field::Contribution, &raw.contribution, CONTRIBUTION_STEP),
        K::Minus | K::NumpadSubtract => edit(Field::Contribution, &raw.contribution, -CONTRIBUTION_STEP),
        K::C => Action::App(AppEvent::SetCompounding(raw.compounding.cycle())),
        K::F => Action::App(AppEvent::SetContributionFrequency(raw.contribution_frequency.cycle())),
        K::T => Action::App(AppEvent::ToggleTheme),
        K::P => Action::Export,
        K::S => Action::SavePng,
        K::Escape => Action::Quit,
        _ => return None,
    };
    Some(action)
}

/// Add `delta` to a numeric field. Blank or garbled text starts from zero; results never go negative.
fn bump(current: &str, delta: f64) -> String {
    let base = current.trim().parse::<f64>().ok().filter(|v| v.is_finite()).unwrap_or(0.0);
    let next = (base + delta).max(0.0);
    format!("{next}")
}
