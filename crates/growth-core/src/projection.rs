// File: crates/growth-core/src/projection.rs
// Summary: Input validation and the monthly projection sampler.
// Notes:
// - Every sample is evaluated from the closed-form model. Do not replace this with
//   an accumulating loop; the last sample must equal the exact end-of-term total.

use serde::{Deserialize, Serialize};

use crate::error::ValidationError;
use crate::finance::{future_value, normalize_contribution, CompoundingFrequency, ContributionFrequency};
use crate::format::format_money_exact;

pub const MAX_ANNUAL_RATE: f64 = 0.5;
pub const MIN_TERM_YEARS: u32 = 1;
pub const MAX_TERM_YEARS: u32 = 100;
pub const MONTHS_PER_YEAR: u32 = 12;

/// Form snapshot exactly as typed. Numeric fields stay text until `parse`.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RawInput {
    pub principal: String,
    /// Annual rate in percent, e.g. "7" for 7%.
    pub rate_percent: String,
    pub years: String,
    pub contribution: String,
    pub contribution_frequency: ContributionFrequency,
    pub compounding: CompoundingFrequency,
}

impl RawInput {
    /// Convenience constructor from already-numeric values.
    pub fn from_values(
        principal: f64,
        rate_percent: f64,
        years: u32,
        contribution: f64,
        contribution_frequency: ContributionFrequency,
        compounding: CompoundingFrequency,
    ) -> Self {
        Self {
            principal: principal.to_string(),
            rate_percent: rate_percent.to_string(),
            years: years.to_string(),
            contribution: contribution.to_string(),
            contribution_frequency,
            compounding,
        }
    }

    pub fn parse(&self) -> Result<ProjectionInput, ValidationError> {
        let principal = parse_number(&self.principal).ok_or(ValidationError::MissingValues)?;
        let rate_percent = parse_number(&self.rate_percent).ok_or(ValidationError::MissingValues)?;
        let years = parse_number(&self.years).ok_or(ValidationError::MissingValues)?;
        // An empty contribution field means "no contributions".
        let contribution = if self.contribution.trim().is_empty() {
            0.0
        } else {
            parse_number(&self.contribution).ok_or(ValidationError::MissingValues)?
        };

        if years.fract() != 0.0 || years < MIN_TERM_YEARS as f64 || years > MAX_TERM_YEARS as f64 {
            return Err(ValidationError::Unrealistic);
        }
        ProjectionInput::try_new(
            principal,
            rate_percent / 100.0,
            years as u32,
            contribution,
            self.contribution_frequency,
            self.compounding,
        )
    }
}

fn parse_number(s: &str) -> Option<f64> {
    let s = s.trim();
    if s.is_empty() { return None; }
    s.parse::<f64>().ok().filter(|v| v.is_finite())
}

/// Validated projection parameters.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ProjectionInput {
    pub principal: f64,
    /// Annual rate as a fraction in (0, 0.5].
    pub annual_rate: f64,
    pub term_years: u32,
    pub contribution: f64,
    pub contribution_frequency: ContributionFrequency,
    pub compounding: CompoundingFrequency,
}

impl ProjectionInput {
    pub fn try_new(
        principal: f64,
        annual_rate: f64,
        term_years: u32,
        contribution: f64,
        contribution_frequency: ContributionFrequency,
        compounding: CompoundingFrequency,
    ) -> Result<Self, ValidationError> {
        let realistic = principal > 0.0
            && annual_rate > 0.0
            && annual_rate <= MAX_ANNUAL_RATE
            && (MIN_TERM_YEARS..=MAX_TERM_YEARS).contains(&term_years)
            && contribution >= 0.0;
        if !realistic {
            return Err(ValidationError::Unrealistic);
        }
        Ok(Self { principal, annual_rate, term_years, contribution, contribution_frequency, compounding })
    }

    pub fn periods_per_year(&self) -> u32 { self.compounding.periods_per_year() }

    /// Contribution per compounding period.
    pub fn pmt(&self) -> f64 {
        normalize_contribution(self.contribution, self.contribution_frequency, self.periods_per_year())
    }

    pub fn months(&self) -> u32 { self.term_years * MONTHS_PER_YEAR }

    pub fn value_at(&self, years: f64) -> f64 {
        future_value(self.principal, self.annual_rate, years, self.pmt(), self.periods_per_year())
    }

    /// Principal plus everything paid in after `years`, without growth.
    pub fn paid_in_at(&self, years: f64) -> f64 {
        self.principal + self.pmt() * self.periods_per_year() as f64 * years
    }
}

/// Two parallel monthly series indexed by month offset.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ProjectionSeries {
    pub total_value: Vec<f64>,
    pub contribution_baseline: Vec<f64>,
}

impl ProjectionSeries {
    pub fn empty() -> Self { Self::default() }

    pub fn sample(input: &ProjectionInput) -> Self {
        let months = input.months();
        let mut total_value = Vec::with_capacity(months as usize + 1);
        let mut contribution_baseline = Vec::with_capacity(months as usize + 1);
        for m in 0..=months {
            let years_elapsed = m as f64 / MONTHS_PER_YEAR as f64;
            total_value.push(input.value_at(years_elapsed));
            contribution_baseline.push(input.paid_in_at(years_elapsed));
        }
        Self { total_value, contribution_baseline }
    }

    pub fn len(&self) -> usize { self.total_value.len() }
    pub fn is_empty(&self) -> bool { self.total_value.is_empty() }

    /// Linear interpolation of both series at a fractional sample index.
    /// Returns `(total, baseline)`; `None` when empty. The index is clamped to `[0, len-1]`.
    pub fn interpolate(&self, index: f64) -> Option<(f64, f64)> {
        if self.is_empty() { return None; }
        let last = self.len() - 1;
        let idx = index.clamp(0.0, last as f64);
        let i0 = idx.floor() as usize;
        let i1 = (i0 + 1).min(last);
        let t = idx - i0 as f64;
        let lerp = |s: &[f64]| s[i0] * (1.0 - t) + s[i1] * t;
        Some((lerp(&self.total_value), lerp(&self.contribution_baseline)))
    }
}

/// Exact end-of-term numbers plus the sampled curve.
#[derive(Clone, Debug, PartialEq)]
pub struct Projection {
    pub input: ProjectionInput,
    pub pmt: f64,
    pub total: f64,
    pub principal_and_contributions: f64,
    pub growth: f64,
    pub series: ProjectionSeries,
}

impl Projection {
    pub fn compute(input: &ProjectionInput) -> Self {
        let years = input.term_years as f64;
        let total = input.value_at(years);
        let principal_and_contributions = input.paid_in_at(years);
        let series = ProjectionSeries::sample(input);
        tracing::debug!(
            principal = input.principal,
            rate = input.annual_rate,
            years = input.term_years,
            samples = series.len(),
            total,
            "projection computed"
        );
        Self {
            input: *input,
            pmt: input.pmt(),
            total,
            principal_and_contributions,
            growth: total - principal_and_contributions,
            series,
        }
    }

    pub fn headline(&self) -> Headline {
        Headline {
            prefix: format!("After {} years", self.input.term_years),
            amount: format_money_exact(self.total),
            principal_and_contributions: format!(
                "Principal & Contributions: {}",
                format_money_exact(self.principal_and_contributions)
            ),
            growth: format!("Growth: {}", format_money_exact(self.growth)),
        }
    }
}

/// Display strings for the result panel.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Headline {
    pub prefix: String,
    pub amount: String,
    pub principal_and_contributions: String,
    pub growth: String,
}

impl Headline {
    pub fn breakdown(&self) -> String {
        format!("{} · {}", self.principal_and_contributions, self.growth)
    }
}

/// Parse, validate and project in one step.
pub fn project(raw: &RawInput) -> Result<Projection, ValidationError> {
    let input = raw.parse().map_err(|e| {
        tracing::debug!(reason = %e, "projection rejected");
        e
    })?;
    Ok(Projection::compute(&input))
}
