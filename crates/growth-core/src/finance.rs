// File: crates/growth-core/src/finance.rs
// Summary: Closed-form future value and contribution normalization.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// How often interest is capitalized.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum CompoundingFrequency {
    Annually,
    SemiAnnually,
    Quarterly,
    Monthly,
    Daily,
}

impl CompoundingFrequency {
    pub const ALL: [CompoundingFrequency; 5] = [
        Self::Annually,
        Self::SemiAnnually,
        Self::Quarterly,
        Self::Monthly,
        Self::Daily,
    ];

    pub const fn periods_per_year(self) -> u32 {
        match self {
            Self::Annually => 1,
            Self::SemiAnnually => 2,
            Self::Quarterly => 4,
            Self::Monthly => 12,
            Self::Daily => 365,
        }
    }

    /// Human label, as shown in the form and in exports.
    pub const fn label(self) -> &'static str {
        match self {
            Self::Annually => "Annually",
            Self::SemiAnnually => "Semiannually",
            Self::Quarterly => "Quarterly",
            Self::Monthly => "Monthly",
            Self::Daily => "Daily",
        }
    }

    /// Next option in form order, wrapping around.
    pub fn cycle(self) -> Self {
        let i = Self::ALL.iter().position(|f| *f == self).unwrap_or(0);
        Self::ALL[(i + 1) % Self::ALL.len()]
    }
}

impl Default for CompoundingFrequency {
    fn default() -> Self { Self::Monthly }
}

impl fmt::Display for CompoundingFrequency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result { f.write_str(self.label()) }
}

/// Accepts a label (`monthly`, `semi-annually`) or periods per year (`12`).
impl FromStr for CompoundingFrequency {
    type Err = String;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key = s.trim().to_ascii_lowercase().replace('-', "");
        let periods = key.parse::<u32>().ok();
        Self::ALL
            .into_iter()
            .find(|f| f.label().eq_ignore_ascii_case(&key) || Some(f.periods_per_year()) == periods)
            .ok_or_else(|| format!("unknown compounding frequency '{s}'"))
    }
}

/// How often the contribution amount is paid in.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ContributionFrequency {
    Daily,
    Monthly,
    Annually,
    /// Once per compounding period.
    PerPeriod,
}

impl ContributionFrequency {
    pub const ALL: [ContributionFrequency; 4] = [Self::Daily, Self::Monthly, Self::Annually, Self::PerPeriod];

    pub fn occurrences_per_year(self, periods_per_year: u32) -> f64 {
        match self {
            Self::Daily => 365.0,
            Self::Monthly => 12.0,
            Self::Annually => 1.0,
            Self::PerPeriod => periods_per_year as f64,
        }
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Daily => "daily",
            Self::Monthly => "monthly",
            Self::Annually => "annually",
            Self::PerPeriod => "per-period",
        }
    }

    pub fn cycle(self) -> Self {
        let i = Self::ALL.iter().position(|f| *f == self).unwrap_or(0);
        Self::ALL[(i + 1) % Self::ALL.len()]
    }
}

impl Default for ContributionFrequency {
    fn default() -> Self { Self::Monthly }
}

impl fmt::Display for ContributionFrequency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result { f.write_str(self.as_str()) }
}

impl FromStr for ContributionFrequency {
    type Err = String;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|f| f.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| format!("unknown contribution frequency '{s}'"))
    }
}

/// Future value of `principal` plus an ordinary annuity of `pmt` per period.
/// `rate` is the annual rate as a fraction and must be > 0 when `pmt != 0`.
pub fn future_value(principal: f64, rate: f64, years: f64, pmt: f64, periods_per_year: u32) -> f64 {
    let n = periods_per_year as f64;
    let period_rate = rate / n;
    let factor = (1.0 + period_rate).powf(n * years);
    let fv_principal = principal * factor;
    let fv_contrib = if pmt == 0.0 { 0.0 } else { pmt * ((factor - 1.0) / period_rate) };
    fv_principal + fv_contrib
}

/// Convert a user-entered contribution into the amount paid per compounding period (PMT).
pub fn normalize_contribution(amount: f64, frequency: ContributionFrequency, periods_per_year: u32) -> f64 {
    amount * frequency.occurrences_per_year(periods_per_year) / periods_per_year as f64
}
