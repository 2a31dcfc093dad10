// File: crates/growth-report/src/scenarios.rs
// Summary: Loads what-if scenarios from a CSV file, one projection form per row.

use std::io::Read;
use std::path::Path;

use anyhow::{Context, Result};
use growth_core::{CompoundingFrequency, ContributionFrequency, RawInput};

/// A named set of form values.
#[derive(Clone, Debug, PartialEq)]
pub struct Scenario {
    pub name: String,
    pub raw: RawInput,
}

pub fn load_scenarios_csv(path: &Path) -> Result<Vec<Scenario>> {
    let file = std::fs::File::open(path).with_context(|| format!("opening {}", path.display()))?;
    read_scenarios(file)
}

/// Header names are matched case-insensitively; missing optional columns fall back to defaults.
pub fn read_scenarios<R: Read>(reader: R) -> Result<Vec<Scenario>> {
    let mut rdr = csv::ReaderBuilder::new().has_headers(true).trim(csv::Trim::All).from_reader(reader);

    let headers = rdr.headers()?.iter().map(|h| h.to_lowercase()).collect::<Vec<_>>();
    tracing::debug!(?headers, "scenario headers");

    let idx = |names: &[&str]| -> Option<usize> { headers.iter().position(|h| names.contains(&h.as_str())) };

    let i_name = idx(&["name", "scenario"]);
    let i_principal = idx(&["principal", "initial", "initial_investment"]);
    let i_rate = idx(&["rate", "rate_percent", "annual_rate"]);
    let i_years = idx(&["years", "term", "term_years"]);
    let i_contribution = idx(&["contribution", "pmt"]);
    let i_contrib_freq = idx(&["contribution_frequency", "contribution_freq"]);
    let i_compounding = idx(&["compounding", "compound_frequency"]);

    if i_principal.is_none() || i_rate.is_none() || i_years.is_none() {
        anyhow::bail!("scenario CSV needs principal, rate and years columns (found {:?})", headers);
    }

    let mut out = Vec::new();
    for (row, rec) in rdr.records().enumerate() {
        let rec = rec.with_context(|| format!("reading scenario row {}", row + 1))?;
        let cell = |i: Option<usize>| i.and_then(|ix| rec.get(ix)).unwrap_or("").to_string();

        let contribution_frequency = match cell(i_contrib_freq).as_str() {
            "" => ContributionFrequency::default(),
            s => s.parse().map_err(anyhow::Error::msg).with_context(|| format!("row {}", row + 1))?,
        };
        let compounding = match cell(i_compounding).as_str() {
            "" => CompoundingFrequency::default(),
            s => s.parse().map_err(anyhow::Error::msg).with_context(|| format!("row {}", row + 1))?,
        };

        let name = match cell(i_name) {
            n if n.is_empty() => format!("scenario{}", row + 1),
            n => n,
        };
        out.push(Scenario {
            name,
            raw: RawInput {
                principal: cell(i_principal),
                rate_percent: cell(i_rate),
                years: cell(i_years),
                contribution: cell(i_contribution),
                contribution_frequency,
                compounding,
            },
        });
    }
    Ok(out)
}

/// File-name safe version of a scenario name.
pub fn slug(name: &str) -> String {
    let s: String = name
        .chars()
        .map(|c| if c.is_ascii_alphanumeric() { c.to_ascii_lowercase() } else { '_' })
        .collect();
    let s = s.trim_matches('_').to_string();
    if s.is_empty() { "scenario".to_string() } else { s }
}
