// File: crates/growth-core/src/export.rs
// Summary: Standalone printable HTML report (headline, inputs table, embedded chart PNG).

use std::path::Path;

use base64::Engine as _;
use chrono::{DateTime, Local};

use crate::error::{GrowthError, Result, ValidationError};
use crate::format::format_money_exact;
use crate::projection::Projection;

pub const REPORT_TITLE: &str = "Compound Interest Graph";

/// Rows of the "Inputs" table, label then display value. Every row reflects the projected input.
pub fn input_rows(projection: &Projection) -> Vec<(&'static str, String)> {
    let input = &projection.input;
    vec![
        ("Initial Investment", format_money_exact(input.principal)),
        ("Annual Rate", format_percent(input.annual_rate)),
        ("Years", input.term_years.to_string()),
        (
            "Contribution",
            format!("{} ({})", format_money_exact(input.contribution), input.contribution_frequency),
        ),
        ("Compound Frequency", input.compounding.label().to_string()),
    ]
}

pub struct ExportReport<'a> {
    pub projection: &'a Projection,
    /// PNG bytes of the last rendered chart.
    pub chart_png: &'a [u8],
    pub generated_at: DateTime<Local>,
}

impl<'a> ExportReport<'a> {
    /// Requires a successful projection; a validation state has nothing to report.
    pub fn new(
        outcome: std::result::Result<&'a Projection, ValidationError>,
        chart_png: &'a [u8],
    ) -> Result<Self> {
        let projection = outcome.map_err(GrowthError::NothingToExport)?;
        Ok(Self { projection, chart_png, generated_at: Local::now() })
    }

    pub fn to_html(&self) -> String {
        let headline = self.projection.headline();
        let rows: String = input_rows(self.projection)
            .iter()
            .map(|(k, v)| {
                format!(
                    "<tr><td style=\"color:#666\">{}</td><td><strong>{}</strong></td></tr>",
                    escape_html(k),
                    escape_html(v)
                )
            })
            .collect();
        let image = base64::engine::general_purpose::STANDARD.encode(self.chart_png);

        format!(
            r#"<!DOCTYPE html>
<html>
<head>
  <meta charset="utf-8">
  <title>{title}</title>
  <style>
    body {{ font-family: system-ui, -apple-system, sans-serif; padding: 30px; }}
    h2, h3 {{ margin-bottom: 10px }}
    table {{ margin-bottom: 30px }}
  </style>
</head>
<body>
  <h2>{title}</h2>
  <div style="font-size:32px;font-weight:700;margin:10px 0;">{amount}</div>
  <div style="color:#666;margin-bottom:20px">{breakdown}</div>
  <h3>Inputs</h3>
  <table cellspacing="0" cellpadding="6">{rows}</table>
  <img id="chart" src="data:image/png;base64,{image}" style="width:100%;max-width:600px;margin-top:20px"/>
  <p style="color:#999;font-size:12px">Generated {generated}</p>
  <script>
    window.onload = function () {{
      var img = document.getElementById("chart");
      if (img && !img.complete) {{ img.onload = function () {{ window.focus(); window.print(); }}; }}
      else {{ window.focus(); window.print(); }}
    }};
  </script>
</body>
</html>
"#,
            title = REPORT_TITLE,
            amount = escape_html(&headline.amount),
            breakdown = escape_html(&headline.breakdown()),
            rows = rows,
            image = image,
            generated = self.generated_at.format("%Y-%m-%d %H:%M"),
        )
    }

    pub fn write(&self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(path, self.to_html())?;
        tracing::info!(path = %path.display(), "export written");
        Ok(())
    }
}

/// `0.07` -> `7%`, `0.0725` -> `7.25%`.
fn format_percent(rate: f64) -> String {
    let text = format!("{:.4}", rate * 100.0);
    let text = text.trim_end_matches('0').trim_end_matches('.');
    format!("{text}%")
}

fn escape_html(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for ch in s.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            _ => out.push(ch),
        }
    }
    out
}
