// File: crates/growth-report/src/main.rs
// Summary: Headless report CLI; projects one or more scenarios and writes chart PNGs plus printable HTML reports.

mod scenarios;

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Parser;
use growth_core::{
    project, AppConfig, Chart, ChartRenderer, CompoundingFrequency, ContributionFrequency, ExportReport,
    RenderOptions, ThemeMode, Viewport,
};

use scenarios::{load_scenarios_csv, slug, Scenario};

#[derive(Parser, Debug)]
#[command(name = "growth-report", about = "Render compound interest projections to PNG and HTML")]
struct Args {
    /// CSV of scenarios (columns: name, principal, rate, years, contribution, contribution_frequency, compounding).
    /// When given, the single-scenario flags are ignored.
    #[arg(long)]
    scenarios: Option<PathBuf>,
    /// JSON config supplying defaults for the single-scenario flags.
    #[arg(long)]
    config: Option<PathBuf>,
    #[arg(long)]
    principal: Option<String>,
    /// Annual rate in percent.
    #[arg(long)]
    rate: Option<String>,
    #[arg(long)]
    years: Option<String>,
    #[arg(long)]
    contribution: Option<String>,
    #[arg(long)]
    contribution_frequency: Option<ContributionFrequency>,
    #[arg(long)]
    compounding: Option<CompoundingFrequency>,
    #[arg(long, default_value = "light")]
    theme: ThemeMode,
    #[arg(long, default_value_t = 960.0)]
    width: f32,
    #[arg(long, default_value_t = 540.0)]
    height: f32,
    #[arg(long, default_value_t = 1.0)]
    dpr: f32,
    #[arg(long, default_value = "target/out")]
    out_dir: PathBuf,
    /// Only print headlines; skip PNG and HTML output.
    #[arg(long)]
    dry_run: bool,
}

fn main() -> Result<()> {
    let _ = growth_core::telemetry::init_default_tracing();
    let args = Args::parse();

    let scenarios = match &args.scenarios {
        Some(path) => {
            let rows = load_scenarios_csv(path)
                .with_context(|| format!("failed to load scenarios '{}'", path.display()))?;
            println!("Loaded {} scenarios from {}", rows.len(), path.display());
            rows
        }
        None => vec![single_scenario(&args)?],
    };
    if scenarios.is_empty() {
        anyhow::bail!("no scenarios to report");
    }

    if !args.dry_run {
        std::fs::create_dir_all(&args.out_dir)
            .with_context(|| format!("creating {}", args.out_dir.display()))?;
    }

    let renderer = ChartRenderer::new();
    let opts = RenderOptions {
        viewport: Viewport::new(args.width, args.height, args.dpr),
        theme: args.theme.palette(),
        draw_labels: true,
        cursor_x: None,
    };

    let mut failures = 0usize;
    for scenario in &scenarios {
        if let Err(e) = report(scenario, &renderer, &opts, &args) {
            failures += 1;
            eprintln!("{}: {e:#}", scenario.name);
        }
    }
    if failures > 0 {
        anyhow::bail!("{failures} of {} scenarios failed", scenarios.len());
    }
    Ok(())
}

/// Build the single scenario from flags layered over the config file defaults.
fn single_scenario(args: &Args) -> Result<Scenario> {
    let config = match &args.config {
        Some(path) => AppConfig::load(path).with_context(|| format!("failed to load config '{}'", path.display()))?,
        None => AppConfig::default(),
    };
    let mut raw = config.inputs;
    if let Some(v) = &args.principal { raw.principal = v.clone(); }
    if let Some(v) = &args.rate { raw.rate_percent = v.clone(); }
    if let Some(v) = &args.years { raw.years = v.clone(); }
    if let Some(v) = &args.contribution { raw.contribution = v.clone(); }
    if let Some(v) = args.contribution_frequency { raw.contribution_frequency = v; }
    if let Some(v) = args.compounding { raw.compounding = v; }
    Ok(Scenario { name: "growth".to_string(), raw })
}

/// Print the headline and write the scenario's PNG and HTML. Invalid inputs are reported, not failed.
fn report(scenario: &Scenario, renderer: &ChartRenderer, opts: &RenderOptions, args: &Args) -> Result<()> {
    let projection = match project(&scenario.raw) {
        Ok(p) => p,
        Err(e) => {
            println!("{}: {e}", scenario.name);
            return Ok(());
        }
    };
    let h = projection.headline();
    println!("{}: {}: {} ({})", scenario.name, h.prefix, h.amount, h.breakdown());
    if args.dry_run {
        return Ok(());
    }

    let chart = Chart::new(&projection.series, projection.input.term_years);
    let png_path = out_name_with(&args.out_dir, &scenario.name, "png");
    let png = renderer.render_to_png_bytes(&chart, opts)?;
    std::fs::write(&png_path, &png).with_context(|| format!("writing {}", png_path.display()))?;
    println!("  Wrote {}", png_path.display());

    let report = ExportReport::new(Ok(&projection), &png)?;
    let html_path = out_name_with(&args.out_dir, &scenario.name, "html");
    report.write(&html_path)?;
    println!("  Wrote {}", html_path.display());
    Ok(())
}

/// Produce output file name like target/out/chart_<name>.<ext>
fn out_name_with(out_dir: &Path, name: &str, ext: &str) -> PathBuf {
    out_dir.join(format!("chart_{}.{ext}", slug(name)))
}
