use std::path::PathBuf;

use anyhow::{Context, Result};
use chrono::{Local, NaiveDate};
use clap::Parser;
use tracing::{debug, info};

use pension_cli::{logging, parse_modality, report};
use pension_core::{PensionCalculator, RetirementModality, SchemeConfig};
use pension_data::{ContributionBaseLoader, load_profile_from_file, load_scheme_from_file};

// ─── CLI definition ──────────────────────────────────────────────────────────

/// Retirement age and monthly pension estimator.
///
/// Reads a worker profile, optionally replaces its contribution bases with a
/// CSV file, and prints the estimate under the default or an overridden
/// scheme.
#[derive(Debug, Parser)]
#[command(name = "pension-estimator")]
#[command(version, about, long_about = None)]
struct Cli {
    /// Worker profile (TOML).
    #[arg(short, long)]
    profile: PathBuf,

    /// Contribution bases (CSV with `year,monthly_base`); replaces any inline bases.
    #[arg(short, long)]
    bases: Option<PathBuf>,

    /// Scheme overrides (TOML); unspecified fields keep their defaults.
    #[arg(short, long)]
    scheme: Option<PathBuf>,

    /// Overrides the profile's modality (ORD, EARLY_VOL, EARLY_INVOL, DELAYED, PARTIAL).
    #[arg(short, long, value_parser = parse_modality)]
    modality: Option<RetirementModality>,

    /// Reference date (YYYY-MM-DD); defaults to the local date.
    #[arg(long)]
    today: Option<NaiveDate>,

    /// Output format.
    #[arg(short, long, value_enum, default_value_t = report::OutputFormat::Text)]
    format: report::OutputFormat,

    /// Append log records to this file as well as stderr.
    #[arg(long)]
    log_file: Option<PathBuf>,
}

// ─── entry point ─────────────────────────────────────────────────────────────

fn main() -> Result<()> {
    let cli = Cli::parse();

    logging::init_logging(cli.log_file.as_deref())?;

    let mut profile = load_profile_from_file(&cli.profile)
        .with_context(|| format!("Failed to load profile: {}", cli.profile.display()))?;

    if let Some(modality) = cli.modality {
        profile.modality = modality;
    }

    if let Some(path) = &cli.bases {
        profile.contribution_bases = ContributionBaseLoader::load_from_file(path)
            .with_context(|| format!("Failed to load contribution bases: {}", path.display()))?;
    }

    let config = match &cli.scheme {
        Some(path) => load_scheme_from_file(path)
            .with_context(|| format!("Failed to load scheme: {}", path.display()))?,
        None => SchemeConfig::default(),
    };
    let calculator = PensionCalculator::new(config).context("Invalid scheme configuration")?;

    let today = cli.today.unwrap_or_else(|| Local::now().date_naive());
    debug!(%today, bases = profile.contribution_bases.len(), "running calculation");

    let result = calculator.calculate_as_of(&profile, today);
    info!(
        eligible = result.eligible,
        best_pension = %result.best_pension,
        "estimate ready"
    );

    print!("{}", report::render(&result, cli.format)?);
    Ok(())
}
