//! Text and JSON rendering of a [`CalculationResult`].

use std::fmt::{self, Write as _};

use anyhow::{Context, Result};
use clap::ValueEnum;
use pension_core::{CalculationResult, PensionOption};
use rust_decimal::{Decimal, RoundingStrategy};

/// Output format selected with `--format`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

pub fn render(
    result: &CalculationResult,
    format: OutputFormat,
) -> Result<String> {
    match format {
        OutputFormat::Text => render_text(result).context("failed to render report"),
        OutputFormat::Json => render_json(result),
    }
}

pub fn render_json(result: &CalculationResult) -> Result<String> {
    serde_json::to_string_pretty(result).context("failed to serialize result")
}

/// Currency with exactly two decimals.
fn money(value: Decimal) -> String {
    let mut rounded = value.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
    rounded.rescale(2);
    rounded.to_string()
}

/// A fraction such as `0.21` shown as `21.00%`.
fn fraction_percent(value: Decimal) -> String {
    format!("{}%", money(value * Decimal::ONE_HUNDRED))
}

/// Human-readable report; blocked results show only the reason.
pub fn render_text(result: &CalculationResult) -> Result<String, fmt::Error> {
    let mut out = String::new();

    match &result.holder_name {
        Some(name) => writeln!(out, "Pension estimate for {name}")?,
        None => writeln!(out, "Pension estimate")?,
    }
    line(&mut out, "Modality:", result.modality)?;
    line(&mut out, "Current contribution:", result.current_contribution)?;

    if !result.eligible {
        let reason = result.block_reason.as_deref().unwrap_or("not eligible");
        line(&mut out, "Status:", "NOT ELIGIBLE")?;
        line(&mut out, "Reason:", reason)?;
        return Ok(out);
    }

    let retirement_date = result
        .retirement_date
        .map(|d| d.to_string())
        .unwrap_or_default();
    let best_base = match result.best_option {
        PensionOption::A => result.regulatory_base_a,
        PensionOption::B => result.regulatory_base_b,
    };

    line(&mut out, "Ordinary age:", result.ordinary_age)?;
    line(&mut out, "Retirement age:", result.target_age)?;
    line(&mut out, "Retirement date:", retirement_date)?;
    if result.time_remaining.is_zero() {
        line(&mut out, "Time remaining:", "retirement date reached")?;
    } else {
        line(&mut out, "Time remaining:", result.time_remaining)?;
    }
    line(&mut out, "Final contribution:", result.final_contribution)?;
    line(&mut out, "Accrual:", format_args!("{}%", money(result.accrual_percentage)))?;
    if result.anticipation_months > 0 {
        line(
            &mut out,
            "Anticipation:",
            format_args!("{} months", result.anticipation_months),
        )?;
    }
    if !result.reduction_percentage.is_zero() {
        line(&mut out, "Reduction:", fraction_percent(result.reduction_percentage))?;
    }
    if !result.delay_bonus.is_zero() {
        line(&mut out, "Delay bonus:", fraction_percent(result.delay_bonus))?;
    }
    if !result.gender_gap_supplement.is_zero() {
        line(&mut out, "Child supplement:", money(result.gender_gap_supplement))?;
    }

    writeln!(out)?;
    writeln!(out, "{:<10}{:>18}{:>18}", "Option", "Regulatory base", "Monthly pension")?;
    for (option, base, pension) in [
        (PensionOption::A, result.regulatory_base_a, result.pension_a),
        (PensionOption::B, result.regulatory_base_b, result.pension_b),
    ] {
        writeln!(out, "{:<10}{:>18}{:>18}", option, money(base), money(pension))?;
    }
    writeln!(out)?;
    line(
        &mut out,
        "Best pension:",
        format_args!(
            "{} (option {}, base {})",
            money(result.best_pension),
            result.best_option,
            money(best_base)
        ),
    )?;

    if let Some(comparison) = &result.ordinary_comparison {
        let ordinary_date = comparison
            .ordinary_date
            .map(|d| d.to_string())
            .unwrap_or_default();
        writeln!(out)?;
        line(&mut out, "At ordinary age:", money(comparison.ordinary_pension))?;
        line(&mut out, "Ordinary date:", ordinary_date)?;
        line(&mut out, "Monthly difference:", money(comparison.monthly_difference))?;
    }

    Ok(out)
}

/// One left-aligned `label value` row.
fn line(
    out: &mut String,
    label: &str,
    value: impl fmt::Display,
) -> fmt::Result {
    writeln!(out, "{label:<24}{value}")
}
