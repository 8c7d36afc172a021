//! Insight commands (spending, behavior, advise)

use anyhow::{Context, Result};
use chrono::{Local, NaiveDate};
use finlens_core::{
    advise, behavior, normalize_behavior, spending, AdvisorReport, BehaviorRaw, BehaviorSignals,
    Conclusion, FinlensConfig, PatternScore, SpendingSignals,
};
use serde::Serialize;

use crate::cli::{BehaviorArgs, SpendingArgs};

/// Advisor report tagged with the month it describes
#[derive(Debug, Serialize)]
pub struct MonthlyReport {
    pub month: String,
    #[serde(flatten)]
    pub report: AdvisorReport,
}

/// Fill omitted spending flags from the configured baseline
pub fn resolve_spending(args: &SpendingArgs, config: &FinlensConfig) -> SpendingSignals {
    let base = config.baseline.spending;
    SpendingSignals::new(
        args.ratio.unwrap_or(base.spending_ratio),
        args.volatility.unwrap_or(base.vol_index),
        args.budget.unwrap_or(base.budget_util),
    )
}

/// Fill omitted behavior flags from the configured baseline, then normalize
pub fn resolve_behavior(args: &BehaviorArgs, config: &FinlensConfig) -> Result<BehaviorSignals> {
    let base = config.baseline.behavior;
    let raw = BehaviorRaw {
        late_night_ratio: args.late_night.unwrap_or(base.late_night_ratio),
        subscription_cost_mom_change: args
            .subscription_change
            .unwrap_or(base.subscription_cost_mom_change),
        dining_weekly_increase: args.dining_increase.unwrap_or(base.dining_weekly_increase),
        repeat_small_purchases_count: args.repeats.unwrap_or(base.repeat_small_purchases_count),
    };
    normalize_behavior(&raw, config.normalization.repeat_purchase_cap)
        .context("Invalid behavior metrics")
}

/// Resolve a month label, defaulting to the current month
pub fn resolve_month(month: Option<&str>) -> Result<String> {
    match month {
        Some(m) => {
            NaiveDate::parse_from_str(&format!("{}-01", m), "%Y-%m-%d")
                .with_context(|| format!("Invalid --month '{}' (use YYYY-MM)", m))?;
            Ok(m.to_string())
        }
        None => Ok(Local::now().format("%Y-%m").to_string()),
    }
}

fn print_scores<'a>(title: &str, scores: impl IntoIterator<Item = (Conclusion, &'a PatternScore)>) {
    println!();
    println!("{}", title);
    println!("   ─────────────────────────────────────────────────────────────");
    for (conclusion, score) in scores {
        println!(
            "   {:25} │ {:>4}% │ {}",
            conclusion.label(),
            score.percent,
            score.phrase
        );
    }
}

pub fn cmd_spending(config: &FinlensConfig, args: &SpendingArgs, json: bool) -> Result<()> {
    let signals = resolve_spending(args, config);
    let summary = spending::summarize(&signals).context("Spending inference failed")?;

    if json {
        println!("{}", serde_json::to_string_pretty(&summary)?);
        return Ok(());
    }

    print_scores("📊 Spending Context", summary.entries());
    println!();
    println!(
        "   Inputs: ratio {:.2}, volatility {:.2}, budget {:.2}",
        signals.spending_ratio, signals.vol_index, signals.budget_util
    );
    Ok(())
}

pub fn cmd_behavior(config: &FinlensConfig, args: &BehaviorArgs, json: bool) -> Result<()> {
    let signals = resolve_behavior(args, config)?;
    let summary = behavior::summarize(&signals).context("Behavior inference failed")?;

    if json {
        println!("{}", serde_json::to_string_pretty(&summary)?);
        return Ok(());
    }

    print_scores("🔁 Behavior Patterns", summary.entries());
    Ok(())
}

pub fn cmd_advise(
    config: &FinlensConfig,
    prompt: &str,
    month: Option<&str>,
    spending_args: &SpendingArgs,
    behavior_args: &BehaviorArgs,
    json: bool,
) -> Result<()> {
    let month = resolve_month(month)?;
    let report = advise(
        &resolve_spending(spending_args, config),
        &resolve_behavior(behavior_args, config)?,
        prompt,
        &config.advisor,
    )
    .context("Failed to build advice")?;

    tracing::info!(
        month = %month,
        suggestions = report.suggestions.len(),
        "Advice ready"
    );

    if json {
        let monthly = MonthlyReport { month, report };
        println!("{}", serde_json::to_string_pretty(&monthly)?);
        return Ok(());
    }

    println!();
    println!("💡 Finlens report for {}", month);
    print_scores("📊 Spending Context", report.fuzzy.entries());
    print_scores("🔁 Behavior Patterns", report.behavior.entries());
    println!();
    println!("Suggestions");
    println!("   ─────────────────────────────────────────────────────────────");
    if report.suggestions.is_empty() {
        println!("   Nothing stands out. Keep it up!");
    }
    for tip in &report.suggestions {
        println!("   • {}", tip);
    }
    Ok(())
}
