//! Rule-based spending advice
//!
//! Turns the rendered spending and behavior summaries into a short list of
//! concrete tips. Score thresholds are strict (`percent > threshold`), prompt
//! keywords are matched case-insensitively, and duplicates are dropped while
//! preserving order.

use serde::{Deserialize, Serialize};

use crate::behavior::{self, BehaviorSignals, BehaviorSummary};
use crate::error::Result;
use crate::spending::{self, SpendingSignals, SpendingSummary};

const TIP_OVERSPENDING: &str =
    "Set a 48-hour cooldown on non-essential buys; review cart items tomorrow before checkout.";
const TIP_BUDGET_RISK: &str =
    "Trim variable categories by 8-10% for the next two weeks to bring budget risk down.";
const TIP_LATE_NIGHT: &str =
    "Schedule meals earlier and mute food app notifications after 10pm to reduce late-night orders.";
const TIP_DINING_SPIKE: &str =
    "Batch cook 2 dinners this week; target a 15% drop in dining spend next week.";
const TIP_IMPULSE: &str =
    "Use a 24-hour 'park list' for small discretionary purchases before buying.";
const TIP_FOOD: &str =
    "Swap 2 dining occasions with home-prepped meals; expected monthly savings ₹500-₹800.";
const TIP_SUBSCRIPTION: &str =
    "Audit subscriptions: identify one low-usage service to pause for 60 days.";
const TIP_SAVINGS: &str =
    "Automate a weekly round-up transfer of Rs 150-200 into your savings goal.";

/// Advisor configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AdvisorConfig {
    /// Overspending percent above which the cooldown tip is given
    pub overspending_threshold: u8,
    /// Budget risk percent above which the trim tip is given
    pub budget_risk_threshold: u8,
    /// Late-night orders percent above which the meal schedule tip is given
    pub late_night_threshold: u8,
    /// Dining spike percent above which the batch cooking tip is given
    pub dining_spike_threshold: u8,
    /// Impulse buying percent above which the park list tip is given
    pub impulse_threshold: u8,
    /// Maximum number of suggestions returned
    pub max_suggestions: usize,
}

impl Default for AdvisorConfig {
    fn default() -> Self {
        Self {
            overspending_threshold: 65,
            budget_risk_threshold: 60,
            late_night_threshold: 40,
            dining_spike_threshold: 70,
            impulse_threshold: 50,
            max_suggestions: 6,
        }
    }
}

/// Everything the dashboard's advisor panel shows for one request
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AdvisorReport {
    pub prompt: String,
    pub suggestions: Vec<String>,
    pub fuzzy: SpendingSummary,
    pub behavior: BehaviorSummary,
}

/// Pick tips for the given summaries and free-text prompt
pub fn suggestions(
    fuzzy: &SpendingSummary,
    behavior: &BehaviorSummary,
    prompt: &str,
    config: &AdvisorConfig,
) -> Vec<String> {
    let mut tips: Vec<&'static str> = Vec::new();

    if fuzzy.overspending_likelihood.percent > config.overspending_threshold {
        tips.push(TIP_OVERSPENDING);
    }
    if fuzzy.budget_risk.percent > config.budget_risk_threshold {
        tips.push(TIP_BUDGET_RISK);
    }
    if behavior.late_night_orders.percent > config.late_night_threshold {
        tips.push(TIP_LATE_NIGHT);
    }
    if behavior.dining_spike.percent > config.dining_spike_threshold {
        tips.push(TIP_DINING_SPIKE);
    }
    if behavior.impulse_buying_tendency.percent > config.impulse_threshold {
        tips.push(TIP_IMPULSE);
    }

    let q = prompt.to_lowercase();
    if q.contains("food") || q.contains("dining") {
        tips.push(TIP_FOOD);
    }
    if q.contains("subscription") {
        tips.push(TIP_SUBSCRIPTION);
    }
    if q.contains("save") || q.contains("savings") {
        tips.push(TIP_SAVINGS);
    }

    let mut unique: Vec<String> = Vec::with_capacity(tips.len());
    for tip in tips {
        if !unique.iter().any(|t| t == tip) {
            unique.push(tip.to_string());
        }
    }
    unique.truncate(config.max_suggestions);

    tracing::debug!(count = unique.len(), "Advisor suggestions selected");
    unique
}

/// Summarize both rule sets and attach suggestions
pub fn advise(
    spending_signals: &SpendingSignals,
    behavior_signals: &BehaviorSignals,
    prompt: &str,
    config: &AdvisorConfig,
) -> Result<AdvisorReport> {
    let fuzzy = spending::summarize(spending_signals)?;
    let behavior = behavior::summarize(behavior_signals)?;
    let suggestions = suggestions(&fuzzy, &behavior, prompt, config);

    Ok(AdvisorReport {
        prompt: prompt.to_string(),
        suggestions,
        fuzzy,
        behavior,
    })
}
