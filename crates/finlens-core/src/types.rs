//! Conclusion names and rule-set families

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::presentation::PhraseStyle;

/// The two independent rule sets
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RuleSet {
    /// Month-level spending context (ratio, volatility, budget)
    Spending,
    /// Behavior patterns (late nights, subscriptions, dining, impulse buys)
    Behavior,
}

impl RuleSet {
    pub fn as_str(&self) -> &'static str {
        match self {
            RuleSet::Spending => "spending",
            RuleSet::Behavior => "behavior",
        }
    }

    /// Qualifier wording used when rendering this family's phrases
    pub fn phrase_style(&self) -> PhraseStyle {
        match self {
            RuleSet::Spending => PhraseStyle::Terse,
            RuleSet::Behavior => PhraseStyle::Elevated,
        }
    }
}

impl fmt::Display for RuleSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A named conclusion produced by one of the rule sets
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Conclusion {
    OverspendingLikelihood,
    MonthHighish,
    BudgetRisk,
    LateNightOrders,
    SubscriptionCreep,
    DiningSpike,
    ImpulseBuyingTendency,
}

impl Conclusion {
    /// Stable key used by consumers of the inference output
    pub fn as_str(&self) -> &'static str {
        match self {
            Conclusion::OverspendingLikelihood => "overspending_likelihood",
            Conclusion::MonthHighish => "month_highish",
            Conclusion::BudgetRisk => "budget_risk",
            Conclusion::LateNightOrders => "late_night_orders",
            Conclusion::SubscriptionCreep => "subscription_creep",
            Conclusion::DiningSpike => "dining_spike",
            Conclusion::ImpulseBuyingTendency => "impulse_buying_tendency",
        }
    }

    /// Subject used in the rendered phrase
    pub fn label(&self) -> &'static str {
        match self {
            Conclusion::OverspendingLikelihood => "Overspending likelihood",
            Conclusion::MonthHighish => "This month's spending",
            Conclusion::BudgetRisk => "Budget risk",
            Conclusion::LateNightOrders => "Late-night orders pattern",
            Conclusion::SubscriptionCreep => "Subscription creep",
            Conclusion::DiningSpike => "Dining spend spike",
            Conclusion::ImpulseBuyingTendency => "Impulse buying tendency",
        }
    }

    pub fn rule_set(&self) -> RuleSet {
        match self {
            Conclusion::OverspendingLikelihood
            | Conclusion::MonthHighish
            | Conclusion::BudgetRisk => RuleSet::Spending,
            Conclusion::LateNightOrders
            | Conclusion::SubscriptionCreep
            | Conclusion::DiningSpike
            | Conclusion::ImpulseBuyingTendency => RuleSet::Behavior,
        }
    }

    pub fn all() -> &'static [Conclusion] {
        &[
            Conclusion::OverspendingLikelihood,
            Conclusion::MonthHighish,
            Conclusion::BudgetRisk,
            Conclusion::LateNightOrders,
            Conclusion::SubscriptionCreep,
            Conclusion::DiningSpike,
            Conclusion::ImpulseBuyingTendency,
        ]
    }
}

impl fmt::Display for Conclusion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
