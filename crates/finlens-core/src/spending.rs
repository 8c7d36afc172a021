//! Spending context rules
//!
//! Combines how this month compares to a typical month (spending ratio),
//! how erratic recent spending is (volatility) and how much of the budget is
//! used into three conclusions: overspending likelihood, whether the month
//! runs high-ish, and budget risk.

use serde::{Deserialize, Serialize};

use crate::error::{ensure_finite, Result};
use crate::fuzzy::membership::any_of;
use crate::fuzzy::{
    clamp01, hedge_somewhat, hedge_very, BudgetTerms, SpendingRatioTerms, VolatilityTerms,
};
use crate::presentation::PatternScore;
use crate::types::{Conclusion, RuleSet};

/// Normalized month-level signals
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SpendingSignals {
    /// Current month spend / typical month, 0.0-3.0
    pub spending_ratio: f64,
    /// Normalized volatility (std/mean, capped), 0.0-1.0
    pub vol_index: f64,
    /// Current spend / budget, 0.0-1.8
    pub budget_util: f64,
}

impl SpendingSignals {
    pub fn new(spending_ratio: f64, vol_index: f64, budget_util: f64) -> Self {
        Self {
            spending_ratio,
            vol_index,
            budget_util,
        }
    }

    fn validate(&self) -> Result<()> {
        ensure_finite("spending_ratio", self.spending_ratio)?;
        ensure_finite("vol_index", self.vol_index)?;
        ensure_finite("budget_util", self.budget_util)?;
        Ok(())
    }
}

/// Degree of each spending conclusion, all in [0, 1]
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SpendingInference {
    pub overspending_likelihood: f64,
    pub month_highish: f64,
    pub budget_risk: f64,
}

impl SpendingInference {
    pub fn degree(&self, conclusion: Conclusion) -> Option<f64> {
        match conclusion {
            Conclusion::OverspendingLikelihood => Some(self.overspending_likelihood),
            Conclusion::MonthHighish => Some(self.month_highish),
            Conclusion::BudgetRisk => Some(self.budget_risk),
            _ => None,
        }
    }

    pub fn entries(&self) -> [(Conclusion, f64); 3] {
        [
            (
                Conclusion::OverspendingLikelihood,
                self.overspending_likelihood,
            ),
            (Conclusion::MonthHighish, self.month_highish),
            (Conclusion::BudgetRisk, self.budget_risk),
        ]
    }
}

/// Rendered spending context
///
/// The overspending score serializes as `overspending`, the key the
/// dashboard reads.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SpendingSummary {
    #[serde(rename = "overspending")]
    pub overspending_likelihood: PatternScore,
    pub month_highish: PatternScore,
    pub budget_risk: PatternScore,
}

impl SpendingSummary {
    pub fn entries(&self) -> [(Conclusion, &PatternScore); 3] {
        [
            (
                Conclusion::OverspendingLikelihood,
                &self.overspending_likelihood,
            ),
            (Conclusion::MonthHighish, &self.month_highish),
            (Conclusion::BudgetRisk, &self.budget_risk),
        ]
    }
}

fn overspending_likelihood(r: &SpendingRatioTerms, v: &VolatilityTerms, b: &BudgetTerms) -> f64 {
    any_of(&[
        r.high.min(hedge_somewhat(v.stable)),
        hedge_somewhat(r.high).min(v.variable),
        b.high.min(hedge_somewhat(r.normal)),
    ])
}

fn month_highish(r: &SpendingRatioTerms, v: &VolatilityTerms) -> f64 {
    any_of(&[
        hedge_somewhat(r.normal),
        r.high.min(hedge_somewhat(v.stable)),
        hedge_somewhat(r.high).min(hedge_somewhat(v.variable)),
    ])
}

fn budget_risk(r: &SpendingRatioTerms, v: &VolatilityTerms, b: &BudgetTerms) -> f64 {
    any_of(&[
        b.high,
        b.medium.min(r.high),
        b.medium.min(hedge_very(v.high)),
    ])
}

/// Run the spending rules
pub fn infer(signals: &SpendingSignals) -> Result<SpendingInference> {
    signals.validate()?;

    let r = SpendingRatioTerms::fuzzify(signals.spending_ratio);
    let v = VolatilityTerms::fuzzify(signals.vol_index);
    let b = BudgetTerms::fuzzify(signals.budget_util);

    let inference = SpendingInference {
        overspending_likelihood: clamp01(overspending_likelihood(&r, &v, &b)),
        month_highish: clamp01(month_highish(&r, &v)),
        budget_risk: clamp01(budget_risk(&r, &v, &b)),
    };

    tracing::debug!(
        rule_set = %RuleSet::Spending,
        spending_ratio = signals.spending_ratio,
        vol_index = signals.vol_index,
        budget_util = signals.budget_util,
        overspending = inference.overspending_likelihood,
        month_highish = inference.month_highish,
        budget_risk = inference.budget_risk,
        "Spending inference complete"
    );

    Ok(inference)
}

/// Run the spending rules and render every conclusion
pub fn summarize(signals: &SpendingSignals) -> Result<SpendingSummary> {
    let inference = infer(signals)?;
    Ok(SpendingSummary {
        overspending_likelihood: PatternScore::render(
            Conclusion::OverspendingLikelihood,
            inference.overspending_likelihood,
        ),
        month_highish: PatternScore::render(Conclusion::MonthHighish, inference.month_highish),
        budget_risk: PatternScore::render(Conclusion::BudgetRisk, inference.budget_risk),
    })
}
