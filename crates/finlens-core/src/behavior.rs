//! Behavior pattern rules
//!
//! Patterns covered:
//! - late_night_orders
//! - subscription_creep
//! - dining_spike
//! - impulse_buying_tendency
//!
//! Every input shares the generic low/medium/high term set over [0, 1].

use serde::{Deserialize, Serialize};

use crate::error::{ensure_finite, Result};
use crate::fuzzy::membership::any_of;
use crate::fuzzy::{clamp01, hedge_somewhat, hedge_very, LevelTerms};
use crate::presentation::PatternScore;
use crate::types::{Conclusion, RuleSet};

/// Behavior signals, each pre-normalized to 0.0-1.0
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BehaviorSignals {
    /// Fraction of orders placed late at night (22:00-03:00)
    pub late_night_ratio: f64,
    /// Month-over-month subscription cost creep (0 = flat or down)
    pub subscription_cost_mom_change: f64,
    /// Last 7 days of dining spend vs baseline
    pub dining_weekly_increase: f64,
    /// Small discretionary repeat purchases, normalized
    pub repeat_small_purchases_norm: f64,
}

impl BehaviorSignals {
    fn validate(&self) -> Result<()> {
        ensure_finite("late_night_ratio", self.late_night_ratio)?;
        ensure_finite(
            "subscription_cost_mom_change",
            self.subscription_cost_mom_change,
        )?;
        ensure_finite("dining_weekly_increase", self.dining_weekly_increase)?;
        ensure_finite(
            "repeat_small_purchases_norm",
            self.repeat_small_purchases_norm,
        )?;
        Ok(())
    }
}

/// Degree of each behavior pattern, all in [0, 1]
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BehaviorInference {
    pub late_night_orders: f64,
    pub subscription_creep: f64,
    pub dining_spike: f64,
    pub impulse_buying_tendency: f64,
}

impl BehaviorInference {
    pub fn degree(&self, conclusion: Conclusion) -> Option<f64> {
        match conclusion {
            Conclusion::LateNightOrders => Some(self.late_night_orders),
            Conclusion::SubscriptionCreep => Some(self.subscription_creep),
            Conclusion::DiningSpike => Some(self.dining_spike),
            Conclusion::ImpulseBuyingTendency => Some(self.impulse_buying_tendency),
            _ => None,
        }
    }

    pub fn entries(&self) -> [(Conclusion, f64); 4] {
        [
            (Conclusion::LateNightOrders, self.late_night_orders),
            (Conclusion::SubscriptionCreep, self.subscription_creep),
            (Conclusion::DiningSpike, self.dining_spike),
            (
                Conclusion::ImpulseBuyingTendency,
                self.impulse_buying_tendency,
            ),
        ]
    }
}

/// Rendered behavior patterns
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BehaviorSummary {
    pub late_night_orders: PatternScore,
    pub subscription_creep: PatternScore,
    pub dining_spike: PatternScore,
    pub impulse_buying_tendency: PatternScore,
}

impl BehaviorSummary {
    pub fn entries(&self) -> [(Conclusion, &PatternScore); 4] {
        [
            (Conclusion::LateNightOrders, &self.late_night_orders),
            (Conclusion::SubscriptionCreep, &self.subscription_creep),
            (Conclusion::DiningSpike, &self.dining_spike),
            (
                Conclusion::ImpulseBuyingTendency,
                &self.impulse_buying_tendency,
            ),
        ]
    }
}

fn late_night_orders(ln: &LevelTerms) -> f64 {
    any_of(&[ln.high, hedge_somewhat(ln.medium)])
}

fn subscription_creep(sc: &LevelTerms) -> f64 {
    any_of(&[
        sc.high,
        hedge_somewhat(sc.medium).min(hedge_somewhat(sc.high)),
    ])
}

fn dining_spike(dw: &LevelTerms) -> f64 {
    any_of(&[dw.high, hedge_somewhat(dw.medium).min(hedge_very(dw.medium))])
}

fn impulse_buying_tendency(ib: &LevelTerms) -> f64 {
    any_of(&[ib.high, hedge_somewhat(ib.medium)])
}

/// Run the behavior rules
pub fn infer(signals: &BehaviorSignals) -> Result<BehaviorInference> {
    signals.validate()?;

    let ln = LevelTerms::fuzzify(signals.late_night_ratio);
    let sc = LevelTerms::fuzzify(signals.subscription_cost_mom_change);
    let dw = LevelTerms::fuzzify(signals.dining_weekly_increase);
    let ib = LevelTerms::fuzzify(signals.repeat_small_purchases_norm);

    let inference = BehaviorInference {
        late_night_orders: clamp01(late_night_orders(&ln)),
        subscription_creep: clamp01(subscription_creep(&sc)),
        dining_spike: clamp01(dining_spike(&dw)),
        impulse_buying_tendency: clamp01(impulse_buying_tendency(&ib)),
    };

    tracing::debug!(
        rule_set = %RuleSet::Behavior,
        late_night = inference.late_night_orders,
        subscription_creep = inference.subscription_creep,
        dining_spike = inference.dining_spike,
        impulse = inference.impulse_buying_tendency,
        "Behavior inference complete"
    );

    Ok(inference)
}

/// Run the behavior rules and render every pattern
pub fn summarize(signals: &BehaviorSignals) -> Result<BehaviorSummary> {
    let inference = infer(signals)?;
    Ok(BehaviorSummary {
        late_night_orders: PatternScore::render(
            Conclusion::LateNightOrders,
            inference.late_night_orders,
        ),
        subscription_creep: PatternScore::render(
            Conclusion::SubscriptionCreep,
            inference.subscription_creep,
        ),
        dining_spike: PatternScore::render(Conclusion::DiningSpike, inference.dining_spike),
        impulse_buying_tendency: PatternScore::render(
            Conclusion::ImpulseBuyingTendency,
            inference.impulse_buying_tendency,
        ),
    })
}
