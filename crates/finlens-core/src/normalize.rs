//! Raw behavior metrics -> normalized signals

use serde::{Deserialize, Serialize};

use crate::behavior::BehaviorSignals;
use crate::error::{ensure_finite, Result};
use crate::fuzzy::clamp01;

/// Default cap for the repeat small purchases count
pub const DEFAULT_REPEAT_PURCHASE_CAP: f64 = 10.0;

/// Behavior metrics as aggregated from transactions, before normalization
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BehaviorRaw {
    /// Fraction of orders in the 22:00-03:00 window
    pub late_night_ratio: f64,
    /// Month-over-month subscription cost increase mapped to 0..1 (decreases are 0)
    pub subscription_cost_mom_change: f64,
    /// Last 7 days vs baseline dining increase
    pub dining_weekly_increase: f64,
    /// Count of small discretionary repeat purchases in the last two weeks
    pub repeat_small_purchases_count: u32,
}

/// Normalize raw metrics to the 0..1 range expected by the behavior rules
///
/// The purchase count is divided by `repeat_purchase_cap` and capped at 1.
/// Finite ratios are clamped; NaN or infinite ratios, or a non-finite cap,
/// fail with [`Error::InvalidSignal`](crate::Error::InvalidSignal).
pub fn normalize_behavior(
    raw: &BehaviorRaw,
    repeat_purchase_cap: f64,
) -> Result<BehaviorSignals> {
    let cap = ensure_finite("repeat_purchase_cap", repeat_purchase_cap)?;
    let repeat_norm = if cap > 0.0 {
        clamp01(f64::from(raw.repeat_small_purchases_count) / cap)
    } else if raw.repeat_small_purchases_count > 0 {
        1.0
    } else {
        0.0
    };

    Ok(BehaviorSignals {
        late_night_ratio: clamp01(ensure_finite("late_night_ratio", raw.late_night_ratio)?),
        subscription_cost_mom_change: clamp01(ensure_finite(
            "subscription_cost_mom_change",
            raw.subscription_cost_mom_change,
        )?),
        dining_weekly_increase: clamp01(ensure_finite(
            "dining_weekly_increase",
            raw.dining_weekly_increase,
        )?),
        repeat_small_purchases_norm: repeat_norm,
    })
}
