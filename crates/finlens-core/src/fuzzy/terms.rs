//! Linguistic variables
//!
//! Each signal is clamped to its declared domain and evaluated against a
//! fixed set of terms. Breakpoints are part of the engine's contract and are
//! not configurable.

use serde::{Deserialize, Serialize};

use super::membership::{trapezoidal, triangular};

/// Closed numeric range a signal is normalized to
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Domain {
    pub min: f64,
    pub max: f64,
}

impl Domain {
    pub const UNIT: Domain = Domain { min: 0.0, max: 1.0 };
    pub const SPENDING_RATIO: Domain = Domain { min: 0.0, max: 3.0 };
    pub const BUDGET_UTILIZATION: Domain = Domain { min: 0.0, max: 1.8 };

    /// Clamp `x` into the domain
    pub fn clamp(&self, x: f64) -> f64 {
        if self.contains(x) {
            return x;
        }
        let clamped = x.clamp(self.min, self.max);
        tracing::debug!(
            value = x,
            clamped,
            min = self.min,
            max = self.max,
            "Signal outside domain, clamping"
        );
        clamped
    }

    pub fn contains(&self, x: f64) -> bool {
        self.min <= x && x <= self.max
    }
}

/// Terms for spending ratio (current month vs typical month)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SpendingRatioTerms {
    pub low: f64,
    pub normal: f64,
    pub high: f64,
}

impl SpendingRatioTerms {
    pub fn fuzzify(ratio: f64) -> Self {
        let r = Domain::SPENDING_RATIO.clamp(ratio);
        Self {
            low: trapezoidal(r, 0.0, 0.0, 0.7, 0.95),
            normal: triangular(r, 0.8, 1.0, 1.2),
            high: trapezoidal(r, 1.05, 1.2, 3.0, 3.0),
        }
    }
}

/// Terms for the normalized volatility index
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct VolatilityTerms {
    pub stable: f64,
    pub variable: f64,
    pub high: f64,
}

impl VolatilityTerms {
    pub fn fuzzify(index: f64) -> Self {
        let v = Domain::UNIT.clamp(index);
        Self {
            stable: trapezoidal(v, 0.0, 0.0, 0.2, 0.35),
            variable: triangular(v, 0.2, 0.45, 0.7),
            high: trapezoidal(v, 0.55, 0.7, 1.0, 1.0),
        }
    }
}

/// Terms for budget utilization (spend / budget, capped at 1.8)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BudgetTerms {
    pub low: f64,
    pub medium: f64,
    pub high: f64,
}

impl BudgetTerms {
    pub fn fuzzify(utilization: f64) -> Self {
        let b = Domain::BUDGET_UTILIZATION.clamp(utilization);
        Self {
            low: trapezoidal(b, 0.0, 0.0, 0.45, 0.65),
            medium: triangular(b, 0.55, 0.75, 0.95),
            high: trapezoidal(b, 0.85, 1.0, 1.8, 1.8),
        }
    }
}

/// Generic low/medium/high terms shared by every behavior ratio
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LevelTerms {
    pub low: f64,
    pub medium: f64,
    pub high: f64,
}

impl LevelTerms {
    pub fn fuzzify(ratio: f64) -> Self {
        let x = Domain::UNIT.clamp(ratio);
        Self {
            low: trapezoidal(x, 0.0, 0.0, 0.20, 0.35),
            medium: triangular(x, 0.25, 0.45, 0.65),
            high: trapezoidal(x, 0.55, 0.70, 1.0, 1.0),
        }
    }
}
