//! Fuzzy logic building blocks
//!
//! - `membership` - triangular/trapezoidal membership functions and hedges
//! - `terms` - linguistic variables for each input signal

pub mod membership;
pub mod terms;

pub use membership::{clamp01, hedge_somewhat, hedge_very, trapezoidal, triangular};
pub use terms::{BudgetTerms, Domain, LevelTerms, SpendingRatioTerms, VolatilityTerms};
