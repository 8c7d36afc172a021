//! Finlens Core Library
//!
//! Fuzzy inference over normalized spending and behavior signals:
//! - Membership functions, hedges and linguistic variables
//! - Spending context rules (overspending, high-ish month, budget risk)
//! - Behavior pattern rules (late-night orders, subscription creep,
//!   dining spikes, impulse buying)
//! - Percentage and phrase rendering
//! - Raw behavior metric normalization
//! - Rule-based advice built on the rendered summaries
//! - TOML configuration with embedded defaults
//!
//! Every engine entry point is a pure function of its input.

pub mod advisor;
pub mod behavior;
pub mod config;
pub mod error;
pub mod fuzzy;
pub mod normalize;
pub mod presentation;
pub mod spending;
pub mod types;

pub use advisor::{advise, AdvisorConfig, AdvisorReport};
pub use behavior::{BehaviorInference, BehaviorSignals, BehaviorSummary};
pub use config::{Baseline, FinlensConfig, NormalizationConfig};
pub use error::{Error, Result};
pub use normalize::{normalize_behavior, BehaviorRaw};
pub use presentation::{percentage_and_phrase, Band, PatternScore, PhraseStyle};
pub use spending::{SpendingInference, SpendingSignals, SpendingSummary};
pub use types::{Conclusion, RuleSet};
