//! Finlens configuration
//!
//! Config is loaded with a two-layer resolution:
//! 1. An explicit path, or the override in the data dir
//!    (~/.local/share/finlens/config/finlens.toml)
//! 2. Fall back to embedded defaults (compiled into binary)
//!
//! Keys missing from an override keep their default value. The engine never
//! reads configuration itself; callers load it once and pass it down.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::advisor::AdvisorConfig;
use crate::error::{Error, Result};
use crate::normalize::{BehaviorRaw, DEFAULT_REPEAT_PURCHASE_CAP};
use crate::spending::SpendingSignals;

/// Embedded default config (compiled into binary)
const DEFAULT_CONFIG: &str = include_str!("../../../config/finlens.toml");

/// How raw behavior metrics are normalized
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NormalizationConfig {
    pub repeat_purchase_cap: f64,
}

impl Default for NormalizationConfig {
    fn default() -> Self {
        Self {
            repeat_purchase_cap: DEFAULT_REPEAT_PURCHASE_CAP,
        }
    }
}

/// Month stats used when the caller has no measured values
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Baseline {
    pub spending: SpendingSignals,
    pub behavior: BehaviorRaw,
}

impl Default for Baseline {
    fn default() -> Self {
        Self {
            spending: SpendingSignals::new(1.15, 0.42, 0.78),
            behavior: BehaviorRaw {
                late_night_ratio: 0.32,
                subscription_cost_mom_change: 0.28,
                dining_weekly_increase: 0.47,
                repeat_small_purchases_count: 6,
            },
        }
    }
}

/// Full configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FinlensConfig {
    pub normalization: NormalizationConfig,
    pub advisor: AdvisorConfig,
    pub baseline: Baseline,
}

impl FinlensConfig {
    /// Load from `path` if given, else the data dir override when present,
    /// else the embedded defaults
    ///
    /// An explicit `path` that does not exist is an error.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let override_path = match path {
            Some(p) if !p.exists() => {
                return Err(Error::Config(format!(
                    "Config file not found: {}",
                    p.display()
                )));
            }
            Some(p) => Some(p.to_path_buf()),
            None => default_config_path().filter(|p| p.exists()),
        };

        if let Some(path) = override_path {
            let content = fs::read_to_string(&path)?;
            tracing::info!(path = %path.display(), "Loaded config override");
            return parse_config(&content);
        }

        parse_config(DEFAULT_CONFIG)
    }

    /// Render as TOML
    pub fn to_toml(&self) -> Result<String> {
        toml::to_string_pretty(self)
            .map_err(|e| Error::Config(format!("Failed to render config: {}", e)))
    }
}

/// Default config override path
pub fn default_config_path() -> Option<PathBuf> {
    dirs::data_local_dir().map(|d| d.join("finlens").join("config").join("finlens.toml"))
}

/// Raw config structure for TOML parsing
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct RawConfig {
    normalization: Option<RawNormalization>,
    advisor: Option<RawAdvisor>,
    baseline: Option<RawBaseline>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct RawNormalization {
    repeat_purchase_cap: Option<f64>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct RawAdvisor {
    overspending_threshold: Option<u8>,
    budget_risk_threshold: Option<u8>,
    late_night_threshold: Option<u8>,
    dining_spike_threshold: Option<u8>,
    impulse_threshold: Option<u8>,
    max_suggestions: Option<usize>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct RawBaseline {
    spending: Option<RawSpending>,
    behavior: Option<RawBehavior>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct RawSpending {
    spending_ratio: Option<f64>,
    vol_index: Option<f64>,
    budget_util: Option<f64>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct RawBehavior {
    late_night_ratio: Option<f64>,
    subscription_cost_mom_change: Option<f64>,
    dining_weekly_increase: Option<f64>,
    repeat_small_purchases_count: Option<u32>,
}

fn parse_config(content: &str) -> Result<FinlensConfig> {
    let raw: RawConfig = toml::from_str(content)
        .map_err(|e| Error::Config(format!("Invalid config TOML: {}", e)))?;

    let mut config = FinlensConfig::default();

    if let Some(normalization) = raw.normalization {
        if let Some(cap) = normalization.repeat_purchase_cap {
            if !(cap.is_finite() && cap > 0.0) {
                return Err(Error::Config(format!(
                    "repeat_purchase_cap must be a positive number, got {}",
                    cap
                )));
            }
            config.normalization.repeat_purchase_cap = cap;
        }
    }

    if let Some(advisor) = raw.advisor {
        let a = &mut config.advisor;
        if let Some(v) = advisor.overspending_threshold {
            a.overspending_threshold = v;
        }
        if let Some(v) = advisor.budget_risk_threshold {
            a.budget_risk_threshold = v;
        }
        if let Some(v) = advisor.late_night_threshold {
            a.late_night_threshold = v;
        }
        if let Some(v) = advisor.dining_spike_threshold {
            a.dining_spike_threshold = v;
        }
        if let Some(v) = advisor.impulse_threshold {
            a.impulse_threshold = v;
        }
        if let Some(v) = advisor.max_suggestions {
            a.max_suggestions = v;
        }
    }

    if let Some(baseline) = raw.baseline {
        if let Some(spending) = baseline.spending {
            let s = &mut config.baseline.spending;
            if let Some(v) = spending.spending_ratio {
                s.spending_ratio = v;
            }
            if let Some(v) = spending.vol_index {
                s.vol_index = v;
            }
            if let Some(v) = spending.budget_util {
                s.budget_util = v;
            }
        }
        if let Some(behavior) = baseline.behavior {
            let b = &mut config.baseline.behavior;
            if let Some(v) = behavior.late_night_ratio {
                b.late_night_ratio = v;
            }
            if let Some(v) = behavior.subscription_cost_mom_change {
                b.subscription_cost_mom_change = v;
            }
            if let Some(v) = behavior.dining_weekly_increase {
                b.dining_weekly_increase = v;
            }
            if let Some(v) = behavior.repeat_small_purchases_count {
                b.repeat_small_purchases_count = v;
            }
        }
    }

    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_parse_default_config() {
        let config = parse_config(DEFAULT_CONFIG).unwrap();
        assert_eq!(config, FinlensConfig::default());
        assert_eq!(config.normalization.repeat_purchase_cap, 10.0);
        assert_eq!(config.advisor.max_suggestions, 6);
        assert_eq!(config.baseline.behavior.repeat_small_purchases_count, 6);
    }

    #[test]
    fn test_partial_override_keeps_defaults() {
        let config = parse_config(
            r#"
            [advisor]
            impulse_threshold = 30

            [baseline.spending]
            spending_ratio = 0.9
            "#,
        )
        .unwrap();

        assert_eq!(config.advisor.impulse_threshold, 30);
        assert_eq!(config.advisor.overspending_threshold, 65);
        assert_eq!(config.baseline.spending.spending_ratio, 0.9);
        assert_eq!(config.baseline.spending.vol_index, 0.42);
    }

    #[test]
    fn test_empty_config_is_default() {
        assert_eq!(parse_config("").unwrap(), FinlensConfig::default());
    }

    #[test]
    fn test_invalid_toml() {
        let err = parse_config("[advisor\nmax = ").unwrap_err();
        assert!(matches!(err, Error::Config(_)));
    }

    #[test]
    fn test_unknown_key_rejected() {
        assert!(parse_config("[advisor]\nmax_tips = 3\n").is_err());
    }

    #[test]
    fn test_non_positive_cap_rejected() {
        assert!(parse_config("[normalization]\nrepeat_purchase_cap = 0.0\n").is_err());
    }

    #[test]
    fn test_load_explicit_path() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[advisor]\nmax_suggestions = 3").unwrap();

        let config = FinlensConfig::load(Some(file.path())).unwrap();
        assert_eq!(config.advisor.max_suggestions, 3);
    }

    #[test]
    fn test_load_missing_explicit_path_fails() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("absent.toml");
        let err = FinlensConfig::load(Some(&missing)).unwrap_err();
        assert!(matches!(err, Error::Config(_)));
        assert!(err.to_string().contains("absent.toml"));
    }

    #[test]
    fn test_to_toml_round_trips() {
        let config = FinlensConfig::default();
        let rendered = config.to_toml().unwrap();
        assert_eq!(parse_config(&rendered).unwrap(), config);
    }
}
