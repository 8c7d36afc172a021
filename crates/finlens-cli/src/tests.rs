//! CLI command tests
//!
//! This module contains all tests for the CLI commands.

use std::io::Write;

use clap::Parser;
use finlens_core::FinlensConfig;

use crate::cli::{BehaviorArgs, Cli, Commands, ConfigAction, SpendingArgs};
use crate::commands;

// ========== Argument Parsing Tests ==========

#[test]
fn test_parse_spending_flags() {
    let cli = Cli::try_parse_from([
        "finlens",
        "spending",
        "--ratio",
        "1.15",
        "--volatility",
        "0.42",
    ])
    .unwrap();

    match cli.command {
        Commands::Spending { signals } => {
            assert_eq!(signals.ratio, Some(1.15));
            assert_eq!(signals.volatility, Some(0.42));
            assert_eq!(signals.budget, None);
        }
        _ => panic!("expected spending command"),
    }
}

#[test]
fn test_parse_global_flags_after_subcommand() {
    let cli = Cli::try_parse_from(["finlens", "behavior", "--repeats", "6", "--json", "-v"]).unwrap();
    assert!(cli.json);
    assert!(cli.verbose);
    match cli.command {
        Commands::Behavior { signals } => assert_eq!(signals.repeats, Some(6)),
        _ => panic!("expected behavior command"),
    }
}

#[test]
fn test_parse_advise_defaults() {
    let cli = Cli::try_parse_from(["finlens", "advise"]).unwrap();
    match cli.command {
        Commands::Advise { prompt, month, .. } => {
            assert_eq!(prompt, "");
            assert!(month.is_none());
        }
        _ => panic!("expected advise command"),
    }
}

#[test]
fn test_parse_config_path() {
    let cli = Cli::try_parse_from(["finlens", "config", "path"]).unwrap();
    assert!(matches!(
        cli.command,
        Commands::Config {
            action: Some(ConfigAction::Path)
        }
    ));
}

#[test]
fn test_parse_accepts_negative_signals() {
    let cli = Cli::try_parse_from([
        "finlens",
        "advise",
        "--ratio",
        "-0.5",
        "--subscription-change",
        "-0.1",
    ])
    .unwrap();
    match cli.command {
        Commands::Advise {
            spending, behavior, ..
        } => {
            assert_eq!(spending.ratio, Some(-0.5));
            assert_eq!(behavior.subscription_change, Some(-0.1));
        }
        _ => panic!("expected advise command"),
    }
}

#[test]
fn test_parse_rejects_negative_repeats() {
    assert!(Cli::try_parse_from(["finlens", "behavior", "--repeats", "-2"]).is_err());
}

// ========== Signal Resolution Tests ==========

#[test]
fn test_resolve_spending_uses_baseline() {
    let config = FinlensConfig::default();
    let signals = commands::resolve_spending(&SpendingArgs::default(), &config);
    assert_eq!(signals, config.baseline.spending);

    let args = SpendingArgs {
        ratio: Some(2.0),
        ..Default::default()
    };
    let signals = commands::resolve_spending(&args, &config);
    assert_eq!(signals.spending_ratio, 2.0);
    assert_eq!(signals.vol_index, 0.42);
}

#[test]
fn test_resolve_behavior_normalizes_repeats() {
    let config = FinlensConfig::default();
    let signals = commands::resolve_behavior(&BehaviorArgs::default(), &config).unwrap();
    assert!((signals.repeat_small_purchases_norm - 0.6).abs() < 1e-12);

    let args = BehaviorArgs {
        repeats: Some(40),
        late_night: Some(1.5),
        ..Default::default()
    };
    let signals = commands::resolve_behavior(&args, &config).unwrap();
    assert_eq!(signals.repeat_small_purchases_norm, 1.0);
    assert_eq!(signals.late_night_ratio, 1.0);
}

#[test]
fn test_negative_ratio_clamps_like_zero() {
    let config = FinlensConfig::default();
    let cli = Cli::try_parse_from(["finlens", "spending", "--ratio", "-0.5"]).unwrap();
    let Commands::Spending { signals: negative } = cli.command else {
        panic!("expected spending command");
    };
    let zero = SpendingArgs {
        ratio: Some(0.0),
        ..Default::default()
    };

    let from_negative =
        finlens_core::spending::summarize(&commands::resolve_spending(&negative, &config)).unwrap();
    let from_zero =
        finlens_core::spending::summarize(&commands::resolve_spending(&zero, &config)).unwrap();
    assert_eq!(from_negative, from_zero);
}

#[test]
fn test_resolve_behavior_rejects_infinite_ratio() {
    let config = FinlensConfig::default();
    let cli = Cli::try_parse_from(["finlens", "behavior", "--late-night", "inf"]).unwrap();
    let Commands::Behavior { signals } = cli.command else {
        panic!("expected behavior command");
    };
    assert!(commands::resolve_behavior(&signals, &config).is_err());

    let err = commands::cmd_behavior(&config, &signals, false).unwrap_err();
    assert!(format!("{:#}", err).contains("late_night_ratio"));
}

#[test]
fn test_resolve_month() {
    assert_eq!(commands::resolve_month(Some("2026-03")).unwrap(), "2026-03");
    assert!(commands::resolve_month(Some("2026-13")).is_err());
    assert!(commands::resolve_month(Some("march")).is_err());

    let current = commands::resolve_month(None).unwrap();
    assert_eq!(current.len(), 7);
    assert_eq!(&current[4..5], "-");
}

// ========== Command Tests ==========

#[test]
fn test_cmd_spending() {
    let config = FinlensConfig::default();
    assert!(commands::cmd_spending(&config, &SpendingArgs::default(), false).is_ok());
    assert!(commands::cmd_spending(&config, &SpendingArgs::default(), true).is_ok());
}

#[test]
fn test_cmd_spending_rejects_nan() {
    let config = FinlensConfig::default();
    let args = SpendingArgs {
        budget: Some(f64::NAN),
        ..Default::default()
    };
    let err = commands::cmd_spending(&config, &args, false).unwrap_err();
    assert!(format!("{:#}", err).contains("budget_util"));
}

#[test]
fn test_cmd_behavior() {
    let config = FinlensConfig::default();
    assert!(commands::cmd_behavior(&config, &BehaviorArgs::default(), false).is_ok());
    assert!(commands::cmd_behavior(&config, &BehaviorArgs::default(), true).is_ok());
}

#[test]
fn test_cmd_advise() {
    let config = FinlensConfig::default();
    let result = commands::cmd_advise(
        &config,
        "how do I save on food?",
        Some("2026-10"),
        &SpendingArgs::default(),
        &BehaviorArgs::default(),
        false,
    );
    assert!(result.is_ok());

    let result = commands::cmd_advise(
        &config,
        "",
        None,
        &SpendingArgs::default(),
        &BehaviorArgs::default(),
        true,
    );
    assert!(result.is_ok());
}

#[test]
fn test_cmd_advise_invalid_month() {
    let config = FinlensConfig::default();
    let result = commands::cmd_advise(
        &config,
        "",
        Some("10/2026"),
        &SpendingArgs::default(),
        &BehaviorArgs::default(),
        false,
    );
    assert!(result.is_err());
}

#[test]
fn test_monthly_report_json_shape() {
    let config = FinlensConfig::default();
    let report = finlens_core::advise(
        &commands::resolve_spending(&SpendingArgs::default(), &config),
        &commands::resolve_behavior(&BehaviorArgs::default(), &config).unwrap(),
        "",
        &config.advisor,
    )
    .unwrap();
    let monthly = commands::MonthlyReport {
        month: "2026-10".to_string(),
        report,
    };

    let json = serde_json::to_value(&monthly).unwrap();
    assert_eq!(json["month"], "2026-10");
    assert_eq!(json["fuzzy"]["overspending"]["percent"], 72);
    assert_eq!(json["behavior"]["late_night_orders"]["percent"], 43);
    assert!(json["suggestions"].is_array());
}

#[test]
fn test_cmd_config() {
    let config = FinlensConfig::default();
    assert!(commands::cmd_config_show(&config, false).is_ok());
    assert!(commands::cmd_config_show(&config, true).is_ok());
    assert!(commands::cmd_config_path().is_ok());
}

#[test]
fn test_config_file_feeds_commands() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "[baseline.spending]\nspending_ratio = 0.5").unwrap();

    let config = FinlensConfig::load(Some(file.path())).unwrap();
    let signals = commands::resolve_spending(&SpendingArgs::default(), &config);
    assert_eq!(signals.spending_ratio, 0.5);
    assert!(commands::cmd_spending(&config, &SpendingArgs::default(), false).is_ok());
}

#[test]
fn test_missing_config_file_is_an_error() {
    let dir = tempfile::tempdir().unwrap();
    assert!(FinlensConfig::load(Some(&dir.path().join("finlens.tmol"))).is_err());
}
