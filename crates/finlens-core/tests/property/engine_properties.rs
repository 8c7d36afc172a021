use finlens_core::fuzzy::{
    hedge_somewhat, hedge_very, BudgetTerms, LevelTerms, SpendingRatioTerms, VolatilityTerms,
};
use finlens_core::{behavior, spending, Band, BehaviorSignals, SpendingSignals};
use proptest::prelude::*;

fn behavior_signals(ln: f64, sc: f64, dw: f64, ib: f64) -> BehaviorSignals {
    BehaviorSignals {
        late_night_ratio: ln,
        subscription_cost_mom_change: sc,
        dining_weekly_increase: dw,
        repeat_small_purchases_norm: ib,
    }
}

proptest! {
    #[test]
    fn below_domain_matches_lower_edge(x in -100.0f64..0.0) {
        prop_assert_eq!(SpendingRatioTerms::fuzzify(x), SpendingRatioTerms::fuzzify(0.0));
        prop_assert_eq!(VolatilityTerms::fuzzify(x), VolatilityTerms::fuzzify(0.0));
        prop_assert_eq!(BudgetTerms::fuzzify(x), BudgetTerms::fuzzify(0.0));
        prop_assert_eq!(LevelTerms::fuzzify(x), LevelTerms::fuzzify(0.0));
    }

    #[test]
    fn above_domain_matches_upper_edge(extra in 0.0f64..100.0) {
        prop_assert_eq!(SpendingRatioTerms::fuzzify(3.0 + extra), SpendingRatioTerms::fuzzify(3.0));
        prop_assert_eq!(VolatilityTerms::fuzzify(1.0 + extra), VolatilityTerms::fuzzify(1.0));
        prop_assert_eq!(BudgetTerms::fuzzify(1.8 + extra), BudgetTerms::fuzzify(1.8));
        prop_assert_eq!(LevelTerms::fuzzify(1.0 + extra), LevelTerms::fuzzify(1.0));
    }

    #[test]
    fn term_degrees_are_unit(x in -1.0f64..4.0) {
        let r = SpendingRatioTerms::fuzzify(x);
        let v = VolatilityTerms::fuzzify(x);
        let b = BudgetTerms::fuzzify(x);
        let l = LevelTerms::fuzzify(x);
        for d in [r.low, r.normal, r.high, v.stable, v.variable, v.high, b.low, b.medium, b.high, l.low, l.medium, l.high] {
            prop_assert!((0.0..=1.0).contains(&d), "degree {} out of range", d);
        }
    }

    #[test]
    fn spending_degrees_are_unit(r in -1.0f64..4.0, v in -0.5f64..1.5, b in -0.5f64..2.5) {
        let inference = spending::infer(&SpendingSignals::new(r, v, b)).unwrap();
        for (_, degree) in inference.entries() {
            prop_assert!((0.0..=1.0).contains(&degree));
        }
    }

    #[test]
    fn behavior_degrees_are_unit(ln in -0.5f64..1.5, sc in -0.5f64..1.5, dw in -0.5f64..1.5, ib in -0.5f64..1.5) {
        let inference = behavior::infer(&behavior_signals(ln, sc, dw, ib)).unwrap();
        for (_, degree) in inference.entries() {
            prop_assert!((0.0..=1.0).contains(&degree));
        }
    }

    #[test]
    fn hedges_bracket_degree(m in 0.0f64..=1.0) {
        let very = hedge_very(m);
        let somewhat = hedge_somewhat(m);
        prop_assert!(very <= m + 1e-12);
        prop_assert!(m <= somewhat + 1e-12);
    }

    #[test]
    fn hedges_strict_inside_unit(m in 0.001f64..0.999) {
        prop_assert!(hedge_very(m) < m);
        prop_assert!(m < hedge_somewhat(m));
    }

    #[test]
    fn bands_partition_unit_interval(d in 0.0f64..=1.0) {
        let band = Band::from_degree(d);
        let expected = [
            (d < 0.25, Band::Low),
            ((0.25..0.45).contains(&d), Band::Slight),
            ((0.45..0.65).contains(&d), Band::Moderate),
            ((0.65..0.85).contains(&d), Band::High),
            ((0.85..=1.0).contains(&d), Band::VeryHigh),
        ];
        let matching: Vec<_> = expected.iter().filter(|(hit, _)| *hit).collect();
        prop_assert_eq!(matching.len(), 1);
        prop_assert_eq!(matching[0].1, band);
    }

    #[test]
    fn bands_are_monotonic(a in 0.0f64..=1.0, b in 0.0f64..=1.0) {
        let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
        prop_assert!(Band::from_degree(lo) <= Band::from_degree(hi));
    }

    #[test]
    fn summaries_are_deterministic(r in 0.0f64..3.0, v in 0.0f64..1.0, b in 0.0f64..1.8, x in 0.0f64..1.0) {
        let s = SpendingSignals::new(r, v, b);
        let first = serde_json::to_string(&spending::summarize(&s).unwrap()).unwrap();
        let second = serde_json::to_string(&spending::summarize(&s).unwrap()).unwrap();
        prop_assert_eq!(first, second);

        let beh = behavior_signals(x, x, x, x);
        prop_assert_eq!(behavior::summarize(&beh).unwrap(), behavior::summarize(&beh).unwrap());
    }
}
