use monrank::optimizer::OffsetOptimizer;
use monrank::scorer::{GainRates, GutsRate, OffsetBonusTable, Scorer, StatVector};
use proptest::prelude::*;

// --- STRATEGIES ---

prop_compose! {
    fn arb_stats()(
        life in 0.0..999.0f64,
        power in 0.0..999.0f64,
        intelligence in 0.0..999.0f64,
        skill in 0.0..999.0f64,
        speed in 0.0..999.0f64,
        defense in 0.0..999.0f64,
        lifespan in -20.0..250.0f64,
    ) -> StatVector {
        StatVector { life, power, intelligence, skill, speed, defense, lifespan }
    }
}

prop_compose! {
    fn arb_bonus()(
        life in -30.0..30.0f64,
        power in -30.0..30.0f64,
        intelligence in -30.0..30.0f64,
        skill in -30.0..30.0f64,
        speed in -30.0..30.0f64,
        defense in -30.0..30.0f64,
        lifespan in -20.0..20.0f64,
    ) -> StatVector {
        StatVector { life, power, intelligence, skill, speed, defense, lifespan }
    }
}

prop_compose! {
    fn arb_gains()(
        power in -5.0..10.0f64,
        intelligence in -5.0..10.0f64,
        skill in -5.0..10.0f64,
        speed in -5.0..10.0f64,
    ) -> GainRates {
        GainRates { power, intelligence, skill, speed }
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(300))]

    #[test]
    fn prop_best_equals_full_scan(
        base in arb_stats(),
        gains in arb_gains(),
        guts in 0.0..40.0f64,
        bonuses in proptest::collection::vec(arb_bonus(), 1..8),
    ) {
        let scorer = Scorer::default();
        let guts = GutsRate::new(guts).unwrap();
        let table = OffsetBonusTable::new(bonuses.clone()).unwrap();
        let opt = OffsetOptimizer::new(&scorer, &table);

        let mut oracle = f64::NEG_INFINITY;
        let mut oracle_pair = (0, 0);
        for i in 0..bonuses.len() {
            for j in 0..bonuses.len() {
                let s = scorer.score(&(base + (bonuses[i] + bonuses[j])), &gains, guts);
                if s > oracle {
                    oracle = s;
                    oracle_pair = (i, j);
                }
            }
        }

        let best = opt.best(&base, &gains, guts).unwrap();
        prop_assert_eq!(best.score, oracle);
        prop_assert_eq!(best.offsets, Some(oracle_pair));
    }

    #[test]
    fn prop_score_is_finite_and_deterministic(
        stats in arb_stats(),
        gains in arb_gains(),
        guts in 0.0..40.0f64,
    ) {
        let scorer = Scorer::default();
        let guts = GutsRate::new(guts).unwrap();
        let a = scorer.score(&stats, &gains, guts);
        let b = scorer.score(&stats, &gains, guts);
        prop_assert!(a.is_finite(), "Score was not finite: {}", a);
        prop_assert_eq!(a.to_bits(), b.to_bits());
    }

    #[test]
    fn prop_zero_guts_equals_baseline(stats in arb_stats(), gains in arb_gains()) {
        let scorer = Scorer::default();
        let zero = scorer.score(&stats, &gains, GutsRate::new(0.0).unwrap());
        let twenty = scorer.score(&stats, &gains, GutsRate::new(20.0).unwrap());
        prop_assert_eq!(zero, twenty);
    }

    #[test]
    fn prop_weeks_stay_in_range(stats in arb_stats(), gains in arb_gains()) {
        let scorer = Scorer::default();
        let p = scorer.project(&stats, &gains, GutsRate::new(20.0).unwrap());
        prop_assert!(p.weeks_available >= 1.0 && p.weeks_available <= 104.0);
        prop_assert!(p.heavy_cycles >= 0.0 && p.heavy_cycles <= 26.0);
        prop_assert_eq!(p.heavy_cycles.fract(), 0.0);
    }
}
