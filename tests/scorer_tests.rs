use monrank::config::ScoringParams;
use monrank::error::MonrankError;
use monrank::scorer::{GainRates, GutsRate, MainStat, Scorer, StatVector};
use rstest::rstest;

fn base_stats() -> StatVector {
    StatVector {
        life: 100.0,
        power: 500.0,
        intelligence: 300.0,
        skill: 200.0,
        speed: 150.0,
        defense: 100.0,
        lifespan: 80.0,
    }
}

fn base_gains() -> GainRates {
    GainRates {
        power: 5.0,
        intelligence: 2.0,
        skill: 3.0,
        speed: 1.0,
    }
}

fn guts(rate: f64) -> GutsRate {
    GutsRate::new(rate).unwrap()
}

#[test]
fn test_reference_monster_projection() {
    let scorer = Scorer::default();
    let p = scorer.project(&base_stats(), &base_gains(), guts(20.0));

    assert_eq!(p.weeks_available, 80.0);
    assert_eq!(p.heavy_cycles, 20.0);
    assert_eq!(p.main_stat, MainStat::Power);
    assert_eq!(p.projected_main, 600.0);
    assert_eq!(p.projected_skill, 260.0);
    assert_eq!(p.projected_speed, 170.0);
    assert_eq!(p.effective_guts_rate, 20.0);
    assert!((p.score - 5.15).abs() < 1e-9, "Score was {}", p.score);
}

#[test]
fn test_score_matches_projection() {
    let scorer = Scorer::default();
    let stats = base_stats();
    let gains = base_gains();
    let p = scorer.project(&stats, &gains, guts(13.0));
    assert_eq!(scorer.score(&stats, &gains, guts(13.0)), p.score);
}

#[test]
fn test_score_is_deterministic() {
    let scorer = Scorer::default();
    let a = scorer.score(&base_stats(), &base_gains(), guts(7.5));
    let b = scorer.score(&base_stats(), &base_gains(), guts(7.5));
    assert_eq!(a.to_bits(), b.to_bits());
}

#[test]
fn test_zero_guts_rate_uses_baseline() {
    let scorer = Scorer::default();
    let zero = scorer.score(&base_stats(), &base_gains(), guts(0.0));
    let twenty = scorer.score(&base_stats(), &base_gains(), guts(20.0));
    assert_eq!(zero, twenty);
}

#[test]
fn test_guts_rate_scales_inversely() {
    let scorer = Scorer::default();
    let fast = scorer.score(&base_stats(), &base_gains(), guts(10.0));
    let slow = scorer.score(&base_stats(), &base_gains(), guts(20.0));
    assert!((fast - 2.0 * slow).abs() < 1e-9);
}

#[rstest]
#[case(200.0, 104.0)]
#[case(105.0, 104.0)]
#[case(0.0, 1.0)]
#[case(-12.0, 1.0)]
fn test_lifespan_clamp(#[case] raw: f64, #[case] clamped: f64) {
    let scorer = Scorer::default();
    let mut a = base_stats();
    a.lifespan = raw;
    let mut b = base_stats();
    b.lifespan = clamped;
    assert_eq!(
        scorer.score(&a, &base_gains(), guts(20.0)),
        scorer.score(&b, &base_gains(), guts(20.0))
    );
}

#[test]
fn test_equal_gains_train_intelligence() {
    let scorer = Scorer::default();
    let gains = GainRates {
        power: 4.0,
        intelligence: 4.0,
        skill: 1.0,
        speed: 1.0,
    };
    let reference = scorer.score(&base_stats(), &gains, guts(20.0));

    let mut more_power = base_stats();
    more_power.power += 250.0;
    assert_eq!(scorer.score(&more_power, &gains, guts(20.0)), reference);

    let mut more_int = base_stats();
    more_int.intelligence += 250.0;
    assert!(scorer.score(&more_int, &gains, guts(20.0)) > reference);

    let p = scorer.project(&base_stats(), &gains, guts(20.0));
    assert_eq!(p.main_stat, MainStat::Intelligence);
}

#[test]
fn test_negative_gains_are_valid() {
    let scorer = Scorer::default();
    let gains = GainRates {
        power: -1.0,
        intelligence: -2.0,
        skill: -3.0,
        speed: 0.0,
    };
    let p = scorer.project(&base_stats(), &gains, guts(20.0));
    assert_eq!(p.main_stat, MainStat::Power);
    assert_eq!(p.projected_main, 480.0);
    assert_eq!(p.projected_skill, 140.0);
    assert!(p.score.is_finite());
}

#[test]
fn test_evaluate_rejects_nan_stats() {
    let scorer = Scorer::default();
    let mut stats = base_stats();
    stats.skill = f64::NAN;
    let err = scorer
        .evaluate(&stats, &base_gains(), guts(20.0))
        .unwrap_err();
    assert!(matches!(err, MonrankError::Validation(_)));
}

#[test]
fn test_evaluate_has_no_offsets() {
    let scorer = Scorer::default();
    let c = scorer
        .evaluate(&base_stats(), &base_gains(), guts(20.0))
        .unwrap();
    assert_eq!(c.offsets, None);
    assert_eq!(c.projection.map(|p| p.score), Some(c.score));
}

#[test]
fn test_negative_guts_rate_rejected() {
    assert!(GutsRate::new(-1.0).is_err());
    assert!(GutsRate::new(f64::INFINITY).is_err());
}

#[test]
fn test_custom_weights() {
    let params = ScoringParams {
        weight_main: 1.0,
        weight_skill: 0.0,
        weight_speed: 0.0,
        ..Default::default()
    };
    let scorer = Scorer::new(params).unwrap();
    let s = scorer.score(&base_stats(), &base_gains(), guts(20.0));
    assert!((s - 600.0 / 80.0).abs() < 1e-9);
}

#[rstest]
#[case(ScoringParams { max_weeks: 0.5, ..Default::default() })]
#[case(ScoringParams { cycle_weeks: 0.0, ..Default::default() })]
#[case(ScoringParams { guts_baseline: 0.0, ..Default::default() })]
#[case(ScoringParams { weight_main: f64::NAN, ..Default::default() })]
fn test_invalid_params_rejected(#[case] params: ScoringParams) {
    let err = Scorer::new(params).unwrap_err();
    assert!(matches!(err, MonrankError::Config(_)));
}
