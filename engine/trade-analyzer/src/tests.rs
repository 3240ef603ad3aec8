//! End-to-end and property tests for the trade score calculator

use price_model::{ModelError, PlayerSnapshot};
use proptest::prelude::*;

use crate::{
    SeasonStage, TradeError, TradeScoreCalculator, TradeScoreConfig, TradeScoreRequest, UpgradePath,
    Verdict,
};

fn premium_in() -> PlayerSnapshot {
    PlayerSnapshot::new(1_100_000, 114, vec![125.0, 122.0, 118.0, 130.0, 120.0])
}

fn mid_pricer_out() -> PlayerSnapshot {
    PlayerSnapshot::new(930_000, 120, vec![105.0, 110.0, 102.0, 108.0, 104.0])
}

#[test]
fn test_mid_season_upgrade_scores_solid() {
    let calculator = TradeScoreCalculator::default();
    let result = calculator
        .calculate_trade_score(&premium_in(), &mid_pricer_out(), 13, 15_800_000, 15_200_000)
        .unwrap();

    assert_eq!(result.upgrade_path, UpgradePath::Upgrade);
    assert_eq!(result.season_match, SeasonStage::Mid);
    assert!(result.verdict >= Verdict::SolidStructureTrade);

    assert_eq!(result.score_breakdown.scoring_score, 93);
    assert_eq!(result.score_breakdown.cash_score, 38);
    assert_eq!(result.trade_score, 77);
    assert_eq!(result.verdict, Verdict::SolidStructureTrade);
    assert!((result.factors.average_score_difference - 17.2).abs() < 1e-9);
    assert_eq!(result.factors.price_difference, -170_000);
    assert!((result.factors.scoring_weight - 0.7).abs() < 1e-12);
}

#[test]
fn test_mid_season_upgrade_price_trend() {
    let calculator = TradeScoreCalculator::default();
    let result = calculator
        .calculate_trade_score(&premium_in(), &mid_pricer_out(), 13, 15_800_000, 15_200_000)
        .unwrap();

    let prices_in: Vec<i64> = result.price_trend.player_in.iter().map(|p| p.price).collect();
    let prices_out: Vec<i64> = result.price_trend.player_out.iter().map(|p| p.price).collect();

    assert_eq!(prices_in, vec![1_100_000, 1_101_500, 1_102_500, 1_102_800, 1_104_700, 1_105_100]);
    assert_eq!(prices_out, vec![930_000, 928_300, 927_300, 925_400, 924_500, 923_200]);
}

#[test]
fn test_extreme_team_values_are_rejected() {
    let calculator = TradeScoreCalculator::default();
    let player = PlayerSnapshot::new(650_000, 95, vec![90.0, 101.0, 87.0]);

    let err = calculator.calculate_trade_score(&player, &player, 8, i64::MIN, 1).unwrap_err();
    assert_eq!(err, TradeError::InvalidTeamValue { team_value: i64::MIN, league_avg_value: 1 });

    assert!(calculator.calculate_trade_score(&player, &player, 8, i64::MAX, -1).is_err());
}

#[test]
fn test_price_overflow_in_forecast_is_rejected() {
    let calculator = TradeScoreCalculator::default();
    let huge = PlayerSnapshot::new(i64::MAX - 1_000, 0, vec![100.0; 3]);

    let err = calculator
        .calculate_trade_score(&huge, &mid_pricer_out(), 8, 15_000_000, 14_500_000)
        .unwrap_err();
    assert_eq!(err, TradeError::Model(ModelError::PriceOverflow { round: 1 }));
}

#[test]
fn test_identical_players_score_fifty() {
    let calculator = TradeScoreCalculator::default();
    let player = PlayerSnapshot::new(650_000, 95, vec![90.0, 101.0, 87.0]);

    for round in [1, 8, 20] {
        for (team, league) in
            [(15_000_000, 15_000_000), (16_000_000, 14_000_000), (13_000_000, 15_000_000)]
        {
            let result =
                calculator.calculate_trade_score(&player, &player, round, team, league).unwrap();

            assert_eq!(result.score_breakdown.scoring_score, 50);
            assert_eq!(result.score_breakdown.cash_score, 50);
            assert_eq!(result.factors.price_difference, 0);
            assert_eq!(result.upgrade_path, UpgradePath::Sideways);
            assert_eq!(result.trade_score, 50);
            assert_eq!(result.verdict, Verdict::EvenTrade);
        }
    }
}

#[test]
fn test_request_defaults_applied() {
    let calculator = TradeScoreCalculator::default();
    let request = TradeScoreRequest {
        player_in: Some(premium_in()),
        player_out: Some(mid_pricer_out()),
        ..Default::default()
    };

    let result = calculator.calculate(&request).unwrap();

    // Round 8 is mid season; 15.0M vs 14.5M is within the margin
    assert_eq!(result.season_match, SeasonStage::Mid);
    assert!((result.factors.scoring_weight - 0.6).abs() < 1e-12);
}

#[test]
fn test_forecast_window_limited() {
    let config = TradeScoreConfig { forecast_rounds: 2, ..Default::default() };
    let calculator = TradeScoreCalculator::new(config);

    let result = calculator
        .calculate_trade_score(&premium_in(), &mid_pricer_out(), 5, 15_000_000, 15_000_000)
        .unwrap();

    assert_eq!(result.price_trend.player_in.len(), 3);
    assert_eq!(result.price_trend.player_out.len(), 3);
}

#[test]
fn test_red_dot_does_not_change_score() {
    let calculator = TradeScoreCalculator::default();
    let clean = calculator
        .calculate_trade_score(&premium_in(), &mid_pricer_out(), 13, 15_000_000, 15_000_000)
        .unwrap();
    let flagged = calculator
        .calculate_trade_score(
            &premium_in().with_red_dot(true),
            &mid_pricer_out(),
            13,
            15_000_000,
            15_000_000,
        )
        .unwrap();

    assert_eq!(clean.trade_score, flagged.trade_score);
    assert_eq!(flagged.explanations.len(), clean.explanations.len() + 1);
}

#[test]
fn test_request_deserializes_from_wire_shape() {
    let json = r#"{
        "player_in":  {"price": 1100000, "breakeven": 114, "proj_scores": [125, 122], "is_red_dot": false},
        "player_out": {"price": 930000, "breakeven": 120, "proj_scores": [105, 110], "is_red_dot": true},
        "round_number": 13,
        "team_value": 15800000,
        "league_avg_value": 15200000
    }"#;

    let request: TradeScoreRequest = serde_json::from_str(json).unwrap();

    assert_eq!(request.round_number, Some(13));
    assert!(request.player_out.as_ref().unwrap().is_red_dot);
    assert!(TradeScoreCalculator::default().calculate(&request).is_ok());
}

fn snapshot_strategy() -> impl Strategy<Value = PlayerSnapshot> {
    (100_000i64..1_500_000, -30i64..180, prop::collection::vec(0.0f64..180.0, 1..8))
        .prop_map(|(price, breakeven, scores)| PlayerSnapshot::new(price, breakeven, scores))
}

proptest! {
    #[test]
    fn prop_scores_stay_in_range(
        player_in in snapshot_strategy(),
        player_out in snapshot_strategy(),
        round in 1u32..30,
        team in 12_000_000i64..18_000_000,
        league in 12_000_000i64..18_000_000,
    ) {
        let result = TradeScoreCalculator::default()
            .calculate_trade_score(&player_in, &player_out, round, team, league)
            .unwrap();

        prop_assert!(result.trade_score <= 100);
        prop_assert!(result.score_breakdown.scoring_score <= 100);
        prop_assert!(result.score_breakdown.cash_score <= 100);
        prop_assert_eq!(result.score_breakdown.overall_score, result.trade_score);
        prop_assert_eq!(result.verdict, Verdict::from_score(result.trade_score));
        prop_assert_eq!(result.season_match, SeasonStage::from_round(round));
    }

    #[test]
    fn prop_upgrade_path_matches_price_delta(
        player_in in snapshot_strategy(),
        player_out in snapshot_strategy(),
    ) {
        let result = TradeScoreCalculator::default()
            .calculate_trade_score(&player_in, &player_out, 8, 15_000_000, 14_500_000)
            .unwrap();
        let delta = player_in.price - player_out.price;

        let expected = if delta >= 100_000 {
            UpgradePath::Upgrade
        } else if delta <= -100_000 {
            UpgradePath::Downgrade
        } else {
            UpgradePath::Sideways
        };
        prop_assert_eq!(result.upgrade_path, expected);
    }

    #[test]
    fn prop_scoring_score_monotonic(a in -40.0f64..40.0, b in -40.0f64..40.0) {
        let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
        prop_assert!(crate::calculator::scoring_score(lo) <= crate::calculator::scoring_score(hi));
    }

    #[test]
    fn prop_calculation_is_idempotent(
        player_in in snapshot_strategy(),
        player_out in snapshot_strategy(),
    ) {
        let calculator = TradeScoreCalculator::default();
        let score = || {
            calculator
                .calculate_trade_score(&player_in, &player_out, 8, 15_000_000, 14_500_000)
                .unwrap()
        };
        let first = score();
        let second = score();

        prop_assert_eq!(
            serde_json::to_string(&first).unwrap(),
            serde_json::to_string(&second).unwrap()
        );
    }
}
