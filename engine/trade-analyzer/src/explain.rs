//! Recommendation and explanation text
//!
//! Wording is free to change; the bands and thresholds are what callers rely on.

use price_model::PlayerSnapshot;

use crate::calculator::TEAM_VALUE_MARGIN;
use crate::models::{SeasonStage, TradeFactors, UpgradePath};

const SIGNIFICANT_SCORE_DIFF: f64 = 10.0;
const SIGNIFICANT_VALUE_DIFF: f64 = 0.5;

/// One sentence keyed off score band, upgrade path and season stage
pub fn recommendation(score: u32, path: UpgradePath, stage: SeasonStage) -> String {
    let band = match score {
        75..=u32::MAX => "Strong trade, make it",
        60..=74 => "Worth making if it fits your structure",
        40..=59 => "Marginal trade, only make it for a specific need",
        20..=39 => "Risky trade, look for better options first",
        _ => "Avoid this trade",
    };

    let path_note = match path {
        UpgradePath::Upgrade => "this upgrade spends cash for scoring",
        UpgradePath::Downgrade => "this downgrade banks cash for later moves",
        UpgradePath::Sideways => "this sideways move keeps team value steady",
    };

    let stage_note = match stage {
        SeasonStage::Early => "early in the season cash generation still matters",
        SeasonStage::Mid => "mid-season balances scoring and cash",
        SeasonStage::Late => "late in the season points are all that count",
    };

    format!("{band}: {path_note}, and {stage_note}.")
}

/// One line per factor, in a fixed order
pub fn explanations(
    factors: &TradeFactors,
    stage: SeasonStage,
    team_value_delta: i64,
    player_in: &PlayerSnapshot,
    player_out: &PlayerSnapshot,
) -> Vec<String> {
    let mut lines = vec![
        scoring_line(factors.average_score_difference),
        price_line(factors.price_difference),
        value_line(factors.value_difference),
        season_line(stage).to_string(),
        team_value_line(team_value_delta),
    ];

    if player_in.is_red_dot {
        lines.push("Incoming player is red-dotted: injury or suspension risk".to_string());
    }
    if player_out.is_red_dot {
        lines.push("Outgoing player is red-dotted: trading out removes that risk".to_string());
    }

    lines
}

fn scoring_line(diff: f64) -> String {
    if diff >= SIGNIFICANT_SCORE_DIFF {
        format!("Significant scoring upgrade: +{diff:.1} points per round")
    } else if diff > 0.0 {
        format!("Slight scoring upgrade: +{diff:.1} points per round")
    } else if diff == 0.0 {
        "No change in projected scoring".to_string()
    } else if diff > -SIGNIFICANT_SCORE_DIFF {
        format!("Slight scoring downgrade: {diff:.1} points per round")
    } else {
        format!("Significant scoring downgrade: {diff:.1} points per round")
    }
}

fn price_line(price_diff: i64) -> String {
    match price_diff {
        d if d > 0 => format!("Frees up {} in cash", format_money(d)),
        d if d < 0 => format!("Costs an extra {}", format_money(d)),
        _ => "Price neutral trade".to_string(),
    }
}

fn value_line(value_diff: f64) -> String {
    if value_diff > SIGNIFICANT_VALUE_DIFF {
        format!("Better value: +{value_diff:.2} points per $100k")
    } else if value_diff < -SIGNIFICANT_VALUE_DIFF {
        format!("Worse value: {value_diff:.2} points per $100k")
    } else {
        "Similar value for money".to_string()
    }
}

fn season_line(stage: SeasonStage) -> &'static str {
    match stage {
        SeasonStage::Early => "Early season: scoring and cash weighted equally",
        SeasonStage::Mid => "Mid season: scoring weighted ahead of cash",
        SeasonStage::Late => "Late season: scoring dominates the score",
    }
}

fn team_value_line(delta: i64) -> String {
    if delta > TEAM_VALUE_MARGIN {
        format!("Team value {} above league average: scoring favoured", format_money(delta))
    } else if delta < -TEAM_VALUE_MARGIN {
        format!("Team value {} below league average: cash favoured", format_money(delta))
    } else {
        "Team value in line with league average".to_string()
    }
}

/// `$170k` style amount, sign dropped
fn format_money(amount: i64) -> String {
    let amount = amount.unsigned_abs();
    if amount >= 1_000_000 {
        format!("${:.2}M", amount as f64 / 1_000_000.0)
    } else {
        format!("${}k", amount / 1_000)
    }
}
