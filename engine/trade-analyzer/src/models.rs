use price_model::{PlayerSnapshot, PriceTrajectoryPoint};
use serde::{Deserialize, Serialize};

/// Minimum absolute price delta for a trade to count as an up/downgrade
pub const UPGRADE_THRESHOLD: i64 = 100_000;

/// Trade score request as received from callers
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TradeScoreRequest {
    pub player_in: Option<PlayerSnapshot>,
    pub player_out: Option<PlayerSnapshot>,
    pub round_number: Option<u32>,
    pub team_value: Option<i64>,
    pub league_avg_value: Option<i64>,
}

/// Direction of the trade in price terms
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UpgradePath {
    Upgrade,
    Downgrade,
    Sideways,
}

impl UpgradePath {
    /// Classify from `player_in.price - player_out.price`
    pub fn from_price_delta(delta: i64) -> Self {
        if delta >= UPGRADE_THRESHOLD {
            UpgradePath::Upgrade
        } else if delta <= -UPGRADE_THRESHOLD {
            UpgradePath::Downgrade
        } else {
            UpgradePath::Sideways
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            UpgradePath::Upgrade => "upgrade",
            UpgradePath::Downgrade => "downgrade",
            UpgradePath::Sideways => "sideways",
        }
    }
}

/// Coarse position in the season calendar
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SeasonStage {
    Early,
    Mid,
    Late,
}

impl SeasonStage {
    /// Rounds 1-7 early, 8-15 mid, 16+ late
    pub fn from_round(round: u32) -> Self {
        match round {
            0..=7 => SeasonStage::Early,
            8..=15 => SeasonStage::Mid,
            _ => SeasonStage::Late,
        }
    }

    /// Base (scoring, cash) weights before the team value adjustment
    pub fn base_weights(&self) -> (f64, f64) {
        match self {
            SeasonStage::Early => (0.5, 0.5),
            SeasonStage::Mid => (0.6, 0.4),
            SeasonStage::Late => (0.8, 0.2),
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            SeasonStage::Early => "early",
            SeasonStage::Mid => "mid",
            SeasonStage::Late => "late",
        }
    }
}

/// Qualitative verdict, highest qualifying band wins
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Verdict {
    #[serde(rename = "Poor Choice")]
    PoorChoice,
    #[serde(rename = "Risky Move")]
    RiskyMove,
    #[serde(rename = "Even Trade")]
    EvenTrade,
    #[serde(rename = "Calculated Risk")]
    CalculatedRisk,
    #[serde(rename = "Solid Structure Trade")]
    SolidStructureTrade,
    #[serde(rename = "Perfect Timing")]
    PerfectTiming,
}

impl Verdict {
    pub fn from_score(score: u32) -> Self {
        match score {
            90..=u32::MAX => Verdict::PerfectTiming,
            75..=89 => Verdict::SolidStructureTrade,
            60..=74 => Verdict::CalculatedRisk,
            40..=59 => Verdict::EvenTrade,
            20..=39 => Verdict::RiskyMove,
            _ => Verdict::PoorChoice,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Verdict::PerfectTiming => "Perfect Timing",
            Verdict::SolidStructureTrade => "Solid Structure Trade",
            Verdict::CalculatedRisk => "Calculated Risk",
            Verdict::EvenTrade => "Even Trade",
            Verdict::RiskyMove => "Risky Move",
            Verdict::PoorChoice => "Poor Choice",
        }
    }
}

impl std::fmt::Display for Verdict {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Sub-scores, all 0-100
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreBreakdown {
    pub scoring_score: u32,
    pub cash_score: u32,
    pub overall_score: u32,
}

/// Intermediate quantities the score was built from
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TradeFactors {
    /// mean(in) - mean(out) of projected scores
    pub average_score_difference: f64,
    /// `player_out.price - player_in.price`; positive frees up cash
    pub price_difference: i64,
    /// Points per $100k, in minus out
    pub value_difference: f64,
    pub scoring_weight: f64,
    pub cash_weight: f64,
    pub consistency_in: f64,
    pub consistency_out: f64,
}

/// Projected price paths for both sides of the trade
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PriceTrend {
    pub player_in: Vec<PriceTrajectoryPoint>,
    pub player_out: Vec<PriceTrajectoryPoint>,
}

/// Complete trade analysis
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TradeScoreResult {
    pub trade_score: u32,
    pub score_breakdown: ScoreBreakdown,
    pub upgrade_path: UpgradePath,
    pub season_match: SeasonStage,
    pub verdict: Verdict,
    pub recommendation: String,
    pub explanations: Vec<String>,
    pub price_trend: PriceTrend,
    pub factors: TradeFactors,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_upgrade_path_boundaries() {
        assert_eq!(UpgradePath::from_price_delta(100_000), UpgradePath::Upgrade);
        assert_eq!(UpgradePath::from_price_delta(99_999), UpgradePath::Sideways);
        assert_eq!(UpgradePath::from_price_delta(0), UpgradePath::Sideways);
        assert_eq!(UpgradePath::from_price_delta(-99_999), UpgradePath::Sideways);
        assert_eq!(UpgradePath::from_price_delta(-100_000), UpgradePath::Downgrade);
    }

    #[test]
    fn test_season_stage_boundaries() {
        assert_eq!(SeasonStage::from_round(1), SeasonStage::Early);
        assert_eq!(SeasonStage::from_round(7), SeasonStage::Early);
        assert_eq!(SeasonStage::from_round(8), SeasonStage::Mid);
        assert_eq!(SeasonStage::from_round(15), SeasonStage::Mid);
        assert_eq!(SeasonStage::from_round(16), SeasonStage::Late);
        assert_eq!(SeasonStage::from_round(24), SeasonStage::Late);
    }

    #[test]
    fn test_verdict_bands() {
        assert_eq!(Verdict::from_score(100), Verdict::PerfectTiming);
        assert_eq!(Verdict::from_score(90), Verdict::PerfectTiming);
        assert_eq!(Verdict::from_score(89), Verdict::SolidStructureTrade);
        assert_eq!(Verdict::from_score(75), Verdict::SolidStructureTrade);
        assert_eq!(Verdict::from_score(74), Verdict::CalculatedRisk);
        assert_eq!(Verdict::from_score(60), Verdict::CalculatedRisk);
        assert_eq!(Verdict::from_score(59), Verdict::EvenTrade);
        assert_eq!(Verdict::from_score(40), Verdict::EvenTrade);
        assert_eq!(Verdict::from_score(39), Verdict::RiskyMove);
        assert_eq!(Verdict::from_score(20), Verdict::RiskyMove);
        assert_eq!(Verdict::from_score(19), Verdict::PoorChoice);
        assert_eq!(Verdict::from_score(0), Verdict::PoorChoice);
    }

    #[test]
    fn test_wire_labels() {
        assert_eq!(
            serde_json::to_string(&Verdict::SolidStructureTrade).unwrap(),
            "\"Solid Structure Trade\""
        );
        assert_eq!(serde_json::to_string(&UpgradePath::Sideways).unwrap(), "\"sideways\"");
        assert_eq!(serde_json::to_string(&SeasonStage::Mid).unwrap(), "\"mid\"");
    }
}
