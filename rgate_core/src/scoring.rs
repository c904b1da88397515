//! Banded heuristics that turn raw on-chain counts into coarse 0-100
//! scores. The thresholds are part of the public API contract and must
//! not drift: clients compare scores across calls.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// 24h volume above this is treated as "has real volume".
pub const VOLUME_FLOOR_USD: f64 = 10_000.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct ScoreSet {
    pub liquidity: u8,
    pub activity: u8,
    pub popularity: u8,
    pub security: u8,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum Sentiment {
    Bullish,
    Neutral,
    Bearish,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "UPPERCASE")]
pub enum RiskLevel {
    Low,
    Medium,
    High,
}

pub fn liquidity_score(holder_count: u64) -> u8 {
    if holder_count > 500 {
        85
    } else if holder_count > 100 {
        60
    } else {
        30
    }
}

pub fn activity_score(tx_count: u64) -> u8 {
    if tx_count > 50 {
        90
    } else if tx_count > 10 {
        60
    } else {
        30
    }
}

pub fn popularity_score(has_volume: bool) -> u8 {
    if has_volume {
        80
    } else {
        40
    }
}

pub fn security_score(has_holders: bool, has_transactions: bool) -> u8 {
    match (has_holders, has_transactions) {
        (true, true) => 75,
        (false, false) => 25,
        _ => 50,
    }
}

impl ScoreSet {
    /// Score a token from its raw upstream signals.
    pub fn from_signals(holder_count: u64, tx_count: u64, volume_24h_usd: f64) -> Self {
        Self {
            liquidity: liquidity_score(holder_count),
            activity: activity_score(tx_count),
            popularity: popularity_score(volume_24h_usd > VOLUME_FLOOR_USD),
            security: security_score(holder_count > 0, tx_count > 0),
        }
    }

    /// Arithmetic mean of the four components, rounded to nearest.
    pub fn overall(&self) -> u8 {
        let sum = self.liquidity as f64
            + self.activity as f64
            + self.popularity as f64
            + self.security as f64;
        (sum / 4.0).round() as u8
    }

    pub fn sentiment(&self) -> Sentiment {
        sentiment(self.overall())
    }

    pub fn recommendation(&self) -> &'static str {
        recommendation(self.overall())
    }
}

pub fn sentiment(overall: u8) -> Sentiment {
    if overall > 70 {
        Sentiment::Bullish
    } else if overall > 40 {
        Sentiment::Neutral
    } else {
        Sentiment::Bearish
    }
}

pub fn recommendation(overall: u8) -> &'static str {
    if overall > 70 {
        "consider"
    } else if overall > 40 {
        "more research"
    } else {
        "avoid"
    }
}

/// Risk from how many of the boolean security checks came back false.
pub fn risk_level(false_checks: usize) -> RiskLevel {
    if false_checks == 0 {
        RiskLevel::Low
    } else if false_checks <= 2 {
        RiskLevel::Medium
    } else {
        RiskLevel::High
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reference_vector() {
        // holders=600, txs=60, volume present
        let scores = ScoreSet::from_signals(600, 60, 50_000.0);
        assert_eq!(
            scores,
            ScoreSet {
                liquidity: 85,
                activity: 90,
                popularity: 80,
                security: 75,
            }
        );
        assert_eq!(scores.overall(), 83);
        assert_eq!(scores.sentiment(), Sentiment::Bullish);
        assert_eq!(scores.recommendation(), "consider");
    }

    #[test]
    fn test_band_edges_are_strict() {
        assert_eq!(liquidity_score(500), 60);
        assert_eq!(liquidity_score(501), 85);
        assert_eq!(liquidity_score(100), 30);
        assert_eq!(liquidity_score(101), 60);
        assert_eq!(activity_score(50), 60);
        assert_eq!(activity_score(51), 90);
        assert_eq!(activity_score(10), 30);
        assert_eq!(activity_score(11), 60);
    }

    #[test]
    fn test_volume_floor() {
        let flat = ScoreSet::from_signals(600, 60, VOLUME_FLOOR_USD);
        assert_eq!(flat.popularity, 40);
        let above = ScoreSet::from_signals(600, 60, VOLUME_FLOOR_USD + 1.0);
        assert_eq!(above.popularity, 80);
    }

    #[test]
    fn test_dead_token_is_bearish() {
        let scores = ScoreSet::from_signals(0, 0, 0.0);
        assert_eq!(scores.security, 25);
        assert_eq!(scores.overall(), 31);
        assert_eq!(scores.sentiment(), Sentiment::Bearish);
        assert_eq!(scores.recommendation(), "avoid");
    }

    #[test]
    fn test_sentiment_thresholds() {
        assert_eq!(sentiment(71), Sentiment::Bullish);
        assert_eq!(sentiment(70), Sentiment::Neutral);
        assert_eq!(sentiment(41), Sentiment::Neutral);
        assert_eq!(sentiment(40), Sentiment::Bearish);
    }

    #[test]
    fn test_risk_levels() {
        assert_eq!(risk_level(0), RiskLevel::Low);
        assert_eq!(risk_level(1), RiskLevel::Medium);
        assert_eq!(risk_level(2), RiskLevel::Medium);
        assert_eq!(risk_level(3), RiskLevel::High);
        assert_eq!(risk_level(4), RiskLevel::High);
    }
}
