use std::collections::BTreeSet;

use serde::Serialize;

use super::super::domain::{Intent, IntakeRecord, RiskLevel, TopicTag};

pub(crate) const BASE_SCORE: i16 = 80;
pub(crate) const MIN_SCORE: u8 = 20;
pub(crate) const MAX_SCORE: u8 = 92;
pub(crate) const LOW_RISK_FLOOR: u8 = 78;
pub(crate) const HIGH_RISK_CEILING: u8 = 55;

const MISSING_CONTEXT_PENALTY: i16 = 5;
const BUY_LAND_PENALTY: i16 = 4;
const ALREADY_BUILDING_PENALTY: i16 = 8;
const RISK_TOPIC_PENALTY: i16 = 4;

/// Topics that signal a concrete site risk and lower the score.
const RISK_TOPICS: [TopicTag; 3] = [
    TopicTag::TitleDocuments,
    TopicTag::Drainage,
    TopicTag::RightOfWaySetback,
];

/// Single point delta applied while scoring, kept for audit output.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ScoreAdjustment {
    pub delta: i16,
    pub reason: String,
}

/// Compute the buildability score and the deductions that produced it.
pub(crate) fn score_record(
    record: &IntakeRecord,
    topics: &BTreeSet<TopicTag>,
) -> (u8, Vec<ScoreAdjustment>) {
    let mut adjustments = Vec::new();
    let mut deduct = |delta: i16, reason: &str| {
        adjustments.push(ScoreAdjustment {
            delta: -delta,
            reason: reason.to_string(),
        });
    };

    if !record.has_address() {
        deduct(MISSING_CONTEXT_PENALTY, "address missing or too short");
    }
    if !record.has_landmark() {
        deduct(MISSING_CONTEXT_PENALTY, "landmark missing or too short");
    }
    if !record.has_detailed_message() {
        deduct(MISSING_CONTEXT_PENALTY, "message missing or too short");
    }

    match record.intent {
        Intent::BuyLand => deduct(BUY_LAND_PENALTY, "buying land before verification"),
        Intent::AlreadyBuilding => deduct(
            ALREADY_BUILDING_PENALTY,
            "construction already underway",
        ),
        Intent::StartBuilding | Intent::RiskCheck => {}
    }

    for topic in RISK_TOPICS {
        if topics.contains(&topic) {
            deduct(
                RISK_TOPIC_PENALTY,
                &format!("message mentions {}", topic.tag()),
            );
        }
    }

    let total: i16 = BASE_SCORE + adjustments.iter().map(|item| item.delta).sum::<i16>();
    let score = total.clamp(MIN_SCORE as i16, MAX_SCORE as i16) as u8;

    (score, adjustments)
}

impl RiskLevel {
    pub fn from_score(score: u8) -> Self {
        if score >= LOW_RISK_FLOOR {
            RiskLevel::Low
        } else if score < HIGH_RISK_CEILING {
            RiskLevel::High
        } else {
            RiskLevel::Medium
        }
    }
}

/// Advisory line shown next to the score; shares the risk tier boundaries.
pub fn score_band(score: u8) -> &'static str {
    if score >= LOW_RISK_FLOOR {
        "Proceed with verification"
    } else if score >= HIGH_RISK_CEILING {
        "Proceed cautiously"
    } else {
        "High risk — verify before spending"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tiers_partition_the_score_range() {
        for score in 0..=100u8 {
            let tier = RiskLevel::from_score(score);
            let expected = if score >= 78 {
                RiskLevel::Low
            } else if score < 55 {
                RiskLevel::High
            } else {
                RiskLevel::Medium
            };
            assert_eq!(tier, expected, "score {score}");
        }
    }

    #[test]
    fn band_boundaries_match_tiers() {
        assert_eq!(score_band(78), "Proceed with verification");
        assert_eq!(score_band(77), "Proceed cautiously");
        assert_eq!(score_band(55), "Proceed cautiously");
        assert_eq!(score_band(54), "High risk — verify before spending");
    }
}
