mod rules;
mod signals;
mod topics;

pub use rules::{score_band, ScoreAdjustment};
pub use signals::build_signals;
pub use topics::infer_topics;

#[cfg(test)]
pub(crate) use rules::{MAX_SCORE, MIN_SCORE};

use std::collections::BTreeSet;

use serde::Serialize;

use super::domain::{IntakeRecord, RiskLevel, Signal, TopicTag};

/// Score an intake record without the topic set; convenience over [`evaluate`].
pub fn compute_score(record: &IntakeRecord) -> u8 {
    let topics = infer_topics(record.message.as_deref());
    rules::score_record(record, &topics).0
}

/// Run topic extraction, scoring and signal derivation over one record.
pub fn evaluate(record: &IntakeRecord) -> Assessment {
    let topics = infer_topics(record.message.as_deref());
    let (score, adjustments) = rules::score_record(record, &topics);
    let signals = build_signals(record, &topics);

    Assessment {
        score,
        risk: RiskLevel::from_score(score),
        score_band: score_band(score),
        topics,
        adjustments,
        signals,
    }
}

/// Outcome of the rule engine for one intake record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Assessment {
    pub score: u8,
    pub risk: RiskLevel,
    pub score_band: &'static str,
    pub topics: BTreeSet<TopicTag>,
    pub adjustments: Vec<ScoreAdjustment>,
    pub signals: Vec<Signal>,
}
