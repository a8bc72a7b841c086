pub mod views;

pub use views::{BuildabilityReport, LocationSummary, ReportAvailability};

use std::sync::Arc;

use super::domain::IntakeRecord;
use super::evaluation;
use super::guidance;
use super::knowledge::KnowledgeBase;

/// Stateless report builder over an injected district dataset.
#[derive(Debug, Clone, Default)]
pub struct BuildabilityEngine {
    knowledge: Arc<KnowledgeBase>,
}

impl BuildabilityEngine {
    pub fn new(knowledge: Arc<KnowledgeBase>) -> Self {
        Self { knowledge }
    }

    pub fn knowledge(&self) -> &KnowledgeBase {
        &self.knowledge
    }

    pub fn evaluate(&self, record: &IntakeRecord) -> BuildabilityReport {
        let assessment = evaluation::evaluate(record);
        let matched = self.knowledge.resolve(&record.lcda);

        BuildabilityReport {
            intent: record.intent,
            intent_label: record.intent.label(),
            location: LocationSummary {
                lcda: record.lcda.clone(),
                area: record.area.clone(),
                address: record.address.clone(),
                landmark: record.landmark.clone(),
                has_coordinates: record.has_coordinates(),
            },
            submitted_at: record.timestamp,
            score: assessment.score,
            risk: assessment.risk,
            risk_label: assessment.risk.label(),
            score_band: assessment.score_band,
            highlights: guidance::highlights(record.intent).to_vec(),
            tailored_focus: guidance::tailored_focus(&assessment.topics),
            topics: assessment.topics,
            score_adjustments: assessment.adjustments,
            signals: assessment.signals,
            brief_source: matched.source,
            brief: matched.brief.clone(),
            clarifying_questions: guidance::clarifying_questions(record),
            checklist: guidance::checklist(record.intent),
        }
    }
}
