use std::collections::BTreeSet;

use chrono::{DateTime, Utc};
use serde::Serialize;

use super::super::domain::{Intent, RiskLevel, Signal, TopicTag};
use super::super::evaluation::ScoreAdjustment;
use super::super::knowledge::{BriefSource, DistrictBrief};

/// Everything the report view renders for one intake record.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BuildabilityReport {
    pub intent: Intent,
    pub intent_label: &'static str,
    pub location: LocationSummary,
    pub submitted_at: DateTime<Utc>,
    pub score: u8,
    pub risk: RiskLevel,
    pub risk_label: &'static str,
    pub score_band: &'static str,
    pub topics: BTreeSet<TopicTag>,
    pub score_adjustments: Vec<ScoreAdjustment>,
    pub signals: Vec<Signal>,
    pub highlights: Vec<&'static str>,
    pub tailored_focus: Vec<&'static str>,
    pub brief_source: BriefSource,
    pub brief: DistrictBrief,
    pub clarifying_questions: Vec<&'static str>,
    pub checklist: Vec<&'static str>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LocationSummary {
    pub lcda: String,
    pub area: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub landmark: Option<String>,
    pub has_coordinates: bool,
}

/// Response for the latest-report lookup.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum ReportAvailability {
    Ready { report: Box<BuildabilityReport> },
    NoReport { message: &'static str },
}

pub const NO_REPORT_MESSAGE: &str =
    "No report data found. Go back to the Buildability Check and generate a report.";

impl ReportAvailability {
    pub fn missing() -> Self {
        ReportAvailability::NoReport {
            message: NO_REPORT_MESSAGE,
        }
    }

    pub fn report(&self) -> Option<&BuildabilityReport> {
        match self {
            ReportAvailability::Ready { report } => Some(&**report),
            ReportAvailability::NoReport { .. } => None,
        }
    }
}
