//! "Can I build here?" intake, scoring, and advisory reporting.

pub mod domain;
pub mod evaluation;
pub mod guidance;
pub mod intake;
pub mod knowledge;
pub mod report;
pub mod router;
pub mod service;
pub mod store;

#[cfg(test)]
mod tests;

pub use domain::{
    Coordinates, Intent, IntakeRecord, RiskLevel, Signal, SignalCategory, SignalStatus, TopicTag,
    UnknownIntent,
};
pub use evaluation::{
    build_signals, compute_score, evaluate, infer_topics, score_band, Assessment, ScoreAdjustment,
};
pub use intake::{IntakeForm, IntakeViolation};
pub use knowledge::{BriefSource, DistrictBrief, KnowledgeBase, KnowledgeBaseError};
pub use report::{BuildabilityEngine, BuildabilityReport, LocationSummary, ReportAvailability};
pub use router::buildability_router;
pub use service::{BuildabilityService, BuildabilityServiceError, IntakeReceipt};
pub use store::{FileIntakeStore, IntakeStore, StoreError, StoredIntake, STORAGE_KEY};
