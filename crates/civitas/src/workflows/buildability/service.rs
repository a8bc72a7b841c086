use std::sync::Arc;

use chrono::{DateTime, Utc};
use serde::Serialize;
use tracing::{debug, info};

use super::domain::{Intent, IntakeRecord};
use super::intake::{IntakeForm, IntakeViolation};
use super::report::{BuildabilityEngine, BuildabilityReport, ReportAvailability};
use super::store::{load_record, save_record, IntakeStore, StoreError, STORAGE_KEY};

/// Service composing the intake gate, the intake slot, and the report engine.
pub struct BuildabilityService<S> {
    store: Arc<S>,
    engine: Arc<BuildabilityEngine>,
}

impl<S> BuildabilityService<S>
where
    S: IntakeStore + 'static,
{
    pub fn new(store: Arc<S>, engine: BuildabilityEngine) -> Self {
        Self {
            store,
            engine: Arc::new(engine),
        }
    }

    pub fn engine(&self) -> &BuildabilityEngine {
        &self.engine
    }

    /// Validate a form and persist it as the current intake record.
    pub fn submit(&self, form: IntakeForm) -> Result<IntakeRecord, BuildabilityServiceError> {
        self.submit_at(form, Utc::now())
    }

    pub fn submit_at(
        &self,
        form: IntakeForm,
        submitted_at: DateTime<Utc>,
    ) -> Result<IntakeRecord, BuildabilityServiceError> {
        let record = form.into_record(submitted_at)?;
        save_record(self.store.as_ref(), &record)?;

        info!(
            intent = record.intent.key(),
            lcda = %record.lcda,
            has_coordinates = record.has_coordinates(),
            "intake record stored"
        );
        Ok(record)
    }

    /// Build the report for the stored record, if a usable one exists.
    pub fn latest_report(&self) -> Result<ReportAvailability, BuildabilityServiceError> {
        match load_record(self.store.as_ref())?.into_record() {
            Some(record) => {
                let report = self.engine.evaluate(&record);
                debug!(score = report.score, risk = ?report.risk, "report generated");
                Ok(ReportAvailability::Ready {
                    report: Box::new(report),
                })
            }
            None => Ok(ReportAvailability::missing()),
        }
    }

    /// Evaluate a record directly without touching the slot.
    pub fn evaluate(&self, record: &IntakeRecord) -> BuildabilityReport {
        self.engine.evaluate(record)
    }
}

/// Acknowledgement returned after an intake record is stored.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct IntakeReceipt {
    pub storage_key: &'static str,
    pub intent: Intent,
    pub lcda: String,
    pub submitted_at: DateTime<Utc>,
}

impl From<&IntakeRecord> for IntakeReceipt {
    fn from(record: &IntakeRecord) -> Self {
        Self {
            storage_key: STORAGE_KEY,
            intent: record.intent,
            lcda: record.lcda.clone(),
            submitted_at: record.timestamp,
        }
    }
}

/// Error raised by the buildability service.
#[derive(Debug, thiserror::Error)]
pub enum BuildabilityServiceError {
    #[error(transparent)]
    Intake(#[from] IntakeViolation),
    #[error(transparent)]
    Store(#[from] StoreError),
}
