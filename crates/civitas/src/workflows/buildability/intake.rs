use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::domain::{Coordinates, Intent, IntakeRecord};

const MIN_NAME_CHARS: usize = 2;
const MIN_AREA_CHARS: usize = 3;
const MIN_DISTRICT_CHARS: usize = 2;

/// Raw form fields as entered by the requester.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct IntakeForm {
    #[serde(default)]
    pub intent: Intent,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub address: Option<String>,
    #[serde(default, rename = "coords")]
    pub coordinates: Option<Coordinates>,
    #[serde(default)]
    pub area: String,
    #[serde(default)]
    pub landmark: Option<String>,
    #[serde(default)]
    pub lcda: String,
    #[serde(default)]
    pub message: Option<String>,
}

/// Reasons a form cannot generate a report yet.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum IntakeViolation {
    #[error("name must be at least 2 characters")]
    NameTooShort,
    #[error("email must contain '@' and '.'")]
    InvalidEmail,
    #[error("area must be at least 3 characters")]
    AreaTooShort,
    #[error("LCDA must be at least 2 characters")]
    DistrictTooShort,
}

fn trimmed_chars(value: &str) -> usize {
    value.trim().chars().count()
}

fn optional_text(value: Option<String>) -> Option<String> {
    value
        .map(|text| text.trim().to_string())
        .filter(|text| !text.is_empty())
}

impl IntakeForm {
    /// Every gate check that currently fails, in form order.
    pub fn violations(&self) -> Vec<IntakeViolation> {
        let mut violations = Vec::new();

        if trimmed_chars(&self.name) < MIN_NAME_CHARS {
            violations.push(IntakeViolation::NameTooShort);
        }
        if !(self.email.contains('@') && self.email.contains('.')) {
            violations.push(IntakeViolation::InvalidEmail);
        }
        if trimmed_chars(&self.area) < MIN_AREA_CHARS {
            violations.push(IntakeViolation::AreaTooShort);
        }
        if trimmed_chars(&self.lcda) < MIN_DISTRICT_CHARS {
            violations.push(IntakeViolation::DistrictTooShort);
        }

        violations
    }

    /// Freeze the form into an intake record, rejecting it on the first failed check.
    pub fn into_record(
        self,
        submitted_at: DateTime<Utc>,
    ) -> Result<IntakeRecord, IntakeViolation> {
        if let Some(violation) = self.violations().into_iter().next() {
            return Err(violation);
        }

        Ok(IntakeRecord {
            intent: self.intent,
            name: self.name.trim().to_string(),
            email: self.email.trim().to_string(),
            address: optional_text(self.address),
            coordinates: self.coordinates,
            area: self.area.trim().to_string(),
            landmark: optional_text(self.landmark),
            lcda: self.lcda.trim().to_string(),
            message: optional_text(self.message),
            timestamp: submitted_at,
        })
    }
}
