use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use axum::body::to_bytes;
use axum::response::Response;
use chrono::{DateTime, TimeZone, Utc};
use serde_json::Value;

use crate::workflows::buildability::domain::{Coordinates, Intent, IntakeRecord};
use crate::workflows::buildability::intake::IntakeForm;
use crate::workflows::buildability::knowledge::KnowledgeBase;
use crate::workflows::buildability::report::BuildabilityEngine;
use crate::workflows::buildability::service::BuildabilityService;
use crate::workflows::buildability::store::{IntakeStore, StoreError};

pub(super) fn submitted_at() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2025, 6, 12, 14, 0, 0)
        .single()
        .expect("valid timestamp")
}

/// Record with no optional context at all.
pub(super) fn bare_record(intent: Intent) -> IntakeRecord {
    IntakeRecord {
        intent,
        name: "Tunde Bello".to_string(),
        email: "tunde@example.com".to_string(),
        address: None,
        coordinates: None,
        area: "Ijede".to_string(),
        landmark: None,
        lcda: "Ikorodu".to_string(),
        message: None,
        timestamp: submitted_at(),
    }
}

pub(super) fn detailed_record(intent: Intent, message: &str) -> IntakeRecord {
    IntakeRecord {
        address: Some("15 Example Close".to_string()),
        landmark: Some("Agric Bus Stop".to_string()),
        message: Some(message.to_string()),
        ..bare_record(intent)
    }
}

pub(super) fn lagos_coordinates() -> Coordinates {
    Coordinates {
        lat: 6.6194,
        lng: 3.5105,
    }
}

pub(super) fn form() -> IntakeForm {
    IntakeForm {
        intent: Intent::StartBuilding,
        name: "Tunde Bello".to_string(),
        email: "tunde@example.com".to_string(),
        address: Some("15 Example Close".to_string()),
        coordinates: Some(lagos_coordinates()),
        area: "Ijede".to_string(),
        landmark: Some("Agric Bus Stop".to_string()),
        lcda: "Ikorodu".to_string(),
        message: Some("Planning a duplex; need to know the permit steps".to_string()),
    }
}

#[derive(Default)]
pub(super) struct MemoryStore {
    slots: Mutex<HashMap<String, String>>,
}

impl MemoryStore {
    pub(super) fn with_raw(key: &str, value: &str) -> Self {
        let store = Self::default();
        store
            .slots
            .lock()
            .expect("store mutex poisoned")
            .insert(key.to_string(), value.to_string());
        store
    }

    pub(super) fn raw(&self, key: &str) -> Option<String> {
        self.slots
            .lock()
            .expect("store mutex poisoned")
            .get(key)
            .cloned()
    }
}

impl IntakeStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        Ok(self
            .slots
            .lock()
            .expect("store mutex poisoned")
            .get(key)
            .cloned())
    }

    fn set(&self, key: &str, value: String) -> Result<(), StoreError> {
        self.slots
            .lock()
            .expect("store mutex poisoned")
            .insert(key.to_string(), value);
        Ok(())
    }
}

pub(super) struct UnavailableStore;

impl IntakeStore for UnavailableStore {
    fn get(&self, _key: &str) -> Result<Option<String>, StoreError> {
        Err(StoreError::Unavailable("offline".to_string()))
    }

    fn set(&self, _key: &str, _value: String) -> Result<(), StoreError> {
        Err(StoreError::Unavailable("offline".to_string()))
    }
}

pub(super) fn engine() -> BuildabilityEngine {
    BuildabilityEngine::new(Arc::new(KnowledgeBase::seeded()))
}

pub(super) fn build_service() -> (Arc<BuildabilityService<MemoryStore>>, Arc<MemoryStore>) {
    let store = Arc::new(MemoryStore::default());
    let service = Arc::new(BuildabilityService::new(store.clone(), engine()));
    (service, store)
}

pub(super) async fn json_body(response: Response) -> Value {
    let bytes = to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("body readable");
    serde_json::from_slice(&bytes).expect("valid json body")
}
