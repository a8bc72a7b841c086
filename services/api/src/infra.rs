use civitas::config::KnowledgeConfig;
use civitas::workflows::buildability::{
    BuildabilityEngine, IntakeStore, KnowledgeBase, KnowledgeBaseError, StoreError,
};
use metrics_exporter_prometheus::PrometheusHandle;
use std::collections::HashMap;
use std::sync::atomic::AtomicBool;
use std::sync::{Arc, Mutex};

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
}

/// Process-local intake slot used by the HTTP service.
#[derive(Default, Clone)]
pub(crate) struct InMemoryIntakeStore {
    slots: Arc<Mutex<HashMap<String, String>>>,
}

impl IntakeStore for InMemoryIntakeStore {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        let guard = self
            .slots
            .lock()
            .map_err(|_| StoreError::Unavailable("intake store mutex poisoned".to_string()))?;
        Ok(guard.get(key).cloned())
    }

    fn set(&self, key: &str, value: String) -> Result<(), StoreError> {
        let mut guard = self
            .slots
            .lock()
            .map_err(|_| StoreError::Unavailable("intake store mutex poisoned".to_string()))?;
        guard.insert(key.to_string(), value);
        Ok(())
    }
}

pub(crate) fn build_engine(
    config: &KnowledgeConfig,
) -> Result<BuildabilityEngine, KnowledgeBaseError> {
    let knowledge = KnowledgeBase::load(config.dataset_path.as_deref())?;
    Ok(BuildabilityEngine::new(Arc::new(knowledge)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use civitas::workflows::buildability::STORAGE_KEY;
    use std::path::PathBuf;

    #[test]
    fn memory_store_overwrites_slot() {
        let store = InMemoryIntakeStore::default();
        store
            .set(STORAGE_KEY, "one".to_string())
            .expect("write works");
        store
            .set(STORAGE_KEY, "two".to_string())
            .expect("write works");
        assert_eq!(
            store.get(STORAGE_KEY).expect("read works").as_deref(),
            Some("two")
        );
        assert_eq!(store.get("other").expect("read works"), None);
    }

    #[test]
    fn engine_defaults_to_seeded_dataset() {
        let engine = build_engine(&KnowledgeConfig::default()).expect("seeded dataset loads");
        assert_eq!(engine.knowledge().districts().collect::<Vec<_>>(), vec!["ikorodu"]);
    }

    #[test]
    fn missing_dataset_file_is_an_error() {
        let config = KnowledgeConfig {
            dataset_path: Some(PathBuf::from("/nonexistent/civitas/districts.json")),
        };
        assert!(matches!(
            build_engine(&config),
            Err(KnowledgeBaseError::Io(_))
        ));
    }
}
