use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use super::domain::IntakeRecord;

/// Slot holding the most recent intake record.
pub const STORAGE_KEY: &str = "civitas_m1_v1";

/// Key-value capability the intake flow persists through.
pub trait IntakeStore: Send + Sync {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError>;
    fn set(&self, key: &str, value: String) -> Result<(), StoreError>;
}

#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("store unavailable: {0}")]
    Unavailable(String),
    #[error("store io failure: {0}")]
    Io(#[from] std::io::Error),
    #[error("unable to encode intake record: {0}")]
    Encode(#[from] serde_json::Error),
}

/// Outcome of reading the intake slot back.
#[derive(Debug, Clone, PartialEq)]
pub enum StoredIntake {
    Found(IntakeRecord),
    Missing,
    /// The slot holds something that no longer parses as a record.
    Unreadable,
}

impl StoredIntake {
    pub fn into_record(self) -> Option<IntakeRecord> {
        match self {
            StoredIntake::Found(record) => Some(record),
            StoredIntake::Missing | StoredIntake::Unreadable => None,
        }
    }
}

/// Serialize the record into the fixed slot, replacing any earlier submission.
pub fn save_record<S: IntakeStore + ?Sized>(
    store: &S,
    record: &IntakeRecord,
) -> Result<(), StoreError> {
    let encoded = serde_json::to_string(record)?;
    store.set(STORAGE_KEY, encoded)
}

pub fn load_record<S: IntakeStore + ?Sized>(store: &S) -> Result<StoredIntake, StoreError> {
    let Some(raw) = store.get(STORAGE_KEY)? else {
        return Ok(StoredIntake::Missing);
    };

    match serde_json::from_str::<IntakeRecord>(&raw) {
        Ok(record) => Ok(StoredIntake::Found(record)),
        Err(err) => {
            tracing::warn!(key = STORAGE_KEY, error = %err, "stored intake record is unreadable");
            Ok(StoredIntake::Unreadable)
        }
    }
}

/// One JSON file per key inside a directory.
#[derive(Debug, Clone)]
pub struct FileIntakeStore {
    dir: PathBuf,
}

impl FileIntakeStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    fn path_for(&self, key: &str) -> Result<PathBuf, StoreError> {
        let valid = !key.is_empty()
            && key
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-');
        if !valid {
            return Err(StoreError::Unavailable(format!("invalid slot key '{key}'")));
        }
        Ok(self.dir.join(format!("{key}.json")))
    }
}

impl IntakeStore for FileIntakeStore {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        let path = self.path_for(key)?;
        match fs::read_to_string(&path) {
            Ok(contents) => Ok(Some(contents)),
            Err(err) if err.kind() == ErrorKind::NotFound => Ok(None),
            Err(err) => Err(StoreError::Io(err)),
        }
    }

    fn set(&self, key: &str, value: String) -> Result<(), StoreError> {
        let path = self.path_for(key)?;
        fs::create_dir_all(&self.dir)?;
        let staging = path.with_extension("json.tmp");
        fs::write(&staging, value)?;
        fs::rename(&staging, &path)?;
        Ok(())
    }
}
