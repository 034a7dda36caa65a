use std::fs;
use std::io;
use std::path::PathBuf;

use thiserror::Error;

use super::model::StoredLists;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("store I/O error: {0}")]
    Io(#[from] io::Error),
    #[error("store record is not valid JSON: {0}")]
    Json(#[from] serde_json::Error),
}

/// Load/save hooks the track store persists through.
pub trait StoreBackend {
    /// `Ok(None)` means nothing has been persisted yet.
    fn load(&self) -> Result<Option<StoredLists>, StoreError>;
    fn save(&self, lists: &StoredLists) -> Result<(), StoreError>;
}

/// File backend holding the whole record as one JSON document,
/// overwritten wholesale on every save.
pub struct JsonFileBackend {
    path: PathBuf,
}

impl JsonFileBackend {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    /// Default store location under the platform data directory.
    pub fn default_path() -> Option<PathBuf> {
        dirs::data_dir().map(|d| d.join("quicktune").join("store.json"))
    }
}

impl StoreBackend for JsonFileBackend {
    fn load(&self) -> Result<Option<StoredLists>, StoreError> {
        let raw = match fs::read_to_string(&self.path) {
            Ok(raw) => raw,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(e.into()),
        };
        Ok(Some(serde_json::from_str(&raw)?))
    }

    fn save(&self, lists: &StoredLists) -> Result<(), StoreError> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        let raw = serde_json::to_string_pretty(lists)?;
        fs::write(&self.path, raw)?;
        Ok(())
    }
}
