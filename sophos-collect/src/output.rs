use std::fs;
use std::path::{Path, PathBuf};

use serde::Serialize;
use thiserror::Error;

/// Aggregate snapshot file name, overwritten each run.
pub const AGGREGATE_FILE: &str = "firewalls_data.json";

/// Errors returned when writing snapshot files.
#[derive(Debug, Error)]
pub enum OutputError {
    #[error("failed to create directory {path}: {source}")]
    CreateDir {
        path: String,
        source: std::io::Error,
    },
    #[error("failed to serialize JSON for {path}: {source}")]
    Serialize {
        path: String,
        source: serde_json::Error,
    },
    #[error("failed to write {path}: {source}")]
    Write {
        path: String,
        source: std::io::Error,
    },
}

/// Write a value as pretty-printed UTF-8 JSON, creating parent directories
/// as needed.
pub fn save_json<T: Serialize>(value: &T, path: &Path) -> Result<(), OutputError> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent).map_err(|source| OutputError::CreateDir {
                path: parent.display().to_string(),
                source,
            })?;
        }
    }

    let json = serde_json::to_string_pretty(value).map_err(|source| OutputError::Serialize {
        path: path.display().to_string(),
        source,
    })?;

    fs::write(path, json).map_err(|source| OutputError::Write {
        path: path.display().to_string(),
        source,
    })
}

/// Per-device history file path: `{history_dir}/{device_name}_{timestamp}.json`.
pub fn history_path(history_dir: &Path, device_name: &str, file_timestamp: &str) -> PathBuf {
    history_dir.join(format!("{device_name}_{file_timestamp}.json"))
}
