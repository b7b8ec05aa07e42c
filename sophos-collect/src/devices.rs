use std::fs;
use std::path::Path;

use serde::Deserialize;
use thiserror::Error;

/// One firewall appliance from the device list file.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Device {
    pub name: String,
    pub ip: String,
    pub port: u16,
    pub username: String,
    pub password: String,
}

/// Errors returned when loading the device list.
#[derive(Debug, Error)]
pub enum DeviceLoadError {
    #[error("failed to read device list {path}: {source}")]
    Io {
        path: String,
        source: std::io::Error,
    },
    #[error("failed to parse device list {path}: {source}")]
    Parse {
        path: String,
        source: serde_json::Error,
    },
    #[error("device list {path} contains no devices")]
    Empty { path: String },
}

/// Load the device list from a JSON file (an array of device objects).
pub fn load_devices(path: &Path) -> Result<Vec<Device>, DeviceLoadError> {
    let raw = fs::read_to_string(path).map_err(|source| DeviceLoadError::Io {
        path: path.display().to_string(),
        source,
    })?;

    let devices: Vec<Device> =
        serde_json::from_str(&raw).map_err(|source| DeviceLoadError::Parse {
            path: path.display().to_string(),
            source,
        })?;

    if devices.is_empty() {
        return Err(DeviceLoadError::Empty {
            path: path.display().to_string(),
        });
    }

    Ok(devices)
}
