use std::path::Path;

use thiserror::Error;

/// Errors that can abort a price-matching run.
#[derive(Debug, Error)]
pub enum Error {
    /// I/O error outside of the listing/output paths
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The price listing could not be read
    #[error("Cannot read price listing {path}: {source}")]
    ReadListing {
        path: String,
        source: std::io::Error,
    },

    /// The asset base directory does not exist or is not a directory
    #[error("Asset directory not found: {0}")]
    AssetRootNotFound(String),

    /// The output mapping could not be written
    #[error("Cannot write {path}: {source}")]
    WriteOutput {
        path: String,
        source: std::io::Error,
    },

    /// Serializing the final mapping failed
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// An explicitly requested settings file does not exist
    #[error("Settings file not found: {0}")]
    SettingsNotFound(String),

    /// The settings file exists but could not be read
    #[error("Cannot read settings file {path}: {source}")]
    SettingsRead {
        path: String,
        source: std::io::Error,
    },

    /// The settings file is not valid TOML or has unknown keys
    #[error("Invalid settings file {path}: {source}")]
    Settings {
        path: String,
        source: toml::de::Error,
    },
}

impl Error {
    pub fn read_listing(path: &Path, source: std::io::Error) -> Self {
        Self::ReadListing {
            path: path.display().to_string(),
            source,
        }
    }

    pub fn asset_root_not_found(path: &Path) -> Self {
        Self::AssetRootNotFound(path.display().to_string())
    }

    pub fn write_output(path: &Path, source: std::io::Error) -> Self {
        Self::WriteOutput {
            path: path.display().to_string(),
            source,
        }
    }

    pub fn settings_not_found(path: &Path) -> Self {
        Self::SettingsNotFound(path.display().to_string())
    }

    pub fn settings_read(path: &Path, source: std::io::Error) -> Self {
        Self::SettingsRead {
            path: path.display().to_string(),
            source,
        }
    }

    pub fn settings(path: &Path, source: toml::de::Error) -> Self {
        Self::Settings {
            path: path.display().to_string(),
            source,
        }
    }
}
