//! Input/output path resolution.
//!
//! Each path is resolved through a priority chain:
//!
//! 1. CLI override (if `Some`)
//! 2. The settings file (`--config`, else `box-prices.toml` in the working
//!    directory when it exists)
//! 3. Built-in defaults matching the catalog layout
//!
//! Relative paths in a settings file are taken relative to that file's
//! directory.

use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::error::Error;

/// Settings file looked up in the working directory when `--config` is absent.
pub const SETTINGS_FILE_NAME: &str = "box-prices.toml";
pub const DEFAULT_LISTING: &str = "price_data.txt";
pub const DEFAULT_ASSETS: &str = "src/assets/box2";
pub const DEFAULT_OUTPUT: &str = "src/box2Prices.json";

/// On-disk settings. Every key is optional.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SettingsFile {
    pub listing: Option<PathBuf>,
    pub assets: Option<PathBuf>,
    pub output: Option<PathBuf>,
}

/// Where a resolved value came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SettingSource {
    Cli,
    File(PathBuf),
    Default,
}

impl std::fmt::Display for SettingSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Cli => write!(f, "command line"),
            Self::File(p) => write!(f, "{}", p.display()),
            Self::Default => write!(f, "default"),
        }
    }
}

/// A resolved path and its origin.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Resolved {
    pub path: PathBuf,
    pub source: SettingSource,
}

/// Fully resolved paths for one run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    /// Plain-text price listing
    pub listing: Resolved,
    /// Asset base directory containing the rarity folders
    pub assets: Resolved,
    /// JSON mapping to write
    pub output: Resolved,
    /// Settings file that was loaded, if any
    pub settings_file: Option<PathBuf>,
}

/// Values supplied on the command line.
#[derive(Debug, Clone, Default)]
pub struct Overrides {
    pub config: Option<PathBuf>,
    pub listing: Option<PathBuf>,
    pub assets: Option<PathBuf>,
    pub output: Option<PathBuf>,
}

/// Read and parse a settings file.
pub fn load_settings_file(path: &Path) -> Result<SettingsFile, Error> {
    let contents = std::fs::read_to_string(path).map_err(|e| Error::settings_read(path, e))?;
    toml::from_str(&contents).map_err(|e| Error::settings(path, e))
}

/// Resolve all paths, looking for the default settings file in `cwd`.
///
/// An explicit `--config` that does not exist is an error; a missing
/// default settings file is not.
pub fn resolve_settings(overrides: &Overrides, cwd: &Path) -> Result<Settings, Error> {
    let settings_path = match &overrides.config {
        Some(p) if p.is_file() => Some(p.clone()),
        Some(p) => return Err(Error::settings_not_found(p)),
        None => Some(cwd.join(SETTINGS_FILE_NAME)).filter(|p| p.is_file()),
    };

    let file = match &settings_path {
        Some(p) => {
            log::debug!("Loading settings from {}", p.display());
            load_settings_file(p)?
        }
        None => SettingsFile::default(),
    };
    let base = settings_path
        .as_deref()
        .and_then(Path::parent)
        .unwrap_or(Path::new(""));

    let pick = |cli: &Option<PathBuf>, from_file: &Option<PathBuf>, default: &str| -> Resolved {
        if let Some(p) = cli {
            return Resolved {
                path: p.clone(),
                source: SettingSource::Cli,
            };
        }
        if let (Some(p), Some(file_path)) = (from_file, &settings_path) {
            return Resolved {
                path: base.join(p),
                source: SettingSource::File(file_path.clone()),
            };
        }
        Resolved {
            path: PathBuf::from(default),
            source: SettingSource::Default,
        }
    };

    Ok(Settings {
        listing: pick(&overrides.listing, &file.listing, DEFAULT_LISTING),
        assets: pick(&overrides.assets, &file.assets, DEFAULT_ASSETS),
        output: pick(&overrides.output, &file.output, DEFAULT_OUTPUT),
        settings_file: settings_path.clone(),
    })
}
