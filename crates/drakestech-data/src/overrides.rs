//! Override document discovery and configuration loading.
//!
//! The effective configuration is the compiled-in default merged with at
//! most one override document: an explicit path when given, otherwise
//! `generator-config.{ron,toml,json}` in the search directory. No override is
//! not an error.

use serde_json::Value;
use std::path::{Path, PathBuf};

use drakestech_core::config::{Config, resolve};

use crate::loader::{DataLoadError, deserialize_file, find_data_file};

/// Base name of the override document.
pub const OVERRIDE_BASE_NAME: &str = "generator-config";

/// Directory searched for an override document when none is given.
pub const DEFAULT_SEARCH_DIR: &str = "tools/content-gen";

/// A resolved configuration and the document it came from.
#[derive(Debug, Clone, PartialEq)]
pub struct LoadedConfig {
    pub config: Config,
    /// `None` when the defaults were used unchanged.
    pub source: Option<PathBuf>,
}

/// Find the override document in `dir`, if any.
pub fn discover_override(dir: &Path) -> Result<Option<PathBuf>, DataLoadError> {
    find_data_file(dir, OVERRIDE_BASE_NAME)
}

/// Read an override document into the neutral document model.
pub fn load_override(path: &Path) -> Result<Value, DataLoadError> {
    if !path.is_file() {
        return Err(DataLoadError::NotFound {
            file: path.to_path_buf(),
        });
    }
    deserialize_file(path)
}

/// Resolve the effective configuration.
///
/// An explicit `path` must exist; otherwise `search_dir` is scanned and the
/// defaults are used when it holds no override.
pub fn load_config(path: Option<&Path>, search_dir: &Path) -> Result<LoadedConfig, DataLoadError> {
    let source = match path {
        Some(path) => Some(path.to_path_buf()),
        None => discover_override(search_dir)?,
    };

    let defaults = Config::default();
    let config = match &source {
        None => {
            log::debug!("no override document in {}", search_dir.display());
            resolve(&defaults, None)
        }
        Some(file) => {
            log::info!("loading config overrides from {}", file.display());
            let doc = load_override(file)?;
            resolve(&defaults, Some(&doc))
        }
    };

    let config = config.map_err(|source_err| DataLoadError::Config {
        file: source
            .clone()
            .unwrap_or_else(|| PathBuf::from("<defaults>")),
        source: source_err,
    })?;

    Ok(LoadedConfig { config, source })
}

// ===========================================================================
// Tests
// ===========================================================================
