//! viewbind_options: viewbind.json parsing and generation options.
//!
//! Parses `viewbind.json` files and provides the [`GenerationOptions`] that
//! synthesis reads.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

/// The config file looked up in the working directory.
pub const CONFIG_FILE_NAME: &str = "viewbind.json";

/// Knobs that change generated code.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GenerationOptions {
    /// Minimum platform version of the consuming app. Picks resource accessors.
    pub sdk: u32,
    /// Emit descriptive lookup and cast checks instead of bare lookups.
    pub debuggable: bool,
}

impl Default for GenerationOptions {
    fn default() -> Self {
        Self {
            sdk: 1,
            debuggable: true,
        }
    }
}

/// The viewbind.json file structure.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ViewbindConfig {
    pub sdk: Option<u32>,
    pub debuggable: Option<bool>,
    pub out_dir: Option<String>,
    /// Description files, relative to the config file.
    pub files: Option<Vec<String>>,
}

impl ViewbindConfig {
    /// Options from this file, with defaults for anything unset.
    pub fn generation_options(&self) -> GenerationOptions {
        let defaults = GenerationOptions::default();
        GenerationOptions {
            sdk: self.sdk.unwrap_or(defaults.sdk),
            debuggable: self.debuggable.unwrap_or(defaults.debuggable),
        }
    }

    /// Description files resolved against `root`.
    pub fn resolved_files(&self, root: &Path) -> Vec<PathBuf> {
        self.files
            .iter()
            .flatten()
            .map(|f| root.join(f))
            .collect()
    }
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("cannot read '{}': {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid config '{}': {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// Parse a viewbind.json file from a string.
pub fn parse_config(content: &str) -> Result<ViewbindConfig, serde_json::Error> {
    serde_json::from_str(content)
}

/// Parse a viewbind.json file from a path.
pub fn parse_config_file(path: &Path) -> Result<ViewbindConfig, ConfigError> {
    let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    parse_config(&content).map_err(|source| ConfigError::Parse {
        path: path.to_path_buf(),
        source,
    })
}
