//! CLI configuration file handling.
//!
//! An optional `optionlab.toml` provides defaults that individual
//! command-line flags can override:
//!
//! ```toml
//! [store]
//! path = "calculations.json"
//!
//! [surface]
//! resolution = 20
//! vmin = -20.0
//! vmax = 20.0
//! ```

use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::error::{CliError, Result};

/// Top-level configuration.
#[derive(Debug, Default, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Store configuration.
    #[serde(default)]
    pub store: StoreConfig,
    /// Surface sweep configuration.
    #[serde(default)]
    pub surface: SurfaceConfig,
}

/// Store section of the configuration.
#[derive(Debug, Default, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct StoreConfig {
    /// Calculation store file path.
    pub path: Option<PathBuf>,
}

/// Surface section of the configuration.
#[derive(Debug, Default, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SurfaceConfig {
    /// Points per sweep axis.
    pub resolution: Option<usize>,
    /// Lower bound of the PnL color scale.
    pub vmin: Option<f64>,
    /// Upper bound of the PnL color scale.
    pub vmax: Option<f64>,
}

impl Config {
    /// Loads configuration from `path`.
    ///
    /// A missing file yields the default (empty) configuration; an
    /// unreadable or malformed file is an error.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        if !path.exists() {
            return Ok(Self::default());
        }
        let contents = std::fs::read_to_string(path)
            .map_err(|err| CliError::Config(format!("{}: {}", path.display(), err)))?;
        toml::from_str(&contents)
            .map_err(|err| CliError::Config(format!("{}: {}", path.display(), err)))
    }
}
