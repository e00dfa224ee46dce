//! Externally supplied game configuration: one target and the operands the
//! player starts with.
//!
//! ```json
//! { "target": 532, "initialNumbers": [75, 25, 8, 6, 3, 1] }
//! ```

use std::fs;
use std::path::{Path, PathBuf};

use log::info;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::bag::Bag;
use crate::utils::{UtilsError, validate_operands};

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Cannot read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("Malformed game configuration: {0}")]
    Json(#[from] serde_json::Error),
    #[error("Invalid operands: {0}")]
    Operands(#[from] UtilsError),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GameConfig {
    pub target: i64,
    pub initial_numbers: Vec<i64>,
}

impl GameConfig {
    /// # Errors
    ///
    /// Returns an error if the JSON is malformed or the operand list is
    /// empty or holds non-positive values.
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        let config: GameConfig = serde_json::from_str(json)?;
        validate_operands(&config.initial_numbers)?;
        Ok(config)
    }

    /// # Errors
    ///
    /// Returns an error if the file cannot be read or fails
    /// [`GameConfig::from_json_str`].
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let json = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::from_json_str(&json)?;
        info!(
            "Loaded game configuration from {}: target {}, numbers {:?}",
            path.display(),
            config.target,
            config.initial_numbers
        );
        Ok(config)
    }

    pub fn bag(&self) -> Bag {
        Bag::new(self.initial_numbers.clone())
    }
}
