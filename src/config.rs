use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::Error;
use crate::types::Result;

/// Run configuration loaded from a JSON file
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AnonymizationConfig {
    /// Identifier columns to pseudonymize, in output order
    #[serde(default)]
    pub ids: Vec<String>,

    /// Columns to drop after pseudonymization
    #[serde(default)]
    pub remove: Vec<String>,
}

impl AnonymizationConfig {
    /// Load a configuration from a JSON file
    pub fn from_file(path: &Path) -> Result<Self> {
        let file = File::open(path).map_err(|e| {
            Error::InvalidConfiguration(format!(
                "cannot read config file '{}': {}",
                path.display(),
                e
            ))
        })?;
        let reader = BufReader::new(file);
        serde_json::from_reader(reader).map_err(|e| {
            Error::InvalidConfiguration(format!(
                "cannot parse config file '{}': {}",
                path.display(),
                e
            ))
        })
    }
}
