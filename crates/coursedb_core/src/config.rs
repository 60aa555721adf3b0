use crate::category::Thresholds;
use crate::consts::{DEFAULT_DATA_FILE, DEFAULT_EXPORT_FILE};
use crate::errors::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Session settings. Loaded from an optional JSON file; absent keys keep
/// their defaults.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CatalogConfig {
    pub data_file: PathBuf,
    pub export_file: PathBuf,
    pub thresholds: Thresholds,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            data_file: PathBuf::from(DEFAULT_DATA_FILE),
            export_file: PathBuf::from(DEFAULT_EXPORT_FILE),
            thresholds: Thresholds::default(),
        }
    }
}

impl CatalogConfig {
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let s = fs::read_to_string(path)?;
        Ok(serde_json::from_str(&s)?)
    }

    /// Replace either threshold, re-checking `low < high` on the result.
    pub fn override_thresholds(&mut self, low: Option<f64>, high: Option<f64>) -> Result<()> {
        self.thresholds = Thresholds::new(
            low.unwrap_or(self.thresholds.low()),
            high.unwrap_or(self.thresholds.high()),
        )?;
        Ok(())
    }
}
