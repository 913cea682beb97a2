//! Project-level configuration, read from `elmscan.json` in the project
//! root. A missing or malformed file degrades to defaults; command-line
//! flags take precedence over anything configured here.

use crate::cli::OutputFormat;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

pub const CONFIG_FILE: &str = "elmscan.json";

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ScanConfig {
    /// Default output format for reports.
    pub format: Option<OutputFormat>,
    /// Path fragments excluded from file collection.
    pub excluded_paths: Vec<String>,
}

impl ScanConfig {
    pub fn load(root: &Path) -> Self {
        let path = root.join(CONFIG_FILE);
        let raw = match fs::read_to_string(&path) {
            Ok(raw) => raw,
            Err(_) => return Self::default(),
        };
        match serde_json::from_str(&raw) {
            Ok(config) => config,
            Err(err) => {
                log::warn!("ignoring malformed {}: {err}", path.display());
                Self::default()
            }
        }
    }
}
