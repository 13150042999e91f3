use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{BoardError, Result};
use crate::validation::Constraints;

/// Board configuration, read from an optional YAML file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BoardConfig {
    /// Fallback `tracing` filter when `RUST_LOG` is not set.
    pub log_filter: String,
    /// Validation rules for the input form.
    pub rules: FieldRules,
}

impl Default for BoardConfig {
    fn default() -> Self {
        Self {
            log_filter: "warn".to_string(),
            rules: FieldRules::default(),
        }
    }
}

/// Per-field constraints applied by the input form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FieldRules {
    pub title: Constraints,
    pub description: Constraints,
    /// Rules for the headcount. A blank headcount is rejected even when
    /// `required` is off, since every project needs one.
    pub people: Constraints,
}

impl Default for FieldRules {
    fn default() -> Self {
        Self {
            title: Constraints::required(),
            description: Constraints::required().with_min_length(5),
            people: Constraints::required().with_min(1).with_max(5),
        }
    }
}

impl BoardConfig {
    /// Load from `path`, or return the defaults when no path is given.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let Some(path) = path else {
            return Ok(Self::default());
        };

        if !path.exists() {
            return Err(BoardError::Config(format!(
                "config file not found: {}",
                path.display()
            )));
        }

        let raw = fs::read_to_string(path)?;
        Self::from_yaml(&raw)
    }

    pub fn from_yaml(raw: &str) -> Result<Self> {
        if raw.trim().is_empty() {
            return Ok(Self::default());
        }
        Ok(serde_yaml::from_str(raw)?)
    }
}
