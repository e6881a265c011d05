use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::checker::ValidationMode;
use crate::{CheckResult, FieldCheckError};

pub const MODE_ENV: &str = "FIELDCHECK_MODE";
pub const CHECK_CONFLICTS_ENV: &str = "FIELDCHECK_CHECK_CONFLICTS";

/// Settings for checking update documents.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CheckerConfig {
    pub mode: ValidationMode,
    /// Reject updates whose targets overlap (`a` and `a.b`)
    pub check_conflicts: bool,
}

impl Default for CheckerConfig {
    fn default() -> Self {
        Self {
            mode: ValidationMode::Strict,
            check_conflicts: true,
        }
    }
}

impl CheckerConfig {
    pub fn with_mode(mode: ValidationMode) -> Self {
        Self {
            mode,
            ..Self::default()
        }
    }

    pub fn from_json(json: &str) -> CheckResult<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Read settings from `FIELDCHECK_MODE` and `FIELDCHECK_CHECK_CONFLICTS`
    pub fn from_env() -> CheckResult<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build settings from a key lookup, defaulting anything missing
    pub fn from_lookup<F>(lookup: F) -> CheckResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(mode) = lookup(MODE_ENV) {
            config.mode = ValidationMode::from_str(mode.trim()).map_err(|_| {
                FieldCheckError::Config(format!(
                    "{MODE_ENV} must be 'strict' or 'legacy', got '{mode}'"
                ))
            })?;
        }

        if let Some(flag) = lookup(CHECK_CONFLICTS_ENV) {
            config.check_conflicts = flag.trim().parse::<bool>().map_err(|_| {
                FieldCheckError::Config(format!(
                    "{CHECK_CONFLICTS_ENV} must be 'true' or 'false', got '{flag}'"
                ))
            })?;
        }

        if config.mode == ValidationMode::Legacy {
            tracing::info!("Update paths are checked in legacy mode");
        }
        tracing::debug!(mode = %config.mode, check_conflicts = config.check_conflicts, "Loaded checker config");

        Ok(config)
    }
}
