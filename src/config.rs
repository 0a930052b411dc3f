//! Configuration handling for the TUI

use crate::state::{Accommodation, FormData};
use anyhow::Result;
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// User configuration for the TUI
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct TuiConfig {
    /// Accommodation preselected on stage 2
    pub default_accommodation: Option<Accommodation>,
    /// Preselect an accommodation at all (defaults to true)
    pub preselect_accommodation: Option<bool>,
}

impl TuiConfig {
    /// Get the config file path
    fn config_path() -> Option<PathBuf> {
        ProjectDirs::from("io", "mars-visit", "mars-visit")
            .map(|dirs| dirs.config_dir().join("config.json"))
    }

    /// Load configuration from the platform config dir
    pub fn load() -> Result<Self> {
        match Self::config_path() {
            Some(path) => Self::load_from(&path),
            None => Ok(Self::default()),
        }
    }

    /// Load configuration from a specific file, defaulting when it is absent
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let content = fs::read_to_string(path)?;
        let config: TuiConfig = serde_json::from_str(&content)?;
        tracing::debug!(path = %path.display(), "Loaded config");
        Ok(config)
    }

    /// Accommodation the form starts with
    pub fn initial_accommodation(&self) -> Option<Accommodation> {
        if self.preselect_accommodation.unwrap_or(true) {
            Some(self.default_accommodation.unwrap_or_default())
        } else {
            None
        }
    }

    /// Fresh application record honouring this config
    pub fn initial_form_data(&self) -> FormData {
        FormData::with_accommodation(self.initial_accommodation())
    }
}
