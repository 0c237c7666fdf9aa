// Whole-document persistence for the virtual tab configuration.
// The entire VirtualTabConfig is the unit of durability; there is no
// incremental persistence. Both the legacy array form and the current
// object form are accepted on load; saves always write the object form.

use std::fs;
use std::path::{Path, PathBuf};

use crate::types::config::VirtualTabConfig;
use crate::types::errors::ConfigError;

/// File name of the shared configuration inside `.vscode/`.
pub const VIRTUAL_TAB_FILE: &str = "virtualTab.json";

/// Result of loading the configuration document.
pub struct LoadOutcome {
    pub config: VirtualTabConfig,
    /// True when groups were assigned ids during load; callers should save.
    pub migrated: bool,
}

/// Loads and saves the configuration document at a fixed path.
pub struct ConfigStore {
    config_path: PathBuf,
}

impl ConfigStore {
    pub fn new(config_path: impl Into<PathBuf>) -> Self {
        Self {
            config_path: config_path.into(),
        }
    }

    /// Store rooted at `<workspace>/.vscode/virtualTab.json`.
    pub fn for_workspace(workspace_root: &Path) -> Self {
        Self::new(workspace_root.join(".vscode").join(VIRTUAL_TAB_FILE))
    }

    /// Loads the configuration document.
    ///
    /// A missing file yields an empty default configuration. Groups written
    /// before ids became mandatory get fresh ids assigned; `migrated` reports
    /// whether that happened. Malformed JSON is an error.
    pub fn load(&self) -> Result<LoadOutcome, ConfigError> {
        if !self.config_path.exists() {
            return Ok(LoadOutcome {
                config: VirtualTabConfig::default(),
                migrated: false,
            });
        }

        let content = fs::read_to_string(&self.config_path)
            .map_err(|e| ConfigError::IoError(format!("Failed to read config file: {}", e)))?;

        let mut config = VirtualTabConfig::from_json(&content)?;
        let migrated = config.assign_missing_ids() > 0;

        Ok(LoadOutcome { config, migrated })
    }

    /// Saves the whole configuration document, creating parent directories
    /// as needed. Always writes the object form.
    pub fn save(&self, config: &VirtualTabConfig) -> Result<(), ConfigError> {
        if let Some(parent) = self.config_path.parent() {
            fs::create_dir_all(parent).map_err(|e| {
                ConfigError::IoError(format!("Failed to create config directory: {}", e))
            })?;
        }

        let json = serde_json::to_string_pretty(config)
            .map_err(|e| ConfigError::SerializationError(e.to_string()))?;

        fs::write(&self.config_path, json)
            .map_err(|e| ConfigError::IoError(format!("Failed to write config file: {}", e)))?;

        Ok(())
    }

    pub fn config_path(&self) -> &Path {
        &self.config_path
    }
}
