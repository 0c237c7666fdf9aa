use std::fs;
use std::path::{Path, PathBuf};

use crate::services::config_store::VIRTUAL_TAB_FILE;
use crate::types::config::ConfigRoot;
use crate::types::transmit::{TransmitConfigFile, TransmitTarget};

/// File name of the dedicated transmit configuration inside `.vscode/`.
pub const TRANSMIT_CONFIG_FILE: &str = "transmitConfig.json";

/// Locates and loads transmit-target definitions.
///
/// Two-tier lookup: targets may live in a dedicated `transmitConfig.json`
/// or alongside the group data in `virtualTab.json`. The workspace root is
/// an explicit injected dependency.
pub struct TargetResolver {
    workspace_root: Option<PathBuf>,
}

impl TargetResolver {
    pub fn new(workspace_root: Option<PathBuf>) -> Self {
        Self { workspace_root }
    }

    /// Returns the configured transmit targets, possibly empty, never an error.
    ///
    /// Strict precedence, first success wins:
    /// 1. no workspace root: empty;
    /// 2. `.vscode/transmitConfig.json` if present and parseable (its target
    ///    list, empty when the field is absent);
    /// 3. `.vscode/virtualTab.json`, object form only — a legacy array file
    ///    has no transmit data by definition;
    /// 4. empty.
    pub fn load_transmit_targets(&self) -> Vec<TransmitTarget> {
        let root = match &self.workspace_root {
            Some(root) => root,
            None => return Vec::new(),
        };
        let vscode_dir = root.join(".vscode");

        if let Some(targets) = Self::read_dedicated(&vscode_dir.join(TRANSMIT_CONFIG_FILE)) {
            return targets;
        }
        if let Some(targets) = Self::read_shared(&vscode_dir.join(VIRTUAL_TAB_FILE)) {
            return targets;
        }
        Vec::new()
    }

    /// Reads the dedicated transmit configuration. `None` means "file not
    /// usable, continue resolution" — not a fatal error.
    fn read_dedicated(path: &Path) -> Option<Vec<TransmitTarget>> {
        let content = Self::read_file(path)?;
        match serde_json::from_str::<TransmitConfigFile>(&content) {
            Ok(file) => Some(file.transmit_targets),
            Err(e) => {
                eprintln!("[TRANSMIT] failed to parse {}: {}", path.display(), e);
                None
            }
        }
    }

    /// Reads transmit targets from the shared configuration file. Only the
    /// object form carries transmit data.
    fn read_shared(path: &Path) -> Option<Vec<TransmitTarget>> {
        let content = Self::read_file(path)?;
        match serde_json::from_str::<ConfigRoot>(&content) {
            Ok(ConfigRoot::Current(config)) => Some(config.transmit_targets),
            Ok(ConfigRoot::Legacy(_)) => None,
            Err(e) => {
                eprintln!("[TRANSMIT] failed to parse {}: {}", path.display(), e);
                None
            }
        }
    }

    fn read_file(path: &Path) -> Option<String> {
        if !path.exists() {
            return None;
        }
        match fs::read_to_string(path) {
            Ok(content) => Some(content),
            Err(e) => {
                eprintln!("[TRANSMIT] failed to read {}: {}", path.display(), e);
                None
            }
        }
    }
}
