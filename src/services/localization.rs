use std::collections::HashMap;
use std::fs;
use std::path::Path;

use serde_json::Value;

use crate::types::errors::LocaleError;

/// Message keys consumed by the transmission core.
pub mod keys {
    pub const SOURCE_MISSING: &str = "transmit.source_missing";
    pub const COPY_FAILED: &str = "transmit.copy_failed";
    pub const OVERWRITE_PROMPT: &str = "transmit.overwrite_prompt";
    pub const OVERWRITE: &str = "transmit.overwrite";
    pub const SKIP: &str = "transmit.skip";
    pub const NO_FILES: &str = "transmit.no_files";
    pub const NO_TARGETS: &str = "transmit.no_targets";
    pub const PROGRESS_TITLE: &str = "transmit.progress_title";
    pub const PROGRESS_ITEM: &str = "transmit.progress_item";
    pub const DONE: &str = "transmit.done";
    pub const CANCELLED: &str = "transmit.cancelled";
    pub const CONFIRM_TRANSMIT: &str = "transmit.confirm";
}

/// Builds an interpolation parameter map from key/value pairs.
pub fn params(pairs: &[(&str, String)]) -> HashMap<String, String> {
    pairs
        .iter()
        .map(|(k, v)| (k.to_string(), v.clone()))
        .collect()
}

/// Trait defining the keyed, parameterized message lookup interface.
pub trait LocalizerTrait {
    fn t(&self, key: &str, params: Option<&HashMap<String, String>>) -> String;
}

/// Message catalog over a JSON document with dot-notation keys and
/// `{param}` interpolation.
pub struct MessageCatalog {
    catalog: Value,
}

impl MessageCatalog {
    /// Built-in English messages.
    pub fn builtin() -> Self {
        Self {
            catalog: serde_json::json!({
                "transmit": {
                    "source_missing": "Source file does not exist: {path}",
                    "copy_failed": "Failed to copy {file}: {error}",
                    "overwrite_prompt": "{file} already exists in {target}",
                    "overwrite": "Overwrite",
                    "skip": "Skip",
                    "no_files": "No files selected to transmit",
                    "no_targets": "No transmit targets configured",
                    "progress_title": "Transmitting to {target}",
                    "progress_item": "({index}/{total}) {file}",
                    "done": "Copied {success} of {total} files to {target}",
                    "cancelled": "Transmission cancelled, {success} files copied",
                    "confirm": "Transmit {count} files to {target}?"
                }
            }),
        }
    }

    /// Loads a catalog from a JSON file, replacing the built-in messages.
    pub fn from_file(path: &Path) -> Result<Self, LocaleError> {
        let content = fs::read_to_string(path)
            .map_err(|e| LocaleError::FileNotFound(format!("{}: {}", path.display(), e)))?;
        let catalog: Value = serde_json::from_str(&content)
            .map_err(|e| LocaleError::ParseError(format!("{}: {}", path.display(), e)))?;
        Ok(Self { catalog })
    }

    /// Looks up a nested key using dot notation, e.g. "transmit.no_files"
    /// resolves `catalog["transmit"]["no_files"]`.
    fn lookup_key<'a>(data: &'a Value, key: &str) -> Option<&'a Value> {
        let mut current = data;
        for part in key.split('.') {
            current = current.get(part)?;
        }
        Some(current)
    }

    /// Replaces `{param_name}` placeholders with values from the params map.
    fn interpolate(template: &str, params: &HashMap<String, String>) -> String {
        let mut result = template.to_string();
        for (key, value) in params {
            let placeholder = format!("{{{}}}", key);
            result = result.replace(&placeholder, value);
        }
        result
    }
}

impl LocalizerTrait for MessageCatalog {
    /// Looks up a message and optionally interpolates parameters.
    /// Returns the key itself if the message is not found.
    fn t(&self, key: &str, params: Option<&HashMap<String, String>>) -> String {
        let text = match Self::lookup_key(&self.catalog, key).and_then(Value::as_str) {
            Some(s) => s.to_string(),
            None => return key.to_string(),
        };

        match params {
            Some(p) => Self::interpolate(&text, p),
            None => text,
        }
    }
}
