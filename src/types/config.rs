use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::types::errors::ConfigError;
use crate::types::group::TempGroup;
use crate::types::transmit::TransmitTarget;

/// Unified in-memory root of the persisted configuration.
///
/// Downstream logic never branches on which on-disk format produced it;
/// `ConfigRoot` handles the legacy/current split at parse time.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct VirtualTabConfig {
    #[serde(default)]
    pub groups: Vec<TempGroup>,
    #[serde(default)]
    pub transmit_targets: Vec<TransmitTarget>,
}

/// Persisted root in either of the two accepted forms.
///
/// The legacy form is a bare array of groups; the current form is an object
/// with optional `groups` and `transmitTargets` fields. The array
/// interpretation is attempted first.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum ConfigRoot {
    Legacy(Vec<TempGroup>),
    Current(VirtualTabConfig),
}

impl ConfigRoot {
    /// Collapses both persisted forms into the unified model.
    /// The legacy array form implies an empty target list.
    pub fn normalize(self) -> VirtualTabConfig {
        match self {
            ConfigRoot::Legacy(groups) => VirtualTabConfig {
                groups,
                transmit_targets: Vec::new(),
            },
            ConfigRoot::Current(config) => config,
        }
    }
}

impl VirtualTabConfig {
    /// Parses either persisted form from JSON text.
    pub fn from_json(text: &str) -> Result<Self, ConfigError> {
        let root: ConfigRoot = serde_json::from_str(text)
            .map_err(|e| ConfigError::SerializationError(e.to_string()))?;
        Ok(root.normalize())
    }

    /// Assigns fresh ids to groups written before ids became mandatory.
    /// Returns how many groups were migrated.
    pub fn assign_missing_ids(&mut self) -> usize {
        let mut assigned = 0;
        for group in &mut self.groups {
            if group.id.is_none() {
                group.id = Some(Uuid::new_v4().to_string());
                assigned += 1;
            }
        }
        assigned
    }

    /// Finds a group by id.
    pub fn group(&self, group_id: &str) -> Option<&TempGroup> {
        self.groups
            .iter()
            .find(|g| g.id.as_deref() == Some(group_id))
    }

    /// Finds a group by id, mutably.
    pub fn group_mut(&mut self, group_id: &str) -> Option<&mut TempGroup> {
        self.groups
            .iter_mut()
            .find(|g| g.id.as_deref() == Some(group_id))
    }
}
