use serde::{Deserialize, Serialize};

/// A human label and a destination directory for file transmission.
///
/// No uniqueness constraint on name or path; duplicates are resolved by
/// user choice at selection time.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct TransmitTarget {
    pub name: String,
    /// Absolute or network path of the destination directory.
    pub path: String,
}

/// On-disk shape of the dedicated `transmitConfig.json` file.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct TransmitConfigFile {
    #[serde(default)]
    pub transmit_targets: Vec<TransmitTarget>,
}
