use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A named, user-visible collection of file references.
///
/// Serialized field names stay camelCase for compatibility with
/// configuration files written by earlier releases.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct TempGroup {
    /// Absent only in files written before ids became mandatory.
    /// Loading treats a missing id as "needs migration", not an error.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub name: String,
    #[serde(default)]
    pub files: Vec<String>,
    /// System-provided groups (e.g. "ungrouped") are never deleted by user action.
    #[serde(default)]
    pub built_in: bool,
    /// Membership is computed (e.g. by extension) rather than manually curated.
    #[serde(default)]
    pub auto: bool,
    #[serde(default)]
    pub sort_by: SortBy,
    #[serde(default)]
    pub sort_order: SortOrder,
    #[serde(default)]
    pub group_by: GroupBy,
    /// Which auto-partitioning scheme produced subgroups, when `group_by` is not None.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub auto_group_type: Option<String>,
    /// Optional back-reference enabling nesting. Chains must terminate at a
    /// group with no parent; cycle checks live in the group manager.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parent_group_id: Option<String>,
    /// Per-file bookmarks, scoped to this group only. The same file may carry
    /// different bookmarks in different groups.
    #[serde(default, skip_serializing_if = "HashMap::is_empty")]
    pub bookmarks: HashMap<String, Vec<VtBookmark>>,
    /// Open-ended extension bag. Unknown keys must survive a load/save
    /// round-trip untouched, so values stay opaque JSON.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub metadata: Option<serde_json::Map<String, serde_json::Value>>,
}

impl TempGroup {
    /// Creates an empty manually-curated group with a fresh id.
    pub fn new(name: &str) -> Self {
        Self {
            id: Some(Uuid::new_v4().to_string()),
            name: name.to_string(),
            files: Vec::new(),
            built_in: false,
            auto: false,
            sort_by: SortBy::None,
            sort_order: SortOrder::Asc,
            group_by: GroupBy::None,
            auto_group_type: None,
            parent_group_id: None,
            bookmarks: HashMap::new(),
            metadata: None,
        }
    }
}

/// Display sort key for a group's file list.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub enum SortBy {
    None,
    Name,
    Path,
    Extension,
    Modified,
}

impl Default for SortBy {
    fn default() -> Self {
        SortBy::None
    }
}

/// Sort direction for a group's file list.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub enum SortOrder {
    Asc,
    Desc,
}

impl Default for SortOrder {
    fn default() -> Self {
        SortOrder::Asc
    }
}

/// Auto-partitioning scheme for a group's members.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub enum GroupBy {
    None,
    Extension,
    ModifiedDate,
}

impl Default for GroupBy {
    fn default() -> Self {
        GroupBy::None
    }
}

/// A marked code location within a file, scoped to one group.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct VtBookmark {
    /// Unique within its file's bookmark list.
    pub id: String,
    /// Zero-based line number.
    pub line: u32,
    /// Optional zero-based column.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub character: Option<u32>,
    /// Non-empty by convention; not structurally enforced.
    pub label: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Epoch seconds, set at creation and immutable afterwards.
    pub created: i64,
    /// Set on any field change after creation.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub modified: Option<i64>,
}
