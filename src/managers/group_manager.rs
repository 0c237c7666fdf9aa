//! Group Manager — CRUD operations for virtual tab groups and their
//! per-file bookmarks, operating on the in-memory configuration.
//!
//! Mutations leave the owned `VirtualTabConfig` ready to be persisted as a
//! whole document by the config store.

use std::cmp::Ordering;
use std::collections::HashSet;
use std::fs;
use std::path::Path;
use std::time::{SystemTime, UNIX_EPOCH};

use uuid::Uuid;

use crate::types::config::VirtualTabConfig;
use crate::types::errors::ConfigError;
use crate::types::group::{SortBy, SortOrder, TempGroup, VtBookmark};

/// Trait defining group and bookmark management operations.
pub trait GroupManagerTrait {
    fn create_group(
        &mut self,
        name: &str,
        parent_group_id: Option<&str>,
    ) -> Result<String, ConfigError>;
    fn rename_group(&mut self, group_id: &str, name: &str) -> Result<(), ConfigError>;
    fn delete_group(&mut self, group_id: &str) -> Result<(), ConfigError>;
    fn set_parent(
        &mut self,
        group_id: &str,
        parent_group_id: Option<&str>,
    ) -> Result<(), ConfigError>;
    fn add_file(&mut self, group_id: &str, file: &str) -> Result<(), ConfigError>;
    fn remove_file(&mut self, group_id: &str, file: &str) -> Result<(), ConfigError>;
    fn set_sort(
        &mut self,
        group_id: &str,
        sort_by: SortBy,
        sort_order: SortOrder,
    ) -> Result<(), ConfigError>;
    fn sorted_files(&self, group_id: &str) -> Result<Vec<String>, ConfigError>;
    fn add_bookmark(
        &mut self,
        group_id: &str,
        file: &str,
        line: u32,
        character: Option<u32>,
        label: &str,
        description: Option<&str>,
    ) -> Result<String, ConfigError>;
    fn update_bookmark(
        &mut self,
        group_id: &str,
        file: &str,
        bookmark_id: &str,
        label: Option<&str>,
        description: Option<&str>,
        line: Option<u32>,
    ) -> Result<(), ConfigError>;
    fn remove_bookmark(
        &mut self,
        group_id: &str,
        file: &str,
        bookmark_id: &str,
    ) -> Result<(), ConfigError>;
    fn bookmarks_for(&self, group_id: &str, file: &str) -> Result<&[VtBookmark], ConfigError>;
    /// Ancestor ids starting at the group's parent, root last.
    fn ancestor_chain(&self, group_id: &str) -> Result<Vec<String>, ConfigError>;
    fn group(&self, group_id: &str) -> Option<&TempGroup>;
    fn config(&self) -> &VirtualTabConfig;
}

/// In-memory group manager over an owned configuration document.
pub struct GroupManager {
    config: VirtualTabConfig,
}

impl GroupManager {
    pub fn new(config: VirtualTabConfig) -> Self {
        Self { config }
    }

    /// Hands the configuration back for persistence.
    pub fn into_config(self) -> VirtualTabConfig {
        self.config
    }

    fn now() -> i64 {
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap_or_default()
            .as_secs() as i64
    }

    /// Walks the parent chain upward from `start_id` collecting ancestor ids.
    /// Errors on dangling parents and on cycles.
    fn walk_ancestors(&self, start_id: &str) -> Result<Vec<String>, ConfigError> {
        let mut chain = Vec::new();
        let mut visited: HashSet<String> = HashSet::new();
        visited.insert(start_id.to_string());

        let mut current = self
            .config
            .group(start_id)
            .ok_or_else(|| ConfigError::GroupNotFound(start_id.to_string()))?;

        while let Some(parent_id) = current.parent_group_id.as_deref() {
            if !visited.insert(parent_id.to_string()) {
                return Err(ConfigError::ParentCycle(start_id.to_string()));
            }
            chain.push(parent_id.to_string());
            current = self
                .config
                .group(parent_id)
                .ok_or_else(|| ConfigError::GroupNotFound(parent_id.to_string()))?;
        }
        Ok(chain)
    }

    fn directed(ord: Ordering, order: SortOrder) -> Ordering {
        match order {
            SortOrder::Asc => ord,
            SortOrder::Desc => ord.reverse(),
        }
    }

    fn base_name(path: &str) -> String {
        Path::new(path)
            .file_name()
            .map(|n| n.to_string_lossy().to_lowercase())
            .unwrap_or_else(|| path.to_lowercase())
    }

    fn extension_key(path: &str) -> (String, String) {
        let ext = Path::new(path)
            .extension()
            .map(|e| e.to_string_lossy().to_lowercase())
            .unwrap_or_default();
        (ext, Self::base_name(path))
    }

    fn modified_time(path: &str) -> Option<SystemTime> {
        fs::metadata(path).and_then(|m| m.modified()).ok()
    }
}

impl GroupManagerTrait for GroupManager {
    /// Creates a new manually-curated group. Returns the generated group id.
    fn create_group(
        &mut self,
        name: &str,
        parent_group_id: Option<&str>,
    ) -> Result<String, ConfigError> {
        if let Some(parent_id) = parent_group_id {
            if self.config.group(parent_id).is_none() {
                return Err(ConfigError::GroupNotFound(parent_id.to_string()));
            }
            // A fresh id cannot appear in any existing chain, but the chain
            // it joins must itself terminate.
            self.walk_ancestors(parent_id)?;
        }

        let id = Uuid::new_v4().to_string();
        let mut group = TempGroup::new(name);
        group.id = Some(id.clone());
        group.parent_group_id = parent_group_id.map(str::to_string);
        self.config.groups.push(group);
        Ok(id)
    }

    fn rename_group(&mut self, group_id: &str, name: &str) -> Result<(), ConfigError> {
        let group = self
            .config
            .group_mut(group_id)
            .ok_or_else(|| ConfigError::GroupNotFound(group_id.to_string()))?;
        group.name = name.to_string();
        Ok(())
    }

    /// Deletes a group. Built-in groups refuse deletion; children are
    /// re-parented to the deleted group's own parent.
    fn delete_group(&mut self, group_id: &str) -> Result<(), ConfigError> {
        let index = self
            .config
            .groups
            .iter()
            .position(|g| g.id.as_deref() == Some(group_id))
            .ok_or_else(|| ConfigError::GroupNotFound(group_id.to_string()))?;

        if self.config.groups[index].built_in {
            return Err(ConfigError::BuiltInGroup(group_id.to_string()));
        }

        let new_parent = self.config.groups[index].parent_group_id.clone();
        for group in &mut self.config.groups {
            if group.parent_group_id.as_deref() == Some(group_id) {
                group.parent_group_id = new_parent.clone();
            }
        }
        self.config.groups.remove(index);
        Ok(())
    }

    /// Re-parents a group (or detaches it with `None`). Rejects assignments
    /// that would make the group its own ancestor.
    fn set_parent(
        &mut self,
        group_id: &str,
        parent_group_id: Option<&str>,
    ) -> Result<(), ConfigError> {
        if self.config.group(group_id).is_none() {
            return Err(ConfigError::GroupNotFound(group_id.to_string()));
        }

        if let Some(parent_id) = parent_group_id {
            if parent_id == group_id {
                return Err(ConfigError::ParentCycle(group_id.to_string()));
            }
            if self.config.group(parent_id).is_none() {
                return Err(ConfigError::GroupNotFound(parent_id.to_string()));
            }
            let ancestors = self.walk_ancestors(parent_id)?;
            if ancestors.iter().any(|id| id == group_id) {
                return Err(ConfigError::ParentCycle(group_id.to_string()));
            }
        }

        if let Some(group) = self.config.group_mut(group_id) {
            group.parent_group_id = parent_group_id.map(str::to_string);
        }
        Ok(())
    }

    /// Adds a file reference at the end of the group's insertion order.
    /// Adding an already-present file is a no-op.
    fn add_file(&mut self, group_id: &str, file: &str) -> Result<(), ConfigError> {
        let group = self
            .config
            .group_mut(group_id)
            .ok_or_else(|| ConfigError::GroupNotFound(group_id.to_string()))?;
        if !group.files.iter().any(|f| f == file) {
            group.files.push(file.to_string());
        }
        Ok(())
    }

    /// Removes a file reference along with its group-scoped bookmarks.
    fn remove_file(&mut self, group_id: &str, file: &str) -> Result<(), ConfigError> {
        let group = self
            .config
            .group_mut(group_id)
            .ok_or_else(|| ConfigError::GroupNotFound(group_id.to_string()))?;
        group.files.retain(|f| f != file);
        group.bookmarks.remove(file);
        Ok(())
    }

    fn set_sort(
        &mut self,
        group_id: &str,
        sort_by: SortBy,
        sort_order: SortOrder,
    ) -> Result<(), ConfigError> {
        let group = self
            .config
            .group_mut(group_id)
            .ok_or_else(|| ConfigError::GroupNotFound(group_id.to_string()))?;
        group.sort_by = sort_by;
        group.sort_order = sort_order;
        Ok(())
    }

    /// Returns the group's files ordered per its sort preferences.
    /// `SortBy::None` keeps stable insertion order. `Modified` consults the
    /// file system; files that cannot be stat'ed sort last in either direction.
    fn sorted_files(&self, group_id: &str) -> Result<Vec<String>, ConfigError> {
        let group = self
            .config
            .group(group_id)
            .ok_or_else(|| ConfigError::GroupNotFound(group_id.to_string()))?;

        let mut files = group.files.clone();
        let order = group.sort_order;
        match group.sort_by {
            SortBy::None => {}
            SortBy::Name => {
                files.sort_by(|a, b| {
                    Self::directed(Self::base_name(a).cmp(&Self::base_name(b)), order)
                });
            }
            SortBy::Path => {
                files.sort_by(|a, b| Self::directed(a.to_lowercase().cmp(&b.to_lowercase()), order));
            }
            SortBy::Extension => {
                files.sort_by(|a, b| {
                    Self::directed(Self::extension_key(a).cmp(&Self::extension_key(b)), order)
                });
            }
            SortBy::Modified => {
                files.sort_by(|a, b| {
                    match (Self::modified_time(a), Self::modified_time(b)) {
                        (Some(ta), Some(tb)) => Self::directed(ta.cmp(&tb), order),
                        (Some(_), None) => Ordering::Less,
                        (None, Some(_)) => Ordering::Greater,
                        (None, None) => Ordering::Equal,
                    }
                });
            }
        }
        Ok(files)
    }

    /// Adds a bookmark to a file within this group. Returns the bookmark id.
    /// `created` is set once; the label is not validated for emptiness.
    fn add_bookmark(
        &mut self,
        group_id: &str,
        file: &str,
        line: u32,
        character: Option<u32>,
        label: &str,
        description: Option<&str>,
    ) -> Result<String, ConfigError> {
        let group = self
            .config
            .group_mut(group_id)
            .ok_or_else(|| ConfigError::GroupNotFound(group_id.to_string()))?;

        let id = Uuid::new_v4().to_string();
        let bookmark = VtBookmark {
            id: id.clone(),
            line,
            character,
            label: label.to_string(),
            description: description.map(str::to_string),
            created: Self::now(),
            modified: None,
        };
        group
            .bookmarks
            .entry(file.to_string())
            .or_default()
            .push(bookmark);
        Ok(id)
    }

    /// Updates bookmark fields. `created` stays untouched; `modified` is
    /// stamped on every successful update.
    fn update_bookmark(
        &mut self,
        group_id: &str,
        file: &str,
        bookmark_id: &str,
        label: Option<&str>,
        description: Option<&str>,
        line: Option<u32>,
    ) -> Result<(), ConfigError> {
        let group = self
            .config
            .group_mut(group_id)
            .ok_or_else(|| ConfigError::GroupNotFound(group_id.to_string()))?;

        let bookmark = group
            .bookmarks
            .get_mut(file)
            .and_then(|list| list.iter_mut().find(|b| b.id == bookmark_id))
            .ok_or_else(|| ConfigError::BookmarkNotFound(bookmark_id.to_string()))?;

        if let Some(label) = label {
            bookmark.label = label.to_string();
        }
        if let Some(description) = description {
            bookmark.description = Some(description.to_string());
        }
        if let Some(line) = line {
            bookmark.line = line;
        }
        bookmark.modified = Some(Self::now());
        Ok(())
    }

    fn remove_bookmark(
        &mut self,
        group_id: &str,
        file: &str,
        bookmark_id: &str,
    ) -> Result<(), ConfigError> {
        let group = self
            .config
            .group_mut(group_id)
            .ok_or_else(|| ConfigError::GroupNotFound(group_id.to_string()))?;

        let list = group
            .bookmarks
            .get_mut(file)
            .ok_or_else(|| ConfigError::BookmarkNotFound(bookmark_id.to_string()))?;

        let before = list.len();
        list.retain(|b| b.id != bookmark_id);
        if list.len() == before {
            return Err(ConfigError::BookmarkNotFound(bookmark_id.to_string()));
        }
        if list.is_empty() {
            group.bookmarks.remove(file);
        }
        Ok(())
    }

    fn bookmarks_for(&self, group_id: &str, file: &str) -> Result<&[VtBookmark], ConfigError> {
        let group = self
            .config
            .group(group_id)
            .ok_or_else(|| ConfigError::GroupNotFound(group_id.to_string()))?;
        Ok(group
            .bookmarks
            .get(file)
            .map(|list| list.as_slice())
            .unwrap_or(&[]))
    }

    fn ancestor_chain(&self, group_id: &str) -> Result<Vec<String>, ConfigError> {
        self.walk_ancestors(group_id)
    }

    fn group(&self, group_id: &str) -> Option<&TempGroup> {
        self.config.group(group_id)
    }

    fn config(&self) -> &VirtualTabConfig {
        &self.config
    }
}
