use std::fmt;

// === ConfigError ===

/// Errors related to the group/bookmark configuration model.
#[derive(Debug)]
pub enum ConfigError {
    /// Group with the given ID was not found.
    GroupNotFound(String),
    /// Bookmark with the given ID was not found.
    BookmarkNotFound(String),
    /// The group is system-provided and cannot be deleted.
    BuiltInGroup(String),
    /// The requested parent assignment would create a cycle, or an
    /// existing parent chain does not terminate.
    ParentCycle(String),
    /// An I/O error occurred while reading or writing the configuration.
    IoError(String),
    /// Failed to serialize or deserialize the configuration document.
    SerializationError(String),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::GroupNotFound(id) => write!(f, "Group not found: {}", id),
            ConfigError::BookmarkNotFound(id) => write!(f, "Bookmark not found: {}", id),
            ConfigError::BuiltInGroup(id) => {
                write!(f, "Built-in group cannot be deleted: {}", id)
            }
            ConfigError::ParentCycle(id) => {
                write!(f, "Group parent chain contains a cycle: {}", id)
            }
            ConfigError::IoError(msg) => write!(f, "Configuration I/O error: {}", msg),
            ConfigError::SerializationError(msg) => {
                write!(f, "Configuration serialization error: {}", msg)
            }
        }
    }
}

impl std::error::Error for ConfigError {}

// === LocaleError ===

/// Errors related to message catalog loading.
#[derive(Debug)]
pub enum LocaleError {
    /// The catalog file was not found or unreadable.
    FileNotFound(String),
    /// The catalog file is not valid JSON.
    ParseError(String),
}

impl fmt::Display for LocaleError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LocaleError::FileNotFound(path) => write!(f, "Catalog file not found: {}", path),
            LocaleError::ParseError(msg) => write!(f, "Catalog parse error: {}", msg),
        }
    }
}

impl std::error::Error for LocaleError {}
