//! Theme loading errors
//!
//! Style lookups never fail: they fall back to documented defaults. Errors only
//! come from turning a document into themes.

use thiserror::Error;

/// Errors produced while building themes from a document
#[derive(Error, Debug)]
pub enum ThemeError {
    /// The TOML document could not be parsed
    #[error("failed to parse TOML theme document: {0}")]
    Toml(#[from] toml::de::Error),

    /// The JSON document could not be parsed
    #[error("failed to parse JSON theme document: {0}")]
    Json(#[from] serde_json::Error),

    /// A theme (or the document itself) is not a mapping
    #[error("theme {name:?} is not a mapping")]
    NotAMapping { name: String },

    /// A theme names a parent that the document does not define
    #[error("theme {theme:?} inherits from unknown theme {parent:?}")]
    UnknownParent { theme: String, parent: String },

    /// Parent links loop back on themselves
    #[error("theme {theme:?} inherits from itself")]
    ParentCycle { theme: String },

    /// No theme with this name was loaded
    #[error("unknown theme {0:?}")]
    UnknownTheme(String),
}

/// Result type for theme loading
pub type Result<T> = std::result::Result<T, ThemeError>;
