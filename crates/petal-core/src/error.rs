//! Error types for Petal theme loading and compilation

use thiserror::Error;

use crate::types::TokenCategory;

/// Main error type for theme operations.
///
/// Every variant is a configuration-validation failure raised while a theme
/// is being assembled or a utility class is being compiled.
#[derive(Error, Debug)]
pub enum ThemeError {
    /// A token with this name already exists in the category
    #[error("Duplicate {category} token: {name}")]
    DuplicateToken {
        category: TokenCategory,
        name: String,
    },

    /// No token with this name exists in the category
    #[error("Unknown {category} token: {name}")]
    UnknownToken {
        category: TokenCategory,
        name: String,
    },

    /// Alias name registered twice
    #[error("Duplicate alias: {0}")]
    DuplicateAlias(String),

    /// Alias points at a name that no category defines
    #[error("Alias {alias} points to unknown token {canonical}")]
    DanglingAlias { alias: String, canonical: String },

    /// Registering the alias would make resolution loop
    #[error("Alias cycle: {alias} -> {canonical} leads back to {alias}")]
    AliasCycle { alias: String, canonical: String },

    /// Utility class does not match the utility grammar
    #[error("Unrecognized utility: {class} ({reason})")]
    UnrecognizedUtility { class: String, reason: String },

    /// No animation bound to this name
    #[error("Unknown animation: {0}")]
    UnknownAnimation(String),

    /// Keyframe offsets are out of order or do not span 0%..100%
    #[error("Invalid keyframe sequence for {animation}: {reason}")]
    InvalidKeyframeSequence { animation: String, reason: String },

    /// A token value is malformed or has the wrong shape for its category
    #[error("Invalid value for {name}: {reason}")]
    InvalidValue { name: String, reason: String },

    /// Theme configuration could not be parsed
    #[error("Config error: {0}")]
    Config(#[from] serde_json::Error),

    /// General I/O error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl ThemeError {
    pub(crate) fn unrecognized(class: &str, reason: impl Into<String>) -> Self {
        Self::UnrecognizedUtility {
            class: class.to_string(),
            reason: reason.into(),
        }
    }

    pub(crate) fn invalid_value(name: &str, reason: impl Into<String>) -> Self {
        Self::InvalidValue {
            name: name.to_string(),
            reason: reason.into(),
        }
    }

    pub(crate) fn invalid_keyframes(animation: &str, reason: impl Into<String>) -> Self {
        Self::InvalidKeyframeSequence {
            animation: animation.to_string(),
            reason: reason.into(),
        }
    }
}

/// Result type alias using ThemeError
pub type ThemeResult<T> = Result<T, ThemeError>;
