//! Error types for rule assembly and application.

use thiserror::Error;

use super::selector::Level;

/// Errors that can occur when applying a sound change rule.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ChangeError {
    /// The rule has no domain.
    ///
    /// This error occurs when `apply` is called on a rule that never
    /// received a domain stage.
    #[error("Domain is required. Use .to() to set it.")]
    MissingDomain,

    /// The rule has no transform.
    ///
    /// This error occurs when `apply` is called on a rule that never
    /// received a transform stage.
    #[error("Transform is required. Use .does() to set it.")]
    MissingTransform,

    /// The rule mixes phone-level and syllable-level stages.
    ///
    /// A rule traverses at exactly one level; every domain and transform
    /// stage must agree with the first domain's level.
    #[error("Rule mixes {expected}-level and {found}-level stages")]
    LevelMismatch {
        /// Level of the rule's first domain stage.
        expected: Level,
        /// Level of the first disagreeing stage.
        found: Level,
    },
}

/// A specialized `Result` type for rule application.
pub type Result<T> = std::result::Result<T, ChangeError>;
