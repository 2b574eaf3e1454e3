//! Error types for inventory definitions and word construction.

use thiserror::Error;

/// Errors that can occur while building inventories or parsing words.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum PhonologyError {
    /// The named feature is not part of the inventory.
    ///
    /// This error occurs when a checked feature edit or a definition row
    /// refers to a feature the inventory never declared.
    #[error("Feature '{0}' is not defined in this inventory")]
    UnknownFeature(String),

    /// The same feature was declared twice.
    ///
    /// Feature order is canonical, so a repeated declaration would make
    /// row positions ambiguous.
    #[error("Feature '{0}' is declared more than once")]
    DuplicateFeature(String),

    /// The symbol is not part of the inventory.
    ///
    /// This error occurs when a transcription contains material no
    /// inventory symbol covers, or a symbol lookup misses.
    #[error("Symbol '{0}' is not defined in this inventory")]
    UnknownSymbol(String),

    /// The same symbol was given two definition rows.
    #[error("Symbol '{0}' is defined more than once")]
    DuplicateSymbol(String),

    /// A definition row used a mark other than `+`, `-`, or `0`.
    #[error("Symbol '{symbol}' uses invalid feature mark '{mark}'")]
    InvalidMark {
        /// The symbol whose row is malformed.
        symbol: String,
        /// The offending mark character.
        mark: char,
    },

    /// A definition row has the wrong number of feature marks.
    #[error("Symbol '{symbol}' defines {found} feature values, expected {expected}")]
    RowWidthMismatch {
        /// The symbol whose row is malformed.
        symbol: String,
        /// Number of marks the row supplied.
        found: usize,
        /// Number of features the inventory declares.
        expected: usize,
    },

    /// An inventory definition contained no usable content.
    #[error("Inventory definition is empty")]
    EmptyDefinition,

    /// A transcription contained a syllable with no phones.
    ///
    /// This error occurs for doubled or trailing syllable separators,
    /// e.g. `"ta..ka"` or `"taka."`.
    #[error("Transcription '{0}' contains an empty syllable")]
    EmptySyllable(String),

    /// A transcription contained no syllables at all.
    #[error("Transcription is empty")]
    EmptyWord,
}

/// A specialized `Result` type for phonology operations.
pub type Result<T> = std::result::Result<T, PhonologyError>;
