//! Error types for the example-data crate.
//!
//! Registry parsing and doctor generation fail in different ways, so each
//! gets its own `thiserror` enum.

use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur when parsing or querying a seed registry.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RegistryError {
    /// The registry file could not be read.
    #[error("failed to read registry file at '{path}': {message}")]
    IoError {
        /// Path to the registry file.
        path: PathBuf,
        /// Description of the I/O error.
        message: String,
    },

    /// The registry JSON is malformed or missing required fields.
    #[error("invalid registry JSON: {message}")]
    ParseError {
        /// Description of the parse error.
        message: String,
    },

    /// The registry version is not supported.
    #[error("unsupported registry version: expected {expected}, found {actual}")]
    UnsupportedVersion {
        /// Expected version number.
        expected: u32,
        /// Actual version found in the registry.
        actual: u32,
    },

    /// A vocabulary list the generator draws from is empty.
    #[error("registry field '{field}' must list at least one value")]
    EmptyVocabulary {
        /// JSON name of the empty list.
        field: &'static str,
    },

    /// A vocabulary entry is blank once trimmed.
    #[error("registry field '{field}' has a blank entry at index {index}")]
    BlankEntry {
        /// JSON name of the list holding the entry.
        field: &'static str,
        /// Index of the blank entry.
        index: usize,
    },

    /// The registry contains no seed definitions.
    #[error("registry contains no seed definitions")]
    EmptySeeds,

    /// Two seed definitions share a name.
    #[error("seed '{name}' is defined more than once")]
    DuplicateSeedName {
        /// The repeated seed name.
        name: String,
    },

    /// The requested seed name was not found in the registry.
    #[error("seed '{name}' not found in registry")]
    SeedNotFound {
        /// The seed name that was not found.
        name: String,
    },
}

/// Errors that can occur during doctor generation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GenerationError {
    /// The registry has nothing to draw the named field from.
    #[error("registry has no {field} to choose from")]
    EmptyVocabulary {
        /// The field that could not be populated.
        field: &'static str,
    },

    /// A generated record broke one of the entity bounds.
    #[error("generated doctor {index} is invalid: {reason}")]
    InvalidDoctor {
        /// Zero-based position of the record in the generated batch.
        index: usize,
        /// Which bound was broken.
        reason: String,
    },
}
