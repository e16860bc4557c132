//! Error types for rate table extraction

use crate::vocabulary::Field;
use thiserror::Error;

/// Errors that can occur while ingesting an email or extracting its rate tables
#[derive(Error, Debug)]
pub enum ExtractError {
    /// Failed to parse the email structure
    #[error("Failed to parse email structure: {0}")]
    Structure(String),

    /// Vocabulary could not be read or deserialized
    #[error("Invalid vocabulary configuration: {0}")]
    Config(String),

    /// The same header alias is listed for two canonical fields
    #[error("Alias '{alias}' is claimed by both {first} and {second}")]
    AliasConflict {
        alias: String,
        first: Field,
        second: Field,
    },

    /// The same keyword is listed for two canonical services
    #[error("Keyword '{keyword}' is claimed by both '{first}' and '{second}'")]
    KeywordConflict {
        keyword: String,
        first: String,
        second: String,
    },

    /// A canonical field has no accepted header spelling
    #[error("No aliases configured for field {0}")]
    EmptyAliases(Field),

    /// A canonical service has no keywords
    #[error("No keywords configured for service '{0}'")]
    EmptyKeywords(String),

    /// A placeholder map was applied to text it was not computed against
    #[error("Table span {start}..{end} does not match the document text")]
    PlaceholderMismatch { start: usize, end: usize },

    /// A row with a recognized service has no numeric rate
    #[error("Row {row} has no numeric rate: {value:?}")]
    MissingRate { row: usize, value: String },

    /// Rendering an export format failed
    #[error("Failed to render export: {0}")]
    Export(String),
}

/// Result type for extraction operations
pub type Result<T> = std::result::Result<T, ExtractError>;
