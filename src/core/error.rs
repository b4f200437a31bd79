use thiserror::Error;

use super::Attribute;

/// Errors that can occur while building cards, looking up attributes
/// or setting up a comparison.
#[derive(Debug, Error)]
pub enum TrunfoError {
    #[error("Attribute identifier {0} is not in the catalog (expected 1 to 6)")]
    InvalidAttribute(u8),

    #[error("Primary and secondary attributes must differ, both were {0:?}")]
    SameAttribute(Attribute),

    #[error("Region code must be exactly two ASCII letters, got {0:?}")]
    InvalidRegion(String),

    #[error("Card code must be between 1 and {max} characters, got {len}")]
    InvalidCode { len: usize, max: usize },

    #[error("Name must be between 1 and {max} characters, got {len}")]
    InvalidName { len: usize, max: usize },

    #[error("{field} must be a finite value >= 0, got {value}")]
    InvalidMeasure { field: &'static str, value: f64 },

    #[error("Unable to parse {field} from {input:?}")]
    ParseNumber { field: &'static str, input: String },

    #[error("Missing required card field: {0}")]
    MissingField(&'static str),

    #[error("Configuration validation error: {0}")]
    InvalidConfig(String),

    #[cfg(feature = "serde")]
    #[error("Failed to serialize JSON: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type for card and comparison operations
pub type Result<T> = std::result::Result<T, TrunfoError>;
