/// Errors for card construction and attribute lookup.
mod error;
/// Export `TrunfoError` and the `Result` alias
pub use self::error::{Result, TrunfoError};

/// The static attribute catalog.
mod attribute;
/// Export the attribute types
pub use self::attribute::{Attribute, AttributeInfo, CompareMode, WinDirection};

/// Cards and the helpers used to build them from typed input.
mod card;
/// Export `Card` and `CardBuilder`
pub use self::card::{
    parse_count, parse_landmarks, parse_measure, Card, CardBuilder, MAX_CODE_LEN, MAX_NAME_LEN,
};
