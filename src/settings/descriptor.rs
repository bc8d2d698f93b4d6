//! Setting descriptor types
//! Type definitions for declarative option configuration

use crate::error::{codes, ErrorType, NavError};

/// Typed value after parsing and validation
/// Setters receive this, never raw strings
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SettingValue {
    /// Enum value (canonicalized identifier)
    Enum(String),
    /// Free-form text
    Text(String),
    /// Comma-separated list, each item parsed with the list's item type
    List(Vec<SettingValue>),
}

/// Setting type definition for parsing and validation
#[derive(Debug, Clone)]
pub enum SettingType {
    /// Enum setting with static variant list
    Enum {
        /// Valid enum variants (static string slices)
        variants: &'static [&'static str],
    },
    /// Any string, taken verbatim
    Text,
    /// Comma-separated list; an empty string is an empty list
    List {
        /// Type of every item
        item: &'static SettingType,
    },
}

/// Structured error for setting operations
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SettingError {
    /// Failed to parse string value
    ParseError(String),
    /// Value failed validation (malformed token, wrong item type)
    ValidationError(String),
    /// Unknown or ambiguous option name
    UnknownOption(String),
}

impl std::fmt::Display for SettingError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SettingError::ParseError(msg) => write!(f, "Parse error: {msg}"),
            SettingError::ValidationError(msg) => write!(f, "Validation error: {msg}"),
            SettingError::UnknownOption(name) => write!(f, "Unknown option: {name}"),
        }
    }
}

impl std::error::Error for SettingError {}

impl From<SettingError> for NavError {
    fn from(err: SettingError) -> Self {
        match err {
            SettingError::ParseError(msg) => NavError {
                kind: ErrorType::Parse,
                code: codes::SETTING_PARSE_ERROR.to_string(),
                message: msg,
            },
            SettingError::ValidationError(msg) => NavError {
                kind: ErrorType::Settings,
                code: codes::SETTING_VALIDATION_ERROR.to_string(),
                message: msg,
            },
            SettingError::UnknownOption(name) => NavError {
                kind: ErrorType::Settings,
                code: codes::UNKNOWN_SETTING.to_string(),
                message: format!("Unknown option: {name}"),
            },
        }
    }
}

/// Setter function signature
///
/// Function pointers (not trait objects) for static dispatch.
/// Receives a parsed `SettingValue`, never raw strings.
pub type SettingSetter<T> = fn(&mut T, SettingValue) -> Result<(), SettingError>;

/// Getter used to echo the current value back (`:set mps?`)
pub type SettingGetter<T> = fn(&T) -> String;

/// Setting descriptor
///
/// Minimal configuration: name, aliases, type, and accessor functions.
#[derive(Debug, Clone)]
pub struct SettingDescriptor<T> {
    /// Canonical setting name (e.g., "matchpairs")
    pub name: &'static str,
    /// Short aliases (e.g., &["mps"])
    pub aliases: &'static [&'static str],
    /// One-line description for listings
    pub description: &'static str,
    /// Setting type for parsing and validation
    pub ty: SettingType,
    /// Setter function pointer
    pub set: SettingSetter<T>,
    /// Getter function pointer
    pub get: SettingGetter<T>,
}
