//! Centralized error handling for rift-nav
//! Defines common error types and error codes
//!
//! Navigation queries never fail: "not found" is a `None` result. Errors
//! only arise while building buffers and applying configuration.

use std::fmt;

/// Category of the error
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorType {
    /// Reading input text failed
    Io,
    /// A raw option value could not be parsed
    Parse,
    /// A parsed option value was rejected
    Settings,
    /// A buffer or cursor invariant was violated by the caller
    Buffer,
    /// Errors that don't fit other categories
    Other,
}

impl fmt::Display for ErrorType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io => write!(f, "IO"),
            Self::Parse => write!(f, "Parse"),
            Self::Settings => write!(f, "Settings"),
            Self::Buffer => write!(f, "Buffer"),
            Self::Other => write!(f, "Other"),
        }
    }
}

/// Machine-readable error codes
pub mod codes {
    pub const INVALID_CURSOR: &str = "INVALID_CURSOR";
    pub const INVALID_SELECTION: &str = "INVALID_SELECTION";
    pub const SETTING_PARSE_ERROR: &str = "SETTING_PARSE_ERROR";
    pub const SETTING_VALIDATION_ERROR: &str = "SETTING_VALIDATION_ERROR";
    pub const UNKNOWN_SETTING: &str = "UNKNOWN_SETTING";
    pub const IO_ERROR: &str = "IO_ERROR";
    pub const GENERIC_ERROR: &str = "GENERIC_ERROR";
}

/// A structured error in rift-nav
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavError {
    /// What kind of error occurred
    pub kind: ErrorType,
    /// Machine-readable error code (e.g., "INVALID_CURSOR")
    pub code: String,
    /// Human-readable description
    pub message: String,
}

impl NavError {
    /// Create a new error
    pub fn new(kind: ErrorType, code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            kind,
            code: code.into(),
            message: message.into(),
        }
    }

    /// Check if the message contains a substring (useful for tests)
    pub fn contains_msg(&self, sub: &str) -> bool {
        self.message.contains(sub)
    }
}

impl fmt::Display for NavError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}({}): {}", self.kind, self.code, self.message)
    }
}

impl std::error::Error for NavError {}

impl From<String> for NavError {
    fn from(msg: String) -> Self {
        Self::new(ErrorType::Other, codes::GENERIC_ERROR, msg)
    }
}

impl From<&str> for NavError {
    fn from(msg: &str) -> Self {
        Self::new(ErrorType::Other, codes::GENERIC_ERROR, msg)
    }
}

impl From<std::io::Error> for NavError {
    fn from(err: std::io::Error) -> Self {
        Self::new(ErrorType::Io, codes::IO_ERROR, err.to_string())
    }
}

/// Result alias for rift-nav operations
pub type Result<T> = std::result::Result<T, NavError>;
