//! Typed error handling for the roster service
//!
//! This module provides the error hierarchy shared by the store adapters and
//! the HTTP boundary. Each category keeps its cause, so the boundary can pick
//! a status code per error kind instead of collapsing everything into one
//! generic response.
//!
//! # Error Categories
//!
//! - [`StudentError`]: errors raised by student record operations
//! - [`StorageError`]: errors raised by the document-store backend
//! - [`ConfigError`]: errors raised while loading configuration

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;
use std::fmt;

/// The main error type for the roster service.
#[derive(Debug)]
pub enum RosterError {
    /// Student record operation errors
    Student(StudentError),

    /// Document-store backend errors
    Storage(StorageError),

    /// Configuration errors
    Config(ConfigError),
}

impl fmt::Display for RosterError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RosterError::Student(e) => write!(f, "{}", e),
            RosterError::Storage(e) => write!(f, "{}", e),
            RosterError::Config(e) => write!(f, "{}", e),
        }
    }
}

impl std::error::Error for RosterError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            RosterError::Student(e) => Some(e),
            RosterError::Storage(e) => Some(e),
            RosterError::Config(e) => Some(e),
        }
    }
}

/// Error response envelope for HTTP responses.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ErrorResponse {
    /// Numeric HTTP status code
    pub status_code: u16,
    /// Human-readable error message
    pub message: String,
    /// HTTP reason phrase for the status
    pub error: String,
}

impl RosterError {
    /// Get the HTTP status code for this error.
    pub fn status_code(&self) -> StatusCode {
        match self {
            RosterError::Student(e) => e.status_code(),
            RosterError::Storage(_) => StatusCode::INTERNAL_SERVER_ERROR,
            RosterError::Config(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Convert to an error response envelope.
    pub fn to_response(&self) -> ErrorResponse {
        let status = self.status_code();
        ErrorResponse {
            status_code: status.as_u16(),
            message: self.to_string(),
            error: status.canonical_reason().unwrap_or("Unknown").to_string(),
        }
    }
}

impl IntoResponse for RosterError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let body = Json(self.to_response());
        (status, body).into_response()
    }
}

// =============================================================================
// Student Errors
// =============================================================================

/// Errors raised by student record operations.
#[derive(Debug)]
pub enum StudentError {
    /// No record carries the requested id
    NotFound { id: String },

    /// The collection holds no records at all
    NoneRegistered,

    /// The create payload could not be read as a student record
    InvalidPayload { message: String },
}

impl fmt::Display for StudentError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StudentError::NotFound { id } => {
                write!(f, "Student #{} not found", id)
            }
            StudentError::NoneRegistered => {
                write!(f, "Students data not found!")
            }
            StudentError::InvalidPayload { message } => {
                write!(f, "Error: student not created! {}", message)
            }
        }
    }
}

impl std::error::Error for StudentError {}

impl StudentError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            StudentError::NotFound { .. } => StatusCode::NOT_FOUND,
            StudentError::NoneRegistered => StatusCode::NOT_FOUND,
            StudentError::InvalidPayload { .. } => StatusCode::BAD_REQUEST,
        }
    }
}

impl From<StudentError> for RosterError {
    fn from(err: StudentError) -> Self {
        RosterError::Student(err)
    }
}

// =============================================================================
// Storage Errors
// =============================================================================

/// Errors raised by the document-store backend.
#[derive(Debug)]
pub enum StorageError {
    /// Connection to the store could not be established
    Connection { message: String },

    /// A store operation failed
    Query { operation: String, message: String },
}

impl fmt::Display for StorageError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StorageError::Connection { message } => {
                write!(f, "Failed to connect to the record store: {}", message)
            }
            StorageError::Query { operation, message } => {
                write!(f, "Record store {} failed: {}", operation, message)
            }
        }
    }
}

impl std::error::Error for StorageError {}

impl From<StorageError> for RosterError {
    fn from(err: StorageError) -> Self {
        RosterError::Storage(err)
    }
}

// =============================================================================
// Config Errors
// =============================================================================

/// Errors raised while loading configuration.
#[derive(Debug)]
pub enum ConfigError {
    /// Failed to parse a configuration document
    Parse {
        file: Option<String>,
        message: String,
    },

    /// IO error while reading configuration
    Io { message: String },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Parse { file, message } => {
                if let Some(file) = file {
                    write!(f, "Failed to parse config file '{}': {}", file, message)
                } else {
                    write!(f, "Failed to parse config: {}", message)
                }
            }
            ConfigError::Io { message } => {
                write!(f, "IO error: {}", message)
            }
        }
    }
}

impl std::error::Error for ConfigError {}

impl From<ConfigError> for RosterError {
    fn from(err: ConfigError) -> Self {
        RosterError::Config(err)
    }
}

impl From<serde_yaml::Error> for ConfigError {
    fn from(err: serde_yaml::Error) -> Self {
        ConfigError::Parse {
            file: None,
            message: err.to_string(),
        }
    }
}

impl From<std::io::Error> for ConfigError {
    fn from(err: std::io::Error) -> Self {
        ConfigError::Io {
            message: err.to_string(),
        }
    }
}

// =============================================================================
// Result type alias
// =============================================================================

/// A specialized Result type for roster operations.
pub type RosterResult<T> = Result<T, RosterError>;

// =============================================================================
// Tests
// =============================================================================
