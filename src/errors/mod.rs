//! Error handling utilities for the diario application.
//!
//! This module provides the central error type `AppError` which represents all
//! possible error conditions that might occur in the application, as well as the
//! convenience type alias `AppResult` for functions that can return these errors.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Represents specific error cases that can occur when reading record snapshots.
///
/// This enum provides detailed, contextual error information for different failure
/// modes when loading the diary or reflection snapshot files. Each variant captures
/// relevant information such as the snapshot path and underlying errors.
///
/// # Examples
///
/// Creating and formatting an unreadable-snapshot error:
///
/// ```
/// use diario::errors::SnapshotError;
/// use std::io::{self, ErrorKind};
/// use std::path::PathBuf;
///
/// let io_error = io::Error::new(ErrorKind::PermissionDenied, "permission denied");
/// let error = SnapshotError::Unreadable {
///     path: PathBuf::from("/data/diario.json"),
///     source: io_error,
/// };
///
/// assert!(format!("{}", error).contains("Failed to read"));
/// assert!(format!("{}", error).contains("diario.json"));
/// ```
#[derive(Debug, Error)]
pub enum SnapshotError {
    /// Error when the snapshot file exists but cannot be read.
    #[error("Failed to read snapshot file {path}: {source}. Please check file permissions and that the snapshot directory is accessible.")]
    Unreadable {
        /// The path to the snapshot file that could not be read
        path: PathBuf,
        /// The underlying I/O error
        #[source]
        source: io::Error,
    },

    /// Error when the snapshot file contains malformed JSON.
    #[error("Snapshot file {path} is not valid JSON: {source}. The file may be truncated or hand-edited; re-export the snapshot from the app.")]
    Malformed {
        /// The path to the snapshot file that failed to parse
        path: PathBuf,
        /// The underlying JSON error
        #[source]
        source: serde_json::Error,
    },
}

/// Represents all possible errors that can occur in the diario application.
///
/// This enum is the central error type used across the application, with variants
/// for different error categories. It uses `thiserror` for deriving the `Error` trait
/// implementation and formatted error messages.
///
/// # Examples
///
/// Creating a configuration error:
/// ```
/// use diario::errors::AppError;
///
/// let error = AppError::Config("Missing snapshot directory".to_string());
/// assert_eq!(format!("{}", error), "Configuration error: Missing snapshot directory");
/// ```
///
/// Converting from an IO error:
/// ```
/// use diario::errors::AppError;
/// use std::io::{self, ErrorKind};
///
/// let io_error = io::Error::new(ErrorKind::NotFound, "file not found");
/// let app_error: AppError = io_error.into();
///
/// match app_error {
///     AppError::Io(inner) => assert_eq!(inner.kind(), ErrorKind::NotFound),
///     _ => panic!("Expected Io variant"),
/// }
/// ```
#[derive(Debug, Error)]
pub enum AppError {
    /// Errors related to configuration loading or validation.
    #[error("Configuration error: {0}")]
    Config(String),

    /// Input/output errors from filesystem operations.
    ///
    /// This variant automatically converts from `std::io::Error` through the `From` trait.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Errors in CLI argument handling (e.g., invalid date formats).
    #[error("Argument error: {0}")]
    Args(String),

    /// Errors when loading record snapshots.
    ///
    /// This variant uses a dedicated SnapshotError type to provide detailed
    /// information about what went wrong while reading or parsing a snapshot.
    #[error("Snapshot error: {0}")]
    Snapshot(#[from] SnapshotError),

    /// Errors when serializing stats for `--json` output.
    #[error("Serialization error: {0}")]
    Json(#[from] serde_json::Error),
}

/// A type alias for `Result<T, AppError>` to simplify function signatures.
///
/// This type alias is used throughout the application to represent operations
/// that may fail with an `AppError`.
///
/// # Examples
///
/// ```
/// use diario::errors::{AppResult, AppError};
///
/// fn might_fail() -> AppResult<String> {
///     if false {
///         return Err(AppError::Args("Something went wrong".to_string()));
///     }
///     Ok("Operation succeeded".to_string())
/// }
/// ```
pub type AppResult<T> = Result<T, AppError>;
