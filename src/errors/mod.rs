//! Error handling utilities for the mood journal.
//!
//! This module provides the central error type `AppError` which represents all
//! possible error conditions that might occur in the application, as well as the
//! convenience type alias `AppResult` for functions that can return these errors.
//!
//! Only configuration, storage and lock errors are fatal to a command. Validation
//! and weather errors are recoverable: callers turn them into user-facing messages
//! and keep going.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

use crate::constants::MSG_SELECT_MOOD;

/// Rejection of an entry submission.
///
/// The store is never touched when one of these is returned.
///
/// # Examples
///
/// ```
/// use mood_journal::errors::ValidationError;
///
/// let error = ValidationError::MissingMood;
/// assert_eq!(format!("{}", error), "Please select a mood");
///
/// let error = ValidationError::UnknownMood("meh".to_string());
/// assert!(format!("{}", error).contains("meh"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// No mood was selected.
    #[error("{}", MSG_SELECT_MOOD)]
    MissingMood,

    /// The submitted identifier is not one of the defined moods.
    #[error("Unknown mood '{0}'. Expected one of: happy, excited, calm, sad, angry")]
    UnknownMood(String),
}

/// Errors raised at the weather provider boundary.
///
/// `LocationUnavailable` means no coordinates could be obtained, so no fetch was
/// attempted. The remaining variants are fetch failures, after which the caller
/// substitutes the fallback record.
///
/// # Examples
///
/// ```
/// use mood_journal::errors::WeatherError;
///
/// let error = WeatherError::LocationUnavailable("no coordinates configured".to_string());
/// assert!(format!("{}", error).contains("Location unavailable"));
///
/// let error = WeatherError::Status { status: 401, body: "invalid key".to_string() };
/// assert!(format!("{}", error).contains("401"));
/// ```
#[derive(Debug, Error)]
pub enum WeatherError {
    /// No location could be determined.
    #[error("Location unavailable: {0}")]
    LocationUnavailable(String),

    /// The weather API could not be reached.
    #[error("Weather API request failed: {0}")]
    Request(#[source] reqwest::Error),

    /// The weather API answered with a non-success status.
    #[error("Weather API returned HTTP {status}: {body}")]
    Status {
        /// HTTP status code
        status: u16,
        /// Response body, if any
        body: String,
    },

    /// The weather API answered with something that could not be normalized.
    #[error("Invalid weather response: {0}")]
    InvalidResponse(String),
}

impl WeatherError {
    /// Whether this error happened during the fetch itself (as opposed to before it).
    pub fn is_fetch_error(&self) -> bool {
        !matches!(self, WeatherError::LocationUnavailable(_))
    }
}

/// Errors raised by the headline provider.
#[derive(Debug, Error)]
pub enum NewsError {
    /// The news API could not be reached.
    #[error("News API request failed: {0}")]
    Request(#[source] reqwest::Error),

    /// The news API answered with a non-success status.
    #[error("News API returned HTTP {status}: {body}")]
    Status {
        /// HTTP status code
        status: u16,
        /// Response body, if any
        body: String,
    },

    /// The news API answered with a body that could not be parsed.
    #[error("Invalid news response: {0}")]
    InvalidResponse(String),

    /// A headline was referenced by a position that is not on the current page.
    #[error("No headline #{index} on this page ({available} shown)")]
    NoSuchHeadline { index: usize, available: usize },
}

/// Errors raised while reading or writing persisted slots.
#[derive(Debug, Error)]
pub enum StorageError {
    /// A value could not be serialized for a slot.
    #[error("Failed to serialize slot '{slot}': {source}")]
    Serialize {
        /// Slot being written
        slot: String,
        /// The underlying serde error
        #[source]
        source: serde_json::Error,
    },

    /// The slot key contains characters that cannot be used as a file name.
    #[error("Invalid slot key '{0}'. Keys may only contain ASCII letters, digits, '-' and '_'")]
    InvalidKey(String),

    /// Writing a slot file failed.
    #[error("Failed to write slot file {path}: {source}")]
    Write {
        /// Destination path
        path: PathBuf,
        /// The underlying I/O error
        #[source]
        source: io::Error,
    },
}

/// Errors that can occur when locking the data directory.
///
/// # Examples
///
/// ```
/// use mood_journal::errors::LockError;
/// use std::path::PathBuf;
///
/// let error = LockError::StoreBusy {
///     path: PathBuf::from("/path/to/data/.lock"),
/// };
///
/// assert!(format!("{}", error).contains("in use by another process"));
/// ```
#[derive(Debug, Error)]
pub enum LockError {
    /// Another process holds the data directory lock.
    #[error("Data directory is in use by another process: {path}. Please wait for the other mood-journal process to finish.")]
    StoreBusy {
        /// The path to the lock file
        path: PathBuf,
    },

    /// Acquiring the lock failed for a technical reason.
    #[error("Failed to acquire lock {path}: {source}. Please check permissions on the data directory.")]
    AcquisitionFailed {
        /// The path to the lock file
        path: PathBuf,
        /// The underlying I/O error
        #[source]
        source: io::Error,
    },
}

/// Represents all possible errors that can occur in the mood journal.
///
/// # Examples
///
/// Creating a configuration error:
/// ```
/// use mood_journal::errors::AppError;
///
/// let error = AppError::Config("Data directory path is empty".to_string());
/// assert_eq!(format!("{}", error), "Configuration error: Data directory path is empty");
/// ```
///
/// Converting from an IO error:
/// ```
/// use mood_journal::errors::AppError;
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
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// A submitted entry was rejected.
    #[error("{0}")]
    Validation(#[from] ValidationError),

    /// Weather lookup failed.
    #[error("Weather error: {0}")]
    Weather(#[from] WeatherError),

    /// Headline lookup failed.
    #[error("News error: {0}")]
    News(#[from] NewsError),

    /// Reading or writing a persisted slot failed.
    #[error("Storage error: {0}")]
    Storage(#[from] StorageError),

    /// The data directory lock could not be taken.
    #[error("Locking error: {0}")]
    Lock(#[from] LockError),
}

/// A type alias for `Result<T, AppError>` to simplify function signatures.
///
/// # Examples
///
/// ```
/// use mood_journal::errors::{AppError, AppResult};
///
/// fn might_fail() -> AppResult<String> {
///     if false {
///         return Err(AppError::Config("Something went wrong".to_string()));
///     }
///     Ok("Operation succeeded".to_string())
/// }
/// ```
pub type AppResult<T> = Result<T, AppError>;
