//! Error handling utilities for the daybook application.
//!
//! This module provides the central error type `AppError` which represents all
//! possible error conditions that might occur in the application, as well as the
//! convenience type alias `AppResult` for functions that can return these errors.

use thiserror::Error;

/// Represents specific error cases that can occur during database operations.
///
/// This enum provides detailed, contextual error information for different failure
/// modes when interacting with the local SQLite store.
///
/// # Examples
///
/// ```
/// use daybook::errors::DatabaseError;
///
/// let error = DatabaseError::NotFound("Event e1 not found".to_string());
/// assert!(format!("{}", error).contains("not found"));
/// ```
#[derive(Debug, Error)]
pub enum DatabaseError {
    /// SQLite database error (open, prepare, bind or step failure).
    #[error("Database error: {0}")]
    Sqlite(#[from] rusqlite::Error),

    /// Connection pool error.
    #[error("Failed to get connection from pool: {0}\n\nThis may indicate database connection issues. Try closing other daybook instances.")]
    Pool(#[from] r2d2::Error),

    /// Requested row not found in database.
    #[error("Entry not found: {0}")]
    NotFound(String),

    /// Custom database error with detailed message.
    #[error("Database error: {0}")]
    Custom(String),
}

/// Represents specific error cases that can occur in the weather boundary.
///
/// The weather lookup is an external collaborator; these errors never indicate
/// a problem with locally stored data.
#[derive(Debug, Error)]
pub enum WeatherError {
    /// Request failed at the transport level.
    #[error("Weather request failed: {0}")]
    Request(#[source] reqwest::Error),

    /// Response arrived but could not be decoded.
    #[error("Invalid weather response: {0}")]
    InvalidResponse(String),

    /// The request did not complete within the configured timeout.
    #[error("Weather request timed out after {0} seconds")]
    Timeout(u64),
}

#[derive(Debug, Error)]
pub enum AppError {
    /// Errors related to configuration or settings loading and validation.
    #[error("Configuration error: {0}")]
    Config(String),

    /// Input/output errors from filesystem operations.
    ///
    /// This variant automatically converts from `std::io::Error` through the `From` trait.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Errors in diary/event logic (e.g., invalid date formats).
    #[error("Journal logic error: {0}")]
    Journal(String),

    /// Errors related to database operations.
    ///
    /// This variant uses a dedicated DatabaseError type to provide detailed
    /// information about what went wrong with the local store.
    #[error("Database error: {0}")]
    Database(#[from] DatabaseError),

    /// Errors from the weather boundary.
    #[error("Weather error: {0}")]
    Weather(#[from] WeatherError),
}

/// A type alias for `Result<T, AppError>` to simplify function signatures.
///
/// # Examples
///
/// ```
/// use daybook::errors::{AppResult, AppError};
///
/// fn might_fail() -> AppResult<String> {
///     if false {
///         return Err(AppError::Journal("Something went wrong".to_string()));
///     }
///     Ok("Operation succeeded".to_string())
/// }
/// ```
pub type AppResult<T> = Result<T, AppError>;
