//! Error types for HawkerHub.
//!
//! This module provides strongly-typed errors using the `thiserror` crate
//! for every failure the estimator, grant finder and insights pipeline can report.

use thiserror::Error;

/// The main error type for HawkerHub.
///
/// All fallible operations in the crate return this error type, so the API layer
/// can turn any failure into a user-visible message.
///
/// # Example
///
/// ```
/// use hawker_hub::error::HubError;
///
/// let error = HubError::DatasetNotFound {
///     path: "data/missing.csv".to_string(),
/// };
/// assert_eq!(error.to_string(), "Dataset not found: data/missing.csv");
/// ```
#[derive(Debug, Error)]
pub enum HubError {
    /// The rental dataset file does not exist or cannot be opened.
    #[error("Dataset not found: {path}")]
    DatasetNotFound {
        /// The path that was not found.
        path: String,
    },

    /// The rental dataset could not be read as CSV.
    #[error("Failed to parse dataset '{path}': {message}")]
    DatasetParseError {
        /// The path to the dataset.
        path: String,
        /// A description of the parse error.
        message: String,
    },

    /// A required column is absent from the dataset header.
    #[error("Dataset '{path}' is missing required column '{column}'")]
    MissingColumn {
        /// The path to the dataset.
        path: String,
        /// The raw column name that was expected.
        column: String,
    },

    /// A dataset row contained a value that does not conform to its column.
    #[error("Invalid value for '{field}' on line {line}: {message}")]
    InvalidRow {
        /// The 1-based line number in the source file (header is line 1).
        line: u64,
        /// The canonical field name.
        field: String,
        /// A description of what made the value invalid.
        message: String,
    },

    /// A user-supplied value is outside its documented bounds.
    #[error("Invalid input '{field}': {message}")]
    InvalidInput {
        /// The input field that was rejected.
        field: String,
        /// A description of the violated bound.
        message: String,
    },

    /// Configuration file was not found at the specified path.
    #[error("Configuration file not found: {path}")]
    ConfigNotFound {
        /// The path that was not found.
        path: String,
    },

    /// Configuration file could not be parsed.
    #[error("Failed to parse configuration file '{path}': {message}")]
    ConfigParseError {
        /// The path to the file that failed to parse.
        path: String,
        /// A description of the parse error.
        message: String,
    },
}

impl HubError {
    /// Returns true when the error stems from the rental dataset rather than user input.
    pub fn is_dataset_error(&self) -> bool {
        matches!(
            self,
            HubError::DatasetNotFound { .. }
                | HubError::DatasetParseError { .. }
                | HubError::MissingColumn { .. }
                | HubError::InvalidRow { .. }
        )
    }
}

/// A type alias for Results that return HubError.
pub type HubResult<T> = Result<T, HubError>;
