//! Error types for the replay model.
//!
//! The decoded model itself never fails: every field has a safe default and
//! rendering is total. Errors only arise at the edges where the model meets
//! serialized data, such as JSON export/import and transcript option loading.

use thiserror::Error;

/// The main error type for replay model operations.
///
/// # Example
///
/// ```
/// use heroes_replay::error::{ModelError, Result};
///
/// fn example_operation() -> Result<()> {
///     Err(ModelError::InvalidOptions {
///         reason: "no event kinds selected".to_string(),
///     })
/// }
/// ```
#[derive(Error, Debug)]
pub enum ModelError {
    /// JSON serialization or deserialization failed.
    ///
    /// Wraps `serde_json` errors so they propagate with the `?` operator.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Transcript options are inconsistent.
    #[error("Invalid transcript options: {reason}")]
    InvalidOptions {
        /// A description of what makes the options unusable.
        reason: String,
    },
}

/// A specialized Result type for replay model operations.
pub type Result<T> = std::result::Result<T, ModelError>;
