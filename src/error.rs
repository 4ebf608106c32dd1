//! # Error Handling
//!
//! Provides the unified `AppError` enum used across the crate.

use derive_more::{Display, From};

/// The Global Error Enum.
///
/// Every failure aborts the metadata computation for the current operation.
/// Nothing is retried and no partial response descriptor is produced.
#[derive(Debug, Display, From)]
pub enum AppError {
    /// Wrapper for standard IO errors (config loading).
    #[display("IO Error: {_0}")]
    Io(std::io::Error),

    /// A type string could not be parsed as Rust type syntax.
    #[from(ignore)]
    #[display("Type Parse Error: {_0}")]
    TypeParse(String),

    /// The naming collaborator could not produce a name for a type.
    #[from(ignore)]
    #[display("Type Resolution Error: {_0}")]
    TypeResolution(String),

    /// `element_type` was asked for the element of a non-container type.
    /// This is an internal consistency fault.
    #[from(ignore)]
    #[display("Classification Error: {_0}")]
    Classification(String),

    /// The global response table could not be parsed.
    #[from(ignore)]
    #[display("Config Error: {_0}")]
    Config(String),
}

/// Manual implementation of the standard Error trait.
impl std::error::Error for AppError {}

impl From<serde_yaml::Error> for AppError {
    fn from(e: serde_yaml::Error) -> Self {
        AppError::Config(e.to_string())
    }
}

impl From<serde_json::Error> for AppError {
    fn from(e: serde_json::Error) -> Self {
        AppError::Config(e.to_string())
    }
}

/// Helper type alias for Result using AppError.
pub type AppResult<T> = Result<T, AppError>;
