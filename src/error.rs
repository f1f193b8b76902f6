//! Error types for value conversion and parameter building.

use aws_sdk_dynamodb::error::BuildError;
use thiserror::Error;

/// Errors raised while converting values or assembling request parameters.
#[derive(Debug, Error)]
pub enum Error {
    /// An array mixes numbers and strings, or holds elements that are neither.
    #[error("expected homogeneous array of numbers or strings")]
    TypeMismatch,
    /// A value of this kind has no attribute value representation.
    #[error("{0} is not serializable")]
    UnsupportedType(&'static str),
    /// The value is null or absent.
    #[error("missing argument")]
    MissingArgument,
    /// Sets cannot be empty.
    #[error("empty array cannot be encoded as a set")]
    EmptySet,
    /// Updates and key conditions need at least one field.
    #[error("record has no fields")]
    EmptyRecord,
    /// The attribute value carries a tag other than `S`, `SS`, `N`, `NS` or `L`.
    #[error("unsupported attribute value tag: {0}")]
    UnsupportedTag(&'static str),
    /// The text of an `N` or `NS` attribute is not a finite number.
    #[error("invalid number: {0:?}")]
    InvalidNumber(String),
    /// Lowering to or lifting from `serde_json::Value` failed.
    #[error(transparent)]
    Json(#[from] serde_json::Error),
    /// A required field of an SDK type was not set.
    #[error(transparent)]
    Build(#[from] BuildError),
}

/// Result alias with [`Error`] as the default error type.
pub type Result<T, E = Error> = std::result::Result<T, E>;
