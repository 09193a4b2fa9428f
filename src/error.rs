//! Error taxonomy for `minibag`.
//!
//! A single [`ModelError`] enum captures every recoverable-at-the-boundary
//! failure the learners can raise, and [`Result`] is the crate-wide alias
//! used by the fallible APIs. Errors propagate with `?` and abort the whole
//! build; a failed bootstrap tree fails the whole ensemble.

use thiserror::Error;

/// The error type returned by the fallible `minibag` APIs.
#[derive(Debug, Error)]
pub enum ModelError {
    /// A raw attribute type string is neither numeric nor categorical.
    #[error("unsupported feature type for `{name}`: `{declared}`")]
    UnsupportedFeatureType {
        /// The name of the offending feature column.
        name: String,
        /// The declared type string that could not be parsed.
        declared: String,
    },

    /// A predicate references a column outside the schema.
    #[error("invalid column index {column} (n_feature = {n_feature})")]
    InvalidColumnIndex {
        /// The out-of-range column index.
        column: usize,
        /// The number of feature columns in the schema.
        n_feature: usize,
    },

    /// A row's width disagrees with the metadata.
    #[error("row {row} has width {got}, expected {expected}")]
    RowLengthMismatch {
        /// The index of the offending row.
        row: usize,
        /// The expected row width.
        expected: usize,
        /// The actual row width.
        got: usize,
    },

    /// The requested ensemble size is zero.
    #[error("ensemble size must be positive")]
    InvalidEnsembleSize,

    /// An I/O failure while reading a data file.
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

/// The crate-wide result alias over [`ModelError`].
pub type Result<T> = std::result::Result<T, ModelError>;
