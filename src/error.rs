//! Errors raised while reading a sample, growing a tree,
//! or classifying an instance.

use std::io;


/// Errors that can occur in this crate.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Failed to read the input file.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// Failed to convert a `polars::DataFrame`.
    #[error("Polars error: {0}")]
    Polars(#[from] polars::prelude::PolarsError),

    /// The target attribute is not in the header.
    #[error("target attribute `{0}` does not exist in the header")]
    UnknownTarget(String),

    /// The header names the same attribute twice.
    #[error("attribute `{0}` appears more than once in the header")]
    DuplicateAttribute(String),

    /// A row does not have one field per attribute.
    #[error("row at line {line} has {found} fields, expected {expected}")]
    MalformedRow {
        /// 1-based line (or row) number.
        line: usize,
        /// Number of attributes in the header.
        expected: usize,
        /// Number of fields found in the row.
        found: usize,
    },

    /// An instance to classify does not have one field per attribute.
    #[error("instance has {found} fields, expected {expected}")]
    MalformedInstance {
        /// Number of attributes the tree was trained on.
        expected: usize,
        /// Number of fields of the instance.
        found: usize,
    },

    /// A cell of a data frame is null.
    #[error("missing value at row {row} of attribute `{attribute}`")]
    MissingValue {
        /// 0-based row index.
        row: usize,
        /// Attribute name.
        attribute: String,
    },

    /// The sample has no instance to learn from.
    #[error("the sample has no instances")]
    EmptySample,

    /// A decision node met a value that was not observed in training.
    #[error("value `{value}` of attribute `{attribute}` not found in subtree")]
    UnseenValue {
        /// Name of the attribute tested by the decision node.
        attribute: String,
        /// The value of the instance at that attribute.
        value: String,
    },
}


/// A specialized `Result` type for this crate.
pub type Result<T> = std::result::Result<T, Error>;
