use std::io;
use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
/// Everything the record store can refuse to do. Messages are written for
/// the footer status line, so they read as full sentences.
pub enum StoreError {
    /// The marks file does not exist yet. Callers recover by continuing with
    /// an empty store; the file appears on the first successful add.
    #[error("Marks file {} is missing; starting with an empty list.", .path.display())]
    Unavailable { path: PathBuf },

    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// A new or changed student number collides with an existing record.
    #[error("Student number {0} already exists.")]
    DuplicateNumber(String),

    /// No record holds the requested student number.
    #[error("Student {0} not found.")]
    NotFound(String),

    /// An operation that needs at least one record ran against none.
    #[error("No student records available.")]
    EmptyCollection,

    #[error("Could not access the marks file: {0}")]
    Io(#[from] io::Error),
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
/// Why a draft was rejected before anything touched the file. Checks run in
/// a fixed order (presence, number format, name format, mark format, mark
/// range) and stop at the first failure.
pub enum ValidationError {
    #[error("{0} is required.")]
    MissingField(&'static str),

    #[error("Student number must contain digits only.")]
    NumberFormat,

    /// Digits would collide with the number column; commas would break the
    /// one-line-per-record file format.
    #[error("Name cannot contain digits or commas.")]
    NameFormat,

    #[error("{0} must be a whole number.")]
    MarkFormat(&'static str),

    #[error("{field} must be between 0 and 100, got {value}.")]
    MarkRange { field: &'static str, value: i64 },
}
