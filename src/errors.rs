//! Errors raised while encoding signatures and generating sources.

use std::path::PathBuf;

use crate::types::LambdaType;

/// An error indicating that a signature cannot be encoded.
/// These errors point at a bug in the type catalog or in the generation plan.
#[derive(Debug, PartialEq, Eq, Clone, thiserror::Error)]
pub enum SignatureError {
    /// The number of parameters is not between 1 and 4.
    #[error("The number of parameters is incorrect: {0}")]
    InvalidArity(usize),
    /// A run of identical parameters is not between 1 and 4 long.
    #[error("Invalid run of {0} identical parameters")]
    InvalidRunLength(usize),
    /// A parameter position has no name or generic letter.
    #[error("Parameter index {index} is out of range, only {len} are defined")]
    ParamIndexOutOfRange {
        /// The requested position.
        index: usize,
        /// The number of defined positions.
        len: usize,
    },
    /// The type cannot be used as a parameter.
    #[error("{0} has no parameter form")]
    NoParameterForm(LambdaType),
    /// An operator was requested without an element type.
    #[error("An operator requires a return type")]
    MissingReturnType,
    /// A class name or name fragment does not follow the naming scheme.
    #[error("Cannot decode name fragment: {0}")]
    UndecodableFragment(String),
}

/// An error that aborts a generation run.
#[derive(Debug, thiserror::Error)]
pub enum GenerationError {
    /// Failed to create a directory or write a file.
    #[error("Failed to write {}: {source}", .path.display())]
    Io {
        /// The path being written.
        path: PathBuf,
        /// The underlying error.
        source: std::io::Error,
    },
    /// A signature in the plan is malformed.
    #[error("Malformed signature: {0}")]
    Signature(#[from] SignatureError),
    /// Two different signatures produced the same class.
    #[error("Class {package}.{class_name} would be generated twice")]
    NameCollision {
        /// The sub-package of the class.
        package: &'static str,
        /// The colliding class name.
        class_name: String,
    },
}

/// Extension for attaching a path to I/O results.
pub(crate) trait IoResultExt<T> {
    fn at_path(self, path: impl Into<PathBuf>) -> Result<T, GenerationError>;
}

impl<T> IoResultExt<T> for std::io::Result<T> {
    fn at_path(self, path: impl Into<PathBuf>) -> Result<T, GenerationError> {
        self.map_err(|source| GenerationError::Io {
            path: path.into(),
            source,
        })
    }
}
