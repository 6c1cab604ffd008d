//! Error types for collage composition and its surrounding I/O

use std::fmt;
use std::path::PathBuf;

/// Main error type for all collage operations
#[derive(Debug)]
pub enum CollageError {
    /// Render parameters are unusable (non-positive or non-finite target size)
    Configuration {
        /// Name of the offending parameter
        parameter: &'static str,
        /// Provided value that failed validation
        value: String,
        /// Explanation of why the value is invalid
        reason: String,
    },

    /// Source image cannot take part in a layout
    InvalidImage {
        /// Source identity of the image
        path: PathBuf,
        /// Description of what's wrong with the image
        reason: String,
    },

    /// Aspect-ratio algebra produced a state that would stretch an image
    ///
    /// Never recoverable: this is a defect in the layout computation.
    InternalInvariant {
        /// Computation that detected the violation
        operation: &'static str,
        /// Description of the violated invariant
        reason: String,
    },

    /// Failed to decode a source image
    ImageLoad {
        /// Path to the image file
        path: PathBuf,
        /// Underlying image decoding error
        source: image::ImageError,
    },

    /// Failed to encode the finished canvas
    ImageExport {
        /// Path where export was attempted
        path: PathBuf,
        /// Underlying image encoding error
        source: image::ImageError,
    },

    /// General file system operation failure
    FileSystem {
        /// Path involved in the operation
        path: PathBuf,
        /// Description of the operation that failed
        operation: &'static str,
        /// Underlying I/O error
        source: std::io::Error,
    },

    /// Layout expression could not be parsed
    Expression {
        /// Byte offset into the expression where parsing failed
        position: usize,
        /// Description of the syntax problem
        reason: String,
    },
}

impl fmt::Display for CollageError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Configuration {
                parameter,
                value,
                reason,
            } => {
                write!(f, "Invalid configuration '{parameter}' = '{value}': {reason}")
            }
            Self::InvalidImage { path, reason } => {
                write!(f, "Invalid image '{}': {reason}", path.display())
            }
            Self::InternalInvariant { operation, reason } => {
                write!(f, "Internal invariant violated in {operation}: {reason}")
            }
            Self::ImageLoad { path, source } => {
                write!(f, "Failed to load image '{}': {source}", path.display())
            }
            Self::ImageExport { path, source } => {
                write!(
                    f,
                    "Failed to export image to '{}': {source}",
                    path.display()
                )
            }
            Self::FileSystem {
                path,
                operation,
                source,
            } => {
                write!(
                    f,
                    "File system error during {operation} on '{}': {source}",
                    path.display()
                )
            }
            Self::Expression { position, reason } => {
                write!(f, "Invalid layout expression at offset {position}: {reason}")
            }
        }
    }
}

impl std::error::Error for CollageError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::ImageLoad { source, .. } | Self::ImageExport { source, .. } => Some(source),
            Self::FileSystem { source, .. } => Some(source),
            _ => None,
        }
    }
}

/// Convenience type alias for collage results
pub type Result<T> = std::result::Result<T, CollageError>;

impl From<image::ImageError> for CollageError {
    fn from(err: image::ImageError) -> Self {
        Self::ImageLoad {
            path: PathBuf::from("<unknown>"),
            source: err,
        }
    }
}

impl From<std::io::Error> for CollageError {
    fn from(err: std::io::Error) -> Self {
        Self::FileSystem {
            path: PathBuf::from("<unknown>"),
            operation: "unknown",
            source: err,
        }
    }
}

/// Create a configuration error
pub fn configuration_error(
    parameter: &'static str,
    value: &impl ToString,
    reason: &impl ToString,
) -> CollageError {
    CollageError::Configuration {
        parameter,
        value: value.to_string(),
        reason: reason.to_string(),
    }
}

/// Create an invalid image error
pub fn invalid_image(path: impl Into<PathBuf>, reason: &impl ToString) -> CollageError {
    CollageError::InvalidImage {
        path: path.into(),
        reason: reason.to_string(),
    }
}

/// Create an internal invariant error
pub fn invariant_violation(operation: &'static str, reason: &impl ToString) -> CollageError {
    CollageError::InternalInvariant {
        operation,
        reason: reason.to_string(),
    }
}
