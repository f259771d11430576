//! Error types for window generation.

use std::fmt;

use numr::dtype::DType;

/// Result type for window operations.
pub type WindowResult<T> = Result<T, WindowError>;

/// Errors that can occur while resolving or generating a window.
///
/// Every variant is raised from argument validation, before any sample is
/// computed. No partial window is ever returned alongside an error.
#[derive(Debug, Clone)]
pub enum WindowError {
    /// Requested length is negative, non-finite or not an integer.
    InvalidLength { length: String },

    /// A family that needs extra parameters was requested by bare name,
    /// or a required positional parameter was not supplied.
    MissingRequiredParameter {
        window: String,
        parameter: &'static str,
    },

    /// Window name is not registered.
    UnknownWindowType { name: String },

    /// Two parameters were supplied that cannot be combined.
    ConflictingParameters {
        window: &'static str,
        reason: String,
    },

    /// A parameter has a value outside the family's domain.
    InvalidParameter {
        window: String,
        parameter: &'static str,
        value: f64,
        reason: String,
    },

    /// More positional parameters than the family accepts.
    TooManyParameters {
        window: String,
        expected: usize,
        got: usize,
    },

    /// Textual window description could not be parsed.
    InvalidSpec { text: String, reason: String },

    /// Output dtype is not a floating point type.
    UnsupportedDType { dtype: DType },

    /// Error from underlying numr operation.
    NumrError(String),
}

impl fmt::Display for WindowError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidLength { length } => {
                write!(
                    f,
                    "Window length must be a non-negative integer, got {}",
                    length
                )
            }
            Self::MissingRequiredParameter { window, parameter } => {
                write!(
                    f,
                    "The '{}' window needs parameter '{}' -- pass a parameterized spec",
                    window, parameter
                )
            }
            Self::UnknownWindowType { name } => {
                write!(f, "Unknown window type '{}'", name)
            }
            Self::ConflictingParameters { window, reason } => {
                write!(f, "Conflicting parameters for '{}' window: {}", window, reason)
            }
            Self::InvalidParameter {
                window,
                parameter,
                value,
                reason,
            } => {
                write!(
                    f,
                    "Invalid parameter '{}' = {} for '{}' window: {}",
                    parameter, value, window, reason
                )
            }
            Self::TooManyParameters {
                window,
                expected,
                got,
            } => {
                write!(
                    f,
                    "The '{}' window takes at most {} parameters, got {}",
                    window, expected, got
                )
            }
            Self::InvalidSpec { text, reason } => {
                write!(f, "Invalid window description '{}': {}", text, reason)
            }
            Self::UnsupportedDType { dtype } => {
                write!(f, "Unsupported window dtype {:?}: expected F32 or F64", dtype)
            }
            Self::NumrError(msg) => {
                write!(f, "numr error: {}", msg)
            }
        }
    }
}

impl std::error::Error for WindowError {}

impl From<numr::error::Error> for WindowError {
    fn from(err: numr::error::Error) -> Self {
        Self::NumrError(err.to_string())
    }
}
