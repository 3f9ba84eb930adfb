use crate::collection::Shape;
use thiserror::Error;

pub mod codes;

pub use codes::{describe_error_code, ErrorCode};

/// The error type shared by every fallible collection-kit operation.
///
/// Callback faults are never wrapped in this type: a callback's own error
/// surfaces unchanged from the `try_*` operations.
#[derive(Error, Debug)]
pub enum KitError {
    #[error("[E{code:04}] Unsupported collection shape: expected a sequence or mapping, found {found}")]
    UnsupportedShape { code: u16, found: &'static str },

    #[error("[E{code:04}] {operation} requires a {expected}, found a {found}")]
    ShapeMismatch {
        code: u16,
        operation: &'static str,
        expected: Shape,
        found: Shape,
    },

    #[error("[E{code:04}] Reduce of an empty collection with no initial value")]
    EmptyReduce { code: u16 },

    #[error("[E{code:04}] Configuration error: {message}")]
    Config {
        code: u16,
        message: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },
}

impl KitError {
    /// Create an unsupported shape error for a value of the named kind
    pub fn unsupported_shape(found: &'static str) -> Self {
        Self::UnsupportedShape {
            code: ErrorCode::SHAPE_UNSUPPORTED,
            found,
        }
    }

    /// Create a shape mismatch error for an operation
    pub fn shape_mismatch(operation: &'static str, expected: Shape, found: Shape) -> Self {
        Self::ShapeMismatch {
            code: ErrorCode::SHAPE_MISMATCH,
            operation,
            expected,
            found,
        }
    }

    pub fn empty_reduce() -> Self {
        Self::EmptyReduce {
            code: ErrorCode::REDUCE_EMPTY,
        }
    }

    /// Create a configuration error with default code
    pub fn config(message: impl Into<String>) -> Self {
        Self::config_with_code(ErrorCode::CONFIG_GENERIC, message)
    }

    /// Create a configuration error with specific code
    pub fn config_with_code(code: u16, message: impl Into<String>) -> Self {
        Self::Config {
            code,
            message: message.into(),
            source: None,
        }
    }

    /// Attach a source error. Only configuration errors carry a source;
    /// other variants are returned unchanged.
    pub fn with_source(
        mut self,
        source: impl Into<Box<dyn std::error::Error + Send + Sync>>,
    ) -> Self {
        if let Self::Config { source: src, .. } = &mut self {
            *src = Some(source.into());
        }
        self
    }

    /// Get the error code
    pub fn code(&self) -> u16 {
        match self {
            Self::UnsupportedShape { code, .. }
            | Self::ShapeMismatch { code, .. }
            | Self::EmptyReduce { code }
            | Self::Config { code, .. } => *code,
        }
    }

    /// Get the registry description for this error's code
    pub fn description(&self) -> &'static str {
        describe_error_code(self.code())
    }
}
