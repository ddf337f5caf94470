//! Error types and exit codes for graphkit
//!
//! Exit codes:
//! - 0: Success
//! - 1: Generic failure
//! - 2: Usage error (bad flags/args)
//! - 3: Data error (malformed graph input, out-of-range vertex, cyclic input
//!   where a DAG is required)
//!
//! Negative results (no path, no cycle, no topological order) are never
//! errors; they are reported through the normal return value of each query.

mod macros;

use thiserror::Error;

/// Exit codes for the graphkit binary
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitCode {
    /// Success (0)
    Success = 0,
    /// Generic failure (1)
    Failure = 1,
    /// Usage error - bad flags/args (2)
    Usage = 2,
    /// Data error - malformed input or violated precondition (3)
    Data = 3,
}

impl From<ExitCode> for i32 {
    fn from(code: ExitCode) -> i32 {
        code as i32
    }
}

/// Errors that can occur during graph construction and queries
#[derive(Error, Debug)]
pub enum GraphError {
    // Usage errors (exit code 2)
    #[error("unknown format: {0} (expected: human or json)")]
    UnknownFormat(String),

    #[error("{0}")]
    UsageError(String),

    // Data errors (exit code 3)
    #[error("vertex {vertex} is not between 0 and {}", .count.saturating_sub(1))]
    VertexOutOfRange { vertex: usize, count: usize },

    #[error("invalid {context}: {value}")]
    InvalidValue { context: String, value: String },

    #[error("edge weight between {from} and {to} is NaN")]
    NanWeight { from: usize, to: usize },

    #[error("vertex {vertex} is not an endpoint of edge {edge}")]
    NotAnEndpoint { vertex: usize, edge: String },

    #[error("failed to parse {context}: {reason}")]
    Parse { context: String, reason: String },

    #[error("digraph is not acyclic")]
    NotAcyclic,

    // Generic failures (exit code 1)
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("{0}")]
    Other(String),
}

impl GraphError {
    /// Create an error for a vertex outside `[0, count)`
    pub fn vertex_out_of_range(vertex: usize, count: usize) -> Self {
        GraphError::VertexOutOfRange { vertex, count }
    }

    /// Create an error for an invalid value
    pub fn invalid_value(context: &str, value: impl std::fmt::Display) -> Self {
        GraphError::InvalidValue {
            context: context.to_string(),
            value: value.to_string(),
        }
    }

    /// Create an error for a malformed token in serialized input
    pub fn parse(context: &str, reason: impl std::fmt::Display) -> Self {
        GraphError::Parse {
            context: context.to_string(),
            reason: reason.to_string(),
        }
    }

    /// Get the appropriate exit code for this error
    pub fn exit_code(&self) -> ExitCode {
        match self {
            GraphError::UnknownFormat(_) | GraphError::UsageError(_) => ExitCode::Usage,

            GraphError::VertexOutOfRange { .. }
            | GraphError::InvalidValue { .. }
            | GraphError::NanWeight { .. }
            | GraphError::NotAnEndpoint { .. }
            | GraphError::Parse { .. }
            | GraphError::NotAcyclic => ExitCode::Data,

            GraphError::Io(_) | GraphError::Json(_) | GraphError::Toml(_) | GraphError::Other(_) => {
                ExitCode::Failure
            }
        }
    }

    /// Get the error type identifier
    fn error_type(&self) -> &'static str {
        match self {
            GraphError::UnknownFormat(_) => "unknown_format",
            GraphError::UsageError(_) => "usage_error",
            GraphError::VertexOutOfRange { .. } => "vertex_out_of_range",
            GraphError::InvalidValue { .. } => "invalid_value",
            GraphError::NanWeight { .. } => "nan_weight",
            GraphError::NotAnEndpoint { .. } => "not_an_endpoint",
            GraphError::Parse { .. } => "parse_error",
            GraphError::NotAcyclic => "not_acyclic",
            GraphError::Io(_) => "io_error",
            GraphError::Json(_) => "json_error",
            GraphError::Toml(_) => "toml_error",
            GraphError::Other(_) => "other",
        }
    }

    /// Convert error to JSON representation for structured error output.
    pub fn to_json(&self) -> serde_json::Value {
        serde_json::json!({
            "error": {
                "code": self.exit_code() as i32,
                "type": self.error_type(),
                "message": self.to_string(),
            }
        })
    }
}

/// Result type alias for graphkit operations
pub type Result<T> = std::result::Result<T, GraphError>;
