//! Error types and exit codes for tangle
//!
//! Exit codes:
//! - 0: Success
//! - 1: Generic failure
//! - 2: Usage error (bad flags/args)
//! - 3: Data/store error (missing store, missing graph, invalid document)
//!
//! Lookup misses inside the graph model itself (unknown node or edge ids,
//! unreachable goals) are normal control flow and surface as `Option`/`bool`
//! results, never as values of this enum.

use std::path::PathBuf;
use thiserror::Error;

/// Exit codes reported by the CLI
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitCode {
    /// Success (0)
    Success = 0,
    /// Generic failure (1)
    Failure = 1,
    /// Usage error - bad flags/args (2)
    Usage = 2,
    /// Data/store error - missing store, missing graph (3)
    Data = 3,
}

impl From<ExitCode> for i32 {
    fn from(code: ExitCode) -> i32 {
        code as i32
    }
}

/// Errors that can occur during tangle operations
#[derive(Error, Debug)]
pub enum TangleError {
    // Usage errors (exit code 2)
    #[error("unknown format: {0} (expected: human or json)")]
    UnknownFormat(String),

    #[error("{0}")]
    UsageError(String),

    #[error("invalid {context}: {value}")]
    InvalidValue { context: String, value: String },

    // Data/store errors (exit code 3)
    #[error("store not found at {search_root:?} (run `tangle init` first)")]
    StoreNotFound { search_root: PathBuf },

    #[error("graph not found: {name}")]
    GraphNotFound { name: String },

    #[error("graph already exists: {name}")]
    GraphExists { name: String },

    #[error("node not found: {id}")]
    NodeNotFound { id: u32 },

    #[error("{context} not found: {value}")]
    NotFound { context: String, value: String },

    #[error("invalid graph document: {reason}")]
    InvalidGraph { reason: String },

    #[error("invalid operation: {reason}")]
    InvalidOperation { reason: String },

    // Generic failures (exit code 1)
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("{0}")]
    Other(String),
}

impl TangleError {
    /// Get the appropriate exit code for this error
    pub fn exit_code(&self) -> ExitCode {
        match self {
            TangleError::UnknownFormat(_)
            | TangleError::UsageError(_)
            | TangleError::InvalidValue { .. } => ExitCode::Usage,

            TangleError::StoreNotFound { .. }
            | TangleError::GraphNotFound { .. }
            | TangleError::GraphExists { .. }
            | TangleError::NodeNotFound { .. }
            | TangleError::NotFound { .. }
            | TangleError::InvalidGraph { .. }
            | TangleError::InvalidOperation { .. } => ExitCode::Data,

            TangleError::Io(_)
            | TangleError::Json(_)
            | TangleError::Toml(_)
            | TangleError::Csv(_)
            | TangleError::Other(_) => ExitCode::Failure,
        }
    }

    /// Get the error type identifier
    fn error_type(&self) -> &'static str {
        match self {
            TangleError::UnknownFormat(_) => "unknown_format",
            TangleError::UsageError(_) => "usage_error",
            TangleError::InvalidValue { .. } => "invalid_value",
            TangleError::StoreNotFound { .. } => "store_not_found",
            TangleError::GraphNotFound { .. } => "graph_not_found",
            TangleError::GraphExists { .. } => "graph_exists",
            TangleError::NodeNotFound { .. } => "node_not_found",
            TangleError::NotFound { .. } => "not_found",
            TangleError::InvalidGraph { .. } => "invalid_graph",
            TangleError::InvalidOperation { .. } => "invalid_operation",
            TangleError::Io(_) => "io_error",
            TangleError::Json(_) => "json_error",
            TangleError::Toml(_) => "toml_error",
            TangleError::Csv(_) => "csv_error",
            TangleError::Other(_) => "other",
        }
    }

    /// Convert error to JSON representation for structured error output
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

/// Result type alias for tangle operations
pub type Result<T> = std::result::Result<T, TangleError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exit_codes() {
        assert_eq!(
            TangleError::UsageError("bad".into()).exit_code(),
            ExitCode::Usage
        );
        assert_eq!(
            TangleError::GraphNotFound { name: "g".into() }.exit_code(),
            ExitCode::Data
        );
        assert_eq!(
            TangleError::Other("boom".into()).exit_code(),
            ExitCode::Failure
        );
    }

    #[test]
    fn test_json_envelope() {
        let err = TangleError::GraphNotFound { name: "g1".into() };
        let value = err.to_json();
        assert_eq!(value["error"]["code"], 3);
        assert_eq!(value["error"]["type"], "graph_not_found");
        assert_eq!(value["error"]["message"], "graph not found: g1");
    }
}
