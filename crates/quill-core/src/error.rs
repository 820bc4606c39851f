//! Error types and exit codes for quill
//!
//! Exit codes:
//! - 0: Success
//! - 1: Generic failure
//! - 2: Usage error (bad flags/args, malformed search query, invalid form input)
//! - 3: Data/store error (missing site, unknown post, duplicate slug)

mod macros;

use std::path::PathBuf;
use thiserror::Error;

/// Exit codes for the quill CLI
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitCode {
    /// Success (0)
    Success = 0,
    /// Generic failure (1)
    Failure = 1,
    /// Usage error - bad flags/args (2)
    Usage = 2,
    /// Data/store error - missing site, unknown record (3)
    Data = 3,
}

impl From<ExitCode> for i32 {
    fn from(code: ExitCode) -> i32 {
        code as i32
    }
}

/// Errors that can occur during quill operations
#[derive(Error, Debug)]
pub enum QuillError {
    // Usage errors (exit code 2)
    #[error("unknown format: {0} (expected: human or json)")]
    UnknownFormat(String),

    #[error("{0}")]
    UsageError(String),

    #[error("invalid search query '{query}': {reason}")]
    QueryParseError { query: String, reason: String },

    #[error("invalid {context}: {value}")]
    InvalidValue { context: String, value: String },

    #[error("invalid {field}: {reason}")]
    InvalidForm { field: String, reason: String },

    // Data/store errors (exit code 3)
    #[error("site not found (searched from {search_root:?})")]
    StoreNotFound { search_root: PathBuf },

    #[error("{context} not found: {value}")]
    NotFound { context: String, value: String },

    #[error("{context} already exists: {value}")]
    AlreadyExists { context: String, value: String },

    // Generic failures (exit code 1)
    #[error("database error: {0}")]
    Database(#[from] rusqlite::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("failed to {operation}: {reason}")]
    FailedOperation { operation: String, reason: String },

    #[error("{0}")]
    Other(String),
}

impl QuillError {
    /// Create an error for a failed database operation
    pub fn db_operation(operation: &str, error: impl std::fmt::Display) -> Self {
        QuillError::FailedOperation {
            operation: operation.to_string(),
            reason: error.to_string(),
        }
    }

    /// Create an error for a search query the full-text engine rejected
    pub fn query_parse(query: &str, reason: impl std::fmt::Display) -> Self {
        QuillError::QueryParseError {
            query: query.to_string(),
            reason: reason.to_string(),
        }
    }

    /// Create an error for an invalid value or configuration
    pub fn invalid_value(context: &str, value: impl std::fmt::Display) -> Self {
        QuillError::InvalidValue {
            context: context.to_string(),
            value: value.to_string(),
        }
    }

    /// Create an error for a form field that failed validation
    pub fn invalid_form(field: &str, reason: impl std::fmt::Display) -> Self {
        QuillError::InvalidForm {
            field: field.to_string(),
            reason: reason.to_string(),
        }
    }

    /// Create an error for an entity that already exists
    pub fn already_exists(context: &str, value: impl std::fmt::Display) -> Self {
        QuillError::AlreadyExists {
            context: context.to_string(),
            value: value.to_string(),
        }
    }

    /// Create an error for an entity that was not found
    pub fn not_found(context: &str, value: impl std::fmt::Display) -> Self {
        QuillError::NotFound {
            context: context.to_string(),
            value: value.to_string(),
        }
    }

    /// Get the appropriate exit code for this error
    pub fn exit_code(&self) -> ExitCode {
        match self {
            QuillError::UnknownFormat(_)
            | QuillError::UsageError(_)
            | QuillError::QueryParseError { .. }
            | QuillError::InvalidValue { .. }
            | QuillError::InvalidForm { .. } => ExitCode::Usage,

            QuillError::StoreNotFound { .. }
            | QuillError::NotFound { .. }
            | QuillError::AlreadyExists { .. } => ExitCode::Data,

            QuillError::Database(_)
            | QuillError::Io(_)
            | QuillError::Json(_)
            | QuillError::Toml(_)
            | QuillError::FailedOperation { .. }
            | QuillError::Other(_) => ExitCode::Failure,
        }
    }

    /// Get the error type identifier
    fn error_type(&self) -> &'static str {
        match self {
            QuillError::UnknownFormat(_) => "unknown_format",
            QuillError::UsageError(_) => "usage_error",
            QuillError::QueryParseError { .. } => "query_parse_error",
            QuillError::InvalidValue { .. } => "invalid_value",
            QuillError::InvalidForm { .. } => "invalid_form",
            QuillError::StoreNotFound { .. } => "store_not_found",
            QuillError::NotFound { .. } => "not_found",
            QuillError::AlreadyExists { .. } => "already_exists",
            QuillError::Database(_) => "database_error",
            QuillError::Io(_) => "io_error",
            QuillError::Json(_) => "json_error",
            QuillError::Toml(_) => "toml_error",
            QuillError::FailedOperation { .. } => "failed_operation",
            QuillError::Other(_) => "other",
        }
    }

    /// Convert error to JSON representation for structured error output.
    pub fn to_json(&self) -> serde_json::Value {
        let mut error_obj = serde_json::json!({
            "code": self.exit_code() as i32,
            "type": self.error_type(),
            "message": self.to_string(),
        });

        match self {
            QuillError::QueryParseError { query, .. } => {
                error_obj["query"] = serde_json::json!(query);
            }
            QuillError::InvalidForm { field, .. } => {
                error_obj["field"] = serde_json::json!(field);
            }
            _ => {}
        }

        serde_json::json!({ "error": error_obj })
    }
}

/// Result type alias for quill operations
pub type Result<T> = std::result::Result<T, QuillError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_query_parse_error_is_usage() {
        let err = QuillError::query_parse("\"open", "unterminated string");
        assert_eq!(err.exit_code(), ExitCode::Usage);
        assert!(err.to_string().contains("\"open"));
    }

    #[test]
    fn test_not_found_is_data_error() {
        let err = QuillError::not_found("post", 42);
        assert_eq!(err.exit_code(), ExitCode::Data);
        assert_eq!(err.to_string(), "post not found: 42");
    }

    #[test]
    fn test_database_error_is_failure() {
        let err: QuillError = rusqlite::Error::QueryReturnedNoRows.into();
        assert_eq!(err.exit_code(), ExitCode::Failure);
    }

    #[test]
    fn test_to_json_shape() {
        let err = QuillError::invalid_form("email", "enter a valid email address");
        let json = err.to_json();
        assert_eq!(json["error"]["code"], 2);
        assert_eq!(json["error"]["type"], "invalid_form");
        assert_eq!(json["error"]["field"], "email");
    }

    #[test]
    fn test_bail_invalid_macro() {
        fn check(limit: usize) -> Result<usize> {
            if limit == 0 {
                crate::bail_invalid!("limit", limit);
            }
            Ok(limit)
        }

        assert!(matches!(check(0), Err(QuillError::InvalidValue { .. })));
        assert_eq!(check(3).unwrap(), 3);
    }
}
