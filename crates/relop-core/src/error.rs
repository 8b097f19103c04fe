//! Error types for relop operations.
//!
//! Value-level mismatches are never errors; they resolve to `false` inside the
//! comparator. The variants here cover the remaining failure paths.

use thiserror::Error;

use crate::operator::Operator;

/// Errors that can occur while resolving operators or filtering records.
#[derive(Error, Debug)]
pub enum RelopError {
    /// The operator token is not one of the supported relational operators.
    #[error(
        "Invalid operator! The parsed operator should be in [{valid}], received ['{received}']",
        valid = Operator::quoted_list()
    )]
    InvalidOperator { received: String },

    /// The input string was not valid JSON.
    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),

    /// Filtering expects a top-level JSON array of records.
    #[error("Expected a JSON array of records, found {found}")]
    NotAnArray { found: &'static str },
}

/// Convenience alias used throughout relop-core.
pub type Result<T> = std::result::Result<T, RelopError>;
