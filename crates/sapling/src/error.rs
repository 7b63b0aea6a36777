//! Error types for Sapling operations

use thiserror::Error;

use crate::value::Value;

/// Main error type for Sapling operations
#[derive(Error, Debug)]
pub enum SaplingError {
    /// Type mismatch error
    #[error("Type error: expected {expected}, got {got}")]
    TypeError {
        /// Expected type
        expected: String,
        /// Actual type received
        got: String,
    },

    /// Value error
    #[error("Value error: {0}")]
    ValueError(String),

    /// Integer division or remainder by zero
    #[error("Division by zero")]
    DivisionByZero,

    /// Checked integer arithmetic overflowed
    #[error("Integer overflow")]
    IntegerOverflow,

    /// I/O failure other than a missing file
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Invalid or unparseable configuration
    #[error("Config error: {0}")]
    Config(String),
}

impl SaplingError {
    /// Build a type error for a value that was expected to be a number.
    pub fn not_numeric(got: &Value) -> Self {
        SaplingError::TypeError {
            expected: "number".to_string(),
            got: type_name(got).to_string(),
        }
    }
}

/// Result type alias for Sapling operations
pub type Result<T> = std::result::Result<T, SaplingError>;

/// Get a human-readable type name for a value, used in error messages.
pub fn type_name(value: &Value) -> &'static str {
    match value {
        Value::Unit => "()",
        Value::Bool(_) => "bool",
        Value::Int(_) => "int",
        Value::Float(_) => "float",
        Value::String(_) => "String",
        Value::List(_) => "list",
    }
}
