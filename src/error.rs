//! Error types for a3s-cron-parser

use thiserror::Error;

/// Errors raised while validating or expanding a cron expression
///
/// Every field error carries the field's display name and the literal text
/// that failed, so the rendered message always starts with
/// `Invalid <field> field`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CronParseError {
    /// Fewer than six whitespace-separated tokens
    #[error("Missing command")]
    MissingCommand,

    /// Range endpoints non-numeric, out of bounds, or reversed
    #[error("Invalid {field} field range: {start}-{end}")]
    InvalidRange {
        field: &'static str,
        start: String,
        end: String,
    },

    /// Literal base of a step clause non-numeric or out of bounds
    #[error("Invalid {field} field base for step: {base}")]
    InvalidStepBase { field: &'static str, base: String },

    /// Step non-numeric or not strictly positive
    #[error("Invalid {field} field step: {step}")]
    InvalidStep { field: &'static str, step: String },

    /// Plain value non-numeric or out of bounds
    #[error("Invalid {field} field value: {value}")]
    InvalidValue { field: &'static str, value: String },
}

impl CronParseError {
    /// Name of the field that failed, if the error is field-specific
    pub fn field(&self) -> Option<&'static str> {
        match self {
            CronParseError::MissingCommand => None,
            CronParseError::InvalidRange { field, .. }
            | CronParseError::InvalidStepBase { field, .. }
            | CronParseError::InvalidStep { field, .. }
            | CronParseError::InvalidValue { field, .. } => Some(field),
        }
    }
}

/// Result type alias for cron parsing operations
pub type Result<T> = std::result::Result<T, CronParseError>;
