//! Unified error types for all layers of the admin read-model.

use crate::ResourceKind;
use serde::{Deserialize, Serialize};
use std::fmt::Debug;
use thiserror::Error;

/// Unified error type for the admin read-model.
///
/// The three query-facing kinds (`InvalidPageRequest`, `InvalidFilterValue`,
/// `StoreUnavailable`) are surfaced to callers unchanged. The remaining
/// variants cover configuration and internal faults.
#[derive(Error, Debug)]
pub enum BidflareError {
    // ============ Caller Errors ============
    /// Page size of zero, negative page index, or unknown sort field.
    #[error("Invalid page request: {0}")]
    InvalidPageRequest(String),

    /// Filter value outside the permitted set for the resource kind.
    #[error("Invalid filter value for {kind}: {value}")]
    InvalidFilterValue { kind: ResourceKind, value: String },

    // ============ Infrastructure Errors ============
    /// Persistence store unreachable or erroring.
    #[error("Store unavailable: {0}")]
    StoreUnavailable(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Configuration(String),

    // ============ Internal Errors ============
    /// Internal error
    #[error("Internal error: {0}")]
    Internal(String),

    /// Generic error wrapper
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl BidflareError {
    /// Returns the HTTP status code a transport would typically use for this error.
    #[must_use]
    pub const fn status_code(&self) -> u16 {
        match self {
            Self::InvalidPageRequest(_) | Self::InvalidFilterValue { .. } => 400,
            Self::StoreUnavailable(_) => 503,
            Self::Configuration(_) | Self::Internal(_) | Self::Other(_) => 500,
        }
    }

    /// Returns a machine-readable error code.
    #[must_use]
    pub const fn error_code(&self) -> &'static str {
        match self {
            Self::InvalidPageRequest(_) => "INVALID_PAGE_REQUEST",
            Self::InvalidFilterValue { .. } => "INVALID_FILTER_VALUE",
            Self::StoreUnavailable(_) => "STORE_UNAVAILABLE",
            Self::Configuration(_) => "CONFIGURATION_ERROR",
            Self::Internal(_) | Self::Other(_) => "INTERNAL_ERROR",
        }
    }

    /// Creates an invalid page request error.
    #[must_use]
    pub fn invalid_page<T: Into<String>>(message: T) -> Self {
        Self::InvalidPageRequest(message.into())
    }

    /// Creates an invalid filter value error.
    #[must_use]
    pub fn invalid_filter<T: ToString>(kind: ResourceKind, value: T) -> Self {
        Self::InvalidFilterValue {
            kind,
            value: value.to_string(),
        }
    }

    /// Creates a store unavailable error.
    #[must_use]
    pub fn store_unavailable<T: Into<String>>(message: T) -> Self {
        Self::StoreUnavailable(message.into())
    }

    /// Creates an internal error.
    #[must_use]
    pub fn internal<T: Into<String>>(message: T) -> Self {
        Self::Internal(message.into())
    }

    /// Checks if the caller may retry the same request unchanged.
    #[must_use]
    pub const fn is_retriable(&self) -> bool {
        matches!(self, Self::StoreUnavailable(_))
    }

    /// Checks if the caller can fix the request and resubmit.
    #[must_use]
    pub const fn is_caller_error(&self) -> bool {
        matches!(
            self,
            Self::InvalidPageRequest(_) | Self::InvalidFilterValue { .. }
        )
    }
}

#[cfg(feature = "sqlx")]
impl From<sqlx::Error> for BidflareError {
    fn from(err: sqlx::Error) -> Self {
        match &err {
            sqlx::Error::Io(_)
            | sqlx::Error::Tls(_)
            | sqlx::Error::Protocol(_)
            | sqlx::Error::PoolTimedOut
            | sqlx::Error::PoolClosed
            | sqlx::Error::WorkerCrashed
            | sqlx::Error::Database(_) => Self::StoreUnavailable(err.to_string()),
            sqlx::Error::ColumnDecode { .. } | sqlx::Error::Decode(_) | sqlx::Error::ColumnNotFound(_) => {
                Self::Internal(format!("Malformed row: {}", err))
            }
            _ => Self::StoreUnavailable(err.to_string()),
        }
    }
}

impl From<serde_json::Error> for BidflareError {
    fn from(err: serde_json::Error) -> Self {
        Self::Internal(format!("JSON serialization error: {}", err))
    }
}

/// Serializable error response a transport can hand back to its client.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct ErrorResponse {
    /// Machine-readable error code
    pub code: String,
    /// Human-readable error message
    pub message: String,
    /// Optional field-level errors for validation
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<Vec<FieldError>>,
    /// Request trace ID for debugging
    #[serde(skip_serializing_if = "Option::is_none")]
    pub trace_id: Option<String>,
}

/// Field-level validation error.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct FieldError {
    /// Field name
    pub field: String,
    /// Error message
    pub message: String,
    /// Error code
    pub code: String,
}

impl ErrorResponse {
    /// Creates a new error response from a `BidflareError`.
    #[must_use]
    pub fn from_error(error: &BidflareError) -> Self {
        Self {
            code: error.error_code().to_string(),
            message: error.to_string(),
            details: None,
            trace_id: None,
        }
    }

    /// Sets the trace ID.
    #[must_use]
    pub fn with_trace_id(mut self, trace_id: impl Into<String>) -> Self {
        self.trace_id = Some(trace_id.into());
        self
    }

    /// Sets field-level validation errors.
    #[must_use]
    pub fn with_details(mut self, details: Vec<FieldError>) -> Self {
        self.details = Some(details);
        self
    }
}

impl From<&BidflareError> for ErrorResponse {
    fn from(error: &BidflareError) -> Self {
        Self::from_error(error)
    }
}
