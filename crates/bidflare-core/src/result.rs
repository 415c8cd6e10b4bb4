//! Result type aliases for the admin read-model.

use crate::BidflareError;

/// A specialized `Result` type for Bidflare operations.
pub type BidflareResult<T> = Result<T, BidflareError>;
