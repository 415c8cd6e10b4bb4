//! # Bidflare Core
//!
//! Core types, traits, and error definitions for the Bidflare admin read-model.
//! This crate provides the pagination primitives, filter values and domain
//! entities shared by the repository and service layers.

pub mod domain;
pub mod error;
pub mod filter;
pub mod id;
pub mod pagination;
pub mod result;
pub mod telemetry;
pub mod traits;
pub mod validation;

pub use domain::*;
pub use error::*;
pub use filter::*;
pub use id::*;
pub use pagination::*;
pub use result::*;
pub use telemetry::{init_tracing, LogFormat, LoggingConfig};
pub use traits::*;
pub use validation::*;

// Re-export shaku for dependency injection
pub use shaku::{module, Component, HasComponent, Interface};
