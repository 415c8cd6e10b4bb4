//! # Bidflare Config
//!
//! Layered configuration for the Bidflare admin read-model: TOML files,
//! `BIDFLARE__` environment overrides, validation and runtime refresh.

mod app_config;
mod loader;
mod validation;

pub use app_config::*;
pub use loader::*;
pub use validation::*;
