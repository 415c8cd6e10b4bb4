//! # Bidflare Service
//!
//! Admin read-model service layer: lists accounts, items and auctions by
//! their discriminant field and projects stored entities into the views
//! handed to the transport layer.

pub mod admin_query_service;
pub mod bootstrap;
pub mod di;
pub mod dto;
pub mod r#impl;
pub mod mappers;

pub use admin_query_service::*;
pub use bootstrap::AdminRuntime;
pub use di::*;
pub use dto::*;
pub use r#impl::{AdminQueryServiceComponent, AdminQueryServiceComponentParameters, AdminQueryServiceImpl};
