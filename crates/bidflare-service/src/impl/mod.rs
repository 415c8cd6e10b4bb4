//! Admin query service implementations.
//!
//! The trait lives in `admin_query_service.rs`.

pub mod admin_query_service_impl;

pub use admin_query_service_impl::{
    AdminQueryServiceComponent, AdminQueryServiceComponentParameters, AdminQueryServiceImpl,
};
