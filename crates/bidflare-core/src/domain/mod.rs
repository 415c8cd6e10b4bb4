//! # Bidflare Domain
//!
//! Persistence-side entities and the closed enumerations used to filter them.
//! Entities here are read by the gateways and projected by the service layer;
//! nothing in this crate mutates or persists them.

pub mod entities;
pub mod value_objects;

pub use entities::*;
pub use value_objects::*;
