//! Value objects.

mod item_status;
mod role;

pub use item_status::*;
pub use role::*;
