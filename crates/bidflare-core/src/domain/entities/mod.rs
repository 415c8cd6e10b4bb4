//! Domain entities.

mod account;
mod auction;
mod item;

pub use account::*;
pub use auction::*;
pub use item::*;
