//! Projected views returned by the admin query service.

mod account_view;
mod auction_view;
mod item_view;
mod listing;

pub use account_view::*;
pub use auction_view::*;
pub use item_view::*;
pub use listing::*;
