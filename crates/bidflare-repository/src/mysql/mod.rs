//! MySQL gateway implementations.

mod account_gateway;
mod auction_gateway;
mod item_gateway;
mod ordering;

pub use account_gateway::MySqlAccountGateway;
pub use auction_gateway::MySqlAuctionGateway;
pub use item_gateway::MySqlItemGateway;
