//! # Bidflare Repository
//!
//! Read-only query gateways for the admin read-model:
//!
//! ```text
//! AdminQueryService
//!   ↓  Arc<dyn AccountGateway | ItemGateway | AuctionGateway>
//! MySqlAccountGateway / InMemoryAccountGateway / …
//!   ↓
//! MySQL (sqlx) or Vec<E>
//! ```
//!
//! Every gateway implements [`QueryGateway::find_by_field`]: single-field
//! equality filtering, stable ordering, offset/limit paging and a total
//! count over all matching rows.

pub mod memory;
pub mod mysql;
pub mod pool;
pub mod traits;

pub use memory::{InMemoryAccountGateway, InMemoryAuctionGateway, InMemoryGateway, InMemoryItemGateway};
pub use mysql::*;
pub use pool::*;
pub use traits::*;
