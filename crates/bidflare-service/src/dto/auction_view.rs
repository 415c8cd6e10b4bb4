//! Auction view.

use bidflare_core::{AuctionId, ItemId};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Outward representation of an auction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct AuctionView {
    pub id: AuctionId,
    /// The auctioned item.
    pub product_id: ItemId,
    /// `None` until the first bid.
    pub last_price: Option<i64>,
    pub end_time: DateTime<Utc>,
    pub closed: bool,
}
