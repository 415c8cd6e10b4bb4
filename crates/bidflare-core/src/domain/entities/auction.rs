//! Auction entity.

use crate::{AuctionId, Entity, ItemId};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// An auction running (or finished) for a single listed item.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Auction {
    /// Unique identifier for the auction.
    pub id: AuctionId,

    /// The item being auctioned.
    pub item_id: ItemId,

    /// Highest accepted bid in minor currency units, `None` until the first bid.
    pub last_price: Option<i64>,

    /// Scheduled close time.
    pub end_time: DateTime<Utc>,

    /// Whether bidding has been closed.
    pub is_closed: bool,

    /// Number of accepted bids.
    pub bid_count: u32,

    /// Optimistic-locking counter maintained by the store.
    #[serde(skip_serializing)]
    pub version: i64,

    /// Creation timestamp.
    pub created_at: DateTime<Utc>,
}

impl Auction {
    /// Opens a new auction for an item.
    #[must_use]
    pub fn open(item_id: ItemId, end_time: DateTime<Utc>) -> Self {
        Self {
            id: AuctionId::new(),
            item_id,
            last_price: None,
            end_time,
            is_closed: false,
            bid_count: 0,
            version: 0,
            created_at: Utc::now(),
        }
    }

    /// Returns a copy of this auction with the closed flag set.
    #[must_use]
    pub fn closed(mut self) -> Self {
        self.is_closed = true;
        self
    }
}

impl Entity<AuctionId> for Auction {
    fn id(&self) -> &AuctionId {
        &self.id
    }

    fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    #[test]
    fn test_open_auction() {
        let auction = Auction::open(ItemId::new(), Utc::now() + Duration::days(3));
        assert!(!auction.is_closed);
        assert!(auction.last_price.is_none());
        assert_eq!(auction.bid_count, 0);
    }

    #[test]
    fn test_closed_auction() {
        let auction = Auction::open(ItemId::new(), Utc::now()).closed();
        assert!(auction.is_closed);
    }

    #[test]
    fn test_auction_serialize_hides_version() {
        let mut auction = Auction::open(ItemId::new(), Utc::now());
        auction.version = 42;
        let json = serde_json::to_string(&auction).unwrap();
        assert!(!json.contains("version"));
    }
}
