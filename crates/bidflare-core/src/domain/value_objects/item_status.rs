//! Listed item status value object.

use crate::{BidflareError, ResourceKind};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Lifecycle status of a listed item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[serde(rename_all = "UPPERCASE")]
pub enum ItemStatus {
    /// Created by the seller but not yet on the market.
    #[default]
    Draft,
    /// On the market with an open auction.
    #[serde(alias = "ACTIVE")]
    Listed,
    /// Auction closed with a winning bid.
    Sold,
    /// Winning buyer has paid.
    Paid,
    /// Seller has shipped the item.
    Shipped,
    /// Buyer has received the item.
    Delivered,
}

impl ItemStatus {
    /// All possible statuses, in lifecycle order.
    #[must_use]
    pub const fn all() -> [Self; 6] {
        [
            Self::Draft,
            Self::Listed,
            Self::Sold,
            Self::Paid,
            Self::Shipped,
            Self::Delivered,
        ]
    }

    /// Returns the storage and wire form of the status.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Draft => "DRAFT",
            Self::Listed => "LISTED",
            Self::Sold => "SOLD",
            Self::Paid => "PAID",
            Self::Shipped => "SHIPPED",
            Self::Delivered => "DELIVERED",
        }
    }
}

impl FromStr for ItemStatus {
    type Err = BidflareError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "DRAFT" => Ok(Self::Draft),
            "LISTED" | "ACTIVE" => Ok(Self::Listed),
            "SOLD" => Ok(Self::Sold),
            "PAID" => Ok(Self::Paid),
            "SHIPPED" => Ok(Self::Shipped),
            "DELIVERED" => Ok(Self::Delivered),
            _ => Err(BidflareError::invalid_filter(ResourceKind::Items, s)),
        }
    }
}

impl fmt::Display for ItemStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
