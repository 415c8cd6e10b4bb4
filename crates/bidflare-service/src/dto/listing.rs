//! Listing returned by the dispatching query.

use super::{AccountView, AuctionView, ItemView};
use bidflare_core::{Page, PageInfo, ResourceKind};
use serde::Serialize;

/// A page of views of one resource kind.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", content = "page", rename_all = "lowercase")]
pub enum AdminListing {
    Accounts(Page<AccountView>),
    Items(Page<ItemView>),
    Auctions(Page<AuctionView>),
}

impl AdminListing {
    /// The resource kind this listing holds.
    #[must_use]
    pub const fn kind(&self) -> ResourceKind {
        match self {
            Self::Accounts(_) => ResourceKind::Accounts,
            Self::Items(_) => ResourceKind::Items,
            Self::Auctions(_) => ResourceKind::Auctions,
        }
    }

    /// Page metadata, whatever the kind.
    #[must_use]
    pub const fn info(&self) -> &PageInfo {
        match self {
            Self::Accounts(page) => &page.info,
            Self::Items(page) => &page.info,
            Self::Auctions(page) => &page.info,
        }
    }

    /// Number of views on this page.
    #[must_use]
    pub fn len(&self) -> usize {
        self.info().number_of_elements
    }

    /// Whether the page holds no views.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
