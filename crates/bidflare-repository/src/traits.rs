//! Query gateway trait definitions.

use bidflare_core::{Account, Auction, BidflareError, BidflareResult, FilterValue, Interface, Item};
use bidflare_core::{Page, PageRequest, ResourceKind};
use async_trait::async_trait;

/// Filtered, paginated, read-only retrieval for one resource kind.
///
/// Implementations return only entities whose discriminant field equals the
/// filter value, report the total over all matching entities, and yield an
/// empty page rather than an error when nothing matches.
#[async_trait]
pub trait QueryGateway<E>: Send + Sync
where
    E: Send + 'static,
{
    /// The resource kind this gateway serves.
    fn resource_kind(&self) -> ResourceKind;

    /// Finds entities whose discriminant equals `value`.
    async fn find_by_field(&self, value: &FilterValue, page: PageRequest) -> BidflareResult<Page<E>>;
}

/// Account gateway, filtered by role.
pub trait AccountGateway: QueryGateway<Account> + Interface {}

/// Item gateway, filtered by lifecycle status.
pub trait ItemGateway: QueryGateway<Item> + Interface {}

/// Auction gateway, filtered by the closed flag.
pub trait AuctionGateway: QueryGateway<Auction> + Interface {}

/// Rejects a filter aimed at another resource kind.
pub fn ensure_kind(expected: ResourceKind, value: &FilterValue) -> BidflareResult<()> {
    if value.kind() == expected {
        Ok(())
    } else {
        Err(BidflareError::invalid_filter(expected, value))
    }
}
