//! Admin query service trait definition.

use crate::dto::{AccountView, AdminListing, AuctionView, ItemView};
use bidflare_core::{AccountRole, BidflareResult, FilterValue, Interface, ItemStatus, Page, PageRequest};
use async_trait::async_trait;

/// Read-only listing of accounts, items and auctions for administrators.
///
/// Every operation validates the page request before touching a gateway,
/// then projects the gateway's page into views without altering its
/// order or metadata. Gateway errors pass through unchanged.
#[async_trait]
pub trait AdminQueryService: Interface + Send + Sync {
    /// Lists accounts holding the given role.
    async fn list_by_role(&self, role: AccountRole, page: PageRequest) -> BidflareResult<Page<AccountView>>;

    /// Lists items in the given lifecycle status.
    async fn list_by_status(&self, status: ItemStatus, page: PageRequest) -> BidflareResult<Page<ItemView>>;

    /// Lists auctions by their closed flag.
    async fn list_by_closed(&self, closed: bool, page: PageRequest) -> BidflareResult<Page<AuctionView>>;

    /// Dispatches on the filter value's resource kind.
    async fn list(&self, filter: FilterValue, page: PageRequest) -> BidflareResult<AdminListing> {
        match filter {
            FilterValue::Role(role) => self.list_by_role(role, page).await.map(AdminListing::Accounts),
            FilterValue::Status(status) => self.list_by_status(status, page).await.map(AdminListing::Items),
            FilterValue::Closed(closed) => self.list_by_closed(closed, page).await.map(AdminListing::Auctions),
        }
    }
}
