//! Admin query service implementation.

use crate::admin_query_service::AdminQueryService;
use crate::dto::{AccountView, AuctionView, ItemView};
use bidflare_core::{AccountRole, BidflareError, BidflareResult, FilterValue, ItemStatus, Page};
use bidflare_core::{PageRequest, Projection};
use bidflare_repository::{AccountGateway, AuctionGateway, ItemGateway, QueryGateway};
use async_trait::async_trait;
use shaku::Component;
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, warn};

/// Clamps and validates the page, queries the gateway and projects the result.
///
/// An elapsed `timeout` drops the store future before any projection runs.
async fn query_and_project<E, V, G>(
    gateway: &G,
    value: FilterValue,
    page: PageRequest,
    max_page_size: usize,
    timeout: Option<Duration>,
) -> BidflareResult<Page<V>>
where
    E: Send + 'static,
    V: Projection<E> + Send,
    G: QueryGateway<E> + ?Sized,
{
    let kind = gateway.resource_kind();
    let page = page.clamp_size(max_page_size);
    page.validate_for(kind)?;
    debug!("Listing {} by {}, page: {}, size: {}", kind, value, page.page, page.size);

    let query = gateway.find_by_field(&value, page);
    let found = match timeout {
        Some(limit) => tokio::time::timeout(limit, query).await.map_err(|_| {
            warn!("{} query timed out after {:?}", kind, limit);
            BidflareError::store_unavailable(format!("{} query timed out after {:?}", kind, limit))
        })??,
        None => query.await?,
    };

    debug!("Found {} of {} {}", found.len(), found.total_elements(), kind);
    Ok(V::project_page(found))
}

/// Admin query service over injected gateways.
pub struct AdminQueryServiceImpl {
    accounts: Arc<dyn AccountGateway>,
    items: Arc<dyn ItemGateway>,
    auctions: Arc<dyn AuctionGateway>,
    max_page_size: usize,
    query_timeout: Option<Duration>,
}

impl AdminQueryServiceImpl {
    /// Creates a new admin query service without a query timeout.
    pub fn new(
        accounts: Arc<dyn AccountGateway>,
        items: Arc<dyn ItemGateway>,
        auctions: Arc<dyn AuctionGateway>,
    ) -> Self {
        Self {
            accounts,
            items,
            auctions,
            max_page_size: PageRequest::MAX_SIZE,
            query_timeout: None,
        }
    }

    /// Caps every request at `max` elements, never above `PageRequest::MAX_SIZE`.
    #[must_use]
    pub fn with_max_page_size(mut self, max: usize) -> Self {
        self.max_page_size = max.min(PageRequest::MAX_SIZE);
        self
    }

    /// Bounds every gateway call by `timeout`.
    #[must_use]
    pub fn with_query_timeout(mut self, timeout: Option<Duration>) -> Self {
        self.query_timeout = timeout;
        self
    }
}

#[async_trait]
impl AdminQueryService for AdminQueryServiceImpl {
    async fn list_by_role(&self, role: AccountRole, page: PageRequest) -> BidflareResult<Page<AccountView>> {
        query_and_project(
            &*self.accounts,
            FilterValue::Role(role),
            page,
            self.max_page_size,
            self.query_timeout,
        )
        .await
    }

    async fn list_by_status(&self, status: ItemStatus, page: PageRequest) -> BidflareResult<Page<ItemView>> {
        query_and_project(
            &*self.items,
            FilterValue::Status(status),
            page,
            self.max_page_size,
            self.query_timeout,
        )
        .await
    }

    async fn list_by_closed(&self, closed: bool, page: PageRequest) -> BidflareResult<Page<AuctionView>> {
        query_and_project(
            &*self.auctions,
            FilterValue::Closed(closed),
            page,
            self.max_page_size,
            self.query_timeout,
        )
        .await
    }
}

impl std::fmt::Debug for AdminQueryServiceImpl {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AdminQueryServiceImpl")
            .field("max_page_size", &self.max_page_size)
            .field("query_timeout", &self.query_timeout)
            .finish_non_exhaustive()
    }
}

// ============================================================================
// Shaku Component Implementation
// ============================================================================

/// Admin query service wired by shaku.
#[derive(Component)]
#[shaku(interface = AdminQueryService)]
pub struct AdminQueryServiceComponent {
    #[shaku(inject)]
    accounts: Arc<dyn AccountGateway>,
    #[shaku(inject)]
    items: Arc<dyn ItemGateway>,
    #[shaku(inject)]
    auctions: Arc<dyn AuctionGateway>,
    #[shaku(default = PageRequest::MAX_SIZE)]
    max_page_size: usize,
    query_timeout: Option<Duration>,
}

#[async_trait]
impl AdminQueryService for AdminQueryServiceComponent {
    async fn list_by_role(&self, role: AccountRole, page: PageRequest) -> BidflareResult<Page<AccountView>> {
        query_and_project(
            &*self.accounts,
            FilterValue::Role(role),
            page,
            self.max_page_size,
            self.query_timeout,
        )
        .await
    }

    async fn list_by_status(&self, status: ItemStatus, page: PageRequest) -> BidflareResult<Page<ItemView>> {
        query_and_project(
            &*self.items,
            FilterValue::Status(status),
            page,
            self.max_page_size,
            self.query_timeout,
        )
        .await
    }

    async fn list_by_closed(&self, closed: bool, page: PageRequest) -> BidflareResult<Page<AuctionView>> {
        query_and_project(
            &*self.auctions,
            FilterValue::Closed(closed),
            page,
            self.max_page_size,
            self.query_timeout,
        )
        .await
    }
}

impl std::fmt::Debug for AdminQueryServiceComponent {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AdminQueryServiceComponent")
            .field("max_page_size", &self.max_page_size)
            .field("query_timeout", &self.query_timeout)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bidflare_core::{Account, AccountId, Auction, CategoryId, Item, ItemId, ResourceKind, Sort};
    use bidflare_repository::{InMemoryAccountGateway, InMemoryAuctionGateway, InMemoryItemGateway};
    use chrono::{Duration as ChronoDuration, Utc};
    use mockall::mock;

    mock! {
        AccountStore {}

        #[async_trait]
        impl QueryGateway<Account> for AccountStore {
            fn resource_kind(&self) -> ResourceKind;
            async fn find_by_field(&self, value: &FilterValue, page: PageRequest) -> BidflareResult<Page<Account>>;
        }

        impl AccountGateway for AccountStore {}
    }

    /// Gateway that never answers in time.
    struct StalledItemGateway;

    #[async_trait]
    impl QueryGateway<Item> for StalledItemGateway {
        fn resource_kind(&self) -> ResourceKind {
            ResourceKind::Items
        }

        async fn find_by_field(&self, _value: &FilterValue, _page: PageRequest) -> BidflareResult<Page<Item>> {
            tokio::time::sleep(Duration::from_secs(5)).await;
            Ok(Page::empty(0, 1))
        }
    }

    impl ItemGateway for StalledItemGateway {}

    struct Fixture {
        accounts: Arc<InMemoryAccountGateway>,
        items: Arc<InMemoryItemGateway>,
        auctions: Arc<InMemoryAuctionGateway>,
        service: AdminQueryServiceImpl,
    }

    fn fixture(accounts: Vec<Account>, items: Vec<Item>, auctions: Vec<Auction>) -> Fixture {
        let accounts = Arc::new(InMemoryAccountGateway::with_records(accounts));
        let items = Arc::new(InMemoryItemGateway::with_records(items));
        let auctions = Arc::new(InMemoryAuctionGateway::with_records(auctions));
        let service = AdminQueryServiceImpl::new(accounts.clone(), items.clone(), auctions.clone());
        Fixture {
            accounts,
            items,
            auctions,
            service,
        }
    }

    fn account(name: &str, role: AccountRole) -> Account {
        Account::new(
            name.to_string(),
            format!("{}@example.com", name.to_lowercase()),
            format!("hash-of-{}", name),
            role,
        )
    }

    fn listed_items(count: i64) -> Vec<Item> {
        let now = Utc::now();
        let seller = AccountId::new();
        let category = CategoryId::new();
        (0..count)
            .map(|i| {
                let mut item = Item::new(format!("Lot {:02}", i), String::new(), 500, seller, category)
                    .with_status(ItemStatus::Listed);
                item.created_at = now - ChronoDuration::minutes(i);
                item
            })
            .collect()
    }

    fn three_admins_two_buyers() -> Vec<Account> {
        vec![
            account("Ada", AccountRole::Admin),
            account("Bo", AccountRole::Buyer),
            account("Cy", AccountRole::Admin),
            account("Di", AccountRole::Buyer),
            account("Ed", AccountRole::Admin),
        ]
    }

    #[tokio::test]
    async fn test_list_by_role() {
        let f = fixture(three_admins_two_buyers(), vec![], vec![]);

        let page = f
            .service
            .list_by_role(AccountRole::Admin, PageRequest::new(0, 10))
            .await
            .unwrap();

        assert_eq!(page.len(), 3);
        assert_eq!(page.total_elements(), 3);
        assert_eq!(page.total_pages(), 1);
        assert!(page.content.iter().all(|v| v.role == AccountRole::Admin));
    }

    #[tokio::test]
    async fn test_list_by_status_second_page() {
        let f = fixture(vec![], listed_items(25), vec![]);

        let page = f
            .service
            .list_by_status(ItemStatus::Listed, PageRequest::new(1, 10))
            .await
            .unwrap();

        assert_eq!(page.len(), 10);
        assert_eq!(page.total_elements(), 25);
        assert_eq!(page.total_pages(), 3);
        assert!(!page.info.first);
        assert!(!page.info.last);
        assert_eq!(page.content[0].title, "Lot 10");
    }

    #[tokio::test]
    async fn test_active_alias_lists_listed_items() {
        let f = fixture(vec![], listed_items(4), vec![]);
        let status = match FilterValue::parse(ResourceKind::Items, "ACTIVE").unwrap() {
            FilterValue::Status(status) => status,
            other => panic!("unexpected filter {other:?}"),
        };

        let page = f.service.list_by_status(status, PageRequest::first()).await.unwrap();
        assert_eq!(page.total_elements(), 4);
    }

    #[tokio::test]
    async fn test_no_closed_auctions_is_empty_page() {
        let open = Auction::open(ItemId::new(), Utc::now() + ChronoDuration::days(1));
        let f = fixture(vec![], vec![], vec![open]);

        let page = f.service.list_by_closed(true, PageRequest::new(0, 10)).await.unwrap();

        assert!(page.is_empty());
        assert_eq!(page.total_elements(), 0);
        assert_eq!(page.total_pages(), 0);
    }

    #[tokio::test]
    async fn test_zero_size_never_reaches_gateway() {
        let f = fixture(three_admins_two_buyers(), vec![], vec![]);
        let mut request = PageRequest::first();
        request.size = 0;

        let err = f.service.list_by_role(AccountRole::Admin, request).await.unwrap_err();

        assert!(matches!(err, BidflareError::InvalidPageRequest(_)));
        assert_eq!(f.accounts.call_count(), 0);
    }

    #[tokio::test]
    async fn test_unknown_sort_never_reaches_gateway() {
        let mut store = MockAccountStore::new();
        store.expect_resource_kind().return_const(ResourceKind::Accounts);
        store.expect_find_by_field().never();
        let service = AdminQueryServiceImpl::new(
            Arc::new(store),
            Arc::new(InMemoryItemGateway::new()),
            Arc::new(InMemoryAuctionGateway::new()),
        );

        let request = PageRequest::first().with_sort(Sort::asc("passwordHash"));
        let err = service.list_by_role(AccountRole::Buyer, request).await.unwrap_err();

        assert!(matches!(err, BidflareError::InvalidPageRequest(_)));
    }

    #[tokio::test]
    async fn test_gateway_receives_filter_and_page() {
        let mut store = MockAccountStore::new();
        store.expect_resource_kind().return_const(ResourceKind::Accounts);
        store
            .expect_find_by_field()
            .withf(|value, page| *value == FilterValue::Role(AccountRole::Seller) && page.page == 2 && page.size == 5)
            .times(1)
            .returning(|_, page| Ok(Page::new(vec![], page.page, page.size, 10)));
        let service = AdminQueryServiceImpl::new(
            Arc::new(store),
            Arc::new(InMemoryItemGateway::new()),
            Arc::new(InMemoryAuctionGateway::new()),
        );

        let page = service
            .list_by_role(AccountRole::Seller, PageRequest::new(2, 5))
            .await
            .unwrap();

        assert!(page.is_empty());
        assert_eq!(page.total_elements(), 10);
        assert_eq!(page.total_pages(), 2);
    }

    #[tokio::test]
    async fn test_order_and_metadata_preserved() {
        let items = listed_items(7);
        let f = fixture(vec![], items.clone(), vec![]);
        let request = PageRequest::new(1, 3).with_sort(Sort::asc("title"));

        let raw = f
            .items
            .find_by_field(&FilterValue::Status(ItemStatus::Listed), request.clone())
            .await
            .unwrap();
        let views = f.service.list_by_status(ItemStatus::Listed, request).await.unwrap();

        assert_eq!(views.info, raw.info);
        let raw_ids: Vec<_> = raw.content.iter().map(|i| i.id).collect();
        let view_ids: Vec<_> = views.content.iter().map(|v| v.id).collect();
        assert_eq!(view_ids, raw_ids);
        assert_eq!(views.content[0].title, "Lot 03");
    }

    #[tokio::test]
    async fn test_repeated_calls_are_identical() {
        let f = fixture(three_admins_two_buyers(), vec![], vec![]);

        let first = f.service.list_by_role(AccountRole::Buyer, PageRequest::new(0, 1)).await.unwrap();
        let second = f.service.list_by_role(AccountRole::Buyer, PageRequest::new(0, 1)).await.unwrap();

        assert_eq!(first, second);
        assert_eq!(f.accounts.call_count(), 2);
    }

    #[tokio::test]
    async fn test_store_unavailable_propagates() {
        let f = fixture(vec![], vec![], vec![Auction::open(ItemId::new(), Utc::now())]);
        f.auctions.set_offline(true);

        let err = f.service.list_by_closed(false, PageRequest::first()).await.unwrap_err();

        assert!(matches!(err, BidflareError::StoreUnavailable(_)));
        assert!(err.is_retriable());
    }

    #[tokio::test]
    async fn test_invalid_filter_value_propagates() {
        let mut store = MockAccountStore::new();
        store.expect_resource_kind().return_const(ResourceKind::Accounts);
        store
            .expect_find_by_field()
            .returning(|_, _| Err(BidflareError::invalid_filter(ResourceKind::Accounts, "WIZARD")));
        let service = AdminQueryServiceImpl::new(
            Arc::new(store),
            Arc::new(InMemoryItemGateway::new()),
            Arc::new(InMemoryAuctionGateway::new()),
        );

        let err = service.list_by_role(AccountRole::Admin, PageRequest::first()).await.unwrap_err();

        assert!(matches!(
            err,
            BidflareError::InvalidFilterValue { kind: ResourceKind::Accounts, .. }
        ));
    }

    #[tokio::test]
    async fn test_timeout_is_store_unavailable() {
        let service = AdminQueryServiceImpl::new(
            Arc::new(InMemoryAccountGateway::new()),
            Arc::new(StalledItemGateway),
            Arc::new(InMemoryAuctionGateway::new()),
        )
        .with_query_timeout(Some(Duration::from_millis(20)));

        let err = service
            .list_by_status(ItemStatus::Draft, PageRequest::first())
            .await
            .unwrap_err();

        assert!(matches!(err, BidflareError::StoreUnavailable(_)));
    }

    #[tokio::test]
    async fn test_deserialized_oversized_page_is_clamped() {
        let buyers = (0..150).map(|i| account(&format!("Buyer{i}"), AccountRole::Buyer)).collect();
        let f = fixture(buyers, vec![], vec![]);
        let request: PageRequest = serde_json::from_str(r#"{"page":0,"size":100000}"#).unwrap();

        let page = f.service.list_by_role(AccountRole::Buyer, request).await.unwrap();

        assert_eq!(page.len(), PageRequest::MAX_SIZE);
        assert_eq!(page.info.size, PageRequest::MAX_SIZE);
        assert_eq!(page.total_elements(), 150);
    }

    #[tokio::test]
    async fn test_configured_max_page_size_caps_literal_requests() {
        let buyers = (0..30).map(|i| account(&format!("Buyer{i}"), AccountRole::Buyer)).collect();
        let accounts = Arc::new(InMemoryAccountGateway::with_records(buyers));
        let service = AdminQueryServiceImpl::new(
            accounts,
            Arc::new(InMemoryItemGateway::new()),
            Arc::new(InMemoryAuctionGateway::new()),
        )
        .with_max_page_size(25);
        let request = PageRequest {
            page: 0,
            size: 100_000,
            sort: None,
        };

        let page = service.list_by_role(AccountRole::Buyer, request).await.unwrap();

        assert_eq!(page.len(), 25);
        assert_eq!(page.total_pages(), 2);
    }

    #[tokio::test]
    async fn test_offset_beyond_sql_range_never_reaches_gateway() {
        let f = fixture(three_admins_two_buyers(), vec![], vec![]);
        let request = PageRequest::from_signed(i64::MAX, 2).unwrap();

        let err = f.service.list_by_role(AccountRole::Admin, request).await.unwrap_err();

        assert!(matches!(err, BidflareError::InvalidPageRequest(_)));
        assert!(!err.is_retriable());
        assert_eq!(f.accounts.call_count(), 0);
    }

    #[test]
    fn test_debug_shows_limits() {
        let service = AdminQueryServiceImpl::new(
            Arc::new(InMemoryAccountGateway::new()),
            Arc::new(InMemoryItemGateway::new()),
            Arc::new(InMemoryAuctionGateway::new()),
        )
        .with_max_page_size(40)
        .with_query_timeout(Some(Duration::from_millis(250)));
        let debug = format!("{service:?}");
        assert!(debug.contains("max_page_size: 40"));
        assert!(debug.contains("query_timeout: Some(250ms)"));

        let component = AdminQueryServiceComponent {
            accounts: Arc::new(InMemoryAccountGateway::new()),
            items: Arc::new(InMemoryItemGateway::new()),
            auctions: Arc::new(InMemoryAuctionGateway::new()),
            max_page_size: 40,
            query_timeout: Some(Duration::from_millis(250)),
        };
        assert_eq!(
            format!("{component:?}").replace("AdminQueryServiceComponent", "AdminQueryServiceImpl"),
            debug
        );
    }

    #[tokio::test]
    async fn test_list_dispatches_on_filter_kind() {
        let f = fixture(
            three_admins_two_buyers(),
            listed_items(2),
            vec![Auction::open(ItemId::new(), Utc::now()).closed()],
        );

        let listing = f
            .service
            .list(FilterValue::Closed(true), PageRequest::first())
            .await
            .unwrap();
        assert_eq!(listing.kind(), ResourceKind::Auctions);
        assert_eq!(listing.len(), 1);

        let listing = f
            .service
            .list(FilterValue::Role(AccountRole::Buyer), PageRequest::first())
            .await
            .unwrap();
        assert!(matches!(listing, crate::AdminListing::Accounts(ref page) if page.len() == 2));
        assert_eq!(f.items.call_count(), 0);
    }
}
