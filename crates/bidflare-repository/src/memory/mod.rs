//! In-memory gateways.
//!
//! Same filtering, ordering and paging semantics as the MySQL gateways,
//! backed by a `Vec`. Used as fakes in tests and for local runs without a
//! database.

mod record;

pub use record::Record;

use crate::{ensure_kind, AccountGateway, AuctionGateway, ItemGateway, QueryGateway};
use bidflare_core::{Account, Auction, BidflareError, BidflareResult, FilterValue, Item};
use bidflare_core::{Page, PageRequest, ResourceKind, SortDirection};
use async_trait::async_trait;
use std::cmp::Ordering;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering as AtomicOrdering};
use tokio::sync::RwLock;
use tracing::{debug, warn};

/// In-memory account gateway.
pub type InMemoryAccountGateway = InMemoryGateway<Account>;
/// In-memory item gateway.
pub type InMemoryItemGateway = InMemoryGateway<Item>;
/// In-memory auction gateway.
pub type InMemoryAuctionGateway = InMemoryGateway<Auction>;

/// Gateway over an in-memory record list.
#[derive(Debug)]
pub struct InMemoryGateway<E> {
    records: RwLock<Vec<E>>,
    offline: AtomicBool,
    calls: AtomicUsize,
}

impl<E: Record> InMemoryGateway<E> {
    /// Creates an empty gateway.
    #[must_use]
    pub fn new() -> Self {
        Self::with_records(Vec::new())
    }

    /// Creates a gateway seeded with records.
    #[must_use]
    pub fn with_records(records: Vec<E>) -> Self {
        Self {
            records: RwLock::new(records),
            offline: AtomicBool::new(false),
            calls: AtomicUsize::new(0),
        }
    }

    /// Adds a record.
    pub async fn insert(&self, record: E) {
        self.records.write().await.push(record);
    }

    /// Makes every subsequent query fail with `StoreUnavailable` (or succeed again).
    pub fn set_offline(&self, offline: bool) {
        self.offline.store(offline, AtomicOrdering::SeqCst);
    }

    /// Number of `find_by_field` calls received so far.
    #[must_use]
    pub fn call_count(&self) -> usize {
        self.calls.load(AtomicOrdering::SeqCst)
    }

    fn compare(a: &E, b: &E, page: &PageRequest) -> Ordering {
        let primary = match &page.sort {
            Some(sort) => {
                let ordering = a.compare_field(b, &sort.field).unwrap_or(Ordering::Equal);
                match sort.direction {
                    SortDirection::Asc => ordering,
                    SortDirection::Desc => ordering.reverse(),
                }
            }
            None => a.default_order(b),
        };
        primary.then_with(|| a.id_order(b))
    }
}

impl<E: Record> Default for InMemoryGateway<E> {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl<E: Record> QueryGateway<E> for InMemoryGateway<E> {
    fn resource_kind(&self) -> ResourceKind {
        E::KIND
    }

    async fn find_by_field(&self, value: &FilterValue, page: PageRequest) -> BidflareResult<Page<E>> {
        self.calls.fetch_add(1, AtomicOrdering::SeqCst);
        debug!("In-memory {} query: {}, page: {}, size: {}", E::KIND, value, page.page, page.size);

        if self.offline.load(AtomicOrdering::SeqCst) {
            warn!("In-memory {} store is offline", E::KIND);
            return Err(BidflareError::store_unavailable(format!("{} store is offline", E::KIND)));
        }

        ensure_kind(E::KIND, value)?;
        page.validate()?;
        if let Some(sort) = &page.sort {
            if !E::KIND.sortable_fields().contains(&sort.field.as_str()) {
                return Err(BidflareError::invalid_page(format!(
                    "Cannot sort {} by '{}'",
                    E::KIND,
                    sort.field
                )));
            }
        }

        let records = self.records.read().await;
        let mut matching = Vec::new();
        for record in records.iter() {
            if record.matches(value)? {
                matching.push(record.clone());
            }
        }
        drop(records);

        matching.sort_by(|a, b| Self::compare(a, b, &page));

        let total = matching.len() as u64;
        let content: Vec<E> = matching
            .into_iter()
            .skip(page.offset())
            .take(page.limit())
            .collect();

        Ok(Page::new(content, page.page, page.size, total))
    }
}

impl AccountGateway for InMemoryGateway<Account> {}
impl ItemGateway for InMemoryGateway<Item> {}
impl AuctionGateway for InMemoryGateway<Auction> {}
