//! MySQL auction gateway.

use super::ordering::order_by;
use crate::{ensure_kind, AuctionGateway, DatabasePoolInterface, QueryGateway};
use bidflare_core::{Auction, AuctionId, BidflareError, BidflareResult, FilterValue, ItemId};
use bidflare_core::{Page, PageRequest, ResourceKind};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use shaku::Component;
use sqlx::FromRow;
use std::sync::Arc;
use tracing::{debug, warn};
use uuid::Uuid;

/// MySQL auction gateway.
#[derive(Component, Clone)]
#[shaku(interface = AuctionGateway)]
pub struct MySqlAuctionGateway {
    #[shaku(inject)]
    pool: Arc<dyn DatabasePoolInterface>,
}

impl MySqlAuctionGateway {
    /// Creates a new MySQL auction gateway.
    #[must_use]
    pub fn new(pool: Arc<dyn DatabasePoolInterface>) -> Self {
        Self { pool }
    }
}

#[derive(Debug, FromRow)]
struct AuctionRow {
    id: String,
    item_id: String,
    last_price: Option<i64>,
    end_time: DateTime<Utc>,
    is_closed: bool,
    bid_count: u32,
    version: i64,
    created_at: DateTime<Utc>,
}

impl TryFrom<AuctionRow> for Auction {
    type Error = BidflareError;

    fn try_from(row: AuctionRow) -> Result<Self, Self::Error> {
        let id = Uuid::parse_str(&row.id)
            .map_err(|e| BidflareError::internal(format!("Invalid UUID in auctions.id: {}", e)))?;
        let item_id = Uuid::parse_str(&row.item_id)
            .map_err(|e| BidflareError::internal(format!("Invalid UUID in auctions.item_id: {}", e)))?;

        Ok(Auction {
            id: AuctionId::from_uuid(id),
            item_id: ItemId::from_uuid(item_id),
            last_price: row.last_price,
            end_time: row.end_time,
            is_closed: row.is_closed,
            bid_count: row.bid_count,
            version: row.version,
            created_at: row.created_at,
        })
    }
}

#[async_trait]
impl QueryGateway<Auction> for MySqlAuctionGateway {
    fn resource_kind(&self) -> ResourceKind {
        ResourceKind::Auctions
    }

    async fn find_by_field(&self, value: &FilterValue, page: PageRequest) -> BidflareResult<Page<Auction>> {
        ensure_kind(ResourceKind::Auctions, value)?;
        page.validate()?;
        let (limit, offset) = page.sql_bounds()?;
        let closed = value.expect_closed()?;
        let order = order_by(ResourceKind::Auctions, page.sort.as_ref())?;
        debug!("Finding auctions by is_closed: {}, page: {}, size: {}", closed, page.page, page.size);

        let total: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM auctions WHERE is_closed = ?")
            .bind(closed)
            .fetch_one(self.pool.inner())
            .await
            .map_err(|e| {
                warn!("Auction count failed: {}", e);
                e
            })?;

        let sql = format!(
            r#"
            SELECT id, item_id, last_price, end_time, is_closed, bid_count, version, created_at
            FROM auctions
            WHERE is_closed = ?
            {}
            LIMIT ? OFFSET ?
            "#,
            order
        );

        let rows = sqlx::query_as::<_, AuctionRow>(&sql)
            .bind(closed)
            .bind(limit)
            .bind(offset)
            .fetch_all(self.pool.inner())
            .await
            .map_err(|e| {
                warn!("Auction query failed: {}", e);
                e
            })?;

        let auctions = rows
            .into_iter()
            .map(Auction::try_from)
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Page::new(auctions, page.page, page.size, total.max(0) as u64))
    }
}

impl AuctionGateway for MySqlAuctionGateway {}

impl std::fmt::Debug for MySqlAuctionGateway {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MySqlAuctionGateway").finish_non_exhaustive()
    }
}
