//! MySQL item gateway.

use super::ordering::order_by;
use crate::{ensure_kind, DatabasePoolInterface, ItemGateway, QueryGateway};
use bidflare_core::{AccountId, BidflareError, BidflareResult, CategoryId, FilterValue, Item, ItemId};
use bidflare_core::{ItemStatus, Page, PageRequest, ResourceKind};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use shaku::Component;
use sqlx::FromRow;
use std::sync::Arc;
use tracing::{debug, warn};
use uuid::Uuid;

/// MySQL item gateway.
#[derive(Component, Clone)]
#[shaku(interface = ItemGateway)]
pub struct MySqlItemGateway {
    #[shaku(inject)]
    pool: Arc<dyn DatabasePoolInterface>,
}

impl MySqlItemGateway {
    /// Creates a new MySQL item gateway.
    #[must_use]
    pub fn new(pool: Arc<dyn DatabasePoolInterface>) -> Self {
        Self { pool }
    }
}

#[derive(Debug, FromRow)]
struct ItemRow {
    id: String,
    title: String,
    description: String,
    starting_price: i64,
    status: String,
    seller_id: String,
    category_id: String,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

fn parse_uuid(column: &str, raw: &str) -> BidflareResult<Uuid> {
    Uuid::parse_str(raw)
        .map_err(|e| BidflareError::internal(format!("Invalid UUID in items.{}: {}", column, e)))
}

impl TryFrom<ItemRow> for Item {
    type Error = BidflareError;

    fn try_from(row: ItemRow) -> Result<Self, Self::Error> {
        let id = parse_uuid("id", &row.id)?;
        let status: ItemStatus = row.status.parse().map_err(|_| {
            BidflareError::internal(format!("Unknown status '{}' stored for item {}", row.status, id))
        })?;

        Ok(Item {
            id: ItemId::from_uuid(id),
            title: row.title,
            description: row.description,
            starting_price: row.starting_price,
            status,
            seller_id: AccountId::from_uuid(parse_uuid("seller_id", &row.seller_id)?),
            category_id: CategoryId::from_uuid(parse_uuid("category_id", &row.category_id)?),
            created_at: row.created_at,
            updated_at: row.updated_at,
        })
    }
}

#[async_trait]
impl QueryGateway<Item> for MySqlItemGateway {
    fn resource_kind(&self) -> ResourceKind {
        ResourceKind::Items
    }

    async fn find_by_field(&self, value: &FilterValue, page: PageRequest) -> BidflareResult<Page<Item>> {
        ensure_kind(ResourceKind::Items, value)?;
        page.validate()?;
        let (limit, offset) = page.sql_bounds()?;
        let status = value.expect_status()?;
        let order = order_by(ResourceKind::Items, page.sort.as_ref())?;
        debug!("Finding items by status: {}, page: {}, size: {}", status, page.page, page.size);

        let total: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM items WHERE status = ?")
            .bind(status.as_str())
            .fetch_one(self.pool.inner())
            .await
            .map_err(|e| {
                warn!("Item count failed: {}", e);
                e
            })?;

        let sql = format!(
            r#"
            SELECT id, title, description, starting_price, status,
                   seller_id, category_id, created_at, updated_at
            FROM items
            WHERE status = ?
            {}
            LIMIT ? OFFSET ?
            "#,
            order
        );

        let rows = sqlx::query_as::<_, ItemRow>(&sql)
            .bind(status.as_str())
            .bind(limit)
            .bind(offset)
            .fetch_all(self.pool.inner())
            .await
            .map_err(|e| {
                warn!("Item query failed: {}", e);
                e
            })?;

        let items = rows
            .into_iter()
            .map(Item::try_from)
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Page::new(items, page.page, page.size, total.max(0) as u64))
    }
}

impl ItemGateway for MySqlItemGateway {}

impl std::fmt::Debug for MySqlItemGateway {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MySqlItemGateway").finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(status: &str) -> ItemRow {
        ItemRow {
            id: Uuid::now_v7().to_string(),
            title: "Typewriter".to_string(),
            description: "Olivetti Lettera 32".to_string(),
            starting_price: 4_000,
            status: status.to_string(),
            seller_id: Uuid::now_v7().to_string(),
            category_id: Uuid::now_v7().to_string(),
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    #[test]
    fn test_row_conversion() {
        let item = Item::try_from(row("SHIPPED")).unwrap();
        assert_eq!(item.status, ItemStatus::Shipped);
        assert_eq!(item.starting_price, 4_000);
    }

    #[test]
    fn test_unknown_status_is_internal() {
        assert!(matches!(Item::try_from(row("LOST")), Err(BidflareError::Internal(_))));
    }

    #[test]
    fn test_bad_seller_id_is_internal() {
        let mut bad = row("LISTED");
        bad.seller_id = "seller-7".to_string();
        let err = Item::try_from(bad).unwrap_err();
        assert!(err.to_string().contains("seller_id"));
    }
}
