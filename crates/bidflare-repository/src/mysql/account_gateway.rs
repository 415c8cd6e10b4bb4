//! MySQL account gateway.

use super::ordering::order_by;
use crate::{ensure_kind, AccountGateway, DatabasePoolInterface, QueryGateway};
use bidflare_core::{Account, AccountId, AccountRole, BidflareError, BidflareResult, FilterValue};
use bidflare_core::{Page, PageRequest, ResourceKind};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use shaku::Component;
use sqlx::FromRow;
use std::sync::Arc;
use tracing::{debug, warn};
use uuid::Uuid;

/// MySQL account gateway.
#[derive(Component, Clone)]
#[shaku(interface = AccountGateway)]
pub struct MySqlAccountGateway {
    #[shaku(inject)]
    pool: Arc<dyn DatabasePoolInterface>,
}

impl MySqlAccountGateway {
    /// Creates a new MySQL account gateway.
    #[must_use]
    pub fn new(pool: Arc<dyn DatabasePoolInterface>) -> Self {
        Self { pool }
    }
}

/// Database row representation of an account.
#[derive(Debug, FromRow)]
struct AccountRow {
    id: String,
    name: String,
    email: String,
    password_hash: String,
    role: String,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl TryFrom<AccountRow> for Account {
    type Error = BidflareError;

    fn try_from(row: AccountRow) -> Result<Self, Self::Error> {
        let id = Uuid::parse_str(&row.id)
            .map_err(|e| BidflareError::internal(format!("Invalid UUID in database: {}", e)))?;
        let role: AccountRole = row.role.parse().map_err(|_| {
            BidflareError::internal(format!("Unknown role '{}' stored for account {}", row.role, id))
        })?;

        Ok(Account {
            id: AccountId::from_uuid(id),
            name: row.name,
            email: row.email,
            password_hash: row.password_hash,
            role,
            created_at: row.created_at,
            updated_at: row.updated_at,
        })
    }
}

#[async_trait]
impl QueryGateway<Account> for MySqlAccountGateway {
    fn resource_kind(&self) -> ResourceKind {
        ResourceKind::Accounts
    }

    async fn find_by_field(&self, value: &FilterValue, page: PageRequest) -> BidflareResult<Page<Account>> {
        ensure_kind(ResourceKind::Accounts, value)?;
        page.validate()?;
        let (limit, offset) = page.sql_bounds()?;
        let role = value.expect_role()?;
        let order = order_by(ResourceKind::Accounts, page.sort.as_ref())?;
        debug!("Finding accounts by role: {}, page: {}, size: {}", role, page.page, page.size);

        let total: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM accounts WHERE role = ?")
            .bind(role.as_str())
            .fetch_one(self.pool.inner())
            .await
            .map_err(|e| {
                warn!("Account count failed: {}", e);
                e
            })?;

        let sql = format!(
            r#"
            SELECT id, name, email, password_hash, role, created_at, updated_at
            FROM accounts
            WHERE role = ?
            {}
            LIMIT ? OFFSET ?
            "#,
            order
        );

        let rows = sqlx::query_as::<_, AccountRow>(&sql)
            .bind(role.as_str())
            .bind(limit)
            .bind(offset)
            .fetch_all(self.pool.inner())
            .await
            .map_err(|e| {
                warn!("Account query failed: {}", e);
                e
            })?;

        let accounts = rows
            .into_iter()
            .map(Account::try_from)
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Page::new(accounts, page.page, page.size, total.max(0) as u64))
    }
}

impl AccountGateway for MySqlAccountGateway {}

impl std::fmt::Debug for MySqlAccountGateway {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MySqlAccountGateway").finish_non_exhaustive()
    }
}
