//! Item view.

use bidflare_core::{AccountId, CategoryId, ItemId, ItemStatus};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Outward representation of a listed item.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ItemView {
    pub id: ItemId,
    pub title: String,
    pub description: String,
    /// Minor currency units.
    pub starting_price: i64,
    pub status: ItemStatus,
    pub seller_id: AccountId,
    pub category_id: CategoryId,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}
