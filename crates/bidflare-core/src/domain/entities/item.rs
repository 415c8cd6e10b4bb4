//! Listed item entity.

use super::super::value_objects::ItemStatus;
use crate::{AccountId, CategoryId, Entity, ItemId};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

/// A product a seller has put (or will put) up for auction.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
pub struct Item {
    /// Unique identifier for the item.
    pub id: ItemId,

    /// Listing title.
    #[validate(length(min = 1, max = 200))]
    pub title: String,

    /// Listing description.
    pub description: String,

    /// Opening price in minor currency units.
    #[validate(range(min = 0))]
    pub starting_price: i64,

    /// Lifecycle status.
    pub status: ItemStatus,

    /// Account that listed the item.
    pub seller_id: AccountId,

    /// Catalogue category.
    pub category_id: CategoryId,

    /// Creation timestamp.
    pub created_at: DateTime<Utc>,

    /// Last update timestamp.
    pub updated_at: DateTime<Utc>,
}

impl Item {
    /// Creates a new draft item.
    #[must_use]
    pub fn new(
        title: String,
        description: String,
        starting_price: i64,
        seller_id: AccountId,
        category_id: CategoryId,
    ) -> Self {
        let now = Utc::now();
        Self {
            id: ItemId::new(),
            title,
            description,
            starting_price,
            status: ItemStatus::Draft,
            seller_id,
            category_id,
            created_at: now,
            updated_at: now,
        }
    }

    /// Returns a copy of this item in the given status.
    #[must_use]
    pub fn with_status(mut self, status: ItemStatus) -> Self {
        self.status = status;
        self
    }
}

impl Entity<ItemId> for Item {
    fn id(&self) -> &ItemId {
        &self.id
    }

    fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }
}
