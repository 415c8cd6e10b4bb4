use bidflare_core::{Account, Auction, BidflareResult, FilterValue, Item, ResourceKind};
use std::cmp::Ordering;

/// An entity the in-memory gateway can filter and order.
pub trait Record: Clone + Send + Sync + 'static {
    /// The resource kind this entity belongs to.
    const KIND: ResourceKind;

    /// Whether the discriminant equals the filter value.
    fn matches(&self, value: &FilterValue) -> BidflareResult<bool>;

    /// Ascending comparison on a wire sort field, `None` if the field is not sortable.
    fn compare_field(&self, other: &Self, field: &str) -> Option<Ordering>;

    /// Order used when the request carries no sort.
    fn default_order(&self, other: &Self) -> Ordering;

    /// Tie-breaker.
    fn id_order(&self, other: &Self) -> Ordering;
}

impl Record for Account {
    const KIND: ResourceKind = ResourceKind::Accounts;

    fn matches(&self, value: &FilterValue) -> BidflareResult<bool> {
        Ok(self.role == value.expect_role()?)
    }

    fn compare_field(&self, other: &Self, field: &str) -> Option<Ordering> {
        match field {
            "name" => Some(self.name.cmp(&other.name)),
            "email" => Some(self.email.cmp(&other.email)),
            "role" => Some(self.role.as_str().cmp(other.role.as_str())),
            "createdAt" => Some(self.created_at.cmp(&other.created_at)),
            "updatedAt" => Some(self.updated_at.cmp(&other.updated_at)),
            _ => None,
        }
    }

    fn default_order(&self, other: &Self) -> Ordering {
        other.created_at.cmp(&self.created_at)
    }

    fn id_order(&self, other: &Self) -> Ordering {
        self.id.cmp(&other.id)
    }
}

impl Record for Item {
    const KIND: ResourceKind = ResourceKind::Items;

    fn matches(&self, value: &FilterValue) -> BidflareResult<bool> {
        Ok(self.status == value.expect_status()?)
    }

    fn compare_field(&self, other: &Self, field: &str) -> Option<Ordering> {
        match field {
            "title" => Some(self.title.cmp(&other.title)),
            "startingPrice" => Some(self.starting_price.cmp(&other.starting_price)),
            "status" => Some(self.status.as_str().cmp(other.status.as_str())),
            "createdAt" => Some(self.created_at.cmp(&other.created_at)),
            "updatedAt" => Some(self.updated_at.cmp(&other.updated_at)),
            _ => None,
        }
    }

    fn default_order(&self, other: &Self) -> Ordering {
        other.created_at.cmp(&self.created_at)
    }

    fn id_order(&self, other: &Self) -> Ordering {
        self.id.cmp(&other.id)
    }
}

impl Record for Auction {
    const KIND: ResourceKind = ResourceKind::Auctions;

    fn matches(&self, value: &FilterValue) -> BidflareResult<bool> {
        Ok(self.is_closed == value.expect_closed()?)
    }

    fn compare_field(&self, other: &Self, field: &str) -> Option<Ordering> {
        match field {
            "endTime" => Some(self.end_time.cmp(&other.end_time)),
            // NULL prices first, as MySQL sorts them ascending
            "lastPrice" => Some(self.last_price.cmp(&other.last_price)),
            "createdAt" => Some(self.created_at.cmp(&other.created_at)),
            _ => None,
        }
    }

    fn default_order(&self, other: &Self) -> Ordering {
        self.end_time.cmp(&other.end_time)
    }

    fn id_order(&self, other: &Self) -> Ordering {
        self.id.cmp(&other.id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bidflare_core::{AccountRole, ItemId};
    use chrono::Utc;

    #[test]
    fn test_every_sortable_field_compares() {
        let account = Account::new("a".into(), "a@example.com".into(), "h".into(), AccountRole::Buyer);
        for field in ResourceKind::Accounts.sortable_fields() {
            assert!(account.compare_field(&account, field).is_some(), "{field}");
        }

        let auction = Auction::open(ItemId::new(), Utc::now());
        for field in ResourceKind::Auctions.sortable_fields() {
            assert!(auction.compare_field(&auction, field).is_some(), "{field}");
        }
    }

    #[test]
    fn test_matches_rejects_other_kind() {
        let auction = Auction::open(ItemId::new(), Utc::now());
        assert!(auction.matches(&FilterValue::Closed(false)).unwrap());
        assert!(auction.matches(&FilterValue::Role(AccountRole::Admin)).is_err());
    }
}
