//! Entity-to-view projectors.
//!
//! Each projector is a `From` impl, so it also gets
//! [`Projection::project_page`](bidflare_core::Projection::project_page).
//! Fields not named here never leave the service layer.

use crate::dto::{AccountView, AuctionView, ItemView};
use bidflare_core::{Account, Auction, Item};

impl From<Account> for AccountView {
    fn from(account: Account) -> Self {
        Self {
            id: account.id,
            name: account.name,
            email: account.email,
            role: account.role,
        }
    }
}

impl From<Item> for ItemView {
    fn from(item: Item) -> Self {
        Self {
            id: item.id,
            title: item.title,
            description: item.description,
            starting_price: item.starting_price,
            status: item.status,
            seller_id: item.seller_id,
            category_id: item.category_id,
            created_at: item.created_at,
            updated_at: item.updated_at,
        }
    }
}

impl From<Auction> for AuctionView {
    fn from(auction: Auction) -> Self {
        Self {
            id: auction.id,
            product_id: auction.item_id,
            last_price: auction.last_price,
            end_time: auction.end_time,
            closed: auction.is_closed,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bidflare_core::{AccountId, AccountRole, CategoryId, ItemId, ItemStatus, Page, Projection};
    use chrono::{Duration, Utc};

    #[test]
    fn test_account_view_hides_password_hash() {
        let account = Account::new(
            "Ada".to_string(),
            "ada@example.com".to_string(),
            "$argon2id$secret".to_string(),
            AccountRole::Admin,
        );
        let id = account.id;

        let view = AccountView::project(account);
        assert_eq!(view.id, id);
        assert_eq!(view.role, AccountRole::Admin);

        let json = serde_json::to_string(&view).unwrap();
        assert!(!json.contains("argon2"));
        assert!(!json.to_lowercase().contains("password"));
    }

    #[test]
    fn test_item_view_copies_visible_fields() {
        let item = Item::new(
            "Gramophone".to_string(),
            "HMV model 101".to_string(),
            12_500,
            AccountId::new(),
            CategoryId::new(),
        )
        .with_status(ItemStatus::Listed);

        let view = ItemView::from(item.clone());
        assert_eq!(view.id, item.id);
        assert_eq!(view.starting_price, 12_500);
        assert_eq!(view.seller_id, item.seller_id);
        assert_eq!(view.category_id, item.category_id);
        assert_eq!(view.created_at, item.created_at);

        let json = serde_json::to_value(&view).unwrap();
        assert_eq!(json["startingPrice"], 12_500);
        assert_eq!(json["status"], "LISTED");
        assert!(json.get("sellerId").is_some());
    }

    #[test]
    fn test_auction_view_renames_item_and_hides_version() {
        let mut auction = Auction::open(ItemId::new(), Utc::now() + Duration::hours(4));
        auction.version = 7;
        auction.bid_count = 2;
        auction.last_price = Some(900);

        let view = AuctionView::from(auction.clone());
        assert_eq!(view.product_id, auction.item_id);
        assert_eq!(view.last_price, Some(900));
        assert!(!view.closed);

        let json = serde_json::to_value(&view).unwrap();
        assert!(json.get("productId").is_some());
        assert!(json.get("version").is_none());
        assert!(json.get("bidCount").is_none());
    }

    #[test]
    fn test_projection_is_deterministic() {
        let auction = Auction::open(ItemId::new(), Utc::now()).closed();
        assert_eq!(AuctionView::project(auction.clone()), AuctionView::project(auction));
    }

    #[test]
    fn test_project_page_keeps_order_and_metadata() {
        let auctions: Vec<Auction> = (0..3)
            .map(|i| Auction::open(ItemId::new(), Utc::now() + Duration::hours(i)))
            .collect();
        let ids: Vec<_> = auctions.iter().map(|a| a.id).collect();
        let page = Page::new(auctions, 2, 3, 11);
        let info = page.info;

        let views = AuctionView::project_page(page);
        assert_eq!(views.info, info);
        assert_eq!(views.content.iter().map(|v| v.id).collect::<Vec<_>>(), ids);
    }
}
