//! ORDER BY clauses built from a whitelist of sortable columns.

use bidflare_core::{BidflareError, BidflareResult, ResourceKind, Sort};

/// Maps a wire sort field to its column for the given kind.
fn column(kind: ResourceKind, field: &str) -> Option<&'static str> {
    match (kind, field) {
        (ResourceKind::Accounts, "name") => Some("name"),
        (ResourceKind::Accounts, "email") => Some("email"),
        (ResourceKind::Accounts, "role") => Some("role"),
        (ResourceKind::Items, "title") => Some("title"),
        (ResourceKind::Items, "startingPrice") => Some("starting_price"),
        (ResourceKind::Items, "status") => Some("status"),
        (ResourceKind::Auctions, "endTime") => Some("end_time"),
        (ResourceKind::Auctions, "lastPrice") => Some("last_price"),
        (_, "createdAt") => Some("created_at"),
        (ResourceKind::Accounts | ResourceKind::Items, "updatedAt") => Some("updated_at"),
        _ => None,
    }
}

/// Builds the ORDER BY clause, always ending with `id` so paging is stable.
pub(crate) fn order_by(kind: ResourceKind, sort: Option<&Sort>) -> BidflareResult<String> {
    let Some(sort) = sort else {
        return Ok(match kind {
            ResourceKind::Accounts | ResourceKind::Items => "ORDER BY created_at DESC, id ASC",
            ResourceKind::Auctions => "ORDER BY end_time ASC, id ASC",
        }
        .to_string());
    };

    let column = column(kind, &sort.field).ok_or_else(|| {
        BidflareError::invalid_page(format!("Cannot sort {} by '{}'", kind, sort.field))
    })?;

    Ok(format!("ORDER BY {} {}, id ASC", column, sort.direction.as_sql()))
}
