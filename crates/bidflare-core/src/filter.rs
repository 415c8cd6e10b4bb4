//! Filter values used to select a subset of one resource kind.

use crate::{AccountRole, BidflareError, BidflareResult, ItemStatus};
use serde::{Deserialize, Serialize};
use std::fmt;

/// The three resource kinds exposed to administrators.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[serde(rename_all = "lowercase")]
pub enum ResourceKind {
    /// Marketplace accounts, filtered by role.
    Accounts,
    /// Listed items, filtered by lifecycle status.
    Items,
    /// Auctions, filtered by the closed flag.
    Auctions,
}

impl ResourceKind {
    /// Returns the persisted field the filter compares against.
    #[must_use]
    pub const fn discriminant_field(&self) -> &'static str {
        match self {
            Self::Accounts => "role",
            Self::Items => "status",
            Self::Auctions => "is_closed",
        }
    }

    /// Returns the wire names of the fields a listing may be sorted by.
    #[must_use]
    pub const fn sortable_fields(&self) -> &'static [&'static str] {
        match self {
            Self::Accounts => &["name", "email", "role", "createdAt", "updatedAt"],
            Self::Items => &["title", "startingPrice", "status", "createdAt", "updatedAt"],
            Self::Auctions => &["endTime", "lastPrice", "createdAt"],
        }
    }

    /// Returns all resource kinds.
    #[must_use]
    pub const fn all() -> [Self; 3] {
        [Self::Accounts, Self::Items, Self::Auctions]
    }
}

impl fmt::Display for ResourceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Accounts => write!(f, "accounts"),
            Self::Items => write!(f, "items"),
            Self::Auctions => write!(f, "auctions"),
        }
    }
}

/// A single equality predicate, one variant per resource kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "kind", content = "value", rename_all = "lowercase")]
pub enum FilterValue {
    /// Select accounts with this role.
    Role(AccountRole),
    /// Select items in this status.
    Status(ItemStatus),
    /// Select auctions whose closed flag equals this value.
    Closed(bool),
}

impl FilterValue {
    /// Returns the resource kind this filter targets.
    #[must_use]
    pub const fn kind(&self) -> ResourceKind {
        match self {
            Self::Role(_) => ResourceKind::Accounts,
            Self::Status(_) => ResourceKind::Items,
            Self::Closed(_) => ResourceKind::Auctions,
        }
    }

    /// Parses a raw transport value for the given resource kind.
    ///
    /// Auction flags accept the usual boolean spellings (`true`/`false`,
    /// `1`/`0`, `yes`/`no`, `on`/`off`) in any case. Values outside the
    /// kind's permitted set are rejected with
    /// [`BidflareError::InvalidFilterValue`].
    pub fn parse(kind: ResourceKind, raw: &str) -> BidflareResult<Self> {
        match kind {
            ResourceKind::Accounts => raw.parse().map(Self::Role),
            ResourceKind::Items => raw.parse().map(Self::Status),
            ResourceKind::Auctions => match raw.trim().to_ascii_lowercase().as_str() {
                "true" | "1" | "yes" | "on" => Ok(Self::Closed(true)),
                "false" | "0" | "no" | "off" => Ok(Self::Closed(false)),
                _ => Err(BidflareError::invalid_filter(kind, raw)),
            },
        }
    }

    /// Returns the role, or `InvalidFilterValue` if this filter targets another kind.
    pub fn expect_role(&self) -> BidflareResult<AccountRole> {
        match self {
            Self::Role(role) => Ok(*role),
            other => Err(BidflareError::invalid_filter(ResourceKind::Accounts, other)),
        }
    }

    /// Returns the status, or `InvalidFilterValue` if this filter targets another kind.
    pub fn expect_status(&self) -> BidflareResult<ItemStatus> {
        match self {
            Self::Status(status) => Ok(*status),
            other => Err(BidflareError::invalid_filter(ResourceKind::Items, other)),
        }
    }

    /// Returns the closed flag, or `InvalidFilterValue` if this filter targets another kind.
    pub fn expect_closed(&self) -> BidflareResult<bool> {
        match self {
            Self::Closed(closed) => Ok(*closed),
            other => Err(BidflareError::invalid_filter(ResourceKind::Auctions, other)),
        }
    }
}

impl fmt::Display for FilterValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Role(role) => write!(f, "role={}", role),
            Self::Status(status) => write!(f, "status={}", status),
            Self::Closed(closed) => write!(f, "is_closed={}", closed),
        }
    }
}

impl From<AccountRole> for FilterValue {
    fn from(role: AccountRole) -> Self {
        Self::Role(role)
    }
}

impl From<ItemStatus> for FilterValue {
    fn from(status: ItemStatus) -> Self {
        Self::Status(status)
    }
}

impl From<bool> for FilterValue {
    fn from(closed: bool) -> Self {
        Self::Closed(closed)
    }
}
