//! Account view.

use bidflare_core::{AccountId, AccountRole};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Outward representation of an account.
///
/// Carries no credential material.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct AccountView {
    pub id: AccountId,
    pub name: String,
    pub email: String,
    pub role: AccountRole,
}
