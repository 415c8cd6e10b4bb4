//! Account entity.

use super::super::value_objects::AccountRole;
use crate::{AccountId, Entity};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

/// Marketplace account as stored by the persistence layer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
pub struct Account {
    /// Unique identifier for the account.
    pub id: AccountId,

    /// Display name.
    #[validate(length(min = 1, max = 128))]
    pub name: String,

    /// Login email address.
    #[validate(email)]
    pub email: String,

    /// Hashed password (never exposed via API).
    #[serde(skip_serializing)]
    pub password_hash: String,

    /// Account role.
    pub role: AccountRole,

    /// Account creation timestamp.
    pub created_at: DateTime<Utc>,

    /// Last update timestamp.
    pub updated_at: DateTime<Utc>,
}

impl Account {
    /// Creates a new account with the given details.
    #[must_use]
    pub fn new(name: String, email: String, password_hash: String, role: AccountRole) -> Self {
        let now = Utc::now();
        Self {
            id: AccountId::new(),
            name,
            email,
            password_hash,
            role,
            created_at: now,
            updated_at: now,
        }
    }
}

impl Entity<AccountId> for Account {
    fn id(&self) -> &AccountId {
        &self.id
    }

    fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }
}
