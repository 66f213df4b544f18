//! Outbound views of stored records
//!
//! Stored records are never serialized directly. Each record type has exactly
//! one projection that copies the fields a caller may see, so a field added to
//! a record stays private until it is added here.

use crate::models::{Account, AccountId, Profile, ProfileAttributes, ProfileId};
use chrono::{DateTime, Utc};
use serde::Serialize;

/// Account as shown to its own holder. Never carries the credential.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AccountView {
    pub id: AccountId,
    pub email: String,
    pub name: String,
    pub created_at: DateTime<Utc>,
}

impl From<&Account> for AccountView {
    fn from(account: &Account) -> Self {
        Self {
            id: account.id,
            email: account.email.clone(),
            name: account.name.clone(),
            created_at: account.created_at,
        }
    }
}

/// Profile as shown to a viewer
///
/// `account_id` is only present when the viewer owns the profile.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfileView {
    pub id: ProfileId,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub account_id: Option<AccountId>,
    #[serde(flatten)]
    pub attributes: ProfileAttributes,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl ProfileView {
    pub fn project(profile: &Profile, viewer: Option<AccountId>) -> Self {
        let owned = viewer.is_some_and(|viewer| profile.is_owned_by(viewer));

        Self {
            id: profile.id,
            account_id: owned.then_some(profile.account_id),
            attributes: profile.attributes.clone(),
            created_at: profile.created_at,
            updated_at: profile.updated_at,
        }
    }

    pub fn project_all(profiles: &[Profile], viewer: Option<AccountId>) -> Vec<Self> {
        profiles
            .iter()
            .map(|profile| Self::project(profile, viewer))
            .collect()
    }
}
