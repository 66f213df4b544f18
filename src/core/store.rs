use crate::core::error::{CoreError, CoreResult};
use crate::models::{
    Account, AccountId, Credential, MatchRequest, MatchRequestId, MatchStatus, Profile,
    ProfileAttributes, ProfileId, ProfilePatch, StoreStats,
};
use chrono::{DateTime, Duration, Utc};
use parking_lot::RwLock;

/// Append-only collection with monotonic id allocation
#[derive(Debug)]
struct Table<T> {
    next_id: u64,
    rows: Vec<T>,
}

impl<T> Default for Table<T> {
    fn default() -> Self {
        Self {
            next_id: 1,
            rows: Vec::new(),
        }
    }
}

impl<T> Table<T> {
    fn allocate(&mut self) -> u64 {
        let id = self.next_id;
        self.next_id += 1;
        id
    }
}

/// In-memory owner of accounts, profiles and match requests
///
/// Each collection sits behind its own lock, and ids are allocated under the
/// write lock of the collection they belong to. When more than one lock is
/// needed they are taken in the order accounts, profiles, match requests.
///
/// Lookups hand out clones; records are never mutated from outside the store.
#[derive(Debug, Default)]
pub struct RecordStore {
    accounts: RwLock<Table<Account>>,
    profiles: RwLock<Table<Profile>>,
    match_requests: RwLock<Table<MatchRequest>>,
}

impl RecordStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an account
    ///
    /// Email comparison is case-sensitive, so `A@x.com` and `a@x.com` are two
    /// different accounts.
    pub fn create_account(
        &self,
        email: &str,
        credential: Credential,
        name: &str,
    ) -> CoreResult<Account> {
        if email.trim().is_empty() {
            return Err(CoreError::missing_field("email"));
        }
        if name.trim().is_empty() {
            return Err(CoreError::missing_field("name"));
        }

        let mut accounts = self.accounts.write();
        if accounts.rows.iter().any(|account| account.email == email) {
            return Err(CoreError::Conflict(format!(
                "an account with email {} already exists",
                email
            )));
        }

        let account = Account {
            id: AccountId(accounts.allocate()),
            email: email.to_string(),
            credential,
            name: name.to_string(),
            created_at: Utc::now(),
        };
        accounts.rows.push(account.clone());

        tracing::debug!("Created account {}", account.id);
        Ok(account)
    }

    pub fn find_account_by_email(&self, email: &str) -> Option<Account> {
        self.accounts
            .read()
            .rows
            .iter()
            .find(|account| account.email == email)
            .cloned()
    }

    pub fn find_account_by_id(&self, id: AccountId) -> Option<Account> {
        self.accounts
            .read()
            .rows
            .iter()
            .find(|account| account.id == id)
            .cloned()
    }

    /// Create the profile of `account_id`
    ///
    /// An account owns at most one profile; a second attempt is a conflict.
    pub fn create_profile(
        &self,
        account_id: AccountId,
        attributes: ProfileAttributes,
    ) -> CoreResult<Profile> {
        let attributes = attributes.normalized();
        if let Some(field) = attributes.missing_required() {
            return Err(CoreError::missing_field(field));
        }
        if self.find_account_by_id(account_id).is_none() {
            return Err(CoreError::NotFound(format!("account {}", account_id)));
        }

        let mut profiles = self.profiles.write();
        if profiles.rows.iter().any(|profile| profile.account_id == account_id) {
            return Err(CoreError::Conflict(format!(
                "account {} already has a profile",
                account_id
            )));
        }

        let now = Utc::now();
        let profile = Profile {
            id: ProfileId(profiles.allocate()),
            account_id,
            attributes,
            created_at: now,
            updated_at: now,
        };
        profiles.rows.push(profile.clone());

        tracing::debug!("Created profile {} for account {}", profile.id, account_id);
        Ok(profile)
    }

    pub fn find_profile_by_id(&self, id: ProfileId) -> Option<Profile> {
        self.profiles
            .read()
            .rows
            .iter()
            .find(|profile| profile.id == id)
            .cloned()
    }

    pub fn find_profile_by_account_id(&self, account_id: AccountId) -> Option<Profile> {
        self.profiles
            .read()
            .rows
            .iter()
            .find(|profile| profile.account_id == account_id)
            .cloned()
    }

    /// All profiles in insertion order
    pub fn list_profiles(&self) -> Vec<Profile> {
        self.profiles.read().rows.clone()
    }

    /// Profiles accepted by `predicate`, in insertion order
    pub fn filter_profiles<F>(&self, predicate: F) -> Vec<Profile>
    where
        F: Fn(&Profile) -> bool,
    {
        self.profiles
            .read()
            .rows
            .iter()
            .filter(|profile| predicate(profile))
            .cloned()
            .collect()
    }

    /// Merge `patch` into profile `id` without an ownership check
    pub fn update_profile(&self, id: ProfileId, patch: &ProfilePatch) -> CoreResult<Profile> {
        self.modify_profile(id, None, patch)
    }

    /// Merge `patch` into profile `id` on behalf of `requester`
    ///
    /// Fails with [`CoreError::Authorization`] unless `requester` owns the
    /// profile. The check and the write happen under the same lock.
    pub fn update_profile_as(
        &self,
        requester: AccountId,
        id: ProfileId,
        patch: &ProfilePatch,
    ) -> CoreResult<Profile> {
        self.modify_profile(id, Some(requester), patch)
    }

    fn modify_profile(
        &self,
        id: ProfileId,
        requester: Option<AccountId>,
        patch: &ProfilePatch,
    ) -> CoreResult<Profile> {
        let mut profiles = self.profiles.write();
        let profile = profiles
            .rows
            .iter_mut()
            .find(|profile| profile.id == id)
            .ok_or_else(|| CoreError::NotFound(format!("profile {}", id)))?;

        if let Some(requester) = requester {
            if !profile.is_owned_by(requester) {
                return Err(CoreError::Authorization(format!(
                    "account {} does not own profile {}",
                    requester, id
                )));
            }
        }

        let attributes = patch.apply(&profile.attributes);
        if let Some(field) = attributes.missing_required() {
            return Err(CoreError::missing_field(field));
        }

        profile.attributes = attributes;
        profile.updated_at = next_timestamp(profile.updated_at);

        Ok(profile.clone())
    }

    pub fn create_match_request(
        &self,
        requester_id: AccountId,
        target_id: AccountId,
        profile_id: ProfileId,
    ) -> MatchRequest {
        let mut match_requests = self.match_requests.write();
        let request = MatchRequest {
            id: MatchRequestId(match_requests.allocate()),
            requester_id,
            target_id,
            profile_id,
            status: MatchStatus::Pending,
            created_at: Utc::now(),
        };
        match_requests.rows.push(request.clone());

        tracing::debug!(
            "Created match request {}: {} -> {} (profile {})",
            request.id,
            requester_id,
            target_id,
            profile_id
        );
        request
    }

    /// Requests where `account_id` is the requester or the target, in insertion order
    pub fn find_match_requests_for_account(&self, account_id: AccountId) -> Vec<MatchRequest> {
        self.match_requests
            .read()
            .rows
            .iter()
            .filter(|request| request.involves(account_id))
            .cloned()
            .collect()
    }

    pub fn stats(&self) -> StoreStats {
        StoreStats {
            accounts: self.accounts.read().rows.len(),
            profiles: self.profiles.read().rows.len(),
            match_requests: self.match_requests.read().rows.len(),
        }
    }
}

/// Current time, strictly later than `previous`
fn next_timestamp(previous: DateTime<Utc>) -> DateTime<Utc> {
    let now = Utc::now();
    if now > previous {
        now
    } else {
        previous + Duration::microseconds(1)
    }
}
