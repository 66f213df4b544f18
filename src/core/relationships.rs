use crate::core::error::{CoreError, CoreResult};
use crate::core::store::RecordStore;
use crate::models::{AccountId, MatchRequest, ProfileId};
use std::sync::Arc;

/// Directed interest requests between accounts
///
/// A request always targets the owner of a profile, resolved through the
/// store. Repeated requests for the same profile are recorded as separate
/// entries and every request stays pending.
#[derive(Debug, Clone)]
pub struct RelationshipTracker {
    store: Arc<RecordStore>,
}

impl RelationshipTracker {
    pub fn new(store: Arc<RecordStore>) -> Self {
        Self { store }
    }

    /// Record interest of `requester_id` in profile `profile_id`
    pub fn send_interest(
        &self,
        requester_id: AccountId,
        profile_id: ProfileId,
    ) -> CoreResult<MatchRequest> {
        let target = self
            .store
            .find_profile_by_id(profile_id)
            .ok_or_else(|| CoreError::NotFound(format!("profile {}", profile_id)))?;

        Ok(self
            .store
            .create_match_request(requester_id, target.account_id, profile_id))
    }

    /// Requests sent or received by `account_id`
    pub fn requests_for(&self, account_id: AccountId) -> Vec<MatchRequest> {
        self.store.find_match_requests_for_account(account_id)
    }
}
