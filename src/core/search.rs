use crate::core::error::{CoreError, CoreResult};
use crate::core::filters::matches_criteria;
use crate::core::store::RecordStore;
use crate::models::{Profile, SearchCriteria};
use std::collections::HashMap;
use std::sync::Arc;

impl SearchCriteria {
    /// Build criteria from flat query parameters
    ///
    /// Recognised keys are `gender`, `minAge`, `maxAge`, `religion` and `city`.
    /// Unknown keys are ignored and blank values count as absent. Ages must be
    /// non-negative integers.
    pub fn from_params(params: &HashMap<String, String>) -> CoreResult<Self> {
        let text = |key: &str| {
            params
                .get(key)
                .filter(|value| !value.trim().is_empty())
                .cloned()
        };

        let age = |key: &str| -> CoreResult<Option<u32>> {
            text(key)
                .map(|value| {
                    value.trim().parse::<u32>().map_err(|_| {
                        CoreError::Validation(format!(
                            "{} must be a non-negative integer, got {:?}",
                            key, value
                        ))
                    })
                })
                .transpose()
        };

        Ok(Self {
            gender: text("gender"),
            min_age: age("minAge")?,
            max_age: age("maxAge")?,
            religion: text("religion"),
            city: text("city"),
        })
    }
}

/// Profile search over the record store
///
/// A full scan: every profile satisfying the criteria is returned in insertion
/// order, with no ranking and no pagination.
#[derive(Debug, Clone)]
pub struct ProfileQueryEngine {
    store: Arc<RecordStore>,
}

impl ProfileQueryEngine {
    pub fn new(store: Arc<RecordStore>) -> Self {
        Self { store }
    }

    pub fn search(&self, criteria: &SearchCriteria) -> Vec<Profile> {
        if criteria.is_empty() {
            return self.store.list_profiles();
        }

        self.store
            .filter_profiles(|profile| matches_criteria(profile, criteria))
    }
}
