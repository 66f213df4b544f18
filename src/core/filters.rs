use crate::models::{Profile, SearchCriteria};

/// Check if a profile satisfies every criterion that was supplied
///
/// Absent criteria impose no constraint, so an empty [`SearchCriteria`]
/// accepts every profile.
#[inline]
pub fn matches_criteria(profile: &Profile, criteria: &SearchCriteria) -> bool {
    let attributes = &profile.attributes;

    // Gender is compared exactly, case included
    if let Some(gender) = &criteria.gender {
        if attributes.gender != *gender {
            return false;
        }
    }

    if !matches_age_range(attributes.age, criteria.min_age, criteria.max_age) {
        return false;
    }

    if let Some(religion) = &criteria.religion {
        if !equals_ignore_case(&attributes.religion, religion) {
            return false;
        }
    }

    if let Some(city) = &criteria.city {
        if !equals_ignore_case(&attributes.city, city) {
            return false;
        }
    }

    true
}

/// Inclusive age bounds
#[inline]
pub fn matches_age_range(age: u8, min_age: Option<u32>, max_age: Option<u32>) -> bool {
    let age = u32::from(age);

    if min_age.is_some_and(|min| age < min) {
        return false;
    }

    if max_age.is_some_and(|max| age > max) {
        return false;
    }

    true
}

/// Case-insensitive exact match; a blank stored value never matches
#[inline]
pub fn equals_ignore_case(stored: &str, wanted: &str) -> bool {
    !stored.trim().is_empty() && stored.to_lowercase() == wanted.to_lowercase()
}
