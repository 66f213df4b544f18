use chrono::{DateTime, Utc};
use serde::{de, Deserialize, Deserializer, Serialize};
use serde_json::Value;
use std::fmt;
use validator::Validate;

macro_rules! record_id {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(pub u64);

        impl $name {
            pub fn get(self) -> u64 {
                self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }
    };
}

record_id!(
    /// Identifier of an [`Account`]
    AccountId
);
record_id!(
    /// Identifier of a [`Profile`]
    ProfileId
);
record_id!(
    /// Identifier of a [`MatchRequest`]
    MatchRequestId
);

/// Stored login credential. Opaque to the store; never serialized.
#[derive(Clone, PartialEq, Eq)]
pub struct Credential(String);

impl Credential {
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for Credential {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Credential(<redacted>)")
    }
}

/// Authenticated identity that can own a profile and send interest requests
#[derive(Debug, Clone, PartialEq)]
pub struct Account {
    pub id: AccountId,
    pub email: String,
    pub credential: Credential,
    pub name: String,
    pub created_at: DateTime<Utc>,
}

/// Descriptive attributes of a matrimonial profile
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct ProfileAttributes {
    #[validate(length(min = 1))]
    pub name: String,
    #[serde(deserialize_with = "deserialize_age")]
    pub age: u8,
    #[validate(length(min = 1))]
    pub gender: String,
    #[validate(length(min = 1))]
    pub religion: String,
    #[serde(default)]
    pub caste: Option<String>,
    #[validate(length(min = 1))]
    pub education: String,
    #[validate(length(min = 1))]
    pub occupation: String,
    #[serde(default)]
    pub income: Option<String>,
    #[serde(rename = "height", default, deserialize_with = "deserialize_height")]
    pub height_cm: Option<u16>,
    #[validate(length(min = 1))]
    pub marital_status: String,
    #[validate(length(min = 1))]
    pub city: String,
    #[validate(length(min = 1))]
    pub state: String,
    #[validate(length(min = 1))]
    pub country: String,
    #[serde(default)]
    pub about_me: Option<String>,
    #[serde(default)]
    pub hobbies: Option<String>,
    #[serde(default)]
    pub expectations: Option<String>,
}

impl ProfileAttributes {
    /// Name of the first required attribute that is blank, if any
    pub fn missing_required(&self) -> Option<&'static str> {
        [
            ("name", &self.name),
            ("gender", &self.gender),
            ("religion", &self.religion),
            ("education", &self.education),
            ("occupation", &self.occupation),
            ("maritalStatus", &self.marital_status),
            ("city", &self.city),
            ("state", &self.state),
            ("country", &self.country),
        ]
        .into_iter()
        .find(|(_, value)| value.trim().is_empty())
        .map(|(field, _)| field)
    }

    /// Store blank optional attributes as absent
    pub fn normalized(mut self) -> Self {
        for field in [
            &mut self.caste,
            &mut self.income,
            &mut self.about_me,
            &mut self.hobbies,
            &mut self.expectations,
        ] {
            if field.as_deref().is_some_and(|value| value.trim().is_empty()) {
                *field = None;
            }
        }
        self
    }
}

/// Partial update of [`ProfileAttributes`]
///
/// Only the fields listed here can change through an update; anything else in
/// the incoming payload is dropped at deserialization. An empty string on an
/// optional attribute clears it.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct ProfilePatch {
    #[validate(length(min = 1))]
    pub name: Option<String>,
    #[serde(default, deserialize_with = "deserialize_optional_age")]
    pub age: Option<u8>,
    #[validate(length(min = 1))]
    pub gender: Option<String>,
    #[validate(length(min = 1))]
    pub religion: Option<String>,
    pub caste: Option<String>,
    #[validate(length(min = 1))]
    pub education: Option<String>,
    #[validate(length(min = 1))]
    pub occupation: Option<String>,
    pub income: Option<String>,
    #[serde(rename = "height", default, deserialize_with = "deserialize_height")]
    pub height_cm: Option<u16>,
    #[validate(length(min = 1))]
    pub marital_status: Option<String>,
    #[validate(length(min = 1))]
    pub city: Option<String>,
    #[validate(length(min = 1))]
    pub state: Option<String>,
    #[validate(length(min = 1))]
    pub country: Option<String>,
    pub about_me: Option<String>,
    pub hobbies: Option<String>,
    pub expectations: Option<String>,
}

impl ProfilePatch {
    /// Merge this patch over `current`, returning the new attribute set
    pub fn apply(&self, current: &ProfileAttributes) -> ProfileAttributes {
        fn pick(patched: &Option<String>, current: &str) -> String {
            patched.clone().unwrap_or_else(|| current.to_string())
        }

        fn pick_optional(patched: &Option<String>, current: &Option<String>) -> Option<String> {
            match patched {
                Some(value) if value.trim().is_empty() => None,
                Some(value) => Some(value.clone()),
                None => current.clone(),
            }
        }

        ProfileAttributes {
            name: pick(&self.name, &current.name),
            age: self.age.unwrap_or(current.age),
            gender: pick(&self.gender, &current.gender),
            religion: pick(&self.religion, &current.religion),
            caste: pick_optional(&self.caste, &current.caste),
            education: pick(&self.education, &current.education),
            occupation: pick(&self.occupation, &current.occupation),
            income: pick_optional(&self.income, &current.income),
            height_cm: self.height_cm.or(current.height_cm),
            marital_status: pick(&self.marital_status, &current.marital_status),
            city: pick(&self.city, &current.city),
            state: pick(&self.state, &current.state),
            country: pick(&self.country, &current.country),
            about_me: pick_optional(&self.about_me, &current.about_me),
            hobbies: pick_optional(&self.hobbies, &current.hobbies),
            expectations: pick_optional(&self.expectations, &current.expectations),
        }
    }
}

// Web forms submit numbers as text, so `28` and `"28"` are both accepted.
// Blank text counts as absent.
fn whole_number<T, E>(value: Value, field: &str) -> Result<Option<T>, E>
where
    T: TryFrom<u64>,
    E: de::Error,
{
    let number = match &value {
        Value::Null => return Ok(None),
        Value::Number(number) => number.as_u64(),
        Value::String(text) if text.trim().is_empty() => return Ok(None),
        Value::String(text) => text.trim().parse::<u64>().ok(),
        _ => None,
    };

    number
        .and_then(|number| T::try_from(number).ok())
        .map(Some)
        .ok_or_else(|| E::custom(format!("{} must be a whole number, got {}", field, value)))
}

fn deserialize_age<'de, D>(deserializer: D) -> Result<u8, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    whole_number::<u8, D::Error>(value, "age")?
        .ok_or_else(|| de::Error::custom("age is required"))
}

fn deserialize_optional_age<'de, D>(deserializer: D) -> Result<Option<u8>, D::Error>
where
    D: Deserializer<'de>,
{
    whole_number(Value::deserialize(deserializer)?, "age")
}

fn deserialize_height<'de, D>(deserializer: D) -> Result<Option<u16>, D::Error>
where
    D: Deserializer<'de>,
{
    whole_number(Value::deserialize(deserializer)?, "height")
}

/// Matrimonial listing owned by exactly one account
#[derive(Debug, Clone, PartialEq)]
pub struct Profile {
    pub id: ProfileId,
    pub account_id: AccountId,
    pub attributes: ProfileAttributes,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Profile {
    pub fn is_owned_by(&self, account_id: AccountId) -> bool {
        self.account_id == account_id
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MatchStatus {
    Pending,
}

/// One-directional expression of interest toward the owner of a profile
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MatchRequest {
    pub id: MatchRequestId,
    pub requester_id: AccountId,
    pub target_id: AccountId,
    pub profile_id: ProfileId,
    pub status: MatchStatus,
    pub created_at: DateTime<Utc>,
}

impl MatchRequest {
    pub fn involves(&self, account_id: AccountId) -> bool {
        self.requester_id == account_id || self.target_id == account_id
    }
}

/// Optional profile filters; every supplied field must hold for a match
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchCriteria {
    pub gender: Option<String>,
    pub min_age: Option<u32>,
    pub max_age: Option<u32>,
    pub religion: Option<String>,
    pub city: Option<String>,
}

impl SearchCriteria {
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}

/// Collection sizes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StoreStats {
    pub accounts: usize,
    pub profiles: usize,
    pub match_requests: usize,
}
