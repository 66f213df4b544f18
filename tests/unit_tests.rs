// Unit tests for Matrimony Match

use chrono::Utc;
use matrimony_match::core::{
    filters::{equals_ignore_case, matches_age_range, matches_criteria},
    AccountView, ProfileView,
};
use matrimony_match::models::{
    Account, AccountId, Credential, Profile, ProfileAttributes, ProfileId, ProfilePatch,
    SearchCriteria,
};
use std::collections::HashMap;

fn create_test_attributes() -> ProfileAttributes {
    ProfileAttributes {
        name: "Kavya".to_string(),
        age: 27,
        gender: "Female".to_string(),
        religion: "Hindu".to_string(),
        caste: Some("Nair".to_string()),
        education: "MBBS".to_string(),
        occupation: "Doctor".to_string(),
        income: Some("15 LPA".to_string()),
        height_cm: Some(162),
        marital_status: "Never Married".to_string(),
        city: "Kochi".to_string(),
        state: "Kerala".to_string(),
        country: "India".to_string(),
        about_me: Some("Loves music".to_string()),
        hobbies: Some("Veena, trekking".to_string()),
        expectations: None,
    }
}

fn create_test_profile(id: u64, owner: u64) -> Profile {
    Profile {
        id: ProfileId(id),
        account_id: AccountId(owner),
        attributes: create_test_attributes(),
        created_at: Utc::now(),
        updated_at: Utc::now(),
    }
}

#[test]
fn test_patch_changes_only_supplied_fields() {
    let current = create_test_attributes();
    let patch = ProfilePatch {
        city: Some("Pune".to_string()),
        ..Default::default()
    };

    let merged = patch.apply(&current);

    assert_eq!(merged.city, "Pune");
    assert_eq!(
        ProfileAttributes {
            city: current.city.clone(),
            ..merged
        },
        current
    );
}

#[test]
fn test_patch_blank_optional_clears_it() {
    let current = create_test_attributes();
    let patch = ProfilePatch {
        caste: Some(String::new()),
        hobbies: Some("Chess".to_string()),
        ..Default::default()
    };

    let merged = patch.apply(&current);

    assert_eq!(merged.caste, None);
    assert_eq!(merged.hobbies.as_deref(), Some("Chess"));
    assert_eq!(merged.income, current.income);
}

#[test]
fn test_empty_patch_is_identity() {
    let current = create_test_attributes();
    let patch = ProfilePatch::default();

    assert_eq!(patch.apply(&current), current);
}

#[test]
fn test_patch_ignores_unknown_fields() {
    let patch: ProfilePatch = serde_json::from_value(serde_json::json!({
        "city": "Delhi",
        "userId": 99,
        "accountId": 99,
        "createdAt": "2020-01-01T00:00:00Z"
    }))
    .unwrap();

    assert_eq!(
        patch,
        ProfilePatch {
            city: Some("Delhi".to_string()),
            ..Default::default()
        }
    );
}

#[test]
fn test_attributes_deserialize_from_camel_case() {
    let attributes: ProfileAttributes = serde_json::from_value(serde_json::json!({
        "name": "Arjun",
        "age": 31,
        "gender": "Male",
        "religion": "Sikh",
        "education": "B.Com",
        "occupation": "Accountant",
        "height": 178,
        "maritalStatus": "Divorced",
        "city": "Amritsar",
        "state": "Punjab",
        "country": "India",
        "aboutMe": "Family first"
    }))
    .unwrap();

    assert_eq!(attributes.marital_status, "Divorced");
    assert_eq!(attributes.height_cm, Some(178));
    assert_eq!(attributes.about_me.as_deref(), Some("Family first"));
    assert_eq!(attributes.caste, None);
    assert_eq!(attributes.missing_required(), None);
}

#[test]
fn test_attributes_accept_numbers_sent_as_text() {
    let attributes: ProfileAttributes = serde_json::from_value(serde_json::json!({
        "name": "Meera",
        "age": "28",
        "gender": "Female",
        "religion": "Jain",
        "caste": "",
        "education": "CA",
        "occupation": "Auditor",
        "income": "",
        "height": "",
        "maritalStatus": "Never Married",
        "city": "Ahmedabad",
        "state": "Gujarat",
        "country": "India",
        "aboutMe": "",
        "hobbies": "",
        "expectations": ""
    }))
    .unwrap();

    assert_eq!(attributes.age, 28);
    assert_eq!(attributes.height_cm, None);

    let patch: ProfilePatch =
        serde_json::from_value(serde_json::json!({ "age": " 31 ", "height": "170" })).unwrap();
    assert_eq!(patch.age, Some(31));
    assert_eq!(patch.height_cm, Some(170));
}

#[test]
fn test_attributes_reject_non_numeric_age() {
    let mut body = serde_json::to_value(create_test_attributes()).unwrap();

    for age in [serde_json::json!("twenty"), serde_json::json!(""), serde_json::json!(300)] {
        body["age"] = age;
        let err = serde_json::from_value::<ProfileAttributes>(body.clone()).unwrap_err();
        assert!(err.to_string().contains("age"));
    }

    let err = serde_json::from_value::<ProfilePatch>(serde_json::json!({ "height": "tall" }))
        .unwrap_err();
    assert!(err.to_string().contains("height must be a whole number"));
}

#[test]
fn test_missing_required_reports_first_blank_field() {
    let mut attributes = create_test_attributes();
    attributes.occupation = " ".to_string();
    attributes.country = String::new();

    assert_eq!(attributes.missing_required(), Some("occupation"));
}

#[test]
fn test_profile_view_hides_owner_from_others() {
    let profile = create_test_profile(5, 9);

    let anonymous = serde_json::to_value(ProfileView::project(&profile, None)).unwrap();
    let stranger =
        serde_json::to_value(ProfileView::project(&profile, Some(AccountId(1)))).unwrap();
    let owner = serde_json::to_value(ProfileView::project(&profile, Some(AccountId(9)))).unwrap();

    assert!(anonymous.get("accountId").is_none());
    assert!(stranger.get("accountId").is_none());
    assert_eq!(owner["accountId"], 9);
}

#[test]
fn test_profile_view_flattens_attributes() {
    let profile = create_test_profile(5, 9);
    let json = serde_json::to_value(ProfileView::project(&profile, None)).unwrap();

    assert_eq!(json["id"], 5);
    assert_eq!(json["name"], "Kavya");
    assert_eq!(json["maritalStatus"], "Never Married");
    assert_eq!(json["height"], 162);
    assert!(json.get("createdAt").is_some());
    assert!(json.get("updatedAt").is_some());
    assert!(json.get("attributes").is_none());
}

#[test]
fn test_account_view_never_carries_credential() {
    let account = Account {
        id: AccountId(1),
        email: "kavya@example.com".to_string(),
        credential: Credential::new("$argon2id$v=19$secret"),
        name: "Kavya".to_string(),
        created_at: Utc::now(),
    };

    let json = serde_json::to_string(&AccountView::from(&account)).unwrap();

    assert!(!json.contains("argon2"));
    assert!(!json.contains("credential"));
    assert!(!format!("{:?}", account).contains("argon2"));
}

#[test]
fn test_criteria_from_params() {
    let params: HashMap<String, String> = [
        ("minAge", "30"),
        ("maxAge", "40"),
        ("religion", "hindu"),
        ("sort", "age"),
    ]
    .into_iter()
    .map(|(key, value)| (key.to_string(), value.to_string()))
    .collect();

    let criteria = SearchCriteria::from_params(&params).unwrap();

    assert_eq!(criteria.min_age, Some(30));
    assert_eq!(criteria.max_age, Some(40));
    assert_eq!(criteria.religion.as_deref(), Some("hindu"));
    assert_eq!(criteria.gender, None);
}

#[test]
fn test_matches_criteria_conjunction() {
    let profile = create_test_profile(1, 1);

    let matching = SearchCriteria {
        gender: Some("Female".to_string()),
        min_age: Some(27),
        max_age: Some(27),
        religion: Some("HINDU".to_string()),
        city: Some("kochi".to_string()),
    };
    assert!(matches_criteria(&profile, &matching));

    let wrong_city = SearchCriteria {
        city: Some("Koch".to_string()),
        ..matching.clone()
    };
    assert!(!matches_criteria(&profile, &wrong_city));
}

#[test]
fn test_age_range_helpers() {
    assert!(matches_age_range(18, Some(18), None));
    assert!(!matches_age_range(17, Some(18), None));
    assert!(!matches_age_range(60, None, Some(59)));
}

#[test]
fn test_equals_ignore_case_is_exact() {
    assert!(equals_ignore_case("Hindu", "hindu"));
    assert!(!equals_ignore_case("Hindu", "hin"));
    assert!(!equals_ignore_case("", ""));
}
