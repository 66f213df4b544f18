// Criterion benchmarks for Matrimony Match

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use matrimony_match::core::filters::matches_criteria;
use matrimony_match::models::{Credential, ProfileAttributes, SearchCriteria};
use matrimony_match::{ProfileQueryEngine, RecordStore};
use std::collections::HashMap;
use std::sync::Arc;

const RELIGIONS: [&str; 4] = ["Hindu", "Muslim", "Christian", "Sikh"];
const CITIES: [&str; 5] = ["Mumbai", "Pune", "Delhi", "Chennai", "Kochi"];

fn create_attributes(i: usize) -> ProfileAttributes {
    ProfileAttributes {
        name: format!("Member {}", i),
        age: 21 + (i % 20) as u8,
        gender: if i % 2 == 0 { "Female" } else { "Male" }.to_string(),
        religion: RELIGIONS[i % RELIGIONS.len()].to_string(),
        caste: None,
        education: "Graduate".to_string(),
        occupation: "Engineer".to_string(),
        income: None,
        height_cm: Some(150 + (i % 40) as u16),
        marital_status: "Never Married".to_string(),
        city: CITIES[i % CITIES.len()].to_string(),
        state: "State".to_string(),
        country: "India".to_string(),
        about_me: None,
        hobbies: None,
        expectations: None,
    }
}

fn populate_store(count: usize) -> Arc<RecordStore> {
    let store = Arc::new(RecordStore::new());
    for i in 0..count {
        let account = store
            .create_account(&format!("member{}@example.com", i), Credential::new("x"), "Member")
            .unwrap();
        store.create_profile(account.id, create_attributes(i)).unwrap();
    }
    store
}

fn create_criteria() -> SearchCriteria {
    SearchCriteria {
        gender: Some("Female".to_string()),
        min_age: Some(25),
        max_age: Some(35),
        religion: Some("hindu".to_string()),
        city: Some("pune".to_string()),
    }
}

fn bench_matches_criteria(c: &mut Criterion) {
    let store = populate_store(1);
    let profile = store.list_profiles().remove(0);
    let criteria = create_criteria();

    c.bench_function("matches_criteria", |b| {
        b.iter(|| matches_criteria(black_box(&profile), black_box(&criteria)));
    });
}

fn bench_search(c: &mut Criterion) {
    let criteria = create_criteria();

    let mut group = c.benchmark_group("search");

    for profile_count in [10, 50, 100, 500, 1000].iter() {
        let engine = ProfileQueryEngine::new(populate_store(*profile_count));

        group.bench_with_input(
            BenchmarkId::new("all_criteria", profile_count),
            profile_count,
            |b, _| {
                b.iter(|| engine.search(black_box(&criteria)));
            },
        );

        group.bench_with_input(
            BenchmarkId::new("no_criteria", profile_count),
            profile_count,
            |b, _| {
                b.iter(|| engine.search(black_box(&SearchCriteria::default())));
            },
        );
    }

    group.finish();
}

fn bench_criteria_parsing(c: &mut Criterion) {
    let params: HashMap<String, String> = [
        ("gender", "Female"),
        ("minAge", "25"),
        ("maxAge", "35"),
        ("religion", "Hindu"),
        ("city", "Pune"),
    ]
    .into_iter()
    .map(|(key, value)| (key.to_string(), value.to_string()))
    .collect();

    c.bench_function("criteria_from_params", |b| {
        b.iter(|| SearchCriteria::from_params(black_box(&params)));
    });
}

criterion_group!(benches, bench_matches_criteria, bench_search, bench_criteria_parsing);

criterion_main!(benches);
