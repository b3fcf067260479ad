// Unit tests for Rent Match

use chrono::NaiveDate;
use rent_match::core::{
    days_apart, detect_dealbreakers, label_for_score, score_availability, score_budget,
    score_employment, score_location, score_preferences, score_reliability, years_between,
};
use rent_match::models::{
    Address, Document, DocumentStatus, EmploymentType, FurnishedPreference, Listing,
    ListingFurnishing, MatchLabel, Reference, Tenant,
};

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn listing(city: &str, price: f64, expenses: Option<f64>) -> Listing {
    Listing {
        id: "listing".to_string(),
        address: Address {
            city: city.to_string(),
            street: None,
        },
        price,
        expenses,
        rooms: 2,
        furnished: ListingFurnishing::No,
        pets_allowed: false,
        smoking_allowed: true,
        available_from: Some(date(2024, 10, 1)),
    }
}

fn tenant() -> Tenant {
    Tenant {
        id: "tenant".to_string(),
        ..Tenant::default()
    }
}

#[test]
fn test_budget_first_tier_wins() {
    let listing = listing("Torino", 830.0, None);
    let mut tenant = tenant();

    tenant.preferences.max_budget = Some(1000.0);
    assert_eq!(score_budget(&tenant, &listing), 100.0);

    tenant.preferences.max_budget = Some(830.0);
    assert_eq!(score_budget(&tenant, &listing), 85.0);

    tenant.preferences.max_budget = Some(0.0);
    assert_eq!(score_budget(&tenant, &listing), 10.0);
}

#[test]
fn test_budget_counts_expenses() {
    let mut tenant = tenant();
    tenant.preferences.max_budget = Some(950.0);

    assert_eq!(score_budget(&tenant, &listing("Torino", 950.0, None)), 85.0);
    assert_eq!(score_budget(&tenant, &listing("Torino", 950.0, Some(100.0))), 60.0);
}

#[test]
fn test_location_current_city_fallback() {
    let listing = listing("Torino", 800.0, None);
    let mut tenant = tenant();
    tenant.preferences.preferred_cities = vec!["Milano".to_string()];
    tenant.current_city = Some("torino".to_string());

    assert_eq!(score_location(&tenant, &listing), 80.0);

    tenant.current_city = None;
    assert_eq!(score_location(&tenant, &listing), 20.0);
}

#[test]
fn test_reliability_verified_documents_only() {
    let mut tenant = tenant();
    tenant.documents = vec![
        Document {
            status: DocumentStatus::Rejected,
        },
        Document {
            status: DocumentStatus::Pending,
        },
    ];
    tenant.references = vec![Reference { is_verified: false }];

    assert_eq!(score_reliability(&tenant), 0.0);

    tenant.is_verified = true;
    tenant.has_video = true;
    assert_eq!(score_reliability(&tenant), 35.0);
}

#[test]
fn test_employment_full_marks() {
    let mut tenant = tenant();
    tenant.employment_type = Some(EmploymentType::Permanent);
    tenant.annual_income = Some(40_000.0);
    tenant.employment_start_date = Some(date(2015, 3, 1));

    assert_eq!(score_employment(&tenant, date(2024, 6, 1)), 100.0);
}

#[test]
fn test_employment_future_start_earns_no_tenure() {
    let mut tenant = tenant();
    tenant.employment_type = Some(EmploymentType::Internship);
    tenant.annual_income = Some(15_000.0);
    tenant.employment_start_date = Some(date(2024, 9, 1));

    // 15 stability + 10 income
    assert_eq!(score_employment(&tenant, date(2024, 6, 1)), 25.0);
}

#[test]
fn test_room_penalties_apply_independently() {
    let mut listing = listing("Torino", 800.0, None);
    let mut tenant = tenant();
    tenant.preferences.min_rooms = Some(3);
    assert_eq!(score_preferences(&tenant, &listing), 80.0);

    listing.rooms = 5;
    tenant.preferences.min_rooms = None;
    tenant.preferences.max_rooms = Some(4);
    assert_eq!(score_preferences(&tenant, &listing), 90.0);
}

#[test]
fn test_smoking_penalty() {
    let mut listing = listing("Torino", 800.0, None);
    let mut tenant = tenant();
    tenant.preferences.smoking_allowed = Some(true);
    assert_eq!(score_preferences(&tenant, &listing), 100.0);

    listing.smoking_allowed = false;
    assert_eq!(score_preferences(&tenant, &listing), 70.0);

    tenant.preferences.smoking_allowed = Some(false);
    assert_eq!(score_preferences(&tenant, &listing), 100.0);
}

#[test]
fn test_furnished_indifferent_never_penalised() {
    let listing = listing("Torino", 800.0, None);
    let mut tenant = tenant();
    tenant.preferences.furnished = Some(FurnishedPreference::Indifferent);

    assert_eq!(score_preferences(&tenant, &listing), 100.0);
}

#[test]
fn test_availability_direction_irrelevant() {
    let listing = listing("Torino", 800.0, None);
    let mut tenant = tenant();

    tenant.available_from = Some(date(2024, 9, 21));
    let early = score_availability(&tenant, &listing);
    tenant.available_from = Some(date(2024, 10, 11));
    let late = score_availability(&tenant, &listing);

    assert_eq!(early, 80.0);
    assert_eq!(early, late);
}

#[test]
fn test_dealbreakers_ignore_penalised_subscore() {
    let listing = listing("Torino", 800.0, None);
    let mut tenant = tenant();
    tenant.preferences.furnished = Some(FurnishedPreference::Yes);
    tenant.preferences.min_rooms = Some(4);

    // Heavy preference penalties alone are not a dealbreaker
    assert_eq!(score_preferences(&tenant, &listing), 60.0);
    assert!(detect_dealbreakers(&tenant, &listing).is_empty());
}

#[test]
fn test_calendar_helpers() {
    assert_eq!(days_apart(date(2024, 1, 1), date(2023, 12, 25)), 7);
    assert!(years_between(date(2023, 6, 1), date(2024, 6, 1)) > 0.99);
}

#[test]
fn test_label_boundaries() {
    assert_eq!(label_for_score(70), MatchLabel::Ottimo);
    assert_eq!(label_for_score(69), MatchLabel::Buono);
    assert_eq!(label_for_score(0), MatchLabel::Basso);
    assert_eq!(MatchLabel::Basso.to_string(), "Basso");
}
