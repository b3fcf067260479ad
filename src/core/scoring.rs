use chrono::NaiveDate;

use crate::core::calendar::{days_apart, years_between};
use crate::models::{
    EmploymentType, FurnishedPreference, Listing, ListingFurnishing, MatchLabel, Tenant,
};

/// Budget score when the tenant has not stated a budget
pub const NEUTRAL_BUDGET_SCORE: f64 = 50.0;
/// Bottom affordability tier, also the trigger for the budget dealbreaker
pub const OUT_OF_BUDGET_SCORE: f64 = 10.0;
/// Preferred cities given but neither they nor the current city match
pub const LOCATION_MISMATCH_SCORE: f64 = 20.0;
/// Availability score when either move-in date is unknown
pub const NEUTRAL_AVAILABILITY_SCORE: f64 = 70.0;

/// (budget / total cost factor, score), checked in order
const BUDGET_TIERS: [(f64, f64); 4] = [(1.2, 100.0), (1.0, 85.0), (0.9, 60.0), (0.8, 30.0)];

/// Contract stability, out of 100
pub const STABILITY_TABLE: [(EmploymentType, f64); 7] = [
    (EmploymentType::Permanent, 100.0),
    (EmploymentType::Freelance, 70.0),
    (EmploymentType::FixedTerm, 60.0),
    (EmploymentType::Retired, 80.0),
    (EmploymentType::Student, 40.0),
    (EmploymentType::Internship, 30.0),
    (EmploymentType::Unemployed, 10.0),
];
const DEFAULT_STABILITY: f64 = 10.0;

/// (minimum annual income, points)
const INCOME_TIERS: [(f64, f64); 3] = [(40_000.0, 30.0), (25_000.0, 20.0), (15_000.0, 10.0)];

/// (minimum years in the job, points); any positive tenure earns 5
const TENURE_TIERS: [(f64, f64); 3] = [(5.0, 20.0), (2.0, 15.0), (1.0, 10.0)];

/// (maximum days apart, score)
const AVAILABILITY_TIERS: [(i64, f64); 4] = [(7, 100.0), (30, 80.0), (60, 60.0), (90, 40.0)];

/// (minimum composite score, label), checked in order
pub const LABEL_THRESHOLDS: [(u8, MatchLabel); 4] = [
    (85, MatchLabel::Eccellente),
    (70, MatchLabel::Ottimo),
    (55, MatchLabel::Buono),
    (40, MatchLabel::Sufficiente),
];

/// Affordability of the listing's total monthly cost
pub fn score_budget(tenant: &Tenant, listing: &Listing) -> f64 {
    let Some(max_budget) = tenant.preferences.max_budget else {
        return NEUTRAL_BUDGET_SCORE;
    };

    let total_cost = listing.total_cost();

    BUDGET_TIERS
        .iter()
        .find(|(factor, _)| max_budget >= total_cost * factor)
        .map(|&(_, score)| score)
        .unwrap_or(OUT_OF_BUDGET_SCORE)
}

/// City compatibility, compared case-insensitively
pub fn score_location(tenant: &Tenant, listing: &Listing) -> f64 {
    let listing_city = listing.address.city.to_lowercase();
    let in_current_city = tenant
        .current_city
        .as_deref()
        .is_some_and(|city| city.to_lowercase() == listing_city);

    let preferred = &tenant.preferences.preferred_cities;
    if preferred.is_empty() {
        return if in_current_city { 90.0 } else { 50.0 };
    }

    if preferred.iter().any(|city| city.to_lowercase() == listing_city) {
        100.0
    } else if in_current_city {
        80.0
    } else {
        LOCATION_MISMATCH_SCORE
    }
}

/// Profile trustworthiness: completeness, verification, video, documents and references
pub fn score_reliability(tenant: &Tenant) -> f64 {
    let completeness = (tenant.profile_completeness / 100.0 * 30.0).min(30.0);
    let verified = if tenant.is_verified { 20.0 } else { 0.0 };
    let video = if tenant.has_video { 15.0 } else { 0.0 };
    let documents = (tenant.verified_documents() as f64 * 5.0).min(20.0);
    let references = (tenant.verified_references() as f64 * 7.5).min(15.0);

    (completeness + verified + video + documents + references).clamp(0.0, 100.0)
}

/// Job and income stability as of `today`
pub fn score_employment(tenant: &Tenant, today: NaiveDate) -> f64 {
    let stability = stability_of(tenant.employment_type) * 0.5;

    let income = tenant
        .annual_income
        .and_then(|income| {
            INCOME_TIERS
                .iter()
                .find(|(floor, _)| income >= *floor)
                .map(|&(_, points)| points)
        })
        .unwrap_or(0.0);

    let tenure = tenant
        .employment_start_date
        .map(|start| tenure_points(years_between(start, today)))
        .unwrap_or(0.0);

    (stability + income + tenure).clamp(0.0, 100.0)
}

/// Stability rating for a contract type; unknown or missing types rate lowest
pub fn stability_of(employment_type: Option<EmploymentType>) -> f64 {
    employment_type
        .and_then(|kind| {
            STABILITY_TABLE
                .iter()
                .find(|(entry, _)| *entry == kind)
                .map(|&(_, stability)| stability)
        })
        .unwrap_or(DEFAULT_STABILITY)
}

#[inline]
fn tenure_points(years: f64) -> f64 {
    TENURE_TIERS
        .iter()
        .find(|(min_years, _)| years >= *min_years)
        .map(|&(_, points)| points)
        .unwrap_or(if years > 0.0 { 5.0 } else { 0.0 })
}

/// Soft-preference fit: starts at 100 and loses points per conflict
pub fn score_preferences(tenant: &Tenant, listing: &Listing) -> f64 {
    let prefs = &tenant.preferences;
    let mut score = 100.0;

    if prefs.has_pets && !listing.pets_allowed {
        score -= 50.0;
    }

    if prefs.smoking_allowed == Some(true) && !listing.smoking_allowed {
        score -= 30.0;
    }

    // Unfurnished when furnished was wanted hurts more than the reverse
    match (prefs.furnished, listing.furnished) {
        (Some(FurnishedPreference::Yes), ListingFurnishing::No) => score -= 20.0,
        (Some(FurnishedPreference::No), ListingFurnishing::Yes) => score -= 10.0,
        _ => {}
    }

    if prefs.min_rooms.is_some_and(|min| listing.rooms < min) {
        score -= 20.0;
    }
    if prefs.max_rooms.is_some_and(|max| listing.rooms > max) {
        score -= 10.0;
    }

    f64::max(score, 0.0)
}

/// Move-in date compatibility
pub fn score_availability(tenant: &Tenant, listing: &Listing) -> f64 {
    let (Some(tenant_date), Some(listing_date)) =
        (tenant.effective_available_from(), listing.available_from)
    else {
        return NEUTRAL_AVAILABILITY_SCORE;
    };

    let diff_days = days_apart(tenant_date, listing_date);

    AVAILABILITY_TIERS
        .iter()
        .find(|(max_days, _)| diff_days <= *max_days)
        .map(|&(_, score)| score)
        .unwrap_or(20.0)
}

/// Label band for a composite score
pub fn label_for_score(score: u8) -> MatchLabel {
    LABEL_THRESHOLDS
        .iter()
        .find(|(min, _)| score >= *min)
        .map(|&(_, label)| label)
        .unwrap_or(MatchLabel::Basso)
}

/// Round half up to an integer score in 0..=100
///
/// The weighted sum is snapped to 1e-9 first so float noise such as
/// `84.49999999999999` still rounds as the exact `84.5` it stands for.
pub fn round_score(value: f64) -> u8 {
    let snapped = (value * 1e9).round() / 1e9;
    (snapped + 0.5).floor().clamp(0.0, 100.0) as u8
}
