use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::borrow::Cow;
use std::fmt;
use validator::{Validate, ValidationError};

/// Prospective tenant as seen by the matching engine
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
#[validate(schema(function = "validate_tenant_figures"))]
pub struct Tenant {
    #[validate(length(min = 1))]
    pub id: String,
    #[serde(default)]
    #[validate(nested)]
    pub preferences: TenantPreferences,
    #[serde(rename = "currentCity", default)]
    pub current_city: Option<String>,
    #[serde(rename = "profileCompleteness", default)]
    #[validate(range(min = 0.0, max = 100.0))]
    pub profile_completeness: f64,
    #[serde(rename = "isVerified", default)]
    pub is_verified: bool,
    #[serde(rename = "hasVideo", default)]
    pub has_video: bool,
    #[serde(default)]
    pub documents: Vec<Document>,
    #[serde(default)]
    pub references: Vec<Reference>,
    #[serde(rename = "employmentType", default)]
    pub employment_type: Option<EmploymentType>,
    #[serde(rename = "annualIncome", default)]
    pub annual_income: Option<f64>,
    #[serde(rename = "employmentStartDate", default)]
    pub employment_start_date: Option<NaiveDate>,
    #[serde(rename = "availableFrom", default)]
    pub available_from: Option<NaiveDate>,
}

impl Tenant {
    /// Move-in date, preferring the one stated in the search preferences
    pub fn effective_available_from(&self) -> Option<NaiveDate> {
        self.preferences.available_from.or(self.available_from)
    }

    pub fn verified_documents(&self) -> usize {
        self.documents
            .iter()
            .filter(|doc| doc.status == DocumentStatus::Verified)
            .count()
    }

    pub fn verified_references(&self) -> usize {
        self.references.iter().filter(|r| r.is_verified).count()
    }
}

fn validate_tenant_figures(tenant: &Tenant) -> Result<(), ValidationError> {
    if !tenant.profile_completeness.is_finite() {
        return Err(invalid("profile_completeness", "profile completeness must be a finite number"));
    }
    if let Some(income) = tenant.annual_income {
        if !income.is_finite() {
            return Err(invalid("annual_income", "annual income must be a finite amount"));
        }
    }
    Ok(())
}

/// What the tenant is looking for
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
#[validate(schema(function = "validate_preference_figures"))]
pub struct TenantPreferences {
    #[serde(rename = "maxBudget", default)]
    pub max_budget: Option<f64>,
    #[serde(rename = "minRooms", default)]
    pub min_rooms: Option<u32>,
    #[serde(rename = "maxRooms", default)]
    pub max_rooms: Option<u32>,
    #[serde(rename = "preferredCities", default)]
    pub preferred_cities: Vec<String>,
    #[serde(rename = "hasPets", default)]
    pub has_pets: bool,
    #[serde(rename = "smokingAllowed", default)]
    pub smoking_allowed: Option<bool>,
    #[serde(default)]
    pub furnished: Option<FurnishedPreference>,
    #[serde(rename = "availableFrom", default)]
    pub available_from: Option<NaiveDate>,
}

/// Only non-finite amounts are rejected: an inverted room range or a
/// negative budget still scores, through the room penalties and the
/// bottom budget tier.
fn validate_preference_figures(prefs: &TenantPreferences) -> Result<(), ValidationError> {
    if let Some(budget) = prefs.max_budget {
        if !budget.is_finite() {
            return Err(invalid("max_budget", "max budget must be a finite amount"));
        }
    }
    Ok(())
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FurnishedPreference {
    Yes,
    No,
    Indifferent,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Document {
    pub status: DocumentStatus,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DocumentStatus {
    Pending,
    Verified,
    Rejected,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Reference {
    #[serde(rename = "isVerified", default)]
    pub is_verified: bool,
}

/// Contract type, as declared on the tenant profile
///
/// Unrecognised values deserialize as `Other` and score like a missing type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EmploymentType {
    Permanent,
    Freelance,
    FixedTerm,
    Retired,
    Student,
    Internship,
    Unemployed,
    #[serde(other)]
    Other,
}

/// Rental listing published by an agency
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[validate(schema(function = "validate_listing_amounts"))]
pub struct Listing {
    #[validate(length(min = 1))]
    pub id: String,
    #[validate(nested)]
    pub address: Address,
    /// Monthly rent
    #[validate(range(min = 0.0))]
    pub price: f64,
    /// Monthly extra charges
    #[serde(default)]
    pub expenses: Option<f64>,
    pub rooms: u32,
    pub furnished: ListingFurnishing,
    #[serde(rename = "petsAllowed")]
    pub pets_allowed: bool,
    #[serde(rename = "smokingAllowed")]
    pub smoking_allowed: bool,
    #[serde(rename = "availableFrom", default)]
    pub available_from: Option<NaiveDate>,
}

impl Listing {
    /// Rent plus extra charges
    pub fn total_cost(&self) -> f64 {
        self.price + self.expenses.unwrap_or(0.0)
    }
}

fn validate_listing_amounts(listing: &Listing) -> Result<(), ValidationError> {
    if !listing.price.is_finite() {
        return Err(invalid("price", "price must be a finite amount"));
    }
    if let Some(expenses) = listing.expenses {
        if !expenses.is_finite() || expenses < 0.0 {
            return Err(invalid("expenses", "expenses must be a non-negative amount"));
        }
    }
    Ok(())
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct Address {
    #[validate(length(min = 1))]
    pub city: String,
    #[serde(default)]
    pub street: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ListingFurnishing {
    Yes,
    No,
    Partial,
}

fn invalid(code: &'static str, message: &'static str) -> ValidationError {
    let mut err = ValidationError::new(code);
    err.message = Some(Cow::Borrowed(message));
    err
}

/// Per-factor sub-scores, each in 0..=100
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScoreBreakdown {
    pub budget: f64,
    pub location: f64,
    pub reliability: f64,
    pub employment: f64,
    pub preferences: f64,
    pub availability: f64,
}

/// Qualitative band for a composite score
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MatchLabel {
    Basso,
    Sufficiente,
    Buono,
    Ottimo,
    Eccellente,
}

impl MatchLabel {
    pub fn as_str(&self) -> &'static str {
        match self {
            MatchLabel::Eccellente => "Eccellente",
            MatchLabel::Ottimo => "Ottimo",
            MatchLabel::Buono => "Buono",
            MatchLabel::Sufficiente => "Sufficiente",
            MatchLabel::Basso => "Basso",
        }
    }

    /// Presentation hint for badges
    pub fn color(&self) -> &'static str {
        match self {
            MatchLabel::Eccellente => "#16a34a",
            MatchLabel::Ottimo => "#65a30d",
            MatchLabel::Buono => "#ca8a04",
            MatchLabel::Sufficiente => "#ea580c",
            MatchLabel::Basso => "#dc2626",
        }
    }
}

impl fmt::Display for MatchLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Outcome of matching one tenant against one listing
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatchResult {
    #[serde(rename = "tenantId")]
    pub tenant_id: String,
    #[serde(rename = "listingId")]
    pub listing_id: String,
    pub score: u8,
    pub breakdown: ScoreBreakdown,
    pub label: MatchLabel,
    pub color: String,
    #[serde(rename = "isDealbreaker")]
    pub is_dealbreaker: bool,
    pub dealbreakers: Vec<String>,
}

/// Tenant record annotated with its match against a listing
#[derive(Debug, Clone, Serialize)]
pub struct RankedTenant {
    #[serde(flatten)]
    pub tenant: Tenant,
    #[serde(rename = "matchScore")]
    pub match_score: u8,
    #[serde(rename = "matchLabel")]
    pub match_label: MatchLabel,
    #[serde(rename = "isDealbreaker")]
    pub is_dealbreaker: bool,
    pub dealbreakers: Vec<String>,
}

/// Scoring weights, expressed as percentages of the composite
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScoringWeights {
    pub budget: f64,
    pub location: f64,
    pub reliability: f64,
    pub employment: f64,
    pub preferences: f64,
    pub availability: f64,
}

impl ScoringWeights {
    pub fn total(&self) -> f64 {
        self.budget
            + self.location
            + self.reliability
            + self.employment
            + self.preferences
            + self.availability
    }

    pub(crate) fn named(&self) -> [(&'static str, f64); 6] {
        [
            ("budget", self.budget),
            ("location", self.location),
            ("reliability", self.reliability),
            ("employment", self.employment),
            ("preferences", self.preferences),
            ("availability", self.availability),
        ]
    }
}

impl Default for ScoringWeights {
    fn default() -> Self {
        Self {
            budget: 25.0,
            location: 20.0,
            reliability: 20.0,
            employment: 15.0,
            preferences: 10.0,
            availability: 10.0,
        }
    }
}
