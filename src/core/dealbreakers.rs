use crate::core::scoring::{
    score_budget, score_location, LOCATION_MISMATCH_SCORE, OUT_OF_BUDGET_SCORE,
};
use crate::models::{Listing, Tenant};

pub const PETS_NOT_ALLOWED: &str = "Animali non ammessi";
pub const BUDGET_INSUFFICIENT: &str = "Budget insufficiente rispetto al canone";
pub const LOCATION_NOT_PREFERRED: &str = "Località non nelle preferenze";
pub const SMOKING_NOT_ALLOWED: &str = "Fumo non consentito";

/// Hard incompatibilities between a tenant and a listing
///
/// Evaluated against the raw records, not the penalised preference
/// sub-score, so a conflict is always reported whatever the blended score.
/// Every rule is checked; several can apply at once.
pub fn detect_dealbreakers(tenant: &Tenant, listing: &Listing) -> Vec<String> {
    let mut reasons = Vec::new();

    if tenant.preferences.has_pets && !listing.pets_allowed {
        reasons.push(PETS_NOT_ALLOWED.to_string());
    }

    if score_budget(tenant, listing) == OUT_OF_BUDGET_SCORE {
        reasons.push(BUDGET_INSUFFICIENT.to_string());
    }

    if score_location(tenant, listing) == LOCATION_MISMATCH_SCORE {
        reasons.push(LOCATION_NOT_PREFERRED.to_string());
    }

    if tenant.preferences.smoking_allowed == Some(true) && !listing.smoking_allowed {
        reasons.push(SMOKING_NOT_ALLOWED.to_string());
    }

    reasons
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Address, ListingFurnishing};

    fn create_test_tenant() -> Tenant {
        Tenant {
            id: "tenant".to_string(),
            current_city: Some("Bologna".to_string()),
            ..Tenant::default()
        }
    }

    fn create_test_listing() -> Listing {
        Listing {
            id: "listing".to_string(),
            address: Address {
                city: "Bologna".to_string(),
                street: None,
            },
            price: 750.0,
            expenses: Some(80.0),
            rooms: 2,
            furnished: ListingFurnishing::Yes,
            pets_allowed: false,
            smoking_allowed: false,
            available_from: None,
        }
    }

    #[test]
    fn test_no_dealbreakers_for_sparse_tenant() {
        let tenant = create_test_tenant();
        let listing = create_test_listing();

        assert!(detect_dealbreakers(&tenant, &listing).is_empty());
    }

    #[test]
    fn test_pets_dealbreaker() {
        let mut tenant = create_test_tenant();
        tenant.preferences.has_pets = true;

        let reasons = detect_dealbreakers(&tenant, &create_test_listing());
        assert_eq!(reasons, vec![PETS_NOT_ALLOWED]);
    }

    #[test]
    fn test_budget_dealbreaker_only_on_bottom_tier() {
        let listing = create_test_listing();
        let mut tenant = create_test_tenant();

        // 700 is in the 30 tier (>= 830 * 0.8)
        tenant.preferences.max_budget = Some(700.0);
        assert!(detect_dealbreakers(&tenant, &listing).is_empty());

        tenant.preferences.max_budget = Some(500.0);
        assert_eq!(detect_dealbreakers(&tenant, &listing), vec![BUDGET_INSUFFICIENT]);
    }

    #[test]
    fn test_location_dealbreaker_requires_preferences() {
        let listing = create_test_listing();
        let mut tenant = create_test_tenant();
        tenant.current_city = Some("Parma".to_string());

        // No preferred cities means a neutral location score, not a mismatch
        assert!(detect_dealbreakers(&tenant, &listing).is_empty());

        tenant.preferences.preferred_cities = vec!["Modena".to_string()];
        assert_eq!(detect_dealbreakers(&tenant, &listing), vec![LOCATION_NOT_PREFERRED]);
    }

    #[test]
    fn test_multiple_dealbreakers() {
        let listing = create_test_listing();
        let mut tenant = create_test_tenant();
        tenant.preferences.has_pets = true;
        tenant.preferences.smoking_allowed = Some(true);
        tenant.preferences.max_budget = Some(100.0);
        tenant.preferences.preferred_cities = vec!["Milano".to_string()];
        tenant.current_city = None;

        let reasons = detect_dealbreakers(&tenant, &listing);
        assert_eq!(
            reasons,
            vec![
                PETS_NOT_ALLOWED,
                BUDGET_INSUFFICIENT,
                LOCATION_NOT_PREFERRED,
                SMOKING_NOT_ALLOWED
            ]
        );
    }
}
