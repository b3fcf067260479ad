use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::models::domain::{Listing, Tenant};

/// Request to match one tenant against one listing
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct MatchRequest {
    #[validate(nested)]
    pub tenant: Tenant,
    #[validate(nested)]
    pub listing: Listing,
}

/// Request for the listing-independent tenant score
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct TenantScoreRequest {
    #[validate(nested)]
    pub tenant: Tenant,
}

/// Request to rank a tenant pool against a listing
///
/// Individual tenants are validated by the engine, which names the
/// offending record in its error.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct RankTenantsRequest {
    #[validate(length(max = 1000))]
    pub tenants: Vec<Tenant>,
    #[validate(nested)]
    pub listing: Listing,
    #[serde(rename = "excludeDealbreakers", default)]
    pub exclude_dealbreakers: bool,
    #[serde(default)]
    pub limit: Option<usize>,
}
