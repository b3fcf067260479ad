use serde::{Deserialize, Serialize};
use crate::models::domain::{MatchLabel, RankedTenant};

/// Response for the tenant score endpoint
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TenantScoreResponse {
    #[serde(rename = "tenantId")]
    pub tenant_id: String,
    pub score: u8,
    pub label: MatchLabel,
}

/// Response for the ranking endpoint
#[derive(Debug, Clone, Serialize)]
pub struct RankTenantsResponse {
    pub rankings: Vec<RankedTenant>,
    #[serde(rename = "totalCandidates")]
    pub total_candidates: usize,
    #[serde(rename = "excludedDealbreakers")]
    pub excluded_dealbreakers: usize,
}

/// Health check response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub timestamp: chrono::DateTime<chrono::Utc>,
}

/// Error response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
    pub message: String,
    #[serde(rename = "statusCode")]
    pub status_code: u16,
}
