// Model exports
pub mod domain;
pub mod requests;
pub mod responses;

pub use domain::{
    Address, Document, DocumentStatus, EmploymentType, FurnishedPreference, Listing,
    ListingFurnishing, MatchLabel, MatchResult, RankedTenant, Reference, ScoreBreakdown,
    ScoringWeights, Tenant, TenantPreferences,
};
pub use requests::{MatchRequest, RankTenantsRequest, TenantScoreRequest};
pub use responses::{ErrorResponse, HealthResponse, RankTenantsResponse, TenantScoreResponse};
