//! Rent Match - tenant-listing matching engine for the rental marketplace
//!
//! This library scores how well a prospective tenant fits a rental listing,
//! flags hard incompatibilities ("dealbreakers") and ranks tenant pools.
//! The engine is pure: it reads plain records and returns plain results.

pub mod config;
pub mod core;
pub mod models;
pub mod routes;

// Re-export commonly used types
pub use crate::core::{calculate_match, calculate_tenant_score, rank_tenants_by_match, MatchError, Matcher};
pub use crate::models::{Listing, MatchLabel, MatchResult, RankedTenant, ScoreBreakdown, ScoringWeights, Tenant};
