use chrono::NaiveDate;
use thiserror::Error;
use validator::{Validate, ValidationErrors};

use crate::core::{
    calendar::today,
    dealbreakers::detect_dealbreakers,
    scoring::{
        label_for_score, round_score, score_availability, score_budget, score_employment,
        score_location, score_preferences, score_reliability,
    },
};
use crate::models::{Listing, MatchResult, RankedTenant, ScoreBreakdown, ScoringWeights, Tenant};

/// Errors raised before any scoring takes place
#[derive(Debug, Error)]
pub enum MatchError {
    #[error("invalid tenant '{id}': {source}")]
    InvalidTenant {
        id: String,
        source: ValidationErrors,
    },

    #[error("invalid listing '{id}': {source}")]
    InvalidListing {
        id: String,
        source: ValidationErrors,
    },
}

/// Rejected weight tables
#[derive(Debug, Error, PartialEq)]
pub enum WeightsError {
    #[error("weight '{0}' must be a finite, non-negative number")]
    InvalidWeight(&'static str),

    #[error("weights must sum to 100, got {0}")]
    InvalidTotal(f64),
}

/// Post-ranking filters used by callers that want a shortlist
#[derive(Debug, Clone, Copy, Default)]
pub struct RankOptions {
    pub exclude_dealbreakers: bool,
    pub limit: Option<usize>,
}

/// Ranked pool together with bookkeeping about what was cut
#[derive(Debug)]
pub struct Ranking {
    pub tenants: Vec<RankedTenant>,
    pub total_candidates: usize,
    pub excluded_dealbreakers: usize,
}

/// Tenant-listing matching engine
///
/// Holds nothing but a validated weight table, so it is cheap to clone and
/// safe to share between workers. Every method is a pure function of its
/// arguments; the `*_at` variants take the reference date used for
/// employment tenure instead of reading the clock.
#[derive(Debug, Clone)]
pub struct Matcher {
    weights: ScoringWeights,
}

impl Matcher {
    pub fn new(weights: ScoringWeights) -> Result<Self, WeightsError> {
        for (name, weight) in weights.named() {
            if !weight.is_finite() || weight < 0.0 {
                return Err(WeightsError::InvalidWeight(name));
            }
        }

        let total = weights.total();
        if (total - 100.0).abs() > 1e-6 {
            return Err(WeightsError::InvalidTotal(total));
        }

        Ok(Self { weights })
    }

    pub fn with_default_weights() -> Self {
        Self {
            weights: ScoringWeights::default(),
        }
    }

    pub fn weights(&self) -> &ScoringWeights {
        &self.weights
    }

    pub fn calculate_match(&self, tenant: &Tenant, listing: &Listing) -> Result<MatchResult, MatchError> {
        self.calculate_match_at(tenant, listing, today())
    }

    /// Score one tenant against one listing
    ///
    /// Fails only when a record is malformed; missing optional fields fall
    /// back to neutral sub-scores.
    pub fn calculate_match_at(
        &self,
        tenant: &Tenant,
        listing: &Listing,
        today: NaiveDate,
    ) -> Result<MatchResult, MatchError> {
        check_tenant(tenant)?;
        check_listing(listing)?;

        Ok(self.evaluate(tenant, listing, today))
    }

    pub fn tenant_score(&self, tenant: &Tenant) -> Result<u8, MatchError> {
        self.tenant_score_at(tenant, today())
    }

    /// Listing-independent composite: 60% reliability, 40% employment
    pub fn tenant_score_at(&self, tenant: &Tenant, today: NaiveDate) -> Result<u8, MatchError> {
        check_tenant(tenant)?;

        let reliability = score_reliability(tenant);
        let employment = score_employment(tenant, today);

        Ok(round_score(reliability * 0.6 + employment * 0.4))
    }

    pub fn rank_tenants(&self, tenants: &[Tenant], listing: &Listing) -> Result<Vec<RankedTenant>, MatchError> {
        self.rank_tenants_at(tenants, listing, today())
    }

    /// Rank a pool by match score, highest first
    ///
    /// Equal scores keep their input order. Nothing is filtered out:
    /// dealbreaker tenants stay in the list, flagged.
    pub fn rank_tenants_at(
        &self,
        tenants: &[Tenant],
        listing: &Listing,
        today: NaiveDate,
    ) -> Result<Vec<RankedTenant>, MatchError> {
        check_listing(listing)?;
        for tenant in tenants {
            check_tenant(tenant)?;
        }

        let mut ranked: Vec<RankedTenant> = tenants
            .iter()
            .map(|tenant| {
                let result = self.evaluate(tenant, listing, today);
                RankedTenant {
                    tenant: tenant.clone(),
                    match_score: result.score,
                    match_label: result.label,
                    is_dealbreaker: result.is_dealbreaker,
                    dealbreakers: result.dealbreakers,
                }
            })
            .collect();

        // sort_by is stable
        ranked.sort_by(|a, b| b.match_score.cmp(&a.match_score));

        tracing::debug!(
            listing_id = %listing.id,
            candidates = ranked.len(),
            "ranked tenant pool"
        );

        Ok(ranked)
    }

    /// Rank, then optionally hide dealbreakers and cut to a limit
    pub fn rank_with_options(
        &self,
        tenants: &[Tenant],
        listing: &Listing,
        options: &RankOptions,
        today: NaiveDate,
    ) -> Result<Ranking, MatchError> {
        let total_candidates = tenants.len();
        let mut ranked = self.rank_tenants_at(tenants, listing, today)?;

        let mut excluded_dealbreakers = 0;
        if options.exclude_dealbreakers {
            ranked.retain(|entry| !entry.is_dealbreaker);
            excluded_dealbreakers = total_candidates - ranked.len();
        }

        if let Some(limit) = options.limit {
            ranked.truncate(limit);
        }

        Ok(Ranking {
            tenants: ranked,
            total_candidates,
            excluded_dealbreakers,
        })
    }

    fn evaluate(&self, tenant: &Tenant, listing: &Listing, today: NaiveDate) -> MatchResult {
        let breakdown = ScoreBreakdown {
            budget: score_budget(tenant, listing),
            location: score_location(tenant, listing),
            reliability: score_reliability(tenant),
            employment: score_employment(tenant, today),
            preferences: score_preferences(tenant, listing),
            availability: score_availability(tenant, listing),
        };

        let score = self.composite(&breakdown);
        let label = label_for_score(score);
        let dealbreakers = detect_dealbreakers(tenant, listing);

        tracing::trace!(
            tenant_id = %tenant.id,
            listing_id = %listing.id,
            score,
            dealbreakers = dealbreakers.len(),
            "computed match"
        );

        MatchResult {
            tenant_id: tenant.id.clone(),
            listing_id: listing.id.clone(),
            score,
            breakdown,
            label,
            color: label.color().to_string(),
            is_dealbreaker: !dealbreakers.is_empty(),
            dealbreakers,
        }
    }

    fn composite(&self, breakdown: &ScoreBreakdown) -> u8 {
        let w = &self.weights;
        let weighted = breakdown.budget * w.budget
            + breakdown.location * w.location
            + breakdown.reliability * w.reliability
            + breakdown.employment * w.employment
            + breakdown.preferences * w.preferences
            + breakdown.availability * w.availability;

        round_score(weighted / 100.0)
    }
}

impl Default for Matcher {
    fn default() -> Self {
        Self::with_default_weights()
    }
}

fn check_tenant(tenant: &Tenant) -> Result<(), MatchError> {
    tenant.validate().map_err(|source| MatchError::InvalidTenant {
        id: tenant.id.clone(),
        source,
    })
}

fn check_listing(listing: &Listing) -> Result<(), MatchError> {
    listing.validate().map_err(|source| MatchError::InvalidListing {
        id: listing.id.clone(),
        source,
    })
}

/// Match a tenant against a listing with the default weights
pub fn calculate_match(tenant: &Tenant, listing: &Listing) -> Result<MatchResult, MatchError> {
    Matcher::default().calculate_match(tenant, listing)
}

/// Listing-independent tenant score with the default weights
pub fn calculate_tenant_score(tenant: &Tenant) -> Result<u8, MatchError> {
    Matcher::default().tenant_score(tenant)
}

/// Rank a tenant pool against a listing with the default weights
pub fn rank_tenants_by_match(tenants: &[Tenant], listing: &Listing) -> Result<Vec<RankedTenant>, MatchError> {
    Matcher::default().rank_tenants(tenants, listing)
}
