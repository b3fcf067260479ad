use actix_web::{web, HttpResponse, Responder};
use validator::Validate;

use crate::core::{calendar::today, scoring::label_for_score, MatchError, Matcher, RankOptions};
use crate::models::{
    ErrorResponse, HealthResponse, MatchRequest, RankTenantsRequest, RankTenantsResponse,
    TenantScoreRequest, TenantScoreResponse,
};

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub matcher: Matcher,
    pub max_rank_limit: usize,
}

impl AppState {
    pub fn new(matcher: Matcher, max_rank_limit: usize) -> Self {
        Self {
            matcher,
            max_rank_limit,
        }
    }
}

/// Configure all match-related routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg
        .route("/health", web::get().to(health_check))
        .route("/match", web::post().to(calculate_match))
        .route("/tenants/score", web::post().to(tenant_score))
        .route("/tenants/rank", web::post().to(rank_tenants));
}

/// Health check endpoint
async fn health_check() -> impl Responder {
    HttpResponse::Ok().json(HealthResponse {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        timestamp: chrono::Utc::now(),
    })
}

/// Match endpoint
///
/// POST /api/v1/match
///
/// Request body:
/// ```json
/// {
///   "tenant": { "id": "string", "preferences": { ... }, ... },
///   "listing": { "id": "string", "address": { "city": "string" }, ... }
/// }
/// ```
async fn calculate_match(
    state: web::Data<AppState>,
    req: web::Json<MatchRequest>,
) -> impl Responder {
    if let Err(errors) = req.validate() {
        tracing::warn!("Validation failed for match request: {}", errors);
        return validation_failed(errors.to_string());
    }

    match state.matcher.calculate_match(&req.tenant, &req.listing) {
        Ok(result) => {
            tracing::info!(
                "Matched tenant {} against listing {}: score {} ({})",
                result.tenant_id,
                result.listing_id,
                result.score,
                result.label
            );
            HttpResponse::Ok().json(result)
        }
        Err(e) => invalid_input(e),
    }
}

/// Tenant score endpoint
///
/// POST /api/v1/tenants/score
async fn tenant_score(
    state: web::Data<AppState>,
    req: web::Json<TenantScoreRequest>,
) -> impl Responder {
    if let Err(errors) = req.validate() {
        tracing::warn!("Validation failed for tenant score request: {}", errors);
        return validation_failed(errors.to_string());
    }

    match state.matcher.tenant_score(&req.tenant) {
        Ok(score) => HttpResponse::Ok().json(TenantScoreResponse {
            tenant_id: req.tenant.id.clone(),
            score,
            label: label_for_score(score),
        }),
        Err(e) => invalid_input(e),
    }
}

/// Ranking endpoint
///
/// POST /api/v1/tenants/rank
///
/// Request body:
/// ```json
/// {
///   "tenants": [{ "id": "string", ... }],
///   "listing": { "id": "string", ... },
///   "excludeDealbreakers": false,
///   "limit": 20
/// }
/// ```
async fn rank_tenants(
    state: web::Data<AppState>,
    req: web::Json<RankTenantsRequest>,
) -> impl Responder {
    if let Err(errors) = req.validate() {
        tracing::warn!("Validation failed for rank request: {}", errors);
        return validation_failed(errors.to_string());
    }

    // Only an explicit limit truncates; it is capped to keep responses bounded
    let limit = req.limit.map(|limit| limit.min(state.max_rank_limit));

    let options = RankOptions {
        exclude_dealbreakers: req.exclude_dealbreakers,
        limit,
    };

    tracing::info!(
        "Ranking {} tenants for listing {}, limit: {:?}",
        req.tenants.len(),
        req.listing.id,
        limit
    );

    match state
        .matcher
        .rank_with_options(&req.tenants, &req.listing, &options, today())
    {
        Ok(ranking) => HttpResponse::Ok().json(RankTenantsResponse {
            rankings: ranking.tenants,
            total_candidates: ranking.total_candidates,
            excluded_dealbreakers: ranking.excluded_dealbreakers,
        }),
        Err(e) => invalid_input(e),
    }
}

fn validation_failed(message: String) -> HttpResponse {
    HttpResponse::BadRequest().json(ErrorResponse {
        error: "Validation failed".to_string(),
        message,
        status_code: 400,
    })
}

fn invalid_input(err: MatchError) -> HttpResponse {
    tracing::warn!("Rejected malformed input: {}", err);
    HttpResponse::BadRequest().json(ErrorResponse {
        error: "invalid_input".to_string(),
        message: err.to_string(),
        status_code: 400,
    })
}
