// Core algorithm exports
pub mod calendar;
pub mod dealbreakers;
pub mod matcher;
pub mod scoring;

pub use calendar::{days_apart, years_between};
pub use dealbreakers::detect_dealbreakers;
pub use matcher::{
    calculate_match, calculate_tenant_score, rank_tenants_by_match, MatchError, Matcher,
    RankOptions, Ranking, WeightsError,
};
pub use scoring::{
    label_for_score, score_availability, score_budget, score_employment, score_location,
    score_preferences, score_reliability,
};
