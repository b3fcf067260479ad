use chrono::{NaiveDate, Utc};

/// Average Gregorian year length in days
const DAYS_PER_YEAR: f64 = 365.25;

/// Today's date in UTC, used as the reference date for tenure
pub fn today() -> NaiveDate {
    Utc::now().date_naive()
}

/// Absolute distance between two dates in whole days
///
/// Direction does not matter: a tenant ready a week early is as far off
/// as one ready a week late.
#[inline]
pub fn days_apart(a: NaiveDate, b: NaiveDate) -> i64 {
    (a - b).num_days().abs()
}

/// Fractional years elapsed from `start` to `end`
///
/// Negative when `start` lies after `end`.
#[inline]
pub fn years_between(start: NaiveDate, end: NaiveDate) -> f64 {
    (end - start).num_days() as f64 / DAYS_PER_YEAR
}
