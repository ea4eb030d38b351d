//! Browser clock and randomness.

use chrono::{DateTime, NaiveDate, Utc};

/// Current time from `Date.now()`
pub fn now() -> DateTime<Utc> {
    let millis = js_sys::Date::now() as i64;
    DateTime::from_timestamp_millis(millis).unwrap_or_else(Utc::now)
}

pub fn today() -> NaiveDate {
    now().date_naive()
}

/// Sample from `[0, 1)`
pub fn random_unit() -> f64 {
    js_sys::Math::random()
}
