// src/calendar.rs
//! Calendar conventions: ACT/365 fixed.
//!
//! Time to expiry is measured in years of 365 calendar days, and theta is
//! reported per one of those days.

use crate::error::{AnalyticsError, AnalyticsResult};
use chrono::NaiveDate;

pub const DAYS_PER_YEAR: f64 = 365.0;

/// Year fraction between a valuation date and an expiry date (ACT/365)
///
/// Expiry on the valuation date is T = 0; an expiry in the past is an error.
pub fn year_fraction(valuation: NaiveDate, expiry: NaiveDate) -> AnalyticsResult<f64> {
    let days = (expiry - valuation).num_days();
    if days < 0 {
        return Err(AnalyticsError::InvalidParameter {
            parameter: "expiry".to_string(),
            value: days as f64,
            constraint: format!("expiry {} is before valuation date {}", expiry, valuation),
        });
    }
    Ok(days as f64 / DAYS_PER_YEAR)
}

/// Whole calendar days represented by a year fraction, rounded to nearest
pub fn days_to_expiry(time_to_expiry: f64) -> i64 {
    (time_to_expiry * DAYS_PER_YEAR).round() as i64
}
