use chrono::{DateTime, NaiveDate, Utc};
use chrono_tz::Tz;

use crate::config;

pub fn now_in_app_tz() -> DateTime<Tz> {
    Utc::now().with_timezone(&config::current_time_zone())
}

pub fn today_in_app_tz() -> NaiveDate {
    now_in_app_tz().date_naive()
}

/// Compact stamp used in generated file names, e.g. `20240105_1730`.
pub fn file_stamp(at: DateTime<Tz>) -> String {
    at.format("%Y%m%d_%H%M").to_string()
}
