//! Date header formatting.

use chrono::{Datelike, Local, NaiveDate};

/// `"Today YYYY - MM - DD"` with zero-padded month and day.
pub fn today_label(date: NaiveDate) -> String {
    format!(
        "Today {} - {:02} - {:02}",
        date.year(),
        date.month(),
        date.day()
    )
}

/// Header label for the local calendar date.
pub fn today_label_now() -> String {
    today_label(Local::now().date_naive())
}
