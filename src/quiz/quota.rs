// src/quiz/quota.rs

use chrono::NaiveDate;

use crate::models::result::ResultRecord;

/// Number of results recorded for `email` on `today`.
///
/// Only the first ten characters of the date cell (`YYYY-MM-DD`) are compared,
/// so any time suffix is ignored.
pub fn attempts_on(results: &[ResultRecord], email: &str, today: NaiveDate) -> usize {
    let today = today.format("%Y-%m-%d").to_string();
    results
        .iter()
        .filter(|r| r.email == email && date_prefix(&r.date) == today)
        .count()
}

/// Whether another attempt fits under the daily cap.
pub fn can_attempt(attempts_today: usize, max_attempts: usize) -> bool {
    attempts_today < max_attempts
}

fn date_prefix(date: &str) -> &str {
    match date.char_indices().nth(10) {
        Some((idx, _)) => &date[..idx],
        None => date,
    }
}
