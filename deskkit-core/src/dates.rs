//! Due-date handling: `YYYY-MM-DD`, and it has to be a real calendar day.

use std::sync::OnceLock;

use chrono::NaiveDate;
use regex::Regex;

use crate::error::StoreError;

fn due_date_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"^(?P<y>\d{4})-(?P<m>\d{2})-(?P<d>\d{2})$").expect("due date pattern compiles")
    })
}

/// Parse a strict `YYYY-MM-DD` string. Returns None for anything else,
/// including well-shaped strings like `2024-02-30`.
pub fn parse_due_date(s: &str) -> Option<NaiveDate> {
    let caps = due_date_re().captures(s.trim())?;
    let y: i32 = caps["y"].parse().ok()?;
    let m: u32 = caps["m"].parse().ok()?;
    let d: u32 = caps["d"].parse().ok()?;
    NaiveDate::from_ymd_opt(y, m, d)
}

pub fn validate_due_date(s: &str) -> Result<(), StoreError> {
    match parse_due_date(s) {
        Some(_) => Ok(()),
        None => Err(StoreError::validation(
            "due_date",
            "Invalid date format. Please use YYYY-MM-DD.",
        )),
    }
}
