//! Time helpers: business timezone clock and query date parsing

use chrono::{NaiveDate, NaiveDateTime};
use chrono_tz::Tz;
use shared::{AppError, AppResult};

/// Parse a `YYYY-MM-DD` query date
///
/// The year must be exactly four digits; chrono's `%Y` alone also takes
/// signed and longer years.
pub fn parse_date(field: &str, date: &str) -> AppResult<NaiveDate> {
    let invalid = || {
        AppError::invalid_date_range(format!("Invalid date format: {}", date))
            .with_detail("field", field)
            .with_detail("value", date)
    };

    let trimmed = date.trim();
    let bytes = trimmed.as_bytes();
    if bytes.len() != 10 || !bytes[..4].iter().all(u8::is_ascii_digit) {
        return Err(invalid());
    }
    NaiveDate::parse_from_str(trimmed, "%Y-%m-%d").map_err(|_| invalid())
}

/// Parse an IANA timezone name
pub fn parse_timezone(name: &str) -> AppResult<Tz> {
    name.parse::<Tz>()
        .map_err(|_| AppError::config(format!("Unknown timezone: {}", name)))
}

/// Source of "now" for the report pipeline
pub trait Clock: Send + Sync {
    /// Local wall-clock time in the business timezone
    fn now(&self) -> NaiveDateTime;
}

/// Wall clock in the business timezone
#[derive(Debug, Clone, Copy)]
pub struct SystemClock {
    tz: Tz,
}

impl SystemClock {
    pub fn new(tz: Tz) -> Self {
        Self { tz }
    }
}

impl Clock for SystemClock {
    fn now(&self) -> NaiveDateTime {
        chrono::Utc::now().with_timezone(&self.tz).naive_local()
    }
}

/// Clock frozen at one instant
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub NaiveDateTime);

impl Clock for FixedClock {
    fn now(&self) -> NaiveDateTime {
        self.0
    }
}
