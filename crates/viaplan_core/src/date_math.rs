//! Calendar arithmetic helpers shared by the savings planner and the date
//! validator.
//!
//! Everything operates on `jiff::civil::Date` — civil dates with no timezone
//! attached. The binary resolves "today" in UTC before calling into the engine,
//! so all comparisons here happen in one consistent calendar.

use jiff::Span;
use jiff::civil::Date;

/// Add `n` days to a civil date, saturating at the calendar bounds.
#[inline]
pub fn add_days(d: Date, n: i64) -> Date {
    d.saturating_add(Span::new().days(n))
}

/// Add `n` whole weeks to a civil date.
#[inline]
pub fn add_weeks(d: Date, n: i64) -> Date {
    add_days(d, n * 7)
}

/// Number of nights between check-in and check-out.
///
/// Positive when `check_out > check_in`; zero or negative otherwise, which the
/// date validator treats as an ordering failure.
#[inline]
pub fn nights_between(check_in: Date, check_out: Date) -> i32 {
    (check_out - check_in).get_days()
}

/// Calendar month (1–12) of a travel date, for seasonal pricing lookups.
#[inline]
pub fn travel_month(d: Date) -> i8 {
    d.month()
}
