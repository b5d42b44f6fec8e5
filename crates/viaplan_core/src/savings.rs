//! Savings timeline planning
//!
//! Derives the pre-travel savings target, the number of weekly deposits needed
//! to reach it, and the earliest feasible check-in date. `today` is injected so
//! the planner stays clock-free; the binary passes the current UTC calendar day.

use jiff::civil::Date;

use crate::WEEKS_PER_MONTH;
use crate::date_math;
use crate::error::{Result, ValidationError};
use crate::model::SavingsTimeline;

/// Plan the savings timeline for a package.
///
/// `weeks_to_save` uses ceiling division — a partial week always rounds up so
/// the user never appears finished before the target is actually met — and is
/// floored at 1 whenever the deposit is positive. The earliest check-in is
/// `today + 7 × (weeks_to_save + buffer_weeks)` days.
pub fn plan_savings(
    total_price: f64,
    weekly_deposit: f64,
    savings_target_pct: f64,
    buffer_weeks: u32,
    today: Date,
) -> Result<SavingsTimeline> {
    if weekly_deposit <= 0.0 {
        return Err(ValidationError::NonPositiveDeposit(weekly_deposit));
    }

    let savings_target = (total_price * savings_target_pct).round();
    let weeks_to_save = (savings_target / weekly_deposit).ceil().max(1.0) as u32;
    let earliest_check_in = date_math::add_weeks(today, (weeks_to_save + buffer_weeks) as i64);

    Ok(SavingsTimeline {
        savings_target,
        weekly_deposit,
        monthly_deposit: (weekly_deposit * WEEKS_PER_MONTH).round(),
        weeks_to_save,
        buffer_weeks,
        earliest_check_in,
    })
}
