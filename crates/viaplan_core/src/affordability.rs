//! Affordability validation
//!
//! Checks the amortized loan payment against the salary-percentage cap. This
//! is where a term clamped at the policy maximum gets surfaced as infeasible.
//! Pure and total: any numeric input produces a result, never an error — an
//! unaffordable plan is data, not a failure.

use crate::WEEKS_PER_MONTH;
use crate::model::{AffordabilityResult, LoanPlan};

/// Validate a loan plan against the salary cap.
///
/// Feasibility uses `<=`: a payment exactly at the cap passes. When the plan
/// is infeasible the result carries the shortfall and a suggested
/// weekly-deposit change of `ceil(shortfall / 4.33)` — the same weeks-per-month
/// constant the savings planner uses, so front-end and engine agree.
pub fn validate_affordability(
    loan: &LoanPlan,
    monthly_salary: f64,
    max_monthly_pct: f64,
) -> AffordabilityResult {
    let max_monthly_payment = monthly_salary * max_monthly_pct;
    let is_feasible = loan.monthly_payment <= max_monthly_payment;
    let payment_pct_of_salary = if monthly_salary > 0.0 {
        loan.monthly_payment / monthly_salary * 100.0
    } else {
        0.0
    };

    let (shortfall, suggested_weekly_delta) = if is_feasible {
        (None, None)
    } else {
        let shortfall = loan.monthly_payment - max_monthly_payment;
        (Some(shortfall), Some((shortfall / WEEKS_PER_MONTH).ceil()))
    };

    AffordabilityResult {
        is_feasible,
        monthly_payment: loan.monthly_payment,
        max_monthly_payment,
        payment_pct_of_salary,
        shortfall,
        suggested_weekly_delta,
    }
}
