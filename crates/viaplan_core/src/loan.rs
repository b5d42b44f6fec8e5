//! Zero-interest loan amortization
//!
//! The product advances a fixed share of the package price at exactly 0%
//! interest and sizes the repayment term from the salary cap, bounded to the
//! configured term range. When even the longest allowed term cannot keep the
//! payment under the cap, the term is still clamped — the plan is surfaced as
//! infeasible by the affordability validator instead of silently stretching
//! the term past policy limits.

use crate::error::{Result, ValidationError};
use crate::model::{LoanPlan, LoanTermRange};

/// Amortize the loan share of a package price.
///
/// `min_months_needed` is the ceiling of `loan_amount / max_monthly_payment`;
/// the actual term clamps it into `[term_range.min, term_range.max]`. The
/// interest rate is hardcoded to 0 — there is no nonzero path anywhere in the
/// engine.
pub fn amortize_loan(
    total_price: f64,
    loan_pct: f64,
    monthly_salary: f64,
    max_monthly_pct: f64,
    term_range: LoanTermRange,
) -> Result<LoanPlan> {
    if monthly_salary <= 0.0 {
        return Err(ValidationError::NonPositiveSalary(monthly_salary));
    }

    let loan_amount = (total_price * loan_pct).round();
    let max_monthly_payment = monthly_salary * max_monthly_pct;
    let min_months_needed = (loan_amount / max_monthly_payment).ceil() as u32;
    let loan_term_months = min_months_needed.clamp(term_range.min, term_range.max);
    let monthly_payment = loan_amount / loan_term_months as f64;

    Ok(LoanPlan {
        loan_amount,
        max_monthly_payment,
        min_months_needed,
        loan_term_months,
        monthly_payment,
        interest_rate: 0.0,
    })
}
