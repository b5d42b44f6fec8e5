//! Plan computation entry point
//!
//! [`compute_vacation_plan`] is the single synchronous operation the request
//! handler and the test harness consume. It validates every input before
//! deriving anything, then composes the pure submodules: pricing → package
//! price → savings timeline + loan amortization → affordability. Deterministic
//! for a fixed config snapshot and `today`.

use jiff::civil::Date;

use crate::error::{Result, ValidationError};
use crate::model::{PlanInput, PricingConfig, VacationPlan};
use crate::{affordability, loan, pricing, savings};

/// Compute the full vacation plan for one set of inputs.
///
/// Fails with a [`ValidationError`] before producing any derived value; a
/// returned plan is always complete.
pub fn compute_vacation_plan(
    input: &PlanInput,
    config: &PricingConfig,
    today: Date,
) -> Result<VacationPlan> {
    // All input validation happens up front so a failure never leaves a
    // half-derived plan behind.
    if input.adults < 1 {
        return Err(ValidationError::TooFewAdults(input.adults));
    }
    if input.weekly_deposit <= 0.0 {
        return Err(ValidationError::NonPositiveDeposit(input.weekly_deposit));
    }
    if input.monthly_salary <= 0.0 {
        return Err(ValidationError::NonPositiveSalary(input.monthly_salary));
    }
    if !config.destinations.contains_key(&input.destination_id) {
        return Err(ValidationError::UnknownDestination(
            input.destination_id.clone(),
        ));
    }

    let unit_price = pricing::resolve_price(config, &input.destination_id, input.travel_date)?;
    let package = pricing::calculate_package_price(
        unit_price,
        input.adults,
        input.children,
        config.child_discount,
    )?;

    // Savings and loan derive independently from the package price.
    let savings = savings::plan_savings(
        package.total_price,
        input.weekly_deposit,
        config.savings_target_pct,
        config.buffer_weeks,
        today,
    )?;
    let loan = loan::amortize_loan(
        package.total_price,
        config.loan_pct,
        input.monthly_salary,
        config.max_monthly_payment_pct,
        config.loan_term_range,
    )?;

    let affordability =
        affordability::validate_affordability(&loan, input.monthly_salary, config.max_monthly_payment_pct);

    Ok(VacationPlan {
        pricing: package,
        savings,
        loan,
        affordability,
    })
}
