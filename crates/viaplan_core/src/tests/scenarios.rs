//! Reference scenarios for the full plan computation
//!
//! These pin the exact figures the product promises: a destination priced at
//! 15000 for two adults yields a 24-week savings runway at a 1000/week
//! deposit, the loan clamps into the 6–12 month policy window, and the
//! affordability verdict flips with salary exactly as specified.

use jiff::civil::date;

use crate::error::ValidationError;
use crate::model::{
    DestinationConfig, DestinationId, LocalizedText, PlanInput, PricingConfig, Season,
};
use crate::plan::compute_vacation_plan;

fn test_config() -> PricingConfig {
    let mut config = PricingConfig::default();
    config.destinations.insert(
        DestinationId::from("cancun"),
        DestinationConfig {
            name: LocalizedText::new("Cancún", "Cancun"),
            base_price: 15_000.0,
            price_range: None,
            seasons: vec![Season {
                name: "high".to_string(),
                months: vec![12, 1],
                multiplier: 1.2,
                description: None,
            }],
        },
    );
    config
}

fn test_input() -> PlanInput {
    PlanInput {
        destination_id: DestinationId::from("cancun"),
        travel_date: date(2026, 6, 10),
        adults: 2,
        children: 0,
        monthly_salary: 10_000.0,
        weekly_deposit: 1_000.0,
    }
}

/// Scenario A: savings runway for a 30000 package at 1000/week.
#[test]
fn test_savings_runway() {
    let today = date(2025, 9, 1);
    let plan = compute_vacation_plan(&test_input(), &test_config(), today).unwrap();

    assert_eq!(plan.pricing.total_price, 30_000.0);
    assert_eq!(plan.savings.savings_target, 24_000.0);
    assert_eq!(plan.savings.weeks_to_save, 24);
    assert_eq!(plan.savings.buffer_weeks, 1);
    // today + 25 weeks
    assert_eq!(plan.savings.earliest_check_in, date(2026, 2, 23));
}

/// Scenario B: comfortable salary → term clamps up to the 6-month minimum.
#[test]
fn test_loan_clamps_to_minimum_term() {
    let plan = compute_vacation_plan(&test_input(), &test_config(), date(2025, 9, 1)).unwrap();

    assert_eq!(plan.loan.loan_amount, 6_000.0);
    assert_eq!(plan.loan.max_monthly_payment, 1_500.0);
    assert_eq!(plan.loan.min_months_needed, 4);
    assert_eq!(plan.loan.loan_term_months, 6);
    assert_eq!(plan.loan.monthly_payment, 1_000.0);
    assert!(plan.affordability.is_feasible);
    assert_eq!(plan.affordability.payment_pct_of_salary, 10.0);
}

/// Scenario C: tight salary → term clamps down to 12 months and the
/// affordability validator reports the 50-peso shortfall.
#[test]
fn test_loan_infeasible_at_maximum_term() {
    let input = PlanInput {
        monthly_salary: 3_000.0,
        ..test_input()
    };
    let plan = compute_vacation_plan(&input, &test_config(), date(2025, 9, 1)).unwrap();

    assert_eq!(plan.loan.max_monthly_payment, 450.0);
    assert_eq!(plan.loan.min_months_needed, 14);
    assert_eq!(plan.loan.loan_term_months, 12);
    assert_eq!(plan.loan.monthly_payment, 500.0);
    assert!(!plan.affordability.is_feasible);
    assert_eq!(plan.affordability.shortfall, Some(50.0));
}

/// Scenario D: December travel picks up the 1.2 seasonal multiplier.
#[test]
fn test_seasonal_pricing_flows_into_plan() {
    let input = PlanInput {
        travel_date: date(2026, 12, 24),
        ..test_input()
    };
    let plan = compute_vacation_plan(&input, &test_config(), date(2025, 9, 1)).unwrap();

    assert_eq!(plan.pricing.adult_unit_price, 18_000.0);
    assert_eq!(plan.pricing.total_price, 36_000.0);
}

#[test]
fn test_identical_inputs_yield_identical_plans() {
    let today = date(2025, 9, 1);
    let config = test_config();
    let input = test_input();

    let first = compute_vacation_plan(&input, &config, today).unwrap();
    let second = compute_vacation_plan(&input, &config, today).unwrap();
    assert_eq!(first, second);

    // Byte-identical once serialized, too.
    let a = serde_json::to_vec(&first).unwrap();
    let b = serde_json::to_vec(&second).unwrap();
    assert_eq!(a, b);
}

#[test]
fn test_validation_failures_surface_before_derivation() {
    let config = test_config();
    let today = date(2025, 9, 1);

    let input = PlanInput {
        adults: 0,
        ..test_input()
    };
    assert_eq!(
        compute_vacation_plan(&input, &config, today).unwrap_err(),
        ValidationError::TooFewAdults(0)
    );

    let input = PlanInput {
        weekly_deposit: 0.0,
        ..test_input()
    };
    assert_eq!(
        compute_vacation_plan(&input, &config, today).unwrap_err(),
        ValidationError::NonPositiveDeposit(0.0)
    );

    let input = PlanInput {
        monthly_salary: -1.0,
        ..test_input()
    };
    assert_eq!(
        compute_vacation_plan(&input, &config, today).unwrap_err(),
        ValidationError::NonPositiveSalary(-1.0)
    );

    let input = PlanInput {
        destination_id: DestinationId::from("atlantis"),
        ..test_input()
    };
    assert_eq!(
        compute_vacation_plan(&input, &config, today)
            .unwrap_err()
            .reason_code(),
        "destination_not_found"
    );
}

#[test]
fn test_children_discounted_in_full_plan() {
    let input = PlanInput {
        children: 2,
        ..test_input()
    };
    let plan = compute_vacation_plan(&input, &test_config(), date(2025, 9, 1)).unwrap();

    // 2 adults + 2 children at 25% of the adult price
    assert_eq!(plan.pricing.total_price, 37_500.0);
    assert_eq!(plan.pricing.child_unit_price, 3_750.0);
    // Downstream figures follow the bigger package.
    assert_eq!(plan.savings.savings_target, 30_000.0);
    assert_eq!(plan.loan.loan_amount, 7_500.0);
}
