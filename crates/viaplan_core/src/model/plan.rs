//! Derived plan types
//!
//! Everything in this module is ephemeral: recomputed on every request from a
//! [`PlanInput`](crate::model::PlanInput) and a config snapshot, displayed and
//! persisted by the application layer, never read back by the engine.

use jiff::civil::Date;
use serde::{Deserialize, Serialize};

use super::ids::DestinationId;

/// User-supplied inputs for one plan computation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlanInput {
    pub destination_id: DestinationId,
    /// Intended travel date; only its calendar month feeds seasonal pricing.
    pub travel_date: Date,
    pub adults: u32,
    pub children: u32,
    pub monthly_salary: f64,
    pub weekly_deposit: f64,
}

/// Package price breakdown for a traveler mix.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PackagePricing {
    /// Seasonally adjusted price per adult.
    pub adult_unit_price: f64,
    /// Discounted per-child price, rounded for display only.
    pub child_unit_price: f64,
    /// Total package price; the single rounding point for the whole line.
    pub total_price: f64,
    pub price_per_person: f64,
}

/// Weekly-deposit savings timeline toward the pre-travel target.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SavingsTimeline {
    /// Amount to accumulate before traveling.
    pub savings_target: f64,
    pub weekly_deposit: f64,
    /// Weekly deposit expressed per month (×4.33), for display alongside the
    /// loan payment.
    pub monthly_deposit: f64,
    /// Always ≥ 1: partial weeks round up so the user never appears done early.
    pub weeks_to_save: u32,
    pub buffer_weeks: u32,
    /// today + 7×(weeks_to_save + buffer_weeks) days.
    pub earliest_check_in: Date,
}

/// Zero-interest loan covering the non-saved share of the package.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LoanPlan {
    pub loan_amount: f64,
    /// Salary-derived payment cap the term was sized against.
    pub max_monthly_payment: f64,
    /// Months needed to stay under the cap, before clamping.
    pub min_months_needed: u32,
    /// Clamped to the configured term range even when that pushes the payment
    /// over the cap; the affordability validator surfaces that case.
    pub loan_term_months: u32,
    pub monthly_payment: f64,
    /// Always exactly 0. A product guarantee, not a parameter.
    pub interest_rate: f64,
}

/// Outcome of checking a loan payment against the salary cap.
///
/// Pure data: producing one never fails, even for infeasible plans.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AffordabilityResult {
    /// `monthly_payment <= max_monthly_payment`, boundary inclusive.
    pub is_feasible: bool,
    pub monthly_payment: f64,
    pub max_monthly_payment: f64,
    /// Loan payment as a percentage of monthly salary (0–100 scale).
    pub payment_pct_of_salary: f64,
    /// How far the payment overshoots the cap, when infeasible.
    pub shortfall: Option<f64>,
    /// Suggested weekly-deposit change (shortfall ÷ 4.33, rounded up) for the
    /// "adjust your deposit by $X/week" message.
    pub suggested_weekly_delta: Option<f64>,
}

/// How to treat a check-in earlier than the earliest feasible date.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum DateRejectionMode {
    /// Fail the selection outright.
    Reject,
    /// Accept the selection, keep the user's preference, and report the
    /// earliest feasible date as the guaranteed alternative.
    SuggestAlternate,
}

/// Outcome of validating a check-in/check-out pair.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct DateCheck {
    pub valid: bool,
    /// check_out − check_in in days; zero or negative on ordering failures.
    pub nights: i32,
    /// Localization key for the failure (or advisory) message, if any.
    pub message_key: Option<&'static str>,
    /// Set under [`DateRejectionMode::SuggestAlternate`] when the requested
    /// check-in is earlier than feasible.
    pub guaranteed_check_in: Option<Date>,
}

/// Full result of one plan computation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VacationPlan {
    pub pricing: PackagePricing,
    pub savings: SavingsTimeline,
    pub loan: LoanPlan,
    pub affordability: AffordabilityResult,
}
