//! Vacation savings credit calculation engine
//!
//! This crate is the single source of truth for the financial formulas behind
//! the vacation credit product. It covers:
//! - Destination pricing with seasonal multipliers
//! - Package pricing for adult/child traveler mixes
//! - Savings timelines driven by weekly deposits
//! - Zero-interest loan amortization bounded to a policy term range
//! - Affordability checks against a salary-percentage cap
//! - Check-in/check-out date validation
//!
//! Every function here is pure and synchronous: configuration arrives as an
//! already-resolved [`model::PricingConfig`] snapshot and "today" is an injected
//! [`jiff::civil::Date`], so the engine can be exercised without any I/O. All
//! date arithmetic works on civil (timezone-free) dates; callers are expected
//! to resolve the current day in UTC.
//!
//! # Example
//!
//! ```ignore
//! use viaplan_core::{compute_vacation_plan, model::{PlanInput, PricingConfig}};
//!
//! let config = PricingConfig::fallback();
//! let input = PlanInput {
//!     destination_id: "cancun".into(),
//!     travel_date: jiff::civil::date(2026, 3, 14),
//!     adults: 2,
//!     children: 1,
//!     monthly_salary: 12_000.0,
//!     weekly_deposit: 800.0,
//! };
//! let plan = compute_vacation_plan(&input, &config, jiff::civil::date(2025, 9, 1))?;
//! ```

#![warn(clippy::all)]

// ============================================================================
// Core modules
// ============================================================================

pub mod affordability;
pub mod date_math;
pub mod dates;
pub mod error;
pub mod loan;
pub mod plan;
pub mod pricing;
pub mod savings;

// ============================================================================
// Type definition modules
// ============================================================================

pub mod model;

// ============================================================================
// Test modules
// ============================================================================

#[cfg(test)]
mod tests;

// ============================================================================
// Public re-exports for convenience
// ============================================================================

pub use error::ValidationError;
pub use plan::compute_vacation_plan;

/// Average weeks per month used for every weekly↔monthly conversion.
///
/// The savings monthly-equivalent and the affordability weekly-delta suggestion
/// must use the same constant, otherwise the two surfaces disagree about what
/// "per month" means.
pub const WEEKS_PER_MONTH: f64 = 4.33;
