use std::fmt;

use crate::model::DestinationId;

/// Errors for caller-correctable input problems.
///
/// Every variant carries the offending value, a stable machine-checkable
/// [`reason_code`](ValidationError::reason_code), and a
/// [`message_key`](ValidationError::message_key) that front-ends resolve
/// against their es-MX/en-US string tables. The engine never embeds localized
/// text itself.
#[derive(Debug, Clone, PartialEq)]
pub enum ValidationError {
    /// The destination id is not present in the pricing configuration.
    UnknownDestination(DestinationId),
    /// Package pricing requires at least one adult traveler.
    TooFewAdults(u32),
    /// Savings timelines are undefined for a non-positive weekly deposit.
    NonPositiveDeposit(f64),
    /// Loan amortization divides by the salary-derived cap.
    NonPositiveSalary(f64),
}

impl ValidationError {
    /// Stable reason code for programmatic handling.
    pub fn reason_code(&self) -> &'static str {
        match self {
            ValidationError::UnknownDestination(_) => "destination_not_found",
            ValidationError::TooFewAdults(_) => "adults_below_minimum",
            ValidationError::NonPositiveDeposit(_) => "deposit_not_positive",
            ValidationError::NonPositiveSalary(_) => "salary_not_positive",
        }
    }

    /// Localization key for the human-readable message.
    pub fn message_key(&self) -> &'static str {
        match self {
            ValidationError::UnknownDestination(_) => "error.destination.unknown",
            ValidationError::TooFewAdults(_) => "error.adults.minimum",
            ValidationError::NonPositiveDeposit(_) => "error.deposit.positive",
            ValidationError::NonPositiveSalary(_) => "error.salary.positive",
        }
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValidationError::UnknownDestination(id) => {
                write!(f, "unknown destination {id:?}")
            }
            ValidationError::TooFewAdults(n) => {
                write!(f, "at least one adult is required, got {n}")
            }
            ValidationError::NonPositiveDeposit(amount) => {
                write!(f, "weekly deposit must be positive, got {amount}")
            }
            ValidationError::NonPositiveSalary(amount) => {
                write!(f, "monthly salary must be positive, got {amount}")
            }
        }
    }
}

impl std::error::Error for ValidationError {}

pub type Result<T> = std::result::Result<T, ValidationError>;
