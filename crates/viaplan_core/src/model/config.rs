//! Pricing configuration
//!
//! The main configuration type is [`PricingConfig`], a snapshot of the pricing
//! rules the engine computes against. It is loaded from an external store by
//! the application layer and injected here already resolved; the engine never
//! fetches anything itself.
//!
//! Every field carries a serde default so a partial JSON document from the
//! config store still deserializes, and [`PricingConfig::fallback`] provides
//! the hardcoded destination table used when the store is unreachable. The
//! fallback path must never fail.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use super::ids::DestinationId;

fn default_child_discount() -> f64 {
    0.25
}

fn default_savings_target_pct() -> f64 {
    0.8
}

fn default_loan_pct() -> f64 {
    0.2
}

fn default_max_monthly_payment_pct() -> f64 {
    0.15
}

fn default_currency() -> String {
    "MXN".to_string()
}

fn default_buffer_weeks() -> u32 {
    1
}

/// Bilingual display text, keyed the way the funnel's string tables are.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LocalizedText {
    #[serde(rename = "es-MX")]
    pub es_mx: String,
    #[serde(rename = "en-US")]
    pub en_us: String,
}

impl LocalizedText {
    pub fn new(es_mx: &str, en_us: &str) -> Self {
        Self {
            es_mx: es_mx.to_string(),
            en_us: en_us.to_string(),
        }
    }
}

/// Displayed price band for a destination (marketing copy, not used in math).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PriceRange {
    pub min: f64,
    pub max: f64,
}

/// One seasonal pricing entry.
///
/// Seasons are stored as an ordered list, not a map: when two seasons claim
/// the same month, the one declared first wins. That declaration-order
/// tie-break is part of the pricing contract.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Season {
    pub name: String,
    /// Calendar months (1–12) this season covers.
    pub months: Vec<i8>,
    /// Applied to the destination base price; must be positive.
    pub multiplier: f64,
    #[serde(default)]
    pub description: Option<LocalizedText>,
}

/// Pricing entry for a single destination.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DestinationConfig {
    pub name: LocalizedText,
    /// Base price per adult, in whole currency units.
    pub base_price: f64,
    #[serde(default)]
    pub price_range: Option<PriceRange>,
    /// Seasonal multipliers, scanned in declaration order.
    #[serde(default)]
    pub seasons: Vec<Season>,
}

/// Allowed loan repayment term, in months.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoanTermRange {
    pub min: u32,
    pub max: u32,
}

impl Default for LoanTermRange {
    fn default() -> Self {
        Self { min: 6, max: 12 }
    }
}

/// Allowed package length, in nights.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PackageDuration {
    pub min_nights: i32,
    pub max_nights: i32,
}

impl Default for PackageDuration {
    fn default() -> Self {
        Self {
            min_nights: 5,
            max_nights: 7,
        }
    }
}

/// Complete pricing configuration snapshot.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PricingConfig {
    #[serde(default)]
    pub destinations: HashMap<DestinationId, DestinationConfig>,

    /// Fraction of the adult unit price charged per child (0–1).
    #[serde(default = "default_child_discount")]
    pub child_discount: f64,

    /// Fraction of the package price saved up front via weekly deposits (0–1).
    #[serde(default = "default_savings_target_pct")]
    pub savings_target_pct: f64,

    /// Fraction of the package price advanced as a zero-interest loan (0–1).
    #[serde(default = "default_loan_pct")]
    pub loan_pct: f64,

    #[serde(default)]
    pub loan_term_range: LoanTermRange,

    /// Maximum fraction of monthly salary the loan payment may consume (0–1).
    #[serde(default = "default_max_monthly_payment_pct")]
    pub max_monthly_payment_pct: f64,

    #[serde(default = "default_currency")]
    pub currency: String,

    #[serde(default)]
    pub package_duration: PackageDuration,

    /// Extra weeks added on top of the savings timeline before the earliest
    /// feasible check-in.
    #[serde(default = "default_buffer_weeks")]
    pub buffer_weeks: u32,
}

impl Default for PricingConfig {
    fn default() -> Self {
        Self {
            destinations: HashMap::new(),
            child_discount: default_child_discount(),
            savings_target_pct: default_savings_target_pct(),
            loan_pct: default_loan_pct(),
            loan_term_range: LoanTermRange::default(),
            max_monthly_payment_pct: default_max_monthly_payment_pct(),
            currency: default_currency(),
            package_duration: PackageDuration::default(),
            buffer_weeks: default_buffer_weeks(),
        }
    }
}

impl PricingConfig {
    /// Hardcoded default configuration used when the config store is
    /// unreachable or the stored document is missing.
    ///
    /// Infallible: this is the last line of defense for the funnel, so it
    /// builds everything inline and cannot return an error.
    pub fn fallback() -> Self {
        let mut destinations = HashMap::new();
        destinations.insert(
            DestinationId::from("cancun"),
            DestinationConfig {
                name: LocalizedText::new("Cancún", "Cancun"),
                base_price: 22_500.0,
                price_range: Some(PriceRange {
                    min: 20_000.0,
                    max: 25_000.0,
                }),
                seasons: Vec::new(),
            },
        );
        destinations.insert(
            DestinationId::from("puerto-vallarta"),
            DestinationConfig {
                name: LocalizedText::new("Puerto Vallarta", "Puerto Vallarta"),
                base_price: 17_500.0,
                price_range: Some(PriceRange {
                    min: 15_000.0,
                    max: 20_000.0,
                }),
                seasons: Vec::new(),
            },
        );
        destinations.insert(
            DestinationId::from("los-cabos"),
            DestinationConfig {
                name: LocalizedText::new("Los Cabos", "Los Cabos"),
                base_price: 22_500.0,
                price_range: Some(PriceRange {
                    min: 20_000.0,
                    max: 25_000.0,
                }),
                seasons: Vec::new(),
            },
        );
        destinations.insert(
            DestinationId::from("ciudad-de-mexico"),
            DestinationConfig {
                name: LocalizedText::new("Ciudad de México", "Mexico City"),
                base_price: 12_500.0,
                price_range: Some(PriceRange {
                    min: 10_000.0,
                    max: 15_000.0,
                }),
                seasons: Vec::new(),
            },
        );
        destinations.insert(
            DestinationId::from("oaxaca"),
            DestinationConfig {
                name: LocalizedText::new("Oaxaca", "Oaxaca"),
                base_price: 12_500.0,
                price_range: Some(PriceRange {
                    min: 10_000.0,
                    max: 15_000.0,
                }),
                seasons: Vec::new(),
            },
        );
        destinations.insert(
            DestinationId::from("chiapas"),
            DestinationConfig {
                name: LocalizedText::new("Chiapas", "Chiapas"),
                base_price: 17_500.0,
                price_range: Some(PriceRange {
                    min: 15_000.0,
                    max: 20_000.0,
                }),
                seasons: Vec::new(),
            },
        );

        Self {
            destinations,
            ..Self::default()
        }
    }
}
