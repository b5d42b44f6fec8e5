//! Destination and package pricing
//!
//! Two pure steps: resolve the seasonally adjusted per-adult price for a
//! destination and travel month, then expand it across the traveler mix.
//! Rounding happens once per published number — never per intermediate line —
//! so repeated recomputation cannot drift.

use jiff::civil::Date;

use crate::date_math;
use crate::error::{Result, ValidationError};
use crate::model::{DestinationId, PackagePricing, PricingConfig};

/// Resolve the per-adult price for a destination on a given travel date.
///
/// The seasonal table is scanned in declaration order and the first season
/// containing the travel month wins; months claimed by two seasons resolve to
/// the earlier declaration. No match means multiplier 1.0. The result is
/// rounded to whole currency units.
pub fn resolve_price(
    config: &PricingConfig,
    destination_id: &DestinationId,
    travel_date: Date,
) -> Result<f64> {
    let destination = config
        .destinations
        .get(destination_id)
        .ok_or_else(|| ValidationError::UnknownDestination(destination_id.clone()))?;

    let month = date_math::travel_month(travel_date);
    let multiplier = destination
        .seasons
        .iter()
        .find(|season| season.months.contains(&month))
        .map(|season| season.multiplier)
        .unwrap_or(1.0);

    Ok((destination.base_price * multiplier).round())
}

/// Expand a per-adult unit price across the traveler mix.
///
/// Children pay `unit_price × child_discount`. The total is rounded exactly
/// once: `round(adults×p + children×p×discount)`. The per-child unit price is
/// rounded separately for display but does not feed the total.
pub fn calculate_package_price(
    unit_price: f64,
    adults: u32,
    children: u32,
    child_discount: f64,
) -> Result<PackagePricing> {
    if adults < 1 {
        return Err(ValidationError::TooFewAdults(adults));
    }

    let total_price =
        (adults as f64 * unit_price + children as f64 * unit_price * child_discount).round();
    let travelers = (adults + children) as f64;

    Ok(PackagePricing {
        adult_unit_price: unit_price,
        child_unit_price: (unit_price * child_discount).round(),
        total_price,
        price_per_person: (total_price / travelers).round(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{DestinationConfig, LocalizedText, Season};
    use jiff::civil::date;

    fn config_with_seasons(seasons: Vec<Season>) -> PricingConfig {
        let mut config = PricingConfig::default();
        config.destinations.insert(
            DestinationId::from("cancun"),
            DestinationConfig {
                name: LocalizedText::new("Cancún", "Cancun"),
                base_price: 15_000.0,
                price_range: None,
                seasons,
            },
        );
        config
    }

    fn season(name: &str, months: &[i8], multiplier: f64) -> Season {
        Season {
            name: name.to_string(),
            months: months.to_vec(),
            multiplier,
            description: None,
        }
    }

    #[test]
    fn test_unknown_destination() {
        let config = config_with_seasons(vec![]);
        let err = resolve_price(&config, &DestinationId::from("atlantis"), date(2026, 3, 1))
            .unwrap_err();
        assert_eq!(err.reason_code(), "destination_not_found");
    }

    #[test]
    fn test_no_season_match_uses_base_price() {
        let config = config_with_seasons(vec![season("high", &[12, 1], 1.2)]);
        let price = resolve_price(&config, &DestinationId::from("cancun"), date(2026, 6, 10))
            .unwrap();
        assert_eq!(price, 15_000.0);
    }

    #[test]
    fn test_season_match_applies_multiplier() {
        // Scenario D: December travel with a {12, 1} ×1.2 season
        let config = config_with_seasons(vec![season("high", &[12, 1], 1.2)]);
        let price = resolve_price(&config, &DestinationId::from("cancun"), date(2026, 12, 24))
            .unwrap();
        assert_eq!(price, 18_000.0);
    }

    #[test]
    fn test_overlapping_seasons_first_declared_wins() {
        // December claimed by both; "high" is declared first so 1.2 applies.
        let config = config_with_seasons(vec![
            season("high", &[12, 1], 1.2),
            season("holiday", &[12], 1.5),
        ]);
        let price = resolve_price(&config, &DestinationId::from("cancun"), date(2026, 12, 5))
            .unwrap();
        assert_eq!(price, 18_000.0);

        // Reversed declaration order flips the winner.
        let config = config_with_seasons(vec![
            season("holiday", &[12], 1.5),
            season("high", &[12, 1], 1.2),
        ]);
        let price = resolve_price(&config, &DestinationId::from("cancun"), date(2026, 12, 5))
            .unwrap();
        assert_eq!(price, 22_500.0);
    }

    #[test]
    fn test_multiplier_result_is_rounded_to_whole_units() {
        let config = config_with_seasons(vec![season("odd", &[4], 1.151)]);
        let price = resolve_price(&config, &DestinationId::from("cancun"), date(2026, 4, 2))
            .unwrap();
        assert_eq!(price, (15_000.0_f64 * 1.151).round());
        assert_eq!(price.fract(), 0.0);
    }

    #[test]
    fn test_package_price_requires_an_adult() {
        let err = calculate_package_price(15_000.0, 0, 2, 0.25).unwrap_err();
        assert_eq!(err, ValidationError::TooFewAdults(0));
    }

    #[test]
    fn test_package_price_adults_only() {
        let pricing = calculate_package_price(15_000.0, 2, 0, 0.25).unwrap();
        assert_eq!(pricing.total_price, 30_000.0);
        assert_eq!(pricing.price_per_person, 15_000.0);
    }

    #[test]
    fn test_package_price_rounds_once_at_the_end() {
        // 1 adult at 1001.50 plus 2 children at 0.25 discount:
        // adult line = 1001.50, child line = 500.75.
        // Per-line rounding would publish 1002 + 501 = 1503; the contract is
        // a single terminal rounding: round(1502.25) = 1502.
        let pricing = calculate_package_price(1_001.5, 1, 2, 0.25).unwrap();
        assert_eq!(pricing.total_price, 1_502.0);

        let per_line = 1_001.5_f64.round() + (2.0_f64 * 1_001.5 * 0.25).round();
        assert_eq!(per_line, 1_503.0);
        assert_ne!(pricing.total_price, per_line);
    }

    #[test]
    fn test_child_unit_price_is_display_rounding_only() {
        let pricing = calculate_package_price(15_000.0, 2, 3, 0.25).unwrap();
        assert_eq!(pricing.child_unit_price, 3_750.0);
        assert_eq!(pricing.total_price, 41_250.0);
    }
}
