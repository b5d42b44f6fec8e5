//! Configuration deserialization and fallback behavior

use crate::model::{DestinationId, PricingConfig};

/// A partial document from the config store still deserializes; every omitted
/// field takes its documented default.
#[test]
fn test_partial_json_fills_defaults() {
    let json = r#"{
        "destinations": {
            "cancun": {
                "name": { "es-MX": "Cancún", "en-US": "Cancun" },
                "base_price": 22500.0
            }
        }
    }"#;
    let config: PricingConfig = serde_json::from_str(json).unwrap();

    assert_eq!(config.child_discount, 0.25);
    assert_eq!(config.savings_target_pct, 0.8);
    assert_eq!(config.loan_pct, 0.2);
    assert_eq!(config.loan_term_range.min, 6);
    assert_eq!(config.loan_term_range.max, 12);
    assert_eq!(config.max_monthly_payment_pct, 0.15);
    assert_eq!(config.currency, "MXN");
    assert_eq!(config.package_duration.min_nights, 5);
    assert_eq!(config.package_duration.max_nights, 7);
    assert_eq!(config.buffer_weeks, 1);

    let destination = &config.destinations[&DestinationId::from("cancun")];
    assert!(destination.seasons.is_empty());
    assert!(destination.price_range.is_none());
}

#[test]
fn test_empty_document_deserializes() {
    let config: PricingConfig = serde_json::from_str("{}").unwrap();
    assert!(config.destinations.is_empty());
    assert_eq!(config.currency, "MXN");
}

#[test]
fn test_fallback_carries_the_full_destination_table() {
    let config = PricingConfig::fallback();
    for slug in [
        "cancun",
        "puerto-vallarta",
        "los-cabos",
        "ciudad-de-mexico",
        "oaxaca",
        "chiapas",
    ] {
        let destination = config
            .destinations
            .get(&DestinationId::from(slug))
            .unwrap_or_else(|| panic!("fallback missing {slug}"));
        assert!(destination.base_price > 0.0);
    }
    assert_eq!(config.currency, "MXN");
}

#[test]
fn test_config_round_trips_through_json() {
    let config = PricingConfig::fallback();
    let json = serde_json::to_string(&config).unwrap();
    let back: PricingConfig = serde_json::from_str(&json).unwrap();
    assert_eq!(config, back);
}

#[test]
fn test_season_order_survives_serialization() {
    let json = r#"{
        "destinations": {
            "cancun": {
                "name": { "es-MX": "Cancún", "en-US": "Cancun" },
                "base_price": 15000.0,
                "seasons": [
                    { "name": "high", "months": [12, 1], "multiplier": 1.2 },
                    { "name": "holiday", "months": [12], "multiplier": 1.5 }
                ]
            }
        }
    }"#;
    let config: PricingConfig = serde_json::from_str(json).unwrap();
    let seasons = &config.destinations[&DestinationId::from("cancun")].seasons;
    assert_eq!(seasons[0].name, "high");
    assert_eq!(seasons[1].name, "holiday");
}
