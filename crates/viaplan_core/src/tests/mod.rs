//! Integration tests for the vacation plan engine
//!
//! Tests are organized by topic:
//! - `scenarios` - End-to-end plan computations for known reference scenarios
//! - `properties` - Cross-cutting invariants (rounding, monotonicity, clamping)
//! - `config` - Configuration deserialization defaults and the fallback table

mod config;
mod scenarios;
