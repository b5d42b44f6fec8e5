//! Vacation credit simulator front-end
//!
//! The binary crate around [`viaplan_core`]: CLI argument handling, logging,
//! the pricing-config provider (file store + time-expiry cache + fallback
//! defaults), the simulation-record sink, and bilingual terminal output. All
//! financial math lives in the core crate; nothing here recomputes a formula.

pub mod format;
pub mod logging;
pub mod messages;
pub mod provider;
pub mod record;
pub mod report;

pub use logging::init_logging;
pub use provider::{ConfigProvider, ConfigStore, FileStore};
pub use record::{JsonlSink, PlanSink, SimulationRecord};
