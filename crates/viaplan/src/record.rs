//! Simulation records
//!
//! One [`SimulationRecord`] is written per completed simulation: the user's
//! inputs, every derived figure, a UTC timestamp, and whatever attribution
//! tags rode in on the session. The engine never reads these back — the sink
//! is a write-only collaborator standing in for the analytics store.

use std::collections::BTreeMap;
use std::fmt;
use std::io::Write;
use std::path::PathBuf;

use jiff::Timestamp;
use serde::{Deserialize, Serialize};
use tracing::info;
use viaplan_core::model::{PlanInput, VacationPlan};

/// Errors for sink operations
#[derive(Debug)]
pub enum SinkError {
    /// I/O error (file not found, permission denied, etc.)
    Io(String),
    /// Record could not be serialized
    Serialize(String),
}

impl fmt::Display for SinkError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SinkError::Io(msg) => write!(f, "IO error: {msg}"),
            SinkError::Serialize(msg) => write!(f, "serialization error: {msg}"),
        }
    }
}

impl std::error::Error for SinkError {}

/// Durable record of one completed simulation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimulationRecord {
    pub input: PlanInput,
    pub plan: VacationPlan,
    pub recorded_at: Timestamp,
    /// Attribution tags (utm parameters, variant id, ...); sorted so records
    /// serialize identically run to run.
    #[serde(default)]
    pub attribution: BTreeMap<String, String>,
}

impl SimulationRecord {
    pub fn new(
        input: PlanInput,
        plan: VacationPlan,
        recorded_at: Timestamp,
        attribution: BTreeMap<String, String>,
    ) -> Self {
        Self {
            input,
            plan,
            recorded_at,
            attribution,
        }
    }
}

/// Destination for finished simulation records.
pub trait PlanSink {
    fn record(&mut self, record: &SimulationRecord) -> Result<(), SinkError>;
}

/// Sink appending one JSON line per record to a local file.
pub struct JsonlSink {
    path: PathBuf,
}

impl JsonlSink {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }
}

impl PlanSink for JsonlSink {
    fn record(&mut self, record: &SimulationRecord) -> Result<(), SinkError> {
        let line =
            serde_json::to_string(record).map_err(|e| SinkError::Serialize(e.to_string()))?;

        let mut file = std::fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)
            .map_err(|e| SinkError::Io(e.to_string()))?;
        writeln!(file, "{line}").map_err(|e| SinkError::Io(e.to_string()))?;

        info!(
            destination = %record.input.destination_id,
            path = %self.path.display(),
            "simulation record written"
        );
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use jiff::civil::date;
    use viaplan_core::compute_vacation_plan;
    use viaplan_core::model::{DestinationId, PricingConfig};

    fn sample_record() -> SimulationRecord {
        let config = PricingConfig::fallback();
        let input = PlanInput {
            destination_id: DestinationId::from("cancun"),
            travel_date: date(2026, 6, 10),
            adults: 2,
            children: 1,
            monthly_salary: 12_000.0,
            weekly_deposit: 900.0,
        };
        let plan = compute_vacation_plan(&input, &config, date(2025, 9, 1)).unwrap();
        let mut attribution = BTreeMap::new();
        attribution.insert("utm_source".to_string(), "meta".to_string());
        attribution.insert("variant".to_string(), "control".to_string());
        SimulationRecord::new(input, plan, "2025-09-01T12:00:00Z".parse().unwrap(), attribution)
    }

    #[test]
    fn test_jsonl_sink_appends_one_line_per_record() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("records.jsonl");
        let mut sink = JsonlSink::new(path.clone());

        let record = sample_record();
        sink.record(&record).unwrap();
        sink.record(&record).unwrap();

        let contents = std::fs::read_to_string(&path).unwrap();
        let lines: Vec<_> = contents.lines().collect();
        assert_eq!(lines.len(), 2);

        let parsed: SimulationRecord = serde_json::from_str(lines[0]).unwrap();
        assert_eq!(parsed, record);
    }

    #[test]
    fn test_record_round_trips_attribution_tags() {
        let record = sample_record();
        let json = serde_json::to_string(&record).unwrap();
        let back: SimulationRecord = serde_json::from_str(&json).unwrap();
        assert_eq!(back.attribution["utm_source"], "meta");
        assert_eq!(back.attribution["variant"], "control");
    }
}
