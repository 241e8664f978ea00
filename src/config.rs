//! Simulation configuration.
//!
//! A configuration bundles a process set with the selected strategy and
//! round-robin quantum, as submitted by an input form:
//!
//! ```json
//! {
//!   "algorithm": "roundrobin",
//!   "timeQuantum": 3,
//!   "processes": [
//!     { "id": "P1", "arrivalTime": 0, "burstTime": 8, "priority": 2 }
//!   ]
//! }
//! ```
//!
//! Missing fields fall back to `fcfs`, quantum 2 and an empty process set.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::comparison::{self, ComparisonEntry};
use crate::error::ScheduleError;
use crate::models::{Process, ScheduleResult};
use crate::scheduler::{Algorithm, DEFAULT_TIME_QUANTUM};
use crate::validation::{validate_processes, validate_quantum};
use crate::workload::PROCESS_COLORS;

/// Errors raised while loading a configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Malformed JSON or unknown strategy identifier.
    #[error("parse error: {0}")]
    Parse(#[from] serde_json::Error),
    /// Well-formed but semantically invalid.
    #[error(transparent)]
    Invalid(#[from] ScheduleError),
}

/// Strategy selection plus the process set to schedule.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SimulationConfig {
    /// Selected strategy.
    pub algorithm: Algorithm,
    /// Round-robin quantum; also used for the comparison's round-robin leg.
    pub time_quantum: i64,
    /// Processes to schedule.
    pub processes: Vec<Process>,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            algorithm: Algorithm::Fcfs,
            time_quantum: DEFAULT_TIME_QUANTUM,
            processes: Vec::new(),
        }
    }
}

impl SimulationConfig {
    /// Creates a configuration for `algorithm` over `processes`.
    pub fn new(algorithm: Algorithm, processes: Vec<Process>) -> Self {
        let time_quantum = match algorithm {
            Algorithm::RoundRobin { quantum } => quantum,
            _ => DEFAULT_TIME_QUANTUM,
        };
        Self {
            algorithm,
            time_quantum,
            processes,
        }
    }

    /// Sets the round-robin quantum.
    pub fn with_time_quantum(mut self, quantum: i64) -> Self {
        self.time_quantum = quantum;
        self
    }

    /// Parses configuration from JSON, fills missing colors, and validates.
    pub fn from_json_str(input: &str) -> Result<Self, ConfigError> {
        let mut cfg: SimulationConfig = serde_json::from_str(input)?;
        cfg.assign_missing_colors();
        cfg.validate()?;
        Ok(cfg)
    }

    /// Validates the process set and the quantum.
    ///
    /// The quantum is checked even when `algorithm` is not round robin:
    /// [`compare`](Self::compare) always runs a round-robin leg with
    /// `time_quantum`, so a configuration that loads must be comparable.
    pub fn validate(&self) -> Result<(), ScheduleError> {
        let mut errors = validate_processes(&self.processes).err().unwrap_or_default();
        errors.extend(validate_quantum(self.time_quantum).err().unwrap_or_default());
        if errors.is_empty() {
            Ok(())
        } else {
            Err(ScheduleError::InvalidInput(errors))
        }
    }

    /// The selected strategy with the configured quantum applied.
    pub fn strategy(&self) -> Algorithm {
        self.algorithm.with_quantum(self.time_quantum)
    }

    /// Runs the selected strategy.
    pub fn run(&self) -> Result<ScheduleResult, ScheduleError> {
        self.strategy().run(&self.processes)
    }

    /// Runs all four strategies with the configured quantum.
    pub fn compare(&self) -> Result<Vec<ComparisonEntry>, ScheduleError> {
        comparison::compare(&self.processes, self.time_quantum)
    }

    /// Gives every uncolored process a palette color by position.
    pub fn assign_missing_colors(&mut self) {
        for (i, p) in self.processes.iter_mut().enumerate() {
            if p.color.is_empty() {
                p.color = PROCESS_COLORS[i % PROCESS_COLORS.len()].to_string();
            }
        }
    }
}
