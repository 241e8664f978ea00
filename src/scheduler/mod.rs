//! Single-CPU scheduling strategies and metrics.
//!
//! Four classical disciplines share one contract: take a validated set of
//! processes, simulate the CPU clock, and return a [`ScheduleResult`] with
//! exactly one entry per process and a timeline accounting for every tick
//! of CPU time consumed.
//!
//! # Algorithms
//!
//! | Strategy | Preemptive | Selection |
//! |----------|-----------|-----------|
//! | FCFS | no | earliest arrival |
//! | SJF | no | shortest burst, then arrival, then input order |
//! | Priority | no | lowest priority value, then arrival, then input order |
//! | Round Robin | yes | FIFO ready queue, fixed quantum |
//!
//! All strategies are pure functions of their input: the caller's records
//! are only borrowed, and per-run working state is discarded on return.
//!
//! # References
//!
//! - Silberschatz et al. (2018), "Operating System Concepts", Ch. 5.3
//! - Tanenbaum & Bos (2014), "Modern Operating Systems", Ch. 2.4

mod fcfs;
mod metrics;
mod non_preemptive;
mod round_robin;
mod selection;

pub use metrics::{Metric, MetricsSummary, ScheduleStats};
pub use selection::SelectionRule;

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{ParseAlgorithmError, ScheduleError};
use crate::models::{Process, ScheduleResult};
use crate::validation::{validate_processes, validate_quantum};

/// Quantum used when `roundrobin` is selected without an explicit value.
pub const DEFAULT_TIME_QUANTUM: i64 = 2;

/// A scheduling discipline.
///
/// Serializes as its identifier (`fcfs`, `sjf`, `priority`, `roundrobin`);
/// the round-robin quantum travels separately and defaults to
/// [`DEFAULT_TIME_QUANTUM`] when parsed from an identifier alone.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum Algorithm {
    /// First-come-first-serve (non-preemptive).
    Fcfs,
    /// Shortest-job-first (non-preemptive).
    Sjf,
    /// Priority scheduling (non-preemptive, lower value first).
    Priority,
    /// Round robin with a fixed time quantum.
    RoundRobin {
        /// Maximum ticks granted per dispatch.
        quantum: i64,
    },
}

impl Algorithm {
    /// All four strategies in comparison order.
    pub fn all(quantum: i64) -> [Self; 4] {
        [
            Self::Fcfs,
            Self::Sjf,
            Self::Priority,
            Self::RoundRobin { quantum },
        ]
    }

    /// Strategy identifier (`fcfs`, `sjf`, `priority`, `roundrobin`).
    pub fn id(&self) -> &'static str {
        match self {
            Self::Fcfs => "fcfs",
            Self::Sjf => "sjf",
            Self::Priority => "priority",
            Self::RoundRobin { .. } => "roundrobin",
        }
    }

    /// Short label used in comparisons.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Fcfs => "FCFS",
            Self::Sjf => "SJF",
            Self::Priority => "Priority",
            Self::RoundRobin { .. } => "Round Robin",
        }
    }

    /// Full display name.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Fcfs => "First-Come First-Serve (FCFS)",
            Self::Sjf => "Shortest Job First (SJF)",
            Self::Priority => "Priority Scheduling",
            Self::RoundRobin { .. } => "Round Robin",
        }
    }

    /// One-line description.
    pub fn description(&self) -> &'static str {
        match self {
            Self::Fcfs => "Processes are executed in the order they arrive",
            Self::Sjf => "Process with shortest burst time is executed first",
            Self::Priority => "Process with highest priority is executed first",
            Self::RoundRobin { .. } => "Each process gets a fixed time quantum in circular order",
        }
    }

    /// Whether a running process can be interrupted.
    pub fn is_preemptive(&self) -> bool {
        matches!(self, Self::RoundRobin { .. })
    }

    /// Replaces the round-robin quantum; other strategies are unchanged.
    pub fn with_quantum(self, quantum: i64) -> Self {
        match self {
            Self::RoundRobin { .. } => Self::RoundRobin { quantum },
            other => other,
        }
    }

    /// Runs this strategy over `processes`.
    ///
    /// # Errors
    /// `ScheduleError::InvalidInput` for an empty set, duplicate IDs,
    /// burst times below 1, negative arrivals, or a quantum below 1.
    pub fn run(&self, processes: &[Process]) -> Result<ScheduleResult, ScheduleError> {
        match *self {
            Self::Fcfs => fcfs(processes),
            Self::Sjf => sjf(processes),
            Self::Priority => priority(processes),
            Self::RoundRobin { quantum } => round_robin(processes, quantum),
        }
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

impl FromStr for Algorithm {
    type Err = ParseAlgorithmError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "fcfs" => Ok(Self::Fcfs),
            "sjf" => Ok(Self::Sjf),
            "priority" => Ok(Self::Priority),
            "roundrobin" | "round_robin" | "rr" => Ok(Self::RoundRobin {
                quantum: DEFAULT_TIME_QUANTUM,
            }),
            _ => Err(ParseAlgorithmError(s.to_string())),
        }
    }
}

impl TryFrom<String> for Algorithm {
    type Error = ParseAlgorithmError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Algorithm> for String {
    fn from(algorithm: Algorithm) -> Self {
        algorithm.id().to_string()
    }
}

/// First-come-first-serve scheduling.
pub fn fcfs(processes: &[Process]) -> Result<ScheduleResult, ScheduleError> {
    check_processes(processes)?;
    Ok(fcfs::schedule(processes))
}

/// Shortest-job-first (non-preemptive) scheduling.
pub fn sjf(processes: &[Process]) -> Result<ScheduleResult, ScheduleError> {
    check_processes(processes)?;
    Ok(non_preemptive::schedule(processes, SelectionRule::ShortestBurst))
}

/// Priority (non-preemptive) scheduling. Lower priority values run first.
pub fn priority(processes: &[Process]) -> Result<ScheduleResult, ScheduleError> {
    check_processes(processes)?;
    Ok(non_preemptive::schedule(processes, SelectionRule::LowestPriority))
}

/// Round-robin (preemptive) scheduling with a fixed quantum.
pub fn round_robin(processes: &[Process], quantum: i64) -> Result<ScheduleResult, ScheduleError> {
    let mut errors = validate_processes(processes).err().unwrap_or_default();
    errors.extend(validate_quantum(quantum).err().unwrap_or_default());
    if !errors.is_empty() {
        tracing::warn!(count = errors.len(), "rejected round-robin input");
        return Err(ScheduleError::InvalidInput(errors));
    }
    Ok(round_robin::schedule(processes, quantum))
}

fn check_processes(processes: &[Process]) -> Result<(), ScheduleError> {
    validate_processes(processes).map_err(|errors| {
        tracing::warn!(count = errors.len(), "rejected process set");
        ScheduleError::InvalidInput(errors)
    })
}

/// Process indices ordered by arrival time, ties in input order.
fn arrival_order(processes: &[Process]) -> Vec<usize> {
    let mut order: Vec<usize> = (0..processes.len()).collect();
    order.sort_by_key(|&i| processes[i].arrival_time);
    order
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;
    use crate::validation::ValidationErrorKind;
    use crate::workload::{random_processes, sample_processes, WorkloadSpec};

    fn random_workloads() -> Vec<Vec<Process>> {
        let spec = WorkloadSpec::new(12)
            .with_max_arrival(30)
            .with_burst_range(1, 9)
            .with_priority_range(0, 4);
        (0..20).map(|seed| random_processes(&spec, seed)).collect()
    }

    #[test]
    fn test_conservation_all_strategies() {
        for processes in random_workloads() {
            for algorithm in Algorithm::all(3) {
                let result = algorithm.run(&processes).unwrap();
                assert_eq!(result.process_count(), processes.len());

                let mut run_time: HashMap<&str, i64> = HashMap::new();
                for s in &result.timeline {
                    assert!(s.end_time > s.start_time);
                    *run_time.entry(s.process_id.as_str()).or_insert(0) += s.duration();
                }
                for p in &processes {
                    assert_eq!(run_time[p.id.as_str()], p.burst_time, "{algorithm} {}", p.id);
                    assert!(result.process(&p.id).is_some());
                }

                // Chronological and non-overlapping
                for pair in result.timeline.windows(2) {
                    assert!(pair[0].end_time <= pair[1].start_time);
                }
            }
        }
    }

    #[test]
    fn test_idle_gaps_only_at_arrivals() {
        for processes in random_workloads() {
            for algorithm in Algorithm::all(2) {
                let result = algorithm.run(&processes).unwrap();
                for (_, gap_end) in result.idle_gaps() {
                    assert!(processes.iter().any(|p| p.arrival_time == gap_end));
                }
            }
        }
    }

    #[test]
    fn test_derived_metrics_consistent() {
        for processes in random_workloads() {
            for algorithm in Algorithm::all(4) {
                let result = algorithm.run(&processes).unwrap();
                for sp in &result.processes {
                    assert_eq!(sp.turnaround_time, sp.end_time - sp.process.arrival_time);
                    assert_eq!(sp.waiting_time, sp.turnaround_time - sp.process.burst_time);
                    assert_eq!(sp.response_time, sp.start_time - sp.process.arrival_time);
                    assert!(sp.response_time >= 0);
                    assert!(sp.waiting_time >= sp.response_time);
                    if !algorithm.is_preemptive() {
                        assert_eq!(sp.waiting_time, sp.response_time);
                    }
                }
            }
        }
    }

    #[test]
    fn test_idempotence() {
        let processes = sample_processes();
        for algorithm in Algorithm::all(2) {
            let first = algorithm.run(&processes).unwrap();
            let second = algorithm.run(&processes).unwrap();
            assert_eq!(first, second);
        }
    }

    #[test]
    fn test_error_boundaries() {
        let empty: Vec<Process> = Vec::new();
        let dup = vec![Process::new("P1", 0, 3), Process::new("P1", 1, 2)];
        let zero = vec![Process::new("P1", 0, 0)];
        let negative = vec![Process::new("P1", 0, -4)];

        for algorithm in Algorithm::all(2) {
            for bad in [&empty[..], &dup[..], &zero[..], &negative[..]] {
                assert!(matches!(
                    algorithm.run(bad),
                    Err(ScheduleError::InvalidInput(_))
                ));
            }
        }

        let ok = sample_processes();
        for q in [0, -1] {
            let err = round_robin(&ok, q).unwrap_err();
            assert!(err.has_kind(ValidationErrorKind::NonPositiveQuantum));
        }
    }

    #[test]
    fn test_clock_overflow_rejected() {
        let late = vec![Process::new("P1", i64::MAX - 2, 5)];
        let long = vec![Process::new("P1", 0, i64::MAX), Process::new("P2", 0, 1)];
        let rejected = |result: Result<ScheduleResult, ScheduleError>| {
            result
                .unwrap_err()
                .has_kind(ValidationErrorKind::HorizonOverflow)
        };

        assert!(rejected(fcfs(&late)));
        assert!(rejected(fcfs(&long)));
        assert!(rejected(sjf(&late)));
        assert!(rejected(sjf(&long)));
        assert!(rejected(priority(&late)));
        assert!(rejected(priority(&long)));
        assert!(rejected(round_robin(&late, 3)));
        assert!(rejected(round_robin(&long, i64::MAX)));
    }

    #[test]
    fn test_clock_at_limit_runs() {
        // Total burst is exactly i64::MAX.
        let processes = vec![
            Process::new("A", 0, i64::MAX / 2 + 1).with_priority(1),
            Process::new("B", 0, i64::MAX / 2).with_priority(0),
        ];
        for algorithm in Algorithm::all(i64::MAX) {
            let result = algorithm.run(&processes).unwrap();
            assert_eq!(result.makespan(), i64::MAX, "{algorithm}");
            let summary = MetricsSummary::from_result(&result).unwrap();
            assert!(summary.avg_turnaround_time > (i64::MAX / 2) as f64, "{algorithm}");
        }
    }

    #[test]
    fn test_parse_identifiers() {
        assert_eq!("fcfs".parse::<Algorithm>().unwrap(), Algorithm::Fcfs);
        assert_eq!("SJF".parse::<Algorithm>().unwrap(), Algorithm::Sjf);
        assert_eq!("priority".parse::<Algorithm>().unwrap(), Algorithm::Priority);
        assert_eq!(
            "roundrobin".parse::<Algorithm>().unwrap(),
            Algorithm::RoundRobin {
                quantum: DEFAULT_TIME_QUANTUM
            }
        );
        assert!("mlfq".parse::<Algorithm>().is_err());
    }

    #[test]
    fn test_identifier_round_trip_through_display() {
        for algorithm in Algorithm::all(DEFAULT_TIME_QUANTUM) {
            assert_eq!(algorithm.to_string().parse::<Algorithm>().unwrap(), algorithm);
        }
    }

    #[test]
    fn test_serde_identifier() {
        let json = serde_json::to_string(&Algorithm::RoundRobin { quantum: 5 }).unwrap();
        assert_eq!(json, "\"roundrobin\"");
        let parsed: Algorithm = serde_json::from_str("\"priority\"").unwrap();
        assert_eq!(parsed, Algorithm::Priority);
        assert!(serde_json::from_str::<Algorithm>("\"lottery\"").is_err());
    }

    #[test]
    fn test_with_quantum() {
        assert_eq!(
            Algorithm::RoundRobin { quantum: 2 }.with_quantum(7),
            Algorithm::RoundRobin { quantum: 7 }
        );
        assert_eq!(Algorithm::Sjf.with_quantum(7), Algorithm::Sjf);
    }

    #[test]
    fn test_labels() {
        let labels: Vec<&str> = Algorithm::all(1).iter().map(Algorithm::label).collect();
        assert_eq!(labels, vec!["FCFS", "SJF", "Priority", "Round Robin"]);
        assert!(Algorithm::RoundRobin { quantum: 1 }.is_preemptive());
        assert!(!Algorithm::Fcfs.is_preemptive());
    }
}
