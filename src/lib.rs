//! Single-CPU scheduling simulator.
//!
//! Sequences a fixed set of processes under one of four classical
//! disciplines and derives per-process and aggregate performance metrics
//! from the resulting trace.
//!
//! # Modules
//!
//! - **`models`**: Domain types — `Process`, `TimelineSegment`,
//!   `ScheduledProcess`, `ScheduleResult`
//! - **`scheduler`**: FCFS, SJF, Priority and Round Robin strategies,
//!   `MetricsSummary` and `ScheduleStats`
//! - **`comparison`**: Runs all four strategies over one process set
//! - **`validation`**: Input integrity checks (duplicate IDs, burst times, quantum)
//! - **`export`**: Row-per-process table with average rows
//! - **`config`**: JSON simulation configuration
//! - **`workload`**: Sample and seeded random process sets
//!
//! # Example
//!
//! ```
//! use u_cpu_schedule::models::Process;
//! use u_cpu_schedule::scheduler::{round_robin, MetricsSummary};
//!
//! let processes = vec![Process::new("P1", 0, 8), Process::new("P2", 1, 4)];
//! let result = round_robin(&processes, 3).unwrap();
//! assert_eq!(result.timeline.len(), 5);
//!
//! let summary = MetricsSummary::from_result(&result).unwrap();
//! assert_eq!(summary.avg_response_time, 1.0);
//! ```
//!
//! # References
//!
//! - Silberschatz et al. (2018), "Operating System Concepts", Ch. 5
//! - Tanenbaum & Bos (2014), "Modern Operating Systems", Ch. 2.4

pub mod comparison;
pub mod config;
pub mod error;
pub mod export;
pub mod models;
pub mod scheduler;
pub mod telemetry;
pub mod validation;
pub mod workload;

pub use error::{ParseAlgorithmError, ScheduleError};
