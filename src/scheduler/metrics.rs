//! Schedule performance metrics.
//!
//! Computes mean per-process timings and whole-run CPU statistics from a
//! completed schedule.
//!
//! # Metrics
//!
//! | Metric | Definition |
//! |--------|-----------|
//! | Avg Waiting Time | mean(turnaround - burst) |
//! | Avg Turnaround Time | mean(end - arrival) |
//! | Avg Response Time | mean(first dispatch - arrival) |
//! | Makespan | Latest completion time |
//! | CPU Utilization | busy ticks / makespan |
//! | Throughput | processes / makespan |
//!
//! Averages are rounded to two decimals with [`f64::round`] (half away
//! from zero).
//!
//! # Reference
//! Silberschatz et al. (2018), "Operating System Concepts", Ch. 5.2

use serde::{Deserialize, Serialize};

use crate::error::ScheduleError;
use crate::models::{ScheduleResult, ScheduledProcess};

/// Per-process timing metric.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Metric {
    /// Time spent ready but not running.
    WaitingTime,
    /// Arrival to completion.
    TurnaroundTime,
    /// Arrival to first dispatch.
    ResponseTime,
}

impl Metric {
    /// Reads this metric from a scheduled process.
    pub fn of(&self, process: &ScheduledProcess) -> i64 {
        match self {
            Self::WaitingTime => process.waiting_time,
            Self::TurnaroundTime => process.turnaround_time,
            Self::ResponseTime => process.response_time,
        }
    }

    /// Export label of the corresponding average.
    pub fn average_label(&self) -> &'static str {
        match self {
            Self::WaitingTime => "Avg Waiting Time",
            Self::TurnaroundTime => "Avg Turnaround Time",
            Self::ResponseTime => "Avg Response Time",
        }
    }
}

/// Mean waiting, turnaround and response time of one run.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MetricsSummary {
    /// Mean waiting time, two decimals.
    pub avg_waiting_time: f64,
    /// Mean turnaround time, two decimals.
    pub avg_turnaround_time: f64,
    /// Mean response time, two decimals.
    pub avg_response_time: f64,
}

impl MetricsSummary {
    /// Averages the metrics of a process list.
    ///
    /// # Errors
    /// `ScheduleError::EmptyInput` when `processes` is empty.
    pub fn calculate(processes: &[ScheduledProcess]) -> Result<Self, ScheduleError> {
        if processes.is_empty() {
            return Err(ScheduleError::EmptyInput);
        }
        // i128 totals: n turnarounds near the clock limit exceed i64.
        let mean = |metric: Metric| {
            let total: i128 = processes.iter().map(|p| i128::from(metric.of(p))).sum();
            round2(total as f64 / processes.len() as f64)
        };
        Ok(Self {
            avg_waiting_time: mean(Metric::WaitingTime),
            avg_turnaround_time: mean(Metric::TurnaroundTime),
            avg_response_time: mean(Metric::ResponseTime),
        })
    }

    /// Averages the process list of a schedule result.
    pub fn from_result(result: &ScheduleResult) -> Result<Self, ScheduleError> {
        Self::calculate(&result.processes)
    }

    /// Reads one average.
    pub fn get(&self, metric: Metric) -> f64 {
        match metric {
            Metric::WaitingTime => self.avg_waiting_time,
            Metric::TurnaroundTime => self.avg_turnaround_time,
            Metric::ResponseTime => self.avg_response_time,
        }
    }
}

/// Whole-run CPU statistics.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScheduleStats {
    /// Latest completion time.
    pub makespan: i64,
    /// Ticks the CPU was running a process.
    pub busy_time: i64,
    /// Ticks the CPU waited for arrivals.
    pub idle_time: i64,
    /// Busy fraction of the makespan (0.0..=1.0).
    pub cpu_utilization: f64,
    /// Completed processes per tick.
    pub throughput: f64,
    /// Dispatches that switched to a different process.
    pub context_switches: usize,
    /// Longest waiting time of any process.
    pub max_waiting_time: i64,
}

impl ScheduleStats {
    /// Computes statistics from a schedule result.
    pub fn calculate(result: &ScheduleResult) -> Self {
        let makespan = result.makespan();
        let throughput = if makespan > 0 {
            result.process_count() as f64 / makespan as f64
        } else {
            0.0
        };
        Self {
            makespan,
            busy_time: result.busy_time(),
            idle_time: result.idle_time(),
            cpu_utilization: result.cpu_utilization().unwrap_or(0.0),
            throughput,
            context_switches: result.context_switches(),
            max_waiting_time: result
                .processes
                .iter()
                .map(|p| p.waiting_time)
                .max()
                .unwrap_or(0),
        }
    }
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
