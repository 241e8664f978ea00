//! Side-by-side comparison of all four strategies.
//!
//! Runs FCFS, SJF, Priority and Round Robin over the same process set and
//! reports one [`MetricsSummary`] per strategy, in that fixed order.
//!
//! Every leg borrows the caller's records immutably, so no leg can observe
//! another leg's working state and the input is unchanged afterwards. The
//! comparison is all-or-nothing: the first failing leg aborts it.

use serde::{Deserialize, Serialize};

use crate::error::ScheduleError;
use crate::models::Process;
use crate::scheduler::{Algorithm, Metric, MetricsSummary};

/// One strategy's result within a comparison.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ComparisonEntry {
    /// Strategy that produced this entry.
    pub algorithm: Algorithm,
    /// Display label ("FCFS", "SJF", "Priority", "Round Robin").
    pub label: String,
    /// Averages of the run.
    pub summary: MetricsSummary,
}

/// Runs all four strategies sequentially.
///
/// # Errors
/// The first `ScheduleError` raised by any strategy; no partial results.
pub fn compare(processes: &[Process], quantum: i64) -> Result<Vec<ComparisonEntry>, ScheduleError> {
    let entries = Algorithm::all(quantum)
        .into_iter()
        .map(|algorithm| run_leg(algorithm, processes))
        .collect::<Result<Vec<_>, _>>()?;
    log_entries(&entries);
    Ok(entries)
}

/// Runs all four strategies on scoped threads, one leg per thread.
///
/// Produces the same entries in the same order as [`compare`].
pub fn compare_parallel(
    processes: &[Process],
    quantum: i64,
) -> Result<Vec<ComparisonEntry>, ScheduleError> {
    let outcomes: Vec<Result<ComparisonEntry, ScheduleError>> = std::thread::scope(|scope| {
        let handles: Vec<_> = Algorithm::all(quantum)
            .into_iter()
            .map(|algorithm| scope.spawn(move || run_leg(algorithm, processes)))
            .collect();
        handles
            .into_iter()
            .map(|handle| match handle.join() {
                Ok(outcome) => outcome,
                Err(panic) => std::panic::resume_unwind(panic),
            })
            .collect()
    });
    let entries = outcomes.into_iter().collect::<Result<Vec<_>, _>>()?;
    log_entries(&entries);
    Ok(entries)
}

/// Entry with the lowest value of `metric`; the earlier entry wins ties.
pub fn best_by(entries: &[ComparisonEntry], metric: Metric) -> Option<&ComparisonEntry> {
    entries.iter().reduce(|best, entry| {
        if entry.summary.get(metric) < best.summary.get(metric) {
            entry
        } else {
            best
        }
    })
}

fn run_leg(algorithm: Algorithm, processes: &[Process]) -> Result<ComparisonEntry, ScheduleError> {
    let result = algorithm.run(processes)?;
    let summary = MetricsSummary::from_result(&result)?;
    Ok(ComparisonEntry {
        algorithm,
        label: algorithm.label().to_string(),
        summary,
    })
}

fn log_entries(entries: &[ComparisonEntry]) {
    for entry in entries {
        tracing::info!(
            algorithm = %entry.label,
            avg_waiting = entry.summary.avg_waiting_time,
            avg_turnaround = entry.summary.avg_turnaround_time,
            avg_response = entry.summary.avg_response_time,
            "comparison leg"
        );
    }
}
