//! Ready-queue selection rules for non-preemptive dispatch.
//!
//! # Score Convention
//! **Lower key = dispatched first.** Ties fall through to earliest arrival,
//! then to input position, so selection is fully deterministic.
//!
//! # Reference
//! Pinedo (2016), "Scheduling", Ch. 4: Priority Dispatching

use crate::models::Process;

/// Criterion for picking the next process from the ready queue.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SelectionRule {
    /// Smallest burst time first (SJF / SPT).
    ShortestBurst,
    /// Smallest priority value first.
    LowestPriority,
}

impl SelectionRule {
    /// Rule name.
    pub fn name(&self) -> &'static str {
        match self {
            Self::ShortestBurst => "SPT",
            Self::LowestPriority => "PRIORITY",
        }
    }

    /// Primary key of a process under this rule.
    pub fn key(&self, process: &Process) -> i64 {
        match self {
            Self::ShortestBurst => process.burst_time,
            Self::LowestPriority => i64::from(process.priority),
        }
    }

    /// Picks the next process among `ready` (indices into `processes`).
    ///
    /// Returns the position within `ready`, or `None` if it is empty.
    pub fn select(&self, processes: &[Process], ready: &[usize]) -> Option<usize> {
        ready
            .iter()
            .enumerate()
            .min_by_key(|&(_, &idx)| (self.key(&processes[idx]), processes[idx].arrival_time, idx))
            .map(|(pos, _)| pos)
    }
}
