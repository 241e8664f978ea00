//! Non-preemptive ready-queue dispatch (SJF and priority).
//!
//! # Algorithm
//!
//! 1. Admit every pending process with `arrival_time <= clock`.
//! 2. If nothing is ready, jump the clock to the next arrival.
//! 3. Otherwise pick the best ready process by [`SelectionRule`] and run
//!    it to completion.
//!
//! Selection happens only at dispatch boundaries; a running process is
//! never interrupted.
//!
//! # Complexity
//! O(n²) in the worst case (linear scan of the ready queue per dispatch).

use std::collections::VecDeque;

use crate::models::{Process, ScheduleResult, ScheduledProcess, TimelineSegment};

use super::{arrival_order, SelectionRule};

/// Schedules a validated process set under `rule`.
pub(super) fn schedule(processes: &[Process], rule: SelectionRule) -> ScheduleResult {
    let mut result = ScheduleResult::new();
    let mut pending: VecDeque<usize> = arrival_order(processes).into();
    let mut ready: Vec<usize> = Vec::with_capacity(processes.len());
    let mut clock = 0;

    loop {
        while let Some(&next) = pending.front() {
            if !processes[next].has_arrived(clock) {
                break;
            }
            tracing::trace!(process = %processes[next].id, clock, "admitted to ready queue");
            ready.push(next);
            pending.pop_front();
        }

        let Some(pos) = rule.select(processes, &ready) else {
            match pending.front() {
                Some(&next) => {
                    let arrival = processes[next].arrival_time;
                    tracing::debug!(from = clock, to = arrival, "cpu idle until next arrival");
                    clock = arrival;
                    continue;
                }
                None => break,
            }
        };

        let process = &processes[ready.remove(pos)];
        let start = clock;
        // Bounded by the validated horizon.
        let end = start + process.burst_time;
        tracing::debug!(
            rule = rule.name(),
            process = %process.id,
            start,
            end,
            "dispatch"
        );

        result.push_segment(TimelineSegment::new(process, start, end));
        result.push_process(ScheduledProcess::new(process.clone(), start, end));
        clock = end;
    }

    result
}
