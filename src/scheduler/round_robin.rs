//! Round-robin (preemptive) dispatch.
//!
//! # Algorithm
//!
//! Ready processes wait in a FIFO queue. The front process runs for
//! `min(quantum, remaining)` ticks. Processes that arrived during the
//! slice are enqueued **before** the preempted process returns to the
//! back of the queue.
//!
//! Working state lives in an index-addressed arena parallel to the input
//! slice; the queues hold indices, never copies of records.
//!
//! # Reference
//! Silberschatz et al. (2018), "Operating System Concepts", Ch. 5.3.3

use std::collections::VecDeque;

use crate::models::{Process, ScheduleResult, ScheduledProcess, TimelineSegment};

use super::arrival_order;

/// Per-run bookkeeping for one process.
#[derive(Debug, Clone, Copy)]
struct WorkingState {
    remaining: i64,
    first_dispatch: Option<i64>,
}

/// Schedules a validated process set with a validated quantum.
pub(super) fn schedule(processes: &[Process], quantum: i64) -> ScheduleResult {
    let mut result = ScheduleResult::new();
    let mut work: Vec<WorkingState> = processes
        .iter()
        .map(|p| WorkingState {
            remaining: p.burst_time,
            first_dispatch: None,
        })
        .collect();
    let mut pending: VecDeque<usize> = arrival_order(processes).into();
    let mut ready: VecDeque<usize> = VecDeque::with_capacity(processes.len());
    let mut completed = 0;
    let mut clock = 0;

    while completed < processes.len() {
        admit(processes, &mut pending, &mut ready, clock);

        let Some(idx) = ready.pop_front() else {
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

        let process = &processes[idx];
        let state = &mut work[idx];
        let start = clock;
        let first_dispatch = *state.first_dispatch.get_or_insert(start);
        let slice = quantum.min(state.remaining);
        state.remaining -= slice;
        // Never passes max(arrival) + sum(burst), checked during validation.
        clock += slice;
        tracing::debug!(
            process = %process.id,
            start,
            end = clock,
            remaining = state.remaining,
            "round-robin slice"
        );
        result.push_segment(TimelineSegment::new(process, start, clock));

        // Arrivals during the slice queue ahead of the preempted process.
        admit(processes, &mut pending, &mut ready, clock);

        if state.remaining > 0 {
            ready.push_back(idx);
        } else {
            result.push_process(ScheduledProcess::new(process.clone(), first_dispatch, clock));
            completed += 1;
        }
    }

    result
}

fn admit(
    processes: &[Process],
    pending: &mut VecDeque<usize>,
    ready: &mut VecDeque<usize>,
    clock: i64,
) {
    while let Some(&next) = pending.front() {
        if !processes[next].has_arrived(clock) {
            break;
        }
        tracing::trace!(process = %processes[next].id, clock, "admitted to ready queue");
        ready.push_back(next);
        pending.pop_front();
    }
}
