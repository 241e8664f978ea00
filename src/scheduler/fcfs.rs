//! First-come-first-serve dispatch.
//!
//! Processes run to completion in arrival order; equal arrivals keep
//! their input order.

use crate::models::{Process, ScheduleResult, ScheduledProcess, TimelineSegment};

use super::arrival_order;

/// Schedules a validated process set.
pub(super) fn schedule(processes: &[Process]) -> ScheduleResult {
    let mut result = ScheduleResult::new();
    let mut clock = 0;

    for idx in arrival_order(processes) {
        let process = &processes[idx];
        let start = clock.max(process.arrival_time);
        if start > clock {
            tracing::debug!(from = clock, to = start, "cpu idle until next arrival");
        }
        // Bounded by the validated horizon.
        let end = start + process.burst_time;
        tracing::debug!(process = %process.id, start, end, "fcfs dispatch");

        result.push_segment(TimelineSegment::new(process, start, end));
        result.push_process(ScheduledProcess::new(process.clone(), start, end));
        clock = end;
    }

    result
}
