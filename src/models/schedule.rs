//! Schedule result model.
//!
//! A schedule result is the output of one scheduling run: one entry per
//! input process with its derived timings, and the chronological CPU
//! timeline (Gantt trace) that produced them.
//!
//! # Reference
//! Silberschatz et al. (2018), "Operating System Concepts", Ch. 5.3

use serde::{Deserialize, Serialize};

use super::Process;

/// One contiguous slice of CPU occupation by one process.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TimelineSegment {
    /// Process occupying the CPU.
    pub process_id: String,
    /// Slice start (inclusive).
    pub start_time: i64,
    /// Slice end (exclusive).
    pub end_time: i64,
    /// Presentation color copied from the process.
    pub color: String,
}

/// A process together with the timings derived by a scheduling run.
///
/// `start_time` is the first dispatch; for preemptive runs the process may
/// have been interrupted between `start_time` and `end_time`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScheduledProcess {
    /// The original input record.
    #[serde(flatten)]
    pub process: Process,
    /// First dispatch time.
    pub start_time: i64,
    /// Completion time.
    pub end_time: i64,
    /// `turnaround_time - burst_time`.
    pub waiting_time: i64,
    /// `end_time - arrival_time`.
    pub turnaround_time: i64,
    /// `start_time - arrival_time`.
    pub response_time: i64,
}

/// Output of one scheduling run.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScheduleResult {
    /// One entry per input process.
    pub processes: Vec<ScheduledProcess>,
    /// CPU slices in execution order.
    pub timeline: Vec<TimelineSegment>,
}

impl TimelineSegment {
    /// Creates a segment for `process` covering `[start_time, end_time)`.
    pub fn new(process: &Process, start_time: i64, end_time: i64) -> Self {
        Self {
            process_id: process.id.clone(),
            start_time,
            end_time,
            color: process.color.clone(),
        }
    }

    /// Slice length in ticks.
    #[inline]
    pub fn duration(&self) -> i64 {
        self.end_time - self.start_time
    }
}

impl ScheduledProcess {
    /// Finalizes a process from its first dispatch and completion times.
    pub fn new(process: Process, first_dispatch: i64, end_time: i64) -> Self {
        let turnaround_time = end_time - process.arrival_time;
        let waiting_time = turnaround_time - process.burst_time;
        let response_time = first_dispatch - process.arrival_time;
        Self {
            process,
            start_time: first_dispatch,
            end_time,
            waiting_time,
            turnaround_time,
            response_time,
        }
    }

    /// Process identifier.
    #[inline]
    pub fn id(&self) -> &str {
        &self.process.id
    }
}

impl ScheduleResult {
    /// Creates an empty result.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a timeline slice.
    pub fn push_segment(&mut self, segment: TimelineSegment) {
        self.timeline.push(segment);
    }

    /// Appends a finalized process.
    pub fn push_process(&mut self, process: ScheduledProcess) {
        self.processes.push(process);
    }

    /// Finds the scheduled entry for a process.
    pub fn process(&self, process_id: &str) -> Option<&ScheduledProcess> {
        self.processes.iter().find(|p| p.id() == process_id)
    }

    /// Returns all timeline slices of a process, in execution order.
    pub fn segments_for(&self, process_id: &str) -> Vec<&TimelineSegment> {
        self.timeline
            .iter()
            .filter(|s| s.process_id == process_id)
            .collect()
    }

    /// Latest end time on the timeline (0 when empty).
    pub fn makespan(&self) -> i64 {
        self.timeline.iter().map(|s| s.end_time).max().unwrap_or(0)
    }

    /// Total ticks the CPU was occupied.
    pub fn busy_time(&self) -> i64 {
        self.timeline.iter().map(TimelineSegment::duration).sum()
    }

    /// Ticks in `[0, makespan)` where the CPU had nothing to run.
    pub fn idle_time(&self) -> i64 {
        self.makespan() - self.busy_time()
    }

    /// Idle intervals `(start, end)` in `[0, makespan)`.
    pub fn idle_gaps(&self) -> Vec<(i64, i64)> {
        let mut gaps = Vec::new();
        let mut cursor = 0;
        for segment in &self.timeline {
            if segment.start_time > cursor {
                gaps.push((cursor, segment.start_time));
            }
            cursor = cursor.max(segment.end_time);
        }
        gaps
    }

    /// Busy time over makespan. `None` for an empty timeline.
    pub fn cpu_utilization(&self) -> Option<f64> {
        let makespan = self.makespan();
        if makespan <= 0 {
            return None;
        }
        Some(self.busy_time() as f64 / makespan as f64)
    }

    /// Number of dispatches that hand the CPU to a different process.
    pub fn context_switches(&self) -> usize {
        self.timeline
            .windows(2)
            .filter(|pair| pair[0].process_id != pair[1].process_id)
            .count()
    }

    /// Process IDs ordered by completion time (stable on ties).
    pub fn completion_order(&self) -> Vec<&str> {
        let mut finished: Vec<&ScheduledProcess> = self.processes.iter().collect();
        finished.sort_by_key(|p| p.end_time);
        finished.into_iter().map(ScheduledProcess::id).collect()
    }

    /// Number of scheduled processes.
    pub fn process_count(&self) -> usize {
        self.processes.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_result() -> ScheduleResult {
        let p1 = Process::new("P1", 0, 5).with_color("#3B82F6");
        let p2 = Process::new("P2", 8, 3).with_color("#EF4444");
        let mut r = ScheduleResult::new();
        r.push_segment(TimelineSegment::new(&p1, 0, 3));
        r.push_segment(TimelineSegment::new(&p1, 3, 5));
        r.push_segment(TimelineSegment::new(&p2, 8, 11));
        r.push_process(ScheduledProcess::new(p1, 0, 5));
        r.push_process(ScheduledProcess::new(p2, 8, 11));
        r
    }

    #[test]
    fn test_scheduled_process_derivation() {
        let sp = ScheduledProcess::new(Process::new("P2", 1, 3), 5, 8);
        assert_eq!(sp.start_time, 5);
        assert_eq!(sp.end_time, 8);
        assert_eq!(sp.turnaround_time, 7);
        assert_eq!(sp.waiting_time, 4);
        assert_eq!(sp.response_time, 4);
    }

    #[test]
    fn test_segment_carries_color() {
        let p = Process::new("P1", 0, 5).with_color("#10B981");
        let s = TimelineSegment::new(&p, 2, 4);
        assert_eq!(s.process_id, "P1");
        assert_eq!(s.color, "#10B981");
        assert_eq!(s.duration(), 2);
    }

    #[test]
    fn test_makespan_busy_idle() {
        let r = sample_result();
        assert_eq!(r.makespan(), 11);
        assert_eq!(r.busy_time(), 8);
        assert_eq!(r.idle_time(), 3);
        assert_eq!(r.idle_gaps(), vec![(5, 8)]);
    }

    #[test]
    fn test_cpu_utilization() {
        let r = sample_result();
        let util = r.cpu_utilization().unwrap();
        assert!((util - 8.0 / 11.0).abs() < 1e-10);
        assert!(ScheduleResult::new().cpu_utilization().is_none());
    }

    #[test]
    fn test_context_switches() {
        // P1 → P1 is a continuation, P1 → P2 is a switch
        assert_eq!(sample_result().context_switches(), 1);
    }

    #[test]
    fn test_segments_for() {
        let r = sample_result();
        assert_eq!(r.segments_for("P1").len(), 2);
        assert_eq!(r.segments_for("P2").len(), 1);
        assert!(r.segments_for("P9").is_empty());
    }

    #[test]
    fn test_process_lookup_and_order() {
        let r = sample_result();
        assert_eq!(r.process("P2").unwrap().end_time, 11);
        assert!(r.process("P9").is_none());
        assert_eq!(r.completion_order(), vec!["P1", "P2"]);
        assert_eq!(r.process_count(), 2);
    }

    #[test]
    fn test_empty_result() {
        let r = ScheduleResult::new();
        assert_eq!(r.makespan(), 0);
        assert_eq!(r.busy_time(), 0);
        assert!(r.idle_gaps().is_empty());
        assert_eq!(r.context_switches(), 0);
    }

    #[test]
    fn test_scheduled_process_json_is_flat() {
        let sp = ScheduledProcess::new(Process::new("P1", 0, 5), 0, 5);
        let json = serde_json::to_value(&sp).unwrap();
        assert_eq!(json["id"], "P1");
        assert_eq!(json["burstTime"], 5);
        assert_eq!(json["turnaroundTime"], 5);
        assert_eq!(json["waitingTime"], 0);
    }
}
