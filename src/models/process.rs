//! Process record model.
//!
//! A process is the immutable input unit of a scheduling run: it becomes
//! eligible at `arrival_time` and needs `burst_time` units of CPU.
//!
//! # Time Representation
//! All times are integer ticks relative to the simulation epoch (t=0).
//!
//! # Reference
//! Silberschatz et al. (2018), "Operating System Concepts", Ch. 5

use serde::{Deserialize, Serialize};

/// A schedulable process (single CPU burst).
///
/// Field names serialize in camelCase (`arrivalTime`, `burstTime`) so
/// records produced by an input form deserialize without renaming.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Process {
    /// Unique process identifier.
    pub id: String,
    /// Tick at which the process becomes eligible to run.
    pub arrival_time: i64,
    /// Total CPU time required.
    pub burst_time: i64,
    /// Priority for priority scheduling (lower = more important).
    #[serde(default)]
    pub priority: i32,
    /// Presentation tag, carried through the engine unchanged.
    #[serde(default)]
    pub color: String,
}

impl Process {
    /// Creates a process with priority 0 and no color.
    pub fn new(id: impl Into<String>, arrival_time: i64, burst_time: i64) -> Self {
        Self {
            id: id.into(),
            arrival_time,
            burst_time,
            priority: 0,
            color: String::new(),
        }
    }

    /// Sets the priority (lower value = higher priority).
    pub fn with_priority(mut self, priority: i32) -> Self {
        self.priority = priority;
        self
    }

    /// Sets the presentation color.
    pub fn with_color(mut self, color: impl Into<String>) -> Self {
        self.color = color.into();
        self
    }

    /// Whether the process has arrived by tick `now`.
    #[inline]
    pub fn has_arrived(&self, now: i64) -> bool {
        self.arrival_time <= now
    }
}
