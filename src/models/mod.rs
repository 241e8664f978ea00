//! CPU scheduling domain models.
//!
//! Provides the input record and the result types shared by every
//! scheduling strategy.
//!
//! # Domain Mappings
//!
//! | u-cpu-schedule | OS textbook | Gantt view |
//! |----------------|-------------|------------|
//! | Process | PCB (single CPU burst) | Row label |
//! | TimelineSegment | Dispatch slice | Bar |
//! | ScheduledProcess | Completed process + timings | Table row |
//! | ScheduleResult | Scheduling trace | Whole chart |

mod process;
mod schedule;

pub use process::Process;
pub use schedule::{ScheduleResult, ScheduledProcess, TimelineSegment};
