//! Tabular export of a single-strategy run.
//!
//! Layout: a header row, one row per scheduled process, a blank separator
//! row, then one row per average:
//!
//! ```text
//! Process ID,Arrival Time,Burst Time,Start Time,End Time,Waiting Time,Turnaround Time,Response Time
//! P1,0,5,0,5,0,5,0
//! P2,1,3,5,8,4,7,4
//!
//! Avg Waiting Time,2.00
//! Avg Turnaround Time,6.00
//! Avg Response Time,2.00
//! ```

use crate::models::ScheduleResult;
use crate::scheduler::{Algorithm, Metric, MetricsSummary};

/// Column headers of the per-process table.
pub const CSV_HEADER: [&str; 8] = [
    "Process ID",
    "Arrival Time",
    "Burst Time",
    "Start Time",
    "End Time",
    "Waiting Time",
    "Turnaround Time",
    "Response Time",
];

/// Builds the export table as rows of cells.
pub fn csv_rows(result: &ScheduleResult, summary: &MetricsSummary) -> Vec<Vec<String>> {
    let mut rows = Vec::with_capacity(result.processes.len() + 5);
    rows.push(CSV_HEADER.iter().map(|h| h.to_string()).collect());

    for p in &result.processes {
        rows.push(vec![
            p.process.id.clone(),
            p.process.arrival_time.to_string(),
            p.process.burst_time.to_string(),
            p.start_time.to_string(),
            p.end_time.to_string(),
            p.waiting_time.to_string(),
            p.turnaround_time.to_string(),
            p.response_time.to_string(),
        ]);
    }

    rows.push(Vec::new());
    for metric in [Metric::WaitingTime, Metric::TurnaroundTime, Metric::ResponseTime] {
        rows.push(vec![
            metric.average_label().to_string(),
            format!("{:.2}", summary.get(metric)),
        ]);
    }
    rows
}

/// Renders the export table as comma-separated text (`\n` line endings).
pub fn to_csv(result: &ScheduleResult, summary: &MetricsSummary) -> String {
    csv_rows(result, summary)
        .iter()
        .map(|row| {
            row.iter()
                .map(|cell| escape(cell))
                .collect::<Vec<_>>()
                .join(",")
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Suggested file name for an export of `algorithm`.
pub fn export_file_name(algorithm: Algorithm) -> String {
    format!("cpu-scheduling-{}-results.csv", algorithm.id())
}

fn escape(cell: &str) -> String {
    if cell.contains([',', '"', '\n', '\r']) {
        format!("\"{}\"", cell.replace('"', "\"\""))
    } else {
        cell.to_string()
    }
}
