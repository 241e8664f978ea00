//! Input validation for scheduling runs.
//!
//! Checks structural integrity of a process set before scheduling.
//! Detects:
//! - Empty process sets
//! - Duplicate IDs
//! - Non-positive burst times
//! - Negative arrival times
//! - Non-positive round-robin quanta
//! - Simulated clocks that would overflow `i64`
//!
//! All problems are collected, not just the first one, so a caller can
//! report every offending record at once.

use std::collections::HashSet;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::models::Process;

/// Validation result.
pub type ValidationResult = Result<(), Vec<ValidationError>>;

/// A validation error.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ValidationError {
    /// Error category.
    pub kind: ValidationErrorKind,
    /// Human-readable description.
    pub message: String,
}

/// Categories of validation errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ValidationErrorKind {
    /// No processes were supplied.
    EmptyProcessSet,
    /// Two processes share the same ID.
    DuplicateId,
    /// A process needs zero or negative CPU time.
    NonPositiveBurst,
    /// A process arrives before t=0.
    NegativeArrival,
    /// Round-robin quantum is zero or negative.
    NonPositiveQuantum,
    /// Latest arrival plus total burst time does not fit in an `i64` clock.
    HorizonOverflow,
}

impl ValidationError {
    pub(crate) fn new(kind: ValidationErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

/// Validates a process set.
///
/// Checks:
/// 1. At least one process
/// 2. No duplicate process IDs
/// 3. Every burst time is at least 1
/// 4. No arrival time before 0
/// 5. `max(arrival) + sum(burst)` fits in `i64`, which bounds every clock
///    value a strategy can reach
///
/// # Returns
/// `Ok(())` if all checks pass, `Err(errors)` with all detected issues.
pub fn validate_processes(processes: &[Process]) -> ValidationResult {
    let mut errors = Vec::new();

    if processes.is_empty() {
        errors.push(ValidationError::new(
            ValidationErrorKind::EmptyProcessSet,
            "At least one process is required",
        ));
    }

    let mut ids = HashSet::new();
    for p in processes {
        if !ids.insert(p.id.as_str()) {
            errors.push(ValidationError::new(
                ValidationErrorKind::DuplicateId,
                format!("Duplicate process ID: {}", p.id),
            ));
        }

        if p.burst_time < 1 {
            errors.push(ValidationError::new(
                ValidationErrorKind::NonPositiveBurst,
                format!("Process '{}' has burst time {} (must be >= 1)", p.id, p.burst_time),
            ));
        }

        if p.arrival_time < 0 {
            errors.push(ValidationError::new(
                ValidationErrorKind::NegativeArrival,
                format!(
                    "Process '{}' has arrival time {} (must be >= 0)",
                    p.id, p.arrival_time
                ),
            ));
        }
    }

    if errors.is_empty() && schedule_horizon(processes).is_none() {
        errors.push(ValidationError::new(
            ValidationErrorKind::HorizonOverflow,
            "Latest arrival plus total burst time exceeds the representable clock range",
        ));
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

/// Latest tick any strategy can reach: `max(arrival) + sum(burst)`.
///
/// `None` on overflow.
pub fn schedule_horizon(processes: &[Process]) -> Option<i64> {
    let total_burst = processes
        .iter()
        .try_fold(0i64, |acc, p| acc.checked_add(p.burst_time))?;
    let last_arrival = processes.iter().map(|p| p.arrival_time).max().unwrap_or(0);
    last_arrival.checked_add(total_burst)
}

/// Validates a round-robin time quantum.
pub fn validate_quantum(quantum: i64) -> ValidationResult {
    if quantum < 1 {
        return Err(vec![ValidationError::new(
            ValidationErrorKind::NonPositiveQuantum,
            format!("Time quantum {quantum} must be >= 1"),
        )]);
    }
    Ok(())
}
