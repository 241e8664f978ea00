//! Error types for scheduling operations.

use thiserror::Error;

use crate::validation::{ValidationError, ValidationErrorKind};

/// Errors produced by the scheduling engine and metrics aggregation.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ScheduleError {
    /// The process set or strategy parameter was rejected.
    #[error("invalid input: {}", join_messages(.0))]
    InvalidInput(Vec<ValidationError>),
    /// Metrics were requested over zero processes.
    #[error("cannot average metrics over an empty process list")]
    EmptyInput,
}

impl ScheduleError {
    /// Validation problems behind an `InvalidInput`; empty otherwise.
    pub fn validation_errors(&self) -> &[ValidationError] {
        match self {
            Self::InvalidInput(errors) => errors,
            Self::EmptyInput => &[],
        }
    }

    /// Whether an `InvalidInput` contains a problem of the given kind.
    pub fn has_kind(&self, kind: ValidationErrorKind) -> bool {
        self.validation_errors().iter().any(|e| e.kind == kind)
    }
}

impl From<Vec<ValidationError>> for ScheduleError {
    fn from(errors: Vec<ValidationError>) -> Self {
        Self::InvalidInput(errors)
    }
}

/// Unknown strategy identifier.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown scheduling algorithm '{0}' (expected fcfs, sjf, priority or roundrobin)")]
pub struct ParseAlgorithmError(pub String);

fn join_messages(errors: &[ValidationError]) -> String {
    errors
        .iter()
        .map(|e| e.message.as_str())
        .collect::<Vec<_>>()
        .join("; ")
}
