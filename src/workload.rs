//! Process-set generators.
//!
//! Provides the standard four-process sample set and seeded random
//! workloads for demos and property checks.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::models::Process;

/// Palette assigned to processes by position.
pub const PROCESS_COLORS: [&str; 8] = [
    "#3B82F6", "#EF4444", "#10B981", "#F59E0B", "#8B5CF6", "#EC4899", "#06B6D4", "#84CC16",
];

/// The classic four-process sample set.
///
/// | ID | Arrival | Burst | Priority |
/// |----|---------|-------|----------|
/// | P1 | 0 | 8 | 2 |
/// | P2 | 1 | 4 | 1 |
/// | P3 | 2 | 9 | 3 |
/// | P4 | 3 | 5 | 2 |
pub fn sample_processes() -> Vec<Process> {
    [("P1", 0, 8, 2), ("P2", 1, 4, 1), ("P3", 2, 9, 3), ("P4", 3, 5, 2)]
        .into_iter()
        .enumerate()
        .map(|(i, (id, arrival, burst, priority))| {
            Process::new(id, arrival, burst)
                .with_priority(priority)
                .with_color(PROCESS_COLORS[i])
        })
        .collect()
}

/// Shape of a random workload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WorkloadSpec {
    /// Number of processes.
    pub count: usize,
    /// Arrivals are drawn from `0..=max_arrival`.
    pub max_arrival: i64,
    /// Inclusive burst-time range (minimum clamped to 1).
    pub burst_range: (i64, i64),
    /// Inclusive priority range.
    pub priority_range: (i32, i32),
}

impl WorkloadSpec {
    /// Creates a spec for `count` processes with modest defaults.
    pub fn new(count: usize) -> Self {
        Self {
            count,
            max_arrival: 10,
            burst_range: (1, 10),
            priority_range: (0, 5),
        }
    }

    /// Sets the latest arrival time.
    pub fn with_max_arrival(mut self, max_arrival: i64) -> Self {
        self.max_arrival = max_arrival;
        self
    }

    /// Sets the inclusive burst-time range.
    pub fn with_burst_range(mut self, min: i64, max: i64) -> Self {
        self.burst_range = (min, max);
        self
    }

    /// Sets the inclusive priority range.
    pub fn with_priority_range(mut self, min: i32, max: i32) -> Self {
        self.priority_range = (min, max);
        self
    }
}

/// Generates a reproducible random process set.
///
/// IDs are `P1..=Pn` in generation order; colors cycle through
/// [`PROCESS_COLORS`]. The same `seed` always yields the same set.
pub fn random_processes(spec: &WorkloadSpec, seed: u64) -> Vec<Process> {
    let mut rng = StdRng::seed_from_u64(seed);
    let max_arrival = spec.max_arrival.max(0);
    let burst_min = spec.burst_range.0.max(1);
    let burst_max = spec.burst_range.1.max(burst_min);
    let (prio_min, prio_max) = spec.priority_range;
    let prio_max = prio_max.max(prio_min);

    (0..spec.count)
        .map(|i| {
            Process::new(
                format!("P{}", i + 1),
                rng.random_range(0..=max_arrival),
                rng.random_range(burst_min..=burst_max),
            )
            .with_priority(rng.random_range(prio_min..=prio_max))
            .with_color(PROCESS_COLORS[i % PROCESS_COLORS.len()])
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validation::validate_processes;

    #[test]
    fn test_sample_set() {
        let ps = sample_processes();
        assert_eq!(ps.len(), 4);
        assert_eq!(ps[2], Process::new("P3", 2, 9).with_priority(3).with_color("#10B981"));
        assert!(validate_processes(&ps).is_ok());
    }

    #[test]
    fn test_random_is_reproducible() {
        let spec = WorkloadSpec::new(8);
        assert_eq!(random_processes(&spec, 7), random_processes(&spec, 7));
    }

    #[test]
    fn test_random_respects_ranges() {
        let spec = WorkloadSpec::new(50)
            .with_max_arrival(5)
            .with_burst_range(2, 4)
            .with_priority_range(-1, 1);
        let ps = random_processes(&spec, 42);
        assert_eq!(ps.len(), 50);
        assert!(validate_processes(&ps).is_ok());
        for p in &ps {
            assert!((0..=5).contains(&p.arrival_time));
            assert!((2..=4).contains(&p.burst_time));
            assert!((-1..=1).contains(&p.priority));
        }
    }

    #[test]
    fn test_degenerate_ranges_clamped() {
        let spec = WorkloadSpec::new(3).with_max_arrival(-4).with_burst_range(0, 0);
        for p in random_processes(&spec, 1) {
            assert_eq!(p.arrival_time, 0);
            assert_eq!(p.burst_time, 1);
        }
    }
}
