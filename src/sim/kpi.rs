//! Schedule quality metrics (KPIs).
//!
//! Derived figures computed from a finished simulation outcome. Pure
//! derivation — nothing here feeds back into the engine.
//!
//! # Metrics
//!
//! | Metric | Definition |
//! |--------|-----------|
//! | Makespan | Latest slice end |
//! | Total busy / idle | CPU time attributed to jobs / spent in gaps |
//! | CPU utilization | busy / makespan |
//! | Avg turnaround / waiting | As reported by the outcome |
//! | Max waiting | Largest single waiting time |
//! | Context switches | Direct hand-offs between distinct processes |

use serde::{Deserialize, Serialize};

use crate::models::SimulationOutcome;

/// Derived performance indicators for one run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimulationKpi {
    /// Latest slice end.
    pub makespan: u64,
    /// CPU time spent running processes.
    pub total_busy: u64,
    /// CPU time spent idle within `[0, makespan)`.
    pub total_idle: u64,
    /// `total_busy / makespan`, or 0.0 for an empty timeline.
    pub cpu_utilization: f64,
    /// Mean turnaround over all input processes.
    pub avg_turnaround: f64,
    /// Mean waiting over all input processes.
    pub avg_waiting: f64,
    /// Largest single waiting time.
    pub max_waiting: u64,
    /// Adjacent slice pairs where the CPU switched directly from one
    /// process to a different one.
    pub context_switches: usize,
}

impl SimulationKpi {
    /// Computes KPIs from a finished outcome.
    pub fn calculate(outcome: &SimulationOutcome) -> Self {
        let timeline = &outcome.timeline;
        let makespan = timeline.makespan();
        let total_busy = timeline.total_busy();

        let cpu_utilization = if makespan == 0 {
            0.0
        } else {
            total_busy as f64 / makespan as f64
        };

        let context_switches = timeline
            .slices()
            .windows(2)
            .filter(|w| w[0].pid != w[1].pid && w[0].end == w[1].start)
            .count();

        Self {
            makespan,
            total_busy,
            total_idle: timeline.total_idle(),
            cpu_utilization,
            avg_turnaround: outcome.avg_turnaround,
            avg_waiting: outcome.avg_waiting,
            max_waiting: outcome.metrics.iter().map(|m| m.waiting).max().unwrap_or(0),
            context_switches,
        }
    }
}
