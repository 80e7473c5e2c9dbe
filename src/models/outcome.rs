//! Simulation outcome model.
//!
//! The outcome is the complete result of one run: a metrics row per
//! input process, the execution timeline, and the two aggregate
//! averages. It is a plain data structure intended to be rendered as a
//! results table, a Gantt-style chart, and summary figures without
//! re-deriving any scheduling logic.

use serde::{Deserialize, Serialize};

use super::{Pid, Timeline};

/// Per-process performance figures for a completed run.
///
/// Echoes the descriptor fields alongside the derived times so a
/// results table needs no join against the input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProcessMetrics {
    /// Process identifier.
    pub pid: Pid,
    /// Arrival time from the descriptor.
    pub arrival: u64,
    /// Burst time from the descriptor.
    pub burst: u64,
    /// Priority from the descriptor.
    pub priority: u32,
    /// Time of the first CPU dispatch.
    pub start: u64,
    /// Time the last burst unit finished.
    pub completion: u64,
    /// `completion - arrival`. Always >= burst.
    pub turnaround: u64,
    /// `turnaround - burst`. Always >= 0.
    pub waiting: u64,
}

/// Complete result of one simulation run.
///
/// Invariants for any outcome produced by `sim::simulate`:
/// - `metrics` holds exactly one entry per input process, sorted by pid;
/// - the timeline's busy time per pid equals that process's burst;
/// - the averages divide by the total input process count.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimulationOutcome {
    /// Per-process metrics, sorted by pid.
    pub metrics: Vec<ProcessMetrics>,
    /// Chronological execution record.
    pub timeline: Timeline,
    /// Mean turnaround time over all input processes.
    pub avg_turnaround: f64,
    /// Mean waiting time over all input processes.
    pub avg_waiting: f64,
}

impl SimulationOutcome {
    /// Assembles an outcome from finished metrics and a timeline.
    ///
    /// Sorts the metrics by pid and computes the averages over the full
    /// metrics count.
    pub(crate) fn assemble(mut metrics: Vec<ProcessMetrics>, timeline: Timeline) -> Self {
        metrics.sort_by_key(|m| m.pid);

        let (avg_turnaround, avg_waiting) = if metrics.is_empty() {
            (0.0, 0.0)
        } else {
            let total_tat: u64 = metrics.iter().map(|m| m.turnaround).sum();
            let total_wt: u64 = metrics.iter().map(|m| m.waiting).sum();
            let count = metrics.len() as f64;
            (total_tat as f64 / count, total_wt as f64 / count)
        };

        Self {
            metrics,
            timeline,
            avg_turnaround,
            avg_waiting,
        }
    }

    /// Metrics row for a given pid.
    pub fn metrics_for(&self, pid: Pid) -> Option<&ProcessMetrics> {
        self.metrics.iter().find(|m| m.pid == pid)
    }

    /// Number of processes in the run.
    pub fn process_count(&self) -> usize {
        self.metrics.len()
    }
}
