//! Scheduling simulation engine.
//!
//! One entry point, `simulate`, dispatching over the four policies:
//!
//! | Algorithm | Kind | Selection |
//! |-----------|------|-----------|
//! | `Fcfs` | non-preemptive | `(arrival, pid)` order, fixed up front |
//! | `Sjf` | non-preemptive | smallest burst among ready jobs |
//! | `Priority` | non-preemptive | smallest priority value among ready jobs |
//! | `RoundRobin` | preemptive | FIFO queue, fixed time quantum |
//!
//! Given valid input the engine is deterministic and total: it always
//! terminates (bounded by the sum of burst times) and cannot fail
//! mid-run. The only failures are the precondition checks, raised
//! before any simulation state is observable.
//!
//! # Usage
//!
//! ```
//! use cpu_sched::models::Process;
//! use cpu_sched::sim::{simulate, Algorithm};
//!
//! let processes = vec![Process::new(1, 0, 5), Process::new(2, 1, 3)];
//! let outcome = simulate(Algorithm::RoundRobin, Some(2), &processes).unwrap();
//! assert_eq!(outcome.timeline.len(), 5);
//! ```

mod kpi;
mod nonpreemptive;
mod round_robin;
mod state;

pub use kpi::SimulationKpi;

use log::debug;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::models::{Pid, Process, ProcessMetrics, SimulationOutcome, Timeline};
use crate::validation;
use nonpreemptive::ReadyRule;
use state::RunProcess;

/// Simulation result alias.
pub type SimResult<T> = Result<T, SimulationError>;

/// The scheduling policies the engine implements.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Algorithm {
    /// First-Come-First-Served (non-preemptive).
    Fcfs,
    /// Shortest-Job-First (non-preemptive).
    Sjf,
    /// Static priority, lower value first (non-preemptive).
    Priority,
    /// Round-Robin with a fixed time quantum (preemptive).
    RoundRobin,
}

impl Algorithm {
    /// All policies, in presentation order. Handy for side-by-side
    /// comparison runs.
    pub const ALL: [Algorithm; 4] = [
        Algorithm::Fcfs,
        Algorithm::Sjf,
        Algorithm::Priority,
        Algorithm::RoundRobin,
    ];

    /// Short policy name (e.g., "FCFS", "RR").
    pub fn name(&self) -> &'static str {
        match self {
            Algorithm::Fcfs => "FCFS",
            Algorithm::Sjf => "SJF",
            Algorithm::Priority => "PRIORITY",
            Algorithm::RoundRobin => "RR",
        }
    }

    /// Policy description.
    pub fn description(&self) -> &'static str {
        match self {
            Algorithm::Fcfs => "First-Come-First-Served",
            Algorithm::Sjf => "Shortest-Job-First",
            Algorithm::Priority => "Static Priority",
            Algorithm::RoundRobin => "Round-Robin",
        }
    }

    /// Whether this policy requires a time quantum.
    pub fn requires_quantum(&self) -> bool {
        matches!(self, Algorithm::RoundRobin)
    }
}

impl std::fmt::Display for Algorithm {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Why a `simulate` call was rejected.
///
/// All variants are terminal for the call: no partial result is
/// produced and nothing is substituted silently.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SimulationError {
    /// No processes supplied.
    #[error("no processes supplied")]
    EmptyInput,

    /// Round-Robin requested without a usable quantum.
    #[error("round-robin requires a time quantum of at least 1")]
    InvalidQuantum,

    /// A descriptor violates the process invariants.
    #[error("process {pid}: {reason}")]
    InvalidProcess {
        /// Pid of the offending descriptor.
        pid: Pid,
        /// Which rule it broke.
        reason: String,
    },
}

/// Runs `algorithm` over `processes` and returns the outcome.
///
/// `quantum` is required (>= 1) for `RoundRobin` and ignored otherwise.
/// Each call is a clean simulation from time 0 over fresh run-local
/// state; identical inputs always produce identical outcomes.
///
/// # Errors
/// - `EmptyInput` when `processes` is empty
/// - `InvalidProcess` when a descriptor breaks the model invariants
///   (first offender in input order)
/// - `InvalidQuantum` when `RoundRobin` is requested without a quantum
///   of at least 1
pub fn simulate(
    algorithm: Algorithm,
    quantum: Option<u64>,
    processes: &[Process],
) -> SimResult<SimulationOutcome> {
    if processes.is_empty() {
        return Err(SimulationError::EmptyInput);
    }

    if let Err(errors) = validation::validate_input(processes) {
        // Input order is preserved by validation, so the first entry
        // names the first offender.
        let first = &errors[0];
        return Err(SimulationError::InvalidProcess {
            pid: first.pid,
            reason: first.message.clone(),
        });
    }

    debug!(
        "simulating {} over {} processes",
        algorithm.name(),
        processes.len()
    );

    let mut run: Vec<RunProcess> = processes.iter().copied().map(RunProcess::new).collect();
    let mut timeline = Timeline::new();

    match algorithm {
        Algorithm::Fcfs => nonpreemptive::fcfs(&mut run, &mut timeline),
        Algorithm::Sjf => nonpreemptive::ready_set(ReadyRule::ShortestBurst, &mut run, &mut timeline),
        Algorithm::Priority => {
            nonpreemptive::ready_set(ReadyRule::MostUrgent, &mut run, &mut timeline)
        }
        Algorithm::RoundRobin => {
            let q = quantum
                .filter(|&q| q >= 1)
                .ok_or(SimulationError::InvalidQuantum)?;
            round_robin::round_robin(q, &mut run, &mut timeline);
        }
    }

    let metrics: Vec<ProcessMetrics> = run
        .into_iter()
        .filter_map(RunProcess::into_metrics)
        .collect();

    Ok(SimulationOutcome::assemble(metrics, timeline))
}
