//! Deterministic single-CPU scheduling simulation.
//!
//! Simulates classic uniprocessor scheduling policies over a fixed,
//! known-in-advance set of processes and produces a chronological
//! execution timeline, per-process performance metrics, and aggregate
//! averages. The simulation is discrete-time and instantaneous: a run is
//! a pure function of the algorithm, the optional time quantum, and the
//! process list.
//!
//! # Modules
//!
//! - **`models`**: Domain types — `Process`, `ProcessSet`, `Slice`,
//!   `Timeline`, `ProcessMetrics`, `SimulationOutcome`
//! - **`validation`**: Input integrity checks (duplicate pids, zero bursts)
//! - **`sim`**: The four scheduling policies behind the `simulate` entry
//!   point, plus derived schedule KPIs
//!
//! # Example
//!
//! ```
//! use cpu_sched::models::Process;
//! use cpu_sched::sim::{simulate, Algorithm};
//!
//! let processes = vec![
//!     Process::new(1, 0, 5),
//!     Process::new(2, 1, 3),
//! ];
//!
//! let outcome = simulate(Algorithm::Fcfs, None, &processes).unwrap();
//! assert_eq!(outcome.timeline.makespan(), 8);
//! assert_eq!(outcome.metrics[1].waiting, 4);
//! ```
//!
//! # References
//!
//! - Silberschatz, Galvin & Gagne (2018), "Operating System Concepts", Ch. 5
//! - Tanenbaum & Bos (2015), "Modern Operating Systems", Ch. 2.4

pub mod models;
pub mod sim;
pub mod validation;
