//! Run-local simulation state.
//!
//! Each `simulate` call builds one `RunProcess` per descriptor and owns
//! them exclusively for the duration of the run. Nothing here outlives
//! the run or is shared with the caller's descriptors, so runs can never
//! contaminate each other.

use crate::models::{Process, ProcessMetrics};

/// Mutable bookkeeping for one process within a single run.
#[derive(Debug, Clone)]
pub(crate) struct RunProcess {
    /// The immutable descriptor this state was derived from.
    pub process: Process,
    /// CPU time still required; reaches 0 exactly once.
    pub remaining: u64,
    /// Time of the first dispatch, once one has happened.
    pub started_at: Option<u64>,
    /// Time the last burst unit finished, once it has.
    pub completed_at: Option<u64>,
}

impl RunProcess {
    /// Fresh state for a descriptor: full burst remaining, no dispatches.
    pub fn new(process: Process) -> Self {
        Self {
            process,
            remaining: process.burst,
            started_at: None,
            completed_at: None,
        }
    }

    /// Whether the process has consumed its entire burst.
    #[inline]
    pub fn is_finished(&self) -> bool {
        self.remaining == 0
    }

    /// Allocates `units` of CPU starting at `start` and returns the end
    /// of the allocation.
    ///
    /// Records the first dispatch and, when the burst is exhausted, the
    /// completion time. `units` must not exceed `remaining`.
    pub fn run_for(&mut self, start: u64, units: u64) -> u64 {
        debug_assert!(units >= 1 && units <= self.remaining);
        if self.started_at.is_none() {
            self.started_at = Some(start);
        }
        self.remaining -= units;
        let end = start + units;
        if self.remaining == 0 {
            self.completed_at = Some(end);
        }
        end
    }

    /// Final metrics for a finished process, `None` if it never
    /// completed.
    pub fn into_metrics(self) -> Option<ProcessMetrics> {
        let start = self.started_at?;
        let completion = self.completed_at?;
        let Process {
            pid,
            arrival,
            burst,
            priority,
        } = self.process;
        let turnaround = completion - arrival;
        Some(ProcessMetrics {
            pid,
            arrival,
            burst,
            priority,
            start,
            completion,
            turnaround,
            waiting: turnaround - burst,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fresh_state() {
        let rp = RunProcess::new(Process::new(1, 2, 5));
        assert_eq!(rp.remaining, 5);
        assert!(!rp.is_finished());
        assert!(rp.started_at.is_none());
    }

    #[test]
    fn test_first_dispatch_recorded_once() {
        let mut rp = RunProcess::new(Process::new(1, 0, 5));
        rp.run_for(3, 2);
        rp.run_for(7, 3);
        assert_eq!(rp.started_at, Some(3));
        assert_eq!(rp.completed_at, Some(10));
        assert!(rp.is_finished());
    }

    #[test]
    fn test_metrics_from_finished() {
        let mut rp = RunProcess::new(Process::new(2, 1, 3).with_priority(2));
        let end = rp.run_for(5, 3);
        assert_eq!(end, 8);

        let m = rp.into_metrics().unwrap();
        assert_eq!(m.pid, 2);
        assert_eq!(m.start, 5);
        assert_eq!(m.completion, 8);
        assert_eq!(m.turnaround, 7);
        assert_eq!(m.waiting, 4);
    }

    #[test]
    fn test_metrics_none_when_unfinished() {
        let mut rp = RunProcess::new(Process::new(1, 0, 5));
        rp.run_for(0, 2);
        assert!(rp.into_metrics().is_none());
    }
}
