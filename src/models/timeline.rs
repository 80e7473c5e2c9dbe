//! Execution timeline model.
//!
//! The timeline is the chronological record of a run: an ordered list of
//! non-overlapping slices, each attributing a contiguous interval of CPU
//! time to one pid. Idle time is never materialized — it is exactly the
//! gaps between consecutive slices (and between t=0 and the first
//! slice), so renderers recover it from slice boundaries alone.

use serde::{Deserialize, Serialize};

use super::Pid;

/// A maximal contiguous interval during which one process holds the CPU.
///
/// Invariant: `end > start`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Slice {
    /// Process occupying the CPU.
    pub pid: Pid,
    /// Interval start (inclusive).
    pub start: u64,
    /// Interval end (exclusive).
    pub end: u64,
}

impl Slice {
    /// Creates a slice.
    pub fn new(pid: Pid, start: u64, end: u64) -> Self {
        Self { pid, start, end }
    }

    /// Slice length (end - start).
    #[inline]
    pub fn duration(&self) -> u64 {
        self.end - self.start
    }
}

/// Ordered, non-overlapping execution record of a single run.
///
/// Slices are strictly ordered by `start`; consecutive slices may abut
/// or leave a gap (CPU idle). A recorded interval that abuts the
/// previous slice for the same pid extends that slice instead of
/// starting a new one, keeping every slice maximal.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Timeline {
    slices: Vec<Slice>,
}

impl Timeline {
    /// Creates an empty timeline.
    pub fn new() -> Self {
        Self::default()
    }

    /// Records `[start, end)` for `pid`, merging with the previous slice
    /// when the same pid runs back-to-back.
    pub(crate) fn record(&mut self, pid: Pid, start: u64, end: u64) {
        if let Some(last) = self.slices.last_mut() {
            if last.pid == pid && last.end == start {
                last.end = end;
                return;
            }
        }
        self.slices.push(Slice::new(pid, start, end));
    }

    /// The slices in chronological order.
    pub fn slices(&self) -> &[Slice] {
        &self.slices
    }

    /// Number of slices.
    pub fn len(&self) -> usize {
        self.slices.len()
    }

    /// Whether the timeline has no slices.
    pub fn is_empty(&self) -> bool {
        self.slices.is_empty()
    }

    /// Latest slice end, or 0 for an empty timeline.
    pub fn makespan(&self) -> u64 {
        self.slices.last().map(|s| s.end).unwrap_or(0)
    }

    /// All slices attributed to `pid`, in order.
    pub fn slices_for(&self, pid: Pid) -> impl Iterator<Item = &Slice> {
        self.slices.iter().filter(move |s| s.pid == pid)
    }

    /// Total CPU time attributed to `pid`.
    pub fn busy_time(&self, pid: Pid) -> u64 {
        self.slices_for(pid).map(Slice::duration).sum()
    }

    /// Total CPU time attributed to any process.
    pub fn total_busy(&self) -> u64 {
        self.slices.iter().map(Slice::duration).sum()
    }

    /// Idle intervals derived from slice boundaries, in order.
    ///
    /// Includes the leading interval from t=0 when the first slice
    /// starts late.
    pub fn idle_gaps(&self) -> Vec<(u64, u64)> {
        let mut gaps = Vec::new();
        let mut cursor = 0u64;
        for s in &self.slices {
            if s.start > cursor {
                gaps.push((cursor, s.start));
            }
            cursor = s.end;
        }
        gaps
    }

    /// Total idle time within `[0, makespan)`.
    pub fn total_idle(&self) -> u64 {
        self.idle_gaps().iter().map(|(a, b)| b - a).sum()
    }

    /// Whether slices are strictly ordered, non-overlapping, and
    /// non-empty.
    pub fn is_well_formed(&self) -> bool {
        let mut cursor = 0u64;
        for s in &self.slices {
            if s.end <= s.start || s.start < cursor {
                return false;
            }
            cursor = s.end;
        }
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Timeline {
        let mut t = Timeline::new();
        t.record(1, 2, 5);
        t.record(2, 5, 7);
        t.record(1, 10, 12);
        t
    }

    #[test]
    fn test_record_and_order() {
        let t = sample();
        assert_eq!(t.len(), 3);
        assert_eq!(t.slices()[0], Slice::new(1, 2, 5));
        assert!(t.is_well_formed());
    }

    #[test]
    fn test_merges_abutting_same_pid() {
        let mut t = Timeline::new();
        t.record(1, 0, 2);
        t.record(1, 2, 4);
        t.record(1, 4, 5);
        assert_eq!(t.slices(), &[Slice::new(1, 0, 5)]);
    }

    #[test]
    fn test_no_merge_across_gap() {
        let mut t = Timeline::new();
        t.record(1, 0, 2);
        t.record(1, 5, 6); // same pid, but CPU was idle in between
        assert_eq!(t.len(), 2);
    }

    #[test]
    fn test_no_merge_distinct_pids() {
        let mut t = Timeline::new();
        t.record(1, 0, 2);
        t.record(2, 2, 4);
        assert_eq!(t.len(), 2);
    }

    #[test]
    fn test_makespan() {
        assert_eq!(sample().makespan(), 12);
        assert_eq!(Timeline::new().makespan(), 0);
    }

    #[test]
    fn test_busy_time() {
        let t = sample();
        assert_eq!(t.busy_time(1), 5); // 3 + 2
        assert_eq!(t.busy_time(2), 2);
        assert_eq!(t.busy_time(99), 0);
        assert_eq!(t.total_busy(), 7);
    }

    #[test]
    fn test_idle_gaps() {
        let t = sample();
        // Leading gap 0..2, then 7..10
        assert_eq!(t.idle_gaps(), vec![(0, 2), (7, 10)]);
        assert_eq!(t.total_idle(), 5);
    }

    #[test]
    fn test_no_gaps_when_contiguous() {
        let mut t = Timeline::new();
        t.record(1, 0, 3);
        t.record(2, 3, 6);
        assert!(t.idle_gaps().is_empty());
        assert_eq!(t.total_idle(), 0);
    }

    #[test]
    fn test_well_formedness_violations() {
        let bad = Timeline {
            slices: vec![Slice::new(1, 0, 5), Slice::new(2, 3, 6)],
        };
        assert!(!bad.is_well_formed()); // overlap

        let empty_slice = Timeline {
            slices: vec![Slice::new(1, 4, 4)],
        };
        assert!(!empty_slice.is_well_formed());
    }
}
