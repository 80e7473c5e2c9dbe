//! Process descriptor model.
//!
//! A process is a unit of CPU work: it becomes ready at its arrival
//! time, needs `burst` units of CPU to finish, and carries a static
//! priority consulted only by the priority policy. Descriptors are
//! plain immutable data; the simulator never mutates them.
//!
//! # Reference
//! Silberschatz et al. (2018), "Operating System Concepts", Ch. 3.1

use serde::{Deserialize, Serialize};

/// Process identifier. Valid pids start at 1.
pub type Pid = u32;

/// An immutable process descriptor.
///
/// All times are in abstract simulation units relative to t=0.
/// A descriptor is valid when `pid >= 1`, `burst >= 1`, and
/// `priority >= 1`; lower priority values are more urgent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Process {
    /// Unique process identifier.
    pub pid: Pid,
    /// Time at which the process becomes ready to run.
    pub arrival: u64,
    /// Total CPU time required to complete.
    pub burst: u64,
    /// Static priority; lower value = higher priority.
    pub priority: u32,
}

impl Process {
    /// Creates a process with the default priority (1).
    pub fn new(pid: Pid, arrival: u64, burst: u64) -> Self {
        Self {
            pid,
            arrival,
            burst,
            priority: 1,
        }
    }

    /// Sets the static priority.
    pub fn with_priority(mut self, priority: u32) -> Self {
        self.priority = priority;
        self
    }

    /// Whether all descriptor invariants hold.
    pub fn is_valid(&self) -> bool {
        self.pid >= 1 && self.burst >= 1 && self.priority >= 1
    }
}

/// An owned set of processes with a locally scoped pid generator.
///
/// Pids are assigned monotonically from 1 in creation order, which is
/// the order used for tie-breaking metadata — not necessarily
/// arrival-time order. The set owns its counter; two sets never share
/// state.
///
/// # Example
/// ```
/// use cpu_sched::models::ProcessSet;
///
/// let mut set = ProcessSet::new();
/// let p1 = set.add(0, 10, 3);
/// let p2 = set.add(1, 5, 1);
/// assert_eq!((p1, p2), (1, 2));
/// assert_eq!(set.len(), 2);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProcessSet {
    processes: Vec<Process>,
    next_pid: Pid,
}

impl ProcessSet {
    /// Creates an empty set. The first added process gets pid 1.
    pub fn new() -> Self {
        Self {
            processes: Vec::new(),
            next_pid: 1,
        }
    }

    /// Adds a process and returns its assigned pid.
    pub fn add(&mut self, arrival: u64, burst: u64, priority: u32) -> Pid {
        let pid = self.next_pid;
        self.next_pid += 1;
        self.processes
            .push(Process::new(pid, arrival, burst).with_priority(priority));
        pid
    }

    /// The processes in creation order.
    pub fn processes(&self) -> &[Process] {
        &self.processes
    }

    /// Number of processes in the set.
    pub fn len(&self) -> usize {
        self.processes.len()
    }

    /// Whether the set is empty.
    pub fn is_empty(&self) -> bool {
        self.processes.is_empty()
    }

    /// Removes all processes and resets the pid counter to 1.
    pub fn clear(&mut self) {
        self.processes.clear();
        self.next_pid = 1;
    }

    /// Consumes the set, yielding the processes in creation order.
    pub fn into_processes(self) -> Vec<Process> {
        self.processes
    }
}

impl Default for ProcessSet {
    fn default() -> Self {
        Self::new()
    }
}

impl<'a> IntoIterator for &'a ProcessSet {
    type Item = &'a Process;
    type IntoIter = std::slice::Iter<'a, Process>;

    fn into_iter(self) -> Self::IntoIter {
        self.processes.iter()
    }
}
