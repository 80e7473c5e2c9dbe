//! Preemptive Round-Robin.
//!
//! An explicit FIFO ready queue with a fixed time quantum. The clock
//! starts at the earliest arrival; jobs tied for it enter the queue in
//! pid order. Each dispatch runs the queue head for
//! `min(quantum, remaining)` units, then jobs that arrived during the
//! slice — strictly after its start, up to and including its end — are
//! appended *before* the preempted job is re-enqueued, in ascending
//! `(arrival, pid)` order. Newcomers queueing ahead of the job that
//! just spent its quantum is one textbook fairness convention among
//! several; it is fixed here because every RR timeline depends on it.
//!
//! Enqueue windows partition the clock — the initial fill takes
//! `arrival == t0`, each slice takes `(start, end]`, each idle jump
//! takes exactly the next arrival instant — so a job enters the queue
//! exactly once per wait and is never queued twice.

use std::collections::VecDeque;

use log::trace;

use super::state::RunProcess;
use crate::models::Timeline;

/// Runs Round-Robin with the given quantum over the run state.
pub(crate) fn round_robin(quantum: u64, run: &mut [RunProcess], timeline: &mut Timeline) {
    let total = run.len();
    let mut completed = 0usize;
    let mut queue: VecDeque<usize> = VecDeque::new();

    let mut now = run
        .iter()
        .map(|p| p.process.arrival)
        .min()
        .unwrap_or(0);
    enqueue_arrivals_at(run, &mut queue, now);

    while completed < total {
        let head = match queue.pop_front() {
            Some(i) => i,
            None => {
                // Queue drained with unfinished jobs: jump to the next
                // arrival and take everything arriving exactly then.
                let next_arrival = run
                    .iter()
                    .filter(|p| !p.is_finished())
                    .map(|p| p.process.arrival)
                    .filter(|&a| a > now)
                    .min();
                match next_arrival {
                    Some(t) => {
                        trace!("round-robin idle from {now} to {t}");
                        now = t;
                        enqueue_arrivals_at(run, &mut queue, now);
                        continue;
                    }
                    None => break,
                }
            }
        };

        let p = &mut run[head];
        let units = quantum.min(p.remaining);
        let start = now;
        let end = p.run_for(start, units);
        timeline.record(p.process.pid, start, end);
        now = end;

        // Arrivals within (start, end] queue ahead of the preempted job.
        let mut arrived: Vec<usize> = (0..run.len())
            .filter(|&j| {
                let q = &run[j];
                !q.is_finished() && q.process.arrival > start && q.process.arrival <= end
            })
            .collect();
        arrived.sort_by_key(|&j| (run[j].process.arrival, run[j].process.pid));
        queue.extend(arrived);

        if run[head].is_finished() {
            completed += 1;
        } else {
            queue.push_back(head);
        }
    }
}

/// Appends every unfinished job whose arrival is exactly `time`, in pid
/// order.
fn enqueue_arrivals_at(run: &[RunProcess], queue: &mut VecDeque<usize>, time: u64) {
    let mut ids: Vec<usize> = (0..run.len())
        .filter(|&j| !run[j].is_finished() && run[j].process.arrival == time)
        .collect();
    ids.sort_by_key(|&j| run[j].process.pid);
    queue.extend(ids);
}
