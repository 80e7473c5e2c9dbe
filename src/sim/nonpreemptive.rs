//! Non-preemptive policies: FCFS and the shared ready-set loop behind
//! SJF and Priority.
//!
//! All three dispatch a job and let it run to completion. FCFS fixes the
//! dispatch order up front; SJF and Priority re-select from the ready
//! set at every decision point, differing only in the selection
//! criterion. When nothing is ready, the clock jumps to the earliest
//! pending arrival — the CPU never idles past the next possible
//! dispatch.
//!
//! # Reference
//! Silberschatz et al. (2018), "Operating System Concepts", Ch. 5.3

use super::state::RunProcess;
use crate::models::Timeline;

/// Selection criterion for the ready set.
///
/// The sort key is `(criterion, arrival, pid)` with lower keys
/// dispatched first, so ties fall back to earliest arrival, then
/// smallest pid. Exact integer ordering — no scores, no epsilon.
#[derive(Debug, Clone, Copy)]
pub(crate) enum ReadyRule {
    /// Smallest total burst wins (SJF).
    ShortestBurst,
    /// Smallest priority value wins (static priority).
    MostUrgent,
}

impl ReadyRule {
    fn key(&self, p: &RunProcess) -> (u64, u64, u32) {
        let criterion = match self {
            ReadyRule::ShortestBurst => p.process.burst,
            ReadyRule::MostUrgent => u64::from(p.process.priority),
        };
        (criterion, p.process.arrival, p.process.pid)
    }
}

/// First-Come-First-Served: dispatch strictly by `(arrival, pid)`.
pub(crate) fn fcfs(run: &mut [RunProcess], timeline: &mut Timeline) {
    let mut order: Vec<usize> = (0..run.len()).collect();
    order.sort_by_key(|&i| (run[i].process.arrival, run[i].process.pid));

    let mut now = 0u64;
    for i in order {
        let p = &mut run[i];
        // CPU idles until the next job in order arrives
        now = now.max(p.process.arrival);
        let units = p.remaining;
        let end = p.run_for(now, units);
        timeline.record(p.process.pid, now, end);
        now = end;
    }
}

/// Shared loop for SJF and Priority: pick the best ready job by `rule`,
/// run it to completion, repeat; jump the clock over idle stretches.
pub(crate) fn ready_set(rule: ReadyRule, run: &mut [RunProcess], timeline: &mut Timeline) {
    let total = run.len();
    let mut completed = 0usize;
    let mut now = 0u64;

    while completed < total {
        let best = run
            .iter()
            .enumerate()
            .filter(|(_, p)| !p.is_finished() && p.process.arrival <= now)
            .min_by_key(|(_, p)| rule.key(p))
            .map(|(i, _)| i);

        match best {
            Some(i) => {
                let p = &mut run[i];
                let units = p.remaining;
                let end = p.run_for(now, units);
                timeline.record(p.process.pid, now, end);
                now = end;
                completed += 1;
            }
            None => {
                // Nothing ready: advance to the earliest pending arrival.
                let next_arrival = run
                    .iter()
                    .filter(|p| !p.is_finished())
                    .map(|p| p.process.arrival)
                    .min();
                match next_arrival {
                    Some(t) if t > now => now = t,
                    _ => break,
                }
            }
        }
    }
}
