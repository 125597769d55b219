//! Three-level feedback queue. Everything starts at the top level; a
//! process that exhausts its quantum drops one level, and aging promotes a
//! long-waiting process back up so demoted work cannot starve.

use std::collections::VecDeque;

use crate::core::{Process, Ticks, Trace};

const QUANTA: [Ticks; 3] = [2, 4, 8];
const LEVELS: usize = QUANTA.len();
/// Ticks a process may wait at a level below the top before promotion.
const AGING_WAIT: Ticks = 10;

pub fn schedule(procs: &mut [Process], trace: &mut Trace) -> Ticks {
    let n = procs.len();
    let mut queues: [VecDeque<usize>; LEVELS] = Default::default();
    let mut level = vec![0usize; n];
    let mut wait_since: Vec<Ticks> = vec![0; n];
    queues[0].extend(0..n);
    let mut now: Ticks = 0;

    loop {
        promote_starved(&mut queues, &mut level, &mut wait_since, procs, now);
        let Some((lvl, i)) = pop_next(&mut queues, procs) else {
            break;
        };

        let slice = QUANTA[lvl].min(procs[i].remaining_time);
        trace.push(&procs[i].id, slice);
        procs[i].remaining_time -= slice;
        now += slice;

        if procs[i].remaining_time == 0 {
            procs[i].finalize(now);
        } else {
            level[i] = (lvl + 1).min(LEVELS - 1);
            wait_since[i] = now;
            queues[level[i]].push_back(i);
        }
    }
    now
}

/// Runs at every scheduling decision point: a process that has waited below
/// the top level for `AGING_WAIT` ticks moves up one level and restarts its
/// wait clock. The old queue slot is removed so a process occupies exactly
/// one slot at a time.
fn promote_starved(
    queues: &mut [VecDeque<usize>; LEVELS],
    level: &mut [usize],
    wait_since: &mut [Ticks],
    procs: &[Process],
    now: Ticks,
) {
    for i in 0..procs.len() {
        if procs[i].remaining_time > 0 && level[i] > 0 && now - wait_since[i] >= AGING_WAIT {
            queues[level[i]].retain(|&j| j != i);
            level[i] -= 1;
            wait_since[i] = now;
            queues[level[i]].push_back(i);
        }
    }
}

/// Pops from the lowest-numbered non-empty queue. Completed processes are
/// never re-enqueued, so queued entries are always runnable.
fn pop_next(
    queues: &mut [VecDeque<usize>; LEVELS],
    procs: &[Process],
) -> Option<(usize, usize)> {
    for lvl in 0..LEVELS {
        if let Some(i) = queues[lvl].pop_front() {
            debug_assert!(procs[i].remaining_time > 0, "queued process already done");
            return Some((lvl, i));
        }
    }
    None
}
