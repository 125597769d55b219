//! Round robin over a FIFO ready queue fed by arrival time.

use std::collections::VecDeque;

use crate::core::{Process, Ticks, Trace};

pub fn schedule(procs: &mut [Process], trace: &mut Trace, quantum: Ticks) -> Ticks {
    debug_assert!(quantum > 0, "quantum is validated at policy construction");
    procs.sort_by_key(|p| p.arrival_time);
    let n = procs.len();
    let mut ready: VecDeque<usize> = VecDeque::new();
    let mut cursor = 0;
    let mut now: Ticks = 0;

    while cursor < n && procs[cursor].arrival_time <= now {
        ready.push_back(cursor);
        cursor += 1;
    }

    while !ready.is_empty() || cursor < n {
        let Some(i) = ready.pop_front() else {
            // Nothing runnable: jump to the next arrival.
            let next = procs[cursor].arrival_time;
            trace.idle(next - now);
            now = next;
            while cursor < n && procs[cursor].arrival_time <= now {
                ready.push_back(cursor);
                cursor += 1;
            }
            continue;
        };

        let slice = quantum.min(procs[i].remaining_time);
        trace.push(&procs[i].id, slice);
        procs[i].remaining_time -= slice;
        now += slice;

        // Arrivals up to and including the slice end queue ahead of the
        // preempted process.
        while cursor < n && procs[cursor].arrival_time <= now {
            ready.push_back(cursor);
            cursor += 1;
        }

        if procs[i].remaining_time > 0 {
            ready.push_back(i);
        } else {
            procs[i].finalize(now);
        }
    }
    now
}
