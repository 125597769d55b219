//! Preemptive shortest-remaining-time-first. The loop advances one tick at
//! a time so a shorter arrival can preempt at the exact decision point.

use crate::core::{Process, Ticks, Trace};

pub fn schedule(procs: &mut [Process], trace: &mut Trace) -> Ticks {
    procs.sort_by_key(|p| p.arrival_time);
    let n = procs.len();
    let mut finished = 0;
    let mut now: Ticks = 0;

    while finished < n {
        let next = (0..n)
            .filter(|&i| procs[i].arrival_time <= now && procs[i].remaining_time > 0)
            .min_by_key(|&i| (procs[i].remaining_time, i));

        match next {
            Some(i) => {
                trace.push(&procs[i].id, 1);
                procs[i].remaining_time -= 1;
                now += 1;
                if procs[i].remaining_time == 0 {
                    procs[i].finalize(now);
                    finished += 1;
                }
            }
            None => {
                trace.idle(1);
                now += 1;
            }
        }
    }
    now
}
