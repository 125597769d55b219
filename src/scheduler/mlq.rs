//! Two-band multi-level queue. Processes are partitioned once at start by
//! static priority and never migrate. The high band round-robins; the low
//! band is only serviced while the high band is empty, and each low process
//! then runs to completion.

use std::collections::VecDeque;

use crate::core::{Process, Ticks, Trace};

const HIGH_BAND_CUTOFF: i32 = 3;
const HIGH_QUANTUM: Ticks = 4;

pub fn schedule(procs: &mut [Process], trace: &mut Trace) -> Ticks {
    let mut high: VecDeque<usize> = VecDeque::new();
    let mut low: VecDeque<usize> = VecDeque::new();
    for i in 0..procs.len() {
        if procs[i].priority < HIGH_BAND_CUTOFF {
            high.push_back(i);
        } else {
            low.push_back(i);
        }
    }

    let mut now: Ticks = 0;
    while !high.is_empty() || !low.is_empty() {
        if let Some(i) = high.pop_front() {
            let slice = HIGH_QUANTUM.min(procs[i].remaining_time);
            trace.push(&procs[i].id, slice);
            procs[i].remaining_time -= slice;
            now += slice;
            if procs[i].remaining_time > 0 {
                high.push_back(i);
            } else {
                procs[i].finalize(now);
            }
        } else if let Some(i) = low.pop_front() {
            let burst = procs[i].burst_time;
            trace.push(&procs[i].id, burst);
            procs[i].remaining_time = 0;
            now += burst;
            procs[i].finalize(now);
        }
    }
    now
}
