//! Proportional-share lottery scheduling. The generator is supplied by the
//! caller, so runs are reproducible for a fixed seed and process order.

use rand::Rng;

use crate::core::{Process, Ticks, Trace};

const QUANTUM: Ticks = 2;

/// Lower priority number means more tickets and a larger expected share.
fn tickets(p: &Process) -> u64 {
    (10 / p.priority.max(1) as u64).max(1)
}

pub fn schedule<R: Rng>(procs: &mut [Process], trace: &mut Trace, rng: &mut R) -> Ticks {
    let mut now: Ticks = 0;
    let mut left: Ticks = procs.iter().map(|p| p.remaining_time).sum();

    while left > 0 {
        let total: u64 = procs
            .iter()
            .filter(|p| p.remaining_time > 0)
            .map(|p| tickets(p))
            .sum();
        let draw = rng.random_range(1..=total);

        // First active process whose cumulative ticket range covers the draw.
        let mut acc = 0;
        let mut winner = 0;
        for (i, p) in procs.iter().enumerate() {
            if p.remaining_time == 0 {
                continue;
            }
            acc += tickets(p);
            if draw <= acc {
                winner = i;
                break;
            }
        }

        let slice = QUANTUM.min(procs[winner].remaining_time);
        trace.push(&procs[winner].id, slice);
        procs[winner].remaining_time -= slice;
        now += slice;
        left -= slice;
        if procs[winner].remaining_time == 0 {
            procs[winner].finalize(now);
        }
    }
    now
}
