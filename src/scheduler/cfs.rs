//! CFS-style fair scheduling over an integer vruntime. Lower-priority-number
//! processes accrue vruntime more slowly per tick run, so they are
//! rescheduled sooner in proportion to their weight.

use std::cmp::Ordering;

use keyed_priority_queue::KeyedPriorityQueue;

use crate::core::{Process, Ticks, Trace};

const QUANTUM: Ticks = 2;

/// Ready-queue key: ascending (vruntime, insertion sequence). The queue is
/// a max-heap, so Ord is flipped.
#[derive(Debug, PartialEq, Eq)]
struct CfsKey {
    vruntime: Ticks,
    seq: u64,
}

impl PartialOrd for CfsKey {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for CfsKey {
    fn cmp(&self, other: &Self) -> Ordering {
        (other.vruntime, other.seq).cmp(&(self.vruntime, self.seq))
    }
}

/// With weight = 1 / max(1, priority), running k ticks adds
/// k * max(1, priority) to vruntime, which stays in integers.
fn weight_factor(p: &Process) -> Ticks {
    p.priority.max(1) as Ticks
}

pub fn schedule(procs: &mut [Process], trace: &mut Trace) -> Ticks {
    let mut ready: KeyedPriorityQueue<usize, CfsKey> = KeyedPriorityQueue::new();
    let mut vruntime: Vec<Ticks> = vec![0; procs.len()];
    let mut seq = 0u64;
    for i in 0..procs.len() {
        ready.push(i, CfsKey { vruntime: 0, seq });
        seq += 1;
    }

    let mut now: Ticks = 0;
    while let Some((i, _)) = ready.pop() {
        let slice = QUANTUM.min(procs[i].remaining_time);
        trace.push(&procs[i].id, slice);
        procs[i].remaining_time -= slice;
        now += slice;
        vruntime[i] += slice * weight_factor(&procs[i]);

        if procs[i].remaining_time > 0 {
            ready.push(
                i,
                CfsKey {
                    vruntime: vruntime[i],
                    seq,
                },
            );
            seq += 1;
        } else {
            procs[i].finalize(now);
        }
    }
    now
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn key_order_is_min_vruntime_then_insertion() {
        let a = CfsKey { vruntime: 4, seq: 0 };
        let b = CfsKey { vruntime: 2, seq: 1 };
        let c = CfsKey { vruntime: 2, seq: 2 };
        // Flipped Ord: the "greatest" key is the one scheduled first.
        assert!(b > a);
        assert!(b > c);
    }

    #[test]
    fn heavier_weight_runs_more_often() {
        let mut procs = vec![
            Process::new("FAST", 0, 6, 1, None).unwrap(),
            Process::new("SLOW", 0, 6, 3, None).unwrap(),
        ];
        let mut trace = Trace::new();
        let total = schedule(&mut procs, &mut trace);
        // FAST gains 2 vruntime per slice, SLOW gains 6, so FAST finishes
        // its burst while SLOW is still catching up.
        assert_eq!(trace.render(), "FAST(2) SLOW(2) FAST(4) SLOW(4)");
        assert_eq!(total, 12);
        assert_eq!(procs[0].turnaround_time, 8);
        assert_eq!(procs[1].turnaround_time, 12);
    }
}
