//! Preemptive earliest-deadline-first. Deadlines order execution only;
//! there is no miss detection or recovery.

use std::cmp::Ordering;

use keyed_priority_queue::KeyedPriorityQueue;

use crate::core::{Process, Ticks, Trace};

/// Ready-set key: ascending (deadline, arrival, input index) — a total
/// order even when deadlines tie. The queue is a max-heap, so Ord is
/// flipped.
#[derive(Debug, PartialEq, Eq)]
struct EdfKey {
    deadline: Ticks,
    arrival: Ticks,
    index: usize,
}

impl PartialOrd for EdfKey {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for EdfKey {
    fn cmp(&self, other: &Self) -> Ordering {
        (other.deadline, other.arrival, other.index).cmp(&(self.deadline, self.arrival, self.index))
    }
}

pub fn schedule(procs: &mut [Process], trace: &mut Trace) -> Ticks {
    for p in procs.iter_mut() {
        p.deadline = Some(p.effective_deadline());
    }
    // Sorting by (arrival, id) lets arrivals stream into the ready set
    // without ever missing one.
    procs.sort_by(|a, b| {
        a.arrival_time
            .cmp(&b.arrival_time)
            .then_with(|| a.id.cmp(&b.id))
    });

    let n = procs.len();
    let mut ready: KeyedPriorityQueue<usize, EdfKey> = KeyedPriorityQueue::new();
    let mut cursor = 0;
    let mut finished = 0;
    let mut now: Ticks = 0;

    while finished < n {
        while cursor < n && procs[cursor].arrival_time <= now {
            ready.push(
                cursor,
                EdfKey {
                    deadline: procs[cursor].effective_deadline(),
                    arrival: procs[cursor].arrival_time,
                    index: cursor,
                },
            );
            cursor += 1;
        }

        let Some((i, key)) = ready.pop() else {
            // Ready set empty: jump straight to the next arrival.
            let next = procs[cursor].arrival_time;
            trace.idle(next - now);
            now = next;
            continue;
        };

        trace.push(&procs[i].id, 1);
        procs[i].remaining_time -= 1;
        now += 1;

        if procs[i].remaining_time == 0 {
            procs[i].finalize(now);
            finished += 1;
        } else {
            // Deadline is fixed, so the key is unchanged.
            ready.push(i, key);
        }
    }
    now
}
