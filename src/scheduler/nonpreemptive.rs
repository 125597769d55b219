//! Run-to-completion policies: FCFS, SJF, and static priority. The selected
//! process always finishes its whole burst in one segment.

use crate::core::{Process, Ticks, Trace};

/// First-come-first-served: earliest arrival wins.
pub fn fcfs(procs: &mut [Process], trace: &mut Trace) -> Ticks {
    run_to_completion(procs, trace, |p| p.arrival_time)
}

/// Shortest-job-first over the eligible set.
pub fn sjf(procs: &mut [Process], trace: &mut Trace) -> Ticks {
    run_to_completion(procs, trace, |p| p.burst_time)
}

/// Static priority: lowest priority number wins.
pub fn priority(procs: &mut [Process], trace: &mut Trace) -> Ticks {
    run_to_completion(procs, trace, |p| p.priority)
}

/// Shared selection loop. Candidates are processes that have arrived and
/// not yet run; ties on the key fall back to the lowest index, which is
/// arrival order after the initial sort. When nothing is eligible the clock
/// jumps to the next arrival under an IDLE segment.
fn run_to_completion<K: Ord>(
    procs: &mut [Process],
    trace: &mut Trace,
    key: impl Fn(&Process) -> K,
) -> Ticks {
    procs.sort_by_key(|p| p.arrival_time);
    let n = procs.len();
    let mut used = vec![false; n];
    let mut done = 0;
    let mut now: Ticks = 0;

    while done < n {
        let candidate = (0..n)
            .filter(|&i| !used[i] && procs[i].arrival_time <= now)
            .min_by_key(|&i| (key(&procs[i]), i));

        match candidate {
            Some(i) => {
                let burst = procs[i].burst_time;
                trace.push(&procs[i].id, burst);
                now += burst;
                procs[i].remaining_time = 0;
                procs[i].finalize(now);
                used[i] = true;
                done += 1;
            }
            None => {
                let next = (0..n)
                    .filter(|&i| !used[i])
                    .map(|i| procs[i].arrival_time)
                    .min()
                    .expect("done < n implies an unfinished process");
                trace.idle(next - now);
                now = next;
            }
        }
    }
    now
}
