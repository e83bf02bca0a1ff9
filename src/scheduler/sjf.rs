/*!
 * Shortest Job First
 * Non-preemptive; always picks the shortest burst in the whole pool
 *
 * The default selection ignores arrival: the globally shortest process runs
 * next and the clock jumps forward to meet it if it has not arrived yet.
 * `Sjf::arrival_aware` restricts selection to processes that have arrived.
 */

use super::fcfs::{advance, ensure_schedulable, run_in_order};
use super::timeline::Timeline;
use super::traits::SchedulingAlgorithm;
use super::types::Policy;
use crate::core::errors::SchedulerError;
use crate::core::types::Tick;
use crate::process::Process;

/// SJF scheduler
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Sjf {
    cs_time: Tick,
    arrival_aware: bool,
}

impl Sjf {
    /// Global shortest-burst-first selection
    pub fn new(cs_time: Tick) -> Self {
        Self {
            cs_time,
            arrival_aware: false,
        }
    }

    /// Select among arrived processes only
    pub fn arrival_aware(cs_time: Tick) -> Self {
        Self {
            cs_time,
            arrival_aware: true,
        }
    }

    pub fn cs_time(&self) -> Tick {
        self.cs_time
    }

    pub fn is_arrival_aware(&self) -> bool {
        self.arrival_aware
    }
}

impl SchedulingAlgorithm for Sjf {
    fn policy(&self) -> Policy {
        Policy::Sjf
    }

    fn run(&self, processes: &mut [Process]) -> Result<Timeline, SchedulerError> {
        if self.arrival_aware {
            simulate_sjf_arrival_aware(processes, self.cs_time)
        } else {
            simulate_sjf(processes, self.cs_time)
        }
    }
}

/// Shortest burst first over the whole pool, ties broken by input order
///
/// Same record requirements and errors as
/// [`simulate_fcfs`](super::fcfs::simulate_fcfs).
pub fn simulate_sjf(
    processes: &mut [Process],
    cs_time: Tick,
) -> Result<Timeline, SchedulerError> {
    let mut pool: Vec<usize> = (0..processes.len()).collect();
    // Stable: equal bursts keep their input order
    pool.sort_by_key(|&i| processes[i].burst_time());

    run_in_order(processes, pool, cs_time)
}

/// Shortest burst among processes that have arrived by the current clock
///
/// With nothing arrived the earliest arrival runs next (shorter burst, then
/// input order, on ties) and the CPU idles until it shows up.
pub fn simulate_sjf_arrival_aware(
    processes: &mut [Process],
    cs_time: Tick,
) -> Result<Timeline, SchedulerError> {
    ensure_schedulable(processes)?;

    let mut pool: Vec<usize> = (0..processes.len()).collect();
    let mut order = Vec::with_capacity(pool.len());
    let mut clock: Tick = 0;

    while !pool.is_empty() {
        let arrived = pool
            .iter()
            .enumerate()
            .filter(|&(_, &i)| processes[i].arrival_time() <= clock)
            .min_by_key(|&(_, &i)| processes[i].burst_time())
            .map(|(pos, _)| pos);

        let pos = match arrived {
            Some(pos) => pos,
            None => pool
                .iter()
                .enumerate()
                .min_by_key(|&(_, &i)| (processes[i].arrival_time(), processes[i].burst_time()))
                .map(|(pos, _)| pos)
                .unwrap_or(0),
        };

        let index = pool.remove(pos);
        let process = &processes[index];
        clock = advance(
            clock.max(process.arrival_time()),
            process.burst_time(),
            cs_time,
            process.process_id(),
        )?;
        order.push(index);
    }

    run_in_order(processes, order, cs_time)
}
