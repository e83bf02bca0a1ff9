/*!
 * First-Come-First-Served
 * Non-preemptive, runs processes in the order they are given
 */

use super::timeline::Timeline;
use super::traits::SchedulingAlgorithm;
use super::types::Policy;
use crate::core::errors::SchedulerError;
use crate::core::types::{Pid, Tick};
use crate::process::Process;
use tracing::{debug, warn};

/// FCFS scheduler
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Fcfs {
    cs_time: Tick,
}

impl Fcfs {
    pub fn new(cs_time: Tick) -> Self {
        Self { cs_time }
    }

    pub fn cs_time(&self) -> Tick {
        self.cs_time
    }
}

impl SchedulingAlgorithm for Fcfs {
    fn policy(&self) -> Policy {
        Policy::Fcfs
    }

    fn run(&self, processes: &mut [Process]) -> Result<Timeline, SchedulerError> {
        simulate_fcfs(processes, self.cs_time)
    }
}

/// Run `processes` in slice order, each to completion
///
/// The order is not re-sorted; callers pass processes in arrival order.
/// Records must be fresh (see [`Process::is_fresh`]) and have a positive
/// burst, otherwise nothing is touched and an error names the first offender.
/// On [`SchedulerError::ClockOverflow`] the records dispatched so far keep
/// their results.
pub fn simulate_fcfs(
    processes: &mut [Process],
    cs_time: Tick,
) -> Result<Timeline, SchedulerError> {
    let count = processes.len();
    run_in_order(processes, 0..count, cs_time)
}

/// Reject records a scheduler cannot start from
pub(super) fn ensure_schedulable(processes: &[Process]) -> Result<(), SchedulerError> {
    for process in processes {
        if process.burst_time() == 0 {
            return Err(SchedulerError::ZeroBurst(process.process_id()));
        }
        if !process.is_fresh() {
            return Err(SchedulerError::AlreadyScheduled(process.process_id()));
        }
    }
    Ok(())
}

/// Move the clock past `executed` ticks of work and the context switch after it
#[inline]
pub(super) fn advance(
    clock: Tick,
    executed: Tick,
    cs_time: Tick,
    pid: Pid,
) -> Result<Tick, SchedulerError> {
    clock
        .checked_add(executed)
        .and_then(|t| t.checked_add(cs_time))
        .ok_or(SchedulerError::ClockOverflow(pid))
}

/// Dispatch `order` (indices into `processes`) one after another, non-preemptively
pub(super) fn run_in_order<I>(
    processes: &mut [Process],
    order: I,
    cs_time: Tick,
) -> Result<Timeline, SchedulerError>
where
    I: IntoIterator<Item = usize>,
{
    ensure_schedulable(processes)?;

    let mut timeline = Timeline::with_capacity(cs_time, processes.len());
    let mut current_time: Tick = 0;

    for index in order {
        let process = &mut processes[index];

        if current_time < process.arrival_time() {
            warn!(
                pid = process.process_id(),
                from = current_time,
                to = process.arrival_time(),
                "CPU idle until arrival"
            );
            current_time = process.arrival_time();
        }

        let waiting_time = current_time - process.arrival_time();
        let pid = process.process_id();
        let finish_time = advance(current_time, process.burst_time(), cs_time, pid)?;
        let executed = process.run_to_completion();
        timeline.record(process.process_id(), current_time, executed);
        debug!(
            pid = process.process_id(),
            start = current_time,
            burst = executed,
            "dispatched"
        );

        current_time = finish_time;
        process.complete(current_time, waiting_time);
    }

    Ok(timeline)
}
