/*!
 * Round-Robin Scheduler
 * Preemptive, fixed time quantum, FIFO rotation
 */

use super::fcfs::{advance, ensure_schedulable};
use super::timeline::Timeline;
use super::traits::SchedulingAlgorithm;
use super::types::{Policy, TimeQuantum};
use crate::core::errors::SchedulerError;
use crate::core::types::Tick;
use crate::process::Process;
use std::collections::VecDeque;
use tracing::{debug, warn};

/// Round-robin scheduler
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RoundRobin {
    quantum: TimeQuantum,
    cs_time: Tick,
}

impl RoundRobin {
    /// Create a round-robin scheduler, rejecting a zero quantum
    pub fn new(time_quantum: Tick, cs_time: Tick) -> Result<Self, SchedulerError> {
        Ok(Self::with_quantum(TimeQuantum::new(time_quantum)?, cs_time))
    }

    pub fn with_quantum(quantum: TimeQuantum, cs_time: Tick) -> Self {
        Self { quantum, cs_time }
    }

    pub fn quantum(&self) -> TimeQuantum {
        self.quantum
    }

    pub fn cs_time(&self) -> Tick {
        self.cs_time
    }
}

impl SchedulingAlgorithm for RoundRobin {
    fn policy(&self) -> Policy {
        Policy::RoundRobin
    }

    fn run(&self, processes: &mut [Process]) -> Result<Timeline, SchedulerError> {
        rotate(processes, self.quantum, self.cs_time)
    }
}

/// Round-robin over `processes` in the given order
///
/// Fails with [`SchedulerError::InvalidQuantum`] before touching any record
/// when `time_quantum` is zero. Record requirements match
/// [`simulate_fcfs`](super::fcfs::simulate_fcfs); after a
/// [`SchedulerError::ClockOverflow`] the records are partially run.
pub fn simulate_rr(
    processes: &mut [Process],
    time_quantum: Tick,
    cs_time: Tick,
) -> Result<Timeline, SchedulerError> {
    let quantum = TimeQuantum::new(time_quantum)?;
    rotate(processes, quantum, cs_time)
}

fn rotate(
    processes: &mut [Process],
    quantum: TimeQuantum,
    cs_time: Tick,
) -> Result<Timeline, SchedulerError> {
    ensure_schedulable(processes)?;

    let mut queue: VecDeque<usize> = (0..processes.len()).collect();
    let mut timeline = Timeline::new(cs_time);
    let mut current_time: Tick = 0;

    while let Some(&index) = queue.front() {
        let process = &mut processes[index];

        // Only the head is checked; nothing else in the queue gates the clock
        if current_time < process.arrival_time() {
            warn!(
                pid = process.process_id(),
                from = current_time,
                to = process.arrival_time(),
                "CPU idle until arrival"
            );
            current_time = process.arrival_time();
        }

        let slice = process.remaining_time().min(quantum.ticks());
        let slice_end = advance(current_time, slice, cs_time, process.process_id())?;
        let executed = process.execute(slice);
        timeline.record(process.process_id(), current_time, executed);
        current_time = slice_end;

        if process.is_finished() {
            let waiting_time = current_time - process.arrival_time() - process.burst_time();
            process.complete(current_time, waiting_time);
            queue.pop_front();
            debug!(
                pid = process.process_id(),
                finish = current_time,
                waiting = waiting_time,
                "finished"
            );
        } else {
            queue.rotate_left(1);
            debug!(
                pid = process.process_id(),
                executed,
                remaining = process.remaining_time(),
                "preempted"
            );
        }
    }

    Ok(timeline)
}
