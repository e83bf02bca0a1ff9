/*!
 * Process Record
 * Static timing attributes plus the mutable state a scheduling run fills in
 */

use crate::core::types::{Pid, Tick};
use serde::Serialize;

/// A simulated process
///
/// Created with `remaining_time == burst_time` and no results. Only a
/// scheduling algorithm mutates it; once the run returns it is read-only.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub struct Process {
    process_id: Pid,
    arrival_time: Tick,
    burst_time: Tick,
    remaining_time: Tick,
    #[serde(skip_serializing_if = "Option::is_none")]
    finish_time: Option<Tick>,
    #[serde(skip_serializing_if = "Option::is_none")]
    waiting_time: Option<Tick>,
}

impl Process {
    /// Create a new, not yet scheduled process
    ///
    /// `burst_time` should be positive; schedulers refuse zero-burst records
    /// with [`SchedulerError::ZeroBurst`](crate::core::errors::SchedulerError::ZeroBurst).
    pub fn new(process_id: Pid, arrival_time: Tick, burst_time: Tick) -> Self {
        Self {
            process_id,
            arrival_time,
            burst_time,
            remaining_time: burst_time,
            finish_time: None,
            waiting_time: None,
        }
    }

    #[inline]
    pub fn process_id(&self) -> Pid {
        self.process_id
    }

    #[inline]
    pub fn arrival_time(&self) -> Tick {
        self.arrival_time
    }

    #[inline]
    pub fn burst_time(&self) -> Tick {
        self.burst_time
    }

    #[inline]
    pub fn remaining_time(&self) -> Tick {
        self.remaining_time
    }

    #[inline]
    pub fn finish_time(&self) -> Option<Tick> {
        self.finish_time
    }

    #[inline]
    pub fn waiting_time(&self) -> Option<Tick> {
        self.waiting_time
    }

    /// Time from arrival to completion, once finished
    pub fn turnaround_time(&self) -> Option<Tick> {
        self.finish_time.map(|finish| finish - self.arrival_time)
    }

    /// Run for at most `quantum` ticks, returning the time actually consumed
    pub fn execute(&mut self, quantum: Tick) -> Tick {
        let executed = self.remaining_time.min(quantum);
        self.remaining_time -= executed;
        executed
    }

    /// Run whatever work is left in one go
    pub fn run_to_completion(&mut self) -> Tick {
        self.execute(self.remaining_time)
    }

    #[inline]
    pub fn is_finished(&self) -> bool {
        self.remaining_time == 0
    }

    /// True until a scheduling run touches the record (or after `reset`)
    pub fn is_fresh(&self) -> bool {
        self.remaining_time == self.burst_time
            && self.finish_time.is_none()
            && self.waiting_time.is_none()
    }

    /// Record the outcome of a run. Results are written exactly once.
    pub(crate) fn complete(&mut self, finish_time: Tick, waiting_time: Tick) {
        debug_assert!(self.is_finished(), "process {} completed with work left", self.process_id);
        debug_assert!(
            self.finish_time.is_none() && self.waiting_time.is_none(),
            "process {} completed twice",
            self.process_id
        );
        self.finish_time = Some(finish_time);
        self.waiting_time = Some(waiting_time);
    }

    /// Restore the freshly loaded state so the record can be scheduled again
    pub fn reset(&mut self) {
        self.remaining_time = self.burst_time;
        self.finish_time = None;
        self.waiting_time = None;
    }
}
