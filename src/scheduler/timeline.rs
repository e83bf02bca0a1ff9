/*!
 * Execution Timeline
 * Log of every slice a scheduling run dispatched, in clock order
 */

use crate::core::types::{Pid, Tick};
use serde::Serialize;

/// One contiguous dispatch of a process
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Slice {
    pub pid: Pid,
    /// Clock at dispatch, after any catch-up to the arrival time
    pub start: Tick,
    /// Work executed, excluding the context switch that follows
    pub duration: Tick,
}

impl Slice {
    /// Clock when the process stops running (before the context switch)
    #[inline]
    pub fn end(&self) -> Tick {
        self.start + self.duration
    }
}

/// Slices of a single run plus the context-switch cost charged after each
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Timeline {
    cs_time: Tick,
    slices: Vec<Slice>,
}

impl Timeline {
    pub fn new(cs_time: Tick) -> Self {
        Self {
            cs_time,
            slices: Vec::new(),
        }
    }

    pub(crate) fn with_capacity(cs_time: Tick, capacity: usize) -> Self {
        Self {
            cs_time,
            slices: Vec::with_capacity(capacity),
        }
    }

    pub(crate) fn record(&mut self, pid: Pid, start: Tick, duration: Tick) {
        self.slices.push(Slice {
            pid,
            start,
            duration,
        });
    }

    pub fn cs_time(&self) -> Tick {
        self.cs_time
    }

    pub fn slices(&self) -> &[Slice] {
        &self.slices
    }

    pub fn len(&self) -> usize {
        self.slices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slices.is_empty()
    }

    /// One context switch is charged per slice, the last one included
    pub fn context_switches(&self) -> usize {
        self.slices.len()
    }

    /// Total work executed on behalf of `pid`
    pub fn executed_time(&self, pid: Pid) -> Tick {
        self.slices
            .iter()
            .filter(|s| s.pid == pid)
            .map(|s| s.duration)
            .sum()
    }

    /// Pids in the order they were first dispatched
    pub fn dispatch_order(&self) -> Vec<Pid> {
        let mut order: Vec<Pid> = Vec::new();
        for slice in &self.slices {
            if !order.contains(&slice.pid) {
                order.push(slice.pid);
            }
        }
        order
    }

    /// Ticks the CPU spent waiting for an arrival
    pub fn idle_time(&self) -> Tick {
        let mut clock = 0;
        let mut idle = 0;
        for slice in &self.slices {
            idle += slice.start.saturating_sub(clock);
            clock = slice.end() + self.cs_time;
        }
        idle
    }

    /// Clock after the final slice and its context switch
    pub fn end_time(&self) -> Tick {
        self.slices
            .last()
            .map(|s| s.end() + self.cs_time)
            .unwrap_or(0)
    }
}
