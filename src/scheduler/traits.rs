/*!
 * Scheduler Traits
 * Interface shared by every scheduling discipline
 */

use super::timeline::Timeline;
use super::types::Policy;
use crate::core::errors::SchedulerError;
use crate::process::Process;

/// A scheduling discipline that drives a simulated clock over a process set
pub trait SchedulingAlgorithm {
    /// Which discipline this is
    fn policy(&self) -> Policy;

    /// Run every process to completion, filling in finish and waiting times
    ///
    /// The caller hands over exclusive access for the duration of the run.
    /// Records must be fresh: `remaining_time == burst_time`, no results yet.
    fn run(&self, processes: &mut [Process]) -> Result<Timeline, SchedulerError>;
}
