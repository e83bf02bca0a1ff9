/*!
 * Scheduler Statistics
 * Aggregate timing metrics over a finished process set
 */

use crate::core::errors::SchedulerError;
use crate::core::types::{Pid, Tick};
use crate::process::Process;
use serde::Serialize;

/// Aggregate results of one scheduling run
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "snake_case")]
pub struct SimulationStats {
    pub average_waiting_time: f64,
    pub average_turnaround_time: f64,
    /// Percentage of the makespan spent on burst work
    pub cpu_utilization: f64,
    pub total_burst_time: Tick,
    /// Latest finish time across all processes
    pub makespan: Tick,
    pub process_count: usize,
}

impl SimulationStats {
    /// Compute every aggregate in one pass over a finished run
    pub fn compute(processes: &[Process]) -> Result<Self, SchedulerError> {
        if processes.is_empty() {
            return Err(SchedulerError::EmptyProcessList);
        }

        let mut total_waiting: Tick = 0;
        let mut total_turnaround: Tick = 0;
        let mut total_burst_time: Tick = 0;
        let mut makespan: Tick = 0;

        for process in processes {
            let (finish, waiting) = finished(process)?;
            let pid = process.process_id();
            total_waiting = accumulate(total_waiting, waiting, pid)?;
            total_turnaround = accumulate(total_turnaround, finish - process.arrival_time(), pid)?;
            total_burst_time = accumulate(total_burst_time, process.burst_time(), pid)?;
            makespan = makespan.max(finish);
        }

        let count = processes.len() as f64;
        Ok(Self {
            average_waiting_time: total_waiting as f64 / count,
            average_turnaround_time: total_turnaround as f64 / count,
            cpu_utilization: total_burst_time as f64 / makespan as f64 * 100.0,
            total_burst_time,
            makespan,
            process_count: processes.len(),
        })
    }
}

fn finished(process: &Process) -> Result<(Tick, Tick), SchedulerError> {
    match (process.finish_time(), process.waiting_time()) {
        (Some(finish), Some(waiting)) => Ok((finish, waiting)),
        _ => Err(SchedulerError::Unfinished(process.process_id())),
    }
}

fn accumulate(total: Tick, value: Tick, pid: Pid) -> Result<Tick, SchedulerError> {
    total
        .checked_add(value)
        .ok_or(SchedulerError::ClockOverflow(pid))
}

fn ensure_non_empty(processes: &[Process]) -> Result<(), SchedulerError> {
    if processes.is_empty() {
        Err(SchedulerError::EmptyProcessList)
    } else {
        Ok(())
    }
}

/// Mean waiting time over all processes
pub fn average_waiting_time(processes: &[Process]) -> Result<f64, SchedulerError> {
    ensure_non_empty(processes)?;
    let total = processes.iter().try_fold(0, |acc: Tick, p| {
        let (_, waiting) = finished(p)?;
        accumulate(acc, waiting, p.process_id())
    })?;
    Ok(total as f64 / processes.len() as f64)
}

/// Mean of `finish_time - arrival_time` over all processes
pub fn average_turnaround_time(processes: &[Process]) -> Result<f64, SchedulerError> {
    ensure_non_empty(processes)?;
    let total = processes.iter().try_fold(0, |acc: Tick, p| {
        let (finish, _) = finished(p)?;
        accumulate(acc, finish - p.arrival_time(), p.process_id())
    })?;
    Ok(total as f64 / processes.len() as f64)
}

/// `100 * sum(burst_time) / max(finish_time)`
///
/// The denominator is the single latest finish time, so idle time before the
/// first arrival counts against utilization.
pub fn cpu_utilization(processes: &[Process]) -> Result<f64, SchedulerError> {
    ensure_non_empty(processes)?;
    let mut total_burst: Tick = 0;
    let mut makespan: Tick = 0;
    for process in processes {
        let (finish, _) = finished(process)?;
        total_burst = accumulate(total_burst, process.burst_time(), process.process_id())?;
        makespan = makespan.max(finish);
    }
    Ok(total_burst as f64 / makespan as f64 * 100.0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scheduler::fcfs::simulate_fcfs;

    fn fcfs_reference() -> Vec<Process> {
        let mut processes = vec![
            Process::new(1, 0, 10),
            Process::new(2, 3, 5),
            Process::new(3, 5, 8),
        ];
        simulate_fcfs(&mut processes, 1).unwrap();
        processes
    }

    #[test]
    fn test_fcfs_statistics() {
        let processes = fcfs_reference();

        let stats = SimulationStats::compute(&processes).unwrap();

        assert!((stats.average_waiting_time - 20.0 / 3.0).abs() < 1e-9);
        assert!((stats.average_turnaround_time - 46.0 / 3.0).abs() < 1e-9);
        assert!((stats.cpu_utilization - 2300.0 / 26.0).abs() < 1e-9);
        assert_eq!(stats.total_burst_time, 23);
        assert_eq!(stats.makespan, 26);
        assert_eq!(stats.process_count, 3);
    }

    #[test]
    fn test_free_functions_agree_with_compute() {
        let processes = fcfs_reference();
        let stats = SimulationStats::compute(&processes).unwrap();

        assert_eq!(average_waiting_time(&processes).unwrap(), stats.average_waiting_time);
        assert_eq!(
            average_turnaround_time(&processes).unwrap(),
            stats.average_turnaround_time
        );
        assert_eq!(cpu_utilization(&processes).unwrap(), stats.cpu_utilization);
    }

    #[test]
    fn test_empty_list_fails() {
        assert_eq!(
            SimulationStats::compute(&[]),
            Err(SchedulerError::EmptyProcessList)
        );
        assert_eq!(average_waiting_time(&[]), Err(SchedulerError::EmptyProcessList));
        assert_eq!(
            average_turnaround_time(&[]),
            Err(SchedulerError::EmptyProcessList)
        );
        assert_eq!(cpu_utilization(&[]), Err(SchedulerError::EmptyProcessList));
    }

    #[test]
    fn test_unfinished_process_fails() {
        let processes = vec![Process::new(4, 0, 3)];
        assert_eq!(
            SimulationStats::compute(&processes),
            Err(SchedulerError::Unfinished(4))
        );
        assert_eq!(cpu_utilization(&processes), Err(SchedulerError::Unfinished(4)));
    }

    #[test]
    fn test_full_utilization_without_overhead() {
        let mut processes = vec![Process::new(1, 0, 4), Process::new(2, 0, 6)];
        simulate_fcfs(&mut processes, 0).unwrap();

        assert_eq!(cpu_utilization(&processes).unwrap(), 100.0);
    }

    #[test]
    fn test_totals_overflow_fails() {
        // P2 waits almost the whole clock range behind P1
        let mut processes = vec![Process::new(1, 0, Tick::MAX - 1), Process::new(2, 0, 1)];
        simulate_fcfs(&mut processes, 0).unwrap();
        let mut second = vec![Process::new(3, 0, 2), Process::new(4, 0, 1)];
        simulate_fcfs(&mut second, 0).unwrap();
        processes.extend(second);

        assert_eq!(
            SimulationStats::compute(&processes),
            Err(SchedulerError::ClockOverflow(2))
        );
        assert_eq!(
            average_waiting_time(&processes),
            Err(SchedulerError::ClockOverflow(4))
        );
        assert_eq!(cpu_utilization(&processes), Err(SchedulerError::ClockOverflow(3)));
    }
}
