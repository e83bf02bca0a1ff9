/*!
 * Simulation Runner
 * Runs each configured policy over its own copy of the process set
 */

use crate::config::SimulationConfig;
use crate::core::errors::SchedulerError;
use crate::core::types::SimResult;
use crate::monitoring::{generate_run_id, run_span};
use crate::process::Process;
use crate::scheduler::{
    Fcfs, Policy, RoundRobin, SchedulingAlgorithm, SimulationStats, Sjf, Timeline,
};
use serde::Serialize;
use tracing::info;

/// Outcome of one policy over one copy of the input
#[derive(Debug, Clone, Serialize)]
pub struct SimulationRun {
    pub run_id: String,
    pub policy: Policy,
    pub processes: Vec<Process>,
    pub timeline: Timeline,
    pub stats: SimulationStats,
}

/// Drives scheduling runs according to a [`SimulationConfig`]
pub struct Simulator {
    config: SimulationConfig,
}

impl Simulator {
    pub fn new(config: SimulationConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &SimulationConfig {
        &self.config
    }

    /// Build the algorithm for `policy` from the configured parameters
    pub fn algorithm(
        &self,
        policy: Policy,
    ) -> Result<Box<dyn SchedulingAlgorithm>, SchedulerError> {
        let cs_time = self.config.cs_time;
        let algorithm: Box<dyn SchedulingAlgorithm> = match policy {
            Policy::Fcfs => Box::new(Fcfs::new(cs_time)),
            Policy::Sjf if self.config.sjf_arrival_aware => Box::new(Sjf::arrival_aware(cs_time)),
            Policy::Sjf => Box::new(Sjf::new(cs_time)),
            Policy::RoundRobin => Box::new(RoundRobin::new(self.config.time_quantum, cs_time)?),
        };
        Ok(algorithm)
    }

    /// Run one policy on a fresh copy of `processes`
    pub fn run(&self, policy: Policy, processes: &[Process]) -> SimResult<SimulationRun> {
        if processes.is_empty() {
            return Err(SchedulerError::EmptyProcessList.into());
        }

        let algorithm = self.algorithm(policy)?;
        let run_id = generate_run_id();
        let span = run_span(&run_id, policy);
        let _entered = span.enter();

        let mut working: Vec<Process> = processes.to_vec();
        working.iter_mut().for_each(Process::reset);

        let timeline = algorithm.run(&mut working)?;
        let stats = SimulationStats::compute(&working)?;

        info!(
            policy = %policy,
            processes = stats.process_count,
            makespan = stats.makespan,
            context_switches = timeline.context_switches(),
            avg_waiting = stats.average_waiting_time,
            avg_turnaround = stats.average_turnaround_time,
            cpu_utilization = stats.cpu_utilization,
            "simulation complete"
        );

        Ok(SimulationRun {
            run_id,
            policy,
            processes: working,
            timeline,
            stats,
        })
    }

    /// Run every configured policy in order, each on an independent copy
    pub fn run_all(&self, processes: &[Process]) -> SimResult<Vec<SimulationRun>> {
        self.config
            .policies
            .iter()
            .map(|&policy| self.run(policy, processes))
            .collect()
    }
}

impl Default for Simulator {
    fn default() -> Self {
        Self::new(SimulationConfig::default())
    }
}
