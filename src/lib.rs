/*!
 * CPU Scheduling Simulator Library
 * FCFS, SJF, and Round-Robin over a simulated clock, with run statistics
 */

pub mod config;
pub mod core;
pub mod io;
pub mod monitoring;
pub mod process;
pub mod scheduler;
pub mod simulation;

// Re-exports
pub use crate::core::errors::{ConfigError, LoadError, SchedulerError, SimError};
pub use crate::core::types::{Pid, SimResult, Tick};
pub use config::{OutputFormat, SimulationConfig};
pub use io::{read_process_data, render_run};
pub use monitoring::init_tracing;
pub use process::Process;
pub use scheduler::{
    simulate_fcfs, simulate_rr, simulate_sjf, Policy, SchedulingAlgorithm, SimulationStats,
    Timeline,
};
pub use simulation::{SimulationRun, Simulator};
