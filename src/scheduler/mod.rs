/*!
 * Scheduler Module
 * Scheduling disciplines, execution timelines, and run statistics
 */

pub mod fcfs;
pub mod round_robin;
pub mod sjf;
pub mod stats;
pub mod timeline;
pub mod traits;
pub mod types;

// Re-export public API
pub use fcfs::{simulate_fcfs, Fcfs};
pub use round_robin::{simulate_rr, RoundRobin};
pub use sjf::{simulate_sjf, simulate_sjf_arrival_aware, Sjf};
pub use stats::{average_turnaround_time, average_waiting_time, cpu_utilization, SimulationStats};
pub use timeline::{Slice, Timeline};
pub use traits::SchedulingAlgorithm;
pub use types::{Policy, TimeQuantum};
