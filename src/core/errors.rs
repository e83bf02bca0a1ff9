/*!
 * Error Types
 * Centralized error handling with thiserror, miette, and serde support
 */

use super::types::Pid;
use miette::Diagnostic;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use thiserror::Error;

/// Scheduler-related errors with serialization support
#[derive(Error, Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Diagnostic)]
#[serde(tag = "error_type", content = "details", rename_all = "snake_case")]
pub enum SchedulerError {
    #[error("Cannot compute statistics over an empty process list")]
    #[diagnostic(
        code(scheduler::empty_process_list),
        help("Provide at least one process before computing statistics.")
    )]
    EmptyProcessList,

    #[error("Invalid time quantum: {0}")]
    #[diagnostic(
        code(scheduler::invalid_quantum),
        help("Round-robin needs a time quantum of at least 1 tick.")
    )]
    InvalidQuantum(u64),

    #[error("Process {0} has not finished")]
    #[diagnostic(
        code(scheduler::unfinished),
        help("Statistics are only defined once a scheduling run has completed every process.")
    )]
    Unfinished(Pid),

    #[error("Invalid scheduling policy: {0}")]
    #[diagnostic(
        code(scheduler::invalid_policy),
        help("Use fcfs, sjf, or rr.")
    )]
    InvalidPolicy(String),

    #[error("Process {0} has zero burst time")]
    #[diagnostic(
        code(scheduler::zero_burst),
        help("Every process needs at least 1 tick of CPU work.")
    )]
    ZeroBurst(Pid),

    #[error("Process {0} was already scheduled")]
    #[diagnostic(
        code(scheduler::already_scheduled),
        help("Call Process::reset before running the record through another scheduler.")
    )]
    AlreadyScheduled(Pid),

    #[error("Simulated clock overflowed while scheduling process {0}")]
    #[diagnostic(
        code(scheduler::clock_overflow),
        help("Arrival and burst times must leave room for the run to finish within u64 ticks.")
    )]
    ClockOverflow(Pid),
}

/// Process list loading errors
#[derive(Error, Debug, Diagnostic)]
pub enum LoadError {
    #[error("Failed to read process file {path}")]
    #[diagnostic(
        code(loader::io),
        help("Check that the file exists and is readable.")
    )]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Line {line}: missing {field}")]
    #[diagnostic(
        code(loader::missing_field),
        help("Each line must read `process_id arrival_time burst_time`.")
    )]
    MissingField { line: usize, field: &'static str },

    #[error("Line {line}: {field} is not a non-negative integer: {value:?}")]
    #[diagnostic(code(loader::invalid_number))]
    InvalidNumber {
        line: usize,
        field: &'static str,
        value: String,
    },

    #[error("Line {line}: unexpected data after burst_time")]
    #[diagnostic(
        code(loader::trailing_data),
        help("Each line must read `process_id arrival_time burst_time`.")
    )]
    TrailingData { line: usize },

    #[error("Line {line}: process {pid} has a zero burst time")]
    #[diagnostic(
        code(loader::zero_burst),
        help("Every process needs a burst time of at least 1.")
    )]
    ZeroBurst { line: usize, pid: Pid },

    #[error("Line {line}: process id {pid} already defined")]
    #[diagnostic(code(loader::duplicate_pid))]
    DuplicatePid { line: usize, pid: Pid },
}

/// Configuration errors
#[derive(Error, Debug, Diagnostic)]
pub enum ConfigError {
    #[error("Failed to read config file {path}")]
    #[diagnostic(code(config::io))]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse config file {path}")]
    #[diagnostic(
        code(config::parse),
        help("The config file must be a JSON object, see SimulationConfig.")
    )]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("Invalid value for {key}: {value:?}")]
    #[diagnostic(code(config::invalid_value))]
    InvalidValue { key: String, value: String },

    #[error("No scheduling policy selected")]
    #[diagnostic(
        code(config::no_policies),
        help("Select at least one of fcfs, sjf, rr.")
    )]
    NoPolicies,

    #[error("Round-robin selected with a zero time quantum")]
    #[diagnostic(
        code(config::zero_quantum),
        help("Set time_quantum (or SIM_TIME_QUANTUM) to at least 1.")
    )]
    ZeroQuantum,
}

/// Unified simulator error type with miette diagnostics
#[derive(Error, Debug, Diagnostic)]
pub enum SimError {
    #[error("Scheduler error: {0}")]
    #[diagnostic(transparent)]
    Scheduler(#[from] SchedulerError),

    #[error("Load error: {0}")]
    #[diagnostic(transparent)]
    Load(#[from] LoadError),

    #[error("Config error: {0}")]
    #[diagnostic(transparent)]
    Config(#[from] ConfigError),

    #[error("Serialization error: {0}")]
    #[diagnostic(code(sim::serialization))]
    Serialization(#[from] serde_json::Error),
}
