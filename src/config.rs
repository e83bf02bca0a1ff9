/*!
 * Simulation Configuration
 * Defaults, JSON config files, and environment overrides
 *
 * Environment variables:
 * - SIM_INPUT: process file path
 * - SIM_CS_TIME: context-switch cost in ticks (default: 1)
 * - SIM_TIME_QUANTUM: round-robin quantum in ticks (default: 2)
 * - SIM_POLICIES: comma-separated policies to run (default: fcfs,sjf,rr)
 * - SIM_SJF_ARRIVAL_AWARE: restrict SJF to arrived processes (default: false)
 * - SIM_OUTPUT: text or json (default: text)
 */

use crate::core::errors::ConfigError;
use crate::core::types::Tick;
use crate::scheduler::Policy;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::debug;

pub const DEFAULT_CS_TIME: Tick = 1;
pub const DEFAULT_TIME_QUANTUM: Tick = 2;

/// Report format
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

impl OutputFormat {
    pub fn from_str(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "text" | "txt" => Some(Self::Text),
            "json" => Some(Self::Json),
            _ => None,
        }
    }
}

/// Simulation configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimulationConfig {
    /// Process list to load
    pub input_path: Option<PathBuf>,

    /// Context-switch cost charged after every slice
    pub cs_time: Tick,

    /// Round-robin time quantum
    pub time_quantum: Tick,

    /// Policies to simulate, in report order
    pub policies: Vec<Policy>,

    /// Use arrival-aware SJF selection
    pub sjf_arrival_aware: bool,

    /// Report format
    pub output: OutputFormat,
}

impl SimulationConfig {
    /// Create a new configuration with defaults
    pub fn new() -> Self {
        Self {
            input_path: None,
            cs_time: DEFAULT_CS_TIME,
            time_quantum: DEFAULT_TIME_QUANTUM,
            policies: Policy::ALL.to_vec(),
            sjf_arrival_aware: false,
            output: OutputFormat::Text,
        }
    }

    /// Load from a JSON file; missing keys keep their defaults
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        serde_json::from_str(&contents).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Set the process file
    pub fn with_input(mut self, path: impl Into<PathBuf>) -> Self {
        self.input_path = Some(path.into());
        self
    }

    /// Set context-switch cost
    pub fn with_cs_time(mut self, cs_time: Tick) -> Self {
        self.cs_time = cs_time;
        self
    }

    /// Set round-robin quantum
    pub fn with_time_quantum(mut self, time_quantum: Tick) -> Self {
        self.time_quantum = time_quantum;
        self
    }

    /// Set the policies to run
    pub fn with_policies(mut self, policies: Vec<Policy>) -> Self {
        self.policies = policies;
        self
    }

    /// Enable/disable arrival-aware SJF
    pub fn with_sjf_arrival_aware(mut self, enable: bool) -> Self {
        self.sjf_arrival_aware = enable;
        self
    }

    /// Set report format
    pub fn with_output(mut self, output: OutputFormat) -> Self {
        self.output = output;
        self
    }

    /// Apply `SIM_*` overrides from the process environment
    pub fn apply_env(self) -> Result<Self, ConfigError> {
        self.apply_env_from(|key| std::env::var(key).ok())
    }

    /// Apply `SIM_*` overrides from an arbitrary lookup
    pub fn apply_env_from<F>(mut self, lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(path) = lookup("SIM_INPUT") {
            self.input_path = Some(PathBuf::from(path));
        }
        if let Some(value) = lookup("SIM_CS_TIME") {
            self.cs_time = parse_ticks("SIM_CS_TIME", &value)?;
        }
        if let Some(value) = lookup("SIM_TIME_QUANTUM") {
            self.time_quantum = parse_ticks("SIM_TIME_QUANTUM", &value)?;
        }
        if let Some(value) = lookup("SIM_POLICIES") {
            self.policies = parse_policies(&value)?;
        }
        if let Some(value) = lookup("SIM_SJF_ARRIVAL_AWARE") {
            self.sjf_arrival_aware = parse_bool("SIM_SJF_ARRIVAL_AWARE", &value)?;
        }
        if let Some(value) = lookup("SIM_OUTPUT") {
            self.output =
                OutputFormat::from_str(&value).ok_or_else(|| invalid("SIM_OUTPUT", &value))?;
        }

        debug!(config = ?self, "configuration resolved");
        Ok(self)
    }

    /// Reject configurations that cannot run
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.policies.is_empty() {
            return Err(ConfigError::NoPolicies);
        }
        if self.time_quantum == 0 && self.policies.contains(&Policy::RoundRobin) {
            return Err(ConfigError::ZeroQuantum);
        }
        Ok(())
    }
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self::new()
    }
}

fn invalid(key: &str, value: &str) -> ConfigError {
    ConfigError::InvalidValue {
        key: key.to_string(),
        value: value.to_string(),
    }
}

fn parse_ticks(key: &str, value: &str) -> Result<Tick, ConfigError> {
    value.trim().parse().map_err(|_| invalid(key, value))
}

fn parse_bool(key: &str, value: &str) -> Result<bool, ConfigError> {
    match value.trim().to_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        _ => Err(invalid(key, value)),
    }
}

/// Parse a comma-separated policy list such as `fcfs,rr`
pub fn parse_policies(value: &str) -> Result<Vec<Policy>, ConfigError> {
    value
        .split(',')
        .filter(|s| !s.trim().is_empty())
        .map(|s| Policy::from_str(s).map_err(|_| invalid("SIM_POLICIES", value)))
        .collect()
}
