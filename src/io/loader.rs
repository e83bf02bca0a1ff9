/*!
 * Process List Loader
 * Parses `process_id arrival_time burst_time` lines into process records
 */

use crate::core::errors::LoadError;
use crate::core::types::{Pid, Tick};
use crate::process::Process;
use std::collections::HashSet;
use std::path::Path;
use std::str::FromStr;
use tracing::{debug, info};

/// Read and parse a process file
pub fn read_process_data(path: impl AsRef<Path>) -> Result<Vec<Process>, LoadError> {
    let path = path.as_ref();
    let contents = std::fs::read_to_string(path).map_err(|source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    let processes = parse_processes(&contents)?;
    info!(path = %path.display(), count = processes.len(), "process list loaded");
    Ok(processes)
}

/// Parse process records from text, one per line
///
/// Blank lines and lines starting with `#` are skipped. Line numbers in
/// errors are 1-based.
pub fn parse_processes(contents: &str) -> Result<Vec<Process>, LoadError> {
    let mut processes = Vec::new();
    let mut seen: HashSet<Pid> = HashSet::new();

    for (index, raw) in contents.lines().enumerate() {
        let line = index + 1;
        let trimmed = raw.trim();
        if trimmed.is_empty() || trimmed.starts_with('#') {
            continue;
        }

        let mut fields = trimmed.split_whitespace();
        let pid: Pid = next_field(&mut fields, line, "process_id")?;
        let arrival_time: Tick = next_field(&mut fields, line, "arrival_time")?;
        let burst_time: Tick = next_field(&mut fields, line, "burst_time")?;

        if fields.next().is_some() {
            return Err(LoadError::TrailingData { line });
        }
        if burst_time == 0 {
            return Err(LoadError::ZeroBurst { line, pid });
        }
        if !seen.insert(pid) {
            return Err(LoadError::DuplicatePid { line, pid });
        }

        debug!(line, pid, arrival_time, burst_time, "parsed process");
        processes.push(Process::new(pid, arrival_time, burst_time));
    }

    Ok(processes)
}

fn next_field<'a, T, I>(fields: &mut I, line: usize, field: &'static str) -> Result<T, LoadError>
where
    T: FromStr,
    I: Iterator<Item = &'a str>,
{
    let raw = fields.next().ok_or(LoadError::MissingField { line, field })?;
    raw.parse().map_err(|_| LoadError::InvalidNumber {
        line,
        field,
        value: raw.to_string(),
    })
}
