/*!
 * Report Rendering
 * Text Gantt charts, results tables, and JSON export for finished runs
 */

use crate::core::types::SimResult;
use crate::process::Process;
use crate::scheduler::{Policy, SimulationStats, Timeline};
use crate::simulation::SimulationRun;
use std::fmt::Write;

/// Banner printed above each run
pub fn render_banner(policy: Policy) -> String {
    let title = format!("|simulate {}|", policy.display_name());
    let rule = "=".repeat(title.len());
    format!("{rule}\n{title}\n{rule}")
}

/// One cell per slice with the dispatch clock underneath
///
/// ```text
/// | P1 | P2 | P3 |
/// 0    11   17   26
/// ```
///
/// Gaps where the CPU waited for an arrival get an `idle` cell.
pub fn render_gantt_chart(timeline: &Timeline) -> String {
    let mut bar = String::from("|");
    let mut axis = String::new();
    let mut clock = 0;

    for slice in timeline.slices() {
        if slice.start > clock {
            push_cell(&mut bar, &mut axis, " idle ", clock);
        }
        push_cell(&mut bar, &mut axis, &format!(" P{} ", slice.pid), slice.start);
        clock = slice.end() + timeline.cs_time();
    }

    let _ = write!(axis, "{clock}");
    format!("{bar}\n{axis}")
}

fn push_cell(bar: &mut String, axis: &mut String, label: &str, start: u64) {
    bar.push_str(label);
    bar.push('|');
    let _ = write!(axis, "{:<width$}", start, width = label.len() + 1);
}

/// Per-process table followed by the run's aggregates
pub fn render_results(processes: &[Process], stats: &SimulationStats) -> String {
    let mut out = String::from("Process\tFinish Time\tWaiting Time\tTurnaround Time\n");

    for process in processes {
        let _ = writeln!(
            out,
            "P{}\t{}\t\t{}\t\t{}",
            process.process_id(),
            or_dash(process.finish_time()),
            or_dash(process.waiting_time()),
            or_dash(process.turnaround_time()),
        );
    }

    let _ = writeln!(out, "\nAverage Waiting Time: {}", stats.average_waiting_time);
    let _ = writeln!(out, "Average Turnaround Time: {}", stats.average_turnaround_time);
    let _ = write!(out, "CPU Utilization: {}%", stats.cpu_utilization);
    out
}

fn or_dash(value: Option<u64>) -> String {
    value.map_or_else(|| "-".to_string(), |v| v.to_string())
}

/// Banner, chart, and table for one run
pub fn render_run(run: &SimulationRun) -> String {
    format!(
        "{}\n{}\n\n{}\n",
        render_banner(run.policy),
        render_gantt_chart(&run.timeline),
        render_results(&run.processes, &run.stats)
    )
}

/// Every run as a pretty-printed JSON array
pub fn to_json(runs: &[SimulationRun]) -> SimResult<String> {
    Ok(serde_json::to_string_pretty(runs)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scheduler::simulate_fcfs;

    #[test]
    fn test_banner() {
        assert_eq!(
            render_banner(Policy::Fcfs),
            "===============\n|simulate FCFS|\n==============="
        );
    }

    #[test]
    fn test_gantt_chart_alignment() {
        let mut processes = vec![
            Process::new(1, 0, 10),
            Process::new(2, 3, 5),
            Process::new(3, 5, 8),
        ];
        let timeline = simulate_fcfs(&mut processes, 1).unwrap();

        assert_eq!(
            render_gantt_chart(&timeline),
            "| P1 | P2 | P3 |\n0    11   17   26"
        );
    }

    #[test]
    fn test_gantt_chart_marks_idle_gap() {
        let mut processes = vec![Process::new(1, 2, 1)];
        let timeline = simulate_fcfs(&mut processes, 0).unwrap();

        assert_eq!(render_gantt_chart(&timeline), "| idle | P1 |\n0      2    3");
    }

    #[test]
    fn test_results_table() {
        let mut processes = vec![Process::new(1, 0, 4), Process::new(2, 0, 4)];
        simulate_fcfs(&mut processes, 0).unwrap();
        let stats = SimulationStats::compute(&processes).unwrap();

        let table = render_results(&processes, &stats);

        assert_eq!(
            table,
            "Process\tFinish Time\tWaiting Time\tTurnaround Time\n\
             P1\t4\t\t0\t\t4\n\
             P2\t8\t\t4\t\t8\n\
             \n\
             Average Waiting Time: 2\n\
             Average Turnaround Time: 6\n\
             CPU Utilization: 100%"
        );
    }
}
