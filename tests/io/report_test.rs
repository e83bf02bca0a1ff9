/*!
 * Report Tests
 * Text and JSON rendering of finished runs
 */

use cpu_sched_sim::io::{render_gantt_chart, render_run, to_json};
use cpu_sched_sim::{simulate_rr, Policy, Process, Simulator};
use pretty_assertions::assert_eq;

fn reference() -> Vec<Process> {
    vec![
        Process::new(1, 0, 10),
        Process::new(2, 3, 5),
        Process::new(3, 5, 8),
    ]
}

#[test]
fn test_rr_gantt_chart() {
    let mut processes = vec![Process::new(1, 0, 3), Process::new(2, 0, 2)];
    let timeline = simulate_rr(&mut processes, 2, 0).unwrap();

    assert_eq!(
        render_gantt_chart(&timeline),
        "| P1 | P2 | P1 |\n0    2    4    5"
    );
}

#[test]
fn test_render_run_sections() {
    let run = Simulator::default()
        .run(Policy::Fcfs, &reference())
        .unwrap();

    let text = render_run(&run);

    assert!(text.starts_with("===============\n|simulate FCFS|\n===============\n"));
    assert!(text.contains("| P1 | P2 | P3 |"));
    assert!(text.contains("P2\t17\t\t8\t\t14"));
    assert!(text.contains("CPU Utilization: "));
}

#[test]
fn test_json_export() {
    let runs = Simulator::default().run_all(&reference()).unwrap();

    let json = to_json(&runs).unwrap();
    let value: serde_json::Value = serde_json::from_str(&json).unwrap();

    let runs = value.as_array().unwrap();
    assert_eq!(runs.len(), 3);
    assert_eq!(runs[0]["policy"], "fcfs");
    assert_eq!(runs[2]["policy"], "rr");
    assert_eq!(runs[1]["stats"]["makespan"], 29);
    assert_eq!(runs[0]["processes"][1]["waiting_time"], 8);
    assert_eq!(runs[2]["timeline"]["slices"].as_array().unwrap().len(), 12);
}
