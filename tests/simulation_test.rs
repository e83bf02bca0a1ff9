/*!
 * Simulation Tests
 * Config loading through to finished runs
 */

use cpu_sched_sim::io::{parse_processes, read_process_data};
use cpu_sched_sim::{
    ConfigError, OutputFormat, Policy, Process, SchedulerError, SimError, SimulationConfig,
    Simulator,
};
use pretty_assertions::assert_eq;
use std::io::Write;
use tempfile::NamedTempFile;

#[test]
fn test_config_file_drives_simulation() {
    let mut data = NamedTempFile::new().unwrap();
    writeln!(data, "1 0 10\n2 3 5\n3 5 8").unwrap();

    let mut config_file = NamedTempFile::new().unwrap();
    write!(
        config_file,
        r#"{{"input_path": {:?}, "cs_time": 0, "time_quantum": 4, "policies": ["rr", "fcfs"], "output": "json"}}"#,
        data.path().to_str().unwrap()
    )
    .unwrap();

    let config = SimulationConfig::from_json_file(config_file.path()).unwrap();
    assert_eq!(config.output, OutputFormat::Json);
    config.validate().unwrap();

    let processes = read_process_data(config.input_path.as_ref().unwrap()).unwrap();
    let runs = Simulator::new(config).run_all(&processes).unwrap();

    let policies: Vec<_> = runs.iter().map(|r| r.policy).collect();
    assert_eq!(policies, vec![Policy::RoundRobin, Policy::Fcfs]);

    // No context-switch overhead and no idle time: CPU is always busy
    for run in &runs {
        assert_eq!(run.stats.makespan, 23);
        assert_eq!(run.stats.cpu_utilization, 100.0);
    }
}

#[test]
fn test_config_file_errors() {
    let missing = SimulationConfig::from_json_file("/nonexistent/sim.json").unwrap_err();
    assert!(matches!(missing, ConfigError::Io { .. }));

    let mut bad = NamedTempFile::new().unwrap();
    write!(bad, r#"{{"policies": ["lottery"]}}"#).unwrap();
    let parse = SimulationConfig::from_json_file(bad.path()).unwrap_err();
    assert!(matches!(parse, ConfigError::Parse { .. }));
}

#[test]
fn test_each_policy_gets_independent_records() {
    let input = vec![
        Process::new(1, 0, 10),
        Process::new(2, 3, 5),
        Process::new(3, 5, 8),
    ];

    let runs = Simulator::default().run_all(&input).unwrap();

    assert!(input.iter().all(|p| p.finish_time().is_none()));
    let averages: Vec<f64> = runs.iter().map(|r| r.stats.average_waiting_time).collect();
    assert!((averages[0] - 20.0 / 3.0).abs() < 1e-9);
    assert!((averages[1] - 22.0 / 3.0).abs() < 1e-9);
    assert!((averages[2] - 59.0 / 3.0).abs() < 1e-9);
}

#[test]
fn test_empty_process_list_fails() {
    let err = Simulator::default().run_all(&[]).unwrap_err();
    assert!(matches!(
        err,
        SimError::Scheduler(SchedulerError::EmptyProcessList)
    ));
}

#[test]
fn test_arrival_near_clock_limit_fails_cleanly() {
    let processes = parse_processes("1 18446744073709551610 10\n").unwrap();
    let simulator = Simulator::default();

    for policy in Policy::ALL {
        let err = simulator.run(policy, &processes).unwrap_err();
        assert!(
            matches!(err, SimError::Scheduler(SchedulerError::ClockOverflow(1))),
            "{policy}: {err}"
        );
    }
}
