/*!
 * Loader Tests
 * Reading process files from disk
 */

use cpu_sched_sim::io::read_process_data;
use cpu_sched_sim::{LoadError, Process};
use pretty_assertions::assert_eq;
use std::io::Write;
use tempfile::NamedTempFile;

fn write_file(contents: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(contents.as_bytes()).unwrap();
    file.flush().unwrap();
    file
}

#[test]
fn test_read_process_file() {
    let file = write_file("1 0 10\n2 3 5\n3 5 8\n");

    let processes = read_process_data(file.path()).unwrap();

    assert_eq!(
        processes,
        vec![
            Process::new(1, 0, 10),
            Process::new(2, 3, 5),
            Process::new(3, 5, 8),
        ]
    );
}

#[test]
fn test_read_file_without_trailing_newline() {
    let file = write_file("# header\n4 1 2\n5 2 7");

    let processes = read_process_data(file.path()).unwrap();

    assert_eq!(processes.len(), 2);
    assert_eq!(processes[1].burst_time(), 7);
}

#[test]
fn test_missing_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("absent.txt");

    let err = read_process_data(&path).unwrap_err();

    match err {
        LoadError::Io { path: reported, .. } => assert_eq!(reported, path),
        other => panic!("expected Io error, got {other:?}"),
    }
}

#[test]
fn test_malformed_line_reports_line_number() {
    let file = write_file("1 0 10\n2 3\n");

    let err = read_process_data(file.path()).unwrap_err();

    assert!(matches!(
        err,
        LoadError::MissingField {
            line: 2,
            field: "burst_time"
        }
    ));
    assert_eq!(err.to_string(), "Line 2: missing burst_time");
}
