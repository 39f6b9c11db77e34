/*!
 * Loader and Output Tests
 * File-based input parsing and trace file writing
 */

use pretty_assertions::assert_eq;
use sched_sim::process::{load_file, parse};
use sched_sim::trace::{output_path, write_json_report, write_output};
use sched_sim::{
    ConfigError, InputError, ProcessDescriptor, Scheduler, SchedulingPolicy, SimError,
};
use std::fs;
use tempfile::TempDir;

#[test]
fn test_load_file() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("input.txt");
    fs::write(&path, "3\n0 4 0 0\n\n1 5 2 1\n2 3 1 2\n").unwrap();

    let descriptors = load_file(&path).unwrap();
    assert_eq!(
        descriptors,
        vec![
            ProcessDescriptor::new(0, 4, 0, 0),
            ProcessDescriptor::new(1, 5, 2, 1),
            ProcessDescriptor::new(2, 3, 1, 2),
        ]
    );
}

#[test]
fn test_missing_file_is_config_error() {
    let dir = TempDir::new().unwrap();
    let err = load_file(dir.path().join("absent.txt")).unwrap_err();
    assert!(matches!(
        err,
        SimError::Config(ConfigError::UnreadableInput { .. })
    ));
}

#[test]
fn test_malformed_input_is_rejected() {
    assert_eq!(parse("").unwrap_err(), InputError::MissingCount);
    assert_eq!(
        parse("2\n1 2 3 4\n").unwrap_err(),
        InputError::TooFewRecords {
            expected: 2,
            found: 1
        }
    );
    assert_eq!(
        parse("1\n1 2 3 4\n2 2 3 4\n").unwrap_err(),
        InputError::TooManyRecords {
            expected: 1,
            line: 3
        }
    );
    assert_eq!(
        parse("1\n1 2 -3 4\n").unwrap_err(),
        InputError::InvalidField {
            line: 2,
            field: "I/O burst".to_string(),
            value: "-3".to_string()
        }
    );
}

#[test]
fn test_output_written_next_to_input() {
    let dir = TempDir::new().unwrap();
    let input = dir.path().join("workload.txt");
    fs::write(&input, "2\n1 4 0 0\n2 4 0 0\n").unwrap();

    let descriptors = load_file(&input).unwrap();
    let output = Scheduler::new(SchedulingPolicy::RoundRobin, &descriptors)
        .unwrap()
        .run()
        .unwrap();

    let out_path = output_path(SchedulingPolicy::RoundRobin, &input);
    assert_eq!(out_path, dir.path().join("1-workload.txt"));

    write_output(&output, &out_path).unwrap();
    let written = fs::read_to_string(&out_path).unwrap();
    assert_eq!(written, output.render());
    assert!(written.starts_with("0 1:running 2:ready\n"));
    assert!(written.ends_with("Turnaround process 1: 6\nTurnaround process 2: 8\n"));

    let json_path = dir.path().join("1-workload.txt.json");
    write_json_report(&output.report, &json_path).unwrap();
    let json: serde_json::Value =
        serde_json::from_str(&fs::read_to_string(&json_path).unwrap()).unwrap();
    assert_eq!(json["policy"], "round_robin");
    assert_eq!(json["quantum"], 2);
}
