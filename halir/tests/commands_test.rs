//! End-to-end command tests over JSON-encoded unit graphs.

#![allow(clippy::unwrap_used)]

use std::io::Write;

use halir::commands::{run_report, ReportOptions};
use halir::ir::{Function, Node, Operand, Operation, Operator, Unit, Variable};
use tempfile::NamedTempFile;

fn var(id: u64, name: &str) -> Operand {
    Operand::Variable(Variable {
        id,
        name: name.to_owned(),
    })
}

fn sample_graph() -> Vec<Unit> {
    vec![Unit {
        name: "Token".to_owned(),
        functions: vec![Function {
            name: "transfer".to_owned(),
            nodes: vec![Node {
                operations: vec![
                    Operation::new(Operator::Addition, vec![var(1, "a"), var(2, "b")]),
                    Operation::new(Operator::Addition, vec![Operand::Temporary(0)]),
                    Operation::new(Operator::Subtraction, vec![var(1, "a")]),
                ],
            }],
        }],
    }]
}

fn graph_file(units: &[Unit]) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    write!(file, "{}", serde_json::to_string(units).unwrap()).unwrap();
    file
}

#[test]
fn test_run_report_renders_counts_table() {
    let file = graph_file(&sample_graph());
    let mut out = Vec::new();

    run_report(file.path(), ReportOptions::default(), &mut out).unwrap();

    let text = String::from_utf8(out).unwrap();
    assert!(text.starts_with("Halstead complexity metrics:\n"));
    assert!(text.contains("Token"));
    assert!(text.contains("Total"), "aggregate row is on by default");
}

#[test]
fn test_run_report_without_totals() {
    let file = graph_file(&sample_graph());
    let mut out = Vec::new();

    let options = ReportOptions {
        no_totals: true,
        ..ReportOptions::default()
    };
    run_report(file.path(), options, &mut out).unwrap();

    let text = String::from_utf8(out).unwrap();
    assert!(!text.contains("Total"));
}

#[test]
fn test_run_report_json_mode_emits_count_records() {
    let file = graph_file(&sample_graph());
    let mut out = Vec::new();

    let options = ReportOptions {
        json: true,
        ..ReportOptions::default()
    };
    run_report(file.path(), options, &mut out).unwrap();

    let records: serde_json::Value = serde_json::from_slice(&out).unwrap();
    assert_eq!(records[0]["unit"], "Token");
    assert_eq!(records[0]["total_operators"], 3);
    assert_eq!(records[0]["unique_operators"], 2);
    assert_eq!(records[0]["total_operands"], 3);
    assert_eq!(records[0]["unique_operands"], 2);
    assert!(records[0].get("metrics").is_none());
}

#[test]
fn test_run_report_json_mode_attaches_metrics_on_request() {
    let file = graph_file(&sample_graph());
    let mut out = Vec::new();

    let options = ReportOptions {
        json: true,
        metrics: true,
        ..ReportOptions::default()
    };
    run_report(file.path(), options, &mut out).unwrap();

    let records: serde_json::Value = serde_json::from_slice(&out).unwrap();
    let metrics = &records[0]["metrics"];
    assert_eq!(metrics["n1"], 2);
    assert_eq!(metrics["N1"], 3);
    assert_eq!(metrics["volume"], 12.0);
    assert_eq!(metrics["difficulty"], 1.5);
}

#[test]
fn test_run_report_metrics_flag_appends_derived_table() {
    let file = graph_file(&sample_graph());
    let mut out = Vec::new();

    let options = ReportOptions {
        metrics: true,
        ..ReportOptions::default()
    };
    run_report(file.path(), options, &mut out).unwrap();

    let text = String::from_utf8(out).unwrap();
    let counts_at = text.find("Halstead complexity metrics:").unwrap();
    let derived_at = text.find("Halstead derived metrics:").unwrap();
    assert!(counts_at < derived_at);
}

#[test]
fn test_run_report_surfaces_domain_errors_with_unit_context() {
    // Every operand is a temporary, so the unit has operators but no
    // distinct operands.
    let units = vec![Unit {
        name: "OnlyOps".to_owned(),
        functions: vec![Function {
            name: "f".to_owned(),
            nodes: vec![Node {
                operations: vec![Operation::new(
                    Operator::Call,
                    vec![Operand::Temporary(0)],
                )],
            }],
        }],
    }];
    let file = graph_file(&units);
    let mut out = Vec::new();

    let options = ReportOptions {
        metrics: true,
        ..ReportOptions::default()
    };
    let err = run_report(file.path(), options, &mut out).unwrap_err();
    assert!(err.to_string().contains("OnlyOps"));
}

#[test]
fn test_run_report_on_zero_units_is_not_an_error() {
    let file = graph_file(&[]);
    let mut out = Vec::new();

    run_report(file.path(), ReportOptions::default(), &mut out).unwrap();
    assert_eq!(String::from_utf8(out).unwrap(), "No units found.\n");
}

#[test]
fn test_run_report_on_zero_units_in_json_mode() {
    let file = graph_file(&[]);
    let mut out = Vec::new();

    let options = ReportOptions {
        json: true,
        ..ReportOptions::default()
    };
    run_report(file.path(), options, &mut out).unwrap();
    assert_eq!(String::from_utf8(out).unwrap(), "[]\n");
}

#[test]
fn test_run_report_writes_to_output_file() {
    let file = graph_file(&sample_graph());
    let target = NamedTempFile::new().unwrap();
    let mut out = Vec::new();

    let options = ReportOptions {
        output_file: Some(target.path().to_string_lossy().to_string()),
        ..ReportOptions::default()
    };
    run_report(file.path(), options, &mut out).unwrap();

    assert!(out.is_empty(), "nothing goes to the writer with -O");
    let written = std::fs::read_to_string(target.path()).unwrap();
    assert!(written.contains("Token"));
}

#[test]
fn test_run_report_rejects_a_malformed_graph_file() {
    let mut file = NamedTempFile::new().unwrap();
    write!(file, "not json").unwrap();
    let mut out = Vec::new();

    let err = run_report(file.path(), ReportOptions::default(), &mut out).unwrap_err();
    assert!(err.to_string().contains("failed to decode"));
}

#[test]
fn test_unit_graph_wire_format() {
    // Pin the JSON encoding an external front-end has to produce.
    let raw = r#"[{
        "name": "Token",
        "functions": [{
            "name": "transfer",
            "nodes": [{
                "operations": [{
                    "operator": "addition",
                    "used": [
                        {"variable": {"id": 1, "name": "a"}},
                        {"temporary": 0}
                    ]
                }]
            }]
        }]
    }]"#;

    let units: Vec<Unit> = serde_json::from_str(raw).unwrap();
    assert_eq!(units[0].name, "Token");
    let operation = &units[0].functions[0].nodes[0].operations[0];
    assert_eq!(operation.operator, Operator::Addition);
    assert_eq!(operation.used.len(), 2);
    assert_eq!(
        operation.used[0].as_variable().map(|v| v.id),
        Some(1),
        "variable operands decode with their identity key"
    );
    assert!(operation.used[1].as_variable().is_none());
}
