//! Command layer: load a JSON-encoded unit graph, run the pipeline and
//! deliver the report to a writer or an output file.

use anyhow::{Context, Result};
use serde::Serialize;
use std::fs;
use std::io::Write;
use std::path::Path;

use crate::halstead::{compute_units, count_units, HalsteadMetrics, OpCounts};
use crate::ir::Unit;
use crate::report::{render_counts_report, render_metrics_report};

/// Options for the Halstead report command.
#[derive(Debug, Default)]
pub struct ReportOptions {
    /// Output structured JSON instead of the textual report.
    pub json: bool,
    /// Also compute and render the derived metrics.
    pub metrics: bool,
    /// Skip the aggregate `Total` row.
    pub no_totals: bool,
    /// Write output to this file path instead of the writer.
    pub output_file: Option<String>,
}

#[derive(Serialize)]
struct UnitRecord {
    unit: String,
    total_operators: usize,
    unique_operators: usize,
    total_operands: usize,
    unique_operands: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    metrics: Option<HalsteadMetrics>,
}

/// Executes the Halstead report over a JSON-encoded unit graph.
///
/// Zero units is not an error: the command still delivers a well-formed
/// empty report (`No units found.`, or `[]` in JSON mode).
///
/// # Errors
///
/// Returns an error if the graph file cannot be read or decoded, if a
/// unit's counts violate a metric formula's domain (only with
/// `options.metrics`), or if writing the output fails.
pub fn run_report<W: Write>(path: &Path, options: ReportOptions, mut writer: W) -> Result<()> {
    let data = fs::read_to_string(path)
        .with_context(|| format!("failed to read unit graph {}", path.display()))?;
    let units: Vec<Unit> = serde_json::from_str(&data)
        .with_context(|| format!("failed to decode unit graph {}", path.display()))?;
    log::debug!("loaded {} unit(s) from {}", units.len(), path.display());

    if units.is_empty() {
        let body = if options.json {
            "[]".to_owned()
        } else {
            "No units found.".to_owned()
        };
        return write_output(&mut writer, &body, options.output_file);
    }

    let counted = count_units(&units);
    log::debug!("counted operators/operands for {} unit(s)", counted.len());

    if options.json {
        let records = unit_records(&counted, options.metrics)?;
        return write_output(
            &mut writer,
            &serde_json::to_string_pretty(&records)?,
            options.output_file,
        );
    }

    let mut txt = render_counts_report(&counted, !options.no_totals);
    if options.metrics {
        txt.push_str(&render_metrics_report(&counted)?);
    }
    // Rendered reports are newline-terminated; write_output adds the
    // final newline itself.
    txt.pop();
    write_output(&mut writer, &txt, options.output_file)
}

fn unit_records(counted: &[(String, OpCounts)], metrics: bool) -> Result<Vec<UnitRecord>> {
    let derived = if metrics {
        Some(compute_units(counted)?)
    } else {
        None
    };

    Ok(counted
        .iter()
        .enumerate()
        .map(|(i, (name, counts))| UnitRecord {
            unit: name.clone(),
            total_operators: counts.total_operators,
            unique_operators: counts.unique_operators,
            total_operands: counts.total_operands,
            unique_operands: counts.unique_operands,
            metrics: derived.as_ref().map(|d| d[i].1.clone()),
        })
        .collect())
}

fn write_output<W: Write>(
    writer: &mut W,
    content: &str,
    output_file: Option<String>,
) -> Result<()> {
    if let Some(path) = output_file {
        let mut file = fs::File::create(path)?;
        writeln!(file, "{content}")?;
    } else {
        writeln!(writer, "{content}")?;
    }
    Ok(())
}
