//! Textual report assembly: descriptive prose lines followed by the
//! rendered table. The raw-counts report is the delivered surface; the
//! derived-metrics report is available on explicit request.

mod tables;

pub use tables::{counts_table, metrics_table};

use crate::halstead::{compute_units, HalsteadMetrics, MetricsError, OpCounts};

/// Report body emitted when the input graph holds no units.
pub const NO_UNITS_MESSAGE: &str = "No units found.";

/// Renders the raw-counts report: headline, one definition line per
/// column, then the counts table (with an aggregate `Total` row when
/// `totals` is set).
///
/// Zero units yield the informative empty report and no table.
pub fn render_counts_report(counted: &[(String, OpCounts)], totals: bool) -> String {
    if counted.is_empty() {
        return format!("{NO_UNITS_MESSAGE}\n");
    }

    let mut txt = String::from("Halstead complexity metrics:\n");
    txt.push_str("  total_operators: the total number of operators\n");
    txt.push_str("  unique_operators: the number of distinct operators\n");
    txt.push_str("  total_operands: the total number of operands\n");
    txt.push_str("  unique_operands: the number of distinct operands\n");
    txt.push_str(&counts_table(counted, totals).to_string());
    txt.push('\n');
    txt
}

/// Renders the derived-metrics report for already-counted units.
///
/// No `Total` row here: summing ratio metrics column-wise is not
/// meaningful.
///
/// # Errors
///
/// Propagates the first domain violation, naming the offending unit.
pub fn render_metrics_report(counted: &[(String, OpCounts)]) -> Result<String, MetricsError> {
    if counted.is_empty() {
        return Ok(format!("{NO_UNITS_MESSAGE}\n"));
    }

    let derived = compute_units(counted)?;
    Ok(render_metrics_text(&derived))
}

fn render_metrics_text(derived: &[(String, HalsteadMetrics)]) -> String {
    let mut txt = String::from("Halstead derived metrics:\n");
    txt.push_str("  n1: the number of distinct operators\n");
    txt.push_str("  n2: the number of distinct operands\n");
    txt.push_str("  N1: the total number of operators\n");
    txt.push_str("  N2: the total number of operands\n");
    txt.push_str("  n: the vocabulary, n1 + n2\n");
    txt.push_str("  N: the program length, N1 + N2\n");
    txt.push_str("  V: the volume, N * log2(n)\n");
    txt.push_str("  D: the difficulty, (n1 / 2) * (N2 / n2)\n");
    txt.push_str("  E: the effort, D * V\n");
    txt.push_str("  T: the estimated implementation time, E / 18\n");
    txt.push_str("  B: the estimated number of delivered bugs, T / 3000\n");
    txt.push_str(&metrics_table(derived).to_string());
    txt.push('\n');
    txt
}
