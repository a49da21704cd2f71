//! Halstead complexity pipeline: operator/operand extraction and the
//! classical derived-metric formulas.

mod counts;
mod metrics;

use rayon::prelude::*;

use crate::ir::Unit;

pub use counts::OpCounts;
pub use metrics::{HalsteadMetrics, MetricsError};

/// Extracts operator/operand counts for every unit, in unit order.
///
/// Per-unit extraction is independent and runs in parallel; `collect`
/// restores the input order, which is the ordering contract of the
/// report.
pub fn count_units(units: &[Unit]) -> Vec<(String, OpCounts)> {
    units
        .par_iter()
        .map(|unit| (unit.name.clone(), counts::count_unit(unit)))
        .collect()
}

/// Derives the full Halstead metric suite for every counted unit.
///
/// # Errors
///
/// Fails on the first unit whose counts put the formulas outside their
/// domain (empty vocabulary, or no distinct operands). The error names
/// the unit and the offending counts.
pub fn compute_units(
    counted: &[(String, OpCounts)],
) -> Result<Vec<(String, HalsteadMetrics)>, MetricsError> {
    counted
        .iter()
        .map(|(name, counts)| {
            HalsteadMetrics::from_counts(name, counts).map(|metrics| (name.clone(), metrics))
        })
        .collect()
}
