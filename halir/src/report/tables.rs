use comfy_table::presets::UTF8_FULL;
use comfy_table::{ContentArrangement, Table};

use crate::halstead::{HalsteadMetrics, OpCounts};

fn create_table(headers: Vec<&str>) -> Table {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_header(headers);

    if cfg!(test) {
        table.set_width(120);
    }
    table
}

/// Builds the raw-counts table, one row per unit in input order.
///
/// With `totals` set, appends a final `Total` row holding the
/// column-wise sum over all units.
pub fn counts_table(body: &[(String, OpCounts)], totals: bool) -> Table {
    let mut table = create_table(vec![
        "Unit",
        "total_operators",
        "unique_operators",
        "total_operands",
        "unique_operands",
    ]);

    for (name, counts) in body {
        table.add_row(vec![
            name.clone(),
            counts.total_operators.to_string(),
            counts.unique_operators.to_string(),
            counts.total_operands.to_string(),
            counts.unique_operands.to_string(),
        ]);
    }

    if totals {
        let sum = body.iter().fold(OpCounts::default(), |acc, (_, c)| OpCounts {
            total_operators: acc.total_operators + c.total_operators,
            unique_operators: acc.unique_operators + c.unique_operators,
            total_operands: acc.total_operands + c.total_operands,
            unique_operands: acc.unique_operands + c.unique_operands,
        });
        table.add_row(vec![
            "Total".to_owned(),
            sum.total_operators.to_string(),
            sum.unique_operators.to_string(),
            sum.total_operands.to_string(),
            sum.unique_operands.to_string(),
        ]);
    }
    table
}

/// Builds the derived-metrics table, one row per unit in input order.
pub fn metrics_table(body: &[(String, HalsteadMetrics)]) -> Table {
    let mut table = create_table(vec![
        "Unit", "n1", "n2", "N1", "N2", "n", "N", "V", "D", "E", "T", "B",
    ]);

    for (name, m) in body {
        table.add_row(vec![
            name.clone(),
            m.n1.to_string(),
            m.n2.to_string(),
            m.total_operators.to_string(),
            m.total_operands.to_string(),
            m.vocabulary.to_string(),
            m.length.to_string(),
            format!("{:.2}", m.volume),
            format!("{:.2}", m.difficulty),
            format!("{:.2}", m.effort),
            format!("{:.2}", m.time),
            format!("{:.4}", m.bugs),
        ]);
    }
    table
}
