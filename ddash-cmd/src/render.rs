//! Plain-text rendering of tables and overview aggregates.

use ddash_data::Aggregate;
use ddash_table::Column;

/// Placeholder shown for aggregates over an empty row set.
pub const NO_DATA: &str = "–";

/// Format an aggregate, or the no-data placeholder.
pub fn fmt_aggregate(aggregate: Aggregate, fmt: impl Fn(f64) -> String) -> String {
    match aggregate.value() {
        Some(v) => fmt(v),
        None => NO_DATA.to_string(),
    }
}

/// Render rows as an aligned text table using the dataset's columns.
pub fn render_table<R>(rows: &[R], columns: &[Column<R>]) -> String {
    let mut cells: Vec<Vec<String>> = Vec::with_capacity(rows.len() + 1);
    cells.push(columns.iter().map(|c| c.label.to_string()).collect());
    for row in rows {
        cells.push(columns.iter().map(|c| c.render(row)).collect());
    }

    let widths: Vec<usize> = (0..columns.len())
        .map(|i| {
            cells
                .iter()
                .map(|r| r[i].chars().count())
                .max()
                .unwrap_or(0)
        })
        .collect();

    let mut out = String::new();
    for (row_index, row) in cells.iter().enumerate() {
        let line: Vec<String> = row
            .iter()
            .zip(&widths)
            .map(|(cell, width)| format!("{cell:<width$}"))
            .collect();
        out.push_str(line.join("  ").trim_end());
        out.push('\n');
        if row_index == 0 {
            let rule: Vec<String> = widths.iter().map(|w| "-".repeat(*w)).collect();
            out.push_str(&rule.join("  "));
            out.push('\n');
        }
    }
    out
}
