//! Table presentation layer.
//!
//! A table is a sequence of [`Column`] descriptors over a row type: a field
//! key, a display label, a typed accessor, and a [`CellFormat`] tag that one
//! generic renderer interprets. Rendering a cell is a pure function of a
//! single row's field value.

pub mod columns;

use std::cmp::Ordering;

/// A typed cell value extracted from one row.
#[derive(Debug, Clone, PartialEq)]
pub enum CellValue {
    Number(f64),
    Int(i64),
    Text(String),
}

impl CellValue {
    pub fn as_number(&self) -> Option<f64> {
        match self {
            CellValue::Number(v) => Some(*v),
            CellValue::Int(v) => Some(*v as f64),
            CellValue::Text(_) => None,
        }
    }

    pub fn as_text(&self) -> String {
        match self {
            CellValue::Number(v) => {
                if v.fract() == 0.0 {
                    format!("{}", *v as i64)
                } else {
                    format!("{v}")
                }
            }
            CellValue::Int(v) => v.to_string(),
            CellValue::Text(s) => s.clone(),
        }
    }

    /// Numeric values compare numerically, everything else textually.
    pub fn compare(&self, other: &CellValue) -> Ordering {
        match (self.as_number(), other.as_number()) {
            (Some(a), Some(b)) => a.total_cmp(&b),
            _ => self.as_text().cmp(&other.as_text()),
        }
    }
}

/// Formatter kind, interpreted by [`render_cell`]. One tagged variant per
/// formatting behavior instead of one ad hoc function per column.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum CellFormat {
    /// Raw value, no unit.
    Plain,
    /// Fixed decimal precision with a unit suffix, e.g. 1 decimal + "°C".
    FixedDecimal {
        precision: usize,
        suffix: &'static str,
    },
    /// Signed whole minutes: "+12 min" / "-3 min".
    SignedMinutes,
    /// USD with thousands grouping and no fraction digits.
    Currency,
    /// Whole-number percentage.
    Percentage,
    /// Yes/No indicator (accessor already normalizes the dual form).
    Indicator,
    /// Derived classification label (e.g. flight status).
    Badge,
}

/// One column of a dataset table.
pub struct Column<R> {
    /// Field key; for derived columns this is a synthetic key like "status".
    pub key: &'static str,
    pub label: &'static str,
    /// Whether the header participates in the three-state sort cycle.
    pub sortable: bool,
    pub format: CellFormat,
    accessor: fn(&R) -> CellValue,
}

impl<R> Column<R> {
    pub fn new(
        key: &'static str,
        label: &'static str,
        sortable: bool,
        format: CellFormat,
        accessor: fn(&R) -> CellValue,
    ) -> Self {
        Self {
            key,
            label,
            sortable,
            format,
            accessor,
        }
    }

    pub fn value(&self, row: &R) -> CellValue {
        (self.accessor)(row)
    }

    pub fn render(&self, row: &R) -> String {
        render_cell(self.format, &self.value(row))
    }
}

/// Group an integer's digits with commas: 1234567 -> "1,234,567".
fn group_thousands(value: i64) -> String {
    let digits = value.unsigned_abs().to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    if value < 0 {
        format!("-{grouped}")
    } else {
        grouped
    }
}

/// Render one cell value under a format tag.
pub fn render_cell(format: CellFormat, value: &CellValue) -> String {
    match format {
        CellFormat::Plain | CellFormat::Indicator | CellFormat::Badge => value.as_text(),
        CellFormat::FixedDecimal { precision, suffix } => match value.as_number() {
            Some(v) => format!("{v:.precision$}{suffix}"),
            None => value.as_text(),
        },
        CellFormat::SignedMinutes => match value.as_number() {
            Some(v) if v > 0.0 => format!("+{v:.0} min"),
            Some(v) => format!("{v:.0} min"),
            None => value.as_text(),
        },
        CellFormat::Currency => match value.as_number() {
            Some(v) => format!("${}", group_thousands(v.round() as i64)),
            None => value.as_text(),
        },
        CellFormat::Percentage => match value.as_number() {
            Some(v) => format!("{v:.0}%"),
            None => value.as_text(),
        },
    }
}

/// Header sort state. Toggles through none -> ascending -> descending.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortDirection {
    #[default]
    None,
    Ascending,
    Descending,
}

impl SortDirection {
    pub fn toggle(self) -> SortDirection {
        match self {
            SortDirection::None => SortDirection::Ascending,
            SortDirection::Ascending => SortDirection::Descending,
            SortDirection::Descending => SortDirection::None,
        }
    }
}

/// Sort rows in place by a column. `SortDirection::None` restores nothing:
/// the caller keeps API response order by not sorting at all.
pub fn sort_rows<R>(rows: &mut [R], column: &Column<R>, direction: SortDirection) {
    match direction {
        SortDirection::None => {}
        SortDirection::Ascending => {
            rows.sort_by(|a, b| column.value(a).compare(&column.value(b)));
        }
        SortDirection::Descending => {
            rows.sort_by(|a, b| column.value(b).compare(&column.value(a)));
        }
    }
}

/// Case-insensitive substring filter over one column, applied client-side
/// to the loaded row set.
pub fn filter_rows<R: Clone>(rows: &[R], column: &Column<R>, query: &str) -> Vec<R> {
    let needle = query.to_lowercase();
    rows.iter()
        .filter(|row| column.value(row).as_text().to_lowercase().contains(&needle))
        .cloned()
        .collect()
}

/// Find a column by its field key.
pub fn find_column<'a, R>(columns: &'a [Column<R>], key: &str) -> Option<&'a Column<R>> {
    columns.iter().find(|c| c.key == key)
}
