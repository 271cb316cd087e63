use num_format::{Locale, ToFormattedString};
use serde::{Deserialize, Serialize};

pub use fibbench_core::speedup_ratio;

use crate::table::CsvRow;

pub const N_COLUMN: &str = "n";
pub const ITERATIVE_NS_COLUMN: &str = "iterative_ns";
pub const MATRIX_NS_COLUMN: &str = "matrix_ns";
pub const REL_ERROR_COLUMN: &str = "rel_error";
pub const RATIO_COLUMN: &str = "ratio";
pub const ERROR_FROM_PHI_COLUMN: &str = "error_from_phi";

/// Number of rows whose `rel_error` parses to exactly zero.
pub fn exact_value_count(rows: &[CsvRow]) -> usize {
    rows.iter()
        .filter(|row| parse_field(row, REL_ERROR_COLUMN) == Some(0.0))
        .count()
}

/// The last row's `error_from_phi`, in scientific notation with 4 fractional digits.
pub fn boundary_convergence_error(rows: &[CsvRow]) -> Option<String> {
    let last = rows.last()?;
    parse_field(last, ERROR_FROM_PHI_COLUMN).map(|error| format_scientific(error, 4))
}

pub fn format_scientific(value: f64, digits: usize) -> String {
    format!("{:.*e}", digits, value)
}

/// Numeric projection of a column; missing or unparseable values become `0.0`.
pub fn column_values(rows: &[CsvRow], key: &str) -> Vec<f64> {
    rows.iter()
        .map(|row| parse_field(row, key).unwrap_or(0.0))
        .collect()
}

fn parse_field(row: &CsvRow, key: &str) -> Option<f64> {
    row.get(key)?.parse::<f64>().ok()
}

/// Thousands-separated integer part with up to two decimals.
pub fn format_number(value: f64) -> String {
    let cents = (value * 100.0).round() as i64;
    let sign = if cents < 0 { "-" } else { "" };
    let whole = (cents / 100).unsigned_abs();
    let decimal = (cents % 100).unsigned_abs();

    if decimal == 0 {
        format!("{sign}{}", whole.to_formatted_string(&Locale::en))
    } else {
        format!("{sign}{}.{:02}", whole.to_formatted_string(&Locale::en), decimal)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Stats {
    pub sum: f64,
    pub max: f64,
    pub min: f64,
    pub avg: f64,
    #[serde(skip)]
    pub count: usize,
}

impl Default for Stats {
    fn default() -> Self {
        Self::new()
    }
}

impl Stats {
    pub fn new() -> Self {
        Self {
            sum: 0.0,
            max: f64::MIN,
            min: f64::MAX,
            avg: 0.0,
            count: 0,
        }
    }

    pub fn push(&mut self, value: f64) {
        self.sum += value;
        self.count += 1;
        if value > self.max {
            self.max = value;
        }
        if value < self.min {
            self.min = value;
        }
    }

    pub fn finalize(&mut self) {
        if self.count != 0 {
            self.avg = self.sum / self.count as f64;
        }
    }

    /// `None` for an empty series.
    pub fn from_values(values: impl IntoIterator<Item = f64>) -> Option<Self> {
        let mut stats = Self::new();
        for value in values {
            stats.push(value);
        }
        if stats.count == 0 {
            return None;
        }
        stats.finalize();
        Some(stats)
    }
}
