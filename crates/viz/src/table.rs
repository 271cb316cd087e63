//! Header-first comma-separated text, without quoting support.
//!
//! A field can never contain a comma: every comma separates two fields.

use csv::{ReaderBuilder, Trim};
use tracing::warn;

/// One data line, as `(column, value)` pairs in header order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CsvRow(pub Vec<(String, String)>);

impl CsvRow {
    /// Value of `key`, or `None` when the line was too short to reach that column.
    ///
    /// With duplicate column names the rightmost column wins.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.0
            .iter()
            .rev()
            .find_map(|(k, v)| (k == key).then_some(v.as_str()))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CsvTable {
    pub headers: Vec<String>,
    pub rows: Vec<CsvRow>,
}

impl CsvTable {
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn last(&self) -> Option<&CsvRow> {
        self.rows.last()
    }

    /// Raw values of one column; rows missing the column are skipped.
    pub fn column<'a>(&'a self, key: &'a str) -> impl Iterator<Item = &'a str> + 'a {
        self.rows.iter().filter_map(move |row| row.get(key))
    }
}

/// Parses `text` whose first line names the columns.
///
/// Names and values are trimmed and paired by position. A data line shorter than
/// the header yields a row without the trailing keys; extra fields are ignored;
/// blank lines are skipped. Empty text gives an empty table.
pub fn parse_csv(text: &str) -> CsvTable {
    let mut reader = ReaderBuilder::new()
        .has_headers(true)
        .quoting(false)
        .flexible(true)
        .trim(Trim::All)
        .from_reader(text.trim().as_bytes());

    let headers: Vec<String> = match reader.headers() {
        Ok(record) => record.iter().map(str::to_string).collect(),
        Err(err) => {
            warn!("unreadable csv header: {err}");
            return CsvTable::default();
        }
    };

    let rows = reader
        .records()
        .filter_map(|record| match record {
            Ok(record) => Some(record),
            Err(err) => {
                warn!("skipping unreadable csv line: {err}");
                None
            }
        })
        .filter(|record| record.iter().any(|field| !field.is_empty()))
        .map(|record| {
            CsvRow(
                headers
                    .iter()
                    .zip(record.iter())
                    .map(|(name, value)| (name.clone(), value.to_string()))
                    .collect(),
            )
        })
        .collect();

    CsvTable { headers, rows }
}
