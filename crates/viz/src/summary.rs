use std::io::Write;

use eyre::Result;
use serde::Serialize;
use strum::IntoEnumIterator;

use crate::{
    metrics::{column_values, format_number, Stats, ITERATIVE_NS_COLUMN, MATRIX_NS_COLUMN},
    report::{Report, Tab},
};

/// Load status of every report panel, for terminals and CI logs.
#[derive(Clone, Debug, Serialize)]
pub struct ReportSummary {
    pub rows: Vec<SummaryRow>,
}

#[derive(Clone, Debug, Serialize)]
pub struct SummaryRow {
    pub tab: String,
    pub file: String,
    pub loaded: bool,
    pub data_points: usize,
    pub summary: String,
    /// Mean iterative and matrix timings; complexity panel only.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mean_ns: Option<(f64, f64)>,
}

impl ReportSummary {
    pub fn new(report: &Report) -> Self {
        let rows = Tab::iter()
            .map(|tab| {
                let panel = report.panel(tab);
                let table = report.table(tab).ok();
                let mean_ns = table.filter(|_| tab == Tab::Complexity).and_then(|table| {
                    let iterative = Stats::from_values(column_values(&table.rows, ITERATIVE_NS_COLUMN))?;
                    let matrix = Stats::from_values(column_values(&table.rows, MATRIX_NS_COLUMN))?;
                    Some((iterative.avg, matrix.avg))
                });
                SummaryRow {
                    tab: tab.title().to_string(),
                    file: tab.file_name().to_string(),
                    loaded: panel.is_loaded(),
                    data_points: table.map_or(0, |table| table.len()),
                    summary: panel.summary,
                    mean_ns,
                }
            })
            .collect();
        Self { rows }
    }

    pub fn write_markdown(&self, writer: &mut impl Write) -> Result<()> {
        writeln!(writer, "| panel | file | status | data points | summary |")?;
        writeln!(writer, "| -- | -- | -- | --: | -- |")?;
        for row in &self.rows {
            writeln!(
                writer,
                "| {} | `{}` | {} | {} | {} |",
                row.tab,
                row.file,
                if row.loaded { "loaded" } else { "missing" },
                row.data_points,
                row.summary.replace('|', "\\|"),
            )?;
        }

        if let Some((iterative, matrix)) = self.rows.iter().find_map(|row| row.mean_ns) {
            writeln!(writer)?;
            writeln!(
                writer,
                "Mean time: iterative {} ns, matrix {} ns",
                format_number(iterative),
                format_number(matrix)
            )?;
        }
        Ok(())
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

#[cfg(test)]
mod tests {
    use std::fs;

    use fibbench_core::dataset::{ACCURACY_FILE, COMPLEXITY_FILE};
    use tempfile::tempdir;

    use super::*;

    #[tokio::test]
    async fn test_summary_markdown() {
        let dir = tempdir().unwrap();
        fs::write(
            dir.path().join(COMPLEXITY_FILE),
            "n,iterative_ns,matrix_ns\n10,1000,3000\n20,2000,3000\n",
        )
        .unwrap();
        fs::write(dir.path().join(ACCURACY_FILE), "n,rel_error\n0,0\n1,0\n").unwrap();
        let report = Report::load(dir.path()).await;

        let summary = ReportSummary::new(&report);
        assert_eq!(summary.rows.len(), 3);
        assert!(summary.rows[0].loaded);
        assert_eq!(summary.rows[0].mean_ns, Some((1500.0, 3000.0)));
        assert!(!summary.rows[2].loaded);

        let mut out = Vec::new();
        summary.write_markdown(&mut out).unwrap();
        let md = String::from_utf8(out).unwrap();
        assert!(md.starts_with("| panel | file | status | data points | summary |\n"));
        assert!(md.contains(
            "| Binet Accuracy | `binet_accuracy.csv` | loaded | 2 | Accuracy: Binet formula is exact for 2 values |"
        ));
        assert!(md.contains("| Golden Ratio | `golden_ratio_convergence.csv` | missing | 0 |"));
        assert!(md.contains("Mean time: iterative 1,500 ns, matrix 3,000 ns"));

        let json: serde_json::Value = serde_json::from_str(&summary.to_json().unwrap()).unwrap();
        assert_eq!(json["rows"][1]["data_points"], 2);
        assert!(json["rows"][2].get("mean_ns").is_none());
    }
}
