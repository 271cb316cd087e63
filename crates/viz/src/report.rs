//! The three-panel report over the generated datasets.

use std::path::{Path, PathBuf};

use fibbench_core::{
    closed_form::PHI,
    dataset::{ACCURACY_FILE, COMPLEXITY_FILE, GOLDEN_RATIO_FILE},
};
use strum::{Display, EnumIter, EnumString, IntoEnumIterator};
use tracing::{debug, error};

use crate::{
    chart::{escape_xml, LineChart, Series},
    error::ReportError,
    metrics::{
        boundary_convergence_error, column_values, exact_value_count, ITERATIVE_NS_COLUMN,
        MATRIX_NS_COLUMN, N_COLUMN, RATIO_COLUMN, REL_ERROR_COLUMN,
    },
    table::{parse_csv, CsvTable},
};

pub const PLACEHOLDER: &str = "Data file not found. Run `fibbench generate` first.";
pub const PLOTLY_JS_URL: &str = "https://cdn.plot.ly/plotly-2.12.1.min.js";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Display, EnumString, EnumIter)]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum Tab {
    #[default]
    Complexity,
    Binet,
    Golden,
}

impl Tab {
    pub fn file_name(&self) -> &'static str {
        match self {
            Tab::Complexity => COMPLEXITY_FILE,
            Tab::Binet => ACCURACY_FILE,
            Tab::Golden => GOLDEN_RATIO_FILE,
        }
    }

    /// Id of the `<div>` the panel's chart is drawn into.
    pub fn chart_id(&self) -> String {
        format!("{self}-chart")
    }

    pub fn title(&self) -> &'static str {
        match self {
            Tab::Complexity => "Time Complexity",
            Tab::Binet => "Binet Accuracy",
            Tab::Golden => "Golden Ratio",
        }
    }
}

/// Which tab of the report is shown.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ViewState {
    pub active_tab: Tab,
}

impl ViewState {
    pub fn new(active_tab: Tab) -> Self {
        Self { active_tab }
    }

    pub fn select(&mut self, tab: Tab) {
        self.active_tab = tab;
    }
}

/// Each dataset keeps its own load outcome.
#[derive(Debug)]
pub struct Report {
    pub complexity: Result<CsvTable, ReportError>,
    pub binet: Result<CsvTable, ReportError>,
    pub golden: Result<CsvTable, ReportError>,
}

impl Report {
    /// Reads the three datasets from `dir` concurrently.
    pub async fn load(dir: impl AsRef<Path>) -> Self {
        let dir = dir.as_ref();
        let (complexity, binet, golden) = tokio::join!(
            load_table(dir.join(Tab::Complexity.file_name())),
            load_table(dir.join(Tab::Binet.file_name())),
            load_table(dir.join(Tab::Golden.file_name())),
        );
        Self {
            complexity,
            binet,
            golden,
        }
    }

    pub fn table(&self, tab: Tab) -> Result<&CsvTable, &ReportError> {
        match tab {
            Tab::Complexity => self.complexity.as_ref(),
            Tab::Binet => self.binet.as_ref(),
            Tab::Golden => self.golden.as_ref(),
        }
    }

    pub fn panel(&self, tab: Tab) -> Panel {
        match self.table(tab) {
            Ok(table) => Panel {
                tab,
                chart: Some(chart_for(tab, table).to_inline_html(&tab.chart_id())),
                summary: summary_for(tab, table),
            },
            Err(_) => Panel {
                tab,
                chart: None,
                summary: PLACEHOLDER.to_string(),
            },
        }
    }

    pub fn panels(&self) -> Vec<Panel> {
        Tab::iter().map(|tab| self.panel(tab)).collect()
    }
}

async fn load_table(path: PathBuf) -> Result<CsvTable, ReportError> {
    match tokio::fs::read_to_string(&path).await {
        Ok(text) => {
            let table = parse_csv(&text);
            debug!(path = %path.display(), rows = table.len(), "loaded dataset");
            Ok(table)
        }
        Err(source) => {
            error!(path = %path.display(), %source, "failed to load dataset");
            Err(ReportError::Io { path, source })
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Panel {
    pub tab: Tab,
    /// Inline plotly `<div>` and script; `None` when the dataset could not be loaded.
    pub chart: Option<String>,
    pub summary: String,
}

impl Panel {
    pub fn is_loaded(&self) -> bool {
        self.chart.is_some()
    }
}

fn chart_for(tab: Tab, table: &CsvTable) -> LineChart {
    let rows = &table.rows;
    let x = column_values(rows, N_COLUMN);
    match tab {
        Tab::Complexity => LineChart::new("Execution Time vs Input Size")
            .axes("n", "Time (ns)")
            .x(x)
            .series(Series::new(
                "Iterative (ns)",
                column_values(rows, ITERATIVE_NS_COLUMN),
                "#f59e0b",
            ))
            .series(Series::new(
                "Matrix (ns)",
                column_values(rows, MATRIX_NS_COLUMN),
                "#10b981",
            )),
        Tab::Binet => LineChart::new("Binet Formula Relative Error")
            .axes("n", "Relative Error")
            .x(x)
            .series(Series::new(
                "Relative Error",
                column_values(rows, REL_ERROR_COLUMN),
                "#ef4444",
            ))
            .log_y(),
        Tab::Golden => LineChart::new("Convergence to Golden Ratio")
            .axes("n", "Ratio")
            .x(x)
            .series(Series::new(
                "F(n+1)/F(n)",
                column_values(rows, RATIO_COLUMN),
                "#6366f1",
            ))
            .series(Series::new("φ (Golden Ratio)", vec![PHI; rows.len()], "#10b981").dashed())
            .y_range(1.5, 2.0),
    }
}

fn summary_for(tab: Tab, table: &CsvTable) -> String {
    let first_n = table.rows.first().and_then(|row| row.get(N_COLUMN));
    let last_n = table.last().and_then(|row| row.get(N_COLUMN));
    match tab {
        Tab::Complexity => match (first_n, last_n) {
            (Some(first), Some(last)) => format!(
                "Data Points: {} measurements from n={} to n={}",
                table.len(),
                first,
                last
            ),
            _ => format!("Data Points: {} measurements", table.len()),
        },
        Tab::Binet => format!(
            "Accuracy: Binet formula is exact for {} values",
            exact_value_count(&table.rows)
        ),
        Tab::Golden => format!(
            "Convergence: Error from φ at n={}: {}",
            last_n.unwrap_or("?"),
            boundary_convergence_error(&table.rows).unwrap_or_else(|| "n/a".to_string())
        ),
    }
}

/// One HTML page holding every panel. Only the active tab starts expanded.
pub fn render_report_html(report: &Report, view: &ViewState) -> String {
    let mut sections = String::new();
    for panel in report.panels() {
        let active = panel.tab == view.active_tab;
        let summary = if panel.is_loaded() {
            format!("<p class=\"summary\">{}</p>", escape_xml(&panel.summary))
        } else {
            format!("<p class=\"summary\"><em>{}</em></p>", escape_xml(&panel.summary))
        };
        sections.push_str(&format!(
            "<details id=\"{id}\" class=\"tab-content{class}\"{open}>\n<summary>{title}</summary>\n{chart}\n{summary}\n</details>\n",
            id = panel.tab,
            class = if active { " active" } else { "" },
            open = if active { " open" } else { "" },
            title = panel.tab.title(),
            chart = panel.chart.as_deref().unwrap_or_default(),
        ));
    }

    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="utf-8">
<title>Fibonacci Benchmark Report</title>
<script src="{PLOTLY_JS_URL}"></script>
<style>
body {{ background: #0f172a; color: #f1f5f9; font-family: sans-serif; margin: 2rem; }}
details {{ margin-bottom: 1.5rem; }}
summary {{ cursor: pointer; font-size: 1.2rem; color: #94a3b8; }}
details.active > summary {{ color: #f1f5f9; }}
.summary {{ color: #cbd5e1; }}
</style>
</head>
<body>
<h1>Fibonacci Benchmark Report</h1>
{sections}</body>
</html>
"#
    )
}
