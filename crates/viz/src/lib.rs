//! Presentation side of fibbench: the report over the generated CSV datasets and
//! the interactive demo view.

pub mod chart;
pub mod demo;
pub mod error;
pub mod metrics;
pub mod report;
pub mod summary;
pub mod table;

pub use chart::{speedup_bar_chart, LineChart, Series, YScale};
pub use demo::{DemoAction, DemoView};
pub use error::ReportError;
pub use report::{render_report_html, Panel, Report, Tab, ViewState};
pub use summary::ReportSummary;
pub use table::{parse_csv, CsvRow, CsvTable};
