use std::path::PathBuf;

use clap::Parser;
use eyre::Result;
use fibbench_viz::{render_report_html, Report, ReportSummary, Tab, ViewState};

use crate::{
    config::FibBenchConfig,
    util::{write_output, write_status, GREEN, YELLOW},
};

#[derive(Parser)]
#[command(name = "report", about = "Render the datasets as an HTML report")]
pub struct ReportCmd {
    #[arg(long, help = "Directory holding the CSV files [default: ./data]")]
    data_dir: Option<PathBuf>,

    #[arg(long, help = "Output HTML file [default: ./report.html]")]
    output: Option<PathBuf>,

    #[arg(long, default_value = "complexity", help = "Tab shown expanded: complexity, binet or golden")]
    tab: Tab,

    #[arg(long, help = "Also write a Markdown summary to this file")]
    summary: Option<PathBuf>,
}

impl ReportCmd {
    pub async fn run(&self, config: &FibBenchConfig) -> Result<()> {
        let data_dir = self.data_dir.as_ref().unwrap_or(&config.report.data_dir);
        let output = self.output.as_ref().unwrap_or(&config.report.output);

        let report = Report::load(data_dir).await;
        let html = render_report_html(&report, &ViewState::new(self.tab));
        write_output(output, html)?;

        let summary = ReportSummary::new(&report);
        for row in summary.rows.iter().filter(|row| !row.loaded) {
            write_status(&YELLOW, "Missing", &row.file);
        }
        summary.write_markdown(&mut std::io::stdout().lock())?;
        if let Some(path) = &self.summary {
            let mut markdown = Vec::new();
            summary.write_markdown(&mut markdown)?;
            write_output(path, markdown)?;
        }

        write_status(&GREEN, "Rendered", &output.display().to_string());
        Ok(())
    }
}
