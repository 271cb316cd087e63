use std::io::{self, BufRead, Write};

use clap::Parser;
use eyre::Result;
use fibbench_viz::{DemoAction, DemoView};

use super::bench::apply;
use crate::config::FibBenchConfig;

const HELP: &str = "Enter indices like `10, 50, 100` to calculate. \
Commands: `:bench [indices]`, `:clear`, `:quit`.";

#[derive(Parser)]
#[command(name = "demo", about = "Interactive calculator and batch benchmark")]
pub struct DemoCmd {}

/// One line of demo input.
#[derive(Debug, PartialEq, Eq)]
enum DemoInput {
    Action(DemoAction),
    Quit,
}

impl DemoCmd {
    pub fn run(&self, config: &FibBenchConfig) -> Result<()> {
        let stdin = io::stdin();
        let mut stdout = io::stdout();
        run_session(stdin.lock(), &mut stdout, config)
    }
}

fn run_session(input: impl BufRead, output: &mut impl Write, config: &FibBenchConfig) -> Result<()> {
    let mut view = DemoView::new(config.bench.iterations, config.display.truncate_digits);
    let mut last_input = String::new();

    writeln!(output, "{HELP}")?;
    write!(output, "> ")?;
    output.flush()?;
    for line in input.lines() {
        let line = line?;
        match parse_line(&line, &last_input) {
            Some(DemoInput::Quit) => break,
            Some(DemoInput::Action(action)) => {
                let text = match &action {
                    DemoAction::Calculate(text) | DemoAction::Benchmark(text) => Some(text.clone()),
                    DemoAction::Clear => None,
                };
                match apply(&mut view, action) {
                    Ok(()) => {
                        if let Some(text) = text {
                            last_input = text;
                        }
                        write!(output, "{}", view.render_text())?;
                    }
                    Err(e) => writeln!(output, "{e}")?,
                }
            }
            None => writeln!(output, "{HELP}")?,
        }
        write!(output, "> ")?;
        output.flush()?;
    }
    writeln!(output)?;
    Ok(())
}

fn parse_line(line: &str, last_input: &str) -> Option<DemoInput> {
    let line = line.trim();
    let Some(command) = line.strip_prefix(':') else {
        return Some(DemoInput::Action(DemoAction::Calculate(line.to_string())));
    };
    let (name, rest) = command
        .split_once(char::is_whitespace)
        .map_or((command, ""), |(name, rest)| (name, rest.trim()));
    match name {
        "bench" | "benchmark" => {
            let indices = if rest.is_empty() { last_input } else { rest };
            Some(DemoInput::Action(DemoAction::Benchmark(indices.to_string())))
        }
        "clear" => Some(DemoInput::Action(DemoAction::Clear)),
        "quit" | "q" | "exit" => Some(DemoInput::Quit),
        _ => None,
    }
}
