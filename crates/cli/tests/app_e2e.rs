use std::{
    fs::{self, read_to_string},
    path::Path,
    process::{Command, Output},
};

use eyre::Result;
use tempfile::tempdir;

const SMALL_CONFIG: &str = r#"
[bench]
iterations = 2

[generate]
complexity_max_n = 100
complexity_step = 20
complexity_iterations = 2
accuracy_max_n = 90
golden_max_n = 40
"#;

#[test]
fn test_calc() -> Result<()> {
    let output = run_fibbench(&["calc", "--n", "10"])?;
    assert!(output.status.success());
    assert_eq!(stdout(&output).trim(), "F(10) = 55");

    let output = run_fibbench(&["calc", "--n", "100", "--method", "doubling", "--time"])?;
    assert!(output.status.success());
    assert!(stdout(&output).contains("F(100) = 354224848179261915075"));
    assert!(stdout(&output).contains("Computed"));
    Ok(())
}

#[test]
fn test_calc_binet_overflow_fails() -> Result<()> {
    let output = run_fibbench(&["calc", "--n", "5000", "--method", "binet"])?;
    assert!(!output.status.success());
    Ok(())
}

#[test]
fn test_calc_modulo() -> Result<()> {
    let output = run_fibbench(&["calc", "--n", "1000000000000", "--modulo", "10"])?;
    assert!(output.status.success());
    assert_eq!(stdout(&output).trim(), "F(1000000000000) mod 10 = 5");

    let output = run_fibbench(&["calc", "--n", "10", "--modulo", "0"])?;
    assert!(!output.status.success());
    Ok(())
}

#[test]
fn test_compare_skips_naive_recursion() -> Result<()> {
    let output = run_fibbench(&["compare", "--n", "40", "--max-recursive", "25"])?;
    assert!(output.status.success());
    let out = stdout(&output);
    assert!(out.contains("| recursive | O(2^n) | skipped (n > 25) | N/A | N/A |"));
    assert!(out.contains("| iterative_branchless | O(n) | 102334155 |"));

    let output = run_fibbench(&["compare", "--n", "12"])?;
    assert!(stdout(&output).contains("| recursive | O(2^n) | 144 |"));
    Ok(())
}

#[test]
fn test_generate_rejects_overflowing_accuracy_range() -> Result<()> {
    let temp_dir = tempdir()?;
    let config = temp_dir.path().join("fibbench.toml");
    fs::write(&config, "[generate]\naccuracy_max_n = 1500\n")?;
    let data_dir = temp_dir.path().join("data");

    let output = run_fibbench(&[
        "--config",
        path_str(&config),
        "generate",
        "--output-dir",
        path_str(&data_dir),
    ])?;
    assert!(!output.status.success());
    assert!(!data_dir.exists());
    Ok(())
}

#[test]
fn test_unknown_subcommand_fails() -> Result<()> {
    let output = run_fibbench(&["frobnicate"])?;
    assert!(!output.status.success());
    Ok(())
}

#[test]
fn test_sequence_and_info() -> Result<()> {
    let output = run_fibbench(&["sequence", "--count", "5", "--start", "10"])?;
    assert!(output.status.success());
    let out = stdout(&output);
    assert!(out.contains("F(  10) =  55"));
    assert!(out.contains("F(  14) = 377"));

    let output = run_fibbench(&["info", "--method", "matrix"])?;
    assert!(output.status.success());
    assert!(stdout(&output).contains("| matrix | O(log n) |"));
    Ok(())
}

#[test]
fn test_bench_rejects_invalid_indices() -> Result<()> {
    let output = run_fibbench(&["bench", "--indices", "abc, ,"])?;
    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("Please enter valid Fibonacci indices"));
    Ok(())
}

#[test]
fn test_bench_writes_chart() -> Result<()> {
    let temp_dir = tempdir()?;
    let chart = temp_dir.path().join("speedup.svg");
    let output = run_fibbench(&[
        "bench",
        "--indices",
        "10, 50, 100",
        "--iterations",
        "3",
        "--chart",
        path_str(&chart),
    ])?;
    assert!(output.status.success());
    assert!(stdout(&output).contains("Speedup:"));
    assert!(read_to_string(&chart)?.contains("<svg"));
    Ok(())
}

#[test]
fn test_generate_then_report() -> Result<()> {
    let temp_dir = tempdir()?;
    let config = temp_dir.path().join("fibbench.toml");
    fs::write(&config, SMALL_CONFIG)?;
    let data_dir = temp_dir.path().join("data");
    let html = temp_dir.path().join("out/report.html");
    let summary = temp_dir.path().join("summary.md");

    let output = run_fibbench(&[
        "--config",
        path_str(&config),
        "generate",
        "--output-dir",
        path_str(&data_dir),
    ])?;
    assert!(output.status.success());
    for file in [
        "complexity_comparison.csv",
        "binet_accuracy.csv",
        "golden_ratio_convergence.csv",
    ] {
        assert!(data_dir.join(file).exists(), "{file} missing");
    }

    fs::remove_file(data_dir.join("binet_accuracy.csv"))?;
    let output = run_fibbench(&[
        "--config",
        path_str(&config),
        "report",
        "--data-dir",
        path_str(&data_dir),
        "--output",
        path_str(&html),
        "--tab",
        "golden",
        "--summary",
        path_str(&summary),
    ])?;
    assert!(output.status.success());

    let html = read_to_string(&html)?;
    assert!(html.contains("Data Points: 5 measurements from n=20 to n=100"));
    assert!(html.contains("Data file not found. Run `fibbench generate` first."));
    assert!(html.contains("Convergence: Error from φ at n=40:"));
    assert!(read_to_string(&summary)?.contains("| Binet Accuracy | `binet_accuracy.csv` | missing |"));
    Ok(())
}

fn run_fibbench(args: &[&str]) -> Result<Output> {
    let output = Command::new(env!("CARGO_BIN_EXE_fibbench"))
        .args(args)
        .env_remove("RUST_LOG")
        .output()?;
    println!("stdout:\n{}", stdout(&output));
    println!("stderr:\n{}", String::from_utf8_lossy(&output.stderr));
    Ok(output)
}

fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).into_owned()
}

fn path_str(path: &Path) -> &str {
    path.to_str().expect("temp path is valid UTF-8")
}
