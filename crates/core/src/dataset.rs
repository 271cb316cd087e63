use std::{
    fs,
    path::{Path, PathBuf},
};

use csv::Writer;
use serde::{Deserialize, Serialize};
use tracing::{info, info_span};

use crate::{
    bench::time_method,
    closed_form::{
        binet_error_analysis, binet_overflow_index, fib_binet_f64, fibonacci_ratio, PHI,
    },
    error::FibError,
    iterative::fib_iterative,
    method::FibMethod,
};

pub const COMPLEXITY_FILE: &str = "complexity_comparison.csv";
pub const ACCURACY_FILE: &str = "binet_accuracy.csv";
pub const GOLDEN_RATIO_FILE: &str = "golden_ratio_convergence.csv";

/// Benchmark row for `complexity_comparison.csv`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComplexityPoint {
    pub n: u64,
    /// Mean time of the iterative method
    pub iterative_ns: u64,
    /// Mean time of matrix exponentiation
    pub matrix_ns: u64,
}

/// Row for `binet_accuracy.csv`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AccuracyPoint {
    pub n: u64,
    /// Decimal representation of the exact value
    pub exact: String,
    pub binet: f64,
    pub abs_error: f64,
    pub rel_error: f64,
}

/// Row for `golden_ratio_convergence.csv`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GoldenRatioPoint {
    pub n: u64,
    pub ratio: f64,
    pub error_from_phi: f64,
}

/// Ranges and iteration counts for the three datasets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GenerateParams {
    pub complexity_max_n: u64,
    pub complexity_step: u64,
    pub complexity_iterations: u32,
    pub accuracy_max_n: u64,
    pub golden_max_n: u64,
}

impl Default for GenerateParams {
    fn default() -> Self {
        Self {
            complexity_max_n: 1000,
            complexity_step: 10,
            complexity_iterations: 100,
            accuracy_max_n: 100,
            golden_max_n: 50,
        }
    }
}

impl GenerateParams {
    pub fn complexity_indices(&self) -> impl Iterator<Item = u64> {
        let step = self.complexity_step.max(1) as usize;
        (step as u64..=self.complexity_max_n).step_by(step)
    }
}

pub fn complexity_points(
    indices: impl IntoIterator<Item = u64>,
    iterations: u32,
) -> Result<Vec<ComplexityPoint>, FibError> {
    indices
        .into_iter()
        .map(|n| {
            let iterative = time_method(FibMethod::Iterative, n, iterations)?;
            let matrix = time_method(FibMethod::Matrix, n, iterations)?;
            Ok(ComplexityPoint {
                n,
                iterative_ns: iterative.as_nanos() as u64,
                matrix_ns: matrix.as_nanos() as u64,
            })
        })
        .collect()
}

/// Fails with [`FibError::BinetOverflow`] before computing anything when `max_n`
/// reaches past the `f64` range of the closed form.
pub fn accuracy_points(max_n: u64) -> Result<Vec<AccuracyPoint>, FibError> {
    check_accuracy_range(max_n)?;
    (0..=max_n)
        .map(|n| {
            let (abs_error, rel_error) = binet_error_analysis(n)?;
            Ok(AccuracyPoint {
                n,
                exact: fib_iterative(n).to_string(),
                binet: fib_binet_f64(n),
                abs_error,
                rel_error,
            })
        })
        .collect()
}

fn check_accuracy_range(max_n: u64) -> Result<(), FibError> {
    let overflow = binet_overflow_index();
    if max_n >= overflow {
        return Err(FibError::BinetOverflow { n: overflow });
    }
    Ok(())
}

pub fn golden_ratio_points(max_n: u64) -> Vec<GoldenRatioPoint> {
    (1..=max_n)
        .map(|n| {
            let ratio = fibonacci_ratio(n);
            GoldenRatioPoint {
                n,
                ratio,
                error_from_phi: (ratio - PHI).abs(),
            }
        })
        .collect()
}

/// Writes `points` as CSV with a header row derived from the field names.
pub fn write_dataset<T: Serialize>(path: impl AsRef<Path>, points: &[T]) -> Result<(), FibError> {
    let mut writer = Writer::from_path(path)?;
    for point in points {
        writer.serialize(point)?;
    }
    writer.flush()?;
    Ok(())
}

/// Generates the three datasets into `output_dir`, creating it if needed.
///
/// Returns the written paths in the order complexity, accuracy, golden ratio.
/// Parameters are validated first, so a rejected run leaves no files behind.
pub fn generate_all(
    output_dir: impl AsRef<Path>,
    params: &GenerateParams,
) -> Result<Vec<PathBuf>, FibError> {
    let output_dir = output_dir.as_ref();
    check_accuracy_range(params.accuracy_max_n)?;
    fs::create_dir_all(output_dir)?;
    let mut written = Vec::with_capacity(3);

    {
        let _span = info_span!("complexity", max_n = params.complexity_max_n).entered();
        let points = complexity_points(params.complexity_indices(), params.complexity_iterations)?;
        let path = output_dir.join(COMPLEXITY_FILE);
        write_dataset(&path, &points)?;
        info!("wrote {} points to {}", points.len(), path.display());
        written.push(path);
    }
    {
        let _span = info_span!("binet_accuracy", max_n = params.accuracy_max_n).entered();
        let points = accuracy_points(params.accuracy_max_n)?;
        let path = output_dir.join(ACCURACY_FILE);
        write_dataset(&path, &points)?;
        info!("wrote {} points to {}", points.len(), path.display());
        written.push(path);
    }
    {
        let _span = info_span!("golden_ratio", max_n = params.golden_max_n).entered();
        let points = golden_ratio_points(params.golden_max_n);
        let path = output_dir.join(GOLDEN_RATIO_FILE);
        write_dataset(&path, &points)?;
        info!("wrote {} points to {}", points.len(), path.display());
        written.push(path);
    }

    Ok(written)
}

#[cfg(test)]
mod tests {
    use std::fs::read_to_string;

    use tempfile::tempdir;

    use super::*;

    #[test]
    fn test_complexity_indices_follow_step() {
        let params = GenerateParams {
            complexity_max_n: 50,
            complexity_step: 10,
            ..Default::default()
        };
        assert_eq!(
            params.complexity_indices().collect::<Vec<_>>(),
            vec![10, 20, 30, 40, 50]
        );
        assert_eq!(GenerateParams::default().complexity_indices().count(), 100);
    }

    #[test]
    fn test_accuracy_points_exact_for_small_n() {
        let points = accuracy_points(30).unwrap();
        assert_eq!(points.len(), 31);
        assert_eq!(points[10].exact, "55");
        assert!(points.iter().all(|p| p.rel_error == 0.0));
    }

    #[test]
    fn test_accuracy_points_reject_overflowing_range() {
        let overflow = binet_overflow_index();
        assert_eq!(overflow, 1475);
        assert!(accuracy_points(overflow - 1).is_ok());
        assert!(matches!(
            accuracy_points(1500),
            Err(FibError::BinetOverflow { n: 1475 })
        ));
    }

    #[test]
    fn test_golden_ratio_error_shrinks() {
        let points = golden_ratio_points(50);
        assert_eq!(points.len(), 50);
        assert_eq!(points[0].n, 1);
        assert!(points[49].error_from_phi < points[9].error_from_phi);
        assert!(points[49].error_from_phi < 1e-15);
    }

    #[test]
    fn test_write_dataset_has_header() {
        let dir = tempdir().unwrap();
        let path = dir.path().join(GOLDEN_RATIO_FILE);
        write_dataset(&path, &golden_ratio_points(3)).unwrap();
        let text = read_to_string(&path).unwrap();
        let mut lines = text.lines();
        assert_eq!(lines.next(), Some("n,ratio,error_from_phi"));
        assert_eq!(lines.count(), 3);
    }

    #[test]
    fn test_generate_all_writes_three_files() {
        let dir = tempdir().unwrap();
        let params = GenerateParams {
            complexity_max_n: 30,
            complexity_step: 10,
            complexity_iterations: 2,
            accuracy_max_n: 20,
            golden_max_n: 10,
        };
        let paths = generate_all(dir.path().join("results"), &params).unwrap();
        assert_eq!(paths.len(), 3);
        assert!(paths[0].ends_with(COMPLEXITY_FILE));
        let complexity = read_to_string(&paths[0]).unwrap();
        assert!(complexity.starts_with("n,iterative_ns,matrix_ns\n"));
        assert_eq!(complexity.lines().count(), 4);
        let accuracy = read_to_string(&paths[1]).unwrap();
        assert!(accuracy.starts_with("n,exact,binet,abs_error,rel_error\n"));
    }

    #[test]
    fn test_generate_all_overflow_writes_nothing() {
        let dir = tempdir().unwrap();
        let output = dir.path().join("results");
        let params = GenerateParams {
            complexity_max_n: 20,
            complexity_step: 10,
            complexity_iterations: 1,
            accuracy_max_n: 1500,
            golden_max_n: 10,
        };
        assert!(matches!(
            generate_all(&output, &params),
            Err(FibError::BinetOverflow { n: 1475 })
        ));
        assert!(!output.exists());
    }
}
