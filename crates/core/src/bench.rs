//! Wall-clock timing of batch computations.
//!
//! Means are taken over a straight loop: no warm-up runs are discarded and no
//! outliers are trimmed.

use std::{
    hint::black_box,
    time::{Duration, Instant},
};

use num_bigint::BigUint;
use serde::{Deserialize, Serialize};
use strum::Display;
use tracing::{info, info_span};

use crate::{error::FibError, iterative::fib_iterative_batch, method::FibMethod};

pub const DEFAULT_ITERATIONS: u32 = 100;

/// The two labelled batch paths of the demo.
///
/// Both variants run [`fib_iterative_batch`]; comparing them measures timing noise,
/// not an algorithmic difference.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
pub enum BatchVariant {
    #[strum(to_string = "SIMD")]
    Simd,
    #[strum(to_string = "Scalar")]
    Scalar,
}

impl BatchVariant {
    pub fn run(&self, indices: &[u64]) -> Vec<BigUint> {
        match self {
            BatchVariant::Simd | BatchVariant::Scalar => fib_iterative_batch(indices),
        }
    }
}

/// Mean per-call durations of two variants over the same batch.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BenchmarkSample {
    pub variant_a_ms: f64,
    pub variant_b_ms: f64,
}

impl BenchmarkSample {
    pub fn new(variant_a_ms: f64, variant_b_ms: f64) -> Self {
        Self {
            variant_a_ms,
            variant_b_ms,
        }
    }

    /// How many times faster variant A ran, with variant B as the baseline.
    pub fn speedup_ratio(&self) -> f64 {
        speedup_ratio(self.variant_b_ms, self.variant_a_ms)
    }

    pub fn swapped(&self) -> Self {
        Self::new(self.variant_b_ms, self.variant_a_ms)
    }
}

/// `baseline_ms / candidate_ms`. Swapping the arguments inverts the ratio.
pub fn speedup_ratio(baseline_ms: f64, candidate_ms: f64) -> f64 {
    baseline_ms / candidate_ms
}

fn mean_elapsed(iterations: u32, mut f: impl FnMut()) -> Result<Duration, FibError> {
    if iterations == 0 {
        return Err(FibError::ZeroIterations);
    }
    let start = Instant::now();
    for _ in 0..iterations {
        f();
    }
    Ok(start.elapsed() / iterations)
}

/// Mean duration of one batch computation over `iterations` runs.
pub fn time_batch(
    variant: BatchVariant,
    indices: &[u64],
    iterations: u32,
) -> Result<Duration, FibError> {
    mean_elapsed(iterations, || {
        black_box(variant.run(black_box(indices)));
    })
}

/// Mean duration of computing `F(n)` with `method` over `iterations` runs.
pub fn time_method(method: FibMethod, n: u64, iterations: u32) -> Result<Duration, FibError> {
    // surface overflow once instead of timing the error path
    method.calculate(n)?;
    mean_elapsed(iterations, || {
        let _ = black_box(method.calculate(black_box(n)));
    })
}

/// Times the SIMD variant (A) and then the scalar variant (B) over the same batch.
pub fn compare_variants(indices: &[u64], iterations: u32) -> Result<BenchmarkSample, FibError> {
    let _span = info_span!("compare_variants", batch = indices.len(), iterations).entered();
    let simd = time_batch(BatchVariant::Simd, indices, iterations)?;
    let scalar = time_batch(BatchVariant::Scalar, indices, iterations)?;
    let sample = BenchmarkSample::new(duration_ms(simd), duration_ms(scalar));
    info!(
        simd_ms = sample.variant_a_ms,
        scalar_ms = sample.variant_b_ms,
        speedup = sample.speedup_ratio(),
        "batch comparison finished"
    );
    Ok(sample)
}

pub fn duration_ms(duration: Duration) -> f64 {
    duration.as_secs_f64() * 1000.0
}
