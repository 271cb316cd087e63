use std::io;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum InputError {
    #[error("no valid Fibonacci indices in input")]
    NoValidIndices,
    #[error("invalid Fibonacci index: {0:?}")]
    InvalidIndex(String),
}

#[derive(Error, Debug)]
pub enum FibError {
    #[error(transparent)]
    InvalidInput(#[from] InputError),
    #[error("Binet formula overflows f64 at n = {n}")]
    BinetOverflow { n: u64 },
    #[error("memoised recursion is limited to n <= {limit}, got n = {n}")]
    RecursionLimit { n: u64, limit: u64 },
    #[error("modulus must be positive")]
    ZeroModulus,
    #[error("iteration count must be positive")]
    ZeroIterations,
    #[error("csv error: {0}")]
    Csv(#[from] csv::Error),
    #[error("io error: {0}")]
    Io(#[from] io::Error),
}
