use thiserror::Error;

/// Largest index whose Fibonacci number fits in a `u64`.
pub const MAX_INDEX: usize = 93;

/// Errors that can occur when computing Fibonacci numbers.
#[derive(Debug, Error, Clone, Copy, PartialEq)]
pub enum FibError {
    #[error("fibonacci numbers are defined from index 1")]
    IndexZero,

    #[error("fib({n}) overflows u64: the largest supported index is {MAX_INDEX}")]
    Overflow { n: usize },

    #[error("no fibonacci number up to fib({MAX_INDEX}) reaches width/epsilon = {ratio}")]
    RatioTooLarge { ratio: f64 },
}

fn check_index(n: usize) -> Result<(), FibError> {
    match n {
        0 => Err(FibError::IndexZero),
        n if n > MAX_INDEX => Err(FibError::Overflow { n }),
        _ => Ok(()),
    }
}

/// Returns the `n`-th Fibonacci number, with `fib(1) = fib(2) = 1`.
///
/// # Errors
///
/// Returns [`FibError::IndexZero`] for `n = 0` and [`FibError::Overflow`]
/// for `n > MAX_INDEX`.
pub fn fib(n: usize) -> Result<u64, FibError> {
    check_index(n)?;

    let (mut prev, mut curr) = (0_u64, 1_u64);
    for _ in 1..n {
        (prev, curr) = (curr, prev + curr);
    }
    Ok(curr)
}

/// Returns `fib(1)..=fib(n)`, where element `k - 1` holds `fib(k)`.
pub(super) fn table(n: usize) -> Result<Vec<u64>, FibError> {
    check_index(n)?;

    let mut numbers = Vec::with_capacity(n);
    let (mut prev, mut curr) = (0_u64, 1_u64);
    for _ in 0..n {
        numbers.push(curr);
        (prev, curr) = (curr, prev.saturating_add(curr));
    }
    Ok(numbers)
}

/// Returns the smallest step budget `N ≥ 3` with `fib(N) ≥ width / epsilon`.
///
/// # Errors
///
/// Returns [`FibError::RatioTooLarge`] if even `fib(MAX_INDEX)` is too small.
pub fn steps_for(width: f64, epsilon: f64) -> Result<usize, FibError> {
    let ratio = width / epsilon;

    // fib(2), fib(3)
    let (mut prev, mut curr) = (1_u64, 2_u64);
    for n in 3..=MAX_INDEX {
        #[allow(clippy::cast_precision_loss)]
        if curr as f64 >= ratio {
            return Ok(n);
        }
        (prev, curr) = (curr, prev.saturating_add(curr));
    }
    Err(FibError::RatioTooLarge { ratio })
}
