//! Derivative-free line search minimizers for unimodal scalar objectives.
//!
//! Each solver narrows a bracket `[a, b]` around the minimum of an
//! [`Objective`] until the bracket is narrower than a tolerance `epsilon`, then
//! reports the bracket midpoint.
//!
//! # Solvers
//!
//! - [`dichotomy`]: samples two points just either side of the midpoint;
//!   two evaluations per iteration
//! - [`golden_section`]: interior points at golden-ratio positions; one
//!   evaluation per iteration after the first
//! - [`fibonacci`]: interior points on a Fibonacci lattice with a step budget
//!   fixed up front; one evaluation per iteration after the first
//!
//! # Quick use
//!
//! The `minimize_*` functions take a bracket and a tolerance and return the
//! estimated minimizer. Use the solver modules directly for configuration,
//! observers, and full [`Solution`] details.
//!
//! [`Objective`]: minsearch_core::Objective

mod bracket;
mod config;
mod error;
mod evaluate;
mod event;
mod point;
mod solution;

pub mod dichotomy;
pub mod fibonacci;
pub mod golden_section;

pub use bracket::BracketError;
pub use config::ConfigError;
pub use error::Error;
pub use event::{Action, Event};
pub use point::Point;
pub use solution::{Solution, Status};

use minsearch_core::Objective;

/// Minimizes `objective` on `[a, b]` with the dichotomy method.
///
/// # Errors
///
/// Returns an error if the interval or `epsilon` is invalid, or if the
/// objective fails at a sample point.
pub fn minimize_dichotomy<O: Objective>(
    objective: &O,
    a: f64,
    b: f64,
    epsilon: f64,
) -> Result<f64, Error> {
    let config = dichotomy::Config::new(epsilon, dichotomy::Config::DEFAULT_MAX_ITERS)?;
    dichotomy::minimize_unobserved(objective, [a, b], &config).map(|solution| solution.x)
}

/// Minimizes `objective` on `[a, b]` with golden section search.
///
/// # Errors
///
/// Returns an error if the interval or `epsilon` is invalid, or if the
/// objective fails at a sample point.
pub fn minimize_golden_section<O: Objective>(
    objective: &O,
    a: f64,
    b: f64,
    epsilon: f64,
) -> Result<f64, Error> {
    let config = golden_section::Config::new(epsilon, golden_section::Config::DEFAULT_MAX_ITERS)?;
    golden_section::minimize_unobserved(objective, [a, b], &config).map(|solution| solution.x)
}

/// Minimizes `objective` on `[a, b]` with Fibonacci search.
///
/// The step budget is derived from the bracket width and `epsilon`.
///
/// # Errors
///
/// Returns an error if the interval or `epsilon` is invalid, if the required
/// step budget exceeds the supported Fibonacci range, or if the objective
/// fails at a sample point.
pub fn minimize_fibonacci<O: Objective>(
    objective: &O,
    a: f64,
    b: f64,
    epsilon: f64,
) -> Result<f64, Error> {
    let config = fibonacci::Config::new(epsilon)?;
    fibonacci::minimize_unobserved(objective, [a, b], &config).map(|solution| solution.x)
}
