//! Fibonacci search for single-variable minimization.
//!
//! # Algorithm
//!
//! Fibonacci search fixes its step budget `N` before the first evaluation.
//! The initial bracket is divided into `fib(N)` steps of width
//! `δ = (b − a) / fib(N)` and the interior points sit on that lattice. With
//! the counter `j` running from `N` down to `4`:
//!
//! ```text
//! λ = a + fib(j − 2)·δ        μ = a + fib(j − 1)·δ
//! ```
//!
//! - `f(λ) < f(μ)`: keep left: `b := μ`, the old `λ` becomes the new `μ`
//! - otherwise: keep right: `a := λ`, the old `μ` becomes the new `λ`
//!
//! Since `fib(j) = fib(j − 1) + fib(j − 2)`, the bracket width after each
//! iteration is again a Fibonacci multiple of `δ` and the carried point is
//! already on the next lattice. At `j = 3` both interior points would be the
//! same lattice point `a + δ`, so the search stops there instead of comparing
//! it with itself. That leaves `N − 3` iterations, `N − 2` evaluations, and a
//! bracket `2δ` wide centered on the last carried point, which is reported.
//!
//! # Step Budget
//!
//! By default `N` is the smallest index with `fib(N) ≥ (b − a) / ε`, so the
//! reported point is within `δ ≤ ε` of the minimizer. A fixed budget can be requested with
//! [`Steps::Fixed`]; the classic choice is [`Config::REFERENCE_STEPS`].

mod config;
mod sequence;

#[cfg(test)]
mod tests;

pub use config::{Config, Steps};
pub use sequence::{FibError, MAX_INDEX, fib, steps_for};

use minsearch_core::{Objective, Observer};

use crate::{
    Action, Error, Event, Solution, Status, bracket::Bracket, evaluate::Evaluator,
    solution::finish,
};

const METHOD: &str = "Fibonacci";

/// Finds the minimum of the objective on `bracket` using Fibonacci search.
///
/// The observer receives an [`Event`] at the start of each iteration, once
/// both interior points are evaluated.
///
/// # Errors
///
/// Returns an error if the bracket is invalid, if the derived step budget
/// exceeds [`MAX_INDEX`], or if the objective fails or returns a non-finite
/// value at a sample point.
pub fn minimize<O, Obs>(
    objective: &O,
    bracket: [f64; 2],
    config: &Config,
    mut observer: Obs,
) -> Result<Solution, Error>
where
    O: Objective,
    Obs: Observer<Event, Action>,
{
    let mut bracket = Bracket::new(bracket)?;

    let steps = match config.steps() {
        Steps::Derived => steps_for(bracket.width(), config.epsilon())?,
        Steps::Fixed(steps) => steps,
    };
    let table = sequence::table(steps)?;
    #[allow(clippy::cast_precision_loss)]
    let fib_at = |n: usize| table[n - 1] as f64;

    let delta = bracket.width() / fib_at(steps);
    log::debug!("{METHOD}: {steps} steps of width {delta}");

    let mut evaluator = Evaluator::new(objective);
    let mut lambda = evaluator.at(bracket.left + fib_at(steps - 2) * delta)?;

    // With three steps the only interior point is the midpoint.
    if steps == Config::MIN_STEPS {
        return Ok(finish(METHOD, status(delta, config), bracket, &evaluator, 0));
    }
    let mut mu = evaluator.at(bracket.left + fib_at(steps - 1) * delta)?;

    for (iter, j) in (4..=steps).rev().enumerate().map(|(i, j)| (i + 1, j)) {
        let event = Event {
            iter,
            bracket: bracket.bounds(),
            lambda,
            mu,
        };
        log::trace!("{METHOD} iter {iter} (j = {j}): {event:?}");

        if let Some(Action::StopEarly) = observer.observe(&event) {
            return Ok(finish(
                METHOD,
                Status::StoppedByObserver,
                bracket,
                &evaluator,
                iter,
            ));
        }

        let keep_left = lambda.objective < mu.objective;
        if keep_left {
            bracket.right = mu.x;
        } else {
            bracket.left = lambda.x;
        }

        // The carried point is now the midpoint of a 2δ bracket.
        if j == 4 {
            break;
        }

        if keep_left {
            mu = lambda;
            lambda = evaluator.at(bracket.left + fib_at(j - 3) * delta)?;
        } else {
            lambda = mu;
            mu = evaluator.at(bracket.left + fib_at(j - 2) * delta)?;
        }
    }

    Ok(finish(
        METHOD,
        status(delta, config),
        bracket,
        &evaluator,
        steps - 3,
    ))
}

/// A derived budget always meets the tolerance; a fixed one may not.
fn status(delta: f64, config: &Config) -> Status {
    if delta <= config.epsilon() || config.steps() == Steps::Derived {
        Status::Converged
    } else {
        Status::MaxIters
    }
}

/// Finds the minimum of the objective without observer support.
///
/// This is a convenience wrapper around [`minimize`] that uses a no-op observer.
///
/// # Errors
///
/// Returns an error if the bracket is invalid, the step budget is out of
/// range, or the objective fails.
pub fn minimize_unobserved<O: Objective>(
    objective: &O,
    bracket: [f64; 2],
    config: &Config,
) -> Result<Solution, Error> {
    minimize(objective, bracket, config, ())
}
