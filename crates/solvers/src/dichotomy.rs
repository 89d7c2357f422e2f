//! Dichotomy search for single-variable minimization.
//!
//! # Algorithm
//!
//! Each iteration samples the objective at two points offset by a small
//! `σ = ε / 2.1` either side of the bracket midpoint and discards the half
//! that cannot contain the minimum:
//!
//! - `f(λ) < f(μ)`: the minimum is left of `μ`, so `b := μ`
//! - `f(λ) > f(μ)`: the minimum is right of `λ`, so `a := λ`
//! - `f(λ) = f(μ)`: for a unimodal objective the minimum lies between the
//!   samples, so the bracket becomes `[λ, μ]`
//!
//! The bracket width roughly halves every iteration. Iteration stops once the
//! width drops below `ε`, and the midpoint of the final bracket is reported.
//!
//! # Cost
//!
//! Two objective evaluations per iteration. Nothing is reused between
//! iterations, which makes this the most expensive of the three solvers per
//! unit of bracket reduction.

mod config;


pub use config::Config;

use std::cmp::Ordering;

use minsearch_core::{Objective, Observer};

use crate::{
    Action, Error, Event, Solution, Status, bracket::Bracket, evaluate::Evaluator,
    solution::finish,
};

const METHOD: &str = "Dichotomy";

/// Divides the tolerance to get the sampling offset σ either side of the midpoint.
const SIGMA_DIVISOR: f64 = 2.1;

/// Finds the minimum of the objective on `bracket` using dichotomy search.
///
/// The observer receives an [`Event`] after each pair of evaluations and
/// before the bracket is narrowed.
///
/// # Errors
///
/// Returns an error if the bracket is invalid or the objective fails or
/// returns a non-finite value at a sample point.
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
    let mut evaluator = Evaluator::new(objective);

    let epsilon = config.epsilon();
    let sigma = epsilon / SIGMA_DIVISOR;

    for iter in 1..=config.max_iters() {
        if bracket.width() < epsilon {
            return Ok(finish(
                METHOD,
                Status::Converged,
                bracket,
                &evaluator,
                iter - 1,
            ));
        }

        let mid = bracket.midpoint();
        let lambda = evaluator.at(mid - sigma)?;
        let mu = evaluator.at(mid + sigma)?;

        let event = Event {
            iter,
            bracket: bracket.bounds(),
            lambda,
            mu,
        };
        log::trace!("{METHOD} iter {iter}: {event:?}");

        if let Some(Action::StopEarly) = observer.observe(&event) {
            return Ok(finish(
                METHOD,
                Status::StoppedByObserver,
                bracket,
                &evaluator,
                iter,
            ));
        }

        match lambda.objective.partial_cmp(&mu.objective) {
            Some(Ordering::Less) => bracket.right = mu.x,
            Some(Ordering::Greater) => bracket.left = lambda.x,
            // Equal values straddle the minimum of a unimodal objective.
            Some(Ordering::Equal) | None => {
                bracket.left = lambda.x;
                bracket.right = mu.x;
            }
        }
    }

    let status = if bracket.width() < epsilon {
        Status::Converged
    } else {
        Status::MaxIters
    };
    Ok(finish(METHOD, status, bracket, &evaluator, config.max_iters()))
}

/// Finds the minimum of the objective without observer support.
///
/// This is a convenience wrapper around [`minimize`] that uses a no-op observer.
///
/// # Errors
///
/// Returns an error if the bracket is invalid or the objective fails.
pub fn minimize_unobserved<O: Objective>(
    objective: &O,
    bracket: [f64; 2],
    config: &Config,
) -> Result<Solution, Error> {
    minimize(objective, bracket, config, ())
}
