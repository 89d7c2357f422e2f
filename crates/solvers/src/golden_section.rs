//! Golden section search for single-variable minimization.
//!
//! # Algorithm
//!
//! Golden section search keeps two interior points positioned by the inverse
//! golden ratio `γ = (√5 − 1) / 2`:
//!
//! ```text
//! λ = a + (1 − γ)(b − a)        μ = a + γ(b − a)
//! ```
//!
//! Each iteration compares `f(λ)` and `f(μ)` and discards the outer section
//! beyond the worse point:
//!
//! - `f(λ) ≤ f(μ)`: keep left: `b := μ`, the old `λ` becomes the new `μ`
//! - `f(λ) > f(μ)`: keep right: `a := λ`, the old `μ` becomes the new `λ`
//!
//! Because of the golden ratio's self-similarity the carried point lands
//! exactly where the next iteration needs it, so only one new evaluation is
//! made per iteration. The bracket shrinks by `γ` each time. Iteration stops
//! once the width drops below `ε` and the bracket midpoint is reported.
//!
//! # When to Use
//!
//! - The objective is unimodal on the bracket
//! - Derivatives are unavailable
//! - Evaluations are expensive enough that reusing one per iteration matters

mod bracket;
mod config;


pub use config::Config;

use minsearch_core::{Objective, Observer};

use crate::{
    Action, Error, Event, Solution, Status, bracket::Bracket, evaluate::Evaluator,
    solution::finish,
};

use bracket::GoldenBracket;

const METHOD: &str = "Golden section";

/// Which outer section the iteration discards.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Keep {
    Left,
    Right,
}

/// Finds the minimum of the objective on `bracket` using golden section search.
///
/// The observer receives an [`Event`] at the start of each iteration, once
/// both interior points are evaluated.
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
    let mut golden = GoldenBracket::new(Bracket::new(bracket)?);
    let mut evaluator = Evaluator::new(objective);
    let epsilon = config.epsilon();

    if golden.width() < epsilon {
        return Ok(finish(
            METHOD,
            Status::Converged,
            golden.outer(),
            &evaluator,
            0,
        ));
    }

    let mut lambda = evaluator.at(golden.inner_left)?;
    let mut mu = evaluator.at(golden.inner_right)?;

    for iter in 1..=config.max_iters() {
        let event = Event {
            iter,
            bracket: golden.outer().bounds(),
            lambda,
            mu,
        };
        log::trace!("{METHOD} iter {iter}: {event:?}");

        if let Some(Action::StopEarly) = observer.observe(&event) {
            return Ok(finish(
                METHOD,
                Status::StoppedByObserver,
                golden.outer(),
                &evaluator,
                iter,
            ));
        }

        let keep = if lambda.objective <= mu.objective {
            golden.shrink_right();
            Keep::Left
        } else {
            golden.shrink_left();
            Keep::Right
        };

        if golden.width() < epsilon {
            return Ok(finish(
                METHOD,
                Status::Converged,
                golden.outer(),
                &evaluator,
                iter,
            ));
        }
        if iter == config.max_iters() {
            break;
        }

        match keep {
            Keep::Left => {
                mu = lambda;
                lambda = evaluator.at(golden.inner_left)?;
            }
            Keep::Right => {
                lambda = mu;
                mu = evaluator.at(golden.inner_right)?;
            }
        }
    }

    Ok(finish(
        METHOD,
        Status::MaxIters,
        golden.outer(),
        &evaluator,
        config.max_iters(),
    ))
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
