use minsearch_core::Objective;

use crate::{Point, bracket::Bracket, evaluate::Evaluator};

/// Indicates whether the solver converged, ran out of budget, or was stopped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    /// The final bracket is within the configured tolerance.
    Converged,

    /// Reached the iteration or step limit before the tolerance was met.
    MaxIters,

    /// Stopped early due to an observer decision.
    StoppedByObserver,
}

/// The result of a line search.
#[derive(Debug, Clone, PartialEq)]
pub struct Solution {
    /// Final solver status.
    pub status: Status,

    /// Estimated minimizer: the midpoint of the final bracket.
    pub x: f64,

    /// Final bracket `[a, b]`.
    pub bracket: [f64; 2],

    /// Lowest evaluated point, if any evaluation was made.
    pub best: Option<Point>,

    /// Iteration count when the solver finished.
    pub iters: usize,

    /// Number of objective evaluations.
    pub evals: usize,
}

/// Builds the solution from the final solver state and logs the result.
pub(crate) fn finish<O: Objective>(
    method: &str,
    status: Status,
    bracket: Bracket,
    evaluator: &Evaluator<'_, O>,
    iters: usize,
) -> Solution {
    let solution = Solution {
        status,
        x: bracket.midpoint(),
        bracket: bracket.bounds(),
        best: evaluator.best(),
        iters,
        evals: evaluator.count(),
    };

    if status == Status::MaxIters {
        log::warn!(
            "{method} stopped at the iteration limit with bracket width {}",
            bracket.width()
        );
    }
    log::info!("{method} minimum: {}", solution.x);

    solution
}
