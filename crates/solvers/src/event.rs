use crate::Point;

/// Actions an observer can take during a line search.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Stop the solver and report the current bracket.
    StopEarly,
}

/// Iteration event emitted by the line search solvers.
///
/// The event is emitted after both interior points of the iteration are
/// known and before the bracket is narrowed.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Event {
    /// Iteration counter (1-based).
    pub iter: usize,

    /// Bracket `[a, b]` at the start of the iteration.
    pub bracket: [f64; 2],

    /// Left interior point.
    pub lambda: Point,

    /// Right interior point.
    pub mu: Point,
}

impl Event {
    /// Returns the bracket width at the start of the iteration.
    #[must_use]
    pub fn width(&self) -> f64 {
        self.bracket[1] - self.bracket[0]
    }

    /// Returns the interior point with the lower objective.
    ///
    /// Ties favor `lambda`.
    #[must_use]
    pub fn lower(&self) -> Point {
        if self.lambda.objective <= self.mu.objective {
            self.lambda
        } else {
            self.mu
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    #[test]
    fn lower_prefers_lambda_on_ties() {
        let event = Event {
            iter: 1,
            bracket: [0.0, 4.0],
            lambda: Point::new(1.0, 2.0),
            mu: Point::new(3.0, 2.0),
        };

        assert_relative_eq!(event.width(), 4.0);
        assert_eq!(event.lower(), event.lambda);
    }

    #[test]
    fn lower_picks_smaller_objective() {
        let event = Event {
            iter: 2,
            bracket: [0.0, 4.0],
            lambda: Point::new(1.0, 2.0),
            mu: Point::new(3.0, -1.0),
        };

        assert_eq!(event.lower(), event.mu);
    }
}
