use minsearch_core::Objective;

use crate::{Error, Point};

/// Evaluates an objective, counting calls and remembering the best point.
pub(crate) struct Evaluator<'a, O> {
    objective: &'a O,
    count: usize,
    best: Option<Point>,
}

impl<'a, O: Objective> Evaluator<'a, O> {
    pub(crate) fn new(objective: &'a O) -> Self {
        Self {
            objective,
            count: 0,
            best: None,
        }
    }

    /// Evaluates the objective at `x`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Objective`] if the objective fails and
    /// [`Error::NonFiniteObjective`] if it returns NaN or an infinity.
    pub(crate) fn at(&mut self, x: f64) -> Result<Point, Error> {
        self.count += 1;

        let value = self.objective.evaluate(x).map_err(|err| Error::Objective {
            x,
            source: Box::new(err),
        })?;
        if !value.is_finite() {
            return Err(Error::NonFiniteObjective { x, value });
        }

        let point = Point::new(x, value);
        log::trace!("f({x}) = {value}");

        if self.best.is_none_or(|best| value < best.objective) {
            self.best = Some(point);
        }
        Ok(point)
    }

    /// Number of objective calls so far, including failed ones.
    pub(crate) fn count(&self) -> usize {
        self.count
    }

    /// Lowest objective seen so far.
    pub(crate) fn best(&self) -> Option<Point> {
        self.best
    }
}
