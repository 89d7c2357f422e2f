use std::convert::Infallible;

/// A scalar objective function to be minimized.
///
/// Any closure `Fn(f64) -> f64` is an objective that never fails.
/// Objectives with a restricted domain implement this trait directly and
/// report evaluations outside that domain through [`Self::Error`].
pub trait Objective {
    type Error: std::error::Error + Send + Sync + 'static;

    /// Evaluates the objective at `x`.
    ///
    /// # Errors
    ///
    /// Returns [`Self::Error`] if the objective is undefined at `x`.
    fn evaluate(&self, x: f64) -> Result<f64, Self::Error>;
}

impl<F> Objective for F
where
    F: Fn(f64) -> f64,
{
    type Error = Infallible;

    fn evaluate(&self, x: f64) -> Result<f64, Self::Error> {
        Ok(self(x))
    }
}
