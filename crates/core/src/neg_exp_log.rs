use thiserror::Error;

use crate::Objective;

/// The reference objective `f(u) = -e^(-u) * ln(u)`.
///
/// It is unimodal on `(0, ∞)` with its minimum at the root of `ln(u) = 1/u`
/// (`u ≈ 1.763`). The logarithm makes it undefined for `u <= 0`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NegExpLog;

/// An objective was evaluated outside its domain.
#[derive(Debug, Clone, Copy, Error, PartialEq)]
#[error("objective undefined at u = {u}: ln(u) requires u > 0")]
pub struct DomainError {
    pub u: f64,
}

impl Objective for NegExpLog {
    type Error = DomainError;

    fn evaluate(&self, u: f64) -> Result<f64, Self::Error> {
        if u > 0.0 {
            Ok(-(-u).exp() * u.ln())
        } else {
            Err(DomainError { u })
        }
    }
}
