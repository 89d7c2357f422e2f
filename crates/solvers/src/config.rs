use thiserror::Error;

/// Errors that can occur when validating a solver config.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum ConfigError {
    #[error("epsilon must be finite and positive")]
    Epsilon,

    #[error("step budget must be between {min} and {max}, got {steps}")]
    Steps { steps: usize, min: usize, max: usize },
}

/// Checks that a convergence tolerance is usable.
pub(crate) fn check_epsilon(epsilon: f64) -> Result<(), ConfigError> {
    if epsilon.is_finite() && epsilon > 0.0 {
        Ok(())
    } else {
        Err(ConfigError::Epsilon)
    }
}
