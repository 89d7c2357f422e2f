use crate::config::{ConfigError, check_epsilon};

/// Configuration for the golden section solver.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Config {
    epsilon: f64,
    max_iters: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            epsilon: 1e-6,
            max_iters: Self::DEFAULT_MAX_ITERS,
        }
    }
}

impl Config {
    /// Iteration limit used by [`Config::default`].
    pub const DEFAULT_MAX_ITERS: usize = 200;

    /// Creates a new config with a validated tolerance.
    ///
    /// # Errors
    ///
    /// Returns an error if `epsilon` is not finite and positive.
    pub fn new(epsilon: f64, max_iters: usize) -> Result<Self, ConfigError> {
        check_epsilon(epsilon)?;
        Ok(Self { epsilon, max_iters })
    }

    /// Returns the bracket width below which the search stops.
    #[must_use]
    pub fn epsilon(&self) -> f64 {
        self.epsilon
    }

    /// Returns the maximum number of shrink iterations.
    #[must_use]
    pub fn max_iters(&self) -> usize {
        self.max_iters
    }
}
