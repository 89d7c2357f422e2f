use crate::config::{ConfigError, check_epsilon};

use super::MAX_INDEX;

/// How the Fibonacci solver chooses its step budget `N`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Steps {
    /// Smallest `N` whose final bracket is no wider than `epsilon`.
    #[default]
    Derived,

    /// A fixed budget, regardless of `epsilon`.
    Fixed(usize),
}

/// Configuration for the Fibonacci solver.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Config {
    epsilon: f64,
    steps: Steps,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            epsilon: 1e-6,
            steps: Steps::Derived,
        }
    }
}

impl Config {
    /// The classic fixed step budget.
    pub const REFERENCE_STEPS: usize = 20;

    /// Smallest usable budget: one iteration with a shared interior point.
    pub const MIN_STEPS: usize = 3;

    /// Creates a config that derives the step budget from `epsilon`.
    ///
    /// # Errors
    ///
    /// Returns an error if `epsilon` is not finite and positive.
    pub fn new(epsilon: f64) -> Result<Self, ConfigError> {
        check_epsilon(epsilon)?;
        Ok(Self {
            epsilon,
            steps: Steps::Derived,
        })
    }

    /// Creates a config with a fixed step budget.
    ///
    /// # Errors
    ///
    /// Returns an error if `epsilon` is not finite and positive, or if `steps`
    /// is outside `MIN_STEPS..=MAX_INDEX`.
    pub fn with_fixed_steps(epsilon: f64, steps: usize) -> Result<Self, ConfigError> {
        check_epsilon(epsilon)?;
        if !(Self::MIN_STEPS..=MAX_INDEX).contains(&steps) {
            return Err(ConfigError::Steps {
                steps,
                min: Self::MIN_STEPS,
                max: MAX_INDEX,
            });
        }
        Ok(Self {
            epsilon,
            steps: Steps::Fixed(steps),
        })
    }

    /// Returns the target width of the final bracket.
    #[must_use]
    pub fn epsilon(&self) -> f64 {
        self.epsilon
    }

    /// Returns the step budget policy.
    #[must_use]
    pub fn steps(&self) -> Steps {
        self.steps
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn derived_by_default() {
        assert_eq!(Config::default().steps(), Steps::Derived);
        assert_eq!(Config::new(0.01).unwrap().steps(), Steps::Derived);
    }

    #[test]
    fn fixed_steps_are_range_checked() {
        let config = Config::with_fixed_steps(0.01, Config::REFERENCE_STEPS).unwrap();
        assert_eq!(config.steps(), Steps::Fixed(20));

        assert_eq!(
            Config::with_fixed_steps(0.01, 2),
            Err(ConfigError::Steps {
                steps: 2,
                min: 3,
                max: 93
            })
        );
        assert!(Config::with_fixed_steps(0.01, 94).is_err());
        assert_eq!(
            Config::with_fixed_steps(0.0, 20),
            Err(ConfigError::Epsilon)
        );
    }
}
