use std::error::Error as StdError;

use thiserror::Error;

use crate::{BracketError, ConfigError, fibonacci::FibError};

/// Errors that can occur during a line search.
#[derive(Debug, Error)]
pub enum Error {
    #[error("invalid interval: {0}")]
    InvalidInterval(#[from] BracketError),

    #[error("invalid config: {0}")]
    InvalidConfig(#[from] ConfigError),

    #[error("objective failed at x = {x}")]
    Objective {
        x: f64,
        #[source]
        source: Box<dyn StdError + Send + Sync>,
    },

    #[error("non-finite objective {value} at x = {x}")]
    NonFiniteObjective { x: f64, value: f64 },

    #[error("fibonacci step budget: {0}")]
    Fibonacci(#[from] FibError),
}
