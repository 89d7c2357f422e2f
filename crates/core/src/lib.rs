//! Core traits shared by the minsearch solvers.
//!
//! This crate defines the abstractions the line search solvers build on:
//!
//! - [`Objective`]: a scalar function `f64 -> f64` that may fail outside its domain
//! - [`Observer`]: receives solver events and optionally returns control actions
//! - [`NegExpLog`]: the reference objective `f(u) = -e^(-u) * ln(u)`

mod neg_exp_log;
mod objective;
mod observer;

pub use neg_exp_log::{DomainError, NegExpLog};
pub use objective::Objective;
pub use observer::Observer;
