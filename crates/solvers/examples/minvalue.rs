//! Minimizes `f(u) = -e^(-u) * ln(u)` on `[-1, 3]` with each line search.
//!
//! # Usage
//!
//! ```text
//! cargo run --example minvalue
//! cargo run --example minvalue -- golden 1e-6
//! RUST_LOG=trace cargo run --example minvalue -- fibonacci
//! ```
//!
//! # Modes
//!
//! - **all** (default): run every method and print each minimum
//! - **dichotomy**, **golden**, **fibonacci**: run a single method and print
//!   its full solution
//!
//! An optional second argument sets epsilon (default `0.01`).

use std::error::Error;

use minsearch_core::NegExpLog;
use minsearch_solvers::{
    Solution, dichotomy, fibonacci, golden_section, minimize_dichotomy, minimize_fibonacci,
    minimize_golden_section,
};

const BRACKET: [f64; 2] = [-1.0, 3.0];

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::init();

    let mode = std::env::args().nth(1).unwrap_or_else(|| "all".into());
    let epsilon = std::env::args()
        .nth(2)
        .as_deref()
        .map(str::parse::<f64>)
        .transpose()
        .unwrap_or_else(|_| {
            eprintln!("Invalid epsilon: expected a number, e.g. 0.001");
            std::process::exit(1);
        })
        .unwrap_or(0.01);

    let [a, b] = BRACKET;
    match mode.as_str() {
        "all" => {
            println!("Dichotomy minimum: {}", minimize_dichotomy(&NegExpLog, a, b, epsilon)?);
            println!(
                "Golden section minimum: {}",
                minimize_golden_section(&NegExpLog, a, b, epsilon)?
            );
            println!("Fibonacci minimum: {}", minimize_fibonacci(&NegExpLog, a, b, epsilon)?);
        }
        "dichotomy" => {
            let config = dichotomy::Config::new(epsilon, dichotomy::Config::DEFAULT_MAX_ITERS)?;
            report(&dichotomy::minimize_unobserved(&NegExpLog, BRACKET, &config)?);
        }
        "golden" => {
            let config =
                golden_section::Config::new(epsilon, golden_section::Config::DEFAULT_MAX_ITERS)?;
            report(&golden_section::minimize_unobserved(&NegExpLog, BRACKET, &config)?);
        }
        "fibonacci" => {
            let config = fibonacci::Config::new(epsilon)?;
            report(&fibonacci::minimize_unobserved(&NegExpLog, BRACKET, &config)?);
        }
        other => {
            eprintln!("Unknown mode: {other}");
            eprintln!("Usage: minvalue [all|dichotomy|golden|fibonacci] [epsilon]");
            std::process::exit(1);
        }
    }

    Ok(())
}

fn report(solution: &Solution) {
    let [a, b] = solution.bracket;
    println!("status:      {:?}", solution.status);
    println!("minimum:     {}", solution.x);
    println!("bracket:     [{a}, {b}]");
    if let Some(best) = solution.best {
        println!("best sample: f({}) = {}", best.x, best.objective);
    }
    println!("iterations:  {}", solution.iters);
    println!("evaluations: {}", solution.evals);
}
