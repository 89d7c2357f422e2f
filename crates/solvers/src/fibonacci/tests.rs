use std::cell::Cell;

use approx::assert_relative_eq;
use minsearch_core::NegExpLog;
use test_log::test;

use super::{Config, minimize, minimize_unobserved};
use crate::{Action, Error, Event, Status};

const NEG_EXP_LOG_MIN: f64 = 1.763_222_834_351_897;

#[test]
fn reference_run_with_derived_steps() {
    // Width 4 and epsilon 0.01 call for fib(15) = 610 steps of 4/610.
    let config = Config::new(0.01).unwrap();

    let solution =
        minimize_unobserved(&NegExpLog, [-1.0, 3.0], &config).expect("should converge");

    assert_eq!(solution.status, Status::Converged);
    assert_eq!(solution.iters, 12);
    assert_eq!(solution.evals, 13);
    assert_relative_eq!(
        solution.bracket[1] - solution.bracket[0],
        2.0 * 4.0 / 610.0,
        epsilon = 1e-12
    );
    assert_relative_eq!(solution.x, NEG_EXP_LOG_MIN, epsilon = 0.01);
}

#[test]
fn reference_run_with_fixed_steps() {
    let config = Config::with_fixed_steps(0.01, Config::REFERENCE_STEPS).unwrap();

    let solution =
        minimize_unobserved(&NegExpLog, [-1.0, 3.0], &config).expect("should converge");

    assert_eq!(solution.status, Status::Converged);
    assert_eq!(solution.iters, 17);
    assert_eq!(solution.evals, 18);
    assert_relative_eq!(solution.x, NEG_EXP_LOG_MIN, epsilon = 1e-3);
}

#[test]
fn coarse_fixed_budget_reports_limit() {
    let parabola = |x: f64| (x - 0.9).powi(2);
    let config = Config::with_fixed_steps(1e-6, 5).unwrap();

    let solution = minimize_unobserved(&parabola, [0.0, 1.0], &config).expect("should finish");

    // fib(5) = 5 steps of 0.2 cannot reach the tolerance.
    assert_eq!(solution.status, Status::MaxIters);
    assert_eq!(solution.iters, 2);
    assert_relative_eq!(solution.x, 0.8, epsilon = 1e-12);
    assert_relative_eq!(solution.bracket[1] - solution.bracket[0], 0.4, epsilon = 1e-12);
}

#[test]
fn one_evaluation_per_iteration() {
    let calls = Cell::new(0_usize);
    let objective = |x: f64| {
        calls.set(calls.get() + 1);
        (x - 0.3).abs()
    };
    let config = Config::new(1e-4).unwrap();

    let solution = minimize_unobserved(&objective, [0.0, 1.0], &config).expect("converged");

    assert_eq!(solution.evals, solution.iters + 1);
    assert_eq!(calls.get(), solution.evals);
    assert_relative_eq!(solution.x, 0.3, epsilon = 1e-4);
}

#[test]
fn final_bracket_holds_minimizer() {
    // Width 1 and epsilon 0.1 give fib(7) = 13 steps of 1/13.
    let config = Config::new(0.1).unwrap();
    let delta = 1.0 / 13.0;

    for k in 1..100 {
        let target = f64::from(k) / 100.0;
        let parabola = |x: f64| (x - target).powi(2);

        let solution =
            minimize_unobserved(&parabola, [0.0, 1.0], &config).expect("should converge");

        let [a, b] = solution.bracket;
        assert!(a <= target && target <= b, "{target} outside [{a}, {b}]");
        assert_relative_eq!(b - a, 2.0 * delta, epsilon = 1e-12);
        assert!((solution.x - target).abs() <= delta, "target {target}");
        assert_eq!(solution.iters, 4);
        assert_eq!(solution.evals, 5);
    }
}

#[test]
fn last_comparison_uses_distinct_points() {
    let parabola = |x: f64| (x - 0.91).powi(2);
    let config = Config::new(0.1).unwrap();

    let mut events: Vec<Event> = Vec::new();
    let observer = |event: &Event| {
        events.push(*event);
        None
    };

    let solution = minimize(&parabola, [0.0, 1.0], &config, observer).expect("converged");

    let last = events.last().expect("at least one iteration");
    assert!(last.lambda.x < last.mu.x);
    assert_relative_eq!(solution.x, 12.0 / 13.0, epsilon = 1e-12);
    assert!(solution.bracket[0] <= 0.91);
}

#[test]
fn three_steps_sample_only_the_midpoint() {
    let parabola = |x: f64| (x - 1.4).powi(2);
    let config = Config::with_fixed_steps(1.0, Config::MIN_STEPS).unwrap();

    let solution = minimize_unobserved(&parabola, [0.0, 2.0], &config).expect("converged");

    assert_eq!(solution.status, Status::Converged);
    assert_eq!(solution.iters, 0);
    assert_eq!(solution.evals, 1);
    assert_eq!(solution.bracket, [0.0, 2.0]);
    assert_relative_eq!(solution.best.expect("one sample").x, 1.0);
}

#[test]
fn ties_keep_right_section() {
    let flat = |_: f64| 1.0;
    let config = Config::new(0.1).unwrap();

    let solution = minimize_unobserved(&flat, [0.0, 1.0], &config).expect("converged");

    assert_relative_eq!(solution.bracket[1], 1.0);
    assert!(solution.x > 0.9);
}

#[test]
fn interior_points_stay_ordered_on_lattice() {
    let parabola = |x: f64| (x - 1.3).powi(2);
    let config = Config::new(1e-3).unwrap();

    let mut events: Vec<Event> = Vec::new();
    let observer = |event: &Event| {
        events.push(*event);
        None
    };

    let solution = minimize(&parabola, [0.0, 2.0], &config, observer).expect("converged");

    assert_eq!(events.len(), solution.iters);
    for event in &events {
        let [a, b] = event.bracket;
        assert!(a <= event.lambda.x && event.lambda.x < event.mu.x);
        assert!(event.mu.x <= b);
    }
}

#[test]
fn observer_can_stop_early() {
    let parabola = |x: f64| (x - 2.0).powi(2);

    let observer = |event: &Event| (event.iter == 2).then_some(Action::StopEarly);

    let solution = minimize(&parabola, [0.0, 5.0], &Config::default(), observer)
        .expect("should stop cleanly");

    assert_eq!(solution.status, Status::StoppedByObserver);
    assert_eq!(solution.iters, 2);
    assert_eq!(solution.evals, 3);
}

#[test]
fn rejects_unreachable_tolerance() {
    let parabola = |x: f64| x * x;
    let config = Config::new(1e-300).unwrap();

    let result = minimize_unobserved(&parabola, [-1e300, 1e300], &config);

    assert!(matches!(result, Err(Error::Fibonacci(_))));
}

#[test]
fn propagates_domain_error() {
    let config = Config::new(0.01).unwrap();

    let result = minimize_unobserved(&NegExpLog, [-5.0, 1.0], &config);

    assert!(matches!(result, Err(Error::Objective { .. })));
}
