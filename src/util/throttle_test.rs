#![allow(clippy::float_cmp)]

use super::*;

/// Drive a throttle through `calls` (time, arg), firing the trailing timer
/// when it comes due, and return `(time, arg)` for every execution.
fn simulate(wait_ms: f64, calls: &[(f64, u32)], until_ms: f64) -> Vec<(f64, u32)> {
    let mut throttle = Throttle::new(wait_ms);
    let mut due: Option<f64> = None;
    let mut runs = Vec::new();
    for &(t, arg) in calls {
        while let Some(at) = due
            && at <= t
        {
            due = fire_at(&mut throttle, at, &mut runs);
        }
        match throttle.call(t, arg) {
            Call::Run(args) => runs.push((t, args)),
            Call::Schedule { delay_ms } => due = Some(t + delay_ms),
            Call::Coalesced => {}
        }
    }
    while let Some(at) = due
        && at <= until_ms
    {
        due = fire_at(&mut throttle, at, &mut runs);
    }
    runs
}

/// Fire the trailing timer at `at`; returns when it is next due, if ever.
fn fire_at(throttle: &mut Throttle<u32>, at: f64, runs: &mut Vec<(f64, u32)>) -> Option<f64> {
    match throttle.fire(at) {
        Fire::Run(args) => {
            runs.push((at, args));
            None
        }
        Fire::Reschedule { delay_ms } => Some(at + delay_ms),
        Fire::Idle => None,
    }
}

// =============================================================
// Throttle core
// =============================================================

#[test]
fn first_call_runs_immediately() {
    let mut throttle = Throttle::new(80.0);
    assert_eq!(throttle.call(1_000.0, "a"), Call::Run("a"));
    assert!(!throttle.is_armed());
}

#[test]
fn call_inside_window_arms_trailing_timer_for_remaining_time() {
    let mut throttle = Throttle::new(80.0);
    assert_eq!(throttle.call(0.0, 1), Call::Run(1));
    assert_eq!(throttle.call(30.0, 2), Call::Schedule { delay_ms: 50.0 });
    assert!(throttle.is_armed());
}

#[test]
fn further_calls_coalesce_into_armed_timer() {
    let mut throttle = Throttle::new(80.0);
    assert_eq!(throttle.call(0.0, 1), Call::Run(1));
    assert_eq!(throttle.call(10.0, 2), Call::Schedule { delay_ms: 70.0 });
    assert_eq!(throttle.call(20.0, 3), Call::Coalesced);
    assert_eq!(throttle.call(50.0, 4), Call::Coalesced);
}

#[test]
fn trailing_execution_uses_latest_arguments() {
    let mut throttle = Throttle::new(80.0);
    assert_eq!(throttle.call(0.0, 1), Call::Run(1));
    assert_eq!(throttle.call(10.0, 2), Call::Schedule { delay_ms: 70.0 });
    assert_eq!(throttle.call(50.0, 3), Call::Coalesced);
    assert_eq!(throttle.fire(80.0), Fire::Run(3));
    assert!(!throttle.is_armed());
}

#[test]
fn trailing_execution_starts_a_new_window() {
    let mut throttle = Throttle::new(80.0);
    assert_eq!(throttle.call(0.0, 1), Call::Run(1));
    assert_eq!(throttle.call(10.0, 2), Call::Schedule { delay_ms: 70.0 });
    assert_eq!(throttle.fire(80.0), Fire::Run(2));
    assert_eq!(throttle.call(100.0, 3), Call::Schedule { delay_ms: 60.0 });
}

#[test]
fn fire_without_pending_call_is_empty() {
    let mut throttle: Throttle<u32> = Throttle::new(80.0);
    assert_eq!(throttle.fire(10.0), Fire::Idle);
}

#[test]
fn late_call_runs_now_and_cancels_pending_trailing_args() {
    let mut throttle = Throttle::new(80.0);
    assert_eq!(throttle.call(0.0, 1), Call::Run(1));
    assert_eq!(throttle.call(10.0, 2), Call::Schedule { delay_ms: 70.0 });
    // The timer is late; a fresh call past the window wins.
    assert_eq!(throttle.call(95.0, 3), Call::Run(3));
    assert_eq!(throttle.fire(96.0), Fire::Idle);
    assert!(!throttle.is_armed());
}

#[test]
fn late_timer_waits_out_window_opened_by_a_late_call() {
    let mut throttle = Throttle::new(80.0);
    assert_eq!(throttle.call(0.0, 1), Call::Run(1));
    assert_eq!(throttle.call(10.0, 2), Call::Schedule { delay_ms: 70.0 });
    assert_eq!(throttle.call(95.0, 3), Call::Run(3));
    // The old timer is still armed, so this call rides on it.
    assert_eq!(throttle.call(96.0, 4), Call::Coalesced);
    // It fires 2 ms into the window opened at 95: not yet.
    assert_eq!(throttle.fire(97.0), Fire::Reschedule { delay_ms: 78.0 });
    assert!(throttle.is_armed());
    assert_eq!(throttle.call(120.0, 5), Call::Coalesced);
    assert_eq!(throttle.fire(175.0), Fire::Run(5));
    assert!(!throttle.is_armed());
}

#[test]
fn late_timers_never_run_twice_in_one_window() {
    // The trailing timer for the call at 10 comes due at 80 but fires at 97.
    let mut throttle = Throttle::new(80.0);
    let mut runs = Vec::new();
    for (t, arg) in [(0.0, 1), (10.0, 2), (95.0, 3), (96.0, 4)] {
        if let Call::Run(args) = throttle.call(t, arg) {
            runs.push((t, args));
        }
    }
    let mut due = Some(97.0);
    while let Some(at) = due {
        due = fire_at(&mut throttle, at, &mut runs);
    }
    assert_eq!(runs, vec![(0.0, 1), (95.0, 3), (175.0, 4)]);
}

#[test]
fn burst_yields_one_execution_per_window() {
    let calls = (0..40).map(|i| (f64::from(i) * 5.0, i)).collect::<Vec<_>>();
    let runs = simulate(80.0, &calls, 1_000.0);
    for pair in runs.windows(2) {
        assert!(pair[1].0 - pair[0].0 >= 80.0, "runs too close: {pair:?}");
    }
    // Leading call plus trailing calls at 80 and 160, then the final trailing.
    assert_eq!(runs.first(), Some(&(0.0, 0)));
    assert_eq!(runs.last().map(|r| r.1), Some(39));
}

#[test]
fn each_window_executes_with_last_arguments_of_that_window() {
    let calls = [(0.0, 1), (10.0, 2), (20.0, 3), (70.0, 4), (85.0, 5), (120.0, 6)];
    let runs = simulate(80.0, &calls, 1_000.0);
    assert_eq!(runs, vec![(0.0, 1), (80.0, 4), (160.0, 6)]);
}

#[test]
fn isolated_calls_all_run_immediately() {
    let calls = [(0.0, 1), (100.0, 2), (250.0, 3)];
    let runs = simulate(80.0, &calls, 1_000.0);
    assert_eq!(runs, vec![(0.0, 1), (100.0, 2), (250.0, 3)]);
}

// =============================================================
// timer_ms
// =============================================================

#[test]
fn timer_ms_rounds_up() {
    assert_eq!(timer_ms(49.2), 50);
    assert_eq!(timer_ms(50.0), 50);
}

#[test]
fn timer_ms_clamps_negative_and_nan() {
    assert_eq!(timer_ms(-5.0), 0);
    assert_eq!(timer_ms(f64::NAN), 0);
}
