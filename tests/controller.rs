use std::time::{Duration, Instant};

use critter::animation::{AnimationController, Motion, StopPolicy};
use critter::direction::Facing;
use pretty_assertions::assert_eq;

mod common;
use common::{counting_hook, ms};

/// Ticks the controller every 10ms of simulated time through `until`,
/// collecting each distinct column drawn while the session is running.
fn observe_columns(controller: &mut AnimationController, start: Instant, until: Duration) -> Vec<u32> {
    let mut cols = vec![controller.current_cell().col];
    let mut t = Duration::ZERO;
    while t < until {
        t += ms(10);
        controller.tick(start + t);
        if !controller.is_running() {
            break;
        }
        let col = controller.current_cell().col;
        if cols.last() != Some(&col) {
            cols.push(col);
        }
    }
    cols
}

#[test]
fn test_once_completes_after_one_cycle() {
    let start = Instant::now();
    let mut controller = AnimationController::new();
    let (hook, fired) = counting_hook();

    controller.play(Motion::AttackPrimary, StopPolicy::Once, start, hook);
    assert_eq!(controller.current_cell().row, 4);

    let cols = observe_columns(&mut controller, start, ms(2000));
    assert_eq!(cols, vec![0, 1, 2, 3]);
    assert!(!controller.is_running());
    assert_eq!(fired.get(), 1);

    // Further ticks are no-ops: the hook stays fired-once.
    controller.tick(start + ms(3000));
    assert_eq!(fired.get(), 1);
}

#[test]
fn test_loops_policy_runs_exact_cycle_count() {
    let start = Instant::now();
    let mut controller = AnimationController::new();
    let (hook, fired) = counting_hook();

    controller.play(Motion::WalkDown, StopPolicy::Loops(3), start, hook);

    let cols = observe_columns(&mut controller, start, ms(5000));
    // 3 cycles of 4 frames, and nothing drawn past the final wrap.
    assert_eq!(cols, vec![0, 1, 2, 3, 0, 1, 2, 3, 0, 1, 2, 3]);
    assert!(!controller.is_running());
    assert_eq!(fired.get(), 1);
}

#[test]
fn test_duration_policy_fires_mid_cycle() {
    let start = Instant::now();
    let mut controller = AnimationController::new();
    let (hook, fired) = counting_hook();

    controller.play(Motion::WalkUp, StopPolicy::After(ms(625)), start, hook);

    controller.tick(start + ms(620));
    assert!(controller.is_running());
    // 620ms in, the session sits on frame 2: the deadline lands mid-cycle.
    assert_eq!(controller.current_cell().col, 2);
    assert_eq!(fired.get(), 0);

    controller.tick(start + ms(630));
    assert!(!controller.is_running());
    assert_eq!(fired.get(), 1);
}

#[test]
fn test_duration_policy_beats_cycle_boundary() {
    let start = Instant::now();
    let mut controller = AnimationController::new();
    let (hook, fired) = counting_hook();

    // 1000ms is also a cycle boundary; the deadline still fires exactly once.
    controller.play(Motion::WalkUp, StopPolicy::After(ms(1000)), start, hook);
    for t in (0..=1100).step_by(10) {
        controller.tick(start + ms(t));
    }
    assert!(!controller.is_running());
    assert_eq!(fired.get(), 1);
}

#[test]
fn test_perpetual_never_stops() {
    let start = Instant::now();
    let mut controller = AnimationController::new();
    let (hook, fired) = counting_hook();

    controller.play(Motion::WalkRight, StopPolicy::Perpetual, start, hook);
    for t in (0..=10_000).step_by(50) {
        controller.tick(start + ms(t));
    }

    assert!(controller.is_running());
    assert_eq!(controller.cycles(), 10);
    assert_eq!(fired.get(), 0);
}

#[test]
fn test_override_cancels_previous_session() {
    let start = Instant::now();
    let mut controller = AnimationController::new();
    let (first_hook, first_fired) = counting_hook();
    let (second_hook, second_fired) = counting_hook();

    controller.play(Motion::WalkRight, StopPolicy::Perpetual, start, first_hook);
    controller.tick(start + ms(300));
    assert_eq!(controller.current_cell().row, 2);

    controller.play(Motion::WalkLeft, StopPolicy::Once, start + ms(300), second_hook);
    assert_eq!(controller.motion(), Some(Motion::WalkLeft));

    // No tick after the override may ever draw the walk-right row again; the
    // idle fallback after completion is left-facing, so the row stays put.
    for t in (300..=1500).step_by(10) {
        controller.tick(start + ms(t));
        assert_eq!(controller.current_cell().row, 1);
    }

    assert!(!controller.is_running());
    assert_eq!(first_fired.get(), 0);
    assert_eq!(second_fired.get(), 1);
}

#[test]
fn test_override_leaves_exactly_one_session() {
    let start = Instant::now();
    let mut controller = AnimationController::new();
    let (first_hook, _) = counting_hook();
    let (second_hook, _) = counting_hook();

    controller.play(Motion::WalkUp, StopPolicy::Perpetual, start, first_hook);
    controller.play(Motion::AttackSecondary, StopPolicy::Perpetual, start, second_hook);

    assert!(controller.is_running());
    assert_eq!(controller.motion(), Some(Motion::AttackSecondary));
    assert_eq!(controller.cycles(), 0);
}

#[test]
fn test_direction_memory_persists_into_idle() {
    let start = Instant::now();
    let mut controller = AnimationController::new();

    let (hook, _) = counting_hook();
    controller.play(Motion::WalkLeft, StopPolicy::Once, start, hook);
    for t in (0..=1100).step_by(10) {
        controller.tick(start + ms(t));
    }
    assert!(!controller.is_running());
    assert_eq!(controller.facing(), Facing::Left);
    assert_eq!(controller.current_cell().row, 1);
    assert_eq!(controller.current_cell().col, 0);

    let (hook, _) = counting_hook();
    controller.play(Motion::WalkRight, StopPolicy::Once, start + ms(2000), hook);
    for t in (2000..=3100).step_by(10) {
        controller.tick(start + ms(t));
    }
    assert_eq!(controller.facing(), Facing::Right);
    assert_eq!(controller.current_cell().row, 2);
}

#[test]
fn test_direction_memory_survives_supersession() {
    let start = Instant::now();
    let mut controller = AnimationController::new();

    let (hook, _) = counting_hook();
    controller.play(Motion::WalkLeft, StopPolicy::Perpetual, start, hook);
    controller.tick(start + ms(300));

    // The walk never completes on its own, but its heading still sticks.
    let (hook, _) = counting_hook();
    controller.play(Motion::AttackPrimary, StopPolicy::Once, start + ms(300), hook);
    for t in (300..=1500).step_by(10) {
        controller.tick(start + ms(t));
    }

    assert!(!controller.is_running());
    assert_eq!(controller.facing(), Facing::Left);
    assert_eq!(controller.current_cell().row, 1);
}

#[test]
fn test_idle_motion_renders_column_zero() {
    let start = Instant::now();
    let mut controller = AnimationController::new();
    let (hook, fired) = counting_hook();

    controller.play(Motion::Idle, StopPolicy::Perpetual, start, hook);
    for t in (0..=5000).step_by(10) {
        controller.tick(start + ms(t));
        assert_eq!(controller.current_cell().col, 0);
    }

    assert!(controller.is_running());
    assert_eq!(fired.get(), 0);
}

#[test]
fn test_stop_returns_to_idle_without_completion() {
    let start = Instant::now();
    let mut controller = AnimationController::new();
    let (hook, fired) = counting_hook();

    controller.play(Motion::WalkDown, StopPolicy::Perpetual, start, hook);
    controller.tick(start + ms(300));
    controller.stop();

    assert!(!controller.is_running());
    assert_eq!(controller.motion(), None);
    assert_eq!(fired.get(), 0);
}

#[test]
fn test_delayed_ticks_skip_frames_not_time() {
    let start = Instant::now();
    let mut controller = AnimationController::new();
    let (hook, fired) = counting_hook();

    controller.play(Motion::AttackPrimary, StopPolicy::Once, start, hook);

    // A stalled host loop delivers sparse ticks; frame selection follows the
    // wall clock, so frames are skipped visually rather than slowed down.
    controller.tick(start + ms(770));
    assert_eq!(controller.current_cell().col, 3);

    controller.tick(start + ms(1020));
    assert!(!controller.is_running());
    assert_eq!(fired.get(), 1);
}
