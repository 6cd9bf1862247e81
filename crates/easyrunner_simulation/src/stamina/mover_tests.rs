//! Tests for StaminaGatedMover.

use std::sync::{Arc, Mutex};

use super::*;
use crate::config::MoverConfig;

/// Mover + счётчик полученных ExhaustionEvent
fn mover_with_recorder() -> (StaminaGatedMover, Arc<Mutex<Vec<MoveDirection>>>) {
    let mut mover = StaminaGatedMover::default();
    let received = Arc::new(Mutex::new(Vec::new()));
    let sink = received.clone();
    mover.subscribe(move |event: &ExhaustionEvent| sink.lock().unwrap().push(event.direction));
    (mover, received)
}

#[test]
fn test_forward_exhausts_after_1001_samples() {
    let (mut mover, received) = mover_with_recorder();

    for _ in 0..1001 {
        mover.apply_movement_intent(1.0);
    }

    // 100 - 1001 × 0.1 ≈ -0.1
    assert!(mover.speed_up_stamina() < 0.0);
    assert!(mover.speed_up_stamina() > -0.2, "speed_up = {}", mover.speed_up_stamina());
    assert!(!mover.can_speed_up());
    assert_eq!(*received.lock().unwrap(), vec![MoveDirection::Forward]);
}

#[test]
fn test_gate_stays_open_at_exactly_zero_boundary() {
    let mut mover = StaminaGatedMover::default();

    for _ in 0..1000 {
        mover.apply_movement_intent(1.0);
    }

    // После 1000 вызовов ≈ 0, но не < 0 → gate ещё открыт (порог `< 0`)
    assert!(mover.speed_up_stamina() >= 0.0, "speed_up = {}", mover.speed_up_stamina());
    assert!(mover.speed_up_stamina() < 0.01);
    assert!(mover.can_speed_up());
}

#[test]
fn test_forward_depletes_by_step_until_exhausted() {
    let mut mover = StaminaGatedMover::default();
    let mut previous = mover.speed_up_stamina();

    while mover.can_speed_up() {
        let outcome = mover.apply_movement_intent(0.3);
        let step = previous - outcome.speed_up_stamina;

        assert!((step - 0.1).abs() < 1e-3, "step = {}", step);
        assert_eq!(outcome.slow_down_stamina, 100.0); // Другой pool не трогаем
        previous = outcome.speed_up_stamina;
    }

    // Exhausted: дальше ни contribution, ни depletion
    for _ in 0..50 {
        let outcome = mover.apply_movement_intent(1.0);
        assert_eq!(outcome.contribution, None);
        assert_eq!(outcome.exhausted, None);
        assert_eq!(outcome.speed_up_stamina, previous);
        assert!(!mover.can_speed_up());
    }
}

#[test]
fn test_backward_is_symmetric() {
    let (mut mover, received) = mover_with_recorder();

    let first = mover.apply_movement_intent(-1.0);
    assert_eq!(
        first.contribution,
        Some(AccelerationContribution {
            direction: MoveDirection::Backward,
            scale: -0.74,
        })
    );

    for _ in 1..1001 {
        mover.apply_movement_intent(-0.5);
    }

    assert!(mover.slow_down_stamina() < 0.0);
    assert!(!mover.can_slow_down());
    assert!(mover.can_speed_up());
    assert_eq!(mover.speed_up_stamina(), 100.0);
    assert_eq!(*received.lock().unwrap(), vec![MoveDirection::Backward]);

    let after = mover.apply_movement_intent(-1.0);
    assert_eq!(after.contribution, None);
    assert_eq!(after.slow_down_stamina, mover.slow_down_stamina());
}

#[test]
fn test_forward_contribution_uses_forward_acceleration() {
    let mut mover = StaminaGatedMover::default();
    let outcome = mover.apply_movement_intent(1.0);

    assert_eq!(
        outcome.contribution,
        Some(AccelerationContribution {
            direction: MoveDirection::Forward,
            scale: 0.25,
        })
    );
    assert_eq!(outcome.exhausted, None);
}

#[test]
fn test_zero_intent_never_mutates() {
    let (mut mover, received) = mover_with_recorder();

    let idle = mover.apply_movement_intent(0.0);
    assert_eq!(idle.contribution, None);
    assert_eq!(idle.speed_up_stamina, 100.0);
    assert_eq!(idle.slow_down_stamina, 100.0);

    // Закрываем forward, backward наполовину
    for _ in 0..1001 {
        mover.apply_movement_intent(1.0);
    }
    for _ in 0..500 {
        mover.apply_movement_intent(-1.0);
    }
    let speed_up = mover.speed_up_stamina();
    let slow_down = mover.slow_down_stamina();

    for _ in 0..100 {
        let outcome = mover.apply_movement_intent(0.0);
        assert_eq!(outcome.contribution, None);
        assert_eq!(outcome.speed_up_stamina, speed_up);
        assert_eq!(outcome.slow_down_stamina, slow_down);
    }
    assert_eq!(received.lock().unwrap().len(), 1);
}

#[test]
fn test_nan_intent_treated_as_no_input() {
    let mut mover = StaminaGatedMover::default();
    let outcome = mover.apply_movement_intent(f32::NAN);

    assert_eq!(outcome.contribution, None);
    assert_eq!(mover.speed_up_stamina(), 100.0);
    assert_eq!(mover.slow_down_stamina(), 100.0);
}

#[test]
fn test_alternating_intents_deplete_independently() {
    let (mut mover, received) = mover_with_recorder();

    for _ in 0..500 {
        mover.apply_movement_intent(1.0);
        mover.apply_movement_intent(-1.0);
    }
    assert!((mover.speed_up_stamina() - 50.0).abs() < 0.01);
    assert!((mover.slow_down_stamina() - 50.0).abs() < 0.01);

    // Добиваем только forward
    for _ in 0..501 {
        mover.apply_movement_intent(1.0);
    }
    assert!(!mover.can_speed_up());
    assert!(mover.can_slow_down());
    assert!((mover.slow_down_stamina() - 50.0).abs() < 0.01);

    // Backward продолжает с того же места
    let outcome = mover.apply_movement_intent(-1.0);
    assert!(outcome.contribution.is_some());
    assert!((outcome.slow_down_stamina - 49.9).abs() < 0.01);

    assert_eq!(*received.lock().unwrap(), vec![MoveDirection::Forward]);
}

#[test]
fn test_exhausted_flag_only_on_closing_call() {
    let config = MoverConfig {
        speed_up_stamina_max: 0.25,
        ..MoverConfig::default()
    };
    let mut mover = StaminaGatedMover::new(&config);

    // 0.25 → 0.15 → 0.05 → -0.05 (закрылся на третьем)
    assert_eq!(mover.apply_movement_intent(1.0).exhausted, None);
    assert_eq!(mover.apply_movement_intent(1.0).exhausted, None);
    let closing = mover.apply_movement_intent(1.0);
    assert_eq!(closing.exhausted, Some(MoveDirection::Forward));
    assert!(closing.contribution.is_some()); // Закрывающий вызов всё ещё ускоряет

    assert_eq!(mover.apply_movement_intent(1.0).exhausted, None);
}

#[test]
fn test_listener_runs_before_call_returns() {
    let config = MoverConfig {
        slow_down_stamina_max: 0.05,
        ..MoverConfig::default()
    };
    let mut mover = StaminaGatedMover::new(&config);
    let fired = Arc::new(Mutex::new(false));
    let flag = fired.clone();
    mover.subscribe(move |_: &ExhaustionEvent| *flag.lock().unwrap() = true);

    mover.apply_movement_intent(-1.0);
    assert!(*fired.lock().unwrap());
}

#[test]
fn test_unsubscribed_listener_not_notified() {
    let mut mover = StaminaGatedMover::new(&MoverConfig {
        speed_up_stamina_max: 0.05,
        ..MoverConfig::default()
    });
    let hits = Arc::new(Mutex::new(0u32));
    let counter = hits.clone();
    let id = mover.subscribe(move |_: &ExhaustionEvent| *counter.lock().unwrap() += 1);

    assert!(mover.unsubscribe(id));
    assert_eq!(mover.listener_count(), 0);

    mover.apply_movement_intent(1.0);
    assert!(!mover.can_speed_up());
    assert_eq!(*hits.lock().unwrap(), 0);
}

#[test]
fn test_reset_reopens_both_gates() {
    let (mut mover, received) = mover_with_recorder();

    for _ in 0..1001 {
        mover.apply_movement_intent(1.0);
        mover.apply_movement_intent(-1.0);
    }
    assert!(!mover.can_speed_up());
    assert!(!mover.can_slow_down());

    mover.reset();
    assert!(mover.can_speed_up());
    assert!(mover.can_slow_down());
    assert_eq!(mover.speed_up_stamina(), mover.speed_up().max());
    assert_eq!(mover.slow_down_stamina(), mover.slow_down().max());

    // Подписчики переживают reset и получают событие повторно
    for _ in 0..1001 {
        mover.apply_movement_intent(1.0);
    }
    assert_eq!(
        *received.lock().unwrap(),
        vec![MoveDirection::Forward, MoveDirection::Backward, MoveDirection::Forward]
    );
}
