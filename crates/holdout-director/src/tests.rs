//! Tests for the difficulty curve and stat scaling.

use holdout_core::config::{default_enemy_types, EnemyType};
use holdout_core::enums::DifficultyPhase;
use proptest::prelude::*;

use crate::curve::*;
use crate::director::Director;

fn basic() -> EnemyType {
    default_enemy_types()
        .into_iter()
        .find(|t| t.name == "basic")
        .unwrap()
}

// ---- Phase boundaries ----

#[test]
fn test_initial_state() {
    let director = Director::new();
    assert_eq!(director.phase(), DifficultyPhase::Learning);
    assert!((director.spawn_interval() - 2.5).abs() < 1e-9);
    assert_eq!(director.enemies_per_spawn(), 1);
    assert!((director.enemy_stat_multiplier() - 1.0).abs() < 1e-6);
}

#[test]
fn test_phase_boundaries() {
    assert_eq!(Director::at(179.9).phase(), DifficultyPhase::Learning);
    assert_eq!(Director::at(180.0).phase(), DifficultyPhase::Early);
    assert_eq!(Director::at(480.0).phase(), DifficultyPhase::Mid);
    assert_eq!(Director::at(780.0).phase(), DifficultyPhase::Late);
    assert_eq!(Director::at(1080.0).phase(), DifficultyPhase::Endgame);
    assert_eq!(Director::at(5000.0).phase(), DifficultyPhase::Endgame);
}

#[test]
fn test_enemies_per_spawn_is_stepped() {
    // Early phase: 1 + floor(p * 2)
    assert_eq!(Director::at(180.0).enemies_per_spawn(), 1);
    assert_eq!(Director::at(329.0).enemies_per_spawn(), 1);
    assert_eq!(Director::at(330.0).enemies_per_spawn(), 2);
    assert_eq!(Director::at(479.0).enemies_per_spawn(), 2);
    // Mid phase starts at 3
    assert_eq!(Director::at(480.0).enemies_per_spawn(), 3);
}

#[test]
fn test_endgame_saturates() {
    let at_cap = Director::at(PHASE_4_END + ENDGAME_RAMP_SECS);
    let far = Director::at(PHASE_4_END + 10.0 * ENDGAME_RAMP_SECS);
    assert!((far.spawn_interval() - MIN_SPAWN_INTERVAL).abs() < 1e-9);
    assert_eq!(far.enemies_per_spawn(), MAX_ENEMIES_PER_SPAWN);
    assert!((far.enemy_stat_multiplier() - 4.0).abs() < 1e-5);
    assert_eq!(at_cap.enemies_per_spawn(), far.enemies_per_spawn());
    assert!((at_cap.enemy_stat_multiplier() - far.enemy_stat_multiplier()).abs() < 1e-6);
}

#[test]
fn test_update_accumulates() {
    let mut director = Director::new();
    for _ in 0..600 {
        director.update(0.5);
    }
    assert!((director.elapsed() - 300.0).abs() < 1e-9);
    assert_eq!(director.phase(), DifficultyPhase::Early);
    let fresh = Director::at(300.0);
    assert!((director.spawn_interval() - fresh.spawn_interval()).abs() < 1e-9);
}

#[test]
fn test_curve_continuous_at_boundaries() {
    for boundary in [PHASE_1_END, PHASE_2_END, PHASE_3_END, PHASE_4_END] {
        let before = Director::at(boundary - 1e-6);
        let after = Director::at(boundary);
        assert!(
            (before.spawn_interval() - after.spawn_interval()).abs() < 1e-3,
            "spawn interval jumps at {boundary}"
        );
        assert!(
            (before.enemy_stat_multiplier() - after.enemy_stat_multiplier()).abs() < 1e-3,
            "multiplier jumps at {boundary}"
        );
    }
}

// ---- Spawn predicate ----

#[test]
fn test_should_spawn() {
    let director = Director::new();
    assert!(!director.should_spawn(2.0, 0.0));
    assert!(director.should_spawn(2.5, 0.0));
    assert!(director.should_spawn(10.0, 7.0));
}

// ---- Stat scaling ----

#[test]
fn test_stats_unscaled_at_start() {
    let stats = Director::new().enemy_stats(&basic());
    assert_eq!(stats.health, 10.0);
    assert!((stats.speed - 1.8).abs() < 1e-6);
    assert_eq!(stats.damage, 10.0);
    assert_eq!(stats.score_value, 10);
}

#[test]
fn test_health_outpaces_speed_late() {
    let director = Director::at(PHASE_4_END + ENDGAME_RAMP_SECS);
    let base = basic();
    let stats = director.enemy_stats(&base);
    // Multiplier 4.0: health x4, speed x1.3, damage x1.5
    assert_eq!(stats.health, 40.0);
    assert!((stats.speed - base.speed * 1.3).abs() < 1e-4);
    assert_eq!(stats.damage, 15.0);
    assert_eq!(stats.score_value, 40);
}

#[test]
fn test_health_rounded() {
    let base = EnemyType::new("odd", 7.0, 1.0, 3.0, 3);
    let director = Director::at(PHASE_2_END); // multiplier 1.5
    let stats = director.enemy_stats(&base);
    assert_eq!(stats.health, 11.0); // 10.5 rounds up
    assert_eq!(stats.score_value, 5); // 4.5 rounds up
}

#[test]
fn test_enemy_stats_idempotent() {
    let director = Director::at(612.0);
    let base = basic();
    assert_eq!(director.enemy_stats(&base), director.enemy_stats(&base));
}

// ---- Properties ----

proptest! {
    #[test]
    fn prop_monotonic_within_phase(
        phase_idx in 0usize..PHASES.len(),
        a in 0.0f64..1.0,
        b in 0.0f64..1.0,
    ) {
        let curve = &PHASES[phase_idx];
        let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
        let span = curve.end - curve.start;
        // Stay strictly inside the half-open segment.
        let t1 = curve.start + lo * span * 0.999;
        let t2 = curve.start + hi * span * 0.999;

        let d1 = Director::at(t1);
        let d2 = Director::at(t2);
        prop_assert_eq!(d1.phase(), d2.phase());
        prop_assert!(d2.spawn_interval() <= d1.spawn_interval() + 1e-9);
        prop_assert!(d2.enemy_stat_multiplier() >= d1.enemy_stat_multiplier() - 1e-6);
        prop_assert!(d2.enemies_per_spawn() >= d1.enemies_per_spawn());
    }

    #[test]
    fn prop_stats_never_below_base(elapsed in 0.0f64..3000.0) {
        let director = Director::at(elapsed);
        let base = basic();
        let stats = director.enemy_stats(&base);
        prop_assert!(stats.health >= base.health);
        prop_assert!(stats.speed >= base.speed - 1e-6);
        prop_assert!(stats.damage >= base.damage);
        prop_assert!(director.spawn_interval() >= MIN_SPAWN_INTERVAL - 1e-9);
    }
}
