//! Gun: clip, ammo and the reload state machine.
//!
//! Ready --(fire, ammo > 1)--> Ready
//! Ready --(fire, last round)--> Reloading
//! Reloading --(RELOAD_TIME elapsed)--> Ready (clip refilled)

use glam::Vec2;

use holdout_core::components::Projectile;
use holdout_core::constants::*;
use holdout_core::enums::WeaponState;
use holdout_core::error::ConfigError;

/// Result of a successful trigger pull.
#[derive(Debug, Clone, Copy)]
pub struct Shot {
    pub projectile: Projectile,
    /// Where the projectile entity should appear (muzzle point).
    pub position: Vec2,
    /// The shot emptied the clip and started a reload.
    pub reload_started: bool,
}

#[derive(Debug, Clone)]
pub struct Gun {
    ammo: u32,
    max_ammo: u32,
    state: WeaponState,
}

impl Gun {
    pub fn new(clip_size: u32) -> Result<Self, ConfigError> {
        if clip_size == 0 {
            return Err(ConfigError::InvalidClipSize(clip_size));
        }
        Ok(Self {
            ammo: clip_size,
            max_ammo: clip_size,
            state: WeaponState::Ready,
        })
    }

    pub fn ammo(&self) -> u32 {
        self.ammo
    }

    pub fn max_ammo(&self) -> u32 {
        self.max_ammo
    }

    pub fn state(&self) -> WeaponState {
        self.state
    }

    pub fn is_reloading(&self) -> bool {
        matches!(self.state, WeaponState::Reloading { .. })
    }

    /// Fire one round from `origin` toward `aim` (a direction, not a point).
    ///
    /// Returns `None` without side effects while reloading, when the clip is
    /// empty, or when `aim` is too short to define a direction.
    pub fn try_shoot(&mut self, now: f64, origin: Vec2, aim: Vec2) -> Option<Shot> {
        if self.is_reloading() || self.ammo == 0 {
            return None;
        }
        if !aim.is_finite() || aim.length_squared() < MIN_AIM_LENGTH_SQ {
            return None;
        }

        let direction = aim.normalize();
        self.ammo -= 1;

        let reload_started = self.ammo == 0;
        if reload_started {
            self.state = WeaponState::Reloading { started_at: now };
        }

        Some(Shot {
            projectile: Projectile {
                direction,
                spawn: origin,
            },
            position: origin + direction * MUZZLE_OFFSET,
            reload_started,
        })
    }

    /// Complete a pending reload once `RELOAD_TIME` has passed since it
    /// started. Returns true on the tick the clip is refilled.
    pub fn update_reload(&mut self, now: f64) -> bool {
        match self.state {
            WeaponState::Reloading { started_at } if now - started_at >= RELOAD_TIME => {
                self.ammo = self.max_ammo;
                self.state = WeaponState::Ready;
                true
            }
            _ => false,
        }
    }

    /// Change the clip size, keeping the current fill ratio.
    ///
    /// A partially filled clip never rounds down to empty. During a reload
    /// ammo stays at zero and the refill uses the new size.
    pub fn update_clip_size(&mut self, new_size: u32) -> Result<(), ConfigError> {
        if new_size == 0 {
            return Err(ConfigError::InvalidClipSize(new_size));
        }

        if self.ammo > 0 {
            let scaled = (self.ammo as f64 * new_size as f64 / self.max_ammo as f64).round() as u32;
            self.ammo = scaled.clamp(1, new_size);
        }
        self.max_ammo = new_size;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn gun() -> Gun {
        Gun::new(CLIP_SIZE).unwrap()
    }

    #[test]
    fn test_zero_clip_size_rejected() {
        assert!(matches!(Gun::new(0), Err(ConfigError::InvalidClipSize(0))));
    }

    #[test]
    fn test_shot_leaves_muzzle_along_aim() {
        let mut gun = gun();
        let shot = gun.try_shoot(0.0, Vec2::new(1.0, 1.0), Vec2::new(0.0, 4.0)).unwrap();
        assert_eq!(shot.projectile.direction, Vec2::Y);
        assert_eq!(shot.projectile.spawn, Vec2::new(1.0, 1.0));
        assert!((shot.position.y - (1.0 + MUZZLE_OFFSET)).abs() < 1e-6);
        assert!(!shot.reload_started);
        assert_eq!(gun.ammo(), CLIP_SIZE - 1);
    }

    #[test]
    fn test_last_round_starts_reload() {
        let mut gun = gun();
        for _ in 0..CLIP_SIZE - 1 {
            assert!(!gun.try_shoot(0.0, Vec2::ZERO, Vec2::X).unwrap().reload_started);
        }
        let last = gun.try_shoot(2.0, Vec2::ZERO, Vec2::X).unwrap();
        assert!(last.reload_started);
        assert_eq!(gun.state(), WeaponState::Reloading { started_at: 2.0 });
        assert!(gun.try_shoot(2.1, Vec2::ZERO, Vec2::X).is_none());
        assert_eq!(gun.ammo(), 0);
    }

    #[test]
    fn test_reload_waits_full_duration() {
        let mut gun = gun();
        for _ in 0..CLIP_SIZE {
            gun.try_shoot(1.0, Vec2::ZERO, Vec2::X);
        }
        assert!(!gun.update_reload(1.0 + RELOAD_TIME - 0.01));
        assert!(gun.is_reloading());
        assert!(gun.update_reload(1.0 + RELOAD_TIME));
        assert!(!gun.is_reloading());
        assert_eq!(gun.ammo(), CLIP_SIZE);
        // Only the completing tick reports the refill.
        assert!(!gun.update_reload(5.0));
    }

    #[test]
    fn test_degenerate_aim_consumes_nothing() {
        let mut gun = gun();
        assert!(gun.try_shoot(0.0, Vec2::ZERO, Vec2::ZERO).is_none());
        assert!(gun.try_shoot(0.0, Vec2::ZERO, Vec2::splat(f32::NAN)).is_none());
        assert_eq!(gun.ammo(), CLIP_SIZE);
    }

    #[test]
    fn test_clip_resize_keeps_ratio() {
        let mut gun = gun();
        for _ in 0..3 {
            gun.try_shoot(0.0, Vec2::ZERO, Vec2::X);
        }
        // 3 of 6 -> 6 of 12
        gun.update_clip_size(12).unwrap();
        assert_eq!(gun.ammo(), 6);
        assert_eq!(gun.max_ammo(), 12);
    }

    #[test]
    fn test_clip_shrink_never_rounds_to_empty() {
        let mut gun = gun();
        for _ in 0..5 {
            gun.try_shoot(0.0, Vec2::ZERO, Vec2::X);
        }
        // 1 of 6 -> round(1/3) = 0, held at 1
        gun.update_clip_size(2).unwrap();
        assert_eq!(gun.ammo(), 1);
    }

    #[test]
    fn test_clip_resize_during_reload() {
        let mut gun = gun();
        for _ in 0..CLIP_SIZE {
            gun.try_shoot(0.0, Vec2::ZERO, Vec2::X);
        }
        gun.update_clip_size(10).unwrap();
        assert_eq!(gun.ammo(), 0);
        assert!(gun.is_reloading());
        gun.update_reload(RELOAD_TIME);
        assert_eq!(gun.ammo(), 10);
    }

    #[test]
    fn test_clip_resize_to_zero_rejected() {
        let mut gun = gun();
        assert!(gun.update_clip_size(0).is_err());
        assert_eq!(gun.max_ammo(), CLIP_SIZE);
        assert_eq!(gun.ammo(), CLIP_SIZE);
    }
}
