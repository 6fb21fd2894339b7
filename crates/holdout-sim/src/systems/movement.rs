//! Player movement from the latest input intent.

use holdout_core::types::GroundBounds;

use crate::player::PlayerState;

/// Move the player by `intent * speed * dt`, kept on the ground.
pub fn run(player: &mut PlayerState, ground: &GroundBounds, dt: f32) {
    if !player.alive || player.move_intent == glam::Vec2::ZERO {
        return;
    }
    let step = player.move_intent * player.current_speed() * dt;
    player.position = ground.clamp(player.position + step);
}
