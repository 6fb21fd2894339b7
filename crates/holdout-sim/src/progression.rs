//! Experience and level-up rewards.

use rand::seq::SliceRandom;
use rand::Rng;

use holdout_core::constants::*;
use holdout_core::enums::Attribute;
use holdout_core::state::LevelUpView;

use crate::player::PlayerState;

/// Run one threshold check. On level-up the excess XP carries over and one
/// random attribute reward is applied.
///
/// Only a single level is granted per call, even if the XP would cover
/// several; the remainder waits for the next check.
pub fn check_level_up<R: Rng + ?Sized>(
    player: &mut PlayerState,
    rng: &mut R,
) -> Option<LevelUpView> {
    let needed = player.xp_needed();
    if player.xp < needed {
        return None;
    }

    player.xp -= needed;
    player.level += 1;

    let attribute = *LEVEL_UP_REWARDS.choose(rng)?;
    let amount = apply_reward(player, attribute);

    let view = LevelUpView {
        level: player.level,
        attribute,
        amount,
    };
    player.last_level_up = Some(view);
    Some(view)
}

/// Raise one attribute and return the amount it was raised by.
pub fn apply_reward(player: &mut PlayerState, attribute: Attribute) -> f32 {
    let attrs = &mut player.attributes;
    match attribute {
        Attribute::MaxHealth => {
            attrs.max_health += LEVEL_UP_MAX_HEALTH;
            // The new headroom is filled immediately.
            player.health += LEVEL_UP_MAX_HEALTH;
            LEVEL_UP_MAX_HEALTH
        }
        Attribute::MoveSpeed => {
            attrs.move_speed += LEVEL_UP_MOVE_SPEED;
            LEVEL_UP_MOVE_SPEED
        }
        Attribute::BaseDamage => {
            attrs.base_damage += LEVEL_UP_BASE_DAMAGE;
            LEVEL_UP_BASE_DAMAGE
        }
        Attribute::CritChance => {
            attrs.crit_chance += LEVEL_UP_CRIT_CHANCE;
            LEVEL_UP_CRIT_CHANCE
        }
    }
}
