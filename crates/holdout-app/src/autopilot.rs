//! Autopilot input: shoots the nearest enemy and kites away from it,
//! drifting toward pickups when nothing is close.

use glam::Vec2;

use holdout_core::commands::PlayerCommand;
use holdout_core::constants::BULLET_MAX_DISTANCE;
use holdout_core::state::GameStateSnapshot;

/// Enemies closer than this are kited away from.
pub const KITE_DISTANCE: f32 = 6.0;

/// Plan this tick's commands from the latest snapshot.
pub fn plan(snapshot: &GameStateSnapshot) -> Vec<PlayerCommand> {
    let player = snapshot.player.position.0;
    let mut commands = Vec::new();

    let nearest_enemy = nearest(player, snapshot.enemies.iter().map(|e| e.position.0));

    if let Some(target) = nearest_enemy {
        let aim = target - player;
        let can_fire = snapshot.hud.ammo > 0 && !snapshot.hud.reloading;
        if can_fire && aim.length() < BULLET_MAX_DISTANCE {
            commands.push(PlayerCommand::Fire {
                aim_x: aim.x,
                aim_y: aim.y,
            });
        }
    }

    let intent = match nearest_enemy {
        Some(target) if target.distance(player) < KITE_DISTANCE => {
            (player - target).normalize_or_zero()
        }
        _ => {
            let pickups = snapshot
                .gems
                .iter()
                .map(|g| g.position.0)
                .chain(snapshot.items.iter().map(|i| i.position.0))
                .chain(
                    snapshot
                        .chests
                        .iter()
                        .filter(|c| !c.is_open)
                        .map(|c| c.position.0),
                );
            nearest(player, pickups)
                .map(|p| (p - player).normalize_or_zero())
                .unwrap_or(Vec2::ZERO)
        }
    };
    commands.push(PlayerCommand::SetMoveIntent {
        x: intent.x,
        y: intent.y,
    });

    commands
}

fn nearest(from: Vec2, points: impl Iterator<Item = Vec2>) -> Option<Vec2> {
    points.min_by(|a, b| a.distance_squared(from).total_cmp(&b.distance_squared(from)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use holdout_core::state::{EnemyView, GemView};
    use holdout_core::types::{EntityId, Position};

    fn enemy(id: u32, x: f32, y: f32) -> EnemyView {
        EnemyView {
            id: EntityId(id),
            name: "basic".into(),
            position: Position::new(x, y),
            radius: 0.5,
            health: 10.0,
            max_health: 10.0,
        }
    }

    fn loaded() -> GameStateSnapshot {
        let mut snapshot = GameStateSnapshot::default();
        snapshot.hud.ammo = 6;
        snapshot.hud.max_ammo = 6;
        snapshot
    }

    fn move_intent(commands: &[PlayerCommand]) -> Vec2 {
        commands
            .iter()
            .find_map(|c| match c {
                PlayerCommand::SetMoveIntent { x, y } => Some(Vec2::new(*x, *y)),
                _ => None,
            })
            .unwrap()
    }

    #[test]
    fn test_aims_at_nearest_enemy() {
        let mut snapshot = loaded();
        snapshot.enemies = vec![enemy(1, 10.0, 0.0), enemy(2, 0.0, -4.0)];

        let commands = plan(&snapshot);
        assert!(matches!(
            commands[0],
            PlayerCommand::Fire { aim_x, aim_y } if aim_x == 0.0 && aim_y == -4.0
        ));
        // Kites away from the close one.
        assert_eq!(move_intent(&commands), Vec2::Y);
    }

    #[test]
    fn test_holds_fire_while_reloading() {
        let mut snapshot = loaded();
        snapshot.hud.ammo = 0;
        snapshot.hud.reloading = true;
        snapshot.enemies = vec![enemy(1, 3.0, 0.0)];

        let commands = plan(&snapshot);
        assert!(!commands
            .iter()
            .any(|c| matches!(c, PlayerCommand::Fire { .. })));
    }

    #[test]
    fn test_collects_pickups_when_safe() {
        let mut snapshot = loaded();
        snapshot.enemies = vec![enemy(1, 20.0, 0.0)];
        snapshot.gems = vec![GemView {
            id: EntityId(5),
            value: 10,
            position: Position::new(0.0, 3.0),
        }];

        assert_eq!(move_intent(&plan(&snapshot)), Vec2::Y);
    }

    #[test]
    fn test_idle_without_targets() {
        let commands = plan(&loaded());
        assert_eq!(commands.len(), 1);
        assert_eq!(move_intent(&commands), Vec2::ZERO);
    }
}
