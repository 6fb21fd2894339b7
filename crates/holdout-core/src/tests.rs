#[cfg(test)]
mod tests {
    use glam::Vec2;

    use crate::commands::PlayerCommand;
    use crate::config::{EnemyType, Tunables};
    use crate::constants::*;
    use crate::error::ConfigError;
    use crate::events::GameEvent;
    use crate::state::GameStateSnapshot;
    use crate::types::{GroundBounds, Position, SimTime};

    #[test]
    fn test_default_tunables_are_valid() {
        assert!(Tunables::default().validate().is_ok());
    }

    #[test]
    fn test_partial_json_falls_back_to_defaults() {
        let tunables = Tunables::from_json_str(r#"{ "clip_size": 8 }"#).unwrap();
        assert_eq!(tunables.clip_size, 8);
        assert_eq!(tunables.enemy_types.len(), 3);
        assert_eq!(tunables.contact_cooldown_secs, CONTACT_DAMAGE_COOLDOWN_SECS);
    }

    #[test]
    fn test_enemy_radius_defaults_when_omitted() {
        let json = r#"{ "enemy_types": [
            { "name": "brute", "health": 40.0, "speed": 1.0, "damage": 20.0, "score_value": 30 }
        ] }"#;
        let tunables = Tunables::from_json_str(json).unwrap();
        assert_eq!(tunables.enemy_types[0].radius, ENEMY_RADIUS);
    }

    #[test]
    fn test_empty_enemy_table_rejected() {
        let err = Tunables::from_json_str(r#"{ "enemy_types": [] }"#).unwrap_err();
        assert!(matches!(err, ConfigError::EmptyEnemyTable));
    }

    #[test]
    fn test_zero_health_enemy_rejected() {
        let tunables = Tunables {
            enemy_types: vec![EnemyType::new("ghost", 0.0, 1.0, 1.0, 1)],
            ..Default::default()
        };
        let err = tunables.validate().unwrap_err();
        match err {
            ConfigError::InvalidEnemyType { name, .. } => assert_eq!(name, "ghost"),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_nan_speed_rejected() {
        let bad = EnemyType::new("glitch", 5.0, f32::NAN, 1.0, 1);
        assert!(bad.validate().is_err());
    }

    #[test]
    fn test_zero_clip_rejected() {
        let tunables = Tunables {
            clip_size: 0,
            ..Default::default()
        };
        assert!(matches!(
            tunables.validate(),
            Err(ConfigError::InvalidClipSize(0))
        ));
    }

    #[test]
    fn test_loose_item_chance_out_of_range() {
        let tunables = Tunables {
            loose_item_chance: 1.5,
            ..Default::default()
        };
        assert!(matches!(
            tunables.validate(),
            Err(ConfigError::OutOfRange {
                field: "loose_item_chance",
                ..
            })
        ));
    }

    #[test]
    fn test_zero_contact_cooldown_rejected() {
        let tunables = Tunables {
            contact_cooldown_secs: 0.0,
            ..Default::default()
        };
        assert!(matches!(
            tunables.validate(),
            Err(ConfigError::OutOfRange {
                field: "contact_cooldown_secs",
                ..
            })
        ));
        assert!(Tunables::from_json_str(r#"{ "contact_cooldown_secs": -0.5 }"#).is_err());
    }

    #[test]
    fn test_malformed_json_is_parse_error() {
        let err = Tunables::from_json_str("{ clip_size: ").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn test_xp_curve() {
        assert_eq!(xp_to_next_level(1), 120);
        assert_eq!(xp_to_next_level(2), 140);
        assert_eq!(xp_to_next_level(10), 300);
    }

    #[test]
    fn test_ground_bounds_strict_containment() {
        let ground = GroundBounds::new(50.0);
        assert!(ground.contains(Vec2::new(49.9, -49.9)));
        assert!(!ground.contains(Vec2::new(50.0, 0.0)));
        assert!(!ground.contains(Vec2::new(0.0, -60.0)));
        assert_eq!(ground.clamp(Vec2::new(70.0, -80.0)), Vec2::new(50.0, -50.0));
    }

    #[test]
    fn test_sim_time_advance() {
        let mut time = SimTime::default();
        for _ in 0..TICK_RATE {
            time.advance(DT);
        }
        assert_eq!(time.tick, TICK_RATE as u64);
        assert!((time.elapsed_secs - 1.0).abs() < 1e-9);
    }

    #[test]
    fn test_position_distance() {
        let a = Position::new(0.0, 0.0);
        let b = Position::new(3.0, 4.0);
        assert!((a.distance_to(&b) - 5.0).abs() < 1e-6);
        assert!(!Position::new(f32::NAN, 0.0).is_finite());
    }

    #[test]
    fn test_command_wire_format_is_tagged() {
        let json = serde_json::to_string(&PlayerCommand::Fire {
            aim_x: 1.0,
            aim_y: 0.0,
        })
        .unwrap();
        assert!(json.contains(r#""type":"Fire""#));

        let back: PlayerCommand =
            serde_json::from_str(r#"{ "type": "SetMoveIntent", "x": 0.0, "y": -1.0 }"#).unwrap();
        assert!(matches!(back, PlayerCommand::SetMoveIntent { x, y } if x == 0.0 && y == -1.0));
    }

    #[test]
    fn test_snapshot_with_events_serializes() {
        let snapshot = GameStateSnapshot {
            events: vec![GameEvent::Shot, GameEvent::GemCollected { value: 10 }],
            ..Default::default()
        };
        let json = serde_json::to_string(&snapshot).unwrap();
        let back: GameStateSnapshot = serde_json::from_str(&json).unwrap();
        assert_eq!(back.events, snapshot.events);
        assert!(back.last_level_up.is_none());
    }
}
