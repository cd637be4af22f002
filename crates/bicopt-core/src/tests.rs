#[cfg(test)]
mod tests {
    use crate::commands::HostCommand;
    use crate::config::RoundConfig;
    use crate::constants::*;
    use crate::enums::*;
    use crate::error::ConfigError;
    use crate::events::{ContactBody, ContactEvent, SessionEvent};
    use crate::state::RoundState;
    use crate::types::{Aim, EntityId, SimTime, Vector3};

    fn contact(a: BodyRole, b: BodyRole) -> ContactEvent {
        ContactEvent::new(
            ContactBody::new(EntityId(1), a),
            ContactBody::new(EntityId(2), b),
        )
    }

    #[test]
    fn test_body_role_serde() {
        let variants = vec![
            BodyRole::Projectile,
            BodyRole::Hostile(HostileKind::Minor),
            BodyRole::Hostile(HostileKind::Major),
        ];
        for v in variants {
            let json = serde_json::to_string(&v).unwrap();
            let back: BodyRole = serde_json::from_str(&json).unwrap();
            assert_eq!(v, back);
        }
    }

    /// Verify HostCommand round-trips through serde (tagged union).
    #[test]
    fn test_host_command_serde() {
        let commands = vec![
            HostCommand::ConfirmPlacement,
            HostCommand::Fire,
            HostCommand::Tick { dt: 1.0 / 60.0 },
            HostCommand::Contact {
                event: contact(BodyRole::Projectile, BodyRole::Hostile(HostileKind::Major)),
            },
        ];
        for cmd in &commands {
            let json = serde_json::to_string(cmd).unwrap();
            let back: HostCommand = serde_json::from_str(&json).unwrap();
            assert_eq!(json, serde_json::to_string(&back).unwrap());
        }
    }

    #[test]
    fn test_session_event_is_tagged() {
        let event = SessionEvent::RoundComplete { final_score: 19 };
        let json = serde_json::to_string(&event).unwrap();
        assert!(json.contains("\"type\":\"RoundComplete\""), "{json}");
        let back: SessionEvent = serde_json::from_str(&json).unwrap();
        assert_eq!(back, event);
    }

    #[test]
    fn test_round_state_default_is_idle_and_empty() {
        let state = RoundState::default();
        assert_eq!(state.phase, RoundPhase::Idle);
        assert_eq!(state.score, 0);
        assert_eq!(state.seconds_remaining, 0);
    }

    // ---- Contacts and scoring ----

    #[test]
    fn test_contact_event_serde_carries_roles() {
        let event = contact(BodyRole::Projectile, BodyRole::Hostile(HostileKind::Major));
        let json = serde_json::to_string(&event).unwrap();
        assert!(json.contains("\"role\":\"Hostile\""), "{json}");
        let back: ContactEvent = serde_json::from_str(&json).unwrap();
        assert_eq!(back, event);
    }

    #[test]
    fn test_score_values() {
        assert_eq!(HostileKind::Minor.score_value(), 1);
        assert_eq!(HostileKind::Major.score_value(), 5);
    }

    #[test]
    fn test_collision_masks_only_pair_projectiles_with_targets() {
        let projectile = BodyRole::Projectile;
        let target = BodyRole::Hostile(HostileKind::Minor);
        assert!(projectile.collision_mask().contains(target.category()));
        assert!(target.contact_test_mask().contains(projectile.category()));
        assert!(!projectile.collision_mask().contains(projectile.category()));
        assert!(!target.contact_test_mask().contains(target.category()));
    }

    #[test]
    fn test_effect_asset_names_are_distinct() {
        let names = [
            Effect::Shot.asset_name(),
            Effect::Explosion.asset_name(),
            Effect::BackgroundMusic.asset_name(),
        ];
        assert_ne!(names[0], names[1]);
        assert_ne!(names[1], names[2]);
        assert_ne!(names[0], names[2]);
    }

    // ---- Types ----

    #[test]
    fn test_fallback_aim() {
        let aim = Aim::fallback();
        assert_eq!(aim.direction, Vector3::new(0.0, 0.0, -1.0));
        assert_eq!(aim.position, Vector3::new(0.0, 0.0, -0.2));
    }

    #[test]
    fn test_sim_time_advance() {
        let mut time = SimTime::default();
        time.advance(0.5);
        time.advance(0.25);
        assert_eq!(time.tick, 2);
        assert!((time.elapsed_secs - 0.75).abs() < 1e-12);
    }

    // ---- Config ----

    #[test]
    fn test_default_config_is_reference_round() {
        let config = RoundConfig::default();
        config.validate().unwrap();
        assert_eq!(config.duration_secs, 30);
        assert_eq!(config.placement_window, 10);
        assert_eq!(config.minor.cadence_secs, MINOR_CADENCE_SECS);
        assert_eq!(config.major.cadence_secs, MAJOR_CADENCE_SECS);
        assert_eq!(config.minor.impulse_range, (10.0, 40.0));
        assert_eq!(config.major.impulse_range, (40.0, 60.0));
        assert_eq!(config.minor.lifespan_secs, 2.0);
        assert_eq!(config.major.lifespan_secs, 1.0);
        assert_eq!(config.projectile.impulse_scale, 4.0);
        assert_eq!(config.projectile.lifespan_secs, 6.0);
        assert!(config.seed.is_none());
    }

    #[test]
    fn test_partial_json_keeps_defaults() {
        let config = RoundConfig::from_json_str(r#"{ "duration_secs": 45, "seed": 7 }"#).unwrap();
        assert_eq!(config.duration_secs, 45);
        assert_eq!(config.seed, Some(7));
        assert_eq!(config.minor, RoundConfig::default().minor);
    }

    #[test]
    fn test_config_rejects_inverted_range() {
        let mut config = RoundConfig::default();
        config.major.impulse_range = (60.0, 40.0);
        let err = config.validate().unwrap_err();
        assert!(matches!(err, ConfigError::Invalid { field: "major", .. }), "{err}");
    }

    #[test]
    fn test_config_rejects_zero_cadence_and_window() {
        let mut config = RoundConfig::default();
        config.minor.cadence_secs = 0.0;
        assert!(config.validate().is_err());

        let config = RoundConfig {
            placement_window: 0,
            ..Default::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::Invalid { field: "placement_window", .. })
        ));
    }

    #[test]
    fn test_config_rejects_zero_duration() {
        let config = RoundConfig {
            duration_secs: 0,
            ..Default::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::Invalid { field: "duration_secs", .. })
        ));
        assert!(RoundConfig::from_json_str(r#"{ "duration_secs": 0 }"#).is_err());
    }

    #[test]
    fn test_config_rejects_swapped_kinds() {
        let mut config = RoundConfig::default();
        std::mem::swap(&mut config.minor, &mut config.major);
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_config_parse_error() {
        let err = RoundConfig::from_json_str("{ not json").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }
}
