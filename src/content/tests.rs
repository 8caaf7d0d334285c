//! Content domain: unit tests for RON parsing and built-in defaults.

use super::{AnimatorDef, ControllerConfig, ParameterKind, parse_single};
use crate::movement::GameLayer;

#[test]
fn test_partial_controller_config_keeps_defaults() {
    let config: ControllerConfig =
        parse_single("controller.ron", "(move_speed: 3.5, lock_camera_position: true)").unwrap();

    assert_eq!(config.move_speed, 3.5);
    assert!(config.lock_camera_position);

    let defaults = ControllerConfig::default();
    assert_eq!(config.sprint_speed, defaults.sprint_speed);
    assert_eq!(config.gravity, defaults.gravity);
    assert_eq!(config.combat_layer_name, defaults.combat_layer_name);
    assert_eq!(config.ground_layers, vec![GameLayer::Ground]);
}

#[test]
fn test_malformed_ron_names_the_file() {
    let err = parse_single::<ControllerConfig>("controller.ron", "(move_speed: )").unwrap_err();
    assert_eq!(err.file, "controller.ron");
    assert!(err.message.starts_with("Parse error"));
    assert!(err.to_string().starts_with("Failed to load controller.ron"));
}

#[test]
fn test_default_animator_declares_every_controller_parameter() {
    let def = AnimatorDef::default();
    let kind_of = |name: &str| {
        def.parameters
            .iter()
            .find(|p| p.name == name)
            .map(|p| p.kind)
    };

    for name in ["Speed", "MotionSpeed"] {
        assert_eq!(kind_of(name), Some(ParameterKind::Float), "{name}");
    }
    for name in ["Grounded", "Jump", "FreeFall"] {
        assert_eq!(kind_of(name), Some(ParameterKind::Bool), "{name}");
    }
    for name in ["drawWeapon", "sheathWeapon", "attack", "move"] {
        assert_eq!(kind_of(name), Some(ParameterKind::Trigger), "{name}");
    }
}

#[test]
fn test_shipped_controller_config_matches_defaults() {
    let shipped: ControllerConfig = parse_single(
        "controller.ron",
        include_str!("../../assets/data/controller.ron"),
    )
    .unwrap();
    let defaults = ControllerConfig::default();

    assert_eq!(shipped.move_speed, defaults.move_speed);
    assert_eq!(shipped.jump_height, defaults.jump_height);
    assert_eq!(shipped.grounded_offset, defaults.grounded_offset);
    assert_eq!(shipped.camera_top_clamp, defaults.camera_top_clamp);
    assert_eq!(shipped.combat_idle_state, defaults.combat_idle_state);
    assert_eq!(shipped.ground_layers, defaults.ground_layers);
}

#[test]
fn test_shipped_animator_graph_parses() {
    let shipped: AnimatorDef =
        parse_single("animator.ron", include_str!("../../assets/data/animator.ron")).unwrap();

    assert_eq!(shipped.parameters.len(), AnimatorDef::default().parameters.len());
    assert_eq!(shipped.layers.len(), 2);

    let combat = &shipped.layers[1];
    assert_eq!(combat.name, "Combat Layer");
    let slash = combat.states.iter().find(|s| s.name == "Slash").unwrap();
    assert_eq!(slash.clip_length, 0.9);
    assert!(!slash.looping);
    assert_eq!(slash.speed, 1.0);
    assert!(slash.exit_to.is_none());
    assert!(combat.transitions.iter().all(|t| t.from.is_none()));
}
