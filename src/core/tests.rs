//! Core domain: unit tests for controller pass ordering.

use bevy::prelude::*;

use super::{ControllerSet, CorePlugin, configure_controller_sets};

#[derive(Resource, Default)]
struct Order(Vec<ControllerSet>);

fn input_pass(mut order: ResMut<Order>) {
    order.0.push(ControllerSet::Input);
}

fn grounding_pass(mut order: ResMut<Order>) {
    order.0.push(ControllerSet::Grounding);
}

fn combat_pass(mut order: ResMut<Order>) {
    order.0.push(ControllerSet::Combat);
}

fn motion_pass(mut order: ResMut<Order>) {
    order.0.push(ControllerSet::Motion);
}

fn animation_pass(mut order: ResMut<Order>) {
    order.0.push(ControllerSet::Animation);
}

#[test]
fn test_controller_sets_run_in_order() {
    let mut app = App::new();
    configure_controller_sets(&mut app);

    // registered out of order on purpose
    app.init_resource::<Order>()
        .add_systems(Update, animation_pass.in_set(ControllerSet::Animation))
        .add_systems(Update, motion_pass.in_set(ControllerSet::Motion))
        .add_systems(Update, input_pass.in_set(ControllerSet::Input))
        .add_systems(Update, combat_pass.in_set(ControllerSet::Combat))
        .add_systems(Update, grounding_pass.in_set(ControllerSet::Grounding));
    app.update();

    assert_eq!(
        app.world().resource::<Order>().0,
        vec![
            ControllerSet::Input,
            ControllerSet::Grounding,
            ControllerSet::Combat,
            ControllerSet::Motion,
            ControllerSet::Animation,
        ]
    );
}

#[test]
fn test_core_plugin_builds() {
    let mut app = App::new();
    app.add_plugins(CorePlugin);
    assert!(app.is_plugin_added::<CorePlugin>());
}
