mod animation;
mod camera;
mod combat;
mod content;
mod core;
#[cfg(feature = "dev-tools")]
mod debug;
mod input;
mod movement;

use avian3d::prelude::*;
use bevy::prelude::*;

fn main() {
    let mut app = App::new();
    app.add_plugins(DefaultPlugins.set(WindowPlugin {
        primary_window: Some(Window {
            title: "Vanguard".to_string(),
            resizable: true,
            ..default()
        }),
        ..default()
    }))
    .add_plugins(PhysicsPlugins::default())
    .add_plugins((
        core::CorePlugin,
        content::ContentPlugin,
        input::InputPlugin,
        movement::MovementPlugin,
        camera::CameraPlugin,
        combat::CombatPlugin,
        animation::AnimationPlugin,
    ));

    #[cfg(feature = "dev-tools")]
    app.add_plugins(debug::DebugPlugin);

    app.run();
}
