//! Movement domain: player bootstrap from the loaded controller data.

use avian3d::prelude::*;
use bevy::prelude::*;

use crate::animation::{AnimationParams, Animator};
use crate::camera::{CameraTarget, OrientationState};
use crate::combat::CombatState;
use crate::content::{AnimatorDef, ControllerConfig};
use crate::movement::{GameLayer, MotionState, Player};

const PLAYER_NAME: &str = "Player";
const SPAWN_POINT: Vec3 = Vec3::new(0.0, 2.0, 0.0);

/// Spawn the controllable character with its body, state and animator.
pub(crate) fn spawn_player(
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
    config: Res<ControllerConfig>,
    animator_def: Res<AnimatorDef>,
    existing_player: Query<Entity, With<Player>>,
) {
    // Don't spawn if player already exists
    if !existing_player.is_empty() {
        info!("Player already exists, skipping spawn");
        return;
    }

    let radius = config.character_radius;
    let height = config.character_height.max(radius * 2.0);
    let cylinder = height - radius * 2.0;

    info!(
        "Spawning player: height={}, radius={}, move={}, sprint={}",
        height, radius, config.move_speed, config.sprint_speed
    );

    commands
        .spawn((
            // Identity & controller state
            (
                Player,
                Name::new(PLAYER_NAME),
                MotionState::new(&config),
                OrientationState::new(0.0),
                CombatState::new(None),
            ),
            // Animation; parameters are cached once the animator is bound
            (
                Animator::from_def(&animator_def, PLAYER_NAME),
                AnimationParams::default(),
            ),
            // Rendering
            Mesh3d(meshes.add(Capsule3d::new(radius, cylinder))),
            MeshMaterial3d(materials.add(StandardMaterial {
                base_color: Color::srgb(0.85, 0.8, 0.72),
                ..default()
            })),
            Transform::from_translation(SPAWN_POINT),
            // Physics
            (
                RigidBody::Dynamic,
                Collider::capsule(radius, cylinder),
                LockedAxes::ROTATION_LOCKED,
                LinearVelocity::default(),
                GravityScale(0.0), // the controller integrates its own gravity
                Friction::new(0.0),
                CollisionLayers::new(GameLayer::Player, [GameLayer::Ground]),
            ),
        ))
        .with_children(|parent| {
            parent.spawn((
                CameraTarget,
                Name::new("CameraTarget"),
                Transform::from_xyz(0.0, config.camera_target_height - height * 0.5, 0.0),
            ));
        });
}
