//! Core domain: arena and camera setup.

use avian3d::prelude::*;
use bevy::prelude::*;

use crate::camera::FollowCamera;
use crate::movement::GameLayer;

/// Static box on the ground layer.
struct Block {
    name: &'static str,
    size: Vec3,
    position: Vec3,
    /// Rotation about X in degrees (ramps)
    tilt: f32,
}

const ARENA: [Block; 5] = [
    Block {
        name: "Floor",
        size: Vec3::new(60.0, 1.0, 60.0),
        position: Vec3::new(0.0, -0.5, 0.0),
        tilt: 0.0,
    },
    Block {
        name: "Low Platform",
        size: Vec3::new(4.0, 0.5, 4.0),
        position: Vec3::new(6.0, 0.25, -6.0),
        tilt: 0.0,
    },
    Block {
        name: "High Platform",
        size: Vec3::new(4.0, 1.5, 4.0),
        position: Vec3::new(-6.0, 0.75, -8.0),
        tilt: 0.0,
    },
    Block {
        name: "Ramp",
        size: Vec3::new(3.0, 0.3, 8.0),
        position: Vec3::new(0.0, 1.0, -14.0),
        tilt: 15.0,
    },
    Block {
        name: "Ledge",
        size: Vec3::new(8.0, 3.0, 3.0),
        position: Vec3::new(0.0, 1.5, -20.0),
        tilt: 0.0,
    },
];

pub(crate) fn spawn_arena(
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
) {
    let ground_material = materials.add(StandardMaterial {
        base_color: Color::srgb(0.35, 0.38, 0.42),
        perceptual_roughness: 0.9,
        ..default()
    });

    for block in &ARENA {
        commands.spawn((
            Name::new(block.name),
            Mesh3d(meshes.add(Cuboid::from_size(block.size))),
            MeshMaterial3d(ground_material.clone()),
            Transform::from_translation(block.position)
                .with_rotation(Quat::from_rotation_x(block.tilt.to_radians())),
            RigidBody::Static,
            Collider::cuboid(block.size.x, block.size.y, block.size.z),
            CollisionLayers::new(GameLayer::Ground, [GameLayer::Player]),
        ));
    }

    commands.spawn((
        Name::new("Sun"),
        DirectionalLight {
            illuminance: 10_000.0,
            shadows_enabled: true,
            ..default()
        },
        Transform::from_xyz(8.0, 16.0, 6.0).looking_at(Vec3::ZERO, Vec3::Y),
    ));

    info!("Arena spawned: {} blocks", ARENA.len());
}

pub(crate) fn spawn_camera(mut commands: Commands) {
    commands.spawn((
        Name::new("FollowCamera"),
        Camera3d::default(),
        FollowCamera,
        Transform::from_xyz(0.0, 3.0, 6.0).looking_at(Vec3::new(0.0, 1.0, 0.0), Vec3::Y),
    ));
}
