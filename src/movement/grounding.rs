//! Movement domain: ground contact probe.

use avian3d::prelude::*;
use bevy::prelude::*;

use crate::content::ControllerConfig;
use crate::movement::GameLayer;

/// Answers whether a sphere overlaps any collider on the given layers.
pub trait GroundProbe {
    fn probe_sphere(&self, center: Vec3, radius: f32, mask: LayerMask) -> bool;
}

impl GroundProbe for SpatialQuery<'_, '_> {
    fn probe_sphere(&self, center: Vec3, radius: f32, mask: LayerMask) -> bool {
        let filter = SpatialQueryFilter::from_mask(mask);
        !self
            .shape_intersections(&Collider::sphere(radius), center, Quat::IDENTITY, &filter)
            .is_empty()
    }
}

pub fn ground_mask(layers: &[GameLayer]) -> LayerMask {
    LayerMask(layers.iter().fold(0, |bits, layer| bits | layer.to_bits()))
}

/// Probe centre for a body whose origin sits at the capsule's middle.
pub fn probe_center(translation: Vec3, config: &ControllerConfig) -> Vec3 {
    let feet = translation - Vec3::Y * (config.character_height * 0.5);
    feet - Vec3::Y * config.grounded_offset
}

pub fn check_grounded(
    probe: &impl GroundProbe,
    translation: Vec3,
    config: &ControllerConfig,
) -> bool {
    probe.probe_sphere(
        probe_center(translation, config),
        config.grounded_radius,
        ground_mask(&config.ground_layers),
    )
}
