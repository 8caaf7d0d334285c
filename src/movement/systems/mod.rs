//! Movement domain: system modules for locomotion updates.

pub(crate) mod collisions;
pub(crate) mod movement;

pub(crate) use collisions::detect_ground;
pub(crate) use movement::apply_motion;
