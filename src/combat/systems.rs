//! Combat domain: per-frame combat update.

use bevy::ecs::message::MessageReader;
use bevy::prelude::*;

use crate::animation::{AnimationBridge, AnimationParams, Animator};
use crate::combat::{AttackFinishedSignal, AttackRequest, AttackResume, CombatState};
use crate::content::ControllerConfig;
use crate::input::InputSnapshot;
use crate::movement::Player;

/// Advance the suspended attack, then apply this frame's combat input.
pub(crate) fn update_combat(
    time: Res<Time>,
    input: Res<InputSnapshot>,
    config: Res<ControllerConfig>,
    mut finished: MessageReader<AttackFinishedSignal>,
    mut query: Query<
        (
            Entity,
            &mut CombatState,
            &mut AnimationParams,
            Option<&mut Animator>,
        ),
        With<Player>,
    >,
) {
    let dt = time.delta_secs();
    let signalled: Vec<Entity> = finished.read().map(|signal| signal.entity).collect();

    for (entity, mut combat, mut params, mut animator) in &mut query {
        let mut anim = AnimationBridge::from_animator(animator.as_deref_mut(), &mut params);

        let resumed = if signalled.contains(&entity) {
            combat.finish_attack_now(&mut anim, &config)
        } else {
            combat.advance(&mut anim, &config, dt)
        };
        if let Some(outcome) = resumed {
            log_resume(outcome);
        }

        if input.combat_toggle {
            combat.toggle_combat(&mut anim);
        }

        if input.attack {
            match combat.request_attack(&mut anim) {
                AttackRequest::AlreadyQueued => debug!("Attack press ignored: follow-up already queued"),
                AttackRequest::NotInCombat => debug!("Attack press ignored: not in combat"),
                AttackRequest::Started | AttackRequest::Queued => {}
            }
        }
    }
}

fn log_resume(outcome: AttackResume) {
    match outcome {
        AttackResume::Chained => debug!("Attack resumed: chained"),
        AttackResume::Finished => debug!("Attack resumed: finished"),
        AttackResume::Aborted => debug!("Attack resumed: aborted"),
    }
}
