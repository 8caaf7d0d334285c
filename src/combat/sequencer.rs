//! Combat domain: the combat mode toggle and the suspendable attack sequence.

use bevy::prelude::*;

use crate::animation::{AnimParam, AnimationBridge};
use crate::combat::{AttackPhase, AttackRequest, AttackResume, AttackTask, CombatState};
use crate::content::ControllerConfig;

impl CombatState {
    pub fn new(combat_layer: Option<usize>) -> Self {
        Self {
            combat_layer,
            ..default()
        }
    }

    /// Flip combat mode and fire the matching draw/sheath trigger.
    /// Never touches an attack in progress.
    pub fn toggle_combat(&mut self, anim: &mut AnimationBridge) -> bool {
        self.in_combat = !self.in_combat;

        let trigger = if self.in_combat {
            AnimParam::DrawWeapon
        } else {
            AnimParam::SheathWeapon
        };
        if let Err(e) = anim.try_trigger(trigger) {
            warn!("{}", e);
        }

        debug!("Combat mode: in_combat={}", self.in_combat);
        self.in_combat
    }

    /// Start an attack, or buffer one follow-up if an attack is playing.
    pub fn request_attack(&mut self, anim: &mut AnimationBridge) -> AttackRequest {
        if !self.in_combat {
            return AttackRequest::NotInCombat;
        }
        if !self.is_attacking {
            self.begin_attack(anim);
            return AttackRequest::Started;
        }
        if self.queued_attack {
            return AttackRequest::AlreadyQueued;
        }
        self.queued_attack = true;
        debug!("Attack queued");
        AttackRequest::Queued
    }

    /// Enter the attacking state with a fresh task.
    fn begin_attack(&mut self, anim: &mut AnimationBridge) {
        self.is_attacking = true;
        self.task = Some(AttackTask::new());

        if let Err(e) = anim.set_root_motion(true) {
            warn!("Attack started without animation: {}", e);
            return;
        }
        if let Err(e) = anim.try_trigger(AnimParam::Attack) {
            warn!("{}", e);
        }
        debug!("Attack started");
    }

    /// Step the suspended attack task by one frame.
    ///
    /// The first frame after an attack starts only measures the clip that is
    /// now playing; the countdown begins on the frame after that.
    pub fn advance(
        &mut self,
        anim: &mut AnimationBridge,
        config: &ControllerConfig,
        dt: f32,
    ) -> Option<AttackResume> {
        let task = self.task.as_mut()?;

        match task.phase {
            AttackPhase::WaitingOneFrame => {
                let duration = anim.current_clip_duration(config.fallback_attack_duration);
                task.phase = AttackPhase::WaitingClipDuration {
                    remaining: duration,
                };
                debug!("Attack clip duration: {:.3}s", duration);
                return None;
            }
            AttackPhase::WaitingClipDuration { remaining } => {
                let remaining = remaining - dt;
                task.phase = AttackPhase::WaitingClipDuration { remaining };
                if remaining > 0.0 {
                    return None;
                }
            }
        }
        Some(self.resume(anim, config))
    }

    /// Resume the suspended task right away, skipping whatever wait is left.
    pub fn finish_attack_now(
        &mut self,
        anim: &mut AnimationBridge,
        config: &ControllerConfig,
    ) -> Option<AttackResume> {
        if self.task.is_none() {
            return None;
        }
        Some(self.resume(anim, config))
    }

    fn resume(&mut self, anim: &mut AnimationBridge, config: &ControllerConfig) -> AttackResume {
        self.task = None;

        if let Err(e) = anim.ensure_available() {
            warn!("Attack aborted: {}", e);
            self.is_attacking = false;
            self.queued_attack = false;
            return AttackResume::Aborted;
        }

        if self.queued_attack {
            self.queued_attack = false;
            debug!("Chaining queued attack");
            self.begin_attack(anim);
            return AttackResume::Chained;
        }

        if let Err(e) = anim.try_trigger(AnimParam::Move) {
            warn!("{}", e);
        }
        if let Err(e) = anim.set_root_motion(false) {
            warn!("{}", e);
        }
        self.is_attacking = false;
        debug!("Attack finished");

        self.force_combat_idle_if_needed(anim, config);
        AttackResume::Finished
    }

    /// Put the combat layer back in its idle state when the graph did not
    /// leave the attack state on its own.
    fn force_combat_idle_if_needed(&self, anim: &mut AnimationBridge, config: &ControllerConfig) {
        let Some(layer) = self.combat_layer else {
            return;
        };
        let Some(state) = anim.current_state(layer) else {
            return;
        };
        if state.is_name(&config.combat_idle_state) {
            return;
        }

        info!(
            "Forcing animator to play '{}' on layer {}",
            config.combat_idle_state, layer
        );
        if let Err(e) = anim.play_state(&config.combat_idle_state, layer, 0.0) {
            warn!("{}", e);
        }
    }
}
