//! Transient visual events owned by a fighter.
//!
//! The simulation only records what happened and when; the renderer fades
//! each effect out from its age.

use std::collections::VecDeque;

use glam::Vec2;

use crate::geometry::Aabb;
use crate::params::Params;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum EffectKind {
    /// Flash in front of the attacker when the hit window opens
    AttackFlash,
    /// Floating damage number above a struck fighter
    HitMarker { amount: f32 },
    /// Spark spawned while super mode powers up
    SuperBurst,
}

impl EffectKind {
    /// Seconds until the effect is fully faded
    pub fn fade(&self) -> f32 {
        match self {
            EffectKind::AttackFlash => Params::ATTACK_FLASH_FADE,
            EffectKind::HitMarker { .. } => Params::HIT_MARKER_FADE,
            EffectKind::SuperBurst => Params::SUPER_BURST_FADE,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Effect {
    pub kind: EffectKind,
    pub area: Aabb,
    pub started_at: f32,
    pub empowered: bool, // spawned during super mode
}

impl Effect {
    pub fn new(kind: EffectKind, pos: Vec2, size: Vec2, started_at: f32, empowered: bool) -> Self {
        Self {
            kind,
            area: Aabb::from_pos_size(pos, size),
            started_at,
            empowered,
        }
    }

    pub fn age(&self, now: f32) -> f32 {
        (now - self.started_at).max(0.0)
    }

    pub fn is_expired(&self, now: f32) -> bool {
        self.age(now) >= self.kind.fade()
    }

    /// Remaining opacity in [0, 1]
    pub fn alpha(&self, now: f32) -> f32 {
        (1.0 - self.age(now) / self.kind.fade()).clamp(0.0, 1.0)
    }
}

/// Bounded FIFO of live effects; the oldest is dropped when full
#[derive(Debug, Clone)]
pub struct EffectQueue {
    items: VecDeque<Effect>,
    capacity: usize,
}

impl Default for EffectQueue {
    fn default() -> Self {
        Self::with_capacity(Params::EFFECT_CAPACITY)
    }
}

impl EffectQueue {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            items: VecDeque::with_capacity(capacity),
            capacity: capacity.max(1),
        }
    }

    pub fn push(&mut self, effect: Effect) {
        if self.items.len() == self.capacity {
            self.items.pop_front();
        }
        self.items.push_back(effect);
    }

    /// Drop every effect whose fade has finished
    pub fn prune(&mut self, now: f32) {
        self.items.retain(|effect| !effect.is_expired(now));
    }

    pub fn iter(&self) -> impl Iterator<Item = &Effect> {
        self.items.iter()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}
