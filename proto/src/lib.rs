//! Renderer-facing view of a match
//!
//! Uses postcard for compact binary snapshots

use fight_core::{Aabb, AnimationState, Effect, EffectKind, Fighter, MatchController};
use postcard::{from_bytes, to_allocvec};
use serde::{Deserialize, Serialize};

// ============================================================================
// Views
// ============================================================================

/// Screen-space rectangle, top-left origin
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BoxView {
    pub x: f32,
    pub y: f32,
    pub w: f32,
    pub h: f32,
}

impl From<Aabb> for BoxView {
    fn from(aabb: Aabb) -> Self {
        let size = aabb.size();
        Self {
            x: aabb.min.x,
            y: aabb.min.y,
            w: size.x,
            h: size.y,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AnimationView {
    Walk,
    Jump,
    Attack,
}

impl From<AnimationState> for AnimationView {
    fn from(state: AnimationState) -> Self {
        match state {
            AnimationState::Walk => AnimationView::Walk,
            AnimationState::Jump => AnimationView::Jump,
            AnimationState::Attack => AnimationView::Attack,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum EffectKindView {
    AttackFlash,
    /// Damage number to float above the fighter
    HitMarker { amount: f32 },
    SuperBurst,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EffectView {
    pub kind: EffectKindView,
    pub area: BoxView,
    pub age: f32,
    pub alpha: f32,
    pub empowered: bool,
}

impl EffectView {
    pub fn capture(effect: &Effect, now: f32) -> Self {
        let kind = match effect.kind {
            EffectKind::AttackFlash => EffectKindView::AttackFlash,
            EffectKind::HitMarker { amount } => EffectKindView::HitMarker { amount },
            EffectKind::SuperBurst => EffectKindView::SuperBurst,
        };
        Self {
            kind,
            area: effect.area.into(),
            age: effect.age(now),
            alpha: effect.alpha(now),
            empowered: effect.empowered,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FighterView {
    pub slot: u8,
    pub name: String,
    pub body: BoxView,
    pub facing_right: bool,
    pub animation: AnimationView,
    pub frame: u8,
    pub scale: (f32, f32),
    pub health: f32,
    pub max_health: f32,
    pub energy: f32,
    pub max_energy: f32,
    pub attacking: bool,
    pub hit_box: Option<BoxView>, // debug overlay, only while the hit window is open
    pub super_mode: bool,
    pub dead: bool,
    pub effects: Vec<EffectView>,
}

impl FighterView {
    pub fn capture(fighter: &Fighter, controller: &MatchController) -> Self {
        let now = controller.now();
        let scale = fighter.action_scale();
        Self {
            slot: fighter.slot,
            name: fighter.name().to_string(),
            body: fighter.body_box().into(),
            facing_right: fighter.facing_right,
            animation: fighter.anim.state.into(),
            frame: fighter.anim.frame_index(),
            scale: (scale.x, scale.y),
            health: fighter.health,
            max_health: fighter.max_health,
            energy: fighter.energy,
            max_energy: fighter.max_energy,
            attacking: fighter.is_attacking(),
            hit_box: fighter.attack_box(controller.config()).map(BoxView::from),
            super_mode: fighter.is_super(),
            dead: fighter.dead,
            effects: fighter
                .effects
                .iter()
                .map(|effect| EffectView::capture(effect, now))
                .collect(),
        }
    }

    /// Fill fraction of the health bar
    pub fn health_ratio(&self) -> f32 {
        ratio(self.health, self.max_health)
    }

    /// Fill fraction of the energy bar
    pub fn energy_ratio(&self) -> f32 {
        ratio(self.energy, self.max_energy)
    }
}

fn ratio(value: f32, max: f32) -> f32 {
    if max <= 0.0 {
        0.0
    } else {
        (value / max).clamp(0.0, 1.0)
    }
}

/// End-screen text
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Banner {
    pub title: String,
    pub subtitle: String,
    pub hint: String,
}

/// Everything a renderer needs for one frame
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FrameSnapshot {
    pub tick: u64,
    pub time: f32,
    pub game_over: bool,
    pub winner: Option<u8>,
    pub winner_name: Option<String>,
    pub fighters: Vec<FighterView>,
}

impl FrameSnapshot {
    pub fn capture(controller: &MatchController) -> Self {
        Self {
            tick: controller.tick_count(),
            time: controller.now(),
            game_over: controller.is_game_over(),
            winner: controller.winner(),
            winner_name: controller.winner_name(),
            fighters: controller
                .fighters()
                .map(|fighter| FighterView::capture(&fighter, controller))
                .collect(),
        }
    }

    pub fn fighter(&self, slot: u8) -> Option<&FighterView> {
        self.fighters.iter().find(|view| view.slot == slot)
    }

    pub fn banner(&self) -> Option<Banner> {
        if !self.game_over {
            return None;
        }
        let winner = self.winner_name.as_deref().unwrap_or("Nobody");
        Some(Banner {
            title: "Game Over!".to_string(),
            subtitle: format!("{winner} wins!"),
            hint: "Press Space to restart".to_string(),
        })
    }

    /// Serialize snapshot to bytes
    pub fn to_bytes(&self) -> Result<Vec<u8>, postcard::Error> {
        to_allocvec(self)
    }

    /// Deserialize snapshot from bytes
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, postcard::Error> {
        from_bytes(bytes)
    }
}
