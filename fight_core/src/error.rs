use std::fmt;

use crate::components::AnimationState;

/// Reasons a [`crate::Config`] is rejected before a match is built
#[derive(Clone, Debug, PartialEq)]
pub enum ConfigError {
    MissingFighter { slot: u8 },
    TooManyFighters { count: usize },
    EmptyName { slot: u8 },
    ZeroFrames { slot: u8, action: AnimationState },
    AttackTooShort { slot: u8, frames: u8, close: u8 },
    NonPositiveScale { slot: u8, action: AnimationState },
    HitWindowInverted { open: u8, close: u8 },
    NonPositiveDimension { name: &'static str, value: f32 },
    SpawnOutOfBounds { slot: u8, x: f32, max_x: f32 },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingFighter { slot } => {
                write!(f, "no fighter profile configured for slot {slot}")
            }
            Self::TooManyFighters { count } => {
                write!(f, "expected exactly 2 fighter profiles, got {count}")
            }
            Self::EmptyName { slot } => write!(f, "fighter {slot} has an empty name"),
            Self::ZeroFrames { slot, action } => {
                write!(f, "fighter {slot} {action} animation has no frames")
            }
            Self::AttackTooShort {
                slot,
                frames,
                close,
            } => write!(
                f,
                "fighter {slot} attack has {frames} frames but the hit window closes at frame {close}"
            ),
            Self::NonPositiveScale { slot, action } => {
                write!(f, "fighter {slot} {action} scale must be positive")
            }
            Self::HitWindowInverted { open, close } => {
                write!(f, "hit window opens at frame {open} but closes at {close}")
            }
            Self::NonPositiveDimension { name, value } => {
                write!(f, "{name} must be positive, got {value}")
            }
            Self::SpawnOutOfBounds { slot, x, max_x } => {
                write!(f, "fighter {slot} spawns at x={x}, outside [0, {max_x}]")
            }
        }
    }
}

impl std::error::Error for ConfigError {}
