//! JSON input scripts: held keys per fighter for a number of fixed ticks.

use std::fs;
use std::path::Path;

use anyhow::{bail, Context, Result};
use fight_core::FighterIntent;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Action {
    Left,
    Right,
    Up,
    Attack,
    Special,
}

pub fn intent_from(actions: &[Action]) -> FighterIntent {
    let mut intent = FighterIntent::new();
    for action in actions {
        match action {
            Action::Left => intent.left = true,
            Action::Right => intent.right = true,
            Action::Up => intent.up = true,
            Action::Attack => intent.attack = true,
            Action::Special => intent.special = true,
        }
    }
    intent
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Segment {
    pub ticks: u32,
    #[serde(default)]
    pub p1: Vec<Action>,
    #[serde(default)]
    pub p2: Vec<Action>,
}

impl Segment {
    pub fn new(ticks: u32, p1: &[Action], p2: &[Action]) -> Self {
        Self {
            ticks,
            p1: p1.to_vec(),
            p2: p2.to_vec(),
        }
    }

    pub fn intents(&self) -> [FighterIntent; 2] {
        [intent_from(&self.p1), intent_from(&self.p2)]
    }
}

/// Starting overrides for one fighter
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FighterSetup {
    pub x: Option<f32>,
    pub health: Option<f32>,
    pub energy: Option<f32>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Setup {
    #[serde(default)]
    pub p1: FighterSetup,
    #[serde(default)]
    pub p2: FighterSetup,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Script {
    #[serde(default)]
    pub setup: Setup,
    pub segments: Vec<Segment>,
}

impl Script {
    pub fn parse(json: &str) -> Result<Self> {
        let script: Script = serde_json::from_str(json).context("invalid script JSON")?;
        script.validate()?;
        Ok(script)
    }

    pub fn from_path(path: &Path) -> Result<Self> {
        let json = fs::read_to_string(path)
            .with_context(|| format!("failed to read script {}", path.display()))?;
        Self::parse(&json).with_context(|| format!("failed to load script {}", path.display()))
    }

    pub fn validate(&self) -> Result<()> {
        if self.segments.is_empty() {
            bail!("script has no segments");
        }
        if let Some(index) = self.segments.iter().position(|s| s.ticks == 0) {
            bail!("segment {index} has zero ticks");
        }
        Ok(())
    }

    pub fn total_ticks(&self) -> u64 {
        self.segments.iter().map(|s| u64::from(s.ticks)).sum()
    }

    /// Built-in duel: close the gap, trade blows, then fighter 1 spends a full bar
    pub fn demo() -> Self {
        use Action::*;

        let mut segments = vec![
            Segment::new(50, &[Right], &[]),
            Segment::new(40, &[], &[Left]),
        ];
        for _ in 0..6 {
            segments.push(Segment::new(40, &[Attack], &[Attack]));
            segments.push(Segment::new(20, &[], &[]));
        }
        segments.push(Segment::new(1, &[Special], &[]));
        for _ in 0..6 {
            segments.push(Segment::new(40, &[Attack], &[]));
        }

        Self {
            setup: Setup::default(),
            segments,
        }
    }
}
