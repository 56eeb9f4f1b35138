use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::config::TreeConfig;

/// Canonical mature stage.
pub const MAX_STAGE: u8 = 5;
pub const STARTING_HEALTH: i32 = 10;
/// Health a tree is left with when it falls to a stump or hibernates.
pub const STUMP_HEALTH: i32 = 5;
pub const DESTROYED_HEALTH: i32 = -100;
const PASSABLE_HEALTH: i32 = -99;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum TreeError {
    #[error("invalid tree state: growth stage {stage} outside 0..=5")]
    InvalidState { stage: i32 },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Species {
    Oak,
    Maple,
    Pine,
    Palm,
    Mahogany,
    Mushroom,
}

impl Species {
    /// Species that go dormant as stumps over winter.
    pub fn hibernates(self) -> bool {
        matches!(self, Species::Mushroom)
    }
}

/// Passive representation used while the simulation is suspended.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TreeRecord {
    pub growth_stage: i32,
    pub species: Species,
    #[serde(default = "default_health")]
    pub health: i32,
    #[serde(default)]
    pub flipped: bool,
    #[serde(default)]
    pub stump: bool,
    #[serde(default)]
    pub tapped: bool,
    #[serde(default)]
    pub has_seed: bool,
}

fn default_health() -> i32 {
    STARTING_HEALTH
}

impl TreeRecord {
    pub fn new(species: Species, growth_stage: i32) -> Self {
        Self {
            growth_stage,
            species,
            health: STARTING_HEALTH,
            flipped: false,
            stump: false,
            tapped: false,
            has_seed: false,
        }
    }

    pub fn is_mature(&self) -> bool {
        self.growth_stage >= MAX_STAGE as i32
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tool {
    Axe { power: i32 },
    Pickaxe,
    Hoe,
    MeleeWeapon,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToolOutcome {
    /// The tool had no effect.
    Unaffected,
    Damaged,
    /// The tree fell and was left as a stump.
    Felled,
    /// The tree should be removed from its location.
    Removed,
}

/// Actively simulated tree.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Tree {
    pub(crate) growth_stage: u8,
    pub species: Species,
    pub health: i32,
    pub flipped: bool,
    pub stump: bool,
    pub tapped: bool,
    pub has_seed: bool,
    pub(crate) skip_update: bool,
}

impl Tree {
    pub fn new(species: Species, growth_stage: i32) -> Result<Self, TreeError> {
        Self::from_record(TreeRecord::new(species, growth_stage))
    }

    /// Fresh stage 0 tree.
    pub fn seed(species: Species) -> Self {
        Self {
            growth_stage: 0,
            species,
            health: STARTING_HEALTH,
            flipped: false,
            stump: false,
            tapped: false,
            has_seed: false,
            skip_update: false,
        }
    }

    /// Sapling planted by a parent during its own daily pass; it sits out
    /// its first update.
    pub fn offspring(species: Species) -> Self {
        Self {
            skip_update: true,
            ..Self::seed(species)
        }
    }

    pub fn from_record(record: TreeRecord) -> Result<Self, TreeError> {
        let growth_stage = u8::try_from(record.growth_stage)
            .ok()
            .filter(|stage| *stage <= MAX_STAGE)
            .ok_or(TreeError::InvalidState {
                stage: record.growth_stage,
            })?;
        Ok(Self {
            growth_stage,
            species: record.species,
            health: record.health,
            flipped: record.flipped,
            stump: record.stump,
            tapped: record.tapped,
            has_seed: record.has_seed,
            skip_update: false,
        })
    }

    pub fn to_record(&self) -> TreeRecord {
        TreeRecord {
            growth_stage: self.growth_stage as i32,
            species: self.species,
            health: self.health,
            flipped: self.flipped,
            stump: self.stump,
            tapped: self.tapped,
            has_seed: self.has_seed,
        }
    }

    pub fn growth_stage(&self) -> u8 {
        self.growth_stage
    }

    pub fn is_mature(&self) -> bool {
        self.growth_stage >= MAX_STAGE
    }

    pub fn skips_next_update(&self) -> bool {
        self.skip_update
    }

    pub fn is_marked_for_destruction(&self) -> bool {
        self.health <= DESTROYED_HEALTH
    }

    pub fn is_passable(&self, config: &TreeConfig) -> bool {
        self.health <= PASSABLE_HEALTH || self.growth_stage <= config.max_passable_growth_stage
    }

    pub fn apply_tool(&mut self, tool: Tool, config: &TreeConfig) -> ToolOutcome {
        match tool {
            Tool::MeleeWeapon if config.prevent_scythe => ToolOutcome::Unaffected,
            Tool::MeleeWeapon if self.growth_stage <= 1 => ToolOutcome::Removed,
            Tool::MeleeWeapon => ToolOutcome::Unaffected,
            Tool::Axe { .. } | Tool::Pickaxe | Tool::Hoe if !self.is_mature() => {
                ToolOutcome::Removed
            }
            Tool::Axe { power } => {
                self.health -= power.max(1);
                if self.health > 0 {
                    ToolOutcome::Damaged
                } else if self.stump {
                    ToolOutcome::Removed
                } else {
                    self.stump = true;
                    self.health = STUMP_HEALTH;
                    self.has_seed = false;
                    ToolOutcome::Felled
                }
            }
            Tool::Pickaxe | Tool::Hoe => ToolOutcome::Unaffected,
        }
    }
}
