use std::{
    fs,
    path::{Path, PathBuf},
};

use anyhow::{Context, Result};
use serde::Deserialize;

use crate::calendar::Date;
use crate::config::{LoggingConfig, TreeConfig};
use crate::location::{Feature, GridLocation, LocationKind, Position};
use crate::tree::TreeRecord;
use crate::world::World;

fn default_authoritative() -> bool {
    true
}

#[derive(Debug, Clone, Deserialize)]
pub struct Scenario {
    pub name: String,
    pub description: Option<String>,
    pub seed: u64,
    #[serde(default)]
    pub days: Option<u64>,
    #[serde(default)]
    pub start: Date,
    #[serde(default = "default_authoritative")]
    pub authoritative: bool,
    #[serde(default)]
    pub config: TreeConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
    pub locations: Vec<ScenarioLocation>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ScenarioLocation {
    pub name: String,
    pub kind: LocationKind,
    pub width: i32,
    pub height: i32,
    #[serde(default)]
    pub water: Vec<Position>,
    #[serde(default)]
    pub no_spawn: Vec<NoSpawnTile>,
    #[serde(default)]
    pub objects: Vec<Position>,
    #[serde(default)]
    pub blocked: Vec<Position>,
    #[serde(default)]
    pub grass: Vec<Position>,
    #[serde(default)]
    pub other: Vec<OtherFeature>,
    #[serde(default)]
    pub trees: Vec<ScenarioTree>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct NoSpawnTile {
    pub x: i32,
    pub y: i32,
    pub value: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct OtherFeature {
    pub x: i32,
    pub y: i32,
    pub kind: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ScenarioTree {
    pub x: i32,
    pub y: i32,
    #[serde(flatten)]
    pub record: TreeRecord,
}

pub struct ScenarioLoader {
    base_dir: PathBuf,
}

impl ScenarioLoader {
    pub fn new(base_dir: impl AsRef<Path>) -> Self {
        Self {
            base_dir: base_dir.as_ref().to_path_buf(),
        }
    }

    pub fn load(&self, file: impl AsRef<Path>) -> Result<Scenario> {
        let path = self.base_dir.join(file);
        let data = fs::read_to_string(&path)
            .with_context(|| format!("Failed to read scenario file {}", path.display()))?;
        let scenario: Scenario = serde_yaml::from_str(&data)
            .with_context(|| format!("Failed to parse {}", path.display()))?;
        scenario
            .config
            .validate()
            .with_context(|| format!("Invalid tree config in {}", path.display()))?;
        Ok(scenario)
    }
}

impl Scenario {
    /// Lays out the locations with every tree in passive form.
    pub fn build_world(&self) -> World {
        let mut world = World::new(self.authoritative);
        for spec in &self.locations {
            let mut location = GridLocation::new(&spec.name, spec.kind, spec.width, spec.height);
            for &position in &spec.water {
                location.add_water(position);
            }
            for tile in &spec.no_spawn {
                location.set_no_spawn(Position::new(tile.x, tile.y), tile.value.clone());
            }
            for &position in &spec.objects {
                location.place_object(position);
            }
            for &position in &spec.blocked {
                location.block_tile(position);
            }
            for &position in &spec.grass {
                location = location.with_feature(position, Feature::Grass);
            }
            for other in &spec.other {
                location = location.with_feature(
                    Position::new(other.x, other.y),
                    Feature::Other(other.kind.clone()),
                );
            }
            for tree in &spec.trees {
                location = location.with_feature(
                    Position::new(tree.x, tree.y),
                    Feature::PassiveTree(tree.record),
                );
            }
            world.add_location(location);
        }
        world
    }

    pub fn days(&self, override_days: Option<u64>) -> u64 {
        override_days.or(self.days).unwrap_or(28)
    }
}
