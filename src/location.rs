//! Locations and the terrain features placed on them

use std::collections::{BTreeMap, BTreeSet};

use serde::{Deserialize, Serialize};

use crate::tree::{Tree, TreeRecord, MAX_STAGE};

/// Tile coordinate inside a location.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Position {
    pub x: i32,
    pub y: i32,
}

impl Position {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    pub fn offset(self, dx: i32, dy: i32) -> Self {
        Self::new(self.x + dx, self.y + dy)
    }

    /// The 8 tiles around this one.
    pub fn surrounding(self) -> [Position; 8] {
        [
            self.offset(-1, -1),
            self.offset(0, -1),
            self.offset(1, -1),
            self.offset(-1, 0),
            self.offset(1, 0),
            self.offset(-1, 1),
            self.offset(0, 1),
            self.offset(1, 1),
        ]
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Feature {
    /// Tree under active simulation.
    Tree(Tree),
    /// Tree held in its persisted form.
    PassiveTree(TreeRecord),
    Grass,
    Other(String),
}

impl Feature {
    /// Mature, standing trees cast shade on their neighbours.
    pub fn casts_shade(&self) -> bool {
        match self {
            Feature::Tree(tree) => tree.growth_stage() >= MAX_STAGE && !tree.stump,
            Feature::PassiveTree(record) => record.is_mature() && !record.stump,
            Feature::Grass | Feature::Other(_) => false,
        }
    }

    pub fn as_tree(&self) -> Option<&Tree> {
        match self {
            Feature::Tree(tree) => Some(tree),
            _ => None,
        }
    }
}

/// World surface the engine reads and writes.
pub trait Location {
    fn name(&self) -> &str;
    fn feature_at(&self, position: Position) -> Option<&Feature>;
    fn set_feature(&mut self, position: Position, feature: Feature) -> Option<Feature>;
    fn remove_feature(&mut self, position: Position) -> Option<Feature>;
    /// Positions holding a feature, in a stable order.
    fn feature_positions(&self) -> Vec<Position>;

    fn is_farm_like(&self) -> bool;
    fn is_outdoors(&self) -> bool;
    fn is_desert(&self) -> bool;
    fn has_water_at(&self, position: Position) -> bool;
    fn is_open_at(&self, position: Position) -> bool;
    fn is_occupied_at(&self, position: Position) -> bool;
    fn in_bounds(&self, position: Position) -> bool;
    fn no_spawn_at(&self, position: Position) -> bool;
    fn has_object_at(&self, position: Position) -> bool;

    fn experiences_winter(&self) -> bool {
        self.is_outdoors() && !self.is_desert()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LocationKind {
    Farm,
    Outdoor,
    Desert,
    Indoor,
}

/// In-memory location backed by ordered maps.
#[derive(Debug, Clone)]
pub struct GridLocation {
    name: String,
    kind: LocationKind,
    width: i32,
    height: i32,
    features: BTreeMap<Position, Feature>,
    water: BTreeSet<Position>,
    no_spawn: BTreeMap<Position, String>,
    objects: BTreeSet<Position>,
    blocked: BTreeSet<Position>,
}

impl GridLocation {
    pub fn new(name: impl Into<String>, kind: LocationKind, width: i32, height: i32) -> Self {
        Self {
            name: name.into(),
            kind,
            width,
            height,
            features: BTreeMap::new(),
            water: BTreeSet::new(),
            no_spawn: BTreeMap::new(),
            objects: BTreeSet::new(),
            blocked: BTreeSet::new(),
        }
    }

    pub fn kind(&self) -> LocationKind {
        self.kind
    }

    pub fn with_feature(mut self, position: Position, feature: Feature) -> Self {
        self.features.insert(position, feature);
        self
    }

    pub fn add_water(&mut self, position: Position) {
        self.water.insert(position);
    }

    /// Sets the back-layer `NoSpawn` tile property.
    pub fn set_no_spawn(&mut self, position: Position, value: impl Into<String>) {
        self.no_spawn.insert(position, value.into());
    }

    pub fn place_object(&mut self, position: Position) {
        self.objects.insert(position);
    }

    pub fn block_tile(&mut self, position: Position) {
        self.blocked.insert(position);
    }

    pub fn features(&self) -> impl Iterator<Item = (&Position, &Feature)> {
        self.features.iter()
    }

    pub fn tree_at(&self, position: Position) -> Option<&Tree> {
        self.features.get(&position).and_then(Feature::as_tree)
    }
}

impl Location for GridLocation {
    fn name(&self) -> &str {
        &self.name
    }

    fn feature_at(&self, position: Position) -> Option<&Feature> {
        self.features.get(&position)
    }

    fn set_feature(&mut self, position: Position, feature: Feature) -> Option<Feature> {
        self.features.insert(position, feature)
    }

    fn remove_feature(&mut self, position: Position) -> Option<Feature> {
        self.features.remove(&position)
    }

    fn feature_positions(&self) -> Vec<Position> {
        self.features.keys().copied().collect()
    }

    fn is_farm_like(&self) -> bool {
        self.kind == LocationKind::Farm
    }

    fn is_outdoors(&self) -> bool {
        self.kind != LocationKind::Indoor
    }

    fn is_desert(&self) -> bool {
        self.kind == LocationKind::Desert
    }

    fn has_water_at(&self, position: Position) -> bool {
        self.water.contains(&position)
    }

    fn is_open_at(&self, position: Position) -> bool {
        !self.blocked.contains(&position)
    }

    fn is_occupied_at(&self, position: Position) -> bool {
        self.features.contains_key(&position) || self.objects.contains(&position)
    }

    fn in_bounds(&self, position: Position) -> bool {
        (0..self.width).contains(&position.x) && (0..self.height).contains(&position.y)
    }

    fn no_spawn_at(&self, position: Position) -> bool {
        self.no_spawn
            .get(&position)
            .is_some_and(|value| matches!(value.as_str(), "All" | "Tree" | "True"))
    }

    fn has_object_at(&self, position: Position) -> bool {
        self.objects.contains(&position)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tree::Species;

    #[test]
    fn only_tree_related_no_spawn_values_block() {
        let mut location = GridLocation::new("Farm", LocationKind::Farm, 10, 10);
        location.set_no_spawn(Position::new(1, 1), "Tree");
        location.set_no_spawn(Position::new(2, 2), "Grass");
        assert!(location.no_spawn_at(Position::new(1, 1)));
        assert!(!location.no_spawn_at(Position::new(2, 2)));
        assert!(!location.no_spawn_at(Position::new(3, 3)));
    }

    #[test]
    fn deserts_and_indoors_skip_winter() {
        assert!(GridLocation::new("Farm", LocationKind::Farm, 1, 1).experiences_winter());
        assert!(!GridLocation::new("Desert", LocationKind::Desert, 1, 1).experiences_winter());
        assert!(!GridLocation::new("Greenhouse", LocationKind::Indoor, 1, 1).experiences_winter());
    }

    #[test]
    fn stumps_and_saplings_cast_no_shade() {
        let mut stump = TreeRecord::new(Species::Oak, 5);
        stump.stump = true;
        assert!(!Feature::PassiveTree(stump).casts_shade());
        assert!(!Feature::Tree(Tree::seed(Species::Oak)).casts_shade());
        assert!(Feature::PassiveTree(TreeRecord::new(Species::Oak, 5)).casts_shade());
    }

    #[test]
    fn bounds_are_half_open() {
        let location = GridLocation::new("Farm", LocationKind::Farm, 4, 3);
        assert!(location.in_bounds(Position::new(3, 2)));
        assert!(!location.in_bounds(Position::new(4, 0)));
        assert!(!location.in_bounds(Position::new(0, -1)));
    }
}
