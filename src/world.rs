use std::collections::BTreeMap;

use serde::Serialize;

use crate::location::{Feature, GridLocation, Location};
use crate::tree::Species;

/// Supplies the locations simulated on a given day.
pub trait WorldProvider {
    /// Only the authoritative party runs the daily tick.
    fn is_authoritative(&self) -> bool;
    fn active_location_names(&self) -> Vec<String>;
    fn location_mut(&mut self, name: &str) -> Option<&mut dyn Location>;
}

#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize)]
pub struct SpeciesCensus {
    pub total: usize,
    pub mature: usize,
    pub stumps: usize,
    pub with_seed: usize,
}

#[derive(Debug, Default, Clone, Serialize)]
pub struct Census {
    pub trees: usize,
    pub species: BTreeMap<Species, SpeciesCensus>,
}

pub struct World {
    authoritative: bool,
    locations: Vec<GridLocation>,
}

impl World {
    pub fn new(authoritative: bool) -> Self {
        Self {
            authoritative,
            locations: Vec::new(),
        }
    }

    pub fn add_location(&mut self, location: GridLocation) -> &mut GridLocation {
        self.locations.push(location);
        let last = self.locations.len() - 1;
        &mut self.locations[last]
    }

    pub fn location(&self, name: &str) -> Option<&GridLocation> {
        self.locations.iter().find(|location| location.name() == name)
    }

    pub fn locations(&self) -> &[GridLocation] {
        &self.locations
    }

    /// Counts trees in either representation.
    pub fn census(&self) -> Census {
        let mut census = Census::default();
        for location in &self.locations {
            for (_, feature) in location.features() {
                let (species, mature, stump, has_seed) = match feature {
                    Feature::Tree(tree) => {
                        (tree.species, tree.is_mature(), tree.stump, tree.has_seed)
                    }
                    Feature::PassiveTree(record) => (
                        record.species,
                        record.is_mature(),
                        record.stump,
                        record.has_seed,
                    ),
                    Feature::Grass | Feature::Other(_) => continue,
                };
                census.trees += 1;
                let entry = census.species.entry(species).or_default();
                entry.total += 1;
                entry.mature += usize::from(mature);
                entry.stumps += usize::from(stump);
                entry.with_seed += usize::from(has_seed);
            }
        }
        census
    }
}

impl WorldProvider for World {
    fn is_authoritative(&self) -> bool {
        self.authoritative
    }

    fn active_location_names(&self) -> Vec<String> {
        self.locations
            .iter()
            .map(|location| location.name().to_string())
            .collect()
    }

    fn location_mut(&mut self, name: &str) -> Option<&mut dyn Location> {
        self.locations
            .iter_mut()
            .find(|location| location.name() == name)
            .map(|location| location as &mut dyn Location)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::location::{LocationKind, Position};
    use crate::tree::{Tree, TreeRecord};

    #[test]
    fn census_counts_both_representations() {
        let mut world = World::new(true);
        world.add_location(
            GridLocation::new("Farm", LocationKind::Farm, 8, 8)
                .with_feature(Position::new(1, 1), Feature::PassiveTree(TreeRecord::new(Species::Oak, 5)))
                .with_feature(Position::new(2, 2), Feature::Tree(Tree::seed(Species::Oak)))
                .with_feature(Position::new(3, 3), Feature::Grass),
        );
        let census = world.census();
        assert_eq!(census.trees, 2);
        let oak = &census.species[&Species::Oak];
        assert_eq!(oak.total, 2);
        assert_eq!(oak.mature, 1);
    }

    #[test]
    fn unknown_location_is_absent() {
        let mut world = World::new(true);
        assert!(world.location_mut("Nowhere").is_none());
    }
}
