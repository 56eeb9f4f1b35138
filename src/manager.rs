//! Switches trees between their passive and simulated representations at
//! the host's lifecycle boundaries.

use log::{trace, warn};

use crate::location::{Feature, Location, Position};
use crate::tree::{Tree, TreeError};
use crate::world::WorldProvider;

/// Passive to active.
fn activate(feature: &Feature) -> Result<Option<Feature>, TreeError> {
    match feature {
        Feature::PassiveTree(record) => Ok(Some(Feature::Tree(Tree::from_record(*record)?))),
        _ => Ok(None),
    }
}

/// Active to passive.
fn suspend(feature: &Feature) -> Result<Option<Feature>, TreeError> {
    match feature {
        Feature::Tree(tree) => Ok(Some(Feature::PassiveTree(tree.to_record()))),
        _ => Ok(None),
    }
}

fn convert_at(
    location: &mut dyn Location,
    positions: &[Position],
    converter: fn(&Feature) -> Result<Option<Feature>, TreeError>,
) -> Result<usize, TreeError> {
    let mut replacements = Vec::new();
    for &position in positions {
        if let Some(feature) = location.feature_at(position) {
            if let Some(replacement) = converter(feature)? {
                replacements.push((position, replacement));
            }
        }
    }
    let count = replacements.len();
    for (position, replacement) in replacements {
        location.set_feature(position, replacement);
    }
    Ok(count)
}

pub fn activate_location(location: &mut dyn Location) -> Result<usize, TreeError> {
    let positions = location.feature_positions();
    let count = convert_at(location, &positions, activate)?;
    if count > 0 {
        trace!("{} - activated {count} passive trees", location.name());
    }
    Ok(count)
}

pub fn suspend_location(location: &mut dyn Location) -> Result<usize, TreeError> {
    let positions = location.feature_positions();
    let count = convert_at(location, &positions, suspend)?;
    if count > 0 {
        trace!("{} - suspended {count} active trees", location.name());
    }
    Ok(count)
}

/// Tracks whether the simulation currently owns the world's trees.
#[derive(Debug, Default)]
pub struct TreeManager {
    managing: bool,
}

impl TreeManager {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_managing(&self) -> bool {
        self.managing
    }

    fn set_managing(&mut self, value: bool) {
        if value == self.managing {
            return;
        }
        trace!(
            "{} watching for new trees/new areas.",
            if value { "Started" } else { "Stopped" }
        );
        self.managing = value;
    }

    /// Takes over every passive tree in the active locations. A listed name
    /// the world cannot resolve is logged and left to the daily update,
    /// which reports it as an error.
    pub fn start_day<W: WorldProvider + ?Sized>(&mut self, world: &mut W) -> Result<usize, TreeError> {
        trace!("Activating trees in all available areas.");
        let mut total = 0;
        for name in world.active_location_names() {
            match world.location_mut(&name) {
                Some(location) => total += activate_location(location)?,
                None => warn!("Location {name} is listed but missing; no trees activated there."),
            }
        }
        self.set_managing(true);
        Ok(total)
    }

    /// Hands every tree back in passive form, ahead of persistence. Missing
    /// locations are skipped so the remaining ones are still suspended after
    /// a failed day.
    pub fn end_day<W: WorldProvider + ?Sized>(&mut self, world: &mut W) -> Result<usize, TreeError> {
        self.set_managing(false);
        trace!("Suspending trees in all available areas.");
        let mut total = 0;
        for name in world.active_location_names() {
            match world.location_mut(&name) {
                Some(location) => total += suspend_location(location)?,
                None => warn!("Location {name} is listed but missing; no trees suspended there."),
            }
        }
        Ok(total)
    }

    /// A location joined the world while the simulation is running.
    pub fn on_location_added(&self, location: &mut dyn Location) -> Result<usize, TreeError> {
        if !self.managing {
            return Ok(0);
        }
        trace!("Found new area {}; activating any trees.", location.name());
        activate_location(location)
    }

    /// Features were placed while the simulation is running.
    pub fn on_features_added(
        &self,
        location: &mut dyn Location,
        positions: &[Position],
    ) -> Result<usize, TreeError> {
        if !self.managing {
            return Ok(0);
        }
        let count = convert_at(location, positions, activate)?;
        if count > 0 {
            trace!("Feature list changed: {} - activated {count} trees", location.name());
        }
        Ok(count)
    }
}
