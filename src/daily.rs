//! Once-per-day update of every tree in a location.

use std::collections::BTreeSet;

use log::debug;
use serde::Serialize;

use crate::location::{Feature, Location, Position};
use crate::rng::RandomSource;
use crate::systems::{
    manage_hibernation, populate_seed, try_increase_stage, try_regrow, try_spread, DailyContext,
    Spread,
};
use crate::tree::Tree;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum DayOutcome {
    /// Health fell to the destruction threshold; the tree leaves the location.
    Destroyed,
    /// Nothing ran this day.
    Skipped,
    Active,
}

#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize)]
pub struct LocationReport {
    pub location: String,
    pub active: usize,
    pub skipped: usize,
    pub destroyed: usize,
    pub planted: usize,
    pub replaced_grass: usize,
}

impl LocationReport {
    fn record(&mut self, outcome: DayOutcome) {
        match outcome {
            DayOutcome::Destroyed => self.destroyed += 1,
            DayOutcome::Skipped => self.skipped += 1,
            DayOutcome::Active => self.active += 1,
        }
    }
}

/// A tree under a `NoSpawn` tile, or a seed buried under a placed object,
/// sits the day out.
fn can_grow(tree: &Tree, location: &dyn Location, position: Position) -> bool {
    let blocked_seed = tree.growth_stage() == 0 && location.has_object_at(position);
    !location.no_spawn_at(position) && !blocked_seed
}

/// Runs one day for a single tree. The location is only read; any sapling
/// the tree plants is handed back for the caller to insert.
pub fn update_tree(
    tree: &mut Tree,
    location: &dyn Location,
    position: Position,
    ctx: &DailyContext<'_>,
    rng: &mut dyn RandomSource,
) -> (DayOutcome, Option<Spread>) {
    if tree.is_marked_for_destruction() {
        return (DayOutcome::Destroyed, None);
    }
    if tree.skip_update || !can_grow(tree, location, position) {
        tree.skip_update = false;
        return (DayOutcome::Skipped, None);
    }

    // Spread sees the tree as it was before today's growth.
    let spread = try_spread(tree, location, position, ctx, rng);
    try_increase_stage(tree, location, position, ctx, rng);
    manage_hibernation(tree, location, position, ctx);
    try_regrow(tree, location, position, ctx, rng);
    populate_seed(tree, ctx, rng);
    (DayOutcome::Active, spread)
}

/// Updates the active trees present when the pass starts, in position
/// order. Each tree is written back before the next one runs, so later
/// trees see earlier neighbours' new state. Saplings planted during the
/// pass are not visited until the next day, including those that took over
/// a grass tile already in the snapshot.
pub fn update_location(
    location: &mut dyn Location,
    ctx: &DailyContext<'_>,
    rng: &mut dyn RandomSource,
) -> LocationReport {
    let mut report = LocationReport {
        location: location.name().to_string(),
        ..LocationReport::default()
    };
    let mut destroyed = Vec::new();
    let mut planted = BTreeSet::new();

    for position in location.feature_positions() {
        if planted.contains(&position) {
            continue;
        }
        let mut tree = match location.feature_at(position) {
            Some(Feature::Tree(tree)) => *tree,
            _ => continue,
        };
        let (outcome, spread) = update_tree(&mut tree, &*location, position, ctx, rng);
        report.record(outcome);
        location.set_feature(position, Feature::Tree(tree));

        if outcome == DayOutcome::Destroyed {
            destroyed.push(position);
        }
        if let Some(spread) = spread {
            if spread.replaced_grass {
                report.replaced_grass += 1;
            } else {
                report.planted += 1;
            }
            planted.insert(spread.position);
            location.set_feature(spread.position, Feature::Tree(spread.sapling));
        }
    }

    // Destroyed trees keep shading neighbours until the pass ends.
    for position in destroyed {
        location.remove_feature(position);
    }

    debug!(
        "{}: {} active, {} skipped, {} destroyed, {} planted, {} grass replaced",
        report.location,
        report.active,
        report.skipped,
        report.destroyed,
        report.planted,
        report.replaced_grass
    );
    report
}
