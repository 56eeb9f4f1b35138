use crate::location::{Feature, Location, Position};
use crate::rng::RandomSource;
use crate::systems::DailyContext;
use crate::tree::{Tree, MAX_STAGE};

/// Candidate tiles lie within this many tiles of the parent on each axis.
pub const SPREAD_RADIUS: i32 = 3;

/// Sapling the parent planted this day, still to be written into the
/// location.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Spread {
    pub position: Position,
    pub sapling: Tree,
    pub replaced_grass: bool,
}

/// Picks one random tile near a mature tree and plants a sapling there if
/// the tile allows it. A blocked tile wastes the attempt without touching
/// the parent's seed.
pub fn try_spread(
    tree: &mut Tree,
    location: &dyn Location,
    position: Position,
    ctx: &DailyContext<'_>,
    rng: &mut dyn RandomSource,
) -> Option<Spread> {
    let config = ctx.config;
    if !location.is_farm_like()
        || tree.growth_stage < MAX_STAGE
        || (ctx.is_winter() && !config.do_spread_in_winter)
        || (tree.tapped && !config.do_tapped_spread)
        || tree.stump
    {
        return None;
    }

    if rng.uniform() >= config.daily_spread_chance {
        return None;
    }
    let dx = rng.int_range(-SPREAD_RADIUS, SPREAD_RADIUS + 1);
    let dy = rng.int_range(-SPREAD_RADIUS, SPREAD_RADIUS + 1);
    let target = position.offset(dx, dy);

    if config.seeds_replace_grass && matches!(location.feature_at(target), Some(Feature::Grass)) {
        tree.has_seed = false;
        return Some(Spread {
            position: target,
            sapling: Tree::seed(tree.species),
            replaced_grass: true,
        });
    }

    if location.is_open_at(target)
        && !location.is_occupied_at(target)
        && !location.has_water_at(target)
        && location.in_bounds(target)
    {
        tree.has_seed = false;
        return Some(Spread {
            position: target,
            sapling: Tree::offspring(tree.species),
            replaced_grass: false,
        });
    }

    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calendar::Season;
    use crate::config::TreeConfig;
    use crate::location::{GridLocation, LocationKind};
    use crate::rng::ScriptedRng;
    use crate::tree::Species;

    const PARENT: Position = Position::new(5, 5);

    fn always_spread() -> TreeConfig {
        TreeConfig {
            daily_spread_chance: 1.0,
            ..TreeConfig::default()
        }
    }

    fn farm() -> GridLocation {
        GridLocation::new("Farm", LocationKind::Farm, 12, 12)
    }

    fn parent() -> Tree {
        let mut tree = Tree::new(Species::Oak, 5).unwrap();
        tree.has_seed = true;
        tree
    }

    #[test]
    fn plants_offspring_on_open_tile() {
        let config = always_spread();
        let ctx = DailyContext::new(Season::Summer, 1, &config);
        let mut tree = parent();
        let mut rng = ScriptedRng::constant(0.0).with_ints([2, -3]);

        let spread = try_spread(&mut tree, &farm(), PARENT, &ctx, &mut rng).unwrap();
        assert_eq!(spread.position, Position::new(7, 2));
        assert_eq!(spread.sapling.growth_stage(), 0);
        assert_eq!(spread.sapling.species, Species::Oak);
        assert!(spread.sapling.skips_next_update());
        assert!(!tree.has_seed);
    }

    #[test]
    fn blocked_tile_keeps_seed() {
        let config = always_spread();
        let ctx = DailyContext::new(Season::Summer, 1, &config);
        let mut tree = parent();
        let mut location = farm().with_feature(PARENT, Feature::Tree(tree));
        location.add_water(Position::new(6, 5));

        let mut rng = ScriptedRng::constant(0.0).with_ints([1, 0]);
        assert!(try_spread(&mut tree, &location, PARENT, &ctx, &mut rng).is_none());
        assert!(tree.has_seed);

        // Its own tile is occupied by the parent itself.
        let mut rng = ScriptedRng::constant(0.0).with_ints([0, 0]);
        assert!(try_spread(&mut tree, &location, PARENT, &ctx, &mut rng).is_none());

        let corner = Position::new(0, 0);
        let mut rng = ScriptedRng::constant(0.0).with_ints([-3, -3]);
        assert!(try_spread(&mut tree, &location, corner, &ctx, &mut rng).is_none());
        assert!(tree.has_seed);
    }

    #[test]
    fn grass_is_replaced_when_enabled() {
        let config = TreeConfig {
            seeds_replace_grass: true,
            ..always_spread()
        };
        let ctx = DailyContext::new(Season::Summer, 1, &config);
        let location = farm().with_feature(Position::new(4, 4), Feature::Grass);
        let mut tree = parent();
        let mut rng = ScriptedRng::constant(0.0).with_ints([-1, -1]);

        let spread = try_spread(&mut tree, &location, PARENT, &ctx, &mut rng).unwrap();
        assert!(spread.replaced_grass);
        assert!(!spread.sapling.skips_next_update());
        assert!(!tree.has_seed);

        let plain = always_spread();
        let ctx = DailyContext::new(Season::Summer, 1, &plain);
        let mut rng = ScriptedRng::constant(0.0).with_ints([-1, -1]);
        assert!(try_spread(&mut parent(), &location, PARENT, &ctx, &mut rng).is_none());
    }

    #[test]
    fn preconditions_gate_the_draw() {
        let config = TreeConfig {
            do_tapped_spread: false,
            do_spread_in_winter: false,
            ..always_spread()
        };
        let summer = DailyContext::new(Season::Summer, 1, &config);
        let winter = DailyContext::new(Season::Winter, 1, &config);
        let mut rng = ScriptedRng::constant(0.0);

        let mut tapped = parent();
        tapped.tapped = true;
        assert!(try_spread(&mut tapped, &farm(), PARENT, &summer, &mut rng).is_none());
        assert!(try_spread(&mut parent(), &farm(), PARENT, &winter, &mut rng).is_none());

        let mut young = Tree::new(Species::Oak, 4).unwrap();
        assert!(try_spread(&mut young, &farm(), PARENT, &summer, &mut rng).is_none());

        let forest = GridLocation::new("Forest", LocationKind::Outdoor, 12, 12);
        assert!(try_spread(&mut parent(), &forest, PARENT, &summer, &mut rng).is_none());
        assert_eq!(rng.uniform_draws(), 0);
    }
}
