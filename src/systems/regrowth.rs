use crate::location::{Location, Position};
use crate::rng::RandomSource;
use crate::systems::{regrow_if_not_shaded, DailyContext};
use crate::tree::Tree;

/// Chance-based stump recovery for hibernating species outside the
/// winter to spring transition.
pub fn try_regrow(
    tree: &mut Tree,
    location: &dyn Location,
    position: Position,
    ctx: &DailyContext<'_>,
    rng: &mut dyn RandomSource,
) {
    let config = ctx.config;
    if !tree.species.hibernates() || !config.do_mushroom_trees_regrow || !tree.stump {
        return;
    }

    let winter_permits = !ctx.experiencing_winter(location)
        || (!config.do_mushroom_trees_hibernate && config.do_grow_in_winter);
    if !winter_permits {
        return;
    }

    if config.do_grow_instantly || rng.uniform() < config.daily_growth_chance / 2.0 {
        regrow_if_not_shaded(tree, location, position);
    }
}
