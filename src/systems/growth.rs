use crate::location::{Location, Position};
use crate::rng::RandomSource;
use crate::systems::{is_shaded, DailyContext};
use crate::tree::{Tree, MAX_STAGE};

/// Advances the growth stage by at most one step (or straight to mature
/// with instant growth).
pub fn try_increase_stage(
    tree: &mut Tree,
    location: &dyn Location,
    position: Position,
    ctx: &DailyContext<'_>,
    rng: &mut dyn RandomSource,
) {
    let config = ctx.config;
    if tree.growth_stage >= MAX_STAGE || tree.stump {
        return;
    }
    if tree.growth_stage >= config.max_shaded_growth_stage && is_shaded(location, position) {
        return;
    }

    // Hibernating species never grow through winter while hibernation is on.
    if ctx.experiencing_winter(location)
        && (!config.do_grow_in_winter
            || (tree.species.hibernates() && config.do_mushroom_trees_hibernate))
    {
        return;
    }

    if config.do_grow_instantly {
        tree.growth_stage = MAX_STAGE;
    } else if rng.uniform() < config.daily_growth_chance {
        tree.growth_stage += 1;
    }
}
