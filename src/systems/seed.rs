use crate::rng::RandomSource;
use crate::systems::DailyContext;
use crate::tree::Tree;

/// Rolls for a seed on mature, standing trees.
pub fn populate_seed(tree: &mut Tree, ctx: &DailyContext<'_>, rng: &mut dyn RandomSource) {
    if !tree.is_mature() || tree.stump {
        return;
    }
    if !ctx.config.do_seeds_persist {
        tree.has_seed = false;
    }
    if rng.uniform() < ctx.config.daily_seed_chance {
        tree.has_seed = true;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calendar::Season;
    use crate::config::TreeConfig;
    use crate::rng::ScriptedRng;
    use crate::tree::Species;

    #[test]
    fn non_persistent_seed_is_cleared_on_failed_roll() {
        let config = TreeConfig {
            do_seeds_persist: false,
            daily_seed_chance: 0.0,
            ..TreeConfig::default()
        };
        let ctx = DailyContext::new(Season::Fall, 2, &config);
        let mut tree = Tree::new(Species::Oak, 5).unwrap();
        tree.has_seed = true;
        populate_seed(&mut tree, &ctx, &mut ScriptedRng::constant(0.0));
        assert!(!tree.has_seed);
    }

    #[test]
    fn persistent_seed_survives_failed_roll() {
        let config = TreeConfig {
            do_seeds_persist: true,
            daily_seed_chance: 0.1,
            ..TreeConfig::default()
        };
        let ctx = DailyContext::new(Season::Fall, 2, &config);
        let mut tree = Tree::new(Species::Oak, 5).unwrap();
        tree.has_seed = true;
        populate_seed(&mut tree, &ctx, &mut ScriptedRng::constant(0.5));
        assert!(tree.has_seed);
    }

    #[test]
    fn immature_trees_and_stumps_never_seed() {
        let config = TreeConfig {
            daily_seed_chance: 1.0,
            ..TreeConfig::default()
        };
        let ctx = DailyContext::new(Season::Fall, 2, &config);
        let mut rng = ScriptedRng::constant(0.0);

        let mut young = Tree::new(Species::Oak, 4).unwrap();
        populate_seed(&mut young, &ctx, &mut rng);
        assert!(!young.has_seed);

        let mut stump = Tree::new(Species::Oak, 5).unwrap();
        stump.stump = true;
        populate_seed(&mut stump, &ctx, &mut rng);
        assert!(!stump.has_seed);
        assert_eq!(rng.uniform_draws(), 0);
    }
}
