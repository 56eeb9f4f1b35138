use crate::calendar::Season;
use crate::location::{Location, Position};
use crate::systems::{is_shaded, DailyContext};
use crate::tree::{Tree, STARTING_HEALTH, STUMP_HEALTH};

/// Seasonal stump cycle for hibernating species: stump through winter, wake
/// on the first day of spring.
pub fn manage_hibernation(
    tree: &mut Tree,
    location: &dyn Location,
    position: Position,
    ctx: &DailyContext<'_>,
) {
    if !tree.species.hibernates()
        || !ctx.config.do_mushroom_trees_hibernate
        || !location.experiences_winter()
    {
        return;
    }

    match ctx.season {
        Season::Winter => {
            tree.stump = true;
            tree.health = STUMP_HEALTH;
        }
        Season::Spring if ctx.day_of_month <= 1 => {
            regrow_if_not_shaded(tree, location, position);
        }
        _ => {}
    }
}

/// Restores a stump to a standing tree unless a neighbour shades it.
pub fn regrow_if_not_shaded(tree: &mut Tree, location: &dyn Location, position: Position) {
    if is_shaded(location, position) {
        return;
    }
    tree.stump = false;
    tree.health = STARTING_HEALTH;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::TreeConfig;
    use crate::location::{Feature, GridLocation, LocationKind};
    use crate::tree::Species;

    const POS: Position = Position::new(2, 2);

    fn farm() -> GridLocation {
        GridLocation::new("Farm", LocationKind::Farm, 6, 6)
    }

    #[test]
    fn winter_turns_mushroom_into_stump_idempotently() {
        let config = TreeConfig::default();
        let ctx = DailyContext::new(Season::Winter, 4, &config);
        let mut tree = Tree::new(Species::Mushroom, 5).unwrap();

        manage_hibernation(&mut tree, &farm(), POS, &ctx);
        let once = tree;
        manage_hibernation(&mut tree, &farm(), POS, &ctx);

        assert!(tree.stump);
        assert_eq!(tree.health, STUMP_HEALTH);
        assert_eq!(tree, once);
    }

    #[test]
    fn spring_first_day_wakes_unshaded_stump() {
        let config = TreeConfig::default();
        let mut tree = Tree::new(Species::Mushroom, 5).unwrap();
        tree.stump = true;
        tree.health = STUMP_HEALTH;

        let later = DailyContext::new(Season::Spring, 2, &config);
        manage_hibernation(&mut tree, &farm(), POS, &later);
        assert!(tree.stump);

        let first = DailyContext::new(Season::Spring, 1, &config);
        manage_hibernation(&mut tree, &farm(), POS, &first);
        assert!(!tree.stump);
        assert_eq!(tree.health, STARTING_HEALTH);
    }

    #[test]
    fn shaded_stump_stays_dormant() {
        let config = TreeConfig::default();
        let ctx = DailyContext::new(Season::Spring, 1, &config);
        let location = farm().with_feature(
            Position::new(3, 3),
            Feature::Tree(Tree::new(Species::Oak, 5).unwrap()),
        );
        let mut tree = Tree::new(Species::Mushroom, 5).unwrap();
        tree.stump = true;
        tree.health = STUMP_HEALTH;
        manage_hibernation(&mut tree, &location, POS, &ctx);
        assert!(tree.stump);
        assert_eq!(tree.health, STUMP_HEALTH);
    }

    #[test]
    fn ordinary_species_and_indoor_locations_are_ignored() {
        let config = TreeConfig::default();
        let ctx = DailyContext::new(Season::Winter, 4, &config);

        let mut oak = Tree::new(Species::Oak, 5).unwrap();
        manage_hibernation(&mut oak, &farm(), POS, &ctx);
        assert!(!oak.stump);

        let greenhouse = GridLocation::new("Greenhouse", LocationKind::Indoor, 6, 6);
        let mut mushroom = Tree::new(Species::Mushroom, 5).unwrap();
        manage_hibernation(&mut mushroom, &greenhouse, POS, &ctx);
        assert!(!mushroom.stump);
    }
}
