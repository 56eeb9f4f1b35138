//! Per-tree daily rules, run by the orchestrator in a fixed order.

mod growth;
mod hibernation;
mod regrowth;
mod seed;
mod shade;
mod spread;

pub use growth::try_increase_stage;
pub use hibernation::{manage_hibernation, regrow_if_not_shaded};
pub use regrowth::try_regrow;
pub use seed::populate_seed;
pub use shade::is_shaded;
pub use spread::{try_spread, Spread, SPREAD_RADIUS};

use crate::calendar::Season;
use crate::config::TreeConfig;
use crate::location::Location;

/// Everything a rule needs to know about the day being simulated.
#[derive(Debug, Clone, Copy)]
pub struct DailyContext<'a> {
    pub season: Season,
    pub day_of_month: u32,
    pub config: &'a TreeConfig,
}

impl<'a> DailyContext<'a> {
    pub fn new(season: Season, day_of_month: u32, config: &'a TreeConfig) -> Self {
        Self {
            season,
            day_of_month,
            config,
        }
    }

    pub fn is_winter(&self) -> bool {
        self.season == Season::Winter
    }

    /// Winter only bites in locations that have one.
    pub fn experiencing_winter(&self, location: &dyn Location) -> bool {
        self.is_winter() && location.experiences_winter()
    }
}
