use log::info;
use serde::Serialize;
use thiserror::Error;

use crate::calendar::{Calendar, Date};
use crate::config::{ConfigError, TreeConfig};
use crate::daily::{update_location, LocationReport};
use crate::manager::TreeManager;
use crate::rng::RngManager;
use crate::systems::DailyContext;
use crate::tree::TreeError;
use crate::world::WorldProvider;

#[derive(Debug, Error)]
pub enum EngineError {
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error(transparent)]
    Tree(#[from] TreeError),
    #[error("location '{0}' was listed as active but could not be found")]
    MissingLocation(String),
}

pub struct EngineSettings {
    pub scenario_name: String,
    pub seed: u64,
}

#[derive(Debug, Clone, Serialize)]
pub struct DaySummary {
    pub day: u64,
    pub date: Date,
    /// False when this party only observes the simulation.
    pub simulated: bool,
    pub activated: usize,
    pub suspended: usize,
    pub locations: Vec<LocationReport>,
}

impl DaySummary {
    pub fn planted(&self) -> usize {
        self.locations.iter().map(|report| report.planted + report.replaced_grass).sum()
    }

    pub fn destroyed(&self) -> usize {
        self.locations.iter().map(|report| report.destroyed).sum()
    }
}

pub struct Engine {
    settings: EngineSettings,
    config: TreeConfig,
    rng: RngManager,
    manager: TreeManager,
    day: u64,
}

impl Engine {
    pub fn new(settings: EngineSettings, config: TreeConfig) -> Result<Self, EngineError> {
        config.validate()?;
        Ok(Self {
            rng: RngManager::new(settings.seed),
            settings,
            config,
            manager: TreeManager::new(),
            day: 0,
        })
    }

    pub fn config(&self) -> &TreeConfig {
        &self.config
    }

    pub fn manager(&self) -> &TreeManager {
        &self.manager
    }

    pub fn current_day(&self) -> u64 {
        self.day
    }

    /// Simulates one day: take over the trees, run the nightly update on the
    /// authoritative party, then hand the trees back for persistence.
    pub fn run_day<W: WorldProvider + ?Sized>(
        &mut self,
        world: &mut W,
        date: &Date,
    ) -> Result<DaySummary, EngineError> {
        self.day += 1;
        let activated = self.manager.start_day(world)?;

        let simulated = world.is_authoritative();
        let updated = if simulated {
            self.update_locations(world, date)
        } else {
            Ok(Vec::new())
        };

        // Trees go back to passive form even when the update failed.
        let suspended = self.manager.end_day(world)?;
        let locations = updated?;
        let summary = DaySummary {
            day: self.day,
            date: *date,
            simulated,
            activated,
            suspended,
            locations,
        };
        info!(
            "[{}] {}: {} planted, {} destroyed across {} locations",
            self.settings.scenario_name,
            date,
            summary.planted(),
            summary.destroyed(),
            summary.locations.len()
        );
        Ok(summary)
    }

    fn update_locations<W: WorldProvider + ?Sized>(
        &self,
        world: &mut W,
        date: &Date,
    ) -> Result<Vec<LocationReport>, EngineError> {
        let ctx = DailyContext::new(date.season(), date.day_of_month(), &self.config);
        let mut rng = self.rng.day_rng(self.day);
        let mut locations = Vec::new();
        for name in world.active_location_names() {
            let location = world
                .location_mut(&name)
                .ok_or_else(|| EngineError::MissingLocation(name.clone()))?;
            locations.push(update_location(location, &ctx, &mut rng));
        }
        Ok(locations)
    }

    pub fn run<W: WorldProvider + ?Sized>(
        &mut self,
        world: &mut W,
        date: &mut Date,
        days: u64,
    ) -> Result<(), EngineError> {
        self.run_with_hook(world, date, days, |_| {})
    }

    /// Like [`Engine::run`], handing each day's summary to `hook`.
    pub fn run_with_hook<W, F>(
        &mut self,
        world: &mut W,
        date: &mut Date,
        days: u64,
        mut hook: F,
    ) -> Result<(), EngineError>
    where
        W: WorldProvider + ?Sized,
        F: FnMut(&DaySummary),
    {
        for _ in 0..days {
            let summary = self.run_day(world, date)?;
            hook(&summary);
            date.advance();
        }
        Ok(())
    }
}
