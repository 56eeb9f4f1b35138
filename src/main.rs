use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;

use grove::{
    engine::{Engine, EngineSettings},
    scenario::ScenarioLoader,
};

#[derive(Debug, Parser)]
#[command(author, version, about = "Daily tree lifecycle simulation runner")]
struct Cli {
    /// Path to the scenario YAML file
    #[arg(long, default_value = "scenarios/small_farm.yaml")]
    scenario: PathBuf,

    /// Override day count (uses scenario default when omitted)
    #[arg(long)]
    days: Option<u64>,

    /// Override the scenario seed
    #[arg(long)]
    seed: Option<u64>,

    /// Print the final census as JSON
    #[arg(long)]
    json: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let loader = ScenarioLoader::new(".");
    let scenario = loader.load(&cli.scenario)?;

    env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or(scenario.logging.level.as_str()),
    )
    .init();

    let mut world = scenario.build_world();
    let mut date = scenario.start;
    let days = scenario.days(cli.days);
    let settings = EngineSettings {
        scenario_name: scenario.name.clone(),
        seed: cli.seed.unwrap_or(scenario.seed),
    };

    let mut engine = Engine::new(settings, scenario.config.clone())?;
    let mut planted = 0;
    engine.run_with_hook(&mut world, &mut date, days, |summary| {
        planted += summary.planted();
    })?;

    let census = world.census();
    if cli.json {
        println!("{}", serde_json::to_string_pretty(&census)?);
    } else {
        println!(
            "Scenario '{}' completed for {} days (now {}). Trees: {}, saplings planted: {}",
            scenario.name, days, date, census.trees, planted
        );
        for (species, counts) in &census.species {
            println!(
                "  {:?}: {} total, {} mature, {} stumps, {} with seed",
                species, counts.total, counts.mature, counts.stumps, counts.with_seed
            );
        }
    }
    Ok(())
}
