pub mod calendar;
pub mod config;
pub mod daily;
pub mod engine;
pub mod location;
pub mod manager;
pub mod rng;
pub mod scenario;
pub mod systems;
pub mod tree;
pub mod world;

pub use config::TreeConfig;
pub use engine::{DaySummary, Engine, EngineError, EngineSettings};
pub use tree::{Species, Tree, TreeRecord};
