pub mod benchmark;
pub mod configuration;
pub mod error;
pub mod simulation;

pub use simulation::collision::{detect_and_resolve, resolve_collision};
pub use simulation::engine::{run, step, Engine};
pub use simulation::params::{Parameters, DEFAULT_G, DEFAULT_RESTITUTION, DEFAULT_TIME_STEP};
pub use simulation::quadtree::{QuadTree, Rect};
pub use simulation::scenario::Scenario;
pub use simulation::states::{Body, System, Vec2};

pub use configuration::config::{
    BodyConfig, EngineConfig, ParametersConfig, RectConfig, ScenarioConfig,
};

pub use error::{Error, Result};

pub use benchmark::benchmark::bench_forces;
