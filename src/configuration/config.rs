//! Configuration types for loading simulation scenarios from YAML.
//!
//! A thin, `serde`-deserializable representation of a scenario:
//!
//! - [`EngineConfig`]     – force evaluation mode, collision pass, root boundary
//! - [`ParametersConfig`] – step size, end time, physical constants
//! - [`BodyConfig`]       – initial state for each body
//! - [`ScenarioConfig`]   – top-level wrapper used to load a scenario from YAML
//!
//! # YAML format
//!
//! ```yaml
//! engine:
//!   quadtree: true          # false -> direct n^2 force sum
//!   collisions: true
//!   boundary:               # optional; omitted = derived from the bodies
//!     x: 400.0
//!     y: 300.0
//!     width: 800.0
//!     height: 600.0
//!
//! parameters:
//!   t_end: 10.0             # total simulation time
//!   h0: 0.016666667         # fixed step size
//!   g: 6.674e4              # gravitational constant (scaled, optional)
//!   restitution: 0.9        # collision coefficient (optional)
//!
//! bodies:
//!   - x: [400.0, 300.0]
//!     m: 100.0
//!     radius: 100.0
//!   - x: [10.0, 50.0]
//!     v: [0.0, 0.0]
//!     m: 1.0
//!     radius: 10.0
//! ```

use std::io::Read;

use serde::Deserialize;

use crate::error::Result;

/// Engine-level options controlling the structure of the per-step loop.
#[derive(Deserialize, Debug)]
pub struct EngineConfig {
    pub quadtree: bool, // true = quadtree force approximation, false = direct sum
    #[serde(default)]
    pub collisions: bool, // run pairwise collision resolution each step
    pub boundary: Option<RectConfig>, // fixed quadtree root region
}

/// Centered rectangle as it appears in scenario files.
#[derive(Deserialize, Debug, Clone, Copy)]
pub struct RectConfig {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

/// Global numerical and physical parameters for a scenario.
#[derive(Deserialize, Debug, Clone)]
pub struct ParametersConfig {
    pub t_end: f64,           // time end
    pub h0: f64,              // fixed step size
    pub g: Option<f64>,       // gravitational constant; default is DEFAULT_G
    pub restitution: Option<f64>, // collision coefficient; default is DEFAULT_RESTITUTION
}

/// Configuration for a single body's initial state.
#[derive(Deserialize, Debug)]
pub struct BodyConfig {
    pub x: [f64; 2],         // initial position
    pub v: Option<[f64; 2]>, // initial velocity; defaults to rest
    pub m: f64,              // mass
    pub radius: f64,         // circle radius used for collisions
}

/// Top-level scenario configuration loaded from YAML.
#[derive(Deserialize, Debug)]
pub struct ScenarioConfig {
    pub engine: EngineConfig,
    pub parameters: ParametersConfig,
    pub bodies: Vec<BodyConfig>,
}

impl ScenarioConfig {
    pub fn from_yaml(reader: impl Read) -> Result<Self> {
        Ok(serde_yaml::from_reader(reader)?)
    }
}
