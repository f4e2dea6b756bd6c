//! Build fully-initialized simulation scenarios from configuration.
//!
//! Takes a `ScenarioConfig` (YAML-facing) and produces the runtime bundle:
//! engine settings, numerical parameters, and the system state with bodies at
//! t = 0. Body parameters are validated here so the numerical core never sees
//! a non-positive mass or radius.

use crate::configuration::config::{BodyConfig, ScenarioConfig};
use crate::error::{Error, Result};
use crate::simulation::engine::Engine;
use crate::simulation::params::{Parameters, DEFAULT_G, DEFAULT_RESTITUTION};
use crate::simulation::quadtree::Rect;
use crate::simulation::states::{Body, System, Vec2};

/// A fully-initialized runtime scenario.
pub struct Scenario {
    pub engine: Engine,
    pub parameters: Parameters,
    pub system: System,
}

impl Scenario {
    pub fn build(cfg: ScenarioConfig) -> Result<Self> {
        let bodies = cfg
            .bodies
            .iter()
            .map(build_body)
            .collect::<Result<Vec<Body>>>()?;
        let system = System::new(bodies);

        let p_cfg = cfg.parameters;
        if !(p_cfg.h0 > 0.0) {
            return Err(Error::InvalidConfig(format!(
                "step size h0 must be > 0, got {}",
                p_cfg.h0
            )));
        }
        let parameters = Parameters {
            t_end: p_cfg.t_end,
            h0: p_cfg.h0,
            g: p_cfg.g.unwrap_or(DEFAULT_G),
            restitution: p_cfg.restitution.unwrap_or(DEFAULT_RESTITUTION),
        };

        let e_cfg = cfg.engine;
        let engine = Engine {
            quadtree: e_cfg.quadtree,
            collisions: e_cfg.collisions,
            boundary: e_cfg
                .boundary
                .map(|b| Rect::new(b.x, b.y, b.width, b.height)),
        };

        Ok(Self {
            engine,
            parameters,
            system,
        })
    }
}

fn build_body(bc: &BodyConfig) -> Result<Body> {
    let body = Body::new(bc.radius, bc.m, Vec2::new(bc.x[0], bc.x[1]))?;
    Ok(match bc.v {
        Some(v) => body.with_velocity(Vec2::new(v[0], v[1])),
        None => body,
    })
}
