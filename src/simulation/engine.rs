//! Fixed-step driver loop.
//!
//! `Engine` selects how forces are evaluated (quadtree approximation or
//! direct n^2 sum) and whether the collision pass runs. `step` advances the
//! system by one fixed step in two phases: every body's force is computed
//! against the same unmutated snapshot before any body's state is advanced,
//! so no body sees a half-updated frame.

use crate::simulation::collision::detect_and_resolve;
use crate::simulation::params::Parameters;
use crate::simulation::quadtree::{QuadTree, Rect};
use crate::simulation::scenario::Scenario;
use crate::simulation::states::{System, Vec2};

/// Margin added around the bodies when the root boundary is derived per step.
const BOUNDARY_MARGIN: f64 = 1.0;

/// Runtime engine settings.
#[derive(Debug, Clone)]
pub struct Engine {
    pub quadtree: bool, // true = approximate forces via the quadtree, false = direct sum
    pub collisions: bool, // run the pairwise collision pass each step
    pub boundary: Option<Rect>, // fixed root region; None = enclose the bodies each step
}

/// Advance the system by one fixed step of `params.h0`.
pub fn step(sys: &mut System, params: &Parameters, engine: &Engine) {
    let dt = params.h0;

    // Force pass. The tree (or the cloned body list) is a frozen snapshot of
    // this frame; it is discarded as soon as the forces are gathered.
    let forces: Vec<Vec2> = if engine.quadtree {
        let boundary = engine
            .boundary
            .unwrap_or_else(|| Rect::enclosing(&sys.bodies, BOUNDARY_MARGIN));
        let mut tree = QuadTree::new(boundary);
        for body in &sys.bodies {
            if !tree.insert(body) {
                log::warn!(
                    "body at ({:.3}, {:.3}) is outside the root boundary and was left out of the tree",
                    body.position.x,
                    body.position.y
                );
            }
        }
        sys.bodies
            .iter()
            .map(|body| tree.calculate_forces(body, params.g))
            .collect()
    } else {
        let snapshot = sys.bodies.clone();
        sys.bodies
            .iter()
            .map(|body| body.net_force_from(&snapshot, params.g))
            .collect()
    };

    // Integration pass.
    for (body, force) in sys.bodies.iter_mut().zip(forces) {
        body.update(force, dt);
    }

    if engine.collisions {
        let resolved = detect_and_resolve(&mut sys.bodies, params.restitution);
        if resolved > 0 {
            log::debug!("resolved {resolved} collisions at t = {:.4}", sys.t);
        }
    }

    sys.t += dt;
}

/// Step the scenario until `t_end`, returning the number of steps taken.
pub fn run(scenario: &mut Scenario) -> u64 {
    log::info!(
        "running {} bodies to t = {} with h0 = {}",
        scenario.system.bodies.len(),
        scenario.parameters.t_end,
        scenario.parameters.h0
    );
    let mut steps = 0;
    while scenario.system.t < scenario.parameters.t_end {
        step(&mut scenario.system, &scenario.parameters, &scenario.engine);
        steps += 1;
    }
    log::info!("finished after {steps} steps at t = {:.4}", scenario.system.t);
    steps
}
