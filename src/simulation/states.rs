//! Core state types for the planetary simulation.
//!
//! Defines the 2D body/system structs:
//! - `Body` holds a circle's physical state and the kinematic update
//! - `System` holds the body collection and the current simulation time `t`
//!
//! All vectors are `nalgebra::Vector2<f64>` via the `Vec2` alias.

use nalgebra::Vector2;

use crate::error::{Error, Result};

pub type Vec2 = Vector2<f64>;

/// A circular point-mass body.
///
/// `acceleration` is always `force / mass` from the most recent force
/// application; it is recomputed every step, never integrated directly.
#[derive(Debug, Clone, PartialEq)]
pub struct Body {
    pub radius: f64, // collision radius
    pub mass: f64, // mass
    pub position: Vec2, // center position
    pub velocity: Vec2, // velocity
    pub acceleration: Vec2, // derived each step
}

impl Body {
    /// Create a body at rest. Rejects non-positive radius or mass up front so
    /// the force and acceleration math downstream never divides by zero.
    pub fn new(radius: f64, mass: f64, position: Vec2) -> Result<Self> {
        if !(radius > 0.0) {
            return Err(Error::InvalidBody(format!("radius must be > 0, got {radius}")));
        }
        if !(mass > 0.0) {
            return Err(Error::InvalidBody(format!("mass must be > 0, got {mass}")));
        }
        Ok(Self {
            radius,
            mass,
            position,
            velocity: Vec2::zeros(),
            acceleration: Vec2::zeros(),
        })
    }

    /// Set an initial velocity.
    pub fn with_velocity(mut self, velocity: Vec2) -> Self {
        self.velocity = velocity;
        self
    }

    /// Set acceleration from an applied net force: `a = F / m`.
    pub fn add_acceleration(&mut self, force: Vec2) {
        self.acceleration = force / self.mass;
    }

    /// Advance velocity by a full step: `v += a * dt`.
    pub fn add_velocity(&mut self, dt: f64) {
        self.velocity += self.acceleration * dt;
    }

    /// Advance position: `x += v*dt - a*0.5*dt^2`.
    ///
    /// Composed after [`Body::add_velocity`] (which already folded `a*dt`
    /// into the stored velocity) this reproduces the kinematic update
    /// `x += v0*dt + 0.5*a*dt^2`. The ordering accelerate -> advance
    /// velocity -> advance position must be kept for identical trajectories.
    pub fn calc_position(&mut self, dt: f64) {
        self.position += self.velocity * dt - self.acceleration * (0.5 * dt * dt);
    }

    /// Euclidean distance between centers.
    pub fn distance_to(&self, other: &Body) -> f64 {
        (other.position - self.position).norm()
    }

    /// Circle-circle overlap test. Tangency (distance exactly equal to the
    /// radius sum) is not a collision.
    pub fn collides_with(&self, other: &Body) -> bool {
        self.distance_to(other) - other.radius - self.radius < 0.0
    }

    /// Gravitational force this body experiences from a point mass at
    /// `position`: `F = g*m1*m2/r^2` along the unit direction toward it.
    ///
    /// `g` is the scaled gravitational constant (see
    /// [`crate::simulation::params::DEFAULT_G`]), threaded explicitly so it
    /// stays a tunable rather than a buried literal. Zero separation yields
    /// zero force instead of NaN; the quadtree excludes self-interaction by
    /// construction so this only guards degenerate callers.
    pub fn force_from(&self, position: Vec2, mass: f64, g: f64) -> Vec2 {
        let delta = position - self.position;
        let dist2 = delta.norm_squared();
        if dist2 == 0.0 {
            return Vec2::zeros();
        }
        let force = g * mass * self.mass / dist2;
        delta * (force / dist2.sqrt())
    }

    /// Sum of pairwise gravitational forces from every other body in the
    /// collection. The body itself is skipped by position comparison, so the
    /// caller may pass a slice that contains it.
    pub fn net_force_from(&self, bodies: &[Body], g: f64) -> Vec2 {
        let mut total = Vec2::zeros();
        for other in bodies {
            if other.position == self.position {
                continue; // same body
            }
            total += self.force_from(other.position, other.mass, g);
        }
        total
    }

    /// One integration step from an externally supplied net force
    /// (the quadtree output path).
    pub fn update(&mut self, force: Vec2, dt: f64) {
        self.add_acceleration(force);
        self.add_velocity(dt);
        self.calc_position(dt);
    }

    /// One integration step from the brute-force O(n) pairwise sum. The
    /// non-approximate alternative to the quadtree; produces trajectories the
    /// approximate path is tested against.
    pub fn update_from_bodies(&mut self, bodies: &[Body], g: f64, dt: f64) {
        let total = self.net_force_from(bodies, g);
        self.update(total, dt);
    }
}

#[derive(Debug, Clone)]
pub struct System {
    pub bodies: Vec<Body>, // collection of bodies
    pub t: f64, // time
}

impl System {
    pub fn new(bodies: Vec<Body>) -> Self {
        Self { bodies, t: 0.0 }
    }

    /// Index of the nearest body whose circle covers `position`, if any.
    pub fn closest_body(&self, position: Vec2) -> Option<usize> {
        let mut min_dist = f64::MAX;
        let mut closest = None;
        for (i, body) in self.bodies.iter().enumerate() {
            let distance = (body.position - position).norm();
            if distance < min_dist && distance < body.radius {
                min_dist = distance;
                closest = Some(i);
            }
        }
        closest
    }
}
