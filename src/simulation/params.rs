//! Named physical tunables and runtime parameters.
//!
//! `Parameters` holds the per-run settings:
//! - fixed step size and end time,
//! - gravitational constant `g`,
//! - collision restitution coefficient.

/// Scaled gravitational constant sized for on-screen distances, not the SI
/// value. Raising it strengthens every gravitational interaction.
pub const DEFAULT_G: f64 = 6.674e4;

/// Reference restitution coefficient: 1.0 is perfectly elastic, 0.0 fully
/// inelastic.
pub const DEFAULT_RESTITUTION: f64 = 0.9;

/// Fixed step matching a 60 Hz frame.
pub const DEFAULT_TIME_STEP: f64 = 1.0 / 60.0;

#[derive(Debug, Clone)]
pub struct Parameters {
    pub t_end: f64, // simulation end time
    pub h0: f64, // fixed step size
    pub g: f64, // gravitational constant
    pub restitution: f64, // post-collision velocity retention
}

impl Default for Parameters {
    fn default() -> Self {
        Self {
            t_end: 10.0,
            h0: DEFAULT_TIME_STEP,
            g: DEFAULT_G,
            restitution: DEFAULT_RESTITUTION,
        }
    }
}
