//! Pairwise collision detection and impulse-based resolution.
//!
//! Free functions over two bodies: positional correction removes the
//! interpenetration while conserving the combined center of mass, then a
//! restitution-scaled impulse updates both velocities. The impulse normal is
//! the center delta scaled by the inverse squared separation, not a unit
//! vector; the formulas are kept exactly in that form.

use crate::simulation::states::{Body, Vec2};

/// Zero-safe normalization: the zero vector maps to zero instead of NaN.
fn normalize_or_zero(v: Vec2) -> Vec2 {
    let length = v.norm();
    if length != 0.0 {
        v / length
    } else {
        Vec2::zeros()
    }
}

/// Resolve one detected overlap between `b1` and `b2`.
///
/// `restitution` scales the post-collision velocity change (1.0 is perfectly
/// elastic). With these formulas the relative velocity along the contact
/// normal comes out as `(1 - 2*restitution)` times its pre-collision value.
///
/// Exactly coincident centers leave the contact normal undefined; the pair is
/// left untouched rather than dividing by zero.
pub fn resolve_collision(b1: &mut Body, b2: &mut Body, restitution: f64) {
    let delta = b2.position - b1.position;
    if delta.norm_squared() == 0.0 {
        return;
    }
    let direction = normalize_or_zero(delta);
    let total_mass = b1.mass + b2.mass;

    // Positional correction: push the circles apart along the contact axis,
    // each by the other body's mass share. `overlap` is negative while the
    // circles interpenetrate, so b1 backs away and b2 moves forward until
    // they exactly touch.
    let overlap = b1.distance_to(b2) - (b1.radius + b2.radius);
    b1.position += direction * (overlap * b2.mass / total_mass);
    b2.position -= direction * (overlap * b1.mass / total_mass);

    // Impulse response from the corrected positions. b2's update uses b1's
    // pre-update velocity.
    let pre_b1_velocity = b1.velocity;

    let delta = b1.position - b2.position;
    let scaled_normal = delta / delta.norm_squared();
    b1.velocity -= scaled_normal
        * (restitution
            * (2.0 * b2.mass / total_mass)
            * (b1.velocity - b2.velocity).dot(&delta));

    let delta = b2.position - b1.position;
    let scaled_normal = delta / delta.norm_squared();
    b2.velocity -= scaled_normal
        * (restitution
            * (2.0 * b1.mass / total_mass)
            * (b2.velocity - pre_b1_velocity).dot(&delta));
}

/// Naive O(n^2) upper-triangle scan over the collection, resolving every
/// overlapping pair in index order. Returns the number of pairs resolved.
pub fn detect_and_resolve(bodies: &mut [Body], restitution: f64) -> usize {
    let mut resolved = 0;
    for i in 0..bodies.len() {
        for j in (i + 1)..bodies.len() {
            let (head, tail) = bodies.split_at_mut(j);
            let b1 = &mut head[i];
            let b2 = &mut tail[0];
            if b1.collides_with(b2) {
                resolve_collision(b1, b2, restitution);
                resolved += 1;
            }
        }
    }
    resolved
}
