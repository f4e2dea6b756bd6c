use std::time::Instant;

use crate::simulation::params::DEFAULT_G;
use crate::simulation::quadtree::{QuadTree, Rect};
use crate::simulation::states::{Body, System, Vec2};

/// Build a deterministic scattered system of size `n` (no rand needed).
fn make_system(n: usize) -> System {
    let mut bodies = Vec::with_capacity(n);
    for i in 0..n {
        let i_f = i as f64;
        let position = Vec2::new(
            (i_f * 0.37).sin() * 400.0 + 400.0,
            (i_f * 0.13).cos() * 300.0 + 300.0,
        );
        bodies.push(Body {
            radius: 1.0,
            mass: 1.0,
            position,
            velocity: Vec2::zeros(),
            acceleration: Vec2::zeros(),
        });
    }
    System::new(bodies)
}

fn direct_pass(sys: &System, g: f64, out: &mut [Vec2]) {
    for (i, body) in sys.bodies.iter().enumerate() {
        out[i] = body.net_force_from(&sys.bodies, g);
    }
}

fn quadtree_pass(sys: &System, g: f64, out: &mut [Vec2]) {
    let boundary = Rect::enclosing(&sys.bodies, 1.0);
    let mut tree = QuadTree::new(boundary);
    for body in &sys.bodies {
        tree.insert(body);
    }
    for (i, body) in sys.bodies.iter().enumerate() {
        out[i] = tree.calculate_forces(body, g);
    }
}

/// Compare one full force evaluation, direct n^2 vs quadtree, over growing n.
/// The quadtree timing includes the per-frame tree rebuild.
pub fn bench_forces() {
    let ns = [200, 400, 800, 1600, 3200, 6400];
    let g = DEFAULT_G;

    for n in ns {
        let sys = make_system(n);
        let mut out = vec![Vec2::zeros(); n];

        // Warm up
        direct_pass(&sys, g, &mut out);
        quadtree_pass(&sys, g, &mut out);

        // Time direct
        let t0 = Instant::now();
        direct_pass(&sys, g, &mut out);
        let dt_direct = t0.elapsed().as_secs_f64();

        // Time quadtree (build + query)
        let t1 = Instant::now();
        quadtree_pass(&sys, g, &mut out);
        let dt_tree = t1.elapsed().as_secs_f64();

        println!("N = {n:5}, direct = {dt_direct:8.6} s, quadtree = {dt_tree:8.6} s");
    }
}
