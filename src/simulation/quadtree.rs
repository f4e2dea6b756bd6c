//! Quadtree spatial index for approximate gravitational forces.
//!
//! The tree recursively partitions a fixed rectangular boundary into four
//! quadrants, holding at most one body per leaf. Every node keeps the total
//! mass and mass-weighted center of mass of its entire subtree, updated
//! incrementally on the insertion path, so a whole region can stand in for
//! its contents as a single pseudo-body when computing forces.
//!
//! The approximation rule is region-based: a subtree is collapsed to its
//! pseudo-body exactly when the probed body lies outside the subtree's
//! boundary. This is deliberately not the classic distance/size-ratio
//! (theta) opening criterion; nearby disjoint regions are approximated the
//! same way as far ones, and the rule must not be swapped for a theta test
//! without treating that as a behavior change.
//!
//! The tree is a disposable per-frame index: the driver rebuilds it from
//! scratch every fixed step, so nodes live in a flat arena (`Vec<Node>` with
//! indices) rather than per-node heap boxes.

use crate::simulation::states::{Body, Vec2};

/// Axis-aligned region described by its center and full width/height.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    pub fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self { x, y, width, height }
    }

    /// Point containment, inclusive on all four edges.
    pub fn contains(&self, point: Vec2) -> bool {
        point.x >= self.x - self.width / 2.0
            && point.x <= self.x + self.width / 2.0
            && point.y >= self.y - self.height / 2.0
            && point.y <= self.y + self.height / 2.0
    }

    /// Region-region overlap test (touching edges count as intersecting).
    pub fn intersects(&self, range: &Rect) -> bool {
        (self.x - range.x).abs() <= (self.width + range.width) / 2.0
            && (self.y - range.y).abs() <= (self.height + range.height) / 2.0
    }

    /// Smallest rectangle covering every body position, grown by `margin` on
    /// each side. Used by the driver when no fixed root boundary is
    /// configured.
    pub fn enclosing(bodies: &[Body], margin: f64) -> Rect {
        let Some(first) = bodies.first() else {
            return Rect::new(0.0, 0.0, 2.0 * margin, 2.0 * margin);
        };
        let mut min = first.position;
        let mut max = first.position;
        for body in bodies {
            min.x = min.x.min(body.position.x);
            min.y = min.y.min(body.position.y);
            max.x = max.x.max(body.position.x);
            max.y = max.y.max(body.position.y);
        }
        Rect::new(
            (min.x + max.x) / 2.0,
            (min.y + max.y) / 2.0,
            max.x - min.x + 2.0 * margin,
            max.y - min.y + 2.0 * margin,
        )
    }
}

/// One quadrant of the tree.
///
/// `children` doubles as the divided flag: `None` while the node is a leaf,
/// `Some` with the four child indices (top-left, top-right, bottom-left,
/// bottom-right) once subdivided. `total_mass`/`center_of_mass` aggregate
/// everything inserted at or below this node.
#[derive(Debug, Clone)]
struct Node {
    boundary: Rect,
    body: Option<Body>, // resident body while an undivided leaf (capacity 1)
    children: Option<[usize; 4]>, // indices into QuadTree::nodes
    total_mass: f64,
    center_of_mass: Vec2,
}

impl Node {
    fn empty(boundary: Rect) -> Self {
        Self {
            boundary,
            body: None,
            children: None,
            total_mass: 0.0,
            center_of_mass: Vec2::zeros(),
        }
    }
}

/// Per-frame spatial index over a fixed boundary.
///
/// Bodies are copied in by value; the tree never aliases the driver's
/// collection. Body positions must be pairwise distinct — two bodies at the
/// identical point cannot be separated by any finite subdivision.
pub struct QuadTree {
    nodes: Vec<Node>,
    root: usize,
}

impl QuadTree {
    /// Empty tree over `boundary`: a single leaf with zero mass.
    pub fn new(boundary: Rect) -> Self {
        Self {
            nodes: vec![Node::empty(boundary)],
            root: 0,
        }
    }

    /// Insert a body, returning `false` without mutating anything if its
    /// position lies outside the root boundary. The caller decides what a
    /// rejection means (grow the boundary, drop the body, treat as a bug).
    pub fn insert(&mut self, body: &Body) -> bool {
        self.insert_at(self.root, body)
    }

    fn insert_at(&mut self, idx: usize, body: &Body) -> bool {
        if !self.nodes[idx].boundary.contains(body.position) {
            return false;
        }

        // Fold the body into this node's running aggregates. Every node on
        // the path from the root down to the leaf that ends up storing the
        // body counts it exactly once.
        {
            let node = &mut self.nodes[idx];
            node.center_of_mass = (node.total_mass * node.center_of_mass
                + body.mass * body.position)
                / (node.total_mass + body.mass);
            node.total_mass += body.mass;

            if node.children.is_none() && node.body.is_none() {
                node.body = Some(body.clone());
                return true;
            }
        }

        if self.nodes[idx].children.is_none() {
            // Leaf at capacity: split and move the resident body down. Its
            // mass is already counted in this node's aggregates, so it goes
            // straight into the children without touching them again.
            self.subdivide(idx);
            if let Some(resident) = self.nodes[idx].body.take() {
                let moved = self.insert_into_children(idx, &resident);
                debug_assert!(moved, "resident body must land in a child quadrant");
            }
        }

        // The four children exactly partition this node's area, so a
        // contained point cannot fall through all of them.
        let inserted = self.insert_into_children(idx, body);
        debug_assert!(inserted, "contained body fell through every child quadrant");
        inserted
    }

    /// Try the children in fixed top-left, top-right, bottom-left,
    /// bottom-right order; first acceptance wins.
    fn insert_into_children(&mut self, idx: usize, body: &Body) -> bool {
        let Some(children) = self.nodes[idx].children else {
            return false;
        };
        children.iter().any(|&child| self.insert_at(child, body))
    }

    /// Create the four quadrant children: half width/height, centered at the
    /// quarter-offset points from this node's center.
    fn subdivide(&mut self, idx: usize) {
        let Rect { x, y, width, height } = self.nodes[idx].boundary;
        let w = width / 2.0;
        let h = height / 2.0;
        let quadrants = [
            Rect::new(x - w / 2.0, y - h / 2.0, w, h), // top-left
            Rect::new(x + w / 2.0, y - h / 2.0, w, h), // top-right
            Rect::new(x - w / 2.0, y + h / 2.0, w, h), // bottom-left
            Rect::new(x + w / 2.0, y + h / 2.0, w, h), // bottom-right
        ];
        let first = self.nodes.len();
        for boundary in quadrants {
            self.nodes.push(Node::empty(boundary));
        }
        self.nodes[idx].children = Some([first, first + 1, first + 2, first + 3]);
    }

    /// Collect every stored body whose position lies in `range`, pruning
    /// subtrees whose boundary does not intersect it.
    pub fn query(&self, range: &Rect, found: &mut Vec<Body>) {
        self.query_at(self.root, range, found);
    }

    fn query_at(&self, idx: usize, range: &Rect, found: &mut Vec<Body>) {
        let node = &self.nodes[idx];
        if !node.boundary.intersects(range) {
            return;
        }
        if let Some(body) = &node.body {
            if range.contains(body.position) {
                found.push(body.clone());
            }
        }
        if let Some(children) = node.children {
            for child in children {
                self.query_at(child, range, found);
            }
        }
    }

    /// Approximate net gravitational force on `body` from everything in the
    /// tree, using the scaled gravitational constant `g`.
    ///
    /// Per subtree: if `body` lies outside the boundary, the whole region is
    /// replaced by a single pseudo-body at (center of mass, total mass); if
    /// inside and subdivided, the four children's contributions are summed;
    /// if inside a leaf, the leaf can only hold `body` itself (capacity 1)
    /// and contributes nothing. Exact partitioning means no region is
    /// double-counted and no self-force arises.
    pub fn calculate_forces(&self, body: &Body, g: f64) -> Vec2 {
        self.forces_at(self.root, body, g)
    }

    fn forces_at(&self, idx: usize, body: &Body, g: f64) -> Vec2 {
        let node = &self.nodes[idx];
        if node.total_mass == 0.0 {
            return Vec2::zeros(); // empty subtree, and a zero-mass pseudo-body has no pull
        }
        if !node.boundary.contains(body.position) {
            return body.force_from(node.center_of_mass, node.total_mass, g);
        }
        match node.children {
            Some(children) => {
                let mut total = Vec2::zeros();
                for child in children {
                    total += self.forces_at(child, body, g);
                }
                total
            }
            None => Vec2::zeros(),
        }
    }

    /// Boundary of every node, for diagnostic overlays.
    pub fn boundaries(&self) -> Vec<Rect> {
        self.nodes.iter().map(|node| node.boundary).collect()
    }

    /// Total mass of everything inserted into the tree.
    pub fn total_mass(&self) -> f64 {
        self.nodes[self.root].total_mass
    }

    /// Mass-weighted average position of everything inserted into the tree.
    pub fn center_of_mass(&self) -> Vec2 {
        self.nodes[self.root].center_of_mass
    }
}
