pub mod collision;
pub mod engine;
pub mod params;
pub mod quadtree;
pub mod scenario;
pub mod states;
