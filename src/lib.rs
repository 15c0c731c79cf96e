//! A CPU ray-tracing core built around an adaptive octree.
//!
//! The octree grows its root towards out-of-range insertions and subdivides
//! leaves that exceed their capacity; rays are answered with Sorted Sibling
//! Traversal, visiting the children of a node in the order the ray enters
//! them. The [`scene`] and [`render`] modules wire a pinhole camera, a point
//! light and a BMP/CSV exporter around the core.

pub mod octree;
pub mod render;
pub mod scene;
pub mod spatial;
