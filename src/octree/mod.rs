pub mod node;
pub mod types;


pub use node::Node;
pub use types::{Intersection, OctreeError, Primitive};

use crate::spatial::{
    math::{octant_direction, octant_for, vector::V3c},
    raytracing::Ray,
};
use tracing::debug;

/// Adaptive octree over borrowed primitives.
///
/// The root starts as a single leaf of edge `initial_size` centered at
/// `root_position`; inserting a primitive outside of it doubles the root
/// towards the primitive until it fits or the depth budget runs out, and
/// leaves holding more than `max_neighbors` primitives subdivide. Tracing is
/// read-only and keeps its scratch on the stack, so shared references may
/// trace concurrently; any mutation requires exclusive access.
pub struct Octree<'a, T> {
    root: Box<Node<'a, T>>,
    max_depth: u32,
    max_neighbors: u32,
    initial_size: f64,
    root_position: V3c<f64>,
}

impl<'a, T: Primitive> Octree<'a, T> {
    pub fn new(
        max_depth: u32,
        initial_size: f64,
        max_neighbors: u32,
        root_position: V3c<f64>,
    ) -> Result<Self, OctreeError> {
        if !(initial_size > 0.) {
            return Err(OctreeError::InvalidSize(initial_size));
        }
        if max_neighbors < 1 {
            return Err(OctreeError::InvalidCapacity);
        }
        Ok(Self {
            root: Box::new(Node::new(root_position, initial_size, 0, 0)),
            max_depth,
            max_neighbors,
            initial_size,
            root_position,
        })
    }

    /// Inserts a borrowed primitive, keyed by its `position()`.
    ///
    /// Grows the root towards an out-of-range position while the depth
    /// budget allows, then descends to the target leaf, subdividing
    /// overflowing leaves on the way. A failed insert leaves the tree
    /// well-formed and traversable.
    pub fn insert(&mut self, item: &'a T) -> Result<(), OctreeError> {
        let position = item.position();
        while !self.root.bounding_box().contains(&position)
            && self.root.total_children_depth() < self.max_depth
        {
            self.grow_towards(&position);
        }
        if !self.root.bounding_box().contains(&position) {
            return Err(OctreeError::OutOfBounds {
                x: position.x,
                y: position.y,
                z: position.z,
            });
        }
        self.root
            .insert(item, &position, self.max_depth, self.max_neighbors)
    }

    /// Replaces the root with one of double the edge length, recentered half
    /// an old edge towards the target on every axis; the old root becomes the
    /// child occupying its own octant of the new root.
    fn grow_towards(&mut self, position: &V3c<f64>) {
        let towards = octant_for(&self.root.center(), position);
        let center = self.root.center() + octant_direction(towards) * self.root.half_size();
        let size = self.root.size() * 2.;
        let reach = self.root.total_children_depth() + 1;
        debug!(octant = towards, size, "growing octree root");
        let former_root = std::mem::replace(
            &mut self.root,
            Box::new(Node::new(center, size, 0, reach)),
        );
        self.root.adopt(former_root);
    }

    /// The nearest primitive hit by the ray, along with its distance.
    pub fn trace(&self, ray: &Ray) -> Option<(&'a T, f64)> {
        self.trace_within(ray, f64::INFINITY)
    }

    /// As [`Octree::trace`], but ignoring hits farther than `max_distance`.
    pub fn trace_within(&self, ray: &Ray, max_distance: f64) -> Option<(&'a T, f64)> {
        let mut closest = max_distance;
        let hit = self.root.trace(ray, &mut closest)?;
        Some((hit, closest))
    }

    /// Drops every stored handle and restores the just-constructed root.
    pub fn clear(&mut self) {
        self.root = Box::new(Node::new(self.root_position, self.initial_size, 0, 0));
    }

    pub fn root(&self) -> &Node<'a, T> {
        &self.root
    }

    pub fn max_depth(&self) -> u32 {
        self.max_depth
    }

    pub fn max_neighbors(&self) -> u32 {
        self.max_neighbors
    }
}
