use crate::octree::types::{OctreeError, Primitive};
use crate::spatial::{
    math::{axis_bit, octant_direction, octant_for, vector::V3c},
    raytracing::{Plane, Ray},
    Aabb,
};
use tracing::debug;

/// A cube-shaped octree cell: either a leaf holding borrowed primitives, or
/// an internal node with eight children split by the three median planes
/// through its center. `total_children_depth` doubles as the leaf test; it is
/// zero exactly for leaves.
pub struct Node<'a, T> {
    center: V3c<f64>,
    size: f64,
    half_size: f64,
    depth: u32,
    total_children_depth: u32,
    bounding_box: Aabb,
    median_planes: [Plane; 3],
    children: [Option<Box<Node<'a, T>>>; 8],
    data: Vec<&'a T>,
}

impl<'a, T: Primitive> Node<'a, T> {
    pub(crate) fn new(center: V3c<f64>, size: f64, depth: u32, total_children_depth: u32) -> Self {
        debug_assert!(size > 0.);
        Self {
            bounding_box: Aabb::cube(&center, size),
            median_planes: [
                Plane::from_unit_normal(V3c::new(1., 0., 0.), center),
                Plane::from_unit_normal(V3c::new(0., 1., 0.), center),
                Plane::from_unit_normal(V3c::new(0., 0., 1.), center),
            ],
            children: std::array::from_fn(|_| None),
            data: Vec::new(),
            half_size: size / 2.,
            center,
            size,
            depth,
            total_children_depth,
        }
    }

    pub fn center(&self) -> V3c<f64> {
        self.center
    }

    pub fn size(&self) -> f64 {
        self.size
    }

    pub fn half_size(&self) -> f64 {
        self.half_size
    }

    pub fn depth(&self) -> u32 {
        self.depth
    }

    pub fn total_children_depth(&self) -> u32 {
        self.total_children_depth
    }

    pub fn bounding_box(&self) -> &Aabb {
        &self.bounding_box
    }

    pub fn is_leaf(&self) -> bool {
        0 == self.total_children_depth
    }

    /// Primitives stored directly in this node; non-empty only for leaves.
    pub fn data(&self) -> &[&'a T] {
        &self.data
    }

    pub fn child(&self, octant: u8) -> Option<&Node<'a, T>> {
        self.children[octant as usize].as_deref()
    }

    /// Places the primitive in the subtree under this node, subdividing
    /// overflowing leaves while `max_depth` allows, and keeps
    /// `total_children_depth` a faithful upper bound on the way out.
    pub(crate) fn insert(
        &mut self,
        item: &'a T,
        position: &V3c<f64>,
        max_depth: u32,
        max_neighbors: u32,
    ) -> Result<(), OctreeError> {
        if self.is_leaf() {
            if (self.data.len() as u32) < max_neighbors {
                self.data.push(item);
                return Ok(());
            }
            if self.depth >= max_depth {
                return Err(OctreeError::Capacity { max_neighbors });
            }
            debug!(
                depth = self.depth,
                stored = self.data.len(),
                "leaf over capacity, subdividing"
            );
            self.subdivide();
        }

        let octant = octant_for(&self.center, position);
        let child = self.children[octant as usize]
            .as_deref_mut()
            .ok_or(OctreeError::MissingChild { octant })?;
        child.insert(item, position, max_depth, max_neighbors)?;
        let reach = 1 + child.total_children_depth;
        self.total_children_depth = self.total_children_depth.max(reach);
        Ok(())
    }

    /// Turns this leaf into an internal node with eight fresh leaf children
    /// and redistributes the stored primitives by octant.
    fn subdivide(&mut self) {
        debug_assert!(self.is_leaf());
        let mut children: [Box<Node<'a, T>>; 8] = std::array::from_fn(|octant| {
            let child_center =
                self.center + octant_direction(octant as u8) * (self.half_size / 2.);
            Box::new(Node::new(child_center, self.half_size, self.depth + 1, 0))
        });
        for item in std::mem::take(&mut self.data) {
            let octant = octant_for(&self.center, &item.position());
            children[octant as usize].data.push(item);
        }
        self.children = children.map(Some);
        self.total_children_depth = 1;
    }

    /// Re-homes a former root as the child occupying its octant of this node;
    /// the remaining seven slots are filled with fresh empty leaves.
    pub(crate) fn adopt(&mut self, mut former_root: Box<Node<'a, T>>) {
        debug_assert!(self.data.is_empty() && self.children.iter().all(Option::is_none));
        former_root.depth = 1;
        let home = octant_for(&self.center, &former_root.center);
        for octant in 0..8u8 {
            if octant == home {
                continue;
            }
            let child_center =
                self.center + octant_direction(octant) * (self.half_size / 2.);
            self.children[octant as usize] =
                Some(Box::new(Node::new(child_center, self.half_size, 1, 0)));
        }
        self.children[home as usize] = Some(former_root);
    }

    /// Sorted Sibling Traversal: detects the first primitive the ray hits
    /// within this node, visiting children in the order the ray enters them.
    /// `closest` is the running upper bound on the hit distance and is
    /// tightened in place whenever a nearer primitive is found.
    pub(crate) fn trace(&self, ray: &Ray, closest: &mut f64) -> Option<&'a T> {
        let entry = self.bounding_box.intersect_ray(ray)?;
        if entry > *closest {
            return None;
        }

        if self.is_leaf() {
            let mut nearest = None;
            for &item in &self.data {
                if let Some(hit) = item.intersect(ray) {
                    if hit.distance <= *closest {
                        *closest = hit.distance;
                        nearest = Some(item);
                    }
                }
            }
            return nearest;
        }

        // Seed with the octant holding the ray origin; each median plane the
        // ray crosses within reach flips one index bit, so a half-line can
        // enter at most four of the eight children.
        let mut octant = octant_for(&self.center, &ray.origin());
        let reach = (ray.origin() - self.center).length() + self.half_size;
        let mut crossings: [(f64, usize); 3] = [(0., 0); 3];
        let mut crossing_count = 0;
        for (axis, plane) in self.median_planes.iter().enumerate() {
            if let Some(t) = plane.intersect(ray) {
                if t <= reach {
                    crossings[crossing_count] = (t, axis);
                    crossing_count += 1;
                }
            }
        }
        let crossings = &mut crossings[..crossing_count];
        crossings.sort_by(|a, b| a.0.total_cmp(&b.0));

        let mut nearest = match self.children[octant as usize].as_deref() {
            Some(child) => child.trace(ray, closest),
            None => None,
        };
        for &(_, axis) in crossings.iter() {
            octant ^= axis_bit(axis);
            if let Some(child) = self.children[octant as usize].as_deref() {
                if let Some(hit) = child.trace(ray, closest) {
                    nearest = Some(hit);
                }
            }
        }
        nearest
    }
}
