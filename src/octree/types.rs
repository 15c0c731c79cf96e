use crate::spatial::{math::vector::V3c, raytracing::Ray};

/// A successful primitive/ray intersection: the distance along the ray and
/// the barycentric coordinates of the hit, so callers can interpolate vertex
/// attributes later.
#[derive(Debug, Default, Clone, Copy, PartialEq)]
pub struct Intersection {
    pub u: f64,
    pub v: f64,
    pub distance: f64,
}

/// What the octree requires of stored items. The container only ever borrows
/// primitives; keeping them alive (and in place) for the lifetime of the tree
/// is the caller's responsibility.
pub trait Primitive {
    /// A single point placing the primitive inside exactly one octant.
    fn position(&self) -> V3c<f64>;

    /// Ray intersection with a non-negative hit distance.
    fn intersect(&self, ray: &Ray) -> Option<Intersection>;
}

/// error types during usage or creation of the octree
#[derive(Debug, thiserror::Error)]
pub enum OctreeError {
    #[error("octree size must be positive, got {0}")]
    InvalidSize(f64),
    #[error("leaf capacity must be at least one")]
    InvalidCapacity,
    #[error("position ({x}, {y}, {z}) is outside the fully grown root")]
    OutOfBounds { x: f64, y: f64, z: f64 },
    #[error("leaf at maximum depth cannot hold more than {max_neighbors} primitives")]
    Capacity { max_neighbors: u32 },
    #[error("non-leaf node is missing child {octant}")]
    MissingChild { octant: u8 },
}
