pub mod math;
pub mod raytracing;

mod tests;

use crate::spatial::math::vector::V3c;

/// Errors raised while constructing geometric objects.
#[derive(Debug, thiserror::Error)]
pub enum GeometryError {
    #[error("normal vector must not be zero")]
    ZeroNormal,
    #[error("triangle vertices must not be collinear")]
    CollinearVertices,
    #[error("up and forward axes must not be parallel")]
    ParallelAxes,
}

/// Axis-aligned bounding box; `min <= max` holds on every axis.
#[derive(Default, Clone, Copy, Debug, PartialEq)]
#[cfg_attr(
    feature = "serialization",
    derive(serde::Serialize, serde::Deserialize)
)]
pub struct Aabb {
    pub min: V3c<f64>,
    pub max: V3c<f64>,
}

impl Aabb {
    pub fn new(min: V3c<f64>, max: V3c<f64>) -> Self {
        debug_assert!(min.x <= max.x && min.y <= max.y && min.z <= max.z);
        Self { min, max }
    }

    /// The axis-aligned cube of the given edge length centered at `center`.
    pub fn cube(center: &V3c<f64>, size: f64) -> Self {
        let half_size = size / 2.;
        Self {
            min: *center - V3c::unit(half_size),
            max: *center + V3c::unit(half_size),
        }
    }

    /// The tightest box around the given points.
    pub fn enclosing(points: &[V3c<f64>]) -> Self {
        let mut min = V3c::unit(f64::INFINITY);
        let mut max = V3c::unit(f64::NEG_INFINITY);
        for point in points {
            min.x = min.x.min(point.x);
            min.y = min.y.min(point.y);
            min.z = min.z.min(point.z);
            max.x = max.x.max(point.x);
            max.y = max.y.max(point.y);
            max.z = max.z.max(point.z);
        }
        Self { min, max }
    }

    pub fn contains(&self, point: &V3c<f64>) -> bool {
        point.x >= self.min.x
            && point.x <= self.max.x
            && point.y >= self.min.y
            && point.y <= self.max.y
            && point.z >= self.min.z
            && point.z <= self.max.z
    }

    pub fn contains_aabb(&self, other: &Aabb) -> bool {
        self.contains(&other.min) && self.contains(&other.max)
    }
}
