use crate::spatial::{math::vector::V3c, Aabb, GeometryError};


/// Below this magnitude a plane/ray denominator counts as parallel.
pub const PLANE_DENOMINATOR_EPSILON: f64 = f64::EPSILON;

/// A directed half-line. The direction is kept normalized and its
/// component-wise reciprocal is cached for slab tests; a zero direction
/// component yields an infinite reciprocal, which the consumers tolerate
/// through IEEE min/max semantics.
#[derive(Debug, Clone, Copy)]
pub struct Ray {
    origin: V3c<f64>,
    direction: V3c<f64>,
    inverse_direction: V3c<f64>,
}

impl Ray {
    pub fn new(origin: V3c<f64>, direction: V3c<f64>) -> Self {
        let mut ray = Self {
            origin,
            direction: V3c::default(),
            inverse_direction: V3c::default(),
        };
        ray.set_direction(direction);
        ray
    }

    pub fn origin(&self) -> V3c<f64> {
        self.origin
    }

    pub fn direction(&self) -> V3c<f64> {
        self.direction
    }

    pub fn inverse_direction(&self) -> V3c<f64> {
        self.inverse_direction
    }

    pub fn set_origin(&mut self, origin: V3c<f64>) {
        self.origin = origin;
    }

    /// Normalizes the given direction and refreshes the cached reciprocal.
    pub fn set_direction(&mut self, direction: V3c<f64>) {
        self.direction = direction.normalized();
        self.inverse_direction = V3c::new(
            1. / self.direction.x,
            1. / self.direction.y,
            1. / self.direction.z,
        );
    }

    pub fn point_at(&self, d: f64) -> V3c<f64> {
        self.origin + self.direction * d
    }

    pub fn is_valid(&self) -> bool {
        (1. - self.direction.length()).abs() < 0.000001
    }
}

/// An infinite oriented plane, stored as its unit normal, a point on the
/// plane and the cached dot product of the two.
#[derive(Debug, Clone, Copy)]
pub struct Plane {
    normal: V3c<f64>,
    point: V3c<f64>,
    point_dot_normal: f64,
}

impl Plane {
    pub fn new(normal: V3c<f64>, point: V3c<f64>) -> Result<Self, GeometryError> {
        if normal.length() < f64::EPSILON {
            return Err(GeometryError::ZeroNormal);
        }
        Ok(Self::from_unit_normal(normal.normalized(), point))
    }

    /// Skips normalization; the caller guarantees a unit normal.
    pub(crate) fn from_unit_normal(normal: V3c<f64>, point: V3c<f64>) -> Self {
        debug_assert!((1. - normal.length()).abs() < 0.000001);
        Self {
            normal,
            point,
            point_dot_normal: point.dot(&normal),
        }
    }

    pub fn normal(&self) -> V3c<f64> {
        self.normal
    }

    pub fn point(&self) -> V3c<f64> {
        self.point
    }

    pub fn point_dot_normal(&self) -> f64 {
        self.point_dot_normal
    }

    /// Distance along the ray to the plane, if the ray reaches it.
    /// https://www.cs.princeton.edu/courses/archive/fall00/cs426/lectures/raycast/sld017.htm
    pub fn intersect(&self, ray: &Ray) -> Option<f64> {
        let denominator = self.normal.dot(&ray.direction());

        let denominator_valid = denominator.abs() >= PLANE_DENOMINATOR_EPSILON;
        // Shift a degenerate denominator to 1 so the division stays finite
        let safe_denominator = denominator + (1. - denominator_valid as u8 as f64);

        let t = (self.point_dot_normal - ray.origin().dot(&self.normal)) / safe_denominator;

        (denominator_valid && t >= 0.).then_some(t)
    }
}

impl Aabb {
    /// Slab-method intersection with the given ray.
    /// https://gamedev.stackexchange.com/questions/18436/most-efficient-aabb-vs-ray-collision-algorithms
    ///
    /// Returns the distance to the entry of the box, or 0 when the ray
    /// origin is already inside. Infinities produced by the cached inverse
    /// direction fall out through the min/max reductions without branching.
    pub fn intersect_ray(&self, ray: &Ray) -> Option<f64> {
        debug_assert!(ray.is_valid());

        let origin = ray.origin();
        let inverse = ray.inverse_direction();

        let t1 = (self.min.x - origin.x) * inverse.x;
        let t2 = (self.max.x - origin.x) * inverse.x;
        let t3 = (self.min.y - origin.y) * inverse.y;
        let t4 = (self.max.y - origin.y) * inverse.y;
        let t5 = (self.min.z - origin.z) * inverse.z;
        let t6 = (self.max.z - origin.z) * inverse.z;

        let tmin = t1.min(t2).max(t3.min(t4)).max(t5.min(t6));
        let tmax = t1.max(t2).min(t3.max(t4)).min(t5.max(t6));

        // An origin inside the box reports a zero entry distance
        let t = tmin.max(0.).min(tmax);

        (tmax >= tmin && tmax >= 0.).then_some(t)
    }
}
