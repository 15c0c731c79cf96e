use crate::octree::{Intersection, Primitive};
use crate::scene::object::Pose;
use crate::spatial::{math::vector::V3c, raytracing::Ray, Aabb, GeometryError};

/// Below this determinant magnitude a ray counts as parallel to the triangle.
pub const TRIANGLE_DETERMINANT_EPSILON: f64 = 1e-6;

/// A posed triangle. The vertices live in the local frame; the global
/// vertices, normal and bounding box are cached and recomputed on every pose
/// change, so the octree's box gate never reads stale data.
pub struct Triangle {
    pose: Pose,
    local_points: [V3c<f64>; 3],
    local_normal: V3c<f64>,
    global_points: [V3c<f64>; 3],
    global_normal: V3c<f64>,
    bounding_box: Aabb,
}

impl Triangle {
    /// A triangle from local-frame vertices. The normal follows
    /// `(p0 - p1) x (p2 - p1)`, flipped when `invert` is set; collinear
    /// vertices are rejected.
    pub fn new(
        position: V3c<f64>,
        point0: V3c<f64>,
        point1: V3c<f64>,
        point2: V3c<f64>,
        invert: bool,
    ) -> Result<Self, GeometryError> {
        let a = point0 - point1;
        let b = point2 - point1;
        let normal = if invert { -a.cross(b) } else { a.cross(b) };
        if 0. == normal.length() {
            return Err(GeometryError::CollinearVertices);
        }

        let mut triangle = Self {
            pose: Pose::new(position),
            local_points: [point0, point1, point2],
            local_normal: normal.normalized(),
            global_points: [V3c::default(); 3],
            global_normal: V3c::default(),
            bounding_box: Aabb::default(),
        };
        triangle.update_points();
        Ok(triangle)
    }

    /// A triangle from global-frame vertices; its position is set to their
    /// barycenter.
    pub fn from_global_points(
        point0: V3c<f64>,
        point1: V3c<f64>,
        point2: V3c<f64>,
        invert: bool,
    ) -> Result<Self, GeometryError> {
        let barycenter = (point0 + point1 + point2) / 3.;
        Self::new(
            barycenter,
            point0 - barycenter,
            point1 - barycenter,
            point2 - barycenter,
            invert,
        )
    }

    /// Vertex `i` of the triangle in the global frame; `i` must be 0, 1 or 2.
    pub fn point(&self, i: usize) -> V3c<f64> {
        self.global_points[i]
    }

    pub fn normal(&self) -> V3c<f64> {
        self.global_normal
    }

    pub fn bounding_box(&self) -> &Aabb {
        &self.bounding_box
    }

    pub fn set_position(&mut self, position: V3c<f64>) {
        self.pose.set_position(position);
        self.update_points();
    }

    pub fn translate(&mut self, displacement: V3c<f64>) {
        self.pose.translate(displacement);
        self.update_points();
    }

    pub fn rotate(&mut self, axis: &V3c<f64>, angle: f64) {
        self.pose.rotate(axis, angle);
        self.update_points();
    }

    pub fn rotate_by_vector(&mut self, rotation_vector: &V3c<f64>) {
        self.pose.rotate_by_vector(rotation_vector);
        self.update_points();
    }

    /// Recomputes the cached global vertices, normal and bounding box.
    fn update_points(&mut self) {
        for (global, local) in self.global_points.iter_mut().zip(&self.local_points) {
            *global = self.pose.to_global(local);
        }
        self.global_normal = self.pose.direction_to_global(&self.local_normal);
        self.bounding_box = Aabb::enclosing(&self.global_points);
    }
}

impl Primitive for Triangle {
    fn position(&self) -> V3c<f64> {
        self.pose.position()
    }

    /// Möller-Trumbore intersection, gated by the cached bounding box.
    /// https://tavianator.com/2014/ray_triangle.html
    fn intersect(&self, ray: &Ray) -> Option<Intersection> {
        self.bounding_box.intersect_ray(ray)?;

        let [a, b, c] = self.global_points;
        let edge1 = b - a;
        let edge2 = c - a;
        let normal = edge1.cross(edge2);
        let det = -ray.direction().dot(&normal);
        if det.abs() < TRIANGLE_DETERMINANT_EPSILON {
            return None;
        }
        let inverse_det = 1. / det;

        let ao = ray.origin() - a;
        let dao = ao.cross(ray.direction());

        let u = edge2.dot(&dao) * inverse_det;
        let v = -edge1.dot(&dao) * inverse_det;
        let distance = ao.dot(&normal) * inverse_det;

        (distance >= 0. && u >= 0. && v >= 0. && (u + v) <= 1.)
            .then_some(Intersection { u, v, distance })
    }
}
