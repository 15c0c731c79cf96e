use crate::spatial::{
    math::{matrix::Mat3, vector::V3c},
    GeometryError,
};

/// Position and orientation of an object in the global frame. The rotation
/// matrix maps local coordinates to global ones; the basis vectors are kept
/// in step with it across rotations.
#[derive(Debug, Clone, Copy)]
pub struct Pose {
    position: V3c<f64>,
    up: V3c<f64>,
    forward: V3c<f64>,
    right: V3c<f64>,
    rotation: Mat3,
}

impl Pose {
    /// Default orientation: up along +z, forward along +y.
    pub fn new(position: V3c<f64>) -> Self {
        Self {
            position,
            up: V3c::new(0., 0., 1.),
            forward: V3c::new(0., 1., 0.),
            right: V3c::new(0., 1., 0.).cross(V3c::new(0., 0., 1.)),
            rotation: Mat3::identity(),
        }
    }

    /// A pose with explicit up/forward axes; fails when they are parallel.
    pub fn with_axes(
        position: V3c<f64>,
        up: V3c<f64>,
        forward: V3c<f64>,
    ) -> Result<Self, GeometryError> {
        let up = up.normalized();
        let forward = forward.normalized();
        let right = forward.cross(up);
        if right.length() < f64::EPSILON {
            return Err(GeometryError::ParallelAxes);
        }
        Ok(Self {
            position,
            up,
            forward,
            right: right.normalized(),
            rotation: Mat3::identity(),
        })
    }

    pub fn position(&self) -> V3c<f64> {
        self.position
    }

    pub fn up(&self) -> V3c<f64> {
        self.up
    }

    pub fn forward(&self) -> V3c<f64> {
        self.forward
    }

    pub fn right(&self) -> V3c<f64> {
        self.right
    }

    pub fn rotation(&self) -> Mat3 {
        self.rotation
    }

    pub fn set_position(&mut self, position: V3c<f64>) {
        self.position = position;
    }

    /// Moves the object; the basis vectors are unaffected.
    pub fn translate(&mut self, displacement: V3c<f64>) {
        self.position += displacement;
    }

    /// Rotates the basis around the given axis by `angle` radians.
    pub fn rotate(&mut self, axis: &V3c<f64>, angle: f64) {
        self.apply_rotation(Mat3::from_axis_angle(axis, angle));
    }

    /// Rotates by an angle-scaled axis vector.
    pub fn rotate_by_vector(&mut self, rotation_vector: &V3c<f64>) {
        self.apply_rotation(Mat3::from_rotation_vector(rotation_vector));
    }

    fn apply_rotation(&mut self, rotation: Mat3) {
        self.up = rotation * self.up;
        self.forward = rotation * self.forward;
        self.right = rotation * self.right;
        self.rotation = rotation * self.rotation;
    }

    /// Maps a point from the object's local frame to the global frame.
    pub fn to_global(&self, local: &V3c<f64>) -> V3c<f64> {
        self.position + self.rotation * *local
    }

    /// Rotates a local direction into the global frame, without translation.
    pub fn direction_to_global(&self, local: &V3c<f64>) -> V3c<f64> {
        self.rotation * *local
    }
}
