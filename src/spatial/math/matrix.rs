use crate::spatial::math::vector::V3c;

/// Row-major 3x3 matrix, used for object rotations.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Mat3 {
    pub(crate) rows: [V3c<f64>; 3],
}

impl Default for Mat3 {
    fn default() -> Self {
        Self::identity()
    }
}

impl Mat3 {
    pub fn identity() -> Self {
        Self {
            rows: [
                V3c::new(1., 0., 0.),
                V3c::new(0., 1., 0.),
                V3c::new(0., 0., 1.),
            ],
        }
    }

    /// Rotation of `angle` radians around the given axis, built with the
    /// Rodrigues formula. The axis need not be normalized.
    pub fn from_axis_angle(axis: &V3c<f64>, angle: f64) -> Self {
        let a = axis.normalized();
        let (sin, cos) = angle.sin_cos();
        let k = 1. - cos;
        Self {
            rows: [
                V3c::new(
                    cos + a.x * a.x * k,
                    a.x * a.y * k - a.z * sin,
                    a.x * a.z * k + a.y * sin,
                ),
                V3c::new(
                    a.y * a.x * k + a.z * sin,
                    cos + a.y * a.y * k,
                    a.y * a.z * k - a.x * sin,
                ),
                V3c::new(
                    a.z * a.x * k - a.y * sin,
                    a.z * a.y * k + a.x * sin,
                    cos + a.z * a.z * k,
                ),
            ],
        }
    }

    /// Rotation from an angle-scaled axis. A near-zero vector is the
    /// identity rotation.
    pub fn from_rotation_vector(rotation_vector: &V3c<f64>) -> Self {
        let angle = rotation_vector.length();
        if angle < f64::EPSILON {
            return Self::identity();
        }
        Self::from_axis_angle(rotation_vector, angle)
    }

    pub fn transpose(&self) -> Self {
        Self {
            rows: [
                V3c::new(self.rows[0].x, self.rows[1].x, self.rows[2].x),
                V3c::new(self.rows[0].y, self.rows[1].y, self.rows[2].y),
                V3c::new(self.rows[0].z, self.rows[1].z, self.rows[2].z),
            ],
        }
    }
}

use std::ops::Mul;

impl Mul<V3c<f64>> for Mat3 {
    type Output = V3c<f64>;

    fn mul(self, vec: V3c<f64>) -> V3c<f64> {
        V3c::new(
            self.rows[0].dot(&vec),
            self.rows[1].dot(&vec),
            self.rows[2].dot(&vec),
        )
    }
}

impl Mul<Mat3> for Mat3 {
    type Output = Mat3;

    fn mul(self, other: Mat3) -> Mat3 {
        let t = other.transpose();
        Mat3 {
            rows: [
                V3c::new(
                    self.rows[0].dot(&t.rows[0]),
                    self.rows[0].dot(&t.rows[1]),
                    self.rows[0].dot(&t.rows[2]),
                ),
                V3c::new(
                    self.rows[1].dot(&t.rows[0]),
                    self.rows[1].dot(&t.rows[1]),
                    self.rows[1].dot(&t.rows[2]),
                ),
                V3c::new(
                    self.rows[2].dot(&t.rows[0]),
                    self.rows[2].dot(&t.rows[1]),
                    self.rows[2].dot(&t.rows[2]),
                ),
            ],
        }
    }
}
