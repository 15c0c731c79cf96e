use crate::scene::object::Pose;
use crate::spatial::math::vector::V3c;

/// A point light with an RGB color in `[0, 1]` per channel and a byte
/// intensity.
pub struct LightSource {
    pose: Pose,
    color: V3c<f64>,
    intensity: u8,
}

impl LightSource {
    pub fn new(position: V3c<f64>, color: V3c<f64>, intensity: u8) -> Self {
        Self {
            pose: Pose::new(position),
            color,
            intensity,
        }
    }

    pub fn position(&self) -> V3c<f64> {
        self.pose.position()
    }

    pub fn color(&self) -> V3c<f64> {
        self.color
    }

    pub fn intensity(&self) -> u8 {
        self.intensity
    }

    pub fn set_position(&mut self, position: V3c<f64>) {
        self.pose.set_position(position);
    }

    pub fn translate(&mut self, displacement: V3c<f64>) {
        self.pose.translate(displacement);
    }
}
