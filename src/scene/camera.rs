use crate::scene::object::Pose;
use crate::spatial::{math::vector::V3c, raytracing::Ray};

/// A pinhole camera projecting one ray per pixel through a plane at
/// `projection_distance` in front of the eye. Rays are precomputed in
/// row-major `(vertical, horizontal)` order and refreshed on any pose change.
pub struct Camera {
    pose: Pose,
    horizontal_fov: f64,
    vertical_fov: f64,
    horizontal_resolution: u32,
    vertical_resolution: u32,
    horizontal_rad_per_pixel: f64,
    vertical_rad_per_pixel: f64,
    projection_distance: f64,
    rays: Vec<Ray>,
}

impl Camera {
    /// A camera at `position` with the default orientation (facing +y,
    /// up +z). Fields of view are in radians.
    pub fn new(
        position: V3c<f64>,
        horizontal_fov: f64,
        vertical_fov: f64,
        horizontal_resolution: u32,
        vertical_resolution: u32,
        projection_distance: f64,
    ) -> Self {
        debug_assert!(horizontal_resolution > 0 && vertical_resolution > 0);
        let mut camera = Self {
            pose: Pose::new(position),
            horizontal_rad_per_pixel: horizontal_fov / horizontal_resolution as f64,
            vertical_rad_per_pixel: vertical_fov / vertical_resolution as f64,
            horizontal_fov,
            vertical_fov,
            horizontal_resolution,
            vertical_resolution,
            projection_distance,
            rays: Vec::new(),
        };
        camera.update_rays();
        camera
    }

    pub fn position(&self) -> V3c<f64> {
        self.pose.position()
    }

    pub fn horizontal_fov(&self) -> f64 {
        self.horizontal_fov
    }

    pub fn vertical_fov(&self) -> f64 {
        self.vertical_fov
    }

    /// The frame dimensions as `(vertical, horizontal)` pixel counts.
    pub fn dimensions(&self) -> (u32, u32) {
        (self.vertical_resolution, self.horizontal_resolution)
    }

    /// The global position of pixel `(i, j)` on the projection plane, with
    /// `i` indexing rows top to bottom and `j` columns.
    pub fn pixel_position(&self, i: u32, j: u32) -> V3c<f64> {
        let vertical_angle =
            -(i as f64 - self.vertical_resolution as f64 / 2.) * self.vertical_rad_per_pixel;
        let horizontal_angle =
            (j as f64 - self.horizontal_resolution as f64 / 2.) * self.horizontal_rad_per_pixel;

        self.pose.position()
            + self.pose.forward() * self.projection_distance
            + self.pose.up() * (vertical_angle.tan() * self.projection_distance)
            + self.pose.right() * (horizontal_angle.tan() * self.projection_distance)
    }

    /// The precomputed ray through pixel `(i, j)`.
    pub fn ray(&self, i: u32, j: u32) -> &Ray {
        &self.rays[(i * self.horizontal_resolution + j) as usize]
    }

    /// All pixel rays, row-major.
    pub fn rays(&self) -> &[Ray] {
        &self.rays
    }

    pub fn set_position(&mut self, position: V3c<f64>) {
        self.pose.set_position(position);
        self.update_rays();
    }

    pub fn translate(&mut self, displacement: V3c<f64>) {
        self.pose.translate(displacement);
        self.update_rays();
    }

    pub fn rotate(&mut self, axis: &V3c<f64>, angle: f64) {
        self.pose.rotate(axis, angle);
        self.update_rays();
    }

    pub fn rotate_by_vector(&mut self, rotation_vector: &V3c<f64>) {
        self.pose.rotate_by_vector(rotation_vector);
        self.update_rays();
    }

    fn update_rays(&mut self) {
        self.rays.clear();
        self.rays
            .reserve((self.vertical_resolution * self.horizontal_resolution) as usize);
        let origin = self.pose.position();
        for i in 0..self.vertical_resolution {
            for j in 0..self.horizontal_resolution {
                let pixel = self.pixel_position(i, j);
                self.rays.push(Ray::new(origin, pixel - origin));
            }
        }
    }
}
