pub mod camera;
pub mod light;
pub mod object;
pub mod triangle;


pub use camera::Camera;
pub use light::LightSource;
pub use object::Pose;
pub use triangle::Triangle;

use crate::octree::{Octree, OctreeError};
use crate::render::Frame;
use crate::spatial::raytracing::Ray;
use tracing::info;

/// A camera, a light and a set of triangles, indexed by an octree keyed off
/// the camera position. The scene borrows everything it renders; callers
/// keep the objects alive and unmoved for its lifetime.
pub struct Scene<'a> {
    camera: &'a Camera,
    light: Option<&'a LightSource>,
    triangles: Vec<&'a Triangle>,
    octree: Octree<'a, Triangle>,
}

impl<'a> Scene<'a> {
    pub fn new(
        camera: &'a Camera,
        octree_max_depth: u32,
        octree_initial_size: f64,
        octree_max_neighbors: u32,
    ) -> Result<Self, OctreeError> {
        Ok(Self {
            octree: Octree::new(
                octree_max_depth,
                octree_initial_size,
                octree_max_neighbors,
                camera.position(),
            )?,
            camera,
            light: None,
            triangles: Vec::new(),
        })
    }

    pub fn set_light_source(&mut self, light: &'a LightSource) {
        self.light = Some(light);
    }

    /// Registers a triangle with both the object list and the octree.
    pub fn add_triangle(&mut self, triangle: &'a Triangle) -> Result<(), OctreeError> {
        self.octree.insert(triangle)?;
        self.triangles.push(triangle);
        Ok(())
    }

    pub fn octree(&self) -> &Octree<'a, Triangle> {
        &self.octree
    }

    pub fn triangles(&self) -> &[&'a Triangle] {
        &self.triangles
    }

    /// Traces one ray per pixel and shades hits with a single Lambert-like
    /// term towards the light source.
    pub fn render(&self) -> Frame {
        let (height, width) = self.camera.dimensions();
        let mut frame = Frame::new(height, width);
        let mut hits = 0usize;
        for i in 0..height {
            for j in 0..width {
                let ray = self.camera.ray(i, j);
                if let Some((triangle, distance)) = self.octree.trace(ray) {
                    hits += 1;
                    frame.set(i, j, self.shade(triangle, ray, distance));
                }
            }
        }
        info!(hits, pixels = (height * width) as usize, "render pass done");
        frame
    }

    fn shade(&self, triangle: &Triangle, ray: &Ray, distance: f64) -> [u8; 3] {
        let Some(light) = self.light else {
            return [0; 3];
        };
        let hit_point = ray.point_at(distance);
        let towards_light = (light.position() - hit_point).normalized();
        let lambert = triangle.normal().dot(&towards_light).max(0.);
        let shade = lambert * light.intensity() as f64;
        let color = light.color();
        [
            (shade * color.x) as u8,
            (shade * color.y) as u8,
            (shade * color.z) as u8,
        ]
    }
}
