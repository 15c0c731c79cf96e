use octaray_rs::scene::{Camera, LightSource, Scene, Triangle};
use octaray_rs::spatial::math::vector::V3c;

use std::time::Instant;
use tracing::info;

const WIDTH: u32 = 800;
const HEIGHT: u32 = 800;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    // A quad of two triangles three units in front of the camera
    let a = V3c::new(-1., 0., 1.);
    let b = V3c::new(1., 0., 1.);
    let c = V3c::new(1., 0., -1.);
    let d = V3c::new(-1., 0., -1.);
    let position = V3c::new(0., 3., 0.);

    let triangle = Triangle::new(position, a, b, c, false)?;
    let mut triangle2 = Triangle::new(position, a, c, d, false)?;
    triangle2.rotate(&V3c::new(1., 0., 0.), std::f64::consts::FRAC_PI_4);

    let light = LightSource::new(V3c::new(0., 0., 5.), V3c::unit(1.), 255);

    // The camera starts at the origin, facing +y
    let camera = Camera::new(V3c::unit(0.), 1.7, 1.7, WIDTH, HEIGHT, 1.);

    let mut scene = Scene::new(&camera, 5, 2.5, 3)?;
    scene.set_light_source(&light);
    scene.add_triangle(&triangle)?;
    scene.add_triangle(&triangle2)?;
    info!("scene assembled");

    let start = Instant::now();
    let frame = scene.render();
    info!(elapsed_ms = start.elapsed().as_millis() as u64, "render completed");

    frame.to_bitmap("render.bmp")?;
    frame.to_csv("render.csv")?;
    info!("frame exported to render.bmp and render.csv");

    Ok(())
}
