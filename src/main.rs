//! Icoplanet - procedural planet generator
//!
//! Builds a geodesic sphere, displaces it with fractal Perlin terrain and
//! reports the buffers a renderer would upload.

use clap::Parser;
use std::time::Instant;

use icoplanet::cli::Args;
use icoplanet::noise::{NoiseKind, NoiseMap};
use icoplanet::planet::Planet;
use icoplanet::sphere::Icosphere;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();
    let args = Args::parse();

    let sphere_params = args.sphere_params();
    let seed = args.resolve_seed();
    let planet_params = args.planet_params(seed);

    println!("Icoplanet - procedural planet generator");
    println!(
        "  Sphere: radius {}, depth {}, center {}",
        sphere_params.radius, sphere_params.recursion_depth, sphere_params.center
    );
    println!(
        "  Noise: seed {}, {} octaves, lacunarity {}, H {}, offset {}, period {}",
        seed,
        planet_params.noise.octaves,
        planet_params.noise.lacunarity,
        planet_params.noise.h,
        planet_params.noise.offset,
        planet_params.noise.period
    );

    let start = Instant::now();

    let mesh = Icosphere::new(&sphere_params)?;
    let planet = Planet::new(mesh, planet_params)?;

    let (lo, hi) = planet.height_range();
    let vertex_buffer = planet.vertex_buffer();
    let indices = planet.mesh().triangle_indices();

    println!(
        "  Planet: {} vertices, {} triangles ({} bytes of vertex data)",
        vertex_buffer.len(),
        indices.len() / 3,
        std::mem::size_of_val(vertex_buffer.as_slice())
    );
    println!("  Heights: [{:.3}, {:.3}]", lo, hi);
    println!(
        "  Water: radius {:.2}, {} vertices",
        planet.water().radius(),
        planet.water().vertex_count()
    );

    if let Some(path) = &args.noise_map {
        let size = args.noise_map_size;
        let map = NoiseMap::sample(
            planet.noise(),
            size,
            size,
            planet.params().noise.period,
            NoiseKind::Fbm,
        )?;
        map.to_image().save(path)?;
        println!("  Noise map: {} ({}x{})", path, size, size);
    }

    println!("  Time: {:.2}ms", start.elapsed().as_secs_f64() * 1000.0);

    Ok(())
}
