//! Generate a CSV of planets across many seeded systems
//!
//! Usage: cargo run -p star-system --example generate_systems [n_systems] [config.toml]
//!
//! Output: one row per planet on stdout

use star_system::{GeneratorConfig, RandomStream, generate_orbit};

fn main() {
    let mut args = std::env::args().skip(1);
    let n_systems: u32 = args.next().and_then(|n| n.parse().ok()).unwrap_or(100);
    let config = match args.next() {
        Some(path) => match GeneratorConfig::load(&path) {
            Ok(config) => config,
            Err(e) => {
                eprintln!("{}", e);
                std::process::exit(1);
            }
        },
        None => GeneratorConfig::default(),
    };

    println!(
        "seed,catalog_name,class,luminosity,hz_inner_au,hz_outer_au,planet_idx,orbit_au,size_earth,moons,tilt_deg,type,atmosphere,in_hz,tidally_locked,surface_temp_c"
    );

    let mut stream = RandomStream::new(0);
    for seed in 0..n_systems {
        stream.seed(seed);
        let system = match generate_orbit(&mut stream, &config) {
            Ok(system) => system,
            Err(e) => {
                eprintln!("seed {}: {}", seed, e);
                continue;
            }
        };
        let star = &system.parent_star;

        for (planet_idx, planet) in system.planets.iter().enumerate() {
            let surface = system
                .temperature(planet)
                .map(|t| format!("{:.1}", t.effective_celsius()))
                .unwrap_or_default();

            println!(
                "{},{},{},{:.4},{:.4},{:.4},{},{:.4},{:.3},{},{:.1},{},{},{},{},{}",
                seed,
                system.metadata.catalog_name(),
                star.spectral_class,
                star.luminosity,
                system.habitable_zone.inner_boundary_au,
                system.habitable_zone.outer_boundary_au,
                planet_idx,
                planet.orbit_radius_au,
                planet.size_earth_radii,
                planet.moon_count,
                planet.axial_tilt_degrees,
                planet.planet_type.name(),
                planet.atmosphere,
                planet.in_habitable_zone(star),
                planet.tidally_locked,
                surface,
            );
        }
    }

    eprintln!("Generated {} systems", n_systems);
}
