//! Generates one star system and prints it as JSON
//!
//! ```text
//! cargo run -p system-generator --example generate_system -- 131313
//! RUST_LOG=trace cargo run -p system-generator --example generate_system -- 7 --habitable --multiple
//! ```

use system_generator::{GeneratorOptions, SystemGenerator};

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let mut options = GeneratorOptions::default();
    for arg in std::env::args().skip(1) {
        match arg.as_str() {
            "--habitable" => options = options.force_habitable_planet(true),
            "--multiple" => options = options.multiple_stars(true),
            "--allow-forbidden-gas-giant" => {
                options = options.allow_first_gas_giant_in_forbidden_zone(true)
            }
            seed => match seed.parse() {
                Ok(seed) => options.seed = seed,
                Err(_) => {
                    log::error!("Unrecognised argument {}", seed);
                    std::process::exit(2);
                }
            },
        }
    }

    let generator = SystemGenerator::new(options);
    log::info!("Generating system with seed {}", generator.seed());

    match generator.generate() {
        Ok(system) => {
            log::info!("{}", system);
            match serde_json::to_string_pretty(&system) {
                Ok(json) => println!("{}", json),
                Err(error) => log::error!("Could not serialize system: {}", error),
            }
        }
        Err(error) => {
            log::error!("Generation failed ({}): {}", error.kind(), error);
            std::process::exit(1);
        }
    }
}
