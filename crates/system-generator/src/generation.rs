//! The generation pipeline
//!
//! One [`SystemGenerator`] performs exactly one run. It owns the dice roller
//! for that run, so every draw happens in a fixed order and a seed always
//! reproduces the same system.

use dice::DiceRoller;
use star_system::{ForbiddenZone, Star, StarSystem, World};

use crate::constants::PhysicalConstants;
use crate::error::Result;
use crate::options::GeneratorOptions;

/// Generates a single star system
///
/// # Example
/// ```
/// use system_generator::{GeneratorOptions, PhysicalConstants, SystemGenerator};
///
/// let options = GeneratorOptions::with_seed(7).multiple_stars(true);
/// let system = SystemGenerator::new(options)
///     .with_constants(PhysicalConstants::STANDARD)
///     .generate()
///     .unwrap();
/// assert!(system.primary_star().is_some());
/// ```
#[derive(Debug)]
pub struct SystemGenerator {
    pub(crate) options: GeneratorOptions,
    pub(crate) constants: PhysicalConstants,
    pub(crate) dice: DiceRoller,
    seed: u64,
}

impl SystemGenerator {
    /// Resolves the seed and prepares the run's dice roller
    pub fn new(options: GeneratorOptions) -> Self {
        let seed = options.resolve_seed();
        Self {
            options,
            constants: PhysicalConstants::STANDARD,
            dice: DiceRoller::new(seed),
            seed,
        }
    }

    pub fn with_constants(mut self, constants: PhysicalConstants) -> Self {
        self.constants = constants;
        self
    }

    /// Seed this run rolls with, never 0
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Runs every stage and assembles the system
    pub fn generate(mut self) -> Result<StarSystem> {
        let stars = self.generate_stars()?;
        let worlds = match stars.iter().find(|star| star.is_primary) {
            Some(primary) => self.generate_worlds(primary, &stars)?,
            None => Vec::new(),
        };

        log::debug!(
            "Generated system {} with {} stars and {} worlds",
            self.seed,
            stars.len(),
            worlds.len()
        );

        Ok(StarSystem {
            seed: self.seed,
            stars,
            worlds,
        })
    }

    /// Primary star followed by any companions
    fn generate_stars(&mut self) -> Result<Vec<Star>> {
        let count = self.roll_star_count()?;
        let mut stars = Vec::with_capacity(count);
        stars.push(self.generate_star(0)?);
        for index in 1..count {
            stars.push(self.generate_star(index)?);
        }
        log::debug!("Generated {} stars", stars.len());
        Ok(stars)
    }

    /// Worlds of the primary star, ordered by orbital radius
    ///
    /// Companion stars carry no worlds; their forbidden zones only constrain
    /// the primary's orbits.
    fn generate_worlds(&mut self, primary: &Star, stars: &[Star]) -> Result<Vec<World>> {
        let forbidden: Vec<ForbiddenZone> = stars
            .iter()
            .filter_map(|star| star.forbidden_zone().copied())
            .collect();

        let mut layout = self.roll_orbit_layout(primary)?;
        log::debug!(
            "{} candidate orbits, spacing {}, {} gas giant arrangement",
            layout.orbits.len(),
            layout.spacing,
            layout.arrangement
        );

        let mut worlds = Vec::new();
        if self.options.force_habitable_planet {
            worlds.push(self.place_habitable_world(primary, &mut layout.orbits, &forbidden)?);
        }

        self.place_gas_giants(primary, &layout, &forbidden, &mut worlds)?;
        self.place_planets(primary, &layout.orbits, &forbidden, &mut worlds)?;

        worlds.sort_by(|a, b| a.orbital_radius().total_cmp(&b.orbital_radius()));
        Ok(worlds)
    }
}

/// Generates one system with the standard constants
pub fn generate_star_system(options: &GeneratorOptions) -> Result<StarSystem> {
    SystemGenerator::new(*options).generate()
}
