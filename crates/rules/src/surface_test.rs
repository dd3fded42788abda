use approx::assert_relative_eq;

use crate::surface::*;
use crate::world::{
    WorldClassifier, WorldSize, WorldType, BARREN_WORLDS, GARDEN_WORLDS, HOSTILE_WORLDS,
};

/// Every size and classifier pair the generator synthesizes: rolled worlds
/// plus the moon templates
fn producible_world_types() -> Vec<WorldType> {
    let mut types: Vec<WorldType> = [&HOSTILE_WORLDS, &BARREN_WORLDS, &GARDEN_WORLDS]
        .iter()
        .flat_map(|table| table.rows().rows().iter().map(|(_, world)| *world))
        .collect();
    types.extend([
        (WorldSize::Tiny, WorldClassifier::Rock),
        (WorldSize::Small, WorldClassifier::Rock),
        (WorldSize::Standard, WorldClassifier::Hadean),
    ]);
    types.sort_by_key(|(size, classifier)| (size.index(), format!("{:?}", classifier)));
    types.dedup();
    types
}

#[test]
fn keyed_tables_cover_producible_worlds() {
    for (size, classifier) in producible_world_types() {
        assert!(surface_temperature(size, classifier).is_ok(), "temperature {size} {classifier}");
        assert!(blackbody_correction(size, classifier, 1.0, 0.5).is_ok(), "blackbody {size} {classifier}");
        assert!(core_type(size, classifier).is_ok(), "core {size} {classifier}");
        assert!(pressure_factor(size, classifier).is_ok(), "pressure {size} {classifier}");
        assert!(size_constraint(size).is_ok(), "size {size}");
    }
}

#[test]
fn core_density_tables_cover_every_roll() {
    for core in [CoreType::Icy, CoreType::SmallIron, CoreType::LargeIron] {
        let table = core.density_table();
        assert!(table.rows().covers(3, 18), "{} is incomplete", table.name());
        assert!(table.rows().is_disjoint(), "{} overlaps", table.name());
    }
    assert_eq!(core_density(CoreType::LargeIron, 12), Ok(1.0));
    assert_eq!(core_density(CoreType::Icy, 18), Ok(0.7));
}

#[test]
fn temperature_steps_from_the_band_minimum() {
    let garden = surface_temperature(WorldSize::Standard, WorldClassifier::Garden).unwrap();
    assert_eq!(garden.temperature(3), 250.0);
    assert_eq!(garden.temperature(18), 340.0);

    let greenhouse = surface_temperature(WorldSize::Large, WorldClassifier::Greenhouse).unwrap();
    assert_eq!(greenhouse.temperature(18), greenhouse.max);
}

#[test]
fn blackbody_correction_applies_greenhouse_factor() {
    let garden =
        blackbody_correction(WorldSize::Standard, WorldClassifier::Garden, 1.0, 0.7).unwrap();
    assert_relative_eq!(garden, 0.88 * 1.16, epsilon = 1e-12);

    let rock = blackbody_correction(WorldSize::Tiny, WorldClassifier::Rock, 1.5, 0.0).unwrap();
    assert_relative_eq!(rock, 0.97);
}

#[test]
fn ocean_absorption_depends_on_water_coverage() {
    assert_eq!(ocean_absorption(0.1), 0.95);
    assert_eq!(ocean_absorption(0.5), 0.92);
    assert_eq!(ocean_absorption(0.9), 0.88);
    assert_eq!(ocean_absorption(1.0), 0.84);

    let ocean =
        blackbody_correction(WorldSize::Large, WorldClassifier::Ocean, 0.0, 0.3).unwrap();
    assert_eq!(ocean, 0.92);
}

#[test]
fn unknown_world_type_is_a_configuration_error() {
    assert!(surface_temperature(WorldSize::Large, WorldClassifier::Hadean).is_err());
    assert!(core_type(WorldSize::Tiny, WorldClassifier::Garden).is_err());
}

#[test]
fn climate_bands() {
    assert_eq!(WorldClimate::from_temperature(200.0), WorldClimate::Frozen);
    assert_eq!(WorldClimate::from_temperature(244.0), WorldClimate::VeryCold);
    assert_eq!(WorldClimate::from_temperature(288.0), WorldClimate::Cool);
    assert_eq!(WorldClimate::from_temperature(295.0), WorldClimate::Normal);
    assert_eq!(WorldClimate::from_temperature(333.0), WorldClimate::Hot);
    assert_eq!(WorldClimate::from_temperature(340.0), WorldClimate::VeryHot);
    assert_eq!(WorldClimate::from_temperature(900.0), WorldClimate::Infernal);
}

#[test]
fn undefined_temperature_reads_as_normal() {
    assert_eq!(WorldClimate::from_temperature(f64::NAN), WorldClimate::Normal);
}

#[test]
fn pressure_bands() {
    assert_eq!(AtmosphericPressureCategory::from_pressure(0.0), AtmosphericPressureCategory::Trace);
    assert_eq!(AtmosphericPressureCategory::from_pressure(0.3), AtmosphericPressureCategory::VeryThin);
    assert_eq!(AtmosphericPressureCategory::from_pressure(1.0), AtmosphericPressureCategory::Standard);
    assert_eq!(AtmosphericPressureCategory::from_pressure(5.0), AtmosphericPressureCategory::VeryDense);
    assert_eq!(AtmosphericPressureCategory::from_pressure(92.0), AtmosphericPressureCategory::Superdense);
    assert_eq!(
        AtmosphericPressureCategory::from_pressure(f64::NAN),
        AtmosphericPressureCategory::Standard
    );
}
