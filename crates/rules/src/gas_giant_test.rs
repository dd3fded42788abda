use approx::assert_relative_eq;

use crate::gas_giant::*;
use crate::world::WorldSize;

#[test]
fn gas_giant_tables_cover_every_roll() {
    for table in [
        &SMALL_GAS_GIANT,
        &MEDIUM_GAS_GIANT,
        &LARGE_GAS_GIANT,
    ] {
        assert!(table.rows().covers(3, 18), "{} is incomplete", table.name());
        assert!(table.rows().is_disjoint(), "{} overlaps", table.name());
    }
    assert!(GAS_GIANT_ARRANGEMENT.rows().covers(3, 18));
    assert!(GAS_GIANT_ARRANGEMENT.rows().is_disjoint());
    assert!(GAS_GIANT_SIZE.rows().covers(3, 18));
    assert!(GAS_GIANT_SIZE.rows().is_disjoint());
}

#[test]
fn arrangement_thresholds() {
    assert_eq!(gas_giant_arrangement(10), Ok(GasGiantArrangement::None));
    assert_eq!(gas_giant_arrangement(12), Ok(GasGiantArrangement::Conventional));
    assert_eq!(gas_giant_arrangement(13), Ok(GasGiantArrangement::Eccentric));
    assert_eq!(gas_giant_arrangement(18), Ok(GasGiantArrangement::Epistellar));
}

#[test]
fn placement_depends_on_the_snow_line() {
    assert_eq!(GasGiantArrangement::None.placement_threshold(false), None);
    assert_eq!(GasGiantArrangement::Conventional.placement_threshold(true), None);
    assert_eq!(GasGiantArrangement::Conventional.placement_threshold(false), Some(15));
    assert_eq!(GasGiantArrangement::Eccentric.placement_threshold(true), Some(8));
    assert_eq!(GasGiantArrangement::Eccentric.placement_threshold(false), Some(14));
    assert_eq!(GasGiantArrangement::Epistellar.placement_threshold(true), Some(6));
    assert_eq!(GasGiantArrangement::Epistellar.placement_threshold(false), Some(14));
}

#[test]
fn mass_and_density_by_size() {
    let small = gas_giant_mass_density(GasGiantSize::Small, 3).unwrap();
    assert_eq!(small.mass, 10.0);
    assert_eq!(small.density, 0.42);

    let medium = gas_giant_mass_density(GasGiantSize::Medium, 12).unwrap();
    assert_eq!(medium.mass, 250.0);
    assert_eq!(medium.density, 0.22);

    let large = gas_giant_mass_density(GasGiantSize::Large, 18).unwrap();
    assert_eq!(large.mass, 4000.0);
    assert_eq!(large.density, 1.6);
}

#[test]
fn diameter_is_cube_root_of_mass_over_density() {
    let jupiter = gas_giant_mass_density(GasGiantSize::Medium, 16).unwrap();
    assert_relative_eq!(jupiter.diameter(), (450.0_f64 / 0.27).cbrt());
    assert_relative_eq!(jupiter.diameter().powi(3) * 0.27, 450.0, max_relative = 1e-12);
}

#[test]
fn gas_giant_sizes_map_to_moon_parent_sizes() {
    assert_eq!(gas_giant_size(10), Ok(GasGiantSize::Small));
    assert_eq!(gas_giant_size(11), Ok(GasGiantSize::Medium));
    assert_eq!(gas_giant_size(17), Ok(GasGiantSize::Large));
    assert_eq!(GasGiantSize::Small.world_size(), WorldSize::Small);
    assert_eq!(GasGiantSize::Medium.world_size(), WorldSize::Standard);
    assert_eq!(GasGiantSize::Large.world_size(), WorldSize::Large);
}
