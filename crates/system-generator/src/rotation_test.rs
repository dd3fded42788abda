use crate::rotation::clamp_rotation;
use crate::{GeneratorOptions, SystemGenerator};

#[test]
fn rotation_slower_than_the_orbit_is_clamped_and_locked() {
    assert_eq!(clamp_rotation(30.0, false, 12.0), (12.0, true));
}

#[test]
fn faster_rotation_is_kept() {
    assert_eq!(clamp_rotation(20.0, false, 400.0), (20.0, false));
    assert_eq!(clamp_rotation(400.0, true, 400.0), (400.0, true));
}

#[test]
fn locked_bodies_turn_once_per_orbit() {
    let mut generator = SystemGenerator::new(GeneratorOptions::with_seed(5));
    assert_eq!(generator.resolve_rotation(true, 10, 300.0).unwrap(), (300.0, true));
}

#[test]
fn rolled_rotation_never_exceeds_the_orbit() {
    let mut generator = SystemGenerator::new(GeneratorOptions::with_seed(17));
    for _ in 0..500 {
        let (rotation, locked) = generator.resolve_rotation(false, 18, 29.5).unwrap();
        assert!(rotation <= 29.5);
        assert!(rotation >= 21.0);
        // no roll lands on a half hour, so only clamping gives 29.5
        assert_eq!(locked, rotation == 29.5);
    }
}

#[test]
fn free_rotation_on_a_long_orbit_is_at_least_the_roll() {
    let mut generator = SystemGenerator::new(GeneratorOptions::with_seed(23));
    for _ in 0..500 {
        let (rotation, locked) = generator.resolve_rotation(false, 10, 1.0e6).unwrap();
        assert!(!locked);
        // natural 3d6 + 10, or an unnatural period of whole days
        assert!((13.0..=28.0).contains(&rotation) || rotation % 24.0 == 0.0);
    }
}
