use crate::rotation::*;
use crate::world::WorldSize;

#[test]
fn unnatural_rotation_covers_2d6() {
    assert!(UNNATURAL_ROTATION.rows().covers(2, 12));
    assert!(UNNATURAL_ROTATION.rows().is_disjoint());
}

#[test]
fn unnatural_rotation_outcomes() {
    assert_eq!(unnatural_rotation(2), Ok(UnnaturalRotation::Keep));
    assert_eq!(unnatural_rotation(6), Ok(UnnaturalRotation::Keep));
    assert_eq!(unnatural_rotation(7), Ok(UnnaturalRotation::Days(2.0)));
    assert_eq!(unnatural_rotation(11), Ok(UnnaturalRotation::Days(50.0)));
    assert_eq!(unnatural_rotation(12), Ok(UnnaturalRotation::Days(12.0)));
}

#[test]
fn larger_worlds_spin_faster() {
    assert_eq!(rotation_modifier(WorldSize::Large), 6);
    assert_eq!(rotation_modifier(WorldSize::Standard), 10);
    assert_eq!(rotation_modifier(WorldSize::Small), 14);
    assert_eq!(rotation_modifier(WorldSize::Tiny), 18);
    assert_eq!(rotation_modifier(WorldSize::None), 0);
}

#[test]
fn unnatural_trigger() {
    assert!(!is_unnatural(36, 15));
    assert!(is_unnatural(37, 3));
    assert!(is_unnatural(20, 16));
}
