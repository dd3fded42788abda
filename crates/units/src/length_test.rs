use approx::assert_relative_eq;

use crate::length::{Length, KM_PER_AU};

#[test]
fn km_conversions() {
    assert_relative_eq!(Length::from_au(2.0).to_km(), 2.0 * KM_PER_AU);
    assert_relative_eq!(Length::from_km(KM_PER_AU).to_au(), 1.0);
}

#[test]
fn arithmetic_stays_in_au() {
    let inner = Length::from_au(0.5);
    let outer = Length::from_au(2.0);

    assert_relative_eq!((inner + outer).to_au(), 2.5);
    assert_relative_eq!((outer - inner).to_au(), 1.5);
    assert_relative_eq!((outer * 3.0).to_au(), 6.0);
    assert_relative_eq!((2.0 * inner).to_au(), 1.0);
    assert_relative_eq!((outer / 4.0).to_au(), 0.5);
    assert_relative_eq!(outer / inner, 4.0);
    assert_relative_eq!(outer.powi(3), 8.0);
}

#[test]
fn min_and_max_compare_distances() {
    let inner = Length::from_au(0.5);
    let outer = Length::from_au(2.0);

    assert_eq!(inner.max(outer), outer);
    assert_eq!(inner.min(outer), inner);
    assert!(Length::zero() < inner);
}

#[test]
fn serializes_as_a_bare_number() {
    let json = serde_json::to_string(&Length::from_au(1.5)).unwrap();
    assert_eq!(json, "1.5");
    assert_eq!(Length::from_au(1.5).to_string(), "1.500 AU");
}
