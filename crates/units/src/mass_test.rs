use approx::assert_relative_eq;

use crate::mass::{Mass, KG_PER_SOLAR_MASS};

#[test]
fn kg_conversions() {
    assert_relative_eq!(Mass::from_solar_masses(2.0).to_kg(), 3.977_84e30);
    assert_relative_eq!(Mass::from_kg(KG_PER_SOLAR_MASS).to_solar_masses(), 1.0);
}

#[test]
fn arithmetic_stays_in_solar_masses() {
    let primary = Mass::from_solar_masses(1.5);
    let companion = Mass::from_solar_masses(0.5);

    assert_relative_eq!((primary + companion).to_solar_masses(), 2.0);
    assert_relative_eq!((primary - companion).to_solar_masses(), 1.0);
    assert_relative_eq!((companion * 4.0).to_solar_masses(), 2.0);
    assert_relative_eq!((primary / 3.0).to_solar_masses(), 0.5);
    assert_relative_eq!(primary / companion, 3.0);
    assert_relative_eq!(Mass::from_solar_masses(4.0).sqrt(), 2.0);
}
