use rules::{MoonSize, WorldSize};

use crate::Moon;

pub(crate) fn moonlet() -> Moon {
    Moon {
        size: MoonSize::Moonlet,
        world_size: None,
        orbit: 2.5,
        orbital_period: 0.3,
        tidal_effect_on_world: 1.2,
        tidal_effect_from_planet: 40.0,
        density: 0.7,
        mass: 0.0001,
        diameter: 0.05,
        eccentricity: 0.0,
        apoapsis: 2.5,
        periapsis: 2.5,
        rotation_period: 0.3,
        is_tide_locked: true,
    }
}

#[test]
fn moonlets_have_no_world_size() {
    let moon = moonlet();
    assert!(!moon.is_major());
    assert!(moon.world_size.is_none());
}

#[test]
fn major_moon_round_trips_through_json() {
    let moon = Moon {
        size: MoonSize::Major,
        world_size: Some(WorldSize::Small),
        is_tide_locked: false,
        rotation_period: 0.1,
        ..moonlet()
    };

    let json = serde_json::to_string(&moon).unwrap();
    assert!(json.contains("\"worldSize\":\"Small\""));
    assert!(json.contains("\"isTideLocked\":false"));

    let back: Moon = serde_json::from_str(&json).unwrap();
    assert_eq!(back, moon);
}
