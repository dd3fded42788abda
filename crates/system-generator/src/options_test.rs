use crate::GeneratorOptions;

#[test]
fn defaults_ask_for_a_random_single_star_system() {
    let options = GeneratorOptions::default();

    assert_eq!(options.seed, 0);
    assert!(!options.multiple_stars);
    assert!(!options.force_habitable_planet);
    assert!(!options.allow_first_gas_giant_in_forbidden_zone);
}

#[test]
fn zero_seed_resolves_to_a_nonzero_seed() {
    let options = GeneratorOptions::default();
    for _ in 0..32 {
        assert_ne!(options.resolve_seed(), 0);
    }
}

#[test]
fn explicit_seed_is_kept() {
    assert_eq!(GeneratorOptions::with_seed(131313).resolve_seed(), 131313);
}

#[test]
fn builder_sets_flags() {
    let options = GeneratorOptions::with_seed(9)
        .multiple_stars(true)
        .force_habitable_planet(true)
        .allow_first_gas_giant_in_forbidden_zone(true);

    assert!(options.multiple_stars);
    assert!(options.force_habitable_planet);
    assert!(options.allow_first_gas_giant_in_forbidden_zone);
    assert_eq!(options.seed, 9);
}

#[test]
fn options_load_from_partial_json() {
    let options: GeneratorOptions =
        serde_json::from_str(r#"{ "seed": 42, "forceHabitablePlanet": true }"#).unwrap();

    assert_eq!(
        options,
        GeneratorOptions::with_seed(42).force_habitable_planet(true)
    );
}
