use crate::world::*;

#[test]
fn world_tables_cover_every_3d6_roll() {
    assert!(OVERALL_TYPE.rows().covers(3, 18));
    assert!(OVERALL_TYPE.rows().is_disjoint());
    for table in [&HOSTILE_WORLDS, &BARREN_WORLDS, &GARDEN_WORLDS] {
        assert!(table.rows().covers(3, 18), "{} is incomplete", table.name());
        assert!(table.rows().is_disjoint(), "{} overlaps", table.name());
    }
}

#[test]
fn overall_type_thresholds() {
    assert_eq!(overall_type(3), Ok(OverallType::Hostile));
    assert_eq!(overall_type(7), Ok(OverallType::Hostile));
    assert_eq!(overall_type(8), Ok(OverallType::Barren));
    assert_eq!(overall_type(13), Ok(OverallType::Barren));
    assert_eq!(overall_type(14), Ok(OverallType::Garden));
    assert_eq!(overall_type(18), Ok(OverallType::Garden));
}

#[test]
fn world_type_uses_the_overall_type_table() {
    assert_eq!(
        world_type(OverallType::Hostile, 8),
        Ok((WorldSize::Tiny, WorldClassifier::Sulfur))
    );
    assert_eq!(
        world_type(OverallType::Barren, 11),
        Ok((WorldSize::None, WorldClassifier::AsteroidBelt))
    );
    assert_eq!(
        world_type(OverallType::Garden, 17),
        Ok((WorldSize::Large, WorldClassifier::Garden))
    );
}

#[test]
fn only_asteroid_belts_have_no_size() {
    for table in [&HOSTILE_WORLDS, &BARREN_WORLDS, &GARDEN_WORLDS] {
        for (_, (size, classifier)) in table.rows().rows() {
            assert_eq!(
                *size == WorldSize::None,
                *classifier == WorldClassifier::AsteroidBelt
            );
        }
    }
}

#[test]
fn size_index_round_trips() {
    for size in [
        WorldSize::None,
        WorldSize::Tiny,
        WorldSize::Small,
        WorldSize::Standard,
        WorldSize::Large,
    ] {
        assert_eq!(WorldSize::from_index(size.index()), Some(size));
    }
    assert_eq!(WorldSize::from_index(4), None);
}

#[test]
fn classifier_display() {
    assert_eq!(WorldClassifier::AsteroidBelt.to_string(), "Asteroid Belt");
    assert_eq!(WorldClassifier::Garden.to_string(), "Garden");
}
