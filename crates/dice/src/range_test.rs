use crate::{RangeTable, RollRange};

static TABLE: RangeTable<&str> = RangeTable::new(&[
    (RollRange::at_most(6), "low"),
    (RollRange::new(7, 14), "mid"),
    (RollRange::at_least(15), "high"),
]);

#[test]
fn range_bounds_are_inclusive() {
    let range = RollRange::new(7, 9);

    assert!(!range.contains(6));
    assert!(range.contains(7));
    assert!(range.contains(9));
    assert!(!range.contains(10));
}

#[test]
fn open_ranges_extend_past_the_dice() {
    assert!(RollRange::at_most(3).contains(-40));
    assert!(RollRange::at_least(18).contains(31));
    assert!(!RollRange::at_least(18).contains(17));
}

#[test]
fn lookup_finds_matching_row() {
    assert_eq!(TABLE.lookup(-3), Some(&"low"));
    assert_eq!(TABLE.lookup(6), Some(&"low"));
    assert_eq!(TABLE.lookup(7), Some(&"mid"));
    assert_eq!(TABLE.lookup(14), Some(&"mid"));
    assert_eq!(TABLE.lookup(25), Some(&"high"));
}

#[test]
fn lookup_first_match_wins() {
    static OVERLAPPING: RangeTable<u8> = RangeTable::new(&[
        (RollRange::new(3, 10), 1),
        (RollRange::new(8, 18), 2),
    ]);

    assert_eq!(OVERLAPPING.lookup(9), Some(&1));
    assert_eq!(OVERLAPPING.lookup(11), Some(&2));
    assert!(!OVERLAPPING.is_disjoint());
}

#[test]
fn lookup_miss_returns_none() {
    static GAPPED: RangeTable<u8> = RangeTable::new(&[
        (RollRange::new(3, 5), 1),
        (RollRange::new(7, 18), 2),
    ]);

    assert_eq!(GAPPED.lookup(6), None);
    assert!(!GAPPED.covers(3, 18));
    assert!(GAPPED.is_disjoint());
}

#[test]
fn table_validation() {
    assert!(TABLE.is_disjoint());
    assert!(TABLE.covers(-20, 40));
    assert_eq!(TABLE.len(), 3);
}

#[test]
fn range_display() {
    assert_eq!(RollRange::new(3, 6).to_string(), "3..=6");
    assert_eq!(RollRange::exactly(10).to_string(), "10");
    assert_eq!(RollRange::at_most(2).to_string(), "..=2");
    assert_eq!(RollRange::at_least(19).to_string(), "19..");
}
