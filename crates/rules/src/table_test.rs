use dice::RollRange;

use crate::error::TableError;
use crate::table::{KeyedTable, RuleTable};

static PARTIAL: RuleTable<u8> = RuleTable::new(
    "partial",
    &[(RollRange::new(3, 10), 1), (RollRange::new(11, 18), 2)],
);

static LETTERS: KeyedTable<char, u8> = KeyedTable::new("letters", &[('a', 1), ('b', 2)]);

#[test]
fn rule_table_reports_missing_row() {
    assert_eq!(PARTIAL.lookup(11), Ok(&2));
    assert_eq!(
        PARTIAL.lookup(19),
        Err(TableError::NoRow {
            table: "partial",
            roll: 19
        })
    );
}

#[test]
fn keyed_table_reports_missing_key() {
    assert_eq!(LETTERS.get(&'b'), Ok(&2));

    let err = LETTERS.get(&'z').unwrap_err();
    assert_eq!(
        err,
        TableError::MissingKey {
            table: "letters",
            key: "'z'".to_string()
        }
    );
    assert_eq!(err.to_string(), "letters table has no entry for 'z'");
}

#[test]
fn keyed_table_lists_keys_in_order() {
    let keys: Vec<char> = LETTERS.keys().copied().collect();
    assert_eq!(keys, vec!['a', 'b']);
}

#[test]
fn no_row_error_names_table_and_roll() {
    let err = PARTIAL.lookup(2).unwrap_err();
    assert_eq!(err.to_string(), "partial table has no row for roll 2");
}
