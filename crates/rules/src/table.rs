//! Named ruleset tables

use dice::RangeTable;

use crate::error::TableError;

/// A named roll-range table
///
/// Wraps a [`RangeTable`] so that a miss reports which table failed.
#[derive(Debug)]
pub struct RuleTable<T: 'static> {
    name: &'static str,
    rows: RangeTable<T>,
}

impl<T> RuleTable<T> {
    pub const fn new(name: &'static str, rows: &'static [(dice::RollRange, T)]) -> Self {
        Self {
            name,
            rows: RangeTable::new(rows),
        }
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn lookup(&self, roll: i32) -> Result<&'static T, TableError> {
        self.rows.lookup(roll).ok_or(TableError::NoRow {
            table: self.name,
            roll,
        })
    }

    pub fn rows(&self) -> &RangeTable<T> {
        &self.rows
    }
}

/// A named table keyed by an enum or a tuple of enums
#[derive(Debug)]
pub struct KeyedTable<K: 'static, V: 'static> {
    name: &'static str,
    entries: &'static [(K, V)],
}

impl<K: PartialEq + std::fmt::Debug, V> KeyedTable<K, V> {
    pub const fn new(name: &'static str, entries: &'static [(K, V)]) -> Self {
        Self { name, entries }
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn get(&self, key: &K) -> Result<&'static V, TableError> {
        let entries: &'static [(K, V)] = self.entries;
        entries
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, value)| value)
            .ok_or_else(|| TableError::MissingKey {
                table: self.name,
                key: format!("{:?}", key),
            })
    }

    pub fn keys(&self) -> impl Iterator<Item = &'static K> {
        let entries: &'static [(K, V)] = self.entries;
        entries.iter().map(|(k, _)| k)
    }
}
