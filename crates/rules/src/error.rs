use thiserror::Error;

/// A ruleset lookup found no matching entry
///
/// Always fatal: the table does not cover a value the generator produced.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum TableError {
    #[error("{table} table has no row for roll {roll}")]
    NoRow { table: &'static str, roll: i32 },

    #[error("{table} table has no entry for {key}")]
    MissingKey { table: &'static str, key: String },
}
