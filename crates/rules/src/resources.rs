//! Resource value tables

use dice::RollRange;
use serde::{Deserialize, Serialize};

use crate::error::TableError;
use crate::table::RuleTable;

use self::OverallResourceValue as R;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum OverallResourceValue {
    Worthless,
    VeryScant,
    Scant,
    VeryPoor,
    Poor,
    Average,
    Abundant,
    VeryAbundant,
    Rich,
    VeryRich,
    Motherlode,
}

impl std::fmt::Display for OverallResourceValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Worthless => write!(f, "Worthless"),
            Self::VeryScant => write!(f, "Very Scant"),
            Self::Scant => write!(f, "Scant"),
            Self::VeryPoor => write!(f, "Very Poor"),
            Self::Poor => write!(f, "Poor"),
            Self::Average => write!(f, "Average"),
            Self::Abundant => write!(f, "Abundant"),
            Self::VeryAbundant => write!(f, "Very Abundant"),
            Self::Rich => write!(f, "Rich"),
            Self::VeryRich => write!(f, "Very Rich"),
            Self::Motherlode => write!(f, "Motherlode"),
        }
    }
}

/// Resource rating and its modifier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ResourceValue {
    pub value: OverallResourceValue,
    pub modifier: i32,
}

impl ResourceValue {
    const fn new(value: OverallResourceValue, modifier: i32) -> Self {
        Self { value, modifier }
    }
}

pub static WORLD_RESOURCES: RuleTable<ResourceValue> = RuleTable::new(
    "world resources",
    &[
        (RollRange::at_most(2), ResourceValue::new(R::Scant, -3)),
        (RollRange::new(3, 4), ResourceValue::new(R::VeryPoor, -2)),
        (RollRange::new(5, 7), ResourceValue::new(R::Poor, -1)),
        (RollRange::new(8, 13), ResourceValue::new(R::Average, 0)),
        (RollRange::new(14, 16), ResourceValue::new(R::Abundant, 1)),
        (RollRange::new(17, 18), ResourceValue::new(R::VeryAbundant, 2)),
        (RollRange::at_least(19), ResourceValue::new(R::Rich, 3)),
    ],
);

/// Resource value of any world, asteroid belts included
pub fn resource_value(roll: i32) -> Result<ResourceValue, TableError> {
    WORLD_RESOURCES.lookup(roll).copied()
}
