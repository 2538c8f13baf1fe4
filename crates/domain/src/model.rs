// crates/domain/src/model.rs
use std::{
    collections::BTreeMap,
    iter::Sum,
    ops::{Add, AddAssign},
};

use script_lines_shared_kernel::{CharCount, LineCount};
use serde::{Deserialize, Serialize};

/// Lines and characters counted in one or more scripts.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Count {
    pub lines: LineCount,
    pub characters: CharCount,
}

impl Count {
    pub const ZERO: Self = Self { lines: LineCount::ZERO, characters: CharCount::ZERO };

    pub fn new(lines: usize, characters: usize) -> Self {
        Self { lines: LineCount::new(lines), characters: CharCount::new(characters) }
    }
}

impl Add for Count {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        Self { lines: self.lines + rhs.lines, characters: self.characters + rhs.characters }
    }
}

impl AddAssign for Count {
    fn add_assign(&mut self, rhs: Self) {
        self.lines += rhs.lines;
        self.characters += rhs.characters;
    }
}

impl Sum for Count {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::ZERO, Add::add)
    }
}

/// One script body to fetch or read. `locator` is a URL or a filesystem path.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ScriptUnit {
    pub id: String,
    pub locator: String,
}

impl ScriptUnit {
    pub fn new(id: impl Into<String>, locator: impl Into<String>) -> Self {
        Self { id: id.into(), locator: locator.into() }
    }
}

/// Deduplicated set of units resolved for one top-level request item.
///
/// Units are keyed by `id`; inserting an id that is already present keeps the first
/// unit. Iteration follows id order, which carries no meaning beyond being stable.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ResolutionBatch {
    units: BTreeMap<String, ScriptUnit>,
}

impl ResolutionBatch {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns `false` when a unit with the same id was already present.
    pub fn insert(&mut self, unit: ScriptUnit) -> bool {
        if self.units.contains_key(&unit.id) {
            return false;
        }
        self.units.insert(unit.id.clone(), unit);
        true
    }

    pub fn len(&self) -> usize {
        self.units.len()
    }

    pub fn is_empty(&self) -> bool {
        self.units.is_empty()
    }

    pub fn into_units(self) -> Vec<ScriptUnit> {
        self.units.into_values().collect()
    }
}

impl Extend<ScriptUnit> for ResolutionBatch {
    fn extend<T: IntoIterator<Item = ScriptUnit>>(&mut self, iter: T) {
        for unit in iter {
            self.insert(unit);
        }
    }
}

impl FromIterator<ScriptUnit> for ResolutionBatch {
    fn from_iter<T: IntoIterator<Item = ScriptUnit>>(iter: T) -> Self {
        let mut batch = Self::new();
        batch.extend(iter);
        batch
    }
}

/// Aggregated count for one war, quest, script, file or leaf directory.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParseResult {
    pub id: String,
    pub name: String,
    pub count: Count,
}

impl ParseResult {
    pub fn new(id: impl Into<String>, name: impl Into<String>, count: Count) -> Self {
        Self { id: id.into(), name: name.into(), count }
    }
}
