//! Injected read-only data tables.
//!
//! The engine owns no storage format: callers load species, move, ability,
//! and item records however they like and hand the engine a [`Dex`]. Every
//! table exposes only a lookup contract. String keys are interned once at
//! load time; calculations work with the interned handles.

use std::collections::HashMap;

use crate::abilities::{AbilityEffect, AbilityId};
use crate::error::{CalcError, EntryKind};
use crate::items::{ItemEffect, ItemId};
use crate::moves::MoveData;
use crate::types::Type;

/// Normalize a display name into a table key: lowercase alphanumerics only
/// ("Flutter Mane" and "U-turn" become "fluttermane" and "uturn").
pub fn normalize_key(s: &str) -> String {
    s.chars()
        .filter(|c| c.is_ascii_alphanumeric())
        .map(|c| c.to_ascii_lowercase())
        .collect()
}

// ============================================================================
// Move table
// ============================================================================

/// Interned handle into a [`MoveDex`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct MoveId(pub(crate) u16);

/// The move table: records plus a normalized-key index.
#[derive(Clone, Debug, Default)]
pub struct MoveDex {
    records: Vec<MoveData>,
    index: HashMap<String, MoveId>,
}

impl MoveDex {
    /// Build a table, interning each record under its normalized name.
    /// Duplicate keys are rejected at load time.
    pub fn from_records(records: Vec<MoveData>) -> Result<Self, CalcError> {
        let mut index = HashMap::with_capacity(records.len());
        for (i, record) in records.iter().enumerate() {
            let key = normalize_key(&record.name);
            if index.insert(key, MoveId(i as u16)).is_some() {
                return Err(CalcError::Configuration {
                    reason: "duplicate move key in move table",
                });
            }
        }
        Ok(Self { records, index })
    }

    /// Resolve a raw key to an interned handle.
    pub fn lookup(&self, key: &str) -> Option<MoveId> {
        self.index.get(normalize_key(key).as_str()).copied()
    }

    /// Record access through an interned handle.
    pub fn get(&self, id: MoveId) -> &MoveData {
        &self.records[id.0 as usize]
    }

    /// Lookup that reports the miss as a structured error.
    pub fn resolve(&self, key: &str) -> Result<&MoveData, CalcError> {
        self.lookup(key)
            .map(|id| self.get(id))
            .ok_or_else(|| CalcError::not_found(EntryKind::Move, key))
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

// ============================================================================
// Species table
// ============================================================================

/// One record of the injected species table.
#[derive(Clone, Debug)]
pub struct SpeciesData {
    pub name: String,
    /// Base stats in HP/Atk/Def/SpA/SpD/Spe order.
    pub base_stats: [u16; 6],
    pub types: (Type, Option<Type>),
}

impl SpeciesData {
    pub fn new(name: &str, base_stats: [u16; 6], primary: Type, secondary: Option<Type>) -> Self {
        Self {
            name: name.to_string(),
            base_stats,
            types: (primary, secondary),
        }
    }
}

/// The species table.
#[derive(Clone, Debug, Default)]
pub struct SpeciesDex {
    records: Vec<SpeciesData>,
    index: HashMap<String, usize>,
}

impl SpeciesDex {
    pub fn from_records(records: Vec<SpeciesData>) -> Result<Self, CalcError> {
        let mut index = HashMap::with_capacity(records.len());
        for (i, record) in records.iter().enumerate() {
            if index.insert(normalize_key(&record.name), i).is_some() {
                return Err(CalcError::Configuration {
                    reason: "duplicate species key in species table",
                });
            }
        }
        Ok(Self { records, index })
    }

    pub fn lookup(&self, key: &str) -> Option<&SpeciesData> {
        self.index
            .get(normalize_key(key).as_str())
            .map(|&i| &self.records[i])
    }

    pub fn resolve(&self, key: &str) -> Result<&SpeciesData, CalcError> {
        self.lookup(key)
            .ok_or_else(|| CalcError::not_found(EntryKind::Species, key))
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

// ============================================================================
// Effect tables
// ============================================================================

/// Ability effect table. Missing entries mean "no effect".
#[derive(Clone, Debug, Default)]
pub struct AbilityTable {
    entries: HashMap<AbilityId, AbilityEffect>,
}

impl AbilityTable {
    pub fn from_entries(entries: Vec<(AbilityId, AbilityEffect)>) -> Self {
        Self {
            entries: entries.into_iter().collect(),
        }
    }

    pub fn lookup(&self, id: AbilityId) -> Option<&AbilityEffect> {
        self.entries.get(&id)
    }

    /// Effect for an ability, inert default when the table has no entry.
    pub fn effect_of(&self, id: AbilityId) -> AbilityEffect {
        self.lookup(id).copied().unwrap_or_default()
    }
}

/// Item effect table. Missing entries mean "no effect".
#[derive(Clone, Debug, Default)]
pub struct ItemTable {
    entries: HashMap<ItemId, ItemEffect>,
}

impl ItemTable {
    pub fn from_entries(entries: Vec<(ItemId, ItemEffect)>) -> Self {
        Self {
            entries: entries.into_iter().collect(),
        }
    }

    pub fn lookup(&self, id: ItemId) -> Option<&ItemEffect> {
        self.entries.get(&id)
    }

    /// Effect for an item, inert default for `None` or a missing entry.
    pub fn effect_of(&self, id: Option<ItemId>) -> ItemEffect {
        id.and_then(|id| self.lookup(id))
            .copied()
            .unwrap_or_default()
    }
}

// ============================================================================
// Aggregate
// ============================================================================

/// Everything a calculation can look up, bundled for injection.
#[derive(Clone, Debug, Default)]
pub struct Dex {
    pub species: SpeciesDex,
    pub moves: MoveDex,
    pub abilities: AbilityTable,
    pub items: ItemTable,
}

impl Dex {
    /// Reference dataset for tests, benches, and the CLI runner. Not a data
    /// product; real callers inject their own tables.
    pub fn standard() -> Self {
        crate::data::standard_dex()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::moves::MoveCategory;

    fn tiny_movedex() -> MoveDex {
        MoveDex::from_records(vec![
            MoveData::new("Tackle", Type::Normal, MoveCategory::Physical, 40),
            MoveData::new("U-turn", Type::Bug, MoveCategory::Physical, 70),
        ])
        .unwrap()
    }

    #[test]
    fn test_normalize_key() {
        assert_eq!(normalize_key("Flutter Mane"), "fluttermane");
        assert_eq!(normalize_key("U-turn"), "uturn");
        assert_eq!(normalize_key("tackle"), "tackle");
    }

    #[test]
    fn test_lookup_is_key_insensitive() {
        let dex = tiny_movedex();
        let a = dex.lookup("Tackle").unwrap();
        let b = dex.lookup("tackle").unwrap();
        assert_eq!(a, b);
        assert_eq!(dex.get(a).power, 40);
        assert!(dex.lookup("uturn").is_some());
        assert!(dex.lookup("U-Turn").is_some());
    }

    #[test]
    fn test_resolve_reports_not_found() {
        let dex = tiny_movedex();
        let err = dex.resolve("splash").unwrap_err();
        assert!(err.is_not_found());
    }

    #[test]
    fn test_duplicate_keys_rejected() {
        let result = MoveDex::from_records(vec![
            MoveData::new("Tackle", Type::Normal, MoveCategory::Physical, 40),
            MoveData::new("tackle", Type::Normal, MoveCategory::Physical, 50),
        ]);
        assert!(matches!(result, Err(CalcError::Configuration { .. })));
    }

    #[test]
    fn test_effect_tables_default_to_inert() {
        let abilities = AbilityTable::default();
        assert_eq!(abilities.effect_of(AbilityId::Guts), AbilityEffect::default());

        let items = ItemTable::default();
        assert_eq!(items.effect_of(None), ItemEffect::default());
        assert_eq!(items.effect_of(Some(ItemId::LifeOrb)), ItemEffect::default());
    }
}
