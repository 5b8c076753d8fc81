//! Combatant snapshots: one immutable value per calculation call.
//!
//! All numeric domains are checked once, when the builder runs. Everything
//! downstream assumes a valid snapshot and never re-validates.

use serde::Serialize;

use crate::abilities::AbilityId;
use crate::dex::Dex;
use crate::error::{CalcError, EntryKind};
use crate::items::ItemId;
use crate::natures::{BattleStat, NatureId};
use crate::stats::{self, Stat, MAX_EV, MAX_EV_TOTAL, MAX_IV};
use crate::types::Type;

/// Major status condition; at most one is active.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum StatusCondition {
    #[default]
    None,
    Burn,
    Paralysis,
    Poison,
    BadPoison,
    Sleep,
    Freeze,
}

impl StatusCondition {
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_ascii_lowercase().as_str() {
            "none" | "" | "healthy" => Some(StatusCondition::None),
            "burn" | "brn" => Some(StatusCondition::Burn),
            "paralysis" | "par" => Some(StatusCondition::Paralysis),
            "poison" | "psn" => Some(StatusCondition::Poison),
            "badpoison" | "toxic" | "tox" => Some(StatusCondition::BadPoison),
            "sleep" | "slp" => Some(StatusCondition::Sleep),
            "freeze" | "frz" => Some(StatusCondition::Freeze),
            _ => None,
        }
    }
}

/// Immutable view of one combatant, constructed fresh per calculation.
#[derive(Clone, Debug)]
pub struct CombatantSnapshot {
    /// Species key; used as the identity in comparisons and results.
    pub name: String,
    /// Base stats in HP/Atk/Def/SpA/SpD/Spe order.
    pub base_stats: [u16; 6],
    pub ivs: [u8; 6],
    pub evs: [u16; 6],
    pub level: u8,
    pub nature: NatureId,
    pub ability: AbilityId,
    pub item: Option<ItemId>,
    /// Native typing.
    pub types: (Type, Option<Type>),
    /// Overrides native typing for STAB and defensive effectiveness.
    pub tera_type: Option<Type>,
    /// Stage boosts in Atk/Def/SpA/SpD/Spe order, each in −6..=+6.
    pub boosts: [i8; 5],
    pub status: StatusCondition,
    /// Untouched by ground-keyed terrain effects. The builder defaults this
    /// from the Flying type; ability-granted levitation is folded in by the
    /// pipeline through the effect table.
    pub airborne: bool,
    /// Raw move keys, resolved against the move table per calculation.
    pub moves: Vec<String>,
}

impl CombatantSnapshot {
    /// Start a builder from explicit base stats.
    pub fn builder(name: &str, base_stats: [u16; 6], primary_type: Type) -> SnapshotBuilder {
        SnapshotBuilder::new(name, base_stats, primary_type)
    }

    /// Start a builder seeded from the species table.
    pub fn from_species(dex: &Dex, key: &str) -> Result<SnapshotBuilder, CalcError> {
        let species = dex.species.resolve(key)?;
        let mut builder = SnapshotBuilder::new(&species.name, species.base_stats, species.types.0);
        builder.secondary_type = species.types.1;
        Ok(builder)
    }

    /// Types after the tera override.
    pub fn effective_types(&self) -> (Type, Option<Type>) {
        match self.tera_type {
            Some(tera) => (tera, None),
            None => self.types,
        }
    }

    /// Whether the combatant currently counts as the given type.
    pub fn has_type(&self, typ: Type) -> bool {
        let (t1, t2) = self.effective_types();
        t1 == typ || t2 == Some(typ)
    }

    /// Derived value for one stat slot.
    pub fn stat(&self, stat: Stat) -> u16 {
        let i = stat.index();
        stats::stat_unchecked(
            self.base_stats[i],
            self.ivs[i],
            self.evs[i],
            self.level,
            self.nature,
            stat,
        )
    }

    /// Full HP figure used for knockout classification.
    pub fn max_hp(&self) -> u16 {
        self.stat(Stat::Hp)
    }

    /// Stage boost for a non-HP stat.
    pub fn boost(&self, stat: BattleStat) -> i8 {
        let i = match stat {
            BattleStat::Atk => 0,
            BattleStat::Def => 1,
            BattleStat::SpA => 2,
            BattleStat::SpD => 3,
            BattleStat::Spe => 4,
        };
        self.boosts[i]
    }
}

/// Builder for [`CombatantSnapshot`]; `build()` runs every domain check.
#[derive(Clone, Debug)]
pub struct SnapshotBuilder {
    name: String,
    base_stats: [u16; 6],
    primary_type: Type,
    secondary_type: Option<Type>,
    ivs: [u8; 6],
    evs: [u16; 6],
    level: u8,
    nature: NatureId,
    ability: AbilityId,
    item: Option<ItemId>,
    tera_type: Option<Type>,
    boosts: [i8; 5],
    status: StatusCondition,
    airborne: Option<bool>,
    moves: Vec<String>,
}

impl SnapshotBuilder {
    pub fn new(name: &str, base_stats: [u16; 6], primary_type: Type) -> Self {
        Self {
            name: name.to_string(),
            base_stats,
            primary_type,
            secondary_type: None,
            ivs: [31; 6],
            evs: [0; 6],
            level: 100,
            nature: NatureId::default(),
            ability: AbilityId::default(),
            item: None,
            tera_type: None,
            boosts: [0; 5],
            status: StatusCondition::default(),
            airborne: None,
            moves: Vec::new(),
        }
    }

    pub fn types(mut self, primary: Type, secondary: Option<Type>) -> Self {
        self.primary_type = primary;
        self.secondary_type = secondary;
        self
    }

    pub fn ivs(mut self, ivs: [u8; 6]) -> Self {
        self.ivs = ivs;
        self
    }

    pub fn evs(mut self, evs: [u16; 6]) -> Self {
        self.evs = evs;
        self
    }

    pub fn level(mut self, level: u8) -> Self {
        self.level = level;
        self
    }

    pub fn nature(mut self, nature: NatureId) -> Self {
        self.nature = nature;
        self
    }

    pub fn ability(mut self, ability: AbilityId) -> Self {
        self.ability = ability;
        self
    }

    pub fn item(mut self, item: ItemId) -> Self {
        self.item = Some(item);
        self
    }

    pub fn tera_type(mut self, tera: Type) -> Self {
        self.tera_type = Some(tera);
        self
    }

    /// Stage boosts in Atk/Def/SpA/SpD/Spe order.
    pub fn boosts(mut self, boosts: [i8; 5]) -> Self {
        self.boosts = boosts;
        self
    }

    pub fn status(mut self, status: StatusCondition) -> Self {
        self.status = status;
        self
    }

    pub fn airborne(mut self, airborne: bool) -> Self {
        self.airborne = Some(airborne);
        self
    }

    pub fn moves(mut self, moves: &[&str]) -> Self {
        self.moves = moves.iter().map(|m| m.to_string()).collect();
        self
    }

    /// Resolve an ability by name; unknown keys fail with `NotFound`.
    pub fn ability_named(self, name: &str) -> Result<Self, CalcError> {
        let ability = AbilityId::from_str(name)
            .ok_or_else(|| CalcError::not_found(EntryKind::Ability, name))?;
        Ok(self.ability(ability))
    }

    /// Resolve an item by name; unknown keys fail with `NotFound`.
    pub fn item_named(self, name: &str) -> Result<Self, CalcError> {
        let item =
            ItemId::from_str(name).ok_or_else(|| CalcError::not_found(EntryKind::Item, name))?;
        Ok(self.item(item))
    }

    /// Resolve a nature by name; unknown keys fail with `NotFound`.
    pub fn nature_named(self, name: &str) -> Result<Self, CalcError> {
        let nature = NatureId::from_str(name)
            .ok_or_else(|| CalcError::not_found(EntryKind::Nature, name))?;
        Ok(self.nature(nature))
    }

    /// Resolve a tera type by name; unknown keys fail with `NotFound`.
    pub fn tera_named(self, name: &str) -> Result<Self, CalcError> {
        let tera =
            Type::from_str(name).ok_or_else(|| CalcError::not_found(EntryKind::Type, name))?;
        Ok(self.tera_type(tera))
    }

    /// Validate every numeric domain and produce the snapshot.
    pub fn build(self) -> Result<CombatantSnapshot, CalcError> {
        for &iv in &self.ivs {
            if iv > MAX_IV {
                return Err(CalcError::out_of_range("iv", iv as i64, 0, MAX_IV as i64));
            }
        }
        let mut ev_total: u16 = 0;
        for &ev in &self.evs {
            if ev > MAX_EV {
                return Err(CalcError::out_of_range("ev", ev as i64, 0, MAX_EV as i64));
            }
            ev_total += ev;
        }
        if ev_total > MAX_EV_TOTAL {
            return Err(CalcError::out_of_range(
                "ev total",
                ev_total as i64,
                0,
                MAX_EV_TOTAL as i64,
            ));
        }
        if self.level == 0 || self.level > 100 {
            return Err(CalcError::out_of_range("level", self.level as i64, 1, 100));
        }
        for &boost in &self.boosts {
            if !(-6..=6).contains(&boost) {
                return Err(CalcError::out_of_range("stage boost", boost as i64, -6, 6));
            }
        }

        // A duplicated secondary type collapses to a mono-type snapshot.
        let secondary = self.secondary_type.filter(|&t| t != self.primary_type);
        let airborne = self
            .airborne
            .unwrap_or(self.primary_type == Type::Flying || secondary == Some(Type::Flying));

        Ok(CombatantSnapshot {
            name: self.name,
            base_stats: self.base_stats,
            ivs: self.ivs,
            evs: self.evs,
            level: self.level,
            nature: self.nature,
            ability: self.ability,
            item: self.item,
            types: (self.primary_type, secondary),
            tera_type: self.tera_type,
            boosts: self.boosts,
            status: self.status,
            airborne,
            moves: self.moves,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn garchomp() -> SnapshotBuilder {
        CombatantSnapshot::builder("Garchomp", [108, 130, 95, 80, 85, 102], Type::Dragon)
            .types(Type::Dragon, Some(Type::Ground))
    }

    #[test]
    fn test_build_defaults() {
        let snapshot = garchomp().build().unwrap();
        assert_eq!(snapshot.level, 100);
        assert_eq!(snapshot.ivs, [31; 6]);
        assert_eq!(snapshot.evs, [0; 6]);
        assert_eq!(snapshot.status, StatusCondition::None);
        assert!(!snapshot.airborne);
    }

    #[test]
    fn test_stats_from_snapshot() {
        let snapshot = garchomp()
            .evs([0, 252, 0, 0, 0, 0])
            .nature(NatureId::Adamant)
            .build()
            .unwrap();
        // Atk: (260 + 31 + 63) * 100 / 100 + 5 = 359, Adamant -> 394
        assert_eq!(snapshot.stat(Stat::Atk), 394);
        // HP: (216 + 31) * 100 / 100 + 110 = 357
        assert_eq!(snapshot.max_hp(), 357);
    }

    #[test]
    fn test_ev_total_cap() {
        let err = garchomp()
            .evs([252, 252, 252, 0, 0, 0])
            .build()
            .unwrap_err();
        assert!(matches!(
            err,
            CalcError::Validation {
                field: "ev total",
                ..
            }
        ));
    }

    #[test]
    fn test_rejects_bad_stage() {
        let err = garchomp().boosts([7, 0, 0, 0, 0]).build().unwrap_err();
        assert!(matches!(
            err,
            CalcError::Validation {
                field: "stage boost",
                ..
            }
        ));
    }

    #[test]
    fn test_airborne_default_from_flying_type() {
        let skarmory =
            CombatantSnapshot::builder("Skarmory", [65, 80, 140, 40, 70, 70], Type::Steel)
                .types(Type::Steel, Some(Type::Flying))
                .build()
                .unwrap();
        assert!(skarmory.airborne);

        let grounded = garchomp().airborne(false).build().unwrap();
        assert!(!grounded.airborne);
    }

    #[test]
    fn test_tera_overrides_types() {
        let snapshot = garchomp().tera_type(Type::Steel).build().unwrap();
        assert_eq!(snapshot.effective_types(), (Type::Steel, None));
        assert!(snapshot.has_type(Type::Steel));
        assert!(!snapshot.has_type(Type::Dragon));
    }

    #[test]
    fn test_named_resolution_fails_closed() {
        let err = garchomp().ability_named("Shadow Tag").unwrap_err();
        assert!(err.is_not_found());

        let err = garchomp().item_named("Leftovers").unwrap_err();
        assert!(err.is_not_found());
    }

    #[test]
    fn test_duplicate_secondary_type_collapses() {
        let snapshot = CombatantSnapshot::builder("Pikachu", [35, 55, 40, 50, 50, 90], Type::Electric)
            .types(Type::Electric, Some(Type::Electric))
            .build()
            .unwrap();
        assert_eq!(snapshot.types, (Type::Electric, None));
    }
}
