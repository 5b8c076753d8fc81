//! Damage calculation pipeline.
//!
//! The calculation runs in three phases:
//! 1. **Context** — resolve move type, stat pair, stages, STAB,
//!    effectiveness (`context`).
//! 2. **Base damage + modifier** — the integer base formula and the ordered
//!    multiplicative chain (`formula`, `modifiers`).
//! 3. **Range + classification** — 16 canonical rolls, percent range, and
//!    knockout chance (`formula`, `ko`).
//!
//! Every call constructs and returns wholly new values; nothing is shared or
//! retained between calls.

pub mod context;
pub mod formula;
pub mod ko;
pub mod modifiers;

use serde::Serialize;

use crate::combatant::CombatantSnapshot;
use crate::conditions::BattleConditions;
use crate::dex::Dex;
use crate::error::CalcError;
use crate::moves::MoveCategory;
use crate::types::{effectiveness_label, effectiveness_multiplier, Type};

pub use context::DamageContext;
pub use ko::KoChance;

/// Inclusive damage bounds; `min <= max` always holds.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct DamageRange {
    pub min: u32,
    pub max: u32,
}

/// Damage bounds as percent of the defender's full HP, one-decimal rounded.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct PercentRange {
    pub min: f64,
    pub max: f64,
}

/// The complete outcome of one damage calculation.
#[derive(Clone, Debug, Serialize)]
pub struct DamageResult {
    /// Display name of the move, the result's identity in batch output.
    pub move_name: String,
    /// Move type after any ability substitution.
    pub move_type: Type,
    pub category: MoveCategory,
    pub base_power: u16,
    /// Output of the base formula, before the modifier.
    pub base_damage: u32,
    /// The aggregate modifier the pipeline accumulated.
    pub modifier: f64,
    pub damage: DamageRange,
    /// All 16 canonical rolls (85%..=100%).
    pub rolls: [u32; 16],
    pub percent: PercentRange,
    /// Real multiplier in {0, 0.25, 0.5, 1, 2, 4}.
    pub effectiveness: f64,
    pub effectiveness_text: &'static str,
    pub is_critical: bool,
    pub has_stab: bool,
    pub ko_chance: KoChance,
    pub defender_hp: u16,
    /// Stage-adjusted stats that fed the base formula.
    pub attack_used: u32,
    pub defense_used: u32,
}

/// Round to one decimal, ties away from zero.
fn round_tenths(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

/// Run the pipeline for one already-resolved move record.
///
/// Callers have validated conditions and resolved the move; this never
/// re-validates.
fn calculate_resolved(
    dex: &Dex,
    attacker: &CombatantSnapshot,
    defender: &CombatantSnapshot,
    move_data: &crate::moves::MoveData,
    conditions: &BattleConditions,
) -> DamageResult {
    let ctx = DamageContext::new(dex, attacker, defender, move_data, conditions);

    let base_damage = formula::base_damage(attacker.level, move_data.power, ctx.attack, ctx.defense);
    let modifier = modifiers::accumulate_modifier(&ctx);

    let rolls = formula::all_rolls(base_damage, modifier);
    let damage = DamageRange {
        min: rolls[0],
        max: rolls[15],
    };

    let defender_hp = defender.max_hp();
    let hp = defender_hp as f64;
    let percent = PercentRange {
        min: round_tenths(damage.min as f64 / hp * 100.0),
        max: round_tenths(damage.max as f64 / hp * 100.0),
    };

    let ko_chance = KoChance::classify(&rolls, defender_hp);

    DamageResult {
        move_name: move_data.name.clone(),
        move_type: ctx.move_type,
        category: ctx.category,
        base_power: move_data.power,
        base_damage,
        modifier,
        damage,
        rolls,
        percent,
        effectiveness: effectiveness_multiplier(ctx.effectiveness),
        effectiveness_text: effectiveness_label(ctx.effectiveness),
        is_critical: conditions.is_critical,
        has_stab: ctx.has_stab,
        ko_chance,
        defender_hp,
        attack_used: ctx.attack,
        defense_used: ctx.defense,
    }
}

/// Calculate the damage range for one move of the attacker against the
/// defender. The move key is resolved against the injected move table;
/// unknown keys yield `NotFound`.
pub fn calculate_damage(
    dex: &Dex,
    attacker: &CombatantSnapshot,
    defender: &CombatantSnapshot,
    move_key: &str,
    conditions: &BattleConditions,
) -> Result<DamageResult, CalcError> {
    conditions.validate()?;
    let move_data = dex.moves.resolve(move_key)?;
    Ok(calculate_resolved(dex, attacker, defender, move_data, conditions))
}

/// Calculate every move in the attacker's moveset, skipping keys the move
/// table cannot resolve, sorted by maximum damage descending.
pub fn calculate_all_moves(
    dex: &Dex,
    attacker: &CombatantSnapshot,
    defender: &CombatantSnapshot,
    conditions: &BattleConditions,
) -> Result<Vec<DamageResult>, CalcError> {
    conditions.validate()?;

    let mut results: Vec<DamageResult> = attacker
        .moves
        .iter()
        .filter_map(|key| {
            dex.moves
                .lookup(key)
                .map(|id| calculate_resolved(dex, attacker, defender, dex.moves.get(id), conditions))
        })
        .collect();

    results.sort_by(|a, b| b.damage.max.cmp(&a.damage.max));
    Ok(results)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::combatant::CombatantSnapshot;
    use crate::natures::NatureId;

    fn dex() -> Dex {
        Dex::standard()
    }

    #[test]
    fn test_basic_calculation_shape() {
        let dex = dex();
        let attacker = CombatantSnapshot::from_species(&dex, "garchomp")
            .unwrap()
            .evs([0, 252, 0, 0, 0, 0])
            .nature(NatureId::Adamant)
            .build()
            .unwrap();
        let defender = CombatantSnapshot::from_species(&dex, "tyranitar")
            .unwrap()
            .build()
            .unwrap();
        let conditions = BattleConditions::default();

        let result =
            calculate_damage(&dex, &attacker, &defender, "Earthquake", &conditions).unwrap();
        assert!(result.damage.max > 0, "should deal some damage");
        assert!(result.damage.min <= result.damage.max);
        assert_eq!(result.rolls.len(), 16);
        assert_eq!(result.rolls[0], result.damage.min);
        assert_eq!(result.rolls[15], result.damage.max);
        assert!(result.has_stab);
        assert_eq!(result.effectiveness, 2.0);
    }

    #[test]
    fn test_unknown_move_is_not_found() {
        let dex = dex();
        let attacker = CombatantSnapshot::from_species(&dex, "garchomp")
            .unwrap()
            .build()
            .unwrap();
        let defender = attacker.clone();
        let err = calculate_damage(
            &dex,
            &attacker,
            &defender,
            "Splash",
            &BattleConditions::default(),
        )
        .unwrap_err();
        assert!(err.is_not_found());
    }

    #[test]
    fn test_immunity_zeroes_damage() {
        let dex = dex();
        // Electric move into a pure Ground defender by tera
        let attacker = CombatantSnapshot::from_species(&dex, "pikachu")
            .unwrap()
            .build()
            .unwrap();
        let defender = CombatantSnapshot::from_species(&dex, "swampert")
            .unwrap()
            .build()
            .unwrap();

        let result = calculate_damage(
            &dex,
            &attacker,
            &defender,
            "Thunderbolt",
            &BattleConditions::default(),
        )
        .unwrap();
        assert_eq!(result.effectiveness, 0.0);
        assert_eq!(result.damage.max, 0);
        assert_eq!(result.ko_chance, KoChance::None);
    }

    #[test]
    fn test_crit_never_decreases_damage() {
        let dex = dex();
        let attacker = CombatantSnapshot::from_species(&dex, "weavile")
            .unwrap()
            .build()
            .unwrap();
        let defender = CombatantSnapshot::from_species(&dex, "garchomp")
            .unwrap()
            .build()
            .unwrap();

        let normal = calculate_damage(
            &dex,
            &attacker,
            &defender,
            "Icicle Crash",
            &BattleConditions::default(),
        )
        .unwrap();
        let crit = calculate_damage(
            &dex,
            &attacker,
            &defender,
            "Icicle Crash",
            &BattleConditions {
                is_critical: true,
                ..Default::default()
            },
        )
        .unwrap();
        assert!(crit.damage.max >= normal.damage.max);
        assert!(crit.damage.min >= normal.damage.min);
    }

    #[test]
    fn test_all_moves_sorted_and_skipping() {
        let dex = dex();
        let attacker = CombatantSnapshot::from_species(&dex, "garchomp")
            .unwrap()
            .moves(&["Earthquake", "Outrage", "Metronome", "Tackle"])
            .build()
            .unwrap();
        let defender = CombatantSnapshot::from_species(&dex, "tyranitar")
            .unwrap()
            .build()
            .unwrap();

        let results =
            calculate_all_moves(&dex, &attacker, &defender, &BattleConditions::default()).unwrap();
        // Metronome is not in the table and silently skipped
        assert_eq!(results.len(), 3);
        for pair in results.windows(2) {
            assert!(
                pair[0].damage.max >= pair[1].damage.max,
                "results must be sorted by max damage descending"
            );
        }
    }

    #[test]
    fn test_conditions_validated_at_boundary() {
        let dex = dex();
        let attacker = CombatantSnapshot::from_species(&dex, "garchomp")
            .unwrap()
            .build()
            .unwrap();
        let defender = attacker.clone();
        let bad = BattleConditions {
            helping_hand: true,
            ..Default::default()
        };
        assert!(matches!(
            calculate_damage(&dex, &attacker, &defender, "Earthquake", &bad),
            Err(CalcError::Configuration { .. })
        ));
        assert!(matches!(
            calculate_all_moves(&dex, &attacker, &defender, &bad),
            Err(CalcError::Configuration { .. })
        ));
    }

    #[test]
    fn test_percent_range_is_relative_to_hp() {
        let dex = dex();
        let attacker = CombatantSnapshot::from_species(&dex, "machamp")
            .unwrap()
            .build()
            .unwrap();
        let defender = CombatantSnapshot::from_species(&dex, "blissey")
            .unwrap()
            .build()
            .unwrap();

        let result = calculate_damage(
            &dex,
            &attacker,
            &defender,
            "Close Combat",
            &BattleConditions::default(),
        )
        .unwrap();
        let hp = result.defender_hp as f64;
        let expected_min = (result.damage.min as f64 / hp * 100.0 * 10.0).round() / 10.0;
        assert_eq!(result.percent.min, expected_min);
        assert!(result.percent.min <= result.percent.max);
    }
}
