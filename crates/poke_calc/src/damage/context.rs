//! Per-calculation context.
//!
//! Built once from the snapshots, the move record, and the conditions;
//! the modifier steps read from it and never touch the inputs again.

use crate::abilities::AbilityEffect;
use crate::combatant::CombatantSnapshot;
use crate::conditions::BattleConditions;
use crate::dex::Dex;
use crate::items::ItemEffect;
use crate::moves::{MoveCategory, MoveData, MoveFlags};
use crate::natures::BattleStat;
use crate::stats::Stat;
use crate::types::{type_effectiveness, Type};

use super::formula::boosted_stat;

/// Everything one damage calculation needs, resolved up front.
pub struct DamageContext<'a> {
    pub attacker: &'a CombatantSnapshot,
    pub defender: &'a CombatantSnapshot,
    pub move_data: &'a MoveData,
    pub conditions: &'a BattleConditions,

    /// Move type after attacker-ability substitution.
    pub move_type: Type,
    /// Whether substitution happened (its power bonus lands in the ability
    /// step).
    pub type_substituted: bool,
    pub category: MoveCategory,

    /// Stage-adjusted stats feeding the base-damage formula.
    pub attack: u32,
    pub defense: u32,

    pub has_stab: bool,
    /// ×4-scale effectiveness against the defender's effective types.
    pub effectiveness: u8,
    /// Attacker counts as airborne (flag or ability-granted levitation).
    pub attacker_airborne: bool,

    pub attacker_ability: AbilityEffect,
    pub attacker_item: ItemEffect,
}

impl<'a> DamageContext<'a> {
    pub fn new(
        dex: &'a Dex,
        attacker: &'a CombatantSnapshot,
        defender: &'a CombatantSnapshot,
        move_data: &'a MoveData,
        conditions: &'a BattleConditions,
    ) -> Self {
        let attacker_ability = dex.abilities.effect_of(attacker.ability);
        let attacker_item = dex.items.effect_of(attacker.item);

        // Ability-driven substitution of Normal moves happens before STAB
        // and effectiveness are read; the chart itself stays agnostic.
        let (move_type, type_substituted) = match attacker_ability.normal_move_type {
            Some((substituted, _)) if move_data.typ == Type::Normal => (substituted, true),
            _ => (move_data.typ, false),
        };

        let category = move_data.category;
        let (attack_stat, mut defense_stat) = match category {
            MoveCategory::Physical => (Stat::Atk, Stat::Def),
            MoveCategory::Special => (Stat::SpA, Stat::SpD),
        };
        if move_data.flags.contains(MoveFlags::TARGETS_OTHER_DEF) {
            defense_stat = match defense_stat {
                Stat::Def => Stat::SpD,
                _ => Stat::Def,
            };
        }

        // Critical hits treat unfavorable stages as neutral on each side.
        let mut attack_stage = attacker.boost(to_battle_stat(attack_stat));
        let mut defense_stage = defender.boost(to_battle_stat(defense_stat));
        if conditions.is_critical {
            attack_stage = attack_stage.max(0);
            defense_stage = defense_stage.min(0);
        }

        let attack = boosted_stat(attacker.stat(attack_stat), attack_stage);
        let defense = boosted_stat(defender.stat(defense_stat), defense_stage);

        let has_stab = attacker.has_type(move_type);
        let (def_type1, def_type2) = defender.effective_types();
        let effectiveness = type_effectiveness(move_type, def_type1, def_type2);

        let attacker_airborne = attacker.airborne || attacker_ability.grants_levitation;

        Self {
            attacker,
            defender,
            move_data,
            conditions,
            move_type,
            type_substituted,
            category,
            attack,
            defense,
            has_stab,
            effectiveness,
            attacker_airborne,
            attacker_ability,
            attacker_item,
        }
    }
}

fn to_battle_stat(stat: Stat) -> BattleStat {
    match stat {
        Stat::Atk => BattleStat::Atk,
        Stat::Def => BattleStat::Def,
        Stat::SpA => BattleStat::SpA,
        Stat::SpD => BattleStat::SpD,
        Stat::Spe => BattleStat::Spe,
        Stat::Hp => unreachable!("HP never feeds the damage formula"),
    }
}
