//! Effective speed resolution and turn-order comparison.
//!
//! Independent of the damage path: only the speed stat, its stage, items,
//! abilities, status, and field effects participate. Modifier order is
//! fixed: stage, item, ability doubler, paralysis, tailwind; each step
//! floors through integer ratios.

use serde::Serialize;

use crate::combatant::{CombatantSnapshot, StatusCondition};
use crate::conditions::{BattleConditions, Terrain, Weather};
use crate::dex::Dex;
use crate::error::CalcError;
use crate::natures::BattleStat;
use crate::stats::Stat;

use crate::damage::formula::boosted_stat;

/// Effective speed under the given field conditions.
pub fn calculate_speed(
    combatant: &CombatantSnapshot,
    conditions: &BattleConditions,
    dex: &Dex,
) -> Result<u32, CalcError> {
    conditions.validate()?;
    Ok(resolve_speed(combatant, conditions, dex))
}

fn resolve_speed(combatant: &CombatantSnapshot, conditions: &BattleConditions, dex: &Dex) -> u32 {
    let ability = dex.abilities.effect_of(combatant.ability);
    let item = dex.items.effect_of(combatant.item);

    let mut speed = boosted_stat(combatant.stat(Stat::Spe), combatant.boost(BattleStat::Spe));

    if let Some((num, den)) = item.speed_ratio {
        speed = speed * num as u32 / den as u32;
    }

    let weather_doubled = matches!(ability.speed_weather, Some(weather)
        if weather != Weather::None && weather == conditions.weather);
    let terrain_doubled = matches!(ability.speed_terrain, Some(terrain)
        if terrain != Terrain::None && terrain == conditions.terrain);
    if weather_doubled || terrain_doubled {
        speed *= 2;
    }

    if combatant.status == StatusCondition::Paralysis && !ability.ignores_paralysis_drop {
        speed /= 2;
    }

    if conditions.tailwind {
        speed *= 2;
    }

    speed
}

/// Which of two combatants moves first.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SpeedVerdict {
    First,
    Second,
    Tie,
}

/// Outcome of a speed comparison.
#[derive(Clone, Debug, Serialize)]
pub struct SpeedComparison {
    pub verdict: SpeedVerdict,
    /// Name of the faster combatant; `None` on a tie.
    pub faster: Option<String>,
    /// Resolved speeds, in argument order.
    pub speeds: (u32, u32),
    /// Absolute speed gap.
    pub difference: u32,
}

/// Compare two combatants' effective speeds under their own conditions
/// (tailwind and ability synergies can differ per side).
pub fn compare_speed(
    a: &CombatantSnapshot,
    b: &CombatantSnapshot,
    conditions_a: &BattleConditions,
    conditions_b: &BattleConditions,
    dex: &Dex,
) -> Result<SpeedComparison, CalcError> {
    conditions_a.validate()?;
    conditions_b.validate()?;

    let speed_a = resolve_speed(a, conditions_a, dex);
    let speed_b = resolve_speed(b, conditions_b, dex);

    let (verdict, faster) = match speed_a.cmp(&speed_b) {
        std::cmp::Ordering::Greater => (SpeedVerdict::First, Some(a.name.clone())),
        std::cmp::Ordering::Less => (SpeedVerdict::Second, Some(b.name.clone())),
        std::cmp::Ordering::Equal => (SpeedVerdict::Tie, None),
    };

    Ok(SpeedComparison {
        verdict,
        faster,
        speeds: (speed_a, speed_b),
        difference: speed_a.abs_diff(speed_b),
    })
}
