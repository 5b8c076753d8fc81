//! The ordered modifier chain.
//!
//! Each step multiplies one factor into a single aggregate `f64`. Order is
//! load-bearing: spread, weather, terrain, crit, STAB, effectiveness, burn,
//! screens, ability, item, helping hand, friend guard. Reordering changes
//! floor interactions downstream and must be treated as a bug.

use crate::abilities::PowerMod;
use crate::combatant::StatusCondition;
use crate::conditions::{Terrain, Weather};
use crate::items::ItemPowerMod;
use crate::moves::{MoveCategory, MoveFlags};
use crate::types::{effectiveness_multiplier, Type};

use super::context::DamageContext;

/// Screen factor: halved in singles, two-thirds-ish in doubles.
const SCREEN_SINGLES: f64 = 0.5;
const SCREEN_DOUBLES: f64 = 0.667;

/// Accumulate the full modifier chain for a context.
pub fn accumulate_modifier(ctx: &DamageContext<'_>) -> f64 {
    let mut modifier = 1.0;
    modifier *= spread_factor(ctx);
    modifier *= weather_factor(ctx.conditions.weather, ctx.move_type);
    modifier *= terrain_factor(ctx);
    if ctx.conditions.is_critical {
        modifier *= 1.5;
    }
    modifier *= stab_factor(ctx);
    modifier *= effectiveness_multiplier(ctx.effectiveness);
    modifier *= burn_factor(ctx);
    modifier *= screen_factor(ctx);
    modifier *= ability_factor(ctx);
    modifier *= item_factor(ctx);
    if ctx.conditions.helping_hand {
        modifier *= 1.5;
    }
    if ctx.conditions.friend_guard {
        modifier *= 0.75;
    }
    modifier
}

/// Spread moves hit for 0.75x when more than one target is on the field.
fn spread_factor(ctx: &DamageContext<'_>) -> f64 {
    if ctx.conditions.is_doubles && ctx.move_data.flags.contains(MoveFlags::SPREAD) {
        0.75
    } else {
        1.0
    }
}

/// Weather scales Fire and Water moves.
fn weather_factor(weather: Weather, move_type: Type) -> f64 {
    match (weather, move_type) {
        (Weather::Sun, Type::Fire) | (Weather::Rain, Type::Water) => 1.5,
        (Weather::Sun, Type::Water) | (Weather::Rain, Type::Fire) => 0.5,
        _ => 1.0,
    }
}

/// Terrain scales matching move types; airborne attackers are untouched.
fn terrain_factor(ctx: &DamageContext<'_>) -> f64 {
    if ctx.attacker_airborne {
        return 1.0;
    }
    match (ctx.conditions.terrain, ctx.move_type) {
        (Terrain::Electric, Type::Electric)
        | (Terrain::Grassy, Type::Grass)
        | (Terrain::Psychic, Type::Psychic) => 1.3,
        (Terrain::Misty, Type::Dragon) => 0.5,
        _ => 1.0,
    }
}

/// Same-type bonus: 1.5, or the attacker ability's replacement factor.
fn stab_factor(ctx: &DamageContext<'_>) -> f64 {
    if !ctx.has_stab {
        return 1.0;
    }
    ctx.attacker_ability.stab_multiplier.unwrap_or(1.5)
}

/// Burn halves physical damage unless the move or ability is exempt.
fn burn_factor(ctx: &DamageContext<'_>) -> f64 {
    let burned = ctx.attacker.status == StatusCondition::Burn;
    if burned
        && ctx.category == MoveCategory::Physical
        && !ctx.move_data.flags.contains(MoveFlags::IGNORES_BURN)
        && !ctx.attacker_ability.ignores_burn_penalty
    {
        0.5
    } else {
        1.0
    }
}

/// Screens on the defender's side; bypassed entirely by critical hits.
fn screen_factor(ctx: &DamageContext<'_>) -> f64 {
    if ctx.conditions.is_critical || !ctx.conditions.has_screen(ctx.category) {
        return 1.0;
    }
    if ctx.conditions.is_doubles {
        SCREEN_DOUBLES
    } else {
        SCREEN_SINGLES
    }
}

/// Attacker-ability power modifiers, including the bonus for type-substituted
/// Normal moves.
fn ability_factor(ctx: &DamageContext<'_>) -> f64 {
    let mut factor = 1.0;

    if ctx.type_substituted {
        if let Some((_, bonus)) = ctx.attacker_ability.normal_move_type {
            factor *= bonus;
        }
    }

    if let Some(power) = ctx.attacker_ability.power {
        factor *= match power {
            PowerMod::Flat(mult) => mult,
            PowerMod::TypeBoost(typ, mult) if typ == ctx.move_type => mult,
            PowerMod::Contact(mult) if ctx.move_data.flags.contains(MoveFlags::CONTACT) => mult,
            PowerMod::Category(category, mult) if category == ctx.category => mult,
            PowerMod::LowPower { max_power, mult } if ctx.move_data.power <= max_power => mult,
            _ => 1.0,
        };
    }

    factor
}

/// Attacker-item power modifiers.
fn item_factor(ctx: &DamageContext<'_>) -> f64 {
    match ctx.attacker_item.power {
        Some(ItemPowerMod::Flat(mult)) => mult,
        Some(ItemPowerMod::Category(category, mult)) if category == ctx.category => mult,
        Some(ItemPowerMod::OnSuperEffective(mult)) if ctx.effectiveness > 4 => mult,
        _ => 1.0,
    }
}
