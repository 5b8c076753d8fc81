//! Type definitions and the 18-type effectiveness chart.
//!
//! Effectiveness is kept on a ×4 integer scale (0 = immune, 2 = 0.5x,
//! 4 = 1x, 8 = 2x, 16 = 4x) so dual-type products stay exact integers.
//!
//! The resolver is substitution-agnostic: ability-driven move-type overrides
//! (Pixilate and friends) are resolved by the damage pipeline before this
//! chart is consulted.

use serde::Serialize;

/// The fixed 18-type set.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
#[repr(u8)]
pub enum Type {
    Normal,
    Fire,
    Water,
    Electric,
    Grass,
    Ice,
    Fighting,
    Poison,
    Ground,
    Flying,
    Psychic,
    Bug,
    Rock,
    Ghost,
    Dragon,
    Dark,
    Steel,
    Fairy,
}

/// Number of types in the chart.
pub const TYPE_COUNT: usize = 18;

/// All types, in chart order.
pub const ALL_TYPES: [Type; TYPE_COUNT] = [
    Type::Normal,
    Type::Fire,
    Type::Water,
    Type::Electric,
    Type::Grass,
    Type::Ice,
    Type::Fighting,
    Type::Poison,
    Type::Ground,
    Type::Flying,
    Type::Psychic,
    Type::Bug,
    Type::Rock,
    Type::Ghost,
    Type::Dragon,
    Type::Dark,
    Type::Steel,
    Type::Fairy,
];

static TYPE_NAMES: phf::Map<&'static str, Type> = phf::phf_map! {
    "normal" => Type::Normal,
    "fire" => Type::Fire,
    "water" => Type::Water,
    "electric" => Type::Electric,
    "grass" => Type::Grass,
    "ice" => Type::Ice,
    "fighting" => Type::Fighting,
    "poison" => Type::Poison,
    "ground" => Type::Ground,
    "flying" => Type::Flying,
    "psychic" => Type::Psychic,
    "bug" => Type::Bug,
    "rock" => Type::Rock,
    "ghost" => Type::Ghost,
    "dragon" => Type::Dragon,
    "dark" => Type::Dark,
    "steel" => Type::Steel,
    "fairy" => Type::Fairy,
};

impl Type {
    /// Case-insensitive name lookup.
    pub fn from_str(s: &str) -> Option<Self> {
        TYPE_NAMES.get(s.to_ascii_lowercase().as_str()).copied()
    }

    pub const fn name(self) -> &'static str {
        match self {
            Type::Normal => "Normal",
            Type::Fire => "Fire",
            Type::Water => "Water",
            Type::Electric => "Electric",
            Type::Grass => "Grass",
            Type::Ice => "Ice",
            Type::Fighting => "Fighting",
            Type::Poison => "Poison",
            Type::Ground => "Ground",
            Type::Flying => "Flying",
            Type::Psychic => "Psychic",
            Type::Bug => "Bug",
            Type::Rock => "Rock",
            Type::Ghost => "Ghost",
            Type::Dragon => "Dragon",
            Type::Dark => "Dark",
            Type::Steel => "Steel",
            Type::Fairy => "Fairy",
        }
    }
}

/// One cell of the type chart.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[repr(u8)]
pub enum TypeEffectiveness {
    Immune,
    NotVeryEffective,
    Neutral,
    SuperEffective,
}

impl TypeEffectiveness {
    /// ×4-scale multiplier for this cell.
    pub const fn multiplier(self) -> u8 {
        match self {
            TypeEffectiveness::Immune => 0,
            TypeEffectiveness::NotVeryEffective => 2,
            TypeEffectiveness::Neutral => 4,
            TypeEffectiveness::SuperEffective => 8,
        }
    }
}

// Row shorthands keep the chart readable.
use TypeEffectiveness::Immune as I;
use TypeEffectiveness::Neutral as N;
use TypeEffectiveness::NotVeryEffective as H;
use TypeEffectiveness::SuperEffective as S;

/// Type chart: `TYPE_CHART[attacker][defender] = effectiveness`.
///
/// Defender column order matches [`ALL_TYPES`]:
/// Nor Fir Wat Ele Gra Ice Fig Poi Gro Fly Psy Bug Roc Gho Dra Dar Ste Fai
pub static TYPE_CHART: [[TypeEffectiveness; TYPE_COUNT]; TYPE_COUNT] = [
    // Normal
    [N, N, N, N, N, N, N, N, N, N, N, N, H, I, N, N, H, N],
    // Fire
    [N, H, H, N, S, S, N, N, N, N, N, S, H, N, H, N, S, N],
    // Water
    [N, S, H, N, H, N, N, N, S, N, N, N, S, N, H, N, N, N],
    // Electric
    [N, N, S, H, H, N, N, N, I, S, N, N, N, N, H, N, N, N],
    // Grass
    [N, H, S, N, H, N, N, H, S, H, N, H, S, N, H, N, H, N],
    // Ice
    [N, H, H, N, S, H, N, N, S, S, N, N, N, N, S, N, H, N],
    // Fighting
    [S, N, N, N, N, S, N, H, N, H, H, H, S, I, N, S, S, H],
    // Poison
    [N, N, N, N, S, N, N, H, H, N, N, N, H, H, N, N, I, S],
    // Ground
    [N, S, N, S, H, N, N, S, N, I, N, H, S, N, N, N, S, N],
    // Flying
    [N, N, N, H, S, N, S, N, N, N, N, S, H, N, N, N, H, N],
    // Psychic
    [N, N, N, N, N, N, S, S, N, N, H, N, N, N, N, I, H, N],
    // Bug
    [N, H, N, N, S, N, H, H, N, H, S, N, N, H, N, S, H, H],
    // Rock
    [N, S, N, N, N, S, H, N, H, S, N, S, N, N, N, N, H, N],
    // Ghost
    [I, N, N, N, N, N, N, N, N, N, S, N, N, S, N, H, N, N],
    // Dragon
    [N, N, N, N, N, N, N, N, N, N, N, N, N, N, S, N, H, I],
    // Dark
    [N, N, N, N, N, N, H, N, N, N, S, N, N, S, N, H, N, H],
    // Steel
    [N, H, H, H, N, S, N, N, N, N, N, N, S, N, N, N, H, S],
    // Fairy
    [N, H, N, N, N, N, S, H, N, N, N, N, N, N, S, S, H, N],
];

/// Effectiveness of an attacking type against one or two defending types,
/// on the ×4 scale. Duplicate defending types count once.
pub fn type_effectiveness(attacker: Type, defender1: Type, defender2: Option<Type>) -> u8 {
    let mut mult = TYPE_CHART[attacker as usize][defender1 as usize].multiplier() as u16;
    if let Some(t2) = defender2 {
        if t2 != defender1 {
            mult = mult * TYPE_CHART[attacker as usize][t2 as usize].multiplier() as u16 / 4;
        }
    }
    mult as u8
}

/// Convert a ×4-scale effectiveness to the real multiplier.
pub fn effectiveness_multiplier(effectiveness: u8) -> f64 {
    effectiveness as f64 / 4.0
}

/// Textual class for a ×4-scale effectiveness value.
pub fn effectiveness_label(effectiveness: u8) -> &'static str {
    match effectiveness {
        0 => "immune",
        1 => "0.25x not very effective",
        2 => "0.5x not very effective",
        4 => "neutral",
        8 => "2x super effective",
        16 => "4x super effective",
        _ => unreachable!("effectiveness values are products of chart cells"),
    }
}
