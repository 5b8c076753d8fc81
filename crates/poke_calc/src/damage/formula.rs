//! Core damage math: the base-damage formula, stage multipliers, and the
//! 16-roll generation.
//!
//! Integer division carries every floor the formula specifies; the aggregate
//! modifier is a single `f64` factor floored only when a roll is realized.

/// Base damage before the modifier chain.
///
/// `floor(floor(floor(2*level/5 + 2) * power * attack / defense) / 50) + 2`
pub fn base_damage(level: u8, power: u16, attack: u32, defense: u32) -> u32 {
    if defense == 0 || power == 0 {
        return 0;
    }

    let level_factor = (2 * level as u64) / 5 + 2;
    let numerator = level_factor * power as u64 * attack as u64;
    let after_defense = numerator / defense as u64;
    (after_defense / 50) as u32 + 2
}

/// Apply a stage boost to a stat: `(2+n)/2` for `n >= 0`, else `2/(2-n)`,
/// floored.
pub fn boosted_stat(stat: u16, stage: i8) -> u32 {
    let stage = stage.clamp(-6, 6) as i64;
    let (numerator, denominator) = if stage >= 0 {
        (2 + stage, 2)
    } else {
        (2, 2 - stage)
    };
    (stat as i64 * numerator / denominator) as u32
}

/// Damage for one canonical roll percent (85..=100).
pub fn roll_damage(base_damage: u32, modifier: f64, roll_percent: u32) -> u32 {
    (base_damage as f64 * modifier * (roll_percent as f64 / 100.0)).floor() as u32
}

/// All 16 canonical rolls, 85% through 100% at 1% steps.
pub fn all_rolls(base_damage: u32, modifier: f64) -> [u32; 16] {
    let mut rolls = [0u32; 16];
    for (i, roll) in rolls.iter_mut().enumerate() {
        *roll = roll_damage(base_damage, modifier, 85 + i as u32);
    }
    rolls
}
