//! Stat derivation from base stat, IV, EV, level, and nature.

use serde::Serialize;

use crate::error::CalcError;
use crate::natures::{BattleStat, NatureId};

/// The six stat slots, HP included.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub enum Stat {
    Hp,
    Atk,
    Def,
    SpA,
    SpD,
    Spe,
}

impl Stat {
    /// Index into `[u16; 6]` stat arrays (HP first).
    pub const fn index(self) -> usize {
        match self {
            Stat::Hp => 0,
            Stat::Atk => 1,
            Stat::Def => 2,
            Stat::SpA => 3,
            Stat::SpD => 4,
            Stat::Spe => 5,
        }
    }

    /// The nature-relevant counterpart; HP has none.
    pub const fn battle_stat(self) -> Option<BattleStat> {
        match self {
            Stat::Hp => None,
            Stat::Atk => Some(BattleStat::Atk),
            Stat::Def => Some(BattleStat::Def),
            Stat::SpA => Some(BattleStat::SpA),
            Stat::SpD => Some(BattleStat::SpD),
            Stat::Spe => Some(BattleStat::Spe),
        }
    }

    pub const ALL: [Stat; 6] = [Stat::Hp, Stat::Atk, Stat::Def, Stat::SpA, Stat::SpD, Stat::Spe];
}

/// Largest legal IV.
pub const MAX_IV: u8 = 31;
/// Largest legal single-stat EV.
pub const MAX_EV: u16 = 252;
/// Cap on the sum of all six EVs, checked at snapshot construction.
pub const MAX_EV_TOTAL: u16 = 510;

/// Derive a stat value.
///
/// HP: `(2*base + iv + ev/4) * level / 100 + level + 10`, with a fixed
/// result of 1 when `base == 1` (1-HP species).
///
/// Others: `raw = (2*base + iv + ev/4) * level / 100 + 5`, then
/// `raw * nature / 10` with nature on the 9/10/11 integer scale. The inner
/// division runs before the nature multiplier; reordering shifts results at
/// stat boundaries.
///
/// Out-of-domain input is rejected with `Validation`, never clamped.
pub fn calculate_stat(
    base: u16,
    iv: u8,
    ev: u16,
    level: u8,
    nature: NatureId,
    stat: Stat,
) -> Result<u16, CalcError> {
    if iv > MAX_IV {
        return Err(CalcError::out_of_range("iv", iv as i64, 0, MAX_IV as i64));
    }
    if ev > MAX_EV {
        return Err(CalcError::out_of_range("ev", ev as i64, 0, MAX_EV as i64));
    }
    if level == 0 || level > 100 {
        return Err(CalcError::out_of_range("level", level as i64, 1, 100));
    }

    Ok(stat_unchecked(base, iv, ev, level, nature, stat))
}

/// The formula without boundary validation. Internal callers hold inputs
/// that were validated at snapshot construction.
pub(crate) fn stat_unchecked(
    base: u16,
    iv: u8,
    ev: u16,
    level: u8,
    nature: NatureId,
    stat: Stat,
) -> u16 {
    let base = base as u32;
    let iv = iv as u32;
    let ev = ev as u32;
    let level = level as u32;

    let value = match stat {
        Stat::Hp => {
            if base == 1 {
                return 1;
            }
            (2 * base + iv + ev / 4) * level / 100 + level + 10
        }
        other => {
            let raw = (2 * base + iv + ev / 4) * level / 100 + 5;
            // battle_stat() is Some for every non-HP slot
            let battle_stat = other.battle_stat().expect("non-HP stat");
            raw * nature.stat_modifier(battle_stat) as u32 / 10
        }
    };

    value as u16
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hp_formula() {
        // Base 108 HP, 31 IV, 252 EV, level 100:
        // (216 + 31 + 63) * 100 / 100 + 100 + 10 = 420
        let hp = calculate_stat(108, 31, 252, 100, NatureId::Serious, Stat::Hp).unwrap();
        assert_eq!(hp, 420);

        // Level 50: (216 + 31 + 63) * 50 / 100 + 50 + 10 = 215
        let hp = calculate_stat(108, 31, 252, 50, NatureId::Serious, Stat::Hp).unwrap();
        assert_eq!(hp, 215);
    }

    #[test]
    fn test_one_hp_species() {
        // base == 1 pins HP to 1 regardless of investment
        for (iv, ev, level) in [(0, 0, 1), (31, 252, 100), (15, 100, 50)] {
            let hp = calculate_stat(1, iv, ev, level, NatureId::Hardy, Stat::Hp).unwrap();
            assert_eq!(hp, 1);
        }
    }

    #[test]
    fn test_nature_applies_after_inner_floor() {
        // Base 130 Atk, 31 IV, 252 EV, level 100:
        // raw = (260 + 31 + 63) * 100 / 100 + 5 = 359
        // Adamant: 359 * 11 / 10 = 394 (floor of 394.9)
        let atk = calculate_stat(130, 31, 252, 100, NatureId::Adamant, Stat::Atk).unwrap();
        assert_eq!(atk, 394);

        // Neutral: 359
        let atk = calculate_stat(130, 31, 252, 100, NatureId::Serious, Stat::Atk).unwrap();
        assert_eq!(atk, 359);

        // Lowering: 359 * 9 / 10 = 323 (floor of 323.1)
        let atk = calculate_stat(130, 31, 252, 100, NatureId::Modest, Stat::Atk).unwrap();
        assert_eq!(atk, 323);
    }

    #[test]
    fn test_defense_scenario_figures() {
        // Base 115 Def, 31 IV, 0 EV, level 100, neutral:
        // (230 + 31) * 100 / 100 + 5 = 266
        let def = calculate_stat(115, 31, 0, 100, NatureId::Hardy, Stat::Def).unwrap();
        assert_eq!(def, 266);
    }

    #[test]
    fn test_positive_for_valid_domain_corners() {
        for (base, iv, ev, level) in [(1, 0, 0, 1), (255, 31, 252, 100), (50, 0, 0, 1)] {
            for stat in Stat::ALL {
                let v = calculate_stat(base, iv, ev, level, NatureId::Hardy, stat).unwrap();
                assert!(v > 0, "stat {:?} was zero for base {}", stat, base);
            }
        }
    }

    #[test]
    fn test_rejects_out_of_domain() {
        assert!(matches!(
            calculate_stat(100, 32, 0, 50, NatureId::Hardy, Stat::Atk),
            Err(CalcError::Validation { field: "iv", .. })
        ));
        assert!(matches!(
            calculate_stat(100, 0, 253, 50, NatureId::Hardy, Stat::Atk),
            Err(CalcError::Validation { field: "ev", .. })
        ));
        assert!(matches!(
            calculate_stat(100, 0, 0, 0, NatureId::Hardy, Stat::Atk),
            Err(CalcError::Validation { field: "level", .. })
        ));
        assert!(matches!(
            calculate_stat(100, 0, 0, 101, NatureId::Hardy, Stat::Atk),
            Err(CalcError::Validation { field: "level", .. })
        ));
    }
}
