//! Nature definitions and their stat modifiers.
//!
//! Modifiers are integers on a /10 scale (9 = −10%, 10 = neutral,
//! 11 = +10%) so stat math stays in integer floor arithmetic.

use serde::Serialize;

/// The five non-HP stats a nature can touch.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub enum BattleStat {
    Atk,
    Def,
    SpA,
    SpD,
    Spe,
}

/// One of the 25 natures.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
#[repr(u8)]
pub enum NatureId {
    #[default]
    Hardy,
    Lonely,
    Brave,
    Adamant,
    Naughty,
    Bold,
    Docile,
    Relaxed,
    Impish,
    Lax,
    Timid,
    Hasty,
    Serious,
    Jolly,
    Naive,
    Modest,
    Mild,
    Quiet,
    Bashful,
    Rash,
    Calm,
    Gentle,
    Sassy,
    Careful,
    Quirky,
}

static NATURE_NAMES: phf::Map<&'static str, NatureId> = phf::phf_map! {
    "hardy" => NatureId::Hardy,
    "lonely" => NatureId::Lonely,
    "brave" => NatureId::Brave,
    "adamant" => NatureId::Adamant,
    "naughty" => NatureId::Naughty,
    "bold" => NatureId::Bold,
    "docile" => NatureId::Docile,
    "relaxed" => NatureId::Relaxed,
    "impish" => NatureId::Impish,
    "lax" => NatureId::Lax,
    "timid" => NatureId::Timid,
    "hasty" => NatureId::Hasty,
    "serious" => NatureId::Serious,
    "jolly" => NatureId::Jolly,
    "naive" => NatureId::Naive,
    "modest" => NatureId::Modest,
    "mild" => NatureId::Mild,
    "quiet" => NatureId::Quiet,
    "bashful" => NatureId::Bashful,
    "rash" => NatureId::Rash,
    "calm" => NatureId::Calm,
    "gentle" => NatureId::Gentle,
    "sassy" => NatureId::Sassy,
    "careful" => NatureId::Careful,
    "quirky" => NatureId::Quirky,
};

impl NatureId {
    /// Case-insensitive name lookup.
    pub fn from_str(s: &str) -> Option<Self> {
        NATURE_NAMES.get(s.to_ascii_lowercase().as_str()).copied()
    }

    /// The stat this nature boosts by 10%, if any.
    pub const fn boosted(self) -> Option<BattleStat> {
        match self {
            NatureId::Lonely | NatureId::Brave | NatureId::Adamant | NatureId::Naughty => {
                Some(BattleStat::Atk)
            }
            NatureId::Bold | NatureId::Relaxed | NatureId::Impish | NatureId::Lax => {
                Some(BattleStat::Def)
            }
            NatureId::Modest | NatureId::Mild | NatureId::Quiet | NatureId::Rash => {
                Some(BattleStat::SpA)
            }
            NatureId::Calm | NatureId::Gentle | NatureId::Sassy | NatureId::Careful => {
                Some(BattleStat::SpD)
            }
            NatureId::Timid | NatureId::Hasty | NatureId::Jolly | NatureId::Naive => {
                Some(BattleStat::Spe)
            }
            _ => None,
        }
    }

    /// The stat this nature lowers by 10%, if any.
    pub const fn lowered(self) -> Option<BattleStat> {
        match self {
            NatureId::Bold | NatureId::Timid | NatureId::Modest | NatureId::Calm => {
                Some(BattleStat::Atk)
            }
            NatureId::Lonely | NatureId::Hasty | NatureId::Mild | NatureId::Gentle => {
                Some(BattleStat::Def)
            }
            NatureId::Adamant | NatureId::Impish | NatureId::Jolly | NatureId::Careful => {
                Some(BattleStat::SpA)
            }
            NatureId::Naughty | NatureId::Lax | NatureId::Naive | NatureId::Rash => {
                Some(BattleStat::SpD)
            }
            NatureId::Brave | NatureId::Relaxed | NatureId::Quiet | NatureId::Sassy => {
                Some(BattleStat::Spe)
            }
            _ => None,
        }
    }

    /// Modifier for a stat on the /10 scale: 11 boosted, 9 lowered, else 10.
    pub fn stat_modifier(self, stat: BattleStat) -> u8 {
        if self.boosted() == Some(stat) {
            11
        } else if self.lowered() == Some(stat) {
            9
        } else {
            10
        }
    }

    /// True for the five natures that touch no stat.
    pub fn is_neutral(self) -> bool {
        self.boosted().is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_str() {
        assert_eq!(NatureId::from_str("adamant"), Some(NatureId::Adamant));
        assert_eq!(NatureId::from_str("Adamant"), Some(NatureId::Adamant));
        assert_eq!(NatureId::from_str("bogus"), None);
    }

    #[test]
    fn test_adamant_modifiers() {
        // Adamant: +Atk, -SpA
        let adamant = NatureId::Adamant;
        assert_eq!(adamant.stat_modifier(BattleStat::Atk), 11);
        assert_eq!(adamant.stat_modifier(BattleStat::SpA), 9);
        assert_eq!(adamant.stat_modifier(BattleStat::Spe), 10);
        assert!(!adamant.is_neutral());
    }

    #[test]
    fn test_neutral_natures() {
        for nature in [
            NatureId::Hardy,
            NatureId::Docile,
            NatureId::Serious,
            NatureId::Bashful,
            NatureId::Quirky,
        ] {
            assert!(nature.is_neutral(), "{:?} should be neutral", nature);
            assert_eq!(nature.stat_modifier(BattleStat::Atk), 10);
        }
    }

    #[test]
    fn test_every_non_neutral_nature_has_distinct_boost_and_drop() {
        for (_, &nature) in NATURE_NAMES.entries() {
            match (nature.boosted(), nature.lowered()) {
                (None, None) => {}
                (Some(up), Some(down)) => {
                    assert_ne!(up, down, "{:?} boosts and lowers the same stat", nature)
                }
                other => panic!("{:?} has partial modifier pair {:?}", nature, other),
            }
        }
    }
}
