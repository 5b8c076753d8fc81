//! Knockout-chance classification over the 16 canonical rolls.

use std::fmt;

use serde::{Serialize, Serializer};

/// How a damage range relates to the defender's full HP.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum KoChance {
    GuaranteedOhko,
    /// Some but not all rolls knock out; payload is the whole-percent chance.
    ChanceOhko(u8),
    Possible2hko,
    Possible3hko,
    None,
}

impl KoChance {
    /// Classify from the roll distribution.
    ///
    /// The rolls are derived from the already-computed `(base, modifier)`
    /// pair, so this function only counts; it never recomputes damage.
    pub fn classify(rolls: &[u32; 16], defender_hp: u16) -> Self {
        let hp = defender_hp as u32;
        let lethal = rolls.iter().filter(|&&roll| roll >= hp).count();
        let max = rolls[15];

        if lethal == 16 {
            KoChance::GuaranteedOhko
        } else if lethal > 0 {
            let percent = (lethal as f64 * 100.0 / 16.0).round() as u8;
            KoChance::ChanceOhko(percent)
        } else if max * 2 >= hp {
            KoChance::Possible2hko
        } else if max * 3 >= hp {
            KoChance::Possible3hko
        } else {
            KoChance::None
        }
    }
}

impl fmt::Display for KoChance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            KoChance::GuaranteedOhko => f.write_str("Guaranteed OHKO"),
            KoChance::ChanceOhko(percent) => write!(f, "{}% chance to OHKO", percent),
            KoChance::Possible2hko => f.write_str("Possible 2HKO"),
            KoChance::Possible3hko => f.write_str("Possible 3HKO"),
            KoChance::None => f.write_str("No KO"),
        }
    }
}

impl Serialize for KoChance {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}
