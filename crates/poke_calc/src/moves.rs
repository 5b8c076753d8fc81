//! Move data model: category, behavior flags, and the move record shape
//! stored in the injected move table.

use serde::Serialize;

use crate::types::Type;

/// Damaging move categories. Status moves never reach the damage pipeline
/// and have no representation here.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum MoveCategory {
    Physical,
    Special,
}

bitflags::bitflags! {
    /// Closed set of move behavior flags.
    #[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
    pub struct MoveFlags: u16 {
        /// Makes contact (contact-keyed ability boosts apply).
        const CONTACT = 1 << 0;
        /// Sound-based move.
        const SOUND = 1 << 1;
        /// Hits multiple targets; damage drops to 0.75x in doubles.
        const SPREAD = 1 << 2;
        /// The user switches out after the hit.
        const SWITCHES_OUT = 1 << 3;
        /// Bypasses the defender's ability.
        const IGNORES_ABILITY = 1 << 4;
        /// Resolved against the defense stat opposite the category default
        /// (a special move hitting Defense, or the reverse).
        const TARGETS_OTHER_DEF = 1 << 5;
        /// Damage is not halved by the user's burn.
        const IGNORES_BURN = 1 << 6;
    }
}

/// An exact fraction, used for recoil and drain amounts.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct Ratio {
    pub num: u8,
    pub den: u8,
}

impl Ratio {
    pub const fn new(num: u8, den: u8) -> Self {
        Self { num, den }
    }

    /// Fraction of `value`, floored.
    pub fn of(self, value: u32) -> u32 {
        value * self.num as u32 / self.den as u32
    }
}

/// One record of the injected move table.
#[derive(Clone, Debug)]
pub struct MoveData {
    /// Display name ("Close Combat").
    pub name: String,
    pub typ: Type,
    pub category: MoveCategory,
    pub power: u16,
    /// Percent accuracy; `None` never misses.
    pub accuracy: Option<u8>,
    pub priority: i8,
    pub flags: MoveFlags,
    /// Fraction of dealt damage taken as recoil.
    pub recoil: Option<Ratio>,
    /// Fraction of dealt damage restored to the user.
    pub drain: Option<Ratio>,
}

impl MoveData {
    /// Plain damaging move with no flags.
    pub fn new(name: &str, typ: Type, category: MoveCategory, power: u16) -> Self {
        Self {
            name: name.to_string(),
            typ,
            category,
            power,
            accuracy: Some(100),
            priority: 0,
            flags: MoveFlags::empty(),
            recoil: None,
            drain: None,
        }
    }

    pub fn accuracy(mut self, accuracy: Option<u8>) -> Self {
        self.accuracy = accuracy;
        self
    }

    pub fn priority(mut self, priority: i8) -> Self {
        self.priority = priority;
        self
    }

    pub fn flags(mut self, flags: MoveFlags) -> Self {
        self.flags = flags;
        self
    }

    pub fn recoil(mut self, num: u8, den: u8) -> Self {
        self.recoil = Some(Ratio::new(num, den));
        self
    }

    pub fn drain(mut self, num: u8, den: u8) -> Self {
        self.drain = Some(Ratio::new(num, den));
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ratio_floors() {
        assert_eq!(Ratio::new(1, 3).of(100), 33);
        assert_eq!(Ratio::new(1, 2).of(101), 50);
        assert_eq!(Ratio::new(3, 4).of(100), 75);
    }

    #[test]
    fn test_move_builder() {
        let m = MoveData::new("Flare Blitz", Type::Fire, MoveCategory::Physical, 120)
            .flags(MoveFlags::CONTACT)
            .recoil(1, 3);
        assert_eq!(m.power, 120);
        assert!(m.flags.contains(MoveFlags::CONTACT));
        assert_eq!(m.recoil, Some(Ratio::new(1, 3)));
        assert_eq!(m.accuracy, Some(100));
    }
}
