//! Field-wide battle conditions consumed by the damage and speed paths.

use serde::Serialize;

use crate::error::CalcError;
use crate::moves::MoveCategory;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Weather {
    #[default]
    None,
    Sun,
    Rain,
    Sand,
    Snow,
}

impl Weather {
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_ascii_lowercase().as_str() {
            "none" | "" => Some(Weather::None),
            "sun" => Some(Weather::Sun),
            "rain" => Some(Weather::Rain),
            "sand" | "sandstorm" => Some(Weather::Sand),
            "snow" | "hail" => Some(Weather::Snow),
            _ => None,
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Terrain {
    #[default]
    None,
    Electric,
    Grassy,
    Psychic,
    Misty,
}

impl Terrain {
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_ascii_lowercase().as_str() {
            "none" | "" => Some(Terrain::None),
            "electric" => Some(Terrain::Electric),
            "grassy" => Some(Terrain::Grassy),
            "psychic" => Some(Terrain::Psychic),
            "misty" => Some(Terrain::Misty),
            _ => None,
        }
    }
}

/// Everything about the field that a single calculation can observe.
///
/// Screens describe the defender's side; helping hand and friend guard
/// describe allies of the attacker and defender respectively.
#[derive(Clone, Copy, Debug, Default)]
pub struct BattleConditions {
    pub weather: Weather,
    pub terrain: Terrain,
    pub reflect: bool,
    pub light_screen: bool,
    pub aurora_veil: bool,
    pub is_critical: bool,
    pub helping_hand: bool,
    pub friend_guard: bool,
    pub is_doubles: bool,
    /// Tailwind on the combatant's side; speed path only.
    pub tailwind: bool,
}

impl BattleConditions {
    /// Reject internally inconsistent combinations.
    ///
    /// Helping hand and friend guard are ally effects; they cannot occur
    /// outside doubles.
    pub fn validate(&self) -> Result<(), CalcError> {
        if self.helping_hand && !self.is_doubles {
            return Err(CalcError::Configuration {
                reason: "helping hand requires doubles",
            });
        }
        if self.friend_guard && !self.is_doubles {
            return Err(CalcError::Configuration {
                reason: "friend guard requires doubles",
            });
        }
        Ok(())
    }

    /// Whether a screen halves this move category.
    pub fn has_screen(&self, category: MoveCategory) -> bool {
        if self.aurora_veil {
            return true;
        }
        match category {
            MoveCategory::Physical => self.reflect,
            MoveCategory::Special => self.light_screen,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_ally_effects_need_doubles() {
        let mut conditions = BattleConditions {
            helping_hand: true,
            ..Default::default()
        };
        assert!(matches!(
            conditions.validate(),
            Err(CalcError::Configuration { .. })
        ));

        conditions.is_doubles = true;
        assert!(conditions.validate().is_ok());

        let conditions = BattleConditions {
            friend_guard: true,
            ..Default::default()
        };
        assert!(matches!(
            conditions.validate(),
            Err(CalcError::Configuration { .. })
        ));
    }

    #[test]
    fn test_screen_coverage() {
        let reflect_only = BattleConditions {
            reflect: true,
            ..Default::default()
        };
        assert!(reflect_only.has_screen(MoveCategory::Physical));
        assert!(!reflect_only.has_screen(MoveCategory::Special));

        let veil = BattleConditions {
            aurora_veil: true,
            ..Default::default()
        };
        assert!(veil.has_screen(MoveCategory::Physical));
        assert!(veil.has_screen(MoveCategory::Special));
    }

    #[test]
    fn test_weather_terrain_parsing() {
        assert_eq!(Weather::from_str("Rain"), Some(Weather::Rain));
        assert_eq!(Weather::from_str("sandstorm"), Some(Weather::Sand));
        assert_eq!(Weather::from_str("fog"), None);
        assert_eq!(Terrain::from_str("grassy"), Some(Terrain::Grassy));
        assert_eq!(Terrain::from_str("swamp"), None);
    }
}
