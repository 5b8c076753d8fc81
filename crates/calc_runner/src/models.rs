//! Serde models for matchup descriptions fed to the runner.

use serde::Deserialize;

use poke_calc::{
    BattleConditions, CalcError, CombatantSnapshot, Dex, StatusCondition, Terrain, Weather,
};

/// One side of a matchup.
#[derive(Deserialize, Debug, Clone)]
pub struct CombatantInput {
    pub species: String,
    pub level: Option<u8>,
    pub nature: Option<String>,
    pub ability: Option<String>,
    pub item: Option<String>,
    /// HP/Atk/Def/SpA/SpD/Spe
    pub evs: Option<[u16; 6]>,
    pub ivs: Option<[u8; 6]>,
    /// Atk/Def/SpA/SpD/Spe stages
    pub boosts: Option<[i8; 5]>,
    pub status: Option<String>,
    #[serde(rename = "teraType")]
    pub tera_type: Option<String>,
    pub airborne: Option<bool>,
    #[serde(default)]
    pub moves: Vec<String>,
}

impl CombatantInput {
    pub fn into_snapshot(self, dex: &Dex) -> Result<CombatantSnapshot, CalcError> {
        let mut builder = CombatantSnapshot::from_species(dex, &self.species)?;

        if let Some(level) = self.level {
            builder = builder.level(level);
        }
        if let Some(nature) = &self.nature {
            builder = builder.nature_named(nature)?;
        }
        if let Some(ability) = &self.ability {
            builder = builder.ability_named(ability)?;
        }
        if let Some(item) = &self.item {
            builder = builder.item_named(item)?;
        }
        if let Some(evs) = self.evs {
            builder = builder.evs(evs);
        }
        if let Some(ivs) = self.ivs {
            builder = builder.ivs(ivs);
        }
        if let Some(boosts) = self.boosts {
            builder = builder.boosts(boosts);
        }
        if let Some(status) = &self.status {
            let status = StatusCondition::from_str(status).ok_or(CalcError::Configuration {
                reason: "unknown status condition",
            })?;
            builder = builder.status(status);
        }
        if let Some(tera) = &self.tera_type {
            builder = builder.tera_named(tera)?;
        }
        if let Some(airborne) = self.airborne {
            builder = builder.airborne(airborne);
        }

        let moves: Vec<&str> = self.moves.iter().map(String::as_str).collect();
        builder.moves(&moves).build()
    }
}

/// Field state for the calculation.
#[derive(Deserialize, Debug, Default, Clone)]
pub struct FieldInput {
    pub weather: Option<String>,
    pub terrain: Option<String>,
    #[serde(default)]
    pub reflect: bool,
    #[serde(default, rename = "lightScreen")]
    pub light_screen: bool,
    #[serde(default, rename = "auroraVeil")]
    pub aurora_veil: bool,
    #[serde(default, rename = "isCrit")]
    pub is_crit: bool,
    #[serde(default, rename = "helpingHand")]
    pub helping_hand: bool,
    #[serde(default, rename = "friendGuard")]
    pub friend_guard: bool,
    #[serde(default, rename = "isDoubles")]
    pub is_doubles: bool,
    #[serde(default)]
    pub tailwind: bool,
}

impl FieldInput {
    pub fn into_conditions(self) -> Result<BattleConditions, CalcError> {
        let weather = match &self.weather {
            Some(name) => Weather::from_str(name).ok_or(CalcError::Configuration {
                reason: "unknown weather",
            })?,
            None => Weather::None,
        };
        let terrain = match &self.terrain {
            Some(name) => Terrain::from_str(name).ok_or(CalcError::Configuration {
                reason: "unknown terrain",
            })?,
            None => Terrain::None,
        };

        let conditions = BattleConditions {
            weather,
            terrain,
            reflect: self.reflect,
            light_screen: self.light_screen,
            aurora_veil: self.aurora_veil,
            is_critical: self.is_crit,
            helping_hand: self.helping_hand,
            friend_guard: self.friend_guard,
            is_doubles: self.is_doubles,
            tailwind: self.tailwind,
        };
        conditions.validate()?;
        Ok(conditions)
    }
}

/// A full matchup request.
#[derive(Deserialize, Debug, Clone)]
pub struct MatchupInput {
    pub attacker: CombatantInput,
    pub defender: CombatantInput,
    #[serde(default)]
    pub field: FieldInput,
    /// Single move to calculate; omitted means the attacker's whole moveset.
    #[serde(rename = "move")]
    pub move_name: Option<String>,
}
