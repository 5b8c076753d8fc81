//! Ability identifiers and the effect descriptors the pipeline reads.
//!
//! Identifiers are a closed enum, resolved once when a snapshot is built.
//! What an ability *does* is data: an [`AbilityEffect`] looked up in the
//! injected [`crate::dex::AbilityTable`]. A missing entry means "no effect
//! on any calculation", so unknown-but-valid abilities degrade to inert.

use serde::Serialize;

use crate::conditions::{Terrain, Weather};
use crate::moves::MoveCategory;
use crate::types::Type;

/// Closed set of ability identifiers.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
#[repr(u8)]
pub enum AbilityId {
    #[default]
    NoAbility,
    Adaptability,
    Aerilate,
    Chlorophyll,
    Galvanize,
    Guts,
    Hustle,
    Levitate,
    Pixilate,
    QuickFeet,
    Refrigerate,
    SandRush,
    SheerForce,
    SlushRush,
    Steelworker,
    SurgeSurfer,
    SwiftSwim,
    Technician,
    ToughClaws,
    Transistor,
}

static ABILITY_NAMES: phf::Map<&'static str, AbilityId> = phf::phf_map! {
    "noability" => AbilityId::NoAbility,
    "adaptability" => AbilityId::Adaptability,
    "aerilate" => AbilityId::Aerilate,
    "chlorophyll" => AbilityId::Chlorophyll,
    "galvanize" => AbilityId::Galvanize,
    "guts" => AbilityId::Guts,
    "hustle" => AbilityId::Hustle,
    "levitate" => AbilityId::Levitate,
    "pixilate" => AbilityId::Pixilate,
    "quickfeet" => AbilityId::QuickFeet,
    "refrigerate" => AbilityId::Refrigerate,
    "sandrush" => AbilityId::SandRush,
    "sheerforce" => AbilityId::SheerForce,
    "slushrush" => AbilityId::SlushRush,
    "steelworker" => AbilityId::Steelworker,
    "surgesurfer" => AbilityId::SurgeSurfer,
    "swiftswim" => AbilityId::SwiftSwim,
    "technician" => AbilityId::Technician,
    "toughclaws" => AbilityId::ToughClaws,
    "transistor" => AbilityId::Transistor,
};

impl AbilityId {
    /// Lookup over normalized keys (lowercase, spaces stripped).
    pub fn from_str(s: &str) -> Option<Self> {
        let key: String = s
            .chars()
            .filter(|c| !c.is_whitespace() && *c != '-')
            .collect::<String>()
            .to_ascii_lowercase();
        ABILITY_NAMES.get(key.as_str()).copied()
    }
}

/// A conditional power multiplier carried by an ability or item.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum PowerMod {
    /// Applies to every damaging move.
    Flat(f64),
    /// Applies to moves of one type.
    TypeBoost(Type, f64),
    /// Applies to contact moves.
    Contact(f64),
    /// Applies to one move category.
    Category(MoveCategory, f64),
    /// Applies to moves at or below a power threshold.
    LowPower { max_power: u16, mult: f64 },
}

/// What an ability contributes to the damage and speed paths.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct AbilityEffect {
    /// Power multiplier applied in the ability step of the pipeline.
    pub power: Option<PowerMod>,
    /// Replacement for the 1.5 same-type bonus (Adaptability-style 2.0).
    pub stab_multiplier: Option<f64>,
    /// Physical damage is not halved by the user's burn.
    pub ignores_burn_penalty: bool,
    /// Normal-type moves become this type, with a power bonus applied in
    /// the ability step.
    pub normal_move_type: Option<(Type, f64)>,
    /// Speed doubles under this weather.
    pub speed_weather: Option<Weather>,
    /// Speed doubles under this terrain.
    pub speed_terrain: Option<Terrain>,
    /// Speed is not halved by paralysis.
    pub ignores_paralysis_drop: bool,
    /// The holder counts as airborne.
    pub grants_levitation: bool,
}

impl AbilityEffect {
    pub fn power(mut self, power: PowerMod) -> Self {
        self.power = Some(power);
        self
    }

    pub fn stab_multiplier(mut self, mult: f64) -> Self {
        self.stab_multiplier = Some(mult);
        self
    }

    pub fn ignores_burn_penalty(mut self) -> Self {
        self.ignores_burn_penalty = true;
        self
    }

    pub fn normal_move_type(mut self, typ: Type, power_bonus: f64) -> Self {
        self.normal_move_type = Some((typ, power_bonus));
        self
    }

    pub fn speed_weather(mut self, weather: Weather) -> Self {
        self.speed_weather = Some(weather);
        self
    }

    pub fn speed_terrain(mut self, terrain: Terrain) -> Self {
        self.speed_terrain = Some(terrain);
        self
    }

    pub fn ignores_paralysis_drop(mut self) -> Self {
        self.ignores_paralysis_drop = true;
        self
    }

    pub fn grants_levitation(mut self) -> Self {
        self.grants_levitation = true;
        self
    }
}
