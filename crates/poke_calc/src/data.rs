//! Reference dataset backing [`crate::dex::Dex::standard`].
//!
//! A compact, hand-checked slice of real species/move data plus the full
//! ability and item effect tables the pipeline knows how to read. Tests,
//! benches, and the CLI runner use this; library callers inject their own.

use crate::abilities::{AbilityEffect, AbilityId, PowerMod};
use crate::conditions::{Terrain, Weather};
use crate::dex::{AbilityTable, Dex, ItemTable, MoveDex, SpeciesData, SpeciesDex};
use crate::items::{ItemEffect, ItemId, ItemPowerMod};
use crate::moves::{MoveCategory, MoveData, MoveFlags};
use crate::types::Type;

use MoveCategory::{Physical, Special};

fn standard_species() -> Vec<SpeciesData> {
    vec![
        SpeciesData::new("Garchomp", [108, 130, 95, 80, 85, 102], Type::Dragon, Some(Type::Ground)),
        SpeciesData::new("Tyranitar", [100, 134, 110, 95, 100, 61], Type::Rock, Some(Type::Dark)),
        SpeciesData::new("Pikachu", [35, 55, 40, 50, 50, 90], Type::Electric, None),
        SpeciesData::new("Sylveon", [95, 65, 65, 110, 130, 60], Type::Fairy, None),
        SpeciesData::new("Skarmory", [65, 80, 140, 40, 70, 70], Type::Steel, Some(Type::Flying)),
        SpeciesData::new("Blissey", [255, 10, 10, 75, 135, 55], Type::Normal, None),
        SpeciesData::new("Shedinja", [1, 90, 45, 30, 30, 40], Type::Bug, Some(Type::Ghost)),
        SpeciesData::new("Dragapult", [88, 120, 75, 100, 75, 142], Type::Dragon, Some(Type::Ghost)),
        SpeciesData::new("Talonflame", [78, 81, 71, 74, 69, 126], Type::Fire, Some(Type::Flying)),
        SpeciesData::new("Swampert", [100, 110, 90, 85, 90, 60], Type::Water, Some(Type::Ground)),
        SpeciesData::new("Gengar", [60, 65, 60, 130, 75, 110], Type::Ghost, Some(Type::Poison)),
        SpeciesData::new("Scizor", [70, 130, 100, 55, 80, 65], Type::Bug, Some(Type::Steel)),
        SpeciesData::new("Weavile", [70, 120, 65, 45, 85, 125], Type::Dark, Some(Type::Ice)),
        SpeciesData::new("Raichu", [60, 90, 55, 90, 80, 110], Type::Electric, None),
        SpeciesData::new("Machamp", [90, 130, 80, 65, 85, 55], Type::Fighting, None),
    ]
}

fn standard_moves() -> Vec<MoveData> {
    vec![
        MoveData::new("Tackle", Type::Normal, Physical, 40).flags(MoveFlags::CONTACT),
        MoveData::new("Body Slam", Type::Normal, Physical, 85).flags(MoveFlags::CONTACT),
        MoveData::new("Facade", Type::Normal, Physical, 70)
            .flags(MoveFlags::CONTACT | MoveFlags::IGNORES_BURN),
        MoveData::new("Hyper Voice", Type::Normal, Special, 90)
            .flags(MoveFlags::SOUND | MoveFlags::SPREAD),
        MoveData::new("Boomburst", Type::Normal, Special, 140)
            .flags(MoveFlags::SOUND | MoveFlags::SPREAD),
        MoveData::new("Quick Attack", Type::Normal, Physical, 40)
            .flags(MoveFlags::CONTACT)
            .priority(1),
        MoveData::new("Flamethrower", Type::Fire, Special, 90),
        MoveData::new("Fire Blast", Type::Fire, Special, 110).accuracy(Some(85)),
        MoveData::new("Flare Blitz", Type::Fire, Physical, 120)
            .flags(MoveFlags::CONTACT)
            .recoil(1, 3),
        MoveData::new("Surf", Type::Water, Special, 90).flags(MoveFlags::SPREAD),
        MoveData::new("Hydro Pump", Type::Water, Special, 110).accuracy(Some(80)),
        MoveData::new("Aqua Jet", Type::Water, Physical, 40)
            .flags(MoveFlags::CONTACT)
            .priority(1),
        MoveData::new("Thunderbolt", Type::Electric, Special, 90),
        MoveData::new("Thunder", Type::Electric, Special, 110).accuracy(Some(70)),
        MoveData::new("Volt Tackle", Type::Electric, Physical, 120)
            .flags(MoveFlags::CONTACT)
            .recoil(1, 3),
        MoveData::new("Volt Switch", Type::Electric, Special, 70).flags(MoveFlags::SWITCHES_OUT),
        MoveData::new("Energy Ball", Type::Grass, Special, 90),
        MoveData::new("Giga Drain", Type::Grass, Special, 75).drain(1, 2),
        MoveData::new("Ice Beam", Type::Ice, Special, 90),
        MoveData::new("Icicle Crash", Type::Ice, Physical, 85).accuracy(Some(90)),
        MoveData::new("Close Combat", Type::Fighting, Physical, 120).flags(MoveFlags::CONTACT),
        MoveData::new("Mach Punch", Type::Fighting, Physical, 40)
            .flags(MoveFlags::CONTACT)
            .priority(1),
        MoveData::new("Sludge Bomb", Type::Poison, Special, 90),
        MoveData::new("Earthquake", Type::Ground, Physical, 100).flags(MoveFlags::SPREAD),
        MoveData::new("Brave Bird", Type::Flying, Physical, 120)
            .flags(MoveFlags::CONTACT)
            .recoil(1, 3),
        MoveData::new("Psychic", Type::Psychic, Special, 90),
        MoveData::new("Psyshock", Type::Psychic, Special, 80).flags(MoveFlags::TARGETS_OTHER_DEF),
        MoveData::new("U-turn", Type::Bug, Physical, 70)
            .flags(MoveFlags::CONTACT | MoveFlags::SWITCHES_OUT),
        MoveData::new("Bug Bite", Type::Bug, Physical, 60).flags(MoveFlags::CONTACT),
        MoveData::new("Stone Edge", Type::Rock, Physical, 100).accuracy(Some(80)),
        MoveData::new("Rock Slide", Type::Rock, Physical, 75)
            .accuracy(Some(90))
            .flags(MoveFlags::SPREAD),
        MoveData::new("Shadow Ball", Type::Ghost, Special, 80),
        MoveData::new("Moongeist Beam", Type::Ghost, Special, 100).flags(MoveFlags::IGNORES_ABILITY),
        MoveData::new("Dragon Claw", Type::Dragon, Physical, 80).flags(MoveFlags::CONTACT),
        MoveData::new("Outrage", Type::Dragon, Physical, 120).flags(MoveFlags::CONTACT),
        MoveData::new("Crunch", Type::Dark, Physical, 80).flags(MoveFlags::CONTACT),
        MoveData::new("Dark Pulse", Type::Dark, Special, 80),
        MoveData::new("Iron Head", Type::Steel, Physical, 80).flags(MoveFlags::CONTACT),
        MoveData::new("Bullet Punch", Type::Steel, Physical, 40)
            .flags(MoveFlags::CONTACT)
            .priority(1),
        MoveData::new("Moonblast", Type::Fairy, Special, 95),
        MoveData::new("Play Rough", Type::Fairy, Physical, 90).flags(MoveFlags::CONTACT),
    ]
}

fn standard_abilities() -> Vec<(AbilityId, AbilityEffect)> {
    vec![
        (
            AbilityId::Adaptability,
            AbilityEffect::default().stab_multiplier(2.0),
        ),
        (
            AbilityId::Technician,
            AbilityEffect::default().power(PowerMod::LowPower {
                max_power: 60,
                mult: 1.5,
            }),
        ),
        (
            AbilityId::ToughClaws,
            AbilityEffect::default().power(PowerMod::Contact(1.3)),
        ),
        // Secondary-effect gating is not modeled; the reference table treats
        // the boost as unconditional.
        (
            AbilityId::SheerForce,
            AbilityEffect::default().power(PowerMod::Flat(1.3)),
        ),
        (
            AbilityId::Hustle,
            AbilityEffect::default().power(PowerMod::Category(Physical, 1.5)),
        ),
        (
            AbilityId::Transistor,
            AbilityEffect::default().power(PowerMod::TypeBoost(Type::Electric, 1.3)),
        ),
        (
            AbilityId::Steelworker,
            AbilityEffect::default().power(PowerMod::TypeBoost(Type::Steel, 1.5)),
        ),
        (AbilityId::Guts, AbilityEffect::default().ignores_burn_penalty()),
        (
            AbilityId::QuickFeet,
            AbilityEffect::default().ignores_paralysis_drop(),
        ),
        (
            AbilityId::SwiftSwim,
            AbilityEffect::default().speed_weather(Weather::Rain),
        ),
        (
            AbilityId::Chlorophyll,
            AbilityEffect::default().speed_weather(Weather::Sun),
        ),
        (
            AbilityId::SandRush,
            AbilityEffect::default().speed_weather(Weather::Sand),
        ),
        (
            AbilityId::SlushRush,
            AbilityEffect::default().speed_weather(Weather::Snow),
        ),
        (
            AbilityId::SurgeSurfer,
            AbilityEffect::default().speed_terrain(Terrain::Electric),
        ),
        (AbilityId::Levitate, AbilityEffect::default().grants_levitation()),
        (
            AbilityId::Pixilate,
            AbilityEffect::default().normal_move_type(Type::Fairy, 1.2),
        ),
        (
            AbilityId::Aerilate,
            AbilityEffect::default().normal_move_type(Type::Flying, 1.2),
        ),
        (
            AbilityId::Galvanize,
            AbilityEffect::default().normal_move_type(Type::Electric, 1.2),
        ),
        (
            AbilityId::Refrigerate,
            AbilityEffect::default().normal_move_type(Type::Ice, 1.2),
        ),
    ]
}

fn standard_items() -> Vec<(ItemId, ItemEffect)> {
    vec![
        (
            ItemId::ChoiceBand,
            ItemEffect::default().power(ItemPowerMod::Category(Physical, 1.5)),
        ),
        (
            ItemId::ChoiceSpecs,
            ItemEffect::default().power(ItemPowerMod::Category(Special, 1.5)),
        ),
        (ItemId::ChoiceScarf, ItemEffect::default().speed_ratio(3, 2)),
        (
            ItemId::LifeOrb,
            ItemEffect::default().power(ItemPowerMod::Flat(1.3)),
        ),
        (
            ItemId::ExpertBelt,
            ItemEffect::default().power(ItemPowerMod::OnSuperEffective(1.2)),
        ),
        (ItemId::IronBall, ItemEffect::default().speed_ratio(1, 2)),
    ]
}

pub(crate) fn standard_dex() -> Dex {
    Dex {
        species: SpeciesDex::from_records(standard_species())
            .expect("reference species table has unique keys"),
        moves: MoveDex::from_records(standard_moves())
            .expect("reference move table has unique keys"),
        abilities: AbilityTable::from_entries(standard_abilities()),
        items: ItemTable::from_entries(standard_items()),
    }
}
