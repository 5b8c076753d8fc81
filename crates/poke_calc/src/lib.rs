//! poke_calc - Battle damage calculation engine
//!
//! A stateless computation library: stat derivation, type effectiveness,
//! an ordered multiplicative modifier pipeline, damage ranges with knockout
//! classification, and an independent speed resolver. Every call builds and
//! returns fresh values over immutable inputs, so calculations can run from
//! any number of threads without coordination.
//!
//! Data (species, moves, ability/item effects) is injected through
//! [`dex::Dex`]; the engine owns no storage format.

/// Type definitions and the effectiveness chart
pub mod types;

/// Nature definitions and stat modifiers
pub mod natures;

/// Stat derivation from base/IV/EV/level/nature
pub mod stats;

/// Move data model and behavior flags
pub mod moves;

/// Ability identifiers and effect descriptors
pub mod abilities;

/// Item identifiers and effect descriptors
pub mod items;

/// Combatant snapshots and their builder
pub mod combatant;

/// Field-wide battle conditions
pub mod conditions;

/// Injected read-only data tables
pub mod dex;

/// Damage pipeline: context, formula, modifiers, knockout classification
pub mod damage;

/// Effective speed and turn-order comparison
pub mod speed;

/// Error kinds shared by the public operations
pub mod error;

mod data;

// Re-export commonly used types
pub use abilities::{AbilityEffect, AbilityId};
pub use combatant::{CombatantSnapshot, SnapshotBuilder, StatusCondition};
pub use conditions::{BattleConditions, Terrain, Weather};
pub use damage::{calculate_all_moves, calculate_damage, DamageResult, KoChance};
pub use dex::{Dex, MoveDex, SpeciesData, SpeciesDex};
pub use error::{CalcError, EntryKind};
pub use items::{ItemEffect, ItemId};
pub use moves::{MoveCategory, MoveData, MoveFlags};
pub use natures::{BattleStat, NatureId};
pub use speed::{calculate_speed, compare_speed, SpeedComparison, SpeedVerdict};
pub use stats::{calculate_stat, Stat};
pub use types::{type_effectiveness, Type};
