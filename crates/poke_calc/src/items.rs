//! Held-item identifiers and effect descriptors.
//!
//! Same shape as the ability side: a closed identifier enum plus a data
//! descriptor looked up in the injected [`crate::dex::ItemTable`].

use serde::Serialize;

use crate::moves::MoveCategory;

/// Closed set of held-item identifiers.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
#[repr(u8)]
pub enum ItemId {
    ChoiceBand,
    ChoiceScarf,
    ChoiceSpecs,
    ExpertBelt,
    IronBall,
    LifeOrb,
}

static ITEM_NAMES: phf::Map<&'static str, ItemId> = phf::phf_map! {
    "choiceband" => ItemId::ChoiceBand,
    "choicescarf" => ItemId::ChoiceScarf,
    "choicespecs" => ItemId::ChoiceSpecs,
    "expertbelt" => ItemId::ExpertBelt,
    "ironball" => ItemId::IronBall,
    "lifeorb" => ItemId::LifeOrb,
};

impl ItemId {
    /// Lookup over normalized keys (lowercase, spaces stripped).
    pub fn from_str(s: &str) -> Option<Self> {
        let key: String = s
            .chars()
            .filter(|c| !c.is_whitespace() && *c != '-')
            .collect::<String>()
            .to_ascii_lowercase();
        ITEM_NAMES.get(key.as_str()).copied()
    }
}

/// A power multiplier carried by a held item.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum ItemPowerMod {
    /// Applies to every damaging move (Life Orb style; the recoil the item
    /// costs its holder is outside the damage path).
    Flat(f64),
    /// Applies to one move category (choice items).
    Category(MoveCategory, f64),
    /// Applies only when the hit is super effective (Expert Belt style).
    OnSuperEffective(f64),
}

/// What an item contributes to the damage and speed paths.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ItemEffect {
    /// Power multiplier applied in the item step of the pipeline.
    pub power: Option<ItemPowerMod>,
    /// Speed multiplier as an exact fraction (3/2 scarf, 1/2 iron ball).
    pub speed_ratio: Option<(u8, u8)>,
}

impl ItemEffect {
    pub fn power(mut self, power: ItemPowerMod) -> Self {
        self.power = Some(power);
        self
    }

    pub fn speed_ratio(mut self, num: u8, den: u8) -> Self {
        self.speed_ratio = Some((num, den));
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_str_normalizes() {
        assert_eq!(ItemId::from_str("Choice Band"), Some(ItemId::ChoiceBand));
        assert_eq!(ItemId::from_str("life-orb"), Some(ItemId::LifeOrb));
        assert_eq!(ItemId::from_str("leftovers"), None);
    }
}
