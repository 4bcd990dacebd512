//! Shapes of the host game data the challenge rules inspect.
//!
//! The host owns the real objects; it hands these lightweight views to the
//! rule callbacks. Numeric codes follow the game client's static data.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Item class code of consumables.
pub const ITEM_CLASS_CONSUMABLE: u32 = 0;

/// Consumable subclass codes.
pub const ITEM_SUBCLASS_POTION: u32 = 1;
pub const ITEM_SUBCLASS_ELIXIR: u32 = 2;
pub const ITEM_SUBCLASS_FLASK: u32 = 3;
pub const ITEM_SUBCLASS_FOOD: u32 = 5;

/// Spell effect that teaches a trade skill.
pub const SPELL_EFFECT_TRADE_SKILL: u32 = 47;
/// Aura that periodically triggers another spell (food buffs).
pub const SPELL_AURA_PERIODIC_TRIGGER_SPELL: u32 = 23;

/// Number of effect slots on a spell.
pub const MAX_SPELL_EFFECTS: usize = 3;

/// Class skills that are granted through trade-skill effects but are never professions.
pub const RUNEFORGING: u32 = 53_428;
pub const POISONS: u32 = 2_842;
pub const BEAST_TRAINING: u32 = 5_149;

/// Globally unique character identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct CharacterGuid(pub u64);

impl fmt::Display for CharacterGuid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Player-{}", self.0)
    }
}

/// Identifier of any world unit (creature or character).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct UnitGuid(pub u64);

impl fmt::Display for UnitGuid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Unit-{}", self.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CharacterClass {
    Warrior,
    Paladin,
    Hunter,
    Rogue,
    Priest,
    DeathKnight,
    Shaman,
    Mage,
    Warlock,
    Druid,
}

/// Where an experience award comes from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum XpSource {
    Kill,
    Quest,
    QuestDungeonFinder,
    Explore,
    Battleground,
}

/// Item quality tiers, ordered from worst to best.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[repr(u8)]
pub enum ItemQuality {
    Poor = 0,
    Normal = 1,
    Uncommon = 2,
    Rare = 3,
    Epic = 4,
    Legendary = 5,
    Artifact = 6,
    Heirloom = 7,
}

/// Static description of an item.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItemTemplate {
    pub entry: u32,
    pub name: String,
    pub class: u32,
    pub subclass: u32,
    pub quality: ItemQuality,
    /// The item is crafted and records its creator.
    pub has_signature: bool,
    /// Spells cast when the item is used.
    pub spells: Vec<u32>,
}

impl ItemTemplate {
    #[must_use]
    pub const fn is_consumable(&self) -> bool {
        self.class == ITEM_CLASS_CONSUMABLE
    }
}

/// A concrete item instance, as seen on equip attempts or in equipment slots.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    pub template: ItemTemplate,
    /// Character that crafted this item, if any.
    pub creator: Option<CharacterGuid>,
    /// Equipment slot, when equipped.
    pub slot: Option<u8>,
}

/// Item entry and quantity sent by mail.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ItemStack {
    pub entry: u32,
    pub count: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct SpellEffectInfo {
    pub effect: u32,
    pub apply_aura: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SpellInfo {
    pub id: u32,
    pub effects: [SpellEffectInfo; MAX_SPELL_EFFECTS],
}

impl SpellInfo {
    #[must_use]
    pub fn has_effect(&self, effect: u32) -> bool {
        self.effects.iter().any(|e| e.effect == effect)
    }

    #[must_use]
    pub fn applies_aura(&self, aura: u32) -> bool {
        self.effects.iter().any(|e| e.apply_aura == aura)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TitleEntry {
    pub id: u32,
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AchievementEntry {
    pub id: u32,
    pub name: String,
}
