//! Per-ruleset behavior.
//!
//! Every ruleset shares the base behavior of [`RulesetHooks`]: XP scaled by its
//! multiplier and level rewards. The modules below override the callbacks their
//! ruleset cares about.

pub(crate) mod hardcore;
mod iron_man;
mod item_quality;
mod quest_xp;
mod self_crafted;
mod semi_hardcore;

use crate::host::{Player, SpellCatalog};
use crate::registry::Ruleset;
use cmodes_domain::game::{Item, ItemTemplate, UnitGuid, XpSource};
use cmodes_domain::rulesets::RulesetId;

/// Experience about to be given to a character. Rules rewrite `amount` in place.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct XpAward {
    pub amount: u32,
    pub source: XpSource,
    /// Unit whose death produced the award.
    pub victim: Option<UnitGuid>,
}

impl XpAward {
    #[must_use]
    pub const fn new(amount: u32, source: XpSource) -> Self {
        Self { amount, source, victim: None }
    }

    #[must_use]
    pub const fn with_victim(mut self, victim: UnitGuid) -> Self {
        self.victim = Some(victim);
        self
    }

    /// Multiplies the amount, dropping the fraction.
    pub fn scale(&mut self, multiplier: f32) {
        self.amount = (self.amount as f32 * multiplier) as u32;
    }
}

/// Who killed a character.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Killer {
    Player(UnitGuid),
    Creature(UnitGuid),
}

pub(crate) trait RulesetHooks {
    fn give_xp(&self, ruleset: &Ruleset, _player: &mut dyn Player, award: &mut XpAward) {
        award.scale(ruleset.xp_multiplier);
    }

    /// Runs ahead of the level rewards.
    fn level_changed(&self, _player: &mut dyn Player) {}

    fn login(&self, _player: &mut dyn Player) {}

    fn ghost_released(&self, _player: &mut dyn Player) {}

    fn killed(&self, _player: &mut dyn Player, _killer: Killer) {}

    fn resurrected(&self, _player: &mut dyn Player) {}

    fn talents_reset(&self, _player: &mut dyn Player) {}

    fn can_equip(&self, _player: &dyn Player, _item: &Item) -> bool {
        true
    }

    fn can_apply_enchantment(&self, _player: &dyn Player, _item: &Item) -> bool {
        true
    }

    fn learned_spell(&self, _player: &mut dyn Player, _spells: &dyn SpellCatalog, _spell_id: u32) {}

    fn can_use_item(&self, _player: &dyn Player, _spells: &dyn SpellCatalog, _item: &ItemTemplate) -> bool {
        true
    }

    /// Both sending and accepting group invitations.
    fn can_group(&self, _player: &dyn Player) -> bool {
        true
    }
}

/// Rulesets with nothing beyond the base behavior.
struct Standard;

impl RulesetHooks for Standard {}

pub(crate) fn hooks(id: RulesetId) -> &'static dyn RulesetHooks {
    match id {
        RulesetId::Hardcore => &hardcore::Hardcore,
        RulesetId::SemiHardcore => &semi_hardcore::SemiHardcore,
        RulesetId::SelfCrafted => &self_crafted::SelfCrafted,
        RulesetId::ItemQualityLevel => &item_quality::ItemQualityLevel,
        RulesetId::SlowXpGain | RulesetId::VerySlowXpGain => &Standard,
        RulesetId::QuestXpOnly => &quest_xp::QuestXpOnly,
        RulesetId::IronMan => &iron_man::IronMan,
    }
}
