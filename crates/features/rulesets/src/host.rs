//! Seams into the hosting game server.
//!
//! The rules never own game objects. Each callback receives the character and
//! the services it needs through these traits.

use cmodes_domain::game::{
    AchievementEntry, CharacterClass, CharacterGuid, Item, ItemStack, SpellInfo, TitleEntry,
};
use cmodes_domain::rulesets::{ChallengeFlags, HARDCORE_DEAD_INDEX, RulesetId, SETTINGS_NAMESPACE};

/// The character an event is about.
pub trait Player {
    fn guid(&self) -> CharacterGuid;
    fn name(&self) -> &str;
    fn level(&self) -> u8;
    fn class(&self) -> CharacterClass;

    /// Reads a persisted boolean setting.
    fn setting(&self, namespace: &str, index: u8) -> bool;
    /// Writes a persisted boolean setting.
    fn update_setting(&mut self, namespace: &str, index: u8, value: bool);

    fn has_pet(&self) -> bool;
    fn give_pet_xp(&mut self, amount: u32);
    fn is_grouped(&self) -> bool;
    fn set_free_talent_points(&mut self, points: u32);

    /// Items currently in equipment slots.
    fn equipped_items(&self) -> Vec<Item>;
    fn destroy_equipped_item(&mut self, slot: u8);
    fn set_money(&mut self, copper: u32);
    fn remove_spell(&mut self, spell_id: u32);

    fn kill(&mut self);
    /// Disconnects the session with a reason shown to the player.
    fn kick(&mut self, reason: &str);
    fn send_system_message(&mut self, text: &str);
}

/// Game data lookups and grant actions used by level rewards.
pub trait RewardGrantor {
    fn find_title(&self, id: u32) -> Option<TitleEntry>;
    fn find_achievement(&self, id: u32) -> Option<AchievementEntry>;
    fn grant_title(&mut self, player: &mut dyn Player, title: &TitleEntry);
    fn grant_talent_points(&mut self, player: &mut dyn Player, points: u32);
    fn complete_achievement(&mut self, player: &mut dyn Player, achievement: &AchievementEntry);
    /// Sends items to the character's mailbox.
    fn mail_items(&mut self, recipient: CharacterGuid, items: &[ItemStack]);
}

/// Spell metadata lookups.
pub trait SpellCatalog {
    fn spell_info(&self, id: u32) -> Option<SpellInfo>;
}

/// Typed access to the challenge bits of the persisted settings.
pub trait ChallengeState {
    fn has_challenge(&self, id: RulesetId) -> bool;
    fn set_challenge(&mut self, id: RulesetId, enabled: bool);
    fn is_hardcore_dead(&self) -> bool;
    fn mark_hardcore_dead(&mut self);
    /// All challenge bits at once.
    fn challenge_flags(&self) -> ChallengeFlags;
}

impl<P: Player + ?Sized> ChallengeState for P {
    fn has_challenge(&self, id: RulesetId) -> bool {
        self.setting(SETTINGS_NAMESPACE, id.index())
    }

    fn set_challenge(&mut self, id: RulesetId, enabled: bool) {
        self.update_setting(SETTINGS_NAMESPACE, id.index(), enabled);
    }

    fn is_hardcore_dead(&self) -> bool {
        self.setting(SETTINGS_NAMESPACE, HARDCORE_DEAD_INDEX)
    }

    fn mark_hardcore_dead(&mut self) {
        self.update_setting(SETTINGS_NAMESPACE, HARDCORE_DEAD_INDEX, true);
    }

    fn challenge_flags(&self) -> ChallengeFlags {
        let mut flags = RulesetId::ALL
            .into_iter()
            .filter(|id| self.has_challenge(*id))
            .fold(ChallengeFlags::empty(), |acc, id| acc | id.flag());
        flags.set(ChallengeFlags::HARDCORE_DEAD, self.is_hardcore_dead());
        flags
    }
}
