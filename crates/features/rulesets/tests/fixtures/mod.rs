#![allow(dead_code)]

use cmodes_domain::config::ChallengeConfig;
use cmodes_domain::game::*;
use cmodes_domain::rulesets::RulesetId;
use cmodes_rulesets::host::{ChallengeState, Player, RewardGrantor, SpellCatalog};
use cmodes_rulesets::{ChallengeModes, init};
use std::collections::HashMap;

pub const PLAYER_GUID: CharacterGuid = CharacterGuid(42);

/// In-memory character that records everything done to it.
#[derive(Debug, Clone)]
pub struct FakePlayer {
    pub guid: CharacterGuid,
    pub level: u8,
    pub class: CharacterClass,
    pub settings: HashMap<(String, u8), bool>,
    pub has_pet: bool,
    pub pet_xp: Vec<u32>,
    pub grouped: bool,
    pub free_talent_points: u32,
    pub equipped: Vec<Item>,
    pub destroyed_slots: Vec<u8>,
    pub money: u32,
    pub removed_spells: Vec<u32>,
    pub deaths: u32,
    pub kicked: Option<String>,
    pub messages: Vec<String>,
}

impl FakePlayer {
    pub fn new(level: u8) -> Self {
        Self {
            guid: PLAYER_GUID,
            level,
            class: CharacterClass::Warrior,
            settings: HashMap::new(),
            has_pet: false,
            pet_xp: Vec::new(),
            grouped: false,
            free_talent_points: 5,
            equipped: Vec::new(),
            destroyed_slots: Vec::new(),
            money: 10_000,
            removed_spells: Vec::new(),
            deaths: 0,
            kicked: None,
            messages: Vec::new(),
        }
    }

    pub fn with(mut self, id: RulesetId) -> Self {
        self.set_challenge(id, true);
        self
    }
}

impl Player for FakePlayer {
    fn guid(&self) -> CharacterGuid {
        self.guid
    }

    fn name(&self) -> &str {
        "Tester"
    }

    fn level(&self) -> u8 {
        self.level
    }

    fn class(&self) -> CharacterClass {
        self.class
    }

    fn setting(&self, namespace: &str, index: u8) -> bool {
        self.settings.get(&(namespace.to_owned(), index)).copied().unwrap_or(false)
    }

    fn update_setting(&mut self, namespace: &str, index: u8, value: bool) {
        self.settings.insert((namespace.to_owned(), index), value);
    }

    fn has_pet(&self) -> bool {
        self.has_pet
    }

    fn give_pet_xp(&mut self, amount: u32) {
        self.pet_xp.push(amount);
    }

    fn is_grouped(&self) -> bool {
        self.grouped
    }

    fn set_free_talent_points(&mut self, points: u32) {
        self.free_talent_points = points;
    }

    fn equipped_items(&self) -> Vec<Item> {
        self.equipped.clone()
    }

    fn destroy_equipped_item(&mut self, slot: u8) {
        self.equipped.retain(|item| item.slot != Some(slot));
        self.destroyed_slots.push(slot);
    }

    fn set_money(&mut self, copper: u32) {
        self.money = copper;
    }

    fn remove_spell(&mut self, spell_id: u32) {
        self.removed_spells.push(spell_id);
    }

    fn kill(&mut self) {
        self.deaths += 1;
    }

    fn kick(&mut self, reason: &str) {
        self.kicked = Some(reason.to_owned());
    }

    fn send_system_message(&mut self, text: &str) {
        self.messages.push(text.to_owned());
    }
}

/// Game data and grant log. Only titles and achievements registered here exist.
#[derive(Debug, Default)]
pub struct FakeGrantor {
    pub titles: HashMap<u32, TitleEntry>,
    pub achievements: HashMap<u32, AchievementEntry>,
    pub log: Vec<String>,
    pub mail: Vec<(CharacterGuid, Vec<ItemStack>)>,
}

impl FakeGrantor {
    pub fn with_title(mut self, id: u32) -> Self {
        self.titles.insert(id, TitleEntry { id, name: format!("Title {id}") });
        self
    }

    pub fn with_achievement(mut self, id: u32) -> Self {
        self.achievements.insert(id, AchievementEntry { id, name: format!("Achievement {id}") });
        self
    }
}

impl RewardGrantor for FakeGrantor {
    fn find_title(&self, id: u32) -> Option<TitleEntry> {
        self.titles.get(&id).cloned()
    }

    fn find_achievement(&self, id: u32) -> Option<AchievementEntry> {
        self.achievements.get(&id).cloned()
    }

    fn grant_title(&mut self, _player: &mut dyn Player, title: &TitleEntry) {
        self.log.push(format!("title {}", title.id));
    }

    fn grant_talent_points(&mut self, _player: &mut dyn Player, points: u32) {
        self.log.push(format!("talent {points}"));
    }

    fn complete_achievement(&mut self, _player: &mut dyn Player, achievement: &AchievementEntry) {
        self.log.push(format!("achievement {}", achievement.id));
    }

    fn mail_items(&mut self, recipient: CharacterGuid, items: &[ItemStack]) {
        self.log.push(format!("item {}x{}", items[0].entry, items[0].count));
        self.mail.push((recipient, items.to_vec()));
    }
}

#[derive(Debug, Default)]
pub struct FakeSpells(pub HashMap<u32, SpellInfo>);

impl FakeSpells {
    pub fn with(mut self, id: u32, effect: u32, apply_aura: u32) -> Self {
        let mut effects = [SpellEffectInfo::default(); MAX_SPELL_EFFECTS];
        effects[1] = SpellEffectInfo { effect, apply_aura };
        self.0.insert(id, SpellInfo { id, effects });
        self
    }
}

impl SpellCatalog for FakeSpells {
    fn spell_info(&self, id: u32) -> Option<SpellInfo> {
        self.0.get(&id).cloned()
    }
}

pub fn template(entry: u32, quality: ItemQuality) -> ItemTemplate {
    ItemTemplate {
        entry,
        name: format!("Item {entry}"),
        class: 4,
        subclass: 0,
        quality,
        has_signature: false,
        spells: Vec::new(),
    }
}

pub fn item(entry: u32, quality: ItemQuality, slot: u8) -> Item {
    Item { template: template(entry, quality), creator: None, slot: Some(slot) }
}

pub fn consumable(subclass: u32, spells: Vec<u32>) -> ItemTemplate {
    ItemTemplate {
        class: ITEM_CLASS_CONSUMABLE,
        subclass,
        spells,
        ..template(1_000 + subclass, ItemQuality::Normal)
    }
}

/// Module on, every ruleset with its defaults.
pub fn enabled_config() -> ChallengeConfig {
    let mut config = ChallengeConfig::default();
    config.module.enable = true;
    config
}

pub fn modes(config: &ChallengeConfig) -> ChallengeModes {
    init(config).unwrap()
}
