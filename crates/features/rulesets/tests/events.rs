mod fixtures;

use cmodes_domain::game::*;
use cmodes_domain::rulesets::{ChallengeFlags, RulesetId};
use cmodes_rulesets::host::ChallengeState;
use cmodes_rulesets::{DEATH_KICK_REASON, Killer};
use fixtures::*;

#[test]
fn hardcore_death_marks_without_kicking() {
    let modes = modes(&enabled_config());
    let mut player = FakePlayer::new(20).with(RulesetId::Hardcore);

    modes.dispatcher.killed(&mut player, Killer::Creature(UnitGuid(3)));
    assert!(player.is_hardcore_dead());
    assert!(player.kicked.is_none());
}

#[test]
fn hardcore_pvp_death_marks_too() {
    let modes = modes(&enabled_config());
    let mut player = FakePlayer::new(20).with(RulesetId::Hardcore);

    modes.dispatcher.killed(&mut player, Killer::Player(UnitGuid(9)));
    assert!(player.is_hardcore_dead());
}

#[test]
fn hardcore_ghost_release_kicks() {
    let modes = modes(&enabled_config());
    let mut player = FakePlayer::new(20).with(RulesetId::Hardcore);

    modes.dispatcher.ghost_released(&mut player);
    assert!(player.is_hardcore_dead());
    assert_eq!(player.kicked.as_deref(), Some(DEATH_KICK_REASON));
}

#[test]
fn hardcore_dead_character_dies_again_on_login() {
    let modes = modes(&enabled_config());
    let mut player = FakePlayer::new(20).with(RulesetId::Hardcore);

    modes.dispatcher.login(&mut player);
    assert_eq!(player.deaths, 0);

    player.mark_hardcore_dead();
    modes.dispatcher.login(&mut player);
    assert_eq!(player.deaths, 1);
    assert_eq!(player.kicked.as_deref(), Some(DEATH_KICK_REASON));
    assert!(player.challenge_flags().contains(ChallengeFlags::HARDCORE | ChallengeFlags::HARDCORE_DEAD));
}

#[test]
fn hardcore_resurrection_is_undone() {
    let modes = modes(&enabled_config());
    let mut player = FakePlayer::new(20).with(RulesetId::Hardcore);

    modes.dispatcher.resurrected(&mut player);
    assert!(player.is_hardcore_dead());
    assert_eq!(player.deaths, 1);
    assert_eq!(player.kicked.as_deref(), Some(DEATH_KICK_REASON));
}

#[test]
fn semi_hardcore_creature_death_strips_gear_and_money() {
    let modes = modes(&enabled_config());
    let mut player = FakePlayer::new(20).with(RulesetId::SemiHardcore);
    player.equipped = vec![item(10, ItemQuality::Rare, 4), item(11, ItemQuality::Poor, 15)];

    modes.dispatcher.killed(&mut player, Killer::Creature(UnitGuid(3)));

    assert!(player.equipped.is_empty());
    assert_eq!(player.destroyed_slots, [4, 15]);
    assert_eq!(player.money, 0);
    assert_eq!(player.messages.len(), 2);
    assert!(player.messages[0].contains("|Hitem:10:0:0:0:0:0:0:0:0|h[Item 10]|h|r"));
    assert!(!player.is_hardcore_dead());
}

#[test]
fn semi_hardcore_pvp_death_costs_nothing() {
    let modes = modes(&enabled_config());
    let mut player = FakePlayer::new(20).with(RulesetId::SemiHardcore);
    player.equipped = vec![item(10, ItemQuality::Rare, 4)];

    modes.dispatcher.killed(&mut player, Killer::Player(UnitGuid(9)));

    assert_eq!(player.equipped.len(), 1);
    assert_eq!(player.money, 10_000);
}

#[test]
fn self_crafted_requires_own_signature() {
    let modes = modes(&enabled_config());
    let player = FakePlayer::new(20).with(RulesetId::SelfCrafted);

    let mut crafted = item(20, ItemQuality::Epic, 0);
    crafted.template.has_signature = true;
    crafted.creator = Some(PLAYER_GUID);
    assert!(modes.dispatcher.can_equip(&player, &crafted));

    crafted.creator = Some(CharacterGuid(7));
    assert!(!modes.dispatcher.can_equip(&player, &crafted));

    let mut unsigned = item(21, ItemQuality::Poor, 0);
    unsigned.creator = Some(PLAYER_GUID);
    assert!(!modes.dispatcher.can_equip(&player, &unsigned));
}

#[test]
fn item_quality_caps_at_normal() {
    let modes = modes(&enabled_config());
    let player = FakePlayer::new(20).with(RulesetId::ItemQualityLevel);

    assert!(modes.dispatcher.can_equip(&player, &item(1, ItemQuality::Poor, 0)));
    assert!(modes.dispatcher.can_equip(&player, &item(1, ItemQuality::Normal, 0)));
    assert!(!modes.dispatcher.can_equip(&player, &item(1, ItemQuality::Uncommon, 0)));
}

#[test]
fn nothing_is_vetoed_without_active_rulesets() {
    let modes = modes(&enabled_config());
    let player = FakePlayer::new(20);
    let epic = item(1, ItemQuality::Epic, 0);

    assert!(modes.dispatcher.can_equip(&player, &epic));
    assert!(modes.dispatcher.can_apply_enchantment(&player, &epic));
    assert!(modes.dispatcher.can_use_item(&player, &FakeSpells::default(), &consumable(ITEM_SUBCLASS_POTION, vec![])));
    assert!(modes.dispatcher.can_group_invite(&player));
    assert!(modes.dispatcher.can_group_accept(&player));
}

#[test]
fn iron_man_vetoes() {
    let modes = modes(&enabled_config());
    let player = FakePlayer::new(20).with(RulesetId::IronMan);
    let normal = item(1, ItemQuality::Normal, 0);

    assert!(modes.dispatcher.can_equip(&player, &normal));
    assert!(!modes.dispatcher.can_equip(&player, &item(2, ItemQuality::Uncommon, 0)));
    assert!(!modes.dispatcher.can_apply_enchantment(&player, &normal));
    assert!(!modes.dispatcher.can_group_invite(&player));
    assert!(!modes.dispatcher.can_group_accept(&player));
}

#[test]
fn iron_man_consumables() {
    let modes = modes(&enabled_config());
    let player = FakePlayer::new(20).with(RulesetId::IronMan);
    let spells = FakeSpells::default()
        .with(100, 6, SPELL_AURA_PERIODIC_TRIGGER_SPELL)
        .with(101, 6, 4);

    for subclass in [ITEM_SUBCLASS_POTION, ITEM_SUBCLASS_ELIXIR, ITEM_SUBCLASS_FLASK] {
        assert!(!modes.dispatcher.can_use_item(&player, &spells, &consumable(subclass, vec![])));
    }
    assert!(!modes.dispatcher.can_use_item(&player, &spells, &consumable(ITEM_SUBCLASS_FOOD, vec![101, 100])));
    assert!(modes.dispatcher.can_use_item(&player, &spells, &consumable(ITEM_SUBCLASS_FOOD, vec![101])));
    assert!(modes.dispatcher.can_use_item(&player, &spells, &consumable(ITEM_SUBCLASS_FOOD, vec![404])));
    assert!(modes.dispatcher.can_use_item(&player, &spells, &consumable(4, vec![100])));
    assert!(modes.dispatcher.can_use_item(&player, &spells, &template(5, ItemQuality::Epic)));
}

#[test]
fn iron_man_unlearns_professions() {
    let modes = modes(&enabled_config());
    let mut player = FakePlayer::new(20).with(RulesetId::IronMan);
    let spells = FakeSpells::default()
        .with(2_259, SPELL_EFFECT_TRADE_SKILL, 0)
        .with(POISONS, SPELL_EFFECT_TRADE_SKILL, 0)
        .with(133, 2, 0);

    modes.dispatcher.learned_spell(&mut player, &spells, 2_259);
    modes.dispatcher.learned_spell(&mut player, &spells, POISONS);
    modes.dispatcher.learned_spell(&mut player, &spells, RUNEFORGING);
    modes.dispatcher.learned_spell(&mut player, &spells, 133);
    modes.dispatcher.learned_spell(&mut player, &spells, 404);

    assert_eq!(player.removed_spells, [2_259]);
}

#[test]
fn iron_man_talents_and_resurrection() {
    let modes = modes(&enabled_config());
    let mut player = FakePlayer::new(20).with(RulesetId::IronMan);

    modes.dispatcher.talents_reset(&mut player);
    assert_eq!(player.free_talent_points, 0);

    modes.dispatcher.resurrected(&mut player);
    assert_eq!(player.deaths, 1);
    assert!(player.kicked.is_none());
    assert!(!player.is_hardcore_dead());
}

#[test]
fn reload_is_seen_by_the_dispatcher() {
    let modes = modes(&enabled_config());
    let player = FakePlayer::new(20).with(RulesetId::IronMan);
    assert!(!modes.dispatcher.can_group_invite(&player));

    let mut config = enabled_config();
    config.ruleset_mut(RulesetId::IronMan).enable = false;
    modes.reload(&config).unwrap();
    assert!(modes.dispatcher.can_group_invite(&player));
}
