use super::item_quality::is_plain;
use super::RulesetHooks;
use crate::host::{Player, SpellCatalog};
use cmodes_domain::game::{
    BEAST_TRAINING, ITEM_SUBCLASS_ELIXIR, ITEM_SUBCLASS_FLASK, ITEM_SUBCLASS_FOOD,
    ITEM_SUBCLASS_POTION, Item, ItemTemplate, POISONS, RUNEFORGING,
    SPELL_AURA_PERIODIC_TRIGGER_SPELL, SPELL_EFFECT_TRADE_SKILL,
};
use tracing::debug;

/// No talents, professions, enchants, consumable buffs, or groups; plain gear only.
pub(super) struct IronMan;

impl RulesetHooks for IronMan {
    fn level_changed(&self, player: &mut dyn Player) {
        player.set_free_talent_points(0);
    }

    fn resurrected(&self, player: &mut dyn Player) {
        player.kill();
    }

    fn talents_reset(&self, player: &mut dyn Player) {
        player.set_free_talent_points(0);
    }

    fn can_equip(&self, _player: &dyn Player, item: &Item) -> bool {
        is_plain(item)
    }

    fn can_apply_enchantment(&self, _player: &dyn Player, _item: &Item) -> bool {
        false
    }

    fn learned_spell(&self, player: &mut dyn Player, spells: &dyn SpellCatalog, spell_id: u32) {
        if matches!(spell_id, RUNEFORGING | POISONS | BEAST_TRAINING) {
            return;
        }
        let Some(info) = spells.spell_info(spell_id) else {
            return;
        };
        if info.has_effect(SPELL_EFFECT_TRADE_SKILL) {
            player.remove_spell(spell_id);
            debug!(target: "challenge_modes", player = %player.guid(), spell_id, "profession unlearned");
        }
    }

    fn can_use_item(&self, _player: &dyn Player, spells: &dyn SpellCatalog, item: &ItemTemplate) -> bool {
        if !item.is_consumable() {
            return true;
        }
        match item.subclass {
            ITEM_SUBCLASS_POTION | ITEM_SUBCLASS_ELIXIR | ITEM_SUBCLASS_FLASK => false,
            ITEM_SUBCLASS_FOOD => !item
                .spells
                .iter()
                .filter_map(|id| spells.spell_info(*id))
                .any(|info| info.applies_aura(SPELL_AURA_PERIODIC_TRIGGER_SPELL)),
            _ => true,
        }
    }

    fn can_group(&self, _player: &dyn Player) -> bool {
        false
    }
}
