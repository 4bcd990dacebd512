use super::RulesetHooks;
use crate::host::Player;
use cmodes_domain::game::Item;

/// Only items the character crafted personally may be equipped.
pub(super) struct SelfCrafted;

impl RulesetHooks for SelfCrafted {
    fn can_equip(&self, player: &dyn Player, item: &Item) -> bool {
        item.template.has_signature && item.creator == Some(player.guid())
    }
}
