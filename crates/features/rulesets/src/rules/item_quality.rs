use super::RulesetHooks;
use crate::host::Player;
use cmodes_domain::game::{Item, ItemQuality};

pub(super) struct ItemQualityLevel;

impl RulesetHooks for ItemQualityLevel {
    fn can_equip(&self, _player: &dyn Player, item: &Item) -> bool {
        is_plain(item)
    }
}

/// Poor or normal quality.
pub(super) fn is_plain(item: &Item) -> bool {
    item.template.quality <= ItemQuality::Normal
}
