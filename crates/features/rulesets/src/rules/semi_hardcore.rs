use super::{Killer, RulesetHooks};
use crate::host::Player;
use tracing::info;

/// Dying to a creature costs every equipped item and all carried money.
pub(super) struct SemiHardcore;

impl RulesetHooks for SemiHardcore {
    fn killed(&self, player: &mut dyn Player, killer: Killer) {
        let Killer::Creature(_) = killer else {
            return;
        };

        let mut lost = 0_usize;
        for item in player.equipped_items() {
            let Some(slot) = item.slot else {
                continue;
            };
            player.send_system_message(&loss_message(item.template.entry, &item.template.name));
            player.destroy_equipped_item(slot);
            lost += 1;
        }
        player.set_money(0);

        info!(target: "challenge_modes", player = %player.guid(), lost, "semi-hardcore death penalty applied");
    }
}

/// Chat line with a clickable item link.
fn loss_message(entry: u32, name: &str) -> String {
    format!("|cffDA70D6You have lost your |cffffffff|Hitem:{entry}:0:0:0:0:0:0:0:0|h[{name}]|h|r")
}
