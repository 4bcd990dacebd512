use super::{RulesetHooks, XpAward};
use crate::host::Player;
use crate::registry::Ruleset;
use cmodes_domain::game::XpSource;

/// Kills give no experience to the character. A pet still learns from them,
/// at half rate while the character is grouped.
pub(super) struct QuestXpOnly;

impl RulesetHooks for QuestXpOnly {
    fn give_xp(&self, ruleset: &Ruleset, player: &mut dyn Player, award: &mut XpAward) {
        if award.victim.is_none() {
            award.scale(ruleset.xp_multiplier);
            return;
        }

        if award.source == XpSource::Kill && player.has_pet() {
            let pet_xp = if player.is_grouped() { award.amount / 2 } else { award.amount };
            player.give_pet_xp(pet_xp);
        }
        award.amount = 0;
    }
}
