//! The in-world object that lets a fresh character opt into rulesets.

use crate::error::ChallengeError;
use crate::host::{ChallengeState, Player};
use crate::registry::{RulesetRegistry, RulesetTable};
use cmodes_domain::game::CharacterClass;
use cmodes_domain::rulesets::RulesetId;
use std::sync::Arc;
use tracing::{info, warn};

/// Text shown above the options.
pub const MENU_TEXT_ID: u32 = 12_669;

/// Chat confirmation after a ruleset is picked.
pub const ACTIVATION_MESSAGE: &str = "Challenge enabled.";

/// Highest level at which a regular character can still opt in.
const MAX_OPT_IN_LEVEL: u8 = 1;

/// Death knights start at 55.
const MAX_DEATH_KNIGHT_OPT_IN_LEVEL: u8 = 55;

/// One selectable line of the menu. The host sends `action` back on selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MenuOption {
    pub ruleset: RulesetId,
    pub label: &'static str,
    pub action: u32,
}

#[derive(Debug, Clone)]
pub struct ChallengeMenu {
    registry: Arc<RulesetRegistry>,
}

impl ChallengeMenu {
    #[must_use]
    pub const fn new(registry: Arc<RulesetRegistry>) -> Self {
        Self { registry }
    }

    /// The object is only usable by characters that have not started leveling.
    #[must_use]
    pub fn is_visible(&self, player: &dyn Player) -> bool {
        let level = player.level();
        let fresh = level <= MAX_OPT_IN_LEVEL
            || (player.class() == CharacterClass::DeathKnight
                && level <= MAX_DEATH_KNIGHT_OPT_IN_LEVEL);
        self.registry.module_enabled() && fresh
    }

    /// Rulesets the character may still pick, in id order.
    #[must_use]
    pub fn options(&self, player: &dyn Player) -> Vec<MenuOption> {
        let table = self.registry.snapshot();
        RulesetId::ALL
            .into_iter()
            .filter(|id| is_offerable(&table, *id, player))
            .map(|ruleset| MenuOption {
                ruleset,
                label: label(ruleset),
                action: u32::from(ruleset.index()),
            })
            .collect()
    }

    /// Activates the ruleset behind `action` and confirms in chat.
    ///
    /// # Errors
    /// Returns [`ChallengeError::UnknownRuleset`] when `action` names no ruleset, and
    /// [`ChallengeError::NotOfferable`] when the ruleset would not be listed for this
    /// character (already active, excluded by an active partner, or switched off).
    pub fn select(&self, player: &mut dyn Player, action: u32) -> Result<RulesetId, ChallengeError> {
        let id = RulesetId::try_from(action).map_err(|raw| {
            warn!(target: "challenge_modes", player = %player.guid(), action = raw, "unknown menu action");
            ChallengeError::UnknownRuleset { message: format!("menu action {raw}").into(), context: None }
        })?;

        if !is_offerable(&self.registry.snapshot(), id, player) {
            warn!(target: "challenge_modes", player = %player.guid(), ruleset = %id, "ruleset not offerable");
            return Err(ChallengeError::NotOfferable {
                message: id.name().into(),
                context: Some(format!("character {}", player.guid()).into()),
            });
        }

        player.set_challenge(id, true);
        player.send_system_message(ACTIVATION_MESSAGE);
        info!(target: "challenge_modes", player = %player.guid(), name = player.name(), ruleset = %id, "challenge enabled");

        Ok(id)
    }
}

/// Rulesets that cannot be active at the same time as `id`.
#[must_use]
pub const fn exclusive_partner(id: RulesetId) -> Option<RulesetId> {
    match id {
        RulesetId::Hardcore => Some(RulesetId::SemiHardcore),
        RulesetId::SemiHardcore => Some(RulesetId::Hardcore),
        RulesetId::SelfCrafted => Some(RulesetId::IronMan),
        RulesetId::IronMan => Some(RulesetId::SelfCrafted),
        RulesetId::SlowXpGain => Some(RulesetId::VerySlowXpGain),
        RulesetId::VerySlowXpGain => Some(RulesetId::SlowXpGain),
        RulesetId::ItemQualityLevel | RulesetId::QuestXpOnly => None,
    }
}

fn is_offerable(table: &RulesetTable, id: RulesetId, player: &dyn Player) -> bool {
    table.module_enabled()
        && table.is_globally_enabled(id)
        && !player.has_challenge(id)
        && exclusive_partner(id).is_none_or(|partner| !player.has_challenge(partner))
}

const fn label(id: RulesetId) -> &'static str {
    match id {
        RulesetId::Hardcore => "Enable Hardcore Mode",
        RulesetId::SemiHardcore => "Enable Semi-Hardcore Mode",
        RulesetId::SelfCrafted => "Enable Self-Crafted Mode",
        RulesetId::ItemQualityLevel => "Enable Low Quality Item Mode",
        RulesetId::SlowXpGain => "Enable Slow XP Mode",
        RulesetId::VerySlowXpGain => "Enable Very Slow XP Mode",
        RulesetId::QuestXpOnly => "Enable Quest XP Only Mode",
        RulesetId::IronMan => "Enable Iron Man Mode",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partners_are_symmetric() {
        for id in RulesetId::ALL {
            if let Some(partner) = exclusive_partner(id) {
                assert_eq!(exclusive_partner(partner), Some(id));
            }
        }
    }
}
