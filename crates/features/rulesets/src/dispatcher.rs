use crate::host::{Player, RewardGrantor, SpellCatalog};
use crate::registry::{Ruleset, RulesetRegistry, RulesetTable};
use crate::rewards::grant_level_rewards;
use crate::rules::{Killer, RulesetHooks, XpAward, hooks};
use cmodes_domain::game::{Item, ItemTemplate};
use cmodes_domain::rulesets::RulesetId;
use std::sync::Arc;
use tracing::{debug, error, trace};

/// Entry point for host gameplay events.
///
/// Each event walks the rulesets in id order and runs the ones active for the
/// character. Vetoes short-circuit on the first ruleset that refuses.
#[derive(Debug, Clone)]
pub struct RuleDispatcher {
    registry: Arc<RulesetRegistry>,
}

impl RuleDispatcher {
    #[must_use]
    pub const fn new(registry: Arc<RulesetRegistry>) -> Self {
        Self { registry }
    }

    #[must_use]
    pub const fn registry(&self) -> &Arc<RulesetRegistry> {
        &self.registry
    }

    /// Rewrites `award.amount` before the host applies it. Multipliers of several
    /// active rulesets compound.
    pub fn give_xp(&self, player: &mut dyn Player, award: &mut XpAward) {
        let table = self.registry.snapshot();
        let original = award.amount;
        for_each_active(&table, player, |ruleset, hooks, player| {
            hooks.give_xp(ruleset, player, award);
        });
        if award.amount != original {
            trace!(target: "challenge_modes", player = %player.guid(), original, amount = award.amount, "experience adjusted");
        }
    }

    /// Level rewards and auto-disable, after the character's level has changed.
    pub fn level_changed(&self, player: &mut dyn Player, old_level: u8, grantor: &mut dyn RewardGrantor) {
        let table = self.registry.snapshot();
        debug!(target: "challenge_modes", player = %player.guid(), old_level, level = player.level(), "level changed");
        for_each_active(&table, player, |ruleset, hooks, player| {
            hooks.level_changed(player);
            if let Err(err) = grant_level_rewards(ruleset, player, grantor) {
                error!(target: "challenge_modes", player = %player.guid(), ruleset = %ruleset.id, "{err}");
            }
        });
    }

    pub fn login(&self, player: &mut dyn Player) {
        let table = self.registry.snapshot();
        for_each_active(&table, player, |_, hooks, player| hooks.login(player));
    }

    /// The character released its spirit after dying.
    pub fn ghost_released(&self, player: &mut dyn Player) {
        let table = self.registry.snapshot();
        for_each_active(&table, player, |_, hooks, player| hooks.ghost_released(player));
    }

    pub fn killed(&self, player: &mut dyn Player, killer: Killer) {
        let table = self.registry.snapshot();
        for_each_active(&table, player, |_, hooks, player| hooks.killed(player, killer));
    }

    pub fn resurrected(&self, player: &mut dyn Player) {
        let table = self.registry.snapshot();
        for_each_active(&table, player, |_, hooks, player| hooks.resurrected(player));
    }

    pub fn talents_reset(&self, player: &mut dyn Player) {
        let table = self.registry.snapshot();
        for_each_active(&table, player, |_, hooks, player| hooks.talents_reset(player));
    }

    pub fn learned_spell(&self, player: &mut dyn Player, spells: &dyn SpellCatalog, spell_id: u32) {
        let table = self.registry.snapshot();
        for_each_active(&table, player, |_, hooks, player| {
            hooks.learned_spell(player, spells, spell_id);
        });
    }

    #[must_use]
    pub fn can_equip(&self, player: &dyn Player, item: &Item) -> bool {
        self.allowed(player, "equip", |hooks| hooks.can_equip(player, item))
    }

    #[must_use]
    pub fn can_apply_enchantment(&self, player: &dyn Player, item: &Item) -> bool {
        self.allowed(player, "enchant", |hooks| hooks.can_apply_enchantment(player, item))
    }

    #[must_use]
    pub fn can_use_item(&self, player: &dyn Player, spells: &dyn SpellCatalog, item: &ItemTemplate) -> bool {
        self.allowed(player, "use item", |hooks| hooks.can_use_item(player, spells, item))
    }

    #[must_use]
    pub fn can_group_invite(&self, player: &dyn Player) -> bool {
        self.allowed(player, "group invite", |hooks| hooks.can_group(player))
    }

    #[must_use]
    pub fn can_group_accept(&self, player: &dyn Player) -> bool {
        self.allowed(player, "group accept", |hooks| hooks.can_group(player))
    }

    fn allowed(
        &self,
        player: &dyn Player,
        action: &'static str,
        check: impl Fn(&dyn RulesetHooks) -> bool,
    ) -> bool {
        let table = self.registry.snapshot();
        let veto = RulesetId::ALL
            .into_iter()
            .filter(|id| table.is_active(*id, player))
            .find(|id| !check(hooks(*id)));

        match veto {
            Some(id) => {
                debug!(target: "challenge_modes", player = %player.guid(), ruleset = %id, action, "action vetoed");
                false
            },
            None => true,
        }
    }
}

/// Runs `f` for each active ruleset. Activity is re-checked right before each
/// ruleset runs, so a ruleset switched off by an earlier one in the same event is skipped.
fn for_each_active(
    table: &RulesetTable,
    player: &mut dyn Player,
    mut f: impl FnMut(&Ruleset, &dyn RulesetHooks, &mut dyn Player),
) {
    for ruleset in table.rulesets() {
        if table.is_active(ruleset.id, player) {
            f(ruleset, hooks(ruleset.id), player);
        }
    }
}
