use crate::error::ChallengeError;
use crate::host::{ChallengeState, Player, RewardGrantor};
use crate::registry::Ruleset;
use cmodes_domain::game::ItemStack;
use cmodes_domain::rulesets::RewardKind;
use tracing::{debug, info};

/// Hands out the rewards `ruleset` configures for the character's current level,
/// then turns the ruleset off if its disable level has been reached.
///
/// Order: title, talent points, achievement, mailed item, disable check.
///
/// # Errors
/// Returns [`ChallengeError::InvalidReward`] when a configured title or achievement
/// does not exist. Nothing after the failing step is granted and the disable check
/// is skipped for this event.
pub(crate) fn grant_level_rewards(
    ruleset: &Ruleset,
    player: &mut dyn Player,
    grantor: &mut dyn RewardGrantor,
) -> Result<(), ChallengeError> {
    let level = player.level();

    if let Some(id) = ruleset.reward_at(RewardKind::Title, level) {
        let title = grantor.find_title(id).ok_or_else(|| invalid(ruleset, RewardKind::Title, id))?;
        grantor.grant_title(player, &title);
        debug!(target: "challenge_modes", ruleset = %ruleset.id, level, title = %title.name, "title granted");
    }

    if let Some(points) = ruleset.reward_at(RewardKind::Talent, level) {
        grantor.grant_talent_points(player, points);
        debug!(target: "challenge_modes", ruleset = %ruleset.id, level, points, "talent points granted");
    }

    if let Some(id) = ruleset.reward_at(RewardKind::Achievement, level) {
        let achievement = grantor
            .find_achievement(id)
            .ok_or_else(|| invalid(ruleset, RewardKind::Achievement, id))?;
        grantor.complete_achievement(player, &achievement);
        debug!(target: "challenge_modes", ruleset = %ruleset.id, level, achievement = %achievement.name, "achievement completed");
    }

    if let Some(entry) = ruleset.reward_at(RewardKind::Item, level) {
        let stack = ItemStack { entry, count: ruleset.item_reward_amount };
        grantor.mail_items(player.guid(), &[stack]);
        debug!(target: "challenge_modes", ruleset = %ruleset.id, level, entry, count = stack.count, "item reward mailed");
    }

    if ruleset.disables_at(level) {
        player.set_challenge(ruleset.id, false);
        info!(
            target: "challenge_modes",
            player = %player.guid(),
            ruleset = %ruleset.id,
            level,
            "challenge completed, ruleset disabled"
        );
    }

    Ok(())
}

fn invalid(ruleset: &Ruleset, kind: RewardKind, id: u32) -> ChallengeError {
    ChallengeError::InvalidReward {
        message: format!("no {kind:?} with id {id}").into(),
        context: Some(format!("{}.{}", ruleset.id, kind.config_field()).into()),
    }
}
