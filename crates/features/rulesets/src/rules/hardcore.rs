use super::{Killer, RulesetHooks};
use crate::host::{ChallengeState, Player};
use tracing::info;

/// Kick reason shown once a hardcore character is dead.
pub const DEATH_KICK_REASON: &str = "Hardcore character died";

/// One life. Any death marks the character, releasing the ghost or being
/// resurrected ends the session, and a marked character is killed on login.
pub(super) struct Hardcore;

impl RulesetHooks for Hardcore {
    fn login(&self, player: &mut dyn Player) {
        if player.is_hardcore_dead() {
            info!(target: "challenge_modes", player = %player.guid(), "dead hardcore character logged in");
            player.kill();
            player.kick(DEATH_KICK_REASON);
        }
    }

    fn ghost_released(&self, player: &mut dyn Player) {
        player.mark_hardcore_dead();
        player.kick(DEATH_KICK_REASON);
    }

    fn killed(&self, player: &mut dyn Player, killer: Killer) {
        player.mark_hardcore_dead();
        info!(target: "challenge_modes", player = %player.guid(), ?killer, "hardcore character died");
    }

    fn resurrected(&self, player: &mut dyn Player) {
        player.mark_hardcore_dead();
        player.kill();
        player.kick(DEATH_KICK_REASON);
    }
}
