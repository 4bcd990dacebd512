//! # Challenge Rulesets
//!
//! Optional per-character restrictions for a role-playing game server. A character
//! opts into any combination of eight rulesets at creation time; each one changes
//! how the host's gameplay events play out for that character.
//!
//! ## Architecture
//!
//! 1.  **Settings ([`registry`]):** the effective options of every ruleset, loaded from
//!     `ChallengeModes.*` and `<Ruleset>.*` configuration keys. Reloads swap a whole
//!     [`RulesetTable`] at once.
//! 2.  **Reward lists ([`parser`]):** `"<level> <value>, ..."` strings turned into
//!     level-indexed maps.
//! 3.  **Dispatch ([`dispatcher`]):** the host calls one method per gameplay event; each
//!     ruleset active for the character gets to adjust or veto it.
//! 4.  **Opt-in ([`menu`]):** lists the rulesets a fresh character can still pick.
//!
//! A ruleset is active for a character when `ChallengeModes.Enable`, `<Ruleset>.Enable`
//! and the character's own setting are all on. The game itself is reached only
//! through the traits in [`host`].
//!
//! ## Rulesets
//!
//! * **Hardcore**: one life; a dead character is killed again on every login.
//! * **SemiHardcore**: dying to a creature destroys the equipped gear and all money.
//! * **SelfCrafted**: only gear the character crafted can be equipped.
//! * **ItemQualityLevel**: only poor and normal quality gear.
//! * **SlowXpGain** / **VerySlowXpGain**: experience scaled down.
//! * **QuestXpOnly**: kills feed the pet but not the character.
//! * **IronMan**: plain gear, no talents, professions, enchants, buffs, or groups.

pub mod dispatcher;
mod error;
pub mod host;
pub mod menu;
pub mod parser;
pub mod registry;
mod rewards;
mod rules;

pub use crate::dispatcher::RuleDispatcher;
pub use crate::error::ChallengeError;
pub use crate::menu::ChallengeMenu;
pub use crate::registry::{Ruleset, RulesetRegistry, RulesetTable};
pub use crate::rules::hardcore::DEATH_KICK_REASON;
pub use crate::rules::{Killer, XpAward};

use cmodes_domain::config::ChallengeConfig;
use std::sync::Arc;

/// The loaded rulesets together with the event and menu entry points sharing them.
#[derive(Debug, Clone)]
pub struct ChallengeModes {
    pub registry: Arc<RulesetRegistry>,
    pub dispatcher: RuleDispatcher,
    pub menu: ChallengeMenu,
}

impl ChallengeModes {
    /// Reloads the shared settings. Dispatcher and menu see the new values on their next call.
    ///
    /// # Errors
    /// See [`RulesetRegistry::load_from_config`].
    pub fn reload(&self, config: &ChallengeConfig) -> Result<(), ChallengeError> {
        self.registry.load_from_config(config)
    }
}

/// Loads `config` and wires the dispatcher and menu to the resulting registry.
///
/// # Errors
/// See [`RulesetRegistry::load_from_config`].
pub fn init(config: &ChallengeConfig) -> Result<ChallengeModes, ChallengeError> {
    let registry = Arc::new(RulesetRegistry::from_config(config)?);
    Ok(ChallengeModes {
        dispatcher: RuleDispatcher::new(Arc::clone(&registry)),
        menu: ChallengeMenu::new(Arc::clone(&registry)),
        registry,
    })
}
