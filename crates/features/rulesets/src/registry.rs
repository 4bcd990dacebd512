use crate::error::ChallengeError;
use crate::host::{ChallengeState, Player};
use crate::parser::{LevelRewardMap, ParseMode, parse_with};
use cmodes_domain::config::{ChallengeConfig, RulesetConfig};
use cmodes_domain::rulesets::{RewardKind, RulesetId};
use parking_lot::RwLock;
use std::path::Path;
use std::sync::Arc;
use tracing::{debug, error, info, warn};

/// Effective settings of one ruleset.
#[derive(Debug, Clone, PartialEq)]
pub struct Ruleset {
    pub id: RulesetId,
    /// `<Name>.Enable`.
    pub enabled: bool,
    pub xp_multiplier: f32,
    /// 0 never auto-disables.
    pub disable_level: u32,
    pub item_reward_amount: u32,
    rewards: [LevelRewardMap; 4],
}

impl Ruleset {
    /// A ruleset with built-in defaults and no rewards.
    #[must_use]
    pub fn new(id: RulesetId) -> Self {
        Self {
            id,
            enabled: true,
            xp_multiplier: id.default_xp_multiplier(),
            disable_level: 0,
            item_reward_amount: 1,
            rewards: Default::default(),
        }
    }

    fn from_config(
        id: RulesetId,
        config: &RulesetConfig,
        mode: ParseMode,
    ) -> Result<Self, ChallengeError> {
        let mut ruleset = Self {
            enabled: config.enable,
            xp_multiplier: config.xp_multiplier.unwrap_or_else(|| id.default_xp_multiplier()),
            disable_level: config.disable_level,
            item_reward_amount: config.item_reward_amount,
            ..Self::new(id)
        };

        if ruleset.xp_multiplier.is_nan() || ruleset.xp_multiplier < 0.0 {
            warn!(
                target: "challenge_modes",
                ruleset = %id,
                multiplier = ruleset.xp_multiplier,
                "XPMultiplier must not be negative, using 0"
            );
            ruleset.xp_multiplier = 0.0;
        }

        for kind in RewardKind::ALL {
            let text = match kind {
                RewardKind::Title => &config.title_rewards,
                RewardKind::Talent => &config.talent_rewards,
                RewardKind::Item => &config.item_rewards,
                RewardKind::Achievement => &config.achievement_rewards,
            };
            ruleset.rewards[kind as usize] = parse_with(text, mode).map_err(|e| match e {
                ChallengeError::RewardParse { message, .. } => ChallengeError::RewardParse {
                    message,
                    context: Some(format!("{id}.{}", kind.config_field()).into()),
                },
                other => other,
            })?;
        }

        Ok(ruleset)
    }

    /// Level-to-value table of one reward kind.
    #[must_use]
    pub fn rewards(&self, kind: RewardKind) -> &LevelRewardMap {
        &self.rewards[kind as usize]
    }

    #[must_use]
    pub fn reward_at(&self, kind: RewardKind, level: u8) -> Option<u32> {
        self.rewards(kind).get(&level).copied()
    }

    /// Whether reaching `level` turns this ruleset off for the character.
    #[must_use]
    pub fn disables_at(&self, level: u8) -> bool {
        self.disable_level != 0 && self.disable_level <= u32::from(level)
    }
}

/// An immutable view of every ruleset, swapped as a whole on reload.
#[derive(Debug, Clone, PartialEq)]
pub struct RulesetTable {
    module_enabled: bool,
    rulesets: [Ruleset; 8],
}

impl Default for RulesetTable {
    fn default() -> Self {
        Self { module_enabled: false, rulesets: RulesetId::ALL.map(Ruleset::new) }
    }
}

impl RulesetTable {
    /// `ChallengeModes.Enable`.
    #[must_use]
    pub const fn module_enabled(&self) -> bool {
        self.module_enabled
    }

    #[must_use]
    pub const fn ruleset(&self, id: RulesetId) -> &Ruleset {
        &self.rulesets[id as usize]
    }

    /// Ruleset by raw settings index. Unknown ids have no ruleset and therefore no effect.
    #[must_use]
    pub fn lookup(&self, raw: u32) -> Option<&Ruleset> {
        RulesetId::try_from(raw).ok().map(|id| self.ruleset(id))
    }

    /// Rulesets in dispatch order.
    pub fn rulesets(&self) -> impl Iterator<Item = &Ruleset> {
        self.rulesets.iter()
    }

    /// `<Name>.Enable` of one ruleset, regardless of the master switch.
    #[must_use]
    pub const fn is_globally_enabled(&self, id: RulesetId) -> bool {
        self.ruleset(id).enabled
    }

    /// The module is on, the ruleset is on, and the character opted in.
    #[must_use]
    pub fn is_active(&self, id: RulesetId, player: &dyn Player) -> bool {
        self.module_enabled && self.is_globally_enabled(id) && player.has_challenge(id)
    }
}

/// Shared, reloadable ruleset settings.
///
/// Readers take a cheap [`Arc`] snapshot. A reload builds a complete new table and
/// swaps it in, so a reader never sees half of a reload.
#[derive(Debug, Default)]
pub struct RulesetRegistry {
    table: RwLock<Arc<RulesetTable>>,
}

impl RulesetRegistry {
    /// A registry with the module switched off.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a registry and loads `config` into it.
    ///
    /// # Errors
    /// See [`RulesetRegistry::load_from_config`].
    pub fn from_config(config: &ChallengeConfig) -> Result<Self, ChallengeError> {
        let registry = Self::new();
        registry.load_from_config(config)?;
        Ok(registry)
    }

    /// Replaces the settings from `config`.
    ///
    /// When `ChallengeModes.Enable` is off only the master switch changes; the
    /// per-ruleset settings keep their previous values.
    ///
    /// # Errors
    /// Returns [`ChallengeError::RewardParse`] when `StrictRewardParsing` is on and a
    /// reward list is malformed. The previous settings stay in place.
    pub fn load_from_config(&self, config: &ChallengeConfig) -> Result<(), ChallengeError> {
        let mut next = RulesetTable::clone(&self.snapshot());
        next.module_enabled = config.module.enable;

        if next.module_enabled {
            let mode = if config.module.strict_reward_parsing {
                ParseMode::Strict
            } else {
                ParseMode::Lenient
            };
            for id in RulesetId::ALL {
                next.rulesets[id as usize] = Ruleset::from_config(id, config.ruleset(id), mode)
                    .inspect_err(|e| {
                        error!(target: "challenge_modes", "{e}, keeping the previous settings");
                    })?;
                debug!(target: "challenge_modes", ruleset = %id, "ruleset settings loaded");
            }
        }

        let enabled = next
            .rulesets()
            .filter(|r| next.module_enabled && r.enabled)
            .map(|r| r.id.name())
            .collect::<Vec<_>>();
        *self.table.write() = Arc::new(next);

        info!(target: "challenge_modes", module_enabled = config.module.enable, ?enabled, "challenge modes configured");
        Ok(())
    }

    /// Reads the configuration file (plus environment overrides) and loads it.
    ///
    /// # Errors
    /// Returns [`ChallengeError::Config`] when the source cannot be read, or any
    /// error of [`RulesetRegistry::load_from_config`].
    pub fn load_from_path(&self, path: impl AsRef<Path>) -> Result<(), ChallengeError> {
        let config = cmodes_kernel::config::load_config::<ChallengeConfig>(Some(path))?;
        self.load_from_config(&config)
    }

    /// The current settings.
    #[must_use]
    pub fn snapshot(&self) -> Arc<RulesetTable> {
        Arc::clone(&self.table.read())
    }

    #[must_use]
    pub fn module_enabled(&self) -> bool {
        self.table.read().module_enabled
    }

    #[must_use]
    pub fn is_globally_enabled(&self, id: RulesetId) -> bool {
        self.table.read().is_globally_enabled(id)
    }

    #[must_use]
    pub fn xp_multiplier(&self, id: RulesetId) -> f32 {
        self.table.read().ruleset(id).xp_multiplier
    }

    #[must_use]
    pub fn disable_level(&self, id: RulesetId) -> u32 {
        self.table.read().ruleset(id).disable_level
    }

    #[must_use]
    pub fn item_reward_amount(&self, id: RulesetId) -> u32 {
        self.table.read().ruleset(id).item_reward_amount
    }

    #[must_use]
    pub fn reward_map(&self, id: RulesetId, kind: RewardKind) -> LevelRewardMap {
        self.table.read().ruleset(id).rewards(kind).clone()
    }
}
