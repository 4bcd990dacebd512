use crate::rulesets::RulesetId;
use serde::Deserialize;
use std::ops::{Deref, DerefMut};
use std::path::PathBuf;
use std::sync::Arc;

/// Top-level challenge modes configuration.
///
/// Every table name matches the `<Name>` prefix of the dotted option keys
/// (`Hardcore.Enable`, `SlowXpGain.XPMultiplier`, ...). The kernel loader folds
/// keys to lowercase, which the aliases match.
#[derive(Default, Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ChallengeConfigInner {
    #[serde(rename = "ChallengeModes", alias = "challengemodes")]
    pub module: ModuleConfig,
    #[serde(rename = "Hardcore", alias = "hardcore")]
    pub hardcore: RulesetConfig,
    #[serde(rename = "SemiHardcore", alias = "semihardcore")]
    pub semi_hardcore: RulesetConfig,
    #[serde(rename = "SelfCrafted", alias = "selfcrafted")]
    pub self_crafted: RulesetConfig,
    #[serde(rename = "ItemQualityLevel", alias = "itemqualitylevel")]
    pub item_quality_level: RulesetConfig,
    #[serde(rename = "SlowXpGain", alias = "slowxpgain")]
    pub slow_xp_gain: RulesetConfig,
    #[serde(rename = "VerySlowXpGain", alias = "veryslowxpgain")]
    pub very_slow_xp_gain: RulesetConfig,
    #[serde(rename = "QuestXpOnly", alias = "questxponly")]
    pub quest_xp_only: RulesetConfig,
    #[serde(rename = "IronMan", alias = "ironman")]
    pub iron_man: RulesetConfig,
    #[serde(rename = "Logging", alias = "logging")]
    pub logging: LoggingConfig,
}

impl ChallengeConfigInner {
    /// Raw configuration of a single ruleset.
    #[must_use]
    pub const fn ruleset(&self, id: RulesetId) -> &RulesetConfig {
        match id {
            RulesetId::Hardcore => &self.hardcore,
            RulesetId::SemiHardcore => &self.semi_hardcore,
            RulesetId::SelfCrafted => &self.self_crafted,
            RulesetId::ItemQualityLevel => &self.item_quality_level,
            RulesetId::SlowXpGain => &self.slow_xp_gain,
            RulesetId::VerySlowXpGain => &self.very_slow_xp_gain,
            RulesetId::QuestXpOnly => &self.quest_xp_only,
            RulesetId::IronMan => &self.iron_man,
        }
    }

    pub const fn ruleset_mut(&mut self, id: RulesetId) -> &mut RulesetConfig {
        match id {
            RulesetId::Hardcore => &mut self.hardcore,
            RulesetId::SemiHardcore => &mut self.semi_hardcore,
            RulesetId::SelfCrafted => &mut self.self_crafted,
            RulesetId::ItemQualityLevel => &mut self.item_quality_level,
            RulesetId::SlowXpGain => &mut self.slow_xp_gain,
            RulesetId::VerySlowXpGain => &mut self.very_slow_xp_gain,
            RulesetId::QuestXpOnly => &mut self.quest_xp_only,
            RulesetId::IronMan => &mut self.iron_man,
        }
    }
}

/// Thin Arc-wrapped config for inexpensive cloning into subsystems.
#[derive(Default, Debug, Clone, Deserialize)]
#[serde(from = "ChallengeConfigInner")]
pub struct ChallengeConfig {
    inner: Arc<ChallengeConfigInner>,
}

impl From<ChallengeConfigInner> for ChallengeConfig {
    fn from(inner: ChallengeConfigInner) -> Self {
        Self { inner: Arc::new(inner) }
    }
}

impl Deref for ChallengeConfig {
    type Target = ChallengeConfigInner;

    fn deref(&self) -> &Self::Target {
        &self.inner
    }
}

impl DerefMut for ChallengeConfig {
    fn deref_mut(&mut self) -> &mut ChallengeConfigInner {
        Arc::make_mut(&mut self.inner)
    }
}

/// Module-wide switches (`ChallengeModes.*`).
#[derive(Default, Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ModuleConfig {
    /// Master switch. When off, nothing else is read.
    #[serde(rename = "Enable", alias = "enable")]
    pub enable: bool,
    /// Reject malformed reward lists instead of coercing them to zero.
    #[serde(rename = "StrictRewardParsing", alias = "strictrewardparsing")]
    pub strict_reward_parsing: bool,
}

/// Options of one ruleset (`<Name>.*`).
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct RulesetConfig {
    #[serde(rename = "Enable", alias = "enable")]
    pub enable: bool,
    #[serde(rename = "DisableLevel", alias = "disablelevel")]
    pub disable_level: u32,
    /// Left unset to fall back to the ruleset's own default.
    #[serde(rename = "XPMultiplier", alias = "xpmultiplier")]
    pub xp_multiplier: Option<f32>,
    #[serde(rename = "ItemRewardAmount", alias = "itemrewardamount")]
    pub item_reward_amount: u32,
    #[serde(rename = "TitleRewards", alias = "titlerewards")]
    pub title_rewards: String,
    #[serde(rename = "TalentRewards", alias = "talentrewards")]
    pub talent_rewards: String,
    #[serde(rename = "ItemRewards", alias = "itemrewards")]
    pub item_rewards: String,
    #[serde(rename = "AchievementReward", alias = "achievementreward")]
    pub achievement_rewards: String,
}

/// Logging output (`Logging.*`).
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    #[serde(rename = "Level", alias = "level")]
    pub level: String,
    /// Enables the rolling file appender when set.
    #[serde(rename = "Directory", alias = "directory")]
    pub directory: Option<PathBuf>,
    #[serde(rename = "Json", alias = "json")]
    pub json: bool,
    /// `EnvFilter` directives, e.g. `challenge_modes=debug`.
    #[serde(rename = "Filter", alias = "filter")]
    pub filter: Option<String>,
}

// --- Default ---

impl Default for RulesetConfig {
    fn default() -> Self {
        Self {
            enable: true,
            disable_level: 0,
            xp_multiplier: None,
            item_reward_amount: 1,
            title_rewards: String::new(),
            talent_rewards: String::new(),
            item_rewards: String::new(),
            achievement_rewards: String::new(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self { level: "info".to_owned(), directory: None, json: false, filter: None }
    }
}
