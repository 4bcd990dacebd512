use bitflags::bitflags;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// Namespace of the persisted per-character settings owned by the challenge modes.
pub const SETTINGS_NAMESPACE: &str = "mod-challenge-modes";

/// Settings index of the Hardcore "pending death" bit.
/// It lives right after the last ruleset id and is not a ruleset by itself.
pub const HARDCORE_DEAD_INDEX: u8 = 8;

/// Stable identifier of a challenge ruleset.
///
/// The discriminant doubles as the index into the persisted per-character settings,
/// so the values must never be reordered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[repr(u8)]
pub enum RulesetId {
    Hardcore = 0,
    SemiHardcore = 1,
    SelfCrafted = 2,
    ItemQualityLevel = 3,
    SlowXpGain = 4,
    VerySlowXpGain = 5,
    QuestXpOnly = 6,
    IronMan = 7,
}

impl RulesetId {
    /// Every ruleset in dispatch order.
    pub const ALL: [Self; 8] = [
        Self::Hardcore,
        Self::SemiHardcore,
        Self::SelfCrafted,
        Self::ItemQualityLevel,
        Self::SlowXpGain,
        Self::VerySlowXpGain,
        Self::QuestXpOnly,
        Self::IronMan,
    ];

    /// Configuration table name (`<Name>.<Field>`).
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Hardcore => "Hardcore",
            Self::SemiHardcore => "SemiHardcore",
            Self::SelfCrafted => "SelfCrafted",
            Self::ItemQualityLevel => "ItemQualityLevel",
            Self::SlowXpGain => "SlowXpGain",
            Self::VerySlowXpGain => "VerySlowXpGain",
            Self::QuestXpOnly => "QuestXpOnly",
            Self::IronMan => "IronMan",
        }
    }

    /// Index into the persisted settings and into per-ruleset tables.
    #[must_use]
    pub const fn index(self) -> u8 {
        self as u8
    }

    /// The flag bit representing this ruleset.
    #[must_use]
    pub const fn flag(self) -> ChallengeFlags {
        ChallengeFlags::from_bits_retain(1 << self as u16)
    }

    /// Multiplier used when the config does not set `<Name>.XPMultiplier`.
    #[must_use]
    pub const fn default_xp_multiplier(self) -> f32 {
        match self {
            Self::SlowXpGain => 0.5,
            Self::VerySlowXpGain => 0.25,
            _ => 1.0,
        }
    }
}

impl TryFrom<u8> for RulesetId {
    type Error = u8;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::ALL.get(usize::from(value)).copied().ok_or(value)
    }
}

impl TryFrom<u32> for RulesetId {
    type Error = u32;

    fn try_from(value: u32) -> Result<Self, Self::Error> {
        u8::try_from(value).ok().and_then(|v| Self::try_from(v).ok()).ok_or(value)
    }
}

impl fmt::Display for RulesetId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

bitflags! {
    /// Per-character challenge state, one bit per persisted setting index.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
    pub struct ChallengeFlags: u16 {
        const HARDCORE = 1 << 0;
        const SEMI_HARDCORE = 1 << 1;
        const SELF_CRAFTED = 1 << 2;
        const ITEM_QUALITY_LEVEL = 1 << 3;
        const SLOW_XP_GAIN = 1 << 4;
        const VERY_SLOW_XP_GAIN = 1 << 5;
        const QUEST_XP_ONLY = 1 << 6;
        const IRON_MAN = 1 << 7;
        const HARDCORE_DEAD = 1 << HARDCORE_DEAD_INDEX;

        const RULESETS = 0xFF;
    }
}

impl From<RulesetId> for ChallengeFlags {
    fn from(id: RulesetId) -> Self {
        id.flag()
    }
}

impl Serialize for ChallengeFlags {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_u16(self.bits())
    }
}

impl<'de> Deserialize<'de> for ChallengeFlags {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let bits = u16::deserialize(deserializer)?;
        Ok(Self::from_bits_truncate(bits))
    }
}

/// The four level-indexed reward tables every ruleset carries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RewardKind {
    Title,
    Talent,
    Item,
    Achievement,
}

impl RewardKind {
    pub const ALL: [Self; 4] = [Self::Title, Self::Talent, Self::Item, Self::Achievement];

    /// Configuration field holding the reward list.
    #[must_use]
    pub const fn config_field(self) -> &'static str {
        match self {
            Self::Title => "TitleRewards",
            Self::Talent => "TalentRewards",
            Self::Item => "ItemRewards",
            Self::Achievement => "AchievementReward",
        }
    }
}
