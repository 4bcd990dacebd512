use std::borrow::Cow;

/// A specialized [`ChallengeError`] enum of this crate.
#[derive(Debug, thiserror::Error)]
pub enum ChallengeError {
    /// Loading the configuration source failed.
    #[error("Configuration error{}: {source}", format_context(.context))]
    Config {
        #[source]
        source: cmodes_kernel::config::ConfigError,
        context: Option<Cow<'static, str>>,
    },

    /// A reward list entry was rejected in strict parsing mode.
    #[error("Malformed reward list{}: {message}", format_context(.context))]
    RewardParse { message: Cow<'static, str>, context: Option<Cow<'static, str>> },

    /// A configured title or achievement id does not exist in the game data.
    #[error("Invalid reward{}: {message}", format_context(.context))]
    InvalidReward { message: Cow<'static, str>, context: Option<Cow<'static, str>> },

    /// A raw id does not name any ruleset.
    #[error("Unknown ruleset{}: {message}", format_context(.context))]
    UnknownRuleset { message: Cow<'static, str>, context: Option<Cow<'static, str>> },

    /// The ruleset cannot be activated for this character right now.
    #[error("Ruleset not offerable{}: {message}", format_context(.context))]
    NotOfferable { message: Cow<'static, str>, context: Option<Cow<'static, str>> },
}

impl From<cmodes_kernel::config::ConfigError> for ChallengeError {
    fn from(source: cmodes_kernel::config::ConfigError) -> Self {
        Self::Config { source, context: None }
    }
}

fn format_context(context: &Option<Cow<'static, str>>) -> Cow<'static, str> {
    context.as_ref().map_or(Cow::Borrowed(""), |c| Cow::Owned(format!(" ({c})")))
}
