//! Facade crate for the challenge modes.
//! Re-exports the domain, kernel and rulesets crates and wires them together from a config file.
//! Keep this crate thin: it should compose other crates, not implement rules.
//!
//! ## Usage
//! - Call [`bootstrap`] once at server start-up and keep the returned [`Runtime`] alive.
//! - Forward gameplay events to `runtime.modes.dispatcher` and the opt-in object to
//!   `runtime.modes.menu`.
//! - On an admin reload, call [`reload`] with the same path.

pub use cmodes_domain as domain;
pub use cmodes_kernel as kernel;
pub use cmodes_rulesets as rulesets;
pub use cmodes_rulesets::{ChallengeError, ChallengeModes, Killer, RuleDispatcher, XpAward};

use cmodes_domain::config::ChallengeConfig;
use std::path::Path;
use tracing::info;

#[cfg(feature = "logging")]
pub use cmodes_logger as logger;

/// Everything the host keeps for the lifetime of the server.
#[derive(Debug)]
pub struct Runtime {
    pub config: ChallengeConfig,
    pub modes: ChallengeModes,
    /// Flushes the log file on drop.
    #[cfg(feature = "logging")]
    pub logger: cmodes_logger::Logger,
}

/// Reads the configuration, starts logging, and loads the rulesets.
///
/// `path` falls back to `challenge_modes.<ext>` in the working directory.
///
/// # Errors
/// Returns an error if the configuration cannot be read, the logger cannot be
/// installed, or a reward list is rejected in strict mode.
pub fn bootstrap(path: Option<impl AsRef<Path>>) -> Result<Runtime, Box<dyn std::error::Error>> {
    let config = kernel::config::load_config::<ChallengeConfig>(path)?;

    #[cfg(feature = "logging")]
    let logger = init_logging(&config)?;

    let modes = rulesets::init(&config)?;
    info!(target: "challenge_modes", "challenge modes ready");

    Ok(Runtime {
        config,
        modes,
        #[cfg(feature = "logging")]
        logger,
    })
}

/// Loads the rulesets from a configuration file without touching logging.
///
/// # Errors
/// Returns [`ChallengeError::Config`] if the file cannot be read, or
/// [`ChallengeError::RewardParse`] in strict mode.
pub fn load(path: impl AsRef<Path>) -> Result<(ChallengeConfig, ChallengeModes), ChallengeError> {
    let config = kernel::config::load_config::<ChallengeConfig>(Some(path))?;
    let modes = rulesets::init(&config)?;
    Ok((config, modes))
}

/// Re-reads the configuration file into the running rulesets.
///
/// # Errors
/// See [`load`]. On error the running rulesets keep their settings.
pub fn reload(modes: &ChallengeModes, path: impl AsRef<Path>) -> Result<(), ChallengeError> {
    modes.registry.load_from_path(path)
}

/// Installs the global subscriber described by the `Logging` table.
///
/// # Errors
/// Returns [`cmodes_logger::LoggerError`] for an unknown level, a bad filter, or
/// when a subscriber is already installed.
#[cfg(feature = "logging")]
pub fn init_logging(config: &ChallengeConfig) -> Result<cmodes_logger::Logger, cmodes_logger::LoggerError> {
    let logging = &config.logging;
    let mut builder = cmodes_logger::Logger::builder()
        .name("challenge_modes")
        .level_str(&logging.level)?
        .json(logging.json);

    if let Some(directory) = &logging.directory {
        builder = builder.path(directory);
    }
    if let Some(filter) = &logging.filter {
        builder = builder.env_filter(filter);
    }

    builder.init()
}
