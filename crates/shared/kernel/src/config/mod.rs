mod error;

pub use self::error::{ConfigError, ConfigErrorExt};
pub use config::FileFormat;

use config::builder::DefaultState;
use config::{Config, ConfigBuilder, Environment, File, Map, Source, Value, ValueKind};
use serde::de::DeserializeOwned;
use std::path::{Path, PathBuf};
use tracing::info;

/// Prefix of the environment variables that override file settings.
pub const ENV_PREFIX: &str = "CMODES";
/// Default configuration file, resolved relative to the working directory.
pub const DEFAULT_CONFIG_FILE: &str = "challenge_modes";

/// A reusable configuration loader that combines file-based settings with environment overrides.
///
/// This function implements a layered configuration strategy:
/// 1. **Base File**: Loads settings from a file (e.g., `challenge_modes.toml`). If no path is
///    provided, it defaults to `"challenge_modes"` with any extension the `config` crate knows.
/// 2. **Environment Overrides**: Overlays values from environment variables prefixed with
///    `CMODES__`. Tables and fields are separated by double underscores
///    (e.g., `CMODES__HARDCORE__DISABLELEVEL` maps to `Hardcore.DisableLevel`).
///
/// # Errors
/// This function will return an error if:
/// * The specified (or default) configuration file cannot be found.
/// * The content of the file does not match the structure of type `T`.
///
/// # Example
/// ```rust
/// use cmodes_kernel::config::load_config;
///
/// #[derive(Default, serde::Deserialize)]
/// struct HostConfig {
///     realm: String,
/// }
///
/// let cfg: HostConfig = load_config(Some("config/local")).unwrap_or_default();
/// ```
pub fn load_config<T>(path: Option<impl AsRef<Path>>) -> Result<T, ConfigError>
where
    T: DeserializeOwned,
{
    let effective_path =
        path.map_or_else(|| PathBuf::from(DEFAULT_CONFIG_FILE), |p| p.as_ref().to_path_buf());

    info!(target: "challenge_modes", "Loading config from {}", effective_path.display());

    layered(File::from(effective_path.as_path()).required(true), environment())
}

/// Parses configuration from an in-memory string (no environment overlay).
///
/// Hosts that keep the challenge options inside their own config file use this to
/// feed the extracted section.
///
/// # Errors
/// Returns [`ConfigError::Config`] if the text is malformed or does not match `T`.
pub fn load_config_str<T>(content: &str, format: FileFormat) -> Result<T, ConfigError>
where
    T: DeserializeOwned,
{
    let file = table(Config::builder().add_source(File::from_str(content, format)))
        .context("Failed to parse config")?;

    deserialize(file)
}

type Table = Map<String, Value>;

/// `file` with `env` on top, keys compared case-insensitively.
fn layered<T, S>(file: S, env: Environment) -> Result<T, ConfigError>
where
    T: DeserializeOwned,
    S: Source + Send + Sync + 'static,
{
    let file = table(Config::builder().add_source(file)).context("Failed to read config file")?;
    let env = table(Config::builder().add_source(env)).context("Failed to read environment overrides")?;

    deserialize(overlay(file, env))
}

fn environment() -> Environment {
    Environment::with_prefix(ENV_PREFIX).separator("__")
}

/// Builds one layer and folds its keys to lowercase.
///
/// Environment keys always arrive lowercased, so folding every layer lets an
/// override meet the file key it replaces.
fn table(builder: ConfigBuilder<DefaultState>) -> Result<Table, config::ConfigError> {
    Ok(fold_case(builder.build()?.try_deserialize::<Table>()?))
}

fn fold_case(table: Table) -> Table {
    table
        .into_iter()
        .map(|(key, value)| {
            let value = match value.kind {
                ValueKind::Table(inner) => Value::new(None, ValueKind::Table(fold_case(inner))),
                kind => Value::new(None, kind),
            };
            (key.to_lowercase(), value)
        })
        .collect()
}

/// Merges `top` into `base`; nested tables merge key by key, anything else is replaced.
fn overlay(mut base: Table, top: Table) -> Table {
    for (key, value) in top {
        let merged = match base.remove(&key).map(|existing| existing.kind) {
            Some(ValueKind::Table(lower)) => match value.kind {
                ValueKind::Table(upper) => Value::new(None, ValueKind::Table(overlay(lower, upper))),
                kind => Value::new(None, kind),
            },
            _ => value,
        };
        base.insert(key, merged);
    }
    base
}

fn deserialize<T>(table: Table) -> Result<T, ConfigError>
where
    T: DeserializeOwned,
{
    Value::new(None, ValueKind::Table(table))
        .try_deserialize::<T>()
        .context("Failed to deserialize config")
}

#[cfg(test)]
mod tests {
    use super::*;
    use cmodes_domain::config::ChallengeConfig;

    #[test]
    fn parses_toml_tables() {
        let cfg: ChallengeConfig = load_config_str(
            r#"
            [ChallengeModes]
            Enable = true

            [VerySlowXpGain]
            XPMultiplier = 0.1
            TalentRewards = "10 1"
            "#,
            FileFormat::Toml,
        )
        .unwrap();

        assert!(cfg.module.enable);
        assert_eq!(cfg.very_slow_xp_gain.xp_multiplier, Some(0.1));
        assert_eq!(cfg.very_slow_xp_gain.talent_rewards, "10 1");
    }

    #[test]
    fn string_overrides_replace_file_values() {
        let file = table(Config::builder().add_source(File::from_str(
            "[Hardcore]\nEnable = true\nDisableLevel = 10\nTitleRewards = \"10 81\"",
            FileFormat::Toml,
        )))
        .unwrap();
        let env = table(Config::builder().set_override("hardcore.disablelevel", "60").unwrap()).unwrap();

        let cfg: ChallengeConfig = deserialize(overlay(file, env)).unwrap();
        assert!(cfg.hardcore.enable);
        assert_eq!(cfg.hardcore.disable_level, 60);
        assert_eq!(cfg.hardcore.title_rewards, "10 81");
    }

    #[test]
    fn prefixed_environment_overrides_file() {
        let vars = Map::from([
            ("CMODES__HARDCORE__DISABLELEVEL".to_owned(), "60".to_owned()),
            ("CMODES__SLOWXPGAIN__ENABLE".to_owned(), "false".to_owned()),
            ("CMODES__CHALLENGEMODES__ENABLE".to_owned(), "1".to_owned()),
            ("HARDCORE__DISABLELEVEL".to_owned(), "5".to_owned()),
        ]);
        let file = File::from_str(
            "[Hardcore]\nDisableLevel = 10\nTitleRewards = \"10 81\"\n\n[SlowXpGain]\nEnable = true",
            FileFormat::Toml,
        );

        let cfg: ChallengeConfig = layered(file, environment().source(Some(vars))).unwrap();
        assert!(cfg.module.enable);
        assert_eq!(cfg.hardcore.disable_level, 60);
        assert_eq!(cfg.hardcore.title_rewards, "10 81");
        assert!(!cfg.slow_xp_gain.enable);
        assert!(cfg.iron_man.enable);
    }

    #[test]
    fn context_is_rendered() {
        let err = load_config_str::<ChallengeConfig>("[Hardcore]\nDisableLevel = \"soon\"", FileFormat::Toml)
            .context("Hardcore section")
            .unwrap_err();

        assert!(err.to_string().starts_with("Config error (Hardcore section)"), "{err}");
    }
}
