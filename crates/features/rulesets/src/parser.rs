//! Level-indexed reward lists.
//!
//! A list is a comma separated sequence of `<level> <value>` pairs, e.g.
//! `"10 5, 20 7"`. The lenient reader coerces anything malformed the same way a
//! C `atoi` would: a missing or non-numeric number becomes 0. Levels above 255 and
//! values outside `u32` are coerced to 0 as well. The strict reader rejects those
//! entries instead.

use crate::error::ChallengeError;
use fxhash::FxHashMap;

/// Reward value (title id, talent points, item entry, achievement id) per character level.
pub type LevelRewardMap = FxHashMap<u8, u32>;

/// How malformed entries of a reward list are treated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ParseMode {
    /// Coerce malformed numbers to 0.
    #[default]
    Lenient,
    /// Fail on the first malformed entry.
    Strict,
}

/// Parses a reward list, coercing malformed entries.
///
/// Blank entries (`"10 5,,20 7"` or a trailing comma) are skipped. When a level
/// repeats, the last pair wins.
#[must_use]
pub fn parse_level_reward_list(text: &str) -> LevelRewardMap {
    text.split(',')
        .filter(|token| !token.trim().is_empty())
        .map(|token| {
            let mut parts = token.split_whitespace();
            let level = parts.next().map_or(0, |p| u8::try_from(atoi(p)).unwrap_or(0));
            let value = parts.next().map_or(0, |p| u32::try_from(atoi(p)).unwrap_or(0));
            (level, value)
        })
        .collect()
}

/// Parses a reward list, rejecting any entry that is not exactly two in-range numbers.
///
/// # Errors
/// Returns [`ChallengeError::RewardParse`] naming the first offending entry.
pub fn parse_level_reward_list_strict(text: &str) -> Result<LevelRewardMap, ChallengeError> {
    let mut rewards = LevelRewardMap::default();

    for token in text.split(',').filter(|token| !token.trim().is_empty()) {
        let parts = token.split_whitespace().collect::<Vec<_>>();
        let [level, value] = parts.as_slice() else {
            return Err(malformed(token, "expected '<level> <value>'"));
        };
        let level = level.parse::<u8>().map_err(|e| malformed(token, &format!("level: {e}")))?;
        let value = value.parse::<u32>().map_err(|e| malformed(token, &format!("value: {e}")))?;
        rewards.insert(level, value);
    }

    Ok(rewards)
}

/// Dispatches on [`ParseMode`].
///
/// # Errors
/// Only in [`ParseMode::Strict`], see [`parse_level_reward_list_strict`].
pub fn parse_with(text: &str, mode: ParseMode) -> Result<LevelRewardMap, ChallengeError> {
    match mode {
        ParseMode::Lenient => Ok(parse_level_reward_list(text)),
        ParseMode::Strict => parse_level_reward_list_strict(text),
    }
}

/// Leading optional sign followed by digits; stops at the first other character.
fn atoi(text: &str) -> i64 {
    let (negative, digits) = match text.as_bytes().first() {
        Some(b'-') => (true, &text[1..]),
        Some(b'+') => (false, &text[1..]),
        _ => (false, text),
    };

    let magnitude = digits
        .bytes()
        .take_while(u8::is_ascii_digit)
        .fold(0_i64, |acc, d| acc.saturating_mul(10).saturating_add(i64::from(d - b'0')));

    if negative { -magnitude } else { magnitude }
}

fn malformed(token: &str, reason: &str) -> ChallengeError {
    ChallengeError::RewardParse {
        message: format!("'{}' ({reason})", token.trim()).into(),
        context: None,
    }
}
