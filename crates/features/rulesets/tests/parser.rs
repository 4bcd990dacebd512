use cmodes_rulesets::parser::*;
use proptest::prelude::*;
use std::collections::HashMap;

#[test]
fn malformed_pair_becomes_zero_entry() {
    let rewards = parse_level_reward_list("10 5, abc xyz, 20 7");
    assert_eq!(rewards.len(), 3);
    assert_eq!(rewards[&10], 5);
    assert_eq!(rewards[&0], 0);
    assert_eq!(rewards[&20], 7);
}

#[test]
fn strict_mode_rejects_what_lenient_coerces() {
    assert!(parse_with("10 5, abc xyz, 20 7", ParseMode::Lenient).is_ok());
    assert!(parse_with("10 5, abc xyz, 20 7", ParseMode::Strict).is_err());
}

#[test]
fn whitespace_is_flexible() {
    let rewards = parse_level_reward_list("  10\t5 ,20   7,");
    assert_eq!(rewards.len(), 2);
    assert_eq!(rewards[&10], 5);
    assert_eq!(rewards[&20], 7);
}

proptest! {
    #[test]
    fn one_entry_per_level_last_wins(pairs in prop::collection::vec((any::<u8>(), any::<u32>()), 0..24)) {
        let text = pairs.iter().map(|(l, v)| format!("{l} {v}")).collect::<Vec<_>>().join(", ");
        let expected = pairs.iter().copied().collect::<HashMap<_, _>>();

        let lenient = parse_level_reward_list(&text);
        let strict = parse_level_reward_list_strict(&text).unwrap();

        prop_assert_eq!(lenient.len(), expected.len());
        for (level, value) in &expected {
            prop_assert_eq!(lenient.get(level), Some(value));
            prop_assert_eq!(strict.get(level), Some(value));
        }
    }

    #[test]
    fn lenient_never_panics(text in ".*") {
        let _ = parse_level_reward_list(&text);
    }
}
