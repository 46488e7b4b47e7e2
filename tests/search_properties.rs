use badchar::normalize::normalize;
use badchar::{search, SearchConfig, Searcher, ShiftTable, TablePolicy};
use proptest::prelude::*;

fn naive_leftmost(text: &[char], pattern: &[char]) -> Option<usize> {
    if pattern.is_empty() || pattern.len() > text.len() {
        return None;
    }
    text.windows(pattern.len()).position(|w| w == pattern)
}

proptest! {
    #[test]
    fn test_agrees_with_naive_scan(text in "[abcA ]{0,24}", pattern in "[abc ]{0,5}") {
        let expected = naive_leftmost(&normalize(&text), &normalize(&pattern));
        let result = search(&text, &pattern);
        prop_assert_eq!(result.found(), expected.is_some());
        prop_assert_eq!(result.shift(), expected);
    }

    #[test]
    fn test_planted_pattern_is_found(
        prefix in "[xyz]{0,10}",
        pattern in "[xyzw]{1,6}",
        suffix in "[xyz]{0,10}",
    ) {
        let text = format!("{prefix}{pattern}{suffix}");
        let result = search(&text, &pattern);
        prop_assert!(result.found());
        let shift = result.shift().unwrap();
        prop_assert!(shift <= prefix.len());
        let haystack = normalize(&text);
        let needle = normalize(&pattern);
        prop_assert_eq!(&haystack[shift..shift + needle.len()], needle.as_slice());
    }

    #[test]
    fn test_windows_bounded(text in "[ab]{1,32}", pattern in "[ab]{1,6}") {
        let (_, stats) = Searcher::default().search_with_stats(&text, &pattern).unwrap();
        let n = text.len();
        let m = pattern.len();
        let limit = if m > n { 0 } else { n - m + 1 };
        prop_assert!(stats.windows <= limit);
    }

    #[test]
    fn test_policies_agree(text in "[abc]{0,20}", pattern in "[abc]{1,4}") {
        let rebuilt = Searcher::new(SearchConfig::default().with_table_policy(TablePolicy::PerMismatch));
        prop_assert_eq!(rebuilt.search(&text, &pattern).unwrap(), search(&text, &pattern));
    }

    #[test]
    fn test_table_values_in_range(pattern in "[a-e]{0,8}", probe in "[a-g]") {
        let chars: Vec<char> = pattern.chars().collect();
        let table = ShiftTable::build(&chars);
        let ch = probe.chars().next().unwrap();
        prop_assert!(table.advance_for(ch) <= chars.len());
    }
}

#[test]
fn test_recurring_last_character_terminates() {
    // Raw table gives 'A' an advance of zero here
    let pattern: Vec<char> = "ABCA".chars().collect();
    assert_eq!(ShiftTable::build(&pattern).advance_for('A'), 0);

    let text = "A".repeat(1_000);
    let searcher = Searcher::new(SearchConfig::default().with_step_limit(1_000));
    let (result, stats) = searcher.search_with_stats(&text, "ABCA").unwrap();
    assert!(!result.found());
    assert_eq!(stats.windows, 997);
    assert_eq!(stats.floored, 997);
}

#[test]
fn test_no_recurring_character_in_text_terminates() {
    let searcher = Searcher::new(SearchConfig::default().with_step_limit(4));
    let result = searcher.search("ZZZZ", "ABCA").unwrap();
    assert!(!result.found());
}
