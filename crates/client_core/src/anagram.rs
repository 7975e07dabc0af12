use std::collections::HashMap;

/// True when both strings have the same length and the same multiset of
/// characters. Comparison is case-sensitive.
pub fn is_anagram_of(a: &str, b: &str) -> bool {
    if a.chars().count() != b.chars().count() {
        return false;
    }

    let mut counts: HashMap<char, i64> = HashMap::new();
    for ch in a.chars() {
        *counts.entry(ch).or_default() += 1;
    }
    for ch in b.chars() {
        let slot = counts.entry(ch).or_default();
        *slot -= 1;
        if *slot < 0 {
            return false;
        }
    }
    counts.values().all(|count| *count == 0)
}
