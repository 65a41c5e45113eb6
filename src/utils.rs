//! Utility functions for string processing.

/// Case-fold a string into characters for matching.
///
/// Each character goes through Unicode lowercase mapping. Some characters fold
/// to more than one (`İ` becomes `i̇`), so the result is a `Vec<char>` and its
/// positions index the folded text, not the original bytes.
///
/// Query and label must be folded the same way or subsequence checks drift:
/// - "Deadlock" → `['d', 'e', 'a', 'd', 'l', 'o', 'c', 'k']`
/// - "MUTEX" → `['m', 'u', 't', 'e', 'x']`
pub fn fold_case(value: &str) -> Vec<char> {
    value.chars().flat_map(char::to_lowercase).collect()
}

/// Does a character following `prev` begin a word?
///
/// The first character of a label always does (`prev` is `None`). Otherwise
/// the previous source character must not be alphanumeric, so "in mutex"
/// starts a word at `m` but "mutexes" does not start one at `x`.
pub fn starts_word(prev: Option<char>) -> bool {
    prev.map_or(true, |c| !c.is_alphanumeric())
}
