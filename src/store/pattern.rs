//! Glob matching for store keys.
//!
//! Supports the subset of Redis `KEYS` syntax the service relies on:
//! `*` matches any run of characters (including none), `?` matches exactly
//! one character, everything else matches literally.

/// Checks if a key matches a glob pattern.
///
/// # Examples
///
/// ```
/// use pokemon_api::store::pattern_matches;
///
/// assert!(pattern_matches("pokemon:water:*", "pokemon:water:1"));
/// assert!(pattern_matches("pokemon:?ire:*", "pokemon:fire:7"));
/// assert!(!pattern_matches("pokemon:water:*", "pokemon:fire:1"));
/// ```
pub fn pattern_matches(pattern: &str, key: &str) -> bool {
    let pattern: Vec<char> = pattern.chars().collect();
    let key: Vec<char> = key.chars().collect();

    let (mut p, mut k) = (0, 0);
    // Position of the last `*` seen, and the key index it started absorbing from
    let mut backtrack: Option<(usize, usize)> = None;

    while k < key.len() {
        match pattern.get(p) {
            Some('*') => {
                backtrack = Some((p, k));
                p += 1;
            }
            Some(&c) if c == '?' || c == key[k] => {
                p += 1;
                k += 1;
            }
            _ => match backtrack {
                // Let the last `*` swallow one more character and retry
                Some((star, start)) => {
                    p = star + 1;
                    k = start + 1;
                    backtrack = Some((star, start + 1));
                }
                None => return false,
            },
        }
    }

    pattern[p..].iter().all(|&c| c == '*')
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exact_match() {
        assert!(pattern_matches("pokemon:water:1", "pokemon:water:1"));
        assert!(!pattern_matches("pokemon:water:1", "pokemon:water:2"));
    }

    #[test]
    fn test_type_prefix_pattern() {
        assert!(pattern_matches("pokemon:water:*", "pokemon:water:1"));
        assert!(pattern_matches("pokemon:water:*", "pokemon:water:"));
        assert!(pattern_matches("pokemon:water:*", "pokemon:water:squirtle:7"));
        assert!(!pattern_matches("pokemon:water:*", "pokemon:waterfall:1"));
        assert!(!pattern_matches("pokemon:water:*", "pokemon:fire:1"));
        assert!(!pattern_matches("pokemon:water:*", "pokemon:water"));
    }

    #[test]
    fn test_question_mark() {
        assert!(pattern_matches("pokemon:?ire:1", "pokemon:fire:1"));
        assert!(!pattern_matches("pokemon:?ire:1", "pokemon:ire:1"));
        assert!(!pattern_matches("pokemon:?", "pokemon:"));
    }

    #[test]
    fn test_wildcards_in_middle() {
        assert!(pattern_matches("pokemon:*:1", "pokemon:grass:1"));
        assert!(pattern_matches("*:*:*", "a:b:c"));
        assert!(!pattern_matches("pokemon:*:1", "pokemon:grass:2"));
        assert!(pattern_matches("a*b*c", "aXXbYYbZZc"));
    }

    #[test]
    fn test_wildcard_only_and_empty() {
        assert!(pattern_matches("*", ""));
        assert!(pattern_matches("*", "anything"));
        assert!(pattern_matches("**", "anything"));
        assert!(pattern_matches("", ""));
        assert!(!pattern_matches("", "x"));
        assert!(!pattern_matches("pokemon:*", ""));
    }
}
