//! Character set ladder and composite alphabet resolution.
//!
//! The ladder models the order in which an attacker widens the keyspace:
//! simplest set first, broadest set last. Resolving a password picks the
//! single ladder entry complex enough to contain every character used.

use crate::config::ConfigError;

/// Ordered character sets, simplest to most complex.
///
/// The ordering contract (a later set is never simpler than an earlier one)
/// belongs to the constructor caller; the canonical ladder is not strictly
/// nested, so it cannot be checked structurally.
#[derive(Debug, Clone)]
pub struct CharsetLadder {
    sets: Vec<String>,
}

impl Default for CharsetLadder {
    fn default() -> Self {
        Self {
            sets: vec![
                "0123456789".to_string(),
                "abcdefghijklmnopqrstuvwxyz".to_string(),
                "abcdefghijklmnopqrstuvwxyz0123456789".to_string(),
                "abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ".to_string(),
                "abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789".to_string(),
                "abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789!@#$%^&*()-=_+"
                    .to_string(),
                "abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789!@#$%^&*()-=_+[]\"{}|;':,./<>?`~"
                    .to_string(),
            ],
        }
    }
}

impl CharsetLadder {
    /// Builds a ladder from custom sets.
    ///
    /// # Errors
    /// Rejects an empty ladder, empty sets, and duplicate characters
    /// within a set.
    pub fn new(sets: Vec<String>) -> Result<Self, ConfigError> {
        if sets.is_empty() {
            return Err(ConfigError::EmptyLadder);
        }
        for (index, set) in sets.iter().enumerate() {
            if set.is_empty() {
                return Err(ConfigError::EmptyCharset(index));
            }
            let mut seen = std::collections::HashSet::new();
            if !set.chars().all(|c| seen.insert(c)) {
                return Err(ConfigError::DuplicateChars(index));
            }
        }
        Ok(Self { sets })
    }

    /// The simplest (first) set.
    pub fn simplest(&self) -> &str {
        &self.sets[0]
    }

    /// The most complex (last) set, used as the fallback alphabet.
    pub fn broadest(&self) -> &str {
        &self.sets[self.sets.len() - 1]
    }

    /// Resolves the composite alphabet an attacker is assumed to enumerate
    /// for `password`.
    ///
    /// Scans left to right, tracking the most complex set matched so far.
    /// Each character is looked up in the lowest-indexed set at or above
    /// the tracked index; a character found in none of the remaining sets
    /// (e.g. non-ASCII) makes the broadest set the alphabet for the whole
    /// password. The empty password resolves to the simplest set.
    pub fn resolve(&self, password: &str) -> &str {
        let mut tracked: Option<usize> = None;
        for ch in password.chars() {
            let start = tracked.unwrap_or(0);
            match self.sets[start..].iter().position(|set| set.contains(ch)) {
                Some(offset) => tracked = Some(start + offset),
                None => return self.broadest(),
            }
        }
        match tracked {
            Some(index) => &self.sets[index],
            None => self.simplest(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_digits_resolve_to_digit_set() {
        let ladder = CharsetLadder::default();
        assert_eq!(ladder.resolve("0629"), "0123456789");
    }

    #[test]
    fn test_all_lowercase_resolves_to_lowercase_set() {
        let ladder = CharsetLadder::default();
        assert_eq!(ladder.resolve("troubador"), "abcdefghijklmnopqrstuvwxyz");
    }

    #[test]
    fn test_lowercase_and_digits_resolve_to_alphanumeric_set() {
        let ladder = CharsetLadder::default();
        assert_eq!(
            ladder.resolve("abc123"),
            "abcdefghijklmnopqrstuvwxyz0123456789"
        );
    }

    #[test]
    fn test_tracked_index_only_moves_forward() {
        // Once past the lowercase set, a digit must be found in a broader
        // set; a digit seen first is absorbed by the next lowercase match.
        let ladder = CharsetLadder::default();
        assert_eq!(
            ladder.resolve("a1"),
            "abcdefghijklmnopqrstuvwxyz0123456789"
        );
        assert_eq!(ladder.resolve("1a"), "abcdefghijklmnopqrstuvwxyz");
    }

    #[test]
    fn test_mixed_case_with_symbol() {
        let ladder = CharsetLadder::default();
        assert_eq!(ladder.resolve("Tr0ub4dor&3"), ladder.broadest());
    }

    #[test]
    fn test_unknown_character_falls_back_to_broadest() {
        let ladder = CharsetLadder::default();
        assert_eq!(ladder.resolve("abcé"), ladder.broadest());
        assert_eq!(ladder.resolve("é"), ladder.broadest());
    }

    #[test]
    fn test_empty_password_resolves_to_simplest() {
        let ladder = CharsetLadder::default();
        assert_eq!(ladder.resolve(""), "0123456789");
    }

    #[test]
    fn test_custom_ladder_rejects_duplicates() {
        let result = CharsetLadder::new(vec!["aab".to_string()]);
        assert_eq!(result.unwrap_err(), ConfigError::DuplicateChars(0));
    }

    #[test]
    fn test_custom_ladder_rejects_empty() {
        assert_eq!(
            CharsetLadder::new(vec![]).unwrap_err(),
            ConfigError::EmptyLadder
        );
        assert_eq!(
            CharsetLadder::new(vec!["abc".to_string(), String::new()]).unwrap_err(),
            ConfigError::EmptyCharset(1)
        );
    }
}
