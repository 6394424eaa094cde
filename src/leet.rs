//! Leetspeak expansion - plausible plain-text readings of a password.
//!
//! Reverses common letter-for-symbol substitutions so the dictionary and
//! identity checks can see through "p@55w0rd". Expansion keeps every
//! intermediate variant, because a password may mix substitution layers,
//! and is bounded by a configurable variant cap.

use std::collections::HashSet;

use thiserror::Error;

/// The expansion grew past the configured variant cap.
///
/// Not a crash: the evaluator reports this as an "inconclusive membership
/// check" violation and treats the password as suspect.
#[derive(Error, Debug, PartialEq, Eq)]
#[error("leet expansion exceeded the cap of {cap} variants")]
pub struct ExpansionLimitExceeded {
    pub cap: usize,
}

/// Ordered mapping from canonical letter to the tokens that can stand for it.
///
/// Immutable configuration, injected rather than global. Entry order is
/// fixed so expansion is deterministic.
#[derive(Debug, Clone)]
pub struct LeetMap {
    entries: Vec<(char, Vec<String>)>,
}

impl Default for LeetMap {
    fn default() -> Self {
        let table: &[(char, &[&str])] = &[
            ('a', &["4", "@"]),
            ('b', &["8"]),
            ('c', &["(", "{", "[", "<"]),
            ('d', &["6"]),
            ('e', &["3"]),
            ('f', &["#"]),
            ('g', &["9"]),
            ('h', &["#"]),
            ('i', &["1", "!", "|"]),
            ('j', &["7"]),
            ('k', &["X"]),
            ('l', &["1", "!", "|"]),
            ('o', &["0"]),
            ('s', &["5", "$"]),
            ('t', &["7"]),
            ('x', &["><"]),
            ('z', &["2"]),
        ];
        Self {
            entries: table
                .iter()
                .map(|(c, subs)| (*c, subs.iter().map(|s| s.to_string()).collect()))
                .collect(),
        }
    }
}

impl LeetMap {
    /// Builds a map from custom `(canonical letter, tokens)` entries.
    pub fn new(entries: Vec<(char, Vec<String>)>) -> Self {
        Self { entries }
    }

    pub fn entries(&self) -> &[(char, Vec<String>)] {
        &self.entries
    }
}

/// Expands `password` into the set of its plausible plain-text readings.
///
/// The password is lowercased first. For each map entry, every current
/// variant spawns one additional variant per token, with all occurrences
/// of that token replaced by the canonical letter; originals are kept so
/// layers compose, and the set de-duplicates.
///
/// # Errors
/// Fails with [`ExpansionLimitExceeded`] as soon as the set would grow
/// past `cap` variants, before any further work is done.
pub fn expand(
    password: &str,
    map: &LeetMap,
    cap: usize,
) -> Result<HashSet<String>, ExpansionLimitExceeded> {
    let mut variants = HashSet::new();
    variants.insert(password.to_lowercase());
    if variants.len() > cap {
        return Err(ExpansionLimitExceeded { cap });
    }

    // Tokens can overlap (the 'x' token "><" contains the 'c' token "<"),
    // so a variant spawned by a later entry may still carry an earlier
    // entry's token. Iterate full passes to a fixpoint; the cap bounds
    // the set, so this terminates.
    loop {
        let mut changed = false;
        for (canonical, tokens) in map.entries() {
            let mut spawned = Vec::new();
            for variant in &variants {
                for token in tokens {
                    if variant.contains(token.as_str()) {
                        spawned.push(variant.replace(token.as_str(), &canonical.to_string()));
                    }
                }
            }
            for variant in spawned {
                if variants.insert(variant) {
                    changed = true;
                }
                if variants.len() > cap {
                    return Err(ExpansionLimitExceeded { cap });
                }
            }
        }
        if !changed {
            break;
        }
    }

    Ok(variants)
}
