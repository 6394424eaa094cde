//! Membership checks - common-password dictionary and identity tokens.
//!
//! Both checks run over the password's leet variants, so "p@55w0rd" is
//! caught by a dictionary entry "password" and "Chr1570pher" by an
//! identity token "christopher".

use std::collections::HashSet;

use crate::candidate::PasswordCandidate;
use crate::config::PolicyConfig;
use crate::dictionary::Dictionary;
use crate::leet::{self, ExpansionLimitExceeded, LeetMap};
use crate::report::Violation;

/// Produces the variant list shared by the dictionary and identity checks.
///
/// With leet expansion disabled this is just the lowercased password.
/// Variants come back sorted so violation reporting is deterministic.
///
/// # Errors
/// Propagates [`ExpansionLimitExceeded`]; the evaluator converts it into
/// an [`Violation::ExpansionLimit`] covering both membership checks.
pub fn expand_variants(
    candidate: &PasswordCandidate<'_>,
    policy: &PolicyConfig,
    map: &LeetMap,
) -> Result<Vec<String>, ExpansionLimitExceeded> {
    let variants: HashSet<String> = if policy.enable_leet_expansion {
        leet::expand(candidate.text(), map, policy.leet_variant_cap)?
    } else {
        let mut single = HashSet::new();
        single.insert(candidate.text().to_lowercase());
        single
    };
    let mut variants: Vec<String> = variants.into_iter().collect();
    variants.sort();
    Ok(variants)
}

/// Flags the password when any variant is a known common password.
pub fn dictionary_check(variants: &[String], dictionary: &Dictionary) -> Option<Violation> {
    variants
        .iter()
        .find(|variant| dictionary.contains(variant))
        .map(|variant| Violation::Dictionary {
            variant: variant.clone(),
        })
}

/// Flags the password when any variant contains a caller-supplied
/// identity token (username, birth year, name), case-insensitively.
pub fn identity_check(variants: &[String], tokens: &[&str]) -> Option<Violation> {
    for token in tokens {
        let needle = token.to_lowercase();
        if needle.is_empty() {
            continue;
        }
        if variants.iter().any(|variant| variant.contains(&needle)) {
            return Some(Violation::Identity {
                token: (*token).to_string(),
            });
        }
    }
    None
}
