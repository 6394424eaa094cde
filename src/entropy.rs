//! NIST-style entropy estimation.
//!
//! Positional bit allocation over the password's bytes, plus 1.5-bit
//! bonuses per character class whose policy-required count is met. The
//! diminishing-returns variant decays the credit of repeated byte values
//! so that heavy repetition stops adding entropy.

use crate::candidate::PasswordCandidate;
use crate::config::PolicyConfig;

/// Estimates the password's bit strength under `policy`.
///
/// Never negative. Uses the diminishing-returns variant when
/// `policy.diminishing_returns` is set.
pub fn nist_bits(candidate: &PasswordCandidate<'_>, policy: &PolicyConfig) -> f64 {
    let bits = if policy.diminishing_returns {
        diminishing_bits(candidate.text())
    } else {
        base_bits(candidate.text())
    };
    bits + class_bonus(candidate, policy)
}

/// Bit allocation for the 1-based byte position.
fn positional_bits(position: usize) -> f64 {
    match position {
        1 => 4.0,
        2..=8 => 2.0,
        9..=20 => 1.5,
        _ => 1.0,
    }
}

/// The original NIST allocation: every position gets full credit.
fn base_bits(password: &str) -> f64 {
    (1..=password.len()).map(positional_bits).sum()
}

/// Diminishing-returns allocation over byte values.
///
/// Each of the 256 byte values carries a multiplier starting at 1.0. A
/// repeated byte contributes its positional bits scaled by the multiplier
/// as it stood before this occurrence's penalty; the penalty then decays
/// the slot for later occurrences (1.0, 0.75, 0.5625, 0.2109..., 0).
fn diminishing_bits(password: &str) -> f64 {
    let mut multiplier = [1.0f64; 256];
    let mut seen = [false; 256];
    let mut bits = 0.0;

    for (index, &byte) in password.as_bytes().iter().enumerate() {
        let slot = byte as usize;
        if seen[slot] {
            bits += positional_bits(index + 1) * multiplier[slot];
            multiplier[slot] = penalize(multiplier[slot]);
        } else {
            bits += positional_bits(index + 1);
            seen[slot] = true;
        }
    }
    bits
}

fn penalize(multiplier: f64) -> f64 {
    if multiplier >= 0.75 {
        multiplier * 0.75
    } else if multiplier >= 0.5625 {
        multiplier * 0.375
    } else if multiplier >= 0.421875 {
        multiplier * 0.1875
    } else {
        0.0
    }
}

/// +1.5 bits, independently, per class meeting its own required count.
///
/// A class whose requirement is 0 is trivially met.
fn class_bonus(candidate: &PasswordCandidate<'_>, policy: &PolicyConfig) -> f64 {
    let mut bonus = 0.0;
    if candidate.lowercase() >= policy.required_lowercase {
        bonus += 1.5;
    }
    if candidate.uppercase() >= policy.required_uppercase {
        bonus += 1.5;
    }
    if candidate.digits() >= policy.required_digits {
        bonus += 1.5;
    }
    if candidate.symbols() >= policy.required_symbols {
        bonus += 1.5;
    }
    bonus
}

#[cfg(test)]
mod tests {
    use super::*;

    const TOLERANCE: f64 = 1e-9;

    fn bits_for(password: &str, diminishing: bool) -> f64 {
        let policy = PolicyConfig {
            diminishing_returns: diminishing,
            ..PolicyConfig::default()
        };
        nist_bits(&PasswordCandidate::new(password), &policy)
    }

    #[test]
    fn test_positional_allocation_boundaries() {
        assert_eq!(positional_bits(1), 4.0);
        assert_eq!(positional_bits(2), 2.0);
        assert_eq!(positional_bits(8), 2.0);
        assert_eq!(positional_bits(9), 1.5);
        assert_eq!(positional_bits(20), 1.5);
        assert_eq!(positional_bits(21), 1.0);
    }

    #[test]
    fn test_base_bits_for_eleven_characters() {
        // 4 + 7*2 + 3*1.5 = 22.5
        assert!((base_bits("Tr0ub4dor&3") - 22.5).abs() < TOLERANCE);
    }

    #[test]
    fn test_troubadour_bits_with_default_requirements() {
        // All four class bonuses apply: 22.5 + 4*1.5 = 28.5.
        let bits = bits_for("Tr0ub4dor&3", false);
        assert!((bits - 28.5).abs() < TOLERANCE, "got {bits}");
    }

    #[test]
    fn test_missing_class_drops_exactly_one_bonus() {
        // Same shape, no symbol: three bonuses instead of four.
        let with_symbol = bits_for("Tr0ub4dor&3", false);
        let without_symbol = bits_for("Tr0ub4dor13", false);
        assert!((with_symbol - without_symbol - 1.5).abs() < TOLERANCE);
    }

    #[test]
    fn test_entropy_is_never_negative() {
        for pwd in ["", "a", "aaaaaaaaaaaaaaaaaaaaaaaaaaaaaa", "é", "\u{0}\u{0}"] {
            assert!(bits_for(pwd, false) >= 0.0);
            assert!(bits_for(pwd, true) >= 0.0);
        }
    }

    #[test]
    fn test_first_occurrence_always_gets_full_credit() {
        // No byte repeats, so both modes agree.
        let plain = bits_for("abcdefgh", false);
        let diminished = bits_for("abcdefgh", true);
        assert!((plain - diminished).abs() < TOLERANCE);
    }

    #[test]
    fn test_repeats_decay_on_schedule() {
        // "aaaa": 4 + 2*1.0 + 2*0.75 + 2*0.5625 = 8.625 before bonuses.
        let policy = PolicyConfig {
            diminishing_returns: true,
            required_lowercase: 0,
            required_uppercase: 0,
            required_digits: 0,
            required_symbols: 0,
            ..PolicyConfig::default()
        };
        let bits = nist_bits(&PasswordCandidate::new("aaaa"), &policy);
        // Every requirement is 0, so all four bonuses apply on top.
        assert!((bits - (8.625 + 6.0)).abs() < TOLERANCE, "got {bits}");
    }

    #[test]
    fn test_heavy_repetition_contributes_nothing() {
        // After the multiplier hits the 0.421875 threshold it is zeroed;
        // from the sixth occurrence on, the byte adds no bits at all.
        let six = bits_for("aaaaaa", true);
        let seven = bits_for("aaaaaaa", true);
        assert!((six - seven).abs() < TOLERANCE);
    }

    #[test]
    fn test_diminishing_is_strictly_lower_for_triple_repeats() {
        let plain = bits_for("aaabcdefgh", false);
        let diminished = bits_for("aaabcdefgh", true);
        assert!(diminished < plain);
    }
}
