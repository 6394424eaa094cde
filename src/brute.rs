//! Brute-force attack simulation - attempt counting and time estimation.
//!
//! The password is treated as a numeral in a positional system whose base
//! is the resolved alphabet size. The attacker enumerates that alphabet in
//! lexicographic order, shortest numeral first, so the attempt count is the
//! password's rank within the enumeration. All arithmetic is arbitrary
//! precision: a 50-character full-symbol password exceeds 10^90 attempts.

use num_bigint::BigUint;
use num_traits::{ToPrimitive, Zero};

use crate::config::ConfigError;

/// Days beyond which a password is treated as practically uncrackable.
pub const MAX_DAYS: u64 = 1_000_000_000;

/// Named attacker hash-rate profiles, in attempts per second.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AttackProfile {
    /// A single commodity machine: 10^6 attempts/s.
    Low,
    /// A GPU rig: 10^10 attempts/s.
    Medium,
    /// A GPU cluster: 10^14 attempts/s.
    High,
    /// A state-level adversary: 10^18 attempts/s.
    Dedicated,
}

impl AttackProfile {
    /// Parses a profile name, case-insensitively.
    ///
    /// # Errors
    /// Returns `ConfigError::UnknownProfile` for anything other than
    /// `low`, `medium`, `high` or `dedicated`. Every named profile has a
    /// positive rate, so a zero-rate profile cannot be constructed.
    pub fn from_name(name: &str) -> Result<Self, ConfigError> {
        match name.trim().to_lowercase().as_str() {
            "low" => Ok(Self::Low),
            "medium" => Ok(Self::Medium),
            "high" => Ok(Self::High),
            "dedicated" => Ok(Self::Dedicated),
            other => Err(ConfigError::UnknownProfile(other.to_string())),
        }
    }

    /// The assumed attack rate in attempts per second.
    pub fn attempts_per_second(self) -> u64 {
        match self {
            Self::Low => 1_000_000,
            Self::Medium => 10_000_000_000,
            Self::High => 100_000_000_000_000,
            Self::Dedicated => 1_000_000_000_000_000_000,
        }
    }
}

/// Counts the attacker's worst-case guesses before reaching `password`.
///
/// Each character's digit value is its zero-based index in `alphabet`, so
/// the lexicographically-first password of any length costs 0 attempts. A
/// character absent from the alphabet (possible only after the resolver's
/// broadest-set fallback) contributes digit value 0.
pub fn count_attempts(password: &str, alphabet: &str) -> BigUint {
    let chars: Vec<char> = password.chars().collect();
    let length = chars.len();
    let base = BigUint::from(alphabet.chars().count());

    let mut attempts = BigUint::zero();
    for (position, ch) in chars.iter().enumerate() {
        let digit = alphabet.chars().position(|c| c == *ch).unwrap_or(0);
        let power = (length - position - 1) as u32;
        attempts += BigUint::from(digit) * base.pow(power);
    }
    attempts
}

/// Converts an attempt count into whole days of attack time.
///
/// Floor division by the profile's daily rate, saturating at [`MAX_DAYS`].
/// The daily rate for `Dedicated` does not fit in a u64, so the divisor
/// stays arbitrary precision.
pub fn days_to_crack(attempts: &BigUint, profile: AttackProfile) -> u64 {
    let per_day = BigUint::from(profile.attempts_per_second()) * BigUint::from(86_400u32);
    let days = attempts / per_day;
    match days.to_u64() {
        Some(days) if days <= MAX_DAYS => days,
        _ => MAX_DAYS,
    }
}
