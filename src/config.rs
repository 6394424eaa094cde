//! Policy configuration - thresholds the evaluator enforces.
//!
//! A `PolicyConfig` is built once at startup, validated, and then treated
//! as read-only for the lifetime of the evaluator.

use thiserror::Error;

use crate::brute::AttackProfile;

/// Absolute minimum for `min_length`.
pub const LENGTH_FLOOR: usize = 10;

/// Absolute minimum for `entropy_floor_bits`.
pub const ENTROPY_FLOOR_BITS: f64 = 30.0;

/// Absolute minimum for `brute_force_floor_days`.
pub const BRUTE_FORCE_FLOOR_DAYS: u64 = 30;

/// Default cap on the number of leet variants generated per evaluation.
pub const DEFAULT_LEET_VARIANT_CAP: usize = 4096;

#[derive(Error, Debug, PartialEq)]
pub enum ConfigError {
    #[error("minimum length {min} exceeds maximum length {max}")]
    LengthRange { min: usize, max: usize },
    #[error("minimum length {0} is below the absolute floor of 10")]
    LengthFloor(usize),
    #[error("entropy floor of {0} bits is below the absolute floor of 30 bits")]
    EntropyFloor(f64),
    #[error("brute-force floor of {0} days is below the absolute floor of 30 days")]
    BruteForceFloor(u64),
    #[error("leet variant cap must be positive")]
    ZeroVariantCap,
    #[error("unknown attack profile: {0}")]
    UnknownProfile(String),
    #[error("dictionary lookup is enabled but no dictionary was provided")]
    MissingDictionary,
    #[error("character set ladder must contain at least one set")]
    EmptyLadder,
    #[error("character set {0} is empty")]
    EmptyCharset(usize),
    #[error("character set {0} contains duplicate characters")]
    DuplicateChars(usize),
}

/// The rule set a password is evaluated against.
///
/// Required character-class counts of `0` disable that class's composition
/// check (the class bonus in the entropy estimate is then always granted).
#[derive(Debug, Clone, PartialEq)]
pub struct PolicyConfig {
    /// Minimum password length in characters. Must be at least 10.
    pub min_length: usize,
    /// Maximum password length in characters.
    pub max_length: usize,
    /// Required number of lowercase letters.
    pub required_lowercase: usize,
    /// Required number of uppercase letters.
    pub required_uppercase: usize,
    /// Required number of ASCII digits.
    pub required_digits: usize,
    /// Required number of symbols (non-alphanumeric characters).
    pub required_symbols: usize,
    /// Minimum information entropy in bits. Must be at least 30.
    pub entropy_floor_bits: f64,
    /// Apply diminishing returns for repeated characters.
    pub diminishing_returns: bool,
    /// Minimum number of days the password must survive a simulated
    /// brute-force attack. Must be at least 30.
    pub brute_force_floor_days: u64,
    /// Assumed attacker hash rate.
    pub attack_profile: AttackProfile,
    /// Test leet variants against the common-password dictionary.
    pub enable_dictionary_lookup: bool,
    /// Expand leetspeak substitutions before membership checks.
    pub enable_leet_expansion: bool,
    /// Upper bound on generated leet variants. Must be positive.
    pub leet_variant_cap: usize,
}

impl Default for PolicyConfig {
    fn default() -> Self {
        Self {
            min_length: 10,
            max_length: 50,
            required_lowercase: 2,
            required_uppercase: 1,
            required_digits: 2,
            required_symbols: 1,
            entropy_floor_bits: 30.0,
            diminishing_returns: false,
            brute_force_floor_days: 60,
            attack_profile: AttackProfile::Medium,
            enable_dictionary_lookup: true,
            enable_leet_expansion: true,
            leet_variant_cap: DEFAULT_LEET_VARIANT_CAP,
        }
    }
}

impl PolicyConfig {
    /// Checks every threshold against its documented floor.
    ///
    /// # Errors
    /// Returns the first violated constraint. Called by `Evaluator::new`;
    /// no threshold error can surface at evaluation time.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.min_length < LENGTH_FLOOR {
            return Err(ConfigError::LengthFloor(self.min_length));
        }
        if self.min_length > self.max_length {
            return Err(ConfigError::LengthRange {
                min: self.min_length,
                max: self.max_length,
            });
        }
        if self.entropy_floor_bits < ENTROPY_FLOOR_BITS {
            return Err(ConfigError::EntropyFloor(self.entropy_floor_bits));
        }
        if self.brute_force_floor_days < BRUTE_FORCE_FLOOR_DAYS {
            return Err(ConfigError::BruteForceFloor(self.brute_force_floor_days));
        }
        if self.leet_variant_cap == 0 {
            return Err(ConfigError::ZeroVariantCap);
        }
        Ok(())
    }
}
