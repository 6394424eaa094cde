//! Strength checks - entropy floor and simulated brute-force floor.

use crate::brute;
use crate::candidate::PasswordCandidate;
use crate::charset::CharsetLadder;
use crate::config::PolicyConfig;
use crate::entropy;
use crate::report::Violation;

/// Checks the estimated entropy against the policy floor.
pub fn entropy_check(candidate: &PasswordCandidate<'_>, policy: &PolicyConfig) -> Option<Violation> {
    let observed_bits = entropy::nist_bits(candidate, policy);
    if observed_bits < policy.entropy_floor_bits {
        return Some(Violation::Entropy {
            observed_bits,
            required_bits: policy.entropy_floor_bits,
        });
    }
    None
}

/// Simulates a brute-force attack and checks the survival time floor.
///
/// Resolves the composite alphabet, ranks the password within the
/// attacker's enumeration, and converts the rank into whole days at the
/// policy's attack profile.
pub fn brute_force_check(
    candidate: &PasswordCandidate<'_>,
    policy: &PolicyConfig,
    ladder: &CharsetLadder,
) -> Option<Violation> {
    let alphabet = ladder.resolve(candidate.text());
    let attempts = brute::count_attempts(candidate.text(), alphabet);
    let observed_days = brute::days_to_crack(&attempts, policy.attack_profile);
    if observed_days < policy.brute_force_floor_days {
        return Some(Violation::BruteForce {
            observed_days,
            required_days: policy.brute_force_floor_days,
        });
    }
    None
}
