//! Length check - minimum and maximum password length.

use crate::candidate::PasswordCandidate;
use crate::config::PolicyConfig;
use crate::report::Violation;

/// Checks the candidate's character length against the policy bounds.
///
/// # Returns
/// - `Some(violation)` if the password is too short or too long
/// - `None` if the length is within bounds
pub fn length_check(candidate: &PasswordCandidate<'_>, policy: &PolicyConfig) -> Option<Violation> {
    let observed = candidate.length();
    if observed < policy.min_length {
        return Some(Violation::TooShort {
            observed,
            required: policy.min_length,
        });
    }
    if observed > policy.max_length {
        return Some(Violation::TooLong {
            observed,
            allowed: policy.max_length,
        });
    }
    None
}
