//! Composition check - required counts per character class.

use crate::candidate::PasswordCandidate;
use crate::config::PolicyConfig;
use crate::report::Violation;

/// Checks each character class against its required count.
///
/// A required count of 0 disables that class. Violations come back in a
/// fixed order: lowercase, uppercase, digits, symbols.
pub fn composition_check(
    candidate: &PasswordCandidate<'_>,
    policy: &PolicyConfig,
) -> Vec<Violation> {
    let mut violations = Vec::new();

    if candidate.lowercase() < policy.required_lowercase {
        violations.push(Violation::Lowercase {
            observed: candidate.lowercase(),
            required: policy.required_lowercase,
        });
    }
    if candidate.uppercase() < policy.required_uppercase {
        violations.push(Violation::Uppercase {
            observed: candidate.uppercase(),
            required: policy.required_uppercase,
        });
    }
    if candidate.digits() < policy.required_digits {
        violations.push(Violation::Digits {
            observed: candidate.digits(),
            required: policy.required_digits,
        });
    }
    if candidate.symbols() < policy.required_symbols {
        violations.push(Violation::Symbols {
            observed: candidate.symbols(),
            required: policy.required_symbols,
        });
    }

    violations
}
