//! Password strength evaluator - main evaluation logic.

use secrecy::{ExposeSecret, SecretString};

use crate::candidate::PasswordCandidate;
use crate::charset::CharsetLadder;
use crate::checks::{
    brute_force_check, composition_check, dictionary_check, entropy_check, expand_variants,
    identity_check, length_check,
};
use crate::config::{ConfigError, PolicyConfig};
use crate::dictionary::Dictionary;
use crate::leet::LeetMap;
use crate::report::{EvaluationMode, EvaluationReport, Violation};

/// Runs the configured rule set against passwords.
///
/// Construction validates the policy and freezes the configuration; after
/// that the evaluator is read-only, so one instance can serve concurrent
/// evaluations through `&self` without locking.
#[derive(Debug, Clone)]
pub struct Evaluator {
    policy: PolicyConfig,
    ladder: CharsetLadder,
    leet_map: LeetMap,
    dictionary: Option<Dictionary>,
}

impl Evaluator {
    /// Builds an evaluator from validated configuration.
    ///
    /// # Errors
    /// Fails fast on any policy threshold below its documented floor, and
    /// on an enabled dictionary lookup without a dictionary. No
    /// configuration error can surface later, at evaluation time.
    pub fn new(
        policy: PolicyConfig,
        ladder: CharsetLadder,
        leet_map: LeetMap,
        dictionary: Option<Dictionary>,
    ) -> Result<Self, ConfigError> {
        policy.validate()?;
        if policy.enable_dictionary_lookup && dictionary.is_none() {
            return Err(ConfigError::MissingDictionary);
        }
        Ok(Self {
            policy,
            ladder,
            leet_map,
            dictionary,
        })
    }

    /// Builds an evaluator with the default ladder and leet map.
    pub fn with_policy(
        policy: PolicyConfig,
        dictionary: Option<Dictionary>,
    ) -> Result<Self, ConfigError> {
        Self::new(
            policy,
            CharsetLadder::default(),
            LeetMap::default(),
            dictionary,
        )
    }

    pub fn policy(&self) -> &PolicyConfig {
        &self.policy
    }

    /// Evaluates one password against the rule set.
    ///
    /// Checks run in a fixed priority order, cheapest first: length,
    /// composition, entropy, brute-force time, dictionary membership,
    /// identity tokens. `FailFast` stops at the first violated rule;
    /// `CollectAll` runs everything and returns the full ordered list.
    ///
    /// # Arguments
    /// * `password` - The password to evaluate
    /// * `identity_tokens` - Case-insensitive tokens tied to the user
    ///   (username, birth year, names); empty slice skips the check
    /// * `mode` - Fail-fast or collect-all aggregation
    pub fn evaluate(
        &self,
        password: &SecretString,
        identity_tokens: &[&str],
        mode: EvaluationMode,
    ) -> EvaluationReport {
        #[cfg(feature = "tracing")]
        tracing::debug!("evaluation is about to start...");

        let pwd = password.expose_secret();
        let candidate = PasswordCandidate::new(pwd);
        let mut violations = Vec::new();

        violations.extend(length_check(&candidate, &self.policy));
        if mode == EvaluationMode::FailFast && !violations.is_empty() {
            return self.finish(violations);
        }

        violations.extend(composition_check(&candidate, &self.policy));
        if mode == EvaluationMode::FailFast && !violations.is_empty() {
            violations.truncate(1);
            return self.finish(violations);
        }

        violations.extend(entropy_check(&candidate, &self.policy));
        if mode == EvaluationMode::FailFast && !violations.is_empty() {
            return self.finish(violations);
        }

        violations.extend(brute_force_check(&candidate, &self.policy, &self.ladder));
        if mode == EvaluationMode::FailFast && !violations.is_empty() {
            return self.finish(violations);
        }

        let run_dictionary = self.policy.enable_dictionary_lookup;
        let run_identity = !identity_tokens.is_empty();
        if run_dictionary || run_identity {
            match expand_variants(&candidate, &self.policy, &self.leet_map) {
                Ok(variants) => {
                    if run_dictionary {
                        // Checked at construction: lookup enabled implies
                        // a dictionary is present.
                        if let Some(dictionary) = self.dictionary.as_ref() {
                            violations.extend(dictionary_check(&variants, dictionary));
                            if mode == EvaluationMode::FailFast && !violations.is_empty() {
                                return self.finish(violations);
                            }
                        }
                    }
                    if run_identity {
                        violations.extend(identity_check(&variants, identity_tokens));
                    }
                }
                Err(limit) => {
                    // Membership checks are inconclusive; conservatively
                    // treat the password as suspect.
                    #[cfg(feature = "tracing")]
                    tracing::warn!("leet expansion hit the cap of {} variants", limit.cap);
                    violations.push(Violation::ExpansionLimit { cap: limit.cap });
                }
            }
        }

        self.finish(violations)
    }

    fn finish(&self, violations: Vec<Violation>) -> EvaluationReport {
        #[cfg(feature = "tracing")]
        tracing::debug!("evaluation finished with {} violation(s)", violations.len());
        EvaluationReport { violations }
    }
}
