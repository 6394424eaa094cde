//! Password strength evaluation library
//!
//! Grades passwords by simulating an offline brute-force attacker and
//! estimating NIST-style information entropy, then compares both against a
//! configurable policy. Checks run in priority order: length, character
//! composition, entropy, simulated brute-force time, common-password
//! dictionary membership and identity-token membership, the last two
//! through a bounded leetspeak expansion.
//!
//! # Features
//!
//! - `tracing`: Enables logging via tracing crate
//!
//! # Environment Variables
//!
//! - `BRUTUS_DICTIONARY_PATH`: Custom path to the common-password file
//!   (default: `./assets/dictionary.txt`)
//!
//! # Example
//!
//! ```rust
//! use brutus::{Dictionary, EvaluationMode, Evaluator, PolicyConfig};
//! use secrecy::SecretString;
//!
//! let dictionary = Dictionary::from_words(["password", "123456", "qwerty"]);
//! let evaluator = Evaluator::with_policy(PolicyConfig::default(), Some(dictionary))
//!     .expect("valid policy");
//!
//! let password = SecretString::new("Chr!$70ph3r_P@$$w0Rd".to_string().into());
//! let report = evaluator.evaluate(&password, &["chris", "1492"], EvaluationMode::CollectAll);
//!
//! println!("passed: {}", report.passed());
//! for violation in &report.violations {
//!     println!("{:?}", violation);
//! }
//! ```

// Internal modules
mod candidate;
mod checks;
mod evaluator;

// Engine modules
pub mod brute;
pub mod charset;
pub mod config;
pub mod dictionary;
pub mod entropy;
pub mod leet;
pub mod report;

// Public API
pub use brute::AttackProfile;
pub use candidate::PasswordCandidate;
pub use charset::CharsetLadder;
pub use config::{ConfigError, PolicyConfig};
pub use dictionary::{Dictionary, DictionaryError};
pub use evaluator::Evaluator;
pub use leet::{ExpansionLimitExceeded, LeetMap};
pub use report::{EvaluationMode, EvaluationReport, RuleKind, Violation};
