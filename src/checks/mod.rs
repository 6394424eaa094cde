//! Password evaluation checks
//!
//! Each check compares one aspect of the candidate against the policy and
//! reports violations as data. The evaluator owns the ordering and the
//! fail-fast/collect-all aggregation.

mod composition;
mod length;
mod membership;
mod strength;

pub use composition::composition_check;
pub use length::length_check;
pub use membership::{dictionary_check, expand_variants, identity_check};
pub use strength::{brute_force_check, entropy_check};
