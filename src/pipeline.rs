//! # Enhancer Pipeline
//!
//! The execution discipline every plugin follows: a hand-ordered list of
//! enhancers grouped into named phases, run strictly in order once per
//! compilation run, followed by the plugin's validators.
//!
//! There is no automatic dependency graph between enhancers; correctness
//! depends entirely on list order. What the pipeline adds over a bare list is
//! a registration-time audit: enhancers declare the shared derived fields
//! they read and write, and a read of a field no earlier enhancer writes is
//! flagged (and logged) when the plugin is assembled.

mod driver;
mod enhancer;
mod plugin;
mod validator;

pub use driver::{RunReport, run_enhancers, run_pipeline, run_validators};
pub use enhancer::{EnhanceFn, Enhancer, EnhancerResult, Phase, fields};
pub use plugin::{OrderingIssue, OrderingIssueKind, Plugin};
pub use validator::{FailureCategory, ValidateFn, ValidationFailure, Validator};

#[cfg(test)]
mod tests;
