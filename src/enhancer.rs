//! # Built-in Enhancers
//!
//! The crate's own enrichment passes over the shared graph, in the phase
//! order [`crate::default_plugin::default_plugin`] registers them: base-class
//! wiring, referenced-entity resolution, shared-facet copying, identity and
//! queryable propagation, derived naming, and merge-directive resolution.
//!
//! Every pass here is total: missing or unresolved data is skipped, never an
//! error. Validators decide what incompleteness means.

pub mod base_class;
pub mod identity;
pub mod merge_directive;
pub mod naming;
pub mod reference;
pub mod shared_simple;

#[cfg(test)]
mod tests;
