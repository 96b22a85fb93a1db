//! # Built-in Validators
//!
//! The crate's own validation rules over the enriched graph. Each rule has
//! the same shape: locate a precondition on the graph, compare, emit a
//! categorized [`crate::pipeline::ValidationFailure`]. Rules collect every
//! failure they find; nothing here throws or stops early.
//!
//! The taxonomy in diagnostics: placement errors (construct where it is not
//! allowed), reference errors (name does not resolve under the visibility
//! rule), cardinality errors (override/base flag mismatch), uniqueness errors
//! (duplicate name within a scope), and path errors (merge-directive paths).

pub mod extension_base;
pub mod extension_override;
pub mod extension_properties;
pub mod identity_rename;
pub mod merge_directive;
pub mod uniqueness;

#[cfg(test)]
mod tests;
