//! # Model Repository
//!
//! Arena ownership and all read access to the shared graph:
//! [`ModelEnvironment`] (the single owner of every namespace, entity, and
//! property in a compilation run), the visibility-respecting cross-namespace
//! entity lookup, the kind-bucketed [`PropertyIndex`], and the dotted
//! property-path walker used by merge-directive resolution.
//!
//! The environment is exclusively owned by the in-progress run. The enhancer
//! driver threads `&mut ModelEnvironment` through one enhancer at a time, so
//! the single-writer discipline is enforced by the borrow checker rather than
//! by locks.

mod environment;
mod property_index;
mod property_path;

pub use environment::{ModelEnvironment, ModelError};
pub use property_index::PropertyIndex;
pub use property_path::{PathResolution, resolve_property_path};

#[cfg(test)]
mod tests;
