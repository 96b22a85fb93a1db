//! # dml-core
//!
//! Core library for the DML data-modeling language: the semantic metamodel,
//! cross-namespace resolution, and the enhancer pipeline that enriches a
//! built model in place.
//!
//! Parsing, model building, and artifact generation live in external layers;
//! this crate consumes an already-built graph and produces the same graph
//! enriched, plus a run report of enhancer results and validation failures.
//!
//! ## Module Structure (dependency order)
//!
//! ```text
//! default_plugin → the crate's own enhancer/validator rosters
//!   ↓
//! enhancer,      → built-in enrichment passes and validation rules
//! validator
//!   ↓
//! pipeline       → Enhancer/Validator/Plugin contracts, phases, driver
//!   ↓
//! repository     → ModelEnvironment arenas, property index, path walking
//!   ↓
//! model          → Namespace, TopLevelEntity, EntityProperty, merge types
//! ```

// ============================================================================
// MODULES (dependency order: model → repository → pipeline → rules)
// ============================================================================

/// Metamodel types: namespaces, entities, the property taxonomy, merges
pub mod model;

/// The shared graph: arenas, chain lookup, property index, path resolution
pub mod repository;

/// Pipeline contracts: phases, plugins, the ordering audit, the driver
pub mod pipeline;

/// Built-in enhancers: base classes, references, identity, merges, naming
pub mod enhancer;

/// Built-in validators: extension, identity-rename, uniqueness, path rules
pub mod validator;

/// The default plugin assembling the built-in rosters in hand order
pub mod default_plugin;

// Re-export the surface an external builder/driver needs
pub use default_plugin::default_plugin;
pub use model::{
    EntityId, EntityProperty, ModelType, Namespace, NamespaceId, PropertyId, PropertyKind,
    PropertyType, TopLevelEntity,
};
pub use pipeline::{EnhancerResult, Plugin, RunReport, ValidationFailure, run_pipeline};
pub use repository::{ModelEnvironment, ModelError};
