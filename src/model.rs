//! # Semantic Metamodel
//!
//! The in-memory model a DML compilation run operates on: namespaces holding
//! top-level entities, entities holding typed properties, and the merge
//! directives declared on referential properties.
//!
//! The graph is arena-backed: [`crate::repository::ModelEnvironment`] owns
//! every node, and all cross-references are typed arena ids ([`NamespaceId`],
//! [`EntityId`], [`PropertyId`]). Comparing two ids compares node identity,
//! never names.

mod data_bag;
mod entity;
mod ids;
mod merge;
mod namespace;
mod property;
mod source_map;

pub use data_bag::DataBag;
pub use entity::{ModelType, SimpleFacets, TopLevelEntity};
pub use ids::{EntityId, NamespaceId, PropertyId};
pub use merge::{MergeDirective, MergedProperty};
pub use namespace::Namespace;
pub use property::{
    Cardinality, DecimalFacets, EntityProperty, IntegerFacets, PropertyKind, PropertyType,
    Referential, Shared, StringFacets,
};
pub use source_map::{PropertySourceMap, SourceLocation};
