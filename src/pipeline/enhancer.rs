use crate::repository::ModelEnvironment;

/// The named phases of a plugin's enhancer list, in execution order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Phase {
    /// Base-class wiring and other structural prerequisites.
    Setup,
    /// Referenced-entity resolution and per-property derived data.
    PropertyAssignment,
    /// Identity and queryable-field propagation.
    IdentityPropagation,
    /// Merge-directive resolution and aggregate assembly.
    AggregateMerging,
    /// Derived data consumed by schema/type generators.
    TypeEmission,
    /// Ad-hoc fixups that remove or narrow previously derived data.
    Diminish,
}

/// Well-known names for the shared derived fields enhancers read and write.
///
/// Used in [`Enhancer::reads`]/[`Enhancer::writes`] declarations so the
/// registration-time ordering audit can match producers to consumers.
pub mod fields {
    /// Resolved base entity of extensions and subclasses.
    pub const BASE_ENTITY: &str = "base_entity";
    /// Resolved target of referential and shared-simple properties.
    pub const REFERENCED_ENTITY: &str = "referenced_entity";
    /// Facets copied from shared simple type definitions onto properties.
    pub const SHARED_FACETS: &str = "shared_facets";
    pub const IDENTITY_PROPERTIES: &str = "identity_properties";
    pub const QUERYABLE_FIELDS: &str = "queryable_fields";
    pub const FULL_PROPERTY_NAME: &str = "full_property_name";
    /// Resolved chains/terminals on merge directives, plus merged-property
    /// records and reverse links.
    pub const MERGE_DIRECTIVES_RESOLVED: &str = "merge_directives.resolved";
    pub const DOCUMENTATION: &str = "documentation";

    /// Fields the external builder populates before any enhancer runs. Reads
    /// of these are never flagged by the ordering audit.
    pub const BUILDER_PROVIDED: &[&str] = &[
        "properties",
        "base_entity_name",
        "cardinality",
        "identity_flags",
        "merge_directives.declared",
        DOCUMENTATION,
    ];
}

/// Outcome of one enhancer invocation, aggregated into the run report.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EnhancerResult {
    pub enhancer_name: String,
    pub success: bool,
}

impl EnhancerResult {
    pub fn success(enhancer_name: &str) -> Self {
        Self {
            enhancer_name: enhancer_name.to_owned(),
            success: true,
        }
    }

    pub fn failure(enhancer_name: &str) -> Self {
        Self {
            enhancer_name: enhancer_name.to_owned(),
            success: false,
        }
    }
}

pub type EnhanceFn = fn(&mut ModelEnvironment) -> EnhancerResult;

/// One unit of model enrichment.
///
/// Enhancers mutate the shared graph in place through `&mut`: derived fields
/// named in [`fields`] plus their own `data` bag regions. They never add or
/// remove entities, and they never report failures; dedicated validators
/// decide whether missing derived data is an error.
pub struct Enhancer {
    pub name: &'static str,
    pub phase: Phase,
    /// Derived fields this enhancer reads; must be written earlier in the
    /// list or builder-provided.
    pub reads: &'static [&'static str],
    /// Derived fields this enhancer writes.
    pub writes: &'static [&'static str],
    pub run: EnhanceFn,
}

impl std::fmt::Debug for Enhancer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Enhancer")
            .field("name", &self.name)
            .field("phase", &self.phase)
            .field("reads", &self.reads)
            .field("writes", &self.writes)
            .finish_non_exhaustive()
    }
}
