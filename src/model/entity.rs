//! Top-level entities and their kind discriminator.

use smol_str::SmolStr;

use super::data_bag::DataBag;
use super::ids::{EntityId, NamespaceId, PropertyId};
use super::property::{DecimalFacets, IntegerFacets, StringFacets};
use super::source_map::SourceLocation;

/// The kind of a top-level entity declaration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ModelType {
    Association,
    AssociationExtension,
    AssociationSubclass,
    Choice,
    Common,
    CommonExtension,
    Descriptor,
    DomainEntity,
    DomainEntityExtension,
    DomainEntitySubclass,
    Enumeration,
    SchoolYearEnumeration,
    SharedDecimal,
    SharedInteger,
    SharedString,
}

impl ModelType {
    pub const ALL: [ModelType; 15] = [
        ModelType::Association,
        ModelType::AssociationExtension,
        ModelType::AssociationSubclass,
        ModelType::Choice,
        ModelType::Common,
        ModelType::CommonExtension,
        ModelType::Descriptor,
        ModelType::DomainEntity,
        ModelType::DomainEntityExtension,
        ModelType::DomainEntitySubclass,
        ModelType::Enumeration,
        ModelType::SchoolYearEnumeration,
        ModelType::SharedDecimal,
        ModelType::SharedInteger,
        ModelType::SharedString,
    ];

    /// Kinds that extend or subclass another entity and carry a base
    /// reference.
    pub const WITH_BASE: [ModelType; 5] = [
        ModelType::AssociationExtension,
        ModelType::AssociationSubclass,
        ModelType::CommonExtension,
        ModelType::DomainEntityExtension,
        ModelType::DomainEntitySubclass,
    ];

    /// Extension kinds (add to an existing entity rather than subclass it).
    pub const EXTENSIONS: [ModelType; 3] = [
        ModelType::AssociationExtension,
        ModelType::CommonExtension,
        ModelType::DomainEntityExtension,
    ];

    pub fn is_extension(self) -> bool {
        Self::EXTENSIONS.contains(&self)
    }

    pub fn is_subclass(self) -> bool {
        matches!(
            self,
            ModelType::AssociationSubclass | ModelType::DomainEntitySubclass
        )
    }

    pub fn as_str(self) -> &'static str {
        match self {
            ModelType::Association => "association",
            ModelType::AssociationExtension => "associationExtension",
            ModelType::AssociationSubclass => "associationSubclass",
            ModelType::Choice => "choice",
            ModelType::Common => "common",
            ModelType::CommonExtension => "commonExtension",
            ModelType::Descriptor => "descriptor",
            ModelType::DomainEntity => "domainEntity",
            ModelType::DomainEntityExtension => "domainEntityExtension",
            ModelType::DomainEntitySubclass => "domainEntitySubclass",
            ModelType::Enumeration => "enumeration",
            ModelType::SchoolYearEnumeration => "schoolYearEnumeration",
            ModelType::SharedDecimal => "sharedDecimal",
            ModelType::SharedInteger => "sharedInteger",
            ModelType::SharedString => "sharedString",
        }
    }
}

impl std::fmt::Display for ModelType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Facets carried by shared simple type definitions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SimpleFacets {
    Decimal(DecimalFacets),
    Integer(IntegerFacets),
    String(StringFacets),
}

/// A declared entity: domain entity, association, common, descriptor,
/// enumeration, shared simple type, or one of their extension/subclass forms.
///
/// Created by the external builder. `identity_properties`, `queryable_fields`,
/// and `base_entity` are derived by enhancers; identity (kind, name,
/// namespace) never changes once built.
#[derive(Debug)]
pub struct TopLevelEntity {
    pub model_type: ModelType,
    pub name: SmolStr,
    pub namespace: NamespaceId,
    pub documentation: String,
    /// Declared properties, in declaration order.
    pub properties: Vec<PropertyId>,
    /// Derived natural key, including propagated and flattened identities.
    pub identity_properties: Vec<PropertyId>,
    /// Derived queryable fields, including those inherited from the base.
    pub queryable_fields: Vec<PropertyId>,
    /// Declared base reference for extension/subclass kinds.
    pub base_entity_name: Option<SmolStr>,
    /// Resolved base, filled by the setup phase.
    pub base_entity: Option<EntityId>,
    /// Facets of shared simple type definitions.
    pub simple_facets: Option<SimpleFacets>,
    pub source_map: SourceLocation,
    pub data: DataBag,
}

impl TopLevelEntity {
    pub fn new(model_type: ModelType, name: impl Into<SmolStr>, namespace: NamespaceId) -> Self {
        Self {
            model_type,
            name: name.into(),
            namespace,
            documentation: String::new(),
            properties: Vec::new(),
            identity_properties: Vec::new(),
            queryable_fields: Vec::new(),
            base_entity_name: None,
            base_entity: None,
            simple_facets: None,
            source_map: SourceLocation::default(),
            data: DataBag::new(),
        }
    }

    pub fn with_base(
        model_type: ModelType,
        name: impl Into<SmolStr>,
        namespace: NamespaceId,
        base_entity_name: impl Into<SmolStr>,
    ) -> Self {
        let mut entity = Self::new(model_type, name, namespace);
        entity.base_entity_name = Some(base_entity_name.into());
        entity
    }
}
