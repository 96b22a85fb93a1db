//! The property taxonomy: one sum type over all 24 declared property kinds.
//!
//! Kind-specific fields live in variant payloads so that adding a kind is a
//! compile-time-checked change: every `match` over [`PropertyKind`] or
//! [`PropertyType`] is exhaustive, and there are no runtime down-casts.

use smol_str::SmolStr;

use super::data_bag::DataBag;
use super::ids::{EntityId, NamespaceId, PropertyId};
use super::merge::{MergeDirective, MergedProperty};
use super::source_map::PropertySourceMap;

// ============================================================================
// DISCRIMINATOR
// ============================================================================

/// The fieldless discriminator over property kinds.
///
/// Used as the property-index bucket key, for merge-terminal comparison, and
/// by the [`is_referential_property`](PropertyType::is_referential_property) /
/// [`is_shared_property`](PropertyType::is_shared_property) classifiers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PropertyType {
    Association,
    Boolean,
    Choice,
    Common,
    Currency,
    Date,
    Datetime,
    Decimal,
    Descriptor,
    DomainEntity,
    Duration,
    Enumeration,
    InlineCommon,
    Integer,
    Percent,
    SchoolYearEnumeration,
    SharedDecimal,
    SharedInteger,
    SharedShort,
    SharedString,
    Short,
    String,
    Time,
    Year,
    /// Sentinel for an incompletely-built property. Must never reach the
    /// property index.
    Unknown,
}

impl PropertyType {
    /// Every real property kind, in bucket order. Excludes [`Unknown`](Self::Unknown).
    pub const ALL: [PropertyType; 24] = [
        PropertyType::Association,
        PropertyType::Boolean,
        PropertyType::Choice,
        PropertyType::Common,
        PropertyType::Currency,
        PropertyType::Date,
        PropertyType::Datetime,
        PropertyType::Decimal,
        PropertyType::Descriptor,
        PropertyType::DomainEntity,
        PropertyType::Duration,
        PropertyType::Enumeration,
        PropertyType::InlineCommon,
        PropertyType::Integer,
        PropertyType::Percent,
        PropertyType::SchoolYearEnumeration,
        PropertyType::SharedDecimal,
        PropertyType::SharedInteger,
        PropertyType::SharedShort,
        PropertyType::SharedString,
        PropertyType::Short,
        PropertyType::String,
        PropertyType::Time,
        PropertyType::Year,
    ];

    /// The eight kinds that reference another top-level entity.
    pub const REFERENTIAL: [PropertyType; 8] = [
        PropertyType::Association,
        PropertyType::Choice,
        PropertyType::Common,
        PropertyType::Descriptor,
        PropertyType::DomainEntity,
        PropertyType::Enumeration,
        PropertyType::InlineCommon,
        PropertyType::SchoolYearEnumeration,
    ];

    /// The four shared-simple-type kinds.
    pub const SHARED: [PropertyType; 4] = [
        PropertyType::SharedDecimal,
        PropertyType::SharedInteger,
        PropertyType::SharedShort,
        PropertyType::SharedString,
    ];

    /// Whether properties of this kind reference another top-level entity and
    /// are eligible for merge-directive resolution.
    pub fn is_referential_property(self) -> bool {
        Self::REFERENTIAL.contains(&self)
    }

    /// Whether properties of this kind reference a shared simple type
    /// definition.
    pub fn is_shared_property(self) -> bool {
        Self::SHARED.contains(&self)
    }

    /// The camel-case kind name as it appears in DSL diagnostics.
    pub fn as_str(self) -> &'static str {
        match self {
            PropertyType::Association => "association",
            PropertyType::Boolean => "boolean",
            PropertyType::Choice => "choice",
            PropertyType::Common => "common",
            PropertyType::Currency => "currency",
            PropertyType::Date => "date",
            PropertyType::Datetime => "datetime",
            PropertyType::Decimal => "decimal",
            PropertyType::Descriptor => "descriptor",
            PropertyType::DomainEntity => "domainEntity",
            PropertyType::Duration => "duration",
            PropertyType::Enumeration => "enumeration",
            PropertyType::InlineCommon => "inlineCommon",
            PropertyType::Integer => "integer",
            PropertyType::Percent => "percent",
            PropertyType::SchoolYearEnumeration => "schoolYearEnumeration",
            PropertyType::SharedDecimal => "sharedDecimal",
            PropertyType::SharedInteger => "sharedInteger",
            PropertyType::SharedShort => "sharedShort",
            PropertyType::SharedString => "sharedString",
            PropertyType::Short => "short",
            PropertyType::String => "string",
            PropertyType::Time => "time",
            PropertyType::Year => "year",
            PropertyType::Unknown => "unknown",
        }
    }
}

impl std::fmt::Display for PropertyType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

// ============================================================================
// VARIANT PAYLOADS
// ============================================================================

/// Numeric facets for decimal properties and shared decimal definitions.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DecimalFacets {
    pub total_digits: Option<u32>,
    pub decimal_places: Option<u32>,
    /// Source-literal bounds; kept textual to avoid precision loss.
    pub min_value: Option<SmolStr>,
    pub max_value: Option<SmolStr>,
}

/// Range facets for integer and short properties.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct IntegerFacets {
    pub min_value: Option<SmolStr>,
    pub max_value: Option<SmolStr>,
}

/// Length facets for string properties.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StringFacets {
    pub min_length: Option<u32>,
    pub max_length: Option<u32>,
}

/// Payload of the four shared-simple kinds: a link to the shared type
/// definition plus the facets copied from it during property assignment.
#[derive(Debug, Clone, Default)]
pub struct Shared<F> {
    pub referenced_entity: Option<EntityId>,
    pub facets: F,
}

/// Payload shared by the eight referential kinds.
#[derive(Debug, Default)]
pub struct Referential {
    /// The referenced top-level entity, resolved during property assignment.
    pub referenced_entity: Option<EntityId>,
    /// Merge directives declared on this property.
    pub merge_directives: Vec<MergeDirective>,
    /// Applied merges, appended by merge-directive resolution. Append-only and
    /// deduplicated.
    pub merged_properties: Vec<MergedProperty>,
}

// ============================================================================
// PROPERTY KIND
// ============================================================================

/// Kind plus kind-specific payload of a property.
#[derive(Debug, Default)]
pub enum PropertyKind {
    Boolean,
    Currency,
    Date,
    Datetime,
    Duration,
    Percent,
    Time,
    Year,
    Decimal(DecimalFacets),
    Integer(IntegerFacets),
    Short(IntegerFacets),
    String(StringFacets),
    SharedDecimal(Shared<DecimalFacets>),
    SharedInteger(Shared<IntegerFacets>),
    SharedShort(Shared<IntegerFacets>),
    SharedString(Shared<StringFacets>),
    Association {
        referential: Referential,
        is_weak: bool,
    },
    Choice(Referential),
    Common {
        referential: Referential,
        is_extension_override: bool,
    },
    Descriptor(Referential),
    DomainEntity {
        referential: Referential,
        is_weak: bool,
    },
    Enumeration(Referential),
    InlineCommon(Referential),
    SchoolYearEnumeration(Referential),
    /// Incompletely built. Rejected by the property index.
    #[default]
    Unknown,
}

impl PropertyKind {
    pub fn property_type(&self) -> PropertyType {
        match self {
            PropertyKind::Boolean => PropertyType::Boolean,
            PropertyKind::Currency => PropertyType::Currency,
            PropertyKind::Date => PropertyType::Date,
            PropertyKind::Datetime => PropertyType::Datetime,
            PropertyKind::Duration => PropertyType::Duration,
            PropertyKind::Percent => PropertyType::Percent,
            PropertyKind::Time => PropertyType::Time,
            PropertyKind::Year => PropertyType::Year,
            PropertyKind::Decimal(_) => PropertyType::Decimal,
            PropertyKind::Integer(_) => PropertyType::Integer,
            PropertyKind::Short(_) => PropertyType::Short,
            PropertyKind::String(_) => PropertyType::String,
            PropertyKind::SharedDecimal(_) => PropertyType::SharedDecimal,
            PropertyKind::SharedInteger(_) => PropertyType::SharedInteger,
            PropertyKind::SharedShort(_) => PropertyType::SharedShort,
            PropertyKind::SharedString(_) => PropertyType::SharedString,
            PropertyKind::Association { .. } => PropertyType::Association,
            PropertyKind::Choice(_) => PropertyType::Choice,
            PropertyKind::Common { .. } => PropertyType::Common,
            PropertyKind::Descriptor(_) => PropertyType::Descriptor,
            PropertyKind::DomainEntity { .. } => PropertyType::DomainEntity,
            PropertyKind::Enumeration(_) => PropertyType::Enumeration,
            PropertyKind::InlineCommon(_) => PropertyType::InlineCommon,
            PropertyKind::SchoolYearEnumeration(_) => PropertyType::SchoolYearEnumeration,
            PropertyKind::Unknown => PropertyType::Unknown,
        }
    }

    /// The referential payload, for the eight kinds that carry one.
    pub fn referential(&self) -> Option<&Referential> {
        match self {
            PropertyKind::Association { referential, .. }
            | PropertyKind::Common { referential, .. }
            | PropertyKind::DomainEntity { referential, .. }
            | PropertyKind::Choice(referential)
            | PropertyKind::Descriptor(referential)
            | PropertyKind::Enumeration(referential)
            | PropertyKind::InlineCommon(referential)
            | PropertyKind::SchoolYearEnumeration(referential) => Some(referential),
            _ => None,
        }
    }

    pub fn referential_mut(&mut self) -> Option<&mut Referential> {
        match self {
            PropertyKind::Association { referential, .. }
            | PropertyKind::Common { referential, .. }
            | PropertyKind::DomainEntity { referential, .. }
            | PropertyKind::Choice(referential)
            | PropertyKind::Descriptor(referential)
            | PropertyKind::Enumeration(referential)
            | PropertyKind::InlineCommon(referential)
            | PropertyKind::SchoolYearEnumeration(referential) => Some(referential),
            _ => None,
        }
    }

    /// The referenced entity of a referential or shared-simple property.
    pub fn referenced_entity(&self) -> Option<EntityId> {
        match self {
            PropertyKind::SharedDecimal(shared) => shared.referenced_entity,
            PropertyKind::SharedInteger(shared) | PropertyKind::SharedShort(shared) => {
                shared.referenced_entity
            }
            PropertyKind::SharedString(shared) => shared.referenced_entity,
            other => other.referential().and_then(|r| r.referenced_entity),
        }
    }

    /// Point a referential or shared-simple property at its resolved target.
    ///
    /// No-op for scalar kinds and [`Unknown`](Self::Unknown).
    pub fn set_referenced_entity(&mut self, entity: EntityId) {
        match self {
            PropertyKind::SharedDecimal(shared) => shared.referenced_entity = Some(entity),
            PropertyKind::SharedInteger(shared) | PropertyKind::SharedShort(shared) => {
                shared.referenced_entity = Some(entity)
            }
            PropertyKind::SharedString(shared) => shared.referenced_entity = Some(entity),
            other => {
                if let Some(referential) = other.referential_mut() {
                    referential.referenced_entity = Some(entity);
                }
            }
        }
    }
}

// ============================================================================
// CARDINALITY
// ============================================================================

/// The four nullability/collection flags, grouped for exact flag-for-flag
/// comparison between an extension override and its base property.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Cardinality {
    pub is_required: bool,
    pub is_optional: bool,
    pub is_required_collection: bool,
    pub is_optional_collection: bool,
}

impl Cardinality {
    pub fn is_collection(self) -> bool {
        self.is_required_collection || self.is_optional_collection
    }
}

// ============================================================================
// ENTITY PROPERTY
// ============================================================================

/// A typed field attached to a [`super::TopLevelEntity`].
#[derive(Debug)]
pub struct EntityProperty {
    pub kind: PropertyKind,
    pub name: SmolStr,
    pub documentation: String,
    /// The namespace the declaration appears in.
    pub namespace: NamespaceId,
    /// Back-reference to the owning entity; set when the property is attached.
    pub parent_entity: Option<EntityId>,

    pub is_part_of_identity: bool,
    pub is_identity_rename: bool,
    /// For identity renames: the base identity property being renamed away.
    pub base_key_name: Option<SmolStr>,
    pub is_required: bool,
    pub is_optional: bool,
    pub is_required_collection: bool,
    pub is_optional_collection: bool,
    pub is_queryable_only: bool,

    /// Disambiguating prefix for duplicate references to the same entity.
    pub with_context: Option<SmolStr>,
    pub has_restriction: bool,
    /// Overrides the declared name when resolving the referenced entity.
    pub referenced_type: Option<SmolStr>,
    /// Explicit `Namespace.Entity` qualification of the reference, if any.
    pub referenced_namespace_name: Option<SmolStr>,
    /// Derived: context prefix plus name. Empty until the naming phase runs.
    pub full_property_name: SmolStr,
    /// Reverse links from merge directives whose target terminal is this
    /// property.
    pub merge_targeted_by: Vec<PropertyId>,

    pub source_map: PropertySourceMap,
    pub data: DataBag,
}

impl EntityProperty {
    pub fn new(name: impl Into<SmolStr>, kind: PropertyKind, namespace: NamespaceId) -> Self {
        Self {
            kind,
            name: name.into(),
            documentation: String::new(),
            namespace,
            parent_entity: None,
            is_part_of_identity: false,
            is_identity_rename: false,
            base_key_name: None,
            is_required: false,
            is_optional: false,
            is_required_collection: false,
            is_optional_collection: false,
            is_queryable_only: false,
            with_context: None,
            has_restriction: false,
            referenced_type: None,
            referenced_namespace_name: None,
            full_property_name: SmolStr::default(),
            merge_targeted_by: Vec::new(),
            source_map: PropertySourceMap::default(),
            data: DataBag::new(),
        }
    }

    pub fn property_type(&self) -> PropertyType {
        self.kind.property_type()
    }

    pub fn cardinality(&self) -> Cardinality {
        Cardinality {
            is_required: self.is_required,
            is_optional: self.is_optional,
            is_required_collection: self.is_required_collection,
            is_optional_collection: self.is_optional_collection,
        }
    }

    /// The name used when resolving this property's reference: the declared
    /// type-name override when present, the property name otherwise.
    pub fn referenced_name(&self) -> &SmolStr {
        self.referenced_type.as_ref().unwrap_or(&self.name)
    }

    /// Whether `segment` of a merge-directive path names this property.
    ///
    /// Matches the derived full name when the naming phase has run, the
    /// declared name otherwise.
    pub fn matches_path_segment(&self, segment: &str) -> bool {
        if !self.full_property_name.is_empty() {
            self.full_property_name == segment
        } else {
            self.name == segment
        }
    }
}
