//! # Default Plugin
//!
//! The crate's own enhancer and validator rosters, assembled in hand order.
//! List order is the correctness contract (see [`crate::pipeline::Plugin`]);
//! each phase group below depends on fields written by the groups above it.

use crate::enhancer::{base_class, identity, merge_directive, naming, reference, shared_simple};
use crate::pipeline::{Enhancer, Phase, Plugin, Validator, fields};
use crate::validator::{
    extension_base, extension_override, extension_properties, identity_rename,
    merge_directive as merge_directive_rules, uniqueness,
};

pub const DEFAULT_PLUGIN_NAME: &str = "dmlCore";

/// The built-in plugin.
pub fn default_plugin() -> Plugin {
    Plugin::new(DEFAULT_PLUGIN_NAME, default_enhancers(), default_validators())
}

/// The built-in enhancer list, grouped by phase.
pub fn default_enhancers() -> Vec<Enhancer> {
    vec![
        // Setup: wire base entities for the extension and subclass kinds.
        Enhancer {
            name: base_class::ASSOCIATION_EXTENSION_BASE_CLASS_ENHANCER,
            phase: Phase::Setup,
            reads: &[],
            writes: &[fields::BASE_ENTITY],
            run: base_class::association_extension_base_class,
        },
        Enhancer {
            name: base_class::ASSOCIATION_SUBCLASS_BASE_CLASS_ENHANCER,
            phase: Phase::Setup,
            reads: &[],
            writes: &[fields::BASE_ENTITY],
            run: base_class::association_subclass_base_class,
        },
        Enhancer {
            name: base_class::COMMON_EXTENSION_BASE_CLASS_ENHANCER,
            phase: Phase::Setup,
            reads: &[],
            writes: &[fields::BASE_ENTITY],
            run: base_class::common_extension_base_class,
        },
        Enhancer {
            name: base_class::DOMAIN_ENTITY_EXTENSION_BASE_CLASS_ENHANCER,
            phase: Phase::Setup,
            reads: &[],
            writes: &[fields::BASE_ENTITY],
            run: base_class::domain_entity_extension_base_class,
        },
        Enhancer {
            name: base_class::DOMAIN_ENTITY_SUBCLASS_BASE_CLASS_ENHANCER,
            phase: Phase::Setup,
            reads: &[],
            writes: &[fields::BASE_ENTITY],
            run: base_class::domain_entity_subclass_base_class,
        },
        // Property assignment: resolve what each property points at.
        Enhancer {
            name: reference::ASSOCIATION_REFERENCE_ENHANCER,
            phase: Phase::PropertyAssignment,
            reads: &[],
            writes: &[fields::REFERENCED_ENTITY],
            run: reference::association_reference,
        },
        Enhancer {
            name: reference::CHOICE_REFERENCE_ENHANCER,
            phase: Phase::PropertyAssignment,
            reads: &[],
            writes: &[fields::REFERENCED_ENTITY],
            run: reference::choice_reference,
        },
        Enhancer {
            name: reference::COMMON_REFERENCE_ENHANCER,
            phase: Phase::PropertyAssignment,
            reads: &[],
            writes: &[fields::REFERENCED_ENTITY],
            run: reference::common_reference,
        },
        Enhancer {
            name: reference::DESCRIPTOR_REFERENCE_ENHANCER,
            phase: Phase::PropertyAssignment,
            reads: &[],
            writes: &[fields::REFERENCED_ENTITY],
            run: reference::descriptor_reference,
        },
        Enhancer {
            name: reference::DOMAIN_ENTITY_REFERENCE_ENHANCER,
            phase: Phase::PropertyAssignment,
            reads: &[],
            writes: &[fields::REFERENCED_ENTITY],
            run: reference::domain_entity_reference,
        },
        Enhancer {
            name: reference::ENUMERATION_REFERENCE_ENHANCER,
            phase: Phase::PropertyAssignment,
            reads: &[],
            writes: &[fields::REFERENCED_ENTITY],
            run: reference::enumeration_reference,
        },
        Enhancer {
            name: reference::INLINE_COMMON_REFERENCE_ENHANCER,
            phase: Phase::PropertyAssignment,
            reads: &[],
            writes: &[fields::REFERENCED_ENTITY],
            run: reference::inline_common_reference,
        },
        Enhancer {
            name: reference::SCHOOL_YEAR_ENUMERATION_REFERENCE_ENHANCER,
            phase: Phase::PropertyAssignment,
            reads: &[],
            writes: &[fields::REFERENCED_ENTITY],
            run: reference::school_year_enumeration_reference,
        },
        Enhancer {
            name: reference::SHARED_DECIMAL_REFERENCE_ENHANCER,
            phase: Phase::PropertyAssignment,
            reads: &[],
            writes: &[fields::REFERENCED_ENTITY],
            run: reference::shared_decimal_reference,
        },
        Enhancer {
            name: reference::SHARED_INTEGER_REFERENCE_ENHANCER,
            phase: Phase::PropertyAssignment,
            reads: &[],
            writes: &[fields::REFERENCED_ENTITY],
            run: reference::shared_integer_reference,
        },
        Enhancer {
            name: reference::SHARED_SHORT_REFERENCE_ENHANCER,
            phase: Phase::PropertyAssignment,
            reads: &[],
            writes: &[fields::REFERENCED_ENTITY],
            run: reference::shared_short_reference,
        },
        Enhancer {
            name: reference::SHARED_STRING_REFERENCE_ENHANCER,
            phase: Phase::PropertyAssignment,
            reads: &[],
            writes: &[fields::REFERENCED_ENTITY],
            run: reference::shared_string_reference,
        },
        // Shared-facet copying runs after the shared references resolve.
        Enhancer {
            name: shared_simple::SHARED_DECIMAL_PROPERTY_ENHANCER,
            phase: Phase::PropertyAssignment,
            reads: &[fields::REFERENCED_ENTITY],
            writes: &[fields::SHARED_FACETS],
            run: shared_simple::shared_decimal_property,
        },
        Enhancer {
            name: shared_simple::SHARED_INTEGER_PROPERTY_ENHANCER,
            phase: Phase::PropertyAssignment,
            reads: &[fields::REFERENCED_ENTITY],
            writes: &[fields::SHARED_FACETS],
            run: shared_simple::shared_integer_property,
        },
        Enhancer {
            name: shared_simple::SHARED_STRING_PROPERTY_ENHANCER,
            phase: Phase::PropertyAssignment,
            reads: &[fields::REFERENCED_ENTITY],
            writes: &[fields::SHARED_FACETS],
            run: shared_simple::shared_string_property,
        },
        // Identity propagation.
        Enhancer {
            name: identity::SUBCLASS_IDENTITY_ENHANCER,
            phase: Phase::IdentityPropagation,
            reads: &[fields::BASE_ENTITY],
            writes: &[fields::IDENTITY_PROPERTIES],
            run: identity::subclass_identity,
        },
        Enhancer {
            name: identity::INLINE_IDENTITY_ENHANCER,
            phase: Phase::IdentityPropagation,
            reads: &[fields::REFERENCED_ENTITY, fields::IDENTITY_PROPERTIES],
            writes: &[fields::IDENTITY_PROPERTIES],
            run: identity::inline_identity,
        },
        Enhancer {
            name: identity::SUBCLASS_QUERYABLE_ENHANCER,
            phase: Phase::IdentityPropagation,
            reads: &[fields::BASE_ENTITY],
            writes: &[fields::QUERYABLE_FIELDS],
            run: identity::subclass_queryable,
        },
        // Aggregate merging.
        Enhancer {
            name: naming::FULL_PROPERTY_NAME_ENHANCER,
            phase: Phase::AggregateMerging,
            reads: &[],
            writes: &[fields::FULL_PROPERTY_NAME],
            run: naming::full_property_name,
        },
        Enhancer {
            name: merge_directive::MERGE_DIRECTIVE_ENHANCER,
            phase: Phase::AggregateMerging,
            reads: &[fields::REFERENCED_ENTITY, fields::FULL_PROPERTY_NAME],
            writes: &[fields::MERGE_DIRECTIVES_RESOLVED],
            run: merge_directive::merge_directive,
        },
        // Type emission.
        Enhancer {
            name: naming::INHERITED_DOCUMENTATION_COPYING_ENHANCER,
            phase: Phase::TypeEmission,
            reads: &[fields::BASE_ENTITY, fields::DOCUMENTATION],
            writes: &[fields::DOCUMENTATION],
            run: naming::inherited_documentation_copying,
        },
        // Diminish: none in the default list.
    ]
}

/// The built-in validator list.
pub fn default_validators() -> Vec<Validator> {
    vec![
        Validator {
            name: extension_base::EXTENSION_BASE_MUST_RESOLVE,
            run: extension_base::extension_base_must_resolve,
        },
        Validator {
            name: extension_base::EXTENSION_MUST_NOT_BE_IN_BASE_NAMESPACE,
            run: extension_base::extension_must_not_be_in_base_namespace,
        },
        Validator {
            name: extension_properties::EXTENSION_MUST_NOT_ADD_REQUIRED_PROPERTIES,
            run: extension_properties::extension_must_not_add_required_properties,
        },
        Validator {
            name: extension_properties::EXTENSION_MUST_NOT_REDECLARE_BASE_PROPERTIES,
            run: extension_properties::extension_must_not_redeclare_base_properties,
        },
        Validator {
            name: extension_override::COMMON_EXTENSION_OVERRIDE,
            run: extension_override::common_extension_override,
        },
        Validator {
            name: identity_rename::IDENTITY_RENAME_MUST_MATCH_BASE_IDENTITY,
            run: identity_rename::identity_rename_must_match_base_identity,
        },
        Validator {
            name: identity_rename::IDENTITY_RENAME_AT_MOST_ONCE,
            run: identity_rename::identity_rename_at_most_once,
        },
        Validator {
            name: uniqueness::MOST_ENTITIES_CANNOT_HAVE_SAME_NAME,
            run: uniqueness::most_entities_cannot_have_same_name,
        },
        Validator {
            name: merge_directive_rules::SOURCE_PATH_MUST_EXIST,
            run: merge_directive_rules::source_property_path_must_exist,
        },
        Validator {
            name: merge_directive_rules::TARGET_PATH_MUST_EXIST,
            run: merge_directive_rules::target_property_path_must_exist,
        },
        Validator {
            name: merge_directive_rules::PATH_MUST_START_WITH_DECLARED_PROPERTY,
            run: merge_directive_rules::path_must_start_with_declared_property,
        },
        Validator {
            name: merge_directive_rules::SOURCE_AND_TARGET_MUST_MATCH,
            run: merge_directive_rules::source_and_target_property_must_match,
        },
    ]
}
