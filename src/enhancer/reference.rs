//! Referenced-entity resolution for referential and shared-simple properties.
//!
//! One enhancer per property kind, mirroring the bucket layout of the
//! property index. Each resolves the property's declared target name (the
//! `referenced_type` override when present) against the kind-specific entity
//! kinds, scanning the property namespace's chain. An explicit
//! `Namespace.Entity` qualification restricts the scan to the named
//! namespace, and only if that namespace is actually visible from the chain,
//! so a core property can never reach into an extension.

use crate::model::{EntityId, ModelType, NamespaceId, PropertyId, PropertyType};
use crate::pipeline::EnhancerResult;
use crate::repository::ModelEnvironment;

fn resolve_references(
    env: &mut ModelEnvironment,
    property_type: PropertyType,
    target_kinds: &[ModelType],
) {
    let properties: Vec<PropertyId> = env.properties_of_type(&[property_type]);
    for property_id in properties {
        let Some(property) = env.property(property_id) else {
            continue;
        };
        if property.kind.referenced_entity().is_some() {
            continue;
        }
        let name = property.referenced_name().clone();
        let mut chain: Vec<NamespaceId> = env.namespace_chain(property.namespace);
        if let Some(qualifier) = property.referenced_namespace_name.clone() {
            chain.retain(|&ns| {
                env.namespace(ns)
                    .is_some_and(|n| n.namespace_name == qualifier)
            });
        }
        let resolved: Option<EntityId> = env.find_entity_of_types_in_chain(&name, target_kinds, &chain);
        if let (Some(target), Some(property)) = (resolved, env.property_mut(property_id)) {
            property.kind.set_referenced_entity(target);
        }
    }
}

pub const ASSOCIATION_REFERENCE_ENHANCER: &str = "AssociationReferenceEnhancer";

pub fn association_reference(env: &mut ModelEnvironment) -> EnhancerResult {
    resolve_references(
        env,
        PropertyType::Association,
        &[ModelType::Association, ModelType::AssociationSubclass],
    );
    EnhancerResult::success(ASSOCIATION_REFERENCE_ENHANCER)
}

pub const CHOICE_REFERENCE_ENHANCER: &str = "ChoiceReferenceEnhancer";

pub fn choice_reference(env: &mut ModelEnvironment) -> EnhancerResult {
    resolve_references(env, PropertyType::Choice, &[ModelType::Choice]);
    EnhancerResult::success(CHOICE_REFERENCE_ENHANCER)
}

pub const COMMON_REFERENCE_ENHANCER: &str = "CommonReferenceEnhancer";

pub fn common_reference(env: &mut ModelEnvironment) -> EnhancerResult {
    resolve_references(env, PropertyType::Common, &[ModelType::Common]);
    EnhancerResult::success(COMMON_REFERENCE_ENHANCER)
}

pub const DESCRIPTOR_REFERENCE_ENHANCER: &str = "DescriptorReferenceEnhancer";

pub fn descriptor_reference(env: &mut ModelEnvironment) -> EnhancerResult {
    resolve_references(env, PropertyType::Descriptor, &[ModelType::Descriptor]);
    EnhancerResult::success(DESCRIPTOR_REFERENCE_ENHANCER)
}

pub const DOMAIN_ENTITY_REFERENCE_ENHANCER: &str = "DomainEntityReferenceEnhancer";

pub fn domain_entity_reference(env: &mut ModelEnvironment) -> EnhancerResult {
    resolve_references(
        env,
        PropertyType::DomainEntity,
        &[ModelType::DomainEntity, ModelType::DomainEntitySubclass],
    );
    EnhancerResult::success(DOMAIN_ENTITY_REFERENCE_ENHANCER)
}

pub const ENUMERATION_REFERENCE_ENHANCER: &str = "EnumerationReferenceEnhancer";

pub fn enumeration_reference(env: &mut ModelEnvironment) -> EnhancerResult {
    resolve_references(env, PropertyType::Enumeration, &[ModelType::Enumeration]);
    EnhancerResult::success(ENUMERATION_REFERENCE_ENHANCER)
}

pub const INLINE_COMMON_REFERENCE_ENHANCER: &str = "InlineCommonReferenceEnhancer";

pub fn inline_common_reference(env: &mut ModelEnvironment) -> EnhancerResult {
    resolve_references(env, PropertyType::InlineCommon, &[ModelType::Common]);
    EnhancerResult::success(INLINE_COMMON_REFERENCE_ENHANCER)
}

pub const SCHOOL_YEAR_ENUMERATION_REFERENCE_ENHANCER: &str =
    "SchoolYearEnumerationReferenceEnhancer";

pub fn school_year_enumeration_reference(env: &mut ModelEnvironment) -> EnhancerResult {
    resolve_references(
        env,
        PropertyType::SchoolYearEnumeration,
        &[ModelType::SchoolYearEnumeration],
    );
    EnhancerResult::success(SCHOOL_YEAR_ENUMERATION_REFERENCE_ENHANCER)
}

pub const SHARED_DECIMAL_REFERENCE_ENHANCER: &str = "SharedDecimalReferenceEnhancer";

pub fn shared_decimal_reference(env: &mut ModelEnvironment) -> EnhancerResult {
    resolve_references(env, PropertyType::SharedDecimal, &[ModelType::SharedDecimal]);
    EnhancerResult::success(SHARED_DECIMAL_REFERENCE_ENHANCER)
}

pub const SHARED_INTEGER_REFERENCE_ENHANCER: &str = "SharedIntegerReferenceEnhancer";

pub fn shared_integer_reference(env: &mut ModelEnvironment) -> EnhancerResult {
    resolve_references(env, PropertyType::SharedInteger, &[ModelType::SharedInteger]);
    EnhancerResult::success(SHARED_INTEGER_REFERENCE_ENHANCER)
}

pub const SHARED_SHORT_REFERENCE_ENHANCER: &str = "SharedShortReferenceEnhancer";

/// Shared shorts are declared against shared integer definitions; there is no
/// separate shared-short entity kind.
pub fn shared_short_reference(env: &mut ModelEnvironment) -> EnhancerResult {
    resolve_references(env, PropertyType::SharedShort, &[ModelType::SharedInteger]);
    EnhancerResult::success(SHARED_SHORT_REFERENCE_ENHANCER)
}

pub const SHARED_STRING_REFERENCE_ENHANCER: &str = "SharedStringReferenceEnhancer";

pub fn shared_string_reference(env: &mut ModelEnvironment) -> EnhancerResult {
    resolve_references(env, PropertyType::SharedString, &[ModelType::SharedString]);
    EnhancerResult::success(SHARED_STRING_REFERENCE_ENHANCER)
}
