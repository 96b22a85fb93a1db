//! Facet copying from shared simple type definitions onto the properties
//! that reference them.
//!
//! Runs after shared-reference resolution. A property with an unresolved
//! reference, or a reference to a definition carrying no facets, keeps its
//! default facets.

use crate::model::{PropertyId, PropertyKind, PropertyType, SimpleFacets};
use crate::pipeline::EnhancerResult;
use crate::repository::ModelEnvironment;

fn referenced_facets(env: &ModelEnvironment, property_id: PropertyId) -> Option<SimpleFacets> {
    let referenced = env
        .property(property_id)
        .and_then(|p| p.kind.referenced_entity())?;
    env.entity(referenced)?.simple_facets.clone()
}

pub const SHARED_DECIMAL_PROPERTY_ENHANCER: &str = "SharedDecimalPropertyEnhancer";

pub fn shared_decimal_property(env: &mut ModelEnvironment) -> EnhancerResult {
    for property_id in env.properties_of_type(&[PropertyType::SharedDecimal]) {
        if let Some(SimpleFacets::Decimal(facets)) = referenced_facets(env, property_id)
            && let Some(property) = env.property_mut(property_id)
            && let PropertyKind::SharedDecimal(shared) = &mut property.kind
        {
            shared.facets = facets;
        }
    }
    EnhancerResult::success(SHARED_DECIMAL_PROPERTY_ENHANCER)
}

pub const SHARED_INTEGER_PROPERTY_ENHANCER: &str = "SharedIntegerPropertyEnhancer";

/// Covers shared integer and shared short properties; both reference shared
/// integer definitions.
pub fn shared_integer_property(env: &mut ModelEnvironment) -> EnhancerResult {
    let ids = env.properties_of_type(&[PropertyType::SharedInteger, PropertyType::SharedShort]);
    for property_id in ids {
        if let Some(SimpleFacets::Integer(facets)) = referenced_facets(env, property_id)
            && let Some(property) = env.property_mut(property_id)
        {
            match &mut property.kind {
                PropertyKind::SharedInteger(shared) | PropertyKind::SharedShort(shared) => {
                    shared.facets = facets;
                }
                _ => {}
            }
        }
    }
    EnhancerResult::success(SHARED_INTEGER_PROPERTY_ENHANCER)
}

pub const SHARED_STRING_PROPERTY_ENHANCER: &str = "SharedStringPropertyEnhancer";

pub fn shared_string_property(env: &mut ModelEnvironment) -> EnhancerResult {
    for property_id in env.properties_of_type(&[PropertyType::SharedString]) {
        if let Some(SimpleFacets::String(facets)) = referenced_facets(env, property_id)
            && let Some(property) = env.property_mut(property_id)
            && let PropertyKind::SharedString(shared) = &mut property.kind
        {
            shared.facets = facets;
        }
    }
    EnhancerResult::success(SHARED_STRING_PROPERTY_ENHANCER)
}
