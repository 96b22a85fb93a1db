//! Derived naming and documentation inheritance.

use crate::model::EntityId;
use crate::pipeline::EnhancerResult;
use crate::repository::ModelEnvironment;

pub const FULL_PROPERTY_NAME_ENHANCER: &str = "FullPropertyNameEnhancer";

/// Derive each property's full name: the `with context` prefix prepended to
/// the declared name, unless the prefix is already the name itself.
pub fn full_property_name(env: &mut ModelEnvironment) -> EnhancerResult {
    for property_id in env.all_properties() {
        let Some(property) = env.property_mut(property_id) else {
            continue;
        };
        property.full_property_name = match &property.with_context {
            Some(context) if context != &property.name => {
                format!("{context}{}", property.name).into()
            }
            _ => property.name.clone(),
        };
    }
    EnhancerResult::success(FULL_PROPERTY_NAME_ENHANCER)
}

pub const INHERITED_DOCUMENTATION_COPYING_ENHANCER: &str = "InheritedDocumentationCopyingEnhancer";

/// Subclasses and extensions with empty documentation inherit the nearest
/// documented base's text.
pub fn inherited_documentation_copying(env: &mut ModelEnvironment) -> EnhancerResult {
    let all_entities: Vec<EntityId> = env.entities_of_types(&crate::model::ModelType::WITH_BASE);
    let entity_count = env.entities_of_types(&crate::model::ModelType::ALL).len();
    for entity_id in all_entities {
        let Some(entity) = env.entity(entity_id) else {
            continue;
        };
        if !entity.documentation.is_empty() {
            continue;
        }
        // Walk up until a documented ancestor; chains are acyclic beyond the
        // entity arena length.
        let mut current = entity.base_entity;
        let mut hops = 0;
        let inherited = loop {
            let Some(base_id) = current else {
                break None;
            };
            let Some(base) = env.entity(base_id) else {
                break None;
            };
            if !base.documentation.is_empty() {
                break Some(base.documentation.clone());
            }
            hops += 1;
            if hops > entity_count {
                break None;
            }
            current = base.base_entity;
        };
        if let (Some(documentation), Some(entity)) = (inherited, env.entity_mut(entity_id)) {
            entity.documentation = documentation;
        }
    }
    EnhancerResult::success(INHERITED_DOCUMENTATION_COPYING_ENHANCER)
}
