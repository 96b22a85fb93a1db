//! Property rules for extension entities.
//!
//! An extension adds to an entity owned by another project, so it may only
//! widen the base optionally. Required additions would invalidate every
//! existing record of the base entity, and redeclarations would collide with
//! the base's own fields.

use rustc_hash::FxHashSet;
use smol_str::SmolStr;

use crate::model::{EntityId, ModelType, PropertyKind};
use crate::pipeline::ValidationFailure;
use crate::repository::ModelEnvironment;

/// Whether this property is a declared override of a base common property
/// rather than a new field. Overrides are governed by the extension-override
/// rules instead.
fn is_extension_override(kind: &PropertyKind) -> bool {
    matches!(
        kind,
        PropertyKind::Common {
            is_extension_override: true,
            ..
        }
    )
}

pub const EXTENSION_MUST_NOT_ADD_REQUIRED_PROPERTIES: &str =
    "ExtensionMustNotAddRequiredProperties";

/// Every property a declared extension adds must be optional.
pub fn extension_must_not_add_required_properties(
    env: &ModelEnvironment,
) -> Vec<ValidationFailure> {
    let mut failures = Vec::new();
    for entity_id in env.entities_of_types(&ModelType::EXTENSIONS) {
        let Some(entity) = env.entity(entity_id) else {
            continue;
        };
        for &property_id in &entity.properties {
            let Some(property) = env.property(property_id) else {
                continue;
            };
            if is_extension_override(&property.kind) {
                continue;
            }
            if property.is_required || property.is_required_collection {
                failures.push(ValidationFailure::error(
                    EXTENSION_MUST_NOT_ADD_REQUIRED_PROPERTIES,
                    format!(
                        "{} '{}' must not add required property '{}'; properties added by an \
                         extension must be optional",
                        entity.model_type, entity.name, property.name
                    ),
                    Some(property.source_map.declaration.clone()),
                ));
            }
        }
    }
    failures
}

pub const EXTENSION_MUST_NOT_REDECLARE_BASE_PROPERTIES: &str =
    "ExtensionMustNotRedeclareBaseProperties";

/// Property names declared anywhere on the base chain of `entity_id`.
fn base_chain_property_names(env: &ModelEnvironment, entity_id: EntityId) -> FxHashSet<SmolStr> {
    let mut names = FxHashSet::default();
    let mut visited = FxHashSet::default();
    let mut current = env.entity(entity_id).and_then(|e| e.base_entity);
    while let Some(base_id) = current {
        if !visited.insert(base_id) {
            break;
        }
        let Some(base) = env.entity(base_id) else {
            break;
        };
        for &property_id in &base.properties {
            if let Some(property) = env.property(property_id) {
                names.insert(property.name.clone());
            }
        }
        current = base.base_entity;
    }
    names
}

/// An extension property must not reuse a name the base chain already
/// declares, except as a declared extension override.
pub fn extension_must_not_redeclare_base_properties(
    env: &ModelEnvironment,
) -> Vec<ValidationFailure> {
    let mut failures = Vec::new();
    for entity_id in env.entities_of_types(&ModelType::EXTENSIONS) {
        let Some(entity) = env.entity(entity_id) else {
            continue;
        };
        if entity.base_entity.is_none() {
            continue;
        }
        let base_names = base_chain_property_names(env, entity_id);
        for &property_id in &entity.properties {
            let Some(property) = env.property(property_id) else {
                continue;
            };
            if is_extension_override(&property.kind) {
                continue;
            }
            if base_names.contains(&property.name) {
                failures.push(ValidationFailure::error(
                    EXTENSION_MUST_NOT_REDECLARE_BASE_PROPERTIES,
                    format!(
                        "{} '{}' must not redeclare property '{}' already declared by the \
                         entity it extends",
                        entity.model_type, entity.name, property.name
                    ),
                    Some(property.source_map.declaration.clone()),
                ));
            }
        }
    }
    failures
}
