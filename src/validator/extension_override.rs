//! Placement and cardinality rules for common-extension-override properties.

use rustc_hash::FxHashSet;
use smol_str::SmolStr;

use crate::model::{EntityId, ModelType, PropertyId, PropertyType};
use crate::pipeline::ValidationFailure;
use crate::repository::ModelEnvironment;

pub const COMMON_EXTENSION_OVERRIDE: &str =
    "CommonPropertyWithExtensionOverrideRestrictedToDomainEntityAndAssociationExtensionsAndMaintainsCardinality";

/// Walk the base chain of `entity_id` (through any intervening subclass
/// levels) looking for a common-typed property named `name`.
fn base_common_property(
    env: &ModelEnvironment,
    entity_id: EntityId,
    name: &SmolStr,
) -> Option<PropertyId> {
    let mut visited = FxHashSet::default();
    let mut current = env.entity(entity_id).and_then(|e| e.base_entity);
    while let Some(base_id) = current {
        if !visited.insert(base_id) {
            break;
        }
        let base = env.entity(base_id)?;
        let found = base.properties.iter().copied().find(|&property_id| {
            env.property(property_id).is_some_and(|p| {
                p.property_type() == PropertyType::Common && p.name == *name
            })
        });
        if found.is_some() {
            return found;
        }
        current = base.base_entity;
    }
    None
}

/// A common property flagged as an extension override is legal only on a
/// domain-entity or association extension, only when the base chain declares
/// a common property of the same name, and only with the base property's
/// exact nullability and collection flags.
pub fn common_extension_override(env: &ModelEnvironment) -> Vec<ValidationFailure> {
    let mut failures = Vec::new();
    for property_id in env.properties_of_type(&[PropertyType::Common]) {
        let Some(property) = env.property(property_id) else {
            continue;
        };
        if !matches!(
            property.kind,
            crate::model::PropertyKind::Common {
                is_extension_override: true,
                ..
            }
        ) {
            continue;
        }
        let Some(owner) = property.parent_entity.and_then(|id| env.entity(id)) else {
            continue;
        };

        let allowed_placement = matches!(
            owner.model_type,
            ModelType::DomainEntityExtension | ModelType::AssociationExtension
        );
        if !allowed_placement {
            failures.push(ValidationFailure::error(
                COMMON_EXTENSION_OVERRIDE,
                format!(
                    "common property '{}' is declared as an extension override, which is only \
                     allowed on a domainEntityExtension or associationExtension, not on {} '{}'",
                    property.name, owner.model_type, owner.name
                ),
                Some(property.source_map.declaration.clone()),
            ));
            continue;
        }

        let Some(owner_id) = property.parent_entity else {
            continue;
        };
        let Some(base_property_id) = base_common_property(env, owner_id, &property.name) else {
            failures.push(ValidationFailure::error(
                COMMON_EXTENSION_OVERRIDE,
                format!(
                    "common property '{}' on {} '{}' is declared as an extension override, but \
                     the entity being extended declares no common property of that name",
                    property.name, owner.model_type, owner.name
                ),
                Some(property.source_map.declaration.clone()),
            ));
            continue;
        };

        let base_cardinality = env
            .property(base_property_id)
            .map(|base| base.cardinality())
            .unwrap_or_default();
        if property.cardinality() != base_cardinality {
            failures.push(ValidationFailure::error(
                COMMON_EXTENSION_OVERRIDE,
                format!(
                    "extension override '{}' on {} '{}' must keep the cardinality of the base \
                     property it overrides",
                    property.name, owner.model_type, owner.name
                ),
                Some(property.source_map.declaration.clone()),
            ));
        }
    }
    failures
}
