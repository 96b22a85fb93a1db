//! Identity-rename rules for subclass entities.

use crate::model::ModelType;
use crate::pipeline::ValidationFailure;
use crate::repository::ModelEnvironment;

const SUBCLASSES: [ModelType; 2] = [
    ModelType::AssociationSubclass,
    ModelType::DomainEntitySubclass,
];

pub const IDENTITY_RENAME_MUST_MATCH_BASE_IDENTITY: &str =
    "SubclassIdentityRenameMustMatchBaseIdentityProperty";

/// The renamed-away name of an identity rename must be an identity property
/// declared on the base entity.
pub fn identity_rename_must_match_base_identity(
    env: &ModelEnvironment,
) -> Vec<ValidationFailure> {
    let mut failures = Vec::new();
    for entity_id in env.entities_of_types(&SUBCLASSES) {
        let Some(entity) = env.entity(entity_id) else {
            continue;
        };
        // An unresolved base is reported by the base-reference rule.
        let Some(base) = entity.base_entity.and_then(|id| env.entity(id)) else {
            continue;
        };
        for &property_id in &entity.properties {
            let Some(property) = env.property(property_id) else {
                continue;
            };
            if !property.is_identity_rename {
                continue;
            }
            let base_key_name = property.base_key_name.as_deref().unwrap_or("");
            let matches_base_identity = base.properties.iter().any(|&base_property_id| {
                env.property(base_property_id)
                    .is_some_and(|p| p.is_part_of_identity && p.name == base_key_name)
            });
            if !matches_base_identity {
                failures.push(ValidationFailure::error(
                    IDENTITY_RENAME_MUST_MATCH_BASE_IDENTITY,
                    format!(
                        "identity rename '{}' on {} '{}' renames '{base_key_name}', which is \
                         not an identity property of base entity '{}'",
                        property.name, entity.model_type, entity.name, base.name
                    ),
                    Some(
                        property
                            .source_map
                            .base_key_name
                            .clone()
                            .unwrap_or_else(|| property.source_map.declaration.clone()),
                    ),
                ));
            }
        }
    }
    failures
}

pub const IDENTITY_RENAME_AT_MOST_ONCE: &str = "SubclassIdentityRenameMustNotExistMoreThanOnce";

/// A subclass may rename at most one base identity property.
pub fn identity_rename_at_most_once(env: &ModelEnvironment) -> Vec<ValidationFailure> {
    let mut failures = Vec::new();
    for entity_id in env.entities_of_types(&SUBCLASSES) {
        let Some(entity) = env.entity(entity_id) else {
            continue;
        };
        let renames: Vec<_> = entity
            .properties
            .iter()
            .copied()
            .filter_map(|id| env.property(id))
            .filter(|p| p.is_identity_rename)
            .collect();
        if let [_, second, ..] = renames.as_slice() {
            failures.push(ValidationFailure::error(
                IDENTITY_RENAME_AT_MOST_ONCE,
                format!(
                    "{} '{}' declares more than one identity rename",
                    entity.model_type, entity.name
                ),
                Some(second.source_map.declaration.clone()),
            ));
        }
    }
    failures
}
