//! Cross-kind name uniqueness within a namespace.

use indexmap::IndexMap;
use smol_str::SmolStr;

use crate::model::{EntityId, ModelType};
use crate::pipeline::ValidationFailure;
use crate::repository::ModelEnvironment;

pub const MOST_ENTITIES_CANNOT_HAVE_SAME_NAME: &str = "MostEntitiesCannotHaveSameName";

/// Entity names must be unique within a namespace across all entity kinds,
/// not just within one kind. Same-kind duplicates are rejected at build time;
/// this rule catches the cross-kind collisions.
///
/// Extension kinds are exempt: an extension carries its base entity's name,
/// so sharing that name is not a collision. Whether the extension sits in a
/// legal namespace is the extension-base rules' concern.
pub fn most_entities_cannot_have_same_name(env: &ModelEnvironment) -> Vec<ValidationFailure> {
    let mut failures = Vec::new();
    for namespace_id in env.namespace_ids() {
        let mut by_name: IndexMap<SmolStr, Vec<EntityId>> = IndexMap::new();
        for kind in ModelType::ALL {
            if kind.is_extension() {
                continue;
            }
            for entity_id in env.entities_of_type_for_namespaces(kind, &[namespace_id]) {
                if let Some(entity) = env.entity(entity_id) {
                    by_name.entry(entity.name.clone()).or_default().push(entity_id);
                }
            }
        }
        for (name, entity_ids) in by_name {
            if entity_ids.len() < 2 {
                continue;
            }
            for &entity_id in &entity_ids[1..] {
                let Some(entity) = env.entity(entity_id) else {
                    continue;
                };
                failures.push(ValidationFailure::error(
                    MOST_ENTITIES_CANNOT_HAVE_SAME_NAME,
                    format!(
                        "{} '{name}' shares its name with another declaration in namespace '{}'",
                        entity.model_type,
                        env.namespace(namespace_id)
                            .map(|ns| ns.namespace_name.as_str())
                            .unwrap_or(""),
                    ),
                    Some(entity.source_map.clone()),
                ));
            }
        }
    }
    failures
}
