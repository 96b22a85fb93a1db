//! Base-reference rules for extension and subclass entities.

use crate::model::ModelType;
use crate::pipeline::ValidationFailure;
use crate::repository::ModelEnvironment;

/// (kind, what its base must be) for each extending/subclassing entity kind.
const BASE_RULES: [(ModelType, &str); 5] = [
    (
        ModelType::AssociationExtension,
        "an association or association subclass",
    ),
    (ModelType::AssociationSubclass, "an association"),
    (ModelType::CommonExtension, "a common"),
    (
        ModelType::DomainEntityExtension,
        "a domain entity or domain entity subclass",
    ),
    (ModelType::DomainEntitySubclass, "a domain entity"),
];

pub const EXTENSION_BASE_MUST_RESOLVE: &str = "ExtensionBaseMustResolve";

/// Reference error: a declared base name that did not resolve under the
/// namespace chain after the setup phase.
pub fn extension_base_must_resolve(env: &ModelEnvironment) -> Vec<ValidationFailure> {
    let mut failures = Vec::new();
    for (kind, expected) in BASE_RULES {
        for entity_id in env.entities_of_type(kind) {
            let Some(entity) = env.entity(entity_id) else {
                continue;
            };
            if entity.base_entity.is_some() {
                continue;
            }
            let base_name = entity.base_entity_name.as_deref().unwrap_or("");
            failures.push(ValidationFailure::error(
                EXTENSION_BASE_MUST_RESOLVE,
                format!(
                    "{kind} '{}' is based on '{base_name}', which does not match {expected} \
                     visible from namespace '{}'",
                    entity.name,
                    env.namespace(entity.namespace)
                        .map(|ns| ns.namespace_name.as_str())
                        .unwrap_or(""),
                ),
                Some(entity.source_map.clone()),
            ));
        }
    }
    failures
}

pub const EXTENSION_MUST_NOT_BE_IN_BASE_NAMESPACE: &str = "ExtensionMustNotBeInSameNamespaceAsBase";

/// Placement error: an extension declared alongside the entity it extends.
/// Extensions exist to add to another project's entities; same-namespace
/// additions belong on the entity itself.
pub fn extension_must_not_be_in_base_namespace(env: &ModelEnvironment) -> Vec<ValidationFailure> {
    let mut failures = Vec::new();
    for kind in ModelType::EXTENSIONS {
        for entity_id in env.entities_of_type(kind) {
            let Some(entity) = env.entity(entity_id) else {
                continue;
            };
            let same_namespace = entity
                .base_entity
                .and_then(|base_id| env.entity(base_id))
                .is_some_and(|base| base.namespace == entity.namespace);
            if same_namespace {
                failures.push(ValidationFailure::error(
                    EXTENSION_MUST_NOT_BE_IN_BASE_NAMESPACE,
                    format!(
                        "{kind} '{}' must not be declared in the same namespace as the entity \
                         it extends",
                        entity.name
                    ),
                    Some(entity.source_map.clone()),
                ));
            }
        }
    }
    failures
}
