#![allow(clippy::unwrap_used)]

use crate::model::{
    EntityId, EntityProperty, IntegerFacets, ModelType, Namespace, NamespaceId, PropertyId,
    PropertyKind, Referential, TopLevelEntity,
};
use crate::pipeline::{FailureCategory, ValidationFailure};
use crate::repository::ModelEnvironment;

pub fn core_namespace(env: &mut ModelEnvironment, name: &str) -> NamespaceId {
    env.add_namespace(Namespace::core(name)).unwrap()
}

pub fn extension_namespace(env: &mut ModelEnvironment, name: &str) -> NamespaceId {
    env.add_namespace(Namespace::extension(name, name)).unwrap()
}

pub fn entity(
    env: &mut ModelEnvironment,
    namespace: NamespaceId,
    model_type: ModelType,
    name: &str,
) -> EntityId {
    env.add_entity(TopLevelEntity::new(model_type, name, namespace))
        .unwrap()
}

/// An extension or subclass entity with its base already wired.
pub fn based_entity(
    env: &mut ModelEnvironment,
    namespace: NamespaceId,
    model_type: ModelType,
    name: &str,
    base: EntityId,
) -> EntityId {
    let base_name = env.entity(base).unwrap().name.clone();
    let id = env
        .add_entity(TopLevelEntity::with_base(
            model_type, name, namespace, base_name,
        ))
        .unwrap();
    env.entity_mut(id).unwrap().base_entity = Some(base);
    id
}

pub fn add_property(
    env: &mut ModelEnvironment,
    owner: EntityId,
    name: &str,
    kind: PropertyKind,
) -> PropertyId {
    let namespace = env.entity(owner).unwrap().namespace;
    env.add_property_to_entity(owner, EntityProperty::new(name, kind, namespace))
        .unwrap()
}

pub fn integer_property(env: &mut ModelEnvironment, owner: EntityId, name: &str) -> PropertyId {
    add_property(
        env,
        owner,
        name,
        PropertyKind::Integer(IntegerFacets::default()),
    )
}

pub fn common_property(
    env: &mut ModelEnvironment,
    owner: EntityId,
    name: &str,
    is_extension_override: bool,
) -> PropertyId {
    add_property(
        env,
        owner,
        name,
        PropertyKind::Common {
            referential: Referential::default(),
            is_extension_override,
        },
    )
}

/// A domain-entity reference already pointing at `target`.
pub fn resolved_reference(
    env: &mut ModelEnvironment,
    owner: EntityId,
    name: &str,
    target: EntityId,
) -> PropertyId {
    add_property(
        env,
        owner,
        name,
        PropertyKind::DomainEntity {
            referential: Referential {
                referenced_entity: Some(target),
                ..Referential::default()
            },
            is_weak: false,
        },
    )
}

/// A resolved domain-entity reference carrying one declared merge directive.
pub fn reference_with_merge(
    env: &mut ModelEnvironment,
    owner: EntityId,
    name: &str,
    target: EntityId,
    source_path: &[&str],
    target_path: &[&str],
) -> PropertyId {
    add_property(
        env,
        owner,
        name,
        PropertyKind::DomainEntity {
            referential: Referential {
                referenced_entity: Some(target),
                merge_directives: vec![crate::model::MergeDirective::new(
                    source_path.iter().copied(),
                    target_path.iter().copied(),
                )],
                ..Referential::default()
            },
            is_weak: false,
        },
    )
}

pub fn assert_single_error(failures: &[ValidationFailure], validator_name: &str) {
    assert_eq!(failures.len(), 1, "failures: {failures:?}");
    assert_eq!(failures[0].validator_name, validator_name);
    assert_eq!(failures[0].category, FailureCategory::Error);
}
