#![allow(clippy::unwrap_used)]

use crate::model::{
    EntityId, EntityProperty, IntegerFacets, MergeDirective, ModelType, Namespace, NamespaceId,
    PropertyId, PropertyKind, Referential, StringFacets, TopLevelEntity,
};
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

pub fn entity_with_base(
    env: &mut ModelEnvironment,
    namespace: NamespaceId,
    model_type: ModelType,
    name: &str,
    base_name: &str,
) -> EntityId {
    env.add_entity(TopLevelEntity::with_base(
        model_type, name, namespace, base_name,
    ))
    .unwrap()
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

pub fn string_property(env: &mut ModelEnvironment, owner: EntityId, name: &str) -> PropertyId {
    add_property(
        env,
        owner,
        name,
        PropertyKind::String(StringFacets::default()),
    )
}

pub fn identity_integer_property(
    env: &mut ModelEnvironment,
    owner: EntityId,
    name: &str,
) -> PropertyId {
    let id = integer_property(env, owner, name);
    env.property_mut(id).unwrap().is_part_of_identity = true;
    id
}

/// An unresolved domain-entity reference, as the builder leaves it.
pub fn unresolved_reference(env: &mut ModelEnvironment, owner: EntityId, name: &str) -> PropertyId {
    add_property(
        env,
        owner,
        name,
        PropertyKind::DomainEntity {
            referential: Referential::default(),
            is_weak: false,
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
    let id = unresolved_reference(env, owner, name);
    env.property_mut(id).unwrap().kind.set_referenced_entity(target);
    id
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
                merge_directives: vec![MergeDirective::new(
                    source_path.iter().copied(),
                    target_path.iter().copied(),
                )],
                ..Referential::default()
            },
            is_weak: false,
        },
    )
}
