#![allow(clippy::unwrap_used)]

use crate::model::{
    EntityId, EntityProperty, IntegerFacets, ModelType, Namespace, NamespaceId, PropertyId,
    PropertyKind, Referential, TopLevelEntity,
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

pub fn domain_entity(env: &mut ModelEnvironment, namespace: NamespaceId, name: &str) -> EntityId {
    entity(env, namespace, ModelType::DomainEntity, name)
}

/// A domain-entity reference property already pointing at `target`.
pub fn reference_property(
    env: &mut ModelEnvironment,
    owner: EntityId,
    name: &str,
    target: EntityId,
) -> PropertyId {
    let namespace = env.entity(owner).unwrap().namespace;
    let property = EntityProperty::new(
        name,
        PropertyKind::DomainEntity {
            referential: Referential {
                referenced_entity: Some(target),
                ..Referential::default()
            },
            is_weak: false,
        },
        namespace,
    );
    env.add_property_to_entity(owner, property).unwrap()
}

pub fn integer_property(env: &mut ModelEnvironment, owner: EntityId, name: &str) -> PropertyId {
    let namespace = env.entity(owner).unwrap().namespace;
    let property = EntityProperty::new(
        name,
        PropertyKind::Integer(IntegerFacets::default()),
        namespace,
    );
    env.add_property_to_entity(owner, property).unwrap()
}
