#![allow(clippy::unwrap_used)]

use super::helpers::{core_namespace, domain_entity, entity, extension_namespace, integer_property};
use crate::model::{
    DecimalFacets, EntityProperty, IntegerFacets, ModelType, Namespace, PropertyKind,
    PropertyType, Referential, Shared, StringFacets, TopLevelEntity,
};
use crate::repository::{ModelEnvironment, ModelError};

#[test]
fn test_duplicate_namespace_rejected() {
    let mut env = ModelEnvironment::new();
    core_namespace(&mut env, "EdFi");
    let result = env.add_namespace(Namespace::core("EdFi"));
    assert!(matches!(result, Err(ModelError::DuplicateNamespace { .. })));
}

#[test]
fn test_duplicate_entity_name_rejected_per_kind() {
    let mut env = ModelEnvironment::new();
    let core = core_namespace(&mut env, "EdFi");
    domain_entity(&mut env, core, "School");

    let duplicate = env.add_entity(TopLevelEntity::new(ModelType::DomainEntity, "School", core));
    assert!(matches!(
        duplicate,
        Err(ModelError::DuplicateEntityName { .. })
    ));

    // A different kind with the same name is a build-time success; the
    // cross-kind uniqueness rule reports it instead.
    entity(&mut env, core, ModelType::Common, "School");
}

#[test]
fn test_entity_in_unregistered_namespace_rejected() {
    let mut env = ModelEnvironment::new();
    let result = env.add_entity(TopLevelEntity::new(
        ModelType::DomainEntity,
        "School",
        crate::model::NamespaceId::new(9),
    ));
    assert_eq!(result, Err(ModelError::UnknownNamespace));
}

#[test]
fn test_unknown_property_kind_rejected() {
    let mut env = ModelEnvironment::new();
    let core = core_namespace(&mut env, "EdFi");
    let school = domain_entity(&mut env, core, "School");

    let unbuilt = EntityProperty::new("Mystery", PropertyKind::Unknown, core);
    let result = env.add_property_to_entity(school, unbuilt);
    assert!(matches!(
        result,
        Err(ModelError::UnknownPropertyType { .. })
    ));
    assert_eq!(env.property_index.total_len(), 0);
    assert!(env.entity(school).unwrap().properties.is_empty());
}

#[test]
fn test_add_property_wires_parent_and_bucket() {
    let mut env = ModelEnvironment::new();
    let core = core_namespace(&mut env, "EdFi");
    let school = domain_entity(&mut env, core, "School");
    let first = integer_property(&mut env, school, "SchoolId");
    let second = integer_property(&mut env, school, "NameOfInstitution");

    assert_eq!(env.property(first).unwrap().parent_entity, Some(school));
    assert_eq!(env.entity(school).unwrap().properties, vec![first, second]);
    assert_eq!(
        env.properties_of_type(&[PropertyType::Integer]),
        vec![first, second]
    );
}

#[test]
fn test_bucket_integrity_across_kinds() {
    let mut env = ModelEnvironment::new();
    let core = core_namespace(&mut env, "EdFi");
    let school = domain_entity(&mut env, core, "School");

    let integer = integer_property(&mut env, school, "SchoolId");
    let boolean = env
        .add_property_to_entity(
            school,
            EntityProperty::new("IsCharter", PropertyKind::Boolean, core),
        )
        .unwrap();
    let second_integer = integer_property(&mut env, school, "Capacity");

    // Concatenation preserves per-bucket insertion order.
    assert_eq!(
        env.properties_of_type(&[PropertyType::Integer, PropertyType::Boolean]),
        vec![integer, second_integer, boolean]
    );
    assert_eq!(env.property_index.bucket_len(PropertyType::Integer), 2);
    assert_eq!(env.property_index.bucket_len(PropertyType::Choice), 0);
    assert_eq!(env.all_properties().len(), 3);
}

/// One property payload per real kind, in bucket order.
fn one_of_each_kind() -> Vec<PropertyKind> {
    vec![
        PropertyKind::Association {
            referential: Referential::default(),
            is_weak: false,
        },
        PropertyKind::Boolean,
        PropertyKind::Choice(Referential::default()),
        PropertyKind::Common {
            referential: Referential::default(),
            is_extension_override: false,
        },
        PropertyKind::Currency,
        PropertyKind::Date,
        PropertyKind::Datetime,
        PropertyKind::Decimal(DecimalFacets::default()),
        PropertyKind::Descriptor(Referential::default()),
        PropertyKind::DomainEntity {
            referential: Referential::default(),
            is_weak: false,
        },
        PropertyKind::Duration,
        PropertyKind::Enumeration(Referential::default()),
        PropertyKind::InlineCommon(Referential::default()),
        PropertyKind::Integer(IntegerFacets::default()),
        PropertyKind::Percent,
        PropertyKind::SchoolYearEnumeration(Referential::default()),
        PropertyKind::SharedDecimal(Shared::default()),
        PropertyKind::SharedInteger(Shared::default()),
        PropertyKind::SharedShort(Shared::default()),
        PropertyKind::SharedString(Shared::default()),
        PropertyKind::Short(IntegerFacets::default()),
        PropertyKind::String(StringFacets::default()),
        PropertyKind::Time,
        PropertyKind::Year,
    ]
}

#[test]
fn test_every_kind_lands_in_its_own_bucket() {
    let mut env = ModelEnvironment::new();
    let core = core_namespace(&mut env, "EdFi");
    let school = domain_entity(&mut env, core, "School");

    let mut added = Vec::new();
    for (index, kind) in one_of_each_kind().into_iter().enumerate() {
        let property = EntityProperty::new(format!("Property{index}"), kind, core);
        added.push(env.add_property_to_entity(school, property).unwrap());
    }

    assert_eq!(env.property_index.total_len(), 24);
    for property_type in PropertyType::ALL {
        assert_eq!(env.property_index.bucket_len(property_type), 1);
    }

    // Insertion above followed bucket order, so the concatenation returns
    // exactly the added ids in that order.
    let all = env.all_properties();
    assert_eq!(all, added);
    for (position, property_type) in PropertyType::ALL.iter().enumerate() {
        assert_eq!(
            env.property(all[position]).unwrap().property_type(),
            *property_type
        );
    }
}

#[test]
fn test_properties_for_namespaces_filters_by_id() {
    let mut env = ModelEnvironment::new();
    let core = core_namespace(&mut env, "EdFi");
    let ext = extension_namespace(&mut env, "Sample");
    let school = domain_entity(&mut env, core, "School");
    let bus = domain_entity(&mut env, ext, "Bus");

    let core_property = integer_property(&mut env, school, "SchoolId");
    let ext_property = integer_property(&mut env, bus, "BusNumber");

    assert_eq!(
        env.properties_of_type_for_namespaces(&[PropertyType::Integer], &[ext]),
        vec![ext_property]
    );
    assert_eq!(
        env.properties_of_type_for_namespaces(&[PropertyType::Integer], &[core, ext]),
        vec![core_property, ext_property]
    );
}

#[test]
fn test_cyclic_dependency_rejected() {
    let mut env = ModelEnvironment::new();
    let a = core_namespace(&mut env, "A");
    let b = core_namespace(&mut env, "B");
    let c = core_namespace(&mut env, "C");

    env.add_dependency(b, a).unwrap();
    env.add_dependency(c, b).unwrap();

    assert!(matches!(
        env.add_dependency(a, c),
        Err(ModelError::CyclicNamespaceDependency { .. })
    ));
    assert!(matches!(
        env.add_dependency(a, a),
        Err(ModelError::CyclicNamespaceDependency { .. })
    ));
    // The rejected edge left no trace.
    assert!(env.namespace(a).unwrap().dependencies.is_empty());
}

#[test]
fn test_namespace_chain_is_self_then_dependencies() {
    let mut env = ModelEnvironment::new();
    let core = core_namespace(&mut env, "EdFi");
    let other = core_namespace(&mut env, "Other");
    let ext = extension_namespace(&mut env, "Sample");
    env.add_dependency(ext, core).unwrap();
    env.add_dependency(ext, other).unwrap();

    assert_eq!(env.namespace_chain(ext), vec![ext, core, other]);
    assert_eq!(env.namespace_chain(core), vec![core]);
}
