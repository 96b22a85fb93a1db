#![allow(clippy::unwrap_used)]

use super::helpers::{core_namespace, entity, entity_with_base, integer_property};
use crate::enhancer::naming::{full_property_name, inherited_documentation_copying};
use crate::model::ModelType;
use crate::repository::ModelEnvironment;

#[test]
fn test_full_name_prepends_context() {
    let mut env = ModelEnvironment::new();
    let core = core_namespace(&mut env, "EdFi");
    let owner = entity(&mut env, core, ModelType::DomainEntity, "Section");

    let plain = integer_property(&mut env, owner, "SchoolId");
    let contextual = integer_property(&mut env, owner, "School");
    env.property_mut(contextual).unwrap().with_context = Some("Home".into());
    let redundant = integer_property(&mut env, owner, "Session");
    env.property_mut(redundant).unwrap().with_context = Some("Session".into());

    full_property_name(&mut env);
    assert_eq!(env.property(plain).unwrap().full_property_name, "SchoolId");
    assert_eq!(
        env.property(contextual).unwrap().full_property_name,
        "HomeSchool"
    );
    // A context equal to the name is not doubled.
    assert_eq!(
        env.property(redundant).unwrap().full_property_name,
        "Session"
    );
}

#[test]
fn test_empty_documentation_inherits_nearest_documented_base() {
    let mut env = ModelEnvironment::new();
    let core = core_namespace(&mut env, "EdFi");

    let root = entity(&mut env, core, ModelType::DomainEntity, "School");
    env.entity_mut(root).unwrap().documentation = "An educational institution.".to_string();

    let middle = entity_with_base(
        &mut env,
        core,
        ModelType::DomainEntitySubclass,
        "Academy",
        "School",
    );
    env.entity_mut(middle).unwrap().base_entity = Some(root);

    let leaf = entity_with_base(
        &mut env,
        core,
        ModelType::DomainEntitySubclass,
        "CharterAcademy",
        "Academy",
    );
    env.entity_mut(leaf).unwrap().base_entity = Some(middle);

    inherited_documentation_copying(&mut env);
    assert_eq!(
        env.entity(middle).unwrap().documentation,
        "An educational institution."
    );
    assert_eq!(
        env.entity(leaf).unwrap().documentation,
        "An educational institution."
    );
}

#[test]
fn test_existing_documentation_is_kept() {
    let mut env = ModelEnvironment::new();
    let core = core_namespace(&mut env, "EdFi");

    let root = entity(&mut env, core, ModelType::DomainEntity, "School");
    env.entity_mut(root).unwrap().documentation = "Base text.".to_string();

    let subclass = entity_with_base(
        &mut env,
        core,
        ModelType::DomainEntitySubclass,
        "Academy",
        "School",
    );
    env.entity_mut(subclass).unwrap().base_entity = Some(root);
    env.entity_mut(subclass).unwrap().documentation = "Own text.".to_string();

    inherited_documentation_copying(&mut env);
    assert_eq!(env.entity(subclass).unwrap().documentation, "Own text.");
}
