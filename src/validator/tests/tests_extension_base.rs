#![allow(clippy::unwrap_used)]

use super::helpers::{assert_single_error, based_entity, core_namespace, entity, extension_namespace};
use crate::model::{ModelType, TopLevelEntity};
use crate::repository::ModelEnvironment;
use crate::validator::extension_base::{
    EXTENSION_BASE_MUST_RESOLVE, EXTENSION_MUST_NOT_BE_IN_BASE_NAMESPACE,
    extension_base_must_resolve, extension_must_not_be_in_base_namespace,
};

#[test]
fn test_unresolved_base_is_reported_with_expected_kinds() {
    let mut env = ModelEnvironment::new();
    let ext = extension_namespace(&mut env, "Sample");
    env.add_entity(TopLevelEntity::with_base(
        ModelType::DomainEntitySubclass,
        "Academy",
        ext,
        "School",
    ))
    .unwrap();

    let failures = extension_base_must_resolve(&env);
    assert_single_error(&failures, EXTENSION_BASE_MUST_RESOLVE);
    assert!(failures[0].message.contains("'School'"));
    assert!(failures[0].message.contains("a domain entity"));
}

#[test]
fn test_resolved_base_passes() {
    let mut env = ModelEnvironment::new();
    let core = core_namespace(&mut env, "EdFi");
    let ext = extension_namespace(&mut env, "Sample");
    env.add_dependency(ext, core).unwrap();

    let school = entity(&mut env, core, ModelType::DomainEntity, "School");
    based_entity(&mut env, ext, ModelType::DomainEntitySubclass, "Academy", school);

    assert!(extension_base_must_resolve(&env).is_empty());
}

#[test]
fn test_extension_in_base_namespace_is_reported() {
    let mut env = ModelEnvironment::new();
    let core = core_namespace(&mut env, "EdFi");
    let school = entity(&mut env, core, ModelType::DomainEntity, "School");
    based_entity(
        &mut env,
        core,
        ModelType::DomainEntityExtension,
        "School",
        school,
    );

    let failures = extension_must_not_be_in_base_namespace(&env);
    assert_single_error(&failures, EXTENSION_MUST_NOT_BE_IN_BASE_NAMESPACE);
}

#[test]
fn test_extension_in_other_namespace_passes() {
    let mut env = ModelEnvironment::new();
    let core = core_namespace(&mut env, "EdFi");
    let ext = extension_namespace(&mut env, "Sample");
    env.add_dependency(ext, core).unwrap();

    let school = entity(&mut env, core, ModelType::DomainEntity, "School");
    based_entity(
        &mut env,
        ext,
        ModelType::DomainEntityExtension,
        "School",
        school,
    );

    assert!(extension_must_not_be_in_base_namespace(&env).is_empty());
}
