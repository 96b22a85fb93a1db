#![allow(clippy::unwrap_used)]

use super::helpers::{assert_single_error, based_entity, core_namespace, entity, integer_property};
use crate::model::{EntityId, ModelType};
use crate::repository::ModelEnvironment;
use crate::validator::identity_rename::{
    IDENTITY_RENAME_AT_MOST_ONCE, IDENTITY_RENAME_MUST_MATCH_BASE_IDENTITY,
    identity_rename_at_most_once, identity_rename_must_match_base_identity,
};

fn subclass_with_rename(env: &mut ModelEnvironment, base_key_name: &str) -> EntityId {
    let core = core_namespace(env, "EdFi");
    let school = entity(env, core, ModelType::DomainEntity, "School");
    let school_id = integer_property(env, school, "SchoolId");
    env.property_mut(school_id).unwrap().is_part_of_identity = true;
    integer_property(env, school, "NameOfInstitution");

    let academy = based_entity(env, core, ModelType::DomainEntitySubclass, "Academy", school);
    let rename = integer_property(env, academy, "AcademyId");
    {
        let property = env.property_mut(rename).unwrap();
        property.is_identity_rename = true;
        property.base_key_name = Some(base_key_name.into());
    }
    academy
}

#[test]
fn test_rename_of_base_identity_passes() {
    let mut env = ModelEnvironment::new();
    subclass_with_rename(&mut env, "SchoolId");
    assert!(identity_rename_must_match_base_identity(&env).is_empty());
}

#[test]
fn test_rename_of_non_identity_base_property_is_reported() {
    let mut env = ModelEnvironment::new();
    subclass_with_rename(&mut env, "NameOfInstitution");

    let failures = identity_rename_must_match_base_identity(&env);
    assert_single_error(&failures, IDENTITY_RENAME_MUST_MATCH_BASE_IDENTITY);
    assert!(failures[0].message.contains("NameOfInstitution"));
}

#[test]
fn test_rename_of_unknown_base_property_is_reported() {
    let mut env = ModelEnvironment::new();
    subclass_with_rename(&mut env, "DistrictId");
    let failures = identity_rename_must_match_base_identity(&env);
    assert_single_error(&failures, IDENTITY_RENAME_MUST_MATCH_BASE_IDENTITY);
}

#[test]
fn test_second_rename_is_reported_once() {
    let mut env = ModelEnvironment::new();
    let academy = subclass_with_rename(&mut env, "SchoolId");
    let second = integer_property(&mut env, academy, "CampusId");
    {
        let property = env.property_mut(second).unwrap();
        property.is_identity_rename = true;
        property.base_key_name = Some("SchoolId".into());
    }

    let failures = identity_rename_at_most_once(&env);
    assert_single_error(&failures, IDENTITY_RENAME_AT_MOST_ONCE);
}

#[test]
fn test_single_rename_passes_uniqueness() {
    let mut env = ModelEnvironment::new();
    subclass_with_rename(&mut env, "SchoolId");
    assert!(identity_rename_at_most_once(&env).is_empty());
}
