//! Base-class wiring for extension and subclass entities.
//!
//! Each enhancer resolves the declared base name of one entity kind against
//! the kind-specific set of legal base kinds, under the namespace chain rule.
//! Unresolved bases stay `None`; the extension-base validators report them.

use crate::model::{EntityId, ModelType};
use crate::pipeline::EnhancerResult;
use crate::repository::ModelEnvironment;

fn resolve_bases(env: &mut ModelEnvironment, kind: ModelType, allowed_bases: &[ModelType]) {
    let candidates: Vec<EntityId> = env.entities_of_type(kind);
    for entity_id in candidates {
        let Some(entity) = env.entity(entity_id) else {
            continue;
        };
        if entity.base_entity.is_some() {
            continue;
        }
        let Some(base_name) = entity.base_entity_name.clone() else {
            continue;
        };
        let chain = env.namespace_chain(entity.namespace);
        let resolved = env.find_entity_of_types_in_chain(&base_name, allowed_bases, &chain);
        if let (Some(base_id), Some(entity)) = (resolved, env.entity_mut(entity_id)) {
            entity.base_entity = Some(base_id);
        }
    }
}

pub const ASSOCIATION_EXTENSION_BASE_CLASS_ENHANCER: &str = "AssociationExtensionBaseClassEnhancer";

pub fn association_extension_base_class(env: &mut ModelEnvironment) -> EnhancerResult {
    resolve_bases(
        env,
        ModelType::AssociationExtension,
        &[ModelType::Association, ModelType::AssociationSubclass],
    );
    EnhancerResult::success(ASSOCIATION_EXTENSION_BASE_CLASS_ENHANCER)
}

pub const ASSOCIATION_SUBCLASS_BASE_CLASS_ENHANCER: &str = "AssociationSubclassBaseClassEnhancer";

pub fn association_subclass_base_class(env: &mut ModelEnvironment) -> EnhancerResult {
    resolve_bases(
        env,
        ModelType::AssociationSubclass,
        &[ModelType::Association],
    );
    EnhancerResult::success(ASSOCIATION_SUBCLASS_BASE_CLASS_ENHANCER)
}

pub const COMMON_EXTENSION_BASE_CLASS_ENHANCER: &str = "CommonExtensionBaseClassEnhancer";

pub fn common_extension_base_class(env: &mut ModelEnvironment) -> EnhancerResult {
    resolve_bases(env, ModelType::CommonExtension, &[ModelType::Common]);
    EnhancerResult::success(COMMON_EXTENSION_BASE_CLASS_ENHANCER)
}

pub const DOMAIN_ENTITY_EXTENSION_BASE_CLASS_ENHANCER: &str =
    "DomainEntityExtensionBaseClassEnhancer";

pub fn domain_entity_extension_base_class(env: &mut ModelEnvironment) -> EnhancerResult {
    resolve_bases(
        env,
        ModelType::DomainEntityExtension,
        &[ModelType::DomainEntity, ModelType::DomainEntitySubclass],
    );
    EnhancerResult::success(DOMAIN_ENTITY_EXTENSION_BASE_CLASS_ENHANCER)
}

pub const DOMAIN_ENTITY_SUBCLASS_BASE_CLASS_ENHANCER: &str =
    "DomainEntitySubclassBaseClassEnhancer";

pub fn domain_entity_subclass_base_class(env: &mut ModelEnvironment) -> EnhancerResult {
    resolve_bases(
        env,
        ModelType::DomainEntitySubclass,
        &[ModelType::DomainEntity],
    );
    EnhancerResult::success(DOMAIN_ENTITY_SUBCLASS_BASE_CLASS_ENHANCER)
}
