//! Identity and queryable-field derivation.
//!
//! Both derivations recompute from declared flags on every run, so repeated
//! invocation (and diamond-shaped base chains) can never duplicate entries.
//! Base chains are cycle-guarded: a cyclic chain contributes nothing beyond
//! the first visit instead of recursing forever.

use rustc_hash::{FxHashMap, FxHashSet};
use smol_str::SmolStr;

use crate::model::{EntityId, PropertyId, PropertyType};
use crate::pipeline::EnhancerResult;
use crate::repository::ModelEnvironment;

fn push_unique(list: &mut Vec<PropertyId>, id: PropertyId) {
    if !list.contains(&id) {
        list.push(id);
    }
}

// ============================================================
// Subclass/extension identity propagation
// ============================================================

/// The identity set of `entity_id`: its own identity-flagged properties plus
/// the base chain's identity properties not targeted by an identity rename.
fn resolved_identity(
    env: &ModelEnvironment,
    entity_id: EntityId,
    memo: &mut FxHashMap<EntityId, Vec<PropertyId>>,
    visiting: &mut FxHashSet<EntityId>,
) -> Vec<PropertyId> {
    if let Some(resolved) = memo.get(&entity_id) {
        return resolved.clone();
    }
    if !visiting.insert(entity_id) {
        // Cyclic base chain; the validators own reporting it.
        return Vec::new();
    }

    let mut identity: Vec<PropertyId> = Vec::new();
    let mut rename_targets: Vec<SmolStr> = Vec::new();

    if let Some(entity) = env.entity(entity_id) {
        for &property_id in &entity.properties {
            let Some(property) = env.property(property_id) else {
                continue;
            };
            if property.is_part_of_identity || property.is_identity_rename {
                push_unique(&mut identity, property_id);
            }
            if property.is_identity_rename
                && let Some(base_key) = &property.base_key_name
            {
                rename_targets.push(base_key.clone());
            }
        }

        if let Some(base_id) = entity.base_entity {
            for base_property_id in resolved_identity(env, base_id, memo, visiting) {
                let renamed_away = env.property(base_property_id).is_some_and(|base_property| {
                    rename_targets.contains(&base_property.name)
                });
                if !renamed_away {
                    push_unique(&mut identity, base_property_id);
                }
            }
        }
    }

    visiting.remove(&entity_id);
    memo.insert(entity_id, identity.clone());
    identity
}

pub const SUBCLASS_IDENTITY_ENHANCER: &str = "SubclassIdentityEnhancer";

/// Depth-first identity propagation over every entity's base chain.
pub fn subclass_identity(env: &mut ModelEnvironment) -> EnhancerResult {
    let mut memo: FxHashMap<EntityId, Vec<PropertyId>> = FxHashMap::default();
    let mut visiting: FxHashSet<EntityId> = FxHashSet::default();

    let all_entities: Vec<EntityId> = env.entities_of_types(&crate::model::ModelType::ALL);
    for entity_id in all_entities {
        let identity = resolved_identity(env, entity_id, &mut memo, &mut visiting);
        if let Some(entity) = env.entity_mut(entity_id) {
            entity.identity_properties = identity;
        }
    }
    EnhancerResult::success(SUBCLASS_IDENTITY_ENHANCER)
}

// ============================================================
// Inline-common identity flattening
// ============================================================

/// Append the identity-flagged properties of `common_id` to `out`, recursing
/// through nested inline commons to arbitrary depth.
fn collect_inline_identities(
    env: &ModelEnvironment,
    common_id: EntityId,
    out: &mut Vec<PropertyId>,
    seen: &mut FxHashSet<EntityId>,
) {
    if !seen.insert(common_id) {
        return;
    }
    let Some(common) = env.entity(common_id) else {
        return;
    };
    for &property_id in &common.properties {
        let Some(property) = env.property(property_id) else {
            continue;
        };
        if property.is_part_of_identity {
            push_unique(out, property_id);
        }
        if property.property_type() == PropertyType::InlineCommon
            && let Some(nested) = property.kind.referenced_entity()
        {
            collect_inline_identities(env, nested, out, seen);
        }
    }
}

pub const INLINE_IDENTITY_ENHANCER: &str = "InlineIdentityEnhancer";

/// Flatten the identities of inline commons into their owning entities.
pub fn inline_identity(env: &mut ModelEnvironment) -> EnhancerResult {
    let inline_properties: Vec<PropertyId> = env.properties_of_type(&[PropertyType::InlineCommon]);
    for property_id in inline_properties {
        let Some(property) = env.property(property_id) else {
            continue;
        };
        let (Some(owner_id), Some(common_id)) =
            (property.parent_entity, property.kind.referenced_entity())
        else {
            continue;
        };
        let mut flattened: Vec<PropertyId> = Vec::new();
        let mut seen: FxHashSet<EntityId> = FxHashSet::default();
        collect_inline_identities(env, common_id, &mut flattened, &mut seen);

        if let Some(owner) = env.entity_mut(owner_id) {
            for id in flattened {
                push_unique(&mut owner.identity_properties, id);
            }
        }
    }
    EnhancerResult::success(INLINE_IDENTITY_ENHANCER)
}

// ============================================================
// Queryable propagation
// ============================================================

fn resolved_queryable(
    env: &ModelEnvironment,
    entity_id: EntityId,
    memo: &mut FxHashMap<EntityId, Vec<PropertyId>>,
    visiting: &mut FxHashSet<EntityId>,
) -> Vec<PropertyId> {
    if let Some(resolved) = memo.get(&entity_id) {
        return resolved.clone();
    }
    if !visiting.insert(entity_id) {
        return Vec::new();
    }

    let mut queryable: Vec<PropertyId> = Vec::new();
    if let Some(entity) = env.entity(entity_id) {
        for &property_id in &entity.properties {
            if env
                .property(property_id)
                .is_some_and(|p| p.is_queryable_only)
            {
                push_unique(&mut queryable, property_id);
            }
        }
        if let Some(base_id) = entity.base_entity {
            for id in resolved_queryable(env, base_id, memo, visiting) {
                push_unique(&mut queryable, id);
            }
        }
    }

    visiting.remove(&entity_id);
    memo.insert(entity_id, queryable.clone());
    queryable
}

pub const SUBCLASS_QUERYABLE_ENHANCER: &str = "SubclassQueryableEnhancer";

/// Queryable fields: own queryable-only properties plus the base's.
pub fn subclass_queryable(env: &mut ModelEnvironment) -> EnhancerResult {
    let mut memo: FxHashMap<EntityId, Vec<PropertyId>> = FxHashMap::default();
    let mut visiting: FxHashSet<EntityId> = FxHashSet::default();

    let all_entities: Vec<EntityId> = env.entities_of_types(&crate::model::ModelType::ALL);
    for entity_id in all_entities {
        let queryable = resolved_queryable(env, entity_id, &mut memo, &mut visiting);
        if let Some(entity) = env.entity_mut(entity_id) {
            entity.queryable_fields = queryable;
        }
    }
    EnhancerResult::success(SUBCLASS_QUERYABLE_ENHANCER)
}
