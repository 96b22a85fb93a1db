use indexmap::IndexMap;
use smol_str::SmolStr;
use thiserror::Error;
use tracing::trace;

use crate::model::{
    DataBag, EntityId, EntityProperty, ModelType, Namespace, NamespaceId, PropertyId,
    PropertyType, TopLevelEntity,
};

use super::property_index::PropertyIndex;

/// Errors raised while building the model graph.
///
/// These surface only from build-time mutation; enrichment and validation
/// never return them.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ModelError {
    #[error("namespace '{name}' is already registered")]
    DuplicateNamespace { name: SmolStr },

    #[error("{model_type} '{name}' is already declared in namespace '{namespace}'")]
    DuplicateEntityName {
        model_type: ModelType,
        name: SmolStr,
        namespace: SmolStr,
    },

    #[error("property '{name}' has unknown type and cannot be indexed")]
    UnknownPropertyType { name: SmolStr },

    #[error("dependency from '{from}' to '{to}' would make the namespace graph cyclic")]
    CyclicNamespaceDependency { from: SmolStr, to: SmolStr },

    #[error("namespace id is not registered in this environment")]
    UnknownNamespace,
}

/// The shared graph of one compilation run.
///
/// Owns the namespace, entity, and property arenas plus the property index.
/// The external builder populates it; enhancers annotate it in place; ids
/// handed out by this environment are valid for its whole lifetime (nothing
/// is ever removed).
#[derive(Debug, Default)]
pub struct ModelEnvironment {
    namespaces: Vec<Namespace>,
    entities: Vec<TopLevelEntity>,
    properties: Vec<EntityProperty>,
    namespace_by_name: IndexMap<SmolStr, NamespaceId>,
    pub property_index: PropertyIndex,
    /// Run-level plugin annotations.
    pub data: DataBag,
}

impl ModelEnvironment {
    pub fn new() -> Self {
        Self::default()
    }

    // ============================================================
    // Namespace registry
    // ============================================================

    pub fn add_namespace(&mut self, namespace: Namespace) -> Result<NamespaceId, ModelError> {
        if self
            .namespace_by_name
            .contains_key(&namespace.namespace_name)
        {
            return Err(ModelError::DuplicateNamespace {
                name: namespace.namespace_name.clone(),
            });
        }
        let id = NamespaceId::new(self.namespaces.len());
        self.namespace_by_name
            .insert(namespace.namespace_name.clone(), id);
        self.namespaces.push(namespace);
        Ok(id)
    }

    pub fn namespace(&self, id: NamespaceId) -> Option<&Namespace> {
        self.namespaces.get(id.index())
    }

    pub fn namespace_mut(&mut self, id: NamespaceId) -> Option<&mut Namespace> {
        self.namespaces.get_mut(id.index())
    }

    pub fn namespace_named(&self, name: &str) -> Option<NamespaceId> {
        self.namespace_by_name.get(name).copied()
    }

    /// All namespaces in registration order.
    pub fn namespace_ids(&self) -> impl Iterator<Item = NamespaceId> + '_ {
        (0..self.namespaces.len()).map(NamespaceId::new)
    }

    /// Add a dependency edge, rejecting edges that would create a cycle.
    ///
    /// Lookup itself never walks transitively, but generators are free to
    /// precompute visibility closures, so acyclicity is established here at
    /// registration time.
    pub fn add_dependency(
        &mut self,
        from: NamespaceId,
        to: NamespaceId,
    ) -> Result<(), ModelError> {
        if from == to || self.depends_on(to, from) {
            let name = |id: NamespaceId| {
                self.namespace(id)
                    .map(|ns| ns.namespace_name.clone())
                    .unwrap_or_default()
            };
            return Err(ModelError::CyclicNamespaceDependency {
                from: name(from),
                to: name(to),
            });
        }
        if let Some(namespace) = self.namespace_mut(from) {
            namespace.dependencies.push(to);
        }
        Ok(())
    }

    /// Whether `from` can reach `to` through dependency edges.
    fn depends_on(&self, from: NamespaceId, to: NamespaceId) -> bool {
        let Some(namespace) = self.namespace(from) else {
            return false;
        };
        namespace
            .dependencies
            .iter()
            .any(|&dep| dep == to || self.depends_on(dep, to))
    }

    /// The lookup chain for a namespace: itself, then its direct dependencies
    /// in declared order.
    pub fn namespace_chain(&self, id: NamespaceId) -> Vec<NamespaceId> {
        let mut chain = vec![id];
        if let Some(namespace) = self.namespace(id) {
            chain.extend(namespace.dependencies.iter().copied());
        }
        chain
    }

    // ============================================================
    // Entities
    // ============================================================

    /// Register an entity in its namespace. Errors when the (namespace, kind,
    /// name) slot is already taken.
    pub fn add_entity(&mut self, entity: TopLevelEntity) -> Result<EntityId, ModelError> {
        let id = EntityId::new(self.entities.len());
        let namespace_name = self
            .namespace(entity.namespace)
            .map(|ns| ns.namespace_name.clone())
            .unwrap_or_default();
        let Some(namespace) = self.namespaces.get_mut(entity.namespace.index()) else {
            return Err(ModelError::UnknownNamespace);
        };
        let by_name = namespace.entities.entry(entity.model_type).or_default();
        if by_name.contains_key(&entity.name) {
            return Err(ModelError::DuplicateEntityName {
                model_type: entity.model_type,
                name: entity.name.clone(),
                namespace: namespace_name,
            });
        }
        by_name.insert(entity.name.clone(), id);
        self.entities.push(entity);
        Ok(id)
    }

    pub fn entity(&self, id: EntityId) -> Option<&TopLevelEntity> {
        self.entities.get(id.index())
    }

    pub fn entity_mut(&mut self, id: EntityId) -> Option<&mut TopLevelEntity> {
        self.entities.get_mut(id.index())
    }

    /// First entity of `model_type` named `name` found scanning `chain` in
    /// order. Shadowing is well-defined: an earlier chain entry wins.
    pub fn find_entity_in_chain(
        &self,
        name: &str,
        model_type: ModelType,
        chain: &[NamespaceId],
    ) -> Option<EntityId> {
        self.find_entity_of_types_in_chain(name, &[model_type], chain)
    }

    /// Kind-set variant of [`find_entity_in_chain`](Self::find_entity_in_chain):
    /// within each namespace, kinds are tried in the order given.
    pub fn find_entity_of_types_in_chain(
        &self,
        name: &str,
        model_types: &[ModelType],
        chain: &[NamespaceId],
    ) -> Option<EntityId> {
        for &namespace_id in chain {
            let Some(namespace) = self.namespace(namespace_id) else {
                continue;
            };
            for &model_type in model_types {
                if let Some(entity) = namespace.entity(model_type, name) {
                    trace!(
                        name,
                        %model_type,
                        namespace = %namespace.namespace_name,
                        "resolved entity in chain"
                    );
                    return Some(entity);
                }
            }
        }
        trace!(name, ?model_types, "entity not found in chain");
        None
    }

    /// All entities of `model_type`, namespaces in registration order and
    /// entities in declaration order within each.
    pub fn entities_of_type(&self, model_type: ModelType) -> Vec<EntityId> {
        self.namespaces
            .iter()
            .flat_map(|ns| ns.entities_of_type(model_type))
            .collect()
    }

    pub fn entities_of_types(&self, model_types: &[ModelType]) -> Vec<EntityId> {
        model_types
            .iter()
            .flat_map(|&model_type| self.entities_of_type(model_type))
            .collect()
    }

    pub fn entities_of_type_for_namespaces(
        &self,
        model_type: ModelType,
        namespaces: &[NamespaceId],
    ) -> Vec<EntityId> {
        namespaces
            .iter()
            .filter_map(|&id| self.namespace(id))
            .flat_map(|ns| ns.entities_of_type(model_type))
            .collect()
    }

    // ============================================================
    // Properties
    // ============================================================

    /// Attach a property to an entity: arena, property index, parent back-
    /// reference, and the entity's declaration-ordered property list.
    ///
    /// Rejects properties whose kind is still the `Unknown` sentinel, since
    /// that indicates an incompletely-built property.
    pub fn add_property_to_entity(
        &mut self,
        entity_id: EntityId,
        mut property: EntityProperty,
    ) -> Result<PropertyId, ModelError> {
        if property.property_type() == PropertyType::Unknown {
            return Err(ModelError::UnknownPropertyType {
                name: property.name.clone(),
            });
        }
        property.parent_entity = Some(entity_id);
        let property_type = property.property_type();
        let id = PropertyId::new(self.properties.len());
        self.properties.push(property);
        self.property_index.add(property_type, id);
        if let Some(entity) = self.entity_mut(entity_id) {
            entity.properties.push(id);
        }
        Ok(id)
    }

    pub fn property(&self, id: PropertyId) -> Option<&EntityProperty> {
        self.properties.get(id.index())
    }

    pub fn property_mut(&mut self, id: PropertyId) -> Option<&mut EntityProperty> {
        self.properties.get_mut(id.index())
    }

    /// Concatenation of the requested kind buckets, preserving per-bucket
    /// insertion order.
    pub fn properties_of_type(&self, property_types: &[PropertyType]) -> Vec<PropertyId> {
        property_types
            .iter()
            .flat_map(|&property_type| self.property_index.bucket(property_type))
            .copied()
            .collect()
    }

    /// [`properties_of_type`](Self::properties_of_type) filtered to properties
    /// declared in one of `namespaces`. The filter compares namespace ids,
    /// never names.
    pub fn properties_of_type_for_namespaces(
        &self,
        property_types: &[PropertyType],
        namespaces: &[NamespaceId],
    ) -> Vec<PropertyId> {
        self.properties_of_type(property_types)
            .into_iter()
            .filter(|&id| {
                self.property(id)
                    .is_some_and(|p| namespaces.contains(&p.namespace))
            })
            .collect()
    }

    /// Every indexed property across all 24 kind buckets.
    pub fn all_properties(&self) -> Vec<PropertyId> {
        self.properties_of_type(&PropertyType::ALL)
    }
}
