//! Namespaces: named scopes with directional visibility.

use indexmap::IndexMap;
use rustc_hash::FxHashMap;
use smol_str::SmolStr;

use super::data_bag::DataBag;
use super::entity::ModelType;
use super::ids::{EntityId, NamespaceId};

/// A named scope holding entity declarations and an ordered list of the
/// namespaces it may see.
///
/// Visibility is strictly directional: an extension namespace lists the core
/// (or other extension) namespaces it depends on; nothing in a core namespace
/// ever resolves into an extension. The per-kind entity maps hold only
/// entities declared directly in this namespace and grow only during build.
#[derive(Debug)]
pub struct Namespace {
    pub namespace_name: SmolStr,
    pub is_extension: bool,
    /// Project prefix used by generators for extension artifacts.
    pub project_extension: SmolStr,
    /// Suffix appended to extension entity names by generators.
    pub extension_entity_suffix: SmolStr,
    /// Namespaces this one may resolve into, in declared order. Scan order is
    /// `[self, dependencies...]`, so the first listed dependency wins a
    /// diamond conflict.
    pub dependencies: Vec<NamespaceId>,
    pub(crate) entities: FxHashMap<ModelType, IndexMap<SmolStr, EntityId>>,
    pub data: DataBag,
}

impl Namespace {
    /// A core namespace: no project extension, sees only what it lists.
    pub fn core(name: impl Into<SmolStr>) -> Self {
        Self {
            namespace_name: name.into(),
            is_extension: false,
            project_extension: SmolStr::default(),
            extension_entity_suffix: SmolStr::default(),
            dependencies: Vec::new(),
            entities: FxHashMap::default(),
            data: DataBag::new(),
        }
    }

    pub fn extension(name: impl Into<SmolStr>, project_extension: impl Into<SmolStr>) -> Self {
        Self {
            is_extension: true,
            project_extension: project_extension.into(),
            extension_entity_suffix: SmolStr::new("Extension"),
            ..Self::core(name)
        }
    }

    /// The entity of `model_type` named `name` declared directly here.
    pub fn entity(&self, model_type: ModelType, name: &str) -> Option<EntityId> {
        self.entities.get(&model_type)?.get(name).copied()
    }

    /// All entities of `model_type` declared here, in declaration order.
    pub fn entities_of_type(&self, model_type: ModelType) -> impl Iterator<Item = EntityId> + '_ {
        self.entities
            .get(&model_type)
            .into_iter()
            .flat_map(|map| map.values().copied())
    }

    /// Declared (name, id) pairs of `model_type`, in declaration order.
    pub fn entity_names_of_type(
        &self,
        model_type: ModelType,
    ) -> impl Iterator<Item = (&SmolStr, EntityId)> + '_ {
        self.entities
            .get(&model_type)
            .into_iter()
            .flat_map(|map| map.iter().map(|(name, id)| (name, *id)))
    }

    pub fn entity_count(&self, model_type: ModelType) -> usize {
        self.entities.get(&model_type).map_or(0, IndexMap::len)
    }
}
