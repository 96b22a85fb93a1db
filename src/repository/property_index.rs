use indexmap::IndexMap;

use crate::model::{PropertyId, PropertyType};

/// The type-bucketed property registry.
///
/// One ordered sequence per property kind. Insertion order within a bucket is
/// preserved and is semantically meaningful to downstream generators, so the
/// buckets are append-only.
#[derive(Debug, Default)]
pub struct PropertyIndex {
    buckets: IndexMap<PropertyType, Vec<PropertyId>>,
}

impl PropertyIndex {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append to the bucket for `property_type`.
    ///
    /// The environment rejects `Unknown` before minting an id, so every call
    /// here carries a real kind.
    pub(crate) fn add(&mut self, property_type: PropertyType, id: PropertyId) {
        debug_assert_ne!(property_type, PropertyType::Unknown);
        self.buckets.entry(property_type).or_default().push(id);
    }

    /// The bucket for `property_type`, in insertion order.
    pub fn bucket(&self, property_type: PropertyType) -> &[PropertyId] {
        self.buckets
            .get(&property_type)
            .map_or(&[], Vec::as_slice)
    }

    pub fn bucket_len(&self, property_type: PropertyType) -> usize {
        self.bucket(property_type).len()
    }

    pub fn total_len(&self) -> usize {
        self.buckets.values().map(Vec::len).sum()
    }
}
