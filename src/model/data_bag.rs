//! Per-plugin annotation storage.
//!
//! Every namespace, entity, and property carries a [`DataBag`] so plugins can
//! attach derived data without the core model knowing their types. Entries are
//! keyed by plugin name; values are retrieved through typed accessors.

use std::any::Any;
use std::fmt;

use rustc_hash::FxHashMap;
use smol_str::SmolStr;

#[derive(Default)]
pub struct DataBag {
    entries: FxHashMap<SmolStr, Box<dyn Any>>,
}

impl DataBag {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store `value` under `plugin`, replacing any previous entry.
    pub fn insert<T: Any>(&mut self, plugin: &str, value: T) {
        self.entries.insert(SmolStr::new(plugin), Box::new(value));
    }

    /// The entry for `plugin`, if present and of type `T`.
    pub fn get<T: Any>(&self, plugin: &str) -> Option<&T> {
        self.entries.get(plugin)?.downcast_ref()
    }

    pub fn get_mut<T: Any>(&mut self, plugin: &str) -> Option<&mut T> {
        self.entries.get_mut(plugin)?.downcast_mut()
    }

    /// The entry for `plugin`, created with `T::default()` when absent.
    ///
    /// Returns `None` only when an entry of a different type already occupies
    /// the slot.
    pub fn entry_or_default<T: Any + Default>(&mut self, plugin: &str) -> Option<&mut T> {
        self.entries
            .entry(SmolStr::new(plugin))
            .or_insert_with(|| Box::new(T::default()))
            .downcast_mut()
    }

    pub fn contains(&self, plugin: &str) -> bool {
        self.entries.contains_key(plugin)
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl fmt::Debug for DataBag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.entries.keys()).finish()
    }
}
