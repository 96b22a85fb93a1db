//! Typed arena indices for the model graph.

use std::fmt;

macro_rules! arena_id {
    ($(#[$doc:meta])* $name:ident) => {
        $(#[$doc])*
        #[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
        pub struct $name(u32);

        impl $name {
            pub(crate) fn new(index: usize) -> Self {
                Self(index as u32)
            }

            pub fn index(self) -> usize {
                self.0 as usize
            }
        }

        impl fmt::Debug for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, concat!(stringify!($name), "({})"), self.0)
            }
        }
    };
}

arena_id!(
    /// Index of a [`super::Namespace`] in the environment arena.
    NamespaceId
);
arena_id!(
    /// Index of a [`super::TopLevelEntity`] in the environment arena.
    EntityId
);
arena_id!(
    /// Index of an [`super::EntityProperty`] in the environment arena.
    PropertyId
);
