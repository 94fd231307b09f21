//! Typed identifiers for agents, resources, and structures.
//!
//! Each id is an index into the arena that owns the entity, so `.index()`
//! is the only conversion code needs.  New ids are minted from an arena
//! length with `TryFrom<usize>`, which fails instead of wrapping.

use std::fmt;

use crate::PfError;

/// Generate a typed ID wrapper around a primitive integer.
macro_rules! typed_id {
    ($(#[$attr:meta])* $vis:vis struct $name:ident($inner:ty);) => {
        $(#[$attr])*
        #[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug)]
        #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
        $vis struct $name(pub $inner);

        impl $name {
            /// Cast to `usize` for direct use as a `Vec` index.
            #[inline(always)]
            pub fn index(self) -> usize {
                self.0 as usize
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}({})", stringify!($name), self.0)
            }
        }

        /// Checked conversion from an arena length or position.
        impl TryFrom<usize> for $name {
            type Error = PfError;
            fn try_from(n: usize) -> Result<$name, PfError> {
                <$inner>::try_from(n)
                    .map($name)
                    .map_err(|_| PfError::IdOverflow { kind: stringify!($name), index: n })
            }
        }
    };
}

typed_id! {
    /// Index of a foraging agent.  Equals its position in the sim's fixed
    /// step order (reactive, state-based, goal-based, cooperative).
    pub struct AgentId(u32);
}

typed_id! {
    /// Index of a resource in the world's resource arena.
    pub struct ResourceId(u32);
}

typed_id! {
    /// Index of a heavy structure in the world's structure list.
    pub struct StructureId(u32);
}
