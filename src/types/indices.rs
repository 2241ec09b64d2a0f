//! Strongly-typed index newtypes.
//!
//! The assembly layer hands this crate opaque integer keys for the element
//! and the element-local side it is evaluating. Newtypes keep the two from
//! being swapped at a call site.

use std::fmt;

/// Macro to generate index newtypes with common functionality.
macro_rules! define_index {
    (
        $(#[$meta:meta])*
        $name:ident, $display_prefix:literal
    ) => {
        $(#[$meta])*
        #[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
        #[repr(transparent)]
        pub struct $name(usize);

        impl $name {
            /// Create a new index.
            #[inline]
            pub const fn new(index: usize) -> Self {
                Self(index)
            }

            /// Get the raw index value.
            #[inline]
            pub const fn get(self) -> usize {
                self.0
            }

            /// First index (0).
            pub const ZERO: Self = Self(0);
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}{}", $display_prefix, self.0)
            }
        }

        impl From<usize> for $name {
            #[inline]
            fn from(index: usize) -> Self {
                Self(index)
            }
        }

        impl From<$name> for usize {
            #[inline]
            fn from(idx: $name) -> usize {
                idx.0
            }
        }
    };
}

define_index!(
    /// Mesh element identifier, assigned by the assembly layer.
    ElementIndex,
    "elem"
);

define_index!(
    /// Element-local side (face) identifier.
    SideIndex,
    "side"
);

/// A boundary face: the `(element, side)` pair that keys the flux cache.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct FaceId {
    pub elem: ElementIndex,
    pub side: SideIndex,
}

impl FaceId {
    /// Create a face id from its element and side.
    #[inline]
    pub const fn new(elem: ElementIndex, side: SideIndex) -> Self {
        Self { elem, side }
    }
}

impl fmt::Display for FaceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.elem, self.side)
    }
}
