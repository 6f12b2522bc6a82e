//! Strongly typed, zero-cost identifier wrappers.
//!
//! Every model entity lives in a dense `Vec` and is addressed by position.
//! The wrappers keep a `StreetId` from being used where an `IntersectionId`
//! is expected.  The inner integer is `pub`, but callers should prefer
//! `.index()` when indexing.

use std::fmt;

/// Generate a typed ID wrapper around a `u32`.
macro_rules! typed_id {
    ($(#[$attr:meta])* $vis:vis struct $name:ident, $label:literal;) => {
        $(#[$attr])*
        #[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug)]
        #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
        $vis struct $name(pub u32);

        impl $name {
            /// Cast to `usize` for direct use as a `Vec` index.
            #[inline(always)]
            pub fn index(self) -> usize {
                self.0 as usize
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}#{}", $label, self.0)
            }
        }

        impl From<$name> for usize {
            #[inline(always)]
            fn from(id: $name) -> usize {
                id.0 as usize
            }
        }

        impl TryFrom<usize> for $name {
            type Error = std::num::TryFromIntError;
            fn try_from(n: usize) -> Result<$name, Self::Error> {
                u32::try_from(n).map($name)
            }
        }
    };
}

typed_id! {
    /// Index of a car in the route list.  Doubles as the tie-break key when
    /// several cars reach an intersection on the same tick.
    pub struct CarId, "car";
}

typed_id! {
    /// Index of an intersection, in `[0, intersection_count)`.
    pub struct IntersectionId, "intersection";
}

typed_id! {
    /// Index of a directed street, in the order streets were added.
    pub struct StreetId, "street";
}
