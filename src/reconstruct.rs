//! Contracts shared by domain objects: raw round-trip and identity.

use serde_json::Value;

use crate::error::ApiResult;

/// Access to the raw JSON a domain object was built from.
///
/// `to_raw` returns a deep copy; changing it never affects the object.
pub trait ToRaw {
    fn to_raw(&self) -> Value;
}

/// A domain object that can be rebuilt from the raw JSON it came from.
///
/// `from_raw(obj.to_raw(), http)` yields an object equal to `obj` wherever
/// the type defines equality.
pub trait Reconstruct<H>: ToRaw + Sized {
    /// Build from a raw JSON value and the transport handle for its assets.
    fn from_raw(raw: Value, http: &H) -> ApiResult<Self>;
}

/// A domain object identified by a stable `id`.
///
/// Types implementing this compare and hash by id alone, so two snapshots of
/// the same entity are equal even when other fields differ.
pub trait IdComparable {
    fn id(&self) -> &str;
}

/// Implements [`IdComparable`], `PartialEq`, `Eq` and `Hash` by the `id` field.
///
/// For types generic over the transport handle, equality also holds across
/// handles, so an object from the blocking client equals the async one.
macro_rules! impl_id_eq {
    (generic: $($ty:ident),+ $(,)?) => {$(
        impl<H> $crate::reconstruct::IdComparable for $ty<H> {
            fn id(&self) -> &str {
                &self.id
            }
        }

        impl<H, O> PartialEq<$ty<O>> for $ty<H> {
            fn eq(&self, other: &$ty<O>) -> bool {
                self.id == other.id
            }
        }

        impl<H> Eq for $ty<H> {}

        impl<H> std::hash::Hash for $ty<H> {
            fn hash<S: std::hash::Hasher>(&self, state: &mut S) {
                self.id.hash(state);
            }
        }
    )+};
    ($($ty:ident),+ $(,)?) => {$(
        impl $crate::reconstruct::IdComparable for $ty {
            fn id(&self) -> &str {
                &self.id
            }
        }

        impl PartialEq for $ty {
            fn eq(&self, other: &$ty) -> bool {
                self.id == other.id
            }
        }

        impl Eq for $ty {}

        impl std::hash::Hash for $ty {
            fn hash<S: std::hash::Hasher>(&self, state: &mut S) {
                self.id.hash(state);
            }
        }
    )+};
}

pub(crate) use impl_id_eq;
