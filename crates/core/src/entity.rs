//! Entity trait: identity + continuity across state changes.

use core::hash::{Hash, Hasher};

/// Entity marker + minimal interface.
///
/// Entities are compared by identity, never by their other attributes. The
/// identity slot is optional because aggregates receive theirs during
/// initialization; once assigned it does not change.
pub trait Entity {
    /// Strongly-typed entity identifier.
    type Id: Clone + Eq + Hash + core::fmt::Debug;

    /// Name of the concrete entity kind, mixed into the identity hash.
    const KIND: &'static str;

    /// Returns the entity identifier, if one has been assigned.
    fn id(&self) -> Option<&Self::Id>;
}

/// Identity equality for two entities of the same kind.
///
/// Two entities without an identity compare equal, mirroring the wrapped
/// identifier slot.
pub fn identity_eq<E: Entity + ?Sized>(a: &E, b: &E) -> bool {
    a.id() == b.id()
}

/// Hash an entity by `(kind, identity)`; consistent with [`identity_eq`].
pub fn identity_hash<E: Entity + ?Sized, H: Hasher>(entity: &E, state: &mut H) {
    E::KIND.hash(state);
    entity.id().hash(state);
}

/// Derive `PartialEq`, `Eq` and `Hash` for an [`Entity`] from its identity.
#[macro_export]
macro_rules! impl_identity_eq {
    ($t:ty) => {
        impl PartialEq for $t {
            fn eq(&self, other: &Self) -> bool {
                $crate::entity::identity_eq(self, other)
            }
        }

        impl Eq for $t {}

        impl core::hash::Hash for $t {
            fn hash<H: core::hash::Hasher>(&self, state: &mut H) {
                $crate::entity::identity_hash(self, state)
            }
        }
    };
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[derive(Debug)]
    struct Widget {
        id: Option<u32>,
        label: &'static str,
    }

    impl Entity for Widget {
        type Id = u32;
        const KIND: &'static str = "widget";

        fn id(&self) -> Option<&u32> {
            self.id.as_ref()
        }
    }

    crate::impl_identity_eq!(Widget);

    #[test]
    fn equal_identity_ignores_other_attributes() {
        let a = Widget { id: Some(1), label: "a" };
        let b = Widget { id: Some(1), label: "b" };
        assert_ne!(a.label, b.label);
        assert_eq!(a, b);

        let mut set = HashSet::new();
        set.insert(a);
        assert!(!set.insert(b));
    }

    #[test]
    fn different_identity_is_never_equal() {
        let a = Widget { id: Some(1), label: "same" };
        let b = Widget { id: Some(2), label: "same" };
        assert_ne!(a, b);
    }

    #[test]
    fn unassigned_identities_compare_equal() {
        let a = Widget { id: None, label: "a" };
        let b = Widget { id: None, label: "b" };
        assert_eq!(a, b);
        assert_ne!(a, Widget { id: Some(1), label: "a" });
    }
}
