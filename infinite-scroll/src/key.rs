use alloc::collections::BTreeMap;
#[cfg(feature = "std")]
use std::collections::HashMap;

use crate::{ItemRefMap, ScrollIntoView};

/// The default identity map: item id -> optional node reference.
///
/// A `None` value models a reference that exists but is not attached to a rendered node.
#[cfg(feature = "std")]
pub type ItemRefs<K, T> = HashMap<K, Option<T>>;
#[cfg(not(feature = "std"))]
pub type ItemRefs<K, T> = BTreeMap<K, Option<T>>;

#[cfg(feature = "std")]
impl<K: core::hash::Hash + Eq, T: ScrollIntoView> ItemRefMap<K> for HashMap<K, Option<T>> {
    fn resolve(&self, id: &K) -> Option<&dyn ScrollIntoView> {
        self.get(id)?.as_ref().map(|r| r as &dyn ScrollIntoView)
    }
}

impl<K: Ord, T: ScrollIntoView> ItemRefMap<K> for BTreeMap<K, Option<T>> {
    fn resolve(&self, id: &K) -> Option<&dyn ScrollIntoView> {
        self.get(id)?.as_ref().map(|r| r as &dyn ScrollIntoView)
    }
}
