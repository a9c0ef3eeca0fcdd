//! Concurrent balanced ordered map
//!
//! [`AvlMap`] behind the [`ReadWriteGate`] access protocol. Mutations hold
//! write access for their whole duration, so a rebalancing cascade is never
//! observable half-done; queries and traversals hold read access and any
//! number of them proceed in parallel. All data leaves by value copy:
//! lookups clone, exports clone, and traversal visitors only see borrows
//! for the duration of the held read mode.

use std::cmp::Ordering;

use crate::avl::AvlMap;
use crate::error::CollectionError;
use crate::order::{KeyedValue, OrderingConfig};
use crate::sync::ReadWriteGate;

/// Key-ordered associative container safe for many readers and serialized
/// writers
///
/// Every public operation acquires exactly one access mode for its entire
/// duration and releases it on every exit path, including failed lookups
/// and rejected duplicate inserts.
pub struct SharedAvlMap<V, K: ?Sized = V> {
    inner: ReadWriteGate<AvlMap<V, K>>,
}

impl<V, K: ?Sized> SharedAvlMap<V, K> {
    /// Create an empty map from an explicit pair of ordering functions
    pub fn new<FV, FK>(value_order: FV, key_order: FK) -> Self
    where
        FV: Fn(&V, &V) -> Ordering + Send + Sync + 'static,
        FK: Fn(&V, &K) -> Ordering + Send + Sync + 'static,
    {
        Self {
            inner: ReadWriteGate::new(AvlMap::new(value_order, key_order)),
        }
    }

    /// Create an empty map ordered by the value type's own ordering
    pub fn natural() -> Self
    where
        V: Ord + KeyedValue<K> + 'static,
        K: 'static,
    {
        Self {
            inner: ReadWriteGate::new(AvlMap::natural()),
        }
    }

    /// Create an empty map from a runtime-assembled ordering configuration
    ///
    /// # Errors
    ///
    /// `InvalidConfiguration` when the configuration does not supply both
    /// ordering functions.
    pub fn from_config(config: OrderingConfig<V, K>) -> Result<Self, CollectionError> {
        Ok(Self {
            inner: ReadWriteGate::new(AvlMap::from_config(config)?),
        })
    }

    /// Number of stored values
    pub fn len(&self) -> usize {
        self.inner.read().len()
    }

    /// Whether the map holds no values
    pub fn is_empty(&self) -> bool {
        self.inner.read().is_empty()
    }

    /// Height of the tree: -1 when empty, 0 for a single value
    pub fn height(&self) -> i32 {
        self.inner.read().height()
    }

    /// Insert a value under write access
    ///
    /// # Errors
    ///
    /// `DuplicateKey` when a stored value compares `Equal` to `value`; the
    /// map is unchanged in that case.
    pub fn insert(&self, value: V) -> Result<(), CollectionError> {
        self.inner.write().insert(value)
    }

    /// Remove and return the value matching `key` under write access
    ///
    /// # Errors
    ///
    /// `NotFound` when no stored value matches `key`.
    pub fn remove(&self, key: &K) -> Result<V, CollectionError> {
        self.inner.write().remove(key)
    }

    /// Copy out the value matching `key`
    ///
    /// # Errors
    ///
    /// `NotFound` when no stored value matches `key`.
    pub fn get(&self, key: &K) -> Result<V, CollectionError>
    where
        V: Clone,
    {
        self.inner.read().get(key).cloned()
    }

    /// Copy out the value matching `key`, reporting absence as `None`
    pub fn try_get(&self, key: &K) -> Option<V>
    where
        V: Clone,
    {
        self.inner.read().try_get(key).cloned()
    }

    /// Whether any stored value matches `key`
    pub fn contains(&self, key: &K) -> bool {
        self.inner.read().contains(key)
    }

    /// Drop every value and reset to the empty tree
    pub fn clear(&self) {
        self.inner.write().clear();
    }

    /// Visit every value in ascending order under read access
    pub fn traverse_in_order<F>(&self, visit: F)
    where
        F: FnMut(&V),
    {
        self.inner.read().traverse_in_order(visit);
    }

    /// Ascending visit that stops when the visitor returns `false`
    ///
    /// Returns `true` when the traversal ran to completion.
    pub fn traverse_in_order_while<F>(&self, visit: F) -> bool
    where
        F: FnMut(&V) -> bool,
    {
        self.inner.read().traverse_in_order_while(visit)
    }

    /// Visit every value in pre-order under read access
    pub fn traverse_pre_order<F>(&self, visit: F)
    where
        F: FnMut(&V),
    {
        self.inner.read().traverse_pre_order(visit);
    }

    /// Pre-order visit that stops when the visitor returns `false`
    ///
    /// Returns `true` when the traversal ran to completion.
    pub fn traverse_pre_order_while<F>(&self, visit: F) -> bool
    where
        F: FnMut(&V) -> bool,
    {
        self.inner.read().traverse_pre_order_while(visit)
    }

    /// Visit every value in post-order under read access
    pub fn traverse_post_order<F>(&self, visit: F)
    where
        F: FnMut(&V),
    {
        self.inner.read().traverse_post_order(visit);
    }

    /// Post-order visit that stops when the visitor returns `false`
    ///
    /// Returns `true` when the traversal ran to completion.
    pub fn traverse_post_order_while<F>(&self, visit: F) -> bool
    where
        F: FnMut(&V) -> bool,
    {
        self.inner.read().traverse_post_order_while(visit)
    }

    /// Visit, in ascending order, every value whose key lies in
    /// `[minimum, maximum]`
    pub fn traverse_key_range<F>(&self, minimum: &K, maximum: &K, visit: F)
    where
        F: FnMut(&V),
    {
        self.inner.read().traverse_key_range(minimum, maximum, visit);
    }

    /// Ranged in-order visit that stops when the visitor returns `false`
    ///
    /// Returns `true` when the traversal ran to completion.
    pub fn traverse_key_range_while<F>(&self, minimum: &K, maximum: &K, visit: F) -> bool
    where
        F: FnMut(&V) -> bool,
    {
        self.inner
            .read()
            .traverse_key_range_while(minimum, maximum, visit)
    }

    /// Collect every value into a vector in ascending order
    pub fn to_vec(&self) -> Vec<V>
    where
        V: Clone,
    {
        self.inner.read().to_vec()
    }
}
