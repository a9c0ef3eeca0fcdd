//! Ordering policies for the balanced ordered map
//!
//! The map is parameterized by two independent total orders: one over two
//! stored values (maintains tree order, detects duplicates) and one between
//! a stored value and an external lookup key (drives search and removal).
//! Keeping them separate lets lookups use a lighter key type than the full
//! stored value, e.g. `str` keys against entries that own a `String` name.

use std::cmp::Ordering;

use crate::error::CollectionError;

/// Total order over two stored values
pub type ValueOrdering<V> = Box<dyn Fn(&V, &V) -> Ordering + Send + Sync>;

/// Total order between a stored value and an external lookup key
pub type KeyOrdering<V, K> = Box<dyn Fn(&V, &K) -> Ordering + Send + Sync>;

/// Capability trait for values that know how to compare against a lookup key
///
/// Implementations must agree with the value's own ordering: for any value
/// `v` and the key it would be stored under, `v.compare_key(key)` must be
/// `Equal`, and two values must order the same way their keys do.
pub trait KeyedValue<K: ?Sized> {
    /// Compare this value against an external lookup key
    fn compare_key(&self, key: &K) -> Ordering;
}

/// Any totally ordered type can be looked up by itself
impl<T: Ord> KeyedValue<T> for T {
    fn compare_key(&self, key: &T) -> Ordering {
        self.cmp(key)
    }
}

/// Builder for runtime-assembled ordering pairs
///
/// Use this when the orderings are decided at runtime (e.g. ascending vs.
/// descending chosen from configuration). Types with an intrinsic order
/// should prefer [`AvlMap::natural`](crate::avl::AvlMap::natural), which
/// checks the capability at compile time instead.
pub struct OrderingConfig<V, K: ?Sized> {
    value_order: Option<ValueOrdering<V>>,
    key_order: Option<KeyOrdering<V, K>>,
}

impl<V, K: ?Sized> OrderingConfig<V, K> {
    /// Create an empty configuration with neither ordering set
    pub fn new() -> Self {
        Self {
            value_order: None,
            key_order: None,
        }
    }

    /// Set the total order used between two stored values
    pub fn with_value_order<F>(mut self, order: F) -> Self
    where
        F: Fn(&V, &V) -> Ordering + Send + Sync + 'static,
    {
        self.value_order = Some(Box::new(order));
        self
    }

    /// Set the total order used between a stored value and a lookup key
    pub fn with_key_order<F>(mut self, order: F) -> Self
    where
        F: Fn(&V, &K) -> Ordering + Send + Sync + 'static,
    {
        self.key_order = Some(Box::new(order));
        self
    }

    /// Resolve the configured pair, failing if it cannot be synthesized
    pub(crate) fn build(
        self,
    ) -> Result<(ValueOrdering<V>, KeyOrdering<V, K>), CollectionError> {
        match (self.value_order, self.key_order) {
            (Some(value_order), Some(key_order)) => Ok((value_order, key_order)),
            (Some(_), None) => Err(CollectionError::InvalidConfiguration(
                "key ordering missing".to_string(),
            )),
            (None, Some(_)) => Err(CollectionError::InvalidConfiguration(
                "value ordering missing".to_string(),
            )),
            (None, None) => Err(CollectionError::InvalidConfiguration(
                "no orderings supplied; types with an intrinsic order can use natural()"
                    .to_string(),
            )),
        }
    }
}

impl<V, K: ?Sized> Default for OrderingConfig<V, K> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn complete_config_builds() {
        let config = OrderingConfig::<i32, i32>::new()
            .with_value_order(|a, b| a.cmp(b))
            .with_key_order(|v, k| v.cmp(k));
        assert!(config.build().is_ok());
    }

    #[test]
    fn missing_key_order_is_invalid() {
        let config = OrderingConfig::<i32, i32>::new().with_value_order(|a, b| a.cmp(b));
        let error = config.build().err().expect("an incomplete pair must not build");
        match error {
            CollectionError::InvalidConfiguration(message) => {
                assert!(message.contains("key ordering"));
            }
            other => panic!("expected InvalidConfiguration, got {other:?}"),
        }
    }

    #[test]
    fn empty_config_is_invalid() {
        let config = OrderingConfig::<i32, i32>::new();
        assert!(matches!(
            config.build(),
            Err(CollectionError::InvalidConfiguration(_))
        ));
    }

    #[test]
    fn keyed_value_blanket_impl_matches_ord() {
        assert_eq!(7_i32.compare_key(&7), Ordering::Equal);
        assert_eq!(3_i32.compare_key(&9), Ordering::Less);
        assert_eq!(9_i32.compare_key(&3), Ordering::Greater);
    }
}
