//! Height-balanced ordered map
//!
//! An AVL tree generic over the stored value type and a distinct lookup-key
//! type. Tree order and duplicate detection use the value ordering; search
//! and removal use the key ordering. Nodes own their children outright and
//! every mutation rebuilds the touched ancestors on the way back up the
//! descent, so no parent pointers are kept.
//!
//! This type is single-threaded; [`SharedAvlMap`](crate::shared::SharedAvlMap)
//! layers the readers-writer access protocol on top of it.

use std::cmp::Ordering;

use crate::error::CollectionError;
use crate::order::{KeyOrdering, KeyedValue, OrderingConfig, ValueOrdering};

type Link<V> = Option<Box<AvlNode<V>>>;

/// Single node of the tree
///
/// `height` caches the height of the subtree rooted here: a leaf is 0 and
/// an absent child counts as -1.
struct AvlNode<V> {
    value: V,
    left: Link<V>,
    right: Link<V>,
    height: i32,
}

impl<V> AvlNode<V> {
    fn new(value: V) -> Self {
        Self {
            value,
            left: None,
            right: None,
            height: 0,
        }
    }

    fn update_height(&mut self) {
        self.height = 1 + height(&self.left).max(height(&self.right));
    }

    fn balance_factor(&self) -> i32 {
        height(&self.left) - height(&self.right)
    }
}

fn height<V>(link: &Link<V>) -> i32 {
    link.as_ref().map_or(-1, |node| node.height)
}

/// Key-ordered associative container with AVL balancing
///
/// Holds an optional root, the item count, and the two ordering functions
/// supplied at construction. After every public operation the tree satisfies
/// the AVL balance invariant, every cached height is exact, and `len` equals
/// the number of nodes.
pub struct AvlMap<V, K: ?Sized = V> {
    root: Link<V>,
    len: usize,
    value_order: ValueOrdering<V>,
    key_order: KeyOrdering<V, K>,
}

impl<V, K: ?Sized> AvlMap<V, K> {
    /// Create an empty map from an explicit pair of ordering functions
    ///
    /// The pair must agree: a value must compare `Equal` to its own lookup
    /// key, and value order must be consistent with key order.
    pub fn new<FV, FK>(value_order: FV, key_order: FK) -> Self
    where
        FV: Fn(&V, &V) -> Ordering + Send + Sync + 'static,
        FK: Fn(&V, &K) -> Ordering + Send + Sync + 'static,
    {
        Self {
            root: None,
            len: 0,
            value_order: Box::new(value_order),
            key_order: Box::new(key_order),
        }
    }

    /// Create an empty map ordered by the value type's own ordering
    ///
    /// Available when the value type is totally ordered and knows how to
    /// compare itself against the lookup-key type.
    pub fn natural() -> Self
    where
        V: Ord + KeyedValue<K> + 'static,
        K: 'static,
    {
        Self::new(|a: &V, b: &V| a.cmp(b), V::compare_key)
    }

    /// Create an empty map from a runtime-assembled ordering configuration
    ///
    /// # Errors
    ///
    /// `InvalidConfiguration` when the configuration does not supply both
    /// ordering functions.
    pub fn from_config(config: OrderingConfig<V, K>) -> Result<Self, CollectionError> {
        let (value_order, key_order) = config.build()?;
        Ok(Self {
            root: None,
            len: 0,
            value_order,
            key_order,
        })
    }

    /// Number of stored values
    pub fn len(&self) -> usize {
        self.len
    }

    /// Whether the map holds no values
    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    /// Height of the tree: -1 when empty, 0 for a single value
    pub fn height(&self) -> i32 {
        height(&self.root)
    }

    /// Insert a value, keeping the tree balanced
    ///
    /// Descends by the value ordering and rebalances every ancestor on the
    /// way back up.
    ///
    /// # Errors
    ///
    /// `DuplicateKey` when a stored value compares `Equal` to `value`; the
    /// tree is left untouched in that case.
    pub fn insert(&mut self, value: V) -> Result<(), CollectionError> {
        insert_link(&mut self.root, value, &self.value_order)?;
        self.len += 1;
        Ok(())
    }

    /// Remove the value whose key compares `Equal` to `key` and return it
    ///
    /// A node with a right child is replaced in place by the left-most
    /// descendant of its right subtree; a node with only a left child by the
    /// right-most descendant of its left subtree. Every ancestor touched by
    /// the search or the splice is rebalanced bottom-up.
    ///
    /// # Errors
    ///
    /// `NotFound` when no stored value matches `key`.
    pub fn remove(&mut self, key: &K) -> Result<V, CollectionError> {
        let value = remove_link(&mut self.root, key, &self.key_order)?;
        self.len -= 1;
        Ok(value)
    }

    /// Look up a value by key
    ///
    /// # Errors
    ///
    /// `NotFound` when no stored value matches `key`.
    pub fn get(&self, key: &K) -> Result<&V, CollectionError> {
        self.try_get(key).ok_or(CollectionError::NotFound)
    }

    /// Look up a value by key, reporting absence as `None` instead of failing
    pub fn try_get(&self, key: &K) -> Option<&V> {
        let mut current = self.root.as_deref();
        while let Some(node) = current {
            current = match (self.key_order)(&node.value, key) {
                Ordering::Equal => return Some(&node.value),
                Ordering::Greater => node.left.as_deref(),
                Ordering::Less => node.right.as_deref(),
            };
        }
        None
    }

    /// Whether any stored value matches `key`
    pub fn contains(&self, key: &K) -> bool {
        self.try_get(key).is_some()
    }

    /// Drop every value and reset to the empty tree
    pub fn clear(&mut self) {
        self.root = None;
        self.len = 0;
    }

    /// Visit every value in ascending order
    pub fn traverse_in_order<F>(&self, mut visit: F)
    where
        F: FnMut(&V),
    {
        self.traverse_in_order_while(|value| {
            visit(value);
            true
        });
    }

    /// Visit values in ascending order until the visitor returns `false`
    ///
    /// Returns `true` when the traversal ran to completion.
    pub fn traverse_in_order_while<F>(&self, mut visit: F) -> bool
    where
        F: FnMut(&V) -> bool,
    {
        in_order_while(&self.root, &mut visit)
    }

    /// Visit every value in pre-order (node, left, right)
    pub fn traverse_pre_order<F>(&self, mut visit: F)
    where
        F: FnMut(&V),
    {
        self.traverse_pre_order_while(|value| {
            visit(value);
            true
        });
    }

    /// Visit values in pre-order until the visitor returns `false`
    ///
    /// Returns `true` when the traversal ran to completion.
    pub fn traverse_pre_order_while<F>(&self, mut visit: F) -> bool
    where
        F: FnMut(&V) -> bool,
    {
        pre_order_while(&self.root, &mut visit)
    }

    /// Visit every value in post-order (left, right, node)
    pub fn traverse_post_order<F>(&self, mut visit: F)
    where
        F: FnMut(&V),
    {
        self.traverse_post_order_while(|value| {
            visit(value);
            true
        });
    }

    /// Visit values in post-order until the visitor returns `false`
    ///
    /// Returns `true` when the traversal ran to completion.
    pub fn traverse_post_order_while<F>(&self, mut visit: F) -> bool
    where
        F: FnMut(&V) -> bool,
    {
        post_order_while(&self.root, &mut visit)
    }

    /// Visit, in ascending order, every value whose key lies in `[minimum, maximum]`
    ///
    /// Subtrees whose keys provably fall outside the inclusive bound are
    /// pruned without being visited.
    pub fn traverse_key_range<F>(&self, minimum: &K, maximum: &K, mut visit: F)
    where
        F: FnMut(&V),
    {
        self.traverse_key_range_while(minimum, maximum, |value| {
            visit(value);
            true
        });
    }

    /// Ranged in-order visit that stops when the visitor returns `false`
    ///
    /// Returns `true` when the traversal ran to completion.
    pub fn traverse_key_range_while<F>(&self, minimum: &K, maximum: &K, mut visit: F) -> bool
    where
        F: FnMut(&V) -> bool,
    {
        key_range_while(&self.root, &self.key_order, minimum, maximum, &mut visit)
    }

    /// Collect every value into a vector in ascending order
    pub fn to_vec(&self) -> Vec<V>
    where
        V: Clone,
    {
        let mut values = Vec::with_capacity(self.len);
        self.traverse_in_order(|value| values.push(value.clone()));
        values
    }
}

fn insert_link<V>(
    link: &mut Link<V>,
    value: V,
    order: &ValueOrdering<V>,
) -> Result<(), CollectionError> {
    match link {
        None => {
            *link = Some(Box::new(AvlNode::new(value)));
            return Ok(());
        }
        Some(node) => match order(&node.value, &value) {
            Ordering::Equal => return Err(CollectionError::DuplicateKey),
            Ordering::Greater => insert_link(&mut node.left, value, order)?,
            Ordering::Less => insert_link(&mut node.right, value, order)?,
        },
    }
    rebalance(link);
    Ok(())
}

fn remove_link<V, K: ?Sized>(
    link: &mut Link<V>,
    key: &K,
    order: &KeyOrdering<V, K>,
) -> Result<V, CollectionError> {
    let value = match link {
        None => return Err(CollectionError::NotFound),
        Some(node) => match order(&node.value, key) {
            Ordering::Greater => remove_link(&mut node.left, key, order)?,
            Ordering::Less => remove_link(&mut node.right, key, order)?,
            Ordering::Equal => detach(link),
        },
    };
    rebalance(link);
    Ok(value)
}

/// Unlink the node at `link`, wiring its in-order replacement into place
fn detach<V>(link: &mut Link<V>) -> V {
    let mut node = link
        .take()
        .expect("detach is only reached for the matched node");
    let replacement = if node.right.is_some() {
        // Two children (or right only): the left-most descendant of the
        // right subtree takes this node's position.
        let mut successor = remove_leftmost(&mut node.right);
        successor.left = node.left.take();
        successor.right = node.right.take();
        let mut subtree = Some(successor);
        rebalance(&mut subtree);
        subtree
    } else if node.left.is_some() {
        // Left child only: the right-most descendant of the left subtree
        // takes this node's position.
        let mut predecessor = remove_rightmost(&mut node.left);
        predecessor.left = node.left.take();
        predecessor.right = node.right.take();
        let mut subtree = Some(predecessor);
        rebalance(&mut subtree);
        subtree
    } else {
        None
    };
    *link = replacement;
    node.value
}

/// Detach the left-most node of a non-empty subtree
///
/// The detached node's own right child is reattached in its former
/// position, and every node on the descent is rebalanced on the way out.
fn remove_leftmost<V>(link: &mut Link<V>) -> Box<AvlNode<V>> {
    let mut node = link
        .take()
        .expect("leftmost removal requires a non-empty subtree");
    if node.left.is_some() {
        let leftmost = remove_leftmost(&mut node.left);
        *link = Some(node);
        rebalance(link);
        leftmost
    } else {
        *link = node.right.take();
        node
    }
}

/// Detach the right-most node of a non-empty subtree; mirror of
/// [`remove_leftmost`]
fn remove_rightmost<V>(link: &mut Link<V>) -> Box<AvlNode<V>> {
    let mut node = link
        .take()
        .expect("rightmost removal requires a non-empty subtree");
    if node.right.is_some() {
        let rightmost = remove_rightmost(&mut node.right);
        *link = Some(node);
        rebalance(link);
        rightmost
    } else {
        *link = node.left.take();
        node
    }
}

/// Recompute the height at `link` and restore the AVL invariant locally
///
/// When the left subtree is two levels taller and the left child's left side
/// is the taller or equal side, a single right rotation restores balance;
/// otherwise the left child is rotated left first (double rotation). The
/// mirror rules apply to right-heavy nodes. Heights are recomputed for the
/// innermost rebuilt children before the new local root.
fn rebalance<V>(link: &mut Link<V>) {
    let mut node = match link.take() {
        Some(node) => node,
        None => return,
    };
    node.update_height();
    let factor = node.balance_factor();
    debug_assert!(
        factor.abs() <= 2,
        "cached child heights are out of step with the tree shape"
    );
    let node = if factor > 1 {
        let left = node
            .left
            .take()
            .expect("a left-heavy node must have a left child");
        if height(&left.left) >= height(&left.right) {
            node.left = Some(left);
            rotate_right(node)
        } else {
            node.left = Some(rotate_left(left));
            rotate_right(node)
        }
    } else if factor < -1 {
        let right = node
            .right
            .take()
            .expect("a right-heavy node must have a right child");
        if height(&right.right) >= height(&right.left) {
            node.right = Some(right);
            rotate_left(node)
        } else {
            node.right = Some(rotate_right(right));
            rotate_left(node)
        }
    } else {
        node
    };
    *link = Some(node);
}

fn rotate_right<V>(mut root: Box<AvlNode<V>>) -> Box<AvlNode<V>> {
    let mut pivot = root
        .left
        .take()
        .expect("a right rotation requires a left child");
    root.left = pivot.right.take();
    root.update_height();
    pivot.right = Some(root);
    pivot.update_height();
    pivot
}

fn rotate_left<V>(mut root: Box<AvlNode<V>>) -> Box<AvlNode<V>> {
    let mut pivot = root
        .right
        .take()
        .expect("a left rotation requires a right child");
    root.right = pivot.left.take();
    root.update_height();
    pivot.left = Some(root);
    pivot.update_height();
    pivot
}

fn in_order_while<V, F>(link: &Link<V>, visit: &mut F) -> bool
where
    F: FnMut(&V) -> bool,
{
    match link {
        None => true,
        Some(node) => {
            in_order_while(&node.left, visit)
                && visit(&node.value)
                && in_order_while(&node.right, visit)
        }
    }
}

fn pre_order_while<V, F>(link: &Link<V>, visit: &mut F) -> bool
where
    F: FnMut(&V) -> bool,
{
    match link {
        None => true,
        Some(node) => {
            visit(&node.value)
                && pre_order_while(&node.left, visit)
                && pre_order_while(&node.right, visit)
        }
    }
}

fn post_order_while<V, F>(link: &Link<V>, visit: &mut F) -> bool
where
    F: FnMut(&V) -> bool,
{
    match link {
        None => true,
        Some(node) => {
            post_order_while(&node.left, visit)
                && post_order_while(&node.right, visit)
                && visit(&node.value)
        }
    }
}

fn key_range_while<V, K: ?Sized, F>(
    link: &Link<V>,
    order: &KeyOrdering<V, K>,
    minimum: &K,
    maximum: &K,
    visit: &mut F,
) -> bool
where
    F: FnMut(&V) -> bool,
{
    let node = match link {
        None => return true,
        Some(node) => node,
    };
    // The left subtree can only hold in-range keys when this value is
    // above the minimum; the mirror holds for the right subtree.
    if order(&node.value, minimum) == Ordering::Greater
        && !key_range_while(&node.left, order, minimum, maximum, visit)
    {
        return false;
    }
    if order(&node.value, minimum) != Ordering::Less
        && order(&node.value, maximum) != Ordering::Greater
        && !visit(&node.value)
    {
        return false;
    }
    if order(&node.value, maximum) == Ordering::Less
        && !key_range_while(&node.right, order, minimum, maximum, visit)
    {
        return false;
    }
    true
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Walk the whole tree checking cached heights, balance factors, and
    /// the node count against `len`.
    fn assert_invariants<V, K: ?Sized>(map: &AvlMap<V, K>) {
        fn check<V>(link: &Link<V>, count: &mut usize) -> i32 {
            match link {
                None => -1,
                Some(node) => {
                    *count += 1;
                    let left = check(&node.left, count);
                    let right = check(&node.right, count);
                    assert_eq!(
                        node.height,
                        1 + left.max(right),
                        "cached height must match the children"
                    );
                    assert!((left - right).abs() <= 1, "balance factor out of range");
                    node.height
                }
            }
        }
        let mut count = 0;
        check(&map.root, &mut count);
        assert_eq!(count, map.len, "len must equal the number of nodes");
    }

    fn map_of(values: &[i32]) -> AvlMap<i32> {
        let mut map = AvlMap::natural();
        for &value in values {
            map.insert(value).expect("test values are distinct");
        }
        map
    }

    #[test]
    fn empty_map_reports_not_found() {
        let map = AvlMap::<i32>::natural();
        assert_eq!(map.get(&1), Err(CollectionError::NotFound));
        assert_eq!(map.try_get(&1), None);
        assert!(!map.contains(&1));
        assert_eq!(map.len(), 0);
        assert!(map.is_empty());
        assert_eq!(map.height(), -1);
    }

    #[test]
    fn seven_key_insertion_builds_height_two_tree() {
        let map = map_of(&[50, 20, 70, 10, 30, 60, 80]);
        assert_eq!(map.len(), 7);
        assert_eq!(map.height(), 2);
        assert_eq!(map.to_vec(), vec![10, 20, 30, 50, 60, 70, 80]);
        assert_invariants(&map);
    }

    #[test]
    fn removing_the_root_promotes_the_inorder_successor() {
        let mut map = map_of(&[50, 20, 70, 10, 30, 60, 80]);
        assert_eq!(map.remove(&50), Ok(50));
        assert_eq!(map.to_vec(), vec![10, 20, 30, 60, 70, 80]);
        let root = map.root.as_ref().expect("tree is non-empty");
        assert_eq!(root.value, 60);
        assert_invariants(&map);
    }

    #[test]
    fn successor_with_a_right_child_keeps_that_child() {
        let mut map = map_of(&[50, 30, 70, 60, 80, 65, 67]);
        // The in-order successor of the root (65) has a right child (67)
        // that must be reattached in its former position.
        let root = map.root.as_ref().expect("tree is non-empty");
        assert_eq!(root.value, 60);
        assert_eq!(map.remove(&60), Ok(60));
        assert_eq!(map.to_vec(), vec![30, 50, 65, 67, 70, 80]);
        assert_invariants(&map);
    }

    #[test]
    fn left_only_node_is_replaced_by_its_predecessor() {
        let mut map = map_of(&[50, 20, 70, 10]);
        // 20 has a single (left) child.
        assert_eq!(map.remove(&20), Ok(20));
        assert_eq!(map.to_vec(), vec![10, 50, 70]);
        assert_invariants(&map);
    }

    #[test]
    fn leaf_removal_unlinks_the_node() {
        let mut map = map_of(&[50, 20, 70]);
        assert_eq!(map.remove(&20), Ok(20));
        assert_eq!(map.to_vec(), vec![50, 70]);
        assert_invariants(&map);
    }

    #[test]
    fn duplicate_insert_is_rejected_without_side_effects() {
        let mut map = map_of(&[50, 20, 70]);
        assert_eq!(map.insert(50), Err(CollectionError::DuplicateKey));
        assert_eq!(map.len(), 3);
        assert_eq!(map.to_vec(), vec![20, 50, 70]);
        assert_invariants(&map);
    }

    #[test]
    fn removed_keys_stay_absent() {
        let mut map = map_of(&[50, 20, 70]);
        assert_eq!(map.remove(&20), Ok(20));
        assert!(!map.contains(&20));
        assert_eq!(map.remove(&20), Err(CollectionError::NotFound));
        assert_eq!(map.len(), 2);
        assert_invariants(&map);
    }

    #[test]
    fn removing_an_absent_key_leaves_the_tree_unchanged() {
        let mut map = map_of(&[50, 20, 70, 10, 30]);
        let before = map.to_vec();
        assert_eq!(map.remove(&25), Err(CollectionError::NotFound));
        assert_eq!(map.to_vec(), before);
        assert_eq!(map.len(), 5);
        assert_invariants(&map);
    }

    #[test]
    fn single_rotations_restore_balance() {
        // Left-left: descending run forces a single right rotation.
        let descending = map_of(&[3, 2, 1]);
        assert_eq!(descending.height(), 1);
        assert_eq!(descending.to_vec(), vec![1, 2, 3]);
        assert_invariants(&descending);

        // Right-right: ascending run forces a single left rotation.
        let ascending = map_of(&[1, 2, 3]);
        assert_eq!(ascending.height(), 1);
        assert_eq!(ascending.to_vec(), vec![1, 2, 3]);
        assert_invariants(&ascending);
    }

    #[test]
    fn double_rotations_restore_balance() {
        // Left-right case.
        let left_right = map_of(&[3, 1, 2]);
        assert_eq!(left_right.height(), 1);
        assert_eq!(left_right.root.as_ref().map(|n| n.value), Some(2));
        assert_invariants(&left_right);

        // Right-left case.
        let right_left = map_of(&[1, 3, 2]);
        assert_eq!(right_left.height(), 1);
        assert_eq!(right_left.root.as_ref().map(|n| n.value), Some(2));
        assert_invariants(&right_left);
    }

    #[test]
    fn permuted_bulk_insertion_keeps_the_tree_balanced() {
        // 37 is coprime with 101, so this visits every residue once.
        let mut map = AvlMap::<i32>::natural();
        for i in 0..101 {
            map.insert((i * 37) % 101).expect("permutation has no repeats");
        }
        assert_eq!(map.len(), 101);
        assert!(map.height() <= 9, "height {} exceeds AVL bound", map.height());
        assert_eq!(map.to_vec(), (0..101).collect::<Vec<_>>());
        assert_invariants(&map);
    }

    #[test]
    fn interleaved_removals_keep_count_and_balance() {
        let mut map = AvlMap::<i32>::natural();
        for i in 0..101 {
            map.insert((i * 37) % 101).expect("permutation has no repeats");
        }
        let mut removed = 0;
        for key in (0..101).step_by(3) {
            assert_eq!(map.remove(&key), Ok(key));
            removed += 1;
            assert_invariants(&map);
        }
        assert_eq!(map.len(), 101 - removed);
        let expected: Vec<i32> = (0..101).filter(|key| key % 3 != 0).collect();
        assert_eq!(map.to_vec(), expected);
    }

    #[test]
    fn draining_every_key_empties_the_tree() {
        let mut map = map_of(&[50, 20, 70, 10, 30, 60, 80]);
        for key in [10, 80, 50, 20, 60, 30, 70] {
            assert_eq!(map.remove(&key), Ok(key));
            assert_invariants(&map);
        }
        assert!(map.is_empty());
        assert_eq!(map.height(), -1);
    }

    #[test]
    fn traversal_orders_match_the_tree_shape() {
        let map = map_of(&[50, 20, 70, 10, 30, 60, 80]);

        let mut pre = Vec::new();
        map.traverse_pre_order(|&value| pre.push(value));
        assert_eq!(pre, vec![50, 20, 10, 30, 70, 60, 80]);

        let mut post = Vec::new();
        map.traverse_post_order(|&value| post.push(value));
        assert_eq!(post, vec![10, 30, 20, 60, 80, 70, 50]);

        let mut in_order = Vec::new();
        map.traverse_in_order(|&value| in_order.push(value));
        assert_eq!(in_order, vec![10, 20, 30, 50, 60, 70, 80]);
    }

    #[test]
    fn breakable_traversal_stops_on_signal() {
        let map = map_of(&[50, 20, 70, 10, 30, 60, 80]);
        let mut seen = Vec::new();
        let completed = map.traverse_in_order_while(|&value| {
            seen.push(value);
            value != 30
        });
        assert!(!completed);
        assert_eq!(seen, vec![10, 20, 30]);

        let completed = map.traverse_in_order_while(|_| true);
        assert!(completed);
    }

    #[test]
    fn ranged_traversal_visits_the_inclusive_subset() {
        let map = map_of(&[50, 20, 70, 10, 30, 60, 80]);

        let mut mid = Vec::new();
        map.traverse_key_range(&25, &65, |&value| mid.push(value));
        assert_eq!(mid, vec![30, 50, 60]);

        let mut inclusive = Vec::new();
        map.traverse_key_range(&20, &60, |&value| inclusive.push(value));
        assert_eq!(inclusive, vec![20, 30, 50, 60]);

        let mut none = Vec::new();
        map.traverse_key_range(&21, &29, |&value| none.push(value));
        assert!(none.is_empty());

        let mut all = Vec::new();
        map.traverse_key_range(&0, &100, |&value| all.push(value));
        assert_eq!(all, map.to_vec());
    }

    #[test]
    fn to_vec_round_trips_through_reinsertion() {
        let map = map_of(&[50, 20, 70, 10, 30, 60, 80]);
        let exported = map.to_vec();
        let mut rebuilt = AvlMap::<i32>::natural();
        for value in exported {
            rebuilt.insert(value).expect("export holds no duplicates");
        }
        assert_eq!(rebuilt.to_vec(), map.to_vec());
        assert_invariants(&rebuilt);
    }

    #[test]
    fn clear_resets_to_the_empty_state() {
        let mut map = map_of(&[50, 20, 70]);
        map.clear();
        assert_eq!(map.len(), 0);
        assert!(map.is_empty());
        assert_eq!(map.height(), -1);
        assert_eq!(map.get(&50), Err(CollectionError::NotFound));
        map.insert(5).expect("cleared map accepts inserts again");
        assert_eq!(map.to_vec(), vec![5]);
    }

    #[test]
    fn string_values_can_be_looked_up_by_str_keys() {
        let mut map: AvlMap<String, str> =
            AvlMap::new(|a: &String, b| a.cmp(b), |value, key| value.as_str().cmp(key));
        for name in ["dara", "ayla", "chen", "boris"] {
            map.insert(name.to_string()).expect("names are distinct");
        }
        assert_eq!(map.get("chen").map(String::as_str), Ok("chen"));
        assert!(map.contains("ayla"));
        assert!(!map.contains("edda"));
        assert_eq!(map.remove("boris"), Ok("boris".to_string()));
        assert_eq!(
            map.to_vec(),
            vec!["ayla".to_string(), "chen".to_string(), "dara".to_string()]
        );
        assert_invariants(&map);
    }

    #[test]
    fn from_config_builds_a_working_map() {
        let config = OrderingConfig::new()
            .with_value_order(|a: &i32, b: &i32| b.cmp(a))
            .with_key_order(|value: &i32, key: &i32| key.cmp(value));
        let mut map = AvlMap::from_config(config).expect("both orderings supplied");
        for value in [1, 2, 3] {
            map.insert(value).expect("values are distinct");
        }
        // Reversed ordering: exports descend.
        assert_eq!(map.to_vec(), vec![3, 2, 1]);
        assert!(map.contains(&2));
        assert_invariants(&map);
    }
}
