//! # Ordered Collections
//!
//! Concurrent height-balanced ordered collections with split value/key
//! ordering.
//!
//! ## Features
//!
//! - **Balanced Ordered Map**: AVL tree with O(log n) insert, remove, and
//!   lookup, plus in-order, pre-order, post-order, and ranged traversals
//! - **Split Orderings**: tree order over stored values, lookup by a
//!   distinct (possibly lighter) key type such as `str`
//! - **Readers-Writer Gate**: hand-rolled shared-read / exclusive-write
//!   access protocol reusable by other containers
//! - **Named Registry**: string-keyed registry of shared states with a
//!   current selection, built on the concurrent map
//!
//! ## Quick Start
//!
//! ```rust
//! use ordered_collections::SharedAvlMap;
//!
//! let scores = SharedAvlMap::<i32>::natural();
//! scores.insert(20)?;
//! scores.insert(10)?;
//! assert!(scores.contains(&10));
//! assert_eq!(scores.to_vec(), vec![10, 20]);
//! # Ok::<(), ordered_collections::CollectionError>(())
//! ```

#![warn(missing_docs)]
#![warn(clippy::all, clippy::pedantic, clippy::nursery)]
#![allow(clippy::module_name_repetitions, clippy::similar_names)]

pub mod avl;
pub mod error;
pub mod logging;
pub mod order;
pub mod registry;
pub mod shared;
pub mod sync;

pub use avl::AvlMap;
pub use error::CollectionError;
pub use order::{KeyedValue, OrderingConfig};
pub use registry::{NamedRegistry, RegistryError};
pub use shared::SharedAvlMap;
pub use sync::ReadWriteGate;

/// Common imports for collection users
pub mod prelude {
    pub use crate::{
        avl::AvlMap,
        error::CollectionError,
        order::{KeyedValue, OrderingConfig},
        registry::{NamedRegistry, RegistryError},
        shared::SharedAvlMap,
        sync::ReadWriteGate,
    };
}
