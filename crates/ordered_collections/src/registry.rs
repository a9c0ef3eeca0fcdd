//! Named-state registry
//!
//! Registers shared objects under unique string names and tracks a current
//! selection. Entries live in a [`SharedAvlMap`] keyed by `str`, so lookups
//! never allocate a `String`: the stored entry owns the name and the lookup
//! borrows one, which is the value/key split the map is built around.

use std::cmp::Ordering;
use std::sync::{Arc, Mutex};

use thiserror::Error;

use crate::order::KeyedValue;
use crate::shared::SharedAvlMap;

/// Errors reported by the registry
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RegistryError {
    /// The name is already taken by another entry
    #[error("'{0}' is already registered")]
    AlreadyRegistered(String),

    /// No entry is registered under the name
    #[error("'{0}' is not registered")]
    Unknown(String),
}

/// A registered entry: the unique name plus the shared state behind it
pub struct RegistryEntry<T> {
    name: String,
    state: Arc<T>,
}

impl<T> RegistryEntry<T> {
    /// The unique name this entry is registered under
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The registered state
    pub fn state(&self) -> &Arc<T> {
        &self.state
    }
}

impl<T> Clone for RegistryEntry<T> {
    fn clone(&self) -> Self {
        Self {
            name: self.name.clone(),
            state: Arc::clone(&self.state),
        }
    }
}

impl<T> PartialEq for RegistryEntry<T> {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name
    }
}

impl<T> Eq for RegistryEntry<T> {}

impl<T> PartialOrd for RegistryEntry<T> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<T> Ord for RegistryEntry<T> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.name.cmp(&other.name)
    }
}

impl<T> KeyedValue<str> for RegistryEntry<T> {
    fn compare_key(&self, key: &str) -> Ordering {
        self.name.as_str().cmp(key)
    }
}

/// Name-keyed registry of shared states with a current selection
pub struct NamedRegistry<T> {
    entries: SharedAvlMap<RegistryEntry<T>, str>,
    current: Mutex<Option<Arc<T>>>,
}

impl<T: 'static> NamedRegistry<T> {
    /// Create an empty registry
    pub fn new() -> Self {
        Self {
            entries: SharedAvlMap::natural(),
            current: Mutex::new(None),
        }
    }

    /// Register `state` under `name` and hand back the shared handle
    ///
    /// # Errors
    ///
    /// `AlreadyRegistered` when the name is taken; the registry is
    /// unchanged in that case.
    pub fn register(&self, name: impl Into<String>, state: T) -> Result<Arc<T>, RegistryError> {
        let name = name.into();
        if self.entries.contains(name.as_str()) {
            log::error!("'{}' is already registered", name);
            return Err(RegistryError::AlreadyRegistered(name));
        }
        let state = Arc::new(state);
        let entry = RegistryEntry {
            name: name.clone(),
            state: Arc::clone(&state),
        };
        // A racing registration can still win between the check and the
        // insert; the map's duplicate rejection closes that window.
        self.entries
            .insert(entry)
            .map_err(|_| RegistryError::AlreadyRegistered(name.clone()))?;
        log::debug!("'{}' registered", name);
        Ok(state)
    }

    /// Make the named entry current and return its handle
    ///
    /// # Errors
    ///
    /// `Unknown` when no entry is registered under `name`.
    pub fn select(&self, name: &str) -> Result<Arc<T>, RegistryError> {
        let entry = self
            .entries
            .try_get(name)
            .ok_or_else(|| RegistryError::Unknown(name.to_string()))?;
        let state = Arc::clone(entry.state());
        *self.current.lock().unwrap() = Some(Arc::clone(&state));
        log::info!("'{}' selected", name);
        Ok(state)
    }

    /// The currently selected state, if any
    pub fn current(&self) -> Option<Arc<T>> {
        self.current.lock().unwrap().clone()
    }

    /// Look up a registered state by name
    ///
    /// # Errors
    ///
    /// `Unknown` when no entry is registered under `name`.
    pub fn get(&self, name: &str) -> Result<Arc<T>, RegistryError> {
        self.entries
            .try_get(name)
            .map(|entry| Arc::clone(entry.state()))
            .ok_or_else(|| RegistryError::Unknown(name.to_string()))
    }

    /// Whether an entry is registered under `name`
    pub fn contains(&self, name: &str) -> bool {
        self.entries.contains(name)
    }

    /// Remove the named entry, clearing the current selection if it was
    /// the one removed
    ///
    /// # Errors
    ///
    /// `Unknown` when no entry is registered under `name`.
    pub fn deregister(&self, name: &str) -> Result<(), RegistryError> {
        match self.entries.remove(name) {
            Ok(entry) => {
                let mut current = self.current.lock().unwrap();
                if let Some(selected) = current.as_ref() {
                    if Arc::ptr_eq(selected, entry.state()) {
                        *current = None;
                    }
                }
                log::debug!("'{}' deregistered", name);
                Ok(())
            }
            Err(_) => Err(RegistryError::Unknown(name.to_string())),
        }
    }

    /// Registered names in ascending order
    pub fn names(&self) -> Vec<String> {
        let mut names = Vec::with_capacity(self.len());
        self.entries
            .traverse_in_order(|entry| names.push(entry.name.clone()));
        names
    }

    /// Number of registered entries
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the registry holds no entries
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<T: 'static> Default for NamedRegistry<T> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, PartialEq, Eq)]
    struct Screen {
        title: &'static str,
    }

    fn demo_registry() -> NamedRegistry<Screen> {
        let registry = NamedRegistry::new();
        for (name, title) in [
            ("menu", "Main Menu"),
            ("gameplay", "In Game"),
            ("paused", "Paused"),
        ] {
            registry
                .register(name, Screen { title })
                .expect("names are distinct");
        }
        registry
    }

    #[test]
    fn register_and_get_by_name() {
        let registry = demo_registry();
        assert_eq!(registry.len(), 3);
        assert!(registry.contains("menu"));
        assert!(!registry.contains("credits"));
        assert_eq!(registry.get("paused").unwrap().title, "Paused");
        assert_eq!(
            registry.get("credits"),
            Err(RegistryError::Unknown("credits".to_string()))
        );
    }

    #[test]
    fn duplicate_names_are_rejected() {
        let registry = demo_registry();
        let result = registry.register("menu", Screen { title: "Other" });
        assert_eq!(
            result,
            Err(RegistryError::AlreadyRegistered("menu".to_string()))
        );
        assert_eq!(registry.len(), 3);
    }

    #[test]
    fn select_tracks_the_current_state() {
        let registry = demo_registry();
        assert!(registry.current().is_none());
        let selected = registry.select("gameplay").expect("state exists");
        assert_eq!(selected.title, "In Game");
        let current = registry.current().expect("a state is selected");
        assert!(Arc::ptr_eq(&current, &selected));
        assert_eq!(
            registry.select("credits"),
            Err(RegistryError::Unknown("credits".to_string()))
        );
    }

    #[test]
    fn deregister_clears_a_matching_selection() {
        let registry = demo_registry();
        registry.select("paused").expect("state exists");
        registry.deregister("paused").expect("state exists");
        assert!(registry.current().is_none());
        assert!(!registry.contains("paused"));
        assert_eq!(
            registry.deregister("paused"),
            Err(RegistryError::Unknown("paused".to_string()))
        );
    }

    #[test]
    fn deregister_keeps_an_unrelated_selection() {
        let registry = demo_registry();
        registry.select("menu").expect("state exists");
        registry.deregister("paused").expect("state exists");
        assert!(registry.current().is_some());
    }

    #[test]
    fn names_come_back_sorted() {
        let registry = demo_registry();
        assert_eq!(registry.names(), vec!["gameplay", "menu", "paused"]);
    }
}
