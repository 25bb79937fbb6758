//! Session-scoped TypedDict cache

use sdk_stubgen_common::type_annotations::{SharedTypedDict, TypedDict};
use std::cell::RefCell;
use std::collections::HashMap;
use tracing::debug;

/// Named TypedDict instances created while translating one service
///
/// A name maps to exactly one shared instance for the lifetime of the cache,
/// so every referent sees the same fields. The first instance stored under a
/// name wins.
#[derive(Debug, Default)]
pub struct TypeDefCache {
    entries: RefCell<HashMap<String, SharedTypedDict>>,
}

impl TypeDefCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, name: &str) -> Option<SharedTypedDict> {
        let cached = self.entries.borrow().get(name).cloned();
        if cached.is_some() {
            debug!("TypedDict cache hit: {}", name);
        }
        cached
    }

    /// Store a new instance, or return the one already stored under its name
    pub fn insert(&self, typed_dict: SharedTypedDict) -> SharedTypedDict {
        self.entries
            .borrow_mut()
            .entry(typed_dict.name())
            .or_insert(typed_dict)
            .clone()
    }

    /// Cached instance for `name`, building it with `build` on a miss
    pub fn get_or_insert_with<F>(&self, name: &str, build: F) -> SharedTypedDict
    where
        F: FnOnce() -> TypedDict,
    {
        if let Some(cached) = self.get(name) {
            return cached;
        }
        self.insert(SharedTypedDict::from_typed_dict(build()))
    }

    pub fn len(&self) -> usize {
        self.entries.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.borrow().is_empty()
    }

    /// Cached names, sorted
    pub fn names(&self) -> Vec<String> {
        let mut names: Vec<String> = self.entries.borrow().keys().cloned().collect();
        names.sort();
        names
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_instance_wins() {
        let cache = TypeDefCache::new();
        let first = cache.insert(SharedTypedDict::new("ThingTypeDef"));
        let second = cache.insert(SharedTypedDict::new("ThingTypeDef"));

        assert!(first.ptr_eq(&second));
        assert_eq!(cache.len(), 1);
    }

    #[test]
    fn test_get_or_insert_builds_once() {
        let cache = TypeDefCache::new();
        let mut builds = 0;
        let a = cache.get_or_insert_with("ConfigTypeDef", || {
            builds += 1;
            TypedDict::new("ConfigTypeDef")
        });
        let b = cache.get_or_insert_with("ConfigTypeDef", || TypedDict::new("ConfigTypeDef"));

        assert_eq!(builds, 1);
        assert!(a.ptr_eq(&b));
        assert_eq!(cache.names(), vec!["ConfigTypeDef"]);
    }
}
