//! In-memory implementation of the short link store.

use std::collections::HashMap;
use std::collections::hash_map::Entry;
use std::sync::Mutex;

use crate::domain::entities::ShortLink;
use crate::domain::repositories::LinkStore;

/// Short link map shared across request-handling tasks.
///
/// A single mutex guards the map; the lock is held only for the duration of
/// the map operation itself, never across validation or I/O. Constructed
/// once at startup and handed to the service through shared state.
pub struct MemoryLinkStore {
    links: Mutex<HashMap<String, ShortLink>>,
}

impl MemoryLinkStore {
    pub fn new() -> Self {
        Self {
            links: Mutex::new(HashMap::new()),
        }
    }
}

impl Default for MemoryLinkStore {
    fn default() -> Self {
        Self::new()
    }
}

impl LinkStore for MemoryLinkStore {
    fn insert(&self, code: &str, long_url: &str) -> bool {
        let mut links = self.links.lock().expect("link store mutex poisoned");

        match links.entry(code.to_string()) {
            Entry::Occupied(_) => false,
            Entry::Vacant(slot) => {
                slot.insert(ShortLink::new(code.to_string(), long_url.to_string()));
                true
            }
        }
    }

    fn resolve(&self, code: &str) -> Option<String> {
        let mut links = self.links.lock().expect("link store mutex poisoned");

        links.get_mut(code).map(|link| {
            link.clicks += 1;
            link.long_url.clone()
        })
    }

    fn stats(&self, code: &str) -> Option<ShortLink> {
        let links = self.links.lock().expect("link store mutex poisoned");

        links.get(code).cloned()
    }
}
