//! Process-wide stylesheet registration.
//!
//! Widgets that need a shared stylesheet (carousel base layout, typewriter
//! cursor) register it under a stable key. The first registration tells the
//! host to inject the sheet; the last release tells it to remove the sheet.
//! Registrations are reference counted, so mounting the same widget many times
//! injects once.

use std::sync::{Mutex, MutexGuard};

use hashbrown::HashMap;
use once_cell::sync::Lazy;

static GLOBAL: Lazy<StyleRegistry> = Lazy::new(StyleRegistry::new);

#[derive(Debug)]
struct Entry {
    css: String,
    refs: usize,
}

/// Reference-counted table of stylesheets keyed by a stable identifier.
#[derive(Debug, Default)]
pub struct StyleRegistry {
    entries: Mutex<HashMap<String, Entry>>,
}

impl StyleRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// The lazily initialised registry shared by the whole process.
    pub fn global() -> &'static StyleRegistry {
        &GLOBAL
    }

    fn lock(&self) -> MutexGuard<'_, HashMap<String, Entry>> {
        // A panic while holding the lock leaves the table consistent (every
        // mutation is a single insert/remove), so recover from poisoning.
        self.entries.lock().unwrap_or_else(|e| e.into_inner())
    }

    /// Register `css` under `key`. Returns true when this is the first live
    /// registration, i.e. the host should inject the stylesheet now.
    ///
    /// Later registrations keep the css of the first one.
    pub fn acquire(&self, key: &str, css: &str) -> bool {
        let mut entries = self.lock();
        match entries.get_mut(key) {
            Some(entry) => {
                entry.refs += 1;
                false
            }
            None => {
                log::debug!("style registry: registering '{key}'");
                entries.insert(
                    key.to_string(),
                    Entry {
                        css: css.to_string(),
                        refs: 1,
                    },
                );
                true
            }
        }
    }

    /// Drop one registration of `key`. Returns true when it was the last one,
    /// i.e. the host should remove the stylesheet now. Unknown keys return false.
    pub fn release(&self, key: &str) -> bool {
        let mut entries = self.lock();
        let Some(entry) = entries.get_mut(key) else {
            return false;
        };
        entry.refs = entry.refs.saturating_sub(1);
        if entry.refs == 0 {
            entries.remove(key);
            log::debug!("style registry: released last reference to '{key}'");
            true
        } else {
            false
        }
    }

    pub fn ref_count(&self, key: &str) -> usize {
        self.lock().get(key).map(|e| e.refs).unwrap_or(0)
    }

    pub fn css(&self, key: &str) -> Option<String> {
        self.lock().get(key).map(|e| e.css.clone())
    }

    /// Acquire a registration wrapped in a guard that releases it on drop.
    pub fn handle<'a>(&'a self, key: &str, css: &str) -> StyleHandle<'a> {
        let first = self.acquire(key, css);
        StyleHandle {
            registry: self,
            key: key.to_string(),
            first,
            released: false,
        }
    }
}

/// RAII registration of one stylesheet in a [`StyleRegistry`].
#[derive(Debug)]
pub struct StyleHandle<'a> {
    registry: &'a StyleRegistry,
    key: String,
    first: bool,
    released: bool,
}

impl StyleHandle<'_> {
    pub fn key(&self) -> &str {
        &self.key
    }

    /// Whether acquiring this handle created the registration.
    pub fn is_first(&self) -> bool {
        self.first
    }

    /// Release now and report whether this was the last reference.
    pub fn release(mut self) -> bool {
        self.released = true;
        self.registry.release(&self.key)
    }
}

impl Drop for StyleHandle<'_> {
    fn drop(&mut self) {
        if !self.released {
            self.registry.release(&self.key);
        }
    }
}
