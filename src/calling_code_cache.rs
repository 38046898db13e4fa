use std::sync::Arc;

use dashmap::DashMap;
use log::debug;

use crate::metadata::CallingCodeInfo;

/// Decoded calling codes, filled on first use. The entry lock of the map is
/// held while decoding, so every calling code is decoded at most once even
/// under concurrent lookups.
pub struct CallingCodeCache {
    cache: DashMap<String, Arc<CallingCodeInfo>>,
}

impl CallingCodeCache {
    pub fn new() -> Self {
        Self {
            cache: DashMap::new(),
        }
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            cache: DashMap::with_capacity(capacity),
        }
    }

    pub fn len(&self) -> usize {
        self.cache.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cache.is_empty()
    }

    /// Returns the cached info for `calling_code`, or runs `decode` and
    /// caches its result. Nothing is cached when `decode` yields `None`.
    pub fn get_or_decode<F>(&self, calling_code: &str, decode: F) -> Option<Arc<CallingCodeInfo>>
    where
        F: FnOnce() -> Option<CallingCodeInfo>,
    {
        if let Some(info) = self.cache.get(calling_code) {
            return Some(info.value().clone());
        }
        let entry = self
            .cache
            .entry(calling_code.to_owned())
            .or_try_insert_with(|| {
                let info = decode().ok_or(())?;
                debug!(
                    "Decoded calling code {} with {} rule sets",
                    calling_code,
                    info.rule_sets().len()
                );
                Ok::<_, ()>(Arc::new(info))
            })
            .ok()?;
        Some(entry.value().clone())
    }
}

impl Default for CallingCodeCache {
    fn default() -> Self {
        Self::new()
    }
}
