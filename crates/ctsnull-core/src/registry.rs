//! Handle registries: opaque 64-bit keys mapped to owned stand-in objects.
//!
//! Non-dispatchable Vulkan handles issued by the driver are keys into one of
//! these maps. Lookups that miss are reported as `InvalidHandle` instead of
//! being dereferenced.

use std::sync::atomic::{AtomicU64, Ordering};

use dashmap::DashMap;

use crate::error::DriverError;

// Shared across every registry so a key never identifies two objects of
// different kinds. Starts away from 0 (VK_NULL_HANDLE) and small integers.
static NEXT_HANDLE: AtomicU64 = AtomicU64::new(0x2000);

/// Reserve a fresh handle value.
pub fn alloc_handle() -> u64 {
    NEXT_HANDLE.fetch_add(1, Ordering::Relaxed)
}

pub struct HandleRegistry<T> {
    kind: &'static str,
    objects: DashMap<u64, T>,
}

impl<T> HandleRegistry<T> {
    pub fn new(kind: &'static str) -> Self {
        Self {
            kind,
            objects: DashMap::new(),
        }
    }

    pub fn kind(&self) -> &'static str {
        self.kind
    }

    /// Register an object under a fresh handle.
    pub fn insert(&self, object: T) -> u64 {
        let id = alloc_handle();
        self.objects.insert(id, object);
        id
    }

    /// Register an object under a handle reserved earlier with [`alloc_handle`].
    pub fn insert_with_id(&self, id: u64, object: T) {
        self.objects.insert(id, object);
    }

    pub fn get<R>(&self, id: u64, f: impl FnOnce(&T) -> R) -> Result<R, DriverError> {
        match self.objects.get(&id) {
            Some(entry) => Ok(f(entry.value())),
            None => Err(self.invalid(id)),
        }
    }

    pub fn get_mut<R>(&self, id: u64, f: impl FnOnce(&mut T) -> R) -> Result<R, DriverError> {
        match self.objects.get_mut(&id) {
            Some(mut entry) => Ok(f(entry.value_mut())),
            None => Err(self.invalid(id)),
        }
    }

    pub fn remove(&self, id: u64) -> Result<T, DriverError> {
        self.objects
            .remove(&id)
            .map(|(_, object)| object)
            .ok_or_else(|| self.invalid(id))
    }

    /// Remove every object matching `pred`, returning them with their handles.
    pub fn remove_where(&self, mut pred: impl FnMut(&T) -> bool) -> Vec<(u64, T)> {
        let ids: Vec<u64> = self
            .objects
            .iter()
            .filter(|entry| pred(entry.value()))
            .map(|entry| *entry.key())
            .collect();
        ids.into_iter()
            .filter_map(|id| self.objects.remove(&id))
            .collect()
    }

    pub fn count_where(&self, mut pred: impl FnMut(&T) -> bool) -> usize {
        self.objects.iter().filter(|entry| pred(entry.value())).count()
    }

    pub fn contains(&self, id: u64) -> bool {
        self.objects.contains_key(&id)
    }

    /// Return number of live objects.
    pub fn len(&self) -> usize {
        self.objects.len()
    }

    pub fn is_empty(&self) -> bool {
        self.objects.is_empty()
    }

    fn invalid(&self, raw: u64) -> DriverError {
        DriverError::InvalidHandle {
            kind: self.kind,
            raw,
        }
    }
}
