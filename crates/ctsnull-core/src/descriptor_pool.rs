//! Descriptor pool: owns the descriptor sets it hands out.
//!
//! The pool tracks exactly the sets it allocated and has not yet freed or
//! reset. Order among them is never observable, so removal is a swap-remove.

use ash::vk;
use ash::vk::Handle;

use crate::error::{DriverError, Violation};
use crate::host_alloc;
use crate::object::DeviceChild;
use crate::registry;
use crate::txn;

#[derive(Debug)]
pub struct DescriptorSet {
    pool: u64,
    layout: vk::DescriptorSetLayout,
}

impl DescriptorSet {
    pub fn pool(&self) -> vk::DescriptorPool {
        vk::DescriptorPool::from_raw(self.pool)
    }

    pub fn layout(&self) -> vk::DescriptorSetLayout {
        self.layout
    }
}

#[derive(Debug)]
pub struct DescriptorPool {
    handle: u64,
    device: vk::Device,
    flags: vk::DescriptorPoolCreateFlags,
    max_sets: u32,
    managed_sets: Vec<(u64, Box<DescriptorSet>)>,
}

impl DescriptorPool {
    /// `handle` is the value the pool will be registered under; reserve it
    /// with [`registry::alloc_handle`].
    pub fn new(handle: u64, device: vk::Device, create_info: &vk::DescriptorPoolCreateInfo<'_>) -> Self {
        Self {
            handle,
            device,
            flags: create_info.flags,
            max_sets: create_info.max_sets,
            managed_sets: Vec::new(),
        }
    }

    pub fn handle(&self) -> vk::DescriptorPool {
        vk::DescriptorPool::from_raw(self.handle)
    }

    pub fn flags(&self) -> vk::DescriptorPoolCreateFlags {
        self.flags
    }

    pub fn max_sets(&self) -> u32 {
        self.max_sets
    }

    pub fn allows_free(&self) -> bool {
        self.flags
            .contains(vk::DescriptorPoolCreateFlags::FREE_DESCRIPTOR_SET)
    }

    /// Number of sets currently owned.
    pub fn len(&self) -> usize {
        self.managed_sets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.managed_sets.is_empty()
    }

    pub fn contains(&self, set: vk::DescriptorSet) -> bool {
        self.position(set.as_raw()).is_some()
    }

    pub fn get(&self, set: vk::DescriptorSet) -> Option<&DescriptorSet> {
        self.position(set.as_raw())
            .map(|idx| &*self.managed_sets[idx].1)
    }

    /// Allocate one set. On failure the pool is unchanged.
    pub fn allocate(&mut self, layout: vk::DescriptorSetLayout) -> Result<vk::DescriptorSet, DriverError> {
        let set = host_alloc::try_new(DescriptorSet {
            pool: self.handle,
            layout,
        })?;
        host_alloc::try_reserve_one(&mut self.managed_sets)?;

        let id = registry::alloc_handle();
        self.managed_sets.push((id, set));
        Ok(vk::DescriptorSet::from_raw(id))
    }

    /// Allocate one set per layout, all or nothing.
    pub fn allocate_batch(
        &mut self,
        layouts: &[vk::DescriptorSetLayout],
    ) -> Result<Vec<vk::DescriptorSet>, DriverError> {
        txn::allocate_all(
            self,
            layouts.iter().copied(),
            |pool, layout| pool.allocate(layout),
            |pool, set| {
                pool.take(set.as_raw());
            },
        )
    }

    /// Release one set. The pool must have been created with
    /// `FREE_DESCRIPTOR_SET` and must own `set`.
    pub fn free(&mut self, set: vk::DescriptorSet) -> Result<(), DriverError> {
        if !self.allows_free() {
            return Err(Violation::FreeNotPermitted { pool: self.handle }.into());
        }
        match self.take(set.as_raw()) {
            Some(_) => Ok(()),
            None => Err(Violation::NotOwned {
                pool: self.handle,
                set: set.as_raw(),
            }
            .into()),
        }
    }

    /// Release every owned set, regardless of the pool flags. Returns how
    /// many were released.
    pub fn reset(&mut self) -> usize {
        let released = self.managed_sets.len();
        self.managed_sets.clear();
        released
    }

    fn position(&self, raw: u64) -> Option<usize> {
        self.managed_sets.iter().position(|(id, _)| *id == raw)
    }

    fn take(&mut self, raw: u64) -> Option<Box<DescriptorSet>> {
        let idx = self.position(raw)?;
        Some(self.managed_sets.swap_remove(idx).1)
    }
}

impl DeviceChild for DescriptorPool {
    fn device(&self) -> vk::Device {
        self.device
    }
}

impl Drop for DescriptorPool {
    fn drop(&mut self) {
        self.reset();
    }
}
