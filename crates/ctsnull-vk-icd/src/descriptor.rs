//! Descriptor set layout, descriptor pool and descriptor set functions.
//!
//! Descriptor sets are owned by their pool; see
//! [`ctsnull_core::DescriptorPool`] for the ownership rules.

use ash::vk;
use ash::vk::Handle;
use tracing::{debug, warn};

use ctsnull_core::object::DescriptorSetLayout;
use ctsnull_core::{host_alloc, registry, DescriptorPool};

use crate::handle_store;

// ── Descriptor Set Layout ───────────────────────────────────

#[no_mangle]
pub unsafe extern "C" fn vkCreateDescriptorSetLayout(
    device: vk::Device,
    p_create_info: *const vk::DescriptorSetLayoutCreateInfo<'_>,
    _p_allocator: *const vk::AllocationCallbacks<'_>,
    p_set_layout: *mut vk::DescriptorSetLayout,
) -> vk::Result {
    unsafe {
        handle_store::create_child(
            handle_store::desc_set_layouts(),
            device,
            p_create_info,
            p_set_layout,
            |device, ci| Ok(DescriptorSetLayout::new(device, ci)),
        )
    }
}

#[no_mangle]
pub unsafe extern "C" fn vkDestroyDescriptorSetLayout(
    _device: vk::Device,
    descriptor_set_layout: vk::DescriptorSetLayout,
    _p_allocator: *const vk::AllocationCallbacks<'_>,
) {
    handle_store::destroy_child(handle_store::desc_set_layouts(), descriptor_set_layout);
}

// ── Descriptor Pool ─────────────────────────────────────────

#[no_mangle]
pub unsafe extern "C" fn vkCreateDescriptorPool(
    device: vk::Device,
    p_create_info: *const vk::DescriptorPoolCreateInfo<'_>,
    _p_allocator: *const vk::AllocationCallbacks<'_>,
    p_descriptor_pool: *mut vk::DescriptorPool,
) -> vk::Result {
    if p_create_info.is_null() || p_descriptor_pool.is_null() {
        return vk::Result::ERROR_OUT_OF_HOST_MEMORY;
    }
    if let Err(e) = unsafe { handle_store::resolve_device(device) } {
        warn!("{}", e);
        return vk::Result::ERROR_DEVICE_LOST;
    }

    // The pool stamps its own handle into every set it allocates.
    let id = registry::alloc_handle();
    let ci = unsafe { &*p_create_info };
    match host_alloc::try_new(DescriptorPool::new(id, device, ci)) {
        Ok(pool) => {
            handle_store::desc_pools().insert_with_id(id, pool);
            debug!(
                "created VkDescriptorPool {:#x} (flags {:?}, max_sets {})",
                id, ci.flags, ci.max_sets
            );
            unsafe { *p_descriptor_pool = vk::DescriptorPool::from_raw(id) };
            vk::Result::SUCCESS
        }
        Err(e) => crate::report(e),
    }
}

/// Destroying a pool releases every set it still owns.
#[no_mangle]
pub unsafe extern "C" fn vkDestroyDescriptorPool(
    _device: vk::Device,
    descriptor_pool: vk::DescriptorPool,
    _p_allocator: *const vk::AllocationCallbacks<'_>,
) {
    handle_store::destroy_child(handle_store::desc_pools(), descriptor_pool);
}

#[no_mangle]
pub unsafe extern "C" fn vkResetDescriptorPool(
    _device: vk::Device,
    descriptor_pool: vk::DescriptorPool,
    _flags: vk::DescriptorPoolResetFlags,
) -> vk::Result {
    match handle_store::desc_pools().get_mut(descriptor_pool.as_raw(), |pool| pool.reset()) {
        Ok(released) => {
            debug!(
                "reset VkDescriptorPool {:#x}, released {} set(s)",
                descriptor_pool.as_raw(),
                released
            );
            vk::Result::SUCCESS
        }
        Err(e) => crate::report(e),
    }
}

// ── Descriptor Set Allocation ───────────────────────────────

/// All-or-nothing: on failure no set is left allocated and every output
/// slot is `VK_NULL_HANDLE`.
#[no_mangle]
pub unsafe extern "C" fn vkAllocateDescriptorSets(
    _device: vk::Device,
    p_allocate_info: *const vk::DescriptorSetAllocateInfo<'_>,
    p_descriptor_sets: *mut vk::DescriptorSet,
) -> vk::Result {
    if p_allocate_info.is_null() || p_descriptor_sets.is_null() {
        return vk::Result::ERROR_OUT_OF_HOST_MEMORY;
    }

    let ai = unsafe { &*p_allocate_info };
    let count = ai.descriptor_set_count as usize;
    let out = unsafe { std::slice::from_raw_parts_mut(p_descriptor_sets, count) };
    let layouts: &[vk::DescriptorSetLayout] = if count == 0 {
        &[]
    } else if ai.p_set_layouts.is_null() {
        out.fill(vk::DescriptorSet::null());
        return vk::Result::ERROR_OUT_OF_HOST_MEMORY;
    } else {
        unsafe { std::slice::from_raw_parts(ai.p_set_layouts, count) }
    };

    let allocated = handle_store::desc_pools()
        .get_mut(ai.descriptor_pool.as_raw(), |pool| pool.allocate_batch(layouts))
        .and_then(|r| r);

    match allocated {
        Ok(sets) => {
            for (slot, set) in out.iter_mut().zip(sets) {
                *slot = set;
            }
            vk::Result::SUCCESS
        }
        Err(e) => {
            out.fill(vk::DescriptorSet::null());
            crate::report(e)
        }
    }
}

/// Null entries are skipped. Stops at the first set the pool refuses.
#[no_mangle]
pub unsafe extern "C" fn vkFreeDescriptorSets(
    _device: vk::Device,
    descriptor_pool: vk::DescriptorPool,
    descriptor_set_count: u32,
    p_descriptor_sets: *const vk::DescriptorSet,
) -> vk::Result {
    if p_descriptor_sets.is_null() || descriptor_set_count == 0 {
        return vk::Result::SUCCESS;
    }

    let sets = unsafe { std::slice::from_raw_parts(p_descriptor_sets, descriptor_set_count as usize) };

    let freed = handle_store::desc_pools()
        .get_mut(descriptor_pool.as_raw(), |pool| {
            sets.iter()
                .filter(|set| !set.is_null())
                .try_for_each(|&set| pool.free(set))
        })
        .and_then(|r| r);
    crate::vk_result(freed)
}

// ── Update Descriptor Sets ──────────────────────────────────

/// Descriptor contents are never read, so updates are dropped.
#[no_mangle]
pub unsafe extern "C" fn vkUpdateDescriptorSets(
    _device: vk::Device,
    _descriptor_write_count: u32,
    _p_descriptor_writes: *const vk::WriteDescriptorSet<'_>,
    _descriptor_copy_count: u32,
    _p_descriptor_copies: *const vk::CopyDescriptorSet<'_>,
) {
}
