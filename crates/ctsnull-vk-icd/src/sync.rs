//! Fence, semaphore, event, query pool and queue functions for the Vulkan ICD.
//!
//! Nothing ever executes, so work is complete the moment it is submitted:
//! submission signals the fence and waits never block.

use std::os::raw::c_void;

use ash::vk;
use ash::vk::Handle;
use tracing::warn;

use ctsnull_core::object::{Event, Fence, QueryPool, Semaphore};
use ctsnull_core::DriverError;

use crate::dispatch::DispatchableHandle;
use crate::handle_store;

// ── Fence ───────────────────────────────────────────────────

#[no_mangle]
pub unsafe extern "C" fn vkCreateFence(
    device: vk::Device,
    p_create_info: *const vk::FenceCreateInfo<'_>,
    _p_allocator: *const vk::AllocationCallbacks<'_>,
    p_fence: *mut vk::Fence,
) -> vk::Result {
    unsafe {
        handle_store::create_child(
            handle_store::fences(),
            device,
            p_create_info,
            p_fence,
            |device, ci| Ok(Fence::new(device, ci)),
        )
    }
}

#[no_mangle]
pub unsafe extern "C" fn vkDestroyFence(
    _device: vk::Device,
    fence: vk::Fence,
    _p_allocator: *const vk::AllocationCallbacks<'_>,
) {
    handle_store::destroy_child(handle_store::fences(), fence);
}

#[no_mangle]
pub unsafe extern "C" fn vkResetFences(
    _device: vk::Device,
    fence_count: u32,
    p_fences: *const vk::Fence,
) -> vk::Result {
    let fences = unsafe { handle_slice(p_fences, fence_count) };
    crate::vk_result(fences.iter().try_for_each(|fence| {
        handle_store::fences().get_mut(fence.as_raw(), |f| f.reset())
    }))
}

#[no_mangle]
pub unsafe extern "C" fn vkGetFenceStatus(_device: vk::Device, fence: vk::Fence) -> vk::Result {
    match handle_store::fences().get(fence.as_raw(), |f| f.is_signaled()) {
        Ok(true) => vk::Result::SUCCESS,
        Ok(false) => vk::Result::NOT_READY,
        Err(e) => crate::report(e),
    }
}

/// Unsignaled fences stay unsignaled forever, so an unmet wait times out
/// immediately whatever the timeout.
#[no_mangle]
pub unsafe extern "C" fn vkWaitForFences(
    _device: vk::Device,
    fence_count: u32,
    p_fences: *const vk::Fence,
    wait_all: vk::Bool32,
    _timeout: u64,
) -> vk::Result {
    let fences = unsafe { handle_slice(p_fences, fence_count) };
    let states: Result<Vec<bool>, DriverError> = fences
        .iter()
        .map(|fence| handle_store::fences().get(fence.as_raw(), |f| f.is_signaled()))
        .collect();

    let states = match states {
        Ok(states) => states,
        Err(e) => return crate::report(e),
    };
    let satisfied = if wait_all == vk::TRUE {
        states.iter().all(|&s| s)
    } else {
        states.iter().any(|&s| s)
    };
    if satisfied {
        vk::Result::SUCCESS
    } else {
        vk::Result::TIMEOUT
    }
}

// ── Semaphore ───────────────────────────────────────────────

#[no_mangle]
pub unsafe extern "C" fn vkCreateSemaphore(
    device: vk::Device,
    p_create_info: *const vk::SemaphoreCreateInfo<'_>,
    _p_allocator: *const vk::AllocationCallbacks<'_>,
    p_semaphore: *mut vk::Semaphore,
) -> vk::Result {
    unsafe {
        handle_store::create_child(
            handle_store::semaphores(),
            device,
            p_create_info,
            p_semaphore,
            |device, ci| Ok(Semaphore::new(device, ci)),
        )
    }
}

#[no_mangle]
pub unsafe extern "C" fn vkDestroySemaphore(
    _device: vk::Device,
    semaphore: vk::Semaphore,
    _p_allocator: *const vk::AllocationCallbacks<'_>,
) {
    handle_store::destroy_child(handle_store::semaphores(), semaphore);
}

// ── Event ───────────────────────────────────────────────────

#[no_mangle]
pub unsafe extern "C" fn vkCreateEvent(
    device: vk::Device,
    p_create_info: *const vk::EventCreateInfo<'_>,
    _p_allocator: *const vk::AllocationCallbacks<'_>,
    p_event: *mut vk::Event,
) -> vk::Result {
    unsafe {
        handle_store::create_child(
            handle_store::events(),
            device,
            p_create_info,
            p_event,
            |device, ci| Ok(Event::new(device, ci)),
        )
    }
}

#[no_mangle]
pub unsafe extern "C" fn vkDestroyEvent(
    _device: vk::Device,
    event: vk::Event,
    _p_allocator: *const vk::AllocationCallbacks<'_>,
) {
    handle_store::destroy_child(handle_store::events(), event);
}

#[no_mangle]
pub unsafe extern "C" fn vkGetEventStatus(_device: vk::Device, event: vk::Event) -> vk::Result {
    match handle_store::events().get(event.as_raw(), |e| e.is_set()) {
        Ok(true) => vk::Result::EVENT_SET,
        Ok(false) => vk::Result::EVENT_RESET,
        Err(e) => crate::report(e),
    }
}

#[no_mangle]
pub unsafe extern "C" fn vkSetEvent(_device: vk::Device, event: vk::Event) -> vk::Result {
    crate::vk_result(handle_store::events().get_mut(event.as_raw(), |e| e.set(true)))
}

#[no_mangle]
pub unsafe extern "C" fn vkResetEvent(_device: vk::Device, event: vk::Event) -> vk::Result {
    crate::vk_result(handle_store::events().get_mut(event.as_raw(), |e| e.set(false)))
}

// ── Query Pool ──────────────────────────────────────────────

#[no_mangle]
pub unsafe extern "C" fn vkCreateQueryPool(
    device: vk::Device,
    p_create_info: *const vk::QueryPoolCreateInfo<'_>,
    _p_allocator: *const vk::AllocationCallbacks<'_>,
    p_query_pool: *mut vk::QueryPool,
) -> vk::Result {
    unsafe {
        handle_store::create_child(
            handle_store::query_pools(),
            device,
            p_create_info,
            p_query_pool,
            |device, ci| Ok(QueryPool::new(device, ci)),
        )
    }
}

#[no_mangle]
pub unsafe extern "C" fn vkDestroyQueryPool(
    _device: vk::Device,
    query_pool: vk::QueryPool,
    _p_allocator: *const vk::AllocationCallbacks<'_>,
) {
    handle_store::destroy_child(handle_store::query_pools(), query_pool);
}

/// Every query result reads as zero.
#[no_mangle]
pub unsafe extern "C" fn vkGetQueryPoolResults(
    _device: vk::Device,
    query_pool: vk::QueryPool,
    _first_query: u32,
    _query_count: u32,
    data_size: usize,
    p_data: *mut c_void,
    _stride: vk::DeviceSize,
    _flags: vk::QueryResultFlags,
) -> vk::Result {
    if !handle_store::query_pools().contains(query_pool.as_raw()) {
        warn!("vkGetQueryPoolResults on unknown pool {:#x}", query_pool.as_raw());
        return vk::Result::ERROR_UNKNOWN;
    }
    if !p_data.is_null() && data_size > 0 {
        unsafe { std::ptr::write_bytes(p_data as *mut u8, 0, data_size) };
    }
    vk::Result::SUCCESS
}

// ── Queue ───────────────────────────────────────────────────

#[no_mangle]
pub unsafe extern "C" fn vkQueueSubmit(
    queue: vk::Queue,
    _submit_count: u32,
    _p_submits: *const vk::SubmitInfo<'_>,
    fence: vk::Fence,
) -> vk::Result {
    if let Err(e) = unsafe { resolve_queue(queue) } {
        warn!("{}", e);
        return vk::Result::ERROR_DEVICE_LOST;
    }
    crate::vk_result(signal_fence(fence))
}

#[no_mangle]
pub unsafe extern "C" fn vkQueueWaitIdle(queue: vk::Queue) -> vk::Result {
    match unsafe { resolve_queue(queue) } {
        Ok(_) => vk::Result::SUCCESS,
        Err(e) => {
            warn!("{}", e);
            vk::Result::ERROR_DEVICE_LOST
        }
    }
}

#[no_mangle]
pub unsafe extern "C" fn vkQueueBindSparse(
    queue: vk::Queue,
    _bind_info_count: u32,
    _p_bind_info: *const vk::BindSparseInfo<'_>,
    fence: vk::Fence,
) -> vk::Result {
    if let Err(e) = unsafe { resolve_queue(queue) } {
        warn!("{}", e);
        return vk::Result::ERROR_DEVICE_LOST;
    }
    crate::vk_result(signal_fence(fence))
}

// ── Helpers ─────────────────────────────────────────────────

fn signal_fence(fence: vk::Fence) -> Result<(), DriverError> {
    if fence.is_null() {
        return Ok(());
    }
    handle_store::fences().get_mut(fence.as_raw(), |f| f.signal())
}

unsafe fn resolve_queue(queue: vk::Queue) -> Result<u64, DriverError> {
    let id = unsafe { DispatchableHandle::get_id(queue) }.unwrap_or(0);
    if handle_store::queues().contains(id) {
        Ok(id)
    } else {
        Err(DriverError::InvalidHandle {
            kind: handle_store::queues().kind(),
            raw: queue.as_raw(),
        })
    }
}

unsafe fn handle_slice<'a, H>(ptr: *const H, count: u32) -> &'a [H] {
    if ptr.is_null() || count == 0 {
        &[]
    } else {
        unsafe { std::slice::from_raw_parts(ptr, count as usize) }
    }
}
