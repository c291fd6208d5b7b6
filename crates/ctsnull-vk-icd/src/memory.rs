//! Memory and buffer functions for the Vulkan ICD.
//!
//! Device memory is plain host memory, so mapping returns a pointer into the
//! allocation and flush/invalidate have nothing to do.

use std::os::raw::c_void;

use ash::vk;
use ash::vk::Handle;
use tracing::warn;

use ctsnull_core::object::{Buffer, BufferView, DeviceMemory};
use ctsnull_core::DriverError;

use crate::handle_store;

// ── vkAllocateMemory ────────────────────────────────────────

#[no_mangle]
pub unsafe extern "C" fn vkAllocateMemory(
    device: vk::Device,
    p_allocate_info: *const vk::MemoryAllocateInfo<'_>,
    _p_allocator: *const vk::AllocationCallbacks<'_>,
    p_memory: *mut vk::DeviceMemory,
) -> vk::Result {
    unsafe {
        handle_store::create_child(
            handle_store::memories(),
            device,
            p_allocate_info,
            p_memory,
            DeviceMemory::new,
        )
    }
}

#[no_mangle]
pub unsafe extern "C" fn vkFreeMemory(
    _device: vk::Device,
    memory: vk::DeviceMemory,
    _p_allocator: *const vk::AllocationCallbacks<'_>,
) {
    handle_store::destroy_child(handle_store::memories(), memory);
}

// ── vkMapMemory ─────────────────────────────────────────────

#[no_mangle]
pub unsafe extern "C" fn vkMapMemory(
    _device: vk::Device,
    memory: vk::DeviceMemory,
    offset: vk::DeviceSize,
    size: vk::DeviceSize,
    _flags: vk::MemoryMapFlags,
    pp_data: *mut *mut c_void,
) -> vk::Result {
    if pp_data.is_null() {
        return vk::Result::ERROR_MEMORY_MAP_FAILED;
    }

    let bounds_check = crate::config().driver.map_bounds_check;
    let mapped = handle_store::memories()
        .get(memory.as_raw(), |mem| mem.map(offset, size, bounds_check))
        .and_then(|r| r);

    match mapped {
        Ok(ptr) => {
            unsafe { *pp_data = ptr };
            vk::Result::SUCCESS
        }
        Err(e) => {
            unsafe { *pp_data = std::ptr::null_mut() };
            match e {
                DriverError::InvalidHandle { .. } => {
                    warn!("{}", e);
                    vk::Result::ERROR_MEMORY_MAP_FAILED
                }
                other => crate::report(other),
            }
        }
    }
}

#[no_mangle]
pub unsafe extern "C" fn vkUnmapMemory(_device: vk::Device, _memory: vk::DeviceMemory) {}

#[no_mangle]
pub unsafe extern "C" fn vkFlushMappedMemoryRanges(
    _device: vk::Device,
    _memory_range_count: u32,
    _p_memory_ranges: *const vk::MappedMemoryRange<'_>,
) -> vk::Result {
    vk::Result::SUCCESS
}

#[no_mangle]
pub unsafe extern "C" fn vkInvalidateMappedMemoryRanges(
    _device: vk::Device,
    _memory_range_count: u32,
    _p_memory_ranges: *const vk::MappedMemoryRange<'_>,
) -> vk::Result {
    vk::Result::SUCCESS
}

/// Host memory is committed in full at allocation time.
#[no_mangle]
pub unsafe extern "C" fn vkGetDeviceMemoryCommitment(
    _device: vk::Device,
    memory: vk::DeviceMemory,
    p_committed_memory_in_bytes: *mut vk::DeviceSize,
) {
    if p_committed_memory_in_bytes.is_null() {
        return;
    }
    let committed = handle_store::memories()
        .get(memory.as_raw(), |mem| mem.size())
        .unwrap_or_else(|e| {
            warn!("{}", e);
            0
        });
    unsafe { *p_committed_memory_in_bytes = committed };
}

// ── Buffers ─────────────────────────────────────────────────

#[no_mangle]
pub unsafe extern "C" fn vkCreateBuffer(
    device: vk::Device,
    p_create_info: *const vk::BufferCreateInfo<'_>,
    _p_allocator: *const vk::AllocationCallbacks<'_>,
    p_buffer: *mut vk::Buffer,
) -> vk::Result {
    unsafe {
        handle_store::create_child(
            handle_store::buffers(),
            device,
            p_create_info,
            p_buffer,
            |device, ci| Ok(Buffer::new(device, ci)),
        )
    }
}

#[no_mangle]
pub unsafe extern "C" fn vkDestroyBuffer(
    _device: vk::Device,
    buffer: vk::Buffer,
    _p_allocator: *const vk::AllocationCallbacks<'_>,
) {
    handle_store::destroy_child(handle_store::buffers(), buffer);
}

#[no_mangle]
pub unsafe extern "C" fn vkGetBufferMemoryRequirements(
    _device: vk::Device,
    buffer: vk::Buffer,
    p_memory_requirements: *mut vk::MemoryRequirements,
) {
    if p_memory_requirements.is_null() {
        return;
    }
    match handle_store::buffers().get(buffer.as_raw(), |b| b.memory_requirements()) {
        Ok(reqs) => unsafe { *p_memory_requirements = reqs },
        Err(e) => warn!("{}", e),
    }
}

#[no_mangle]
pub unsafe extern "C" fn vkBindBufferMemory(
    _device: vk::Device,
    buffer: vk::Buffer,
    memory: vk::DeviceMemory,
    _memory_offset: vk::DeviceSize,
) -> vk::Result {
    crate::vk_result(bind_check(
        handle_store::buffers().contains(buffer.as_raw()),
        handle_store::buffers().kind(),
        buffer.as_raw(),
        memory,
    ))
}

/// Binding records nothing; both handles only have to be live.
pub(crate) fn bind_check(
    resource_live: bool,
    resource_kind: &'static str,
    resource_raw: u64,
    memory: vk::DeviceMemory,
) -> Result<(), DriverError> {
    if !resource_live {
        return Err(DriverError::InvalidHandle {
            kind: resource_kind,
            raw: resource_raw,
        });
    }
    if !handle_store::memories().contains(memory.as_raw()) {
        return Err(DriverError::InvalidHandle {
            kind: handle_store::memories().kind(),
            raw: memory.as_raw(),
        });
    }
    Ok(())
}

// ── Buffer views ────────────────────────────────────────────

#[no_mangle]
pub unsafe extern "C" fn vkCreateBufferView(
    device: vk::Device,
    p_create_info: *const vk::BufferViewCreateInfo<'_>,
    _p_allocator: *const vk::AllocationCallbacks<'_>,
    p_view: *mut vk::BufferView,
) -> vk::Result {
    unsafe {
        handle_store::create_child(
            handle_store::buffer_views(),
            device,
            p_create_info,
            p_view,
            |device, ci| Ok(BufferView::new(device, ci)),
        )
    }
}

#[no_mangle]
pub unsafe extern "C" fn vkDestroyBufferView(
    _device: vk::Device,
    buffer_view: vk::BufferView,
    _p_allocator: *const vk::AllocationCallbacks<'_>,
) {
    handle_store::destroy_child(handle_store::buffer_views(), buffer_view);
}
