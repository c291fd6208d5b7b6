//! Logical device and queue functions for the Vulkan ICD.

use std::os::raw::c_char;

use ash::vk;
use tracing::{debug, info, warn};

use ctsnull_core::registry;

use crate::dispatch::DispatchableHandle;
use crate::handle_store;
use crate::proc_addr;

pub struct Device {
    physical_device: vk::PhysicalDevice,
    queue: vk::Queue,
}

impl Device {
    pub fn physical_device(&self) -> vk::PhysicalDevice {
        self.physical_device
    }

    pub fn queue(&self) -> vk::Queue {
        self.queue
    }
}

/// The device's only queue: family 0, index 0.
pub struct Queue {
    device: vk::Device,
}

impl Queue {
    pub fn device(&self) -> vk::Device {
        self.device
    }
}

#[no_mangle]
pub unsafe extern "C" fn vkCreateDevice(
    physical_device: vk::PhysicalDevice,
    p_create_info: *const vk::DeviceCreateInfo<'_>,
    _p_allocator: *const vk::AllocationCallbacks<'_>,
    p_device: *mut vk::Device,
) -> vk::Result {
    if p_create_info.is_null() || p_device.is_null() {
        return vk::Result::ERROR_INITIALIZATION_FAILED;
    }

    let Some(pd_id) = (unsafe { DispatchableHandle::get_id(physical_device) }) else {
        return vk::Result::ERROR_INITIALIZATION_FAILED;
    };
    if !handle_store::physical_devices().contains(pd_id) {
        warn!("vkCreateDevice on unknown physical device {:#x}", pd_id);
        return vk::Result::ERROR_INITIALIZATION_FAILED;
    }

    let ci = unsafe { &*p_create_info };
    let extensions =
        unsafe { read_string_array(ci.pp_enabled_extension_names, ci.enabled_extension_count) };
    if !extensions.is_empty() {
        warn!("device extensions not supported: {:?}", extensions);
        return vk::Result::ERROR_EXTENSION_NOT_PRESENT;
    }

    let dev_id = registry::alloc_handle();
    let queue_id = registry::alloc_handle();

    let device: vk::Device = match DispatchableHandle::create(dev_id) {
        Ok(h) => h,
        Err(e) => return crate::report(e),
    };
    let queue: vk::Queue = match DispatchableHandle::create(queue_id) {
        Ok(h) => h,
        Err(e) => {
            unsafe { DispatchableHandle::destroy(device) };
            return crate::report(e);
        }
    };

    handle_store::queues().insert_with_id(queue_id, Queue { device });
    handle_store::devices().insert_with_id(
        dev_id,
        Device {
            physical_device,
            queue,
        },
    );

    info!("created null device {:#x}", dev_id);
    unsafe { *p_device = device };
    vk::Result::SUCCESS
}

#[no_mangle]
pub unsafe extern "C" fn vkDestroyDevice(
    device: vk::Device,
    _p_allocator: *const vk::AllocationCallbacks<'_>,
) {
    let Some(local_id) = (unsafe { DispatchableHandle::get_id(device) }) else {
        return;
    };

    match handle_store::devices().remove(local_id) {
        Ok(dev) => {
            let leaked = unsafe { handle_store::release_device_children(device) };
            let queue = dev.queue();
            if let Some(queue_id) = unsafe { DispatchableHandle::get_id(queue) } {
                if let Err(e) = handle_store::queues().remove(queue_id) {
                    warn!("teardown: {}", e);
                }
            }
            unsafe { DispatchableHandle::destroy(queue) };
            debug!("destroyed device {:#x} ({} leaked object(s))", local_id, leaked);
        }
        Err(e) => warn!("destroy ignored: {}", e),
    }
    unsafe { DispatchableHandle::destroy(device) };
}

#[no_mangle]
pub unsafe extern "C" fn vkGetDeviceQueue(
    device: vk::Device,
    queue_family_index: u32,
    queue_index: u32,
    p_queue: *mut vk::Queue,
) {
    if p_queue.is_null() {
        return;
    }
    if queue_family_index != 0 || queue_index != 0 {
        warn!(
            "no queue at family {} index {}",
            queue_family_index, queue_index
        );
        unsafe { *p_queue = vk::Queue::null() };
        return;
    }

    let queue = unsafe { handle_store::resolve_device(device) }
        .and_then(|id| handle_store::devices().get(id, |d| d.queue()));
    match queue {
        Ok(queue) => unsafe { *p_queue = queue },
        Err(e) => {
            warn!("{}", e);
            unsafe { *p_queue = vk::Queue::null() };
        }
    }
}

#[no_mangle]
pub unsafe extern "C" fn vkDeviceWaitIdle(device: vk::Device) -> vk::Result {
    match unsafe { handle_store::resolve_device(device) } {
        Ok(_) => vk::Result::SUCCESS,
        Err(e) => {
            warn!("{}", e);
            vk::Result::ERROR_DEVICE_LOST
        }
    }
}

/// Resolves device-level entry points only.
#[no_mangle]
pub unsafe extern "C" fn vkGetDeviceProcAddr(
    _device: vk::Device,
    p_name: *const c_char,
) -> vk::PFN_vkVoidFunction {
    let name = unsafe { crate::read_name(p_name) }?;
    proc_addr::lookup(name, proc_addr::Scope::Device)
}

// ── Helpers ─────────────────────────────────────────────────

unsafe fn read_string_array(ptrs: *const *const c_char, count: u32) -> Vec<String> {
    if ptrs.is_null() || count == 0 {
        return Vec::new();
    }
    (0..count as usize)
        .filter_map(|i| {
            let ptr = unsafe { *ptrs.add(i) };
            if ptr.is_null() {
                None
            } else {
                Some(
                    unsafe { std::ffi::CStr::from_ptr(ptr) }
                        .to_string_lossy()
                        .into_owned(),
                )
            }
        })
        .collect()
}
