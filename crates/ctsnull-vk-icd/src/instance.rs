//! Vulkan instance and enumeration functions.
//!
//! Every instance owns exactly one physical device, created together with
//! the instance so that enumeration always returns the same handle.

use std::ffi::c_char;

use ash::vk;
use tracing::{debug, info, warn};

use ctsnull_core::registry;

use crate::dispatch::DispatchableHandle;
use crate::handle_store;
use crate::proc_addr;

pub struct Instance {
    physical_device: vk::PhysicalDevice,
}

impl Instance {
    pub fn physical_device(&self) -> vk::PhysicalDevice {
        self.physical_device
    }
}

pub struct PhysicalDevice {
    instance: u64,
}

impl PhysicalDevice {
    pub fn instance(&self) -> u64 {
        self.instance
    }
}

#[no_mangle]
pub unsafe extern "C" fn vkCreateInstance(
    p_create_info: *const vk::InstanceCreateInfo<'_>,
    _p_allocator: *const vk::AllocationCallbacks<'_>,
    p_instance: *mut vk::Instance,
) -> vk::Result {
    crate::ensure_logging();
    if p_create_info.is_null() || p_instance.is_null() {
        return vk::Result::ERROR_INITIALIZATION_FAILED;
    }

    let ci = unsafe { &*p_create_info };
    if ci.enabled_extension_count > 0 || ci.enabled_layer_count > 0 {
        // Nothing is advertised, so any request names something we lack.
        warn!(
            "rejecting instance with {} extension(s) and {} layer(s) enabled",
            ci.enabled_extension_count, ci.enabled_layer_count
        );
        return if ci.enabled_layer_count > 0 {
            vk::Result::ERROR_LAYER_NOT_PRESENT
        } else {
            vk::Result::ERROR_EXTENSION_NOT_PRESENT
        };
    }

    let inst_id = registry::alloc_handle();
    let pd_id = registry::alloc_handle();

    let physical_device: vk::PhysicalDevice = match DispatchableHandle::create(pd_id) {
        Ok(h) => h,
        Err(e) => return crate::report(e),
    };
    let instance: vk::Instance = match DispatchableHandle::create(inst_id) {
        Ok(h) => h,
        Err(e) => {
            unsafe { DispatchableHandle::destroy(physical_device) };
            return crate::report(e);
        }
    };

    handle_store::physical_devices().insert_with_id(pd_id, PhysicalDevice { instance: inst_id });
    handle_store::instances().insert_with_id(inst_id, Instance { physical_device });

    info!("created null instance {:#x}", inst_id);
    unsafe { *p_instance = instance };
    vk::Result::SUCCESS
}

#[no_mangle]
pub unsafe extern "C" fn vkDestroyInstance(
    instance: vk::Instance,
    _p_allocator: *const vk::AllocationCallbacks<'_>,
) {
    let Some(local_id) = (unsafe { DispatchableHandle::get_id(instance) }) else {
        return;
    };

    match handle_store::instances().remove(local_id) {
        Ok(inst) => {
            let pd = inst.physical_device();
            if let Some(pd_id) = unsafe { DispatchableHandle::get_id(pd) } {
                if let Err(e) = handle_store::physical_devices().remove(pd_id) {
                    warn!("teardown: {}", e);
                }
            }
            unsafe { DispatchableHandle::destroy(pd) };
            debug!("destroyed instance {:#x}", local_id);
        }
        Err(e) => warn!("destroy ignored: {}", e),
    }
    unsafe { DispatchableHandle::destroy(instance) };
}

#[no_mangle]
pub unsafe extern "C" fn vkEnumeratePhysicalDevices(
    instance: vk::Instance,
    p_physical_device_count: *mut u32,
    p_physical_devices: *mut vk::PhysicalDevice,
) -> vk::Result {
    if p_physical_device_count.is_null() {
        return vk::Result::ERROR_INITIALIZATION_FAILED;
    }

    let Some(local_id) = (unsafe { DispatchableHandle::get_id(instance) }) else {
        return vk::Result::ERROR_INITIALIZATION_FAILED;
    };
    let physical_device = match handle_store::instances().get(local_id, |i| i.physical_device()) {
        Ok(pd) => pd,
        Err(e) => {
            warn!("{}", e);
            return vk::Result::ERROR_INITIALIZATION_FAILED;
        }
    };

    unsafe {
        if p_physical_devices.is_null() {
            *p_physical_device_count = 1;
            return vk::Result::SUCCESS;
        }
        if *p_physical_device_count == 0 {
            return vk::Result::INCOMPLETE;
        }
        *p_physical_devices = physical_device;
        *p_physical_device_count = 1;
    }
    vk::Result::SUCCESS
}

#[no_mangle]
pub unsafe extern "C" fn vkEnumerateInstanceVersion(p_api_version: *mut u32) -> vk::Result {
    if !p_api_version.is_null() {
        unsafe { *p_api_version = vk::API_VERSION_1_0 };
    }
    vk::Result::SUCCESS
}

#[no_mangle]
pub unsafe extern "C" fn vkEnumerateInstanceExtensionProperties(
    p_layer_name: *const c_char,
    p_property_count: *mut u32,
    _p_properties: *mut vk::ExtensionProperties,
) -> vk::Result {
    if !p_layer_name.is_null() {
        return vk::Result::ERROR_LAYER_NOT_PRESENT;
    }
    unsafe { write_zero_count(p_property_count) }
}

#[no_mangle]
pub unsafe extern "C" fn vkEnumerateInstanceLayerProperties(
    p_property_count: *mut u32,
    _p_properties: *mut vk::LayerProperties,
) -> vk::Result {
    unsafe { write_zero_count(p_property_count) }
}

#[no_mangle]
pub unsafe extern "C" fn vkEnumerateDeviceExtensionProperties(
    _physical_device: vk::PhysicalDevice,
    p_layer_name: *const c_char,
    p_property_count: *mut u32,
    _p_properties: *mut vk::ExtensionProperties,
) -> vk::Result {
    if !p_layer_name.is_null() {
        return vk::Result::ERROR_LAYER_NOT_PRESENT;
    }
    unsafe { write_zero_count(p_property_count) }
}

#[no_mangle]
pub unsafe extern "C" fn vkEnumerateDeviceLayerProperties(
    _physical_device: vk::PhysicalDevice,
    p_property_count: *mut u32,
    _p_properties: *mut vk::LayerProperties,
) -> vk::Result {
    unsafe { write_zero_count(p_property_count) }
}

/// Application-facing lookup; identical to the ICD entry point.
#[no_mangle]
pub unsafe extern "C" fn vkGetInstanceProcAddr(
    _instance: vk::Instance,
    p_name: *const c_char,
) -> vk::PFN_vkVoidFunction {
    let name = unsafe { crate::read_name(p_name) }?;
    proc_addr::lookup(name, proc_addr::Scope::Instance)
}

unsafe fn write_zero_count(p_count: *mut u32) -> vk::Result {
    if p_count.is_null() {
        return vk::Result::ERROR_INITIALIZATION_FAILED;
    }
    unsafe { *p_count = 0 };
    vk::Result::SUCCESS
}
