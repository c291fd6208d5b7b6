//! Integration test: ICD negotiation and proc-address lookup
//!
//! Run with: cargo test -p ctsnull-vk-icd --test proc_addr_test

use std::ffi::CString;
use std::ptr;

use ash::vk;
use ash::vk::Handle;

use ctsnull_vk_icd::proc_addr::{self, Scope};
use ctsnull_vk_icd::{
    vk_icdGetInstanceProcAddr, vk_icdGetPhysicalDeviceProcAddr,
    vk_icdNegotiateLoaderICDInterfaceVersion, MAX_ICD_INTERFACE_VERSION,
};

fn resolve(name: &str) -> vk::PFN_vkVoidFunction {
    let c_name = CString::new(name).expect("name");
    unsafe { vk_icdGetInstanceProcAddr(vk::Instance::null(), c_name.as_ptr()) }
}

#[test]
fn test_negotiate_clamps_version() {
    let mut version = 7;
    let result = unsafe { vk_icdNegotiateLoaderICDInterfaceVersion(&mut version) };
    assert_eq!(result, vk::Result::SUCCESS);
    assert_eq!(version, MAX_ICD_INTERFACE_VERSION);

    let mut version = 3;
    unsafe { vk_icdNegotiateLoaderICDInterfaceVersion(&mut version) };
    assert_eq!(version, 3);
}

#[test]
fn test_every_exported_name_resolves() {
    for name in proc_addr::all_entry_points() {
        assert!(resolve(name).is_some(), "{} did not resolve", name);
    }
}

#[test]
fn test_unknown_names_resolve_to_null() {
    assert!(resolve("vkCreateSwapchainKHR").is_none());
    assert!(resolve("").is_none());
    assert!(unsafe { vk_icdGetInstanceProcAddr(vk::Instance::null(), ptr::null()) }.is_none());
}

#[test]
fn test_device_scope_excludes_instance_functions() {
    assert!(proc_addr::lookup("vkCreateInstance", Scope::Device).is_none());
    assert!(proc_addr::lookup("vkGetPhysicalDeviceProperties", Scope::Device).is_none());
    assert!(proc_addr::lookup("vkQueueSubmit", Scope::Device).is_some());
    assert!(proc_addr::lookup("vkCmdDraw", Scope::Device).is_some());
    assert!(proc_addr::lookup("vkGetDeviceProcAddr", Scope::Device).is_some());
}

#[test]
fn test_same_name_same_pointer() {
    let a = resolve("vkAllocateDescriptorSets").map(|f| f as usize);
    let b = proc_addr::lookup("vkAllocateDescriptorSets", Scope::Device).map(|f| f as usize);
    assert_eq!(a, b);
    assert_eq!(
        a,
        Some(ctsnull_vk_icd::descriptor::vkAllocateDescriptorSets as usize)
    );
}

#[test]
fn test_physical_device_proc_addr_only_serves_physical_device_queries() {
    let query = CString::new("vkGetPhysicalDeviceFeatures2").expect("name");
    let other = CString::new("vkCreateDevice").expect("name");
    unsafe {
        assert!(vk_icdGetPhysicalDeviceProcAddr(vk::Instance::null(), query.as_ptr()).is_some());
        assert!(vk_icdGetPhysicalDeviceProcAddr(vk::Instance::null(), other.as_ptr()).is_none());
    }
    assert!(vk::Instance::null().is_null());
}
