use std::ffi::CStr;
use std::ptr;

use ash::vk;
use serde::Serialize;

use ctsnull_vk_icd::physical_device::{
    vkGetPhysicalDeviceMemoryProperties, vkGetPhysicalDeviceProperties,
    vkGetPhysicalDeviceQueueFamilyProperties,
};

use crate::session::Session;

#[derive(Debug, Serialize)]
struct DeviceInfo {
    name: String,
    api_version: String,
    driver_version: u32,
    device_type: String,
    max_texel_buffer_elements: u32,
    queue_families: Vec<QueueFamilyInfo>,
    memory_types: Vec<MemoryTypeInfo>,
    memory_heaps: Vec<u64>,
}

#[derive(Debug, Serialize)]
struct QueueFamilyInfo {
    flags: String,
    queue_count: u32,
    timestamp_valid_bits: u32,
}

#[derive(Debug, Serialize)]
struct MemoryTypeInfo {
    flags: String,
    heap_index: u32,
}

pub fn run(json: bool) -> anyhow::Result<()> {
    let session = Session::open()?;
    let info = query(session.physical_device);

    if json {
        println!("{}", serde_json::to_string_pretty(&info)?);
        return Ok(());
    }

    println!();
    println!("  Device:          {}", info.name);
    println!("  API version:     {}", info.api_version);
    println!("  Driver version:  {}", info.driver_version);
    println!("  Type:            {}", info.device_type);
    println!("  Texel elements:  {}", info.max_texel_buffer_elements);
    println!();
    for (i, family) in info.queue_families.iter().enumerate() {
        println!(
            "  Queue family {}:  {} x{} ({} timestamp bits)",
            i, family.flags, family.queue_count, family.timestamp_valid_bits
        );
    }
    for (i, ty) in info.memory_types.iter().enumerate() {
        println!("  Memory type {}:   {} (heap {})", i, ty.flags, ty.heap_index);
    }
    for (i, size) in info.memory_heaps.iter().enumerate() {
        println!("  Memory heap {}:   {} MiB", i, size / (1024 * 1024));
    }
    println!();
    Ok(())
}

fn query(physical_device: vk::PhysicalDevice) -> DeviceInfo {
    let mut props = vk::PhysicalDeviceProperties::default();
    unsafe { vkGetPhysicalDeviceProperties(physical_device, &mut props) };

    let mut count = 0;
    unsafe { vkGetPhysicalDeviceQueueFamilyProperties(physical_device, &mut count, ptr::null_mut()) };
    let mut families = vec![vk::QueueFamilyProperties::default(); count as usize];
    unsafe {
        vkGetPhysicalDeviceQueueFamilyProperties(physical_device, &mut count, families.as_mut_ptr())
    };

    let mut memory = vk::PhysicalDeviceMemoryProperties::default();
    unsafe { vkGetPhysicalDeviceMemoryProperties(physical_device, &mut memory) };

    let name = unsafe { CStr::from_ptr(props.device_name.as_ptr()) }
        .to_string_lossy()
        .into_owned();

    DeviceInfo {
        name,
        api_version: format!(
            "{}.{}.{}",
            vk::api_version_major(props.api_version),
            vk::api_version_minor(props.api_version),
            vk::api_version_patch(props.api_version)
        ),
        driver_version: props.driver_version,
        device_type: format!("{:?}", props.device_type),
        max_texel_buffer_elements: props.limits.max_texel_buffer_elements,
        queue_families: families
            .iter()
            .map(|f| QueueFamilyInfo {
                flags: format!("{:?}", f.queue_flags),
                queue_count: f.queue_count,
                timestamp_valid_bits: f.timestamp_valid_bits,
            })
            .collect(),
        memory_types: memory.memory_types[..memory.memory_type_count as usize]
            .iter()
            .map(|t| MemoryTypeInfo {
                flags: format!("{:?}", t.property_flags),
                heap_index: t.heap_index,
            })
            .collect(),
        memory_heaps: memory.memory_heaps[..memory.memory_heap_count as usize]
            .iter()
            .map(|h| h.size)
            .collect(),
    }
}
