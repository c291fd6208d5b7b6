//! Physical device query functions for the Vulkan ICD.
//!
//! The null device reports the same fixed values on every call.

use std::os::raw::c_char;

use ash::vk;

/// Reported in `limits.maxTexelBufferElements`.
pub const MAX_TEXEL_BUFFER_ELEMENTS: u32 = 8096;
/// Size of the single memory heap.
pub const HEAP_SIZE: vk::DeviceSize = 1 << 31;
/// Largest extent in every dimension reported by image format queries.
pub const MAX_IMAGE_EXTENT: u32 = 4096;

/// Every optional feature bit, reported for every format and tiling.
pub const ALL_FORMAT_FEATURES: vk::FormatFeatureFlags = vk::FormatFeatureFlags::from_raw(
    vk::FormatFeatureFlags::SAMPLED_IMAGE.as_raw()
        | vk::FormatFeatureFlags::STORAGE_IMAGE.as_raw()
        | vk::FormatFeatureFlags::STORAGE_IMAGE_ATOMIC.as_raw()
        | vk::FormatFeatureFlags::UNIFORM_TEXEL_BUFFER.as_raw()
        | vk::FormatFeatureFlags::STORAGE_TEXEL_BUFFER.as_raw()
        | vk::FormatFeatureFlags::STORAGE_TEXEL_BUFFER_ATOMIC.as_raw()
        | vk::FormatFeatureFlags::VERTEX_BUFFER.as_raw()
        | vk::FormatFeatureFlags::COLOR_ATTACHMENT.as_raw()
        | vk::FormatFeatureFlags::COLOR_ATTACHMENT_BLEND.as_raw()
        | vk::FormatFeatureFlags::DEPTH_STENCIL_ATTACHMENT.as_raw()
        | vk::FormatFeatureFlags::BLIT_SRC.as_raw()
        | vk::FormatFeatureFlags::BLIT_DST.as_raw(),
);

/// The properties reported for the null physical device.
pub fn fixed_properties() -> vk::PhysicalDeviceProperties {
    let mut props = vk::PhysicalDeviceProperties {
        api_version: vk::API_VERSION_1_0,
        driver_version: 1,
        device_type: vk::PhysicalDeviceType::OTHER,
        ..Default::default()
    };

    // Write device name
    let name_bytes = crate::config().driver.device_name.as_bytes();
    let len = std::cmp::min(name_bytes.len(), props.device_name.len() - 1);
    for i in 0..len {
        props.device_name[i] = name_bytes[i] as c_char;
    }
    props.device_name[len] = 0;

    props.limits.max_texel_buffer_elements = MAX_TEXEL_BUFFER_ELEMENTS;
    props
}

pub fn fixed_queue_family() -> vk::QueueFamilyProperties {
    vk::QueueFamilyProperties {
        queue_flags: vk::QueueFlags::GRAPHICS | vk::QueueFlags::COMPUTE,
        queue_count: 1,
        timestamp_valid_bits: 64,
        ..Default::default()
    }
}

pub fn fixed_memory_properties() -> vk::PhysicalDeviceMemoryProperties {
    let mut props = vk::PhysicalDeviceMemoryProperties {
        memory_type_count: 1,
        memory_heap_count: 1,
        ..Default::default()
    };
    props.memory_types[0] = vk::MemoryType {
        property_flags: vk::MemoryPropertyFlags::HOST_VISIBLE,
        heap_index: 0,
    };
    props.memory_heaps[0] = vk::MemoryHeap {
        size: HEAP_SIZE,
        flags: vk::MemoryHeapFlags::empty(),
    };
    props
}

pub fn fixed_format_properties() -> vk::FormatProperties {
    vk::FormatProperties {
        linear_tiling_features: ALL_FORMAT_FEATURES,
        optimal_tiling_features: ALL_FORMAT_FEATURES,
        buffer_features: ALL_FORMAT_FEATURES,
    }
}

pub fn fixed_image_format_properties() -> vk::ImageFormatProperties {
    vk::ImageFormatProperties {
        max_extent: vk::Extent3D {
            width: MAX_IMAGE_EXTENT,
            height: MAX_IMAGE_EXTENT,
            depth: MAX_IMAGE_EXTENT,
        },
        max_mip_levels: 1,
        max_array_layers: 1,
        sample_counts: vk::SampleCountFlags::TYPE_1,
        max_resource_size: HEAP_SIZE,
    }
}

// ── vkGetPhysicalDeviceProperties ───────────────────────────

#[no_mangle]
pub unsafe extern "C" fn vkGetPhysicalDeviceProperties(
    _physical_device: vk::PhysicalDevice,
    p_properties: *mut vk::PhysicalDeviceProperties,
) {
    if p_properties.is_null() {
        return;
    }
    unsafe { *p_properties = fixed_properties() };
}

#[no_mangle]
pub unsafe extern "C" fn vkGetPhysicalDeviceProperties2(
    physical_device: vk::PhysicalDevice,
    p_properties: *mut vk::PhysicalDeviceProperties2<'_>,
) {
    if p_properties.is_null() {
        return;
    }
    // pNext chain is left untouched
    unsafe { vkGetPhysicalDeviceProperties(physical_device, &mut (*p_properties).properties) };
}

#[no_mangle]
pub unsafe extern "C" fn vkGetPhysicalDeviceProperties2KHR(
    physical_device: vk::PhysicalDevice,
    p_properties: *mut vk::PhysicalDeviceProperties2<'_>,
) {
    unsafe { vkGetPhysicalDeviceProperties2(physical_device, p_properties) };
}

// ── vkGetPhysicalDeviceFeatures ────────────────────────────

#[no_mangle]
pub unsafe extern "C" fn vkGetPhysicalDeviceFeatures(
    _physical_device: vk::PhysicalDevice,
    p_features: *mut vk::PhysicalDeviceFeatures,
) {
    if p_features.is_null() {
        return;
    }
    unsafe { *p_features = vk::PhysicalDeviceFeatures::default() };
}

#[no_mangle]
pub unsafe extern "C" fn vkGetPhysicalDeviceFeatures2(
    physical_device: vk::PhysicalDevice,
    p_features: *mut vk::PhysicalDeviceFeatures2<'_>,
) {
    if p_features.is_null() {
        return;
    }
    unsafe { vkGetPhysicalDeviceFeatures(physical_device, &mut (*p_features).features) };
}

#[no_mangle]
pub unsafe extern "C" fn vkGetPhysicalDeviceFeatures2KHR(
    physical_device: vk::PhysicalDevice,
    p_features: *mut vk::PhysicalDeviceFeatures2<'_>,
) {
    unsafe { vkGetPhysicalDeviceFeatures2(physical_device, p_features) };
}

// ── vkGetPhysicalDeviceQueueFamilyProperties ───────────────

#[no_mangle]
pub unsafe extern "C" fn vkGetPhysicalDeviceQueueFamilyProperties(
    _physical_device: vk::PhysicalDevice,
    p_count: *mut u32,
    p_properties: *mut vk::QueueFamilyProperties,
) {
    if p_count.is_null() {
        return;
    }
    unsafe {
        if !p_properties.is_null() && *p_count >= 1 {
            *p_properties = fixed_queue_family();
        }
        *p_count = 1;
    }
}

#[no_mangle]
pub unsafe extern "C" fn vkGetPhysicalDeviceQueueFamilyProperties2(
    _physical_device: vk::PhysicalDevice,
    p_count: *mut u32,
    p_properties: *mut vk::QueueFamilyProperties2<'_>,
) {
    if p_count.is_null() {
        return;
    }
    unsafe {
        if !p_properties.is_null() && *p_count >= 1 {
            (*p_properties).queue_family_properties = fixed_queue_family();
        }
        *p_count = 1;
    }
}

#[no_mangle]
pub unsafe extern "C" fn vkGetPhysicalDeviceQueueFamilyProperties2KHR(
    physical_device: vk::PhysicalDevice,
    p_count: *mut u32,
    p_properties: *mut vk::QueueFamilyProperties2<'_>,
) {
    unsafe { vkGetPhysicalDeviceQueueFamilyProperties2(physical_device, p_count, p_properties) };
}

// ── vkGetPhysicalDeviceMemoryProperties ────────────────────

#[no_mangle]
pub unsafe extern "C" fn vkGetPhysicalDeviceMemoryProperties(
    _physical_device: vk::PhysicalDevice,
    p_memory_properties: *mut vk::PhysicalDeviceMemoryProperties,
) {
    if p_memory_properties.is_null() {
        return;
    }
    unsafe { *p_memory_properties = fixed_memory_properties() };
}

#[no_mangle]
pub unsafe extern "C" fn vkGetPhysicalDeviceMemoryProperties2(
    physical_device: vk::PhysicalDevice,
    p_memory_properties: *mut vk::PhysicalDeviceMemoryProperties2<'_>,
) {
    if p_memory_properties.is_null() {
        return;
    }
    unsafe {
        vkGetPhysicalDeviceMemoryProperties(
            physical_device,
            &mut (*p_memory_properties).memory_properties,
        )
    };
}

#[no_mangle]
pub unsafe extern "C" fn vkGetPhysicalDeviceMemoryProperties2KHR(
    physical_device: vk::PhysicalDevice,
    p_memory_properties: *mut vk::PhysicalDeviceMemoryProperties2<'_>,
) {
    unsafe { vkGetPhysicalDeviceMemoryProperties2(physical_device, p_memory_properties) };
}

// ── vkGetPhysicalDeviceFormatProperties ────────────────────

#[no_mangle]
pub unsafe extern "C" fn vkGetPhysicalDeviceFormatProperties(
    _physical_device: vk::PhysicalDevice,
    _format: vk::Format,
    p_format_properties: *mut vk::FormatProperties,
) {
    if p_format_properties.is_null() {
        return;
    }
    unsafe { *p_format_properties = fixed_format_properties() };
}

#[no_mangle]
pub unsafe extern "C" fn vkGetPhysicalDeviceFormatProperties2(
    physical_device: vk::PhysicalDevice,
    format: vk::Format,
    p_format_properties: *mut vk::FormatProperties2<'_>,
) {
    if p_format_properties.is_null() {
        return;
    }
    unsafe {
        vkGetPhysicalDeviceFormatProperties(
            physical_device,
            format,
            &mut (*p_format_properties).format_properties,
        )
    };
}

#[no_mangle]
pub unsafe extern "C" fn vkGetPhysicalDeviceFormatProperties2KHR(
    physical_device: vk::PhysicalDevice,
    format: vk::Format,
    p_format_properties: *mut vk::FormatProperties2<'_>,
) {
    unsafe { vkGetPhysicalDeviceFormatProperties2(physical_device, format, p_format_properties) };
}

// ── vkGetPhysicalDeviceImageFormatProperties ───────────────

#[no_mangle]
pub unsafe extern "C" fn vkGetPhysicalDeviceImageFormatProperties(
    _physical_device: vk::PhysicalDevice,
    _format: vk::Format,
    _image_type: vk::ImageType,
    _tiling: vk::ImageTiling,
    _usage: vk::ImageUsageFlags,
    _flags: vk::ImageCreateFlags,
    p_image_format_properties: *mut vk::ImageFormatProperties,
) -> vk::Result {
    if p_image_format_properties.is_null() {
        return vk::Result::ERROR_INITIALIZATION_FAILED;
    }
    unsafe { *p_image_format_properties = fixed_image_format_properties() };
    vk::Result::SUCCESS
}

#[no_mangle]
pub unsafe extern "C" fn vkGetPhysicalDeviceImageFormatProperties2(
    _physical_device: vk::PhysicalDevice,
    _p_image_format_info: *const vk::PhysicalDeviceImageFormatInfo2<'_>,
    p_image_format_properties: *mut vk::ImageFormatProperties2<'_>,
) -> vk::Result {
    if p_image_format_properties.is_null() {
        return vk::Result::ERROR_INITIALIZATION_FAILED;
    }
    unsafe {
        (*p_image_format_properties).image_format_properties = fixed_image_format_properties()
    };
    vk::Result::SUCCESS
}

#[no_mangle]
pub unsafe extern "C" fn vkGetPhysicalDeviceImageFormatProperties2KHR(
    physical_device: vk::PhysicalDevice,
    p_image_format_info: *const vk::PhysicalDeviceImageFormatInfo2<'_>,
    p_image_format_properties: *mut vk::ImageFormatProperties2<'_>,
) -> vk::Result {
    unsafe {
        vkGetPhysicalDeviceImageFormatProperties2(
            physical_device,
            p_image_format_info,
            p_image_format_properties,
        )
    }
}

// ── vkGetPhysicalDeviceSparseImageFormatProperties ─────────

#[no_mangle]
pub unsafe extern "C" fn vkGetPhysicalDeviceSparseImageFormatProperties(
    _physical_device: vk::PhysicalDevice,
    _format: vk::Format,
    _image_type: vk::ImageType,
    _samples: vk::SampleCountFlags,
    _usage: vk::ImageUsageFlags,
    _tiling: vk::ImageTiling,
    p_property_count: *mut u32,
    _p_properties: *mut vk::SparseImageFormatProperties,
) {
    if !p_property_count.is_null() {
        unsafe { *p_property_count = 0 };
    }
}

#[no_mangle]
pub unsafe extern "C" fn vkGetPhysicalDeviceSparseImageFormatProperties2(
    _physical_device: vk::PhysicalDevice,
    _p_format_info: *const vk::PhysicalDeviceSparseImageFormatInfo2<'_>,
    p_property_count: *mut u32,
    _p_properties: *mut vk::SparseImageFormatProperties2<'_>,
) {
    if !p_property_count.is_null() {
        unsafe { *p_property_count = 0 };
    }
}

#[no_mangle]
pub unsafe extern "C" fn vkGetPhysicalDeviceSparseImageFormatProperties2KHR(
    physical_device: vk::PhysicalDevice,
    p_format_info: *const vk::PhysicalDeviceSparseImageFormatInfo2<'_>,
    p_property_count: *mut u32,
    p_properties: *mut vk::SparseImageFormatProperties2<'_>,
) {
    unsafe {
        vkGetPhysicalDeviceSparseImageFormatProperties2(
            physical_device,
            p_format_info,
            p_property_count,
            p_properties,
        )
    };
}
