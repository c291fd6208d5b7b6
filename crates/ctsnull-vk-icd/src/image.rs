//! Image, image view and sampler functions for the Vulkan ICD.

use ash::vk;
use ash::vk::Handle;
use tracing::warn;

use ctsnull_core::format;
use ctsnull_core::object::{Image, ImageView, Sampler};

use crate::handle_store;

#[no_mangle]
pub unsafe extern "C" fn vkCreateImage(
    device: vk::Device,
    p_create_info: *const vk::ImageCreateInfo<'_>,
    _p_allocator: *const vk::AllocationCallbacks<'_>,
    p_image: *mut vk::Image,
) -> vk::Result {
    unsafe {
        handle_store::create_child(
            handle_store::images(),
            device,
            p_create_info,
            p_image,
            |device, ci| Ok(Image::new(device, ci)),
        )
    }
}

#[no_mangle]
pub unsafe extern "C" fn vkDestroyImage(
    _device: vk::Device,
    image: vk::Image,
    _p_allocator: *const vk::AllocationCallbacks<'_>,
) {
    handle_store::destroy_child(handle_store::images(), image);
}

#[no_mangle]
pub unsafe extern "C" fn vkGetImageMemoryRequirements(
    _device: vk::Device,
    image: vk::Image,
    p_memory_requirements: *mut vk::MemoryRequirements,
) {
    if p_memory_requirements.is_null() {
        return;
    }
    match handle_store::images().get(image.as_raw(), |img| img.memory_requirements()) {
        Ok(reqs) => unsafe { *p_memory_requirements = reqs },
        Err(e) => warn!("{}", e),
    }
}

#[no_mangle]
pub unsafe extern "C" fn vkBindImageMemory(
    _device: vk::Device,
    image: vk::Image,
    memory: vk::DeviceMemory,
    _memory_offset: vk::DeviceSize,
) -> vk::Result {
    crate::vk_result(crate::memory::bind_check(
        handle_store::images().contains(image.as_raw()),
        handle_store::images().kind(),
        image.as_raw(),
        memory,
    ))
}

/// Reports the packed layout: texels tightly packed row by row, one
/// subresource starting at offset 0.
#[no_mangle]
pub unsafe extern "C" fn vkGetImageSubresourceLayout(
    _device: vk::Device,
    image: vk::Image,
    _p_subresource: *const vk::ImageSubresource,
    p_layout: *mut vk::SubresourceLayout,
) {
    if p_layout.is_null() {
        return;
    }
    let layout = handle_store::images().get(image.as_raw(), |img| {
        let texel = format::pixel_size(img.format()).unwrap_or(0) as vk::DeviceSize;
        let extent = img.extent();
        // Saturates rather than wrapping for extents past u64.
        let row_pitch = texel.saturating_mul(extent.width as vk::DeviceSize);
        let depth_pitch = row_pitch.saturating_mul(extent.height as vk::DeviceSize);
        vk::SubresourceLayout {
            offset: 0,
            size: depth_pitch.saturating_mul(extent.depth as vk::DeviceSize),
            row_pitch,
            array_pitch: depth_pitch,
            depth_pitch,
        }
    });
    match layout {
        Ok(layout) => unsafe { *p_layout = layout },
        Err(e) => warn!("{}", e),
    }
}

#[no_mangle]
pub unsafe extern "C" fn vkGetImageSparseMemoryRequirements(
    _device: vk::Device,
    _image: vk::Image,
    p_sparse_memory_requirement_count: *mut u32,
    _p_sparse_memory_requirements: *mut vk::SparseImageMemoryRequirements,
) {
    if !p_sparse_memory_requirement_count.is_null() {
        unsafe { *p_sparse_memory_requirement_count = 0 };
    }
}

// ── Image views ─────────────────────────────────────────────

#[no_mangle]
pub unsafe extern "C" fn vkCreateImageView(
    device: vk::Device,
    p_create_info: *const vk::ImageViewCreateInfo<'_>,
    _p_allocator: *const vk::AllocationCallbacks<'_>,
    p_view: *mut vk::ImageView,
) -> vk::Result {
    unsafe {
        handle_store::create_child(
            handle_store::image_views(),
            device,
            p_create_info,
            p_view,
            |device, ci| Ok(ImageView::new(device, ci)),
        )
    }
}

#[no_mangle]
pub unsafe extern "C" fn vkDestroyImageView(
    _device: vk::Device,
    image_view: vk::ImageView,
    _p_allocator: *const vk::AllocationCallbacks<'_>,
) {
    handle_store::destroy_child(handle_store::image_views(), image_view);
}

// ── Samplers ────────────────────────────────────────────────

#[no_mangle]
pub unsafe extern "C" fn vkCreateSampler(
    device: vk::Device,
    p_create_info: *const vk::SamplerCreateInfo<'_>,
    _p_allocator: *const vk::AllocationCallbacks<'_>,
    p_sampler: *mut vk::Sampler,
) -> vk::Result {
    unsafe {
        handle_store::create_child(
            handle_store::samplers(),
            device,
            p_create_info,
            p_sampler,
            |device, ci| Ok(Sampler::new(device, ci)),
        )
    }
}

#[no_mangle]
pub unsafe extern "C" fn vkDestroySampler(
    _device: vk::Device,
    sampler: vk::Sampler,
    _p_allocator: *const vk::AllocationCallbacks<'_>,
) {
    handle_store::destroy_child(handle_store::samplers(), sampler);
}
