//! Render pass and framebuffer functions for the Vulkan ICD.

use ash::vk;

use ctsnull_core::object::{Framebuffer, RenderPass};

use crate::handle_store;

// ── vkCreateRenderPass ───────────────────────────────────────

#[no_mangle]
pub unsafe extern "C" fn vkCreateRenderPass(
    device: vk::Device,
    p_create_info: *const vk::RenderPassCreateInfo<'_>,
    _p_allocator: *const vk::AllocationCallbacks<'_>,
    p_render_pass: *mut vk::RenderPass,
) -> vk::Result {
    unsafe {
        handle_store::create_child(
            handle_store::render_passes(),
            device,
            p_create_info,
            p_render_pass,
            |device, ci| Ok(RenderPass::new(device, ci)),
        )
    }
}

#[no_mangle]
pub unsafe extern "C" fn vkDestroyRenderPass(
    _device: vk::Device,
    render_pass: vk::RenderPass,
    _p_allocator: *const vk::AllocationCallbacks<'_>,
) {
    handle_store::destroy_child(handle_store::render_passes(), render_pass);
}

/// Any render area is optimal.
#[no_mangle]
pub unsafe extern "C" fn vkGetRenderAreaGranularity(
    _device: vk::Device,
    _render_pass: vk::RenderPass,
    p_granularity: *mut vk::Extent2D,
) {
    if !p_granularity.is_null() {
        unsafe {
            *p_granularity = vk::Extent2D {
                width: 1,
                height: 1,
            }
        };
    }
}

// ── vkCreateFramebuffer ──────────────────────────────────────

#[no_mangle]
pub unsafe extern "C" fn vkCreateFramebuffer(
    device: vk::Device,
    p_create_info: *const vk::FramebufferCreateInfo<'_>,
    _p_allocator: *const vk::AllocationCallbacks<'_>,
    p_framebuffer: *mut vk::Framebuffer,
) -> vk::Result {
    unsafe {
        handle_store::create_child(
            handle_store::framebuffers(),
            device,
            p_create_info,
            p_framebuffer,
            |device, ci| Ok(Framebuffer::new(device, ci)),
        )
    }
}

#[no_mangle]
pub unsafe extern "C" fn vkDestroyFramebuffer(
    _device: vk::Device,
    framebuffer: vk::Framebuffer,
    _p_allocator: *const vk::AllocationCallbacks<'_>,
) {
    handle_store::destroy_child(handle_store::framebuffers(), framebuffer);
}
