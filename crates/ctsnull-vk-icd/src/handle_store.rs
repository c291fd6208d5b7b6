//! Process-wide handle registries, one per object kind.
//!
//! Non-dispatchable handles are registry keys. Dispatchable handles point
//! at a [`DispatchableHandle`] whose `local_id` is the key.

use std::sync::OnceLock;

use ash::vk;
use ash::vk::Handle;
use tracing::{debug, warn};

use ctsnull_core::host_alloc;
use ctsnull_core::object::{
    Buffer, BufferView, CommandPool, DescriptorSetLayout, DeviceChild, DeviceMemory, Event, Fence,
    Framebuffer, Image, ImageView, Pipeline, PipelineCache, PipelineLayout, QueryPool, RenderPass,
    Sampler, Semaphore, ShaderModule,
};
use ctsnull_core::{DescriptorPool, DriverError, HandleRegistry};

use crate::command::CommandBuffer;
use crate::device::{Device, Queue};
use crate::dispatch::DispatchableHandle;
use crate::instance::{Instance, PhysicalDevice};

macro_rules! registry {
    ($static_name:ident, $fn_name:ident, $ty:ty, $kind:literal) => {
        static $static_name: OnceLock<HandleRegistry<$ty>> = OnceLock::new();

        pub fn $fn_name() -> &'static HandleRegistry<$ty> {
            $static_name.get_or_init(|| HandleRegistry::new($kind))
        }
    };
}

// Dispatchable objects
registry!(INSTANCE_MAP, instances, Instance, "VkInstance");
registry!(PHYS_DEV_MAP, physical_devices, PhysicalDevice, "VkPhysicalDevice");
registry!(DEVICE_MAP, devices, Device, "VkDevice");
registry!(QUEUE_MAP, queues, Queue, "VkQueue");
registry!(CMD_BUF_MAP, command_buffers, CommandBuffer, "VkCommandBuffer");

// Non-dispatchable objects
registry!(MEMORY_MAP, memories, Box<DeviceMemory>, "VkDeviceMemory");
registry!(BUFFER_MAP, buffers, Box<Buffer>, "VkBuffer");
registry!(BUFFER_VIEW_MAP, buffer_views, Box<BufferView>, "VkBufferView");
registry!(IMAGE_MAP, images, Box<Image>, "VkImage");
registry!(IMAGE_VIEW_MAP, image_views, Box<ImageView>, "VkImageView");
registry!(SAMPLER_MAP, samplers, Box<Sampler>, "VkSampler");
registry!(FENCE_MAP, fences, Box<Fence>, "VkFence");
registry!(SEMAPHORE_MAP, semaphores, Box<Semaphore>, "VkSemaphore");
registry!(EVENT_MAP, events, Box<Event>, "VkEvent");
registry!(QUERY_POOL_MAP, query_pools, Box<QueryPool>, "VkQueryPool");
registry!(SHADER_MAP, shader_modules, Box<ShaderModule>, "VkShaderModule");
registry!(PIPELINE_CACHE_MAP, pipeline_caches, Box<PipelineCache>, "VkPipelineCache");
registry!(PIPELINE_LAYOUT_MAP, pipeline_layouts, Box<PipelineLayout>, "VkPipelineLayout");
registry!(PIPELINE_MAP, pipelines, Box<Pipeline>, "VkPipeline");
registry!(RENDER_PASS_MAP, render_passes, Box<RenderPass>, "VkRenderPass");
registry!(FRAMEBUFFER_MAP, framebuffers, Box<Framebuffer>, "VkFramebuffer");
registry!(DESC_SET_LAYOUT_MAP, desc_set_layouts, Box<DescriptorSetLayout>, "VkDescriptorSetLayout");
registry!(DESC_POOL_MAP, desc_pools, Box<DescriptorPool>, "VkDescriptorPool");
registry!(CMD_POOL_MAP, cmd_pools, Box<CommandPool>, "VkCommandPool");

/// Resolve a VkDevice to its registry key, failing for null or destroyed devices.
///
/// # Safety
/// A non-null `device` must be a handle this driver returned.
pub unsafe fn resolve_device(device: vk::Device) -> Result<u64, DriverError> {
    let id = unsafe { DispatchableHandle::get_id(device) }.ok_or(DriverError::InvalidHandle {
        kind: devices().kind(),
        raw: 0,
    })?;
    if devices().contains(id) {
        Ok(id)
    } else {
        Err(DriverError::InvalidHandle {
            kind: devices().kind(),
            raw: device.as_raw(),
        })
    }
}

/// Shared body of the vkCreate* entry points for device children.
///
/// Null output pointers report out-of-host-memory, an unknown device
/// reports device-lost, and a failed construction leaves nothing registered.
///
/// # Safety
/// Non-null pointers must be valid for reads (`p_create_info`) and writes
/// (`p_handle`).
pub unsafe fn create_child<T, C, H: Handle>(
    registry: &HandleRegistry<Box<T>>,
    device: vk::Device,
    p_create_info: *const C,
    p_handle: *mut H,
    build: impl FnOnce(vk::Device, &C) -> Result<T, DriverError>,
) -> vk::Result {
    if p_create_info.is_null() || p_handle.is_null() {
        return vk::Result::ERROR_OUT_OF_HOST_MEMORY;
    }
    if let Err(e) = unsafe { resolve_device(device) } {
        warn!("{}", e);
        return vk::Result::ERROR_DEVICE_LOST;
    }

    let create_info = unsafe { &*p_create_info };
    match build(device, create_info).and_then(host_alloc::try_new) {
        Ok(object) => {
            let id = registry.insert(object);
            debug!("created {} {:#x}", registry.kind(), id);
            unsafe { *p_handle = H::from_raw(id) };
            vk::Result::SUCCESS
        }
        Err(e) => crate::report(e),
    }
}

/// Shared body of the vkDestroy* entry points. Null handles are ignored,
/// unknown ones are logged.
pub fn destroy_child<T, H: Handle>(registry: &HandleRegistry<Box<T>>, handle: H) {
    let raw = handle.as_raw();
    if raw == 0 {
        return;
    }
    match registry.remove(raw) {
        Ok(_) => debug!("destroyed {} {:#x}", registry.kind(), raw),
        Err(e) => warn!("destroy ignored: {}", e),
    }
}

fn release_owned<T: DeviceChild>(registry: &HandleRegistry<T>, device: vk::Device) -> usize {
    let released = registry.remove_where(|object| object.device() == device);
    if !released.is_empty() {
        warn!(
            "{} {} object(s) still alive at vkDestroyDevice",
            released.len(),
            registry.kind()
        );
    }
    released.len()
}

/// Release every object still owned by `device`. Returns how many leaked.
///
/// # Safety
/// `device` must be the handle of a device that is being destroyed; the
/// command buffers' dispatchable handles are freed.
pub unsafe fn release_device_children(device: vk::Device) -> usize {
    let mut leaked = 0;

    for (_, cmd_buf) in command_buffers().remove_where(|cb| cb.device() == device) {
        unsafe { DispatchableHandle::destroy(cmd_buf.handle()) };
        leaked += 1;
    }

    leaked += release_owned(memories(), device);
    leaked += release_owned(buffers(), device);
    leaked += release_owned(buffer_views(), device);
    leaked += release_owned(images(), device);
    leaked += release_owned(image_views(), device);
    leaked += release_owned(samplers(), device);
    leaked += release_owned(fences(), device);
    leaked += release_owned(semaphores(), device);
    leaked += release_owned(events(), device);
    leaked += release_owned(query_pools(), device);
    leaked += release_owned(shader_modules(), device);
    leaked += release_owned(pipeline_caches(), device);
    leaked += release_owned(pipeline_layouts(), device);
    leaked += release_owned(pipelines(), device);
    leaked += release_owned(render_passes(), device);
    leaked += release_owned(framebuffers(), device);
    leaked += release_owned(desc_set_layouts(), device);
    leaked += release_owned(desc_pools(), device);
    leaked += release_owned(cmd_pools(), device);
    leaked
}
