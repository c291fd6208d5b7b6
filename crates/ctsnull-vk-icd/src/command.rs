//! Command pool, command buffer, and recording functions.
//!
//! Command buffers are dispatchable stand-ins owned by their pool. Nothing
//! is recorded: every vkCmd* entry point accepts its arguments and returns.

use std::os::raw::c_void;

use ash::vk;
use ash::vk::Handle;
use tracing::{debug, warn};

use ctsnull_core::object::{CommandPool, DeviceChild};
use ctsnull_core::{registry, txn, DriverError};

use crate::dispatch::DispatchableHandle;
use crate::handle_store;

pub struct CommandBuffer {
    device: vk::Device,
    pool: vk::CommandPool,
    level: vk::CommandBufferLevel,
    handle: vk::CommandBuffer,
}

impl CommandBuffer {
    pub fn pool(&self) -> vk::CommandPool {
        self.pool
    }

    pub fn level(&self) -> vk::CommandBufferLevel {
        self.level
    }

    /// The dispatchable handle given to the application.
    pub fn handle(&self) -> vk::CommandBuffer {
        self.handle
    }
}

impl DeviceChild for CommandBuffer {
    fn device(&self) -> vk::Device {
        self.device
    }
}

// ── Command Pool ────────────────────────────────────────────

#[no_mangle]
pub unsafe extern "C" fn vkCreateCommandPool(
    device: vk::Device,
    p_create_info: *const vk::CommandPoolCreateInfo<'_>,
    _p_allocator: *const vk::AllocationCallbacks<'_>,
    p_command_pool: *mut vk::CommandPool,
) -> vk::Result {
    unsafe {
        handle_store::create_child(
            handle_store::cmd_pools(),
            device,
            p_create_info,
            p_command_pool,
            |device, ci| Ok(CommandPool::new(device, ci)),
        )
    }
}

/// Destroying a pool frees every command buffer allocated from it.
#[no_mangle]
pub unsafe extern "C" fn vkDestroyCommandPool(
    _device: vk::Device,
    command_pool: vk::CommandPool,
    _p_allocator: *const vk::AllocationCallbacks<'_>,
) {
    if command_pool.is_null() {
        return;
    }
    let freed = handle_store::command_buffers().remove_where(|cb| cb.pool() == command_pool);
    for (_, cmd_buf) in &freed {
        unsafe { DispatchableHandle::destroy(cmd_buf.handle()) };
    }
    if !freed.is_empty() {
        debug!(
            "freed {} command buffer(s) with VkCommandPool {:#x}",
            freed.len(),
            command_pool.as_raw()
        );
    }
    handle_store::destroy_child(handle_store::cmd_pools(), command_pool);
}

#[no_mangle]
pub unsafe extern "C" fn vkResetCommandPool(
    _device: vk::Device,
    command_pool: vk::CommandPool,
    _flags: vk::CommandPoolResetFlags,
) -> vk::Result {
    if handle_store::cmd_pools().contains(command_pool.as_raw()) {
        vk::Result::SUCCESS
    } else {
        crate::report(DriverError::InvalidHandle {
            kind: handle_store::cmd_pools().kind(),
            raw: command_pool.as_raw(),
        })
    }
}

// ── Command Buffer Allocation ───────────────────────────────

/// All-or-nothing: on failure no command buffer is left allocated and every
/// output slot is `VK_NULL_HANDLE`.
#[no_mangle]
pub unsafe extern "C" fn vkAllocateCommandBuffers(
    device: vk::Device,
    p_allocate_info: *const vk::CommandBufferAllocateInfo<'_>,
    p_command_buffers: *mut vk::CommandBuffer,
) -> vk::Result {
    if p_allocate_info.is_null() || p_command_buffers.is_null() {
        return vk::Result::ERROR_OUT_OF_HOST_MEMORY;
    }
    if let Err(e) = unsafe { handle_store::resolve_device(device) } {
        warn!("{}", e);
        return vk::Result::ERROR_DEVICE_LOST;
    }

    let ai = unsafe { &*p_allocate_info };
    if !handle_store::cmd_pools().contains(ai.command_pool.as_raw()) {
        return crate::report(DriverError::InvalidHandle {
            kind: handle_store::cmd_pools().kind(),
            raw: ai.command_pool.as_raw(),
        });
    }

    let count = ai.command_buffer_count as usize;
    let out = unsafe { std::slice::from_raw_parts_mut(p_command_buffers, count) };

    let created = txn::allocate_all(
        &mut (),
        0..count,
        |_, _| -> Result<(u64, vk::CommandBuffer), DriverError> {
            let id = registry::alloc_handle();
            let handle: vk::CommandBuffer = DispatchableHandle::create(id)?;
            handle_store::command_buffers().insert_with_id(
                id,
                CommandBuffer {
                    device,
                    pool: ai.command_pool,
                    level: ai.level,
                    handle,
                },
            );
            Ok((id, handle))
        },
        |_, (id, handle)| {
            if let Err(e) = handle_store::command_buffers().remove(id) {
                warn!("rollback: {}", e);
            }
            unsafe { DispatchableHandle::destroy(handle) };
        },
    );

    match created {
        Ok(buffers) => {
            for (slot, (_, handle)) in out.iter_mut().zip(buffers) {
                *slot = handle;
            }
            vk::Result::SUCCESS
        }
        Err(e) => {
            out.fill(vk::CommandBuffer::null());
            crate::report(e)
        }
    }
}

#[no_mangle]
pub unsafe extern "C" fn vkFreeCommandBuffers(
    _device: vk::Device,
    _command_pool: vk::CommandPool,
    command_buffer_count: u32,
    p_command_buffers: *const vk::CommandBuffer,
) {
    if p_command_buffers.is_null() || command_buffer_count == 0 {
        return;
    }

    let buffers =
        unsafe { std::slice::from_raw_parts(p_command_buffers, command_buffer_count as usize) };
    for &cb in buffers {
        let Some(local_id) = (unsafe { DispatchableHandle::get_id(cb) }) else {
            continue;
        };
        match handle_store::command_buffers().remove(local_id) {
            Ok(_) => unsafe { DispatchableHandle::destroy(cb) },
            Err(e) => warn!("free ignored: {}", e),
        }
    }
}

// ── Command Buffer State ────────────────────────────────────

#[no_mangle]
pub unsafe extern "C" fn vkBeginCommandBuffer(
    command_buffer: vk::CommandBuffer,
    _p_begin_info: *const vk::CommandBufferBeginInfo<'_>,
) -> vk::Result {
    unsafe { check_command_buffer(command_buffer) }
}

#[no_mangle]
pub unsafe extern "C" fn vkEndCommandBuffer(command_buffer: vk::CommandBuffer) -> vk::Result {
    unsafe { check_command_buffer(command_buffer) }
}

#[no_mangle]
pub unsafe extern "C" fn vkResetCommandBuffer(
    command_buffer: vk::CommandBuffer,
    _flags: vk::CommandBufferResetFlags,
) -> vk::Result {
    unsafe { check_command_buffer(command_buffer) }
}

unsafe fn check_command_buffer(command_buffer: vk::CommandBuffer) -> vk::Result {
    let id = unsafe { DispatchableHandle::get_id(command_buffer) }.unwrap_or(0);
    if handle_store::command_buffers().contains(id) {
        vk::Result::SUCCESS
    } else {
        crate::report(DriverError::InvalidHandle {
            kind: handle_store::command_buffers().kind(),
            raw: command_buffer.as_raw(),
        })
    }
}

// ── Recording ───────────────────────────────────────────────

macro_rules! noop_commands {
    ($( fn $name:ident( $($arg:ident : $ty:ty),* $(,)? ); )*) => {
        $(
            #[no_mangle]
            #[allow(unused_variables)]
            pub unsafe extern "C" fn $name(command_buffer: vk::CommandBuffer, $($arg: $ty),*) {}
        )*

        /// Names of the vkCmd* entry points.
        pub const RECORDING_ENTRY_POINTS: &[&str] = &[$(stringify!($name)),*];

        pub(crate) fn lookup_recording(name: &str) -> vk::PFN_vkVoidFunction {
            $(
                if name == stringify!($name) {
                    return Some(unsafe {
                        std::mem::transmute::<*const (), unsafe extern "system" fn()>(
                            $name as *const (),
                        )
                    });
                }
            )*
            None
        }
    };
}

noop_commands! {
    fn vkCmdBindPipeline(bind_point: vk::PipelineBindPoint, pipeline: vk::Pipeline);
    fn vkCmdSetViewport(first_viewport: u32, viewport_count: u32, p_viewports: *const vk::Viewport);
    fn vkCmdSetScissor(first_scissor: u32, scissor_count: u32, p_scissors: *const vk::Rect2D);
    fn vkCmdSetLineWidth(line_width: f32);
    fn vkCmdSetDepthBias(constant_factor: f32, clamp: f32, slope_factor: f32);
    fn vkCmdSetBlendConstants(blend_constants: *const [f32; 4]);
    fn vkCmdSetDepthBounds(min_depth_bounds: f32, max_depth_bounds: f32);
    fn vkCmdSetStencilCompareMask(face_mask: vk::StencilFaceFlags, compare_mask: u32);
    fn vkCmdSetStencilWriteMask(face_mask: vk::StencilFaceFlags, write_mask: u32);
    fn vkCmdSetStencilReference(face_mask: vk::StencilFaceFlags, reference: u32);
    fn vkCmdBindDescriptorSets(
        bind_point: vk::PipelineBindPoint,
        layout: vk::PipelineLayout,
        first_set: u32,
        descriptor_set_count: u32,
        p_descriptor_sets: *const vk::DescriptorSet,
        dynamic_offset_count: u32,
        p_dynamic_offsets: *const u32,
    );
    fn vkCmdBindIndexBuffer(buffer: vk::Buffer, offset: vk::DeviceSize, index_type: vk::IndexType);
    fn vkCmdBindVertexBuffers(
        first_binding: u32,
        binding_count: u32,
        p_buffers: *const vk::Buffer,
        p_offsets: *const vk::DeviceSize,
    );
    fn vkCmdDraw(vertex_count: u32, instance_count: u32, first_vertex: u32, first_instance: u32);
    fn vkCmdDrawIndexed(
        index_count: u32,
        instance_count: u32,
        first_index: u32,
        vertex_offset: i32,
        first_instance: u32,
    );
    fn vkCmdDrawIndirect(buffer: vk::Buffer, offset: vk::DeviceSize, draw_count: u32, stride: u32);
    fn vkCmdDrawIndexedIndirect(
        buffer: vk::Buffer,
        offset: vk::DeviceSize,
        draw_count: u32,
        stride: u32,
    );
    fn vkCmdDispatch(group_count_x: u32, group_count_y: u32, group_count_z: u32);
    fn vkCmdDispatchIndirect(buffer: vk::Buffer, offset: vk::DeviceSize);
    fn vkCmdCopyBuffer(
        src_buffer: vk::Buffer,
        dst_buffer: vk::Buffer,
        region_count: u32,
        p_regions: *const vk::BufferCopy,
    );
    fn vkCmdCopyImage(
        src_image: vk::Image,
        src_image_layout: vk::ImageLayout,
        dst_image: vk::Image,
        dst_image_layout: vk::ImageLayout,
        region_count: u32,
        p_regions: *const vk::ImageCopy,
    );
    fn vkCmdBlitImage(
        src_image: vk::Image,
        src_image_layout: vk::ImageLayout,
        dst_image: vk::Image,
        dst_image_layout: vk::ImageLayout,
        region_count: u32,
        p_regions: *const vk::ImageBlit,
        filter: vk::Filter,
    );
    fn vkCmdCopyBufferToImage(
        src_buffer: vk::Buffer,
        dst_image: vk::Image,
        dst_image_layout: vk::ImageLayout,
        region_count: u32,
        p_regions: *const vk::BufferImageCopy,
    );
    fn vkCmdCopyImageToBuffer(
        src_image: vk::Image,
        src_image_layout: vk::ImageLayout,
        dst_buffer: vk::Buffer,
        region_count: u32,
        p_regions: *const vk::BufferImageCopy,
    );
    fn vkCmdUpdateBuffer(
        dst_buffer: vk::Buffer,
        dst_offset: vk::DeviceSize,
        data_size: vk::DeviceSize,
        p_data: *const c_void,
    );
    fn vkCmdFillBuffer(
        dst_buffer: vk::Buffer,
        dst_offset: vk::DeviceSize,
        size: vk::DeviceSize,
        data: u32,
    );
    fn vkCmdClearColorImage(
        image: vk::Image,
        image_layout: vk::ImageLayout,
        p_color: *const vk::ClearColorValue,
        range_count: u32,
        p_ranges: *const vk::ImageSubresourceRange,
    );
    fn vkCmdClearDepthStencilImage(
        image: vk::Image,
        image_layout: vk::ImageLayout,
        p_depth_stencil: *const vk::ClearDepthStencilValue,
        range_count: u32,
        p_ranges: *const vk::ImageSubresourceRange,
    );
    fn vkCmdClearAttachments(
        attachment_count: u32,
        p_attachments: *const vk::ClearAttachment,
        rect_count: u32,
        p_rects: *const vk::ClearRect,
    );
    fn vkCmdResolveImage(
        src_image: vk::Image,
        src_image_layout: vk::ImageLayout,
        dst_image: vk::Image,
        dst_image_layout: vk::ImageLayout,
        region_count: u32,
        p_regions: *const vk::ImageResolve,
    );
    fn vkCmdSetEvent(event: vk::Event, stage_mask: vk::PipelineStageFlags);
    fn vkCmdResetEvent(event: vk::Event, stage_mask: vk::PipelineStageFlags);
    fn vkCmdWaitEvents(
        event_count: u32,
        p_events: *const vk::Event,
        src_stage_mask: vk::PipelineStageFlags,
        dst_stage_mask: vk::PipelineStageFlags,
        memory_barrier_count: u32,
        p_memory_barriers: *const vk::MemoryBarrier<'_>,
        buffer_memory_barrier_count: u32,
        p_buffer_memory_barriers: *const vk::BufferMemoryBarrier<'_>,
        image_memory_barrier_count: u32,
        p_image_memory_barriers: *const vk::ImageMemoryBarrier<'_>,
    );
    fn vkCmdPipelineBarrier(
        src_stage_mask: vk::PipelineStageFlags,
        dst_stage_mask: vk::PipelineStageFlags,
        dependency_flags: vk::DependencyFlags,
        memory_barrier_count: u32,
        p_memory_barriers: *const vk::MemoryBarrier<'_>,
        buffer_memory_barrier_count: u32,
        p_buffer_memory_barriers: *const vk::BufferMemoryBarrier<'_>,
        image_memory_barrier_count: u32,
        p_image_memory_barriers: *const vk::ImageMemoryBarrier<'_>,
    );
    fn vkCmdBeginQuery(query_pool: vk::QueryPool, query: u32, flags: vk::QueryControlFlags);
    fn vkCmdEndQuery(query_pool: vk::QueryPool, query: u32);
    fn vkCmdResetQueryPool(query_pool: vk::QueryPool, first_query: u32, query_count: u32);
    fn vkCmdWriteTimestamp(
        pipeline_stage: vk::PipelineStageFlags,
        query_pool: vk::QueryPool,
        query: u32,
    );
    fn vkCmdCopyQueryPoolResults(
        query_pool: vk::QueryPool,
        first_query: u32,
        query_count: u32,
        dst_buffer: vk::Buffer,
        dst_offset: vk::DeviceSize,
        stride: vk::DeviceSize,
        flags: vk::QueryResultFlags,
    );
    fn vkCmdPushConstants(
        layout: vk::PipelineLayout,
        stage_flags: vk::ShaderStageFlags,
        offset: u32,
        size: u32,
        p_values: *const c_void,
    );
    fn vkCmdBeginRenderPass(
        p_render_pass_begin: *const vk::RenderPassBeginInfo<'_>,
        contents: vk::SubpassContents,
    );
    fn vkCmdNextSubpass(contents: vk::SubpassContents);
    fn vkCmdEndRenderPass();
    fn vkCmdExecuteCommands(command_buffer_count: u32, p_command_buffers: *const vk::CommandBuffer);
}
