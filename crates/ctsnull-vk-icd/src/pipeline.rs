//! Shader module, pipeline cache, pipeline layout and pipeline functions.

use std::os::raw::c_void;

use ash::vk;
use ash::vk::Handle;
use tracing::{debug, warn};

use ctsnull_core::object::{Pipeline, PipelineCache, PipelineLayout, ShaderModule};
use ctsnull_core::{host_alloc, txn, HandleRegistry};

use crate::handle_store;

// ── Shader Module ───────────────────────────────────────────

#[no_mangle]
pub unsafe extern "C" fn vkCreateShaderModule(
    device: vk::Device,
    p_create_info: *const vk::ShaderModuleCreateInfo<'_>,
    _p_allocator: *const vk::AllocationCallbacks<'_>,
    p_shader_module: *mut vk::ShaderModule,
) -> vk::Result {
    unsafe {
        handle_store::create_child(
            handle_store::shader_modules(),
            device,
            p_create_info,
            p_shader_module,
            |device, ci| Ok(ShaderModule::new(device, ci)),
        )
    }
}

#[no_mangle]
pub unsafe extern "C" fn vkDestroyShaderModule(
    _device: vk::Device,
    shader_module: vk::ShaderModule,
    _p_allocator: *const vk::AllocationCallbacks<'_>,
) {
    handle_store::destroy_child(handle_store::shader_modules(), shader_module);
}

// ── Pipeline Cache ──────────────────────────────────────────

#[no_mangle]
pub unsafe extern "C" fn vkCreatePipelineCache(
    device: vk::Device,
    p_create_info: *const vk::PipelineCacheCreateInfo<'_>,
    _p_allocator: *const vk::AllocationCallbacks<'_>,
    p_pipeline_cache: *mut vk::PipelineCache,
) -> vk::Result {
    unsafe {
        handle_store::create_child(
            handle_store::pipeline_caches(),
            device,
            p_create_info,
            p_pipeline_cache,
            |device, ci| Ok(PipelineCache::new(device, ci)),
        )
    }
}

#[no_mangle]
pub unsafe extern "C" fn vkDestroyPipelineCache(
    _device: vk::Device,
    pipeline_cache: vk::PipelineCache,
    _p_allocator: *const vk::AllocationCallbacks<'_>,
) {
    handle_store::destroy_child(handle_store::pipeline_caches(), pipeline_cache);
}

/// Caches are always empty.
#[no_mangle]
pub unsafe extern "C" fn vkGetPipelineCacheData(
    _device: vk::Device,
    _pipeline_cache: vk::PipelineCache,
    p_data_size: *mut usize,
    _p_data: *mut c_void,
) -> vk::Result {
    if !p_data_size.is_null() {
        unsafe { *p_data_size = 0 };
    }
    vk::Result::SUCCESS
}

#[no_mangle]
pub unsafe extern "C" fn vkMergePipelineCaches(
    _device: vk::Device,
    _dst_cache: vk::PipelineCache,
    _src_cache_count: u32,
    _p_src_caches: *const vk::PipelineCache,
) -> vk::Result {
    vk::Result::SUCCESS
}

// ── Pipeline Layout ─────────────────────────────────────────

#[no_mangle]
pub unsafe extern "C" fn vkCreatePipelineLayout(
    device: vk::Device,
    p_create_info: *const vk::PipelineLayoutCreateInfo<'_>,
    _p_allocator: *const vk::AllocationCallbacks<'_>,
    p_pipeline_layout: *mut vk::PipelineLayout,
) -> vk::Result {
    unsafe {
        handle_store::create_child(
            handle_store::pipeline_layouts(),
            device,
            p_create_info,
            p_pipeline_layout,
            |device, ci| Ok(PipelineLayout::new(device, ci)),
        )
    }
}

#[no_mangle]
pub unsafe extern "C" fn vkDestroyPipelineLayout(
    _device: vk::Device,
    pipeline_layout: vk::PipelineLayout,
    _p_allocator: *const vk::AllocationCallbacks<'_>,
) {
    handle_store::destroy_child(handle_store::pipeline_layouts(), pipeline_layout);
}

// ── Pipelines ───────────────────────────────────────────────

#[no_mangle]
pub unsafe extern "C" fn vkCreateGraphicsPipelines(
    device: vk::Device,
    _pipeline_cache: vk::PipelineCache,
    create_info_count: u32,
    p_create_infos: *const vk::GraphicsPipelineCreateInfo<'_>,
    _p_allocator: *const vk::AllocationCallbacks<'_>,
    p_pipelines: *mut vk::Pipeline,
) -> vk::Result {
    unsafe {
        create_pipelines(
            device,
            create_info_count,
            p_create_infos,
            p_pipelines,
            Pipeline::graphics,
        )
    }
}

#[no_mangle]
pub unsafe extern "C" fn vkCreateComputePipelines(
    device: vk::Device,
    _pipeline_cache: vk::PipelineCache,
    create_info_count: u32,
    p_create_infos: *const vk::ComputePipelineCreateInfo<'_>,
    _p_allocator: *const vk::AllocationCallbacks<'_>,
    p_pipelines: *mut vk::Pipeline,
) -> vk::Result {
    unsafe {
        create_pipelines(
            device,
            create_info_count,
            p_create_infos,
            p_pipelines,
            Pipeline::compute,
        )
    }
}

#[no_mangle]
pub unsafe extern "C" fn vkDestroyPipeline(
    _device: vk::Device,
    pipeline: vk::Pipeline,
    _p_allocator: *const vk::AllocationCallbacks<'_>,
) {
    handle_store::destroy_child(handle_store::pipelines(), pipeline);
}

/// One pipeline per create-info, all or nothing. On failure every output
/// slot is `VK_NULL_HANDLE`.
unsafe fn create_pipelines<C>(
    device: vk::Device,
    count: u32,
    p_create_infos: *const C,
    p_pipelines: *mut vk::Pipeline,
    build: impl Fn(vk::Device, &C) -> Pipeline,
) -> vk::Result {
    if count == 0 {
        return vk::Result::SUCCESS;
    }
    if p_create_infos.is_null() || p_pipelines.is_null() {
        return vk::Result::ERROR_OUT_OF_HOST_MEMORY;
    }
    if let Err(e) = unsafe { handle_store::resolve_device(device) } {
        warn!("{}", e);
        return vk::Result::ERROR_DEVICE_LOST;
    }

    let create_infos = unsafe { std::slice::from_raw_parts(p_create_infos, count as usize) };
    let out = unsafe { std::slice::from_raw_parts_mut(p_pipelines, count as usize) };

    let mut registry: &HandleRegistry<Box<Pipeline>> = handle_store::pipelines();
    let created = txn::allocate_all(
        &mut registry,
        create_infos,
        |registry, ci| host_alloc::try_new(build(device, ci)).map(|p| registry.insert(p)),
        |registry, id| {
            if let Err(e) = registry.remove(id) {
                warn!("rollback: {}", e);
            }
        },
    );

    match created {
        Ok(ids) => {
            for (slot, id) in out.iter_mut().zip(ids) {
                debug!("created VkPipeline {:#x}", id);
                *slot = vk::Pipeline::from_raw(id);
            }
            vk::Result::SUCCESS
        }
        Err(e) => {
            out.fill(vk::Pipeline::null());
            crate::report(e)
        }
    }
}
