//! Integration test: null ICD entry points
//!
//! Drives the exported vk* functions directly (no loader): instance and
//! device lifecycle, fixed physical-device queries, memory, images,
//! pipelines, command buffers and fences.
//!
//! Run with: cargo test -p ctsnull-vk-icd --test icd_lifecycle_test

use std::ffi::CStr;
use std::ptr;

use ash::vk;
use ash::vk::Handle;

use ctsnull_core::object::DeviceChild;
use ctsnull_vk_icd::command::*;
use ctsnull_vk_icd::device::*;
use ctsnull_vk_icd::dispatch::{DispatchableHandle, ICD_LOADER_MAGIC};
use ctsnull_vk_icd::handle_store;
use ctsnull_vk_icd::image::*;
use ctsnull_vk_icd::instance::*;
use ctsnull_vk_icd::memory::*;
use ctsnull_vk_icd::physical_device::*;
use ctsnull_vk_icd::pipeline::*;
use ctsnull_vk_icd::sync::*;

struct TestDevice {
    instance: vk::Instance,
    physical_device: vk::PhysicalDevice,
    device: vk::Device,
}

impl TestDevice {
    fn new() -> Self {
        unsafe {
            let ci = vk::InstanceCreateInfo::default();
            let mut instance = vk::Instance::null();
            assert_eq!(
                vkCreateInstance(&ci, ptr::null(), &mut instance),
                vk::Result::SUCCESS
            );

            let mut count = 1;
            let mut physical_device = vk::PhysicalDevice::null();
            assert_eq!(
                vkEnumeratePhysicalDevices(instance, &mut count, &mut physical_device),
                vk::Result::SUCCESS
            );

            let priorities = [1.0f32];
            let queue_ci = [vk::DeviceQueueCreateInfo::default()
                .queue_family_index(0)
                .queue_priorities(&priorities)];
            let device_ci = vk::DeviceCreateInfo::default().queue_create_infos(&queue_ci);
            let mut device = vk::Device::null();
            assert_eq!(
                vkCreateDevice(physical_device, &device_ci, ptr::null(), &mut device),
                vk::Result::SUCCESS
            );

            Self {
                instance,
                physical_device,
                device,
            }
        }
    }
}

impl Drop for TestDevice {
    fn drop(&mut self) {
        unsafe {
            vkDestroyDevice(self.device, ptr::null());
            vkDestroyInstance(self.instance, ptr::null());
        }
    }
}

#[test]
fn test_enumerate_returns_same_physical_device() {
    let t = TestDevice::new();
    unsafe {
        let mut count = 0;
        assert_eq!(
            vkEnumeratePhysicalDevices(t.instance, &mut count, ptr::null_mut()),
            vk::Result::SUCCESS
        );
        assert_eq!(count, 1);

        let mut again = vk::PhysicalDevice::null();
        count = 1;
        vkEnumeratePhysicalDevices(t.instance, &mut count, &mut again);
        assert_eq!(again, t.physical_device);
    }
}

#[test]
fn test_enumerate_into_empty_array_is_incomplete() {
    let t = TestDevice::new();
    unsafe {
        let mut count = 0;
        let mut slot = vk::PhysicalDevice::null();
        assert_eq!(
            vkEnumeratePhysicalDevices(t.instance, &mut count, &mut slot),
            vk::Result::INCOMPLETE
        );
        assert!(slot.is_null());
    }
}

#[test]
fn test_physical_device_properties() {
    let t = TestDevice::new();
    let mut props = vk::PhysicalDeviceProperties::default();
    unsafe { vkGetPhysicalDeviceProperties(t.physical_device, &mut props) };

    assert_eq!(props.api_version, vk::API_VERSION_1_0);
    assert_eq!(props.driver_version, 1);
    assert_eq!(props.device_type, vk::PhysicalDeviceType::OTHER);
    let name = unsafe { CStr::from_ptr(props.device_name.as_ptr()) };
    assert_eq!(name.to_str().expect("utf-8 name"), "null");
    assert_eq!(props.limits.max_texel_buffer_elements, 8096);
}

#[test]
fn test_queue_family_and_memory_properties_are_constant() {
    let t = TestDevice::new();
    let query = || unsafe {
        let mut count = 0;
        vkGetPhysicalDeviceQueueFamilyProperties(t.physical_device, &mut count, ptr::null_mut());
        assert_eq!(count, 1);
        let mut family = vk::QueueFamilyProperties::default();
        vkGetPhysicalDeviceQueueFamilyProperties(t.physical_device, &mut count, &mut family);

        let mut memory = vk::PhysicalDeviceMemoryProperties::default();
        vkGetPhysicalDeviceMemoryProperties(t.physical_device, &mut memory);
        (family, memory)
    };

    let (family, memory) = query();
    assert_eq!(family.queue_count, 1);
    assert_eq!(family.queue_flags, vk::QueueFlags::GRAPHICS | vk::QueueFlags::COMPUTE);
    assert_eq!(family.timestamp_valid_bits, 64);
    assert_eq!(memory.memory_type_count, 1);
    assert_eq!(memory.memory_types[0].property_flags, vk::MemoryPropertyFlags::HOST_VISIBLE);
    assert_eq!(memory.memory_types[0].heap_index, 0);
    assert_eq!(memory.memory_heap_count, 1);
    assert_eq!(memory.memory_heaps[0].size, 1 << 31);

    for _ in 0..3 {
        let (f, m) = query();
        assert_eq!(f.queue_flags, family.queue_flags);
        assert_eq!(f.queue_count, family.queue_count);
        assert_eq!(m.memory_heaps[0].size, memory.memory_heaps[0].size);
        assert_eq!(m.memory_types[0].property_flags, memory.memory_types[0].property_flags);
    }
}

#[test]
fn test_format_properties_report_every_feature() {
    let t = TestDevice::new();
    let mut props = vk::FormatProperties::default();
    unsafe {
        vkGetPhysicalDeviceFormatProperties(
            t.physical_device,
            vk::Format::BC1_RGB_UNORM_BLOCK,
            &mut props,
        )
    };
    assert_eq!(props.linear_tiling_features, ALL_FORMAT_FEATURES);
    assert_eq!(props.optimal_tiling_features, ALL_FORMAT_FEATURES);
    assert_eq!(props.buffer_features, ALL_FORMAT_FEATURES);
    assert!(ALL_FORMAT_FEATURES.contains(vk::FormatFeatureFlags::BLIT_DST));
}

#[test]
fn test_get_device_queue_is_stable() {
    let t = TestDevice::new();
    unsafe {
        let mut q1 = vk::Queue::null();
        let mut q2 = vk::Queue::null();
        vkGetDeviceQueue(t.device, 0, 0, &mut q1);
        vkGetDeviceQueue(t.device, 0, 0, &mut q2);
        assert!(!q1.is_null());
        assert_eq!(q1, q2);

        let mut missing = vk::Queue::null();
        vkGetDeviceQueue(t.device, 1, 0, &mut missing);
        assert!(missing.is_null());
    }
}

#[test]
fn test_map_memory_returns_offset_into_allocation() {
    let t = TestDevice::new();
    unsafe {
        let ai = vk::MemoryAllocateInfo::default().allocation_size(256);
        let mut memory = vk::DeviceMemory::null();
        assert_eq!(
            vkAllocateMemory(t.device, &ai, ptr::null(), &mut memory),
            vk::Result::SUCCESS
        );

        let mut base = ptr::null_mut();
        let mut at_64 = ptr::null_mut();
        assert_eq!(
            vkMapMemory(t.device, memory, 0, vk::WHOLE_SIZE, vk::MemoryMapFlags::empty(), &mut base),
            vk::Result::SUCCESS
        );
        assert_eq!(
            vkMapMemory(t.device, memory, 64, 16, vk::MemoryMapFlags::empty(), &mut at_64),
            vk::Result::SUCCESS
        );
        assert_eq!(at_64 as usize, base as usize + 64);

        *(at_64 as *mut u8) = 0xAB;
        assert_eq!(*(base as *const u8).add(64), 0xAB);

        vkUnmapMemory(t.device, memory);
        vkFreeMemory(t.device, memory, ptr::null());
        assert!(!handle_store::memories().contains(memory.as_raw()));
    }
}

#[test]
fn test_map_zero_sized_allocation_fails() {
    let t = TestDevice::new();
    unsafe {
        let ai = vk::MemoryAllocateInfo::default().allocation_size(0);
        let mut memory = vk::DeviceMemory::null();
        assert_eq!(
            vkAllocateMemory(t.device, &ai, ptr::null(), &mut memory),
            vk::Result::SUCCESS
        );

        let mut data = ptr::null_mut();
        assert_eq!(
            vkMapMemory(t.device, memory, 0, vk::WHOLE_SIZE, vk::MemoryMapFlags::empty(), &mut data),
            vk::Result::ERROR_MEMORY_MAP_FAILED
        );
        assert!(data.is_null());
        vkFreeMemory(t.device, memory, ptr::null());
    }
}

#[test]
fn test_image_memory_requirements() {
    let t = TestDevice::new();
    unsafe {
        let ci = vk::ImageCreateInfo::default()
            .image_type(vk::ImageType::TYPE_2D)
            .format(vk::Format::R8G8B8A8_UNORM)
            .extent(vk::Extent3D {
                width: 16,
                height: 16,
                depth: 1,
            })
            .samples(vk::SampleCountFlags::TYPE_1);
        let mut image = vk::Image::null();
        assert_eq!(
            vkCreateImage(t.device, &ci, ptr::null(), &mut image),
            vk::Result::SUCCESS
        );

        let mut reqs = vk::MemoryRequirements::default();
        vkGetImageMemoryRequirements(t.device, image, &mut reqs);
        assert_eq!(reqs.size, 1024);
        assert_eq!(reqs.alignment, 4);
        assert_eq!(reqs.memory_type_bits, 1);

        let mut layout = vk::SubresourceLayout::default();
        vkGetImageSubresourceLayout(
            t.device,
            image,
            &vk::ImageSubresource::default(),
            &mut layout,
        );
        assert_eq!(layout.row_pitch, 64);
        assert_eq!(layout.size, 1024);

        vkDestroyImage(t.device, image, ptr::null());
    }
}

#[test]
fn test_huge_image_extent_does_not_overflow() {
    let t = TestDevice::new();
    unsafe {
        let ci = vk::ImageCreateInfo::default()
            .image_type(vk::ImageType::TYPE_3D)
            .format(vk::Format::R64G64B64A64_SFLOAT)
            .extent(vk::Extent3D {
                width: 1 << 22,
                height: 1 << 22,
                depth: 1 << 22,
            })
            .samples(vk::SampleCountFlags::TYPE_1);
        let mut image = vk::Image::null();
        assert_eq!(
            vkCreateImage(t.device, &ci, ptr::null(), &mut image),
            vk::Result::SUCCESS
        );

        let mut reqs = vk::MemoryRequirements {
            size: 1,
            ..Default::default()
        };
        vkGetImageMemoryRequirements(t.device, image, &mut reqs);
        assert_eq!(reqs.size, 0);
        assert_eq!(reqs.alignment, 4);

        let mut layout = vk::SubresourceLayout::default();
        vkGetImageSubresourceLayout(
            t.device,
            image,
            &vk::ImageSubresource::default(),
            &mut layout,
        );
        assert_eq!(layout.row_pitch, 32 << 22);
        assert_eq!(layout.depth_pitch, 32 << 44);
        assert_eq!(layout.size, u64::MAX);

        vkDestroyImage(t.device, image, ptr::null());
    }
}

#[test]
fn test_buffer_memory_requirements_and_bind() {
    let t = TestDevice::new();
    unsafe {
        let ci = vk::BufferCreateInfo::default().size(300);
        let mut buffer = vk::Buffer::null();
        assert_eq!(
            vkCreateBuffer(t.device, &ci, ptr::null(), &mut buffer),
            vk::Result::SUCCESS
        );
        let mut reqs = vk::MemoryRequirements::default();
        vkGetBufferMemoryRequirements(t.device, buffer, &mut reqs);
        assert_eq!(reqs.size, 300);
        assert_eq!(reqs.alignment, 1);

        let ai = vk::MemoryAllocateInfo::default().allocation_size(reqs.size);
        let mut memory = vk::DeviceMemory::null();
        vkAllocateMemory(t.device, &ai, ptr::null(), &mut memory);
        assert_eq!(
            vkBindBufferMemory(t.device, buffer, memory, 0),
            vk::Result::SUCCESS
        );
        assert_eq!(
            vkBindBufferMemory(t.device, buffer, vk::DeviceMemory::from_raw(0xdead), 0),
            vk::Result::ERROR_UNKNOWN
        );

        vkDestroyBuffer(t.device, buffer, ptr::null());
        vkFreeMemory(t.device, memory, ptr::null());
    }
}

#[test]
fn test_create_with_unknown_device_is_device_lost() {
    let _t = TestDevice::new();
    let mut stale = DispatchableHandle {
        loader_data: ICD_LOADER_MAGIC,
        local_id: 0x7fff_ffff_ffff,
    };
    let device = vk::Device::from_raw(&mut stale as *mut DispatchableHandle as u64);
    unsafe {
        let mut semaphore = vk::Semaphore::null();
        assert_eq!(
            vkCreateSemaphore(device, &vk::SemaphoreCreateInfo::default(), ptr::null(), &mut semaphore),
            vk::Result::ERROR_DEVICE_LOST
        );
        assert!(semaphore.is_null());
        assert_eq!(vkDeviceWaitIdle(device), vk::Result::ERROR_DEVICE_LOST);
    }
}

#[test]
fn test_submit_signals_fence() {
    let t = TestDevice::new();
    unsafe {
        let ci = vk::FenceCreateInfo::default();
        let mut fence = vk::Fence::null();
        assert_eq!(
            vkCreateFence(t.device, &ci, ptr::null(), &mut fence),
            vk::Result::SUCCESS
        );
        assert_eq!(vkGetFenceStatus(t.device, fence), vk::Result::NOT_READY);
        assert_eq!(
            vkWaitForFences(t.device, 1, &fence, vk::TRUE, u64::MAX),
            vk::Result::TIMEOUT
        );

        let mut queue = vk::Queue::null();
        vkGetDeviceQueue(t.device, 0, 0, &mut queue);
        assert_eq!(
            vkQueueSubmit(queue, 0, ptr::null(), fence),
            vk::Result::SUCCESS
        );
        assert_eq!(vkGetFenceStatus(t.device, fence), vk::Result::SUCCESS);
        assert_eq!(
            vkWaitForFences(t.device, 1, &fence, vk::TRUE, 0),
            vk::Result::SUCCESS
        );

        assert_eq!(vkResetFences(t.device, 1, &fence), vk::Result::SUCCESS);
        assert_eq!(vkGetFenceStatus(t.device, fence), vk::Result::NOT_READY);
        vkDestroyFence(t.device, fence, ptr::null());
    }
}

#[test]
fn test_fence_created_signaled() {
    let t = TestDevice::new();
    unsafe {
        let ci = vk::FenceCreateInfo::default().flags(vk::FenceCreateFlags::SIGNALED);
        let mut fence = vk::Fence::null();
        vkCreateFence(t.device, &ci, ptr::null(), &mut fence);
        assert_eq!(vkGetFenceStatus(t.device, fence), vk::Result::SUCCESS);
        vkDestroyFence(t.device, fence, ptr::null());
    }
}

#[test]
fn test_event_set_and_reset() {
    let t = TestDevice::new();
    unsafe {
        let ci = vk::EventCreateInfo::default();
        let mut event = vk::Event::null();
        vkCreateEvent(t.device, &ci, ptr::null(), &mut event);
        assert_eq!(vkGetEventStatus(t.device, event), vk::Result::EVENT_RESET);
        assert_eq!(vkSetEvent(t.device, event), vk::Result::SUCCESS);
        assert_eq!(vkGetEventStatus(t.device, event), vk::Result::EVENT_SET);
        assert_eq!(vkResetEvent(t.device, event), vk::Result::SUCCESS);
        assert_eq!(vkGetEventStatus(t.device, event), vk::Result::EVENT_RESET);
        vkDestroyEvent(t.device, event, ptr::null());
    }
}

#[test]
fn test_compute_pipelines_are_created_per_info() {
    let t = TestDevice::new();
    unsafe {
        let infos = [vk::ComputePipelineCreateInfo::default(); 3];
        let mut pipelines = [vk::Pipeline::null(); 3];
        assert_eq!(
            vkCreateComputePipelines(
                t.device,
                vk::PipelineCache::null(),
                infos.len() as u32,
                infos.as_ptr(),
                ptr::null(),
                pipelines.as_mut_ptr(),
            ),
            vk::Result::SUCCESS
        );
        assert!(pipelines.iter().all(|p| !p.is_null()));
        for p in pipelines {
            vkDestroyPipeline(t.device, p, ptr::null());
            assert!(!handle_store::pipelines().contains(p.as_raw()));
        }
    }
}

#[test]
fn test_pipeline_batch_rolls_back_on_failure() {
    let t = TestDevice::new();
    unsafe {
        let infos = [vk::GraphicsPipelineCreateInfo::default(); 4];
        let mut pipelines = [vk::Pipeline::from_raw(0x1); 4];
        let live_before = handle_store::pipelines().count_where(|p| p.device() == t.device);

        let result = {
            let _fault = ctsnull_core::host_alloc::fail_after(2);
            vkCreateGraphicsPipelines(
                t.device,
                vk::PipelineCache::null(),
                infos.len() as u32,
                infos.as_ptr(),
                ptr::null(),
                pipelines.as_mut_ptr(),
            )
        };

        assert_eq!(result, vk::Result::ERROR_OUT_OF_HOST_MEMORY);
        assert!(pipelines.iter().all(|p| p.is_null()));
        let live_after = handle_store::pipelines().count_where(|p| p.device() == t.device);
        assert_eq!(live_before, live_after);
    }
}

#[test]
fn test_command_buffers_allocate_and_free_with_pool() {
    let t = TestDevice::new();
    unsafe {
        let pool_ci = vk::CommandPoolCreateInfo::default();
        let mut pool = vk::CommandPool::null();
        assert_eq!(
            vkCreateCommandPool(t.device, &pool_ci, ptr::null(), &mut pool),
            vk::Result::SUCCESS
        );

        let ai = vk::CommandBufferAllocateInfo::default()
            .command_pool(pool)
            .level(vk::CommandBufferLevel::PRIMARY)
            .command_buffer_count(3);
        let mut buffers = [vk::CommandBuffer::null(); 3];
        assert_eq!(
            vkAllocateCommandBuffers(t.device, &ai, buffers.as_mut_ptr()),
            vk::Result::SUCCESS
        );
        assert!(buffers.iter().all(|cb| !cb.is_null()));

        let begin = vk::CommandBufferBeginInfo::default();
        assert_eq!(vkBeginCommandBuffer(buffers[0], &begin), vk::Result::SUCCESS);
        vkCmdDraw(buffers[0], 3, 1, 0, 0);
        vkCmdEndRenderPass(buffers[0]);
        assert_eq!(vkEndCommandBuffer(buffers[0]), vk::Result::SUCCESS);

        vkFreeCommandBuffers(t.device, pool, 1, &buffers[0]);
        assert_eq!(
            handle_store::command_buffers().count_where(|cb| cb.pool() == pool),
            2
        );

        vkDestroyCommandPool(t.device, pool, ptr::null());
        assert_eq!(
            handle_store::command_buffers().count_where(|cb| cb.pool() == pool),
            0
        );
    }
}

#[test]
fn test_destroy_device_releases_leaked_children() {
    let t = TestDevice::new();
    unsafe {
        let mut buffer = vk::Buffer::null();
        vkCreateBuffer(t.device, &vk::BufferCreateInfo::default().size(8), ptr::null(), &mut buffer);
        let mut sampler = vk::Sampler::null();
        vkCreateSampler(t.device, &vk::SamplerCreateInfo::default(), ptr::null(), &mut sampler);

        let mut device = vk::Device::null();
        let device_ci = vk::DeviceCreateInfo::default();
        vkCreateDevice(t.physical_device, &device_ci, ptr::null(), &mut device);
        let mut other = vk::Buffer::null();
        vkCreateBuffer(device, &vk::BufferCreateInfo::default().size(8), ptr::null(), &mut other);

        vkDestroyDevice(device, ptr::null());
        assert!(!handle_store::buffers().contains(other.as_raw()));
        assert!(handle_store::buffers().contains(buffer.as_raw()));
        assert!(handle_store::samplers().contains(sampler.as_raw()));
    }
}

#[test]
fn test_create_child_rejects_null_output() {
    let t = TestDevice::new();
    unsafe {
        let ci = vk::SemaphoreCreateInfo::default();
        assert_eq!(
            vkCreateSemaphore(t.device, &ci, ptr::null(), ptr::null_mut()),
            vk::Result::ERROR_OUT_OF_HOST_MEMORY
        );
    }
}

#[test]
fn test_destroy_null_and_unknown_handles_is_ignored() {
    let t = TestDevice::new();
    unsafe {
        vkDestroyBuffer(t.device, vk::Buffer::null(), ptr::null());
        vkDestroyImage(t.device, vk::Image::from_raw(0xdead_beef), ptr::null());
        vkDestroyShaderModule(t.device, vk::ShaderModule::null(), ptr::null());
    }
}
