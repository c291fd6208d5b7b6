//! Name → function pointer lookup for vkGet*ProcAddr.

use ash::vk;

use crate::command;

/// Which proc-addr query is being answered.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Scope {
    /// vkGetInstanceProcAddr: every entry point.
    Instance,
    /// vkGetDeviceProcAddr: entry points dispatched on a device, queue or
    /// command buffer.
    Device,
}

macro_rules! entry_point_table {
    ($table:ident, $lookup:ident { $($module:ident: [$($func:ident),* $(,)?]),* $(,)? }) => {
        pub const $table: &[&str] = &[$($(stringify!($func)),*),*];

        fn $lookup(name: &str) -> vk::PFN_vkVoidFunction {
            $($(
                if name == stringify!($func) {
                    return Some(unsafe {
                        std::mem::transmute::<*const (), unsafe extern "system" fn()>(
                            crate::$module::$func as *const (),
                        )
                    });
                }
            )*)*
            None
        }
    };
}

entry_point_table!(INSTANCE_ENTRY_POINTS, lookup_instance {
    instance: [
        vkCreateInstance,
        vkDestroyInstance,
        vkEnumeratePhysicalDevices,
        vkEnumerateInstanceVersion,
        vkEnumerateInstanceExtensionProperties,
        vkEnumerateInstanceLayerProperties,
        vkEnumerateDeviceExtensionProperties,
        vkEnumerateDeviceLayerProperties,
        vkGetInstanceProcAddr,
    ],
    physical_device: [
        vkGetPhysicalDeviceProperties,
        vkGetPhysicalDeviceProperties2,
        vkGetPhysicalDeviceProperties2KHR,
        vkGetPhysicalDeviceFeatures,
        vkGetPhysicalDeviceFeatures2,
        vkGetPhysicalDeviceFeatures2KHR,
        vkGetPhysicalDeviceQueueFamilyProperties,
        vkGetPhysicalDeviceQueueFamilyProperties2,
        vkGetPhysicalDeviceQueueFamilyProperties2KHR,
        vkGetPhysicalDeviceMemoryProperties,
        vkGetPhysicalDeviceMemoryProperties2,
        vkGetPhysicalDeviceMemoryProperties2KHR,
        vkGetPhysicalDeviceFormatProperties,
        vkGetPhysicalDeviceFormatProperties2,
        vkGetPhysicalDeviceFormatProperties2KHR,
        vkGetPhysicalDeviceImageFormatProperties,
        vkGetPhysicalDeviceImageFormatProperties2,
        vkGetPhysicalDeviceImageFormatProperties2KHR,
        vkGetPhysicalDeviceSparseImageFormatProperties,
        vkGetPhysicalDeviceSparseImageFormatProperties2,
        vkGetPhysicalDeviceSparseImageFormatProperties2KHR,
    ],
    device: [vkCreateDevice],
});

entry_point_table!(DEVICE_ENTRY_POINTS, lookup_device {
    device: [
        vkDestroyDevice,
        vkGetDeviceQueue,
        vkDeviceWaitIdle,
        vkGetDeviceProcAddr,
    ],
    memory: [
        vkAllocateMemory,
        vkFreeMemory,
        vkMapMemory,
        vkUnmapMemory,
        vkFlushMappedMemoryRanges,
        vkInvalidateMappedMemoryRanges,
        vkGetDeviceMemoryCommitment,
        vkCreateBuffer,
        vkDestroyBuffer,
        vkGetBufferMemoryRequirements,
        vkBindBufferMemory,
        vkCreateBufferView,
        vkDestroyBufferView,
    ],
    image: [
        vkCreateImage,
        vkDestroyImage,
        vkGetImageMemoryRequirements,
        vkBindImageMemory,
        vkGetImageSubresourceLayout,
        vkGetImageSparseMemoryRequirements,
        vkCreateImageView,
        vkDestroyImageView,
        vkCreateSampler,
        vkDestroySampler,
    ],
    descriptor: [
        vkCreateDescriptorSetLayout,
        vkDestroyDescriptorSetLayout,
        vkCreateDescriptorPool,
        vkDestroyDescriptorPool,
        vkResetDescriptorPool,
        vkAllocateDescriptorSets,
        vkFreeDescriptorSets,
        vkUpdateDescriptorSets,
    ],
    pipeline: [
        vkCreateShaderModule,
        vkDestroyShaderModule,
        vkCreatePipelineCache,
        vkDestroyPipelineCache,
        vkGetPipelineCacheData,
        vkMergePipelineCaches,
        vkCreatePipelineLayout,
        vkDestroyPipelineLayout,
        vkCreateGraphicsPipelines,
        vkCreateComputePipelines,
        vkDestroyPipeline,
    ],
    renderpass: [
        vkCreateRenderPass,
        vkDestroyRenderPass,
        vkGetRenderAreaGranularity,
        vkCreateFramebuffer,
        vkDestroyFramebuffer,
    ],
    command: [
        vkCreateCommandPool,
        vkDestroyCommandPool,
        vkResetCommandPool,
        vkAllocateCommandBuffers,
        vkFreeCommandBuffers,
        vkBeginCommandBuffer,
        vkEndCommandBuffer,
        vkResetCommandBuffer,
    ],
    sync: [
        vkCreateFence,
        vkDestroyFence,
        vkResetFences,
        vkGetFenceStatus,
        vkWaitForFences,
        vkCreateSemaphore,
        vkDestroySemaphore,
        vkCreateEvent,
        vkDestroyEvent,
        vkGetEventStatus,
        vkSetEvent,
        vkResetEvent,
        vkCreateQueryPool,
        vkDestroyQueryPool,
        vkGetQueryPoolResults,
        vkQueueSubmit,
        vkQueueWaitIdle,
        vkQueueBindSparse,
    ],
});

/// ICD interface functions, resolvable through vk_icdGetInstanceProcAddr.
pub const ICD_ENTRY_POINTS: &[&str] = &[
    "vk_icdNegotiateLoaderICDInterfaceVersion",
    "vk_icdGetInstanceProcAddr",
    "vk_icdGetPhysicalDeviceProcAddr",
];

fn lookup_icd(name: &str) -> vk::PFN_vkVoidFunction {
    let func = match name {
        "vk_icdNegotiateLoaderICDInterfaceVersion" => {
            crate::vk_icdNegotiateLoaderICDInterfaceVersion as *const ()
        }
        "vk_icdGetInstanceProcAddr" => crate::vk_icdGetInstanceProcAddr as *const (),
        "vk_icdGetPhysicalDeviceProcAddr" => crate::vk_icdGetPhysicalDeviceProcAddr as *const (),
        _ => return None,
    };
    Some(unsafe { std::mem::transmute::<*const (), unsafe extern "system" fn()>(func) })
}

/// Resolve `name` for the given scope; `None` for names this driver does
/// not export or that the scope does not cover.
pub fn lookup(name: &str, scope: Scope) -> vk::PFN_vkVoidFunction {
    let device_level = lookup_device(name).or_else(|| command::lookup_recording(name));
    match scope {
        Scope::Device => device_level,
        Scope::Instance => lookup_icd(name)
            .or_else(|| lookup_instance(name))
            .or(device_level),
    }
}

/// Every name [`lookup`] resolves at instance scope.
pub fn all_entry_points() -> impl Iterator<Item = &'static str> {
    ICD_ENTRY_POINTS
        .iter()
        .chain(INSTANCE_ENTRY_POINTS)
        .chain(DEVICE_ENTRY_POINTS)
        .chain(command::RECORDING_ENTRY_POINTS)
        .copied()
}
