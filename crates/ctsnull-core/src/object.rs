//! Non-dispatchable stand-in objects.
//!
//! Each stand-in is built from its create-info record and keeps only the
//! state later queries need. All of them remember the device that created
//! them so leaks can be reported when the device goes away.

use std::ffi::c_void;

use ash::vk;

use crate::error::DriverError;
use crate::format;
use crate::host_alloc::HostBlock;

/// Alignment reported for image memory requirements.
pub const IMAGE_ALIGNMENT: vk::DeviceSize = 4;
/// Alignment reported for buffer memory requirements.
pub const BUFFER_ALIGNMENT: vk::DeviceSize = 1;
/// The driver exposes exactly one memory type (index 0).
pub const MEMORY_TYPE_BITS: u32 = 1;

/// Objects created by, and destroyed with, a logical device.
pub trait DeviceChild {
    fn device(&self) -> vk::Device;
}

impl<T: DeviceChild + ?Sized> DeviceChild for Box<T> {
    fn device(&self) -> vk::Device {
        (**self).device()
    }
}

macro_rules! plain_stand_in {
    ($($name:ident => $info:ident),* $(,)?) => {
        $(
            #[derive(Debug)]
            pub struct $name {
                device: vk::Device,
            }

            impl $name {
                pub fn new(device: vk::Device, _create_info: &vk::$info<'_>) -> Self {
                    Self { device }
                }
            }

            impl DeviceChild for $name {
                fn device(&self) -> vk::Device {
                    self.device
                }
            }
        )*
    };
}

plain_stand_in! {
    Semaphore => SemaphoreCreateInfo,
    QueryPool => QueryPoolCreateInfo,
    BufferView => BufferViewCreateInfo,
    ImageView => ImageViewCreateInfo,
    ShaderModule => ShaderModuleCreateInfo,
    PipelineCache => PipelineCacheCreateInfo,
    PipelineLayout => PipelineLayoutCreateInfo,
    RenderPass => RenderPassCreateInfo,
    DescriptorSetLayout => DescriptorSetLayoutCreateInfo,
    Sampler => SamplerCreateInfo,
    Framebuffer => FramebufferCreateInfo,
    CommandPool => CommandPoolCreateInfo,
}

// ── Sync ────────────────────────────────────────────────────

#[derive(Debug)]
pub struct Fence {
    device: vk::Device,
    signaled: bool,
}

impl Fence {
    pub fn new(device: vk::Device, create_info: &vk::FenceCreateInfo<'_>) -> Self {
        Self {
            device,
            signaled: create_info.flags.contains(vk::FenceCreateFlags::SIGNALED),
        }
    }

    pub fn is_signaled(&self) -> bool {
        self.signaled
    }

    pub fn signal(&mut self) {
        self.signaled = true;
    }

    pub fn reset(&mut self) {
        self.signaled = false;
    }
}

impl DeviceChild for Fence {
    fn device(&self) -> vk::Device {
        self.device
    }
}

#[derive(Debug)]
pub struct Event {
    device: vk::Device,
    set: bool,
}

impl Event {
    pub fn new(device: vk::Device, _create_info: &vk::EventCreateInfo<'_>) -> Self {
        Self { device, set: false }
    }

    pub fn is_set(&self) -> bool {
        self.set
    }

    pub fn set(&mut self, set: bool) {
        self.set = set;
    }
}

impl DeviceChild for Event {
    fn device(&self) -> vk::Device {
        self.device
    }
}

// ── Pipeline ────────────────────────────────────────────────

#[derive(Debug)]
pub struct Pipeline {
    device: vk::Device,
    bind_point: vk::PipelineBindPoint,
}

impl Pipeline {
    pub fn graphics(device: vk::Device, _create_info: &vk::GraphicsPipelineCreateInfo<'_>) -> Self {
        Self {
            device,
            bind_point: vk::PipelineBindPoint::GRAPHICS,
        }
    }

    pub fn compute(device: vk::Device, _create_info: &vk::ComputePipelineCreateInfo<'_>) -> Self {
        Self {
            device,
            bind_point: vk::PipelineBindPoint::COMPUTE,
        }
    }

    pub fn bind_point(&self) -> vk::PipelineBindPoint {
        self.bind_point
    }
}

impl DeviceChild for Pipeline {
    fn device(&self) -> vk::Device {
        self.device
    }
}

// ── Buffer / Image ──────────────────────────────────────────

#[derive(Debug)]
pub struct Buffer {
    device: vk::Device,
    size: vk::DeviceSize,
}

impl Buffer {
    pub fn new(device: vk::Device, create_info: &vk::BufferCreateInfo<'_>) -> Self {
        Self {
            device,
            size: create_info.size,
        }
    }

    pub fn size(&self) -> vk::DeviceSize {
        self.size
    }

    pub fn memory_requirements(&self) -> vk::MemoryRequirements {
        vk::MemoryRequirements {
            size: self.size,
            alignment: BUFFER_ALIGNMENT,
            memory_type_bits: MEMORY_TYPE_BITS,
        }
    }
}

impl DeviceChild for Buffer {
    fn device(&self) -> vk::Device {
        self.device
    }
}

#[derive(Debug)]
pub struct Image {
    device: vk::Device,
    image_type: vk::ImageType,
    format: vk::Format,
    extent: vk::Extent3D,
    samples: vk::SampleCountFlags,
}

impl Image {
    pub fn new(device: vk::Device, create_info: &vk::ImageCreateInfo<'_>) -> Self {
        Self {
            device,
            image_type: create_info.image_type,
            format: create_info.format,
            extent: create_info.extent,
            samples: create_info.samples,
        }
    }

    pub fn image_type(&self) -> vk::ImageType {
        self.image_type
    }

    pub fn format(&self) -> vk::Format {
        self.format
    }

    pub fn extent(&self) -> vk::Extent3D {
        self.extent
    }

    pub fn samples(&self) -> vk::SampleCountFlags {
        self.samples
    }

    /// Packed size estimate; no tiling is modelled. Formats without a known
    /// texel size, and extents whose size overflows, report 0.
    pub fn memory_requirements(&self) -> vk::MemoryRequirements {
        let size = match format::packed_image_data_size(self.format, self.extent, self.samples) {
            Some(size) => size,
            None => {
                tracing::warn!(
                    "cannot size {:?} image of {:?}, reporting 0 bytes",
                    self.format,
                    self.extent
                );
                0
            }
        };
        vk::MemoryRequirements {
            size,
            alignment: IMAGE_ALIGNMENT,
            memory_type_bits: MEMORY_TYPE_BITS,
        }
    }
}

impl DeviceChild for Image {
    fn device(&self) -> vk::Device {
        self.device
    }
}

// ── DeviceMemory ────────────────────────────────────────────

pub struct DeviceMemory {
    device: vk::Device,
    size: vk::DeviceSize,
    block: Option<HostBlock>,
}

impl DeviceMemory {
    /// A zero-sized allocation has no backing block.
    pub fn new(device: vk::Device, allocate_info: &vk::MemoryAllocateInfo<'_>) -> Result<Self, DriverError> {
        let size = allocate_info.allocation_size;
        let block = if size > 0 {
            Some(HostBlock::alloc(size)?)
        } else {
            None
        };
        Ok(Self { device, size, block })
    }

    pub fn size(&self) -> vk::DeviceSize {
        self.size
    }

    /// Base address of the backing block, null for zero-sized allocations.
    pub fn base_ptr(&self) -> *mut u8 {
        match &self.block {
            Some(block) => block.as_ptr(),
            None => std::ptr::null_mut(),
        }
    }

    /// Address of byte `offset` inside the block.
    ///
    /// With `bounds_check` off the range is not validated against the
    /// allocation size; the caller guarantees `offset + size` stays inside it.
    pub fn map(
        &self,
        offset: vk::DeviceSize,
        size: vk::DeviceSize,
        bounds_check: bool,
    ) -> Result<*mut c_void, DriverError> {
        let block = self
            .block
            .as_ref()
            .ok_or_else(|| DriverError::MemoryMapFailed("allocation has no backing block".into()))?;

        if bounds_check {
            let end = if size == vk::WHOLE_SIZE {
                Some(self.size)
            } else {
                offset.checked_add(size)
            };
            match end {
                Some(end) if offset < self.size && end <= self.size => {}
                _ => {
                    return Err(DriverError::MemoryMapFailed(format!(
                        "range offset={} size={} exceeds allocation of {} bytes",
                        offset, size, self.size
                    )))
                }
            }
        }

        // An unchecked offset may point past the block.
        Ok(block.as_ptr().wrapping_add(offset as usize) as *mut c_void)
    }
}

impl DeviceChild for DeviceMemory {
    fn device(&self) -> vk::Device {
        self.device
    }
}

impl std::fmt::Debug for DeviceMemory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DeviceMemory")
            .field("size", &self.size)
            .field("base", &self.base_ptr())
            .finish()
    }
}
