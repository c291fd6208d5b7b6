//! Integration test: DeviceMemory, Buffer and Image stand-ins
//!
//! Checks mapping arithmetic, zero-sized allocations, memory requirement
//! queries and texel sizes.

use ash::vk;

use ctsnull_core::format::{packed_image_data_size, pixel_size};
use ctsnull_core::host_alloc;
use ctsnull_core::object::{Buffer, DeviceMemory, Image, MEMORY_TYPE_BITS};
use ctsnull_core::DriverError;

fn alloc(size: vk::DeviceSize) -> Result<DeviceMemory, DriverError> {
    let ai = vk::MemoryAllocateInfo::default()
        .allocation_size(size)
        .memory_type_index(0);
    DeviceMemory::new(vk::Device::null(), &ai)
}

#[test]
fn test_map_returns_base_plus_offset() {
    let memory = alloc(4096).expect("allocate");
    let base = memory.base_ptr();
    assert!(!base.is_null());

    for offset in [0u64, 1, 256, 4095] {
        let ptr = memory.map(offset, 1, false).expect("map");
        assert_eq!(ptr as usize, base as usize + offset as usize);
    }
}

#[test]
fn test_mapped_memory_is_writable() {
    let memory = alloc(64).expect("allocate");
    let ptr = memory.map(16, 16, true).expect("map") as *mut u8;
    unsafe {
        std::ptr::write_bytes(ptr, 0xAB, 16);
        assert_eq!(*memory.base_ptr().add(16), 0xAB);
        assert_eq!(*memory.base_ptr().add(15), 0);
    }
}

#[test]
fn test_zero_sized_allocation_has_null_base() {
    let memory = alloc(0).expect("allocate");
    assert!(memory.base_ptr().is_null());
    assert!(matches!(
        memory.map(0, vk::WHOLE_SIZE, false),
        Err(DriverError::MemoryMapFailed(_))
    ));
}

#[test]
fn test_unchecked_map_does_not_validate_range() {
    let memory = alloc(16).expect("allocate");
    let ptr = memory.map(32, 16, false).expect("unchecked map");
    assert_eq!(ptr as usize, memory.base_ptr() as usize + 32);
}

#[test]
fn test_checked_map_rejects_out_of_range() {
    let memory = alloc(16).expect("allocate");
    assert!(memory.map(0, vk::WHOLE_SIZE, true).is_ok());
    assert!(memory.map(8, 8, true).is_ok());
    assert!(memory.map(8, 9, true).is_err());
    assert!(memory.map(16, vk::WHOLE_SIZE, true).is_err());
    assert!(memory.map(u64::MAX, 2, true).is_err());
}

#[test]
fn test_allocation_failure_reports_out_of_host_memory() {
    let _fault = host_alloc::fail_after(0);
    assert!(matches!(alloc(128), Err(DriverError::OutOfHostMemory { requested: 128 })));
}

#[test]
fn test_buffer_requirements_use_declared_size() {
    let ci = vk::BufferCreateInfo::default()
        .size(1000)
        .usage(vk::BufferUsageFlags::STORAGE_BUFFER);
    let buffer = Buffer::new(vk::Device::null(), &ci);
    let req = buffer.memory_requirements();

    assert_eq!(req.size, 1000);
    assert_eq!(req.alignment, 1);
    assert_eq!(req.memory_type_bits, MEMORY_TYPE_BITS);
}

#[test]
fn test_image_requirements_rgba8_16x16() {
    let ci = vk::ImageCreateInfo::default()
        .image_type(vk::ImageType::TYPE_2D)
        .format(vk::Format::R8G8B8A8_UNORM)
        .extent(vk::Extent3D { width: 16, height: 16, depth: 1 })
        .samples(vk::SampleCountFlags::TYPE_1);
    let image = Image::new(vk::Device::null(), &ci);
    let req = image.memory_requirements();

    assert_eq!(req.size, 1024);
    assert_eq!(req.alignment, 4);
    assert_eq!(req.memory_type_bits, 1);
}

#[test]
fn test_image_size_scales_with_depth_and_samples() {
    let size = packed_image_data_size(
        vk::Format::R32G32B32A32_SFLOAT,
        vk::Extent3D { width: 8, height: 4, depth: 2 },
        vk::SampleCountFlags::TYPE_4,
    );
    assert_eq!(size, Some(16 * 8 * 4 * 2 * 4));
}

#[test]
fn test_image_size_overflow_reports_zero() {
    let huge = vk::Extent3D { width: 1 << 22, height: 1 << 22, depth: 1 << 22 };
    assert_eq!(
        packed_image_data_size(vk::Format::R64G64B64A64_SFLOAT, huge, vk::SampleCountFlags::TYPE_1),
        None
    );

    let ci = vk::ImageCreateInfo::default()
        .format(vk::Format::R64G64B64A64_SFLOAT)
        .extent(huge)
        .samples(vk::SampleCountFlags::TYPE_64);
    let image = Image::new(vk::Device::null(), &ci);
    assert_eq!(image.memory_requirements().size, 0);
}

#[test]
fn test_pixel_sizes() {
    assert_eq!(pixel_size(vk::Format::R8_UNORM), Some(1));
    assert_eq!(pixel_size(vk::Format::R5G6B5_UNORM_PACK16), Some(2));
    assert_eq!(pixel_size(vk::Format::B8G8R8_SRGB), Some(3));
    assert_eq!(pixel_size(vk::Format::B8G8R8A8_UNORM), Some(4));
    assert_eq!(pixel_size(vk::Format::A2B10G10R10_UINT_PACK32), Some(4));
    assert_eq!(pixel_size(vk::Format::R16G16B16_SFLOAT), Some(6));
    assert_eq!(pixel_size(vk::Format::R64G64B64A64_SFLOAT), Some(32));
    assert_eq!(pixel_size(vk::Format::D32_SFLOAT), Some(4));
    assert_eq!(pixel_size(vk::Format::D32_SFLOAT_S8_UINT), Some(8));
    assert_eq!(pixel_size(vk::Format::BC1_RGB_UNORM_BLOCK), None);
    assert_eq!(pixel_size(vk::Format::UNDEFINED), None);
}

#[test]
fn test_compressed_image_reports_zero_size() {
    let ci = vk::ImageCreateInfo::default()
        .format(vk::Format::BC3_UNORM_BLOCK)
        .extent(vk::Extent3D { width: 4, height: 4, depth: 1 })
        .samples(vk::SampleCountFlags::TYPE_1);
    let image = Image::new(vk::Device::null(), &ci);
    assert_eq!(image.memory_requirements().size, 0);
}
