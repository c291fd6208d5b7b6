//! Texel sizes for the uncompressed core formats.

use ash::vk;

// Inclusive ranges of consecutive VkFormat values sharing one texel size.
const TEXEL_SIZES: &[(vk::Format, vk::Format, u32)] = &[
    (vk::Format::R4G4_UNORM_PACK8, vk::Format::R4G4_UNORM_PACK8, 1),
    (vk::Format::R4G4B4A4_UNORM_PACK16, vk::Format::A1R5G5B5_UNORM_PACK16, 2),
    (vk::Format::R8_UNORM, vk::Format::R8_SRGB, 1),
    (vk::Format::R8G8_UNORM, vk::Format::R8G8_SRGB, 2),
    (vk::Format::R8G8B8_UNORM, vk::Format::B8G8R8_SRGB, 3),
    (vk::Format::R8G8B8A8_UNORM, vk::Format::A2B10G10R10_SINT_PACK32, 4),
    (vk::Format::R16_UNORM, vk::Format::R16_SFLOAT, 2),
    (vk::Format::R16G16_UNORM, vk::Format::R16G16_SFLOAT, 4),
    (vk::Format::R16G16B16_UNORM, vk::Format::R16G16B16_SFLOAT, 6),
    (vk::Format::R16G16B16A16_UNORM, vk::Format::R16G16B16A16_SFLOAT, 8),
    (vk::Format::R32_UINT, vk::Format::R32_SFLOAT, 4),
    (vk::Format::R32G32_UINT, vk::Format::R32G32_SFLOAT, 8),
    (vk::Format::R32G32B32_UINT, vk::Format::R32G32B32_SFLOAT, 12),
    (vk::Format::R32G32B32A32_UINT, vk::Format::R32G32B32A32_SFLOAT, 16),
    (vk::Format::R64_UINT, vk::Format::R64_SFLOAT, 8),
    (vk::Format::R64G64_UINT, vk::Format::R64G64_SFLOAT, 16),
    (vk::Format::R64G64B64_UINT, vk::Format::R64G64B64_SFLOAT, 24),
    (vk::Format::R64G64B64A64_UINT, vk::Format::R64G64B64A64_SFLOAT, 32),
    (vk::Format::B10G11R11_UFLOAT_PACK32, vk::Format::E5B9G9R9_UFLOAT_PACK32, 4),
    (vk::Format::D16_UNORM, vk::Format::D16_UNORM, 2),
    (vk::Format::X8_D24_UNORM_PACK32, vk::Format::D32_SFLOAT, 4),
    (vk::Format::S8_UINT, vk::Format::S8_UINT, 1),
    (vk::Format::D24_UNORM_S8_UINT, vk::Format::D24_UNORM_S8_UINT, 4),
    (vk::Format::D32_SFLOAT_S8_UINT, vk::Format::D32_SFLOAT_S8_UINT, 8),
];

/// Size in bytes of one texel of `format`, or `None` for block-compressed,
/// multi-planar and unknown formats.
pub fn pixel_size(format: vk::Format) -> Option<u32> {
    let raw = format.as_raw();
    TEXEL_SIZES
        .iter()
        .find(|(first, last, _)| (first.as_raw()..=last.as_raw()).contains(&raw))
        .map(|&(_, _, size)| size)
}

/// Packed (untiled) size of an image: texel size × width × height × depth × samples.
/// `None` when the format has no texel size or the product overflows.
pub fn packed_image_data_size(
    format: vk::Format,
    extent: vk::Extent3D,
    samples: vk::SampleCountFlags,
) -> Option<vk::DeviceSize> {
    let texel = pixel_size(format)? as vk::DeviceSize;
    [extent.width, extent.height, extent.depth, samples.as_raw()]
        .into_iter()
        .try_fold(texel, |acc, dim| acc.checked_mul(dim as vk::DeviceSize))
}
