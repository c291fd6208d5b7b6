//! Dispatchable handle management for the null driver.
//!
//! The Vulkan loader requires that dispatchable handles (VkInstance,
//! VkPhysicalDevice, VkDevice, VkQueue, VkCommandBuffer) point at memory
//! whose first `sizeof(void*)` bytes it can overwrite with its dispatch
//! table. Everything else about the object lives in a registry keyed by
//! `local_id`.

use ash::vk::Handle;

use ctsnull_core::host_alloc;
use ctsnull_core::DriverError;

/// The ICD loader magic value. The loader expects this in new dispatchable handles.
pub const ICD_LOADER_MAGIC: usize = 0x01CDC0DE;

#[repr(C)]
pub struct DispatchableHandle {
    /// The loader will overwrite this with its dispatch table pointer.
    pub loader_data: usize,
    /// Registry key of the object behind this handle.
    pub local_id: u64,
}

impl DispatchableHandle {
    /// Allocate a new dispatchable handle on the heap and return it as `H`.
    pub fn create<H: Handle>(local_id: u64) -> Result<H, DriverError> {
        let boxed = host_alloc::try_new(Self {
            loader_data: ICD_LOADER_MAGIC,
            local_id,
        })?;
        Ok(H::from_raw(Box::into_raw(boxed) as u64))
    }

    /// Get the local_id behind a dispatchable handle, `None` for VK_NULL_HANDLE.
    ///
    /// # Safety
    /// A non-null handle must have been created by [`DispatchableHandle::create`]
    /// and not yet destroyed.
    pub unsafe fn get_id<H: Handle>(handle: H) -> Option<u64> {
        let ptr = handle.as_raw() as *const Self;
        if ptr.is_null() {
            return None;
        }
        Some(unsafe { (*ptr).local_id })
    }

    /// Free a dispatchable handle. Null handles are ignored.
    ///
    /// # Safety
    /// The handle must have been created by [`DispatchableHandle::create`]
    /// and must not be used afterwards.
    pub unsafe fn destroy<H: Handle>(handle: H) {
        let ptr = handle.as_raw() as *mut Self;
        if !ptr.is_null() {
            drop(unsafe { Box::from_raw(ptr) });
        }
    }
}
