//! Host allocations for stand-in objects and memory blocks.
//!
//! Every allocation goes through [`charge`], which consults a thread-local
//! fault injector. Tests arm it with [`fail_after`] to make the n-th
//! allocation on the current thread report out-of-host-memory.

use std::alloc::Layout;
use std::cell::Cell;
use std::ptr::NonNull;

use crate::error::DriverError;

/// Alignment of raw memory blocks handed out by vkMapMemory.
pub const HOST_BLOCK_ALIGN: usize = 64;

thread_local! {
    static REMAINING: Cell<Option<u32>> = const { Cell::new(None) };
}

/// Restores the previous injector state when dropped.
#[must_use = "the fault is disarmed as soon as the guard is dropped"]
pub struct FaultGuard {
    previous: Option<u32>,
}

impl Drop for FaultGuard {
    fn drop(&mut self) {
        REMAINING.with(|r| r.set(self.previous));
    }
}

/// Let `successes` more allocations succeed on this thread, then fail every
/// following one until the guard is dropped.
pub fn fail_after(successes: u32) -> FaultGuard {
    let previous = REMAINING.with(|r| r.replace(Some(successes)));
    FaultGuard { previous }
}

fn charge(requested: u64) -> Result<(), DriverError> {
    REMAINING.with(|r| match r.get() {
        None => Ok(()),
        Some(0) => Err(DriverError::out_of_host_memory(requested)),
        Some(n) => {
            r.set(Some(n - 1));
            Ok(())
        }
    })
}

/// Allocate a stand-in object on the heap.
pub fn try_new<T>(value: T) -> Result<Box<T>, DriverError> {
    charge(std::mem::size_of::<T>() as u64)?;
    Ok(Box::new(value))
}

/// Reserve room for one more element, reporting exhaustion instead of aborting.
pub fn try_reserve_one<T>(vec: &mut Vec<T>) -> Result<(), DriverError> {
    let requested = std::mem::size_of::<T>() as u64;
    charge(requested)?;
    vec.try_reserve(1)
        .map_err(|_| DriverError::out_of_host_memory(requested))
}

/// A zero-initialised block of host memory backing a DeviceMemory object.
pub struct HostBlock {
    ptr: NonNull<u8>,
    layout: Layout,
}

// The block is plain bytes owned by exactly one DeviceMemory.
unsafe impl Send for HostBlock {}
unsafe impl Sync for HostBlock {}

impl HostBlock {
    /// Allocate `size` bytes. `size` must be non-zero.
    pub fn alloc(size: u64) -> Result<Self, DriverError> {
        charge(size)?;
        let len = usize::try_from(size).map_err(|_| DriverError::out_of_host_memory(size))?;
        let layout = Layout::from_size_align(len.max(1), HOST_BLOCK_ALIGN)
            .map_err(|_| DriverError::out_of_host_memory(size))?;
        // SAFETY: layout has non-zero size.
        let raw = unsafe { std::alloc::alloc_zeroed(layout) };
        let ptr = NonNull::new(raw).ok_or(DriverError::out_of_host_memory(size))?;
        Ok(Self { ptr, layout })
    }

    pub fn as_ptr(&self) -> *mut u8 {
        self.ptr.as_ptr()
    }

    pub fn len(&self) -> usize {
        self.layout.size()
    }

    pub fn is_empty(&self) -> bool {
        self.layout.size() == 0
    }
}

impl Drop for HostBlock {
    fn drop(&mut self) {
        // SAFETY: ptr was returned by alloc_zeroed with this layout.
        unsafe { std::alloc::dealloc(self.ptr.as_ptr(), self.layout) };
    }
}
