//! Integration test: descriptor pool entry points
//!
//! vkCreateDescriptorPool / vkAllocateDescriptorSets / vkFreeDescriptorSets /
//! vkResetDescriptorPool through the exported ABI, including batch rollback
//! under forced host-allocation failure.
//!
//! Run with: cargo test -p ctsnull-vk-icd --test descriptor_entry_points_test

use std::ptr;

use ash::vk;
use ash::vk::Handle;

use ctsnull_core::host_alloc;
use ctsnull_vk_icd::descriptor::*;
use ctsnull_vk_icd::device::*;
use ctsnull_vk_icd::handle_store;
use ctsnull_vk_icd::instance::*;

struct Fixture {
    instance: vk::Instance,
    device: vk::Device,
    layout: vk::DescriptorSetLayout,
}

impl Fixture {
    fn new() -> Self {
        unsafe {
            let mut instance = vk::Instance::null();
            vkCreateInstance(&vk::InstanceCreateInfo::default(), ptr::null(), &mut instance);
            let mut count = 1;
            let mut physical_device = vk::PhysicalDevice::null();
            vkEnumeratePhysicalDevices(instance, &mut count, &mut physical_device);
            let mut device = vk::Device::null();
            vkCreateDevice(
                physical_device,
                &vk::DeviceCreateInfo::default(),
                ptr::null(),
                &mut device,
            );

            let mut layout = vk::DescriptorSetLayout::null();
            assert_eq!(
                vkCreateDescriptorSetLayout(
                    device,
                    &vk::DescriptorSetLayoutCreateInfo::default(),
                    ptr::null(),
                    &mut layout,
                ),
                vk::Result::SUCCESS
            );

            Self {
                instance,
                device,
                layout,
            }
        }
    }

    fn pool(&self, flags: vk::DescriptorPoolCreateFlags) -> vk::DescriptorPool {
        let ci = vk::DescriptorPoolCreateInfo::default().flags(flags).max_sets(64);
        let mut pool = vk::DescriptorPool::null();
        let result = unsafe { vkCreateDescriptorPool(self.device, &ci, ptr::null(), &mut pool) };
        assert_eq!(result, vk::Result::SUCCESS);
        pool
    }

    fn allocate(&self, pool: vk::DescriptorPool, n: usize) -> (vk::Result, Vec<vk::DescriptorSet>) {
        let layouts = vec![self.layout; n];
        let ai = vk::DescriptorSetAllocateInfo::default()
            .descriptor_pool(pool)
            .set_layouts(&layouts);
        let mut sets = vec![vk::DescriptorSet::from_raw(0x1); n];
        let result = unsafe { vkAllocateDescriptorSets(self.device, &ai, sets.as_mut_ptr()) };
        (result, sets)
    }
}

impl Drop for Fixture {
    fn drop(&mut self) {
        unsafe {
            vkDestroyDescriptorSetLayout(self.device, self.layout, ptr::null());
            vkDestroyDevice(self.device, ptr::null());
            vkDestroyInstance(self.instance, ptr::null());
        }
    }
}

fn owned(pool: vk::DescriptorPool) -> usize {
    handle_store::desc_pools()
        .get(pool.as_raw(), |p| p.len())
        .expect("live pool")
}

#[test]
fn test_allocate_then_reset() {
    let f = Fixture::new();
    let pool = f.pool(vk::DescriptorPoolCreateFlags::empty());

    let (result, sets) = f.allocate(pool, 6);
    assert_eq!(result, vk::Result::SUCCESS);
    assert!(sets.iter().all(|s| !s.is_null()));
    assert_eq!(owned(pool), 6);

    let result = unsafe { vkResetDescriptorPool(f.device, pool, vk::DescriptorPoolResetFlags::empty()) };
    assert_eq!(result, vk::Result::SUCCESS);
    assert_eq!(owned(pool), 0);
    let still_owned = handle_store::desc_pools()
        .get(pool.as_raw(), |p| sets.iter().any(|s| p.contains(*s)))
        .expect("live pool");
    assert!(!still_owned);

    unsafe { vkDestroyDescriptorPool(f.device, pool, ptr::null()) };
    assert!(!handle_store::desc_pools().contains(pool.as_raw()));
}

#[test]
fn test_batch_allocation_failure_leaves_pool_unchanged() {
    let f = Fixture::new();
    let pool = f.pool(vk::DescriptorPoolCreateFlags::empty());
    let (_, existing) = f.allocate(pool, 2);
    assert_eq!(owned(pool), 2);

    // Each set costs two host allocations; the third set fails half-way.
    let (result, sets) = {
        let _fault = host_alloc::fail_after(5);
        f.allocate(pool, 4)
    };

    assert_eq!(result, vk::Result::ERROR_OUT_OF_HOST_MEMORY);
    assert!(sets.iter().all(|s| s.is_null()));
    assert_eq!(owned(pool), 2);
    let kept = handle_store::desc_pools()
        .get(pool.as_raw(), |p| existing.iter().all(|s| p.contains(*s)))
        .expect("live pool");
    assert!(kept);
}

#[test]
fn test_free_requires_flag() {
    let f = Fixture::new();
    let pool = f.pool(vk::DescriptorPoolCreateFlags::empty());
    let (_, sets) = f.allocate(pool, 1);

    let result = unsafe { vkFreeDescriptorSets(f.device, pool, 1, sets.as_ptr()) };
    assert_eq!(result, vk::Result::ERROR_UNKNOWN);
    assert_eq!(owned(pool), 1);
}

#[test]
fn test_free_with_flag_removes_exactly_those_sets() {
    let f = Fixture::new();
    let pool = f.pool(vk::DescriptorPoolCreateFlags::FREE_DESCRIPTOR_SET);
    let (_, sets) = f.allocate(pool, 4);

    let result = unsafe { vkFreeDescriptorSets(f.device, pool, 2, sets[1..].as_ptr()) };
    assert_eq!(result, vk::Result::SUCCESS);
    assert_eq!(owned(pool), 2);

    let (first, second, third, fourth) = handle_store::desc_pools()
        .get(pool.as_raw(), |p| {
            (
                p.contains(sets[0]),
                p.contains(sets[1]),
                p.contains(sets[2]),
                p.contains(sets[3]),
            )
        })
        .expect("live pool");
    assert!(first && !second && !third && fourth);
}

#[test]
fn test_free_skips_null_entries() {
    let f = Fixture::new();
    let pool = f.pool(vk::DescriptorPoolCreateFlags::FREE_DESCRIPTOR_SET);
    let (_, sets) = f.allocate(pool, 1);

    let batch = [vk::DescriptorSet::null(), sets[0], vk::DescriptorSet::null()];
    let result = unsafe { vkFreeDescriptorSets(f.device, pool, 3, batch.as_ptr()) };
    assert_eq!(result, vk::Result::SUCCESS);
    assert_eq!(owned(pool), 0);
}

#[test]
fn test_free_set_from_other_pool_is_rejected() {
    let f = Fixture::new();
    let pool_a = f.pool(vk::DescriptorPoolCreateFlags::FREE_DESCRIPTOR_SET);
    let pool_b = f.pool(vk::DescriptorPoolCreateFlags::FREE_DESCRIPTOR_SET);
    let (_, sets_a) = f.allocate(pool_a, 1);
    f.allocate(pool_b, 1);

    let result = unsafe { vkFreeDescriptorSets(f.device, pool_b, 1, sets_a.as_ptr()) };
    assert_eq!(result, vk::Result::ERROR_UNKNOWN);
    assert_eq!(owned(pool_a), 1);
    assert_eq!(owned(pool_b), 1);
}

#[test]
fn test_allocate_from_unknown_pool() {
    let f = Fixture::new();
    let (result, sets) = f.allocate(vk::DescriptorPool::from_raw(0xdead), 2);
    assert_eq!(result, vk::Result::ERROR_UNKNOWN);
    assert!(sets.iter().all(|s| s.is_null()));
}

#[test]
fn test_allocate_with_null_layouts_fails() {
    let f = Fixture::new();
    let pool = f.pool(vk::DescriptorPoolCreateFlags::empty());

    let mut ai = vk::DescriptorSetAllocateInfo::default().descriptor_pool(pool);
    ai.descriptor_set_count = 3;
    let mut sets = vec![vk::DescriptorSet::from_raw(0xdead); 3];
    let result = unsafe { vkAllocateDescriptorSets(f.device, &ai, sets.as_mut_ptr()) };

    assert_eq!(result, vk::Result::ERROR_OUT_OF_HOST_MEMORY);
    assert!(sets.iter().all(|s| s.is_null()));
    assert_eq!(owned(pool), 0);
}
