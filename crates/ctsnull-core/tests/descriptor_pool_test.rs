//! Integration test: DescriptorPool
//!
//! Exercises allocation, individual free, reset and batch atomicity of the
//! descriptor pool model, including forced host-allocation failures.
//!
//! Run with: cargo test -p ctsnull-core --test descriptor_pool_test

use ash::vk;
use ash::vk::Handle;

use ctsnull_core::host_alloc;
use ctsnull_core::registry;
use ctsnull_core::{DescriptorPool, DriverError, Violation};

fn make_pool(flags: vk::DescriptorPoolCreateFlags) -> DescriptorPool {
    let ci = vk::DescriptorPoolCreateInfo::default().flags(flags).max_sets(16);
    DescriptorPool::new(registry::alloc_handle(), vk::Device::null(), &ci)
}

fn layouts(n: u64) -> Vec<vk::DescriptorSetLayout> {
    (1..=n).map(vk::DescriptorSetLayout::from_raw).collect()
}

#[test]
fn test_allocate_then_reset_empties_pool() {
    let mut pool = make_pool(vk::DescriptorPoolCreateFlags::empty());

    let mut sets = Vec::new();
    for layout in layouts(5) {
        sets.push(pool.allocate(layout).expect("allocate"));
    }
    assert_eq!(pool.len(), 5);
    assert!(sets.iter().all(|s| pool.contains(*s)));

    assert_eq!(pool.reset(), 5);
    assert!(pool.is_empty());
    assert!(sets.iter().all(|s| !pool.contains(*s)));
}

#[test]
fn test_allocated_handles_are_distinct_and_non_null() {
    let mut pool = make_pool(vk::DescriptorPoolCreateFlags::empty());
    let sets = pool.allocate_batch(&layouts(8)).expect("batch");

    let mut raw: Vec<u64> = sets.iter().map(|s| s.as_raw()).collect();
    raw.sort_unstable();
    raw.dedup();
    assert_eq!(raw.len(), 8);
    assert!(raw.iter().all(|&r| r != 0));
}

#[test]
fn test_set_remembers_pool_and_layout() {
    let mut pool = make_pool(vk::DescriptorPoolCreateFlags::empty());
    let layout = vk::DescriptorSetLayout::from_raw(0x77);
    let set = pool.allocate(layout).expect("allocate");

    let stand_in = pool.get(set).expect("owned set");
    assert_eq!(stand_in.layout(), layout);
    assert_eq!(stand_in.pool(), pool.handle());
}

#[test]
fn test_batch_rolls_back_on_failure() {
    let mut pool = make_pool(vk::DescriptorPoolCreateFlags::FREE_DESCRIPTOR_SET);
    let existing = pool.allocate(vk::DescriptorSetLayout::from_raw(9)).expect("allocate");
    assert_eq!(pool.len(), 1);

    let result = {
        // Enough budget for a couple of sets, not for all six.
        let _fault = host_alloc::fail_after(3);
        pool.allocate_batch(&layouts(6))
    };

    assert!(matches!(result, Err(DriverError::OutOfHostMemory { .. })));
    assert_eq!(pool.len(), 1, "partially allocated sets must be rolled back");
    assert!(pool.contains(existing));

    // Allocations work again once the fault is disarmed.
    let sets = pool.allocate_batch(&layouts(6)).expect("batch after fault");
    assert_eq!(sets.len(), 6);
    assert_eq!(pool.len(), 7);
}

#[test]
fn test_batch_failing_on_first_set_leaves_empty_pool() {
    let mut pool = make_pool(vk::DescriptorPoolCreateFlags::empty());
    let _fault = host_alloc::fail_after(0);

    let result = pool.allocate_batch(&layouts(4));
    assert!(matches!(result, Err(DriverError::OutOfHostMemory { .. })));
    assert!(pool.is_empty());
}

#[test]
fn test_free_without_flag_is_rejected() {
    let mut pool = make_pool(vk::DescriptorPoolCreateFlags::empty());
    let set = pool.allocate(vk::DescriptorSetLayout::from_raw(1)).expect("allocate");

    match pool.free(set) {
        Err(DriverError::ContractViolation(Violation::FreeNotPermitted { pool: p })) => {
            assert_eq!(p, pool.handle().as_raw());
        }
        other => panic!("expected FreeNotPermitted, got {:?}", other),
    }
    assert!(pool.contains(set), "rejected free must not release the set");
}

#[test]
fn test_free_removes_exactly_one_set() {
    let mut pool = make_pool(vk::DescriptorPoolCreateFlags::FREE_DESCRIPTOR_SET);
    let sets = pool.allocate_batch(&layouts(4)).expect("batch");

    pool.free(sets[1]).expect("free");

    assert_eq!(pool.len(), 3);
    assert!(!pool.contains(sets[1]));
    for (i, set) in sets.iter().enumerate() {
        if i != 1 {
            assert!(pool.contains(*set));
            assert_eq!(
                pool.get(*set).map(|s| s.layout()),
                Some(vk::DescriptorSetLayout::from_raw(i as u64 + 1))
            );
        }
    }
}

#[test]
fn test_free_foreign_set_is_rejected() {
    let mut a = make_pool(vk::DescriptorPoolCreateFlags::FREE_DESCRIPTOR_SET);
    let mut b = make_pool(vk::DescriptorPoolCreateFlags::FREE_DESCRIPTOR_SET);
    let set_a = a.allocate(vk::DescriptorSetLayout::from_raw(1)).expect("allocate");
    let set_b = b.allocate(vk::DescriptorSetLayout::from_raw(1)).expect("allocate");

    match b.free(set_a) {
        Err(DriverError::ContractViolation(Violation::NotOwned { set, .. })) => {
            assert_eq!(set, set_a.as_raw());
        }
        other => panic!("expected NotOwned, got {:?}", other),
    }
    assert!(a.contains(set_a));
    assert!(b.contains(set_b));
}

#[test]
fn test_double_free_is_rejected() {
    let mut pool = make_pool(vk::DescriptorPoolCreateFlags::FREE_DESCRIPTOR_SET);
    let set = pool.allocate(vk::DescriptorSetLayout::from_raw(1)).expect("allocate");

    pool.free(set).expect("first free");
    assert!(matches!(
        pool.free(set),
        Err(DriverError::ContractViolation(Violation::NotOwned { .. }))
    ));
}

#[test]
fn test_reset_ignores_free_flag() {
    let mut pool = make_pool(vk::DescriptorPoolCreateFlags::empty());
    pool.allocate_batch(&layouts(3)).expect("batch");
    assert_eq!(pool.reset(), 3);
    assert_eq!(pool.reset(), 0);
}
