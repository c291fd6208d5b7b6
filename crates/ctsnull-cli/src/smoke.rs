//! `ctsnull smoke`: drive the null driver through its entry points and report
//! a pass/fail line per check.

use std::ffi::c_void;
use std::ptr;

use ash::vk;
use ash::vk::Handle;
use serde::Serialize;

use ctsnull_core::host_alloc;
use ctsnull_vk_icd::descriptor::*;
use ctsnull_vk_icd::device::vkGetDeviceQueue;
use ctsnull_vk_icd::handle_store;
use ctsnull_vk_icd::image::{vkCreateImage, vkDestroyImage, vkGetImageMemoryRequirements};
use ctsnull_vk_icd::memory::{vkAllocateMemory, vkFreeMemory, vkMapMemory, vkUnmapMemory};
use ctsnull_vk_icd::physical_device::{
    vkGetPhysicalDeviceMemoryProperties, vkGetPhysicalDeviceQueueFamilyProperties, HEAP_SIZE,
};
use ctsnull_vk_icd::proc_addr;
use ctsnull_vk_icd::sync::{vkCreateFence, vkDestroyFence, vkGetFenceStatus, vkQueueSubmit};
use ctsnull_vk_icd::vk_icdGetInstanceProcAddr;

use crate::session::Session;

// ── Check result types ──────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
enum CheckStatus {
    Pass,
    Fail,
}

#[derive(Debug, Serialize)]
struct CheckResult {
    name: String,
    status: CheckStatus,
    message: String,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    details: Vec<String>,
}

impl CheckResult {
    fn pass(name: &str, message: &str) -> Self {
        Self {
            name: name.to_string(),
            status: CheckStatus::Pass,
            message: message.to_string(),
            details: Vec::new(),
        }
    }

    fn fail(name: &str, message: &str) -> Self {
        Self {
            name: name.to_string(),
            status: CheckStatus::Fail,
            message: message.to_string(),
            details: Vec::new(),
        }
    }

    fn detail(mut self, detail: &str) -> Self {
        self.details.push(detail.to_string());
        self
    }

    fn from_outcome(name: &str, outcome: Result<String, String>) -> Self {
        match outcome {
            Ok(message) => Self::pass(name, &message),
            Err(message) => Self::fail(name, &message),
        }
    }
}

// ── Main entry point ────────────────────────────────────────

pub fn run(sets: u32, json: bool) -> anyhow::Result<()> {
    let session = Session::open()?;
    let mut results = vec![CheckResult::pass("Instance and device", "created")
        .detail(&format!("device {:#x}", session.device.as_raw()))];

    results.push(check_physical_device(&session));
    results.push(check_memory_map(&session));
    results.push(check_image_requirements(&session));
    results.push(check_descriptor_pool(&session, sets));
    results.push(check_batch_rollback(&session, sets));
    results.push(check_queue_submit(&session));
    results.push(check_proc_addr());
    drop(session);

    if json {
        println!("{}", serde_json::to_string(&results)?);
    } else {
        print_results_pretty(&results);
    }

    if results.iter().any(|r| r.status == CheckStatus::Fail) {
        std::process::exit(1);
    }
    Ok(())
}

fn expect(result: vk::Result, what: &str) -> Result<(), String> {
    if result == vk::Result::SUCCESS {
        Ok(())
    } else {
        Err(format!("{} returned {:?}", what, result))
    }
}

// ── Checks ──────────────────────────────────────────────────

fn check_physical_device(session: &Session) -> CheckResult {
    let outcome = (|| {
        let mut first = vk::PhysicalDeviceMemoryProperties::default();
        let mut second = vk::PhysicalDeviceMemoryProperties::default();
        unsafe {
            vkGetPhysicalDeviceMemoryProperties(session.physical_device, &mut first);
            vkGetPhysicalDeviceMemoryProperties(session.physical_device, &mut second);
        }
        if first.memory_type_count != 1 || first.memory_heap_count != 1 {
            return Err(format!(
                "{} memory types, {} heaps",
                first.memory_type_count, first.memory_heap_count
            ));
        }
        if first.memory_heaps[0].size != HEAP_SIZE || second.memory_heaps[0].size != HEAP_SIZE {
            return Err("heap size changed between queries".to_string());
        }

        let mut count = 0;
        let mut family = vk::QueueFamilyProperties::default();
        unsafe {
            vkGetPhysicalDeviceQueueFamilyProperties(session.physical_device, &mut count, ptr::null_mut());
            vkGetPhysicalDeviceQueueFamilyProperties(session.physical_device, &mut count, &mut family);
        }
        let wanted = vk::QueueFlags::GRAPHICS | vk::QueueFlags::COMPUTE;
        if count != 1 || family.queue_flags != wanted {
            return Err(format!("{} families, flags {:?}", count, family.queue_flags));
        }
        Ok("1 queue family, 1 memory type, 1 heap".to_string())
    })();
    CheckResult::from_outcome("Physical device", outcome)
}

fn check_memory_map(session: &Session) -> CheckResult {
    let device = session.device;
    let outcome = (|| {
        let info = vk::MemoryAllocateInfo::default().allocation_size(4096);
        let mut memory = vk::DeviceMemory::null();
        expect(
            unsafe { vkAllocateMemory(device, &info, ptr::null(), &mut memory) },
            "vkAllocateMemory",
        )?;

        let mut base: *mut c_void = ptr::null_mut();
        let mut at_offset: *mut c_void = ptr::null_mut();
        let mapped = unsafe {
            expect(
                vkMapMemory(device, memory, 0, vk::WHOLE_SIZE, vk::MemoryMapFlags::empty(), &mut base),
                "vkMapMemory",
            )
            .and_then(|()| {
                expect(
                    vkMapMemory(device, memory, 256, 64, vk::MemoryMapFlags::empty(), &mut at_offset),
                    "vkMapMemory",
                )
            })
        };
        unsafe {
            vkUnmapMemory(device, memory);
            vkFreeMemory(device, memory, ptr::null());
        }
        mapped?;

        if at_offset as usize != base as usize + 256 {
            return Err(format!("offset map at {:p}, base {:p}", at_offset, base));
        }
        Ok("map(offset) == base + offset".to_string())
    })();
    CheckResult::from_outcome("Memory map", outcome)
}

fn check_image_requirements(session: &Session) -> CheckResult {
    let device = session.device;
    let outcome = (|| {
        let info = vk::ImageCreateInfo::default()
            .image_type(vk::ImageType::TYPE_2D)
            .format(vk::Format::R8G8B8A8_UNORM)
            .extent(vk::Extent3D {
                width: 16,
                height: 16,
                depth: 1,
            })
            .mip_levels(1)
            .array_layers(1)
            .samples(vk::SampleCountFlags::TYPE_1);
        let mut image = vk::Image::null();
        expect(
            unsafe { vkCreateImage(device, &info, ptr::null(), &mut image) },
            "vkCreateImage",
        )?;

        let mut reqs = vk::MemoryRequirements::default();
        unsafe {
            vkGetImageMemoryRequirements(device, image, &mut reqs);
            vkDestroyImage(device, image, ptr::null());
        }
        if reqs.size != 1024 {
            return Err(format!("16x16 RGBA8 reported {} bytes", reqs.size));
        }
        Ok("16x16 RGBA8 = 1024 bytes".to_string())
    })();
    CheckResult::from_outcome("Image requirements", outcome)
}

struct PoolFixture {
    device: vk::Device,
    layout: vk::DescriptorSetLayout,
    pool: vk::DescriptorPool,
}

impl PoolFixture {
    fn new(device: vk::Device, flags: vk::DescriptorPoolCreateFlags) -> Result<Self, String> {
        let mut layout = vk::DescriptorSetLayout::null();
        expect(
            unsafe {
                vkCreateDescriptorSetLayout(
                    device,
                    &vk::DescriptorSetLayoutCreateInfo::default(),
                    ptr::null(),
                    &mut layout,
                )
            },
            "vkCreateDescriptorSetLayout",
        )?;
        let mut pool = vk::DescriptorPool::null();
        let info = vk::DescriptorPoolCreateInfo::default().flags(flags);
        let created = unsafe { vkCreateDescriptorPool(device, &info, ptr::null(), &mut pool) };
        let fixture = Self {
            device,
            layout,
            pool,
        };
        expect(created, "vkCreateDescriptorPool")?;
        Ok(fixture)
    }

    fn allocate(&self, n: u32) -> (vk::Result, Vec<vk::DescriptorSet>) {
        let layouts = vec![self.layout; n as usize];
        let info = vk::DescriptorSetAllocateInfo::default()
            .descriptor_pool(self.pool)
            .set_layouts(&layouts);
        let mut sets = vec![vk::DescriptorSet::null(); n as usize];
        let result = unsafe { vkAllocateDescriptorSets(self.device, &info, sets.as_mut_ptr()) };
        (result, sets)
    }

    fn owned(&self) -> usize {
        handle_store::desc_pools()
            .get(self.pool.as_raw(), |pool| pool.len())
            .unwrap_or(0)
    }
}

impl Drop for PoolFixture {
    fn drop(&mut self) {
        unsafe {
            vkDestroyDescriptorPool(self.device, self.pool, ptr::null());
            vkDestroyDescriptorSetLayout(self.device, self.layout, ptr::null());
        }
    }
}

fn check_descriptor_pool(session: &Session, sets: u32) -> CheckResult {
    let outcome = (|| {
        let fixture = PoolFixture::new(session.device, vk::DescriptorPoolCreateFlags::FREE_DESCRIPTOR_SET)?;
        let (result, handles) = fixture.allocate(sets);
        expect(result, "vkAllocateDescriptorSets")?;
        if fixture.owned() != sets as usize {
            return Err(format!("pool owns {} sets after allocating {}", fixture.owned(), sets));
        }

        if let Some(first) = handles.first() {
            expect(
                unsafe { vkFreeDescriptorSets(session.device, fixture.pool, 1, first) },
                "vkFreeDescriptorSets",
            )?;
            if fixture.owned() != sets as usize - 1 {
                return Err("free did not remove exactly one set".to_string());
            }
        }

        expect(
            unsafe {
                vkResetDescriptorPool(session.device, fixture.pool, vk::DescriptorPoolResetFlags::empty())
            },
            "vkResetDescriptorPool",
        )?;
        if fixture.owned() != 0 {
            return Err(format!("{} sets survived reset", fixture.owned()));
        }
        Ok(format!("allocated {}, freed 1, reset to 0", sets))
    })();
    CheckResult::from_outcome("Descriptor pool", outcome)
}

fn check_batch_rollback(session: &Session, sets: u32) -> CheckResult {
    let outcome = (|| {
        let fixture = PoolFixture::new(session.device, vk::DescriptorPoolCreateFlags::empty())?;
        let batch = sets.max(2);

        // The second set of the batch runs out of host memory.
        let (result, handles) = {
            let _fault = host_alloc::fail_after(2);
            fixture.allocate(batch)
        };

        if result != vk::Result::ERROR_OUT_OF_HOST_MEMORY {
            return Err(format!("expected ERROR_OUT_OF_HOST_MEMORY, got {:?}", result));
        }
        if fixture.owned() != 0 || handles.iter().any(|h| !h.is_null()) {
            return Err("partial batch left sets behind".to_string());
        }
        Ok(format!("batch of {} rolled back", batch))
    })();
    CheckResult::from_outcome("Batch rollback", outcome)
}

fn check_queue_submit(session: &Session) -> CheckResult {
    let device = session.device;
    let outcome = (|| {
        let mut queue = vk::Queue::null();
        unsafe { vkGetDeviceQueue(device, 0, 0, &mut queue) };
        if queue.is_null() {
            return Err("vkGetDeviceQueue returned null".to_string());
        }

        let mut fence = vk::Fence::null();
        expect(
            unsafe { vkCreateFence(device, &vk::FenceCreateInfo::default(), ptr::null(), &mut fence) },
            "vkCreateFence",
        )?;
        let before = unsafe { vkGetFenceStatus(device, fence) };
        let submitted = unsafe { vkQueueSubmit(queue, 0, ptr::null(), fence) };
        let after = unsafe { vkGetFenceStatus(device, fence) };
        unsafe { vkDestroyFence(device, fence, ptr::null()) };

        expect(submitted, "vkQueueSubmit")?;
        if before != vk::Result::NOT_READY || after != vk::Result::SUCCESS {
            return Err(format!("fence status {:?} -> {:?}", before, after));
        }
        Ok("submit signals the fence".to_string())
    })();
    CheckResult::from_outcome("Queue submit", outcome)
}

fn check_proc_addr() -> CheckResult {
    let mut total = 0;
    let unresolved: Vec<&str> = proc_addr::all_entry_points()
        .inspect(|_| total += 1)
        .filter(|name| {
            let c_name = std::ffi::CString::new(*name).unwrap_or_default();
            unsafe { vk_icdGetInstanceProcAddr(vk::Instance::null(), c_name.as_ptr()) }.is_none()
        })
        .collect();

    if unresolved.is_empty() {
        CheckResult::pass("Proc address", &format!("{} entry points resolve", total))
    } else {
        unresolved.iter().fold(
            CheckResult::fail("Proc address", &format!("{} unresolved", unresolved.len())),
            |result, name| result.detail(name),
        )
    }
}

// ── Output ──────────────────────────────────────────────────

fn print_results_pretty(results: &[CheckResult]) {
    println!();
    println!("ctsnull smoke checks");
    println!("====================");
    println!();

    let mut pass_count = 0u32;
    let mut fail_count = 0u32;

    for result in results {
        let (icon, color_start, color_end) = match result.status {
            CheckStatus::Pass => {
                pass_count += 1;
                ("[PASS]", "\x1b[32m", "\x1b[0m")
            }
            CheckStatus::Fail => {
                fail_count += 1;
                ("[FAIL]", "\x1b[31m", "\x1b[0m")
            }
        };

        println!(
            "  {}{}{} {} - {}",
            color_start, icon, color_end, result.name, result.message
        );
        for detail in &result.details {
            println!("         {}", detail);
        }
    }

    println!();
    println!("--------------------");
    println!("  {} passed, {} failed", pass_count, fail_count);
    println!();
}
