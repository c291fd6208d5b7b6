use std::ptr;

use anyhow::{bail, Context};
use ash::vk;

use ctsnull_vk_icd::device::{vkCreateDevice, vkDestroyDevice};
use ctsnull_vk_icd::instance::{vkCreateInstance, vkDestroyInstance, vkEnumeratePhysicalDevices};

/// An instance and a device on the null driver, torn down on drop.
pub struct Session {
    pub instance: vk::Instance,
    pub physical_device: vk::PhysicalDevice,
    pub device: vk::Device,
}

impl Session {
    pub fn open() -> anyhow::Result<Self> {
        let mut instance = vk::Instance::null();
        unsafe { vkCreateInstance(&vk::InstanceCreateInfo::default(), ptr::null(), &mut instance) }
            .result()
            .context("vkCreateInstance")?;

        let mut count = 1;
        let mut physical_device = vk::PhysicalDevice::null();
        let enumerated =
            unsafe { vkEnumeratePhysicalDevices(instance, &mut count, &mut physical_device) };
        if enumerated != vk::Result::SUCCESS || count != 1 {
            unsafe { vkDestroyInstance(instance, ptr::null()) };
            bail!("vkEnumeratePhysicalDevices: {:?}, count {}", enumerated, count);
        }

        let priorities = [1.0f32];
        let queue_info = [vk::DeviceQueueCreateInfo::default()
            .queue_family_index(0)
            .queue_priorities(&priorities)];
        let device_info = vk::DeviceCreateInfo::default().queue_create_infos(&queue_info);
        let mut device = vk::Device::null();
        let created = unsafe { vkCreateDevice(physical_device, &device_info, ptr::null(), &mut device) };
        if created != vk::Result::SUCCESS {
            unsafe { vkDestroyInstance(instance, ptr::null()) };
            bail!("vkCreateDevice: {:?}", created);
        }

        Ok(Self {
            instance,
            physical_device,
            device,
        })
    }
}

impl Drop for Session {
    fn drop(&mut self) {
        unsafe {
            vkDestroyDevice(self.device, ptr::null());
            vkDestroyInstance(self.instance, ptr::null());
        }
    }
}
