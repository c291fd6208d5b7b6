//! Host-side model of the null Vulkan driver: stand-in objects, the handle
//! registry they live in, the descriptor pool, and the shared error and
//! configuration types.

pub mod config;
pub mod descriptor_pool;
pub mod error;
pub mod format;
pub mod host_alloc;
pub mod object;
pub mod registry;
pub mod txn;

pub use config::NullDriverConfig;
pub use descriptor_pool::{DescriptorPool, DescriptorSet};
pub use error::{DriverError, Violation};
pub use registry::HandleRegistry;
