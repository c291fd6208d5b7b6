//! ctsnull Vulkan ICD (Installable Client Driver)
//!
//! A null Vulkan implementation: every entry point is backed by host-side
//! stand-in objects and nothing ever reaches a GPU. Test harnesses load it
//! to exercise their own code paths on machines without Vulkan hardware.

use std::ffi::{c_char, CStr};
use std::sync::{Once, OnceLock};

use ash::vk;
use tracing::{debug, error, warn};

use ctsnull_core::config::ViolationPolicy;
use ctsnull_core::{DriverError, NullDriverConfig};

pub mod command;
pub mod descriptor;
pub mod device;
pub mod dispatch;
pub mod handle_store;
pub mod image;
pub mod instance;
pub mod memory;
pub mod physical_device;
pub mod pipeline;
pub mod proc_addr;
pub mod renderpass;
pub mod sync;

/// Highest loader/ICD interface version this driver speaks.
pub const MAX_ICD_INTERFACE_VERSION: u32 = 5;

// ── Configuration and logging ───────────────────────────────

static CONFIG: OnceLock<NullDriverConfig> = OnceLock::new();
static LOGGING: Once = Once::new();

/// Driver configuration, read once from `$CTSNULL_CONFIG` or ctsnull.toml.
pub fn config() -> &'static NullDriverConfig {
    CONFIG.get_or_init(NullDriverConfig::from_env)
}

pub(crate) fn ensure_logging() {
    LOGGING.call_once(|| {
        ctsnull_common::try_init_logging();
    });
}

// ── Result conversion ───────────────────────────────────────

/// Convert an internal error into the result code returned to the caller.
///
/// Contract violations are logged at error level and, when configured,
/// abort the process.
pub(crate) fn report(err: DriverError) -> vk::Result {
    match &err {
        DriverError::ContractViolation(violation) => {
            error!("API contract violation: {}", violation);
            if config().driver.contract_violation == ViolationPolicy::Abort {
                std::process::abort();
            }
        }
        DriverError::InvalidHandle { .. } => warn!("{}", err),
        _ => debug!("{}", err),
    }
    err.to_vk_result()
}

pub(crate) fn vk_result(result: Result<(), DriverError>) -> vk::Result {
    match result {
        Ok(()) => vk::Result::SUCCESS,
        Err(e) => report(e),
    }
}

// ── ICD Negotiation ─────────────────────────────────────────

/// Negotiate the ICD interface version with the Vulkan loader.
#[no_mangle]
pub unsafe extern "C" fn vk_icdNegotiateLoaderICDInterfaceVersion(
    p_supported_version: *mut u32,
) -> vk::Result {
    ensure_logging();
    if p_supported_version.is_null() {
        return vk::Result::ERROR_INITIALIZATION_FAILED;
    }
    let requested = unsafe { *p_supported_version };
    let agreed = std::cmp::min(requested, MAX_ICD_INTERFACE_VERSION);
    unsafe { *p_supported_version = agreed };
    debug!("negotiated ICD interface version {}", agreed);
    vk::Result::SUCCESS
}

/// Returns function pointers for Vulkan functions.
/// The Vulkan loader calls this to resolve all Vulkan entry points.
#[no_mangle]
pub unsafe extern "C" fn vk_icdGetInstanceProcAddr(
    _instance: vk::Instance,
    p_name: *const c_char,
) -> vk::PFN_vkVoidFunction {
    let name = unsafe { read_name(p_name) }?;
    proc_addr::lookup(name, proc_addr::Scope::Instance)
}

/// Returns function pointers for physical device functions the loader
/// does not know about.
#[no_mangle]
pub unsafe extern "C" fn vk_icdGetPhysicalDeviceProcAddr(
    _instance: vk::Instance,
    p_name: *const c_char,
) -> vk::PFN_vkVoidFunction {
    let name = unsafe { read_name(p_name) }?;
    if !name.starts_with("vkGetPhysicalDevice") {
        return None;
    }
    proc_addr::lookup(name, proc_addr::Scope::Instance)
}

pub(crate) unsafe fn read_name<'a>(p_name: *const c_char) -> Option<&'a str> {
    if p_name.is_null() {
        return None;
    }
    unsafe { CStr::from_ptr(p_name) }.to_str().ok()
}
