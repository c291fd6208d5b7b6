use ash::vk;

#[derive(Debug, thiserror::Error)]
pub enum DriverError {
    #[error("out of host memory: requested {requested} bytes")]
    OutOfHostMemory { requested: u64 },

    #[error("memory map failed: {0}")]
    MemoryMapFailed(String),

    #[error("invalid {kind} handle: {raw:#x}")]
    InvalidHandle { kind: &'static str, raw: u64 },

    #[error("contract violation: {0}")]
    ContractViolation(#[from] Violation),

    #[error("configuration error: {0}")]
    ConfigError(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Caller errors the Vulkan contract forbids. A conformant caller never
/// triggers these; the ABI boundary decides whether to report or abort.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum Violation {
    #[error("descriptor pool {pool:#x} was not created with FREE_DESCRIPTOR_SET")]
    FreeNotPermitted { pool: u64 },

    #[error("descriptor set {set:#x} is not owned by descriptor pool {pool:#x}")]
    NotOwned { pool: u64, set: u64 },
}

impl DriverError {
    pub fn out_of_host_memory(requested: u64) -> Self {
        Self::OutOfHostMemory { requested }
    }

    /// The result code reported for this error at the ABI boundary.
    pub fn to_vk_result(&self) -> vk::Result {
        match self {
            Self::OutOfHostMemory { .. } => vk::Result::ERROR_OUT_OF_HOST_MEMORY,
            Self::MemoryMapFailed(_) => vk::Result::ERROR_MEMORY_MAP_FAILED,
            Self::InvalidHandle { .. } | Self::ContractViolation(_) => vk::Result::ERROR_UNKNOWN,
            Self::ConfigError(_) | Self::Io(_) => vk::Result::ERROR_INITIALIZATION_FAILED,
        }
    }
}

impl From<toml::de::Error> for DriverError {
    fn from(e: toml::de::Error) -> Self {
        Self::ConfigError(e.to_string())
    }
}
