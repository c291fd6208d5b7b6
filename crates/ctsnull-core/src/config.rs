use serde::{Deserialize, Serialize};

use crate::error::DriverError;

/// Environment variable naming an explicit config file.
pub const CONFIG_ENV: &str = "CTSNULL_CONFIG";

/// Top-level configuration, loaded from ctsnull.toml.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct NullDriverConfig {
    #[serde(default)]
    pub driver: DriverConfig,
    #[serde(default)]
    pub gl: GlConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DriverConfig {
    /// What to do when a caller breaks the API contract
    #[serde(default)]
    pub contract_violation: ViolationPolicy,
    /// Reject vkMapMemory ranges that run past the end of the allocation
    #[serde(default)]
    pub map_bounds_check: bool,
    /// Name reported in VkPhysicalDeviceProperties::deviceName
    #[serde(default = "default_device_name")]
    pub device_name: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GlConfig {
    /// GL entry points to wrap with a logging interceptor
    #[serde(default)]
    pub trace: Vec<String>,
}

/// Reaction to a contract violation detected at the ABI boundary.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum ViolationPolicy {
    /// Log at error level and return VK_ERROR_UNKNOWN (default)
    #[default]
    #[serde(rename = "report")]
    Report,
    /// Log and abort the process
    #[serde(rename = "abort")]
    Abort,
}

impl Default for DriverConfig {
    fn default() -> Self {
        Self {
            contract_violation: ViolationPolicy::default(),
            map_bounds_check: false,
            device_name: default_device_name(),
        }
    }
}

fn default_device_name() -> String {
    "null".to_string()
}

impl NullDriverConfig {
    /// Load configuration from a TOML file.
    pub fn load(path: &str) -> Result<Self, DriverError> {
        let content = std::fs::read_to_string(path)?;
        Self::parse(&content)
    }

    pub fn parse(content: &str) -> Result<Self, DriverError> {
        let config: NullDriverConfig = toml::from_str(content)?;
        Ok(config)
    }

    /// Load configuration from file if it exists, otherwise return defaults.
    pub fn load_or_default(path: &str) -> Self {
        match Self::load(path) {
            Ok(config) => config,
            Err(DriverError::Io(_)) => Self::default(),
            Err(e) => {
                tracing::warn!("ignoring config {}: {}", path, e);
                Self::default()
            }
        }
    }

    /// Load from `$CTSNULL_CONFIG` if set, else from [`default_config_path`].
    pub fn from_env() -> Self {
        let path = std::env::var(CONFIG_ENV).unwrap_or_else(|_| default_config_path());
        Self::load_or_default(&path)
    }
}

/// Returns the default config file path based on platform conventions.
/// Search order:
/// 1. System-wide config: `%PROGRAMDATA%\ctsnull\ctsnull.toml` (Windows) or `/etc/ctsnull/ctsnull.toml`
/// 2. Local fallback: `./ctsnull.toml`
pub fn default_config_path() -> String {
    #[cfg(windows)]
    {
        let programdata = std::env::var("PROGRAMDATA")
            .unwrap_or_else(|_| r"C:\ProgramData".to_string());
        let system_path = format!(r"{}\ctsnull\ctsnull.toml", programdata);
        if std::path::Path::new(&system_path).exists() {
            return system_path;
        }
    }
    #[cfg(not(windows))]
    {
        let system_path = "/etc/ctsnull/ctsnull.toml";
        if std::path::Path::new(system_path).exists() {
            return system_path.to_string();
        }
    }
    "ctsnull.toml".to_string()
}
