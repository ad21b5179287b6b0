use serde::Serialize;
use std::fmt;

/// Sentinel shown for fields a vendor strategy cannot read
pub const NOT_AVAILABLE: &str = "N/A";

/// Attributes of the detected GPU, as display strings
///
/// Values are taken verbatim from the vendor tool (e.g. `"8192 MiB"`, `"35 %"`);
/// nothing is parsed into numbers or normalized.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GpuInfo {
    pub name: String,
    pub total_memory: String,
    pub used_memory: String,
    pub utilization: String,
}

impl GpuInfo {
    pub fn new(
        name: impl Into<String>,
        total_memory: impl Into<String>,
        used_memory: impl Into<String>,
        utilization: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            total_memory: total_memory.into(),
            used_memory: used_memory.into(),
            utilization: utilization.into(),
        }
    }

    /// GPU known only by name; memory and utilization are `N/A`
    pub fn placeholder(name: impl Into<String>) -> Self {
        Self::new(name, NOT_AVAILABLE, NOT_AVAILABLE, NOT_AVAILABLE)
    }
}

/// Vendor strategy that produced a [`GpuInfo`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GpuVendor {
    Nvidia,
    Amd,
    Intel,
}

impl fmt::Display for GpuVendor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GpuVendor::Nvidia => write!(f, "NVIDIA"),
            GpuVendor::Amd => write!(f, "AMD"),
            GpuVendor::Intel => write!(f, "Intel"),
        }
    }
}
