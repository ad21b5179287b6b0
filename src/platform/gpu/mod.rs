//! GPU-specific platform code.
//!
//! One strategy per vendor, each driving that vendor's command-line tool.
//! Supports NVIDIA (via nvidia-smi), AMD (via rocm-smi) and Intel integrated
//! graphics (via wmic).

mod amd;
mod intel;
mod nvidia;

pub use amd::{AmdProbe, AMD_GPU_NAME, ROCM_SMI, ROCM_SMI_ARGS};
pub use intel::{IntegratedProbe, INTEL_GPU_NAME, WMIC, WMIC_ARGS};
pub use nvidia::{NvidiaProbe, NVIDIA_SMI, NVIDIA_SMI_ARGS};

use crate::core::gpu_info::{GpuInfo, GpuVendor};
use crate::platform::command::CommandRunner;

/// A single vendor detection strategy
///
/// Implementations turn the output of their vendor tool into a [`GpuInfo`].
/// Any failure (tool missing, non-zero exit, unexpected output) is reported
/// as `None`, never as an error.
pub trait GpuProbe {
    /// Vendor this strategy detects
    fn vendor(&self) -> GpuVendor;

    /// Run the vendor tool through `runner` and interpret its output
    fn probe(&self, runner: &dyn CommandRunner) -> Option<GpuInfo>;
}
