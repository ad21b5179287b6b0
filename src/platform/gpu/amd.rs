use crate::core::gpu_info::{GpuInfo, GpuVendor};
use crate::platform::command::{run_successful, CommandRunner};

use super::GpuProbe;

pub const ROCM_SMI: &str = "rocm-smi";

pub const ROCM_SMI_ARGS: [&str; 2] = ["--showid", "--showtemp"];

/// Name reported for any GPU rocm-smi lists
pub const AMD_GPU_NAME: &str = "AMD Radeon GPU";

/// AMD GPU strategy using rocm-smi
///
/// rocm-smi is only used as a presence check; memory and utilization are
/// reported as `N/A`.
#[derive(Debug, Default, Clone, Copy)]
pub struct AmdProbe;

impl AmdProbe {
    /// Detect an AMD GPU from rocm-smi's combined stdout/stderr
    pub fn detect(output: &str) -> Option<GpuInfo> {
        if output.contains("GPU") {
            Some(GpuInfo::placeholder(AMD_GPU_NAME))
        } else {
            log::debug!("rocm-smi output does not mention a GPU");
            None
        }
    }
}

impl GpuProbe for AmdProbe {
    fn vendor(&self) -> GpuVendor {
        GpuVendor::Amd
    }

    fn probe(&self, runner: &dyn CommandRunner) -> Option<GpuInfo> {
        let output = run_successful(runner, ROCM_SMI, &ROCM_SMI_ARGS)?;
        Self::detect(&output.combined())
    }
}
