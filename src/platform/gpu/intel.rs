use crate::core::gpu_info::{GpuInfo, GpuVendor};
use crate::platform::command::{run_successful, CommandRunner};

use super::GpuProbe;

pub const WMIC: &str = "wmic";

pub const WMIC_ARGS: [&str; 4] = ["path", "win32_videocontroller", "get", "name"];

pub const INTEL_GPU_NAME: &str = "Intel Integrated GPU";

/// Integrated GPU strategy using the Win32_VideoController inventory
///
/// Only Intel adapters are recognized. The adapter name is not parsed out of
/// the listing; a fixed name is reported with `N/A` for memory and
/// utilization.
#[derive(Debug, Default, Clone, Copy)]
pub struct IntegratedProbe;

impl IntegratedProbe {
    /// Detect an Intel adapter in the video controller listing
    pub fn detect(output: &str) -> Option<GpuInfo> {
        if output.contains("Intel") {
            Some(GpuInfo::placeholder(INTEL_GPU_NAME))
        } else {
            log::debug!("No Intel video controller listed");
            None
        }
    }
}

impl GpuProbe for IntegratedProbe {
    fn vendor(&self) -> GpuVendor {
        GpuVendor::Intel
    }

    fn probe(&self, runner: &dyn CommandRunner) -> Option<GpuInfo> {
        let output = run_successful(runner, WMIC, &WMIC_ARGS)?;
        Self::detect(&output.combined())
    }
}
