use crate::core::gpu_info::{GpuInfo, GpuVendor};
use crate::platform::command::{run_successful, CommandRunner};

use super::GpuProbe;

pub const NVIDIA_SMI: &str = "nvidia-smi";

pub const NVIDIA_SMI_ARGS: [&str; 2] = [
    "--query-gpu=name,memory.total,memory.used,utilization.gpu",
    "--format=csv,noheader",
];

/// NVIDIA GPU strategy using nvidia-smi
#[derive(Debug, Default, Clone, Copy)]
pub struct NvidiaProbe;

impl NvidiaProbe {
    /// Parse `name, memory.total, memory.used, utilization.gpu` CSV output
    ///
    /// The whole output is split on commas and the first four fields are
    /// trimmed and taken verbatim. Fewer than four fields means no GPU.
    pub fn parse_query_output(output: &str) -> Option<GpuInfo> {
        let fields: Vec<&str> = output.split(',').collect();

        if fields.len() < 4 {
            log::debug!(
                "nvidia-smi output has {} field(s), expected 4",
                fields.len()
            );
            return None;
        }

        Some(GpuInfo::new(
            fields[0].trim(),
            fields[1].trim(),
            fields[2].trim(),
            fields[3].trim(),
        ))
    }
}

impl GpuProbe for NvidiaProbe {
    fn vendor(&self) -> GpuVendor {
        GpuVendor::Nvidia
    }

    fn probe(&self, runner: &dyn CommandRunner) -> Option<GpuInfo> {
        let output = run_successful(runner, NVIDIA_SMI, &NVIDIA_SMI_ARGS)?;
        Self::parse_query_output(&output.stdout)
    }
}
