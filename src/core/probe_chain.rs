//! Ordered vendor detection.
//!
//! Strategies are tried in priority order and the first one that detects a
//! GPU wins; later strategies are never run.

use crate::core::gpu_info::{GpuInfo, GpuVendor};
use crate::platform::command::CommandRunner;
use crate::platform::gpu::{AmdProbe, GpuProbe, IntegratedProbe, NvidiaProbe};

/// Return the first `Some` produced by `f`, calling it on `items` in order.
///
/// `f` is not called again once a value is found.
pub fn first_some<I, T, F>(items: I, f: F) -> Option<T>
where
    I: IntoIterator,
    F: FnMut(I::Item) -> Option<T>,
{
    items.into_iter().find_map(f)
}

/// Vendor strategies in priority order
pub struct ProbeChain {
    probes: Vec<Box<dyn GpuProbe>>,
}

impl ProbeChain {
    pub fn new(probes: Vec<Box<dyn GpuProbe>>) -> Self {
        Self { probes }
    }

    /// NVIDIA, then AMD, then Intel integrated graphics
    pub fn windows_default() -> Self {
        let probes: Vec<Box<dyn GpuProbe>> = vec![
            Box::new(NvidiaProbe),
            Box::new(AmdProbe),
            Box::new(IntegratedProbe),
        ];
        Self::new(probes)
    }

    /// Vendors in the order they are tried
    pub fn vendors(&self) -> Vec<GpuVendor> {
        self.probes.iter().map(|probe| probe.vendor()).collect()
    }

    /// Run strategies until one detects a GPU
    pub fn detect(&self, runner: &dyn CommandRunner) -> Option<GpuInfo> {
        let detected = first_some(&self.probes, |probe| {
            let info = probe.probe(runner);
            match &info {
                Some(gpu) => log::debug!("{} probe detected {}", probe.vendor(), gpu.name),
                None => log::debug!("{} probe found nothing", probe.vendor()),
            }
            info
        });

        if detected.is_none() {
            log::debug!("No vendor probe detected a GPU");
        }

        detected
    }
}

impl Default for ProbeChain {
    fn default() -> Self {
        Self::windows_default()
    }
}
