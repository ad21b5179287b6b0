// Core detection logic module

pub mod gpu_info;
pub mod probe_chain;

// Re-export commonly used items
pub use gpu_info::{GpuInfo, GpuVendor, NOT_AVAILABLE};
pub use probe_chain::{first_some, ProbeChain};
