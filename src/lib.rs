// OhMyGpu Library - Public API

// Re-export error types
pub mod error;
pub use error::{GpuProbeError, Result};

// Module declarations
pub mod commands;
pub mod core;
pub mod platform;
pub mod ui;

// Re-export commonly used types
pub use crate::core::gpu_info::{GpuInfo, GpuVendor};
pub use crate::core::probe_chain::ProbeChain;
pub use crate::platform::command::{CommandOutput, CommandRunner, SystemCommandRunner};

// Initialize logging
//
// Defaults to warnings only so the report on stdout stays clean; RUST_LOG
// still applies, and `verbose` forces debug output.
pub fn init_logging(verbose: bool) {
    let mut builder = env_logger::Builder::new();
    builder.filter_level(log::LevelFilter::Warn).parse_default_env();

    if verbose {
        builder.filter_level(log::LevelFilter::Debug);
    }

    // Already initialized (tests, embedding) is fine
    let _ = builder.try_init();
}
