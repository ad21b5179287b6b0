// Platform-specific code module

pub mod command;
pub mod gpu;

// Re-exports para imports limpios
pub use command::{CommandOutput, CommandRunner, SystemCommandRunner};
pub use gpu::{AmdProbe, GpuProbe, IntegratedProbe, NvidiaProbe};
