use std::io;
use thiserror::Error;

/// Custom error type for the GPU probe
#[derive(Error, Debug)]
pub enum GpuProbeError {
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    #[error("Failed to run {program}: {source}")]
    Spawn {
        program: String,
        #[source]
        source: io::Error,
    },

    #[error("Serialization error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type alias for the GPU probe
pub type Result<T> = std::result::Result<T, GpuProbeError>;

impl GpuProbeError {
    /// Create a spawn error for `program`
    pub fn spawn<S: Into<String>>(program: S, source: io::Error) -> Self {
        GpuProbeError::Spawn {
            program: program.into(),
            source,
        }
    }
}
