// Command handlers module
pub mod probe;
pub mod version;

// Re-exports for cleaner imports
pub use probe::execute as probe;
pub use version::execute as version;
