// UI and formatting module

pub mod report;

// Re-export commonly used items for cleaner imports
pub use report::{render_json, render_report, report};
