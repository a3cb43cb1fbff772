//! Utility modules for common functionality

pub mod sanitizers;

// Re-export commonly used functions
pub use sanitizers::sanitize_for_filename;
