//! Main application modules.
//!
//! This module provides URL input reading, progress logging, shutdown handling
//! and statistics printing used by the run entry point and the binary.

pub mod input;
pub mod logging;
pub mod shutdown;
pub mod statistics;

// Re-export public API
pub use input::read_urls;
pub use logging::log_progress;
pub use shutdown::shutdown_gracefully;
pub use statistics::{print_error_statistics, print_summary};
