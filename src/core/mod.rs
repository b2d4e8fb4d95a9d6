/*!
 * Core Module
 * Error handling and configuration shared by every container
 */

pub mod config;
pub mod errors;

// Re-export for convenience
pub use config::ListConfig;
pub use errors::*;
