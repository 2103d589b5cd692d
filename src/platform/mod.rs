// Platform classification
//
// This module maps the raw operating-environment identifier to the small
// closed set of execution environments the launchers support.

pub mod detection;
pub mod types;

// Re-exports
pub use detection::{classify, resolve};
pub use types::PlatformClass;
